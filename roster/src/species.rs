use gridmon_battle::{BaseStats, DefenderTypes, PokemonData};
use serde::{Deserialize, Serialize};

const SPRITE_BASE: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// A fighter that can be picked or fought
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    /// National dex number
    pub id: u16,
    pub name: String,
    pub types: DefenderTypes,
    pub base_stats: BaseStats,
    pub sprite_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animated_url: Option<String>,
}

impl Species {
    /// Species with the default sprite locations for its dex number
    pub fn new(id: u16, name: impl Into<String>, types: DefenderTypes, base_stats: BaseStats) -> Self {
        Self {
            id,
            name: name.into(),
            types,
            base_stats,
            sprite_url: format!("{SPRITE_BASE}/{id}.png"),
            animated_url: Some(format!(
                "{SPRITE_BASE}/versions/generation-v/black-white/animated/{id}.gif"
            )),
        }
    }

    /// Texture key the renderer registers this species under
    pub fn sprite_key(&self) -> String {
        sprite_key(&self.name)
    }

    pub fn icon_url(&self) -> String {
        icon_url(self.id)
    }

    /// Dex number as shown on the preview panel, e.g. `#025`
    pub fn dex_label(&self) -> String {
        format!("#{:03}", self.id)
    }

    pub fn to_pokemon_data(&self) -> PokemonData {
        PokemonData::new(self.id, self.name.clone(), self.types, self.base_stats)
    }
}

/// `pokemon-<lowercase name>`
pub fn sprite_key(name: &str) -> String {
    format!("pokemon-{}", name.to_lowercase())
}

/// Small menu icon for a dex number
pub fn icon_url(id: u16) -> String {
    format!("{SPRITE_BASE}/versions/generation-viii/icons/{id}.png")
}
