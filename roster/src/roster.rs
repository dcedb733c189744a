use std::collections::HashSet;

use rand::Rng;

use crate::RosterError;
use crate::builtin::builtin_species;
use crate::species::Species;

/// Ordered, non-empty list of species with unique ids and names
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    species: Vec<Species>,
}

impl Roster {
    /// Validate and wrap a list of species
    pub fn new(species: Vec<Species>) -> Result<Self, RosterError> {
        if species.is_empty() {
            return Err(RosterError::Empty);
        }

        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        for s in &species {
            if !ids.insert(s.id) {
                return Err(RosterError::DuplicateId(s.id));
            }
            if !names.insert(s.name.to_lowercase()) {
                return Err(RosterError::DuplicateName(s.name.clone()));
            }
        }

        Ok(Self { species })
    }

    /// The twenty fighters shipped with the game
    pub fn builtin() -> Self {
        Self {
            species: builtin_species(),
        }
    }

    /// Load from a JSON array of species
    pub fn from_json(json: &str) -> Result<Self, RosterError> {
        let species: Vec<Species> = serde_json::from_str(json)?;
        Self::new(species)
    }

    pub fn to_json(&self) -> Result<String, RosterError> {
        Ok(serde_json::to_string_pretty(&self.species)?)
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    /// Always false; a roster is never empty
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Species> {
        self.species.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Species> {
        self.species.iter()
    }

    /// Find by name (case-insensitive)
    pub fn by_name(&self, name: &str) -> Option<&Species> {
        self.species
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    pub fn by_id(&self, id: u16) -> Option<&Species> {
        self.species.iter().find(|s| s.id == id)
    }

    /// Position of a species in select-screen order
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.species
            .iter()
            .position(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// Uniformly random species
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> &Species {
        &self.species[rng.gen_range(0..self.species.len())]
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridmon_battle::{BaseStats, DefenderTypes, Type};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn species(id: u16, name: &str) -> Species {
        Species::new(
            id,
            name,
            DefenderTypes::single(Type::Normal),
            BaseStats::new(50, 50, 50, 50, 50, 50),
        )
    }

    #[test]
    fn test_lookup_by_name_and_id() {
        let roster = Roster::builtin();
        assert_eq!(roster.by_name("gengar").map(|s| s.id), Some(94));
        assert_eq!(roster.by_name("GENGAR").map(|s| s.id), Some(94));
        assert_eq!(roster.by_id(658).map(|s| s.name.as_str()), Some("Greninja"));
        assert!(roster.by_name("Missingno").is_none());
        assert!(roster.by_id(0).is_none());
        assert_eq!(roster.index_of("charizard"), Some(1));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(Roster::new(vec![]), Err(RosterError::Empty)));
    }

    #[test]
    fn test_duplicates_rejected() {
        let dup_id = vec![species(1, "A"), species(1, "B")];
        assert!(matches!(Roster::new(dup_id), Err(RosterError::DuplicateId(1))));

        let dup_name = vec![species(1, "Eevee"), species(2, "eevee")];
        assert!(matches!(
            Roster::new(dup_name),
            Err(RosterError::DuplicateName(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let roster = Roster::builtin();
        let json = roster.to_json().unwrap();
        assert_eq!(Roster::from_json(&json).unwrap(), roster);
    }

    #[test]
    fn test_json_rejects_bad_typing() {
        let json = r#"[{
            "id": 1,
            "name": "Glitch",
            "types": ["fire", "fire"],
            "base_stats": {"hp": 1, "attack": 1, "defense": 1, "sp_attack": 1, "sp_defense": 1, "speed": 1},
            "sprite_url": "glitch.png"
        }]"#;
        assert!(matches!(Roster::from_json(json), Err(RosterError::Json(_))));

        let empty_types = json.replace(r#"["fire", "fire"]"#, "[]");
        assert!(matches!(Roster::from_json(&empty_types), Err(RosterError::Json(_))));

        let ok = json.replace(r#"["fire", "fire"]"#, r#"["fire", "flying"]"#);
        let roster = Roster::from_json(&ok).unwrap();
        assert_eq!(roster.get(0).unwrap().animated_url, None);
    }

    #[test]
    fn test_random_is_seeded() {
        let roster = Roster::builtin();
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(roster.random(&mut a).id, roster.random(&mut b).id);
        }
    }
}
