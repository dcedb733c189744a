//! Base stats

/// Stat identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpAttack,
    SpDefense,
    Speed,
}

impl Stat {
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpAttack,
        Stat::SpDefense,
        Stat::Speed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Attack => "Attack",
            Stat::Defense => "Defense",
            Stat::SpAttack => "Sp. Atk",
            Stat::SpDefense => "Sp. Def",
            Stat::Speed => "Speed",
        }
    }
}

/// Species base stats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub sp_attack: u16,
    pub sp_defense: u16,
    pub speed: u16,
}

impl BaseStats {
    pub const fn new(
        hp: u16,
        attack: u16,
        defense: u16,
        sp_attack: u16,
        sp_defense: u16,
        speed: u16,
    ) -> Self {
        Self {
            hp,
            attack,
            defense,
            sp_attack,
            sp_defense,
            speed,
        }
    }

    /// Get a stat value
    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpAttack => self.sp_attack,
            Stat::SpDefense => self.sp_defense,
            Stat::Speed => self.speed,
        }
    }

    /// Set a stat value
    pub fn set(&mut self, stat: Stat, value: u16) {
        match stat {
            Stat::Hp => self.hp = value,
            Stat::Attack => self.attack = value,
            Stat::Defense => self.defense = value,
            Stat::SpAttack => self.sp_attack = value,
            Stat::SpDefense => self.sp_defense = value,
            Stat::Speed => self.speed = value,
        }
    }

    /// Raise one stat, saturating at `u16::MAX`
    pub fn boost(&mut self, stat: Stat, amount: u16) {
        self.set(stat, self.get(stat).saturating_add(amount));
    }

    /// Copy with every stat raised by `amount`
    pub fn boosted(&self, amount: u16) -> Self {
        let mut out = *self;
        for stat in Stat::ALL {
            out.boost(stat, amount);
        }
        out
    }

    /// Copy with every stat multiplied by `factor` (rounded, at least 1)
    pub fn scaled(&self, factor: f32) -> Self {
        let scale = |v: u16| ((v as f32 * factor).round() as u16).max(1);
        Self {
            hp: scale(self.hp),
            attack: scale(self.attack),
            defense: scale(self.defense),
            sp_attack: scale(self.sp_attack),
            sp_defense: scale(self.sp_defense),
            speed: scale(self.speed),
        }
    }

    /// Sum of all base stats
    pub fn total(&self) -> u32 {
        Stat::ALL.iter().map(|s| self.get(*s) as u32).sum()
    }

    /// Max HP at a level (no IVs or EVs)
    pub fn hp_at_level(&self, level: u8) -> u32 {
        let level = level as u32;
        (2 * self.hp as u32 * level) / 100 + level + 10
    }
}
