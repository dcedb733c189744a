//! Elemental types

use std::str::FromStr;

use super::typing::TypingError;

/// Elemental types (18 types as of Gen 6+)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl Type {
    /// Number of types
    pub const COUNT: usize = 18;

    /// All 18 types, in chart order
    pub const ALL: [Type; Type::COUNT] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Row/column index of this type in an effectiveness table
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parse from a type name (case-insensitive, surrounding whitespace ignored)
    pub fn from_name(s: &str) -> Option<Self> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
    }

    /// Canonical display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Type {
    type Err = TypingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Type::from_name(s).ok_or_else(|| TypingError::UnknownType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_from_name() {
        assert_eq!(Type::from_name("Fire"), Some(Type::Fire));
        assert_eq!(Type::from_name("fire"), Some(Type::Fire));
        assert_eq!(Type::from_name("FIRE"), Some(Type::Fire));
        assert_eq!(Type::from_name(" psychic "), Some(Type::Psychic));
        assert_eq!(Type::from_name("unknown"), None);
    }

    #[test]
    fn test_type_from_str_error() {
        let err = "sound".parse::<Type>().unwrap_err();
        assert_eq!(err, TypingError::UnknownType("sound".to_string()));
        assert_eq!("ghost".parse::<Type>().unwrap(), Type::Ghost);
    }

    #[test]
    fn test_type_as_str() {
        assert_eq!(Type::Fire.as_str(), "Fire");
        assert_eq!(Type::Psychic.to_string(), "Psychic");
        assert_eq!(Type::Normal.as_str(), "Normal");
    }

    #[test]
    fn test_all_types_match_indices() {
        assert_eq!(Type::all().len(), 18);
        assert_eq!(Type::all()[0], Type::Normal);
        assert_eq!(Type::all()[17], Type::Fairy);
        for (i, t) in Type::ALL.iter().enumerate() {
            assert_eq!(t.index(), i);
        }
    }
}
