//! Defender typings (one or two distinct types)

use thiserror::Error;

use super::pokemon_type::Type;

/// Errors raised when building a typing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypingError {
    #[error("A typing needs at least one type")]
    Empty,

    #[error("A typing holds at most two types, got {0}")]
    TooMany(usize),

    #[error("Duplicate type in typing: {0}")]
    Duplicate(Type),

    #[error("Unknown type: {0}")]
    UnknownType(String),
}

/// The one or two types of a battling entity
///
/// Always non-empty and free of duplicates. Order is kept for display
/// (primary type first) but does not affect effectiveness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Type>", into = "Vec<Type>"))]
pub struct DefenderTypes {
    primary: Type,
    secondary: Option<Type>,
}

impl DefenderTypes {
    /// Mono-typed
    pub const fn single(primary: Type) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    /// Dual-typed. Fails if both types are the same.
    pub fn dual(primary: Type, secondary: Type) -> Result<Self, TypingError> {
        if primary == secondary {
            return Err(TypingError::Duplicate(secondary));
        }
        Ok(Self {
            primary,
            secondary: Some(secondary),
        })
    }

    pub fn primary(&self) -> Type {
        self.primary
    }

    pub fn secondary(&self) -> Option<Type> {
        self.secondary
    }

    pub fn is_dual(&self) -> bool {
        self.secondary.is_some()
    }

    pub fn contains(&self, t: Type) -> bool {
        self.primary == t || self.secondary == Some(t)
    }

    pub fn len(&self) -> usize {
        if self.is_dual() { 2 } else { 1 }
    }

    /// Always false; kept for symmetry with `len`
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over the types, primary first
    pub fn iter(&self) -> impl Iterator<Item = Type> + '_ {
        std::iter::once(self.primary).chain(self.secondary)
    }

    pub fn to_vec(&self) -> Vec<Type> {
        self.iter().collect()
    }
}

impl From<Type> for DefenderTypes {
    fn from(t: Type) -> Self {
        Self::single(t)
    }
}

impl TryFrom<&[Type]> for DefenderTypes {
    type Error = TypingError;

    fn try_from(types: &[Type]) -> Result<Self, Self::Error> {
        match types {
            [] => Err(TypingError::Empty),
            [a] => Ok(Self::single(*a)),
            [a, b] => Self::dual(*a, *b),
            _ => Err(TypingError::TooMany(types.len())),
        }
    }
}

impl TryFrom<Vec<Type>> for DefenderTypes {
    type Error = TypingError;

    fn try_from(types: Vec<Type>) -> Result<Self, Self::Error> {
        Self::try_from(types.as_slice())
    }
}

impl From<DefenderTypes> for Vec<Type> {
    fn from(types: DefenderTypes) -> Self {
        types.to_vec()
    }
}

impl std::fmt::Display for DefenderTypes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.secondary {
            Some(second) => write!(f, "{}/{}", self.primary, second),
            None => write!(f, "{}", self.primary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_and_dual() {
        let mono = DefenderTypes::single(Type::Water);
        assert_eq!(mono.len(), 1);
        assert!(mono.contains(Type::Water));
        assert!(!mono.is_dual());

        let dual = DefenderTypes::dual(Type::Water, Type::Ground).unwrap();
        assert_eq!(dual.to_vec(), vec![Type::Water, Type::Ground]);
        assert_eq!(dual.to_string(), "Water/Ground");
    }

    #[test]
    fn test_duplicate_rejected() {
        assert_eq!(
            DefenderTypes::dual(Type::Fire, Type::Fire),
            Err(TypingError::Duplicate(Type::Fire))
        );
    }

    #[test]
    fn test_try_from_slice() {
        let empty: &[Type] = &[];
        assert_eq!(DefenderTypes::try_from(empty), Err(TypingError::Empty));

        let three = [Type::Fire, Type::Water, Type::Grass];
        assert_eq!(
            DefenderTypes::try_from(&three[..]),
            Err(TypingError::TooMany(3))
        );

        let two = [Type::Ghost, Type::Poison];
        let typing = DefenderTypes::try_from(&two[..]).unwrap();
        assert_eq!(typing.primary(), Type::Ghost);
        assert_eq!(typing.secondary(), Some(Type::Poison));
    }
}
