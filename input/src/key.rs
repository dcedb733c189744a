use crate::ParseError;
use anyhow::Result;

/// Keys the scene machine reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Space,
    Enter,
    /// Use the selected move
    Z,
    /// Cancel
    X,
}

impl Key {
    pub const ALL: [Key; 8] = [
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::Space,
        Key::Enter,
        Key::Z,
        Key::X,
    ];

    /// Arrow keys
    pub fn is_arrow(&self) -> bool {
        matches!(self, Key::Up | Key::Down | Key::Left | Key::Right)
    }

    /// Keys that confirm a selection
    pub fn is_confirm(&self) -> bool {
        matches!(self, Key::Space | Key::Enter)
    }

    /// Serialize to the name used in key scripts
    pub fn as_str(&self) -> &'static str {
        match self {
            Key::Up => "up",
            Key::Down => "down",
            Key::Left => "left",
            Key::Right => "right",
            Key::Space => "space",
            Key::Enter => "enter",
            Key::Z => "z",
            Key::X => "x",
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Key {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_key(s)
    }
}

/// Parse a key name (case-insensitive, accepts DOM-style arrow names)
pub fn parse_key(name: &str) -> Result<Key> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ParseError::EmptyInput.into());
    }

    let key = match name.to_lowercase().as_str() {
        "up" | "arrowup" => Key::Up,
        "down" | "arrowdown" => Key::Down,
        "left" | "arrowleft" => Key::Left,
        "right" | "arrowright" => Key::Right,
        "space" => Key::Space,
        "enter" | "return" => Key::Enter,
        "z" => Key::Z,
        "x" => Key::X,
        _ => return Err(ParseError::UnknownKey(name.to_string()).into()),
    };

    Ok(key)
}
