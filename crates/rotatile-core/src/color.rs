#![forbid(unsafe_code)]

//! Tile colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::grid::GridError;

/// A tile color. Only identity matters; there is no ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Yellow,
    Blue,
    /// Placeholder for an empty slot.
    None,
}

impl Color {
    /// Every variant, in palette order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Yellow, Color::Blue, Color::None];

    /// One-letter form used by text fixtures and the harness.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Yellow => 'Y',
            Color::Blue => 'B',
            Color::None => '.',
        }
    }

    /// Parse the one-letter form (case-insensitive).
    #[must_use]
    pub fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'R' => Some(Color::Red),
            'Y' => Some(Color::Yellow),
            'B' => Some(Color::Blue),
            '.' => Some(Color::None),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Color {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Color::from_letter(ch).ok_or(GridError::UnknownColor(ch)),
            _ => Err(GridError::UnknownColor(s.chars().next().unwrap_or(' '))),
        }
    }
}
