//! Observational marker applied when an agent enters DECIDING.

use std::fmt;

/// Colour tag identifying which strategy an agent runs.
///
/// Purely observational: nothing in the state machine reads it back.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Marker {
    #[default]
    White,
    Red,
    Blue,
}

impl Marker {
    pub fn as_str(self) -> &'static str {
        match self {
            Marker::White => "white",
            Marker::Red   => "red",
            Marker::Blue  => "blue",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
