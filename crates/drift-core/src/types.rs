//! Common types for Drift
//!
//! Small value types shared between the document seam, the lifecycle
//! controller and the rendering layers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Well-known id of the single portal mounting node
pub const PORTAL_ROOT_ID: &str = "drift-portal-root";

/// Root attribute written by the theme store (`data-theme="light"`)
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Edge of the viewport a drawer slides in from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Left,
    #[default]
    Right,
    Top,
    Bottom,
}

impl Position {
    /// All positions in display order
    pub const ALL: [Position; 4] = [
        Position::Left,
        Position::Right,
        Position::Top,
        Position::Bottom,
    ];

    /// Lowercase name, matches the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            Position::Left => "left",
            Position::Right => "right",
            Position::Top => "top",
            Position::Bottom => "bottom",
        }
    }

    /// True for drawers that slide horizontally (left/right)
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Position::Left | Position::Right)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a drawer position string is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown drawer position: {0:?} (expected left, right, top or bottom)")]
pub struct PositionParseError(pub String);

impl FromStr for Position {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Position::Left),
            "right" => Ok(Position::Right),
            "top" => Ok(Position::Top),
            "bottom" => Ok(Position::Bottom),
            _ => Err(PositionParseError(s.to_string())),
        }
    }
}

/// Handle to an element owned by a host document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// Handle to a registered key-up listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Keys the host reports on key-up
///
/// Only Escape carries meaning for the core; everything else is passed
/// through so listeners can ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Character(String),
    Other,
}

/// Body-level style flags the core toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyFlag {
    /// Background scrolling suppressed (`overflow: hidden` on a DOM body)
    ScrollLock,
}

/// Media queries a host can answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaQuery {
    /// `(prefers-color-scheme: dark)`
    PrefersDarkScheme,
    /// `(pointer: coarse)`
    CoarsePointer,
}
