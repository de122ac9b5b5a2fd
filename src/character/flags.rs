//! Display flags — presentation toggles carried outside the seed

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hat worn by the character
///
/// Names outside the known set are kept verbatim in `Other` and handed to the
/// renderer untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Hat {
    #[default]
    None,
    Bunny,
    Coffee,
    Construction,
    Cowboy,
    Education,
    Knight,
    Ninja,
    Party,
    Pirate,
    Watermelon,
    Other(String),
}

impl Hat {
    /// The selectable hats, in menu order
    pub const KNOWN: [Hat; 11] = [
        Hat::None,
        Hat::Bunny,
        Hat::Coffee,
        Hat::Construction,
        Hat::Cowboy,
        Hat::Education,
        Hat::Knight,
        Hat::Ninja,
        Hat::Party,
        Hat::Pirate,
        Hat::Watermelon,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Hat::None => "none",
            Hat::Bunny => "bunny",
            Hat::Coffee => "coffee",
            Hat::Construction => "construction",
            Hat::Cowboy => "cowboy",
            Hat::Education => "education",
            Hat::Knight => "knight",
            Hat::Ninja => "ninja",
            Hat::Party => "party",
            Hat::Pirate => "pirate",
            Hat::Watermelon => "watermelon",
            Hat::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Hat::Other(_))
    }
}

impl From<&str> for Hat {
    /// Exact, case-sensitive match against the known names
    fn from(name: &str) -> Self {
        Hat::KNOWN
            .into_iter()
            .find(|h| h.as_str() == name)
            .unwrap_or_else(|| Hat::Other(name.to_string()))
    }
}

impl From<String> for Hat {
    fn from(name: String) -> Self {
        Hat::from(name.as_str())
    }
}

impl From<Hat> for String {
    fn from(hat: Hat) -> Self {
        match hat {
            Hat::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Hat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-trait presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayFlags {
    pub hat: Hat,
    pub fire: bool,
    pub walking: bool,
    pub circle: bool,
    /// Hand the raw seed to the renderer instead of the individual traits
    pub literal_seed: bool,
    /// Render width and height in pixels
    pub size: u32,
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self {
            hat: Hat::None,
            fire: false,
            walking: false,
            circle: false,
            literal_seed: false,
            size: 300,
        }
    }
}
