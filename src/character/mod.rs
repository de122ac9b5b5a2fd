//! Character — traits, display flags and the seed that shares them
//!
//! A `Character` is a plain value. Every edit goes through
//! `Character::apply` and produces a new value with the seed re-derived, so
//! the host only has to store the latest one and re-render.

mod traits;
mod flags;
mod update;
mod render;

pub use traits::{TraitField, TraitVector};
pub use flags::{DisplayFlags, Hat};
pub use update::FieldUpdate;

use crate::config::CustomizerConfig;
use crate::link::QueryParams;
use crate::seed::{self, Decoded};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub traits: TraitVector,
    pub flags: DisplayFlags,
    /// Seed as last set: re-encoded after every trait edit, or taken verbatim
    /// from a share URL
    pub seed: String,
}

impl Default for Character {
    fn default() -> Self {
        Self::from_traits(TraitVector::default())
    }
}

impl Character {
    pub fn from_traits(traits: TraitVector) -> Self {
        Self {
            seed: seed::encode(&traits),
            traits,
            flags: DisplayFlags::default(),
        }
    }

    /// Fresh character using the configured defaults
    pub fn from_config(config: &CustomizerConfig) -> Self {
        let mut character = Self::from_traits(config.defaults);
        character.flags.size = config.default_size;
        character
    }

    /// Character a page load starts with: configured defaults overridden by
    /// the share parameters in `params`
    pub fn from_query(params: &QueryParams, config: &CustomizerConfig) -> Decoded {
        seed::decode(&Self::from_config(config), params)
    }

    /// True when the stored seed is exactly the encoding of the traits
    pub fn is_seed_in_sync(&self) -> bool {
        self.seed == seed::encode(&self.traits)
    }

    pub fn summary(&self) -> String {
        format!(
            "Character seed={} | hat={} | fire={} walking={} circle={} literalseed={} | size={}px",
            self.seed,
            self.flags.hat,
            self.flags.fire,
            self.flags.walking,
            self.flags.circle,
            self.flags.literal_seed,
            self.flags.size,
        )
    }
}
