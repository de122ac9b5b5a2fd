//! RPG-ME — character seeds
//!
//! A character is nine single-digit traits plus a few display flags. The
//! traits travel as a 9-digit seed in a share URL; this crate encodes and
//! decodes that seed, reads the URL parameters and builds share links.

pub mod character;
pub mod config;
pub mod error;
pub mod link;
pub mod seed;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use character::{Character, DisplayFlags, FieldUpdate, Hat, TraitField, TraitVector};
pub use config::{CustomizerConfig, FieldRange, TraitBounds};
pub use error::{ConfigError, CustomizerError, SeedError};
pub use link::{parse_flag, QueryParams, ShareLink};
pub use seed::{decode, encode, DecodeOutcome, Decoded, SEED_LEN};
