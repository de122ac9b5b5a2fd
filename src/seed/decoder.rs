//! Seed decoding — seed string and URL parameters back into a character

use super::SEED_LEN;
use crate::character::{Character, Hat, TraitVector};
use crate::error::SeedError;
use crate::link::{parse_flag, QueryParams};
use log::{debug, warn};
use serde::Serialize;

/// What happened to the trait vector during a decode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum DecodeOutcome {
    /// The seed was read into the trait vector
    Applied,
    /// Wrong length; traits left as they were
    Skipped { len: usize },
    /// Right length but not all digits; traits left as they were
    Rejected {
        #[serde(serialize_with = "as_message")]
        error: SeedError,
    },
}

impl DecodeOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, DecodeOutcome::Applied)
    }
}

fn as_message<S: serde::Serializer>(error: &SeedError, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&error.to_string())
}

/// Result of decoding a character
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub character: Character,
    pub outcome: DecodeOutcome,
}

/// Read a seed into a trait vector, keeping `prior` when the seed is unusable
pub fn decode_traits(seed: &str, prior: &TraitVector) -> (TraitVector, DecodeOutcome) {
    match TraitVector::from_seed(seed) {
        Ok(traits) => {
            debug!("Decoded seed {} into {:?}", seed, traits.values());
            (traits, DecodeOutcome::Applied)
        }
        Err(SeedError::WrongLength { len }) => {
            debug!("Seed {:?} has length {}, expected {}; keeping traits", seed, len, SEED_LEN);
            (*prior, DecodeOutcome::Skipped { len })
        }
        Err(error) => {
            warn!("Ignoring seed {:?}: {}", seed, error);
            (*prior, DecodeOutcome::Rejected { error })
        }
    }
}

/// Apply share-URL parameters to a character
///
/// 1. `seed` replaces the character's seed string.
/// 2. `hat` is copied verbatim; `fire`, `literalseed`, `walking` and `circle`
///    are true only for the exact text `"true"`. Absent parameters keep the
///    prior value.
/// 3. The (possibly replaced) seed is decoded into the traits when it has
///    exactly nine characters.
pub fn decode(prior: &Character, params: &QueryParams) -> Decoded {
    let seed = params.get("seed").unwrap_or(prior.seed.as_str()).to_string();

    let mut flags = prior.flags.clone();
    if let Some(hat) = params.get("hat") {
        flags.hat = Hat::from(hat);
    }
    if let Some(v) = params.get("fire") {
        flags.fire = parse_flag(v);
    }
    if let Some(v) = params.get("literalseed") {
        flags.literal_seed = parse_flag(v);
    }
    if let Some(v) = params.get("walking") {
        flags.walking = parse_flag(v);
    }
    if let Some(v) = params.get("circle") {
        flags.circle = parse_flag(v);
    }

    let (traits, outcome) = decode_traits(&seed, &prior.traits);
    Decoded {
        character: Character { traits, flags, seed },
        outcome,
    }
}
