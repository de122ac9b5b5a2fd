//! Seed codec — the 9-digit share format of a character
//!
//! Encoding joins the nine trait digits in fixed order. Decoding reads a seed
//! plus the flag parameters of a share URL back into a character, and never
//! fails: malformed seeds leave the previous traits in place.

mod encoder;
mod decoder;

pub use encoder::encode;
pub use decoder::{decode, decode_traits, DecodeOutcome, Decoded};

/// Characters in a well-formed seed, one per trait
pub const SEED_LEN: usize = 9;
