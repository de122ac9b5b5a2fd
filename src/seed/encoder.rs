//! Seed encoding — trait vector to seed string

use crate::character::TraitVector;

/// Concatenate the decimal form of every trait, in seed order, with no separator
///
/// No clamping happens here. A field above 9 yields a longer string, which the
/// decoder will later skip because of its length.
pub fn encode(traits: &TraitVector) -> String {
    traits.values().iter().map(|v| v.to_string()).collect()
}
