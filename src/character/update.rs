//! Field updates — the single typed entry point for edits

use super::{Character, Hat, TraitField};
use crate::config::CustomizerConfig;
use crate::error::{ConfigError, CustomizerError};
use crate::link::parse_flag;
use crate::seed;
use log::debug;
use serde::{Deserialize, Serialize};

/// One edit to a character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldUpdate {
    Trait(TraitField, u8),
    Hat(Hat),
    Fire(bool),
    Walking(bool),
    Circle(bool),
    LiteralSeed(bool),
    Size(u32),
    /// Typed-in seed: decoded into the traits when well-formed
    Seed(String),
}

impl FieldUpdate {
    /// Turn a form control's name and raw value into an update
    ///
    /// Numeric inputs are clamped to the configured min/max, matching what
    /// the form's number inputs allow. Checkbox values follow the share-link
    /// rule: only `"true"` is true.
    pub fn from_input(
        name: &str,
        raw: &str,
        config: &CustomizerConfig,
    ) -> Result<Self, CustomizerError> {
        if let Some(field) = TraitField::from_name(name) {
            let range = config.bounds.get(field);
            range.validate(field.name())?;
            let clamped = range.clamp(parse_number(name, raw)?);
            let value = u8::try_from(clamped).map_err(|_| ConfigError::TraitTooLarge {
                field: field.name().to_string(),
                max: range.max,
            })?;
            return Ok(FieldUpdate::Trait(field, value));
        }
        match name {
            "size" => {
                config.size_range.validate("size")?;
                Ok(FieldUpdate::Size(config.size_range.clamp(parse_number(name, raw)?)))
            }
            "hat" => Ok(FieldUpdate::Hat(Hat::from(raw))),
            "fire" => Ok(FieldUpdate::Fire(parse_flag(raw))),
            "walking" => Ok(FieldUpdate::Walking(parse_flag(raw))),
            "circle" => Ok(FieldUpdate::Circle(parse_flag(raw))),
            "literalseed" | "literalSeed" => Ok(FieldUpdate::LiteralSeed(parse_flag(raw))),
            "seed" => Ok(FieldUpdate::Seed(raw.trim().to_string())),
            other => Err(CustomizerError::UnknownField(other.to_string())),
        }
    }
}

/// Number-input text to an integer; fractions round to nearest
fn parse_number(field: &str, raw: &str) -> Result<i64, CustomizerError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.round() as i64)
        .ok_or_else(|| CustomizerError::InvalidNumber {
            field: field.to_string(),
            raw: raw.to_string(),
        })
}

impl Character {
    /// New character with `update` applied and the seed brought up to date
    pub fn apply(&self, update: FieldUpdate) -> Character {
        debug!("Applying {:?}", update);
        let mut next = self.clone();
        match update {
            FieldUpdate::Trait(field, value) => {
                next.traits = next.traits.with(field, value);
                next.seed = seed::encode(&next.traits);
            }
            FieldUpdate::Hat(hat) => next.flags.hat = hat,
            FieldUpdate::Fire(on) => next.flags.fire = on,
            FieldUpdate::Walking(on) => next.flags.walking = on,
            FieldUpdate::Circle(on) => next.flags.circle = on,
            FieldUpdate::LiteralSeed(on) => next.flags.literal_seed = on,
            FieldUpdate::Size(px) => next.flags.size = px,
            FieldUpdate::Seed(raw) => {
                let (traits, _) = seed::decode_traits(&raw, &next.traits);
                next.traits = traits;
                next.seed = raw;
            }
        }
        next
    }

    /// Parse, clamp and apply a raw form edit
    pub fn apply_input(
        &self,
        name: &str,
        raw: &str,
        config: &CustomizerConfig,
    ) -> Result<Character, CustomizerError> {
        Ok(self.apply(FieldUpdate::from_input(name, raw, config)?))
    }
}
