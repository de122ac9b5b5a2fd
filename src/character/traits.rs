//! TraitVector — the nine numeric customization axes of a character
//!
//! Field order is fixed and defines the seed layout: position `i` of a seed
//! holds the digit of `TraitField::ALL[i]`.

use crate::config::TraitBounds;
use crate::error::{ConfigError, SeedError};
use crate::seed::SEED_LEN;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One trait axis, listed in seed order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TraitField {
    Accessories,
    Base,
    Face,
    FaceItem,
    Hair,
    Pants,
    Shirt,
    Skin,
    HatColor,
}

impl TraitField {
    /// Every field in seed order
    pub const ALL: [TraitField; SEED_LEN] = [
        TraitField::Accessories,
        TraitField::Base,
        TraitField::Face,
        TraitField::FaceItem,
        TraitField::Hair,
        TraitField::Pants,
        TraitField::Shirt,
        TraitField::Skin,
        TraitField::HatColor,
    ];

    /// Property name used by the customizer form and JSON
    pub fn name(self) -> &'static str {
        match self {
            TraitField::Accessories => "accessories",
            TraitField::Base => "base",
            TraitField::Face => "face",
            TraitField::FaceItem => "faceItem",
            TraitField::Hair => "hair",
            TraitField::Pants => "pants",
            TraitField::Shirt => "shirt",
            TraitField::Skin => "skin",
            TraitField::HatColor => "hatColor",
        }
    }

    /// HTML attribute name on the character element (attributes are lower-case)
    pub fn attribute(self) -> &'static str {
        match self {
            TraitField::FaceItem => "faceitem",
            TraitField::HatColor => "hatcolor",
            other => other.name(),
        }
    }

    /// Position of this field inside a seed
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a field by its property name; attribute spellings are accepted too
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == name || f.attribute() == name)
    }
}

impl fmt::Display for TraitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The nine trait values of a character
///
/// Values are expected to be single digits but nothing here enforces it:
/// clamping belongs to the input boundary (see `FieldUpdate::from_input`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TraitVector {
    pub accessories: u8,
    pub base: u8,
    pub face: u8,
    pub face_item: u8,
    pub hair: u8,
    pub pants: u8,
    pub shirt: u8,
    pub skin: u8,
    pub hat_color: u8,
}

impl TraitVector {
    /// Build from values laid out in seed order
    pub fn from_values(values: [u8; SEED_LEN]) -> Self {
        let [accessories, base, face, face_item, hair, pants, shirt, skin, hat_color] = values;
        Self { accessories, base, face, face_item, hair, pants, shirt, skin, hat_color }
    }

    /// Values in seed order
    pub fn values(&self) -> [u8; SEED_LEN] {
        [
            self.accessories,
            self.base,
            self.face,
            self.face_item,
            self.hair,
            self.pants,
            self.shirt,
            self.skin,
            self.hat_color,
        ]
    }

    pub fn get(&self, field: TraitField) -> u8 {
        self.values()[field.index()]
    }

    /// Copy of this vector with one field replaced
    pub fn with(&self, field: TraitField, value: u8) -> Self {
        let mut values = self.values();
        values[field.index()] = value;
        Self::from_values(values)
    }

    /// True when every field renders as exactly one digit
    pub fn is_single_digit(&self) -> bool {
        self.values().iter().all(|v| *v <= 9)
    }

    /// Strict parse of a seed string
    ///
    /// Length is counted in characters. Any non-ASCII-digit is rejected with
    /// its position, so a parsed vector always re-encodes to the same seed.
    pub fn from_seed(seed: &str) -> Result<Self, SeedError> {
        let len = seed.chars().count();
        if len != SEED_LEN {
            return Err(SeedError::WrongLength { len });
        }
        let mut values = [0u8; SEED_LEN];
        for (position, c) in seed.chars().enumerate() {
            let digit = c
                .to_digit(10)
                .ok_or(SeedError::NonDigit { position, found: c })?;
            values[position] = digit as u8;
        }
        Ok(Self::from_values(values))
    }

    /// Draw every field uniformly inside its bounds
    pub fn random<R: Rng + ?Sized>(bounds: &TraitBounds, rng: &mut R) -> Result<Self, ConfigError> {
        bounds.validate()?;
        let mut values = [0u8; SEED_LEN];
        for field in TraitField::ALL {
            let range = bounds.get(field);
            values[field.index()] = rng.gen_range(range.min..=range.max) as u8;
        }
        Ok(Self::from_values(values))
    }
}
