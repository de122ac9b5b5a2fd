//! Customizer configuration
//!
//! Default character values and the min/max limits the form enforces on
//! each input. Stored as pretty JSON; every field falls back to its built-in
//! default when missing from the file.

use crate::character::{TraitField, TraitVector};
use crate::error::ConfigError;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Inclusive numeric range of one input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRange {
    pub min: u32,
    pub max: u32,
}

impl FieldRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Rejects `min > max`, which no input value could satisfy
    pub fn validate(&self, field: &str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::EmptyRange {
                field: field.to_string(),
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Pull a value into the range, the way a number input with min/max does
    ///
    /// Assumes a validated range; `min > max` panics.
    pub fn clamp(&self, value: i64) -> u32 {
        value.clamp(self.min as i64, self.max as i64) as u32
    }
}

/// Per-trait input limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TraitBounds {
    pub accessories: FieldRange,
    pub base: FieldRange,
    pub face: FieldRange,
    pub face_item: FieldRange,
    pub hair: FieldRange,
    pub pants: FieldRange,
    pub shirt: FieldRange,
    pub skin: FieldRange,
    pub hat_color: FieldRange,
}

impl Default for TraitBounds {
    fn default() -> Self {
        let digit = FieldRange::new(0, 9);
        Self {
            accessories: digit,
            base: FieldRange::new(0, 1),
            face: FieldRange::new(0, 5),
            face_item: digit,
            hair: digit,
            pants: digit,
            shirt: digit,
            skin: digit,
            hat_color: digit,
        }
    }
}

impl TraitBounds {
    pub fn get(&self, field: TraitField) -> FieldRange {
        match field {
            TraitField::Accessories => self.accessories,
            TraitField::Base => self.base,
            TraitField::Face => self.face,
            TraitField::FaceItem => self.face_item,
            TraitField::Hair => self.hair,
            TraitField::Pants => self.pants,
            TraitField::Shirt => self.shirt,
            TraitField::Skin => self.skin,
            TraitField::HatColor => self.hat_color,
        }
    }

    /// Every range non-empty and small enough to store in a trait
    pub fn validate(&self) -> Result<(), ConfigError> {
        for field in TraitField::ALL {
            let range = self.get(field);
            range.validate(field.name())?;
            if range.max > u8::MAX as u32 {
                return Err(ConfigError::TraitTooLarge {
                    field: field.name().to_string(),
                    max: range.max,
                });
            }
        }
        Ok(())
    }

    /// Bounds that still produce single-digit seeds
    pub fn is_seed_safe(&self) -> bool {
        TraitField::ALL.iter().all(|f| self.get(*f).max <= 9)
    }
}

/// Top-level customizer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomizerConfig {
    /// Trait values a fresh character starts with
    pub defaults: TraitVector,
    /// Initial render size in pixels
    pub default_size: u32,
    pub bounds: TraitBounds,
    pub size_range: FieldRange,
}

impl Default for CustomizerConfig {
    fn default() -> Self {
        Self {
            defaults: TraitVector::default(),
            default_size: 300,
            bounds: TraitBounds::default(),
            size_range: FieldRange::new(100, 600),
        }
    }
}

impl CustomizerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bounds.validate()?;
        self.size_range.validate("size")
    }

    /// Read and validate a config file; unusable bounds are an error
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        if !config.bounds.is_seed_safe() {
            warn!(
                "Config {} allows multi-digit trait values; seeds built from them will not decode",
                path.as_ref().display()
            );
        }
        info!("Loaded customizer config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        let r = FieldRange::new(0, 5);
        assert_eq!(r.clamp(-3), 0);
        assert_eq!(r.clamp(3), 3);
        assert_eq!(r.clamp(42), 5);
        assert!(r.contains(5));
        assert!(!r.contains(6));
    }

    #[test]
    fn test_default_bounds_are_seed_safe() {
        let bounds = TraitBounds::default();
        assert!(bounds.is_seed_safe());
        assert_eq!(bounds.get(TraitField::Base), FieldRange::new(0, 1));
        assert_eq!(bounds.get(TraitField::Face), FieldRange::new(0, 5));

        let wide = TraitBounds { hair: FieldRange::new(0, 12), ..TraitBounds::default() };
        assert!(!wide.is_seed_safe());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: CustomizerConfig =
            serde_json::from_str(r#"{ "defaultSize": 450, "bounds": { "face": { "min": 1, "max": 3 } } }"#)
                .unwrap();
        assert_eq!(config.default_size, 450);
        assert_eq!(config.bounds.face, FieldRange::new(1, 3));
        assert_eq!(config.bounds.hair, FieldRange::new(0, 9));
        assert_eq!(config.size_range, FieldRange::new(100, 600));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("rpgme-config-{}.json", std::process::id()));
        let config = CustomizerConfig {
            defaults: TraitVector::from_values([1, 1, 1, 1, 1, 1, 1, 1, 1]),
            ..CustomizerConfig::default()
        };
        config.save(&path).unwrap();
        let loaded = CustomizerConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        std::fs::remove_file(&path).ok();
    }

    fn load_json(name: &str, json: &str) -> Result<CustomizerConfig, Box<dyn std::error::Error>> {
        let path = std::env::temp_dir().join(format!("rpgme-{}-{}.json", name, std::process::id()));
        std::fs::write(&path, json).unwrap();
        let result = CustomizerConfig::load(&path);
        std::fs::remove_file(&path).ok();
        result
    }

    #[test]
    fn test_validate_defaults() {
        assert_eq!(CustomizerConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_load_rejects_empty_range() {
        let err = load_json("empty-range", r#"{ "bounds": { "face": { "min": 5, "max": 1 } } }"#)
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::EmptyRange { field: "face".into(), min: 5, max: 1 })
        );

        let err = load_json("empty-size", r#"{ "sizeRange": { "min": 600, "max": 100 } }"#)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::EmptyRange { field, .. }) if field == "size"
        ));
    }

    #[test]
    fn test_load_rejects_trait_above_u8() {
        let err = load_json("too-large", r#"{ "bounds": { "hair": { "min": 0, "max": 300 } } }"#)
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::TraitTooLarge { field: "hair".into(), max: 300 })
        );
    }

    #[test]
    fn test_load_accepts_wide_but_storable_bounds() {
        let config = load_json("wide", r#"{ "bounds": { "hair": { "min": 0, "max": 255 } } }"#).unwrap();
        assert_eq!(config.bounds.hair, FieldRange::new(0, 255));
        assert!(!config.bounds.is_seed_safe());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(CustomizerConfig::load("/nonexistent/rpgme.json").is_err());
    }
}
