//! Attributes handed to the external character element

use super::{Character, TraitField};

impl Character {
    /// `(attribute, value)` pairs for the rendering element, in a stable order
    ///
    /// With `literal_seed` set the raw seed is passed as well so the renderer
    /// can build the character from it directly.
    pub fn render_attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs: Vec<(&'static str, String)> = TraitField::ALL
            .iter()
            .map(|f| (f.attribute(), self.traits.get(*f).to_string()))
            .collect();
        if self.flags.literal_seed {
            attrs.push(("seed", self.seed.clone()));
        }
        attrs.push(("hat", self.flags.hat.to_string()));
        attrs.push(("fire", self.flags.fire.to_string()));
        attrs.push(("walking", self.flags.walking.to_string()));
        attrs.push(("circle", self.flags.circle.to_string()));
        attrs.push((
            "style",
            format!("height: {0}px; width: {0}px;", self.flags.size),
        ));
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{FieldUpdate, TraitVector};

    fn lookup<'a>(attrs: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
        attrs.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_attributes() {
        let c = Character::from_traits(TraitVector::from_values([1, 0, 2, 0, 3, 0, 4, 0, 5]))
            .apply(FieldUpdate::Fire(true));
        let attrs = c.render_attributes();
        assert_eq!(attrs[0], ("accessories", "1".to_string()));
        assert_eq!(lookup(&attrs, "faceitem"), Some("0"));
        assert_eq!(lookup(&attrs, "hatcolor"), Some("5"));
        assert_eq!(lookup(&attrs, "fire"), Some("true"));
        assert_eq!(lookup(&attrs, "hat"), Some("none"));
        assert_eq!(lookup(&attrs, "style"), Some("height: 300px; width: 300px;"));
        assert_eq!(lookup(&attrs, "seed"), None);
    }

    #[test]
    fn test_literal_seed_exposes_seed() {
        let c = Character::default().apply(FieldUpdate::LiteralSeed(true));
        assert_eq!(lookup(&c.render_attributes(), "seed"), Some("000000000"));
    }
}
