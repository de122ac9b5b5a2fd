//! Share links — the URL a user copies to hand their character to someone

use crate::character::Character;
use log::debug;

/// Parameter order of a share link
const SHARE_PARAMS: [&str; 6] = ["seed", "hat", "fire", "walking", "circle", "literalseed"];

/// Builds share links for a page path
#[derive(Debug, Clone)]
pub struct ShareLink {
    path: String,
}

impl ShareLink {
    /// `path` is the page the link points at; any query already on it is dropped
    pub fn new(path: impl Into<String>) -> Self {
        let mut path = path.into();
        if let Some(idx) = path.find('?') {
            path.truncate(idx);
        }
        Self { path }
    }

    /// Query string (without `?`) describing the character
    ///
    /// Values are percent-encoded, which leaves digit seeds, `true`/`false`
    /// and the known hat names unchanged.
    pub fn query(character: &Character) -> String {
        let flags = &character.flags;
        let values = [
            character.seed.clone(),
            flags.hat.to_string(),
            flags.fire.to_string(),
            flags.walking.to_string(),
            flags.circle.to_string(),
            flags.literal_seed.to_string(),
        ];
        SHARE_PARAMS
            .iter()
            .zip(values.iter())
            .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn url(&self, character: &Character) -> String {
        let url = format!("{}?{}", self.path, Self::query(character));
        debug!("Built share link {}", url);
        url
    }

    /// One-shot form of `ShareLink::new(path).url(character)`
    pub fn build(path: &str, character: &Character) -> String {
        Self::new(path).url(character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Hat, TraitVector};
    use crate::link::QueryParams;
    use crate::seed::decode;

    #[test]
    fn test_default_link() {
        let link = ShareLink::build("/rpg-me/", &Character::default());
        assert_eq!(
            link,
            "/rpg-me/?seed=000000000&hat=none&fire=false&walking=false&circle=false&literalseed=false"
        );
    }

    #[test]
    fn test_existing_query_dropped() {
        let link = ShareLink::new("/index.html?seed=111111111").url(&Character::default());
        assert!(link.starts_with("/index.html?seed=000000000&"));
    }

    #[test]
    fn test_reserved_characters_encoded() {
        let mut character = Character::default();
        character.flags.hat = Hat::Other("top hat&fire=true".into());
        let query = ShareLink::query(&character);
        assert!(query.contains("hat=top%20hat%26fire%3Dtrue"));
        assert!(query.contains("&fire=false"));
    }

    #[test]
    fn test_link_round_trips_through_decoder() {
        let mut character = Character::from_traits(TraitVector::from_values([1, 0, 2, 0, 3, 0, 4, 0, 5]));
        character.flags.hat = Hat::Other("a+b c".into());
        character.flags.fire = true;
        character.flags.circle = true;

        let link = ShareLink::build("/", &character);
        let (_, query) = link.split_once('?').unwrap();
        let decoded = decode(&Character::default(), &QueryParams::parse(query));

        assert!(decoded.outcome.is_applied());
        assert_eq!(decoded.character.traits, character.traits);
        assert_eq!(decoded.character.flags.hat, character.flags.hat);
        assert!(decoded.character.flags.fire);
        assert!(!decoded.character.flags.walking);
        assert!(decoded.character.flags.circle);
    }
}
