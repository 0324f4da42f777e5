//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/IO types here; these are mapped from adapters.

use std::fmt;

/// What a catalog ID refers to, derived from its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    /// `nm` prefix: a person (actor, director). Trivia lives on the bio page.
    Person,
    /// Everything else (`tt` in practice): a film or show title.
    Title,
}

/// A catalogued IMDb identifier, e.g. `nm0000151` or `tt0108778`.
///
/// The kind is decided by the prefix alone: `nm` is a person, anything else
/// is treated as a title. No uniqueness is enforced across a list; duplicate
/// IDs only skew the random pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogId {
    pub kind: IdKind,
    pub raw: String,
}

impl CatalogId {
    pub fn new(kind: IdKind, raw: impl Into<String>) -> Self {
        Self {
            kind,
            raw: raw.into(),
        }
    }

    /// Parse one token from an ID list. Trims surrounding whitespace and
    /// skips blank lines (returns `None`).
    pub fn parse(token: &str) -> Option<Self> {
        let raw = token.trim();
        if raw.is_empty() {
            return None;
        }
        let kind = if raw.starts_with("nm") {
            IdKind::Person
        } else {
            IdKind::Title
        };
        Some(Self::new(kind, raw))
    }

    /// Relative path of the page that carries the trivia for this ID.
    /// Person trivia lives on the bio page; title trivia on the trivia page.
    pub fn trivia_path(&self) -> String {
        match self.kind {
            IdKind::Person => format!("name/{}/bio", self.raw),
            IdKind::Title => format!("title/{}/trivia", self.raw),
        }
    }

    /// Relative path of the canonical page, used as the link inside a tweet.
    pub fn canonical_path(&self) -> String {
        match self.kind {
            IdKind::Person => format!("name/{}", self.raw),
            IdKind::Title => format!("title/{}", self.raw),
        }
    }
}

impl fmt::Display for CatalogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Content extracted from one fetched trivia page.
///
/// Facts are raw candidates; markup cleanup happens after one is selected.
#[derive(Debug, Clone, Default)]
pub struct TriviaPage {
    /// Page title: the person's name or the movie's title, when found.
    pub title: Option<String>,
    /// All candidate facts found on the page. May be empty.
    pub facts: Vec<String>,
}

/// A fully composed message, ready for the publisher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tweet {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_person_prefix() {
        let id = CatalogId::parse("nm0000151").unwrap();
        assert_eq!(id.kind, IdKind::Person);
        assert_eq!(id.raw, "nm0000151");
    }

    #[test]
    fn test_parse_title_prefix() {
        let id = CatalogId::parse("tt0108778").unwrap();
        assert_eq!(id.kind, IdKind::Title);
    }

    #[test]
    fn test_parse_unknown_prefix_is_title() {
        // Everything that is not nm maps to the title template.
        let id = CatalogId::parse("xx1234567").unwrap();
        assert_eq!(id.kind, IdKind::Title);
    }

    #[test]
    fn test_parse_trims_and_skips_blank() {
        let id = CatalogId::parse("  tt0108778\r").unwrap();
        assert_eq!(id.raw, "tt0108778");
        assert!(CatalogId::parse("   ").is_none());
        assert!(CatalogId::parse("").is_none());
    }

    #[test]
    fn test_paths_per_kind() {
        let person = CatalogId::parse("nm0000151").unwrap();
        assert_eq!(person.trivia_path(), "name/nm0000151/bio");
        assert_eq!(person.canonical_path(), "name/nm0000151");

        let title = CatalogId::parse("tt0108778").unwrap();
        assert_eq!(title.trivia_path(), "title/tt0108778/trivia");
        assert_eq!(title.canonical_path(), "title/tt0108778");
    }

    #[test]
    fn test_every_id_maps_to_exactly_one_template() {
        // Deterministic: parsing the same token twice yields the same path.
        for token in ["nm0000001", "tt0000001", "nm", "t"] {
            let a = CatalogId::parse(token).unwrap().trivia_path();
            let b = CatalogId::parse(token).unwrap().trivia_path();
            assert_eq!(a, b);
            assert!(a.starts_with("name/") ^ a.starts_with("title/"));
        }
    }
}
