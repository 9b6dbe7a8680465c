use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::DeckError;
use crate::slide::{Item, RawSlide, Slide};

const BUNDLED_DECK: &str = include_str!("../decks/geo_plan.toml");

/// Separator between the running number and the label of a contents entry.
pub(crate) const TOC_SEPARATOR: &str = ". ";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DeckFile {
    slides: Vec<RawSlide>,
}

/// Ordered, immutable slide sequence.
#[derive(Debug, Clone)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    /// Validates and wraps a slide sequence.
    pub fn new(slides: Vec<Slide>) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        let mut seen = HashSet::with_capacity(slides.len());
        for slide in &slides {
            if !seen.insert(slide.id) {
                return Err(DeckError::DuplicateId { id: slide.id.get() });
            }
        }
        Ok(Self { slides })
    }

    pub fn from_toml_str(source: &str) -> Result<Self, DeckError> {
        let file: DeckFile = toml::from_str(source)?;
        let slides = file
            .slides
            .into_iter()
            .map(Slide::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(slides)
    }

    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let source = fs::read_to_string(path).map_err(|source| DeckError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let deck = Self::from_toml_str(&source)?;
        info!(path = %path.display(), slides = deck.len(), "loaded deck");
        Ok(deck)
    }

    /// The deck compiled into the binary.
    pub fn bundled() -> Result<Self, DeckError> {
        Self::from_toml_str(BUNDLED_DECK)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }

    /// Index of the first slide whose title contains `fragment`.
    pub fn find_by_title(&self, fragment: &str) -> Option<usize> {
        if fragment.is_empty() {
            return None;
        }
        self.slides
            .iter()
            .position(|slide| slide.title.contains(fragment))
    }

    /// Resolves a contents label such as `01. 현황 및 목표` by title match.
    pub fn resolve_toc_entry(&self, label: &str) -> Option<usize> {
        let (_, fragment) = label.split_once(TOC_SEPARATOR)?;
        // Only the segment up to a further separator takes part in the match.
        let fragment = fragment
            .split_once(TOC_SEPARATOR)
            .map_or(fragment, |(head, _)| head);
        let found = self.find_by_title(fragment);
        debug!(label, ?found, "resolved contents entry");
        found
    }

    /// Target of a contents item: the explicit slide id when present,
    /// otherwise the title match.
    pub fn toc_target(&self, item: &Item) -> Option<usize> {
        match item.target {
            Some(id) => self.slides.iter().position(|slide| slide.id == id),
            None => self.resolve_toc_entry(&item.title),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;
    use crate::slide::SlideKind;

    fn id(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    fn deck() -> Deck {
        Deck::new(vec![
            Slide::new(id(1), SlideKind::Cover, "수행계획"),
            Slide::new(id(2), SlideKind::TableOfContents, "목차"),
            Slide::new(id(3), SlideKind::Content, "현황 및 목표"),
            Slide::new(id(4), SlideKind::Detail, "추진 전략"),
        ])
        .unwrap()
    }

    #[test]
    fn empty_deck_is_rejected() {
        assert!(matches!(Deck::new(Vec::new()), Err(DeckError::Empty)));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = Deck::new(vec![
            Slide::new(id(1), SlideKind::Cover, "a"),
            Slide::new(id(1), SlideKind::Content, "b"),
        ]);
        assert!(matches!(result, Err(DeckError::DuplicateId { id: 1 })));
    }

    #[test]
    fn toc_label_resolves_by_title() {
        let deck = deck();
        assert_eq!(deck.resolve_toc_entry("01. 현황 및 목표"), Some(2));
        assert_eq!(deck.resolve_toc_entry("02. 추진 전략"), Some(3));
    }

    #[test]
    fn toc_label_without_match_resolves_to_nothing() {
        let deck = deck();
        assert_eq!(deck.resolve_toc_entry("03. 예산"), None);
        assert_eq!(deck.resolve_toc_entry("no separator"), None);
        assert_eq!(deck.resolve_toc_entry("04. "), None);
    }

    #[test]
    fn explicit_target_wins_over_title() {
        let deck = deck();
        let item = Item::new("01. 현황 및 목표", "").with_target(id(4));
        assert_eq!(deck.toc_target(&item), Some(3));

        let dangling = Item::new("01. 현황 및 목표", "").with_target(id(9));
        assert_eq!(deck.toc_target(&dangling), None);

        let by_title = Item::new("01. 현황 및 목표", "");
        assert_eq!(deck.toc_target(&by_title), Some(2));
    }

    #[test]
    fn unknown_kind_is_a_load_error() {
        let source = r#"
            [[slides]]
            id = 1
            kind = "gallery"
            title = "x"
        "#;
        match Deck::from_toml_str(source) {
            Err(DeckError::UnknownKind { id, kind }) => {
                assert_eq!(id, 1);
                assert_eq!(kind, "gallery");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn zero_id_is_a_load_error() {
        let source = r#"
            [[slides]]
            id = 0
            kind = "cover"
            title = "x"
        "#;
        assert!(matches!(Deck::from_toml_str(source), Err(DeckError::ZeroId)));
    }

    #[test]
    fn groups_parse_from_toml() {
        let source = r#"
            [[slides]]
            id = 7
            kind = "detail"
            title = "설계"

            [[slides.groups]]
            deliverable = { text = "정의서", duration = "0.2W" }
            [[slides.groups.items]]
            title = "2-1"
            desc = "IA"
        "#;
        let deck = Deck::from_toml_str(source).unwrap();
        let slide = deck.get(0).unwrap();
        assert_eq!(slide.kind, SlideKind::Detail);
        assert_eq!(slide.groups.len(), 1);
        assert_eq!(
            slide.groups[0].deliverable.as_ref().map(|d| d.duration.as_str()),
            Some("0.2W")
        );
    }

    #[test]
    fn bundled_deck_loads() {
        let deck = Deck::bundled().unwrap();
        assert!(deck.len() >= 7);
        assert_eq!(deck.get(0).map(|s| s.kind), Some(SlideKind::Cover));
        for slide in deck.iter().filter(|s| s.kind == SlideKind::TableOfContents) {
            for item in &slide.items {
                assert!(deck.toc_target(item).is_some(), "{} resolves", item.title);
            }
        }
    }
}
