use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::DeckError;

/// Layout variant of a slide. Selects the renderer in [`crate::layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideKind {
    Cover,
    TableOfContents,
    Section,
    Content,
    Summary,
    Chart,
    Roadmap,
    Calendar,
    Detail,
    Timeline,
}

impl SlideKind {
    pub const ALL: [SlideKind; 10] = [
        SlideKind::Cover,
        SlideKind::TableOfContents,
        SlideKind::Section,
        SlideKind::Content,
        SlideKind::Summary,
        SlideKind::Chart,
        SlideKind::Roadmap,
        SlideKind::Calendar,
        SlideKind::Detail,
        SlideKind::Timeline,
    ];

    /// Tag used in deck files.
    pub fn as_str(self) -> &'static str {
        match self {
            SlideKind::Cover => "cover",
            SlideKind::TableOfContents => "toc",
            SlideKind::Section => "section",
            SlideKind::Content => "content",
            SlideKind::Summary => "summary",
            SlideKind::Chart => "chart",
            SlideKind::Roadmap => "roadmap",
            SlideKind::Calendar => "calendar",
            SlideKind::Detail => "detail",
            SlideKind::Timeline => "poc_roadmap",
        }
    }
}

impl FromStr for SlideKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SlideKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for SlideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Glyphs a slide item can be decorated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ShieldCheck,
    BookOpen,
    Target,
    Code,
    Search,
    TrendingUp,
    Clock,
    Check,
    Alert,
    Layout,
    PenTool,
    ArrowRight,
}

impl Icon {
    const NAMES: [(&'static str, Icon); 12] = [
        ("shield_check", Icon::ShieldCheck),
        ("book_open", Icon::BookOpen),
        ("target", Icon::Target),
        ("code", Icon::Code),
        ("search", Icon::Search),
        ("trending_up", Icon::TrendingUp),
        ("clock", Icon::Clock),
        ("check", Icon::Check),
        ("alert", Icon::Alert),
        ("layout", Icon::Layout),
        ("pen_tool", Icon::PenTool),
        ("arrow_right", Icon::ArrowRight),
    ];

    /// Single-character stand-in drawn inside icon tiles.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::ShieldCheck => "S",
            Icon::BookOpen => "B",
            Icon::Target => "T",
            Icon::Code => "</>",
            Icon::Search => "?",
            Icon::TrendingUp => "^",
            Icon::Clock => "@",
            Icon::Check => "v",
            Icon::Alert => "!",
            Icon::Layout => "#",
            Icon::PenTool => "/",
            Icon::ArrowRight => ">",
        }
    }
}

impl FromStr for Icon {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Icon::NAMES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, icon)| *icon)
            .ok_or(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub title: String,
    pub desc: String,
    pub icon: Option<Icon>,
    pub sub_items: Vec<String>,
    /// Explicit slide id a table-of-contents entry points at.
    pub target: Option<NonZeroU32>,
}

impl Item {
    pub fn new(title: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            desc: desc.into(),
            icon: None,
            sub_items: Vec::new(),
            target: None,
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_target(mut self, target: NonZeroU32) -> Self {
        self.target = Some(target);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Deliverable {
    pub text: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupItem {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Group {
    #[serde(default)]
    pub deliverable: Option<Deliverable>,
    pub items: Vec<GroupItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub id: NonZeroU32,
    pub kind: SlideKind,
    pub title: String,
    pub subtitle: Option<String>,
    pub footer: Option<String>,
    pub badge: Option<String>,
    pub content: Vec<String>,
    pub items: Vec<Item>,
    pub groups: Vec<Group>,
}

impl Slide {
    pub fn new(id: NonZeroU32, kind: SlideKind, title: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            title: title.into(),
            subtitle: None,
            footer: None,
            badge: None,
            content: Vec::new(),
            items: Vec::new(),
            groups: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    pub fn with_groups(mut self, groups: Vec<Group>) -> Self {
        self.groups = groups;
        self
    }
}

// --- Deck file records ---

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawItem {
    title: String,
    #[serde(default)]
    desc: String,
    icon: Option<String>,
    #[serde(default)]
    sub_items: Vec<String>,
    target: Option<NonZeroU32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawSlide {
    id: u32,
    kind: String,
    title: String,
    subtitle: Option<String>,
    footer: Option<String>,
    badge: Option<String>,
    #[serde(default)]
    content: Vec<String>,
    #[serde(default)]
    items: Vec<RawItem>,
    #[serde(default)]
    groups: Vec<Group>,
}

impl TryFrom<RawSlide> for Slide {
    type Error = DeckError;

    fn try_from(raw: RawSlide) -> Result<Self, Self::Error> {
        let id = NonZeroU32::new(raw.id).ok_or(DeckError::ZeroId)?;
        let kind = raw.kind.parse::<SlideKind>().map_err(|_| DeckError::UnknownKind {
            id: raw.id,
            kind: raw.kind.clone(),
        })?;

        let items = raw
            .items
            .into_iter()
            .map(|item| -> Result<Item, DeckError> {
                let icon = item
                    .icon
                    .map(|name| {
                        name.parse::<Icon>().map_err(|_| DeckError::UnknownIcon {
                            id: raw.id,
                            icon: name.clone(),
                        })
                    })
                    .transpose()?;
                Ok(Item {
                    title: item.title,
                    desc: item.desc,
                    icon,
                    sub_items: item.sub_items,
                    target: item.target,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Slide {
            id,
            kind,
            title: raw.title,
            subtitle: raw.subtitle,
            footer: raw.footer,
            badge: raw.badge,
            content: raw.content,
            items,
            groups: raw.groups,
        })
    }
}

/// Splits the first `[..]` duration tag out of a description.
///
/// Returns the tag contents and the remaining text, trimmed. Text without a
/// complete tag comes back unchanged apart from trimming.
pub fn split_duration_tag(desc: &str) -> (Option<&str>, String) {
    let Some(open) = desc.find('[') else {
        return (None, desc.trim().to_string());
    };
    let Some(close) = desc[open + 1..].find(']').map(|i| open + 1 + i) else {
        return (None, desc.trim().to_string());
    };
    let tag = &desc[open + 1..close];
    let mut clean = String::with_capacity(desc.len());
    clean.push_str(&desc[..open]);
    clean.push_str(&desc[close + 1..]);
    (Some(tag), clean.trim().to_string())
}

/// Longest phase a timeline measures in weeks.
pub const MAX_WEEKS: f32 = 52.0;

/// Parses a week count such as `1W` or `0.5W`. Counts above [`MAX_WEEKS`]
/// are rejected.
pub fn parse_weeks(duration: &str) -> Option<f32> {
    let trimmed = duration.trim();
    let number = trimmed
        .strip_suffix('W')
        .or_else(|| trimmed.strip_suffix('w'))?;
    number
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|weeks| weeks.is_finite() && *weeks > 0.0 && *weeks <= MAX_WEEKS)
}
