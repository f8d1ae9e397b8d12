//! Card primitive
//!
//! Layout-agnostic description of one card. Absent optional parts are simply
//! not rendered.

use serde::Serialize;

/// Local image shown when an item image fails to load
pub const FALLBACK_IMAGE: &str = "/placeholder.svg";

/// Label on the external link
pub const LINK_LABEL: &str = "View More";

/// Title used when an item has no name
pub const UNTITLED: &str = "Untitled";

/// Card height variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardSize {
    /// Fixed height with room for an image
    #[default]
    Default,
    /// Shorter card for text-only content (flights)
    Compact,
}

/// Emphasis of a subtitle line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Plain,
    Strong,
    Price,
}

/// One line of subtitle text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardLine {
    pub text: String,
    pub tone: Tone,
}

impl CardLine {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Plain }
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Strong }
    }

    pub fn price(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Price }
    }
}

/// Card image with its load-failure substitute
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardImage {
    pub src: String,
    pub alt: String,
    pub fallback: String,
}

impl CardImage {
    /// `None` for a missing or blank URL
    pub fn new(src: Option<&str>, alt: &str) -> Option<Self> {
        let src = src.map(str::trim).filter(|s| !s.is_empty())?;
        Some(Self {
            src: src.to_string(),
            alt: alt.to_string(),
            fallback: FALLBACK_IMAGE.to_string(),
        })
    }

    /// Source to switch to after `current` failed to load
    ///
    /// Returns `None` once the fallback itself is showing, so a missing
    /// fallback asset cannot cause an error loop.
    pub fn fallback_for(&self, current: &str) -> Option<&str> {
        if current == self.fallback {
            None
        } else {
            Some(&self.fallback)
        }
    }
}

/// External link
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardLink {
    pub href: String,
    pub label: String,
}

/// View model for one card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub image: Option<CardImage>,
    pub title: String,
    pub subtitle: Vec<CardLine>,
    pub description: Vec<String>,
    pub link: Option<CardLink>,
    pub size: CardSize,
}

impl Card {
    pub fn new(title: Option<&str>) -> Self {
        Self {
            image: None,
            title: title.unwrap_or(UNTITLED).to_string(),
            subtitle: Vec::new(),
            description: Vec::new(),
            link: None,
            size: CardSize::Default,
        }
    }

    pub fn image(mut self, src: Option<&str>) -> Self {
        self.image = CardImage::new(src, &self.title);
        self
    }

    pub fn subtitle(mut self, text: Option<impl Into<String>>) -> Self {
        if let Some(text) = text {
            self.subtitle.push(CardLine::plain(text));
        }
        self
    }

    pub fn subtitle_line(mut self, line: CardLine) -> Self {
        self.subtitle.push(line);
        self
    }

    pub fn description(mut self, text: Option<impl Into<String>>) -> Self {
        if let Some(text) = text {
            self.description.push(text.into());
        }
        self
    }

    pub fn link(mut self, href: Option<&str>) -> Self {
        self.link = href
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .map(|href| CardLink {
                href: href.to_string(),
                label: LINK_LABEL.to_string(),
            });
        self
    }

    pub fn compact(mut self) -> Self {
        self.size = CardSize::Compact;
        self
    }
}
