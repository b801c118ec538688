//! The styling record: presentation configuration for the rendered card.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Card theme. Each value selects a fixed, mutually exclusive palette bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Minimal,
    Modern,
    Glass,
    Sepia,
    Dark,
    Gradient,
    House,
}

impl Theme {
    pub const ALL: [Theme; 7] = [
        Theme::House,
        Theme::Minimal,
        Theme::Modern,
        Theme::Glass,
        Theme::Sepia,
        Theme::Dark,
        Theme::Gradient,
    ];
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Theme::Minimal => "minimal",
            Theme::Modern => "modern",
            Theme::Glass => "glass",
            Theme::Sepia => "sepia",
            Theme::Dark => "dark",
            Theme::Gradient => "gradient",
            Theme::House => "house",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimal" => Ok(Theme::Minimal),
            "modern" => Ok(Theme::Modern),
            "glass" => Ok(Theme::Glass),
            "sepia" => Ok(Theme::Sepia),
            "dark" => Ok(Theme::Dark),
            "gradient" => Ok(Theme::Gradient),
            "house" => Ok(Theme::House),
            other => Err(format!("unknown theme '{other}'")),
        }
    }
}

/// Font family. Overridden to serif when the theme is [`Theme::House`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Font {
    Sans,
    Serif,
    Mono,
}

impl Font {
    pub const ALL: [Font; 3] = [Font::Sans, Font::Serif, Font::Mono];
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Font::Sans => "sans",
            Font::Serif => "serif",
            Font::Mono => "mono",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Font {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sans" => Ok(Font::Sans),
            "serif" => Ok(Font::Serif),
            "mono" => Ok(Font::Mono),
            other => Err(format!("unknown font '{other}'")),
        }
    }
}

/// Ordinal body text size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Sm,
    Base,
    Lg,
    Xl,
}

impl FontSize {
    pub const ALL: [FontSize; 4] = [FontSize::Sm, FontSize::Base, FontSize::Lg, FontSize::Xl];

    /// Absolute body size in pixels. Strictly increasing across the scale.
    pub fn px(self) -> f32 {
        match self {
            FontSize::Sm => 16.0,
            FontSize::Base => 18.0,
            FontSize::Lg => 20.0,
            FontSize::Xl => 24.0,
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FontSize::Sm => "sm",
            FontSize::Base => "base",
            FontSize::Lg => "lg",
            FontSize::Xl => "xl",
        };
        write!(f, "{s}")
    }
}

/// Block alignment, applied uniformly to every block on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
}

/// Border drawn around the whole card container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    None,
    Thin,
    Thick,
    Dashed,
}

impl BorderStyle {
    pub const ALL: [BorderStyle; 4] = [
        BorderStyle::None,
        BorderStyle::Thin,
        BorderStyle::Thick,
        BorderStyle::Dashed,
    ];
}

/// Export aspect ratio of the card container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectRatio {
    /// Intrinsic content height with a minimum floor.
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "3:4")]
    ThreeFour,
    #[serde(rename = "4:5")]
    FourFive,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 4] = [
        AspectRatio::Auto,
        AspectRatio::Square,
        AspectRatio::ThreeFour,
        AspectRatio::FourFive,
    ];
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AspectRatio::Auto => "auto",
            AspectRatio::Square => "1:1",
            AspectRatio::ThreeFour => "3:4",
            AspectRatio::FourFive => "4:5",
        };
        write!(f, "{s}")
    }
}

impl FromStr for AspectRatio {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(AspectRatio::Auto),
            "1:1" => Ok(AspectRatio::Square),
            "3:4" => Ok(AspectRatio::ThreeFour),
            "4:5" => Ok(AspectRatio::FourFive),
            other => Err(format!("unknown aspect ratio '{other}'")),
        }
    }
}

/// Presentation configuration for the card.
///
/// Every enum field holds exactly one value at all times; there is no
/// "nothing selected" state. Like [`super::CardContent`], the record is only
/// replaced as a whole via the `with_*` builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Styling {
    pub theme: Theme,
    pub font: Font,
    pub font_size: FontSize,
    pub text_align: TextAlign,
    pub show_date: bool,
    pub show_author: bool,
    pub show_tags: bool,
    pub border: BorderStyle,
    pub aspect_ratio: AspectRatio,
}

impl Default for Styling {
    fn default() -> Self {
        Self {
            theme: Theme::House,
            font: Font::Serif,
            font_size: FontSize::Base,
            text_align: TextAlign::Left,
            show_date: true,
            show_author: true,
            show_tags: true,
            border: BorderStyle::None,
            aspect_ratio: AspectRatio::Auto,
        }
    }
}

impl Styling {
    /// The font family the card actually renders with: the house theme always
    /// uses serif, every other theme respects the `font` field.
    pub fn effective_font(&self) -> Font {
        if self.theme == Theme::House {
            Font::Serif
        } else {
            self.font
        }
    }

    pub fn with_theme(&self, theme: Theme) -> Self {
        Self { theme, ..*self }
    }

    pub fn with_font(&self, font: Font) -> Self {
        Self { font, ..*self }
    }

    pub fn with_font_size(&self, font_size: FontSize) -> Self {
        Self { font_size, ..*self }
    }

    pub fn with_text_align(&self, text_align: TextAlign) -> Self {
        Self { text_align, ..*self }
    }

    pub fn with_show_date(&self, show_date: bool) -> Self {
        Self { show_date, ..*self }
    }

    pub fn with_show_author(&self, show_author: bool) -> Self {
        Self {
            show_author,
            ..*self
        }
    }

    pub fn with_show_tags(&self, show_tags: bool) -> Self {
        Self { show_tags, ..*self }
    }

    pub fn with_border(&self, border: BorderStyle) -> Self {
        Self { border, ..*self }
    }

    pub fn with_aspect_ratio(&self, aspect_ratio: AspectRatio) -> Self {
        Self {
            aspect_ratio,
            ..*self
        }
    }
}
