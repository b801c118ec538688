//! The presentation mapping: a pure, deterministic function from the card
//! content and styling records to a visual surface description.
//!
//! `compose` never touches the input records and has no side effects; calling
//! it on every state change is safe. The produced [`CardSurface`] is the
//! single source of truth for both the live preview and the export pipeline.

use crate::domain::{AspectRatio, BorderStyle, CardContent, Font, Styling, TextAlign, Theme};
use crate::render::palette::Palette;
use crate::render::wrap::wrap_text;

/// Fixed card content width in CSS pixels.
pub const CARD_WIDTH: f32 = 576.0;
/// Inner padding on every side.
pub const PADDING: f32 = 48.0;
/// Vertical gap between blocks.
pub const BLOCK_GAP: f32 = 32.0;
/// Height floor for the `auto` aspect ratio.
pub const MIN_AUTO_HEIGHT: f32 = 400.0;

pub(crate) const TITLE_LEADING: f32 = 1.2;
pub(crate) const PILL_HEIGHT: f32 = 16.0;
pub(crate) const PILL_FONT_SIZE: f32 = 8.0;
pub(crate) const META_FONT_SIZE: f32 = 9.0;
pub(crate) const META_LINE_HEIGHT: f32 = 13.0;
pub(crate) const CAPTION_FONT_SIZE: f32 = 7.0;
pub(crate) const RULE_PAD: f32 = 24.0;
pub(crate) const META_PAD: f32 = 16.0;
pub(crate) const TAGS_PAD: f32 = 8.0;

/// Fixed secondary attribution shown only by the house theme.
pub const HOUSE_CAPTION: &str = "designed by noteflow";

#[derive(Debug, Clone, PartialEq)]
pub struct TitleBlock {
    pub lines: Vec<String>,
    pub size: f32,
    /// House theme draws a hairline rule under the title.
    pub ruled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyBlock {
    pub lines: Vec<String>,
    pub size: f32,
    pub leading: f32,
    pub italic: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TagRow {
    /// Pill labels in display order, already uppercased.
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetaBlock {
    pub author: Option<String>,
    pub date: Option<String>,
    pub caption: Option<&'static str>,
    /// House theme draws a hairline rule above the meta row.
    pub ruled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Title(TitleBlock),
    Body(BodyBlock),
    Tags(TagRow),
    Meta(MetaBlock),
}

impl Block {
    /// Block height in the vertical flow, excluding inter-block gaps.
    pub fn height(&self) -> f32 {
        match self {
            Block::Title(t) => {
                let rule = if t.ruled { RULE_PAD } else { 0.0 };
                t.lines.len() as f32 * t.size * TITLE_LEADING + rule
            }
            Block::Body(b) => b.lines.len() as f32 * b.size * b.leading,
            Block::Tags(_) => TAGS_PAD + PILL_HEIGHT,
            Block::Meta(m) => {
                let left_lines =
                    (m.author.is_some() as usize + m.date.is_some() as usize).max(1) as f32;
                META_PAD + left_lines * META_LINE_HEIGHT
            }
        }
    }
}

/// Border drawn around the card container, never around sub-blocks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderSpec {
    pub width: f32,
    pub dashed: bool,
}

impl BorderSpec {
    fn of(style: BorderStyle) -> Self {
        match style {
            BorderStyle::None => Self {
                width: 0.0,
                dashed: false,
            },
            BorderStyle::Thin => Self {
                width: 1.0,
                dashed: false,
            },
            BorderStyle::Thick => Self {
                width: 4.0,
                dashed: false,
            },
            BorderStyle::Dashed => Self {
                width: 2.0,
                dashed: true,
            },
        }
    }
}

/// The rendered visual description of a card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardSurface {
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    pub palette: Palette,
    pub border: BorderSpec,
    /// Paper micro-texture overlay (house theme only).
    pub texture_overlay: bool,
    pub font: Font,
    pub align: TextAlign,
    pub blocks: Vec<Block>,
}

impl CardSurface {
    /// Sum of block heights plus inter-block gaps.
    fn content_height(blocks: &[Block]) -> f32 {
        let gaps = blocks.len().saturating_sub(1) as f32 * BLOCK_GAP;
        blocks.iter().map(Block::height).sum::<f32>() + gaps
    }
}

fn title_size(theme: Theme) -> f32 {
    if theme == Theme::House { 24.0 } else { 30.0 }
}

fn body_leading(theme: Theme) -> f32 {
    if theme == Theme::House { 1.8 } else { 1.6 }
}

fn container_height(ratio: AspectRatio, content_height: f32) -> f32 {
    match ratio {
        AspectRatio::Auto => (content_height + 2.0 * PADDING).max(MIN_AUTO_HEIGHT),
        AspectRatio::Square => CARD_WIDTH,
        AspectRatio::ThreeFour => CARD_WIDTH * 4.0 / 3.0,
        AspectRatio::FourFive => CARD_WIDTH * 5.0 / 4.0,
    }
}

/// Maps a (content, styling) pair to its visual surface.
pub fn compose(card: &CardContent, styling: &Styling) -> CardSurface {
    let theme = styling.theme;
    let font = styling.effective_font();
    let house = theme == Theme::House;
    let content_width = CARD_WIDTH - 2.0 * PADDING;

    let mut blocks = Vec::new();

    if !card.title.is_empty() {
        let size = title_size(theme);
        blocks.push(Block::Title(TitleBlock {
            lines: wrap_text(&card.title, content_width, size, font),
            size,
            ruled: house,
        }));
    }

    if !card.body.is_empty() {
        let size = styling.font_size.px();
        blocks.push(Block::Body(BodyBlock {
            lines: wrap_text(&card.body, content_width, size, font),
            size,
            leading: body_leading(theme),
            italic: house,
        }));
    }

    if styling.show_tags && !card.tags.is_empty() {
        blocks.push(Block::Tags(TagRow {
            labels: card.tags.iter().map(|t| t.to_uppercase()).collect(),
        }));
    }

    let author = (styling.show_author && !card.author.is_empty())
        .then(|| card.author.to_uppercase());
    let date = (styling.show_date && !card.date.is_empty()).then(|| card.date.to_uppercase());
    let caption = house.then_some(HOUSE_CAPTION);
    if author.is_some() || date.is_some() || caption.is_some() {
        blocks.push(Block::Meta(MetaBlock {
            author,
            date,
            caption,
            ruled: house,
        }));
    }

    let height = container_height(styling.aspect_ratio, CardSurface::content_height(&blocks));

    CardSurface {
        width: CARD_WIDTH,
        height,
        corner_radius: if house { 2.0 } else { 24.0 },
        palette: Palette::of(theme),
        border: BorderSpec::of(styling.border),
        texture_overlay: house,
        font,
        align: styling.text_align,
        blocks,
    }
}
