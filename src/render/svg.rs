//! Deterministic SVG writer for [`CardSurface`].
//!
//! Output is plain SVG 1.1 understood by the resvg rasterizer. For a fixed
//! surface the produced markup is byte-identical across runs: iteration
//! order, float formatting, and element ids are all fixed.

use crate::domain::{Font, TextAlign};
use crate::render::palette::{Background, Rgba};
use crate::render::surface::{
    Block, BodyBlock, CardSurface, MetaBlock, TagRow, TitleBlock, BLOCK_GAP, CAPTION_FONT_SIZE,
    META_FONT_SIZE, META_LINE_HEIGHT, META_PAD, PADDING, PILL_FONT_SIZE, PILL_HEIGHT, RULE_PAD,
    TAGS_PAD, TITLE_LEADING,
};
use crate::render::wrap::text_advance;

const PILL_PAD_X: f32 = 8.0;
const PILL_GAP: f32 = 8.0;
const PILL_TRACKING: f32 = 0.8; // 0.1em at 8px
const META_TRACKING: f32 = 1.8; // 0.2em at 9px

impl CardSurface {
    /// Serializes the surface to SVG markup.
    pub fn to_svg(&self) -> String {
        let mut w = SvgWriter::default();
        let width = px(self.width);
        let height = px(self.height);

        w.line(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
        ));

        self.write_defs(&mut w);
        self.write_container(&mut w);

        w.line("<g clip-path=\"url(#card-clip)\">");
        if self.texture_overlay {
            w.line(&format!(
                "<rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" rx=\"{}\" fill=\"url(#paper)\" fill-opacity=\"0.03\"/>",
                px(self.corner_radius)
            ));
        }
        self.write_blocks(&mut w);
        w.line("</g>");

        w.line("</svg>");
        w.out
    }

    fn write_defs(&self, w: &mut SvgWriter) {
        w.line("<defs>");
        w.line(&format!(
            "<clipPath id=\"card-clip\"><rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" rx=\"{}\"/></clipPath>",
            px(self.width),
            px(self.height),
            px(self.corner_radius)
        ));
        if let Background::Linear { from, via, to } = self.palette.background {
            w.line("<linearGradient id=\"card-bg\" x1=\"0\" y1=\"0\" x2=\"1\" y2=\"1\">");
            w.line(&format!(
                "<stop offset=\"0\" stop-color=\"{}\"/>",
                from.hex()
            ));
            w.line(&format!(
                "<stop offset=\"0.5\" stop-color=\"{}\"/>",
                via.hex()
            ));
            w.line(&format!("<stop offset=\"1\" stop-color=\"{}\"/>", to.hex()));
            w.line("</linearGradient>");
        }
        if self.texture_overlay {
            w.line(
                "<pattern id=\"paper\" width=\"4\" height=\"4\" patternUnits=\"userSpaceOnUse\">\
                 <circle cx=\"1\" cy=\"1\" r=\"0.5\" fill=\"#000000\"/>\
                 <circle cx=\"3\" cy=\"3\" r=\"0.5\" fill=\"#000000\"/>\
                 </pattern>",
            );
        }
        w.line("</defs>");
    }

    fn write_container(&self, w: &mut SvgWriter) {
        let fill = match self.palette.background {
            Background::Solid(c) => c.hex(),
            Background::Linear { .. } => "url(#card-bg)".to_string(),
        };
        let fill_opacity = match self.palette.background {
            Background::Solid(c) if c.a < 255 => format!(" fill-opacity=\"{}\"", c.opacity()),
            _ => String::new(),
        };

        let mut stroke = String::new();
        if self.border.width > 0.0 {
            stroke.push_str(&format!(
                " stroke=\"{}\" stroke-width=\"{}\"",
                self.palette.border.hex(),
                px(self.border.width)
            ));
            if self.palette.border.a < 255 {
                stroke.push_str(&format!(
                    " stroke-opacity=\"{}\"",
                    self.palette.border.opacity()
                ));
            }
            if self.border.dashed {
                stroke.push_str(" stroke-dasharray=\"8 6\"");
            }
        }

        // Stroke is centered on the rect edge; inset by half the width so the
        // border stays inside the captured box.
        let inset = self.border.width / 2.0;
        w.line(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"{fill}\"{fill_opacity}{stroke}/>",
            px(inset),
            px(inset),
            px(self.width - 2.0 * inset),
            px(self.height - 2.0 * inset),
            px(self.corner_radius)
        ));
    }

    fn write_blocks(&self, w: &mut SvgWriter) {
        let mut y = PADDING;
        for block in &self.blocks {
            match block {
                Block::Title(t) => self.write_title(w, t, y),
                Block::Body(b) => self.write_body(w, b, y),
                Block::Tags(t) => self.write_tags(w, t, y),
                // The meta row is pinned to the bottom edge of the card.
                Block::Meta(m) => self.write_meta(w, m, self.height - PADDING - block.height()),
            }
            y += block.height() + BLOCK_GAP;
        }
    }

    fn anchor(&self) -> (&'static str, f32) {
        match self.align {
            TextAlign::Left => ("start", PADDING),
            TextAlign::Center => ("middle", CardSurface::half_width()),
        }
    }

    fn half_width() -> f32 {
        super::surface::CARD_WIDTH / 2.0
    }

    fn write_title(&self, w: &mut SvgWriter, t: &TitleBlock, y: f32) {
        let (anchor, x) = self.anchor();
        let line_box = t.size * TITLE_LEADING;
        for (i, line) in t.lines.iter().enumerate() {
            w.line(&format!(
                "<text x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}\" font-weight=\"700\" fill=\"{}\" text-anchor=\"{anchor}\">{}</text>",
                px(x),
                px(y + i as f32 * line_box + baseline(t.size, TITLE_LEADING)),
                family(self.font),
                px(t.size),
                self.palette.text.hex(),
                escape_xml(line)
            ));
        }
        if t.ruled {
            let rule_y = y + t.lines.len() as f32 * line_box + RULE_PAD - 1.0;
            self.write_rule(w, rule_y);
        }
    }

    fn write_body(&self, w: &mut SvgWriter, b: &BodyBlock, y: f32) {
        let (anchor, x) = self.anchor();
        let italic = if b.italic { " font-style=\"italic\"" } else { "" };
        let line_box = b.size * b.leading;
        w.line("<g opacity=\"0.9\">");
        for (i, line) in b.lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            w.line(&format!(
                "<text x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}\"{italic} fill=\"{}\" text-anchor=\"{anchor}\">{}</text>",
                px(x),
                px(y + i as f32 * line_box + baseline(b.size, b.leading)),
                family(self.font),
                px(b.size),
                self.palette.text.hex(),
                escape_xml(line)
            ));
        }
        w.line("</g>");
    }

    fn write_tags(&self, w: &mut SvgWriter, tags: &TagRow, y: f32) {
        let top = y + TAGS_PAD;
        let widths: Vec<f32> = tags
            .labels
            .iter()
            .map(|label| {
                text_advance(label, PILL_FONT_SIZE, self.font)
                    + label.chars().count() as f32 * PILL_TRACKING
                    + 2.0 * PILL_PAD_X
            })
            .collect();
        let row_width: f32 =
            widths.iter().sum::<f32>() + widths.len().saturating_sub(1) as f32 * PILL_GAP;
        let mut x = match self.align {
            TextAlign::Left => PADDING,
            TextAlign::Center => Self::half_width() - row_width / 2.0,
        };

        w.line("<g opacity=\"0.4\">");
        for (label, width) in tags.labels.iter().zip(&widths) {
            w.line(&format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"2\" fill=\"{}\" fill-opacity=\"{}\"/>",
                px(x),
                px(top),
                px(*width),
                px(PILL_HEIGHT),
                self.palette.pill_bg.hex(),
                self.palette.pill_bg.opacity()
            ));
            w.line(&format!(
                "<text x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}\" font-weight=\"700\" letter-spacing=\"{PILL_TRACKING}\" fill=\"{}\" fill-opacity=\"{}\">{}</text>",
                px(x + PILL_PAD_X),
                px(top + PILL_HEIGHT - 4.5),
                family(self.font),
                px(PILL_FONT_SIZE),
                self.palette.pill_text.hex(),
                self.palette.pill_text.opacity(),
                escape_xml(label)
            ));
            x += *width + PILL_GAP;
        }
        w.line("</g>");
    }

    fn write_meta(&self, w: &mut SvgWriter, m: &MetaBlock, y: f32) {
        if m.ruled {
            self.write_rule(w, y);
        }
        let (anchor, x) = self.anchor();
        let top = y + META_PAD;

        w.line("<g opacity=\"0.3\">");
        let mut line_y = top + META_FONT_SIZE;
        for text in [m.author.as_deref(), m.date.as_deref()].into_iter().flatten() {
            w.line(&format!(
                "<text x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}\" font-weight=\"700\" letter-spacing=\"{META_TRACKING}\" fill=\"{}\" text-anchor=\"{anchor}\">{}</text>",
                px(x),
                px(line_y),
                family(self.font),
                px(META_FONT_SIZE),
                self.palette.text.hex(),
                escape_xml(text)
            ));
            line_y += META_LINE_HEIGHT;
        }
        if let Some(caption) = m.caption {
            // Fixed attribution, always anchored to the right padding edge.
            w.line(&format!(
                "<text x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}\" font-style=\"italic\" fill=\"{}\" fill-opacity=\"0.2\" text-anchor=\"end\">{}</text>",
                px(super::surface::CARD_WIDTH - PADDING),
                px(top + META_FONT_SIZE),
                family(self.font),
                px(CAPTION_FONT_SIZE),
                self.palette.text.hex(),
                escape_xml(caption)
            ));
        }
        w.line("</g>");
    }

    fn write_rule(&self, w: &mut SvgWriter, y: f32) {
        w.line(&format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-opacity=\"0.05\" stroke-width=\"1\"/>",
            px(PADDING),
            px(y),
            px(super::surface::CARD_WIDTH - PADDING),
            px(y),
            Rgba::rgb(0, 0, 0).hex()
        ));
    }
}

#[derive(Default)]
struct SvgWriter {
    out: String,
}

impl SvgWriter {
    fn line(&mut self, s: &str) {
        self.out.push_str(s);
        self.out.push('\n');
    }
}

/// First text baseline inside a line box.
fn baseline(size: f32, leading: f32) -> f32 {
    size * 0.8 + (size * leading - size) / 2.0
}

fn family(font: Font) -> &'static str {
    match font {
        Font::Sans => "sans-serif",
        Font::Serif => "serif",
        Font::Mono => "monospace",
    }
}

/// Formats a pixel value: integers without a fraction, otherwise two decimals.
fn px(v: f32) -> String {
    if (v - v.round()).abs() < 0.005 {
        format!("{}", v.round() as i64)
    } else {
        format!("{v:.2}")
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}
