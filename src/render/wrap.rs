//! Deterministic greedy line wrapping with a fixed per-font width model.
//!
//! The card layout must be reproducible byte-for-byte without consulting a
//! font rasterizer, so glyph advances are approximated from East Asian width:
//! wide characters advance one em, narrow characters a fixed fraction of it.

use crate::domain::Font;
use unicode_width::UnicodeWidthChar;

/// Approximate advance of one character at `size` pixels.
pub fn char_advance(c: char, size: f32, font: Font) -> f32 {
    let cells = UnicodeWidthChar::width(c).unwrap_or(0) as f32;
    let per_cell = match font {
        Font::Mono => 0.60,
        Font::Sans | Font::Serif => 0.52,
    };
    if cells >= 2.0 {
        size
    } else {
        cells * per_cell * size
    }
}

/// Approximate advance of a whole string.
pub fn text_advance(text: &str, size: f32, font: Font) -> f32 {
    text.chars().map(|c| char_advance(c, size, font)).sum()
}

/// Greedy-wraps `text` into lines no wider than `max_width`.
///
/// Paragraph breaks (`\n`) are preserved; an empty input paragraph stays an
/// empty line. Latin text breaks at the last space on the line when one
/// exists; CJK runs break at any character.
pub fn wrap_text(text: &str, max_width: f32, size: f32, font: Font) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, max_width, size, font, &mut lines);
    }
    lines
}

fn wrap_paragraph(paragraph: &str, max_width: f32, size: f32, font: Font, out: &mut Vec<String>) {
    if paragraph.is_empty() {
        out.push(String::new());
        return;
    }

    let mut line = String::new();
    let mut line_width = 0.0_f32;
    // Byte offset of the last space in `line`, if any.
    let mut last_space: Option<usize> = None;

    for c in paragraph.chars() {
        let advance = char_advance(c, size, font);

        if line_width + advance > max_width && !line.is_empty() {
            if let Some(space_at) = last_space {
                let rest = line.split_off(space_at);
                out.push(std::mem::take(&mut line));
                line = rest.trim_start().to_string();
            } else {
                out.push(std::mem::take(&mut line));
            }
            line_width = text_advance(&line, size, font);
            last_space = None;
        }

        if c == ' ' {
            last_space = Some(line.len());
        }
        line.push(c);
        line_width += advance;
    }

    out.push(line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_is_deterministic() {
        let text = "排版的留白和呼吸感才是最美装饰，mixed with latin words too。";
        let a = wrap_text(text, 200.0, 18.0, Font::Serif);
        let b = wrap_text(text, 200.0, 18.0, Font::Serif);
        assert_eq!(a, b);
        assert!(a.len() > 1);
    }

    #[test]
    fn paragraph_breaks_are_preserved() {
        let lines = wrap_text("one\n\ntwo", 500.0, 18.0, Font::Sans);
        assert_eq!(lines, ["one", "", "two"]);
    }

    #[test]
    fn latin_breaks_at_spaces() {
        let lines = wrap_text("alpha beta gamma delta", 60.0, 18.0, Font::Sans);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(!line.starts_with(' '), "line starts with space: {line:?}");
            assert!(!line.ends_with(' ') || line.trim().is_empty());
        }
        let rejoined = lines.join(" ").split_whitespace().collect::<Vec<_>>().join(" ");
        assert_eq!(rejoined, "alpha beta gamma delta");
    }

    #[test]
    fn cjk_breaks_anywhere() {
        let lines = wrap_text("一二三四五六七八九十", 18.0 * 4.5, 18.0, Font::Serif);
        assert!(lines.len() >= 2);
        assert_eq!(lines.concat(), "一二三四五六七八九十");
    }
}
