//! Theme palettes: each theme maps to one fixed bundle of background, text
//! color, border color, pill treatment, and elevation.

use crate::domain::Theme;

/// An RGBA color. Alpha 255 is fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const TRANSPARENT: Rgba = Rgba::rgba(0, 0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    /// Hex form without alpha, e.g. `#f4ecd8`.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Opacity in `0.0..=1.0`, rendered with two decimals.
    pub fn opacity(&self) -> String {
        format!("{:.2}", f32::from(self.a) / 255.0)
    }
}

/// Card background fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Background {
    Solid(Rgba),
    /// Top-left to bottom-right three-stop gradient.
    Linear { from: Rgba, via: Rgba, to: Rgba },
}

/// Shadow treatment of the card container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Elevation {
    None,
    /// The house theme's barely-there paper lift.
    Soft,
    /// A tinted mid-size shadow.
    Lifted,
    /// A large dark shadow.
    Deep,
}

/// The complete, mutually exclusive style bundle a theme resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette {
    pub background: Background,
    pub text: Rgba,
    pub border: Rgba,
    pub pill_bg: Rgba,
    pub pill_text: Rgba,
    pub elevation: Elevation,
}

// Tailwind slate/indigo/purple/pink stops used by the original card styles.
const SLATE_50: Rgba = Rgba::rgb(0xf8, 0xfa, 0xfc);
const SLATE_100: Rgba = Rgba::rgb(0xf1, 0xf5, 0xf9);
const SLATE_200: Rgba = Rgba::rgb(0xe2, 0xe8, 0xf0);
const SLATE_300: Rgba = Rgba::rgb(0xcb, 0xd5, 0xe1);
const SLATE_700: Rgba = Rgba::rgb(0x33, 0x41, 0x55);
const SLATE_800: Rgba = Rgba::rgb(0x1e, 0x29, 0x3b);
const SLATE_900: Rgba = Rgba::rgb(0x0f, 0x17, 0x2a);
const INDIGO_100: Rgba = Rgba::rgb(0xe0, 0xe7, 0xff);
const INDIGO_500: Rgba = Rgba::rgb(0x63, 0x66, 0xf1);
const PURPLE_500: Rgba = Rgba::rgb(0xa8, 0x55, 0xf7);
const PINK_500: Rgba = Rgba::rgb(0xec, 0x48, 0x99);

const PILL_LIGHT_BG: Rgba = Rgba::rgba(0, 0, 0, 13); // black at 5%
const PILL_LIGHT_TEXT: Rgba = Rgba::rgba(0, 0, 0, 153); // black at 60%
const PILL_DARK_BG: Rgba = Rgba::rgba(255, 255, 255, 26); // white at 10%
const PILL_DARK_TEXT: Rgba = SLATE_300;

impl Palette {
    /// Resolves a theme to its palette bundle.
    pub fn of(theme: Theme) -> Self {
        match theme {
            Theme::Minimal => Self {
                background: Background::Solid(Rgba::WHITE),
                text: SLATE_800,
                border: SLATE_200,
                pill_bg: PILL_LIGHT_BG,
                pill_text: PILL_LIGHT_TEXT,
                elevation: Elevation::None,
            },
            Theme::Modern => Self {
                background: Background::Solid(SLATE_50),
                text: SLATE_900,
                border: INDIGO_100,
                pill_bg: PILL_LIGHT_BG,
                pill_text: PILL_LIGHT_TEXT,
                elevation: Elevation::Lifted,
            },
            Theme::Glass => Self {
                background: Background::Solid(Rgba::rgba(255, 255, 255, 204)),
                text: SLATE_800,
                border: Rgba::rgba(255, 255, 255, 128),
                pill_bg: PILL_LIGHT_BG,
                pill_text: PILL_LIGHT_TEXT,
                elevation: Elevation::Deep,
            },
            Theme::Sepia => Self {
                background: Background::Solid(Rgba::rgb(0xf4, 0xec, 0xd8)),
                text: Rgba::rgb(0x5b, 0x46, 0x36),
                border: Rgba::rgb(0xe1, 0xd5, 0xb3),
                pill_bg: PILL_LIGHT_BG,
                pill_text: PILL_LIGHT_TEXT,
                elevation: Elevation::None,
            },
            Theme::Dark => Self {
                background: Background::Solid(SLATE_900),
                text: SLATE_100,
                border: SLATE_700,
                pill_bg: PILL_DARK_BG,
                pill_text: PILL_DARK_TEXT,
                elevation: Elevation::Deep,
            },
            Theme::Gradient => Self {
                background: Background::Linear {
                    from: INDIGO_500,
                    via: PURPLE_500,
                    to: PINK_500,
                },
                text: Rgba::WHITE,
                border: Rgba::TRANSPARENT,
                pill_bg: PILL_LIGHT_BG,
                pill_text: PILL_LIGHT_TEXT,
                elevation: Elevation::None,
            },
            Theme::House => Self {
                background: Background::Solid(Rgba::rgb(0xff, 0xfe, 0xf9)),
                text: Rgba::rgb(0x44, 0x44, 0x44),
                border: Rgba::rgb(0xe6, 0xe2, 0xd5),
                pill_bg: PILL_LIGHT_BG,
                pill_text: PILL_LIGHT_TEXT,
                elevation: Elevation::Soft,
            },
        }
    }

    /// Plain light palette used when a theme token cannot be resolved, e.g.
    /// an unrecognized value in a styling snapshot.
    pub fn fallback() -> Self {
        Self {
            background: Background::Solid(Rgba::WHITE),
            text: SLATE_800,
            border: Rgba::TRANSPARENT,
            pill_bg: PILL_LIGHT_BG,
            pill_text: PILL_LIGHT_TEXT,
            elevation: Elevation::None,
        }
    }
}
