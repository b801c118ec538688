use crate::domain::{
    AspectRatio, BorderStyle, CardContent, Font, FontSize, Styling, TextAlign, Theme,
};
use crate::render::palette::{Background, Elevation, Palette, Rgba};
use crate::render::surface::{compose, Block, CARD_WIDTH, MIN_AUTO_HEIGHT};

fn sample_card() -> CardContent {
    CardContent {
        title: "To-Do".to_string(),
        body: "- Buy milk\n- Call mom\n- Finish report".to_string(),
        author: "me".to_string(),
        date: "2026/08/07".to_string(),
        tags: vec!["tasks".to_string(), "personal".to_string()],
    }
}

fn has_tags_block(blocks: &[Block]) -> bool {
    blocks.iter().any(|b| matches!(b, Block::Tags(_)))
}

#[test]
fn compose_and_svg_are_deterministic() {
    let card = CardContent::seed();
    let styling = Styling::default();

    let first = compose(&card, &styling);
    let second = compose(&card, &styling);
    assert_eq!(first, second);
    assert_eq!(first.to_svg(), second.to_svg());
}

#[test]
fn compose_does_not_mutate_inputs() {
    let card = sample_card();
    let styling = Styling::default();
    let card_before = card.clone();
    let styling_before = styling;

    let _ = compose(&card, &styling);
    assert_eq!(card, card_before);
    assert_eq!(styling, styling_before);
}

#[test]
fn theme_palettes_are_mutually_exclusive() {
    let palettes: Vec<Palette> = Theme::ALL.iter().map(|t| Palette::of(*t)).collect();
    for (i, a) in palettes.iter().enumerate() {
        for b in palettes.iter().skip(i + 1) {
            assert_ne!(a, b, "two themes share a palette bundle");
        }
    }

    // The surface carries exactly the selected theme's bundle.
    for theme in Theme::ALL {
        let surface = compose(&sample_card(), &Styling::default().with_theme(theme));
        assert_eq!(surface.palette, Palette::of(theme));
    }
}

#[test]
fn fallback_palette_is_plain_light() {
    let fallback = Palette::fallback();
    assert_eq!(fallback.background, Background::Solid(Rgba::WHITE));
    assert_eq!(fallback.elevation, Elevation::None);
    assert!(Theme::ALL.iter().all(|t| Palette::of(*t) != fallback));
}

#[test]
fn toggle_idempotence() {
    let card = sample_card();
    let styling = Styling::default();
    let same = styling.with_show_tags(styling.show_tags);

    assert_eq!(compose(&card, &styling), compose(&card, &same));
    assert_eq!(
        compose(&card, &styling).to_svg(),
        compose(&card, &same).to_svg()
    );
}

#[test]
fn empty_tags_render_no_block_regardless_of_toggle() {
    let card = sample_card().with_tags(Vec::new());

    let shown = compose(&card, &Styling::default().with_show_tags(true));
    let hidden = compose(&card, &Styling::default().with_show_tags(false));
    assert!(!has_tags_block(&shown.blocks));
    assert!(!has_tags_block(&hidden.blocks));
}

#[test]
fn hidden_tags_render_no_block() {
    let surface = compose(&sample_card(), &Styling::default().with_show_tags(false));
    assert!(!has_tags_block(&surface.blocks));
}

#[test]
fn empty_title_is_omitted_entirely() {
    let surface = compose(&sample_card().with_title(""), &Styling::default());
    assert!(!surface
        .blocks
        .iter()
        .any(|b| matches!(b, Block::Title(_))));
}

#[test]
fn empty_hidden_meta_renders_no_placeholder() {
    let card = sample_card().with_author("").with_date("");
    let styling = Styling::default()
        .with_theme(Theme::Minimal)
        .with_show_author(false)
        .with_show_date(false);
    let surface = compose(&card, &styling);
    assert!(!surface.blocks.iter().any(|b| matches!(b, Block::Meta(_))));
}

#[test]
fn house_theme_special_casing() {
    let styling = Styling::default()
        .with_theme(Theme::House)
        .with_font(Font::Mono);
    let surface = compose(&sample_card(), &styling);

    assert_eq!(surface.font, Font::Serif);
    assert!(surface.texture_overlay);
    assert_eq!(surface.corner_radius, 2.0);

    let body_italic = surface.blocks.iter().any(|b| match b {
        Block::Body(body) => body.italic,
        _ => false,
    });
    assert!(body_italic);

    let caption = surface.blocks.iter().any(|b| match b {
        Block::Meta(meta) => meta.caption.is_some(),
        _ => false,
    });
    assert!(caption);

    // No other theme renders the attribution caption or the texture.
    for theme in Theme::ALL.iter().filter(|t| **t != Theme::House) {
        let other = compose(&sample_card(), &Styling::default().with_theme(*theme));
        assert!(!other.texture_overlay);
        assert!(!other.blocks.iter().any(|b| match b {
            Block::Meta(meta) => meta.caption.is_some(),
            _ => false,
        }));
    }
}

#[test]
fn dark_theme_uses_light_on_dark_pills() {
    let dark = Palette::of(Theme::Dark);
    assert!(dark.pill_bg.r == 255 && dark.pill_bg.a < 255);

    for theme in Theme::ALL.iter().filter(|t| **t != Theme::Dark) {
        let palette = Palette::of(*theme);
        assert_eq!(palette.pill_bg.r, 0, "{theme} should use dark-on-light pills");
    }
}

#[test]
fn aspect_ratio_switch_changes_only_container_shape() {
    let card = sample_card();
    let auto = compose(&card, &Styling::default().with_aspect_ratio(AspectRatio::Auto));
    let square = compose(
        &card,
        &Styling::default().with_aspect_ratio(AspectRatio::Square),
    );

    assert_eq!(square.width, CARD_WIDTH);
    assert_eq!(square.height, CARD_WIDTH);
    assert_ne!(auto.height, square.height);

    // Everything except the container shape is untouched.
    assert_eq!(auto.blocks, square.blocks);
    assert_eq!(auto.palette, square.palette);
    assert_eq!(auto.border, square.border);
    assert_eq!(auto.corner_radius, square.corner_radius);
}

#[test]
fn fixed_ratios_have_exact_proportions() {
    let card = sample_card();
    let three_four = compose(
        &card,
        &Styling::default().with_aspect_ratio(AspectRatio::ThreeFour),
    );
    assert_eq!(three_four.height, CARD_WIDTH * 4.0 / 3.0);

    let four_five = compose(
        &card,
        &Styling::default().with_aspect_ratio(AspectRatio::FourFive),
    );
    assert_eq!(four_five.height, CARD_WIDTH * 5.0 / 4.0);
}

#[test]
fn auto_ratio_has_a_height_floor() {
    let card = CardContent {
        title: String::new(),
        body: "hi".to_string(),
        author: String::new(),
        date: String::new(),
        tags: Vec::new(),
    };
    let surface = compose(
        &card,
        &Styling::default()
            .with_theme(Theme::Minimal)
            .with_aspect_ratio(AspectRatio::Auto),
    );
    assert_eq!(surface.height, MIN_AUTO_HEIGHT);
}

#[test]
fn auto_ratio_grows_with_content() {
    let short = compose(&sample_card(), &Styling::default());
    let long = compose(
        &sample_card().with_body(sample_card().body.repeat(40)),
        &Styling::default(),
    );
    assert!(long.height > short.height);
}

#[test]
fn font_size_enum_scales_body_text() {
    let card = sample_card();
    let mut last = 0.0_f32;
    for size in FontSize::ALL {
        let surface = compose(&card, &Styling::default().with_font_size(size));
        let body_size = surface
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Body(body) => Some(body.size),
                _ => None,
            })
            .expect("body block");
        assert!(body_size > last);
        last = body_size;
    }
}

#[test]
fn alignment_is_uniform_across_blocks() {
    let left = compose(&sample_card(), &Styling::default()).to_svg();
    let centered = compose(
        &sample_card(),
        &Styling::default().with_text_align(TextAlign::Center),
    )
    .to_svg();

    assert!(left.contains("text-anchor=\"start\""));
    assert!(!left.contains("text-anchor=\"middle\""));
    assert!(centered.contains("text-anchor=\"middle\""));
    assert!(!centered.contains("text-anchor=\"start\""));
}

#[test]
fn border_styles_map_to_container_stroke() {
    let card = sample_card();
    let styling = Styling::default().with_theme(Theme::Minimal);

    let none = compose(&card, &styling.with_border(BorderStyle::None));
    assert_eq!(none.border.width, 0.0);
    assert!(!none.to_svg().contains("stroke-width"));

    let thin = compose(&card, &styling.with_border(BorderStyle::Thin));
    let thick = compose(&card, &styling.with_border(BorderStyle::Thick));
    assert!(thin.border.width < thick.border.width);
    assert!(!thin.border.dashed && !thick.border.dashed);

    let dashed = compose(&card, &styling.with_border(BorderStyle::Dashed));
    assert!(dashed.border.dashed);
    assert!(dashed.to_svg().contains("stroke-dasharray"));
}

#[test]
fn gradient_theme_emits_gradient_definition() {
    let gradient = compose(
        &sample_card(),
        &Styling::default().with_theme(Theme::Gradient),
    )
    .to_svg();
    assert!(gradient.contains("<linearGradient id=\"card-bg\""));

    let minimal = compose(
        &sample_card(),
        &Styling::default().with_theme(Theme::Minimal),
    )
    .to_svg();
    assert!(!minimal.contains("linearGradient"));
}

#[test]
fn tags_render_as_pills_in_sequence_order() {
    let card = sample_card().with_tags(vec![
        "beta".to_string(),
        "alpha".to_string(),
        "beta".to_string(),
    ]);
    let surface = compose(&card, &Styling::default());
    let labels = surface
        .blocks
        .iter()
        .find_map(|b| match b {
            Block::Tags(row) => Some(row.labels.clone()),
            _ => None,
        })
        .expect("tag row");
    assert_eq!(labels, ["BETA", "ALPHA", "BETA"]);

    let svg = surface.to_svg();
    let alpha_at = svg.find("ALPHA").expect("alpha pill");
    let beta_at = svg.find("BETA").expect("beta pill");
    assert!(beta_at < alpha_at, "pills must keep insertion order");
}

#[test]
fn svg_escapes_markup_in_content() {
    let card = sample_card().with_title("<script> & \"quotes\"");
    let svg = compose(&card, &Styling::default()).to_svg();
    assert!(!svg.contains("<script>"));
    assert!(svg.contains("&lt;script&gt;"));
    assert!(svg.contains("&amp;"));
}
