//! Domain types for NoteFlow.
//! Defines the card content and styling records plus the error types used
//! throughout the application.

pub mod card;
pub mod error;
pub mod styling;

pub use card::*;
pub use error::*;
pub use styling::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_theme_display_parse() {
        assert_eq!(Theme::House.to_string(), "house");
        assert_eq!(Theme::from_str("dark").unwrap(), Theme::Dark);
        assert!(Theme::from_str("brutalist").is_err());
    }

    #[test]
    fn test_aspect_ratio_display_parse() {
        assert_eq!(AspectRatio::Square.to_string(), "1:1");
        assert_eq!(AspectRatio::from_str("auto").unwrap(), AspectRatio::Auto);
        assert_eq!(AspectRatio::from_str("4:5").unwrap(), AspectRatio::FourFive);
        assert!(AspectRatio::from_str("16:9").is_err());
    }

    #[test]
    fn test_font_size_scale_is_strictly_increasing() {
        let scale = [FontSize::Sm, FontSize::Base, FontSize::Lg, FontSize::Xl];
        for pair in scale.windows(2) {
            assert!(pair[0].px() < pair[1].px());
        }
    }

    #[test]
    fn test_copy_on_write_changes_one_field() {
        let card = CardContent::seed();
        let edited = card.with_title("New title");
        assert_eq!(edited.title, "New title");
        assert_eq!(edited.body, card.body);
        assert_eq!(edited.author, card.author);
        assert_eq!(edited.date, card.date);
        assert_eq!(edited.tags, card.tags);
    }

    #[test]
    fn test_clear_keeps_author_and_date() {
        let card = CardContent::seed();
        let cleared = card.cleared();
        assert!(cleared.title.is_empty());
        assert!(cleared.body.is_empty());
        assert!(cleared.tags.is_empty());
        assert_eq!(cleared.author, card.author);
        assert_eq!(cleared.date, card.date);
    }

    #[test]
    fn test_tags_preserve_order_and_duplicates() {
        let card =
            CardContent::seed().with_tags(vec!["b".to_string(), "a".to_string(), "b".to_string()]);
        assert_eq!(card.tags, ["b", "a", "b"]);
    }

    #[test]
    fn test_house_theme_forces_serif() {
        let styling = Styling::default()
            .with_theme(Theme::House)
            .with_font(Font::Mono);
        assert_eq!(styling.effective_font(), Font::Serif);

        let styling = styling.with_theme(Theme::Dark);
        assert_eq!(styling.effective_font(), Font::Mono);
    }
}
