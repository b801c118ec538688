use handlebars::Handlebars;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;

static PROMPT_REGISTRY: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("refine_note", include_str!("refine_note.hbs"));
    m
});

/// Render a prompt by name using Handlebars.
///
/// Usage:
///     render("refine_note", &json!({"notes": "raw text"}))
///
pub fn render(name: &str, ctx: &Value) -> anyhow::Result<String> {
    let template = PROMPT_REGISTRY
        .get(name)
        .ok_or_else(|| anyhow::anyhow!("unknown prompt '{name}'"))?;

    let mut hb = Handlebars::new();
    hb.set_strict_mode(true); // fail if a variable is missing

    hb.render_template(template, ctx)
        .map_err(|e| anyhow::anyhow!("rendering prompt '{name}' failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn refine_note_embeds_raw_text() {
        let rendered = render("refine_note", &json!({"notes": "buy milk & eggs"})).unwrap();
        assert!(rendered.contains("buy milk & eggs"));
        assert!(rendered.contains("RAW NOTES"));
        assert!(rendered.contains("OUTPUT JSON FORMAT"));
    }

    #[test]
    fn unknown_prompt_is_an_error() {
        assert!(render("nope", &json!({})).is_err());
    }

    #[test]
    fn missing_variable_is_an_error() {
        assert!(render("refine_note", &json!({})).is_err());
    }
}
