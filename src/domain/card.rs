//! The card content record: the user-authored semantic fields of a note card.

use serde::{Deserialize, Serialize};

/// User-authored content of a note card.
///
/// All fields are free-form text and may be empty. Tags keep their insertion
/// order (which is also the display order) and are not deduplicated.
///
/// The record is only ever replaced as a whole: every edit goes through one of
/// the `with_*` builders, which produce a new record from the previous one
/// plus a single changed field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardContent {
    pub title: String,
    pub body: String,
    pub author: String,
    pub date: String,
    pub tags: Vec<String>,
}

impl CardContent {
    /// The sample card shown when a session starts.
    pub fn seed() -> Self {
        Self {
            title: "文字即是力量".to_string(),
            body: "在这个碎片化信息的时代，我们希望让文字重新回归舞台的中央。\n\n\
                   NoteFlow 的新版本进一步压缩了日期、作者和标签等元信息的干扰，\
                   让它们以极其微小的姿态存在于角落。这样做是为了把更多的空间留给你的思想，\
                   留给每一个跳动的字符。\n\n\
                   当你在这里记录灵感时，你会发现，排版的留白和呼吸感才是最美装饰。"
                .to_string(),
            author: "NOTEFLOW EDITOR".to_string(),
            date: chrono::Local::now().format("%Y/%m/%d").to_string(),
            tags: vec![
                "MINIMALISM".to_string(),
                "TYPOGRAPHY".to_string(),
                "CONTENT-FIRST".to_string(),
            ],
        }
    }

    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }

    pub fn with_body(&self, body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..self.clone()
        }
    }

    pub fn with_author(&self, author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            ..self.clone()
        }
    }

    pub fn with_date(&self, date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..self.clone()
        }
    }

    pub fn with_tags(&self, tags: Vec<String>) -> Self {
        Self {
            tags,
            ..self.clone()
        }
    }

    /// Resets title, body, and tags to empty. Author and date are kept.
    pub fn cleared(&self) -> Self {
        Self {
            title: String::new(),
            body: String::new(),
            tags: Vec::new(),
            ..self.clone()
        }
    }
}

/// The structured suggestion produced by the refinement collaborator.
///
/// The wire field for the body is named `content` to match the response
/// contract of the text-generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefinedNote {
    pub title: String,
    #[serde(rename = "content")]
    pub body: String,
    pub tags: Vec<String>,
}
