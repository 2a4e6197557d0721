//! Host text formatting
//!
//! Emphasis and collapsible blocks look different on every host, so the
//! renderer only ever asks a [`TextFormatter`] for them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Markup supplied by the host
pub trait TextFormatter: Send + Sync {
    /// Inline emphasis (bold)
    fn emphasize(&self, text: &str) -> String;

    /// A summary/detail disclosure block
    fn collapsible(&self, detail: &str, summary: &str) -> String;
}

/// Markdown hosts (Discourse, Discord, GitHub-flavoured)
#[derive(Debug, Clone, Copy, Default)]
pub struct Markdown;

impl TextFormatter for Markdown {
    fn emphasize(&self, text: &str) -> String {
        format!("**{}**", text)
    }

    fn collapsible(&self, detail: &str, summary: &str) -> String {
        format!("<details>\n<summary>{}</summary>\n\n{}\n</details>", summary, detail)
    }
}

/// Hosts without any markup
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl TextFormatter for PlainText {
    fn emphasize(&self, text: &str) -> String {
        text.to_string()
    }

    fn collapsible(&self, detail: &str, summary: &str) -> String {
        format!("{}\n{}", summary, detail)
    }
}

/// Built-in formatter selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatterKind {
    #[default]
    Markdown,
    Plain,
}

impl FormatterKind {
    /// Instantiate the formatter
    pub fn build(self) -> Arc<dyn TextFormatter> {
        match self {
            FormatterKind::Markdown => Arc::new(Markdown),
            FormatterKind::Plain => Arc::new(PlainText),
        }
    }
}
