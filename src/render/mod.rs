//! Result rendering
//!
//! A [`ParseResult`] is rendered one of three ways depending on what the
//! host can display:
//! - Single line, with repetitions wrapped in `«…»`
//! - Multiple lines, with a bold header per repetition
//! - A collapsible block with a one-line summary

mod format;

use std::sync::Arc;

pub use format::{FormatterKind, Markdown, PlainText, TextFormatter};

use crate::parser::ParseResult;

/// What the host is able to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayCapabilities {
    /// Replies may span several lines
    pub multiline: bool,
    /// Replies may contain a summary/detail block
    pub collapsible: bool,
}

/// Output layout chosen from the capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    SingleLine,
    MultiLine,
    Collapsible,
}

impl DisplayCapabilities {
    /// Collapsible blocks need multi-line support as well
    pub fn layout(self) -> Layout {
        match (self.multiline, self.collapsible) {
            (false, _) => Layout::SingleLine,
            (true, false) => Layout::MultiLine,
            (true, true) => Layout::Collapsible,
        }
    }
}

/// Renders roll results for one host
#[derive(Clone)]
pub struct Renderer {
    formatter: Arc<dyn TextFormatter>,
    layout: Layout,
}

impl Renderer {
    /// Create a renderer; capabilities are fixed for its lifetime
    pub fn new(formatter: Arc<dyn TextFormatter>, capabilities: DisplayCapabilities) -> Self {
        Self {
            formatter,
            layout: capabilities.layout(),
        }
    }

    /// The layout this renderer produces
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Render a result as reply text
    pub fn render(&self, result: &ParseResult) -> String {
        let total = self.formatter.emphasize(&result.total.to_string());

        match self.layout {
            Layout::SingleLine => format!(
                "You rolled: {} || {} || Total: {}",
                result.input,
                self.single_line_body(result),
                total
            ),
            Layout::MultiLine => format!(
                "You rolled {}\n\n{}\nTotal: {}",
                result.input,
                self.multi_line_body(result, 0),
                total
            ),
            Layout::Collapsible => {
                let detail = format!(
                    "{}: \n{}\nTotal: {}",
                    self.formatter.emphasize("Your rolls"),
                    self.multi_line_body(result, 0),
                    total
                );
                let summary = format!("You rolled {}: {}", result.input, result.total);
                self.formatter.collapsible(&detail, &summary)
            }
        }
    }

    fn single_line_body(&self, result: &ParseResult) -> String {
        match &result.sub_queries {
            Some(queries) => queries
                .iter()
                .map(|query| format!("«{}»", self.single_line_body(query)))
                .collect::<Vec<_>>()
                .join(" | "),
            None => result.term_breakdowns.join(" | "),
        }
    }

    fn multi_line_body(&self, result: &ParseResult, depth: usize) -> String {
        match &result.sub_queries {
            Some(queries) => queries
                .iter()
                .map(|query| self.multi_line_block(query, depth))
                .collect::<Vec<_>>()
                .join("\n"),
            None => result.term_breakdowns.join("\n"),
        }
    }

    /// One repetition: a bold header and a bullet per term
    fn multi_line_block(&self, query: &ParseResult, depth: usize) -> String {
        let indent = "  ".repeat(depth);
        let lines = match query.sub_queries {
            Some(_) => self.multi_line_body(query, depth + 1),
            None => query
                .term_breakdowns
                .iter()
                .map(|line| format!("{}- {}", indent, line))
                .collect::<Vec<_>>()
                .join("\n"),
        };

        format!(
            "{}{}:\n{}\n",
            indent,
            self.formatter.emphasize(&query.input),
            lines
        )
    }
}
