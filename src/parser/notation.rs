//! Dice notation evaluation
//!
//! Notation such as `2x1d20+1d4`, `4dF` or `ceil(1d6/2)` is evaluated in
//! three passes: repetition (`NxEXPR`) fans out into independent
//! sub-queries, every `NdS` term is rolled, and the rolled totals are
//! spliced back into the text and handed to an [`Evaluator`].

use std::sync::{Arc, LazyLock};

use futures_util::future::{join_all, try_join_all, BoxFuture, FutureExt};
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::dice::{roll_async, DiceRoll, DieSource, Faces, ScoringMode, ThreadRngSource};
use crate::error::DiceError;
use crate::eval::{Arithmetic, Evaluator};
use crate::render::TextFormatter;

/// Anything worth looking at contains an operator, a die or a repetition
static SANITY_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)[-+*/dx]").unwrap());

/// Fate die marker, "dF"
static FATE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)df").unwrap());

/// A single dice term, "NdS"
static TERM_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+[dD]\d+").unwrap());

/// Deepest `NxEXPR` nesting that is expanded; anything deeper rolls nothing
pub const MAX_REPETITION_DEPTH: usize = 16;

/// The outcome of evaluating one piece of notation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResult {
    /// Notation as it was given
    pub input: String,
    /// Final value
    pub total: f64,
    /// One "term: faces = score" line per dice term
    pub term_breakdowns: Vec<String>,
    /// Per-repetition results when the repetition operator was used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_queries: Option<Vec<ParseResult>>,
}

impl ParseResult {
    /// A zero result with nothing rolled
    pub fn empty(input: &str) -> Self {
        Self {
            input: input.to_string(),
            total: 0.0,
            term_breakdowns: Vec::new(),
            sub_queries: None,
        }
    }
}

/// Evaluates dice notation
pub struct Roller {
    source: Arc<dyn DieSource>,
    evaluator: Arc<dyn Evaluator>,
    formatter: Arc<dyn TextFormatter>,
}

impl Roller {
    /// Roller using the thread RNG and the built-in arithmetic evaluator.
    ///
    /// `formatter` is used to highlight successes in White Wolf and Scion
    /// breakdowns.
    pub fn new(formatter: Arc<dyn TextFormatter>) -> Self {
        Self {
            source: Arc::new(ThreadRngSource),
            evaluator: Arc::new(Arithmetic),
            formatter,
        }
    }

    /// Replace the die source
    pub fn with_source(mut self, source: Arc<dyn DieSource>) -> Self {
        self.source = source;
        self
    }

    /// Replace the arithmetic evaluator
    pub fn with_evaluator(mut self, evaluator: Arc<dyn Evaluator>) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Evaluate `notation` under `mode`.
    ///
    /// Every call rolls fresh dice. Malformed notation yields a zero result;
    /// only arithmetic that fails after dice were substituted is an error.
    pub fn parse<'a>(
        &'a self,
        notation: &'a str,
        mode: ScoringMode,
    ) -> BoxFuture<'a, Result<ParseResult, DiceError>> {
        self.parse_at(notation, mode, 0)
    }

    /// `depth` counts the repetitions enclosing `notation`
    fn parse_at<'a>(
        &'a self,
        notation: &'a str,
        mode: ScoringMode,
        depth: usize,
    ) -> BoxFuture<'a, Result<ParseResult, DiceError>> {
        async move {
            if !SANITY_REGEX.is_match(notation) {
                debug!("nothing to roll in {:?}", notation);
                return Ok(ParseResult::empty(notation));
            }

            match split_repetition(notation) {
                Some(_) if depth >= MAX_REPETITION_DEPTH => {
                    debug!("repetition nested too deep in {:?}", notation);
                    Ok(ParseResult::empty(notation))
                }
                Some((count, expr)) => {
                    self.parse_repeated(notation, count, expr, mode, depth).await
                }
                None => self.parse_terms(notation, mode).await,
            }
        }
        .boxed()
    }

    async fn parse_repeated(
        &self,
        notation: &str,
        count: usize,
        expr: &str,
        mode: ScoringMode,
        depth: usize,
    ) -> Result<ParseResult, DiceError> {
        debug!("repeating {:?} {} times", expr, count);

        let sub_queries =
            try_join_all((0..count).map(|_| self.parse_at(expr, mode, depth + 1))).await?;
        // fold from +0 so zero repetitions total 0, not -0
        let total = sub_queries.iter().fold(0.0, |acc, query| acc + query.total);

        Ok(ParseResult {
            input: notation.to_string(),
            total,
            term_breakdowns: Vec::new(),
            sub_queries: Some(sub_queries),
        })
    }

    async fn parse_terms(&self, notation: &str, mode: ScoringMode) -> Result<ParseResult, DiceError> {
        let (expr, mode) = if FATE_REGEX.is_match(notation) {
            (FATE_REGEX.replace_all(notation, "d6").into_owned(), ScoringMode::Fate)
        } else {
            (notation.to_string(), mode)
        };

        let terms: Vec<_> = TERM_REGEX
            .find_iter(&expr)
            .filter_map(|m| m.as_str().parse::<DiceRoll>().ok().map(|pool| (m.range(), pool)))
            .collect();

        if terms.is_empty() {
            return Ok(match self.evaluator.evaluate(&expr) {
                Ok(total) => ParseResult {
                    total,
                    ..ParseResult::empty(notation)
                },
                Err(err) => {
                    debug!("malformed notation {:?}: {}", notation, err);
                    ParseResult::empty(notation)
                }
            });
        }

        let source = self.source.as_ref();
        let outcomes = join_all(terms.iter().map(|(_, pool)| roll_async(source, *pool, mode))).await;

        let mut substituted = String::with_capacity(expr.len());
        let mut breakdowns = Vec::with_capacity(terms.len());
        let mut cursor = 0;

        for ((range, pool), outcome) in terms.iter().zip(&outcomes) {
            substituted.push_str(&expr[cursor..range.start]);
            substituted.push_str(&outcome.total.to_string());
            cursor = range.end;

            breakdowns.push(format!(
                "{}: {} = {}",
                pool,
                self.format_faces(&outcome.faces, mode),
                outcome.total
            ));
        }
        substituted.push_str(&expr[cursor..]);

        debug!("evaluating {:?} as {:?}", notation, substituted);
        let total = self.evaluator.evaluate(&substituted)?;

        Ok(ParseResult {
            input: notation.to_string(),
            total,
            term_breakdowns: breakdowns,
            sub_queries: None,
        })
    }

    fn format_faces(&self, faces: &Faces, mode: ScoringMode) -> String {
        let rendered: Vec<String> = match faces {
            Faces::Fate(faces) => faces.iter().map(ToString::to_string).collect(),
            Faces::Numeric(faces) => faces
                .iter()
                .map(|&face| {
                    let text = face.to_string();
                    if mode.highlights(face) {
                        self.formatter.emphasize(&text)
                    } else {
                        text
                    }
                })
                .collect(),
        };
        rendered.join(" ")
    }
}

/// Split "NxEXPR" at the first `x`; an unreadable count means zero repetitions
fn split_repetition(notation: &str) -> Option<(usize, &str)> {
    let at = notation.find(['x', 'X'])?;
    let count = notation[..at].trim().parse::<usize>().unwrap_or(0);
    Some((count, &notation[at + 1..]))
}
