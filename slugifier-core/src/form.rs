//! The three-field slug form and its derived result.
//!
//! Every setter recomputes the result before returning. There is no
//! subscription or effect queue: the front end calls a setter whenever one of
//! its fields changes and reads [`SlugForm::result`] afterwards.

use crate::feedback::CopyFeedback;
use crate::params::{clamp_limit, effective_limit, parse_limit, Separator, LIMIT_DEFAULT};
use crate::slug::normalize;

#[derive(Debug, Clone)]
pub struct SlugForm {
    text: String,
    limit: i64,
    separator: Separator,
    result: String,
}

impl Default for SlugForm {
    fn default() -> Self {
        Self::new(Separator::default(), LIMIT_DEFAULT)
    }
}

impl SlugForm {
    /// Create an empty form with the given starting parameters. The limit is
    /// clamped, since a starting value counts as finished editing.
    pub fn new(separator: Separator, limit: i64) -> Self {
        Self {
            text: String::new(),
            limit: clamp_limit(limit),
            separator,
            result: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The limit as currently entered (may be below the minimum mid-edit).
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// What the limit field displays.
    pub fn limit_input(&self) -> String {
        self.limit.to_string()
    }

    pub fn separator(&self) -> Separator {
        self.separator
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.recompute();
    }

    /// Apply a keystroke-level change to the limit field. Non-numeric or zero
    /// input becomes the default; small values are kept until blur.
    pub fn set_limit_input(&mut self, raw: &str) {
        self.limit = parse_limit(raw);
        self.recompute();
    }

    /// The limit field lost focus: raise the limit to the minimum if needed.
    pub fn blur_limit(&mut self) {
        let clamped = clamp_limit(self.limit);
        if clamped != self.limit {
            tracing::debug!(from = self.limit, to = clamped, "limit clamped on blur");
            self.limit = clamped;
            self.recompute();
        }
    }

    /// Select a separator from raw input; out-of-set values pick the default.
    pub fn set_separator_input(&mut self, raw: &str) {
        self.set_separator(Separator::coerce(raw));
    }

    pub fn set_separator(&mut self, separator: Separator) {
        self.separator = separator;
        self.recompute();
    }

    /// Whether the copy action is available right now.
    pub fn can_copy(&self, feedback: &CopyFeedback) -> bool {
        !self.result.is_empty() && !feedback.in_flight()
    }

    fn recompute(&mut self) {
        self.result = normalize(&self.text, self.separator, effective_limit(self.limit));
        tracing::debug!(
            separator = %self.separator,
            limit = self.limit,
            len = self.result.len(),
            "slug recomputed"
        );
    }
}
