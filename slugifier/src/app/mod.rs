mod input;

use std::time::Instant;

use slugifier_core::config::Config;
use slugifier_core::feedback::CopyFeedback;
use slugifier_core::SlugForm;

use crate::clipboard::Clipboard;

// ── Focus ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Text,
    Limit,
    Separator,
}

impl Field {
    const ORDER: [Field; 3] = [Field::Text, Field::Limit, Field::Separator];

    fn next(self) -> Field {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Field {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

// ── App ───────────────────────────────────────────────────────────────────────

pub struct App {
    pub form: SlugForm,
    pub feedback: CopyFeedback,
    pub focus: Field,
    /// Cursor position in the text field, in characters.
    pub cursor: usize,
    /// What the user has typed into the limit field since it gained focus.
    pub limit_buffer: String,
    /// One-line message under the form (e.g. a failed copy).
    pub status: Option<String>,
    clipboard: Box<dyn Clipboard>,
}

impl App {
    pub fn new(config: &Config, clipboard: Box<dyn Clipboard>) -> Self {
        let form = SlugForm::new(config.separator, config.limit);
        let limit_buffer = form.limit_input();
        Self {
            form,
            feedback: CopyFeedback::new(config.spinner, config.confirm),
            focus: Field::Text,
            cursor: 0,
            limit_buffer,
            status: None,
            clipboard,
        }
    }

    /// Drive the copy feedback timers.
    pub fn on_tick(&mut self, now: Instant) {
        self.feedback.tick(now);
    }

    pub fn can_copy(&self) -> bool {
        self.form.can_copy(&self.feedback)
    }

    /// Copy the current slug to the clipboard and start the feedback sequence.
    pub fn copy(&mut self, now: Instant) {
        if !self.can_copy() {
            return;
        }
        match self.clipboard.copy(self.form.result()) {
            Ok(()) => {
                tracing::info!(len = self.form.result().len(), "slug copied");
                self.status = None;
                self.feedback.start(now);
            }
            Err(e) => {
                tracing::warn!(error = %e, "copy failed");
                self.status = Some(format!("Copy failed: {e}"));
            }
        }
    }

    /// Move focus, blurring the limit field if it is being left.
    pub fn set_focus(&mut self, field: Field) {
        if self.focus == Field::Limit && field != Field::Limit {
            self.form.blur_limit();
            self.limit_buffer = self.form.limit_input();
        }
        if field == Field::Limit {
            self.limit_buffer = self.form.limit_input();
        }
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    /// What the limit field should display right now.
    pub fn limit_display(&self) -> String {
        if self.focus == Field::Limit {
            self.limit_buffer.clone()
        } else {
            self.form.limit_input()
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
