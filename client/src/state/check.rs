//! Check form and result state, plus the submission controller transitions.
//!
//! DESIGN
//! ======
//! One `CheckState` value is owned by the page in an `RwSignal`. Handlers run
//! its transitions explicitly instead of touching DOM nodes:
//!
//! - `begin_submission` validates input and marks the trigger busy.
//! - `complete` consumes the request outcome and always returns the trigger to
//!   idle before deciding what to show.
//! - `clear` resets the inputs and hides the result region.
//!
//! There is no cancellation: a reply that lands after `clear` still renders.

#[cfg(test)]
#[path = "check_test.rs"]
mod check_test;

use verdict::{CheckOutcome, CheckRequest, LangHint, ResultView, render_result};

use crate::net::api::CheckError;

/// Trigger label while idle.
pub const IDLE_LABEL: &str = "تحقق (Verify)";
/// Trigger label while a request is in flight.
pub const BUSY_LABEL: &str = "جاري التحقق... (Checking)";

pub const EMPTY_TEXT_NOTICE: &str = "الرجاء إدخال نص الخبر أولاً!";
pub const NOT_READY_NOTICE: &str = "النموذج لا يزال يتدرب (Training). الرجاء الانتظار قليلاً والمحاولة مرة أخرى.";

/// What the page should do once a request finishes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    /// A result was rendered; bring it into view.
    Rendered,
    /// Nothing rendered; show this message.
    Notice(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CheckState {
    /// Article text input.
    pub text: String,
    /// Source-domain input.
    pub source: String,
    pub lang: LangHint,
    /// A request is in flight; the trigger is disabled.
    pub busy: bool,
    pub result_visible: bool,
    /// Most recently rendered result. Kept after `clear` for the clipboard export.
    pub result: Option<ResultView>,
}

impl CheckState {
    #[must_use]
    pub fn trigger_label(&self) -> &'static str {
        if self.busy { BUSY_LABEL } else { IDLE_LABEL }
    }

    /// Validate the inputs and enter the busy state.
    ///
    /// # Errors
    ///
    /// Returns [`EMPTY_TEXT_NOTICE`] without changing state when the trimmed
    /// text is empty; no request must be sent in that case.
    pub fn begin_submission(&mut self) -> Result<CheckRequest, &'static str> {
        let request = CheckRequest::from_input(&self.text, &self.source, self.lang).ok_or(EMPTY_TEXT_NOTICE)?;
        self.busy = true;
        Ok(request)
    }

    /// Apply a finished request. Every path leaves the trigger idle.
    pub fn complete(&mut self, result: Result<CheckOutcome, CheckError>) -> Completion {
        self.busy = false;
        match result {
            Ok(CheckOutcome::NotReady) => Completion::Notice(NOT_READY_NOTICE.to_owned()),
            Ok(CheckOutcome::Rejected { message, .. }) => Completion::Notice(rejected_notice(&message)),
            Ok(CheckOutcome::Verdict(response)) => {
                self.result = Some(render_result(&response));
                self.result_visible = true;
                Completion::Rendered
            }
            Err(e) => Completion::Notice(connection_notice(&e)),
        }
    }

    /// Empty the text and source inputs and hide the result region.
    pub fn clear(&mut self) {
        self.text.clear();
        self.source.clear();
        self.result_visible = false;
    }

    /// Clipboard summary of the last rendered result.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        self.result.as_ref().map(ResultView::summary)
    }
}

#[must_use]
pub fn rejected_notice(message: &str) -> String {
    format!("خطأ: {message}")
}

#[must_use]
pub fn connection_notice(err: &CheckError) -> String {
    format!("خطأ في الاتصال: {err}")
}
