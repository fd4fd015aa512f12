use tracing::{info, warn};

use super::relay_client::RelayClient;
use crate::core::models::{Flashcard, FlashcardsOut, SummaryOut, TextInput};
use crate::form_parser::PageForm;

/// Result of one call from the page to a relay handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome<T> {
    Success(T),
    Failure(String),
}

impl<T> CallOutcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> CallOutcome<U> {
        match self {
            Self::Success(v) => CallOutcome::Success(f(v)),
            Self::Failure(msg) => CallOutcome::Failure(msg),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CallStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// One result slot of the page: the value on screen plus how the last call went.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slot<T> {
    value: T,
    status: CallStatus,
}

impl<T> Slot<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn status(&self) -> &CallStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == CallStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            CallStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    fn begin(&mut self) {
        self.status = CallStatus::Loading;
    }

    /// Success replaces the value wholesale; failure keeps it.
    fn apply(&mut self, outcome: CallOutcome<T>) {
        match outcome {
            CallOutcome::Success(value) => {
                self.value = value;
                self.status = CallStatus::Ready;
            }
            CallOutcome::Failure(msg) => {
                self.status = CallStatus::Failed(msg);
            }
        }
    }
}

/// The single view: input text plus the summary and flashcard results.
///
/// `begin_*` and `apply_*` are split so both calls can be in flight at once;
/// each only touches its own slot. Responses apply in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    input_text: String,
    summary: Slot<String>,
    flashcards: Slot<Vec<Flashcard>>,
}

impl Page {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the page from a submitted form.
    ///
    /// A hidden `flashcards` field that is not valid JSON restores as empty.
    #[must_use]
    pub fn from_form(form: &PageForm) -> Self {
        let flashcards = if form.flashcards.trim().is_empty() {
            Vec::new()
        } else {
            serde_json::from_str(&form.flashcards).unwrap_or_else(|e| {
                warn!(error = %e, "Discarding malformed flashcards field");
                Vec::new()
            })
        };

        Self {
            input_text: form.text.clone(),
            summary: Slot {
                value: form.summary.clone(),
                status: CallStatus::Idle,
            },
            flashcards: Slot {
                value: flashcards,
                status: CallStatus::Idle,
            },
        }
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    pub fn summary(&self) -> &Slot<String> {
        &self.summary
    }

    pub fn flashcards(&self) -> &Slot<Vec<Flashcard>> {
        &self.flashcards
    }

    /// The summary section is shown only for a non-empty summary.
    pub fn shows_summary(&self) -> bool {
        !self.summary.value.is_empty()
    }

    /// The flashcard section is shown only when at least one card exists.
    pub fn shows_flashcards(&self) -> bool {
        !self.flashcards.value.is_empty()
    }

    /// Marks the summary as loading and returns the request body to send.
    pub fn begin_summary(&mut self) -> TextInput {
        self.summary.begin();
        TextInput {
            text: self.input_text.clone(),
        }
    }

    pub fn apply_summary(&mut self, outcome: CallOutcome<SummaryOut>) {
        self.summary.apply(outcome.map(|out| out.summary));
    }

    pub fn begin_flashcards(&mut self) -> TextInput {
        self.flashcards.begin();
        TextInput {
            text: self.input_text.clone(),
        }
    }

    pub fn apply_flashcards(&mut self, outcome: CallOutcome<FlashcardsOut>) {
        self.flashcards.apply(outcome.map(|out| out.flashcards));
    }

    pub async fn request_summary(&mut self, relay: &dyn RelayClient) {
        let input = self.begin_summary();
        let outcome = relay.summarise(&input).await;
        if let CallOutcome::Failure(msg) = &outcome {
            warn!(error = %msg, "Summary request failed");
        } else {
            info!("Summary request succeeded");
        }
        self.apply_summary(outcome);
    }

    pub async fn request_flashcards(&mut self, relay: &dyn RelayClient) {
        let input = self.begin_flashcards();
        let outcome = relay.flashcards(&input).await;
        if let CallOutcome::Failure(msg) = &outcome {
            warn!(error = %msg, "Flashcards request failed");
        } else {
            info!("Flashcards request succeeded");
        }
        self.apply_flashcards(outcome);
    }
}
