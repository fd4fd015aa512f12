use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body the page sends to either relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextInput {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryOut {
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardsOut {
    pub flashcards: Vec<Flashcard>,
}

/// The two text-processing operations the worker exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Summarise,
    Flashcards,
}

impl Operation {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Summarise => "summarise",
            Self::Flashcards => "flashcards",
        }
    }

    /// Path of the endpoint on the worker service.
    #[must_use]
    pub const fn worker_path(self) -> &'static str {
        match self {
            Self::Summarise => "/summarise",
            Self::Flashcards => "/flashcards",
        }
    }

    /// Path of the relay route this crate serves.
    #[must_use]
    pub const fn relay_path(self) -> &'static str {
        match self {
            Self::Summarise => "/api/summarise",
            Self::Flashcards => "/api/flashcards",
        }
    }

    /// Checks a worker response body against the shape this operation promises.
    ///
    /// Extra fields are tolerated; only the documented ones are checked.
    pub fn check_response_shape(self, body: &Value) -> Result<(), String> {
        let checked = match self {
            Self::Summarise => serde_json::from_value::<SummaryOut>(body.clone()).map(|_| ()),
            Self::Flashcards => serde_json::from_value::<FlashcardsOut>(body.clone()).map(|_| ()),
        };
        checked.map_err(|e| format!("expected {} payload: {e}", self.name()))
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
