//! Per-chat session state.
//!
//! A session tracks where one chat is in the quiz script: which language
//! they picked, their name, their running score, and the current step.
//! Sessions are created on first contact and live for the process
//! lifetime; `/start` resets the fields in place.

use chrono::{DateTime, Utc};

/// Language the user chose to practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Spanish,
}

/// Current step of the quiz script.
///
/// Each variant carries only the data valid in that step, so an
/// inconsistent session (say, awaiting an answer with no expected answer
/// recorded) cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizState {
    /// Fresh or reset session; nothing chosen yet.
    Idle,
    /// Language picked, waiting for the user's name.
    AwaitingName,
    /// Name captured, waiting for the "tell me about yourself" reply.
    Introduction,
    /// Showing the category menu, waiting for a pick.
    ChoosingCategory,
    /// Question sent; the reply is graded against `expected`.
    AwaitingAnswer {
        /// Expected answer, non-empty by construction.
        expected: String,
    },
}

/// Mutable per-chat quiz session.
#[derive(Debug, Clone)]
pub struct Session {
    /// Stable chat identifier from the transport.
    pub chat_id: i64,
    /// Current step of the script.
    pub state: QuizState,
    /// Chosen language, `None` until the user picks one.
    pub language: Option<Language>,
    /// User name, captured once (trimmed and case-folded).
    pub user_name: Option<String>,
    /// Cumulative correct-answer counter.
    pub score: u32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Create a fresh session for a chat.
    #[must_use]
    pub fn new(chat_id: i64) -> Self {
        let now = Utc::now();
        Self {
            chat_id,
            state: QuizState::Idle,
            language: None,
            user_name: None,
            score: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reset all fields to their initial values, keeping the chat id.
    pub fn reset(&mut self) {
        self.state = QuizState::Idle;
        self.language = None;
        self.user_name = None;
        self.score = 0;
        self.touch();
    }

    /// Bump the last-update timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// The session language, falling back to English wording when the
    /// user has not picked one yet.
    #[must_use]
    pub const fn language_or_default(&self) -> Language {
        match self.language {
            Some(lang) => lang,
            None => Language::English,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::new(42);
        assert_eq!(session.chat_id, 42);
        assert_eq!(session.state, QuizState::Idle);
        assert_eq!(session.language, None);
        assert_eq!(session.user_name, None);
        assert_eq!(session.score, 0);
    }

    #[test]
    fn test_reset_clears_everything_but_chat_id() {
        let mut session = Session::new(7);
        session.language = Some(Language::Spanish);
        session.user_name = Some("bob".to_string());
        session.score = 3;
        session.state = QuizState::AwaitingAnswer {
            expected: "fui".to_string(),
        };

        session.reset();

        assert_eq!(session.chat_id, 7);
        assert_eq!(session.state, QuizState::Idle);
        assert_eq!(session.language, None);
        assert_eq!(session.user_name, None);
        assert_eq!(session.score, 0);
    }

    #[test]
    fn test_language_fallback() {
        let mut session = Session::new(1);
        assert_eq!(session.language_or_default(), Language::English);

        session.language = Some(Language::Spanish);
        assert_eq!(session.language_or_default(), Language::Spanish);
    }
}
