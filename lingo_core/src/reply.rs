//! Engine output: reply text plus an optional quick-reply keyboard.
//!
//! Keyboards are fixed label grids; the transport layer renders them
//! with whatever markup its client library uses.

/// One of the two canned quick-reply keyboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyboard {
    /// Initial "1. English / 2. Spanish" choice.
    LanguageChoice,
    /// Seven exercise categories.
    CategoryMenu,
}

const LANGUAGE_ROWS: &[&[&str]] = &[&["1. English", "2. Spanish"], &["🔄 Сброс"]];

const CATEGORY_ROWS: &[&[&str]] = &[
    &["📚 Grammar", "📖 Vocabulary"],
    &["💬 Idioms", "🗣 Phrasal Verbs"],
    &["🗨 Conversation Practice", "👀 Reading", "✍ Writing"],
    &["🔄 Сброс"],
];

impl Keyboard {
    /// Button label grid, outer slice is rows.
    #[must_use]
    pub const fn rows(self) -> &'static [&'static [&'static str]] {
        match self {
            Self::LanguageChoice => LANGUAGE_ROWS,
            Self::CategoryMenu => CATEGORY_ROWS,
        }
    }
}

/// What the engine wants sent back to the chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyPlan {
    pub text: String,
    pub keyboard: Option<Keyboard>,
}

impl ReplyPlan {
    /// Plain text reply, no keyboard.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }

    /// Text reply with a quick-reply keyboard attached.
    #[must_use]
    pub fn with_keyboard(text: impl Into<String>, keyboard: Keyboard) -> Self {
        Self {
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::Category;

    #[test]
    fn test_category_menu_covers_all_categories() {
        let labels: Vec<&str> = Keyboard::CategoryMenu
            .rows()
            .iter()
            .flat_map(|row| row.iter().copied())
            .collect();

        for category in Category::ALL {
            assert!(labels.contains(&category.label()));
        }
    }

    #[test]
    fn test_both_keyboards_carry_reset_button() {
        for keyboard in [Keyboard::LanguageChoice, Keyboard::CategoryMenu] {
            let has_reset = keyboard
                .rows()
                .iter()
                .any(|row| row.contains(&"🔄 Сброс"));
            assert!(has_reset);
        }
    }
}
