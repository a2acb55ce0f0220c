//! Static question bank.
//!
//! A declarative table mapping (language, category) to one scripted
//! question and its expected answer. Built once at startup, never
//! mutated; content edits happen here without touching control flow.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::session::Language;

/// One of the seven fixed exercise categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Grammar,
    Vocabulary,
    Idioms,
    PhrasalVerbs,
    ConversationPractice,
    Reading,
    Writing,
}

impl Category {
    /// All categories, in menu order.
    pub const ALL: [Self; 7] = [
        Self::Grammar,
        Self::Vocabulary,
        Self::Idioms,
        Self::PhrasalVerbs,
        Self::ConversationPractice,
        Self::Reading,
        Self::Writing,
    ];

    /// Button label as rendered on the category menu.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Grammar => "📚 Grammar",
            Self::Vocabulary => "📖 Vocabulary",
            Self::Idioms => "💬 Idioms",
            Self::PhrasalVerbs => "🗣 Phrasal Verbs",
            Self::ConversationPractice => "🗨 Conversation Practice",
            Self::Reading => "👀 Reading",
            Self::Writing => "✍ Writing",
        }
    }

    /// Bare lowercase name, for matching typed input without the emoji.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Grammar => "grammar",
            Self::Vocabulary => "vocabulary",
            Self::Idioms => "idioms",
            Self::PhrasalVerbs => "phrasal verbs",
            Self::ConversationPractice => "conversation practice",
            Self::Reading => "reading",
            Self::Writing => "writing",
        }
    }

    /// Match normalized (trimmed, lowercased) input against a category.
    ///
    /// Accepts both the full button label and the bare name, so typed
    /// input works as well as button presses.
    #[must_use]
    pub fn parse(normalized: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| {
            normalized == category.label().to_lowercase() || normalized == category.keyword()
        })
    }
}

/// One scripted question and its expected answer.
#[derive(Debug, Clone, Copy)]
pub struct QuestionCard {
    pub question: &'static str,
    pub answer: &'static str,
}

type BankKey = (Language, Category);

static BANK: Lazy<HashMap<BankKey, QuestionCard>> = Lazy::new(|| {
    use Category as C;
    use Language::{English, Spanish};

    let entries: [(BankKey, QuestionCard); 14] = [
        (
            (English, C::Grammar),
            QuestionCard {
                question: "What is the past tense of 'go'?",
                answer: "went",
            },
        ),
        (
            (Spanish, C::Grammar),
            QuestionCard {
                question: "¿Cuál es el tiempo pasado de 'ir'?",
                answer: "fui",
            },
        ),
        (
            (English, C::Vocabulary),
            QuestionCard {
                question: "What is the synonym of 'happy'?",
                answer: "joyful",
            },
        ),
        (
            (Spanish, C::Vocabulary),
            QuestionCard {
                question: "¿Cuál es el sinónimo de 'feliz'?",
                answer: "contento",
            },
        ),
        (
            (English, C::Idioms),
            QuestionCard {
                question: "What does 'break the ice' mean?",
                answer: "start a conversation",
            },
        ),
        (
            (Spanish, C::Idioms),
            QuestionCard {
                question: "¿Qué significa 'romper el hielo'?",
                answer: "empezar una conversación",
            },
        ),
        (
            (English, C::PhrasalVerbs),
            QuestionCard {
                question: "What does 'give up' mean?",
                answer: "surrender",
            },
        ),
        (
            (Spanish, C::PhrasalVerbs),
            QuestionCard {
                question: "¿Qué significa 'give up'?",
                answer: "rendirse",
            },
        ),
        (
            (English, C::ConversationPractice),
            QuestionCard {
                question: "How do you introduce yourself?",
                answer: "My name is...",
            },
        ),
        (
            (Spanish, C::ConversationPractice),
            QuestionCard {
                question: "¿Cómo te presentas?",
                answer: "Me llamo...",
            },
        ),
        (
            (English, C::Reading),
            QuestionCard {
                question: "Read this sentence and tell me the main idea:",
                answer: "The main idea is...",
            },
        ),
        (
            (Spanish, C::Reading),
            QuestionCard {
                question: "Lee esta frase y dime la idea principal:",
                answer: "La idea principal es...",
            },
        ),
        (
            (English, C::Writing),
            QuestionCard {
                question: "Write a short paragraph about your favorite hobby.",
                answer: "My favorite hobby is...",
            },
        ),
        (
            (Spanish, C::Writing),
            QuestionCard {
                question: "Escribe un párrafo corto sobre tu pasatiempo favorito.",
                answer: "Mi pasatiempo favorito es...",
            },
        ),
    ];

    entries.into_iter().collect()
});

/// Look up the scripted card for a language/category pair.
///
/// The table covers the full 7 × 2 domain, so this only returns `None`
/// if the table itself is edited incorrectly.
#[must_use]
pub fn card(language: Language, category: Category) -> Option<&'static QuestionCard> {
    BANK.get(&(language, category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_is_total() {
        for language in [Language::English, Language::Spanish] {
            for category in Category::ALL {
                let card = card(language, category)
                    .unwrap_or_else(|| panic!("missing card for {language:?}/{category:?}"));
                assert!(!card.question.is_empty());
                assert!(!card.answer.is_empty());
            }
        }
    }

    #[test]
    fn test_parse_accepts_label_and_keyword() {
        assert_eq!(Category::parse("📚 grammar"), Some(Category::Grammar));
        assert_eq!(Category::parse("grammar"), Some(Category::Grammar));
        assert_eq!(
            Category::parse("phrasal verbs"),
            Some(Category::PhrasalVerbs)
        );
        assert_eq!(
            Category::parse("🗨 conversation practice"),
            Some(Category::ConversationPractice)
        );
        assert_eq!(Category::parse("vocabulario-incorrecto"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn test_spanish_answers_keep_accents() {
        let card = card(Language::Spanish, Category::Idioms).unwrap();
        assert_eq!(card.answer, "empezar una conversación");
    }
}
