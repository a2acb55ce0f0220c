//! User-facing message strings, English and Spanish variants.
//!
//! Wording preserved from the scripted content, including emoji.

use crate::session::Language;

pub const fn language_choice_prompt() -> &'static str {
    "Hello! I can teach you two languages: English and Spanish. \
     Please choose which one you'd like to learn:"
}

pub const fn name_prompt(language: Language) -> &'static str {
    match language {
        Language::English => "Great! Let's start with English. What's your name?",
        Language::Spanish => "¡Genial! Empecemos con español. ¿Cómo te llamas?",
    }
}

pub fn welcome(language: Language, name: &str) -> String {
    match language {
        Language::English => format!(
            "Welcome, {name}! I'm excited to help you learn English. \
             Could you tell me a bit about yourself?"
        ),
        Language::Spanish => format!(
            "Bienvenido, {name}! Estoy emocionado de ayudarte a aprender español. \
             ¿Podrías contarme un poco sobre ti?"
        ),
    }
}

pub const fn category_transition(language: Language) -> &'static str {
    match language {
        Language::English => {
            "Oh, very interesting! Now, how about we expand your skills with some \
             specific exercises? Choose a category you'd like to explore:"
        }
        Language::Spanish => {
            "¡Oh, qué interesante! Ahora, ¿qué te parece si ampliamos tus habilidades \
             con algunos ejercicios específicos? Elige una categoría que te gustaría \
             explorar:"
        }
    }
}

pub const fn menu_prompt(language: Language) -> &'static str {
    match language {
        Language::English => "Choose an exercise to continue practicing English:",
        Language::Spanish => "Elige un ejercicio para continuar practicando español:",
    }
}

pub const fn category_unrecognized(language: Language) -> &'static str {
    match language {
        Language::English => {
            "I didn't understand that. Please choose a category by clicking a button below."
        }
        Language::Spanish => {
            "No entendí eso. Por favor, elige una categoría haciendo clic en un botón de abajo."
        }
    }
}

pub fn answer_correct(language: Language, score: u32) -> String {
    match language {
        Language::English => format!("Correct! 🎉 Your score is now {score}."),
        Language::Spanish => format!("¡Correcto! 🎉 Tu puntuación es ahora de {score}."),
    }
}

pub fn answer_incorrect(language: Language, expected: &str) -> String {
    match language {
        Language::English => format!("Incorrect. The correct answer is: {expected}. ❌"),
        Language::Spanish => format!("Incorrecto. La respuesta correcta es: {expected}. ❌"),
    }
}

pub const fn unknown_command(language: Language) -> &'static str {
    match language {
        Language::English => "Unknown command. Please try again. 🤷‍♂️",
        Language::Spanish => "Comando desconocido. Por favor, intenta de nuevo. 🤷‍♂️",
    }
}
