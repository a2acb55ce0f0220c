use teloxide::types::BotCommand;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Reset,
    Help,
}

impl Command {
    fn all() -> Vec<BotCommand> {
        vec![
            BotCommand {
                command: "start".to_string(),
                description: "Restart the quiz and pick a language".to_string(),
            },
            BotCommand {
                command: "reset".to_string(),
                description: "Reset your session and score".to_string(),
            },
            BotCommand {
                command: "help".to_string(),
                description: "Show help".to_string(),
            },
        ]
    }

    #[must_use]
    pub fn bot_commands() -> Vec<BotCommand> {
        Self::all()
    }

    #[must_use]
    pub fn parse_from_text(text: &str, _bot_name: &str) -> Option<Self> {
        let text = text.trim().to_lowercase();

        // Remove bot mention if present (e.g., "/start@my_bot")
        let text = text.split('@').next().unwrap_or(&text).to_string();

        match text.as_str() {
            "/start" => Some(Self::Start),
            "/reset" => Some(Self::Reset),
            "/help" => Some(Self::Help),
            _ => None,
        }
    }

    #[must_use]
    pub const fn help_text() -> &'static str {
        r"
🤖 Lingobot

Commands:
/start - restart the quiz and pick a language
/reset - reset your session and score
/help  - show this help

Pick a language, then answer the scripted exercises to rack up points!
"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse_from_text("/start", ""), Some(Command::Start));
        assert_eq!(
            Command::parse_from_text("  /reset  ", ""),
            Some(Command::Reset)
        );
        assert_eq!(Command::parse_from_text("/HELP", ""), Some(Command::Help));
    }

    #[test]
    fn test_parse_strips_bot_mention() {
        assert_eq!(
            Command::parse_from_text("/start@lingobot", ""),
            Some(Command::Start)
        );
    }

    #[test]
    fn test_plain_text_is_not_a_command() {
        assert_eq!(Command::parse_from_text("english", ""), None);
        assert_eq!(Command::parse_from_text("went", ""), None);
        assert_eq!(Command::parse_from_text("", ""), None);
    }
}
