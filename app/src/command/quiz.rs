//! Local practice session over stdin/stdout.
//!
//! Runs the same engine the Telegram transport uses, against a single
//! local session, rendering keyboards as bracketed button rows.

use lingo_core::{Engine, ReplyPlan};
use lingo_session::SessionStore;
use std::io::Write;

/// Chat id used for the single local session.
const LOCAL_CHAT_ID: i64 = 0;

/// Strategy for an interactive quiz session in the terminal.
#[derive(Debug, Clone, Copy)]
pub struct QuizStrategy;

fn print_plan(plan: &ReplyPlan) {
    println!("\n{}\n", plan.text);

    if let Some(keyboard) = plan.keyboard {
        for row in keyboard.rows() {
            let line = row
                .iter()
                .map(|label| format!("[{label}]"))
                .collect::<Vec<_>>()
                .join(" ");
            println!("  {line}");
        }
        println!();
    }
}

impl super::CommandStrategy for QuizStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let store = SessionStore::new();
        let engine = Engine::new();
        let handle = store.get_or_create(LOCAL_CHAT_ID).await;

        println!("=== Lingobot practice session ===");
        println!("Type 'exit', 'quit', or Ctrl+C to end the session.");

        // Open with the language choice, as a fresh Telegram chat would.
        let plan = engine.handle(&mut *handle.lock().await, "/start");
        print_plan(&plan);

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let mut input = String::new();
            if std::io::stdin().read_line(&mut input)? == 0 {
                break;
            }
            let input = input.trim();

            if matches!(input, "exit" | "quit" | "q") {
                break;
            }

            if input.is_empty() {
                continue;
            }

            let plan = engine.handle(&mut *handle.lock().await, input);
            print_plan(&plan);
        }

        let score = handle.lock().await.score;
        println!("\nSession ended. Final score: {score}");

        Ok(())
    }
}
