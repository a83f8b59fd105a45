//! Terminal chat caller for the parlance engine.
//!
//! This binary is the "caller" collaborator: it owns the message history,
//! passes it in full on every turn, and prints the returned markdown as-is.
//!
//! # Environment Variables
//!
//! - `PARLANCE_CATALOG` — "business" (default) or "casual"
//! - `RUST_LOG` — log filter (e.g. "debug")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin repl
//! ```

use std::io::{self, BufRead, Write};

use parlance::{ConversationEngine, EngineConfig, Turn};

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = match std::env::var("PARLANCE_CATALOG").as_deref() {
        Ok("casual") => EngineConfig::casual(),
        _ => EngineConfig::business(),
    };
    log::info!("starting repl over the '{}' catalog", config.variant_name);

    let mut engine = ConversationEngine::new(config);
    let mut history: Vec<Turn> = Vec::new();

    println!("parlance {} — type /help for commands, /quit to leave\n", parlance::VERSION);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("you> ");
        if io::stdout().flush().is_err() {
            break;
        }
        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => break,
        };
        if line.trim().eq_ignore_ascii_case("/quit") {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        history.push(Turn::user(line.clone()));
        let reply = engine.generate_response(&line, &history).await;
        history.push(Turn::assistant(reply.clone()));

        println!("\nassistant> {reply}\n");
    }

    println!("bye!");
}
