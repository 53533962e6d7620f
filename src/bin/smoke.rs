//! Manual smoke test: one fixed-prompt proofreading query against the
//! configured completion endpoint, outside the plan-generation path.
//!
//! ```text
//! plansmith-smoke --user-text "превет, как делла?"
//! ```

use clap::Parser;

use plansmith::prompt::Message;
use plansmith::providers::YandexGptProvider;
use plansmith::Config;

/// Fixed instruction for the smoke query.
const SMOKE_SYSTEM_PROMPT: &str =
    "Ты — внимательный редактор. Исправь орфографические и пунктуационные ошибки в тексте пользователя и верни только исправленный текст.";

#[derive(Parser)]
#[command(name = "plansmith-smoke", about = "One-shot completion smoke test")]
struct Args {
    /// Text to send to the completion endpoint.
    #[arg(long)]
    user_text: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = Config::load()?;
    let provider = YandexGptProvider::from_config(&config)?;

    let messages = vec![
        Message::system(SMOKE_SYSTEM_PROMPT),
        Message::user(args.user_text),
    ];
    let answer = provider.complete(messages).await?;
    println!("{answer}");
    Ok(())
}
