use blackstories::settings::DATA_DIR;
use blackstories::{
    BlackStoriesSkill, ConsoleSpeaker, GameAI, RiddleStore, Settings, SkillMessage, logging,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use uuid::Uuid;

const API_KEY_ENV: &str = "BLACKSTORIES_API_KEY";

const HELP: &str = "Commands: /start, /new, /stop, /help, /quit. Anything else is a question for the Riddle Master.";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = logging::init(DATA_DIR, log::Level::Debug) {
        eprintln!("Failed to set up logging: {e}");
    }

    let mut settings = Settings::load()?;
    if settings.credential().is_none() {
        if let Ok(api_key) = std::env::var(API_KEY_ENV) {
            settings.api_key = api_key;
        }
    }

    let backend = GameAI::new(settings.api_base.clone());
    if let Some(credential) = settings.credential() {
        if let Err(e) = backend.validate_credential(credential).await {
            log::warn!("API key validation failed: {e}");
            println!("Please verify your API key and internet connection. Error: {e}");
        }
    }

    // The riddle file sits next to the skill data unless another root is given.
    let root_dir = std::env::args().nth(1).unwrap_or_else(|| DATA_DIR.to_string());
    let skill = BlackStoriesSkill::new(
        settings,
        RiddleStore::new(root_dir),
        Arc::new(backend),
        Arc::new(ConsoleSpeaker),
    );
    skill.initialize();

    let session_id = Uuid::new_v4().to_string();
    log::info!("Black Stories terminal session {session_id}");
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let message = SkillMessage::new(session_id.as_str());
        match line {
            "" => continue,
            "/quit" => break,
            "/help" => println!("{HELP}"),
            "/start" => skill.on_start_intent(&message).await,
            "/new" => skill.on_new_riddle_event(&message).await,
            "/stop" => skill.on_deactivate(&message).await,
            question => {
                let message = message.with_utterances([question]);
                if !skill.on_converse(&message).await {
                    println!("No game in progress. Type /start to hear a black story.");
                }
            }
        }
    }

    skill.on_deactivate(&SkillMessage::new(session_id)).await;
    log::info!("Black Stories exit: {}", chrono::Local::now());
    Ok(())
}
