pub mod ai;
pub mod chat;
pub mod error;
pub mod logging;
pub mod message;
pub mod prompt;
pub mod registry;
pub mod riddle;
pub mod settings;
pub mod skill;
pub mod speaker;

// Re-export commonly used items for easier access
pub use ai::GameAI;
pub use chat::{ChatBackend, ChatSession, SessionHandle};
pub use error::{ChatError, LoggingError, RiddleError, SettingsError, SkillError};
pub use message::{Dialog, SkillMessage};
pub use registry::SessionRegistry;
pub use riddle::{RiddleRecord, RiddleStore};
pub use settings::Settings;
pub use skill::{BlackStoriesSkill, RUNTIME_REQUIREMENTS, RuntimeRequirements};
pub use speaker::{ConsoleSpeaker, Speaker};
