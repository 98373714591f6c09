use thiserror::Error;

// Errors surfaced by the skill's game operations. Every variant maps to a fixed spoken dialog.
#[derive(Debug, Error)]
pub enum SkillError {
    #[error("No API key configured")]
    CredentialMissing, // The settings carry no credential for the chat service.

    #[error("Failed to start Black Stories: {0}")]
    Start(#[source] ChatError), // Session creation or the priming exchange failed.

    #[error("Failed to answer the question: {0}")]
    Answer(#[source] ChatError), // The follow-up exchange on an active session failed.
}

// Errors raised by the conversational backend.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("OpenAI API error: {0}")]
    OpenAI(#[from] async_openai::error::OpenAIError), // Errors from the chat completion API.

    #[error("No message found")]
    NoMessageFound, // The model answered without any text content.

    #[error("Chat backend error: {0}")]
    Backend(String), // Failures from other backends.
}

// Errors while reading the riddle collection. The store logs these and degrades to empty.
#[derive(Debug, Error)]
pub enum RiddleError {
    #[error("Riddle file does not exist: {0}")]
    Missing(String),

    #[error("Error reading riddles: {0}")]
    IO(#[from] std::io::Error),

    #[error("Malformed riddle file: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Riddle file contains no riddles")]
    Empty,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Could not create log path: {0}")]
    IO(#[from] std::io::Error),

    #[error("Logger already set: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}
