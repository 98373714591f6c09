use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter};

/// Event payload delivered by the host for intents, bus events and converse turns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillMessage {
    pub session_id: String,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub utterance: Option<String>,
    #[serde(default)]
    pub utterances: Vec<String>,
}

impl SkillMessage {
    pub fn new(session_id: impl Into<String>) -> Self {
        SkillMessage {
            session_id: session_id.into(),
            ..Default::default()
        }
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn with_utterance(mut self, utterance: impl Into<String>) -> Self {
        self.utterance = Some(utterance.into());
        self
    }

    pub fn with_utterances<I, S>(mut self, utterances: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.utterances = utterances.into_iter().map(Into::into).collect();
        self
    }

    // `utterance` when set, otherwise the first transcription, otherwise empty.
    pub fn question(&self) -> &str {
        match self.utterance.as_deref() {
            Some(utterance) if !utterance.is_empty() => utterance,
            _ => self.utterances.first().map(String::as_str).unwrap_or(""),
        }
    }
}

/// First non-empty candidate among the host's transcriptions.
pub fn first_utterance<S: AsRef<str>>(utterances: &[S]) -> Option<&str> {
    utterances
        .iter()
        .map(AsRef::as_ref)
        .find(|utterance| !utterance.trim().is_empty())
}

/// Fixed spoken messages, named after the host dialog files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumIter)]
pub enum Dialog {
    #[strum(serialize = "error.no_api_key")]
    NoApiKey,
    #[strum(serialize = "error.start")]
    StartFailed,
    #[strum(serialize = "error.answer")]
    AnswerFailed,
}

impl Dialog {
    pub fn text(self) -> &'static str {
        match self {
            Dialog::NoApiKey => {
                "I need an API key for the chat service before we can play. Please add it to the skill settings."
            }
            Dialog::StartFailed => "Sorry, I could not start a new black story right now.",
            Dialog::AnswerFailed => "Sorry, I could not answer that question. Please try again.",
        }
    }
}
