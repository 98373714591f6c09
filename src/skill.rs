use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::chat::{ChatBackend, SessionHandle};
use crate::error::{ChatError, SkillError};
use crate::message::{Dialog, SkillMessage, first_utterance};
use crate::prompt::priming_instruction;
use crate::registry::SessionRegistry;
use crate::riddle::{RiddleRecord, RiddleStore};
use crate::settings::Settings;
use crate::speaker::Speaker;

/// What the skill needs from the host before it can be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuntimeRequirements {
    pub internet_before_load: bool,
    pub network_before_load: bool,
    pub requires_internet: bool,
    pub requires_network: bool,
    pub requires_gui: bool,
    pub no_internet_fallback: bool,
    pub no_network_fallback: bool,
    pub no_gui_fallback: bool,
}

pub const RUNTIME_REQUIREMENTS: RuntimeRequirements = RuntimeRequirements {
    internet_before_load: true,
    network_before_load: true,
    requires_internet: true,
    requires_network: true,
    requires_gui: false,
    no_internet_fallback: false,
    no_network_fallback: false,
    no_gui_fallback: true,
};

/// The Black Stories game host.
///
/// Every game is a remote chat primed with a riddle and its solution; the
/// skill only tracks which conversation owns which chat and relays text in
/// both directions. All failures are logged and answered with a fixed dialog.
pub struct BlackStoriesSkill {
    settings: RwLock<Settings>,
    riddles: RiddleStore,
    sessions: SessionRegistry,
    backend: Arc<dyn ChatBackend>,
    speaker: Arc<dyn Speaker>,
}

impl BlackStoriesSkill {
    pub fn new(
        settings: Settings,
        riddles: RiddleStore,
        backend: Arc<dyn ChatBackend>,
        speaker: Arc<dyn Speaker>,
    ) -> Self {
        Self {
            settings: RwLock::new(settings),
            riddles,
            sessions: SessionRegistry::new(),
            backend,
            speaker,
        }
    }

    pub fn initialize(&self) {
        self.riddles.load();
    }

    pub fn riddles(&self) -> &RiddleStore {
        &self.riddles
    }

    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    pub async fn settings(&self) -> Settings {
        self.settings.read().await.clone()
    }

    pub async fn on_settings_changed(&self, settings: Settings) {
        *self.settings.write().await = settings;
        log::info!("Black Stories settings changed!");
    }

    /// Primes a new chat with `riddle` and makes it the game of `session_id`.
    ///
    /// An existing game for the same session is replaced without notice. On
    /// failure the registry is left untouched.
    pub async fn start_game(
        &self,
        session_id: &str,
        lang: &str,
        riddle: &RiddleRecord,
    ) -> Result<String, SkillError> {
        let (credential, model) = {
            let settings = self.settings.read().await;
            match settings.credential() {
                Some(credential) => (credential.to_string(), settings.model.clone()),
                None => {
                    log::warn!("No API key configured, cannot start Black Stories");
                    self.speaker.speak_dialog(session_id, Dialog::NoApiKey);
                    return Err(SkillError::CredentialMissing);
                }
            }
        };

        let instruction = priming_instruction(lang, riddle);
        match self.prime_session(&credential, &model, &instruction).await {
            Ok((handle, intro)) => {
                self.speaker.speak(session_id, &intro);
                let handle_id = handle.id();
                if let Some(previous) = self.sessions.insert(session_id, handle).await {
                    log::debug!(
                        "Discarded chat session {} of {session_id}",
                        previous.id()
                    );
                }
                log::info!("Started Black Stories for {session_id} with chat session {handle_id}");
                Ok(intro)
            }
            Err(e) => {
                log::error!("Failed to start Black Stories using {model}: {e}");
                self.speaker.speak_dialog(session_id, Dialog::StartFailed);
                Err(SkillError::Start(e))
            }
        }
    }

    async fn prime_session(
        &self,
        credential: &str,
        model: &str,
        instruction: &str,
    ) -> Result<(SessionHandle, String), ChatError> {
        let handle = self.backend.create_session(credential, model).await?;
        let intro = handle.send(instruction).await?;
        Ok((handle, intro))
    }

    /// Starts a game with a random riddle, reloading the riddles first if none are available.
    pub async fn start_new_game(&self, session_id: &str, lang: &str) -> Result<String, SkillError> {
        self.riddles.ensure_loaded();
        let riddle = self.riddles.pick_random();
        self.start_game(session_id, lang, &riddle).await
    }

    /// Relays a question to the game of `session_id`.
    ///
    /// Without a game in progress the question starts a new one instead, in
    /// the configured default language. A failed answer keeps the game as is.
    pub async fn ask(&self, session_id: &str, utterance: &str) -> Result<String, SkillError> {
        self.ask_in(session_id, None, utterance).await
    }

    // Same as `ask`, but an implicit start uses `lang` when the host supplied one.
    async fn ask_in(
        &self,
        session_id: &str,
        lang: Option<&str>,
        utterance: &str,
    ) -> Result<String, SkillError> {
        let Some(handle) = self.sessions.get(session_id).await else {
            log::warn!("No active Black Stories session for {session_id}, starting new one...");
            let lang = match lang {
                Some(lang) => lang.to_string(),
                None => self.settings.read().await.lang.clone(),
            };
            return self.start_new_game(session_id, &lang).await;
        };
        self.forward(session_id, &handle, utterance).await
    }

    async fn forward(
        &self,
        session_id: &str,
        handle: &SessionHandle,
        utterance: &str,
    ) -> Result<String, SkillError> {
        match handle.send(utterance).await {
            Ok(reply) => {
                self.speaker.speak(session_id, &reply);
                Ok(reply)
            }
            Err(e) => {
                log::error!("Chat model failed to answer for {session_id}: {e}");
                self.speaker.speak_dialog(session_id, Dialog::AnswerFailed);
                Err(SkillError::Answer(e))
            }
        }
    }

    pub async fn new_game(&self, session_id: &str, lang: &str) -> Result<String, SkillError> {
        log::info!("User requested a new riddle.");
        self.stop(session_id).await;
        self.start_new_game(session_id, lang).await
    }

    /// Ends the game of `session_id`. Returns whether one was in progress.
    pub async fn stop(&self, session_id: &str) -> bool {
        let stopped = self.sessions.remove(session_id).await.is_some();
        if stopped {
            log::info!("Stopped Black Stories for {session_id}");
        }
        stopped
    }

    /// Answers a converse turn when a game is in progress; otherwise leaves it to the host.
    pub async fn route_incoming<S: AsRef<str>>(&self, session_id: &str, utterances: &[S]) -> bool {
        let Some(utterance) = first_utterance(utterances) else {
            return false;
        };
        let Some(handle) = self.sessions.get(session_id).await else {
            return false;
        };
        // Failures were already spoken; the turn is still ours.
        let _ = self.forward(session_id, &handle, utterance).await;
        true
    }

    async fn message_lang(&self, message: &SkillMessage) -> String {
        match &message.lang {
            Some(lang) => lang.clone(),
            None => self.settings.read().await.lang.clone(),
        }
    }

    pub async fn on_start_intent(&self, message: &SkillMessage) {
        let lang = self.message_lang(message).await;
        let _ = self.start_new_game(&message.session_id, &lang).await;
    }

    pub async fn on_start_event(&self, message: &SkillMessage) {
        self.on_start_intent(message).await;
    }

    pub async fn on_new_riddle_event(&self, message: &SkillMessage) {
        let lang = self.message_lang(message).await;
        let _ = self.new_game(&message.session_id, &lang).await;
    }

    pub async fn on_ask_event(&self, message: &SkillMessage) {
        let _ = self
            .ask_in(&message.session_id, message.lang.as_deref(), message.question())
            .await;
    }

    pub async fn on_converse(&self, message: &SkillMessage) -> bool {
        self.route_incoming(&message.session_id, message.utterances.as_slice())
            .await
    }

    pub async fn on_deactivate(&self, message: &SkillMessage) {
        self.stop(&message.session_id).await;
    }
}
