use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::chat::{ChatBackend, ChatSession, SessionHandle};
use crate::error::ChatError;

/// Chat backend for any OpenAI-compatible chat completion endpoint.
///
/// The endpoint is stateless, so each [`GameChat`] keeps the history of its
/// game locally and replays it with every request.
#[derive(Debug, Clone)]
pub struct GameAI {
    api_base: String,
}

impl GameAI {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    fn client(&self, credential: &str) -> Client<OpenAIConfig> {
        let openai_config = OpenAIConfig::new()
            .with_api_base(&self.api_base)
            .with_api_key(credential);
        Client::with_config(openai_config)
    }

    // Checks the key by listing the available models.
    pub async fn validate_credential(&self, credential: &str) -> Result<(), ChatError> {
        self.client(credential).models().list().await?;
        Ok(())
    }
}

#[async_trait]
impl ChatBackend for GameAI {
    async fn create_session(
        &self,
        credential: &str,
        model: &str,
    ) -> Result<SessionHandle, ChatError> {
        let chat = GameChat {
            id: Uuid::new_v4(),
            client: self.client(credential),
            model: model.to_string(),
            history: Mutex::new(Vec::new()),
        };
        log::debug!("Created chat session {} using model {}", chat.id, chat.model);
        let handle: SessionHandle = Arc::new(chat);
        Ok(handle)
    }
}

pub struct GameChat {
    id: Uuid,
    client: Client<OpenAIConfig>,
    model: String,
    history: Mutex<Vec<ChatCompletionRequestMessage>>,
}

impl GameChat {
    async fn complete(
        &self,
        messages: Vec<ChatCompletionRequestMessage>,
    ) -> Result<String, ChatError> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .build()?;

        let response = self.client.chat().create(request).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(ChatError::NoMessageFound)
    }
}

// A failed exchange leaves no trace, so the next question starts from the same history.
fn record_exchange(
    history: &mut Vec<ChatCompletionRequestMessage>,
    user_message: ChatCompletionRequestMessage,
    reply: Result<String, ChatError>,
) -> Result<String, ChatError> {
    let reply = reply?;
    let assistant_message: ChatCompletionRequestMessage =
        ChatCompletionRequestAssistantMessageArgs::default()
            .content(reply.as_str())
            .build()?
            .into();

    history.push(user_message);
    history.push(assistant_message);
    Ok(reply)
}

#[async_trait]
impl ChatSession for GameChat {
    fn id(&self) -> Uuid {
        self.id
    }

    async fn send(&self, text: &str) -> Result<String, ChatError> {
        // Held for the whole exchange so turns of one game stay ordered.
        let mut history = self.history.lock().await;

        let user_message: ChatCompletionRequestMessage =
            ChatCompletionRequestUserMessageArgs::default()
                .content(text)
                .build()?
                .into();

        let mut messages = history.clone();
        messages.push(user_message.clone());

        let reply = self.complete(messages).await;
        record_exchange(&mut history, user_message, reply)
    }
}
