use crate::message::Dialog;

/// Output toward the host's text-to-speech.
pub trait Speaker: Send + Sync {
    fn speak(&self, session_id: &str, utterance: &str);

    fn speak_dialog(&self, session_id: &str, dialog: Dialog) {
        self.speak(session_id, dialog.text());
    }
}

// Terminal stand-in for a voice: prints every utterance.
#[derive(Debug, Default)]
pub struct ConsoleSpeaker;

impl Speaker for ConsoleSpeaker {
    fn speak(&self, _session_id: &str, utterance: &str) {
        println!("Riddle Master: {utterance}");
    }
}
