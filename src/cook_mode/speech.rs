use tracing::debug;

/// Fire-and-forget narration port. Implementations must let a new utterance
/// replace any in-flight one, and must degrade to a no-op rather than fail
/// when the platform has no speech capability.
pub trait Narrator {
    fn speak(&mut self, text: &str);
    fn cancel(&mut self);
}

/// Default port: speech silently unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNarrator;

impl Narrator for NoopNarrator {
    fn speak(&mut self, _text: &str) {}
    fn cancel(&mut self) {}
}

/// Console-backed narrator used by the CLI.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNarrator;

impl Narrator for ConsoleNarrator {
    fn speak(&mut self, text: &str) {
        println!("[voice] {}", text);
    }

    fn cancel(&mut self) {
        debug!("narration cancelled");
    }
}

/// A synthesizer voice as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceInfo {
    pub name: String,
    pub language: String,
}

/// Names that mark a voice as preferred regardless of language.
pub const PREFERRED_VOICE_NAMES: &[&str] = &["Google", "Microsoft"];

/// First voice whose name matches the allow-list or whose language is
/// English. `None` when nothing qualifies; callers then keep the platform
/// default.
pub fn select_voice(voices: &[VoiceInfo]) -> Option<&VoiceInfo> {
    voices.iter().find(|voice| {
        PREFERRED_VOICE_NAMES
            .iter()
            .any(|preferred| voice.name.contains(preferred))
            || voice.language.starts_with("en")
    })
}
