//! Voice input over a pluggable speech recognition engine
//!
//! The engine delivers [`SpeechEvent`]s; [`VoiceInput`] tracks listening state
//! and turns final transcripts into ingredient candidates.

use crate::error::SpeechError;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Button label while idle
pub const IDLE_LABEL: &str = "Voice Input";

/// Button label while listening
pub const LISTENING_LABEL: &str = "Listening...";

/// Hint shown while listening
pub const LISTENING_HINT: &str = "Say ingredients separated by commas or \"and\"";

/// Fragments this short are treated as noise
const MIN_FRAGMENT_LEN: usize = 3;

static SEPARATOR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\s*,\s*|\s+and\s+").ok());

/// Recognition backend
pub trait SpeechEngine {
    /// Begin a recognition session
    fn start(&mut self) -> Result<(), SpeechError>;

    /// End the current session
    fn stop(&mut self);
}

/// Piece of recognized speech
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptSegment {
    pub text: String,
    pub is_final: bool,
}

impl TranscriptSegment {
    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
        }
    }

    pub fn final_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
        }
    }
}

/// Events delivered by a speech engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    Started,
    Result(Vec<TranscriptSegment>),
    Error(SpeechError),
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceAvailability {
    Supported,
    Unsupported,
}

/// Split a final transcript into ingredient candidates.
///
/// Splits on commas and on the word "and", trims each fragment and drops
/// fragments shorter than three characters.
pub fn extract_ingredients(transcript: &str) -> Vec<String> {
    let lowered = transcript.to_lowercase();
    let fragments: Vec<&str> = match SEPARATOR.as_ref() {
        Some(separator) => separator.split(&lowered).collect(),
        None => lowered.split(',').collect(),
    };

    fragments
        .into_iter()
        .map(str::trim)
        .filter(|fragment| fragment.chars().count() >= MIN_FRAGMENT_LEN)
        .map(str::to_string)
        .collect()
}

/// Voice input state machine
pub struct VoiceInput<E: SpeechEngine> {
    engine: Option<E>,
    listening: bool,
    transcript: String,
    last_error: Option<SpeechError>,
}

impl<E: SpeechEngine> VoiceInput<E> {
    /// Create voice input; `None` means speech recognition is unavailable
    pub fn new(engine: Option<E>) -> Self {
        Self {
            engine,
            listening: false,
            transcript: String::new(),
            last_error: None,
        }
    }

    pub fn availability(&self) -> VoiceAvailability {
        match self.engine {
            Some(_) => VoiceAvailability::Supported,
            None => VoiceAvailability::Unsupported,
        }
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Most recent transcript, interim text preferred
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn last_error(&self) -> Option<&SpeechError> {
        self.last_error.as_ref()
    }

    /// Start listening, or stop if already listening
    pub fn toggle(&mut self) -> Result<(), SpeechError> {
        let engine = self.engine.as_mut().ok_or(SpeechError::Unsupported)?;
        if self.listening {
            engine.stop();
            Ok(())
        } else {
            engine.start().inspect_err(|e| {
                warn!("Speech engine failed to start: {}", e);
            })
        }
    }

    /// Apply an engine event, returning ingredients heard in final results
    pub fn handle_event(&mut self, event: SpeechEvent) -> Vec<String> {
        match event {
            SpeechEvent::Started => {
                self.listening = true;
                self.transcript.clear();
                self.last_error = None;
                Vec::new()
            }
            SpeechEvent::Result(segments) => {
                let (finals, interims): (Vec<_>, Vec<_>) =
                    segments.into_iter().partition(|segment| segment.is_final);
                let final_text: String = finals.into_iter().map(|s| s.text).collect();
                let interim_text: String = interims.into_iter().map(|s| s.text).collect();

                self.transcript = if interim_text.is_empty() {
                    final_text.clone()
                } else {
                    interim_text
                };

                if final_text.is_empty() {
                    return Vec::new();
                }
                let heard = extract_ingredients(&final_text);
                debug!(count = heard.len(), "Ingredients heard");
                heard
            }
            SpeechEvent::Error(error) => {
                warn!("Speech recognition error: {}", error);
                self.listening = false;
                self.last_error = Some(error);
                Vec::new()
            }
            SpeechEvent::Ended => {
                self.listening = false;
                Vec::new()
            }
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.listening {
            LISTENING_LABEL
        } else {
            IDLE_LABEL
        }
    }

    /// "Heard: ..." line, shown once anything was recognized
    pub fn heard_line(&self) -> Option<String> {
        (!self.transcript.is_empty()).then(|| format!("Heard: {}", self.transcript))
    }

    pub fn hint(&self) -> Option<&'static str> {
        self.listening.then_some(LISTENING_HINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeEngine {
        starts: usize,
        stops: usize,
        refuse: bool,
    }

    impl SpeechEngine for FakeEngine {
        fn start(&mut self) -> Result<(), SpeechError> {
            if self.refuse {
                return Err(SpeechError::StartFailed("not-allowed".to_string()));
            }
            self.starts += 1;
            Ok(())
        }

        fn stop(&mut self) {
            self.stops += 1;
        }
    }

    #[test]
    fn test_extract_splits_on_commas_and_and() {
        assert_eq!(
            extract_ingredients("Chicken, Tomatoes and Rice"),
            vec!["chicken", "tomatoes", "rice"]
        );
        assert_eq!(
            extract_ingredients("sweet potato and black beans"),
            vec!["sweet potato", "black beans"]
        );
    }

    #[test]
    fn test_extract_keeps_words_containing_and() {
        assert_eq!(extract_ingredients("candy, almonds"), vec!["candy", "almonds"]);
    }

    #[test]
    fn test_extract_drops_short_fragments() {
        assert_eq!(extract_ingredients("ox, an, egg"), vec!["egg"]);
        assert!(extract_ingredients("").is_empty());
    }

    #[test]
    fn test_unsupported() {
        let mut voice: VoiceInput<FakeEngine> = VoiceInput::new(None);
        assert_eq!(voice.availability(), VoiceAvailability::Unsupported);
        assert_eq!(voice.toggle(), Err(SpeechError::Unsupported));
    }

    #[test]
    fn test_listening_lifecycle() {
        let mut voice = VoiceInput::new(Some(FakeEngine::default()));
        assert_eq!(voice.button_label(), IDLE_LABEL);
        assert_eq!(voice.hint(), None);

        voice.toggle().unwrap();
        voice.handle_event(SpeechEvent::Started);
        assert!(voice.is_listening());
        assert_eq!(voice.button_label(), LISTENING_LABEL);
        assert_eq!(voice.hint(), Some(LISTENING_HINT));

        voice.toggle().unwrap();
        voice.handle_event(SpeechEvent::Ended);
        assert!(!voice.is_listening());

        let engine = voice.engine.as_ref().unwrap();
        assert_eq!((engine.starts, engine.stops), (1, 1));
    }

    #[test]
    fn test_interim_results_are_displayed_not_added() {
        let mut voice = VoiceInput::new(Some(FakeEngine::default()));
        voice.handle_event(SpeechEvent::Started);

        let heard = voice.handle_event(SpeechEvent::Result(vec![TranscriptSegment::interim(
            "chicken and",
        )]));
        assert!(heard.is_empty());
        assert_eq!(voice.heard_line().as_deref(), Some("Heard: chicken and"));
    }

    #[test]
    fn test_final_results_yield_ingredients() {
        let mut voice = VoiceInput::new(Some(FakeEngine::default()));
        voice.handle_event(SpeechEvent::Started);

        let heard = voice.handle_event(SpeechEvent::Result(vec![
            TranscriptSegment::final_text("Eggs and Spinach"),
            TranscriptSegment::interim("and che"),
        ]));
        assert_eq!(heard, vec!["eggs", "spinach"]);
        // interim text wins for display
        assert_eq!(voice.transcript(), "and che");
    }

    #[test]
    fn test_error_ends_listening() {
        let mut voice = VoiceInput::new(Some(FakeEngine::default()));
        voice.handle_event(SpeechEvent::Started);
        voice.handle_event(SpeechEvent::Error(SpeechError::Recognition(
            "network".to_string(),
        )));
        assert!(!voice.is_listening());
        assert!(voice.last_error().is_some());
    }

    #[test]
    fn test_start_failure_is_reported() {
        let mut voice = VoiceInput::new(Some(FakeEngine {
            refuse: true,
            ..FakeEngine::default()
        }));
        assert!(matches!(voice.toggle(), Err(SpeechError::StartFailed(_))));
        assert!(!voice.is_listening());
    }
}
