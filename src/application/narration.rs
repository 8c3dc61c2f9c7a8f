//! Spoken feedback.
//!
//! Every screen has a short script that is spoken the first time the screen
//! is shown in a given language. Transient messages are spoken every time.

use crate::domain::i18n::{Message, Text, text};
use crate::domain::{Language, Screen, User};
use std::collections::HashSet;
use tracing::info;

/// Output device for narration.
pub trait Speaker {
    fn speak(&mut self, text: &str, lang: Language);
}

/// Writes narration to the log instead of an audio device.
#[derive(Debug, Default)]
pub struct LogSpeaker;

impl Speaker for LogSpeaker {
    fn speak(&mut self, text: &str, lang: Language) {
        info!(target: "narration", %lang, "{text}");
    }
}

/// Bookkeeping key for the once-per-screen-and-language rule.
pub fn narration_key(screen: Screen, lang: Language) -> String {
    format!("{}-{}", screen.tag(), lang.code())
}

/// The script spoken on first entry into `screen`, if it has one.
pub fn screen_script(screen: Screen, lang: Language, session: Option<&User>, generated_id: Option<&str>) -> Option<String> {
    match screen {
        Screen::Landing => Some(format!("{}. {}", text(lang, Text::Welcome), text(lang, Text::ChooseLanguage))),
        Screen::Login => Some(format!("{}. {}", text(lang, Text::LoginTitle), text(lang, Text::AccIdLabel))),
        Screen::Signup => Some(text(lang, Text::Signup).to_string()),
        Screen::Dashboard => session.map(|user| {
            Message::DashboardGreeting {
                name: user.name.clone(),
                balance: user.balance,
            }
            .render(lang)
        }),
        Screen::SignupSuccess => generated_id.map(|id| Message::AccountCreated { id: id.to_string() }.render(lang)),
        _ => None,
    }
}

pub struct Narrator {
    speaker: Box<dyn Speaker>,
    seen: HashSet<String>,
    last: Option<String>,
}

impl Default for Narrator {
    fn default() -> Self {
        Self::new(Box::new(LogSpeaker))
    }
}

impl Narrator {
    pub fn new(speaker: Box<dyn Speaker>) -> Self {
        Self {
            speaker,
            seen: HashSet::new(),
            last: None,
        }
    }

    /// Speaks unconditionally.
    pub fn say(&mut self, text: &str, lang: Language) {
        self.speaker.speak(text, lang);
        self.last = Some(text.to_string());
    }

    /// Speaks `script` unless this screen was already announced in `lang`.
    ///
    /// The pair is marked as announced even when there is no script.
    /// Returns whether the pair was new.
    pub fn announce(&mut self, screen: Screen, lang: Language, script: Option<String>) -> bool {
        if !self.seen.insert(narration_key(screen, lang)) {
            return false;
        }
        if let Some(script) = script {
            self.say(&script, lang);
        }
        true
    }

    pub fn has_announced(&self, screen: Screen, lang: Language) -> bool {
        self.seen.contains(&narration_key(screen, lang))
    }

    pub fn last_spoken(&self) -> Option<&str> {
        self.last.as_deref()
    }
}
