use std::env;

use reo_types::UiSettings;
use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::speech::SpeechConfig;
use self::tools::ToolsConfig;
use self::ui::UiConfig;

pub mod dictionary;
pub mod speech;
pub mod tools;
pub mod ui;

#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub dictionary: DictionaryConfig,
    pub speech: SpeechConfig,
    pub tools: ToolsConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Config::default().with_env_overrides()
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(database) = env::var("REO_DICT_DATABASE") {
            self.dictionary.database = database;
        }

        if let Ok(strategy) = env::var("REO_MATCH_STRATEGY") {
            self.dictionary.strategy = strategy;
        }

        if let Ok(voice) = env::var("REO_VOICE") {
            self.speech.voice = voice;
        }

        if let Ok(wordlist) = env::var("REO_WORDLIST") {
            self.dictionary.wordlist = wordlist;
        }

        if let Some(speed) = env::var("REO_SPEECH_SPEED")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.speech.speed = speed;
        }

        if let Ok(dict) = env::var("REO_DICT_BIN") {
            self.tools.dict = dict;
        }

        if let Ok(espeak) = env::var("REO_ESPEAK_BIN") {
            self.tools.espeak = espeak;
        }

        self
    }

    pub fn ui_settings(&self) -> UiSettings {
        UiSettings {
            dark_font: self.ui.dark_font,
            live_search: self.ui.live_search,
            custom_definitions: self.dictionary.custom_definitions,
        }
    }

    pub fn apply_ui_settings(&mut self, settings: UiSettings) {
        self.ui.dark_font = settings.dark_font;
        self.ui.live_search = settings.live_search;
        self.dictionary.custom_definitions = settings.custom_definitions;
    }
}
