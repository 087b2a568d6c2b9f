use serde::{Deserialize, Serialize};

fn default_voice() -> String {
    "en-uk-rp".to_string()
}

fn default_speed() -> u32 {
    120
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct SpeechConfig {
    /// espeak-ng voice, passed as `-v<voice>`
    #[serde(default = "default_voice")]
    pub voice: String,
    /// Words per minute for playback
    #[serde(default = "default_speed")]
    pub speed: u32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            voice: default_voice(),
            speed: default_speed(),
        }
    }
}
