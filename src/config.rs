use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tone::{Tone, ToneColorSource};

/// Punctuation which never carries a tone, besides single ASCII word characters
pub const SEPARATOR_PUNCTUATION: &[char] = &['、', '・', '·', ',', '，'];

pub const FONT_TAG_OPEN: &str = "<font color='";
pub const FONT_TAG_OPEN_END: &str = "'>";
pub const FONT_TAG_CLOSE: &str = "</font>";

/// Color of each tone in a fresh installation
pub const fn default_tone_color(tone: Tone) -> &'static str {
    match tone {
        Tone::First => "#ff0000",
        Tone::Second => "#ff8a21",
        Tone::Third => "#218c17",
        Tone::Fourth => "#1764cb",
        Tone::Neutral => "#323332",
    }
}

fn default_tone1() -> String {
    default_tone_color(Tone::First).to_owned()
}
fn default_tone2() -> String {
    default_tone_color(Tone::Second).to_owned()
}
fn default_tone3() -> String {
    default_tone_color(Tone::Third).to_owned()
}
fn default_tone4() -> String {
    default_tone_color(Tone::Fourth).to_owned()
}
fn default_tone5() -> String {
    default_tone_color(Tone::Neutral).to_owned()
}

const fn default_enabled() -> bool {
    true
}

/// The five configurable colors, opaque to the colorizers (CSS names or hex codes)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ToneColors {
    #[serde(default = "default_tone1")]
    pub tone1: String,
    #[serde(default = "default_tone2")]
    pub tone2: String,
    #[serde(default = "default_tone3")]
    pub tone3: String,
    #[serde(default = "default_tone4")]
    pub tone4: String,
    #[serde(default = "default_tone5")]
    pub tone5: String,
}

impl Default for ToneColors {
    fn default() -> Self {
        Self {
            tone1: default_tone1(),
            tone2: default_tone2(),
            tone3: default_tone3(),
            tone4: default_tone4(),
            tone5: default_tone5(),
        }
    }
}

impl ToneColors {
    pub fn get(&self, tone: Tone) -> &str {
        match tone {
            Tone::First => &self.tone1,
            Tone::Second => &self.tone2,
            Tone::Third => &self.tone3,
            Tone::Fourth => &self.tone4,
            Tone::Neutral => &self.tone5,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_enabled")]
    pub tone_colors_enabled: bool,
    #[serde(default)]
    pub colors: ToneColors,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tone_colors_enabled: default_enabled(),
            colors: ToneColors::default(),
        }
    }
}

impl Settings {
    /// Read settings from a .json file, missing keys keep their defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let s = fs::read_to_string(path)
            .context(format!("Could not read settings file {}", path.display()))?;
        let settings: Self = serde_json::from_str(&s)
            .context(format!("Invalid settings file {}", path.display()))?;
        debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }
}

impl ToneColorSource for Settings {
    fn tone_colors_enabled(&self) -> bool {
        self.tone_colors_enabled
    }

    fn color_for(&self, tone: Tone) -> &str {
        self.colors.get(tone)
    }
}
