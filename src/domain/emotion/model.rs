use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;

use super::error::CatalogError;

static LABEL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z]+(?:_[a-z]+)*)(?:_([0-9]+))?$").unwrap());

/// Emotions known to the preset catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseEmotion {
    Neutral,
    Angry,
    Sad,
    Doubt,
    Happy,
    EnthusiasticFormal,
    FunnySarcastic,
    Anxious,
    Scared,
    Disgusted,
    Shy,
    DontCare,
    Admire,
    Depressed,
}

impl BaseEmotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseEmotion::Neutral => "neutral",
            BaseEmotion::Angry => "angry",
            BaseEmotion::Sad => "sad",
            BaseEmotion::Doubt => "doubt",
            BaseEmotion::Happy => "happy",
            BaseEmotion::EnthusiasticFormal => "enthusiastic_formal",
            BaseEmotion::FunnySarcastic => "funny_sarcastic",
            BaseEmotion::Anxious => "anxious",
            BaseEmotion::Scared => "scared",
            BaseEmotion::Disgusted => "disgusted",
            BaseEmotion::Shy => "shy",
            BaseEmotion::DontCare => "dont_care",
            BaseEmotion::Admire => "admire",
            BaseEmotion::Depressed => "depressed",
        }
    }

    /// Emotions whose presets come in three intensity levels
    pub fn is_tiered(&self) -> bool {
        matches!(
            self,
            BaseEmotion::Angry
                | BaseEmotion::Happy
                | BaseEmotion::Scared
                | BaseEmotion::Disgusted
                | BaseEmotion::Sad
        )
    }

    fn from_name(name: &str) -> Option<Self> {
        let emotion = match name {
            "neutral" => BaseEmotion::Neutral,
            "angry" => BaseEmotion::Angry,
            "sad" => BaseEmotion::Sad,
            "doubt" => BaseEmotion::Doubt,
            "happy" => BaseEmotion::Happy,
            "enthusiastic_formal" => BaseEmotion::EnthusiasticFormal,
            "funny_sarcastic" => BaseEmotion::FunnySarcastic,
            "anxious" => BaseEmotion::Anxious,
            "scared" => BaseEmotion::Scared,
            "disgusted" => BaseEmotion::Disgusted,
            "shy" => BaseEmotion::Shy,
            "dont_care" => BaseEmotion::DontCare,
            "admire" => BaseEmotion::Admire,
            "depressed" => BaseEmotion::Depressed,
            _ => return None,
        };
        Some(emotion)
    }
}

impl std::fmt::Display for BaseEmotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Intensity tier of a tiered emotion.
///
/// Levels are ordinal within one emotion only; `angry_3` and `sad_3` are not
/// calibrated against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Intensity {
    Mild,
    Moderate,
    Intense,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [Intensity::Mild, Intensity::Moderate, Intensity::Intense];

    pub fn level(&self) -> u8 {
        match self {
            Intensity::Mild => 1,
            Intensity::Moderate => 2,
            Intensity::Intense => 3,
        }
    }

    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Intensity::Mild),
            2 => Some(Intensity::Moderate),
            3 => Some(Intensity::Intense),
            _ => None,
        }
    }
}

/// Structured identity of a preset: base emotion plus optional intensity.
///
/// Rendered as `angry_2` or `dont_care`; parsing accepts only keys whose shape
/// matches the emotion (tiered emotions need a level, others reject one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmotionKey {
    pub base: BaseEmotion,
    pub intensity: Option<Intensity>,
}

impl EmotionKey {
    pub fn plain(base: BaseEmotion) -> Self {
        Self {
            base,
            intensity: None,
        }
    }

    pub fn tiered(base: BaseEmotion, intensity: Intensity) -> Self {
        Self {
            base,
            intensity: Some(intensity),
        }
    }

    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for EmotionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.intensity {
            Some(intensity) => write!(f, "{}_{}", self.base, intensity.level()),
            None => write!(f, "{}", self.base),
        }
    }
}

impl FromStr for EmotionKey {
    type Err = CatalogError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let unknown = || CatalogError::UnknownEmotion(label.to_string());

        let captures = LABEL_PATTERN.captures(label).ok_or_else(unknown)?;
        let base = BaseEmotion::from_name(&captures[1]).ok_or_else(unknown)?;

        let intensity = match captures.get(2) {
            Some(level) => {
                let level: u8 = level.as_str().parse().map_err(|_| unknown())?;
                Some(Intensity::from_level(level).ok_or_else(unknown)?)
            }
            None => None,
        };

        if base.is_tiered() != intensity.is_some() {
            return Err(unknown());
        }

        Ok(EmotionKey { base, intensity })
    }
}

impl Serialize for EmotionKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EmotionKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// Style configuration for one emotion label
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionPreset {
    pub key: EmotionKey,
    pub description: &'static str,
    pub speed: f32,
    pub trailing_silence: Option<f32>,
}

impl EmotionPreset {
    pub fn label(&self) -> String {
        self.key.label()
    }
}

/// One (text, emotion) element of an ordered multi-part script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub emotion: EmotionKey,
}

impl Segment {
    pub fn new(text: impl Into<String>, emotion: EmotionKey) -> Self {
        Self {
            text: text.into(),
            emotion,
        }
    }
}
