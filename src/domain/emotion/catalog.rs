use super::error::CatalogError;
use super::model::{BaseEmotion, EmotionKey, EmotionPreset, Intensity};
use std::collections::HashMap;
use std::sync::LazyLock;

static BUILTIN: LazyLock<EmotionCatalog> = LazyLock::new(|| {
    EmotionCatalog::new(builtin_presets(), builtin_lines())
});

/// Preset and default-line lookup, iterated in insertion order
#[derive(Debug, Clone)]
pub struct EmotionCatalog {
    presets: Vec<EmotionPreset>,
    index: HashMap<EmotionKey, usize>,
    lines: HashMap<BaseEmotion, &'static str>,
}

impl EmotionCatalog {
    /// Build a catalog. A later preset with a duplicate key replaces the earlier one
    /// in place, so iteration order stays the order of first appearance.
    pub fn new(
        presets: Vec<EmotionPreset>,
        lines: impl IntoIterator<Item = (BaseEmotion, &'static str)>,
    ) -> Self {
        let mut ordered: Vec<EmotionPreset> = Vec::with_capacity(presets.len());
        let mut index = HashMap::new();

        for preset in presets {
            match index.get(&preset.key) {
                Some(&position) => ordered[position] = preset,
                None => {
                    index.insert(preset.key, ordered.len());
                    ordered.push(preset);
                }
            }
        }

        Self {
            presets: ordered,
            index,
            lines: lines.into_iter().collect(),
        }
    }

    /// The catalog shipped with the tool
    pub fn builtin() -> &'static EmotionCatalog {
        &BUILTIN
    }

    pub fn presets(&self) -> impl Iterator<Item = &EmotionPreset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.presets.iter().map(|p| p.label()).collect()
    }

    pub fn get(&self, key: &EmotionKey) -> Result<&EmotionPreset, CatalogError> {
        self.index
            .get(key)
            .map(|&position| &self.presets[position])
            .ok_or_else(|| CatalogError::UnknownEmotion(key.label()))
    }

    /// Resolve a textual label such as `angry_2` to its preset
    pub fn resolve(&self, label: &str) -> Result<&EmotionPreset, CatalogError> {
        let key: EmotionKey = label.parse()?;
        self.get(&key)
    }

    /// Default sample line for an emotion; intensity tiers share their base emotion's line
    pub fn default_line(&self, key: &EmotionKey) -> &str {
        self.lines.get(&key.base).copied().unwrap_or("")
    }
}

fn plain(
    base: BaseEmotion,
    description: &'static str,
    speed: f32,
    trailing_silence: Option<f32>,
) -> EmotionPreset {
    EmotionPreset {
        key: EmotionKey::plain(base),
        description,
        speed,
        trailing_silence,
    }
}

/// Three presets for a tiered emotion, mild to intense
fn tiers(base: BaseEmotion, levels: [(&'static str, f32); 3]) -> Vec<EmotionPreset> {
    Intensity::ALL
        .into_iter()
        .zip(levels)
        .map(|(intensity, (description, speed))| EmotionPreset {
            key: EmotionKey::tiered(base, intensity),
            description,
            speed,
            trailing_silence: None,
        })
        .collect()
}

fn builtin_presets() -> Vec<EmotionPreset> {
    let mut presets = vec![plain(
        BaseEmotion::Neutral,
        "neutral, clear, conversational, medium pace, natural emphasis",
        0.95,
        None,
    )];

    presets.extend(tiers(
        BaseEmotion::Angry,
        [
            ("irritated, slightly tense, firm but controlled, mild sharpness on key words", 0.95),
            ("angry, sharp, intense, clipped consonants, firm emphasis, fast pace", 0.85),
            ("furious, shouting edge, explosive emphasis, harsh and forceful, barely contained rage", 0.8),
        ],
    ));
    presets.extend(tiers(
        BaseEmotion::Sad,
        [
            ("a little down, soft, slightly lower energy, gentle and wistful", 0.92),
            ("sad, soft, low energy, slow pace, gentle downward intonation, subdued", 0.85),
            ("grief-stricken, trembling voice, heavy sighs, very slow and fragile, close to tears", 0.78),
        ],
    ));
    presets.push(plain(
        BaseEmotion::Doubt,
        "hesitant, tentative, soft delivery with light pauses and rising intonation; elongated vowels and gentle upward phrasing",
        0.92,
        Some(0.6),
    ));
    presets.extend(tiers(
        BaseEmotion::Happy,
        [
            ("pleasant, content, lightly smiling, warm and relaxed", 1.0),
            ("happy, bright, upbeat, smiling tone, lively rhythm, warm and friendly", 1.05),
            (
                "genuinely happy, bright and energetic, friendly tone with natural laughter in the voice, \
                 smiling while speaking, medium-fast rhythm, expressive intonation, and clear articulation. \
                 Imagine someone excitedly sharing good news with a close friend.",
                1.1,
            ),
        ],
    ));
    presets.push(plain(
        BaseEmotion::EnthusiasticFormal,
        "enthusiastic but formal, confident projection, clear diction, positive emphasis",
        1.05,
        None,
    ));
    presets.push(plain(
        BaseEmotion::FunnySarcastic,
        "dry, sarcastic timing, playful pitch inflection, slight exaggeration",
        1.05,
        None,
    ));
    presets.push(plain(
        BaseEmotion::Anxious,
        "rapid, breathy, tense, slight tremor and rising intonation, scattered pacing",
        1.12,
        None,
    ));
    presets.extend(tiers(
        BaseEmotion::Scared,
        [
            ("uneasy, quiet, cautious, slightly shaky breath", 1.0),
            ("scared, trembling, breathy, quick shallow breaths, voice wavering upward", 1.08),
            ("terrified, panicked whisper, gasping, stuttering starts, frantic pace", 1.15),
        ],
    ));
    presets.extend(tiers(
        BaseEmotion::Disgusted,
        [
            ("mildly put off, slight grimace in the voice, cool and reserved", 0.95),
            ("cold, retracted tone, short clipped words, low pitch, aversive quality", 0.9),
            ("revolted, gagging recoil, drawn-out vowels of disgust, harsh and low", 0.85),
        ],
    ));
    presets.push(plain(
        BaseEmotion::Shy,
        "soft, quiet, hesitant, breathy, minimal projection, downward intonation",
        0.9,
        None,
    ));
    presets.push(plain(
        BaseEmotion::DontCare,
        "low-energy, slightly dismissive but weary; soft sighs, short pauses, and a casual, conversational rhythm, minimal affect but humanized with small breaths",
        0.96,
        Some(0.25),
    ));
    presets.push(plain(
        BaseEmotion::Admire,
        "warm, energetic, elevated pitch on key words, sincere and glowing",
        1.0,
        None,
    ));
    presets.push(plain(
        BaseEmotion::Depressed,
        "very low energy, slow tempo, flat affect, soft volume, monotone",
        0.78,
        None,
    ));

    presets
}

fn builtin_lines() -> Vec<(BaseEmotion, &'static str)> {
    vec![
        (
            BaseEmotion::Neutral,
            "Fine, do whatever you want, honestly, it makes no difference to me either way. \
             I'll stay out of it; you can make the call and I'll accept the result without fuss.",
        ),
        (
            BaseEmotion::Angry,
            "I can't believe this happened; this is completely unacceptable and it infuriates me. \
             We need to address this immediately, hold people accountable, and make sure it never repeats; \
             this kind of behavior is intolerable and I'm demanding action.",
        ),
        (
            BaseEmotion::Sad,
            "I'm really sorry about this; I've been feeling drained and overwhelmed by what occurred. \
             Everything seems muted and heavy, and it's been difficult to find the energy to respond; \
             I need a little time to process and recover.",
        ),
        (
            BaseEmotion::Doubt,
            "Um... I'm not entirely sure this is correct, and I'm feeling hesitant about moving forward. \
             Perhaps we should pause, check the details more carefully, and consider alternatives; \
             I don't want us to commit to something we might regret.",
        ),
        (
            BaseEmotion::Happy,
            "That's absolutely wonderful news! I'm genuinely thrilled and full of joy for you. \
             This brings a warm, buoyant energy and I feel like celebrating; your success lights up the room.",
        ),
        (
            BaseEmotion::EnthusiasticFormal,
            "I'm very pleased to share this opportunity with you; it represents substantial potential and merit. \
             Please consider it carefully; I believe it aligns strongly with your skills and the objectives we discussed.",
        ),
        (
            BaseEmotion::FunnySarcastic,
            "Oh, fantastic, just what we needed, another surprise, how delightfully predictable. \
             I say that with a smirk, because the whole situation is a little absurd and worth rolling our eyes about.",
        ),
        (
            BaseEmotion::Anxious,
            "I'm feeling a bit on edge and worried about how this will turn out; my thoughts keep racing. \
             What if it fails? What if I missed something important? I keep replaying scenarios and hoping for the best.",
        ),
        (
            BaseEmotion::Scared,
            "Did you hear that? Something moved in the hallway, and the lights just went out. \
             Please, stay close to me, I don't want to be alone right now.",
        ),
        (
            BaseEmotion::Disgusted,
            "Ew, that is really off-putting; it makes my skin crawl and I want to step away. \
             The sensation is visceral: I recoil, pull back, and feel a strong desire to avoid it entirely.",
        ),
        (
            BaseEmotion::Shy,
            "Um... hi, I, uh, just wanted to say hello. I'm a bit nervous and speaking softly because I don't want to impose. \
             Please forgive me if I stumble; I'm trying to be polite and quiet while I gather my courage.",
        ),
        (
            BaseEmotion::DontCare,
            "Fine, do whatever you want, honestly, it makes no difference to me either way. \
             I'll stay out of it; you can make the call and I'll accept the result without fuss.",
        ),
        (
            BaseEmotion::Admire,
            "Wow, that is truly impressive; I admire the skill and dedication that went into this. \
             Your work demonstrates care, talent, and thoughtful execution, and I sincerely respect what you've achieved.",
        ),
        (
            BaseEmotion::Depressed,
            "Lately I can't seem to find the energy to do much; everything feels heavy and colorless. \
             Small tasks that used to be manageable now feel overwhelming, and I'm struggling to motivate myself.",
        ),
    ]
}
