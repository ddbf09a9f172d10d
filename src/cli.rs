use crate::domain::synthesis::{AudioFormat, VoiceProvider};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Selector value that renders every preset
pub const ALL_EMOTIONS: &str = "all";

#[derive(Parser, Debug, Clone)]
#[command(name = "hume-emotions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render emotionally styled speech samples with Hume TTS")]
pub struct Cli {
    /// Text to synthesize. If omitted, a default line per emotion is used
    #[arg(short, long)]
    pub text: Option<String>,

    /// Emotion label to render (e.g. neutral, angry_2), or "all"
    #[arg(short, long, default_value = ALL_EMOTIONS)]
    pub emotion: String,

    /// Voice name; defaults to HUME_VOICE or Shuhan2
    #[arg(short, long)]
    pub voice: Option<String>,

    /// Voice library the voice name belongs to
    #[arg(long, value_enum, default_value_t = ProviderArg::CustomVoice)]
    pub provider: ProviderArg,

    /// Output extension and audio format
    #[arg(long, value_enum, default_value_t = FormatArg::Mp3)]
    pub ext: FormatArg,

    /// Render a multi-segment script into a single file; ignores --emotion and --text
    #[arg(short, long)]
    pub multi: bool,

    /// JSON script for --multi: [{"text": "...", "emotion": "angry_2"}, ...]
    #[arg(long, value_name = "PATH", requires = "multi")]
    pub script: Option<PathBuf>,

    /// Output directory; defaults to OUTPUT_DIR or out_tts
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Print the emotion catalog and exit
    #[arg(long)]
    pub list: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderArg {
    CustomVoice,
    HumeAi,
}

impl From<ProviderArg> for VoiceProvider {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::CustomVoice => VoiceProvider::CustomVoice,
            ProviderArg::HumeAi => VoiceProvider::HumeAi,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Mp3,
    Wav,
}

impl From<FormatArg> for AudioFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Mp3 => AudioFormat::Mp3,
            FormatArg::Wav => AudioFormat::Wav,
        }
    }
}
