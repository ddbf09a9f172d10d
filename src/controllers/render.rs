use std::path::Path;
use std::sync::Arc;

use crate::{
    cli::{Cli, ALL_EMOTIONS},
    domain::{
        emotion::{EmotionCatalog, EmotionKey, Segment},
        synthesis::{
            default_script, parse_script, AudioFormat, BatchReport, SynthesisService,
            SynthesisServiceApi, VoiceSelection,
        },
    },
    error::{AppError, AppResult},
};

/// What a single invocation renders
#[derive(Debug, Clone, PartialEq)]
pub enum RenderMode {
    /// One combined file from an ordered script
    Multi(Vec<Segment>),
    /// Every catalog preset, in catalog order
    All { text: Option<String> },
    /// Exactly one preset
    Single {
        emotion: EmotionKey,
        text: Option<String>,
    },
}

impl RenderMode {
    /// Resolve the mode from CLI arguments. Unknown labels and unreadable scripts
    /// fail here, before any request is made.
    pub fn from_cli(cli: &Cli, catalog: &EmotionCatalog) -> AppResult<Self> {
        if cli.multi {
            let segments = match &cli.script {
                Some(path) => load_script(path)?,
                None => default_script(),
            };
            for segment in &segments {
                catalog.get(&segment.emotion)?;
            }
            return Ok(RenderMode::Multi(segments));
        }

        // An empty --text counts as not given
        let text = cli.text.clone().filter(|t| !t.is_empty());

        if cli.emotion == ALL_EMOTIONS {
            return Ok(RenderMode::All { text });
        }

        let preset = catalog.resolve(&cli.emotion)?;
        Ok(RenderMode::Single {
            emotion: preset.key,
            text,
        })
    }
}

fn load_script(path: &Path) -> AppResult<Vec<Segment>> {
    let json = std::fs::read_to_string(path).map_err(|e| {
        AppError::BadRequest(format!("cannot read script {}: {}", path.display(), e))
    })?;
    Ok(parse_script(&json)?)
}

pub struct RenderController {
    synthesis_service: Arc<SynthesisService>,
}

impl RenderController {
    pub fn new(synthesis_service: Arc<SynthesisService>) -> Self {
        Self { synthesis_service }
    }

    /// Run a render mode to completion.
    ///
    /// Single and multi renders fail fast; "all" collects per-emotion failures in the report.
    pub async fn run(
        &self,
        mode: RenderMode,
        voice: &VoiceSelection,
        format: AudioFormat,
    ) -> AppResult<BatchReport> {
        let service = &self.synthesis_service;

        let report = match mode {
            RenderMode::Multi(segments) => {
                let outcome = service.synthesize_multi(&segments, voice, format).await?;
                BatchReport {
                    rendered: vec![outcome],
                    failed: Vec::new(),
                }
            }
            RenderMode::All { text } => service.render_all(text.as_deref(), voice, format).await,
            RenderMode::Single { emotion, text } => {
                let text = text
                    .as_deref()
                    .unwrap_or_else(|| service.catalog().default_line(&emotion));
                let outcome = service.synthesize_one(text, &emotion, voice, format).await?;
                BatchReport {
                    rendered: vec![outcome],
                    failed: Vec::new(),
                }
            }
        };

        for outcome in report.empty_renders() {
            tracing::warn!(
                emotion = %outcome.label,
                path = %outcome.path.display(),
                "Rendered file is empty"
            );
        }
        for failure in &report.failed {
            tracing::error!(emotion = %failure.label, error = %failure.error, "Render failed");
        }

        Ok(report)
    }
}

/// One line per preset: label, speed, trailing silence and description
pub fn catalog_listing(catalog: &EmotionCatalog) -> String {
    catalog
        .presets()
        .map(|preset| {
            let silence = preset
                .trailing_silence
                .map(|s| format!("{:.2}s", s))
                .unwrap_or_else(|| "-".to_string());
            format!(
                "{:<20} speed {:<5.2} silence {:<6} {}",
                preset.label(),
                preset.speed,
                silence,
                preset.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
