use super::dto::{AudioFormat, SynthesisRequest, Utterance, VoiceSelection};
use super::error::SynthesisError;
use crate::domain::emotion::{EmotionCatalog, EmotionKey, Segment};
use crate::infrastructure::repositories::{TtsChunkStream, TtsRepository};
use crate::infrastructure::storage::AudioFileWriter;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use futures::StreamExt;
use std::path::PathBuf;
use std::sync::Arc;

/// File stem for multi-segment renders
const MULTI_FILE_STEM: &str = "multi";

/// Result of one streamed render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutcome {
    pub label: String,
    pub path: PathBuf,
    pub bytes_written: u64,
    pub chunks_received: usize,
}

impl RenderOutcome {
    /// The stream finished without producing any audio
    pub fn is_empty(&self) -> bool {
        self.bytes_written == 0
    }
}

#[derive(Debug)]
pub struct RenderFailure {
    pub label: String,
    pub error: SynthesisError,
}

/// Aggregated results of rendering several presets
#[derive(Debug, Default)]
pub struct BatchReport {
    pub rendered: Vec<RenderOutcome>,
    pub failed: Vec<RenderFailure>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn empty_renders(&self) -> impl Iterator<Item = &RenderOutcome> {
        self.rendered.iter().filter(|outcome| outcome.is_empty())
    }
}

pub struct SynthesisService {
    tts_repo: Arc<dyn TtsRepository>,
    catalog: Arc<EmotionCatalog>,
    output_dir: PathBuf,
}

impl SynthesisService {
    pub fn new(
        tts_repo: Arc<dyn TtsRepository>,
        catalog: Arc<EmotionCatalog>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            tts_repo,
            catalog,
            output_dir: output_dir.into(),
        }
    }

    pub fn catalog(&self) -> &EmotionCatalog {
        &self.catalog
    }
}

#[async_trait]
pub trait SynthesisServiceApi: Send + Sync {
    /// Render one emotion preset to `<output_dir>/<label>.<ext>`
    ///
    /// An empty stream is not an error: the outcome reports zero bytes written.
    async fn synthesize_one(
        &self,
        text: &str,
        emotion: &EmotionKey,
        voice: &VoiceSelection,
        format: AudioFormat,
    ) -> Result<RenderOutcome, SynthesisError>;

    /// Render an ordered script as one request to `<output_dir>/multi.<ext>`
    ///
    /// Every segment is resolved before the request is issued.
    async fn synthesize_multi(
        &self,
        segments: &[Segment],
        voice: &VoiceSelection,
        format: AudioFormat,
    ) -> Result<RenderOutcome, SynthesisError>;

    /// Render every catalog preset in order, continuing past failures
    ///
    /// Uses `text` for every preset when given, otherwise each preset's default line.
    async fn render_all(
        &self,
        text: Option<&str>,
        voice: &VoiceSelection,
        format: AudioFormat,
    ) -> BatchReport;
}

#[async_trait]
impl SynthesisServiceApi for SynthesisService {
    async fn synthesize_one(
        &self,
        text: &str,
        emotion: &EmotionKey,
        voice: &VoiceSelection,
        format: AudioFormat,
    ) -> Result<RenderOutcome, SynthesisError> {
        let preset = self.catalog.get(emotion)?;
        let label = preset.label();

        tracing::info!(
            emotion = %label,
            voice = %voice.name,
            speed = preset.speed,
            trailing_silence = ?preset.trailing_silence,
            text_length = text.len(),
            "Rendering emotion"
        );

        let request = SynthesisRequest::new(vec![Utterance::from_preset(text, preset, voice)], format);
        self.render(&label, &request).await
    }

    async fn synthesize_multi(
        &self,
        segments: &[Segment],
        voice: &VoiceSelection,
        format: AudioFormat,
    ) -> Result<RenderOutcome, SynthesisError> {
        if segments.is_empty() {
            return Err(SynthesisError::Invalid("script has no segments".to_string()));
        }

        let utterances = segments
            .iter()
            .map(|segment| {
                let preset = self.catalog.get(&segment.emotion)?;
                Ok(Utterance::from_preset(segment.text.clone(), preset, voice))
            })
            .collect::<Result<Vec<_>, SynthesisError>>()?;

        tracing::info!(
            segment_count = segments.len(),
            voice = %voice.name,
            emotions = ?segments.iter().map(|s| s.emotion.label()).collect::<Vec<_>>(),
            "Rendering multi-segment script"
        );

        let request = SynthesisRequest::new(utterances, format);
        self.render(MULTI_FILE_STEM, &request).await
    }

    async fn render_all(
        &self,
        text: Option<&str>,
        voice: &VoiceSelection,
        format: AudioFormat,
    ) -> BatchReport {
        let mut report = BatchReport::default();

        for preset in self.catalog.presets() {
            let line = text.unwrap_or_else(|| self.catalog.default_line(&preset.key));

            match self.synthesize_one(line, &preset.key, voice, format).await {
                Ok(outcome) => report.rendered.push(outcome),
                Err(error) => {
                    tracing::error!(
                        emotion = %preset.key,
                        error = %error,
                        "Render failed, continuing with next emotion"
                    );
                    report.failed.push(RenderFailure {
                        label: preset.label(),
                        error,
                    });
                }
            }
        }

        tracing::info!(
            rendered = report.rendered.len(),
            failed = report.failed.len(),
            empty = report.empty_renders().count(),
            "Batch render finished"
        );

        report
    }
}

impl SynthesisService {
    fn output_path(&self, stem: &str, format: AudioFormat) -> PathBuf {
        self.output_dir.join(format!("{}.{}", stem, format.extension()))
    }

    /// Open the stream, then decode and append each chunk's audio in arrival order
    async fn render(
        &self,
        label: &str,
        request: &SynthesisRequest,
    ) -> Result<RenderOutcome, SynthesisError> {
        let start_time = std::time::Instant::now();

        let mut stream = self
            .tts_repo
            .synthesize_stream(request)
            .await
            .map_err(SynthesisError::Dependency)?;

        let mut writer = AudioFileWriter::create(self.output_path(label, request.format)).await?;

        // Whatever was decoded before a failure stays on disk.
        let drained = Self::drain(label, &mut stream, &mut writer).await;
        let path = writer.path().to_path_buf();
        let bytes_written = writer.finish().await?;
        let chunks_received = drained?;

        let outcome = RenderOutcome {
            label: label.to_string(),
            path,
            bytes_written,
            chunks_received,
        };

        if outcome.is_empty() {
            tracing::warn!(
                emotion = label,
                path = %outcome.path.display(),
                chunks_received,
                "Stream produced no audio, output file is empty"
            );
        } else {
            tracing::info!(
                emotion = label,
                path = %outcome.path.display(),
                chunks_received,
                audio_size_bytes = bytes_written,
                latency_ms = start_time.elapsed().as_millis(),
                "Render completed"
            );
        }

        Ok(outcome)
    }
}

impl SynthesisService {
    async fn drain(
        label: &str,
        stream: &mut TtsChunkStream,
        writer: &mut AudioFileWriter,
    ) -> Result<usize, SynthesisError> {
        let mut chunks_received = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(SynthesisError::Dependency)?;
            let index = chunks_received;
            chunks_received += 1;

            let audio = match chunk.audio.as_deref() {
                Some(audio) if !audio.is_empty() => audio,
                _ => continue,
            };

            let data = STANDARD
                .decode(audio)
                .map_err(|e| SynthesisError::MalformedChunk {
                    index,
                    reason: e.to_string(),
                })?;
            writer.write_chunk(&data).await?;

            tracing::debug!(
                emotion = label,
                chunk_index = index,
                chunk_bytes = data.len(),
                total_bytes = writer.bytes_written(),
                "Chunk written"
            );
        }

        Ok(chunks_received)
    }
}
