use crate::domain::synthesis::{SynthesisRequest, TtsChunk};
use async_trait::async_trait;
use futures::stream::BoxStream;

/// Chunks of one streamed synthesis, in arrival order
pub type TtsChunkStream = BoxStream<'static, Result<TtsChunk, String>>;

/// Repository for streaming TTS synthesis.
/// Abstracts the underlying provider so the driver can be exercised without a network.
///
/// Implementations are responsible for:
/// - Authenticating against the provider
/// - Framing the provider's response into individual chunks
/// - Reporting transport and framing failures as stream items
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Open a streaming synthesis call for the given request
    ///
    /// Audio is left base64-encoded inside each chunk.
    ///
    /// # Errors
    /// Returns error if the call cannot be opened or the provider rejects it
    async fn synthesize_stream(&self, request: &SynthesisRequest) -> Result<TtsChunkStream, String>;
}
