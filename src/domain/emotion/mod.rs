pub mod catalog;
pub mod error;
pub mod model;

pub use catalog::EmotionCatalog;
pub use error::CatalogError;
pub use model::{BaseEmotion, EmotionKey, EmotionPreset, Intensity, Segment};
