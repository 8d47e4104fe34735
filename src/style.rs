//! Style inference: profile model, extraction, persistence and rendering.

pub mod classify;
pub mod extractor;
pub mod presenter;
pub mod profile;
pub mod store;

pub use extractor::StyleExtractor;
pub use presenter::render;
pub use profile::{RepositoryInfo, StyleProfile, TicketPattern, TitlePattern, Tone};
pub use store::{StyleStore, STYLE_FILE_NAME};
