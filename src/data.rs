//! Data records exchanged with the corpus source and written to disk.

pub mod description;
pub mod pr;
pub mod yaml;

pub use description::{PrDescription, DESCRIPTION_FILE_NAME};
pub use pr::PrRecord;
pub use yaml::to_yaml;
