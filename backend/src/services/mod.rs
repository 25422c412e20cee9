//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and external systems.

pub mod analysis;
pub mod logs;
pub mod media;
pub mod profile;
pub mod summary;

pub use analysis::{DisabledAnalyzer, MealImageAnalyzer, OllamaAnalyzer};
pub use logs::LogService;
pub use media::MediaStore;
pub use profile::ProfileService;
pub use summary::SummaryService;
