pub mod projection_service;
pub mod resume_service;
pub mod savings_service;
pub mod score_service;
pub mod tax_service;

pub use projection_service::ProjectionService;
pub use resume_service::{KeywordMatch, ResumeService};
pub use savings_service::SavingsService;
pub use score_service::ScoreService;
pub use tax_service::TaxService;
