pub mod advice;
pub mod engine;
pub mod services;

pub use advice::{AdviceGenerator, OfflineAdvisor};
pub use engine::Engine;
