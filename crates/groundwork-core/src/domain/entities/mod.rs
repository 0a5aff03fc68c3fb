pub mod common;
pub mod manifest;
pub mod report;

pub use crate::domain::DomainError;
pub use manifest::Manifest;
pub use report::RunReport;
