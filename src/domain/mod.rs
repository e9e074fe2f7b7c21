//! Domain layer for docs completeness checking
//!
//! CDD Principle: Domain Model - Pure business logic for documentation quality gating
//! - Documents, violations and the aggregate report
//! - Independent of the CLI and of output formats

pub mod document;
pub mod violations;

// Re-export main domain types for convenience
pub use document::*;
pub use violations::*;
