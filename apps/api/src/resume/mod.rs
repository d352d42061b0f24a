// Resume schema core: defaults, normalization, export conversion and text helpers.
// Everything in here is synchronous and side-effect free. No logging, no I/O;
// callers decide how to surface errors.

pub mod document;
pub mod export;
pub mod normalizer;
pub mod schema;
pub mod text;
pub mod validation;

use thiserror::Error;

pub use document::ResumeDocument;
pub use export::{to_export_schema, ExportDocument};
pub use normalizer::normalize;

/// Errors raised by the resume core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResumeError {
    /// The input to `normalize` was valid JSON but not an object.
    #[error("Resume must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    /// A field dereferenced unconditionally at render/export time is absent.
    #[error("Required field '{field}' is missing")]
    RequiredFieldMissing { field: &'static str },

    /// The document writer failed to serialize rendered blocks.
    #[error("Failed to serialize document: {0}")]
    Serialize(String),
}
