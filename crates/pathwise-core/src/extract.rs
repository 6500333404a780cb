//! DocumentExtractor trait for turning uploaded files into plain text.

use pathwise_types::error::ExtractionError;

/// Converts a document blob into plain text.
///
/// The format is chosen from the file name's extension. Implementations
/// fail on formats they do not support and on corrupt input.
pub trait DocumentExtractor: Send + Sync {
    fn extract(&self, file_name: &str, bytes: &[u8]) -> Result<String, ExtractionError>;
}
