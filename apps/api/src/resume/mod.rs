// Resume skill-gap analysis: document text extraction, the fixed skill taxonomy
// and the keyword scorer. The latest analysis is mirrored to the store. Scoring is pure and synchronous; extraction of PDF
// text is CPU-bound and runs inside tokio::task::spawn_blocking.

pub mod extract;
pub mod handlers;
pub mod persistence;
pub mod scorer;
pub mod taxonomy;
