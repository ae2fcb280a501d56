pub mod draft;
pub mod store;
pub mod types;

pub use draft::{SubmissionError, TaskDraft, ACCEPTED_DURATION};
pub use store::TaskStore;
pub use types::{TaskKind, TaskRecord};
