//! SampleTask - guided sample data-collection flow
//!
//! Walks a user through a noise check and a choice of sample tasks (text
//! reading, image description, photo capture) and keeps the completed tasks
//! for the session. The flow core (`flow`, `navigator`, `noise`, `task`)
//! knows nothing about egui; `ui` renders it in a desktop window.

pub mod cli;
pub mod config;
pub mod error;
pub mod flow;
pub mod navigator;
pub mod noise;
pub mod scenario;
pub mod task;
pub mod ui;

// Re-export error types
pub use error::{Result, SampleTaskError};

// Re-export core types
pub use config::AppConfig;
pub use flow::{ButtonId, Element, Intent, Outcome, Session, View};
pub use navigator::{Navigator, Route, Screen};
pub use noise::{LevelSource, NoiseGate, NoiseSampler};
pub use task::{SubmissionError, TaskDraft, TaskKind, TaskRecord, TaskStore};
