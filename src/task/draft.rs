//! Candidate task held by a task screen until it is submitted

use super::types::{TaskKind, TaskRecord};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Recording durations a task can be submitted with, in seconds
pub const ACCEPTED_DURATION: RangeInclusive<u32> = 10..=20;

/// Why a draft could not become a record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("duration {duration}s is outside the accepted range {min}..={max}s")]
    DurationOutOfRange { duration: u32, min: u32, max: u32 },
}

/// Working state of a task screen
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    kind: TaskKind,
    text: Option<String>,
    duration_seconds: u32,
}

impl TaskDraft {
    pub fn new(kind: TaskKind, text: Option<String>, duration_seconds: u32) -> Self {
        Self {
            kind,
            text,
            duration_seconds,
        }
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    /// Replace the candidate text (photo description field)
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Whether [`submit`](Self::submit) would succeed
    pub fn is_submittable(&self) -> bool {
        ACCEPTED_DURATION.contains(&self.duration_seconds)
    }

    /// Turn the draft into a record with a fresh id
    pub fn submit(&self) -> Result<TaskRecord, SubmissionError> {
        if !self.is_submittable() {
            return Err(SubmissionError::DurationOutOfRange {
                duration: self.duration_seconds,
                min: *ACCEPTED_DURATION.start(),
                max: *ACCEPTED_DURATION.end(),
            });
        }
        Ok(TaskRecord::new(
            self.kind,
            self.text.clone(),
            self.duration_seconds,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(duration: u32) -> TaskDraft {
        TaskDraft::new(TaskKind::Text, Some("passage".to_string()), duration)
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(draft(10).submit().is_ok());
        assert!(draft(20).submit().is_ok());
        assert!(draft(9).submit().is_err());
        assert!(draft(21).submit().is_err());
    }

    #[test]
    fn test_rejection_reports_range() {
        let err = draft(25).submit().unwrap_err();
        assert_eq!(
            err,
            SubmissionError::DurationOutOfRange {
                duration: 25,
                min: 10,
                max: 20
            }
        );
    }

    #[test]
    fn test_submit_copies_draft_fields() {
        let record = draft(12).submit().unwrap();
        assert_eq!(record.kind(), TaskKind::Text);
        assert_eq!(record.text(), Some("passage"));
        assert_eq!(record.duration_seconds(), 12);
    }

    #[test]
    fn test_each_submission_gets_a_new_id() {
        let d = draft(15);
        let a = d.submit().unwrap();
        let b = d.submit().unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_image_draft_has_no_text() {
        let d = TaskDraft::new(TaskKind::Image, None, 11);
        assert_eq!(d.submit().unwrap().text(), None);
    }

    #[test]
    fn test_set_text() {
        let mut d = TaskDraft::new(TaskKind::Photo, Some(String::new()), 15);
        d.set_text("a red bicycle");
        assert_eq!(d.text(), Some("a red bicycle"));
    }
}
