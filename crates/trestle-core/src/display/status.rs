//! User-facing notices produced while applying an edit.

use std::fmt;

use serde::Serialize;

use crate::{error::TimelineError, models::TaskInterval};

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn label(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "Success:",
            NoticeLevel::Info => "Info:",
            NoticeLevel::Warning => "Warning:",
            NoticeLevel::Error => "Error:",
        }
    }
}

/// One line of feedback for the user.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    /// Rejected gestures become warnings, failed writes become errors.
    pub fn from_error(error: &TimelineError) -> Self {
        if error.is_validation() {
            Self::warning(error.to_string())
        } else {
            Self::error(error.to_string())
        }
    }

    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.level.label(), self.message)
    }
}

/// Result of an edit: the tasks as they now stand locally, plus feedback.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Outcome {
    pub tasks: Vec<TaskInterval>,
    pub notices: Vec<Notice>,
}

impl Outcome {
    /// Outcome of a gesture that was refused before anything changed.
    pub fn rejected(error: &TimelineError) -> Self {
        Self {
            tasks: Vec::new(),
            notices: vec![Notice::from_error(error)],
        }
    }

    pub fn push(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Most severe notice level, if any notice was raised.
    pub fn level(&self) -> Option<NoticeLevel> {
        self.notices.iter().map(|notice| notice.level).max()
    }

    /// True unless a warning or error was raised.
    pub fn is_success(&self) -> bool {
        self.level().is_none_or(|level| level <= NoticeLevel::Info)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for notice in &self.notices {
            write!(f, "{notice}")?;
        }
        if !self.tasks.is_empty() {
            writeln!(f)?;
            for task in &self.tasks {
                write!(f, "{task}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskId;

    #[test]
    fn test_notice_display() {
        assert_eq!(Notice::success("Saved").to_string(), "Success: Saved\n");
        assert!(Notice::error("Offline").to_string().starts_with("Error:"));
    }

    #[test]
    fn test_notice_from_error_level() {
        let rejected = TimelineError::TaskNotFound {
            id: TaskId::Server(4),
        };
        assert_eq!(Notice::from_error(&rejected).level, NoticeLevel::Warning);

        let failed = TimelineError::Rejected {
            operation: "task update".to_string(),
        };
        assert_eq!(Notice::from_error(&failed).level, NoticeLevel::Error);
    }

    #[test]
    fn test_outcome_success_tracks_worst_level() {
        let mut outcome = Outcome::default();
        assert!(outcome.is_success());
        outcome.push(Notice::info("Already saved"));
        assert!(outcome.is_success());
        outcome.push(Notice::warning("Kept locally"));
        assert!(!outcome.is_success());
        assert_eq!(outcome.level(), Some(NoticeLevel::Warning));
    }
}
