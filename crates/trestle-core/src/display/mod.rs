//! Display formatting for timeline output.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! producing markdown that the CLI renders to the terminal and the MCP
//! server returns as text. Edits report through [`Outcome`] and [`Notice`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display impls & │    │   Formatted     │
//! │ (Lane, Task,    │───▶│ Outcome/Notice  │───▶│    Output       │
//! │  View, Summary) │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`datetime`]: Day-granularity date formatting
//! - [`models`]: Display implementations for domain models
//! - [`status`]: Edit outcomes and user notices
//!
//! # Examples
//!
//! ```rust
//! use trestle_core::display::{Notice, NoticeLevel, Outcome};
//!
//! let mut outcome = Outcome::default();
//! outcome.push(Notice::success("Saved task 10"));
//! assert_eq!(outcome.level(), Some(NoticeLevel::Success));
//! assert_eq!(outcome.to_string(), "Success: Saved task 10\n");
//! ```

pub mod datetime;
pub mod models;
pub mod status;

pub use datetime::DayLabel;
pub use status::{Notice, NoticeLevel, Outcome};
