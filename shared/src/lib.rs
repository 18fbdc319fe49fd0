//! # NOT TODAY Interaction Model
//!
//! Layout-agnostic state and reference data behind both NOT TODAY screens.
//! The frontend renders from this crate and routes every user action through
//! [`session::Session`]; nothing here touches the DOM.
//!
//! ## Structure
//!
//! - **[`catalog`]**: Fixed reference data (merch, leaderboard, nearby objects, games, quiz)
//! - **[`session`]**: Per-page-view state and every state transition
//! - **[`quiz`]**: First-answer-locks quiz engine
//! - **[`commerce`]**: Append-only cart and the points redemption rule
//! - **[`notify`]**: Injectable notification sink and the message catalogue
//! - **[`forms`]**: Field-level email validation
//! - **[`clock`]**: Header clock formatting
//! - **[`viewers`]**: Viewer-count random walk
//! - **[`error`]**: Domain error types
//! - **[`utils`]**: Display helpers
//!
//! ## Logging
//!
//! State transitions log through the [`log`] facade. The wasm frontend
//! installs `wasm-logger`; native tests run with no logger.

pub mod catalog;
pub mod clock;
pub mod commerce;
pub mod error;
pub mod forms;
pub mod notify;
pub mod quiz;
pub mod session;
pub mod utils;
pub mod viewers;

pub use error::CommerceError;
pub use notify::{Notice, NoticeLog, NotificationSink};
pub use session::Session;
