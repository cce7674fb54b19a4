//! # callscore-engine — Call Transcript Risk Scoring
//!
//! Pure, synchronous classification of a single agent call record:
//!
//! ```text
//! record (serde_json::Value)
//!   --> validate::validate_record        structural shape check
//!   --> transcript::flatten_transcript   heterogeneous entries -> one text blob
//!   --> matcher::match_keywords (x2)     price and legal claims
//!   --> scorer::score_record             accumulate, clamp once
//!   --> classify::classify               ordered (ceiling, level) table
//!   --> ScoreResult
//! ```
//!
//! ## Crate Policy
//!
//! - No I/O, no global state. The [`Configuration`](callscore_core::Configuration)
//!   is passed in and only read, so independent records may be scored
//!   concurrently against one shared configuration.
//! - Structural failures are returned as
//!   [`ValidationError`](callscore_core::ValidationError); no partial result
//!   is ever produced.

pub mod classify;
pub mod matcher;
pub mod scorer;
pub mod transcript;
pub mod validate;

pub use classify::classify;
pub use matcher::{match_keywords, KeywordMatch};
pub use scorer::{score_record, PLACEHOLDER_MARKER, STOP_REQUIRED_MARKER};
pub use transcript::{flatten_transcript, TextSource};
pub use validate::{validate_record, REQUIRED_FIELDS};
