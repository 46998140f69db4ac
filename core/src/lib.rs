//! Core components for building Shared Access Signature tokens.
//!
//! This crate provides the foundational types shared by the sastoken services.
//! It holds no service specific logic: services build their token models on
//! top of the error type and the helpers exported here.
//!
//! ## Overview
//!
//! - [`Error`] and [`ErrorKind`]: the error type returned by every fallible
//!   operation in the ecosystem, together with the [`Result`] alias.
//! - [`time`]: date time helpers, including the truncated ISO 8601 encoder
//!   used by SAS date fields.
//! - [`utils`]: general utilities including data redaction.
//!
//! ## Example
//!
//! ```
//! use chrono::TimeZone;
//! use sastoken_core::time::format_truncated_iso8601;
//!
//! let t = chrono::Utc.with_ymd_and_hms(2020, 5, 1, 7, 6, 43).unwrap();
//! assert_eq!(format_truncated_iso8601(t, false), "2020-05-01T07:06:43Z");
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};
