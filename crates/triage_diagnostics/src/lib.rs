//! Diagnostic data model shared by the triage rendering crates.
//!
//! This crate provides the plain-data [`Diagnostic`] record (severity,
//! markdown message, optional markdown detail) and its [`Severity`]
//! enumeration. It contains no rendering logic; see `triage_tui` for the
//! terminal widget that displays these values.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod severity;

pub use diagnostic::Diagnostic;
pub use severity::Severity;
