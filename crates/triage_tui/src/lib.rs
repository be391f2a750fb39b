//! Terminal rendering for diagnostics.
//!
//! Provides the ratatui [`DiagnosticMessage`] leaf widget, which displays
//! one [`Diagnostic`](triage_diagnostics::Diagnostic) as a severity icon
//! followed by its markdown-rendered message and optional muted detail
//! block.
//!
//! # Usage
//!
//! ```ignore
//! use triage_diagnostics::Diagnostic;
//! use triage_tui::DiagnosticMessage;
//!
//! let diag = Diagnostic::warning("unused variable `x`")
//!     .with_detail("declared in `main.rs`, never read");
//! frame.render_widget(DiagnosticMessage::new(&diag), area);
//! ```
//!
//! # Collaborators
//!
//! Markdown conversion and icon selection sit behind the
//! [`MarkdownRenderer`] and [`IconResolver`] traits so callers can swap
//! them out; the defaults are [`CmarkRenderer`] (pulldown-cmark backed,
//! drops raw HTML) and [`DefaultIconSet`] (colored unicode glyphs).

#![warn(missing_docs)]

pub mod icon;
pub mod markdown;
pub mod widgets;

pub use icon::{DefaultIconSet, IconResolver};
pub use markdown::{CmarkRenderer, MarkdownRenderer};
pub use widgets::diagnostic_message::DiagnosticMessage;
