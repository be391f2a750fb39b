//! Severity-to-icon resolution.
//!
//! Maps a [`Severity`] to a single-cell styled glyph shown to the left of
//! the diagnostic text. Resolution is a pure function of the severity.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use triage_diagnostics::Severity;

/// Trait for resolving a severity into its visual icon.
pub trait IconResolver {
    /// Returns the styled one-cell glyph for the given severity.
    fn resolve(&self, severity: Severity) -> Span<'static>;
}

/// The default icon set: colored unicode glyphs.
pub struct DefaultIconSet;

impl DefaultIconSet {
    /// Returns the bare glyph for a severity, without styling.
    pub fn glyph(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => "✖",
            Severity::Warning => "⚠",
            Severity::Info => "ℹ",
            Severity::Hint => "?",
        }
    }

    /// Returns the icon color for a severity.
    pub fn color(severity: Severity) -> Color {
        match severity {
            Severity::Error => Color::Red,
            Severity::Warning => Color::Yellow,
            Severity::Info => Color::Blue,
            Severity::Hint => Color::Cyan,
        }
    }
}

impl IconResolver for DefaultIconSet {
    fn resolve(&self, severity: Severity) -> Span<'static> {
        let mut style = Style::default().fg(Self::color(severity));
        if severity.is_error() {
            style = style.add_modifier(Modifier::BOLD);
        }
        Span::styled(Self::glyph(severity), style)
    }
}
