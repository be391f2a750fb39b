//! Diagnostic message widget.
//!
//! Renders one diagnostic as a severity icon followed by its
//! markdown-rendered message and, when present, its detail text in a
//! muted style below. The widget is a pure function of its inputs: it
//! borrows the diagnostic for a single render pass, holds no state, and
//! writes nothing outside the given area.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::Widget;

use triage_diagnostics::Diagnostic;

use crate::icon::{DefaultIconSet, IconResolver};
use crate::markdown::{CmarkRenderer, MarkdownRenderer};

/// Width of the icon column: one glyph cell plus one gap cell.
const ICON_COLUMN: u16 = 2;

static DEFAULT_RENDERER: CmarkRenderer = CmarkRenderer;
static DEFAULT_ICONS: DefaultIconSet = DefaultIconSet;

/// Style applied under detail spans so the detail block reads
/// de-emphasized next to the primary message.
fn detail_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::DIM)
}

/// A leaf widget rendering one [`Diagnostic`] as icon + text block.
///
/// Collaborators default to [`CmarkRenderer`] and [`DefaultIconSet`] and
/// can be swapped via [`renderer`](Self::renderer) and
/// [`icons`](Self::icons). The container style set with
/// [`style`](Self::style) is applied to the whole area before content is
/// written, so callers can extend presentation (e.g. a background for a
/// selected row) without replacing the widget's own styling.
#[derive(Clone, Copy)]
pub struct DiagnosticMessage<'a> {
    diagnostic: &'a Diagnostic,
    style: Style,
    renderer: &'a dyn MarkdownRenderer,
    icons: &'a dyn IconResolver,
}

impl<'a> DiagnosticMessage<'a> {
    /// Creates a widget for the given diagnostic with default collaborators.
    pub fn new(diagnostic: &'a Diagnostic) -> Self {
        Self {
            diagnostic,
            style: Style::default(),
            renderer: &DEFAULT_RENDERER,
            icons: &DEFAULT_ICONS,
        }
    }

    /// Sets the container style patched over the area before rendering.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Replaces the markdown renderer.
    pub fn renderer(mut self, renderer: &'a dyn MarkdownRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Replaces the icon resolver.
    pub fn icons(mut self, icons: &'a dyn IconResolver) -> Self {
        self.icons = icons;
        self
    }

    /// Builds the text block: the rendered message, then one spacer line
    /// and the muted detail block when `detail` is present.
    ///
    /// A `Some("")` detail counts as present and contributes an empty
    /// block (just the spacer), mirroring the upstream producer contract.
    /// The markdown renderer is invoked once for the message and once for
    /// the detail iff present.
    pub fn text(&self) -> Text<'static> {
        let mut text = self.renderer.render(&self.diagnostic.message);
        if let Some(detail) = &self.diagnostic.detail {
            let detail_text = self.renderer.render(detail);
            text.lines.push(Line::default());
            for line in detail_text.lines {
                text.lines.push(mute_line(line));
            }
        }
        text
    }

    /// Returns the number of rows this widget needs at full width.
    ///
    /// At least 1, since the icon always occupies one row.
    pub fn height(&self) -> u16 {
        self.text().height().max(1) as u16
    }
}

/// Patches the detail style under every span of a line, keeping inline
/// styling (bold, code color) layered on top.
fn mute_line(line: Line<'static>) -> Line<'static> {
    let spans = line
        .spans
        .into_iter()
        .map(|mut span| {
            span.style = detail_style().patch(span.style);
            span
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

impl Widget for &DiagnosticMessage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // Container style first, so content styles layer over it.
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                buf.get_mut(x, y).set_style(self.style);
            }
        }

        let icon = self.icons.resolve(self.diagnostic.severity);
        buf.set_span(area.x, area.y, &icon, area.width);

        if area.width <= ICON_COLUMN {
            return;
        }
        let text_x = area.x + ICON_COLUMN;
        let text_width = area.width - ICON_COLUMN;

        for (i, line) in self.text().lines.iter().enumerate() {
            let y = area.y + i as u16;
            if y >= area.bottom() {
                break;
            }
            buf.set_line(text_x, y, line, text_width);
        }
    }
}

impl Widget for DiagnosticMessage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (&self).render(area, buf);
    }
}
