mod text;

pub use text::TextRenderer;

use std::io;

use crate::derivation::View;

/// Draws the overlay from a snapshot. Implementations hold no market state
/// of their own; everything they show comes from the `View`.
pub trait Renderer {
    /// Full redraw: title, category buttons, item list, totals, timer.
    fn render(&mut self, view: &View) -> io::Result<()>;

    /// Totals bar and sell button only.
    fn render_totals(&mut self, view: &View) -> io::Result<()>;

    /// Countdown only.
    fn render_timer(&mut self, view: &View) -> io::Result<()>;

    fn hide(&mut self) -> io::Result<()>;
}
