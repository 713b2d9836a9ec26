//! Framework-agnostic presentation mapping.
//!
//! Each frontend maps view-model cells, message levels and effects to its own
//! glyphs and styling system by implementing [`PresentationMapper`].

use game_core::EffectKind;

use crate::message::MessageLevel;
use crate::view_model::Cell;

pub trait PresentationMapper {
    /// Style type for this frontend (e.g., `ratatui::style::Style`).
    type Style: Clone;

    /// Glyph and style for one grid tile.
    fn render_cell(&self, cell: Cell) -> (&'static str, Self::Style);

    fn style_message(&self, level: MessageLevel) -> Self::Style;

    fn style_effect(&self, kind: EffectKind) -> Self::Style;

    /// Highlight applied to values that just changed (score, records).
    fn emphasize(&self, base_style: Self::Style) -> Self::Style;
}
