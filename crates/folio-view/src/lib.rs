//! # folio-view
//!
//! View state for the portfolio page, one owner per section. Nothing here is
//! process-wide: every section holds its own slot, reveal schedule, hover
//! state, and timers, and dropping the section cancels its timers.
//!
//! - [`SectionSlot`]: `Loading` until its fetch delivers; ignores deliveries
//!   after teardown.
//! - [`StaggeredReveal`] / [`VisibilitySet`]: card entrance timing.
//! - [`HoverIndex`]: the one hovered card, if any.
//! - [`GlitchText`]: the hero title effect.
//! - [`clock`]: footer clock and card date formats.
//! - [`theme`]: language badge colours and per-platform audience stats.
//! - [`ScopedTask`]: tokio timers aborted on drop.
//! - [`PortfolioPage`]: concurrent load of every section, either all at
//!   once or as [`PageSections`], one slot and read task per section.

pub mod clock;
mod entrance;
mod glitch;
mod hover;
mod page;
mod section;
pub mod theme;
mod timer;

pub use entrance::{REVEAL_STEP, StaggeredReveal, VISIBILITY_THRESHOLD, VisibilitySet};
pub use glitch::{FRAME_PERIOD, GLITCH_CHARSET, GlitchText, TRIGGER_PERIOD};
pub use hover::HoverIndex;
pub use page::{PageSections, PortfolioPage};
pub use section::{SectionSlot, SectionState};
pub use timer::{ScopedTask, spawn_after, spawn_interval};
