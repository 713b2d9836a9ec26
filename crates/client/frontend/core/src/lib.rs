//! Cross-frontend primitives for presenting the game.
//!
//! Houses message logging, event handling, time formatting and view-model
//! types that the CLI and future graphical clients can reuse.
pub mod config;
pub mod event;
pub mod format;
pub mod frontend;
pub mod message;
pub mod presentation;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig};
pub use event::{EventConsumer, EventImpact, MessageFeed};
pub use format::format_time;
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use presentation::PresentationMapper;
pub use view_model::{Cell, Hud, ViewModel};
