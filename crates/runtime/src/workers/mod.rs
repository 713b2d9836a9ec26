//! Worker tasks that back the runtime orchestration.
//!
//! The tick worker is the single owner of the game state; every other task
//! reaches it through the command channel.

mod tick;

pub use tick::{Command, TickWorker};
