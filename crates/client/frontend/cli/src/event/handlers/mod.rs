//! Event handler implementations for EventLoop.
//!
//! - `input`: keyboard handling and run control
//! - `runtime`: broadcast events from the runtime
//! - `rendering`: terminal rendering

mod input;
mod rendering;
mod runtime;
