//! Terminal UI frontend for GRIDCHASE.
//!
//! This crate provides a terminal-based user interface for the game.
//! It implements the `client_frontend_core::Frontend` trait for pure UI rendering.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives a RuntimeHandle for communication
//! - Does NOT own the Runtime
//! - Subscribes to events and forwards directions, pause and start requests

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::CliConfig;
pub use presentation::ui::TILE_COLUMNS;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
