pub mod common;
pub mod entities;
pub mod item;
pub mod world;

pub use common::{CardinalDirection, Position};
pub use entities::{PlayerState, Pursuer, Snake};
pub use item::{ActiveEffect, EffectKind, Item, ItemKind};
pub use world::Grid;
