//! **stride-core** — core grid types for the stride pathfinding toolkit.
//!
//! This crate provides the foundational types shared across the *stride*
//! workspace: the integer [`Point`] geometry primitive and the immutable
//! [`TileMap`] traversability snapshot that searches run against.

pub mod geom;
pub mod tilemap;

pub use geom::Point;
pub use tilemap::{MapError, TileMap};
