//! Pure layout engine for the isometric level chart.
//!
//! Everything in this crate is a deterministic function of its inputs:
//! no caches, no globals, no side effects. The owning UI layer holds
//! selection state and re-invokes the engine per paint.

pub mod config;
pub mod geometry;
pub mod hit;
pub mod projection;
pub mod scene;
pub mod svg;

pub use config::LayoutConfig;
pub use geometry::{build_geometry, dimensions, LevelBand, LevelGeometry};
pub use projection::project;
pub use scene::{build_scene, LevelSlab};
