//! Library exports for the sketchpad drawing canvas.
//!
//! The canvas itself lives in [`input::DrawingSurface`]; [`draw`] provides the
//! raster surface it paints on, [`controls`] the validated user controls, and
//! [`host`] a replay driver that feeds recorded input through all of them.

pub mod config;
pub mod controls;
pub mod draw;
pub mod export;
pub mod host;
pub mod input;
pub mod script;

pub use config::Config;
pub use input::DrawingSurface;
