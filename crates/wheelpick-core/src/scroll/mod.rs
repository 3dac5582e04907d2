//! Settle animation atoms
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing functions (quadratic, cubic, quintic, exponential)
//! - `timing` - Time calculation utilities (progress, interpolation)
//! - `config` - Duration helpers on `ScrollConfig`
//!
//! The engine (`crate::engine`) is the molecular layer built on these atoms.

pub mod config;
pub mod easing;
pub mod timing;

pub use config::ScrollConfig;
pub use easing::EasingType;
