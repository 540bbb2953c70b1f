//! Core marker geometry: shape parameters, validation, per-pixel alpha policy.
//! Renderer-agnostic; images and files live in `asset`.

pub use glam::DVec2;
use thiserror::Error;

pub mod falloff;
pub mod shape;

pub use shape::{DotShape, RingShape};

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("Invalid marker size {0}: must be at least 1 pixel")]
    InvalidSize(u32),
    #[error("Invalid marker size {size}: must not exceed {max} pixels")]
    SizeTooLarge { size: u32, max: u32 },
    #[error("Invalid {name} {value}: must be a finite ratio in (0, 0.5]")]
    InvalidRatio { name: &'static str, value: f64 },
    #[error("Invalid ring: inner ratio {inner} must be smaller than outer ratio {outer}")]
    InvertedRing { inner: f64, outer: f64 },
}

pub type CoreResult<T> = Result<T, CoreError>;
