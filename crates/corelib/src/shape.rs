//! Validated marker shape parameters.

use crate::{CoreError, CoreResult, falloff};

/// Largest allowed radius ratio: the shape must fit inside the image.
pub const MAX_RATIO: f64 = 0.5;

/// Largest edge length in pixels; keeps an RGBA8 buffer at 1 GiB.
pub const MAX_SIZE: u32 = 16_384;

fn check_size(size: u32) -> CoreResult<()> {
    if size == 0 {
        return Err(CoreError::InvalidSize(size));
    }
    if size > MAX_SIZE {
        return Err(CoreError::SizeTooLarge {
            size,
            max: MAX_SIZE,
        });
    }
    Ok(())
}

fn check_ratio(name: &'static str, value: f64) -> CoreResult<()> {
    if !value.is_finite() || value <= 0.0 || value > MAX_RATIO {
        return Err(CoreError::InvalidRatio { name, value });
    }
    Ok(())
}

/// Filled disk with a single soft edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotShape {
    size: u32,
    radius_ratio: f64,
}

impl DotShape {
    pub fn new(size: u32, radius_ratio: f64) -> CoreResult<Self> {
        check_size(size)?;
        check_ratio("radius ratio", radius_ratio)?;
        Ok(Self { size, radius_ratio })
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Radius in pixels.
    #[inline]
    pub fn radius(&self) -> f64 {
        f64::from(self.size) * self.radius_ratio
    }

    #[inline]
    pub fn alpha_at(&self, dist: f64) -> u8 {
        falloff::dot_alpha(dist, self.radius())
    }
}

/// Annulus with independent soft inner and outer edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingShape {
    size: u32,
    outer_ratio: f64,
    inner_ratio: f64,
}

impl RingShape {
    pub fn new(size: u32, outer_ratio: f64, inner_ratio: f64) -> CoreResult<Self> {
        check_size(size)?;
        check_ratio("outer ratio", outer_ratio)?;
        check_ratio("inner ratio", inner_ratio)?;
        if inner_ratio >= outer_ratio {
            return Err(CoreError::InvertedRing {
                inner: inner_ratio,
                outer: outer_ratio,
            });
        }
        Ok(Self {
            size,
            outer_ratio,
            inner_ratio,
        })
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn outer_ratio(&self) -> f64 {
        self.outer_ratio
    }

    #[inline]
    pub fn inner_ratio(&self) -> f64 {
        self.inner_ratio
    }

    #[inline]
    pub fn outer_radius(&self) -> f64 {
        f64::from(self.size) * self.outer_ratio
    }

    #[inline]
    pub fn inner_radius(&self) -> f64 {
        f64::from(self.size) * self.inner_ratio
    }

    #[inline]
    pub fn alpha_at(&self, dist: f64) -> u8 {
        falloff::ring_alpha(dist, self.inner_radius(), self.outer_radius())
    }
}
