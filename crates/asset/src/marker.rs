//! Interaction marker rasterizer: anti-aliased white dot and ring on transparent RGBA8.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use corelib::{CoreResult, DotShape, RingShape, falloff::sample_distance};

use crate::texture::TextureData;

/// Edge length of the shipped marker textures.
pub const MARKER_SIZE: u32 = 64;
pub const DOT_RADIUS_RATIO: f64 = 0.35;
pub const RING_OUTER_RATIO: f64 = 0.48;
pub const RING_INNER_RATIO: f64 = 0.38;

const FOREGROUND: [u8; 3] = [255, 255, 255];

/// Filled disk with a 2-pixel soft edge. Fails on invalid parameters.
pub fn generate_dot(size: u32, radius_ratio: f64) -> CoreResult<TextureData> {
    let shape = DotShape::new(size, radius_ratio)?;
    Ok(rasterize_dot(&shape))
}

/// Annulus with soft inner and outer edges. Fails on invalid parameters.
pub fn generate_ring(size: u32, outer_ratio: f64, inner_ratio: f64) -> CoreResult<TextureData> {
    let shape = RingShape::new(size, outer_ratio, inner_ratio)?;
    Ok(rasterize_ring(&shape))
}

pub fn rasterize_dot(shape: &DotShape) -> TextureData {
    rasterize(shape.size(), |dist| shape.alpha_at(dist))
}

pub fn rasterize_ring(shape: &RingShape) -> TextureData {
    rasterize(shape.size(), |dist| shape.alpha_at(dist))
}

fn rasterize(size: u32, alpha_at: impl Fn(f64) -> u8) -> TextureData {
    let mut tex = TextureData::transparent(size, size);
    let [r, g, b] = FOREGROUND;
    for y in 0..size {
        for x in 0..size {
            let a = alpha_at(sample_distance(x, y, size));
            tex.put_pixel(x, y, [r, g, b, a]);
        }
    }
    tex
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerKind {
    Dot,
    Ring,
}

impl MarkerKind {
    /// Asset name used both for the PNG and for the imported texture.
    pub fn file_stem(self) -> &'static str {
        match self {
            MarkerKind::Dot => "T_InteractionDot",
            MarkerKind::Ring => "T_InteractionRing",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarkerShape {
    Dot(DotShape),
    Ring(RingShape),
}

/// A named marker ready to be rendered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerSpec {
    pub kind: MarkerKind,
    pub shape: MarkerShape,
}

impl MarkerSpec {
    pub fn dot(shape: DotShape) -> Self {
        Self {
            kind: MarkerKind::Dot,
            shape: MarkerShape::Dot(shape),
        }
    }

    pub fn ring(shape: RingShape) -> Self {
        Self {
            kind: MarkerKind::Ring,
            shape: MarkerShape::Ring(shape),
        }
    }

    /// Dot and ring at the shipped size and ratios.
    pub fn default_set() -> CoreResult<Vec<MarkerSpec>> {
        Ok(vec![
            Self::dot(DotShape::new(MARKER_SIZE, DOT_RADIUS_RATIO)?),
            Self::ring(RingShape::new(
                MARKER_SIZE,
                RING_OUTER_RATIO,
                RING_INNER_RATIO,
            )?),
        ])
    }

    pub fn file_name(&self) -> String {
        format!("{}.png", self.kind.file_stem())
    }

    pub fn render(&self) -> TextureData {
        match &self.shape {
            MarkerShape::Dot(s) => rasterize_dot(s),
            MarkerShape::Ring(s) => rasterize_ring(s),
        }
    }
}

/// Render every marker into `dir` as `<stem>.png`. Creates `dir` if needed.
/// Returns the written paths in input order.
pub fn write_marker_set(dir: impl AsRef<Path>, specs: &[MarkerSpec]) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let mut written = Vec::with_capacity(specs.len());
    for spec in specs {
        let path = dir.join(spec.file_name());
        spec.render().save_png(&path)?;
        log::info!("Created: {}", path.display());
        written.push(path);
    }
    Ok(written)
}
