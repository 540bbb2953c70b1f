//! Texture data and PNG encode/decode.
//! Markers are produced as RGBA8 buffers and written losslessly with alpha.

use std::path::Path;

use anyhow::{Context, Result};

/// Texture data in CPU-friendly format, row-major, `(y * width + x) * 4`.
#[derive(Clone, Debug, PartialEq)]
pub struct TextureData {
    pub(crate) data: Vec<u8>,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) format: TextureFormat,
}

/// Supported texture formats.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TextureFormat {
    Rgba8,
}

impl TextureData {
    /// Create a new texture with given dimensions and RGBA8 format.
    pub fn new_rgba8(width: u32, height: u32, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            rgba8_len(width, height),
            "Data size doesn't match RGBA8 format"
        );
        Self {
            data,
            width,
            height,
            format: TextureFormat::Rgba8,
        }
    }

    /// Fully transparent RGBA8 texture (every channel zero).
    pub fn transparent(width: u32, height: u32) -> Self {
        Self::new_rgba8(width, height, vec![0; rgba8_len(width, height)])
    }

    /// Load texture from PNG file.
    pub fn load_png<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading texture from {:?}", path);

        let img = image::open(path)
            .with_context(|| format!("Failed to open image {}", path.display()))?;

        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        let data = rgba.into_raw();

        log::debug!("Loaded texture {}x{} with {} bytes", width, height, data.len());

        Ok(Self::new_rgba8(width, height, data))
    }

    /// Write the texture as an RGBA8 PNG. Alpha is kept as-is.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;

        log::debug!("Saved texture {}x{} to {:?}", self.width, self.height, path);
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw channel bytes.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// RGBA sample at `(x, y)`, `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let i = self.offset(x, y)?;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.data[i..i + 4]);
        Some(px)
    }

    #[inline]
    pub fn alpha(&self, x: u32, y: u32) -> Option<u8> {
        self.pixel(x, y).map(|px| px[3])
    }

    pub(crate) fn put_pixel(&mut self, x: u32, y: u32, px: [u8; 4]) {
        if let Some(i) = self.offset(x, y) {
            self.data[i..i + 4].copy_from_slice(&px);
        }
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let bpp = self.bytes_per_pixel() as usize;
        Some((y as usize * self.width as usize + x as usize) * bpp)
    }

    /// Get the number of bytes per pixel for the format.
    pub fn bytes_per_pixel(&self) -> u32 {
        match self.format {
            TextureFormat::Rgba8 => 4,
        }
    }

    /// Check if the texture data is valid.
    pub fn is_valid(&self) -> bool {
        self.data.len() == rgba8_len(self.width, self.height) && self.width > 0 && self.height > 0
    }
}

#[inline]
fn rgba8_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}
