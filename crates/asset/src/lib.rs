//! Marker textures: CPU-side RGBA8 images, the dot/ring rasterizer,
//! PNG output and the editor import boundary.

pub mod host;
pub mod marker;
pub mod texture;

pub use marker::{MarkerKind, MarkerSpec, generate_dot, generate_ring, write_marker_set};
pub use texture::TextureData;
