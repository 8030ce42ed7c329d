//! Various utility types and functions.

pub mod buf;
pub mod pnm;

/// Width and height of a raster, in pixels.
pub type Dims = (u32, u32);

/// Common raster sizes.
pub mod dims {
    use super::Dims;

    /// The size of the canvas used in the lab exercises.
    pub const SQUARE_600: Dims = (600, 600);
    pub const VGA_640_480: Dims = (640, 480);
    pub const SVGA_800_600: Dims = (800, 600);

    /// Returns the ratio of width to height.
    pub fn aspect_ratio((w, h): Dims) -> f32 {
        w as f32 / h as f32
    }
}
