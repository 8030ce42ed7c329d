//! Render targets.
//!
//! The render target is a framebuffer comprising a color buffer and a depth
//! buffer of equal size. Both are cleared together, and every pixel write
//! that passes the depth test updates both, so a color sample is only ever
//! valid together with the depth sample written in the same frame.

use crate::math::color::{Color3, Color3f, Color4, rgb, rgba};
use crate::util::{Dims, buf::Buf2};

/// Framebuffer, combining a color (pixel) buffer and a depth buffer.
///
/// The color buffer stores RGBA8 samples in row-major order with the
/// origin at the top left. The depth buffer stores NDC depth, where
/// smaller values are closer to the viewer.
#[derive(Clone, Debug, PartialEq)]
pub struct Framebuf {
    color: Buf2<[u8; 4]>,
    depth: Buf2<f32>,
}

impl Framebuf {
    /// The value the depth buffer is cleared to: the far plane in NDC.
    pub const DEPTH_CLEAR: f32 = 1.0;

    /// Creates a new framebuffer of size `dims`, with the color buffer
    /// cleared to opaque black and the depth buffer to the far plane.
    pub fn new(dims: Dims) -> Self {
        Self {
            color: Buf2::filled(dims, [0, 0, 0, 0xFF]),
            depth: Buf2::filled(dims, Self::DEPTH_CLEAR),
        }
    }

    /// Returns the width and height of `self`.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.color.dims()
    }

    /// Clears the color buffer to `color`, made opaque, and the depth
    /// buffer to [`DEPTH_CLEAR`][Self::DEPTH_CLEAR].
    pub fn clear(&mut self, color: Color3f) {
        self.color.fill(color.to_color4().0);
        self.depth.fill(Self::DEPTH_CLEAR);
    }

    /// Writes a depth-tested pixel.
    ///
    /// If (x, y) is inside the buffer and `z` is strictly less than the
    /// depth currently stored there, stores `z` and `color`, with color
    /// channels clamped to [0, 1], and returns `true`. Otherwise leaves the
    /// buffers untouched and returns `false`.
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, z: f32, color: Color3f) -> bool {
        let Some(d) = self.depth.get_mut(x, y) else {
            return false;
        };
        if !(z < *d) {
            return false;
        }
        *d = z;
        if let Some(c) = self.color.get_mut(x, y) {
            *c = color.to_color4().0;
        }
        true
    }

    /// Writes a pixel without depth testing and without touching the depth
    /// buffer. Used by the 2D drawing routines.
    ///
    /// Returns whether (x, y) was inside the buffer.
    #[inline]
    pub fn plot(&mut self, x: i32, y: i32, color: Color3f) -> bool {
        self.color
            .get_mut(x, y)
            .map(|c| *c = color.to_color4().0)
            .is_some()
    }

    /// Returns the color at (x, y), or `None` if out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color4> {
        self.color.get(x, y).map(|&[r, g, b, a]| rgba(r, g, b, a))
    }

    /// Returns the depth at (x, y), or `None` if out of bounds.
    pub fn depth_at(&self, x: i32, y: i32) -> Option<f32> {
        self.depth.get(x, y).copied()
    }

    /// Returns the color buffer as a flat slice of RGBA bytes of length
    /// width · height · 4, ready to be uploaded as a texture.
    pub fn color_bytes(&self) -> &[u8] {
        self.color.data().as_flattened()
    }

    /// Returns the depth buffer.
    pub fn depth_buf(&self) -> &Buf2<f32> {
        &self.depth
    }

    /// Returns a copy of the color buffer with the alpha channel dropped,
    /// for example to be saved as a PPM file.
    pub fn to_rgb_buf(&self) -> Buf2<Color3> {
        Buf2::new_with(self.dims(), |x, y| {
            let [r, g, b, _] = self.color[[x, y]];
            rgb(r, g, b)
        })
    }

    /// Writes the color buffer into `out` as `0x00RRGGBB` words.
    ///
    /// Writes at most `out.len()` pixels.
    pub fn write_xrgb(&self, out: &mut [u32]) {
        for (o, &[r, g, b, a]) in out.iter_mut().zip(self.color.data()) {
            *o = rgba(r, g, b, a).to_xrgb_u32();
        }
    }
}
