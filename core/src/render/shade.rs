//! Shading strategies for filled triangles.
//!
//! All strategies share the same scanline walk, [`tri_fill`]; they differ
//! only in which varyings are interpolated and where the lighting model is
//! evaluated.

use crate::math::{Color3f, Lerp};

use super::{
    ScreenVertex,
    light::Lighting,
    raster::{ScreenVert, tri_fill},
    stats::Throughput,
    target::Framebuf,
};

/// How to compute the color of the pixels of a filled triangle.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Shading {
    /// Lights the face once, at its centroid, with the averaged vertex
    /// normal and base color, and fills it with a single color.
    Flat,
    /// Interpolates the colors lit at each vertex.
    #[default]
    Gouraud,
    /// Interpolates base color, normal, and world position, and runs the
    /// lighting model for every pixel.
    Phong,
}

impl Shading {
    /// Returns the next mode in the cycle flat, Gouraud, Phong.
    pub fn next(self) -> Self {
        match self {
            Self::Flat => Self::Gouraud,
            Self::Gouraud => Self::Phong,
            Self::Phong => Self::Flat,
        }
    }
}

/// Fills a triangle using the given shading strategy.
///
/// Every pixel is depth tested. Returns the count of fragments generated
/// and written.
pub fn fill(
    fb: &mut Framebuf,
    verts: [ScreenVertex; 3],
    shading: Shading,
    lighting: &Lighting,
) -> Throughput {
    match shading {
        Shading::Flat => {
            let [a, b, c] = verts.map(|v| v.attrib);
            let world = (a.world + b.world + c.world) / 3.0;
            let normal = a.normal + b.normal + c.normal;
            let base = (a.color + b.color + c.color) / 3.0;
            let color = lighting.shade(world, normal, base);
            let verts = verts.map(|v| ScreenVert { pos: v.pos, attrib: () });
            fill_with(fb, verts, |_| color)
        }
        Shading::Gouraud => fill_with(
            fb,
            verts.map(|v| ScreenVert { pos: v.pos, attrib: v.attrib.lit }),
            |&lit| lit,
        ),
        Shading::Phong => fill_with(
            fb,
            verts.map(|v| {
                let a = v.attrib;
                ScreenVert { pos: v.pos, attrib: (a.color, a.normal, a.world) }
            }),
            |&(base, normal, world)| lighting.shade(world, normal, base),
        ),
    }
}

/// Fills a triangle, computing the color of each fragment that passes the
/// depth test with `shade`.
pub fn fill_with<V, F>(
    fb: &mut Framebuf,
    verts: [ScreenVert<V>; 3],
    mut shade: F,
) -> Throughput
where
    V: Lerp,
    F: FnMut(&V) -> Color3f,
{
    let mut io = Throughput::default();
    tri_fill(verts, fb.dims(), |sl| {
        for frag in sl.fragments() {
            io.i += 1;
            let [x, y, z] = frag.pos.0;
            // Depth test first so that hidden fragments are not shaded
            let visible = fb
                .depth_at(x as i32, y as i32)
                .is_some_and(|d| z < d);
            if visible {
                io.o += fb.put_pixel(x as i32, y as i32, z, shade(&frag.var))
                    as usize;
            }
        }
    });
    io
}
