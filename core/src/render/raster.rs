//! Translation of triangles into discrete pixels in the framebuffer.
//!
//! Rasterization proceeds by turning a triangle into a sequence of
//! *scanlines*, each corresponding to a horizontal span of pixels covered
//! by the triangle on a given row. The scanlines, in turn, are converted
//! into a series of *fragments* that represent potentially drawn pixels,
//! each carrying its depth and the interpolated varyings.
//!
//! The fragments are then tested against the depth buffer by the caller;
//! see [`Framebuf::put_pixel`].

use core::fmt::{self, Debug, Formatter};
use core::ops::Range;

use crate::geom::Vertex;
use crate::math::{Color3f, Lerp, Vec2, Vec3, float, inv_lerp, vec3};
use crate::util::Dims;

use super::{Screen, line, stats::Throughput, target::Framebuf};

/// A vertex in screen space, carrying varyings of type `V`.
///
/// `x` and `y` are viewport pixel coordinates, `z` is NDC depth.
pub type ScreenVert<V> = Vertex<Vec3<Screen>, V>;

/// A fragment, or a single "pixel" in a rasterized primitive.
#[derive(Clone, Debug)]
pub struct Frag<V> {
    pub pos: Vec3<Screen>,
    pub var: V,
}

/// A horizontal, 1-pixel-thick "slice" of a triangle being rasterized.
pub struct Scanline<V> {
    /// The y coordinate of the line.
    pub y: i32,
    /// The range of x coordinates covered, clipped to the buffer.
    pub xs: Range<i32>,
    left: ScreenVert<V>,
    right: ScreenVert<V>,
}

impl<V: Lerp> Scanline<V> {
    /// Returns an iterator over the fragments of `self`, left to right,
    /// with depth and varyings interpolated between the span endpoints.
    ///
    /// A zero-width span takes its values from the left endpoint.
    pub fn fragments(&self) -> impl Iterator<Item = Frag<V>> + '_ {
        let (x0, x1) = (self.left.pos.x(), self.right.pos.x());
        self.xs.clone().map(move |x| {
            let t = inv_lerp(x as f32, x0, x1);
            let v = self.left.lerp(&self.right, t);
            Frag {
                pos: vec3(x as f32, self.y as f32, v.pos.z()),
                var: v.attrib,
            }
        })
    }
}

impl<V> Debug for Scanline<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanline")
            .field("y", &self.y)
            .field("xs", &self.xs)
            .finish_non_exhaustive()
    }
}

/// Returns `vs` sorted by ascending y, so that the result is the top,
/// middle, and bottom vertex, in that order. The sort is stable.
pub fn sorted_by_y<T>(mut vs: [T; 3], y: impl Fn(&T) -> f32) -> [T; 3] {
    vs.sort_by(|a, b| y(a).total_cmp(&y(b)));
    vs
}

/// Rasterizes a filled triangle defined by three vertices.
///
/// Converts the triangle into [scanlines][Scanline], clipped to a buffer of
/// size `dims`, and invokes `scanline_fn` for each non-empty scanline.
///
/// Vertices are sorted top to bottom. For each integer row y between the
/// top and bottom vertex, inclusive, the long edge (top to bottom) and the
/// short edge (top to middle above the middle vertex, middle to bottom
/// from it on) are sampled at y. The span between them covers every
/// integer x from `ceil(left)` to `floor(right)`, inclusive.
/// ```text
///                       X <--top
///                     ***
///                   ******
///                 ********
///               ** upper **
///    mid-->    X***********  <--long edge
///                ** lower **
///                   ********
///                      ******
///                         ***
///                            X <--bot
/// ```
/// Horizontal edges use `t` = 0. Triangles with non-finite coordinates
/// are ignored.
pub fn tri_fill<V, F>(verts: [ScreenVert<V>; 3], dims: Dims, mut scanline_fn: F)
where
    V: Lerp,
    F: FnMut(Scanline<V>),
{
    if verts.iter().any(|v| !(v.pos.x().is_finite() && v.pos.y().is_finite())) {
        return;
    }
    let [top, mid, bot] = sorted_by_y(verts, |v| v.pos.y());
    let (w, h) = (dims.0 as i32, dims.1 as i32);

    let y0 = (float::f32::ceil(top.pos.y()) as i32).max(0);
    let y1 = (float::f32::floor(bot.pos.y()) as i32).min(h - 1);

    for y in y0..=y1 {
        let yf = y as f32;
        let long = top.lerp(&bot, inv_lerp(yf, top.pos.y(), bot.pos.y()));
        let short = if yf < mid.pos.y() {
            top.lerp(&mid, inv_lerp(yf, top.pos.y(), mid.pos.y()))
        } else {
            mid.lerp(&bot, inv_lerp(yf, mid.pos.y(), bot.pos.y()))
        };
        let (left, right) = if long.pos.x() > short.pos.x() {
            (short, long)
        } else {
            (long, short)
        };

        let x0 = (float::f32::ceil(left.pos.x()) as i32).max(0);
        let x1 = (float::f32::floor(right.pos.x()) as i32).min(w - 1);
        if x0 > x1 {
            continue;
        }
        scanline_fn(Scanline { y, xs: x0..x1 + 1, left, right });
    }
}

/// Fills a flat-colored 2D triangle by edge walking.
///
/// Sorts the vertices by y and outlines the triangle with [DDA][line::dda]
/// lines. Then for each row from `trunc(top.y)` to `trunc(bot.y)` inside
/// the buffer, finds where the non-horizontal edges cross the row and fills
/// from the truncated leftmost to the truncated rightmost crossing,
/// inclusive, clipped to the buffer. No depth test is done.
///
/// Returns the count of pixels visited and written.
pub fn edge_walk_fill(
    fb: &mut Framebuf,
    verts: [Vec2<Screen>; 3],
    color: Color3f,
) -> Throughput {
    let [p1, p2, p3] = sorted_by_y(verts, |v| v.y());
    let mut io = Throughput::default();
    for (a, b) in [(p1, p2), (p2, p3), (p3, p1)] {
        io += line::dda(fb, a, b, color);
    }

    let (w, h) = (fb.dims().0 as i32, fb.dims().1 as i32);
    let ys = (p1.y() as i32).max(0)..=(p3.y() as i32).min(h - 1);
    for y in ys {
        let yf = y as f32;
        let mut xs = [0.0f32; 3];
        let mut n = 0;
        for (p, q) in [(p1, p2), (p2, p3), (p1, p3)] {
            let (lo, hi) = (p.y().min(q.y()), p.y().max(q.y()));
            if p.y() != q.y() && lo <= yf && yf <= hi {
                xs[n] = p.x() + (yf - p.y()) * (q.x() - p.x()) / (q.y() - p.y());
                n += 1;
            }
        }
        if n < 2 {
            continue;
        }
        let xs = &xs[..n];
        let min = xs.iter().copied().fold(f32::INFINITY, f32::min);
        let max = xs.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        for x in (min as i32).max(0)..=(max as i32).min(w - 1) {
            io.i += 1;
            io.o += fb.plot(x, y, color) as usize;
        }
    }
    io
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::geom::vertex;
    use crate::math::{gray, rgba, vec2};

    use super::*;

    fn vert(x: f32, y: f32, z: f32) -> ScreenVert<f32> {
        vertex(vec3(x, y, z), x)
    }

    fn spans(verts: [ScreenVert<f32>; 3], dims: Dims) -> Vec<(i32, Range<i32>)> {
        let mut res = Vec::new();
        tri_fill(verts, dims, |sl| res.push((sl.y, sl.xs)));
        res
    }

    #[test]
    fn sorted_by_y_is_stable() {
        let s = sorted_by_y([(0, 2.0), (1, 1.0), (2, 1.0)], |v| v.1);
        assert_eq!(s, [(1, 1.0), (2, 1.0), (0, 2.0)]);
    }

    #[test]
    fn right_triangle_spans() {
        let s = spans(
            [vert(0.0, 0.0, 0.0), vert(0.0, 4.0, 0.0), vert(4.0, 4.0, 0.0)],
            (10, 10),
        );
        assert_eq!(s, [(0, 0..1), (1, 0..2), (2, 0..3), (3, 0..4), (4, 0..5)]);
    }

    #[test]
    fn vertex_order_does_not_matter() {
        let [a, b, c] =
            [vert(1.5, 0.5, 0.0), vert(8.2, 3.3, 0.0), vert(3.7, 7.9, 0.0)];
        let expected = spans([a, b, c], (10, 10));
        assert!(!expected.is_empty());
        assert_eq!(spans([c, a, b], (10, 10)), expected);
        assert_eq!(spans([b, c, a], (10, 10)), expected);
        assert_eq!(spans([c, b, a], (10, 10)), expected);
    }

    #[test]
    fn spans_are_clipped() {
        let s = spans(
            [vert(-5.0, -5.0, 0.0), vert(20.0, -5.0, 0.0), vert(-5.0, 20.0, 0.0)],
            (4, 3),
        );
        assert_eq!(s, [(0, 0..4), (1, 0..4), (2, 0..4)]);
    }

    #[test]
    fn horizontal_top_edge() {
        let s = spans(
            [vert(0.0, 2.0, 0.0), vert(4.0, 2.0, 0.0), vert(2.0, 4.0, 0.0)],
            (10, 10),
        );
        assert_eq!(s, [(2, 0..5), (3, 1..4), (4, 2..3)]);
    }

    #[test]
    fn degenerate_and_non_finite_draw_nothing() {
        let flat = [vert(0.5, 1.5, 0.0), vert(3.5, 1.5, 0.0), vert(2.0, 1.5, 0.0)];
        assert!(spans(flat, (10, 10)).is_empty());

        let nan = [vert(f32::NAN, 0.0, 0.0), vert(3.0, 3.0, 0.0), vert(0.0, 3.0, 0.0)];
        assert!(spans(nan, (10, 10)).is_empty());
    }

    #[test]
    fn fragments_interpolate_depth_and_varyings() {
        let verts = [
            vertex(vec3(0.0, 0.0, 0.0), 0.0),
            vertex(vec3(4.0, 0.0, 1.0), 1.0),
            vertex(vec3(0.0, 4.0, 0.0), 0.0),
        ];
        let mut frags = Vec::new();
        tri_fill(verts, (10, 10), |sl| {
            if sl.y == 0 {
                frags.extend(sl.fragments());
            }
        });
        assert_eq!(frags.len(), 5);
        for (i, f) in frags.iter().enumerate() {
            assert_eq!(f.pos.x(), i as f32);
            assert_eq!(f.pos.z(), f.var);
            assert!((f.var - i as f32 / 4.0).abs() < 1e-6);
        }
    }

    #[test]
    fn edge_walk_fills_including_edges() {
        let mut fb = Framebuf::new((10, 10));
        let io = edge_walk_fill(
            &mut fb,
            [vec2(1.0, 1.0), vec2(8.0, 1.0), vec2(1.0, 8.0)],
            gray(1.0),
        );
        assert!(io.o > 0);
        let white = Some(rgba(255, 255, 255, 255));
        assert_eq!(fb.pixel(1, 1), white);
        assert_eq!(fb.pixel(8, 1), white);
        assert_eq!(fb.pixel(1, 8), white);
        assert_eq!(fb.pixel(3, 3), white);
        assert_eq!(fb.pixel(7, 7), Some(rgba(0, 0, 0, 255)));
        assert_eq!(fb.depth_at(3, 3), Some(1.0));
    }

    #[test]
    fn edge_walk_clips_rows() {
        let mut fb = Framebuf::new((4, 4));
        let io = edge_walk_fill(
            &mut fb,
            [vec2(-10.0, -10.0), vec2(10.0, -10.0), vec2(0.0, 10.0)],
            gray(1.0),
        );
        assert!(io.o <= io.i);
        assert_eq!(fb.pixel(1, 2), Some(rgba(255, 255, 255, 255)));
    }

    #[test]
    fn edge_walk_far_outside_visits_only_buffer() {
        let mut fb = Framebuf::new((10, 10));
        let io = edge_walk_fill(
            &mut fb,
            [vec2(-2e8, 0.0), vec2(2e8, 0.0), vec2(0.0, 9.0)],
            gray(1.0),
        );
        // Ten full rows plus a few edge steps just outside the buffer
        assert!(io.i <= 10 * 10 + 3 * 16, "{io:?}");
        let white = Some(rgba(255, 255, 255, 255));
        assert_eq!(fb.pixel(0, 0), white);
        assert_eq!(fb.pixel(9, 8), white);
        assert_eq!(fb.pixel(5, 5), white);
    }
}
