//! Line drawing.
//!
//! Two classic algorithms for rasterizing a one-pixel-thick line segment:
//! the floating-point *digital differential analyzer* (DDA) and Bresenham's
//! integer algorithm. Both write pixels directly into the color buffer
//! with no depth test, dropping pixels outside the buffer.
//!
//! The two do not always agree on every pixel: DDA rounds the endpoints
//! while Bresenham truncates them, so their output can differ by one pixel.

use core::ops::RangeInclusive;

use crate::math::{Color3f, Vec2, float, vec2};
use crate::util::Dims;

use super::{Screen, stats::Throughput, target::Framebuf};

/// Returns the pixels of a DDA line from `p0` to `p1`.
///
/// The number of steps is the larger of |dx| and |dy|, so that one
/// coordinate advances by exactly one pixel each step. Each sample is
/// rounded to the nearest pixel, half away from zero. A zero-length
/// segment yields a single pixel.
///
/// Sample *i* is computed as `p0 + i · inc` rather than by adding `inc`
/// to a running sum, so long lines do not accumulate rounding error.
pub fn dda_points(
    p0: Vec2<Screen>,
    p1: Vec2<Screen>,
) -> impl Iterator<Item = (i32, i32)> {
    let line = Dda::new(p0, p1);
    (0..=line.n).map(move |i| line.at(i))
}

/// Draws a line from `p0` to `p1` using the DDA algorithm.
///
/// Only the steps that can land inside the buffer are visited, so the
/// cost is bounded by the buffer size however far the endpoints lie
/// outside it.
///
/// Returns the count of pixels visited and written.
pub fn dda(
    fb: &mut Framebuf,
    p0: Vec2<Screen>,
    p1: Vec2<Screen>,
    color: Color3f,
) -> Throughput {
    let line = Dda::new(p0, p1);
    let pts = line.visible(fb.dims()).map(|i| line.at(i));
    plot_all(fb, pts, color)
}

/// A DDA line as a start point, a per-step increment, and a step count.
#[derive(Copy, Clone, Debug)]
struct Dda {
    p0: Vec2<Screen>,
    inc: Vec2<Screen>,
    n: u32,
}

impl Dda {
    fn new(p0: Vec2<Screen>, p1: Vec2<Screen>) -> Self {
        let d = p1 - p0;
        let steps = d.x().abs().max(d.y().abs());
        if steps == 0.0 || !steps.is_finite() {
            return Self { p0, inc: vec2(0.0, 0.0), n: 0 };
        }
        let n = float::f32::floor(steps) as u32;
        Self { p0, inc: d.map(|c| c / steps), n }
    }

    fn at(&self, i: u32) -> (i32, i32) {
        // f32 cannot represent every step index of a very long line
        let i = i as f64;
        let x = (self.p0.x() as f64 + i * self.inc.x() as f64) as f32;
        let y = (self.p0.y() as f64 + i * self.inc.y() as f64) as f32;
        (float::f32::round(x) as i32, float::f32::round(y) as i32)
    }

    /// Returns the steps whose samples may round to a pixel inside a
    /// buffer of size `dims`, with a step or two of slack at each end.
    fn visible(&self, (w, h): Dims) -> RangeInclusive<u32> {
        let (mut lo, mut hi) = (0.0f64, self.n as f64);
        let axes = [
            (self.p0.x(), self.inc.x(), w),
            (self.p0.y(), self.inc.y(), h),
        ];
        for (p, d, max) in axes {
            let (p, d) = (p as f64, d as f64);
            // A sample rounds into 0..max iff it lies in [-0.5, max - 0.5)
            let (a, b) = (-0.5 - p, max as f64 - 0.5 - p);
            if !(a.is_finite() && d.is_finite()) {
                return 1..=0;
            }
            if d == 0.0 {
                if !(a <= 0.0 && 0.0 < b) {
                    return 1..=0;
                }
                continue;
            }
            let (t0, t1) = (a / d, b / d);
            lo = lo.max((t0.min(t1) - 1.0) as i64 as f64);
            hi = hi.min((t0.max(t1) + 2.0) as i64 as f64);
        }
        if lo > hi {
            1..=0
        } else {
            lo as u32..=hi as u32
        }
    }
}

/// Returns the pixels of a Bresenham line from `p0` to `p1`.
///
/// The endpoints are truncated to integers. Both endpoints are included,
/// and every octant is handled.
pub fn bresenham_points(
    p0: Vec2<Screen>,
    p1: Vec2<Screen>,
) -> impl Iterator<Item = (i32, i32)> {
    let (mut x, mut y) = (p0.x() as i32, p0.y() as i32);
    let (x1, y1) = (p1.x() as i32, p1.y() as i32);

    let (dx, dy) = ((x1 - x).abs(), (y1 - y).abs());
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx - dy;
    let mut done = false;

    core::iter::from_fn(move || {
        if done {
            return None;
        }
        let pt = (x, y);
        if x == x1 && y == y1 {
            done = true;
        } else {
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
        Some(pt)
    })
}

/// Draws a line from `p0` to `p1` using Bresenham's algorithm.
///
/// Returns the count of pixels visited and written.
pub fn bresenham(
    fb: &mut Framebuf,
    p0: Vec2<Screen>,
    p1: Vec2<Screen>,
    color: Color3f,
) -> Throughput {
    plot_all(fb, bresenham_points(p0, p1), color)
}

fn plot_all(
    fb: &mut Framebuf,
    pts: impl Iterator<Item = (i32, i32)>,
    color: Color3f,
) -> Throughput {
    let mut io = Throughput::default();
    for (x, y) in pts {
        io.i += 1;
        io.o += fb.plot(x, y, color) as usize;
    }
    io
}
