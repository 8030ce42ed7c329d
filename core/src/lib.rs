//! ```text
//!                         __   __      __
//!     _________ ______  _/ /_ / /___ _/ /_
//!    / ___/ __ `/ ___/ / __// // __ `/ __ \
//!   / /  / /_/ (__  ) / /_ / // /_/ / /_/ /
//!  /_/   \__,_/____/  \__//_/ \__,_/_.___/
//! ```
//!
//! Core functionality of the `rastlab` project.
//!
//! Includes a small math library with vectors, matrices, colors, and angles;
//! basic geometry primitives; and a software renderer built around a
//! scanline triangle rasterizer with a depth buffer, flat, Gouraud, and
//! Phong shading, and DDA and Bresenham line drawing.
//!
//! # Crate features
//!
//! * `std`:
//!   Uses the floating-point functions of the standard library, and makes
//!   available items requiring I/O or timekeeping. Enabled by default.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate.
//!
//! * `mm`:
//!   Provides fast approximate implementations of floating-point functions
//!   via the [micromath](https://crates.io/crates/micromath) crate.
//!
//! At least one of the above must be enabled. Without `std`, the crate only
//! depends on `core` and `alloc`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;
extern crate core;

#[cfg(not(feature = "fp"))]
compile_error!(
    "rastlab-core needs a floating-point backend: \
     enable one of the features `std`, `libm`, or `mm`"
);

pub mod geom;
pub mod math;
pub mod render;
pub mod util;

pub mod prelude {
    pub use crate::math::{
        Lerp,
        angle::{Angle, degs, rads, turns},
        color::{Color3f, Color4, gray, rgb, rgba},
        lerp,
        mat::{
            Mat4, look_at, orthographic, perspective, rotate, scale,
            translate, viewport,
        },
        vec::{Vec2, Vec3, Vec4, Vector, splat, vec2, vec3, vec4},
    };

    pub use crate::geom::{Mesh, Surface, Tri, Vertex, model_vertex, vertex};

    pub use crate::render::{
        Model, Ndc, Screen, Uniforms, View, World,
        cam::{Camera, Projection},
        ctx::{Context, FaceCull},
        light::{Light, Lighting, Material},
        render,
        shade::Shading,
        target::Framebuf,
    };

    pub use crate::util::{Dims, buf::Buf2};
}
