//! Models used by the `rastlab` demos.
//!
//! * [Solids][solids]: the cube and tetrahedron of the shading lab and a
//!   UV sphere.
//! * [Glyphs][glyph]: the letters Y, L, and X as flat triangle lists, and
//!   an extruded 3D letter Y.
//!
//! All models are [`Mesh`][re::geom::Mesh]es in model space with faces
//! wound counter-clockwise as seen from outside.

#![no_std]

extern crate alloc;
extern crate core;
#[cfg(feature = "std")]
extern crate std;

pub mod glyph;
pub mod solids;
