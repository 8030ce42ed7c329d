//! Letter glyphs: flat 2D letters and an extruded 3D letter.
//!
//! The glyphs fit in the box [-0.5, 0.5] × [-0.8, 0.8] centered at the
//! origin.

use alloc::vec::Vec;

use re::geom::{Mesh, ModelVertex, Tri, Winding, model_vertex};
use re::math::{Color3f, Vec2, Vec3, rgb, vec2, vec3};
use re::render::Model;

/// Color of the front face of [`letter_y_3d`].
pub const FRONT: Color3f = rgb(0.8, 0.2, 0.2);
/// Color of the back face of [`letter_y_3d`].
pub const BACK: Color3f = rgb(0.6, 0.1, 0.1);
/// Color of the side faces of [`letter_y_3d`].
pub const SIDE: Color3f = rgb(0.7, 0.15, 0.15);

type Tri2 = [(f32, f32); 3];

#[rustfmt::skip]
const Y: [Tri2; 6] = [
    // Left arm
    [(-0.5, 0.8), (-0.3, 0.8), (0.1, 0.1)],
    [(-0.5, 0.8), (0.1, 0.1), (-0.1, 0.1)],
    // Right arm
    [(0.3, 0.8), (0.5, 0.8), (0.1, 0.1)],
    [(0.3, 0.8), (0.1, 0.1), (-0.1, 0.1)],
    // Stem
    [(-0.1, 0.1), (0.1, 0.1), (0.1, -0.8)],
    [(-0.1, 0.1), (0.1, -0.8), (-0.1, -0.8)],
];

#[rustfmt::skip]
const L: [Tri2; 4] = [
    // Vertical bar
    [(-0.5, 0.8), (-0.5, -0.8), (-0.3, -0.8)],
    [(-0.5, 0.8), (-0.3, -0.8), (-0.3, 0.8)],
    // Horizontal bar
    [(-0.5, -0.8), (0.3, -0.8), (0.3, -0.6)],
    [(-0.5, -0.8), (0.3, -0.6), (-0.5, -0.6)],
];

#[rustfmt::skip]
const X: [Tri2; 4] = [
    // Top left to bottom right
    [(-0.5, 0.8), (-0.3, 0.8), (0.5, -0.8)],
    [(-0.5, 0.8), (0.5, -0.8), (0.3, -0.8)],
    // Top right to bottom left
    [(0.5, 0.8), (0.3, 0.8), (-0.5, -0.8)],
    [(0.5, 0.8), (-0.5, -0.8), (-0.3, -0.8)],
];

/// Convex pieces of the 3D letter Y, counter-clockwise.
#[rustfmt::skip]
const Y_PIECES: [[(f32, f32); 4]; 3] = [
    // Left arm
    [(-0.5, 0.8), (-0.3, 0.1), (-0.1, 0.1), (-0.3, 0.8)],
    // Right arm
    [(0.3, 0.8), (0.1, 0.1), (0.3, 0.1), (0.5, 0.8)],
    // Stem
    [(-0.1, 0.1), (-0.1, -0.8), (0.1, -0.8), (0.1, 0.1)],
];

/// Returns the letter Y in the z = 0 plane, facing +z.
pub fn letter_y(color: Color3f) -> Mesh {
    flat(&Y, color)
}

/// Returns the letter L in the z = 0 plane, facing +z.
pub fn letter_l(color: Color3f) -> Mesh {
    flat(&L, color)
}

/// Returns the letter X in the z = 0 plane, facing +z.
pub fn letter_x(color: Color3f) -> Mesh {
    flat(&X, color)
}

/// Returns the letter Y extruded to thickness `depth` along the z axis,
/// centered at z = 0.
///
/// The front face at z = depth/2 is colored [`FRONT`], the back face
/// [`BACK`], and the sides [`SIDE`]. Every face has its own flat normal.
pub fn letter_y_3d(depth: f32) -> Mesh {
    let h = depth / 2.0;
    let mut verts = Vec::with_capacity(Y_PIECES.len() * 12 * 3);

    for piece in Y_PIECES {
        let pts = piece.map(|(x, y)| vec2::<f32, Model>(x, y));
        let front = pts.map(|p| vec3(p.x(), p.y(), h));
        let back = pts.map(|p| vec3(p.x(), p.y(), -h));

        quad(&mut verts, front, FRONT, vec3(0.0, 0.0, 1.0));
        let [a, b, c, d] = back;
        quad(&mut verts, [a, d, c, b], BACK, vec3(0.0, 0.0, -1.0));

        for i in 0..4 {
            let j = (i + 1) % 4;
            let n = outward(pts[i], pts[j]);
            quad(&mut verts, [front[i], back[i], back[j], front[j]], SIDE, n);
        }
    }
    Mesh::from_triangle_list(verts)
}

fn flat(tris: &[Tri2], color: Color3f) -> Mesh {
    let n = vec3(0.0, 0.0, 1.0);
    let verts = tris.iter().flat_map(|&[a, b, c]| {
        let [a, b, c] = [a, b, c].map(|(x, y)| vec2::<f32, Model>(x, y));
        // Some glyph triangles are listed clockwise
        let [a, b, c] = match Tri([a, b, c]).winding() {
            Winding::Cw => [a, c, b],
            Winding::Ccw => [a, b, c],
        };
        [a, b, c].map(|p| model_vertex(vec3(p.x(), p.y(), 0.0), color, n))
    });
    Mesh::from_triangle_list(verts)
}

/// Pushes the two triangles of the counter-clockwise quad `[a, b, c, d]`.
fn quad(
    verts: &mut Vec<ModelVertex>,
    [a, b, c, d]: [Vec3<Model>; 4],
    color: Color3f,
    normal: Vec3<Model>,
) {
    verts.extend([a, b, c, a, c, d].map(|p| model_vertex(p, color, normal)));
}

/// Returns the outward normal of the edge from `p` to `q` of a
/// counter-clockwise polygon.
fn outward(p: Vec2<Model>, q: Vec2<Model>) -> Vec3<Model> {
    let [dx, dy] = (q - p).0;
    vec3(dy, -dx, 0.0).normalize()
}
