//! Mesh approximations of various geometric shapes.

use alloc::vec::Vec;
use core::f32::consts::{PI, TAU};

use re::geom::{Mesh, ModelVertex, model_vertex};
use re::math::{Color3f, Vec3, float, rgb, vec3};
use re::render::Model;

const RED: Color3f = rgb(1.0, 0.0, 0.0);
const GREEN: Color3f = rgb(0.0, 1.0, 0.0);
const BLUE: Color3f = rgb(0.0, 0.0, 1.0);
const YELLOW: Color3f = rgb(1.0, 1.0, 0.0);

/// An axis-aligned cube with corners at (±1, ±1, ±1).
///
/// Each of the six faces is two triangles with its own normal, so the mesh
/// has 36 vertices. The corners are colored red, green, blue, and yellow.
#[derive(Copy, Clone, Debug, Default)]
pub struct Cube;

/// A tetrahedron with its apex at (0, 1, 0) and its base in the plane
/// y = -1.
///
/// Each face has its own normal, so the mesh has 12 vertices.
#[derive(Copy, Clone, Debug, Default)]
pub struct Tetrahedron;

/// A UV sphere centered at the origin.
///
/// The surface is divided into `stacks` bands of latitude and `slices`
/// sectors of longitude. Every band-sector pair is a quad of two
/// triangles with six vertices of their own; at the poles one of the two
/// triangles is degenerate. Normals point radially outward.
#[derive(Copy, Clone, Debug)]
pub struct Sphere {
    pub radius: f32,
    pub stacks: u32,
    pub slices: u32,
    pub color: Color3f,
}

impl Cube {
    /// Faces as corners (position, color), counter-clockwise from outside,
    /// and the face normal.
    #[rustfmt::skip]
    const FACES: [([(Vec3<Model>, Color3f); 4], Vec3<Model>); 6] = [
        // Front
        ([(vec3(-1.0, -1.0, 1.0), RED), (vec3(1.0, -1.0, 1.0), GREEN),
          (vec3(1.0, 1.0, 1.0), BLUE), (vec3(-1.0, 1.0, 1.0), YELLOW)],
         vec3(0.0, 0.0, 1.0)),
        // Back
        ([(vec3(-1.0, -1.0, -1.0), RED), (vec3(-1.0, 1.0, -1.0), YELLOW),
          (vec3(1.0, 1.0, -1.0), BLUE), (vec3(1.0, -1.0, -1.0), GREEN)],
         vec3(0.0, 0.0, -1.0)),
        // Top
        ([(vec3(-1.0, 1.0, -1.0), YELLOW), (vec3(-1.0, 1.0, 1.0), YELLOW),
          (vec3(1.0, 1.0, 1.0), BLUE), (vec3(1.0, 1.0, -1.0), BLUE)],
         vec3(0.0, 1.0, 0.0)),
        // Bottom
        ([(vec3(-1.0, -1.0, -1.0), RED), (vec3(1.0, -1.0, -1.0), GREEN),
          (vec3(1.0, -1.0, 1.0), GREEN), (vec3(-1.0, -1.0, 1.0), RED)],
         vec3(0.0, -1.0, 0.0)),
        // Right
        ([(vec3(1.0, -1.0, -1.0), GREEN), (vec3(1.0, 1.0, -1.0), BLUE),
          (vec3(1.0, 1.0, 1.0), BLUE), (vec3(1.0, -1.0, 1.0), GREEN)],
         vec3(1.0, 0.0, 0.0)),
        // Left
        ([(vec3(-1.0, -1.0, -1.0), RED), (vec3(-1.0, -1.0, 1.0), RED),
          (vec3(-1.0, 1.0, 1.0), YELLOW), (vec3(-1.0, 1.0, -1.0), YELLOW)],
         vec3(-1.0, 0.0, 0.0)),
    ];

    /// Builds the cube mesh.
    pub fn build(self) -> Mesh {
        let verts = Self::FACES.into_iter().flat_map(|(cs, n)| {
            [cs[0], cs[1], cs[2], cs[0], cs[2], cs[3]]
                .map(|(pos, col)| model_vertex(pos, col, n))
        });
        Mesh::from_triangle_list(verts)
    }
}

impl Tetrahedron {
    const COORDS: [Vec3<Model>; 4] = [
        vec3(0.0, 1.0, 0.0),
        vec3(-1.0, -1.0, 1.0),
        vec3(1.0, -1.0, 1.0),
        vec3(0.0, -1.0, -1.0),
    ];
    const COLORS: [Color3f; 4] = [RED, GREEN, BLUE, YELLOW];
    const FACES: [[usize; 3]; 4] = [[0, 1, 2], [0, 2, 3], [0, 3, 1], [1, 3, 2]];

    /// Builds the tetrahedral mesh.
    pub fn build(self) -> Mesh {
        let verts = Self::FACES.into_iter().flat_map(|ixs| {
            let [a, b, c] = ixs.map(|i| Self::COORDS[i]);
            let n = (b - a).cross(&(c - a)).normalize();
            ixs.map(|i| model_vertex(Self::COORDS[i], Self::COLORS[i], n))
        });
        Mesh::from_triangle_list(verts)
    }
}

impl Sphere {
    /// Returns a sphere of the given radius with 20 stacks and 20 slices,
    /// colored coral like the lighting lab.
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            stacks: 20,
            slices: 20,
            color: rgb(1.0, 0.5, 0.31),
        }
    }

    /// Builds the sphere mesh.
    pub fn build(self) -> Mesh {
        let Self { radius, stacks, slices, color } = self;
        let pt = |i: u32, j: u32| -> ModelVertex {
            let phi = i as f32 / stacks as f32 * PI;
            let theta = j as f32 / slices as f32 * TAU;
            let (sp, cp) = (float::f32::sin(phi), float::f32::cos(phi));
            let (st, ct) = (float::f32::sin(theta), float::f32::cos(theta));
            let n = vec3(sp * ct, cp, sp * st);
            model_vertex(n * radius, color, n.normalize())
        };
        let mut verts = Vec::with_capacity(6 * (stacks * slices) as usize);
        for i in 0..stacks {
            for j in 0..slices {
                let [a, b, c, d] =
                    [pt(i, j), pt(i + 1, j), pt(i + 1, j + 1), pt(i, j + 1)];
                verts.extend([a, c, b, a, d, c]);
            }
        }
        Mesh::from_triangle_list(verts)
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use re::geom::{Tri, Vertex};
    use re::math::Vec3;

    use super::*;

    /// Asserts that every non-degenerate face of `mesh` winds
    /// counter-clockwise around its outward normal.
    fn assert_outward_ccw(mesh: &Mesh) {
        for [a, b, c] in mesh.triangles() {
            let n: Vec3<Model> = (b.pos - a.pos).cross(&(c.pos - a.pos));
            if n.len() < 1e-6 {
                continue;
            }
            assert!(n.dot(&a.attrib.normal) > 0.0, "{:?}", [a.pos, b.pos, c.pos]);
        }
    }

    #[test]
    fn cube() {
        let mesh = Cube.build();
        assert_eq!(mesh.verts.len(), 36);
        assert_eq!(mesh.faces.len(), 12);
        assert_eq!(mesh.faces[11], Tri([33, 34, 35]));
        assert_outward_ccw(&mesh);
        for Vertex { pos, attrib } in &mesh.verts {
            assert!(pos.0.iter().all(|c| c.abs() == 1.0));
            assert_eq!(attrib.normal.len(), 1.0);
        }
    }

    #[test]
    fn tetrahedron() {
        let mesh = Tetrahedron.build();
        assert_eq!(mesh.verts.len(), 12);
        assert_eq!(mesh.faces.len(), 4);
        assert_outward_ccw(&mesh);
        // Base faces straight down
        let base = mesh.verts[9].attrib.normal;
        assert_eq!(base, vec3(0.0, -1.0, 0.0));
    }

    #[test]
    fn sphere() {
        let mesh = Sphere::default().build();
        assert_eq!(mesh.verts.len(), 20 * 20 * 6);
        assert_outward_ccw(&mesh);
        for v in &mesh.verts {
            assert!((v.pos.len() - 1.0).abs() < 1e-5);
            assert!((v.attrib.normal.len() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn sphere_radius_and_resolution() {
        let sphere = Sphere { radius: 2.5, stacks: 4, slices: 3, ..Sphere::default() };
        let mesh = sphere.build();
        assert_eq!(mesh.faces.len(), 4 * 3 * 2);
        for v in &mesh.verts {
            assert!((v.pos.len() - 2.5).abs() < 1e-5);
        }
    }
}
