//! Triangle meshes.

use alloc::vec::Vec;
use core::fmt::{self, Debug, Formatter};

use super::{ModelVertex, Tri};

/// A triangle mesh.
///
/// A list of model vertices together with faces that index into it. Lab
/// models are stored as flat vertex lists with three consecutive vertices
/// per face; [`Mesh::from_triangle_list`] turns those into a mesh.
#[derive(Clone, Default)]
pub struct Mesh {
    /// The faces of the mesh, with each face a triplet of indices
    /// to the `verts` vector. Several faces can share a vertex.
    pub faces: Vec<Tri<usize>>,
    /// The vertices of the mesh.
    pub verts: Vec<ModelVertex>,
}

impl Mesh {
    /// Creates a new triangle mesh with the given faces and vertices.
    ///
    /// # Panics
    /// If any of the vertex indices in `faces` ≥ `verts.len()`.
    pub fn new<F, V>(faces: F, verts: V) -> Self
    where
        F: IntoIterator<Item = Tri<usize>>,
        V: IntoIterator<Item = ModelVertex>,
    {
        let faces: Vec<_> = faces.into_iter().collect();
        let verts: Vec<_> = verts.into_iter().collect();

        for (i, Tri(vs)) in faces.iter().enumerate() {
            assert!(
                vs.iter().all(|&j| j < verts.len()),
                "vertex index out of bounds at faces[{i}]: {vs:?}"
            )
        }
        Self { faces, verts }
    }

    /// Creates a mesh from a flat list of vertices, each consecutive three
    /// forming a face. Trailing vertices that do not form a whole face are
    /// ignored.
    pub fn from_triangle_list<V>(verts: V) -> Self
    where
        V: IntoIterator<Item = ModelVertex>,
    {
        let verts: Vec<_> = verts.into_iter().collect();
        let faces = (0..verts.len() / 3)
            .map(|i| Tri([3 * i, 3 * i + 1, 3 * i + 2]))
            .collect();
        Self { faces, verts }
    }

    /// Returns an iterator over the faces of `self`, with each face
    /// resolved to its three vertices.
    pub fn triangles(&self) -> impl Iterator<Item = [&ModelVertex; 3]> + '_ {
        self.faces
            .iter()
            .map(|Tri(vs)| vs.map(|i| &self.verts[i]))
    }
}

impl Debug for Mesh {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mesh")
            .field("faces", &self.faces.len())
            .field("verts", &self.verts.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::geom::model_vertex;
    use crate::math::{gray, vec3};

    use super::*;

    fn verts(n: usize) -> impl Iterator<Item = ModelVertex> {
        (0..n).map(|i| {
            model_vertex(vec3(i as f32, 0.0, 0.0), gray(1.0), vec3(0.0, 0.0, 1.0))
        })
    }

    #[test]
    fn triangle_list_makes_one_face_per_three_verts() {
        let mesh = Mesh::from_triangle_list(verts(7));
        assert_eq!(mesh.faces, [Tri([0, 1, 2]), Tri([3, 4, 5])]);
        assert_eq!(mesh.verts.len(), 7);

        let [a, b, c] = mesh.triangles().nth(1).unwrap();
        assert_eq!([a.pos.x(), b.pos.x(), c.pos.x()], [3.0, 4.0, 5.0]);
    }

    #[test]
    #[should_panic = "vertex index out of bounds at faces[1]"]
    fn new_checks_indices() {
        let _ = Mesh::new([Tri([0, 1, 2]), Tri([1, 2, 3])], verts(3));
    }
}
