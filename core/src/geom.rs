//! Basic geometric primitives.

use crate::math::{Color3f, Lerp, Vec2, Vec3};
use crate::render::Model;

pub use mesh::Mesh;

pub mod mesh;

/// Vertex with a position and arbitrary other attributes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex<P, A> {
    pub pos: P,
    pub attrib: A,
}

/// Triangle, defined by three vertices.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub struct Tri<V>(pub [V; 3]);

/// Surface attributes of a model vertex.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Surface {
    /// Base color, before lighting.
    pub color: Color3f,
    /// Surface normal. Need not be normalized.
    pub normal: Vec3<Model>,
}

/// A vertex of a lab model: position, base color and normal.
pub type ModelVertex = Vertex<Vec3<Model>, Surface>;

/// Polygon winding order, as seen in a y-up coordinate system.
///
/// The triangle *ABC* below has clockwise winding, while
/// the triangle *DEF* has counter-clockwise winding.
///
/// ```text
///     B            F
///    / \          / \
///   /   \        /   \
///  /     \      /     \
/// A-------C    D-------E
///    Cw           Ccw
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Winding {
    /// Clockwise winding.
    Cw,
    /// Counter-clockwise winding.
    #[default]
    Ccw,
}

/// Creates a `Vertex` with the given position and attribute values.
pub const fn vertex<P, A>(pos: P, attrib: A) -> Vertex<P, A> {
    Vertex { pos, attrib }
}

/// Creates a `Tri` with the given vertices.
pub const fn tri<V>(a: V, b: V, c: V) -> Tri<V> {
    Tri([a, b, c])
}

/// Creates a model vertex with position `pos`, base color `color`,
/// and normal `normal`.
pub const fn model_vertex(
    pos: Vec3<Model>,
    color: Color3f,
    normal: Vec3<Model>,
) -> ModelVertex {
    vertex(pos, Surface { color, normal })
}

impl<P: Lerp, A: Lerp> Lerp for Vertex<P, A> {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        vertex(self.pos.lerp(&other.pos, t), self.attrib.lerp(&other.attrib, t))
    }
}

impl<B> Tri<Vec2<B>> {
    /// Returns the signed area of the parallelogram spanned by the edges
    /// AB and AC, that is, twice the signed area of `self`.
    ///
    /// The result is positive if `self` winds counter-clockwise in a y-up
    /// coordinate system. In a y-down system such as screen space, the
    /// sign is flipped.
    pub fn signed_area2(&self) -> f32 {
        let [a, b, c] = self.0;
        (b - a).perp_dot(&(c - a))
    }

    /// Returns the winding order of `self` in a y-up coordinate system.
    pub fn winding(&self) -> Winding {
        if self.signed_area2() < 0.0 {
            Winding::Cw
        } else {
            Winding::Ccw
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::math::vec2;

    use super::*;

    #[test]
    fn signed_area_and_winding() {
        let ccw: Tri<Vec2> =
            tri(vec2(0.0, 0.0), vec2(4.0, 0.0), vec2(0.0, 3.0));
        assert_eq!(ccw.signed_area2(), 12.0);
        assert_eq!(ccw.winding(), Winding::Ccw);

        let [a, b, c] = ccw.0;
        let cw = tri(a, c, b);
        assert_eq!(cw.signed_area2(), -12.0);
        assert_eq!(cw.winding(), Winding::Cw);
    }
}
