//! Turning 3D geometry into raster images.
//!
//! This module constitutes the 3D rendering pipeline of `rastlab`. It
//! contains code for [transforming and lighting][light] vertices,
//! [rasterizing][raster] and [shading][shade] triangles, drawing
//! [lines][line], and [outputting][target] the result.
//!
//! Every vertex goes through the following spaces:
//! ```text
//! Model --model--> World --view--> View --proj--> Proj (clip)
//!     --(divide by w)--> Ndc --viewport--> Screen
//! ```
//! Lighting is computed in world space for every vertex, whatever the
//! shading mode, so that switching modes never needs a different
//! transform stage.

use alloc::vec::Vec;

use crate::geom::{Mesh, ModelVertex, Tri, Vertex, vertex};
use crate::math::{Color3f, Lerp, Mat4, Vec3, gray, vec2, vec3, viewport};
use crate::util::Dims;

use self::{cam::Camera, ctx::Context, light::Lighting, target::Framebuf};

pub use self::stats::Stats;

pub mod cam;
pub mod ctx;
pub mod light;
pub mod line;
pub mod raster;
pub mod shade;
pub mod stats;
pub mod target;

/// Model space coordinate basis.
#[derive(Copy, Clone, Debug, Default)]
pub struct Model;

/// World space coordinate basis.
#[derive(Copy, Clone, Debug, Default)]
pub struct World;

/// View (camera) space coordinate basis.
#[derive(Copy, Clone, Debug, Default)]
pub struct View;

/// Projective (clip) space coordinate basis.
#[derive(Copy, Clone, Debug, Default)]
pub struct Proj;

/// NDC space coordinate basis (normalized device coordinates).
#[derive(Copy, Clone, Debug, Default)]
pub struct Ndc;

/// Screen space coordinate basis.
#[derive(Copy, Clone, Debug, Default)]
pub struct Screen;

/// Per-vertex values interpolated across a triangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Varyings {
    /// Base color, before lighting.
    pub color: Color3f,
    /// Color lit at the vertex.
    pub lit: Color3f,
    /// Normal in world space.
    pub normal: Vec3<World>,
    /// Position in world space.
    pub world: Vec3<World>,
}

/// A transformed vertex: screen position (x and y in pixels, z in NDC)
/// together with its varyings.
pub type ScreenVertex = Vertex<Vec3<Screen>, Varyings>;

/// Per-draw parameters of the pipeline.
#[derive(Copy, Clone, Debug)]
pub struct Uniforms {
    pub model: Mat4<Model, World>,
    pub view: Mat4<World, View>,
    pub proj: Mat4<View, Proj>,
    pub viewport: Mat4<Ndc, Screen>,
    pub lighting: Lighting,
}

impl Lerp for Varyings {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            color: self.color.lerp(&other.color, t),
            lit: self.lit.lerp(&other.lit, t),
            normal: self.normal.lerp(&other.normal, t),
            world: self.world.lerp(&other.world, t),
        }
    }
}

impl Uniforms {
    /// Returns uniforms for drawing with `cam` into a viewport of size
    /// `dims`, with the model transform set to identity. The eye position
    /// of `lighting` is set to that of the camera.
    pub fn new(cam: &Camera, dims: Dims, lighting: Lighting) -> Self {
        Self {
            model: Mat4::identity(),
            view: cam.world_to_view(),
            proj: cam.view_to_proj(),
            viewport: viewport(dims),
            lighting: Lighting { eye: cam.eye, ..lighting },
        }
    }
}

/// Renders `mesh` into `fb`.
///
/// Every vertex is transformed to world space, lit, projected, divided by
/// w, and mapped to the viewport. A triangle is rejected if any of its
/// vertices has clip-space w ≤ 0, that is, lies on or behind the eye
/// plane. Remaining triangles are culled by the sign of their screen-space
/// area as configured in `ctx`, then either outlined in white with DDA
/// lines if `ctx.wireframe` is set or filled with `ctx.shading`.
///
/// Returns the statistics of this call, which are also added to
/// `ctx.stats`.
pub fn render(
    mesh: &Mesh,
    uni: &Uniforms,
    fb: &mut Framebuf,
    ctx: &Context,
) -> Stats {
    let mut stats = Stats::start();
    stats.calls = 1.0;
    stats.prims.i += mesh.faces.len();
    stats.verts.i += mesh.verts.len();

    let mvp = uni.model.then(&uni.view).then(&uni.proj);
    let normal_mat = uni.model.normal_matrix();

    let verts: Vec<_> = mesh
        .verts
        .iter()
        .map(|v| transform(v, uni, &mvp, &normal_mat))
        .collect();
    stats.verts.o += verts.iter().flatten().count();

    for Tri(ixs) in &mesh.faces {
        let [Some(a), Some(b), Some(c)] = ixs.map(|i| verts[i]) else {
            continue;
        };
        let xy = [a, b, c].map(|v| vec2(v.pos.x(), v.pos.y()));
        if ctx.face_cull(Tri(xy).signed_area2()) {
            continue;
        }
        stats.prims.o += 1;

        stats.frags += if ctx.wireframe {
            let [p, q, r] = xy;
            let white = gray(1.0);
            let mut io = line::dda(fb, p, q, white);
            io += line::dda(fb, q, r, white);
            io += line::dda(fb, r, p, white);
            io
        } else {
            shade::fill(fb, [a, b, c], ctx.shading, &uni.lighting)
        };
    }

    let stats = stats.finish();
    *ctx.stats.borrow_mut() += stats.clone();
    stats
}

/// Transforms and lights a single vertex, or returns `None` if the vertex
/// is not in front of the eye.
fn transform(
    v: &ModelVertex,
    uni: &Uniforms,
    mvp: &Mat4<Model, Proj>,
    normal_mat: &Mat4<Model, World>,
) -> Option<ScreenVertex> {
    let world = uni.model.apply(&v.pos);
    let normal = normal_mat.apply_dir(&v.attrib.normal).normalize();
    let lit = uni.lighting.shade(world, normal, v.attrib.color);

    let [x, y, z, w] = mvp.apply4(&v.pos.to_vec4(1.0)).0;
    // Also rejects NaN
    if !(w > 0.0) {
        return None;
    }
    let ndc: Vec3<Ndc> = vec3(x / w, y / w, z / w);
    let pos = uni.viewport.apply(&ndc);

    let color = v.attrib.color;
    Some(vertex(pos, Varyings { color, lit, normal, world }))
}
