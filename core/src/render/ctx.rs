//! Rendering context and parameters.

use core::cell::RefCell;

use crate::math::{Color3f, gray};

use super::shade::Shading;
use super::stats::Stats;

/// Context and parameters used by the renderer.
#[derive(Clone, Debug)]
pub struct Context {
    /// The color with which to fill the color buffer to clear it.
    pub clear_color: Color3f,

    /// Whether to cull (discard) faces pointing either away from or towards
    /// the camera.
    ///
    /// If all geometry drawn is "solid" meshes without holes, backfaces can
    /// usually be culled because they are always occluded by front faces and
    /// drawing them would be redundant.
    pub face_cull: Option<FaceCull>,

    /// How to compute the color of filled triangles.
    pub shading: Shading,

    /// Whether to draw only the edges of triangles instead of filling them.
    pub wireframe: bool,

    /// Collecting rendering statistics.
    pub stats: RefCell<Stats>,
}

/// Whether to cull front faces or backfaces.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FaceCull {
    Front,
    Back,
}

impl Context {
    /// Returns whether a triangle should be culled based on the current
    /// face culling setting and its signed area in screen space.
    ///
    /// Front faces wind counter-clockwise in NDC. Screen space has y down,
    /// so front faces have a negative signed area there. Degenerate
    /// (zero-area) triangles are culled by either setting.
    #[inline]
    pub fn face_cull(&self, screen_area: f32) -> bool {
        match self.face_cull {
            Some(FaceCull::Back) => screen_area >= 0.0,
            Some(FaceCull::Front) => screen_area <= 0.0,
            None => false,
        }
    }
}

impl Default for Context {
    /// Creates a rendering context with default settings.
    ///
    /// The default values are:
    /// * Clear color:   Dark gray (0.1, 0.1, 0.1)
    /// * Face culling:  Backfaces
    /// * Shading:       Gouraud
    /// * Wireframe:     Disabled
    fn default() -> Self {
        Self {
            clear_color: gray(0.1),
            face_cull: Some(FaceCull::Back),
            shading: Shading::default(),
            wireframe: false,
            stats: Default::default(),
        }
    }
}
