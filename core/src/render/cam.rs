//! Cameras and camera transforms.

use crate::math::{
    Angle, Mat4, Vec3, degs, look_at, orthographic, perspective, vec3,
};

use super::{Proj, View, World};

/// How the view volume is mapped to NDC.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Projection {
    /// Perspective projection with vertical field of view `fov`.
    Perspective {
        fov: Angle,
        aspect: f32,
        near: f32,
        far: f32,
    },
    /// Orthographic projection of a box extending `half_height` up and
    /// down and `half_height · aspect` left and right of the view axis.
    Orthographic {
        half_height: f32,
        aspect: f32,
        near: f32,
        far: f32,
    },
}

/// A camera looking from `eye` at `target`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    /// Camera position in world space.
    pub eye: Vec3<World>,
    /// The point the camera looks at.
    pub target: Vec3<World>,
    /// Approximate up direction.
    pub up: Vec3<World>,
    pub projection: Projection,
}

impl Projection {
    /// Returns a perspective projection with a 45° vertical field of view
    /// and near and far planes at 0.1 and 100.
    pub fn perspective(aspect: f32) -> Self {
        Self::Perspective {
            fov: degs(45.0),
            aspect,
            near: 0.1,
            far: 100.0,
        }
    }

    /// Returns an orthographic projection showing `half_height` units
    /// above and below the view axis, with near and far planes at 0.1 and
    /// 100.
    pub fn orthographic(half_height: f32, aspect: f32) -> Self {
        Self::Orthographic {
            half_height,
            aspect,
            near: 0.1,
            far: 100.0,
        }
    }

    /// Returns the view-to-projection matrix of `self`.
    pub fn matrix(&self) -> Mat4<View, Proj> {
        match *self {
            Self::Perspective { fov, aspect, near, far } => {
                perspective(fov, aspect, near, far)
            }
            Self::Orthographic { half_height, aspect, near, far } => {
                let (hw, hh) = (half_height * aspect, half_height);
                orthographic(vec3(-hw, -hh, near), vec3(hw, hh, far))
            }
        }
    }
}

impl Camera {
    /// Creates a camera at `eye` looking at the origin, with +y up.
    pub fn new(eye: Vec3<World>, projection: Projection) -> Self {
        Self {
            eye,
            target: vec3(0.0, 0.0, 0.0),
            up: Vec3::Y,
            projection,
        }
    }

    /// Creates a camera on the +z axis at distance `dist` from the origin,
    /// raised by `height · dist`, looking at the origin.
    pub fn orbit(dist: f32, height: f32, projection: Projection) -> Self {
        Self::new(vec3(0.0, height * dist, dist), projection)
    }

    /// Returns the current world-to-view matrix.
    pub fn world_to_view(&self) -> Mat4<World, View> {
        look_at(self.eye, self.target, self.up)
    }

    /// Returns the current view-to-projection matrix.
    pub fn view_to_proj(&self) -> Mat4<View, Proj> {
        self.projection.matrix()
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;
    use crate::math::vec4;

    use super::*;

    #[test]
    fn default_perspective_camera() {
        let cam = Camera::new(vec3(0.0, 0.0, 5.0), Projection::perspective(1.0));
        let view = cam.world_to_view();
        assert_approx_eq!(view.apply(&vec3(0.0, 0.0, 0.0)), vec3(0.0, 0.0, -5.0));
        assert_eq!(
            cam.view_to_proj(),
            perspective(degs(45.0), 1.0, 0.1, 100.0)
        );
    }

    #[test]
    fn orthographic_bounds_map_to_ndc_edges() {
        let p = Projection::orthographic(2.0, 1.5).matrix();
        let ndc = p.apply4(&vec4(3.0, 2.0, -0.1, 1.0));
        assert_approx_eq!(ndc, vec4(1.0, 1.0, -1.0, 1.0));
        let ndc = p.apply4(&vec4(-3.0, -2.0, -100.0, 1.0));
        assert_approx_eq!(ndc, vec4(-1.0, -1.0, 1.0, 1.0));
    }

    #[test]
    fn orbit_raises_eye() {
        let cam = Camera::orbit(4.0, 0.5, Projection::perspective(1.0));
        assert_eq!(cam.eye, vec3(0.0, 2.0, 4.0));
        assert_eq!(cam.target, vec3(0.0, 0.0, 0.0));
    }
}
