//! Light sources and the lighting model.

use crate::math::{Color3f, Vec3, color::gray, float, vec3};

use super::World;

/// A light source.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub color: Color3f,
    pub kind: Kind,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Kind {
    /// A light source "at infinity", so that the light rays arrive
    /// parallel and the direction *towards* the light is the same for
    /// every point. For example the sun.
    Directional(Vec3<World>),
    /// A light source radiating omnidirectionally from a single point.
    Point(Vec3<World>),
}

/// Surface reflectance constants of the lighting model.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    /// Fraction of the light color reflected regardless of geometry.
    pub ambient: f32,
    /// Strength of the diffuse reflection.
    pub diffuse: f32,
    /// Strength of the specular highlight.
    pub specular: f32,
    /// Specular exponent; larger values give smaller, sharper highlights.
    pub shininess: f32,
}

/// Everything the lighting model needs apart from the surface point:
/// the light, the material, and the position of the viewer.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Lighting {
    pub light: Light,
    pub material: Material,
    /// Eye position in world space.
    pub eye: Vec3<World>,
}

impl Light {
    /// Creates a white point light at `pos`.
    pub fn point(pos: Vec3<World>) -> Self {
        Self { kind: Kind::Point(pos), ..Self::default() }
    }

    /// Creates a white directional light shining *from* direction `dir`.
    pub fn directional(dir: Vec3<World>) -> Self {
        Self {
            kind: Kind::Directional(dir.normalize()),
            ..Self::default()
        }
    }

    /// Returns the normalized direction from `pt` towards `self`.
    #[inline]
    pub fn direction(&self, pt: Vec3<World>) -> Vec3<World> {
        match self.kind {
            Kind::Point(pos) => (pos - pt).normalize(),
            Kind::Directional(dir) => dir,
        }
    }
}

impl Default for Light {
    /// A white point light at (1.2, 1.0, 2.0).
    fn default() -> Self {
        Self {
            color: gray(1.0),
            kind: Kind::Point(vec3(1.2, 1.0, 2.0)),
        }
    }
}

impl Material {
    /// A material that ignores geometry and reflects the light color
    /// times the base color, as if unlit.
    pub const UNLIT: Self = Self {
        ambient: 1.0,
        diffuse: 0.0,
        specular: 0.0,
        shininess: 1.0,
    };
}

impl Default for Material {
    /// Ambient 0.1, diffuse 1.0, specular 0.5, shininess 32.
    fn default() -> Self {
        Self {
            ambient: 0.1,
            diffuse: 1.0,
            specular: 0.5,
            shininess: 32.0,
        }
    }
}

impl Lighting {
    /// Computes the lit color of a surface point.
    ///
    /// ```text
    /// ambient  = ka · light
    /// diffuse  = kd · max(n · l, 0) · light
    /// specular = ks · max(v · reflect(-l, n), 0)^shininess · light
    /// result   = (ambient + diffuse + specular) ⊙ base
    /// ```
    /// where `l` points towards the light and `v` towards the eye.
    /// `normal` is normalized here. The result is not clamped.
    pub fn shade(
        &self,
        pos: Vec3<World>,
        normal: Vec3<World>,
        base: Color3f,
    ) -> Color3f {
        let Material { ambient, diffuse, specular, shininess } = self.material;
        let n = normal.normalize();
        let l = self.light.direction(pos);
        let v = (self.eye - pos).normalize();

        let diff = n.dot(&l).max(0.0);
        let r = (-l).reflect(n);
        let spec = float::f32::powf(v.dot(&r).max(0.0), shininess);

        let k = ambient + diffuse * diff + specular * spec;
        (self.light.color * k).mul_color(base)
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;
    use crate::math::rgb;

    use super::*;

    fn lighting(light: Light, eye: Vec3<World>) -> Lighting {
        Lighting { light, eye, ..Lighting::default() }
    }

    #[test]
    fn light_and_eye_along_normal() {
        let l = lighting(Light::point(vec3(0.0, 0.0, 5.0)), vec3(0.0, 0.0, 5.0));
        let c = l.shade(vec3(0.0, 0.0, 0.0), Vec3::Z, gray(1.0));
        // 0.1 + 1.0 + 0.5
        assert_approx_eq!(c, gray(1.6));
    }

    #[test]
    fn light_behind_surface_is_ambient_only() {
        let l = lighting(Light::point(vec3(0.0, 0.0, -5.0)), vec3(0.0, 0.0, 5.0));
        let c = l.shade(vec3(0.0, 0.0, 0.0), Vec3::Z, rgb(1.0, 0.5, 0.0));
        assert_approx_eq!(c, rgb(0.1, 0.05, 0.0));
    }

    #[test]
    fn grazing_light_has_no_diffuse() {
        let l = lighting(Light::directional(Vec3::X), vec3(0.0, 0.0, 5.0));
        let c = l.shade(vec3(0.0, 0.0, 0.0), Vec3::Z, gray(1.0));
        // reflect(-x, z) = -x, perpendicular to the view vector
        assert_approx_eq!(c, gray(0.1));
    }

    #[test]
    fn normal_is_normalized() {
        let l = lighting(Light::directional(Vec3::Z), vec3(0.0, 5.0, 5.0));
        let a = l.shade(vec3(0.0, 0.0, 0.0), Vec3::Z * 7.0, gray(0.5));
        let b = l.shade(vec3(0.0, 0.0, 0.0), Vec3::Z, gray(0.5));
        assert_approx_eq!(a, b);
    }

    #[test]
    fn light_color_tints() {
        let light = Light { color: rgb(1.0, 0.0, 0.0), ..Light::directional(Vec3::Z) };
        let c = lighting(light, vec3(5.0, 0.0, 0.0)).shade(
            vec3(0.0, 0.0, 0.0),
            Vec3::Z,
            gray(1.0),
        );
        assert_approx_eq!(c, rgb(1.1, 0.0, 0.0));
    }

    #[test]
    fn unlit_material_gives_base_color() {
        let l = Lighting {
            material: Material::UNLIT,
            ..lighting(Light::directional(Vec3::Z), vec3(0.0, 0.0, 5.0))
        };
        let c = l.shade(vec3(0.0, 0.0, 0.0), Vec3::Z, rgb(0.8, 0.2, 0.2));
        assert_approx_eq!(c, rgb(0.8, 0.2, 0.2));
    }

    #[test]
    fn directional_light_is_normalized() {
        let l = Light::directional(vec3(0.0, 3.0, 4.0));
        assert_approx_eq!(l.direction(vec3(9.0, 9.0, 9.0)), vec3(0.0, 0.6, 0.8));
    }
}
