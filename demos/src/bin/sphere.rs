//! A Phong-lit rotating sphere.
//!
//! Keys:
//! * Plus, Minus: double or halve the shininess (1 to 256)
//! * Arrows, PageUp, PageDown: move the light
//! * S: cycle the shading mode
//! * R, G, B: raise a channel of the edited color; with Shift, lower it
//! * Tab: switch between editing the light color and the object color

use std::error::Error;
use std::ops::ControlFlow::Continue;

use minifb::{Key, KeyRepeat};
use tracing::info;
use tracing_subscriber::EnvFilter;

use re::prelude::*;
use re::render::light::Kind;
use re::util::dims::{SQUARE_600, aspect_ratio};
use re_front::minifb::Window;
use re_geom::solids::Sphere;

const LIGHT_SPEED: f32 = 2.0;
const SHININESS: std::ops::RangeInclusive<f32> = 1.0..=256.0;
const COLOR_STEP: f32 = 0.05;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut model = Sphere::new(1.0);
    let mut sphere = model.build();
    info!(verts = sphere.verts.len(), "built sphere");
    let mut light_color = gray(1.0);
    let mut edit_light = true;

    let proj = Projection::perspective(aspect_ratio(SQUARE_600));
    let cam = Camera::new(vec3(0.0, 0.0, 3.0), proj);
    let mut light_pos = vec3(1.2, 1.0, 2.0);
    let mut material = Material::default();

    let mut win = Window::builder()
        .title("rastlab//sphere")
        .dims(SQUARE_600)
        .context(Context {
            clear_color: gray(0.1),
            shading: Shading::Phong,
            ..Context::default()
        })
        .build()?;

    win.run(|frame| {
        let imp = &frame.win.imp;
        let shininess = material.shininess;
        if imp.is_key_pressed(Key::Equal, KeyRepeat::Yes) {
            material.shininess *= 2.0;
        }
        if imp.is_key_pressed(Key::Minus, KeyRepeat::Yes) {
            material.shininess /= 2.0;
        }
        material.shininess = material
            .shininess
            .clamp(*SHININESS.start(), *SHININESS.end());
        if material.shininess != shininess {
            info!(shininess = material.shininess, "changed shininess");
        }
        if imp.is_key_pressed(Key::S, KeyRepeat::No) {
            frame.ctx.shading = frame.ctx.shading.next();
            info!(shading = ?frame.ctx.shading, "switched shading");
        }

        if imp.is_key_pressed(Key::Tab, KeyRepeat::No) {
            edit_light = !edit_light;
            info!(edit_light, "switched edited color");
        }
        let shift =
            imp.is_key_down(Key::LeftShift) || imp.is_key_down(Key::RightShift);
        let delta = if shift { -COLOR_STEP } else { COLOR_STEP };
        for (i, key) in [Key::R, Key::G, Key::B].into_iter().enumerate() {
            if !imp.is_key_pressed(key, KeyRepeat::Yes) {
                continue;
            }
            let color = if edit_light {
                &mut light_color
            } else {
                &mut model.color
            };
            nudge(color, i, delta);
            info!(light = ?light_color, object = ?model.color, "changed color");
            if !edit_light {
                sphere = model.build();
            }
        }

        let step = LIGHT_SPEED * frame.dt.as_secs_f32();
        for (key, delta) in [
            (Key::Left, vec3(-step, 0.0, 0.0)),
            (Key::Right, vec3(step, 0.0, 0.0)),
            (Key::Up, vec3(0.0, step, 0.0)),
            (Key::Down, vec3(0.0, -step, 0.0)),
            (Key::PageUp, vec3(0.0, 0.0, -step)),
            (Key::PageDown, vec3(0.0, 0.0, step)),
        ] {
            if imp.is_key_down(key) {
                light_pos += delta;
            }
        }

        let light = Light {
            color: light_color,
            kind: Kind::Point(light_pos),
        };
        let lighting = Lighting { light, material, ..Lighting::default() };
        let mut uni = Uniforms::new(&cam, SQUARE_600, lighting);
        let secs = frame.t.as_secs_f32();
        uni.model = rotate(vec3(0.5, 1.0, 0.0), rads(secs)).to();

        frame.draw(&sphere, &uni);
        Continue(())
    })?;
    Ok(())
}

/// Adds `delta` to channel `i` of `color`, keeping it within 0 to 1.
fn nudge(color: &mut Color3f, i: usize, delta: f32) {
    color.0[i] = (color.0[i] + delta).clamp(0.0, 1.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nudge_clamps_channel() {
        let mut c = rgb(0.98, 0.5, 0.02);
        nudge(&mut c, 0, COLOR_STEP);
        nudge(&mut c, 2, -COLOR_STEP);
        assert_eq!(c, rgb(1.0, 0.5, 0.0));

        nudge(&mut c, 1, COLOR_STEP);
        assert!((c.g() - 0.55).abs() < 1e-6);
    }
}
