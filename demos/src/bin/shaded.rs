//! A rotating cube or tetrahedron lit by a movable point light.
//!
//! Keys:
//! * Space: switch between the cube and the tetrahedron
//! * S: cycle the shading mode (flat, Gouraud, Phong)
//! * W: toggle wireframe
//! * Arrows, PageUp, PageDown: move the light

use std::error::Error;
use std::ops::ControlFlow::Continue;

use minifb::{Key, KeyRepeat};
use tracing::info;
use tracing_subscriber::EnvFilter;

use re::prelude::*;
use re::render::light::Kind;
use re::util::dims::{SQUARE_600, aspect_ratio};
use re_front::minifb::Window;
use re_geom::solids::{Cube, Tetrahedron};

const LIGHT_SPEED: f32 = 2.0;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let models = [
        ("cube", Cube.build()),
        ("tetrahedron", Tetrahedron.build()),
    ];
    let mut idx = 0;
    let mut light_pos = vec3(1.2, 1.0, 2.0);
    let mut angle = 0.0;

    let proj = Projection::perspective(aspect_ratio(SQUARE_600));
    let cam = Camera::new(vec3(0.0, 0.0, 5.0), proj);

    let mut win = Window::builder()
        .title("rastlab//shaded")
        .dims(SQUARE_600)
        .context(Context { clear_color: gray(0.1), ..Context::default() })
        .build()?;

    win.run(|frame| {
        let imp = &frame.win.imp;
        if imp.is_key_pressed(Key::Space, KeyRepeat::No) {
            idx = (idx + 1) % models.len();
            info!(model = models[idx].0, "switched model");
        }
        if imp.is_key_pressed(Key::S, KeyRepeat::No) {
            frame.ctx.shading = frame.ctx.shading.next();
            info!(shading = ?frame.ctx.shading, "switched shading");
        }
        if imp.is_key_pressed(Key::W, KeyRepeat::No) {
            frame.ctx.wireframe = !frame.ctx.wireframe;
            info!(wireframe = frame.ctx.wireframe, "toggled wireframe");
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

        angle += 0.002;
        let light = Light {
            kind: Kind::Point(light_pos),
            ..Light::default()
        };
        let lighting = Lighting { light, ..Lighting::default() };
        let mut uni = Uniforms::new(&cam, SQUARE_600, lighting);
        uni.model = rotate(vec3(0.5, 1.0, 0.0), rads(angle)).to();

        frame.draw(&models[idx].1, &uni);
        Continue(())
    })?;
    Ok(())
}
