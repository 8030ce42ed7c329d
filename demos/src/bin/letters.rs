//! The letters Y, L, and X side by side, or a rotating extruded Y.
//!
//! Keys:
//! * M: switch between the flat letters and the 3D letter
//! * P: switch between orthographic and perspective projection
//! * X, Y, Z: toggle automatic rotation about each axis
//! * R: reset the rotation
//! * 1, 2, 3: turn about the X, Y, or Z axis; with Shift, turn back
//! * Plus, Minus: change the automatic rotation speed (0 to 200 °/s)
//! * Up, Down: move the camera closer or farther
//! * PageUp, PageDown: raise or lower the camera

use std::error::Error;
use std::ops::ControlFlow::Continue;

use minifb::{Key, KeyRepeat};
use tracing::info;
use tracing_subscriber::EnvFilter;

use re::prelude::*;
use re::util::dims::{SVGA_800_600, aspect_ratio};
use re_front::minifb::Window;
use re_geom::glyph::{letter_l, letter_x, letter_y, letter_y_3d};

const DIMS: Dims = SVGA_800_600;
/// Initial automatic rotation speed in degrees per second.
const SPEED: f32 = 50.0;
const MAX_SPEED: f32 = 200.0;
/// Manual rotation speed in degrees per second.
const TURN_SPEED: f32 = 90.0;

#[derive(Copy, Clone, Debug)]
enum Mode {
    Flat,
    Extruded,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let flat = [
        (letter_y(rgb(1.0, 0.3, 0.3)), -2.5),
        (letter_l(rgb(0.3, 1.0, 0.3)), 0.0),
        (letter_x(rgb(0.3, 0.3, 1.0)), 2.5),
    ];
    let solid = letter_y_3d(0.5);

    let mut mode = Mode::Flat;
    let mut ortho = true;
    let mut auto = [false, true, false];
    let mut rot = [0.0f32; 3];
    let mut speed = SPEED;
    let (mut dist, mut height) = (5.0f32, 0.0f32);

    let mut win = Window::builder()
        .title("rastlab//letters")
        .dims(DIMS)
        .context(Context {
            clear_color: rgb(0.1, 0.1, 0.15),
            face_cull: None,
            ..Context::default()
        })
        .build()?;

    win.run(|frame| {
        let imp = &frame.win.imp;
        let pressed = |key| imp.is_key_pressed(key, KeyRepeat::No);
        if pressed(Key::M) {
            mode = match mode {
                Mode::Flat => Mode::Extruded,
                Mode::Extruded => Mode::Flat,
            };
            info!(?mode, "switched mode");
        }
        if pressed(Key::P) {
            ortho = !ortho;
            info!(ortho, "switched projection");
        }
        for (i, key) in [Key::X, Key::Y, Key::Z].into_iter().enumerate() {
            if pressed(key) {
                auto[i] = !auto[i];
            }
        }
        if pressed(Key::R) {
            rot = [0.0; 3];
        }
        for (key, delta) in [(Key::Equal, 10.0), (Key::Minus, -10.0)] {
            if imp.is_key_pressed(key, KeyRepeat::Yes) {
                speed = (speed + delta).clamp(0.0, MAX_SPEED);
                info!(speed, "changed rotation speed");
            }
        }

        let dt = frame.dt.as_secs_f32();
        if imp.is_key_down(Key::Up) {
            dist = (dist - 2.0 * dt).max(2.0);
        }
        if imp.is_key_down(Key::Down) {
            dist = (dist + 2.0 * dt).min(10.0);
        }
        if imp.is_key_down(Key::PageUp) {
            height = (height + 0.5 * dt).min(1.0);
        }
        if imp.is_key_down(Key::PageDown) {
            height = (height - 0.5 * dt).max(0.0);
        }
        let shift =
            imp.is_key_down(Key::LeftShift) || imp.is_key_down(Key::RightShift);
        let turn = if shift { -TURN_SPEED } else { TURN_SPEED };
        let keys = [Key::Key1, Key::Key2, Key::Key3];
        for ((r, on), key) in rot.iter_mut().zip(auto).zip(keys) {
            if on {
                *r = spin(*r, speed, dt);
            }
            if imp.is_key_down(key) {
                *r = spin(*r, turn, dt);
            }
        }

        let aspect = aspect_ratio(DIMS);
        let proj = if ortho {
            Projection::orthographic(2.0, aspect)
        } else {
            Projection::perspective(aspect)
        };
        let cam = Camera::orbit(dist, height, proj);
        let lighting = Lighting {
            material: Material::UNLIT,
            ..Lighting::default()
        };
        let mut uni = Uniforms::new(&cam, DIMS, lighting);

        match mode {
            Mode::Flat => {
                for (mesh, x) in &flat {
                    uni.model = translate(vec3(*x, 0.0, 0.0)).to();
                    frame.draw(mesh, &uni);
                }
            }
            Mode::Extruded => {
                let [x, y, z] = rot.map(degs);
                uni.model = rotate(Vec3::Z, z)
                    .then(&rotate(Vec3::Y, y))
                    .then(&rotate(Vec3::X, x))
                    .to();
                frame.draw(&solid, &uni);
            }
        }
        Continue(())
    })?;
    Ok(())
}

/// Advances `angle` by `speed` degrees per second over `dt` seconds,
/// wrapped to 0..360.
fn spin(angle: f32, speed: f32, dt: f32) -> f32 {
    (angle + speed * dt).rem_euclid(360.0)
}
