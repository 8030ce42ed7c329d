//! Renders a scene without a window and saves it as a PPM image.
//!
//! Usage: `ppm [SCENE] [OUTPUT]`, where `SCENE` is one of `cube`,
//! `tetrahedron`, `sphere`, `letters`, or `lines` (default `cube`) and
//! `OUTPUT` defaults to `<SCENE>.ppm`.

use std::{env, error::Error};

use tracing::{info, info_span};
use tracing_subscriber::EnvFilter;

use re::prelude::*;
use re::render::{line::bresenham, raster::edge_walk_fill};
use re::util::{
    dims::{SQUARE_600, aspect_ratio},
    pnm::save_ppm,
};
use re_geom::{
    glyph::{letter_l, letter_x, letter_y},
    solids::{Cube, Sphere, Tetrahedron},
};

const DIMS: Dims = SQUARE_600;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let scene = args.next().unwrap_or_else(|| "cube".into());
    let out = args.next().unwrap_or_else(|| format!("{scene}.ppm"));

    let _span = info_span!("render", scene = %scene).entered();
    let mut fb = Framebuf::new(DIMS);
    let mut ctx = Context::default();
    fb.clear(ctx.clear_color);

    let proj = Projection::perspective(aspect_ratio(DIMS));
    let tilt = rotate(vec3(0.5, 1.0, 0.0), degs(30.0)).to();

    match scene.as_str() {
        "cube" | "tetrahedron" => {
            let mesh = if scene == "cube" {
                Cube.build()
            } else {
                Tetrahedron.build()
            };
            let cam = Camera::new(vec3(0.0, 0.0, 5.0), proj);
            let mut uni = Uniforms::new(&cam, DIMS, Lighting::default());
            uni.model = tilt;
            render(&mesh, &uni, &mut fb, &ctx);
        }
        "sphere" => {
            ctx.shading = Shading::Phong;
            let cam = Camera::new(vec3(0.0, 0.0, 3.0), proj);
            let mut uni = Uniforms::new(&cam, DIMS, Lighting::default());
            uni.model = tilt;
            render(&Sphere::default().build(), &uni, &mut fb, &ctx);
        }
        "letters" => {
            ctx.face_cull = None;
            let proj = Projection::orthographic(2.0, aspect_ratio(DIMS));
            let cam = Camera::orbit(5.0, 0.0, proj);
            let lighting = Lighting {
                material: Material::UNLIT,
                ..Lighting::default()
            };
            let mut uni = Uniforms::new(&cam, DIMS, lighting);
            for (mesh, x) in [
                (letter_y(rgb(1.0, 0.3, 0.3)), -1.2),
                (letter_l(rgb(0.3, 1.0, 0.3)), 0.0),
                (letter_x(rgb(0.3, 0.3, 1.0)), 1.2),
            ] {
                uni.model = translate(vec3(x, 0.0, 0.0)).to();
                render(&mesh, &uni, &mut fb, &ctx);
            }
        }
        "lines" => {
            let tri = [
                vec2(100.0, 100.0),
                vec2(400.0, 300.0),
                vec2(200.0, 500.0),
            ];
            let mut stats = ctx.stats.borrow_mut();
            stats.frags += edge_walk_fill(&mut fb, tri, rgb(1.0, 0.5, 0.2));
            for i in 0..3 {
                let (p0, p1) = (tri[i], tri[(i + 1) % 3]);
                stats.frags += bresenham(&mut fb, p0, p1, rgb(0.0, 1.0, 1.0));
            }
        }
        other => return Err(format!("unknown scene: {other}").into()),
    }

    save_ppm(&out, &fb.to_rgb_buf())?;
    info!(path = %out, "saved image");
    info!("rendering stats:\n{}", ctx.stats.borrow());
    Ok(())
}
