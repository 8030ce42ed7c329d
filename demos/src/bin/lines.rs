//! Line drawing and edge-walking triangle fill.
//!
//! Keys: F toggles the fill, D the DDA edges, and B the Bresenham edges.

use std::error::Error;
use std::ops::ControlFlow::Continue;

use minifb::{Key, KeyRepeat};
use tracing::info;
use tracing_subscriber::EnvFilter;

use re::math::{Color3f, Vec2, rgb, vec2};
use re::render::{
    Screen,
    line::{bresenham, dda},
    raster::edge_walk_fill,
};
use re::util::dims::SQUARE_600;
use re_front::minifb::Window;

const FILL: Color3f = rgb(1.0, 0.5, 0.2);
const DDA: Color3f = rgb(1.0, 1.0, 1.0);
const BRESENHAM: Color3f = rgb(0.0, 1.0, 1.0);

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let tri: [Vec2<Screen>; 3] = [
        vec2(100.0, 100.0),
        vec2(400.0, 300.0),
        vec2(200.0, 500.0),
    ];
    let (mut fill, mut use_dda, mut use_bresenham) = (true, true, false);

    let mut win = Window::builder()
        .title("rastlab//lines")
        .dims(SQUARE_600)
        .build()?;

    win.run(|frame| {
        let imp = &frame.win.imp;
        for (key, flag, name) in [
            (Key::F, &mut fill, "fill"),
            (Key::D, &mut use_dda, "dda"),
            (Key::B, &mut use_bresenham, "bresenham"),
        ] {
            if imp.is_key_pressed(key, KeyRepeat::No) {
                *flag = !*flag;
                info!(name, on = *flag, "toggled");
            }
        }

        let mut stats = frame.ctx.stats.borrow_mut();
        if fill {
            stats.frags += edge_walk_fill(frame.buf, tri, FILL);
        }
        for i in 0..3 {
            let (p0, p1) = (tri[i], tri[(i + 1) % 3]);
            if use_dda {
                stats.frags += dda(frame.buf, p0, p1, DDA);
            }
            if use_bresenham {
                stats.frags += bresenham(frame.buf, p0, p1, BRESENHAM);
            }
        }
        Continue(())
    })?;
    Ok(())
}
