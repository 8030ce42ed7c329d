//! Frontends for creating simple interactive `rastlab` programs.

use std::time::Duration;

use rastlab_core::geom::Mesh;
use rastlab_core::render::{
    Stats, Uniforms, ctx::Context, render, target::Framebuf,
};

#[cfg(feature = "minifb")]
pub mod minifb;

/// Per-frame state. The window run method passes an instance of `Frame`
/// to the callback function on every iteration of the main loop.
pub struct Frame<'a, Win> {
    /// Elapsed time since the start of the first frame.
    pub t: Duration,
    /// Elapsed time since the start of the previous frame.
    pub dt: Duration,
    /// Framebuffer in which to draw.
    pub buf: &'a mut Framebuf,
    /// Reference to the window object.
    pub win: &'a mut Win,
    /// Rendering context and config.
    pub ctx: &'a mut Context,
}

impl<Win> Frame<'_, Win> {
    /// Clears the color buffer to the context's clear color and resets
    /// the depth buffer.
    pub fn clear(&mut self) {
        self.buf.clear(self.ctx.clear_color);
    }

    /// Renders `mesh` into the framebuffer using the frame's context.
    pub fn draw(&mut self, mesh: &Mesh, uniforms: &Uniforms) -> Stats {
        render(mesh, uniforms, self.buf, self.ctx)
    }
}
