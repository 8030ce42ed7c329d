//! Frontend using the `minifb` crate for window creation and event handling.

use std::{
    ops::ControlFlow::{self, Break},
    time::Instant,
};

use minifb::{Key, WindowOptions};
use tracing::{debug, info};

use rastlab_core::{
    render::{ctx::Context, target::Framebuf},
    util::{Dims, dims::SQUARE_600},
};

use crate::Frame;

/// A lightweight wrapper of a `minifb` window.
pub struct Window {
    /// The wrapped minifb window.
    pub imp: minifb::Window,
    /// The width and height of the window.
    pub dims: Dims,
    /// Rendering context defaults.
    pub ctx: Context,
}

/// Builder for creating `Window`s.
pub struct Builder<'title> {
    pub dims: Dims,
    pub title: &'title str,
    pub target_fps: Option<u32>,
    pub opts: WindowOptions,
    pub ctx: Context,
}

impl Default for Builder<'_> {
    fn default() -> Self {
        Self {
            dims: SQUARE_600,
            title: "rastlab",
            target_fps: Some(60),
            opts: WindowOptions::default(),
            ctx: Context::default(),
        }
    }
}

impl<'t> Builder<'t> {
    /// Sets the width and height of the window.
    pub fn dims(mut self, dims: Dims) -> Self {
        self.dims = dims;
        self
    }
    /// Sets the title of the window.
    pub fn title(mut self, title: &'t str) -> Self {
        self.title = title;
        self
    }
    /// Sets the frame rate cap of the window. `None` means unlimited
    /// frame rate (the main loop runs as fast as possible).
    pub fn target_fps(mut self, fps: Option<u32>) -> Self {
        self.target_fps = fps;
        self
    }
    /// Sets the rendering context the main loop starts with.
    pub fn context(mut self, ctx: Context) -> Self {
        self.ctx = ctx;
        self
    }
    /// Sets other `minifb` options.
    pub fn options(mut self, opts: WindowOptions) -> Self {
        self.opts = opts;
        self
    }

    /// Creates the window.
    pub fn build(self) -> minifb::Result<Window> {
        let Self { dims, title, target_fps, opts, ctx } = self;
        let mut imp =
            minifb::Window::new(title, dims.0 as usize, dims.1 as usize, opts)?;
        if let Some(fps) = target_fps {
            imp.set_target_fps(fps as usize);
        }
        info!(title, width = dims.0, height = dims.1, "window opened");
        Ok(Window { imp, dims, ctx })
    }
}

impl Window {
    /// Returns a window builder.
    pub fn builder() -> Builder<'static> {
        Builder::default()
    }

    /// Updates the window content with pixel data from `fb`.
    ///
    /// The data is interpreted as colors in `0x00_RR_GG_BB` format.
    pub fn present(&mut self, fb: &[u32]) -> minifb::Result<()> {
        let (w, h) = self.dims;
        self.imp.update_with_buffer(fb, w as usize, h as usize)
    }

    /// Runs the main loop of the program, invoking the callback on each
    /// iteration to compute and draw the next frame.
    ///
    /// The framebuffer is cleared to the context's clear color before each
    /// call. The main loop stops and this function returns if:
    /// * the user closes the window via the GUI (e.g. titlebar close button);
    /// * the Esc key is pressed; or
    /// * the callback returns `ControlFlow::Break`.
    ///
    /// # Errors
    /// If presenting a frame to the window fails.
    pub fn run<F>(&mut self, mut frame_fn: F) -> minifb::Result<()>
    where
        F: FnMut(&mut Frame<Self>) -> ControlFlow<()>,
    {
        let (w, h) = self.dims;
        let mut buf = Framebuf::new(self.dims);
        let mut out = vec![0u32; w as usize * h as usize];
        let mut ctx = self.ctx.clone();

        let start = Instant::now();
        let mut last = Instant::now();
        loop {
            if self.should_quit() {
                debug!("quit requested");
                break;
            }
            let frame = &mut Frame {
                t: start.elapsed(),
                dt: last.elapsed(),
                buf: &mut buf,
                win: self,
                ctx: &mut ctx,
            };
            frame.clear();

            last = Instant::now();
            if let Break(_) = frame_fn(frame) {
                debug!("frame callback returned break");
                break;
            }
            buf.write_xrgb(&mut out);
            self.present(&out)?;

            ctx.stats.borrow_mut().frames += 1.0;
        }
        info!("rendering stats:\n{}", ctx.stats.borrow());
        Ok(())
    }

    fn should_quit(&self) -> bool {
        !self.imp.is_open() || self.imp.is_key_down(Key::Escape)
    }
}
