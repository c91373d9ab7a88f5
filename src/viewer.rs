//! Standalone input window backed by winit.
//!
//! Opens a window, feeds its events into an owned [`InputState`] and calls
//! a frame callback on every redraw. Pressed edges are consumed right after
//! the callback returns, so each press is seen by exactly one frame.
//!
//! ```no_run
//! # use frame_input::{LogicalInput, Viewer};
//! Viewer::builder()
//!     .with_title("input test")
//!     .build()
//!     .run(|input, _dt| {
//!         if input.query(LogicalInput::Space).pressed_edge {
//!             log::info!("jump");
//!         }
//!     })
//!     .unwrap();
//! ```

use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    error::InputError,
    input::{InputState, SurfaceOffset},
    options::Options,
    platform::native::translate_window_event,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "frame-input",
    /// default options).
    fn new() -> Self {
        Self {
            options: None,
            title: "frame-input".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window whose input drives a frame callback.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// `frame` receives the input state and the seconds elapsed since the
    /// previous frame.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Platform`] if the event loop cannot be created
    /// or exits with an error.
    pub fn run<F>(self, frame: F) -> Result<(), InputError>
    where
        F: FnMut(&InputState, f32),
    {
        let event_loop =
            EventLoop::new().map_err(|e| InputError::Platform(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            input: InputState::from_options(&self.options),
            last_frame_time: Instant::now(),
            title: self.title,
            frame,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| InputError::Platform(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp<F> {
    window: Option<Window>,
    input: InputState,
    last_frame_time: Instant,
    title: String,
    frame: F,
}

impl<F> ViewerApp<F>
where
    F: FnMut(&InputState, f32),
{
    /// Run one frame: hand the state to the callback, then consume edges.
    fn run_frame(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        (self.frame)(&self.input, dt);
        let _ = self.input.consume_pressed_edges();
    }
}

impl<F> ApplicationHandler for ViewerApp<F>
where
    F: FnMut(&InputState, f32),
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes().with_title(&self.title);
        let window = match event_loop.create_window(attrs) {
            Ok(w) => w,
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::RedrawRequested => {
                self.run_frame();
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            other => {
                // winit cursor positions are already window-local.
                if let Some(input_event) =
                    translate_window_event(&other, &SurfaceOffset::ZERO)
                {
                    let _ = self.input.handle_event(&input_event);
                }
            }
        }
    }
}
