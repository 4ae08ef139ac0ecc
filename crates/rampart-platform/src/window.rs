// Copyright 2025 the Rampart Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A `winit`-based implementation of the `NativeWindow` seam.
//!
//! `winit` owns the event loop, so the backend embeds one and drives it in
//! pump mode: each `poll_events` call runs `pump_app_events` with a zero
//! timeout, which synchronously delivers the queued OS events to the
//! embedded [`winit::application::ApplicationHandler`] state and returns.

use crate::input::translate_window_event;
use rampart_core::math::{Point2D, Size2D};
use rampart_core::platform::native::{NativeEvent, NativeWindow, SurfaceHandleRef};
use std::sync::Arc;
use std::time::Duration;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

/// A builder for creating [`WinitWindow`] instances.
pub struct WinitWindowBuilder {
    title: String,
    width: u32,
    height: u32,
}

impl WinitWindowBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            title: "Rampart".to_string(),
            width: 1024,
            height: 768,
        }
    }

    /// Sets the title of the window to be built.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial inner dimensions of the window to be built.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Builds the backend.
    ///
    /// The `winit` window itself is created lazily on the first
    /// `poll_events` call, when the event loop delivers `resumed`.
    ///
    /// # Errors
    /// Returns an [`EventLoopError`] if the event loop cannot be created
    /// (e.g. no display server).
    pub fn build(self) -> Result<WinitWindow, EventLoopError> {
        log::info!(
            "Building window backend with title: '{}' and size: {}x{}",
            self.title,
            self.width,
            self.height
        );

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        Ok(WinitWindow {
            event_loop,
            state: BackendState {
                title: self.title,
                width: self.width,
                height: self.height,
                window: None,
                events: Vec::new(),
                pointer: Point2D::ZERO,
                cursor_visible: true,
            },
        })
    }
}

impl Default for WinitWindowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The event-loop-side state: lazily created window, accumulated raw
/// events, and the pointer snapshot.
struct BackendState {
    title: String,
    width: u32,
    height: u32,
    window: Option<Arc<Window>>,
    events: Vec<NativeEvent>,
    pointer: Point2D,
    // winit can set but not query cursor visibility, so we mirror it.
    cursor_visible: bool,
}

impl ApplicationHandler for BackendState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(self.width, self.height))
            .with_visible(true);

        match event_loop.create_window(attributes) {
            Ok(window) => {
                log::info!("Winit window created successfully (id: {:?}).", window.id());
                self.window = Some(Arc::new(window));
            }
            Err(err) => {
                log::error!("Winit window creation failed: {err}");
                // Surface the failure as a close request so the pump loop
                // terminates instead of spinning windowless.
                self.events.push(NativeEvent::CloseRequested);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let WindowEvent::CursorMoved { position, .. } = &event {
            self.pointer = Point2D::new(position.x as i32, position.y as i32);
        }

        if let Some(native) = translate_window_event(&event) {
            self.events.push(native);
        }
    }
}

/// A wrapper around a `winit` event loop and window implementing the
/// engine's native-window capability.
pub struct WinitWindow {
    event_loop: EventLoop<()>,
    state: BackendState,
}

impl NativeWindow for WinitWindow {
    fn poll_events(&mut self) -> Vec<NativeEvent> {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.state);

        if let PumpStatus::Exit(code) = status {
            log::debug!("Winit event loop exited with code {code}.");
            self.state.events.push(NativeEvent::CloseRequested);
        }

        std::mem::take(&mut self.state.events)
    }

    fn cursor_position(&self) -> Point2D {
        self.state.pointer
    }

    fn client_size(&self) -> Size2D {
        match &self.state.window {
            Some(window) => {
                let size = window.inner_size();
                Size2D::new(size.width, size.height)
            }
            // Before the first pump the window does not exist yet; report
            // the requested size.
            None => Size2D::new(self.state.width, self.state.height),
        }
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        if let Some(window) = &self.state.window {
            window.set_cursor_visible(visible);
        }
        self.state.cursor_visible = visible;
    }

    fn cursor_visible(&self) -> bool {
        self.state.cursor_visible
    }

    fn surface_handle(&self) -> Option<SurfaceHandleRef> {
        self.state
            .window
            .clone()
            .map(|window| window as SurfaceHandleRef)
    }

    fn close(&mut self) {
        log::info!("Releasing winit window.");
        // Dropping the Window closes it; the event loop itself is dropped
        // with the backend.
        self.state.window = None;
    }
}
