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

//! The capability interface between the window adapter and a concrete
//! windowing backend.
//!
//! Any backend (winit, SDL2, a test fake) can implement [`NativeWindow`] to
//! drive a [`GameWindow`](crate::platform::window::GameWindow). Delivery is
//! synchronous and single-threaded: the backend drains the OS queue only
//! when asked, on the caller's thread.

use crate::math::{Point2D, Size2D};
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use std::sync::Arc;

/// Combines the windowing handle traits required by graphics backends into
/// one object-safe trait.
pub trait SurfaceHandle: HasWindowHandle + HasDisplayHandle {}

impl<T: HasWindowHandle + HasDisplayHandle> SurfaceHandle for T {}

/// A shared, opaque handle to the native window surface, for interop with
/// renderers and other native consumers.
pub type SurfaceHandleRef = Arc<dyn SurfaceHandle + Send + Sync>;

/// A mouse button as reported by the native layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// The left mouse button.
    Left,
    /// The right mouse button.
    Right,
    /// The middle mouse button.
    Middle,
    /// The back mouse button (typically on the side).
    Back,
    /// The forward mouse button (typically on the side).
    Forward,
    /// Another mouse button, identified by a numeric code.
    Other(u16),
}

/// A raw event delivered by the native windowing backend during one poll.
///
/// These are untranslated with respect to engine semantics: key codes are
/// the platform's, wheel deltas are in native units, and button events
/// carry no position (the adapter fills that in from its cursor cache).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NativeEvent {
    /// A key went down.
    KeyDown {
        /// The platform key code.
        code: i32,
    },
    /// A key went up.
    KeyUp {
        /// The platform key code.
        code: i32,
    },
    /// A mouse button went down.
    MouseButtonDown {
        /// Which button went down.
        button: MouseButton,
    },
    /// A mouse button went up.
    MouseButtonUp {
        /// Which button went up.
        button: MouseButton,
    },
    /// The cursor moved within the client area.
    MouseMove {
        /// The new x-coordinate, in physical pixels.
        x: i32,
        /// The new y-coordinate, in physical pixels.
        y: i32,
    },
    /// The mouse wheel was scrolled.
    MouseWheel {
        /// The native wheel delta, in lines (may be fractional).
        delta: f32,
    },
    /// The window's client area was resized.
    Resized,
    /// The user asked the window to close.
    CloseRequested,
}

/// The windowing capability a backend exposes to the engine.
///
/// Implementations own exactly one native window. All methods are called
/// from the thread that pumps the window; no locking is required.
pub trait NativeWindow {
    /// Synchronously drains the OS event queue and returns the raw events
    /// in delivery order.
    fn poll_events(&mut self) -> Vec<NativeEvent>;

    /// Returns the pointer position as of the most recent
    /// [`poll_events`](NativeWindow::poll_events) call.
    fn cursor_position(&self) -> Point2D;

    /// Returns the current size of the window's client area.
    fn client_size(&self) -> Size2D;

    /// Shows or hides the cursor while it is over the window.
    fn set_cursor_visible(&mut self, visible: bool);

    /// Returns whether the cursor is currently shown over the window.
    fn cursor_visible(&self) -> bool;

    /// Returns an opaque handle to the window surface, if the backend has
    /// one. Headless test backends return `None`.
    fn surface_handle(&self) -> Option<SurfaceHandleRef>;

    /// Releases the native window. The adapter guarantees this is called at
    /// most once.
    fn close(&mut self);
}
