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

//! The backend-agnostic window adapter.
//!
//! [`GameWindow`] wraps a [`NativeWindow`] backend and presents the engine
//! with a pumpable stream of translated [`GameMessage`]s plus window
//! lifecycle notifications. All work happens synchronously on the thread
//! that calls [`GameWindow::pump`], typically once per frame.

use crate::event::EventBus;
use crate::input::GameMessage;
use crate::math::{Point2D, Rectangle};
use crate::platform::native::{MouseButton, NativeEvent, NativeWindow, SurfaceHandleRef};
use std::collections::VecDeque;

/// The outcome of one pump call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpResult {
    /// The window is still live; keep pumping.
    Continue,
    /// The window is closing; stop pumping.
    Stop,
}

/// Notification that the window's client area changed size.
///
/// Carries no payload; observers re-query
/// [`GameWindow::client_bounds`] for the new size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientSizeChanged;

/// A cursor shape, for [`GameWindow::set_cursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseCursor {
    /// The default arrow cursor.
    #[default]
    Arrow,
    /// A pointing hand, for clickable UI.
    Hand,
    /// An I-beam text cursor.
    Text,
    /// A busy/wait cursor.
    Wait,
}

/// Owns a native window and translates its raw events into the engine's
/// typed message stream.
///
/// Lifecycle: created, then repeatedly pumped ([`PumpResult::Continue`])
/// until a close request flips it to closing ([`PumpResult::Stop`]), then
/// closed. There is no transition back from closing to running.
pub struct GameWindow<N: NativeWindow> {
    native: N,
    pending: VecDeque<GameMessage>,
    closing: bool,
    closed: bool,
    last_cursor: Point2D,
    messages: EventBus<GameMessage>,
    size_changes: EventBus<ClientSizeChanged>,
}

impl<N: NativeWindow> GameWindow<N> {
    /// Wraps an existing native window in an adapter.
    ///
    /// This is also the embedding path: a host that already owns a backend
    /// instance hands it over here. Creating a fresh top-level window is
    /// the backend builder's job.
    pub fn attach(native: N) -> Self {
        log::info!("Window adapter attached to native backend.");
        Self {
            native,
            pending: VecDeque::new(),
            closing: false,
            closed: false,
            last_cursor: Point2D::ZERO,
            messages: EventBus::new(),
            size_changes: EventBus::new(),
        }
    }

    /// Drains native events, translates them, and delivers the resulting
    /// messages to subscribers.
    ///
    /// Order of operations, which is observable and load-bearing:
    ///
    /// 1. Poll the backend; translate each raw event in delivery order.
    ///    Button messages take their position from the cursor cache.
    /// 2. Update the cursor cache from the backend's pointer snapshot.
    ///    Because this happens *after* translation, button messages carry
    ///    the previous pump's snapshot, one pump behind the true position
    ///    at click time. This matches the original engine's behavior;
    ///    do not reorder.
    /// 3. If a close was requested, return [`PumpResult::Stop`] without
    ///    delivering anything; queued messages stay queued.
    /// 4. Otherwise drain the queue FIFO, publishing one message each, and
    ///    return [`PumpResult::Continue`].
    pub fn pump(&mut self) -> PumpResult {
        let events = self.native.poll_events();
        for event in events {
            self.translate(event);
        }

        self.last_cursor = self.native.cursor_position();

        if self.closing || self.closed {
            return PumpResult::Stop;
        }

        while let Some(message) = self.pending.pop_front() {
            self.messages.publish(message);
        }

        PumpResult::Continue
    }

    fn translate(&mut self, event: NativeEvent) {
        match event {
            NativeEvent::KeyDown { code } => {
                self.pending.push_back(GameMessage::KeyDown { key: code });
            }
            NativeEvent::KeyUp { code } => {
                self.pending.push_back(GameMessage::KeyUp { key: code });
            }
            NativeEvent::MouseButtonDown { button } => {
                if let Some(message) = self.button_down_message(button) {
                    self.pending.push_back(message);
                }
            }
            NativeEvent::MouseButtonUp { button } => {
                if let Some(message) = self.button_up_message(button) {
                    self.pending.push_back(message);
                }
            }
            NativeEvent::MouseMove { x, y } => {
                self.pending.push_back(GameMessage::MouseMove {
                    position: Point2D::new(x, y),
                });
            }
            NativeEvent::MouseWheel { delta } => {
                self.pending.push_back(GameMessage::MouseWheel {
                    delta: (delta * 100.0).round() as i32,
                });
            }
            NativeEvent::Resized => {
                // Raised immediately, not queued: observers re-query
                // client_bounds(), so there is no payload to order.
                self.size_changes.publish(ClientSizeChanged);
            }
            NativeEvent::CloseRequested => {
                log::debug!("Close requested; window entering closing state.");
                self.closing = true;
            }
        }
    }

    fn button_down_message(&self, button: MouseButton) -> Option<GameMessage> {
        let position = self.last_cursor;
        match button {
            MouseButton::Left => Some(GameMessage::MouseLeftButtonDown { position }),
            MouseButton::Middle => Some(GameMessage::MouseMiddleButtonDown { position }),
            MouseButton::Right => Some(GameMessage::MouseRightButtonDown { position }),
            // Extra buttons produce no message. Not an error.
            _ => None,
        }
    }

    fn button_up_message(&self, button: MouseButton) -> Option<GameMessage> {
        let position = self.last_cursor;
        match button {
            MouseButton::Left => Some(GameMessage::MouseLeftButtonUp { position }),
            MouseButton::Middle => Some(GameMessage::MouseMiddleButtonUp { position }),
            MouseButton::Right => Some(GameMessage::MouseRightButtonUp { position }),
            _ => None,
        }
    }

    /// Subscribes to the translated input message stream.
    ///
    /// Messages arrive in enqueue order, one per translated event, during
    /// step 4 of [`pump`](GameWindow::pump).
    pub fn message_receiver(&self) -> flume::Receiver<GameMessage> {
        self.messages.receiver().clone()
    }

    /// Subscribes to client-size-changed notifications.
    pub fn size_change_receiver(&self) -> flume::Receiver<ClientSizeChanged> {
        self.size_changes.receiver().clone()
    }

    /// Returns the client area as a rectangle anchored at `(0, 0)`.
    ///
    /// On-screen position is not tracked, only size.
    pub fn client_bounds(&self) -> Rectangle {
        Rectangle::from_size(self.native.client_size())
    }

    /// Returns whether the cursor is shown over the window.
    pub fn is_mouse_visible(&self) -> bool {
        self.native.cursor_visible()
    }

    /// Shows or hides the cursor over the window.
    pub fn set_mouse_visible(&mut self, visible: bool) {
        self.native.set_cursor_visible(visible);
    }

    /// Sets the cursor shape.
    ///
    /// Currently inert: the original engine never implemented cursor
    /// shapes at this layer either, and we preserve that gap explicitly
    /// rather than guess at intended behavior.
    pub fn set_cursor(&mut self, cursor: MouseCursor) {
        // TODO: map MouseCursor onto the backend once a shape API exists
        // on the NativeWindow trait.
        log::debug!("set_cursor({cursor:?}) is not implemented; ignoring.");
    }

    /// Returns an opaque handle to the native surface for interop, if the
    /// backend has one.
    pub fn surface_handle(&self) -> Option<SurfaceHandleRef> {
        self.native.surface_handle()
    }

    /// Returns `true` once a close has been requested or performed.
    pub fn is_closing(&self) -> bool {
        self.closing || self.closed
    }

    /// Releases the native window.
    ///
    /// Idempotent: calling it again (or dropping the adapter afterwards)
    /// does nothing.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        log::info!("Closing native window.");
        self.native.close();
        self.closed = true;
    }

    /// Borrows the underlying backend.
    pub fn native(&self) -> &N {
        &self.native
    }
}

impl<N: NativeWindow> Drop for GameWindow<N> {
    fn drop(&mut self) {
        self.close();
    }
}
