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

use crate::math::Point2D;

/// A translated input message, as delivered to the engine by the window
/// adapter.
///
/// This enum is backend-agnostic. Key codes are the platform's raw key
/// codes reinterpreted as integers; positions are in physical pixels
/// relative to the window's client area. Wheel deltas are the native delta
/// scaled by 100 and rounded, preserving sub-line precision as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMessage {
    /// A keyboard key was pressed.
    KeyDown {
        /// The platform key code.
        key: i32,
    },
    /// A keyboard key was released.
    KeyUp {
        /// The platform key code.
        key: i32,
    },
    /// The left mouse button was pressed.
    MouseLeftButtonDown {
        /// The last-known cursor position at translation time.
        position: Point2D,
    },
    /// The left mouse button was released.
    MouseLeftButtonUp {
        /// The last-known cursor position at translation time.
        position: Point2D,
    },
    /// The middle mouse button was pressed.
    MouseMiddleButtonDown {
        /// The last-known cursor position at translation time.
        position: Point2D,
    },
    /// The middle mouse button was released.
    MouseMiddleButtonUp {
        /// The last-known cursor position at translation time.
        position: Point2D,
    },
    /// The right mouse button was pressed.
    MouseRightButtonDown {
        /// The last-known cursor position at translation time.
        position: Point2D,
    },
    /// The right mouse button was released.
    MouseRightButtonUp {
        /// The last-known cursor position at translation time.
        position: Point2D,
    },
    /// The cursor moved to a new position.
    MouseMove {
        /// The position reported by the move event itself.
        position: Point2D,
    },
    /// The mouse wheel was scrolled.
    MouseWheel {
        /// The native wheel delta scaled by 100 and rounded.
        delta: i32,
    },
}

impl GameMessage {
    /// Returns the payload-free discriminant of this message.
    pub fn kind(&self) -> GameMessageKind {
        match self {
            GameMessage::KeyDown { .. } => GameMessageKind::KeyDown,
            GameMessage::KeyUp { .. } => GameMessageKind::KeyUp,
            GameMessage::MouseLeftButtonDown { .. } => GameMessageKind::MouseLeftButtonDown,
            GameMessage::MouseLeftButtonUp { .. } => GameMessageKind::MouseLeftButtonUp,
            GameMessage::MouseMiddleButtonDown { .. } => GameMessageKind::MouseMiddleButtonDown,
            GameMessage::MouseMiddleButtonUp { .. } => GameMessageKind::MouseMiddleButtonUp,
            GameMessage::MouseRightButtonDown { .. } => GameMessageKind::MouseRightButtonDown,
            GameMessage::MouseRightButtonUp { .. } => GameMessageKind::MouseRightButtonUp,
            GameMessage::MouseMove { .. } => GameMessageKind::MouseMove,
            GameMessage::MouseWheel { .. } => GameMessageKind::MouseWheel,
        }
    }
}

/// The discriminant of a [`GameMessage`], without its payload.
///
/// Useful for dispatch tables and assertions that only care about the
/// message kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMessageKind {
    /// See [`GameMessage::KeyDown`].
    KeyDown,
    /// See [`GameMessage::KeyUp`].
    KeyUp,
    /// See [`GameMessage::MouseLeftButtonDown`].
    MouseLeftButtonDown,
    /// See [`GameMessage::MouseLeftButtonUp`].
    MouseLeftButtonUp,
    /// See [`GameMessage::MouseMiddleButtonDown`].
    MouseMiddleButtonDown,
    /// See [`GameMessage::MouseMiddleButtonUp`].
    MouseMiddleButtonUp,
    /// See [`GameMessage::MouseRightButtonDown`].
    MouseRightButtonDown,
    /// See [`GameMessage::MouseRightButtonUp`].
    MouseRightButtonUp,
    /// See [`GameMessage::MouseMove`].
    MouseMove,
    /// See [`GameMessage::MouseWheel`].
    MouseWheel,
}
