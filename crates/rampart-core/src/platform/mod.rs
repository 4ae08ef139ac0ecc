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

//! Provides abstractions over platform-specific functionalities.
//!
//! This module defines the capability interface a windowing backend must
//! expose ([`native::NativeWindow`]) and the backend-agnostic adapter that
//! turns raw native events into the engine's message stream
//! ([`window::GameWindow`]).

pub mod native;
pub mod window;

pub use native::{MouseButton, NativeEvent, NativeWindow, SurfaceHandle, SurfaceHandleRef};
pub use window::{ClientSizeChanged, GameWindow, MouseCursor, PumpResult};
