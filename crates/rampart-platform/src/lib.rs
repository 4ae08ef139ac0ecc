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

//! # Rampart Platform
//!
//! Concrete implementations of the platform seams declared in
//! `rampart-core`: a `winit`-backed [`NativeWindow`] and the translation
//! from raw `winit` events into the engine's backend-agnostic
//! [`NativeEvent`] form.
//!
//! [`NativeWindow`]: rampart_core::platform::native::NativeWindow
//! [`NativeEvent`]: rampart_core::platform::native::NativeEvent

pub mod input;
pub mod window;

pub use input::translate_window_event;
pub use window::{WinitWindow, WinitWindowBuilder};
