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

//! # Rampart Core
//!
//! Foundational crate containing traits, core types, and interface contracts
//! that define the platform layer of the engine: typed input messages, the
//! native-window capability seam, the message-pumping window adapter, and
//! the static game-definition data model.

#![warn(missing_docs)]

pub mod event;
pub mod game;
pub mod input;
pub mod math;
pub mod platform;

pub use game::{GameCatalog, GameDefinition, GameId};
pub use input::GameMessage;
pub use platform::window::{GameWindow, PumpResult};
