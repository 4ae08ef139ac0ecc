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

//! The engine's typed input message model.
//!
//! Messages are produced by the window adapter and consumed by the game
//! loop; each variant carries its own strongly-typed payload, so there is
//! no implicit argument-arity contract between producer and consumer.

mod message;

pub use message::{GameMessage, GameMessageKind};
