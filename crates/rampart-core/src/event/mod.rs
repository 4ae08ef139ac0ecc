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

//! Provides foundational primitives for event-driven communication.
//!
//! The primary component is the [`EventBus`], a generic FIFO channel used by
//! the window adapter to push translated input messages and window lifecycle
//! notifications to their subscribers. Keeping the bus generic lets
//! higher-level crates define their own event types without coupling.

mod bus;

pub use self::bus::EventBus;
