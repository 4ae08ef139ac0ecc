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

//! The static game-definition data model.
//!
//! A [`GameDefinition`] is an immutable descriptor of one supported title
//! or expansion: identity, display name, base-game linkage, the callback
//! set the UI layer should bind, and the ordered registry locations an
//! external resolver consults to find an installed copy. Definitions are
//! constructed once at startup and collected in a [`GameCatalog`] that the
//! entry point passes to consumers; there is no hidden global state.

mod catalog;
mod definition;

pub use catalog::{CatalogError, GameCatalog};
pub use definition::{CallbackSetId, GameDefinition, GameId, RegistryKeyPath};
