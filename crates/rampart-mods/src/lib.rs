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

//! # Rampart Mods
//!
//! The concrete [`GameDefinition`]s for the supported titles, plus the
//! standard catalog the entry point constructs at startup. Registry path
//! lists are carried verbatim from the original titles' installers; an
//! external resolver tries them in declaration order.
//!
//! [`GameDefinition`]: rampart_core::game::GameDefinition

mod generals;
mod zero_hour;

pub use generals::generals;
pub use zero_hour::generals_zero_hour;

use rampart_core::game::{CatalogError, GameCatalog};

/// Builds the catalog of all supported titles.
///
/// Zero Hour is registered with Generals as its base game; both entries
/// share one Generals definition.
///
/// # Errors
/// Returns a [`CatalogError`] if a title is registered twice, which would
/// indicate a bug in this function.
pub fn standard_catalog() -> Result<GameCatalog, CatalogError> {
    let mut catalog = GameCatalog::new();

    let generals = generals();
    catalog.register(generals.clone())?;
    catalog.register(generals_zero_hour(generals))?;

    log::info!("Standard catalog built with {} definitions.", catalog.len());
    Ok(catalog)
}
