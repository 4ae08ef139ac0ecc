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

use crate::game::definition::{GameDefinition, GameId};
use std::fmt;
use std::sync::Arc;

/// An error raised while assembling a [`GameCatalog`].
#[derive(Debug)]
pub enum CatalogError {
    /// A definition for this title was already registered.
    DuplicateDefinition {
        /// The title that was registered twice.
        id: GameId,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::DuplicateDefinition { id } => {
                write!(f, "A game definition for {id:?} is already registered")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// The process-wide collection of game definitions.
///
/// Built explicitly by the entry point and passed by reference to
/// consumers, preserving "exactly one definition per title" without
/// hidden global statics. Iteration order is registration order.
#[derive(Debug, Default)]
pub struct GameCatalog {
    definitions: Vec<Arc<GameDefinition>>,
}

impl GameCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            definitions: Vec::new(),
        }
    }

    /// Registers a definition.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateDefinition`] if a definition with
    /// the same [`GameId`] is already present.
    pub fn register(&mut self, definition: Arc<GameDefinition>) -> Result<(), CatalogError> {
        if self.definitions.iter().any(|d| d.id() == definition.id()) {
            return Err(CatalogError::DuplicateDefinition {
                id: definition.id(),
            });
        }
        log::info!(
            "Registered game definition: {} ({:?})",
            definition.display_name(),
            definition.id()
        );
        self.definitions.push(definition);
        Ok(())
    }

    /// Looks up the definition for a title.
    pub fn get(&self, id: GameId) -> Option<&Arc<GameDefinition>> {
        self.definitions.iter().find(|d| d.id() == id)
    }

    /// Iterates over all definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<GameDefinition>> {
        self.definitions.iter()
    }

    /// Returns the number of registered definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns `true` if no definition has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::definition::CallbackSetId;

    fn definition(id: GameId) -> Arc<GameDefinition> {
        Arc::new(GameDefinition::new(
            id,
            "Test Title",
            None,
            CallbackSetId::Generals,
            "splash.bmp",
            Vec::new(),
        ))
    }

    #[test]
    fn register_and_get() {
        let mut catalog = GameCatalog::new();
        catalog
            .register(definition(GameId::CncGenerals))
            .expect("first registration succeeds");

        assert_eq!(catalog.len(), 1);
        assert!(catalog.get(GameId::CncGenerals).is_some());
        assert!(catalog.get(GameId::CncGeneralsZeroHour).is_none());
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut catalog = GameCatalog::new();
        catalog
            .register(definition(GameId::CncGenerals))
            .expect("first registration succeeds");

        let err = catalog
            .register(definition(GameId::CncGenerals))
            .expect_err("duplicate must be rejected");
        match err {
            CatalogError::DuplicateDefinition { id } => assert_eq!(id, GameId::CncGenerals),
        }
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn iteration_follows_registration_order() {
        let mut catalog = GameCatalog::new();
        catalog
            .register(definition(GameId::CncGeneralsZeroHour))
            .expect("registration succeeds");
        catalog
            .register(definition(GameId::CncGenerals))
            .expect("registration succeeds");

        let ids: Vec<_> = catalog.iter().map(|d| d.id()).collect();
        assert_eq!(ids, vec![GameId::CncGeneralsZeroHour, GameId::CncGenerals]);
    }
}
