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

use std::sync::Arc;

/// Identifies a supported title or expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameId {
    /// Command & Conquer: Generals.
    CncGenerals,
    /// Command & Conquer: Generals — Zero Hour.
    CncGeneralsZeroHour,
}

/// Selects which title-specific window callback implementation the UI
/// layer binds for a definition.
///
/// This is a dispatch key only; the callback implementations themselves
/// live in the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackSetId {
    /// The Generals callback set.
    Generals,
    /// The Zero Hour callback set.
    GeneralsZeroHour,
}

/// One registry location to consult when resolving an install path.
///
/// Resolution (performed by an external component) tries each entry of a
/// definition's list in declaration order and takes the first that points
/// at an existing directory. `append_subpath`, when present, is joined
/// onto the value read from the registry before the existence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryKeyPath {
    /// The registry key, relative to HKLM.
    pub key: &'static str,
    /// The value name to read under the key.
    pub value_name: &'static str,
    /// An optional suffix joined onto the value that was read.
    pub append_subpath: Option<&'static str>,
}

impl RegistryKeyPath {
    /// Creates an entry with no subpath suffix.
    pub const fn new(key: &'static str, value_name: &'static str) -> Self {
        Self {
            key,
            value_name,
            append_subpath: None,
        }
    }

    /// Creates an entry whose resolved value gets `subpath` appended.
    pub const fn with_subpath(
        key: &'static str,
        value_name: &'static str,
        subpath: &'static str,
    ) -> Self {
        Self {
            key,
            value_name,
            append_subpath: Some(subpath),
        }
    }
}

/// An immutable descriptor of one supported title.
///
/// Constructed once at startup, registered in a
/// [`GameCatalog`](crate::game::GameCatalog), and never mutated. An
/// expansion shares its base game by reference; the base is itself a
/// catalog-owned definition, never deallocated by the expansion.
#[derive(Debug)]
pub struct GameDefinition {
    id: GameId,
    display_name: &'static str,
    base_game: Option<Arc<GameDefinition>>,
    callback_set: CallbackSetId,
    launcher_image_path: &'static str,
    registry_paths: Vec<RegistryKeyPath>,
}

impl GameDefinition {
    /// Creates a definition. Construction cannot fail; every field is a
    /// compile-time-known literal supplied by a mod crate.
    pub fn new(
        id: GameId,
        display_name: &'static str,
        base_game: Option<Arc<GameDefinition>>,
        callback_set: CallbackSetId,
        launcher_image_path: &'static str,
        registry_paths: Vec<RegistryKeyPath>,
    ) -> Self {
        Self {
            id,
            display_name,
            base_game,
            callback_set,
            launcher_image_path,
            registry_paths,
        }
    }

    /// The title this definition describes.
    pub fn id(&self) -> GameId {
        self.id
    }

    /// The human-readable name shown in launcher UI.
    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// The base game this expansion builds on, if any.
    pub fn base_game(&self) -> Option<&Arc<GameDefinition>> {
        self.base_game.as_ref()
    }

    /// Which callback set the UI layer binds for this title.
    pub fn callback_set(&self) -> CallbackSetId {
        self.callback_set
    }

    /// The launcher splash image, relative to the install directory.
    /// Not validated here.
    pub fn launcher_image_path(&self) -> &'static str {
        self.launcher_image_path
    }

    /// The registry locations to try, in order. The order is semantic:
    /// index 0 is consulted before index 1, and so on.
    pub fn registry_paths(&self) -> &[RegistryKeyPath] {
        &self.registry_paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_path_order_is_preserved() {
        let definition = GameDefinition::new(
            GameId::CncGenerals,
            "Test Title",
            None,
            CallbackSetId::Generals,
            "splash.bmp",
            vec![
                RegistryKeyPath::new("SOFTWARE\\First", "InstallPath"),
                RegistryKeyPath::with_subpath("SOFTWARE\\Second", "Install Dir", "Sub\\"),
            ],
        );

        let paths = definition.registry_paths();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].key, "SOFTWARE\\First");
        assert_eq!(paths[0].append_subpath, None);
        assert_eq!(paths[1].value_name, "Install Dir");
        assert_eq!(paths[1].append_subpath, Some("Sub\\"));
    }

    #[test]
    fn base_game_is_shared_not_copied() {
        let base = Arc::new(GameDefinition::new(
            GameId::CncGenerals,
            "Base",
            None,
            CallbackSetId::Generals,
            "splash.bmp",
            Vec::new(),
        ));
        let expansion = GameDefinition::new(
            GameId::CncGeneralsZeroHour,
            "Expansion",
            Some(base.clone()),
            CallbackSetId::GeneralsZeroHour,
            "splash.bmp",
            Vec::new(),
        );

        let linked = expansion.base_game().expect("expansion has a base");
        assert!(Arc::ptr_eq(linked, &base));
    }
}
