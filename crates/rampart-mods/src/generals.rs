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

use rampart_core::game::{CallbackSetId, GameDefinition, GameId, RegistryKeyPath};
use std::sync::Arc;

/// The definition of Command & Conquer: Generals.
pub fn generals() -> Arc<GameDefinition> {
    Arc::new(GameDefinition::new(
        GameId::CncGenerals,
        "Command & Conquer (tm): Generals",
        None,
        CallbackSetId::Generals,
        "Install_Final.bmp",
        vec![RegistryKeyPath::new(
            r"SOFTWARE\Electronic Arts\EA Games\Generals",
            "InstallPath",
        )],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generals_is_a_base_game() {
        let definition = generals();
        assert_eq!(definition.id(), GameId::CncGenerals);
        assert!(definition.base_game().is_none());
        assert_eq!(definition.callback_set(), CallbackSetId::Generals);
    }
}
