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

/// The definition of Command & Conquer: Generals — Zero Hour.
///
/// `base` is the Generals definition the expansion builds on; the caller
/// (normally [`standard_catalog`](crate::standard_catalog)) supplies the
/// same instance it registers for Generals itself.
pub fn generals_zero_hour(base: Arc<GameDefinition>) -> Arc<GameDefinition> {
    Arc::new(GameDefinition::new(
        GameId::CncGeneralsZeroHour,
        "Command & Conquer (tm): Generals - Zero Hour",
        Some(base),
        CallbackSetId::GeneralsZeroHour,
        "Install_Final.bmp",
        // Tried in order; the First Decade compilation release first, then
        // the standalone releases.
        vec![
            RegistryKeyPath::new(
                r"SOFTWARE\Electronic Arts\EA Games\Command and Conquer The First Decade",
                "zh_folder",
            ),
            RegistryKeyPath::new(
                r"SOFTWARE\Electronic Arts\EA Games\Command and Conquer Generals Zero Hour",
                "InstallPath",
            ),
            RegistryKeyPath::with_subpath(
                r"SOFTWARE\EA Games\Command and Conquer Generals Zero Hour",
                "Install Dir",
                "Command and Conquer Generals Zero Hour\\",
            ),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generals;

    #[test]
    fn registry_paths_keep_declaration_order() {
        let definition = generals_zero_hour(generals());
        let paths = definition.registry_paths();

        assert_eq!(paths.len(), 3);
        assert_eq!(
            paths[0].key,
            r"SOFTWARE\Electronic Arts\EA Games\Command and Conquer The First Decade"
        );
        assert_eq!(paths[0].value_name, "zh_folder");
        assert_eq!(paths[0].append_subpath, None);
        assert_eq!(
            paths[1].key,
            r"SOFTWARE\Electronic Arts\EA Games\Command and Conquer Generals Zero Hour"
        );
        assert_eq!(paths[1].value_name, "InstallPath");
        assert_eq!(
            paths[2].append_subpath,
            Some("Command and Conquer Generals Zero Hour\\")
        );
    }

    #[test]
    fn display_name_and_launcher_image_are_verbatim() {
        let definition = generals_zero_hour(generals());
        assert_eq!(
            definition.display_name(),
            "Command & Conquer (tm): Generals - Zero Hour"
        );
        assert_eq!(definition.launcher_image_path(), "Install_Final.bmp");
    }
}
