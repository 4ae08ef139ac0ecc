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

//! The Rampart runtime binary.
//!
//! Builds the game catalog, opens a window for the selected title, and
//! runs the message pump until the window is closed, tracing every input
//! message it delivers.

use anyhow::{Context, Result};
use rampart_core::game::GameId;
use rampart_core::platform::window::{GameWindow, PumpResult};
use rampart_mods::standard_catalog;
use rampart_platform::WinitWindowBuilder;
use std::time::Duration;

fn main() -> Result<()> {
    env_logger::init();

    let catalog = standard_catalog()?;
    for definition in catalog.iter() {
        log::info!(
            "Available title: {} (launcher image: {})",
            definition.display_name(),
            definition.launcher_image_path()
        );
        for path in definition.registry_paths() {
            log::debug!("  install lookup: {}\\{}", path.key, path.value_name);
        }
    }

    let definition = catalog
        .get(GameId::CncGeneralsZeroHour)
        .context("Zero Hour definition missing from the standard catalog")?;
    if let Some(base) = definition.base_game() {
        log::info!(
            "{} uses {} as its base game.",
            definition.display_name(),
            base.display_name()
        );
    }

    let native = WinitWindowBuilder::new()
        .with_title(definition.display_name())
        .with_dimensions(1024, 768)
        .build()
        .context("failed to create the native window backend")?;
    let mut window = GameWindow::attach(native);

    let messages = window.message_receiver();
    let size_changes = window.size_change_receiver();

    loop {
        match window.pump() {
            PumpResult::Stop => break,
            PumpResult::Continue => {
                for _ in size_changes.try_iter() {
                    log::debug!("Client size changed: {:?}", window.client_bounds());
                }
                for message in messages.try_iter() {
                    log::trace!("Input message: {message:?}");
                }
                // Pumping with a zero timeout never blocks; yield a little
                // so an idle window doesn't peg a core.
                std::thread::sleep(Duration::from_millis(1));
            }
        }
    }

    window.close();
    log::info!("Window closed; shutting down.");
    Ok(())
}
