// SPDX-License-Identifier: MPL-2.0

use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};

const ICON_SIZE: u16 = 16;

#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq)]
#[version = 1]
pub struct Config {
    pub toolbar_icon_size: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            toolbar_icon_size: ICON_SIZE,
        }
    }
}
