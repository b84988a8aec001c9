// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

mod defaults;
mod loader;

pub use defaults::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
pub use loader::{ENV_PREFIX, get_default_config, load_configuration, write_config_to};
