// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Error type for this crate.
#[derive(Debug, Error)]
pub enum ResourceLoaderError {
    #[error("resource '{0}' not found (is it embedded in the module's resource table?)")]
    ResourceNotFound(String),

    #[error("compressed module '{0}' not found (was it compressed and embedded by the packing step?)")]
    ExternalModuleNotFound(String),

    #[error("decompressing module '{0}': {1}")]
    Decompression(String, std::io::Error),

    #[error("loading decompressed module '{0}': {1}")]
    ModuleLoad(String, &'static str),

    #[error("constructing resource '{0}': {1}")]
    Construct(String, anyhow::Error),
}

/// Result type for this crate.
pub type Result<T> = std::result::Result<T, ResourceLoaderError>;
