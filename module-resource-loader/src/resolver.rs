// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/*! Resolving resource names to byte streams.

The [ResourceResolver] searches a caller-supplied module table, or an
external module reached through a compressed embedded blob, for the
first entry whose path ends with a requested short name. External
modules are decompressed at most once per resolver instance and cached
by name for its lifetime.
*/

use {
    crate::{
        decompress::{DeflateModuleDecompressor, ModuleDecompressor},
        error::{ResourceLoaderError, Result},
    },
    module_packed_resources::Module,
    std::{collections::HashMap, io::Cursor, sync::Mutex},
};

/// A type constructible from raw resource bytes.
///
/// Per-type loading goes through [ResourceResolver::load], which fetches
/// the bytes once and hands them to this constructor. Call-site adapters
/// for concrete media types implement this trait.
pub trait LoadableResource: Sized {
    fn from_resource_data(data: Vec<u8>) -> anyhow::Result<Self>;
}

impl LoadableResource for Vec<u8> {
    fn from_resource_data(data: Vec<u8>) -> anyhow::Result<Self> {
        Ok(data)
    }
}

/// Resolves resource names against a caller module and its embedded
/// external modules.
///
/// The decompressed-module cache is owned by the instance. An entry is
/// never replaced or evicted, so a given external module name is
/// decompressed at most once per resolver. The get-or-create sequence
/// runs under a single lock, so concurrent first use of the same name
/// cannot inflate it twice.
pub struct ResourceResolver<'a, D = DeflateModuleDecompressor> {
    caller: &'a Module<'a>,
    decompressor: D,
    cache: Mutex<HashMap<String, Module<'static>>>,
}

impl<'a> ResourceResolver<'a> {
    /// Construct a resolver over `caller`'s resource table using DEFLATE
    /// decompression for embedded modules.
    pub fn new(caller: &'a Module<'a>) -> Self {
        Self::with_decompressor(caller, DeflateModuleDecompressor)
    }
}

impl<'a, D: ModuleDecompressor> ResourceResolver<'a, D> {
    /// Construct a resolver with a custom decompressor implementation.
    pub fn with_decompressor(caller: &'a Module<'a>, decompressor: D) -> Self {
        Self {
            caller,
            decompressor,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve a resource to a readable stream over its bytes.
    ///
    /// If `module_name` is non-empty, the search targets the external
    /// module embedded under that name, decompressing it on first use;
    /// if the external module cannot be materialized the search falls
    /// back to the caller's own table. An empty `module_name` searches
    /// the caller's table directly.
    ///
    /// The first entry whose path ends with `resource_name` wins; the
    /// comparison is case sensitive and an empty `resource_name` never
    /// matches. The returned stream owns its bytes.
    pub fn resolve(&self, resource_name: &str, module_name: &str) -> Result<Cursor<Vec<u8>>> {
        self.resolve_data(resource_name, module_name).map(Cursor::new)
    }

    /// Resolve a resource and construct a `T` from its bytes.
    pub fn load<T: LoadableResource>(&self, resource_name: &str, module_name: &str) -> Result<T> {
        let data = self.resolve_data(resource_name, module_name)?;

        T::from_resource_data(data)
            .map_err(|err| ResourceLoaderError::Construct(resource_name.to_string(), err))
    }

    /// Resolve a resource and construct a value with an ad-hoc factory.
    pub fn load_with<T, F>(
        &self,
        resource_name: &str,
        module_name: &str,
        constructor: F,
    ) -> Result<T>
    where
        F: FnOnce(Vec<u8>) -> anyhow::Result<T>,
    {
        let data = self.resolve_data(resource_name, module_name)?;

        constructor(data)
            .map_err(|err| ResourceLoaderError::Construct(resource_name.to_string(), err))
    }

    /// Whether an external module has already been decompressed into the
    /// cache.
    pub fn is_module_cached(&self, module_name: &str) -> bool {
        self.cache
            .lock()
            .expect("module cache lock poisoned")
            .contains_key(module_name)
    }

    fn resolve_data(&self, resource_name: &str, module_name: &str) -> Result<Vec<u8>> {
        // Holding the lock across decompression makes get-or-create
        // atomic: the same name is never inflated twice.
        let mut cache = self.cache.lock().expect("module cache lock poisoned");

        if !module_name.is_empty() && !cache.contains_key(module_name) {
            match self.decompressor.decompress(module_name, self.caller) {
                Ok(module) => {
                    cache.insert(module_name.to_string(), module);
                }
                Err(err) => {
                    // Not fatal. The search falls back to the caller's table.
                    log::error!("{}", err);
                }
            }
        }

        let module: &Module = match cache.get(module_name) {
            Some(module) => module,
            None => self.caller,
        };

        match module.find_by_suffix(resource_name) {
            Some(resource) => {
                log::debug!("resource '{}' loaded", resource_name);

                Ok(resource.data.to_vec())
            }
            None => {
                let err = ResourceLoaderError::ResourceNotFound(resource_name.to_string());
                log::error!("{}", err);

                Err(err)
            }
        }
    }
}
