// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/*! Module Resource Loader

This crate retrieves embedded binary resources from a module's packed
resource table (see the `module-packed-resources` crate for the table
format). Lookup is by suffix: the first table entry whose full path ends
with the requested short name wins.

Resources can also live in an *external module*: a second resource table
that was serialized, DEFLATE-compressed, and embedded as a single blob
inside the caller's own table under a well-known path
(`packed.<name>.mpr.compressed`). When a lookup names an external module,
the [resolver::ResourceResolver] inflates that blob once, caches the
materialized module for the lifetime of the resolver, and searches it
instead of the caller's table. A missing or corrupt blob is not fatal:
the lookup falls back to the caller's own table.

Diagnostics are emitted through the `log` facade at debug level for
successful loads and error level for every failure class. Without an
installed logger they are silently dropped.
*/

pub mod decompress;
pub mod error;
pub mod resolver;

pub use crate::{
    decompress::{
        compress_module, compressed_blob_path, embed_module, DeflateModuleDecompressor,
        ModuleDecompressor,
    },
    error::{ResourceLoaderError, Result},
    resolver::{LoadableResource, ResourceResolver},
};
