// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/*! Materializing external modules from compressed embedded blobs.

A module's serialized resource table can be DEFLATE-compressed and
embedded as a single entry inside another module's table, under a path
derived from the module name by [compressed_blob_path]. The
[DeflateModuleDecompressor] reverses that: locate the blob in the
caller's table, inflate it fully in memory, and parse the result back
into a module.

The producer side lives here too: [compress_module] builds the blob
payload and [embed_module] pairs it with its lookup path, ready to be
appended to a caller's table.
*/

use {
    crate::error::{ResourceLoaderError, Result},
    anyhow::Context,
    flate2::{read::DeflateDecoder, write::DeflateEncoder, Compression},
    module_packed_resources::{load_packed_module, write_packed_module, Module, Resource},
    std::{
        borrow::Cow,
        io::{Read, Write},
    },
};

/// Leading component of the path under which a compressed module is embedded.
pub const COMPRESSED_BLOB_PREFIX: &str = "packed";

/// Extension component identifying the serialized table inside the blob path.
pub const COMPRESSED_BLOB_EXTENSION: &str = "mpr";

/// Compute the resource path under which module `module_name`'s
/// compressed table is embedded in a caller's table.
///
/// The pattern is `<prefix>.<name>.<extension>.compressed`, lower-cased.
pub fn compressed_blob_path(module_name: &str) -> String {
    format!(
        "{}.{}.{}.compressed",
        COMPRESSED_BLOB_PREFIX, module_name, COMPRESSED_BLOB_EXTENSION
    )
    .to_lowercase()
}

/// Materializes an external module from a blob embedded in a caller's table.
///
/// This is a seam: the resolver only depends on this trait, so tests can
/// wrap the real implementation to observe how often it runs.
pub trait ModuleDecompressor {
    /// Locate the compressed blob for `module_name` in `caller`'s table
    /// and materialize it as an owned module.
    fn decompress(&self, module_name: &str, caller: &Module) -> Result<Module<'static>>;
}

/// Inflates DEFLATE-compressed packed module blobs.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeflateModuleDecompressor;

impl ModuleDecompressor for DeflateModuleDecompressor {
    fn decompress(&self, module_name: &str, caller: &Module) -> Result<Module<'static>> {
        let blob_path = compressed_blob_path(module_name);

        // The blob lives in the caller's own table, not the external module.
        let blob = caller
            .resources
            .iter()
            .find(|resource| resource.path.eq_ignore_ascii_case(&blob_path))
            .ok_or_else(|| {
                ResourceLoaderError::ExternalModuleNotFound(module_name.to_string())
            })?;

        let mut inflated = Vec::new();
        DeflateDecoder::new(blob.data.as_ref())
            .read_to_end(&mut inflated)
            .map_err(|err| ResourceLoaderError::Decompression(module_name.to_string(), err))?;

        let module = load_packed_module(&inflated)
            .map_err(|message| ResourceLoaderError::ModuleLoad(module_name.to_string(), message))?;

        Ok(module.into_owned())
    }
}

/// Serialize `module` and DEFLATE-compress the result, producing the
/// payload of an embeddable blob.
pub fn compress_module(module: &Module) -> anyhow::Result<Vec<u8>> {
    let mut packed = Vec::new();
    write_packed_module(module, &mut packed).context("serializing module")?;

    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&packed)
        .context("compressing serialized module")?;

    encoder.finish().context("finishing compression")
}

/// Produce the table entry embedding `module` inside another module's
/// table, pairing the compressed payload with its lookup path.
pub fn embed_module(module: &Module) -> anyhow::Result<Resource<'static>> {
    let data = compress_module(module)?;

    Ok(Resource {
        path: Cow::Owned(compressed_blob_path(&module.name)),
        data: Cow::Owned(data),
    })
}
