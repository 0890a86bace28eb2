// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/*! Serializing module resource tables to packed data blobs. */

use {
    crate::{Module, HEADER_V1},
    anyhow::{anyhow, Context, Result},
    byteorder::{LittleEndian, WriteBytesExt},
    std::io::Write,
};

/// Serialize a [Module] to the version 1 packed format.
///
/// The output is the exact inverse of what
/// [crate::load_packed_module] parses.
pub fn write_packed_module<W: Write>(module: &Module, dest: &mut W) -> Result<()> {
    dest.write_all(HEADER_V1).context("writing header")?;

    let name_length = u16::try_from(module.name.len())
        .map_err(|_| anyhow!("module name too long: {}", module.name))?;
    dest.write_u16::<LittleEndian>(name_length)
        .context("writing module name length")?;
    dest.write_all(module.name.as_bytes())
        .context("writing module name")?;

    let resources_count = u32::try_from(module.resources.len())
        .map_err(|_| anyhow!("too many resources in module {}", module.name))?;
    dest.write_u32::<LittleEndian>(resources_count)
        .context("writing resources count")?;

    for resource in &module.resources {
        let path_length = u16::try_from(resource.path.len())
            .map_err(|_| anyhow!("resource path too long: {}", resource.path))?;
        dest.write_u16::<LittleEndian>(path_length)
            .context("writing resource path length")?;
        dest.write_all(resource.path.as_bytes())
            .context("writing resource path")?;

        dest.write_u64::<LittleEndian>(resource.data.len() as u64)
            .context("writing resource data length")?;
        dest.write_all(&resource.data)
            .context("writing resource data")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_empty() -> Result<()> {
        let module = Module::new("");

        let mut data = Vec::new();
        write_packed_module(&module, &mut data)?;

        let mut expected: Vec<u8> = b"modpack\x01".to_vec();
        // Module name length.
        expected.write_u16::<LittleEndian>(0)?;
        // Number of resources.
        expected.write_u32::<LittleEndian>(0)?;

        assert_eq!(data, expected);

        Ok(())
    }

    #[test]
    fn test_write_single_resource() -> Result<()> {
        let mut module = Module::new("foo");
        module.add_resource("resources.a.png", b"payload".as_ref());

        let mut data = Vec::new();
        write_packed_module(&module, &mut data)?;

        let mut expected: Vec<u8> = b"modpack\x01".to_vec();
        expected.write_u16::<LittleEndian>(b"foo".len() as u16)?;
        expected.write_all(b"foo")?;
        expected.write_u32::<LittleEndian>(1)?;
        expected.write_u16::<LittleEndian>(b"resources.a.png".len() as u16)?;
        expected.write_all(b"resources.a.png")?;
        expected.write_u64::<LittleEndian>(b"payload".len() as u64)?;
        expected.write_all(b"payload")?;

        assert_eq!(data, expected);

        Ok(())
    }

    #[test]
    fn test_write_name_too_long() {
        let module = Module::new("x".repeat(usize::from(u16::MAX) + 1));

        let mut data = Vec::new();
        let res = write_packed_module(&module, &mut data);
        assert!(res.is_err());
    }
}
