// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/*! Parsing of packed module resources data blobs. */

use {
    crate::{resource::Resource, Module, HEADER_V1},
    byteorder::{LittleEndian, ReadBytesExt},
    std::{borrow::Cow, io::Cursor},
};

/// Advance the reader past `length` bytes and return them as a slice of
/// the original buffer.
fn take_slice<'a>(
    data: &'a [u8],
    reader: &mut Cursor<&'a [u8]>,
    length: usize,
) -> Result<&'a [u8], &'static str> {
    let start = reader.position() as usize;
    let end = start
        .checked_add(length)
        .ok_or("field length overflows buffer")?;

    if end > data.len() {
        return Err("unexpected end of data");
    }

    reader.set_position(end as u64);

    Ok(&data[start..end])
}

fn take_str<'a>(
    data: &'a [u8],
    reader: &mut Cursor<&'a [u8]>,
    length: usize,
    error: &'static str,
) -> Result<&'a str, &'static str> {
    std::str::from_utf8(take_slice(data, reader, length)?).map_err(|_| error)
}

/// Parse packed module resources data into a [Module].
///
/// The returned module borrows the passed buffer: resource paths and
/// payloads are slices into `data`. Use [Module::into_owned] to detach
/// the result from the buffer's lifetime.
pub fn load_packed_module(data: &[u8]) -> Result<Module<'_>, &'static str> {
    if data.len() < HEADER_V1.len() {
        return Err("error reading 8 byte header");
    }

    let header = &data[0..HEADER_V1.len()];
    if header != HEADER_V1 {
        return Err("unrecognized file format");
    }

    let mut reader = Cursor::new(data);
    reader.set_position(HEADER_V1.len() as u64);

    let name_length = reader
        .read_u16::<LittleEndian>()
        .map_err(|_| "failed reading module name length")? as usize;
    let name = take_str(data, &mut reader, name_length, "module name is not utf-8")?;

    let resources_count = reader
        .read_u32::<LittleEndian>()
        .map_err(|_| "failed reading resources count")? as usize;

    let mut resources = Vec::with_capacity(resources_count);

    for _ in 0..resources_count {
        let path_length = reader
            .read_u16::<LittleEndian>()
            .map_err(|_| "failed reading resource path length")?
            as usize;
        let path = take_str(data, &mut reader, path_length, "resource path is not utf-8")?;

        let data_length = reader
            .read_u64::<LittleEndian>()
            .map_err(|_| "failed reading resource data length")? as usize;
        let payload = take_slice(data, &mut reader, data_length)?;

        resources.push(Resource {
            path: Cow::Borrowed(path),
            data: Cow::Borrowed(payload),
        });
    }

    if reader.position() as usize != data.len() {
        return Err("trailing data after final resource");
    }

    Ok(Module {
        name: Cow::Borrowed(name),
        resources,
    })
}
