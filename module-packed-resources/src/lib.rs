// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/*! Packed Module Resources

This crate defines and implements a data format for storing a module's
resource table as a single binary blob. We call this data format *packed
module resources*.

A producer collects the resources belonging to a module - each a full
internal path plus raw byte content - and serializes them, together with
the module name, into one buffer. A consumer parses that buffer back into
a [Module] whose resource entries borrow from the input data, so parsing
a large table does not copy every payload.

The format is deliberately simple: a versioned magic header, the module
name, then the ordered list of resource entries. See [parser] and
[writer] for the exact layout.
*/

mod parser;
mod resource;
mod writer;

pub use crate::{
    parser::load_packed_module,
    resource::{Module, Resource},
    writer::write_packed_module,
};

/// Magic header identifying version 1 of the packed module format.
pub const HEADER_V1: &[u8] = b"modpack\x01";
