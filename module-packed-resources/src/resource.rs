// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::borrow::Cow;

/// Represents one entry in a module's resource table.
///
/// The data field is `Cow` and can either hold a borrowed reference into
/// a parsed buffer or owned data. This allows the use of a single type
/// both for zero-copy parsing and for long-lived cached instances.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resource<'a> {
    /// The full internal path identifying this entry within its module.
    pub path: Cow<'a, str>,

    /// The raw byte content of the entry.
    pub data: Cow<'a, [u8]>,
}

impl Resource<'_> {
    /// Convert to an instance owning all its data.
    pub fn into_owned(self) -> Resource<'static> {
        Resource {
            path: Cow::Owned(self.path.into_owned()),
            data: Cow::Owned(self.data.into_owned()),
        }
    }
}

/// A named, loadable unit exposing an ordered list of byte resources.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Module<'a> {
    /// The module name.
    pub name: Cow<'a, str>,

    /// Resource entries, in insertion order.
    pub resources: Vec<Resource<'a>>,
}

impl<'a> Module<'a> {
    /// Construct an empty module with the given name.
    pub fn new(name: impl Into<Cow<'a, str>>) -> Self {
        Self {
            name: name.into(),
            resources: Vec::new(),
        }
    }

    /// Append a resource entry to the table.
    pub fn add_resource(
        &mut self,
        path: impl Into<Cow<'a, str>>,
        data: impl Into<Cow<'a, [u8]>>,
    ) {
        self.resources.push(Resource {
            path: path.into(),
            data: data.into(),
        });
    }

    /// Find the first entry whose path ends with `name`.
    ///
    /// The comparison is byte-wise and case sensitive. An empty `name`
    /// never matches.
    pub fn find_by_suffix(&self, name: &str) -> Option<&Resource<'a>> {
        if name.is_empty() {
            return None;
        }

        self.resources
            .iter()
            .find(|resource| resource.path.ends_with(name))
    }

    /// Convert to an instance owning all its data.
    pub fn into_owned(self) -> Module<'static> {
        Module {
            name: Cow::Owned(self.name.into_owned()),
            resources: self
                .resources
                .into_iter()
                .map(|resource| resource.into_owned())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_module() -> Module<'static> {
        let mut module = Module::new("test");
        module.add_resource("resources.app.main.png", b"png".as_ref());
        module.add_resource("resources.app.main.ico", b"ico".as_ref());
        module.add_resource("resources.other.main.ico", b"ico2".as_ref());
        module
    }

    #[test]
    fn test_empty_name_never_matches() {
        let module = test_module();
        assert!(module.find_by_suffix("").is_none());
    }

    #[test]
    fn test_suffix_match_first_in_order() {
        let module = test_module();
        let resource = module.find_by_suffix("main.ico").unwrap();
        assert_eq!(resource.path, "resources.app.main.ico");
    }

    #[test]
    fn test_suffix_match_is_case_sensitive() {
        let module = test_module();
        assert!(module.find_by_suffix("Main.ico").is_none());
        assert!(module.find_by_suffix("main.png").is_some());
    }

    #[test]
    fn test_no_match() {
        let module = test_module();
        assert!(module.find_by_suffix("missing.png").is_none());
    }

    #[test]
    fn test_into_owned_preserves_content() {
        let module = test_module();
        let owned = module.clone().into_owned();
        assert_eq!(owned, module);
    }
}
