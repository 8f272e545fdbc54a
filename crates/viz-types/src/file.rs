//! Files and file collections.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

use crate::ids::{VizFileId, generate_viz_file_id};

/// A file with `name` and `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VizFile {
    /// The file name, e.g. `"index.html"`.
    pub name: String,
    /// The text content, e.g. `"<body>Hello</body>"`.
    pub text: String,
}

impl VizFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// A plain collection of files keyed by file name, for callers that have no
/// use for stable ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct FileCollection(HashMap<String, String>);

/// The files of a viz, keyed by [`VizFileId`].
///
/// Keys are neither file names nor array indices. A rename edits the
/// [`VizFile`] under the same key and a delete removes one key, so
/// concurrent edits from other collaborators still land on the right file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct VizFiles(HashMap<VizFileId, VizFile>);

impl VizFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: &VizFileId) -> Option<&VizFile> {
        self.0.get(id)
    }

    pub fn get_mut(&mut self, id: &VizFileId) -> Option<&mut VizFile> {
        self.0.get_mut(id)
    }

    pub fn contains(&self, id: &VizFileId) -> bool {
        self.0.contains_key(id)
    }

    /// Insert under a caller-chosen id, returning the file it replaced.
    pub fn insert(&mut self, id: VizFileId, file: VizFile) -> Option<VizFile> {
        self.0.insert(id, file)
    }

    /// Insert under a freshly generated id.
    pub fn insert_new(&mut self, file: VizFile) -> VizFileId {
        let id = generate_viz_file_id();
        self.0.insert(id.clone(), file);
        id
    }

    pub fn remove(&mut self, id: &VizFileId) -> Option<VizFile> {
        self.0.remove(id)
    }

    /// Rename in place. The id does not change. Returns `false` if there is
    /// no file with this id.
    pub fn rename(&mut self, id: &VizFileId, new_name: impl Into<String>) -> bool {
        match self.0.get_mut(id) {
            Some(file) => {
                file.name = new_name.into();
                true
            }
            None => false,
        }
    }

    /// Find a file by name. With duplicate names the lowest id wins, so the
    /// answer does not depend on map iteration order.
    pub fn find_by_name(&self, name: &str) -> Option<(&VizFileId, &VizFile)> {
        self.0
            .iter()
            .filter(|(_, file)| file.name == name)
            .min_by(|(a, _), (b, _)| a.cmp(b))
    }

    pub fn file_text(&self, name: &str) -> Option<&str> {
        self.find_by_name(name).map(|(_, file)| file.text.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VizFileId, &VizFile)> {
        self.0.iter()
    }

    /// Files in display order: by name, then by id.
    pub fn sorted_by_name(&self) -> Vec<(&VizFileId, &VizFile)> {
        let mut files: Vec<_> = self.0.iter().collect();
        files.sort_by(|(a_id, a), (b_id, b)| a.name.cmp(&b.name).then_with(|| a_id.cmp(b_id)));
        files
    }

    /// Drop the ids, keying by name instead.
    ///
    /// Two files sharing a name cannot both be represented. The one with the
    /// lowest id is kept and the other is logged and dropped.
    pub fn to_file_collection(&self) -> FileCollection {
        let mut by_id: Vec<_> = self.0.iter().collect();
        by_id.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut collection = HashMap::with_capacity(by_id.len());
        for (id, file) in by_id {
            match collection.entry(file.name.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(file.text.clone());
                }
                Entry::Occupied(_) => {
                    warn!(file_id = %id, name = %file.name, "dropping file with duplicate name");
                }
            }
        }
        FileCollection(collection)
    }

    /// Give every file in the collection a fresh id.
    pub fn from_file_collection(collection: &FileCollection) -> Self {
        collection
            .iter()
            .map(|(name, text)| (generate_viz_file_id(), VizFile::new(name, text)))
            .collect()
    }
}

impl FromIterator<(VizFileId, VizFile)> for VizFiles {
    fn from_iter<I: IntoIterator<Item = (VizFileId, VizFile)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for VizFiles {
    type Item = (VizFileId, VizFile);
    type IntoIter = std::collections::hash_map::IntoIter<VizFileId, VizFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FileCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), text.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, text)| (name.as_str(), text.as_str()))
    }
}

impl<N: Into<String>, T: Into<String>> FromIterator<(N, T)> for FileCollection {
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, text)| (name.into(), text.into()))
                .collect(),
        )
    }
}
