//! The versionable content snapshot of a viz.

use std::fmt;

use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};
use ts_rs::TS;

use crate::chat::VizChats;
use crate::file::VizFiles;
use crate::ids::VizId;

/// Height in pixels used when a viz has not customized it.
pub const DEFAULT_VIZ_HEIGHT: f64 = 500.0;

/// An SPDX license identifier, e.g. `"MIT"` or `"Apache-2.0"`. Not validated.
///
/// See the "Identifier" column of <https://spdx.org/licenses/>.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct VizLicense(String);

impl VizLicense {
    pub fn new(spdx_id: impl Into<String>) -> Self {
        Self(spdx_id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VizLicense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The content of a viz.
///
/// Optional fields are absent until the user customizes them. Absent means
/// "use the default", which is not the same as a stored value that happens
/// to equal the default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VizContent {
    /// The viz this content belongs to. Same as the id of its info record.
    pub id: VizId,

    pub files: VizFiles,

    /// Same as the info record's title, tracked here so restoring an old
    /// version restores its old title too.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub title: Option<String>,

    /// Customized height in pixels. Must be finite to encode.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_finite_height"
    )]
    #[ts(optional)]
    pub height: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub license: Option<VizLicense>,

    /// `true` while the user drives an interactive code widget (e.g.
    /// Alt+drag). Hot reloading is throttled while set and debounced
    /// otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub is_interacting: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub chats: Option<VizChats>,
}

impl VizContent {
    /// Empty content with every optional field unset.
    pub fn new(id: VizId) -> Self {
        Self {
            id,
            files: VizFiles::new(),
            title: None,
            height: None,
            license: None,
            is_interacting: None,
            chats: None,
        }
    }

    pub fn effective_height(&self) -> f64 {
        self.height.unwrap_or(DEFAULT_VIZ_HEIGHT)
    }

    /// The customized license, if any. There is no default license.
    pub fn effective_license(&self) -> Option<&str> {
        self.license.as_ref().map(VizLicense::as_str)
    }

    pub fn is_interacting(&self) -> bool {
        self.is_interacting.unwrap_or(false)
    }

    pub fn file_text(&self, name: &str) -> Option<&str> {
        self.files.file_text(name)
    }

    /// The chat map, created empty on first use.
    pub fn chats_mut(&mut self) -> &mut VizChats {
        self.chats.get_or_insert_with(VizChats::new)
    }
}

/// JSON has no NaN or infinity; `serde_json` would write `null`, which reads
/// back as an unset height.
fn serialize_finite_height<S: Serializer>(
    height: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match height {
        Some(h) if !h.is_finite() => Err(S::Error::custom(format!(
            "height must be a finite number of pixels, got {h}"
        ))),
        _ => height.serialize(serializer),
    }
}
