//! Identifier newtypes and generation.
//!
//! Every identifier is an opaque string. Ids are drawn from a random source
//! and are never derived from a name or a position, so they stay valid while
//! the thing they name is renamed, moved or reordered.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::VizTypesError;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
        )]
        #[serde(transparent)]
        #[ts(export)]
        pub struct $name(String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// A unique id for a file within a viz. Survives renames.
    VizFileId
}

string_id! {
    /// Identifies a viz. Shared between the viz's info record and its
    /// content record.
    ///
    /// By convention a UUID v4 with the dashes removed, which keeps it easy to
    /// copy out of a URL.
    VizId
}

string_id! {
    /// A unique id for a chat.
    VizChatId
}

string_id! {
    /// A unique id for a chat message.
    VizChatMessageId
}

impl VizId {
    /// Parse the id back into a UUID. Accepts any textual UUID form, so ids
    /// written with dashes by older clients still resolve.
    pub fn to_uuid(&self) -> Result<Uuid, VizTypesError> {
        Ok(Uuid::try_parse(&self.0)?)
    }
}

impl From<Uuid> for VizId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid.simple().to_string())
    }
}

/// 128 random bits as 32 lowercase hex characters. Safe to embed in a URL
/// path segment as-is.
fn random_hex() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Generate a fresh file id.
///
/// No check against existing ids is made: with 122 random bits the chance of
/// two files in one viz colliding is negligible.
pub fn generate_viz_file_id() -> VizFileId {
    VizFileId(random_hex())
}

pub fn generate_viz_chat_id() -> VizChatId {
    VizChatId(random_hex())
}

pub fn generate_viz_chat_message_id() -> VizChatMessageId {
    VizChatMessageId(random_hex())
}

pub fn generate_viz_id() -> VizId {
    VizId::from(Uuid::new_v4())
}
