//! viz-types
//!
//! Shared data shapes for a viz: its files, its AI chats, and the versioned
//! content snapshot that ties them together. Consumed by the editor frontend
//! (through the generated TypeScript declarations) and by the persistence and
//! collaboration backends (through serde).
//!
//! Collections are maps keyed by generated identifiers, never by file names
//! or positions, so renames and deletes made concurrently by different
//! editors always refer to the same entry.

pub mod chat;
pub mod codec;
pub mod content;
pub mod error;
pub mod file;
pub mod ids;
pub mod timestamp;

pub use chat::{VizChat, VizChatMessage, VizChatMessageRole, VizChats};
pub use content::{DEFAULT_VIZ_HEIGHT, VizContent, VizLicense};
pub use error::VizTypesError;
pub use file::{FileCollection, VizFile, VizFiles};
pub use ids::{
    VizChatId, VizChatMessageId, VizFileId, VizId, generate_viz_chat_id,
    generate_viz_chat_message_id, generate_viz_file_id, generate_viz_id,
};
pub use timestamp::VizTimestamp;
