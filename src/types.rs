use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    User,
    Assistant,
}

/// Opaque message identifier, unique within one conversation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    /// `<unix-millis>-<sequence>[-tag]`. The sequence keeps ids apart when two
    /// messages land in the same millisecond.
    pub(crate) fn generate(at: OffsetDateTime, sequence: u64, tag: Option<&str>) -> Self {
        let millis = at.unix_timestamp_nanos() / 1_000_000;
        match tag {
            Some(tag) => Self(format!("{millis}-{sequence}-{tag}")),
            None => Self(format!("{millis}-{sequence}")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A recorded chat message. Immutable once appended to the conversation.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    id: MessageId,
    content: String,
    origin: Origin,
    created_at: OffsetDateTime,
}

impl Message {
    pub(crate) fn new(id: MessageId, content: String, origin: Origin, created_at: OffsetDateTime) -> Self {
        Self {
            id,
            content,
            origin,
            created_at,
        }
    }

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn is_user(&self) -> bool {
        matches!(self.origin, Origin::User)
    }

    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }
}
