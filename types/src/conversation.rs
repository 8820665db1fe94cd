use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Lifecycle stage the platform reports for the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversationType {
    #[default]
    Unspecified,
    /// First turn of a new conversation.
    New,
    /// Follow-up turn of an ongoing conversation.
    Active,
    Expired,
    Archived,
}

impl ConversationType {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => ConversationType::New,
            2 => ConversationType::Active,
            3 => ConversationType::Expired,
            4 => ConversationType::Archived,
            _ => ConversationType::Unspecified,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "NEW" => ConversationType::New,
            "ACTIVE" => ConversationType::Active,
            "EXPIRED" => ConversationType::Expired,
            "ARCHIVED" => ConversationType::Archived,
            _ => ConversationType::Unspecified,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            ConversationType::Unspecified => 0,
            ConversationType::New => 1,
            ConversationType::Active => 2,
            ConversationType::Expired => 3,
            ConversationType::Archived => 4,
        }
    }
}

impl Serialize for ConversationType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.code())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawConversationType {
    Code(i64),
    Name(String),
}

impl<'de> Deserialize<'de> for ConversationType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawConversationType::deserialize(deserializer)? {
            RawConversationType::Code(code) => ConversationType::from_code(code),
            RawConversationType::Name(name) => ConversationType::from_name(&name),
        })
    }
}
