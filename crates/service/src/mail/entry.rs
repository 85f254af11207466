use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const FIELD_ID: &str = "id";
pub const FIELD_SENDER: &str = "sender";
pub const FIELD_RECIPIENT: &str = "recipient";

/// One stored mail record.
///
/// Fields are an open JSON object: whatever the client posts is kept as-is.
/// `sender`, `recipient` and `id` are the conventional keys; `id` is owned by
/// the store and replaced on creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MailEntry(Map<String, Value>);

impl MailEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field setter.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Returns a copy of the entry carrying the given id.
    pub fn with_id(self, id: impl Into<String>) -> Self {
        let id: String = id.into();
        self.with(FIELD_ID, id)
    }

    /// String value of a field; `None` when absent or not a string.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn id(&self) -> Option<&str> {
        self.field(FIELD_ID)
    }

    pub fn sender(&self) -> Option<&str> {
        self.field(FIELD_SENDER)
    }

    pub fn recipient(&self) -> Option<&str> {
        self.field(FIELD_RECIPIENT)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for MailEntry {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
