use serde_json::{Map, Value};

/// One repository search result as shown in the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoItem {
    pub name: Option<String>,
    pub summary: Option<String>,
    pub link: Option<String>, // html_url, kept but not rendered
}

impl RepoItem {
    /// Build an item from an untyped search record.
    ///
    /// Each field is read on its own and kept only when the value is a JSON
    /// string. Missing keys and other value types leave the field empty.
    pub fn from_record(record: &Map<String, Value>) -> Self {
        Self {
            name: text_field(record, "name"),
            summary: text_field(record, "description"),
            link: text_field(record, "html_url"),
        }
    }

    /// Same as [`RepoItem::from_record`], but accepts any JSON value.
    /// Anything other than an object yields an empty item.
    pub fn from_value(value: &Value) -> Self {
        value
            .as_object()
            .map(Self::from_record)
            .unwrap_or_default()
    }
}

fn text_field(record: &Map<String, Value>, key: &str) -> Option<String> {
    record
        .get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}
