use serde_json::Value;
use thiserror::Error;

use crate::models::RepoItem;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("top-level JSON value is not an object")]
    NotAnObject,
    #[error("`items` is missing or not an array")]
    MissingItems,
}

/// Turn a raw search response into items, one per `items` element, in order.
pub fn parse_items(bytes: &[u8]) -> Result<Vec<RepoItem>, ParseError> {
    let data: Value = serde_json::from_slice(bytes)?;
    let root = data.as_object().ok_or(ParseError::NotAnObject)?;
    let items = root
        .get("items")
        .and_then(|v| v.as_array())
        .ok_or(ParseError::MissingItems)?;

    Ok(items.iter().map(RepoItem::from_value).collect())
}
