//! List Item DTOs
//!
//! Data transfer objects for list item API endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::list_item::{ListItem, ListItemId, ListText};

/// Validates that the text is non-blank and within bounds once trimmed
fn validate_list_text(list: &str) -> Result<(), validator::ValidationError> {
    ListText::parse(list).map(|_| ()).map_err(|err| {
        let mut error = validator::ValidationError::new("list_text");
        error.message = Some(err.to_string().into());
        error
    })
}

/// DTO for creating or replacing a list item (POST and PUT share one shape)
///
/// A missing `list` field deserializes to an empty string so it is reported
/// as a validation failure rather than a body rejection.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ListItemDto {
    #[serde(default)]
    #[validate(custom(function = "validate_list_text"))]
    pub list: String,
}

/// Identifier as it appears on the wire: a number for serial ids, a hex string for document ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListItemIdDto {
    Serial(i32),
    Object(String),
}

impl From<&ListItemId> for ListItemIdDto {
    fn from(id: &ListItemId) -> Self {
        match id {
            ListItemId::Serial(id) => Self::Serial(*id),
            ListItemId::Object(id) => Self::Object(id.to_string()),
        }
    }
}

/// List item response DTO
#[derive(Debug, Clone, Serialize)]
pub struct ListItemResponseDto {
    pub id: ListItemIdDto,
    pub list: String,
}

impl From<ListItem> for ListItemResponseDto {
    fn from(item: ListItem) -> Self {
        Self {
            id: item.id().into(),
            list: item.list().to_string(),
        }
    }
}

/// Confirmation body returned by DELETE
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponseDto {
    pub message: String,
}

impl DeleteResponseDto {
    #[must_use]
    pub fn deleted() -> Self {
        Self {
            message: "List deleted successfully".to_string(),
        }
    }
}
