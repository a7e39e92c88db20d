//! List Item Domain Model
//!
//! Represents a single entry of the list, identified by a backend-assigned id.

use std::fmt;

use crate::shared::errors::DomainError;

/// Maximum number of characters a list text may hold after trimming
pub const MAX_LIST_TEXT_LEN: usize = 200;

/// Twelve-byte identifier assigned by a document store, shown as 24 lowercase hex digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId([u8; 12]);

impl DocumentId {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn bytes(&self) -> [u8; 12] {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|byte| write!(f, "{byte:02x}"))
    }
}

/// Identifier of a list item
///
/// The relational and in-memory stores hand out sequential integers, the
/// document store hands out twelve-byte ids. Which variant is valid is decided
/// by the repository that parses the raw path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListItemId {
    Serial(i32),
    Object(DocumentId),
}

impl ListItemId {
    /// Get the serial value, if this is a serial id
    #[must_use]
    pub fn as_serial(&self) -> Option<i32> {
        match self {
            Self::Serial(id) => Some(*id),
            Self::Object(_) => None,
        }
    }

    /// Get the document id, if this is one
    #[must_use]
    pub fn as_document_id(&self) -> Option<DocumentId> {
        match self {
            Self::Serial(_) => None,
            Self::Object(id) => Some(*id),
        }
    }
}

impl fmt::Display for ListItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serial(id) => write!(f, "{id}"),
            Self::Object(id) => write!(f, "{id}"),
        }
    }
}

impl From<i32> for ListItemId {
    fn from(id: i32) -> Self {
        Self::Serial(id)
    }
}

impl From<DocumentId> for ListItemId {
    fn from(id: DocumentId) -> Self {
        Self::Object(id)
    }
}

/// Trimmed, length-checked text of a list item, free of NUL characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListText(String);

impl ListText {
    /// Trim the raw value and check it holds between 1 and 200 characters
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyListText` if nothing is left after trimming.
    /// Returns `DomainError::ListTextTooLong` if the trimmed value exceeds the limit.
    /// Returns `DomainError::ListTextContainsNul` if the value holds a `\0`.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyListText);
        }
        // PostgreSQL text columns cannot store NUL
        if trimmed.contains('\0') {
            return Err(DomainError::ListTextContainsNul);
        }

        let actual = trimmed.chars().count();
        if actual > MAX_LIST_TEXT_LEN {
            return Err(DomainError::ListTextTooLong {
                max: MAX_LIST_TEXT_LEN,
                actual,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for ListText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// List item domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    id: ListItemId,
    list: String,
}

impl ListItem {
    /// Restore a ListItem from persisted data
    #[must_use]
    pub fn restore(id: ListItemId, list: String) -> Self {
        Self { id, list }
    }

    /// Replace the text, keeping the id
    #[must_use]
    pub fn with_list(self, list: ListText) -> Self {
        Self {
            list: list.into_inner(),
            ..self
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> &ListItemId {
        &self.id
    }

    #[must_use]
    pub fn list(&self) -> &str {
        &self.list
    }
}
