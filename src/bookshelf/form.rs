//! # Book Form
//!
//! Input-side rules for creating a book. None of this is re-checked by the
//! store; it only shapes what gets submitted.
//!
//! - `name` is required: blank after trimming blocks submission with a
//!   field-level error.
//! - `description` is capped at [`DESCRIPTION_LIMIT`] characters. Longer input
//!   is silently cut, never rejected.
//! - Editing a field clears that field's error.
//! - On submit every field is trimmed and empty optional fields become
//!   absent.

use crate::error::ShelfError;
use crate::model::BookFields;

pub const DESCRIPTION_LIMIT: usize = 300;

pub const NAME_REQUIRED: &str = "Book name is required";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Author,
    Description,
    Picture,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[
            FormField::Name,
            FormField::Author,
            FormField::Description,
            FormField::Picture,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Author => "author",
            FormField::Description => "description",
            FormField::Picture => "picture",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Book Name *",
            FormField::Author => "Author",
            FormField::Description => "Description (max 300 characters)",
            FormField::Picture => "Picture URL",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => self.name.as_deref(),
            _ => None,
        }
    }

    fn clear(&mut self, field: FormField) {
        if field == FormField::Name {
            self.name = None;
        }
    }
}

impl From<FormErrors> for ShelfError {
    fn from(errors: FormErrors) -> Self {
        ShelfError::Validation {
            field: FormField::Name.key(),
            message: errors.name.unwrap_or_else(|| NAME_REQUIRED.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    name: String,
    author: String,
    description: String,
    picture: String,
    errors: FormErrors,
}

impl BookForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: FormField, value: &str) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Author => &self.author,
            FormField::Description => &self.description,
            FormField::Picture => &self.picture,
        }
    }

    /// Replaces a field value. Returns `true` if the value had to be cut to
    /// fit the description limit.
    pub fn set(&mut self, field: FormField, value: &str) -> bool {
        let mut truncated = false;
        let value = match field {
            FormField::Description if value.chars().count() > DESCRIPTION_LIMIT => {
                truncated = true;
                value.chars().take(DESCRIPTION_LIMIT).collect()
            }
            _ => value.to_string(),
        };

        match field {
            FormField::Name => self.name = value,
            FormField::Author => self.author = value,
            FormField::Description => self.description = value,
            FormField::Picture => self.picture = value,
        }
        self.errors.clear(field);
        truncated
    }

    /// Characters used by the description, for a "n/300 characters" counter.
    pub fn description_len(&self) -> usize {
        self.description.chars().count()
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Checks the form without changing it.
    pub fn validate(&self) -> Result<BookFields, FormErrors> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormErrors {
                name: Some(NAME_REQUIRED.to_string()),
            });
        }
        Ok(BookFields {
            name: name.to_string(),
            author: non_empty(&self.author),
            description: non_empty(&self.description),
            picture: non_empty(&self.picture),
        })
    }

    /// Validates, recording errors on failure and resetting the form on
    /// success.
    pub fn submit(&mut self) -> Result<BookFields, FormErrors> {
        match self.validate() {
            Ok(fields) => {
                *self = Self::default();
                Ok(fields)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
