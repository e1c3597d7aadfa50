//! Input validation for mutation arguments.
//!
//! Runs before any gateway call so rejected writes never reach storage.

use crate::error::{BookgraphError, Result};
use crate::model::{NewAuthor, NewBook};

/// Maximum allowed length for an author or book name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum allowed length for a genre.
pub const MAX_GENRE_LENGTH: usize = 100;

/// Maximum allowed length for an id.
pub const MAX_ID_LENGTH: usize = 64;

/// Upper bound on an author's age.
pub const MAX_AGE: i32 = 200;

fn validate_text(field: &str, value: &str, max: usize) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BookgraphError::Validation(format!(
            "{} cannot be empty",
            field
        )));
    }
    if value.chars().count() > max {
        return Err(BookgraphError::Validation(format!(
            "{} exceeds maximum length of {} characters",
            field, max
        )));
    }
    Ok(())
}

/// Validates an author or book name.
pub fn validate_name(name: &str) -> Result<()> {
    validate_text("Name", name, MAX_NAME_LENGTH)
}

pub fn validate_genre(genre: &str) -> Result<()> {
    validate_text("Genre", genre, MAX_GENRE_LENGTH)
}

pub fn validate_age(age: i32) -> Result<()> {
    if !(0..=MAX_AGE).contains(&age) {
        return Err(BookgraphError::Validation(format!(
            "Age must be between 0 and {}, got {}",
            MAX_AGE, age
        )));
    }
    Ok(())
}

/// Validates an identifier argument.
///
/// Only rejects ids that could never have been assigned; an unknown but well-formed id
/// is a valid lookup that resolves to nothing.
pub fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(BookgraphError::Validation("ID cannot be empty".to_string()));
    }
    if id.len() > MAX_ID_LENGTH {
        return Err(BookgraphError::Validation(format!(
            "ID exceeds maximum length of {} characters",
            MAX_ID_LENGTH
        )));
    }
    if id.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(BookgraphError::Validation(
            "ID cannot contain whitespace or control characters".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_new_author(author: &NewAuthor) -> Result<()> {
    validate_name(&author.name)?;
    validate_age(author.age)
}

/// Validates a book about to be created.
///
/// `author_id` is checked for shape only; the referenced author is not required to exist.
pub fn validate_new_book(book: &NewBook) -> Result<()> {
    validate_name(&book.name)?;
    validate_genre(&book.genre)?;
    validate_id(&book.author_id)
}
