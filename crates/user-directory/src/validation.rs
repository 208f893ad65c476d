//! Draft validation, applied before a `Create` is dispatched.

use crate::model::UserDraft;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Username,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Username => "username",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Every field that failed, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid user: {}", describe(.fields))]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    pub fn message_for(&self, field: Field) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }
}

fn describe(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|error| error.message)
        .collect::<Vec<_>>()
        .join(", ")
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Shape only: some non-blank text around an `@` and a later `.`.
        let pattern = r"\S+@\S+\.\S+";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Checks a draft. Fields are judged with surrounding whitespace ignored, but the draft
/// itself is left exactly as entered.
pub fn validate_draft(draft: &UserDraft) -> Result<(), ValidationError> {
    let name = draft.name.trim();
    let email = draft.email.trim();
    let username = draft.username.trim();

    let mut fields = Vec::new();
    if name.is_empty() {
        fields.push(FieldError {
            field: Field::Name,
            message: "Name is required",
        });
    }
    if email.is_empty() {
        fields.push(FieldError {
            field: Field::Email,
            message: "Email is required",
        });
    } else if !email_regex().is_match(email) {
        fields.push(FieldError {
            field: Field::Email,
            message: "Email is invalid",
        });
    }
    if username.is_empty() {
        fields.push(FieldError {
            field: Field::Username,
            message: "Username is required",
        });
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { fields })
    }
}
