use email_address::EmailAddress;

use crate::auth::application::domain::entities::Gender;

pub const MAX_ABOUT_LEN: usize = 500;
pub const MIN_AGE: i32 = 1;
pub const MAX_AGE: i32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EmailProblem {
    Empty,
    Invalid,
}

/// Trims and lowercases. Lookups and the unique index both work on the lowercased form.
pub(crate) fn normalize_email(email: &str) -> Result<String, EmailProblem> {
    let email = email.trim();

    if email.is_empty() {
        return Err(EmailProblem::Empty);
    }

    if !EmailAddress::is_valid(email) {
        return Err(EmailProblem::Invalid);
    }

    Ok(email.to_lowercase())
}

pub(crate) fn is_valid_age(age: i32) -> bool {
    (MIN_AGE..=MAX_AGE).contains(&age)
}

/// `None` input stays `None`; blank counts as not supplied.
pub(crate) fn parse_optional_gender(gender: Option<String>) -> Result<Option<Gender>, ()> {
    match gender.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => Gender::parse(value).map(Some).ok_or(()),
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
