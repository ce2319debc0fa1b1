use std::fmt;

use thiserror::Error;

use super::password::Password;

/// Required user attributes, in the order they are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    FirstName,
    LastName,
    Email,
    Password,
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UserField::FirstName => "first name",
            UserField::LastName => "last name",
            UserField::Email => "email",
            UserField::Password => "password",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("user's {0} should not be empty")]
    EmptyField(UserField),
}

/// A registered (or to-be-registered) account. The email is the business key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    first_name: String,
    last_name: String,
    email: String,
    password: Password,
}

impl User {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<Password>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    /// Checks that every required attribute is present.
    ///
    /// Fields are checked in declaration order and the first empty one is
    /// reported.
    pub fn validate(&self) -> Result<(), UserError> {
        require(UserField::FirstName, &self.first_name)?;
        require(UserField::LastName, &self.last_name)?;
        require(UserField::Email, &self.email)?;
        require_password(&self.password)
    }
}

pub fn require(field: UserField, value: &str) -> Result<(), UserError> {
    if value.is_empty() {
        return Err(UserError::EmptyField(field));
    }
    Ok(())
}

pub fn require_password(password: &Password) -> Result<(), UserError> {
    if password.is_empty() {
        return Err(UserError::EmptyField(UserField::Password));
    }
    Ok(())
}
