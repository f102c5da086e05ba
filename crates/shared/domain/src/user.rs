//! User entity owning an ordered list of accounts.

use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use validator::ValidateEmail;

use crate::account::Account;
use crate::constants::{
    EMAIL_DOMAIN_NO_DOT_MESSAGE, EMAIL_DOT_AFTER_AT_MESSAGE, EMAIL_DOT_BEFORE_AT_MESSAGE,
    EMAIL_DOUBLE_DOT_MESSAGE, EMAIL_INVALID_MESSAGE, EMAIL_LEADING_DOT_MESSAGE,
    EMAIL_MISSING_AT_MESSAGE, EMAIL_TRAILING_DOT_MESSAGE,
};
use crate::error::{DomainError, DomainResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Email syntax check. Deliverability (DNS, mailbox) is never verified.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait EmailValidator: Send + Sync {
    /// `Err` carries a human-readable reason.
    fn validate(&self, email: &str) -> Result<(), String>;
}

/// Syntax-only validator backed by the `validator` crate.
///
/// Dot placement and the dotted domain are checked here first; the
/// `validator` regexes accept both.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxEmailValidator;

impl SyntaxEmailValidator {
    fn check_dots(local: &str, domain: &str) -> Result<(), &'static str> {
        if local.starts_with('.') {
            return Err(EMAIL_LEADING_DOT_MESSAGE);
        }
        if local.ends_with('.') {
            return Err(EMAIL_DOT_BEFORE_AT_MESSAGE);
        }
        if domain.starts_with('.') {
            return Err(EMAIL_DOT_AFTER_AT_MESSAGE);
        }
        if domain.ends_with('.') {
            return Err(EMAIL_TRAILING_DOT_MESSAGE);
        }
        if local.contains("..") || domain.contains("..") {
            return Err(EMAIL_DOUBLE_DOT_MESSAGE);
        }
        if !domain.is_empty() && !domain.contains('.') {
            return Err(EMAIL_DOMAIN_NO_DOT_MESSAGE);
        }
        Ok(())
    }
}

impl EmailValidator for SyntaxEmailValidator {
    fn validate(&self, email: &str) -> Result<(), String> {
        let Some((local, domain)) = email.split_once('@') else {
            return Err(EMAIL_MISSING_AT_MESSAGE.to_string());
        };
        if domain.contains('@') {
            return Err(EMAIL_MISSING_AT_MESSAGE.to_string());
        }
        Self::check_dots(local, domain).map_err(str::to_string)?;
        if !email.validate_email() {
            return Err(EMAIL_INVALID_MESSAGE.to_string());
        }
        Ok(())
    }
}

/// User domain entity
pub struct User {
    name: String,
    email: String,
    accounts: Vec<Arc<dyn Account>>,
}

impl User {
    /// Create a user, checking the email with [`SyntaxEmailValidator`].
    ///
    /// # Errors
    /// Returns `InvalidEmail` when the address is malformed.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> DomainResult<Self> {
        Self::with_validator(name, email, &SyntaxEmailValidator)
    }

    /// Create a user with a caller-supplied validator.
    pub fn with_validator(
        name: impl Into<String>,
        email: impl Into<String>,
        validator: &dyn EmailValidator,
    ) -> DomainResult<Self> {
        let email = email.into();
        validator
            .validate(&email)
            .map_err(DomainError::invalid_email)?;

        Ok(Self {
            name: name.into(),
            email,
            accounts: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Append an account. The account is shared, not copied; adding the
    /// same account twice counts it twice.
    pub fn add_account(&mut self, account: Arc<dyn Account>) {
        self.accounts.push(account);
    }

    pub fn accounts(&self) -> &[Arc<dyn Account>] {
        &self.accounts
    }

    /// Sum of every account's current balance, read at call time.
    pub fn total_balance(&self) -> Decimal {
        self.accounts.iter().map(|account| account.balance()).sum()
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("accounts", &self.accounts.len())
            .finish()
    }
}
