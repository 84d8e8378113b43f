//! Core types and data structures for the banking engine

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A customer account holding the full movement history
///
/// The balance is never stored; it is recomputed from `movements` on demand
/// so the movement list stays the single source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Full display name of the account holder
    pub owner: String,
    /// Login handle derived from `owner` (lowercase initials, in order)
    pub username: String,
    /// Numeric secret, compared by exact equality
    pub pin: u32,
    /// Signed amounts in minor units; positive = deposit, negative = withdrawal.
    /// Insertion order is chronological order. Append-only.
    pub movements: Vec<i64>,
    /// Interest percentage applied per qualifying deposit (e.g. 1.2 for 1.2%)
    pub interest_rate: BigDecimal,
    /// When the account was opened
    pub created_at: NaiveDateTime,
    /// When the account was last updated
    pub updated_at: NaiveDateTime,
}

impl Account {
    /// Open a new account with no movement history
    ///
    /// The username is derived from the owner name at construction time and
    /// is not recomputed afterwards.
    pub fn new(owner: String, pin: u32, interest_rate: BigDecimal) -> Self {
        let now = chrono::Utc::now().naive_utc();
        let username = Self::derive_username(&owner);
        Self {
            owner,
            username,
            pin,
            movements: Vec::new(),
            interest_rate,
            created_at: now,
            updated_at: now,
        }
    }

    /// Derive the login handle from an owner name
    ///
    /// Lowercase first character of each whitespace-separated word, joined
    /// with no separator ("Jonas Schmedtmann" becomes "js"). An empty owner
    /// name yields an empty username.
    pub fn derive_username(owner: &str) -> String {
        owner
            .to_lowercase()
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }

    /// First whitespace-separated word of the owner name, for greetings
    pub fn first_name(&self) -> &str {
        self.owner.split_whitespace().next().unwrap_or("")
    }

    /// Current balance: the sum of all movements
    pub fn balance(&self) -> i64 {
        crate::summary::compute_balance(&self.movements)
    }

    /// Append a movement to the history
    pub fn record_movement(&mut self, amount: i64) {
        self.movements.push(amount);
        self.updated_at = chrono::Utc::now().naive_utc();
    }
}

/// Caller-owned session state
///
/// The engine never holds a process-wide "current account"; the presentation
/// layer owns one of these and passes it where needed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    current: Option<String>,
}

impl Session {
    /// Create a fresh, unauthenticated session
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the session to an authenticated username
    pub fn login(&mut self, username: impl Into<String>) {
        self.current = Some(username.into());
    }

    /// Clear the session
    pub fn logout(&mut self) {
        self.current = None;
    }

    /// Clear the session only if it is bound to the given username
    ///
    /// Used after account closure so an unrelated session is left alone.
    pub fn invalidate_for(&mut self, username: &str) {
        if self.current.as_deref() == Some(username) {
            self.current = None;
        }
    }

    /// Username of the authenticated account, if any
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Whether the session is bound to an account
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}

/// Errors that can occur in the banking engine
///
/// Every rejection leaves all account state unchanged; there are no partial
/// effects to roll back.
#[derive(Debug, thiserror::Error)]
pub enum BankError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Account not found: {0}")]
    AccountNotFound(String),
    #[error("Username already taken: {0}")]
    DuplicateUsername(String),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Transfer rejected: {0}")]
    TransferRejected(String),
    #[error("Loan rejected: {0}")]
    LoanRejected(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for banking operations
pub type BankResult<T> = Result<T, BankError>;
