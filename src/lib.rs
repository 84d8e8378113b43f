//! # Bankist Core
//!
//! A retail banking engine providing account directories, authentication,
//! transfers, loan underwriting, and interest summaries.
//!
//! ## Features
//!
//! - **Account directory**: ordered, username-unique accounts with derived
//!   login handles and append-only movement histories
//! - **Teller operations**: deposits, withdrawals, all-or-nothing transfers,
//!   and policy-driven loan grants
//! - **Derived reads**: balances, deposit/withdrawal totals, threshold-based
//!   interest credit, sorted views, and statement rows
//! - **Sessions**: explicit caller-owned session values, no global state
//! - **Storage abstraction**: database-agnostic design with trait-based
//!   storage
//!
//! ## Quick Start
//!
//! ```rust
//! use bankist_core::utils::MemoryDirectory;
//! use bankist_core::{Bank, Session};
//!
//! # async fn run() -> bankist_core::BankResult<()> {
//! let storage = MemoryDirectory::new();
//! let mut bank = Bank::new(storage);
//! bank.seed_demo_accounts().await?;
//!
//! let mut session = Session::new();
//! let account = bank.login("js", 1111, &mut session).await?;
//! assert_eq!(account.first_name(), "Jonas");
//!
//! bank.transfer("js", "jd", 500).await?;
//! # Ok(())
//! # }
//! ```

pub mod bank;
pub mod summary;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use bank::*;
pub use summary::*;
pub use traits::*;
pub use types::*;
