//! Banking module containing account management and teller operations

pub mod account;
pub mod core;
pub mod teller;

pub use account::*;
pub use self::core::*;
pub use teller::*;
