//! In-memory bank ledger: account owners, accounts, and the operations
//! that move money between them.
//!
//! The [`Bank`] aggregate owns all state and is the only mutation entry
//! point. Every operation validates first and applies second, so a
//! returned error always means nothing changed. Amounts are exact
//! fixed-point [`Money`] values and every account keeps an append-only
//! transaction log in lockstep with its balance.
//!
//! ```
//! use bank_ledger::{AccountKind, Bank, Money};
//!
//! let mut bank = Bank::new("The Simple Bank", "Banking made simple");
//! let owner = bank.add_owner("John Deer");
//! let checking = bank.open_account(owner, Money::from_units(500), AccountKind::Checking)?;
//!
//! let balance = bank.deposit(checking, Money::from_units(100))?;
//! assert_eq!(balance, Money::from_units(600));
//! # Ok::<(), bank_ledger::LedgerError>(())
//! ```
//!
//! For use across threads, [`SharedBank`] wraps a bank behind a single
//! lock so each operation, including both legs of a transfer, is atomic.

pub mod common;
pub mod domain;
pub mod ops;
pub mod shared;

pub use common::error::{LedgerError, LedgerResult};
pub use common::id::{AccountId, OwnerId};
pub use common::money::Money;
pub use domain::account::{Account, AccountKind};
pub use domain::bank::Bank;
pub use domain::owner::AccountOwner;
pub use domain::transaction::{Transaction, TransactionKind};
pub use shared::SharedBank;
