//! One module per ledger operation. Each `handle` runs the operation's
//! validations in order against the bank's state and only then applies the
//! mutation primitive.

pub mod deposit;
pub mod open_account;
pub mod transfer;
pub mod withdraw;
