//! Errors raised by the teller session.
//!
//! Input errors (bad account type, bad number, overflowing deposit) are
//! recovered inside the session and shown to the user as a single line.
//! I/O failures and a closed input stream end the session and are
//! propagated to the caller.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid account type")]
    InvalidAccountType(String),
    #[error("invalid numeric input: {0:?}")]
    InvalidNumericInput(String),
    #[error("deposit would overflow the account balance")]
    BalanceOverflow,
    #[error("input closed before exit was chosen")]
    InputClosed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
