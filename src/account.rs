//! The account model and the factory that builds accounts from user input.
//!
//! All account kinds share the same deposit and balance behaviour; the kind
//! is only a label chosen at creation time.

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Savings,
    Current,
    FixedDeposit,
}

impl AccountKind {
    pub const ALL: [AccountKind; 3] = [Self::Savings, Self::Current, Self::FixedDeposit];

    /// Lowercase name the user types to pick this kind.
    pub fn key(self) -> &'static str {
        match self {
            Self::Savings => "savings",
            Self::Current => "current",
            Self::FixedDeposit => "fixeddeposit",
        }
    }

    /// Human-readable label, as listed in the account type prompt.
    pub fn label(self) -> &'static str {
        match self {
            Self::Savings => "Savings",
            Self::Current => "Current",
            Self::FixedDeposit => "FixedDeposit",
        }
    }

    pub fn constructor(self) -> fn() -> Account {
        match self {
            Self::Savings => || Account::new(AccountKind::Savings),
            Self::Current => || Account::new(AccountKind::Current),
            Self::FixedDeposit => || Account::new(AccountKind::FixedDeposit),
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AccountKind {
    type Err = Error;

    /// Case-insensitive; the input is not trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == lowered)
            .ok_or_else(|| Error::InvalidAccountType(s.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    kind: AccountKind,
    balance: Decimal,
}

impl Account {
    pub fn new(kind: AccountKind) -> Self {
        Self {
            kind,
            balance: Decimal::ZERO,
        }
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Adds `amount` to the balance and returns the new balance.
    /// Negative amounts are applied as given and reduce the balance.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, Error> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(Error::BalanceOverflow)?;
        Ok(self.balance)
    }
}

/// Creates a fresh, empty account of the kind named by `type_name`.
pub fn create_account(type_name: &str) -> Result<Account, Error> {
    let kind: AccountKind = type_name.parse()?;
    Ok(kind.constructor()())
}
