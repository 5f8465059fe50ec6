//! The menu-driven session over a single account.
//!
//! [`Session`] is an explicit state value. Every line of user input goes
//! through [`Session::handle_line`], which updates the state and returns the
//! reply to show, without touching the console. Runners own the I/O.

use rust_decimal::Decimal;
use std::fmt;
use std::io::{self, Write};

use crate::account::{create_account, Account, AccountKind};
use crate::amount::{format_amount, parse_amount};
use crate::notifier::SmsNotifier;
use crate::Error;

/// Fixed protocol text shown by the session.
pub mod text {
    pub const MENU: &str = "\nOptions:\n\
        1: Create an account\n\
        2: Deposit money\n\
        3: Check balance\n\
        4: Exit\n\
        Choose an option (1/2/3/4): ";
    pub const ACCOUNT_TYPE_PROMPT: &str =
        "Which account would you like to create? (Savings, Current, FixedDeposit)\n";
    pub const AMOUNT_PROMPT: &str = "Enter the amount to deposit: ";
    pub const ALREADY_CREATED: &str =
        "An account is already created. Proceed with deposit or check balance.";
    pub const CREATE_FIRST: &str = "Please create an account first.";
    pub const INVALID_AMOUNT: &str = "Invalid amount entered.";
    pub const INVALID_CHOICE: &str = "Invalid choice. Please select a valid option.";
    pub const GOODBYE: &str = "Thank you for using the financial system. Goodbye!";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    Deposit,
    Balance,
    Exit,
}

impl MenuChoice {
    /// Parses a menu line. The line must be a bare integer between 1 and 4.
    pub fn parse(line: &str) -> Result<Self, Error> {
        let number: i32 = line
            .parse()
            .map_err(|_| Error::InvalidNumericInput(line.to_owned()))?;
        Self::try_from(number)
    }
}

impl TryFrom<i32> for MenuChoice {
    type Error = Error;

    fn try_from(number: i32) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(Self::Create),
            2 => Ok(Self::Deposit),
            3 => Ok(Self::Balance),
            4 => Ok(Self::Exit),
            other => Err(Error::InvalidNumericInput(other.to_string())),
        }
    }
}

/// Which kind of line the session is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pending {
    #[default]
    Menu,
    AccountType,
    DepositAmount,
}

#[derive(Debug)]
pub enum Reply {
    AccountCreated(AccountKind),
    AlreadyCreated,
    Rejected(Error),
    Deposited(Decimal),
    CreateFirst,
    InvalidAmount,
    Balance(Decimal),
    InvalidChoice,
    Goodbye,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::AccountCreated(kind) => write!(f, "{} account created successfully.", kind),
            Reply::AlreadyCreated => f.write_str(text::ALREADY_CREATED),
            Reply::Rejected(err) => write!(f, "{}", err),
            Reply::Deposited(balance) => f.write_str(&SmsNotifier.message(*balance)),
            Reply::CreateFirst => f.write_str(text::CREATE_FIRST),
            Reply::InvalidAmount => f.write_str(text::INVALID_AMOUNT),
            Reply::Balance(balance) => {
                write!(f, "Your account balance is: {}", format_amount(*balance))
            }
            Reply::InvalidChoice => f.write_str(text::INVALID_CHOICE),
            Reply::Goodbye => f.write_str(text::GOODBYE),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// Result of feeding one line to the session.
#[derive(Debug)]
pub struct Step {
    pub reply: Option<Reply>,
    pub control: Control,
}

impl Step {
    fn reply(reply: Reply) -> Self {
        Self {
            reply: Some(reply),
            control: Control::Continue,
        }
    }

    fn silent() -> Self {
        Self {
            reply: None,
            control: Control::Continue,
        }
    }

    fn exit() -> Self {
        Self {
            reply: Some(Reply::Goodbye),
            control: Control::Exit,
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    account: Option<Account>,
    notifier: SmsNotifier,
    pending: Pending,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    pub fn pending(&self) -> Pending {
        self.pending
    }

    /// Text to show before reading the next line.
    pub fn prompt(&self) -> &'static str {
        match self.pending {
            Pending::Menu => text::MENU,
            Pending::AccountType => text::ACCOUNT_TYPE_PROMPT,
            Pending::DepositAmount => text::AMOUNT_PROMPT,
        }
    }

    /// Applies one line of input (without its line terminator).
    pub fn handle_line(&mut self, line: &str) -> Step {
        match std::mem::take(&mut self.pending) {
            Pending::Menu => self.handle_menu(line),
            Pending::AccountType => self.handle_account_type(line),
            Pending::DepositAmount => self.handle_amount(line),
        }
    }

    /// Writes the reply of a step. Deposits are reported through the notifier.
    pub fn write_reply<W: Write>(&self, reply: &Reply, out: &mut W) -> io::Result<()> {
        match reply {
            Reply::Deposited(balance) => self.notifier.notify_balance_change(*balance, out),
            other => writeln!(out, "{}", other),
        }
    }

    fn handle_menu(&mut self, line: &str) -> Step {
        let choice = match MenuChoice::parse(line) {
            Ok(choice) => choice,
            Err(err) => {
                tracing::debug!(%err, "rejected menu choice");
                return Step::reply(Reply::InvalidChoice);
            }
        };

        match (choice, self.account.as_ref()) {
            (MenuChoice::Create, Some(_)) => Step::reply(Reply::AlreadyCreated),
            (MenuChoice::Create, None) => {
                self.pending = Pending::AccountType;
                Step::silent()
            }
            (MenuChoice::Deposit | MenuChoice::Balance, None) => Step::reply(Reply::CreateFirst),
            (MenuChoice::Deposit, Some(_)) => {
                self.pending = Pending::DepositAmount;
                Step::silent()
            }
            (MenuChoice::Balance, Some(account)) => Step::reply(Reply::Balance(account.balance())),
            (MenuChoice::Exit, _) => {
                tracing::debug!("session ended by user");
                Step::exit()
            }
        }
    }

    fn handle_account_type(&mut self, line: &str) -> Step {
        match create_account(line) {
            Ok(account) => {
                let kind = account.kind();
                tracing::info!(%kind, "account created");
                self.account = Some(account);
                Step::reply(Reply::AccountCreated(kind))
            }
            Err(err) => {
                tracing::debug!(input = line, "rejected account type");
                Step::reply(Reply::Rejected(err))
            }
        }
    }

    fn handle_amount(&mut self, line: &str) -> Step {
        let Some(account) = self.account.as_mut() else {
            return Step::reply(Reply::CreateFirst);
        };
        let result = parse_amount(line).and_then(|amount| {
            let balance = account.deposit(amount)?;
            tracing::info!(%amount, %balance, "deposit applied");
            Ok(balance)
        });
        match result {
            Ok(balance) => Step::reply(Reply::Deposited(balance)),
            Err(err) => {
                tracing::debug!(%err, "rejected deposit");
                Step::reply(Reply::InvalidAmount)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn feed(session: &mut Session, lines: &[&str]) -> Vec<String> {
        let mut replies = Vec::new();
        for line in lines {
            if let Some(reply) = session.handle_line(line).reply {
                replies.push(reply.to_string());
            }
        }
        replies
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1").unwrap(), MenuChoice::Create);
        assert_eq!(MenuChoice::parse("2").unwrap(), MenuChoice::Deposit);
        assert_eq!(MenuChoice::parse("3").unwrap(), MenuChoice::Balance);
        assert_eq!(MenuChoice::parse("4").unwrap(), MenuChoice::Exit);
        assert_eq!(MenuChoice::parse("+4").unwrap(), MenuChoice::Exit);
        assert_eq!(MenuChoice::parse("01").unwrap(), MenuChoice::Create);
    }

    #[test]
    fn test_menu_choice_rejects() {
        for line in ["0", "5", "9", "-1", "abc", "", " 1", "1 ", "1.0", "99999999999"] {
            assert!(
                matches!(MenuChoice::parse(line), Err(Error::InvalidNumericInput(_))),
                "{line:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_initial_state() {
        let session = Session::new();
        assert!(session.account().is_none());
        assert_eq!(session.pending(), Pending::Menu);
        assert_eq!(session.prompt(), text::MENU);
    }

    #[test]
    fn test_create_moves_through_account_type_prompt() {
        let mut session = Session::new();
        let step = session.handle_line("1");
        assert!(step.reply.is_none());
        assert_eq!(step.control, Control::Continue);
        assert_eq!(session.pending(), Pending::AccountType);
        assert_eq!(session.prompt(), text::ACCOUNT_TYPE_PROMPT);

        let step = session.handle_line("FixedDeposit");
        assert_eq!(
            step.reply.unwrap().to_string(),
            "FixedDeposit account created successfully."
        );
        assert_eq!(session.pending(), Pending::Menu);
        assert_eq!(session.account().unwrap().kind(), AccountKind::FixedDeposit);
    }

    #[test]
    fn test_invalid_account_type_keeps_no_account() {
        let mut session = Session::new();
        let replies = feed(&mut session, &["1", "bogus"]);
        assert_eq!(replies, ["Invalid account type"]);
        assert!(session.account().is_none());
        assert_eq!(session.pending(), Pending::Menu);
    }

    #[test]
    fn test_second_create_is_rejected() {
        let mut session = Session::new();
        let replies = feed(&mut session, &["1", "savings", "1"]);
        assert_eq!(replies, ["Savings account created successfully.", text::ALREADY_CREATED]);
        assert_eq!(session.pending(), Pending::Menu);
        assert_eq!(session.account().unwrap().kind(), AccountKind::Savings);
    }

    #[test]
    fn test_deposit_and_balance_need_account() {
        let mut session = Session::new();
        let replies = feed(&mut session, &["2", "3"]);
        assert_eq!(replies, [text::CREATE_FIRST, text::CREATE_FIRST]);
        assert_eq!(session.pending(), Pending::Menu);
    }

    #[test]
    fn test_deposit_notifies_new_balance() {
        let mut session = Session::new();
        feed(&mut session, &["1", "current"]);
        assert!(session.handle_line("2").reply.is_none());
        assert_eq!(session.prompt(), text::AMOUNT_PROMPT);

        let step = session.handle_line("100");
        let reply = step.reply.unwrap();
        assert!(matches!(reply, Reply::Deposited(balance) if balance == dec!(100)));

        let mut out = Vec::new();
        session.write_reply(&reply, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "SMS sent: Your new account balance is: 100.0\n"
        );
    }

    #[test]
    fn test_negative_deposit_is_applied() {
        let mut session = Session::new();
        let replies = feed(&mut session, &["1", "savings", "2", "50", "2", "-80", "3"]);
        assert_eq!(replies.last().unwrap(), "Your account balance is: -30.0");
        assert_eq!(session.account().unwrap().balance(), dec!(-30));
    }

    #[test]
    fn test_invalid_amount_leaves_balance() {
        let mut session = Session::new();
        let replies = feed(&mut session, &["1", "current", "2", "abc", "3"]);
        assert_eq!(
            replies,
            [
                "Current account created successfully.",
                text::INVALID_AMOUNT,
                "Your account balance is: 0.0",
            ]
        );
    }

    #[test]
    fn test_overflowing_deposit_reports_invalid_amount() {
        let mut session = Session::new();
        let max = Decimal::MAX.to_string();
        let replies = feed(&mut session, &["1", "savings", "2", &max, "2", "1"]);
        assert_eq!(replies.last().unwrap(), text::INVALID_AMOUNT);
        assert_eq!(session.account().unwrap().balance(), Decimal::MAX);
    }

    #[test]
    fn test_invalid_choice() {
        let mut session = Session::new();
        let replies = feed(&mut session, &["9", "abc", ""]);
        assert_eq!(replies, [text::INVALID_CHOICE; 3]);
        assert!(session.account().is_none());
    }

    #[test]
    fn test_exit_from_either_state() {
        let mut session = Session::new();
        let step = session.handle_line("4");
        assert_eq!(step.control, Control::Exit);
        assert_eq!(step.reply.unwrap().to_string(), text::GOODBYE);

        let mut session = Session::new();
        feed(&mut session, &["1", "savings"]);
        let step = session.handle_line("4");
        assert_eq!(step.control, Control::Exit);
    }

    #[test]
    fn test_sub_prompt_line_is_not_a_menu_choice() {
        // "4" typed at the amount prompt is an amount, not exit.
        let mut session = Session::new();
        feed(&mut session, &["1", "savings", "2"]);
        let step = session.handle_line("4");
        assert_eq!(step.control, Control::Continue);
        assert_eq!(session.account().unwrap().balance(), dec!(4));
    }
}
