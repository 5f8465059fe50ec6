use rust_decimal::Decimal;
use std::io::{self, Write};

use crate::amount::format_amount;

/// Sends a (simulated) SMS whenever an account balance changes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SmsNotifier;

impl SmsNotifier {
    pub fn new() -> Self {
        Self
    }

    pub fn message(&self, new_balance: Decimal) -> String {
        format!(
            "SMS sent: Your new account balance is: {}",
            format_amount(new_balance)
        )
    }

    /// Writes the SMS text for `new_balance` to `out`.
    pub fn notify_balance_change<W: Write>(
        &self,
        new_balance: Decimal,
        out: &mut W,
    ) -> io::Result<()> {
        tracing::info!(%new_balance, "sms notification sent");
        writeln!(out, "{}", self.message(new_balance))
    }
}
