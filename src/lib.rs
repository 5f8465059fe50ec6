mod account;
mod amount;
mod error;
mod notifier;
mod runner;
pub mod session;

pub use account::{create_account, Account, AccountKind};
pub use amount::{format_amount, parse_amount};
pub use error::Error;
pub use notifier::SmsNotifier;
pub use runner::{run, run_async};
pub use session::{MenuChoice, Session};

/// Installs the stderr log subscriber used by the binaries.
/// `RUST_LOG` overrides the default `warn` level.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
