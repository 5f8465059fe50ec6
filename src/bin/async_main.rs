use std::env;
use std::error::Error;
use std::process;

use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    teller::init_tracing();
    if let Err(err) = run_app().await {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

async fn run_app() -> Result<(), Box<dyn Error + Send + Sync>> {
    if env::args_os().len() > 1 {
        tracing::warn!("ignoring command line arguments");
    }

    teller::run_async(BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;
    Ok(())
}
