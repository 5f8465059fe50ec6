use std::env;
use std::error::Error;
use std::ffi::OsString;
use std::io;
use std::process;

fn main() {
    teller::init_tracing();
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let extra_args = extra_args(env::args_os());
    if !extra_args.is_empty() {
        tracing::warn!(?extra_args, "ignoring command line arguments");
    }
    teller::run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

/// Arguments after the program name. They may be any bytes the OS allows.
fn extra_args(args: impl Iterator<Item = OsString>) -> Vec<OsString> {
    args.skip(1).collect()
}
