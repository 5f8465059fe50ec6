use std::io::{BufRead, Write};

use crate::session::Control;
use crate::{Error, Session};

use super::strip_line_ending;

/// Runs an interactive session, reading lines from `reader` and writing the
/// menu, prompts and replies to `writer`.
///
/// # Arguments
/// * `reader` - Where user input comes from (e.g. locked stdin)
/// * `writer` - Where the session output goes (e.g. stdout)
///
/// # Errors
/// Returns an error if:
/// * Reading input or writing output fails
/// * The input ends before the user chooses to exit
pub fn run<R, W>(mut reader: R, mut writer: W) -> Result<(), Error>
where
    R: BufRead,
    W: Write,
{
    let mut session = Session::new();
    let mut line = Vec::new();

    loop {
        writer.write_all(session.prompt().as_bytes())?;
        writer.flush()?;

        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        let decoded = String::from_utf8_lossy(&line);

        // Input errors are reported by the session and never end the loop
        let step = session.handle_line(strip_line_ending(&decoded));
        if let Some(reply) = &step.reply {
            session.write_reply(reply, &mut writer)?;
        }
        if step.control == Control::Exit {
            writer.flush()?;
            return Ok(());
        }
    }
}
