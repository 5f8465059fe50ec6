use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::session::Control;
use crate::{Error, Session};

use super::strip_line_ending;

/// Runs an interactive session over async I/O.
///
/// Behaves exactly like the synchronous [`run`](super::run): one line is read
/// at a time and nothing runs in the background. Replies are rendered into a
/// buffer first and then written to `writer`.
///
/// # Arguments
/// * `reader` - Where user input comes from (e.g. `tokio::io::stdin()` wrapped in a `BufReader`)
/// * `writer` - Where the session output goes (e.g. `tokio::io::stdout()`)
///
/// # Errors
/// Returns an error if:
/// * Reading input or writing output fails
/// * The input ends before the user chooses to exit
pub async fn run<R, W>(mut reader: R, mut writer: W) -> Result<(), Error>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut session = Session::new();
    let mut line = Vec::new();
    let mut rendered = Vec::new();

    loop {
        writer.write_all(session.prompt().as_bytes()).await?;
        writer.flush().await?;

        line.clear();
        if reader.read_until(b'\n', &mut line).await? == 0 {
            return Err(Error::InputClosed);
        }
        let decoded = String::from_utf8_lossy(&line);

        let step = session.handle_line(strip_line_ending(&decoded));
        if let Some(reply) = &step.reply {
            rendered.clear();
            session.write_reply(reply, &mut rendered)?;
            writer.write_all(&rendered).await?;
        }
        if step.control == Control::Exit {
            writer.flush().await?;
            return Ok(());
        }
    }
}
