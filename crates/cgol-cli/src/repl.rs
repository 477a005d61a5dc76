//! The read-eval-print loop.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::error::CliError;
use crate::session::Session;

/// Word that ends the loop (case-insensitive).
const EXIT_COMMAND: &str = "exit";

/// Read prompts from `input` until `exit` or end of input.
///
/// Each answer is written as `Response:\n<text>\n` followed by a blank
/// line.
pub async fn run<R, W>(session: &Session, input: &mut R, output: &mut W) -> Result<(), CliError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output
        .write_all(b"\nWelcome to the Conway CLI! Type 'exit' to quit.\n")
        .await?;

    loop {
        output.write_all(b"Enter prompt for Conway: ").await?;
        output.flush().await?;

        let mut line = String::new();
        if input.read_line(&mut line).await? == 0 {
            debug!("input closed");
            output.write_all(b"\nGoodbye!\n").await?;
            break;
        }

        let prompt = line.trim();
        if prompt.eq_ignore_ascii_case(EXIT_COMMAND) {
            output.write_all(b"Goodbye!\n").await?;
            break;
        }

        let response = session.handle_prompt(prompt).await;
        output
            .write_all(format!("Response:\n{response}\n\n").as_bytes())
            .await?;
    }

    output.flush().await?;
    Ok(())
}
