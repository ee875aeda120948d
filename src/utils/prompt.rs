use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::error::KitError;

/// Prints `question` and reads one trimmed line from stdin.
pub async fn ask(question: &str) -> Result<String, KitError> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(question.as_bytes()).await?;
    stdout.flush().await?;

    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await?;
    Ok(line.trim().to_string())
}

/// `given` when supplied on the command line, otherwise the interactive answer.
pub async fn given_or_ask(given: Option<String>, question: &str) -> Result<String, KitError> {
    match given {
        Some(value) => Ok(value.trim().to_string()),
        None => ask(question).await,
    }
}
