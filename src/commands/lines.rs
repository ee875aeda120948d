use clap::Args;
use std::io::Write;
use tracing::warn;

use crate::error::KitError;
use crate::lines::{DEFAULT_COUNT_CHAR, LineFile};
use crate::utils::prompt::given_or_ask;

#[derive(Args, Debug)]
pub struct LinesCommand {
    /// Text file to read
    pub path: Option<String>,

    /// Character to count
    #[arg(long = "char", default_value_t = DEFAULT_COUNT_CHAR)]
    pub count_char: char,

    /// Append this line before reading the file
    #[arg(long)]
    pub append: Option<String>,
}

impl LinesCommand {
    pub async fn run(self) -> Result<(), KitError> {
        self.run_to(&mut std::io::stdout()).await
    }

    /// Missing files are reported on `out`, not returned as errors.
    pub async fn run_to<W: Write>(self, out: &mut W) -> Result<(), KitError> {
        let path = given_or_ask(self.path, "Enter file path: ").await?;
        let file = LineFile::new(path);

        if let Some(line) = self.append.as_deref() {
            if let Err(e) = file.append_line(line).await {
                warn!(path = %file.path().display(), error = %e, "append failed");
            }
        }

        match file.print_lines(out).await {
            Ok(_) => {}
            Err(e @ KitError::FileNotFound(_)) => {
                writeln!(out, "{e}")?;
                return Ok(());
            }
            Err(e) => return Err(e),
        }
        let count = file.count_char(self.count_char).await?;
        writeln!(out, "Number of '{}' found: {count}", self.count_char)?;
        Ok(())
    }
}
