use clap::Args;
use std::io::Write;
use tracing::debug;

use crate::error::{KitError, TemperatureError};
use crate::temperature::Conversion;
use crate::utils::prompt::given_or_ask;

#[derive(Args, Debug)]
pub struct TempCommand {
    /// Temperature with its scale prefix, e.g. F51 or C11
    pub input: Option<String>,
}

impl TempCommand {
    pub async fn run(self) -> Result<(), KitError> {
        self.run_to(&mut std::io::stdout()).await
    }

    pub async fn run_to<W: Write>(self, out: &mut W) -> Result<(), KitError> {
        let input = given_or_ask(self.input, "Enter temperature (e.g., F51 or C11): ").await?;
        match Conversion::parse(&input) {
            Ok(conversion) => writeln!(out, "{conversion}")?,
            Err(e) => {
                debug!(%input, reason = %e, "temperature rejected");
                writeln!(out, "{}", TemperatureError::USER_MESSAGE)?;
            }
        }
        Ok(())
    }
}
