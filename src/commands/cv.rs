use clap::Args;
use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::cv::{GeminiAnalyzer, analyze_file};
use crate::error::KitError;
use crate::gemini::GeminiClient;
use crate::utils::prompt::given_or_ask;

#[derive(Args, Debug)]
pub struct CvCommand {
    /// PDF or DOCX resume
    pub path: Option<String>,
}

impl CvCommand {
    pub async fn run(self, cfg: &Config) -> Result<(), KitError> {
        self.run_to(cfg, &mut std::io::stdout()).await
    }

    /// A missing or unsupported file is reported on `out`; other failures are returned.
    pub async fn run_to<W: Write>(self, cfg: &Config, out: &mut W) -> Result<(), KitError> {
        let path = given_or_ask(self.path, "Enter CV file path (PDF/DOCX): ").await?;
        let analyzer = GeminiAnalyzer::new(GeminiClient::from_config(&cfg.gemini)?);

        let report = match analyze_file(&analyzer, Path::new(&path)).await {
            Ok(report) => report,
            Err(e @ (KitError::FileNotFound(_) | KitError::UnsupportedFormat(_))) => {
                writeln!(out, "{e}")?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        writeln!(out, "\nAnalyzing CV with {}...\n\n{}\n\n", analyzer.model(), report.text)?;
        writeln!(out, "\n--- CV Analysis Results ---\n")?;
        writeln!(out, "{}", report.analysis)?;
        Ok(())
    }
}
