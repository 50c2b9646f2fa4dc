use crate::domain::model::{ConvertOutcome, Escaping};
use crate::infrastructure::html_extractor::ScraperLinkExtractor;
use crate::infrastructure::logging::init_logging;
use crate::infrastructure::netscape_renderer::NetscapeRenderer;
use crate::usecase::convert::convert;
use anyhow::{Context, Result};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "pocket-to-bookmarks")]
#[command(version)]
#[command(about = "Convert Pocket export to bookmarks file")]
pub struct Cli {
    /// Path to the Pocket export HTML file
    pub input_file: PathBuf,
    /// Path to the output bookmark file
    pub output_file: PathBuf,
}

/// Binary entry. Conversion failures are logged, not returned, so the process
/// exits 0 for every outcome once arguments parse.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging().context("initialising logging")?;
    execute(&cli);
    Ok(())
}

pub fn run_with_args<I, T>(args: I) -> Result<ConvertOutcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    Ok(execute(&cli))
}

fn execute(cli: &Cli) -> ConvertOutcome {
    convert(
        &cli.input_file,
        &cli.output_file,
        &ScraperLinkExtractor,
        &NetscapeRenderer,
        Escaping::Verbatim,
    )
}
