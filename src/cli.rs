use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::error::{AppError, Result};

/// Lists or counts the colour pages of a PDF file on standard output.
///
/// Requires the Ghostscript 9.05+ `gs` tool (`gswin64c` on Windows) on the
/// PATH, or a renderer set in the config file.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// PDF file to be analyzed
    pub file: PathBuf,

    /// Print the number of color pages instead of listing them
    #[arg(short = 'c', long)]
    pub count: bool,

    /// Enables verbose debugging output
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Disables the header line of the debug page table
    #[arg(short = 'H', long)]
    pub noheader: bool,

    /// Lists color and b/w pages for double sided printing (also -DS)
    #[arg(long)]
    pub doubleside: bool,

    /// Lists every page instead of range strings such as 2-14,19-32
    #[arg(short = 'F', long)]
    pub fullstring: bool,

    /// B/W page price (for the total cost report, requires --costc as well)
    #[arg(short = 'B', long, value_name = "PRICE")]
    pub costb: Option<f64>,

    /// Color page price (for the total cost report, requires --costb as well)
    #[arg(short = 'C', long, value_name = "PRICE")]
    pub costc: Option<f64>,

    /// Configuration file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Count,
    Cost { bw: f64, color: f64 },
    List,
}

impl Args {
    /// Parses the process arguments, accepting the two-letter `-DS` flag.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn mode(&self) -> Result<Mode> {
        match (self.costb, self.costc) {
            (None, Some(_)) => Err(AppError::ColorPriceWithoutBw),
            (Some(_), None) => Err(AppError::BwPriceWithoutColor),
            _ if self.count => Ok(Mode::Count),
            (Some(bw), Some(color)) => Ok(Mode::Cost { bw, color }),
            (None, None) => Ok(Mode::List),
        }
    }
}

/// Rewrites `-DS` to `--doubleside`; clap short flags are single letters.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut positional_only = false;
    args.into_iter()
        .map(|arg| {
            if positional_only {
                return arg;
            }
            if arg == "--" {
                positional_only = true;
                arg
            } else if arg == "-DS" {
                OsString::from("--doubleside")
            } else {
                arg
            }
        })
        .collect()
}
