pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod pdf;

use analyzer::{analyze_pages, count_page_types, CoverageSource};
use cli::{Args, Mode};
use config::Config;
use error::Result;
use output::{summary::log_coverage_table, CostOutput, CountOutput, OutputData, PageListOutput};
use pdf::GhostscriptInkcov;

/// Runs one invocation of the tool and returns the report to print.
pub fn run(args: &Args) -> Result<OutputData> {
    let mode = args.mode()?;

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    let mut source = GhostscriptInkcov::default();
    source.apply_config(&config);

    let output = match mode {
        Mode::Count => {
            let counts = count_page_types(source.coverage(&args.file)?)?;
            CountOutput.generate(&counts)
        }
        Mode::Cost { bw, color } => {
            let counts = count_page_types(source.coverage(&args.file)?)?;
            CostOutput::new(bw, color).generate(&counts)
        }
        Mode::List => {
            let analysis = analyze_pages(&source, &args.file)?;
            log_coverage_table(&analysis, !args.noheader);

            let mut pages = PageListOutput::default();
            pages.apply_config(&config);
            pages.double_side |= args.doubleside;
            pages.full_string |= args.fullstring;
            pages.generate(&analysis)
        }
    };

    Ok(output)
}
