use tracing::debug;

use super::page_list::{complement, double_side, full_string, ranges};
use super::OutputData;
use crate::analyzer::{PageAnalysis, PageCoverage};
use crate::config::{Config, ConfigValue};

/// Lists color and black and white pages, either as range strings or as a
/// full enumeration, optionally rounded out to whole duplex sheets.
#[derive(Debug, Default)]
pub struct PageListOutput {
    pub double_side: bool,
    pub full_string: bool,
    /// In duplex mode, leave the sheet partners of color pages out of the
    /// B/W list so the two lists never share a page.
    pub exclusive_sheets: bool,
}

impl PageListOutput {
    pub fn id(&self) -> &'static str {
        "pages"
    }

    pub fn apply_config(&mut self, config: &Config) {
        let id = self.id();
        let flag = |key: &str| {
            config
                .get_output_value(id, key)
                .and_then(ConfigValue::as_bool)
        };
        if let Some(v) = flag("double_side") {
            self.double_side = v;
        }
        if let Some(v) = flag("full_string") {
            self.full_string = v;
        }
        if let Some(v) = flag("exclusive_sheets") {
            self.exclusive_sheets = v;
        }
    }

    /// Color and B/W page numbers as they should be sent to the printer.
    ///
    /// In duplex mode the color list covers whole sheets. The B/W list is
    /// every page that is not itself a color page, unless `exclusive_sheets`
    /// is set.
    pub fn print_lists(&self, analysis: &PageAnalysis) -> (Vec<usize>, Vec<usize>) {
        let color = analysis.color_page_numbers();
        if !self.double_side {
            return (color, analysis.bw_page_numbers());
        }

        let total = analysis.total_pages();
        let color_sheets: Vec<usize> = double_side(&color)
            .into_iter()
            .filter(|&page| page <= total)
            .collect();
        let bw_pages = if self.exclusive_sheets {
            complement(&color_sheets, total)
        } else {
            complement(&color, total)
        };
        (color_sheets, bw_pages)
    }

    fn render(&self, pages: &[usize]) -> String {
        if self.full_string {
            full_string(pages)
        } else {
            ranges(pages)
        }
    }

    pub fn generate(&self, analysis: &PageAnalysis) -> OutputData {
        let (color, bw) = self.print_lists(analysis);

        OutputData {
            title: "Page Summary".to_string(),
            lines: vec![
                format!("Number of colored pages are: {}", analysis.color_pages.len()),
                format!("Number of b/w pages are: {}", analysis.bw_pages.len()),
                format!("Color pages are: {}", self.render(&color)),
                format!("B/W pages are: {}", self.render(&bw)),
            ],
        }
    }
}

/// Logs the per-page CMYK table, color pages first.
pub fn log_coverage_table(analysis: &PageAnalysis, header: bool) {
    if header {
        debug!("{}", ["n", "c", "m", "y", "k"].join("\t"));
    }
    for page in analysis.color_pages.iter().chain(&analysis.bw_pages) {
        debug!("{}", coverage_row(page));
    }
}

fn coverage_row(page: &PageCoverage) -> String {
    let c = &page.coverage;
    format!(
        "{}\t{}\t{}\t{}\t{}",
        page.number, c.cyan, c.magenta, c.yellow, c.key
    )
}
