use std::path::Path;

use crate::config::Config;
use crate::error::Result;

pub mod color_analysis;
pub mod coverage;

pub use color_analysis::{analyze_pages, count_page_types, find_bw_pages, find_color_pages, is_color};
pub use coverage::{CmykCoverage, CoverageReader};

/// Lazy, single-pass sequence of per-page coverage values.
pub type CoverageIter = Box<dyn Iterator<Item = Result<CmykCoverage>>>;

/// A 1-based page number and the ink coverage measured for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageCoverage {
    pub number: usize,
    pub coverage: CmykCoverage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageCounts {
    pub bw_pages: usize,
    pub color_pages: usize,
}

impl PageCounts {
    pub fn total(&self) -> usize {
        self.bw_pages + self.color_pages
    }
}

/// Pages of one document split by class, each list in page order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageAnalysis {
    pub color_pages: Vec<PageCoverage>,
    pub bw_pages: Vec<PageCoverage>,
}

impl PageAnalysis {
    pub fn counts(&self) -> PageCounts {
        PageCounts {
            bw_pages: self.bw_pages.len(),
            color_pages: self.color_pages.len(),
        }
    }

    pub fn total_pages(&self) -> usize {
        self.color_pages.len() + self.bw_pages.len()
    }

    pub fn color_page_numbers(&self) -> Vec<usize> {
        self.color_pages.iter().map(|p| p.number).collect()
    }

    pub fn bw_page_numbers(&self) -> Vec<usize> {
        self.bw_pages.iter().map(|p| p.number).collect()
    }
}

/// Something that can measure per-page CMYK ink coverage of a PDF.
///
/// Every call to [`CoverageSource::coverage`] performs a fresh measurement.
pub trait CoverageSource {
    fn id(&self) -> &'static str;
    fn coverage(&self, pdf: &Path) -> Result<CoverageIter>;
    fn apply_config(&mut self, _config: &Config) {}
}
