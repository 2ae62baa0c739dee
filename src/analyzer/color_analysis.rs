use std::path::Path;

use tracing::debug;

use super::{CmykCoverage, CoverageSource, PageAnalysis, PageCounts, PageCoverage};
use crate::error::Result;

/// A page is monochrome when its cyan, magenta and yellow coverage are equal.
/// Neither the amount of ink nor the key channel matter.
pub fn is_color(c: f64, m: f64, y: f64, _k: f64) -> bool {
    !(c == m && m == y)
}

pub fn count_page_types<I>(pages: I) -> Result<PageCounts>
where
    I: IntoIterator<Item = Result<CmykCoverage>>,
{
    let mut counts = PageCounts::default();
    for page in pages {
        if page?.is_color() {
            counts.color_pages += 1;
        } else {
            counts.bw_pages += 1;
        }
    }
    Ok(counts)
}

/// Runs the coverage source and returns the color pages.
pub fn find_color_pages(source: &dyn CoverageSource, pdf: &Path) -> Result<Vec<PageCoverage>> {
    find_pages(source, pdf, true)
}

/// Runs the coverage source and returns the black and white pages.
pub fn find_bw_pages(source: &dyn CoverageSource, pdf: &Path) -> Result<Vec<PageCoverage>> {
    find_pages(source, pdf, false)
}

fn find_pages(source: &dyn CoverageSource, pdf: &Path, color: bool) -> Result<Vec<PageCoverage>> {
    let mut pages = Vec::new();
    for (index, coverage) in source.coverage(pdf)?.enumerate() {
        let page = PageCoverage {
            number: index + 1,
            coverage: coverage?,
        };
        if page.coverage.is_color() == color {
            debug!(page = page.number, color, "Matched page");
            pages.push(page);
        }
    }
    Ok(pages)
}

/// Classifies every page of `pdf` with a single pass of the coverage source.
pub fn analyze_pages(source: &dyn CoverageSource, pdf: &Path) -> Result<PageAnalysis> {
    let mut analysis = PageAnalysis::default();
    for (index, coverage) in source.coverage(pdf)?.enumerate() {
        let page = PageCoverage {
            number: index + 1,
            coverage: coverage?,
        };
        if page.coverage.is_color() {
            debug!(page = page.number, "Page is a color page");
            analysis.color_pages.push(page);
        } else {
            debug!(page = page.number, "Page is a b/w page");
            analysis.bw_pages.push(page);
        }
    }
    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::analyzer::CoverageIter;
    use crate::error::AppError;

    struct FixedCoverage {
        pages: Vec<CmykCoverage>,
        runs: Cell<usize>,
    }

    impl FixedCoverage {
        fn new(pages: Vec<CmykCoverage>) -> Self {
            Self {
                pages,
                runs: Cell::new(0),
            }
        }
    }

    impl CoverageSource for FixedCoverage {
        fn id(&self) -> &'static str {
            "fixed"
        }

        fn coverage(&self, _pdf: &Path) -> Result<CoverageIter> {
            self.runs.set(self.runs.get() + 1);
            Ok(Box::new(self.pages.clone().into_iter().map(Ok)))
        }
    }

    fn gray(level: f64, key: f64) -> CmykCoverage {
        CmykCoverage::new(level, level, level, key)
    }

    fn sample() -> FixedCoverage {
        FixedCoverage::new(vec![
            gray(0.0, 0.2),
            CmykCoverage::new(0.1, 0.0, 0.0, 0.0),
            gray(0.8, 0.0),
            CmykCoverage::new(0.0, 0.0, 0.3, 0.9),
            gray(0.0, 0.0),
        ])
    }

    #[test]
    fn equal_cmy_is_monochrome_regardless_of_key() {
        for key in [0.0, 0.3, 1.0] {
            assert!(!is_color(0.0, 0.0, 0.0, key));
            assert!(!is_color(0.8, 0.8, 0.8, key));
        }
    }

    #[test]
    fn any_differing_channel_is_color() {
        assert!(is_color(0.1, 0.0, 0.0, 0.0));
        assert!(is_color(0.0, 0.1, 0.0, 0.0));
        assert!(is_color(0.0, 0.0, 0.1, 0.0));
        assert!(is_color(0.5, 0.5, 0.50001, 1.0));
    }

    #[test]
    fn counts_sum_to_page_total() {
        let source = sample();
        let counts = count_page_types(source.coverage(Path::new("x.pdf")).unwrap()).unwrap();
        assert_eq!(counts, PageCounts { bw_pages: 3, color_pages: 2 });
        assert_eq!(counts.total(), 5);

        let empty = count_page_types(Vec::<Result<CmykCoverage>>::new()).unwrap();
        assert_eq!(empty.total(), 0);
    }

    #[test]
    fn count_stops_at_read_error() {
        let pages = vec![
            Ok(gray(0.0, 0.0)),
            Err(AppError::IoError(std::io::Error::other("truncated"))),
        ];
        assert!(count_page_types(pages).is_err());
    }

    #[test]
    fn finders_number_pages_from_one_and_rerun_source() {
        let source = sample();
        let pdf = Path::new("x.pdf");

        let color: Vec<usize> = find_color_pages(&source, pdf)
            .unwrap()
            .iter()
            .map(|p| p.number)
            .collect();
        let bw: Vec<usize> = find_bw_pages(&source, pdf)
            .unwrap()
            .iter()
            .map(|p| p.number)
            .collect();

        assert_eq!(color, vec![2, 4]);
        assert_eq!(bw, vec![1, 3, 5]);
        assert_eq!(source.runs.get(), 2);
    }

    #[test]
    fn analysis_uses_one_pass() {
        let source = sample();
        let analysis = analyze_pages(&source, Path::new("x.pdf")).unwrap();

        assert_eq!(source.runs.get(), 1);
        assert_eq!(analysis.color_page_numbers(), vec![2, 4]);
        assert_eq!(analysis.bw_page_numbers(), vec![1, 3, 5]);
        assert_eq!(analysis.color_pages[1].coverage, CmykCoverage::new(0.0, 0.0, 0.3, 0.9));
        assert_eq!(analysis.counts().total(), analysis.total_pages());
    }
}
