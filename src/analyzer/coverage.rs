use std::fs::File;
use std::io::{self, BufRead, BufReader};

use once_cell::sync::Lazy;
use regex::Regex;
use tempfile::NamedTempFile;
use tracing::{debug, trace};

use super::color_analysis::is_color;
use crate::error::Result;

const CMYK_NCOLORS: usize = 4;

static RE_FRACTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[01]\.[0-9]+$").expect("fraction pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CmykCoverage {
    pub cyan: f64,
    pub magenta: f64,
    pub yellow: f64,
    pub key: f64,
}

impl CmykCoverage {
    pub fn new(cyan: f64, magenta: f64, yellow: f64, key: f64) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
            key,
        }
    }

    pub fn is_color(&self) -> bool {
        is_color(self.cyan, self.magenta, self.yellow, self.key)
    }

    /// Parses one line of `inkcov` output, e.g.
    /// ` 0.02434  0.01887  0.01710  0.00381 CMYK OK`.
    ///
    /// Returns `None` unless the first four fields are decimal fractions.
    pub fn parse_line(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split_whitespace().take(CMYK_NCOLORS).collect();
        if fields.len() < CMYK_NCOLORS {
            return None;
        }

        let mut values = [0.0f64; CMYK_NCOLORS];
        for (value, field) in values.iter_mut().zip(&fields) {
            if !RE_FRACTION.is_match(field) {
                return None;
            }
            *value = field.parse().ok()?;
        }

        let [cyan, magenta, yellow, key] = values;
        Some(Self::new(cyan, magenta, yellow, key))
    }
}

/// Iterates the coverage lines of renderer output, skipping anything else.
pub struct CoverageReader<R> {
    lines: io::Lines<R>,
    // Keeps the renderer's output file alive until the reader is dropped.
    _output: Option<NamedTempFile>,
}

impl<R: BufRead> CoverageReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            _output: None,
        }
    }
}

impl CoverageReader<BufReader<File>> {
    /// Reads the renderer output stored in `output`; the file is removed once
    /// the reader is dropped.
    pub fn from_temp_file(output: NamedTempFile) -> Result<Self> {
        let file = output.reopen()?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
            _output: Some(output),
        })
    }
}

impl<R: BufRead> Iterator for CoverageReader<R> {
    type Item = Result<CmykCoverage>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            let line = match line {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            match CmykCoverage::parse_line(&line) {
                Some(cmyk) => {
                    debug!(?cmyk, "Extracted fields");
                    return Some(Ok(cmyk));
                }
                None => trace!(line = %line, "Skipping non-coverage line"),
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn parses_inkcov_line() {
        let cmyk = CmykCoverage::parse_line(" 0.02434  0.01887  0.01710  0.00381 CMYK OK").unwrap();
        assert_eq!(cmyk, CmykCoverage::new(0.02434, 0.01887, 0.0171, 0.00381));
    }

    #[test]
    fn accepts_exactly_four_fields() {
        assert!(CmykCoverage::parse_line("1.0 0.5 0.25 0.125").is_some());
    }

    #[test]
    fn rejects_malformed_lines() {
        for line in [
            "",
            "Page 1",
            "0.1 0.2 0.3",
            "0.1 0.2 0.3 CMYK",
            "2.50000 0.00000 0.00000 0.00000 CMYK OK",
            "0.10000 -0.2000 0.00000 0.00000 CMYK OK",
            "0.1x 0.2 0.3 0.4",
            ".5 0.2 0.3 0.4",
        ] {
            assert!(CmykCoverage::parse_line(line).is_none(), "accepted {line:?}");
        }
    }

    #[test]
    fn reader_skips_noise_and_keeps_order() {
        let output = "GPL Ghostscript 10.02.1\n\
                      \x200.00000  0.00000  0.00000  0.50000 CMYK OK\n\
                      Error: something odd\n\
                      \x200.10000  0.20000  0.30000  0.00000 CMYK OK\n";
        let pages: Vec<CmykCoverage> = CoverageReader::new(Cursor::new(output))
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(
            pages,
            vec![
                CmykCoverage::new(0.0, 0.0, 0.0, 0.5),
                CmykCoverage::new(0.1, 0.2, 0.3, 0.0),
            ]
        );
    }

    #[test]
    fn temp_file_is_removed_with_reader() {
        let mut output = NamedTempFile::new().unwrap();
        writeln!(output, " 0.00000  0.00000  0.00000  0.10000 CMYK OK").unwrap();
        let path = output.path().to_path_buf();

        let reader = CoverageReader::from_temp_file(output).unwrap();
        assert!(path.exists());
        assert_eq!(reader.count(), 1);
        assert!(!path.exists());
    }
}
