use super::OutputData;
use crate::analyzer::PageCounts;

pub struct CountOutput;

impl CountOutput {
    pub fn generate(&self, counts: &PageCounts) -> OutputData {
        OutputData {
            title: "Color Page Count".to_string(),
            lines: vec![format!("Number of colored pages is: {}", counts.color_pages)],
        }
    }
}
