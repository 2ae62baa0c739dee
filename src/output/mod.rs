pub mod cost;
pub mod count;
pub mod page_list;
pub mod summary;

pub use cost::CostOutput;
pub use count::CountOutput;
pub use summary::PageListOutput;

/// A finished report, one entry per stdout line.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputData {
    pub title: String,
    pub lines: Vec<String>,
}

impl OutputData {
    pub fn copyable_text(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}
