pub mod analysis;
pub mod verdict;

pub use analysis::{
    AnalysisResult, AnalyzeRequest, Categories, CategoryKey, CategoryScore, Experience,
    ManualPasteResponse,
};
pub use verdict::Verdict;
