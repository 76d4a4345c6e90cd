mod analysis;
mod classification;

pub use analysis::{AnalysisRequest, AnalysisResult, ResultOrigin};
pub use classification::{Classification, ThreatLevel};
