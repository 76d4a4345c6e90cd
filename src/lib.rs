pub mod analysis;
pub mod dashboard;
pub mod domain;
pub mod session;

pub use analysis::{
    AnalysisPipeline, ClassifierClient, ClassifierConfig, FallbackPolicy, HttpClassifierClient,
    MockClassifierClient, RawPredictionResponse, SubmitOutcome,
};
pub use domain::{AnalysisRequest, AnalysisResult, Classification, ResultOrigin, ThreatLevel};
pub use session::AnalysisSession;
