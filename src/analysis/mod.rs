mod client;
mod fallback;
mod interpreter;
mod pipeline;
mod response;

pub use client::{
    ClassifierClient, ClassifierConfig, HttpClassifierClient, MockClassifierClient,
    DEFAULT_API_BASE,
};
pub use fallback::{FallbackPolicy, FixedFallback, RandomFallback, CANNED_RESULTS};
pub use interpreter::{interpret_response, Interpretation};
pub use pipeline::{AnalysisPipeline, SubmitOutcome, ALLOWED_FILE_EXTENSIONS};
pub use response::{HealthStatus, PredictTextBody, RawPredictionResponse};
