mod state;

pub use state::AnalysisSession;
