use parking_lot::Mutex;

use crate::domain::AnalysisResult;

#[derive(Debug, Default)]
struct SessionInner {
    analyzing: bool,
    last_result: Option<AnalysisResult>,
}

// Au plus un résultat vivant, écrasé à chaque soumission aboutie.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    inner: Mutex<SessionInner>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    // Une seule soumission en vol par session.
    pub fn try_begin(&self) -> bool {
        let mut inner = self.inner.lock();
        if inner.analyzing {
            false
        } else {
            inner.analyzing = true;
            true
        }
    }

    pub fn complete(&self, result: AnalysisResult) {
        let mut inner = self.inner.lock();
        inner.analyzing = false;
        inner.last_result = Some(result);
    }

    pub fn is_analyzing(&self) -> bool {
        self.inner.lock().analyzing
    }

    pub fn last_result(&self) -> Option<AnalysisResult> {
        self.inner.lock().last_result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AnalysisResult, Classification};

    #[test]
    fn single_flight_token() {
        let session = AnalysisSession::new();
        assert!(session.try_begin());
        assert!(session.is_analyzing());
        assert!(!session.try_begin());

        session.complete(AnalysisResult::classified(Classification::Benign, 92));
        assert!(!session.is_analyzing());
        assert!(session.try_begin());
    }

    #[test]
    fn completion_overwrites_previous_result() {
        let session = AnalysisSession::new();
        assert!(session.try_begin());
        session.complete(AnalysisResult::classified(Classification::Benign, 92));
        assert!(session.try_begin());
        session.complete(AnalysisResult::classified(Classification::Malware, 90));

        let last = session.last_result().unwrap();
        assert_eq!(last.classification, Classification::Malware);
    }
}
