use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::{AnalysisRequest, AnalysisResult};
use crate::session::AnalysisSession;

use super::client::ClassifierClient;
use super::fallback::{FallbackPolicy, RandomFallback};
use super::interpreter::{interpret_response, Interpretation};

pub const ALLOWED_FILE_EXTENSIONS: &[&str] = &["txt", "log", "json", "md"];
const MAX_FILE_BYTES: u64 = 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Completed(AnalysisResult),
    // Entrée vide après trim: aucune analyse lancée, état inchangé.
    Ignored,
    // Une analyse est déjà en vol pour cette session.
    Busy,
}

// Toute soumission acceptée se termine par un AnalysisResult, jamais par une
// erreur remontée à l'appelant.
pub struct AnalysisPipeline<C: ClassifierClient> {
    classifier: Arc<C>,
    fallback: Box<dyn FallbackPolicy>,
}

impl<C: ClassifierClient> AnalysisPipeline<C> {
    pub fn new(classifier: Arc<C>) -> Self {
        Self::with_fallback(classifier, Box::new(RandomFallback))
    }

    pub fn with_fallback(classifier: Arc<C>, fallback: Box<dyn FallbackPolicy>) -> Self {
        Self {
            classifier,
            fallback,
        }
    }

    pub fn submit(&self, session: &AnalysisSession, text: &str) -> SubmitOutcome {
        let Some(request) = AnalysisRequest::new(text) else {
            return SubmitOutcome::Ignored;
        };

        if !session.try_begin() {
            warn!("analyse déjà en cours, soumission rejetée");
            return SubmitOutcome::Busy;
        }

        let result = self.classify(&request);
        session.complete(result);
        info!(
            classification = %result.classification,
            confidence = result.confidence,
            threat_level = %result.threat_level,
            origin = ?result.origin,
        );
        SubmitOutcome::Completed(result)
    }

    // Canal fichier: même chaîne que submit, le contenu du fichier remplaçant
    // la saisie manuelle. Validation et lecture précèdent la prise du jeton.
    pub fn submit_file(
        &self,
        session: &AnalysisSession,
        file: impl AsRef<Path>,
    ) -> Result<SubmitOutcome> {
        let file_path = file.as_ref();
        let extension = file_path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        if !ALLOWED_FILE_EXTENSIONS.contains(&extension.as_str()) {
            anyhow::bail!("extension de fichier non prise en charge: {:?}", file_path);
        }

        let metadata = fs::metadata(file_path)
            .with_context(|| format!("impossible de lire le fichier {:?}", file_path))?;
        if metadata.len() > MAX_FILE_BYTES {
            anyhow::bail!(
                "fichier trop volumineux: {} octets (maximum {})",
                metadata.len(),
                MAX_FILE_BYTES
            );
        }

        let content = fs::read_to_string(file_path)
            .with_context(|| format!("impossible de lire le fichier {:?}", file_path))?;
        Ok(self.submit(session, &content))
    }

    fn classify(&self, request: &AnalysisRequest) -> AnalysisResult {
        match self.classifier.predict_text(request.text()) {
            Ok(response) => match interpret_response(&response) {
                Interpretation::Classified(result) => result,
                Interpretation::Unrecognized => {
                    warn!("schéma de réponse inexploitable, résultat de substitution");
                    self.fallback.sample()
                }
            },
            Err(error) => {
                warn!(error = %error, "classifieur injoignable, résultat de substitution");
                self.fallback.sample()
            }
        }
    }
}
