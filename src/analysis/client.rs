use anyhow::{Context, Result};
use parking_lot::Mutex;
use reqwest::blocking::Client as HttpClient;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use super::response::{HealthStatus, PredictTextBody, RawPredictionResponse};

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
const PREDICT_TEXT_PATH: &str = "/predict/text";
const HEALTH_PATH: &str = "/health";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = "NetSec-Threat-Portal/0.1 (+https://github.com/)";

pub trait ClassifierClient: Send + Sync {
    fn predict_text(&self, text: &str) -> Result<RawPredictionResponse>;
    fn health(&self) -> Result<HealthStatus>;
}

#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub api_base: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClassifierConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Self {
            api_base,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

pub struct HttpClassifierClient {
    config: ClassifierConfig,
    http: HttpClient,
}

impl HttpClassifierClient {
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .context("impossible d'initialiser le client HTTP du classifieur")?;

        Ok(Self { config, http })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base, path)
    }
}

impl ClassifierClient for HttpClassifierClient {
    fn predict_text(&self, text: &str) -> Result<RawPredictionResponse> {
        let response = self
            .http
            .post(self.url(PREDICT_TEXT_PATH))
            .json(&PredictTextBody { text })
            .send()
            .context("appel HTTP au classifieur impossible")?
            .error_for_status()
            .context("le classifieur a renvoyé un statut d'erreur")?;

        response
            .json()
            .context("réponse du classifieur illisible")
    }

    fn health(&self) -> Result<HealthStatus> {
        let response = self
            .http
            .get(self.url(HEALTH_PATH))
            .send()
            .context("appel HTTP au classifieur impossible")?
            .error_for_status()
            .context("le classifieur se déclare indisponible")?;

        response
            .json()
            .context("état de santé du classifieur illisible")
    }
}

#[derive(Clone, Default)]
pub struct MockClassifierClient {
    responses: Arc<Mutex<VecDeque<Result<RawPredictionResponse>>>>,
}

impl MockClassifierClient {
    pub fn push_response(&self, response: RawPredictionResponse) {
        self.responses.lock().push_back(Ok(response));
    }

    pub fn push_error(&self, message: impl Into<String>) {
        self.responses
            .lock()
            .push_back(Err(anyhow::anyhow!(message.into())));
    }

    pub fn pending(&self) -> usize {
        self.responses.lock().len()
    }
}

impl ClassifierClient for MockClassifierClient {
    fn predict_text(&self, _: &str) -> Result<RawPredictionResponse> {
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(anyhow::anyhow!("aucune réponse mock disponible")))
    }

    fn health(&self) -> Result<HealthStatus> {
        Ok(HealthStatus {
            status: "healthy".to_string(),
            model_loaded: true,
        })
    }
}
