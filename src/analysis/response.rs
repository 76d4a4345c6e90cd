use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Serialize)]
pub struct PredictTextBody<'a> {
    pub text: &'a str,
}

// Aucun champ n'est garanti: schéma toléré au mieux, tout écart relève de la
// politique de substitution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPredictionResponse {
    #[serde(default)]
    pub predictions: Vec<f64>,
    #[serde(default)]
    pub prediction_probabilities: Option<Vec<HashMap<String, f64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
}
