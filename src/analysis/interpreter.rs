use std::collections::HashMap;

use crate::domain::{AnalysisResult, Classification};

use super::response::RawPredictionResponse;

#[derive(Debug, Clone, PartialEq)]
pub enum Interpretation {
    Classified(AnalysisResult),
    Unrecognized,
}

pub fn interpret_response(response: &RawPredictionResponse) -> Interpretation {
    let Some(first) = response.predictions.first() else {
        return Interpretation::Unrecognized;
    };

    // Chemin binaire uniquement: la classe 1 est Malware, tout le reste Benign.
    let classification = if *first == 1.0 {
        Classification::Malware
    } else {
        Classification::Benign
    };

    let confidence = response
        .prediction_probabilities
        .as_deref()
        .and_then(|entries| entries.first())
        .map(confidence_from)
        .unwrap_or(0);

    Interpretation::Classified(AnalysisResult::classified(classification, confidence))
}

// L'original ne borne pas la confiance; ici une probabilité hors [0, 1] est
// écrêtée à [0, 100] après conversion.
fn confidence_from(probabilities: &HashMap<String, f64>) -> u8 {
    if probabilities.is_empty() {
        return 0;
    }
    let max = probabilities
        .values()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    (max * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ResultOrigin, ThreatLevel};

    fn parse(json: &str) -> RawPredictionResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn class_one_is_malware_everything_else_benign() {
        for (json, expected) in [
            (r#"{"predictions": [1]}"#, Classification::Malware),
            (r#"{"predictions": [0]}"#, Classification::Benign),
            (r#"{"predictions": [-1]}"#, Classification::Benign),
            (r#"{"predictions": [0.5]}"#, Classification::Benign),
            (r#"{"predictions": [2]}"#, Classification::Benign),
        ] {
            match interpret_response(&parse(json)) {
                Interpretation::Classified(result) => {
                    assert_eq!(result.classification, expected, "entrée: {}", json);
                    assert_eq!(result.origin, ResultOrigin::Classifier);
                }
                Interpretation::Unrecognized => panic!("schéma rejeté: {}", json),
            }
        }
    }

    #[test]
    fn empty_or_missing_predictions_are_unrecognized() {
        assert_eq!(interpret_response(&parse("{}")), Interpretation::Unrecognized);
        assert_eq!(
            interpret_response(&parse(r#"{"predictions": []}"#)),
            Interpretation::Unrecognized
        );
    }

    #[test]
    fn confidence_is_rounded_max_probability() {
        let response = parse(
            r#"{"predictions": [0], "prediction_probabilities": [{"benign": 0.924, "malware": 0.076}]}"#,
        );
        match interpret_response(&response) {
            Interpretation::Classified(result) => assert_eq!(result.confidence, 92),
            Interpretation::Unrecognized => panic!("schéma rejeté"),
        }
    }

    #[test]
    fn missing_or_empty_probabilities_give_zero_confidence() {
        for json in [
            r#"{"predictions": [1]}"#,
            r#"{"predictions": [1], "prediction_probabilities": null}"#,
            r#"{"predictions": [1], "prediction_probabilities": []}"#,
            r#"{"predictions": [1], "prediction_probabilities": [{}]}"#,
        ] {
            match interpret_response(&parse(json)) {
                Interpretation::Classified(result) => {
                    assert_eq!(result.confidence, 0, "entrée: {}", json);
                    assert_eq!(result.threat_level, ThreatLevel::Medium);
                }
                Interpretation::Unrecognized => panic!("schéma rejeté: {}", json),
            }
        }
    }

    #[test]
    fn out_of_range_probability_is_clamped() {
        let response =
            parse(r#"{"predictions": [1], "prediction_probabilities": [{"malware": 1.7}]}"#);
        match interpret_response(&response) {
            Interpretation::Classified(result) => {
                assert_eq!(result.confidence, 100);
                assert_eq!(result.threat_level, ThreatLevel::Critical);
            }
            Interpretation::Unrecognized => panic!("schéma rejeté"),
        }
    }

    #[test]
    fn scenario_benign_with_high_probability() {
        let response = parse(
            r#"{"predictions": [0], "prediction_probabilities": [{"benign": 0.92}]}"#,
        );
        assert_eq!(
            interpret_response(&response),
            Interpretation::Classified(AnalysisResult::classified(Classification::Benign, 92))
        );
    }

    #[test]
    fn scenario_malware_with_high_probability() {
        let response = parse(
            r#"{"predictions": [1], "prediction_probabilities": [{"malware": 0.9}]}"#,
        );
        match interpret_response(&response) {
            Interpretation::Classified(result) => {
                assert_eq!(result.classification, Classification::Malware);
                assert_eq!(result.confidence, 90);
                assert_eq!(result.threat_level, ThreatLevel::Critical);
            }
            Interpretation::Unrecognized => panic!("schéma rejeté"),
        }
    }
}
