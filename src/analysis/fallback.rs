use rand::Rng;

use crate::domain::{AnalysisResult, Classification, ResultOrigin, ThreatLevel};

// Table fixe des résultats de substitution affichés quand le classifieur est
// injoignable ou renvoie un schéma inexploitable. Valeurs de démonstration,
// pas une gestion d'erreur de production.
pub const CANNED_RESULTS: [AnalysisResult; 4] = [
    AnalysisResult {
        classification: Classification::Malware,
        confidence: 94,
        threat_level: ThreatLevel::Critical,
        origin: ResultOrigin::Fallback,
    },
    AnalysisResult {
        classification: Classification::Phishing,
        confidence: 87,
        threat_level: ThreatLevel::High,
        origin: ResultOrigin::Fallback,
    },
    AnalysisResult {
        classification: Classification::Benign,
        confidence: 92,
        threat_level: ThreatLevel::Low,
        origin: ResultOrigin::Fallback,
    },
    AnalysisResult {
        classification: Classification::SuspiciousActivity,
        confidence: 76,
        threat_level: ThreatLevel::Medium,
        origin: ResultOrigin::Fallback,
    },
];

pub trait FallbackPolicy: Send + Sync {
    fn sample(&self) -> AnalysisResult;
}

// Tirage uniforme: deux exécutions sans backend affichent des résultats
// différents.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomFallback;

impl FallbackPolicy for RandomFallback {
    fn sample(&self) -> AnalysisResult {
        let index = rand::thread_rng().gen_range(0..CANNED_RESULTS.len());
        CANNED_RESULTS[index]
    }
}

// Sélecteur déterministe pour les tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedFallback(pub usize);

impl FallbackPolicy for FixedFallback {
    fn sample(&self) -> AnalysisResult {
        CANNED_RESULTS[self.0 % CANNED_RESULTS.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canned_table_is_consistent_with_derivation() {
        for canned in CANNED_RESULTS {
            assert_eq!(
                canned.threat_level,
                ThreatLevel::derive(canned.classification, canned.confidence)
            );
            assert_eq!(canned.origin, ResultOrigin::Fallback);
        }
    }

    #[test]
    fn random_sample_stays_in_table() {
        let policy = RandomFallback;
        for _ in 0..64 {
            let sampled = policy.sample();
            assert!(CANNED_RESULTS.contains(&sampled));
        }
    }

    #[test]
    fn fixed_fallback_wraps_around() {
        assert_eq!(FixedFallback(0).sample(), CANNED_RESULTS[0]);
        assert_eq!(FixedFallback(5).sample(), CANNED_RESULTS[1]);
    }
}
