use crate::assessment::domain::{RiskBand, RiskLevel};

/// Map a domain average onto its risk band.
///
/// Boundary inclusions are policy, not incident: exactly 2.0 is ALTO and
/// exactly 3.0 is MODERADO. Higher averages mean lower risk.
pub(crate) fn classify(average: f64) -> RiskLevel {
    let level = if average <= 2.0 {
        RiskBand::Alto
    } else if average <= 3.0 {
        RiskBand::Moderado
    } else {
        RiskBand::Baixo
    };

    RiskLevel {
        level,
        score: average,
    }
}

#[cfg(test)]
mod tests {
    use super::classify;
    use crate::assessment::domain::RiskBand;

    #[test]
    fn boundaries_are_closed_below() {
        assert_eq!(classify(1.0).level, RiskBand::Alto);
        assert_eq!(classify(2.0).level, RiskBand::Alto);
        assert_eq!(classify(2.0001).level, RiskBand::Moderado);
        assert_eq!(classify(2.5).level, RiskBand::Moderado);
        assert_eq!(classify(3.0).level, RiskBand::Moderado);
        assert_eq!(classify(3.0001).level, RiskBand::Baixo);
        assert_eq!(classify(5.0).level, RiskBand::Baixo);
    }

    #[test]
    fn classification_carries_the_producing_score() {
        let level = classify(2.5);
        assert!((level.score - 2.5).abs() < f64::EPSILON);
    }
}
