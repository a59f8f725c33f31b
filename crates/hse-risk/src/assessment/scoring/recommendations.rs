use crate::assessment::domain::{RiskBand, RiskDomain};
use std::collections::HashMap;

/// Advisory text issued when a (domain, band) pair has no curated entry yet.
pub const FALLBACK_RECOMMENDATION: &str = "Realizar análise detalhada do domínio";

/// Read-only lookup of advisory text keyed by domain and risk band.
///
/// The table is injected configuration: swapping it supports updated guidance
/// or other locales without touching the scoring algorithm. Lookups never
/// come back empty; sparse entries resolve to the fallback recommendation.
#[derive(Debug, Clone)]
pub struct RecommendationTable {
    entries: HashMap<(RiskDomain, RiskBand), Vec<String>>,
    fallback: String,
}

impl RecommendationTable {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
            fallback: FALLBACK_RECOMMENDATION.to_string(),
        }
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    pub fn with_entry(
        mut self,
        domain: RiskDomain,
        band: RiskBand,
        recommendations: &[&str],
    ) -> Self {
        self.entries.insert(
            (domain, band),
            recommendations.iter().map(|text| text.to_string()).collect(),
        );
        self
    }

    /// The curated reference table. Only DEMANDA is populated so far; the
    /// remaining domains are to-be-filled configuration and resolve to the
    /// fallback.
    pub fn reference() -> Self {
        Self::empty()
            .with_entry(
                RiskDomain::Demanda,
                RiskBand::Alto,
                &[
                    "Revisar a distribuição de tarefas e prazos",
                    "Implementar gestão de prioridades",
                    "Avaliar necessidade de contratações",
                ],
            )
            .with_entry(
                RiskDomain::Demanda,
                RiskBand::Moderado,
                &[
                    "Monitorar carga de trabalho periodicamente",
                    "Estabelecer metas realistas",
                ],
            )
            .with_entry(
                RiskDomain::Demanda,
                RiskBand::Baixo,
                &["Manter práticas atuais de gestão de demanda"],
            )
    }

    /// Resolve the advisory list for a (domain, band) pair. Always non-empty.
    pub fn resolve(&self, domain: RiskDomain, band: RiskBand) -> Vec<String> {
        match self.entries.get(&(domain, band)) {
            Some(recommendations) if !recommendations.is_empty() => recommendations.clone(),
            _ => vec![self.fallback.clone()],
        }
    }
}

impl Default for RecommendationTable {
    fn default() -> Self {
        Self::reference()
    }
}
