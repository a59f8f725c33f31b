use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven HSE-IT psychosocial risk domains. Closed set; changing it is a
/// taxonomy migration, not a runtime concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskDomain {
    Demanda,
    Controle,
    SuporteGestao,
    SuportePares,
    Relacionamentos,
    Funcao,
    Mudanca,
}

impl RiskDomain {
    /// Declaration order used for every per-domain iteration, including the
    /// chart axis ordering callers rely on.
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Demanda,
            Self::Controle,
            Self::SuporteGestao,
            Self::SuportePares,
            Self::Relacionamentos,
            Self::Funcao,
            Self::Mudanca,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Demanda => "Demanda",
            Self::Controle => "Controle",
            Self::SuporteGestao => "Suporte da Gestão",
            Self::SuportePares => "Suporte dos Pares",
            Self::Relacionamentos => "Relacionamentos",
            Self::Funcao => "Função",
            Self::Mudanca => "Mudança",
        }
    }
}

impl fmt::Display for RiskDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Risk classification band. Higher questionnaire averages map to *lower*
/// risk; the 1..=5 scale is applied uniformly without per-question
/// reverse-scoring, matching the published HSE-IT worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskBand {
    Alto,
    Moderado,
    Baixo,
}

impl RiskBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Alto => "ALTO",
            Self::Moderado => "MODERADO",
            Self::Baixo => "BAIXO",
        }
    }
}

/// Classified band together with the numeric average that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskLevel {
    pub level: RiskBand,
    pub score: f64,
}

/// A single questionnaire answer: question id and a Likert value in 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub question_id: u16,
    pub value: u8,
}

impl Response {
    pub const fn new(question_id: u16, value: u8) -> Self {
        Self { question_id, value }
    }
}

/// Per-domain scoring output: mean value, classified risk, and advisory text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainResult {
    pub domain: RiskDomain,
    pub average: f64,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
}

/// Identifier assigned to a stored assessment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

impl fmt::Display for AssessmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a registered company.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CompanyId(pub String);

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
