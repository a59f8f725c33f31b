use super::domain::RiskDomain;
use serde::Serialize;

/// One item of the fixed 35-question HSE-IT instrument. Display text is
/// carried for presentation callers; scoring only uses the id/domain pair.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: u16,
    pub text: &'static str,
    pub domain: RiskDomain,
}

const fn q(id: u16, text: &'static str, domain: RiskDomain) -> Question {
    Question { id, text, domain }
}

/// The reference questionnaire. Ids form the dense range 1..=35 and each id
/// belongs to exactly one domain; `Taxonomy::hse_it` revalidates this at
/// construction.
static QUESTIONNAIRE: [Question; 35] = [
    q(1, "Tenho que trabalhar muito intensamente", RiskDomain::Demanda),
    q(
        2,
        "Tenho que negligenciar algumas tarefas porque tenho muito trabalho",
        RiskDomain::Demanda,
    ),
    q(3, "Tenho prazos impossíveis de cumprir", RiskDomain::Demanda),
    q(4, "Trabalho sob pressão de tempo", RiskDomain::Demanda),
    q(
        5,
        "Tenho que fazer meu trabalho com muita rapidez",
        RiskDomain::Demanda,
    ),
    q(
        6,
        "Preciso fazer horas extras com frequência",
        RiskDomain::Demanda,
    ),
    q(
        7,
        "Minhas tarefas são frequentemente interrompidas antes de serem completadas",
        RiskDomain::Demanda,
    ),
    q(
        8,
        "Posso decidir quando fazer uma pausa",
        RiskDomain::Controle,
    ),
    q(
        9,
        "Posso decidir como fazer meu trabalho",
        RiskDomain::Controle,
    ),
    q(
        10,
        "Posso escolher o que fazer no trabalho",
        RiskDomain::Controle,
    ),
    q(
        11,
        "Tenho flexibilidade nos meus horários de trabalho",
        RiskDomain::Controle,
    ),
    q(
        12,
        "Tenho controle sobre o ritmo do meu trabalho",
        RiskDomain::Controle,
    ),
    q(
        13,
        "Recebo feedback construtivo sobre meu trabalho",
        RiskDomain::SuporteGestao,
    ),
    q(
        14,
        "Posso contar com o apoio do meu supervisor quando preciso",
        RiskDomain::SuporteGestao,
    ),
    q(
        15,
        "Recebo informações claras sobre mudanças no trabalho",
        RiskDomain::SuporteGestao,
    ),
    q(
        16,
        "Meu supervisor me incentiva no trabalho",
        RiskDomain::SuporteGestao,
    ),
    q(
        17,
        "Minha liderança demonstra preocupação com meu bem-estar",
        RiskDomain::SuporteGestao,
    ),
    q(
        18,
        "Recebo ajuda e suporte dos colegas",
        RiskDomain::SuportePares,
    ),
    q(
        19,
        "Meus colegas me escutam quando tenho problemas no trabalho",
        RiskDomain::SuportePares,
    ),
    q(
        20,
        "Existe um ambiente de cooperação entre a equipe",
        RiskDomain::SuportePares,
    ),
    q(
        21,
        "Posso confiar nos meus colegas de trabalho",
        RiskDomain::SuportePares,
    ),
    q(
        22,
        "Existe respeito mútuo no ambiente de trabalho",
        RiskDomain::Relacionamentos,
    ),
    q(
        23,
        "As relações no trabalho são harmoniosas",
        RiskDomain::Relacionamentos,
    ),
    q(
        24,
        "Há conflitos frequentes no ambiente de trabalho",
        RiskDomain::Relacionamentos,
    ),
    q(
        25,
        "A comunicação é efetiva entre as equipes",
        RiskDomain::Relacionamentos,
    ),
    q(
        26,
        "Sei exatamente quais são minhas responsabilidades",
        RiskDomain::Funcao,
    ),
    q(
        27,
        "Sei como meu trabalho contribui para os objetivos da organização",
        RiskDomain::Funcao,
    ),
    q(
        28,
        "Recebo treinamento adequado para realizar minhas tarefas",
        RiskDomain::Funcao,
    ),
    q(
        29,
        "Tenho recursos adequados para realizar meu trabalho",
        RiskDomain::Funcao,
    ),
    q(
        30,
        "Minhas habilidades são bem aproveitadas no trabalho",
        RiskDomain::Funcao,
    ),
    q(
        31,
        "Sou consultado sobre mudanças que afetam meu trabalho",
        RiskDomain::Mudanca,
    ),
    q(
        32,
        "Entendo como as mudanças se relacionam com os objetivos da empresa",
        RiskDomain::Mudanca,
    ),
    q(
        33,
        "As mudanças são bem planejadas e implementadas",
        RiskDomain::Mudanca,
    ),
    q(
        34,
        "Tenho tempo suficiente para me adaptar às mudanças",
        RiskDomain::Mudanca,
    ),
    q(
        35,
        "Recebo suporte durante processos de mudança",
        RiskDomain::Mudanca,
    ),
];

/// Read-only view of the full instrument, in question-id order.
pub fn questionnaire() -> &'static [Question] {
    &QUESTIONNAIRE
}
