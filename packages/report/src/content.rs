//! Authored report content.
//!
//! The headline findings, recommendation tiers and conclusions are written
//! by the survey team, not derived from the statistics. Tier assignment is
//! a policy decision; changing it means editing these tables.

use urban_survey_models::Priority;

/// Executive-summary headline findings, in presentation order.
pub const HEADLINES: &[&str] = &[
    "**Calidad percibida:** 50% buena, 33.33% mediana, 16.67% baja",
    "**Seguridad peatonal:** 66.67% adecuada, 33.33% deficiente",
    "**Cobertura arbórea:** 83.33% con presencia de vegetación",
    "**Diversidad especies:** 33.33% en monodominancia (crítico)",
    "**Sombra efectiva:** 66.67% con provisión adecuada",
    "**Aptitud infantil:** **50% NO ADECUADA** ⚠️ CRÍTICO",
];

/// One prioritized recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    /// Priority tier.
    pub priority: Priority,
    /// Short title.
    pub title: &'static str,
    /// Finding that motivates the recommendation.
    pub rationale: &'static str,
    /// Concrete actions, empty when the rationale already states them.
    pub actions: &'static [&'static str],
}

/// The four recommendation tiers, most urgent first.
pub const RECOMMENDATIONS: &[Recommendation] = &[
    Recommendation {
        priority: Priority::Critical,
        title: "Infraestructura Lúdica",
        rationale: "50% de espacios carece de aptitud para actividades infantiles. Implementar:",
        actions: &[
            "Diagnóstico de seguridad infantil",
            "Diseño participativo con comunidades",
            "Equipamiento homologado y mantenido",
        ],
    },
    Recommendation {
        priority: Priority::High,
        title: "Diversidad Arbórea",
        rationale: "33.33% de espacios presenta monodominancia. Acciones:",
        actions: &[
            "Aumentar variabilidad de especies",
            "Mejorar resiliencia ecológica",
            "Incrementar valor paisajístico",
        ],
    },
    Recommendation {
        priority: Priority::Medium,
        title: "Consolidación de Seguridad",
        rationale: "33.33% de usuarios percibe inseguridad peatonal. Mejoras en diseño y mantención.",
        actions: &[],
    },
    Recommendation {
        priority: Priority::Low,
        title: "Mejora Incremental",
        rationale: "Elevar espacios con calidad mediana (33.33%) a categoría \"bueno\".",
        actions: &[],
    },
];

/// Closing paragraphs of the report.
pub const CONCLUSIONS: &[&str] = &[
    "La evaluación integrada revela espacios públicos con **calidad general positiva pero heterogénea**, \
     con fortalezas en seguridad peatonal (66.67%) y cobertura arbórea (83.33%), pero con **brecha crítica \
     en infraestructura recreativa infantil** (50% deficiente).",
    "Las recomendaciones estratégicas priorizadas proporcionarían mejoramiento significativo en \
     calidad de vida urbana y funcionalidad ecológica.",
];

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator as _;

    #[test]
    fn six_headlines() {
        assert_eq!(HEADLINES.len(), 6);
    }

    #[test]
    fn one_recommendation_per_tier_in_order() {
        let tiers: Vec<Priority> = RECOMMENDATIONS.iter().map(|r| r.priority).collect();
        let expected: Vec<Priority> = Priority::iter().collect();
        assert_eq!(tiers, expected);
    }
}
