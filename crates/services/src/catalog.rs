//! The authored step catalog of the Vitalle funnel.
//!
//! Content only. Copy, ordering, and option sets can change freely without
//! touching the controller or the views.

use funnel_core::bmi::BmiCategory;
use funnel_core::model::{
    Catalog, InfoLayout, NumberBounds, OptionDefinition, StepBody, StepDefinition,
};

/// Builds the default funnel catalog.
///
/// # Panics
///
/// Panics only if the authored list below is empty or repeats a step id,
/// which is a programming error caught by the tests in this module.
#[must_use]
pub fn default_catalog() -> Catalog {
    let steps = vec![
        StepDefinition::new(
            "area_focus",
            "Olhando no espelho AGORA, o que você eliminaria imediatamente se pudesse?",
            StepBody::SingleChoice {
                options: vec![
                    OptionDefinition::new("abdomen", "Barriga (Pochete)")
                        .with_image("assets/images/areas/abdomen.webp")
                        .with_description(
                            "Aquela gordura que marca na roupa, dobra quando você senta e não \
                             sai nem com dieta.",
                        ),
                    OptionDefinition::new("flanks", "Cintura (Pneuzinhos)")
                        .with_image("assets/images/areas/flanks.webp")
                        .with_description(
                            "Gordura lateral que deforma sua silhueta e te impede de usar \
                             roupas mais justas.",
                        ),
                    OptionDefinition::new("arms", "Braços (Tchauzinho)")
                        .with_image("assets/images/areas/arms.webp")
                        .with_description(
                            "A insegurança de dar tchau ou usar blusas de alça por causa da \
                             flacidez e volume.",
                        ),
                    OptionDefinition::new("thighs", "Interno de Coxa")
                        .with_image("assets/images/areas/thighs.webp")
                        .with_description(
                            "O desconforto do atrito ao andar e a dificuldade em encontrar \
                             calças que vistam bem.",
                        ),
                ],
            },
        )
        .with_subtext("Seja sincera. Para te ajudar, precisamos saber onde está sua maior dor."),
        StepDefinition::new(
            "weight_current",
            "Qual é o seu PESO ATUAL?",
            StepBody::NumberInput {
                placeholder: Some("Ex: 65.5".into()),
                unit: Some("kg".into()),
                bounds: Some(NumberBounds::new(30.0, 200.0)),
            },
        )
        .with_subtext("Utilizamos este dado para calcular seu IMC e definir o protocolo ideal."),
        StepDefinition::new(
            "weight_desired",
            "Qual é o seu PESO DOS SONHOS?",
            StepBody::NumberInput {
                placeholder: Some("Ex: 58.0".into()),
                unit: Some("kg".into()),
                bounds: Some(NumberBounds::new(30.0, 200.0)),
            },
        )
        .with_subtext("Onde você quer chegar? Defina sua meta."),
        StepDefinition::new(
            "height",
            "Qual é a sua ALTURA?",
            StepBody::NumberInput {
                placeholder: Some("1.65".into()),
                unit: Some("m".into()),
                bounds: Some(NumberBounds::new(1.0, 2.5)),
            },
        )
        .with_subtext("Digite em metros (ex: 1.65). Importante para análise de proporção corporal."),
        StepDefinition::new(
            "bmi_diagnosis",
            "Análise de IMC & Perfil Corporal",
            StepBody::Info {
                image: Some("assets/images/info/body-composition.webp".into()),
                layout: InfoLayout::BmiDiagnosis,
            },
        )
        .with_subtext("Calculando seu diagnóstico personalizado..."),
        StepDefinition::new(
            "info_fat_types",
            "Você não tem culpa de não conseguir emagrecer essa área.",
            StepBody::Info {
                image: Some("assets/images/info/fat-types.webp".into()),
                layout: InfoLayout::Science,
            },
        )
        .with_subtext(
            "Existe uma diferença crucial: Gordura Visceral vs. Gordura Compacta. A gordura \
             compacta é um tecido fibroso, pobre em circulação. Ela \"trava\" e não sai com \
             dietas comuns. É exatamente essa que vamos atacar.",
        ),
        StepDefinition::new(
            "diet_history",
            "Como você descreve sua luta contra a balança?",
            StepBody::SingleChoice {
                options: vec![
                    OptionDefinition::new(
                        "yoyo",
                        "Efeito Sanfona: Emagreço, mas ganho tudo de volta rápido.",
                    )
                    .with_icon("activity"),
                    OptionDefinition::new(
                        "strict",
                        "Esforço em vão: Faço dieta, treino, mas a barriga continua lá.",
                    )
                    .with_icon("ban"),
                    OptionDefinition::new(
                        "metabolism",
                        "Metabolismo Lento: Sinto que meu corpo parou de queimar gordura.",
                    )
                    .with_icon("clock"),
                    OptionDefinition::new(
                        "start",
                        "Estou começando agora e não quero perder tempo errando.",
                    )
                    .with_icon("target"),
                ],
            },
        ),
        StepDefinition::new(
            "upcoming_event",
            "Por que você decidiu que BASTA e precisa mudar agora?",
            StepBody::SingleChoice {
                options: vec![
                    OptionDefinition::new(
                        "shame",
                        "Não me reconheço mais no espelho e quero resgatar minha autoestima.",
                    )
                    .with_icon("user"),
                    OptionDefinition::new(
                        "event",
                        "Tenho um evento/viagem importante e não quero ir me sentindo mal.",
                    )
                    .with_icon("calendar"),
                    OptionDefinition::new(
                        "summer",
                        "O verão está chegando e tenho pavor de colocar biquíni hoje.",
                    )
                    .with_icon("star"),
                ],
            },
        )
        .with_subtext("Identificar seu motivador real aumenta em 80% sua chance de sucesso."),
        StepDefinition::new(
            "clothing_pain",
            "Qual destas situações te causa mais constrangimento hoje?",
            StepBody::SingleChoice {
                options: vec![
                    OptionDefinition::new(
                        "tight_jeans",
                        "Sentar e sentir a calça apertando, dividindo a barriga.",
                    )
                    .with_icon("alert-triangle"),
                    OptionDefinition::new(
                        "fitting_room",
                        "Experimentar roupas e sair da loja frustrada porque nada ficou bom.",
                    )
                    .with_icon("ban"),
                    OptionDefinition::new(
                        "photos",
                        "Fugir de fotos de corpo inteiro ou se esconder atrás de outras pessoas.",
                    )
                    .with_icon("zap"),
                    OptionDefinition::new(
                        "intimacy",
                        "Vergonha de mostrar o corpo até para o parceiro(a).",
                    )
                    .with_icon("heart"),
                ],
            },
        )
        .with_subtext("Este é um ambiente seguro, seja honesta."),
        StepDefinition::new(
            "info_cortisol",
            "O Ciclo do Estresse x Gordura",
            StepBody::Info {
                image: Some("assets/images/info/cortisol.webp".into()),
                layout: InfoLayout::Alert,
            },
        )
        .with_subtext(
            "Você sabia que o estresse libera Cortisol, um hormônio que literalmente OBRIGA \
             seu corpo a estocar gordura na barriga como proteção? Se você é ansiosa, dietas \
             restritivas podem estar PIORANDO seu caso.",
        ),
        StepDefinition::new(
            "emotional_eating",
            "Você sente que a ansiedade sabota seus resultados?",
            StepBody::SingleChoice {
                options: vec![
                    OptionDefinition::new(
                        "often",
                        "Sim, desconto tudo na comida (doces/massas) quando estou nervosa.",
                    )
                    .with_icon("brain"),
                    OptionDefinition::new("sometimes", "Às vezes perco o controle no fim do dia.")
                        .with_icon("activity"),
                    OptionDefinition::new(
                        "rarely",
                        "Não, meu problema é puramente metabólico/localizado.",
                    )
                    .with_icon("scale"),
                ],
            },
        ),
        StepDefinition::new(
            "attempts",
            "O que mais te frustrou nas tentativas anteriores?",
            StepBody::SingleChoice {
                options: vec![
                    OptionDefinition::new(
                        "money_waste",
                        "Gastei dinheiro com remédios/chás/cintas que não funcionaram.",
                    ),
                    OptionDefinition::new(
                        "gym_fail",
                        "Me matei na academia e a gordura localizada não saiu.",
                    ),
                    OptionDefinition::new(
                        "esthetic_fail",
                        "Fiz tratamentos estéticos fracos que não deram resultado.",
                    ),
                    OptionDefinition::new(
                        "fear",
                        "Tenho medo de cirurgias invasivas (Lipo), busco algo seguro.",
                    ),
                ],
            },
        ),
        StepDefinition::new(
            "expectation",
            "Qual é o seu SONHO de corpo hoje?",
            StepBody::SingleChoice {
                options: vec![
                    OptionDefinition::new(
                        "clothes",
                        "Voltar a usar minhas roupas antigas sem nada apertando.",
                    ),
                    OptionDefinition::new(
                        "natural",
                        "Corpo modelado, cintura fina, mas com aspecto natural.",
                    ),
                    OptionDefinition::new(
                        "radical",
                        "Barriga \"Negativa\" ou \"Chapada\" (estilo Lipo LAD).",
                    ),
                ],
            },
        ),
        StepDefinition::new(
            "info_mechanism",
            "A Solução: Liquefação da Gordura",
            StepBody::Info {
                image: Some("assets/images/info/mechanism.webp".into()),
                layout: InfoLayout::Premium,
            },
        )
        .with_subtext(
            "Imagine tentar beber gelo com um canudo. É impossível. Nossa tecnologia de \
             Hidrolipoclasia transforma essa gordura sólida e fibrosa em líquido, permitindo \
             que seu corpo a elimine naturalmente na urina. Sem cortes, sem internação.",
        ),
        StepDefinition::new(
            "previous_surgery",
            "Por segurança, precisamos saber:",
            StepBody::SingleChoice {
                options: vec![
                    OptionDefinition::new("no", "Não, nunca fiz cirurgias na área."),
                    OptionDefinition::new("lipo", "Sim, já fiz Lipoaspiração (e a gordura voltou)."),
                    OptionDefinition::new("abdo", "Sim, fiz Abdominoplastia."),
                    OptionDefinition::new("c_section", "Apenas Cesárea."),
                ],
            },
        )
        .with_subtext("Você tem histórico de cirurgias na região?"),
        StepDefinition::new(
            "support_system",
            "Para atingir esse resultado, quem te apoia hoje?",
            StepBody::SingleChoice {
                options: vec![
                    OptionDefinition::new(
                        "self",
                        "Eu mesma tomo minhas decisões e invisto em mim.",
                    )
                    .with_icon("user"),
                    OptionDefinition::new(
                        "partner",
                        "Geralmente converso com meu marido/parceiro.",
                    )
                    .with_icon("users"),
                    OptionDefinition::new("family", "Conto com ajuda da família.")
                        .with_icon("heart"),
                ],
            },
        ),
        StepDefinition::new(
            "urgency",
            "Sendo 100% honesta: O quanto isso é uma PRIORIDADE pra você?",
            StepBody::SingleChoice {
                options: vec![
                    OptionDefinition::new(
                        "high",
                        "URGENTE (10): Não aguento mais um dia assim, preciso resolver.",
                    ),
                    OptionDefinition::new(
                        "medium",
                        "MODERADA (7): Me incomoda muito, mas tenho algumas dúvidas.",
                    ),
                    OptionDefinition::new("low", "BAIXA (5): Estou apenas pesquisando preços."),
                ],
            },
        )
        .with_subtext("Nossa agenda é limitada. Damos prioridade para quem está decidida."),
        StepDefinition::new(
            "lead_capture",
            "Análise Concluída! Onde enviamos seu diagnóstico?",
            StepBody::LeadCapture,
        )
        .with_subtext(
            "Insira seu WhatsApp para receber a avaliação da Dra. Marina e destravar sua \
             condição especial.",
        ),
    ];

    Catalog::new(steps).expect("authored catalog is non-empty with unique step ids")
}

/// The per-category diagnosis copy shown on the derived-metric step.
#[must_use]
pub fn diagnosis_message(category: BmiCategory) -> &'static str {
    match category {
        BmiCategory::Underweight => {
            "Apesar do peso baixo, a gordura localizada persiste devido à sua estrutura compacta."
        }
        BmiCategory::Normal => {
            "Seu peso está ideal, mas a 'pochete' ou gordura localizada distorce sua harmonia \
             corporal."
        }
        BmiCategory::Overweight => {
            "Você apresenta sobrepeso leve, com acúmulo de gordura focado na região abdominal."
        }
        BmiCategory::Obese => {
            "Seu metabolismo precisa de um estímulo potente para destravar a queima de gordura."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use funnel_core::bmi::{HEIGHT_STEP_ID, WEIGHT_STEP_ID};
    use funnel_core::model::StepId;

    #[test]
    fn catalog_builds_and_ends_on_lead_capture() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 18);
        let last = catalog.get(catalog.last_index()).unwrap();
        assert!(last.is_lead_capture());
    }

    #[test]
    fn bmi_inputs_precede_the_diagnosis_step() {
        let catalog = default_catalog();
        let weight = catalog.index_of(&StepId::new(WEIGHT_STEP_ID)).unwrap();
        let height = catalog.index_of(&StepId::new(HEIGHT_STEP_ID)).unwrap();
        let diagnosis = catalog.index_of(&StepId::new("bmi_diagnosis")).unwrap();
        assert!(weight < diagnosis);
        assert!(height < diagnosis);
    }

    #[test]
    fn every_category_has_diagnosis_copy() {
        for category in [
            BmiCategory::Underweight,
            BmiCategory::Normal,
            BmiCategory::Overweight,
            BmiCategory::Obese,
        ] {
            assert!(!diagnosis_message(category).is_empty());
        }
    }
}
