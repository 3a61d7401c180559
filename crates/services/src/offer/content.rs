//! Authored copy of the offer screen, carried as opaque data.

/// One benefit bullet under the headline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Benefit {
    pub title: String,
    pub description: String,
}

/// One testimonial in the rotating carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub name: String,
    pub text: String,
    pub stars: u8,
    pub date: String,
}

/// One accordion entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Pricing block of the revealed offer.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferDetails {
    pub title: String,
    pub old_price: f64,
    pub new_price: f64,
    pub installments: u8,
    pub installment_value: f64,
    pub items: Vec<String>,
    pub payment_methods: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinicInfo {
    pub address: String,
    pub hours: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialistBio {
    pub name: String,
    pub title: String,
    pub text: String,
    pub photo: String,
}

/// The full authored content of the offer screen.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferContent {
    pub headline: String,
    pub subheadline: String,
    pub benefits: Vec<Benefit>,
    pub offer_text: String,
    pub offer: OfferDetails,
    pub reviews: Vec<Review>,
    pub faq: Vec<FaqEntry>,
    pub clinic: ClinicInfo,
    pub bio: SpecialistBio,
    pub before_after_images: Vec<String>,
    pub video_cover: String,
}

impl OfferContent {
    /// The default Vitalle offer copy.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn vitalle() -> Self {
        Self {
            headline: "DIAGNÓSTICO: Gordura Compacta Resistente Detectada.".into(),
            subheadline: "Não é culpa da sua falta de esforço. Entenda por que dietas falham \
                          no seu caso e como eliminar essa gordura sem cirurgia."
                .into(),
            benefits: vec![
                Benefit {
                    title: "Sem Cortes".into(),
                    description: "Procedimento minimamente invasivo e seguro.".into(),
                },
                Benefit {
                    title: "Recuperação Imediata".into(),
                    description: "Volte à rotina de trabalho no mesmo dia.".into(),
                },
                Benefit {
                    title: "Resultados Rápidos".into(),
                    description: "Redução de medidas visível nas primeiras sessões.".into(),
                },
            ],
            offer_text: "O resultado do seu teste confirmou: você tem Gordura Compacta \
                         Resistente. É por isso que dietas comuns não funcionam nessa área \
                         específica.\n\nA Dra. Marina preparou uma condição especial de \
                         Hidrolipoclasia para o seu perfil."
                .into(),
            offer: OfferDetails {
                title: "Sessão Especial de Hidrolipo".into(),
                old_price: 450.0,
                new_price: 150.0,
                installments: 2,
                installment_value: 75.0,
                items: vec![
                    "1 Sessão de Hidrolipoclasia Focalizada".into(),
                    "BÔNUS: Aplicação de Manta Térmica Inclusa".into(),
                    "Drenagem Linfática Localizada".into(),
                    "Avaliação de Bioimpedância Grátis".into(),
                ],
                payment_methods: vec![
                    "Cartão de Crédito".into(),
                    "Cartão de Débito".into(),
                    "PIX".into(),
                    "Dinheiro".into(),
                ],
            },
            reviews: vec![
                Review {
                    name: "Carolina M.".into(),
                    text: "Eu já tinha tentado de tudo. A Dra. Marina foi a única que resolveu \
                           minha pochete. Na segunda sessão já perdi 4cm. O atendimento é \
                           impecável!"
                        .into(),
                    stars: 5,
                    date: "há 2 semanas".into(),
                },
                Review {
                    name: "Fernanda S.".into(),
                    text: "Morria de medo de Lipo. A Hidrolipo foi a melhor escolha da minha \
                           vida. Indolor, rápido e o resultado nos flancos foi incrível."
                        .into(),
                    stars: 5,
                    date: "há 1 mês".into(),
                },
                Review {
                    name: "Beatriz O.".into(),
                    text: "Clínica linda e profissionais que passam muita segurança. Elas não \
                           te vendem sonho, entregam resultado. Minha cintura afinou muito!"
                        .into(),
                    stars: 5,
                    date: "há 3 semanas".into(),
                },
                Review {
                    name: "Juliana M.".into(),
                    text: "Investimento que vale cada centavo. Recuperei minha autoestima \
                           depois da gravidez graças ao protocolo da Vitalle."
                        .into(),
                    stars: 5,
                    date: "há 2 meses".into(),
                },
                Review {
                    name: "Patrícia L.".into(),
                    text: "Estou apaixonada pelo meu resultado. Ambiente sofisticado e a Dra \
                           é um amor. Recomendo de olhos fechados."
                        .into(),
                    stars: 5,
                    date: "há 5 dias".into(),
                },
            ],
            faq: vec![
                FaqEntry {
                    question: "O procedimento dói?".into(),
                    answer: "O desconforto é mínimo. Utilizamos uma solução anestésica local \
                             (tumescente) que torna o procedimento muito tranquilo e tolerável."
                        .into(),
                },
                FaqEntry {
                    question: "Quantas sessões são necessárias?".into(),
                    answer: "Varia de acordo com a quantidade de gordura, mas nossos \
                             protocolos geralmente variam entre 3 a 5 sessões para resultados \
                             expressivos."
                        .into(),
                },
                FaqEntry {
                    question: "Preciso usar cinta modeladora?".into(),
                    answer: "Sim, o uso da cinta é fundamental nos dias seguintes para \
                             garantir que a pele retraia corretamente e modele a cintura."
                        .into(),
                },
                FaqEntry {
                    question: "Posso trabalhar no dia seguinte?".into(),
                    answer: "Sim! Diferente da lipoaspiração tradicional, a recuperação é \
                             imediata. Você pode voltar às suas atividades normais (exceto \
                             exercícios pesados) no mesmo dia."
                        .into(),
                },
                FaqEntry {
                    question: "Quais são os cuidados pós-procedimento?".into(),
                    answer: "É necessário usar a cinta modeladora pelo tempo indicado, \
                             realizar as sessões de drenagem linfática inclusas no pacote e \
                             evitar exposição solar na área tratada enquanto houver hematomas."
                        .into(),
                },
                FaqEntry {
                    question: "Existem contraindicações?".into(),
                    answer: "Sim. Gestantes, lactantes, portadores de marcapasso, pessoas com \
                             infecções ativas na pele ou doenças autoimunes descontroladas \
                             devem passar por avaliação prévia específica."
                        .into(),
                },
                FaqEntry {
                    question: "Em quanto tempo vejo o resultado final?".into(),
                    answer: "Os resultados começam a aparecer logo após a primeira sessão, \
                             mas o resultado final de modelagem e retração da pele é observado \
                             geralmente 30 dias após o término do protocolo."
                        .into(),
                },
            ],
            clinic: ClinicInfo {
                address: "Av. das Acácias, 1200 / Sala 305 - Centro, Nova Iguaçu RJ".into(),
                hours: "Segunda à Sexta 09:00 - 18:00 / Sábado 09:00 - 12:00".into(),
                phone: "(21) 3000-0000".into(),
            },
            bio: SpecialistBio {
                name: "Dra. Marina Duarte".into(),
                title: "Biomédica Esteta".into(),
                text: "Sou Dra Marina Duarte, biomédica esteta especializada em procedimentos \
                       que realçam a beleza natural e elevam a autoestima dos meus pacientes. \
                       Trabalho com técnicas modernas e seguras, sempre com foco em \
                       resultados naturais e personalizados."
                    .into(),
                photo: "assets/images/offer/specialist.webp".into(),
            },
            before_after_images: vec![
                "assets/images/offer/result-1.webp".into(),
                "assets/images/offer/result-2.webp".into(),
                "assets/images/offer/result-3.webp".into(),
                "assets/images/offer/result-4.webp".into(),
            ],
            video_cover: "assets/images/offer/video-cover.webp".into(),
        }
    }
}
