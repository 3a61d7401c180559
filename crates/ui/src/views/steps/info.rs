use dioxus::prelude::*;
use funnel_core::bmi::BmiReading;
use funnel_core::model::{Answer, InfoLayout, QuizSession, StepBody, StepDefinition};
use services::catalog::diagnosis_message;

use crate::vm::{bmi_category_label, severity_class};

#[component]
pub fn InfoStep(
    step: StepDefinition,
    session: Signal<QuizSession>,
    on_answer: Callback<Answer>,
) -> Element {
    let StepBody::Info { image, layout } = step.body().clone() else {
        return rsx! {};
    };

    let body = match layout {
        InfoLayout::BmiDiagnosis => {
            // Recomputed on every render so a changed upstream answer after
            // back-navigation is reflected immediately.
            let reading = BmiReading::from_answers(session.read().answers());
            let value = format!("{:.1}", reading.value());
            let category = reading.category();
            let label = category.map(bmi_category_label);
            let tier = category.map_or("neutral", |c| severity_class(c.severity()));
            let message = category.map(diagnosis_message);
            rsx! {
                div { class: "bmi-card bmi-card--{tier}",
                    h3 { class: "bmi-card-heading", "Seu IMC Calculado" }
                    div { class: "bmi-card-value", "{value}" }
                    if let Some(label) = label {
                        div { class: "bmi-card-category", "{label}" }
                    }
                    if let Some(message) = message {
                        div { class: "bmi-card-diagnosis",
                            p { class: "bmi-card-diagnosis-title", "Diagnóstico da Dra:" }
                            p { class: "bmi-card-diagnosis-text", "{message}" }
                        }
                    }
                }
            }
        }
        InfoLayout::Science | InfoLayout::Alert | InfoLayout::Premium | InfoLayout::Plain => {
            let variant = match layout {
                InfoLayout::Science => "science",
                InfoLayout::Alert => "alert",
                InfoLayout::Premium => "premium",
                _ => "plain",
            };
            rsx! {
                div { class: "info-card info-card--{variant}",
                    if let Some(image) = image.as_ref() {
                        img { class: "info-card-image", src: "{image}", alt: "" }
                    }
                }
            }
        }
    };

    rsx! {
        {body}
        button {
            class: "btn btn-primary info-continue",
            r#type: "button",
            onclick: move |_| on_answer.call(Answer::ack()),
            "Entendi, Continuar"
        }
    }
}
