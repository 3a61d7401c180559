use dioxus::prelude::*;
use funnel_core::model::{Answer, OptionDefinition, StepBody, StepDefinition};

#[component]
pub fn ChoiceStep(
    step: StepDefinition,
    selected: Option<String>,
    on_answer: Callback<Answer>,
) -> Element {
    let mut detail = use_signal(|| None::<OptionDefinition>);

    let StepBody::SingleChoice { options } = step.body() else {
        return rsx! {};
    };

    let cards = options.iter().map(|option| {
        let option = option.clone();
        let option_id = option.id.clone();
        let is_selected = selected.as_deref() == Some(option.id.as_str());
        let card_class = if is_selected {
            "choice-card choice-card--selected"
        } else {
            "choice-card"
        };
        let detail_option = option.clone();
        let mut detail = detail;
        rsx! {
            button {
                class: "{card_class}",
                r#type: "button",
                onclick: move |_| on_answer.call(Answer::choice(option_id.clone())),
                if let Some(image) = option.image.as_ref() {
                    img { class: "choice-card-image", src: "{image}", alt: "{option.label}" }
                }
                if let Some(icon) = option.icon.as_ref() {
                    span { class: "choice-card-icon choice-card-icon--{icon}" }
                }
                span { class: "choice-card-label", "{option.label}" }
                if option.description.is_some() {
                    span {
                        class: "choice-card-more",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            detail.set(Some(detail_option.clone()));
                        },
                        "Saiba mais"
                    }
                }
            }
        }
    });

    rsx! {
        div { class: "choice-grid",
            {cards}
        }
        if let Some(option) = detail() {
            div {
                class: "choice-detail-overlay",
                onclick: move |_| detail.set(None),
                div {
                    class: "choice-detail",
                    onclick: move |evt| evt.stop_propagation(),
                    if let Some(image) = option.image.as_ref() {
                        img { class: "choice-detail-image", src: "{image}", alt: "{option.label}" }
                    }
                    h3 { class: "choice-detail-title", "{option.label}" }
                    if let Some(description) = option.description.as_ref() {
                        p { class: "choice-detail-text", "{description}" }
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| detail.set(None),
                        "Fechar"
                    }
                }
            }
        }
    }
}
