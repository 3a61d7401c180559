use dioxus::prelude::*;
use funnel_core::model::{Answer, StepBody, StepDefinition};

use crate::vm::{clamped_number_input, parse_number_input};

#[component]
pub fn NumberStep(step: StepDefinition, on_answer: Callback<Answer>) -> Element {
    let mut raw = use_signal(String::new);

    let StepBody::NumberInput {
        placeholder,
        unit,
        bounds,
    } = step.body().clone()
    else {
        return rsx! {};
    };

    let parsed = parse_number_input(&raw.read());
    let min = bounds.map(|b| b.min.to_string());
    let max = bounds.map(|b| b.max.to_string());
    let placeholder = placeholder.unwrap_or_default();

    rsx! {
        form {
            class: "number-form",
            onsubmit: move |evt| {
                evt.prevent_default();
                if let Some(value) = clamped_number_input(&raw.peek(), bounds) {
                    on_answer.call(Answer::Number(value));
                }
            },
            div { class: "number-field",
                input {
                    class: "number-input",
                    r#type: "number",
                    step: "0.01",
                    inputmode: "decimal",
                    placeholder: "{placeholder}",
                    min,
                    max,
                    value: "{raw()}",
                    oninput: move |evt| raw.set(evt.value()),
                }
                if let Some(unit) = unit.as_ref() {
                    span { class: "number-unit", "{unit}" }
                }
            }
            button {
                class: "btn btn-primary number-submit",
                r#type: "submit",
                disabled: parsed.is_none(),
                "Continuar"
            }
        }
    }
}
