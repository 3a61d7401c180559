use dioxus::prelude::*;
use funnel_core::model::{Answer, LeadRecord};
use funnel_core::phone::{format_phone, lead_is_complete};

#[component]
pub fn LeadStep(on_answer: Callback<Answer>) -> Element {
    let mut name = use_signal(String::new);
    let mut phone = use_signal(String::new);

    let complete = lead_is_complete(&name.read(), &phone.read());

    rsx! {
        form {
            class: "lead-form",
            onsubmit: move |evt| {
                evt.prevent_default();
                let name = name.peek().clone();
                let phone = phone.peek().clone();
                if lead_is_complete(&name, &phone) {
                    on_answer.call(Answer::Lead(LeadRecord::new(name, phone)));
                }
            },
            div { class: "lead-field",
                input {
                    class: "lead-input",
                    r#type: "text",
                    placeholder: "Seu primeiro nome",
                    value: "{name()}",
                    oninput: move |evt| name.set(evt.value()),
                }
            }
            div { class: "lead-field",
                input {
                    class: "lead-input",
                    r#type: "tel",
                    placeholder: "(21) 99999-9999",
                    value: "{phone()}",
                    // Re-masking is idempotent, so editing mid-string stays stable.
                    oninput: move |evt| phone.set(format_phone(&evt.value())),
                }
            }
            button {
                class: "btn btn-cta lead-submit",
                r#type: "submit",
                disabled: !complete,
                "Ver Meu Resultado"
            }
        }
    }
}
