use dioxus::prelude::*;
use funnel_core::model::{QuizSession, SessionMode};

use crate::context::AppContext;
use crate::views::{
    OfferView, ProcessingView, QuizView, ViewError, ViewState, view_state_from_resource,
};

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz();
    let resource = use_resource(move || {
        let quiz = quiz.clone();
        // load_session degrades to fresh internally, so this never errors.
        async move { Ok::<_, ViewError>(quiz.load_session().await) }
    });
    let state = view_state_from_resource(resource);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Stable OS/window title. Screen switches happen inside the root.
        document::Title { "Vitalle" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                match state {
                    ViewState::Idle | ViewState::Loading => rsx! {
                        div { class: "splash", p { "Carregando..." } }
                    },
                    ViewState::Error(err) => rsx! {
                        p { "{err.message()}" }
                    },
                    ViewState::Ready(session) => rsx! {
                        FunnelRoot { restored: session }
                    },
                }
            }
        }
    }
}

/// Owns the live session and dispatches on its mode. The offer screen wins
/// over processing, so a restored `showVSL` session lands directly on the
/// offer.
#[component]
fn FunnelRoot(restored: QuizSession) -> Element {
    let session = use_signal(move || restored.clone());

    match session.read().mode() {
        SessionMode::ShowingOffer => rsx! {
            OfferView { session }
        },
        SessionMode::Processing => rsx! {
            ProcessingView { session }
        },
        SessionMode::Active(_) => rsx! {
            QuizView { session }
        },
    }
}
