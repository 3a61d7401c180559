use dioxus::prelude::*;
use funnel_core::model::QuizSession;
use services::processing::{PROCESSING_STAGES, PROCESSING_TICK};
use services::ProcessingSequence;

use crate::context::AppContext;

#[component]
pub fn ProcessingView(session: Signal<QuizSession>) -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz();
    let mut sequence = use_signal(ProcessingSequence::new);

    // The tick loop is owned by the hook, so leaving the view cancels it.
    use_future(move || {
        let quiz = quiz.clone();
        let mut session = session;
        async move {
            loop {
                tokio::time::sleep(PROCESSING_TICK).await;
                let fire = sequence.write().tick();
                if fire {
                    let mut current = session.peek().clone();
                    quiz.finish_processing(&mut current).await;
                    session.set(current);
                    break;
                }
            }
        }
    });

    let snapshot = *sequence.read();
    let percent = snapshot.percent();
    let status = snapshot.status_label();
    let active = snapshot.stage_index();
    let full = snapshot.is_full();

    let checklist = PROCESSING_STAGES.iter().enumerate().map(|(index, stage)| {
        let stage_class = if index < active || full {
            "processing-stage processing-stage--done"
        } else if index == active {
            "processing-stage processing-stage--active"
        } else {
            "processing-stage"
        };
        rsx! {
            div { class: "{stage_class}",
                span { class: "processing-stage-marker" }
                span { class: "processing-stage-text", "{stage}" }
            }
        }
    });

    rsx! {
        div { class: "page processing-page",
            div { class: "processing-dial",
                div {
                    class: "processing-dial-fill",
                    style: "--processing-percent: {percent}",
                }
                span { class: "processing-dial-value", "{percent}%" }
            }
            p { class: "processing-status", "{status}" }
            div { class: "processing-checklist",
                {checklist}
            }
        }
    }
}
