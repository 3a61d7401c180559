use dioxus::prelude::*;
use funnel_core::model::{Answer, QuizSession, StepBody, SubmitOutcome};
use services::STEP_ADVANCE_DELAY;

use crate::context::AppContext;
use crate::views::steps::{ChoiceStep, InfoStep, LeadStep, NumberStep};
use crate::vm::progress_percent;

#[component]
pub fn QuizView(session: Signal<QuizSession>) -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz();
    let mut pending_advance = use_signal(|| None::<Task>);

    // A deferred advance must not fire into an unmounted view.
    use_drop(move || {
        if let Some(task) = *pending_advance.peek() {
            task.cancel();
        }
    });

    let quiz_for_submit = quiz.clone();
    let on_answer = use_callback(move |answer: Answer| {
        let quiz = quiz_for_submit.clone();
        let mut session = session;
        let mut pending_advance = pending_advance;
        if let Some(task) = pending_advance.take() {
            task.cancel();
        }
        let task = spawn(async move {
            let mut current = session.peek().clone();
            match quiz.submit(&mut current, answer).await {
                Ok(outcome) => {
                    session.set(current);
                    if outcome == SubmitOutcome::AdvancePending {
                        tokio::time::sleep(STEP_ADVANCE_DELAY).await;
                        let mut advanced = session.peek().clone();
                        quiz.advance(&mut advanced).await;
                        session.set(advanced);
                    }
                    pending_advance.set(None);
                }
                Err(error) => {
                    tracing::warn!(%error, "answer rejected");
                }
            }
        });
        pending_advance.set(Some(task));
    });

    let quiz_for_back = quiz.clone();
    let on_back = use_callback(move |()| {
        let quiz = quiz_for_back.clone();
        let mut session = session;
        let mut pending_advance = pending_advance;
        if let Some(task) = pending_advance.take() {
            task.cancel();
        }
        spawn(async move {
            let mut current = session.peek().clone();
            quiz.back(&mut current).await;
            session.set(current);
        });
    });

    let snapshot = session.read().clone();
    let cursor = snapshot.cursor();
    let catalog = quiz.catalog();
    let total = catalog.len();
    let Some(step) = catalog.get(cursor).cloned() else {
        // Unreachable with a validated session; render nothing rather than panic.
        return rsx! {
            p { class: "quiz-empty", "" }
        };
    };
    let percent = progress_percent(cursor, total);
    let position = cursor + 1;
    let selected = snapshot
        .answers()
        .get(step.id())
        .and_then(Answer::as_choice)
        .map(ToString::to_string);

    rsx! {
        div { class: "page quiz-page",
            header { class: "quiz-header",
                div { class: "quiz-header-row",
                    if cursor > 0 {
                        button {
                            class: "quiz-back",
                            r#type: "button",
                            onclick: move |_| on_back.call(()),
                            "\u{2039}"
                        }
                    }
                    span { class: "quiz-logo", "Vitalle" }
                }
                div { class: "quiz-progress",
                    span { class: "quiz-progress-label", "Pergunta {position} de {total}" }
                    div { class: "quiz-progress-track",
                        div {
                            class: "quiz-progress-fill",
                            style: "width: {percent}%",
                        }
                    }
                }
            }

            section { class: "quiz-step",
                h2 { class: "quiz-prompt", "{step.prompt()}" }
                if let Some(subtext) = step.subtext() {
                    p { class: "quiz-subtext", "{subtext}" }
                }
                match step.body() {
                    StepBody::SingleChoice { .. } => rsx! {
                        ChoiceStep { step: step.clone(), selected, on_answer }
                    },
                    StepBody::NumberInput { .. } => rsx! {
                        NumberStep { step: step.clone(), on_answer }
                    },
                    StepBody::LeadCapture => rsx! {
                        LeadStep { on_answer }
                    },
                    StepBody::Info { .. } => rsx! {
                        InfoStep { step: step.clone(), session, on_answer }
                    },
                }
            }
        }
    }
}
