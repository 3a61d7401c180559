use funnel_core::model::{Answer, LeadRecord, QuizSession};
use services::default_catalog;

use super::test_harness::{ViewKind, setup_view_harness};

fn session_at_step(answers: &[Answer]) -> QuizSession {
    let catalog = default_catalog();
    let mut session = QuizSession::fresh();
    for answer in answers {
        session.submit(&catalog, answer.clone()).expect("submit");
        session.advance(&catalog);
    }
    session
}

fn processing_session() -> QuizSession {
    let catalog = default_catalog();
    let mut session = QuizSession::fresh();
    for _ in 0..catalog.last_index() {
        session.advance(&catalog);
    }
    session
        .submit(
            &catalog,
            Answer::Lead(LeadRecord::new("Ana", "(21) 99999-0001")),
        )
        .expect("submit lead");
    session
}

fn offer_session() -> QuizSession {
    let mut session = processing_session();
    session.finish_processing();
    session
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_the_first_step() {
    let mut harness = setup_view_harness(ViewKind::Quiz, QuizSession::fresh());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Pergunta 1 de 18"), "missing progress label in {html}");
    assert!(
        html.contains("Olhando no espelho AGORA"),
        "missing first prompt in {html}"
    );
    assert!(html.contains("Vitalle"), "missing logo in {html}");
    // No back button on the first step.
    assert!(!html.contains("quiz-back"), "unexpected back button in {html}");
    // Rendering alone must not touch the store.
    assert!(harness.store.raw_payload().is_none());
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_shows_back_button_mid_flow() {
    let session = session_at_step(&[Answer::choice("abdomen")]);
    let mut harness = setup_view_harness(ViewKind::Quiz, session);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Pergunta 2 de 18"), "missing progress label in {html}");
    assert!(html.contains("PESO ATUAL"), "missing weight prompt in {html}");
    assert!(html.contains("quiz-back"), "missing back button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_the_derived_diagnosis() {
    let session = session_at_step(&[
        Answer::choice("abdomen"),
        Answer::Number(70.0),
        Answer::Number(58.0),
        Answer::Number(1.75),
    ]);
    let mut harness = setup_view_harness(ViewKind::Quiz, session);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Seu IMC Calculado"), "missing card heading in {html}");
    assert!(html.contains("22.9"), "missing computed value in {html}");
    assert!(html.contains("Peso Normal"), "missing category in {html}");
    assert!(html.contains("Diagnóstico da Dra"), "missing diagnosis in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn processing_view_smoke_renders_dial_and_stages() {
    let mut harness = setup_view_harness(ViewKind::Processing, processing_session());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("0%"), "missing dial value in {html}");
    assert!(
        html.contains("Conectando ao banco de dados"),
        "missing first stage in {html}"
    );
    assert!(
        html.contains("Gerando protocolo personalizado"),
        "missing last stage in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn offer_view_smoke_renders_hero_cover_and_static_sections() {
    let mut harness = setup_view_harness(ViewKind::Offer, offer_session());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Análise de Ana"), "missing header label in {html}");
    assert!(
        html.contains("Gordura Compacta Resistente Detectada"),
        "missing headline in {html}"
    );
    assert!(html.contains("Assistir Vídeo"), "missing video cover in {html}");
    assert!(
        html.contains("resultado do seu teste confirmou"),
        "missing diagnosis copy in {html}"
    );
    assert!(html.contains("\u{2605}\u{2605}\u{2605}\u{2605}\u{2605}"), "missing stars in {html}");
    assert!(html.contains("PIX"), "missing payment methods in {html}");
    // The offer card stays hidden until the reveal delay elapses.
    assert!(
        !html.contains("Oferta Especial Liberada"),
        "offer revealed too early in {html}"
    );
}
