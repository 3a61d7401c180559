use std::rc::Rc;

use dioxus::prelude::*;
use funnel_core::model::QuizSession;
use services::offer::contact::whatsapp_link;
use services::offer::state::{
    COUNTDOWN_TICK, OFFER_REVEAL_DELAY, REVIEW_ROTATION, SOUND_HINT_HIDE_DELAY,
};
use services::{OfferState, VideoPlayer};

use super::player::VimeoFrame;
use crate::context::AppContext;
use crate::vm::format_countdown;

const PLAYER_FRAME_ID: &str = "vsl-player";
const VIDEO_URL: &str = "https://player.vimeo.com/video/1156096923?api=1&autoplay=0&controls=0&title=0&byline=0&portrait=0&playsinline=1";

#[component]
pub fn OfferView(session: Signal<QuizSession>) -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz();
    let content = ctx.offer_content();
    let opener = ctx.link_opener();
    let player = use_hook(|| Rc::new(VimeoFrame::new(PLAYER_FRAME_ID)));
    let mut offer = use_signal(OfferState::new);

    // Review carousel rotation; cancelled with the view.
    let review_count = content.reviews.len();
    use_future(move || async move {
        loop {
            tokio::time::sleep(REVIEW_ROTATION).await;
            offer.write().rotate_review(review_count);
        }
    });

    let player_for_start = Rc::clone(&player);
    let on_start_video = use_callback(move |()| {
        let player = Rc::clone(&player_for_start);
        let mut offer = offer;
        if offer.peek().video_started() {
            return;
        }
        offer.write().start_video();

        spawn(async move {
            if let Err(error) = async {
                player.ready().await?;
                player.play().await
            }
            .await
            {
                tracing::warn!(%error, "video start failed, screen continues without playback");
            }
        });

        // Reveal after the fixed delay, then run the countdown to zero.
        spawn(async move {
            tokio::time::sleep(OFFER_REVEAL_DELAY).await;
            offer.write().reveal_offer();
            while offer.peek().countdown_secs() > 0 {
                tokio::time::sleep(COUNTDOWN_TICK).await;
                offer.write().tick_countdown();
            }
        });
    });

    let player_for_unmute = Rc::clone(&player);
    let on_unmute = use_callback(move |()| {
        let player = Rc::clone(&player_for_unmute);
        let mut offer = offer;
        spawn(async move {
            // Order matters for embedded browsers: play before unmuting.
            let result = async {
                player.ready().await?;
                player.play().await?;
                player.set_muted(false).await?;
                player.set_volume(1.0).await
            }
            .await;
            match result {
                Ok(()) => {
                    offer.write().unmute();
                    tokio::time::sleep(SOUND_HINT_HIDE_DELAY).await;
                    offer.write().hide_sound_hint();
                }
                Err(error) => {
                    tracing::warn!(%error, "unmute failed, playback stays muted");
                }
            }
        });
    });

    let quiz_for_leave = quiz.clone();
    let leave_to_quiz = use_callback(move |()| {
        let quiz = quiz_for_leave.clone();
        let mut session = session;
        spawn(async move {
            let mut current = session.peek().clone();
            quiz.return_to_quiz(&mut current).await;
            session.set(current);
        });
    });

    // First back attempt raises the exit-intent modal; once spent, back
    // navigates for real.
    let on_back = use_callback(move |()| {
        let mut offer = offer;
        let raised = offer.write().trigger_exit_intent();
        if !raised {
            leave_to_quiz.call(());
        }
    });

    let content_for_cta = content.clone();
    let opener_for_cta = opener;
    let on_cta = use_callback(move |origin: &'static str| {
        let link = whatsapp_link(content_for_cta.offer.new_price, origin);
        opener_for_cta.open_url(link.as_str());
    });

    let state = offer.read().clone();
    let display_name = session.read().display_name().map(ToString::to_string);
    let header_label = display_name
        .map_or_else(|| "Análise Concluída".to_string(), |name| format!("Análise de {name}"));
    let countdown = format_countdown(state.countdown_secs());
    let old_price = format!("{:.2}", content.offer.old_price);
    let new_price = format!("{:.2}", content.offer.new_price);
    let installment = format!(
        "{}x de R$ {:.2}",
        content.offer.installments, content.offer.installment_value
    );
    let payments = content.offer.payment_methods.join(" \u{b7} ");
    let review = content.reviews.get(state.review_index());

    let benefit_cards = content.benefits.iter().map(|benefit| {
        rsx! {
            div { class: "offer-benefit",
                h4 { class: "offer-benefit-title", "{benefit.title}" }
                p { class: "offer-benefit-text", "{benefit.description}" }
            }
        }
    });

    let offer_items = content.offer.items.iter().map(|item| {
        rsx! {
            li { class: "offer-item", "{item}" }
        }
    });

    let result_images = content.before_after_images.iter().map(|image| {
        rsx! {
            div { class: "offer-result",
                img { class: "offer-result-image", src: "{image}", alt: "Antes e depois" }
                span { class: "offer-result-badge", "Resultado Vitalle" }
            }
        }
    });

    let faq_entries = content.faq.iter().enumerate().map(|(index, entry)| {
        let open = state.open_faq() == Some(index);
        let mut offer = offer;
        rsx! {
            div { class: "faq-entry",
                button {
                    class: "faq-question",
                    r#type: "button",
                    onclick: move |_| offer.write().toggle_faq(index),
                    span { "{entry.question}" }
                    span { class: "faq-caret", if open { "\u{25b4}" } else { "\u{25be}" } }
                }
                if open {
                    p { class: "faq-answer", "{entry.answer}" }
                }
            }
        }
    });

    rsx! {
        div {
            class: "page offer-page",
            onmouseleave: move |evt| {
                // Pointer leaving through the top edge reads as exit intent.
                if evt.client_coordinates().y <= 0.0 {
                    offer.write().trigger_exit_intent();
                }
            },

            if state.exit_intent_visible() {
                div { class: "exit-overlay",
                    div { class: "exit-modal",
                        h2 { class: "exit-title", "Espere!" }
                        p { class: "exit-body", "Você vai perder sua vaga?" }
                        p { class: "exit-detail",
                            "A condição especial de R$ {old_price} por R$ {new_price} é válida apenas para essa sessão."
                        }
                        button {
                            class: "btn btn-cta",
                            r#type: "button",
                            onclick: move |_| offer.write().dismiss_exit_intent(),
                            "SIM! QUERO APROVEITAR AGORA"
                        }
                        button {
                            class: "exit-decline",
                            r#type: "button",
                            onclick: move |_| leave_to_quiz.call(()),
                            "Não, quero perder o desconto"
                        }
                    }
                }
            }

            header { class: "offer-header",
                button {
                    class: "offer-back",
                    r#type: "button",
                    onclick: move |_| on_back.call(()),
                    "\u{2039}"
                }
                span { class: "offer-header-label", "{header_label}" }
            }

            section { class: "offer-hero",
                h1 { class: "offer-headline", "{content.headline}" }
                p { class: "offer-subheadline", "{content.subheadline}" }
            }

            section { class: "offer-video",
                iframe {
                    id: "{PLAYER_FRAME_ID}",
                    class: "offer-video-frame",
                    src: "{VIDEO_URL}",
                    allow: "autoplay; fullscreen; encrypted-media",
                }
                if !state.video_started() {
                    div {
                        class: "offer-video-cover",
                        onclick: move |_| on_start_video.call(()),
                        img { class: "offer-video-cover-image", src: "{content.video_cover}", alt: "" }
                        span { class: "offer-video-play", "Assistir Vídeo" }
                    }
                }
                if state.video_started() && state.sound_hint_visible() {
                    button {
                        class: "offer-sound",
                        r#type: "button",
                        onclick: move |_| on_unmute.call(()),
                        if state.muted() { "Toque para Ativar Som" } else { "Som Ativado" }
                    }
                }
            }

            section { class: "offer-diagnosis",
                p { class: "offer-diagnosis-text", "{content.offer_text}" }
            }

            if state.offer_revealed() {
                section { class: "offer-card",
                    div { class: "offer-card-banner", "Oferta Especial Liberada" }
                    div { class: "offer-countdown", "A oferta expira em: {countdown}" }
                    h3 { class: "offer-card-title", "{content.offer.title}" }
                    div { class: "offer-prices",
                        span { class: "offer-price-old", "R$ {old_price}" }
                        span { class: "offer-price-new", "R$ {new_price}" }
                    }
                    p { class: "offer-installments", "ou {installment} sem juros" }
                    ul { class: "offer-items",
                        {offer_items}
                    }
                    button {
                        class: "btn btn-cta offer-cta",
                        r#type: "button",
                        onclick: move |_| on_cta.call("Oferta Hidrolipo"),
                        "GARANTIR MINHA VAGA COM DESCONTO"
                    }
                }
            }

            section { class: "offer-benefits",
                {benefit_cards}
            }

            section { class: "offer-results",
                h3 { class: "offer-section-title", "Resultados Reais" }
                div { class: "offer-result-grid",
                    {result_images}
                }
            }

            section { class: "offer-bio",
                img { class: "offer-bio-photo", src: "{content.bio.photo}", alt: "{content.bio.name}" }
                h3 { class: "offer-bio-name", "{content.bio.name}" }
                p { class: "offer-bio-title", "{content.bio.title}" }
                p { class: "offer-bio-text", "{content.bio.text}" }
            }

            if let Some(review) = review {
                section { class: "offer-review",
                    h3 { class: "offer-section-title", "Quem já fez" }
                    div { class: "offer-review-stars", {"\u{2605}".repeat(usize::from(review.stars))} }
                    blockquote { class: "offer-review-text", "\u{201c}{review.text}\u{201d}" }
                    p { class: "offer-review-meta", "{review.name} · {review.date}" }
                }
            }

            section { class: "offer-faq",
                h3 { class: "offer-section-title", "Dúvidas Frequentes" }
                {faq_entries}
            }

            section { class: "offer-clinic",
                h4 { class: "offer-section-title", "Onde estamos" }
                p { class: "offer-clinic-address", "{content.clinic.address}" }
                p { class: "offer-clinic-hours", "{content.clinic.hours}" }
                p { class: "offer-clinic-phone", "{content.clinic.phone}" }
                p { class: "offer-clinic-payments", "Pagamento: {payments}" }
            }

            if state.offer_revealed() {
                div { class: "offer-sticky",
                    button {
                        class: "btn btn-cta offer-sticky-cta",
                        r#type: "button",
                        onclick: move |_| on_cta.call("Floating Button"),
                        "QUERO GARANTIR MINHA SESSÃO"
                    }
                }
                div { class: "offer-bonus",
                    span { class: "offer-bonus-flag", "SÓ HOJE!" }
                    p { class: "offer-bonus-text", "Bônus Exclusivo: Manta Térmica Inclusa" }
                }
            }
        }
    }
}
