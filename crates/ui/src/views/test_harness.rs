use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use funnel_core::model::QuizSession;
use services::{OfferContent, QuizService, default_catalog};
use storage::{InMemorySessionStore, Storage};

use crate::context::{UiApp, build_app_context};
use crate::platform::{LinkOpenerRef, UiLinkOpener};
use crate::views::{OfferView, ProcessingView, QuizView};

struct NullLinkOpener;

impl UiLinkOpener for NullLinkOpener {
    fn open_url(&self, _url: &str) {}
}

struct TestApp {
    quiz: Arc<QuizService>,
    offer_content: Arc<OfferContent>,
}

impl UiApp for TestApp {
    fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    fn offer_content(&self) -> Arc<OfferContent> {
        Arc::clone(&self.offer_content)
    }

    fn link_opener(&self) -> LinkOpenerRef {
        Arc::new(NullLinkOpener)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Quiz,
    Processing,
    Offer,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    restored: QuizSession,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let restored = props.restored.clone();
    let session = use_signal(move || restored.clone());
    match props.view {
        ViewKind::Quiz => rsx! { QuizView { session } },
        ViewKind::Processing => rsx! { ProcessingView { session } },
        ViewKind::Offer => rsx! { OfferView { session } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub store: InMemorySessionStore,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, restored: QuizSession) -> ViewHarness {
    let store = InMemorySessionStore::new();
    let storage = Storage {
        sessions: Arc::new(store.clone()),
    };
    let quiz = Arc::new(QuizService::new(Arc::new(default_catalog()), &storage));
    let app = Arc::new(TestApp {
        quiz,
        offer_content: Arc::new(OfferContent::vitalle()),
    });

    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app, view, restored });

    ViewHarness { dom, store }
}
