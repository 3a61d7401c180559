use std::sync::Arc;

use services::{OfferContent, QuizService};

use crate::platform::LinkOpenerRef;

/// What the composition root must provide to the UI.
pub trait UiApp: Send + Sync {
    fn quiz(&self) -> Arc<QuizService>;
    fn offer_content(&self) -> Arc<OfferContent>;
    fn link_opener(&self) -> LinkOpenerRef;
}

#[derive(Clone)]
pub struct AppContext {
    quiz: Arc<QuizService>,
    offer_content: Arc<OfferContent>,
    link_opener: LinkOpenerRef,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz: app.quiz(),
            offer_content: app.offer_content(),
            link_opener: app.link_opener(),
        }
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn offer_content(&self) -> Arc<OfferContent> {
        Arc::clone(&self.offer_content)
    }

    #[must_use]
    pub fn link_opener(&self) -> LinkOpenerRef {
        Arc::clone(&self.link_opener)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
