use std::sync::Arc;

mod desktop;

/// Opens external links (the outbound WhatsApp CTA) in the system browser.
pub trait UiLinkOpener: Send + Sync {
    fn open_url(&self, url: &str);
}

pub type LinkOpenerRef = Arc<dyn UiLinkOpener>;

pub use desktop::DesktopLinkOpener;
