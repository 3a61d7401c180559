use async_trait::async_trait;
use dioxus::document;
use services::{PlayerError, VideoPlayer};

/// Drives the embedded Vimeo iframe through its postMessage API from the
/// webview.
pub struct VimeoFrame {
    frame_id: &'static str,
}

impl VimeoFrame {
    #[must_use]
    pub const fn new(frame_id: &'static str) -> Self {
        Self { frame_id }
    }

    async fn post(&self, method: &str, value: Option<String>) -> Result<(), PlayerError> {
        let value_field = value.map_or_else(String::new, |v| format!(",\"value\":{v}"));
        let js = format!(
            r#"
            const frame = document.getElementById("{id}");
            if (!frame || !frame.contentWindow) {{
                throw new Error("player frame missing");
            }}
            frame.contentWindow.postMessage(
                JSON.stringify({{"method":"{method}"{value_field}}}),
                "*"
            );
            "#,
            id = self.frame_id,
        );
        document::eval(&js)
            .await
            .map(|_| ())
            .map_err(|e| PlayerError::Command(e.to_string()))
    }
}

#[async_trait(?Send)]
impl VideoPlayer for VimeoFrame {
    async fn ready(&self) -> Result<(), PlayerError> {
        // Fire-and-forget: resolves when the ping is posted into the frame,
        // not when the player answers it.
        self.post("ping", None).await
    }

    async fn play(&self) -> Result<(), PlayerError> {
        self.post("play", None).await
    }

    async fn set_muted(&self, muted: bool) -> Result<(), PlayerError> {
        self.post("setMuted", Some(muted.to_string())).await
    }

    async fn set_volume(&self, volume: f64) -> Result<(), PlayerError> {
        self.post("setVolume", Some(volume.to_string())).await
    }
}
