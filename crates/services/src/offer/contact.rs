use url::Url;

/// Fixed recipient of the outbound conversation, international format
/// without the plus sign.
pub const WHATSAPP_RECIPIENT: &str = "5521930000000";

/// Builds the outbound deep link for a CTA, tagging which button originated
/// the click.
///
/// # Panics
///
/// Never at runtime: the base URL is a statically valid literal and query
/// values are percent-encoded by the `url` crate.
#[must_use]
pub fn whatsapp_link(price: f64, origin: &str) -> Url {
    let mut url = Url::parse("https://wa.me/").expect("static base url");
    url.set_path(WHATSAPP_RECIPIENT);
    let text = format!(
        "Olá Dra. Marina! Assisti ao vídeo sobre Hidrolipoclasia e gostaria de garantir \
         minha condição especial de R$ {price} (Origem: {origin})."
    );
    url.query_pairs_mut().append_pair("text", &text);
    url
}
