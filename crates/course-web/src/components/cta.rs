use leptos::prelude::*;
use shared::CONFIG;
use url::Url;

use crate::assets::image_url;

/// WhatsApp deep link, prefilled with an enquiry about `title` when given
pub fn whatsapp_link(title: Option<&str>) -> String {
    let Some(title) = title.map(str::trim).filter(|t| !t.is_empty()) else {
        return CONFIG.links.whatsapp.to_string();
    };

    let message = format!("Halo {}, saya tertarik dengan {}", CONFIG.name, title);
    match Url::parse_with_params(CONFIG.links.whatsapp, &[("text", message)]) {
        Ok(url) => url.into(),
        Err(err) => {
            tracing::warn!("invalid whatsapp link {}: {}", CONFIG.links.whatsapp, err);
            CONFIG.links.whatsapp.to_string()
        }
    }
}

/// Closing call to action
#[component]
pub fn CtaSection(#[prop(optional, into)] course_title: Option<String>) -> impl IntoView {
    let href = whatsapp_link(course_title.as_deref());
    let headline = match &course_title {
        Some(title) => format!("Siap bergabung di {}?", title),
        None => "Siap memulai karier digitalmu?".to_string(),
    };

    view! {
        <section id="cta" class="cta" style=format!("background-image: url('{}')", image_url("cta.svg"))>
            <div class="cta-inner">
                <h2 class="cta-title">{headline}</h2>
                <p class="cta-text">"Konsultasikan jadwal, biaya dan kurikulum langsung dengan tim kami."</p>
                <a class="cta-button" href=href target="_blank" rel="noopener noreferrer">
                    "Daftar via WhatsApp"
                </a>
            </div>
        </section>
    }
}
