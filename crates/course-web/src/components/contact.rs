use leptos::prelude::*;
use shared::CONFIG;

use crate::components::Section;

/// Lazily loaded map iframe markup for `src`
pub fn map_embed_html(src: &str) -> String {
    let src = src.replace('&', "&amp;").replace('"', "&quot;");
    format!(
        r#"<iframe title="Lokasi" src="{src}" loading="lazy" referrerpolicy="no-referrer-when-downgrade" allowfullscreen></iframe>"#
    )
}

/// Contact section - outbound links and embedded map
#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <Section id="contact" title="Hubungi Kami" subtitle="Ada pertanyaan? Tim kami siap membantu">
            <div class="contact-grid">
                <ul class="contact-links">
                    <li>
                        <strong>"Email"</strong> " "
                        <a href=CONFIG.links.email_compose target="_blank" rel="noopener noreferrer">
                            {CONFIG.contact.email}
                        </a>
                    </li>
                    <li>
                        <strong>"WhatsApp"</strong> " "
                        <a href=CONFIG.links.whatsapp target="_blank" rel="noopener noreferrer">
                            "+" {CONFIG.contact.whatsapp}
                        </a>
                    </li>
                    <li>
                        <strong>"Instagram"</strong> " "
                        <a href=CONFIG.links.instagram target="_blank" rel="noopener noreferrer">
                            "@" {CONFIG.contact.instagram}
                        </a>
                    </li>
                    <li>
                        <strong>"Alamat"</strong> " " {CONFIG.contact.address}
                    </li>
                </ul>
                <div class="contact-map" inner_html=map_embed_html(CONFIG.links.map_embed)></div>
            </div>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_iframe_is_lazy() {
        let html = map_embed_html(CONFIG.links.map_embed);
        assert!(html.starts_with("<iframe "));
        assert!(html.contains(r#"loading="lazy""#));
        assert!(html.contains(&format!(r#"src="{}""#, CONFIG.links.map_embed)));
    }

    #[test]
    fn test_map_src_escaped() {
        let html = map_embed_html(r#"https://maps.example.com/?q=a&b="c""#);
        assert!(html.contains(r#"src="https://maps.example.com/?q=a&amp;b=&quot;c&quot;""#));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_section_embeds_lazy_map() {
        use leptos::tachys::view::RenderHtml;

        let html = Owner::new().with(|| view! { <ContactSection /> }.to_html());
        assert!(html.contains(r#"class="contact-map""#));
        assert!(html.contains(r#"loading="lazy""#));
        assert!(html.contains(CONFIG.links.email_compose));
    }
}
