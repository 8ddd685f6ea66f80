use leptos::prelude::*;

/// Section component - titled block every page section sits in
#[component]
pub fn Section(
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class="section">
            <div class="section-inner">
                <h2 class="section-title">{title}</h2>
                {subtitle.map(|s| view! { <p class="section-subtitle">{s}</p> })}
                <div class="section-body">
                    {children()}
                </div>
            </div>
        </section>
    }
}
