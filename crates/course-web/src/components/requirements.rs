use leptos::prelude::*;

use crate::components::{ListCards, Section, list_cards};

#[component]
pub fn RequirementsSection(requirements: Option<String>) -> impl IntoView {
    let cards = list_cards(requirements.as_deref());

    view! {
        <Section id="requirements" title="Persyaratan" subtitle="Siapkan hal berikut sebelum kelas dimulai">
            <ListCards cards=cards marker="#" />
        </Section>
    }
}
