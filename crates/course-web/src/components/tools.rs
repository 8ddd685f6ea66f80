use leptos::prelude::*;

use crate::assets::storage_url;
use crate::components::Section;
use crate::models::Tool;

/// Display-ready tool
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCard {
    pub name: String,
    pub description: Option<String>,
    pub icon_url: String,
}

/// Cards for the tools section, or `None` when there is nothing to show
pub fn tool_cards(tools: Option<&[Tool]>) -> Option<Vec<ToolCard>> {
    let tools = tools.filter(|t| !t.is_empty())?;

    Some(
        tools
            .iter()
            .map(|tool| ToolCard {
                name: tool.name.clone(),
                description: tool.description.clone(),
                icon_url: storage_url(tool.icon.as_deref()),
            })
            .collect(),
    )
}

/// Tools section - renders nothing without tools
#[component]
pub fn ToolsSection(tools: Vec<Tool>) -> impl IntoView {
    tool_cards(Some(tools.as_slice())).map(|cards| {
        view! {
            <Section id="tools" title="Tools" subtitle="Perangkat yang akan kamu gunakan">
                <div class="tool-grid">
                    {cards.into_iter().map(|card| {
                        let alt = card.name.clone();
                        view! {
                            <div class="tool-card">
                                <img class="tool-icon" src=card.icon_url alt=alt loading="lazy" />
                                <h3 class="tool-name">{card.name}</h3>
                                {card.description.map(|d| view! { <p class="tool-description">{d}</p> })}
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Section>
        }
    })
}
