//! Numbered cards built from `<li>` rich text

use leptos::prelude::*;

use crate::list::parse_list;

#[derive(Debug, Clone, PartialEq)]
pub struct ListCard {
    pub number: String,
    pub text: String,
}

/// Cards for every list item in `html`, numbered from 01
pub fn list_cards(html: Option<&str>) -> Vec<ListCard> {
    parse_list(html)
        .into_iter()
        .enumerate()
        .map(|(i, text)| ListCard {
            number: format!("{:02}", i + 1),
            text,
        })
        .collect()
}

#[component]
pub fn ListCards(cards: Vec<ListCard>, #[prop(into)] marker: String) -> impl IntoView {
    view! {
        <div class="card-grid">
            {cards.into_iter().map(|card| view! {
                <div class="list-card">
                    <span class="list-card-marker">{marker.clone()} " " {card.number}</span>
                    <p class="list-card-text">{card.text}</p>
                </div>
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_numbered_in_order() {
        let cards = list_cards(Some("<li>Sertifikat</li><li> Mentoring </li>"));
        assert_eq!(
            cards,
            vec![
                ListCard {
                    number: "01".to_string(),
                    text: "Sertifikat".to_string()
                },
                ListCard {
                    number: "02".to_string(),
                    text: "Mentoring".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_no_items_no_cards() {
        assert!(list_cards(None).is_empty());
        assert!(list_cards(Some("<p>Segera hadir</p>")).is_empty());
    }

    #[test]
    fn test_double_digit_numbers() {
        let html: String = (0..12).map(|i| format!("<li>item {i}</li>")).collect();
        let cards = list_cards(Some(&html));
        assert_eq!(cards.len(), 12);
        assert_eq!(cards[11].number, "12");
        assert_eq!(cards[11].text, "item 11");
    }
}
