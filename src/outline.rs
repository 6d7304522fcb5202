//! Plain-text outline of a deck, printed by `--outline`.

use crate::content::role_counts;
use crate::deck::Deck;
use crate::scene::{ElementId, Scene, Selector};

const HEADINGS: Selector = Selector::tags(&["h1", "h2", "h3"]);

fn slide_title(scene: &Scene, slide: ElementId) -> String {
    scene
        .query_first(slide, &HEADINGS)
        .and_then(|heading| scene.get(heading).text.clone())
        .unwrap_or_else(|| "(untitled)".to_string())
}

pub fn format_outline(deck: &Deck) -> String {
    let mut out = String::new();
    let slides = deck.slides();

    if let Some(title) = &deck.title {
        out.push_str(&format!("=== {} ===\n", title));
    }
    out.push_str(&format!("{} slides\n", slides.len()));

    for (i, &slide) in slides.iter().enumerate() {
        out.push_str(&format!("{:>3}. {}\n", i + 1, slide_title(&deck.scene, slide)));
        let roles: Vec<String> = role_counts(&deck.scene, slide)
            .into_iter()
            .map(|(role, count)| format!("{} x{}", role.name(), count))
            .collect();
        if !roles.is_empty() {
            out.push_str(&format!("     └─ {}\n", roles.join(", ")));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_lists_titles_and_roles() {
        let deck = Deck::parse(
            r#"{ "title": "Roadmap", "slides": [
                { "children": [ { "tag": "h1", "text": "Welcome" } ] },
                { "children": [ { "class": "card" }, { "class": "card" } ] }
            ] }"#,
            ".",
        )
        .unwrap();

        let text = format_outline(&deck);
        assert!(text.starts_with("=== Roadmap ===\n2 slides\n"));
        assert!(text.contains("  1. Welcome\n     └─ headings x1\n"));
        assert!(text.contains("  2. (untitled)\n     └─ cards x2\n"));
    }
}
