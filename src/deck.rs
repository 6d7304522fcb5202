//! Deck files: a JSON description of the slides, turned into a [`Scene`].
//!
//! ```json
//! { "title": "Quarterly review",
//!   "timing": { "transition": { "duration": 0.6 } },
//!   "slides": [
//!     { "children": [ { "tag": "h1", "text": "Q3" },
//!                     { "tag": "ul", "children": [ { "tag": "li", "text": "Revenue up" } ] } ] } ] }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::Timing;
use crate::constants::*;
use crate::error::{DeckError, Result};
use crate::scene::{Element, ElementId, Scene};

#[derive(Debug, Deserialize)]
struct DeckFile {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    timing: Timing,
    slides: Vec<Node>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DeclaredStyle {
    width: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct Node {
    #[serde(default = "default_tag")]
    tag: String,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    class: String,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    src: Option<PathBuf>,
    #[serde(default)]
    style: DeclaredStyle,
    #[serde(default)]
    children: Vec<Node>,
}

fn default_tag() -> String {
    "div".to_string()
}

pub struct Deck {
    pub title: Option<String>,
    pub timing: Timing,
    pub scene: Scene,
    /// Directory media paths are resolved against.
    pub base_dir: PathBuf,
}

impl Deck {
    pub fn load(path: &Path) -> Result<Deck> {
        let text = fs::read_to_string(path).map_err(|source| DeckError::Read { path: path.to_path_buf(), source })?;
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let deck = Deck::parse(&text, base_dir)?;
        log::info!("Loaded deck {:?} ({} slides)", path, deck.slide_count());
        Ok(deck)
    }

    /// Parses a deck whose media paths are relative to `base_dir`.
    pub fn parse(text: &str, base_dir: impl Into<PathBuf>) -> Result<Deck> {
        let file: DeckFile = serde_json::from_str(text)?;
        let base_dir = base_dir.into();

        let mut scene = Scene::new();
        let root = scene.root();
        let container = scene.append(root, Element::new("main").with_classes("presentation"));
        for node in &file.slides {
            let tag = if node.tag == "div" { "section" } else { node.tag.as_str() };
            let slide = build(&mut scene, container, node, tag, &base_dir)?;
            scene.add_class(slide, CLASS_SLIDE);
        }

        let footer = scene.append(root, Element::new("footer").with_classes("slide-counter"));
        scene.append(footer, Element::new("span").with_id(ID_CURRENT_PAGE).with_text("1"));
        scene.append(footer, Element::new("span").with_id(ID_TOTAL_PAGES).with_text("0"));
        scene.append(root, Element::new("div").with_classes(CLASS_PROGRESS_BAR).with_declared_width(0.0));

        Ok(Deck { title: file.title, timing: file.timing, scene, base_dir })
    }

    pub fn slide_count(&self) -> usize {
        self.slides().len()
    }

    pub fn slides(&self) -> Vec<ElementId> {
        slides_of(&self.scene)
    }
}

/// Slide elements of a scene, in display order.
pub fn slides_of(scene: &Scene) -> Vec<ElementId> {
    scene.query_all(scene.root(), &crate::scene::Selector::classes(&[CLASS_SLIDE]))
}

fn build(scene: &mut Scene, parent: ElementId, node: &Node, tag: &str, base_dir: &Path) -> Result<ElementId> {
    let mut element = Element::new(tag).with_classes(&node.class);
    if let Some(id) = &node.id {
        element = element.with_id(id.clone());
    }
    if let Some(text) = &node.text {
        element = element.with_text(text.clone());
    }
    if let Some(width) = node.style.width {
        if !(0.0..=100.0).contains(&width) {
            return Err(DeckError::InvalidWidth { tag: node.tag.clone(), width });
        }
        element = element.with_declared_width(width);
    }
    element.src = node.src.as_ref().map(|src| base_dir.join(src));

    let id = scene.append(parent, element);
    for child in &node.children {
        build(scene, id, child, &child.tag, base_dir)?;
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Selector;

    const SAMPLE: &str = r#"{
        "title": "Demo",
        "timing": { "swipe_threshold": 80 },
        "slides": [
            { "class": "title-slide", "children": [ { "tag": "h1", "text": "Hello" } ] },
            { "children": [
                { "class": "progress-item", "children": [
                    { "text": "Rust" },
                    { "class": "progress-bar-fill", "style": { "width": 75 } }
                ] },
                { "class": "media-text-container", "children": [
                    { "tag": "img", "class": "media-image", "src": "img/chart.png" }
                ] }
            ] }
        ]
    }"#;

    #[test]
    fn slides_keep_document_order_and_get_the_slide_class() {
        let deck = Deck::parse(SAMPLE, "/decks").unwrap();
        let slides = deck.slides();
        assert_eq!(slides.len(), 2);
        assert!(deck.scene.has_class(slides[0], "title-slide"));
        assert!(deck.scene.has_class(slides[0], CLASS_SLIDE));
        assert!(!deck.scene.has_class(slides[0], CLASS_ACTIVE));
        assert_eq!(deck.title.as_deref(), Some("Demo"));
        assert_eq!(deck.timing.swipe_threshold, 80.0);
    }

    #[test]
    fn declared_width_and_media_path_are_kept() {
        let deck = Deck::parse(SAMPLE, "/decks").unwrap();
        let scene = &deck.scene;
        let fill = scene.query_first(scene.root(), &Selector::classes(&["progress-bar-fill"])).unwrap();
        assert_eq!(scene.get(fill).declared_width, Some(75.0));
        assert_eq!(scene.style(fill).width, 75.0);

        let image = scene.query_first(scene.root(), &Selector::tags(&["img"])).unwrap();
        assert_eq!(scene.get(image).src, Some(PathBuf::from("/decks/img/chart.png")));
    }

    #[test]
    fn indicators_are_created() {
        let deck = Deck::parse(r#"{ "slides": [] }"#, ".").unwrap();
        let scene = &deck.scene;
        assert!(scene.find_by_id(ID_CURRENT_PAGE).is_some());
        assert!(scene.find_by_id(ID_TOTAL_PAGES).is_some());
        let bar = scene.query_first(scene.root(), &Selector::classes(&[CLASS_PROGRESS_BAR])).unwrap();
        assert_eq!(scene.style(bar).width, 0.0);
        assert_eq!(deck.slide_count(), 0);
    }

    #[test]
    fn out_of_range_width_is_rejected() {
        let text = r#"{ "slides": [ { "children": [ { "style": { "width": 140 } } ] } ] }"#;
        match Deck::parse(text, ".") {
            Err(DeckError::InvalidWidth { width, .. }) => assert_eq!(width, 140.0),
            other => panic!("expected InvalidWidth, got {:?}", other.err()),
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(Deck::parse("{ slides: ", "."), Err(DeckError::Parse { .. })));
    }
}
