//! Element tree the presentation draws and animates.
//!
//! Elements live in an arena owned by [`Scene`] and are addressed by
//! [`ElementId`]. The tree is built once by the deck loader; afterwards only
//! classes, text and the live [`Style`] of an element change.

use std::collections::BTreeSet;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

/// An animatable visual property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Opacity,
    X,
    Y,
    Scale,
    /// Width in percent of the parent.
    Width,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub width: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self { opacity: 1.0, x: 0.0, y: 0.0, scale: 1.0, width: 100.0 }
    }
}

impl Style {
    pub fn get(&self, property: Property) -> f32 {
        match property {
            Property::Opacity => self.opacity,
            Property::X => self.x,
            Property::Y => self.y,
            Property::Scale => self.scale,
            Property::Width => self.width,
        }
    }

    pub fn set(&mut self, property: Property, value: f32) {
        match property {
            Property::Opacity => self.opacity = value,
            Property::X => self.x = value,
            Property::Y => self.y = value,
            Property::Scale => self.scale = value,
            Property::Width => self.width = value,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub text: Option<String>,
    pub src: Option<PathBuf>,
    pub style: Style,
    /// Width declared in the deck, kept apart from the live style.
    pub declared_width: Option<f32>,
    classes: BTreeSet<String>,
    children: Vec<ElementId>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            text: None,
            src: None,
            style: Style::default(),
            declared_width: None,
            classes: BTreeSet::new(),
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds every whitespace separated class in `classes`.
    pub fn with_classes(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            self.classes.insert(class.to_string());
        }
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_declared_width(mut self, width: f32) -> Self {
        self.declared_width = Some(width);
        self.style.width = width;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }
}

/// Matches elements by tag name or class, like a `h1, .card` CSS group.
#[derive(Debug, Clone, Copy)]
pub struct Selector {
    pub tags: &'static [&'static str],
    pub classes: &'static [&'static str],
}

impl Selector {
    pub const fn tags(tags: &'static [&'static str]) -> Self {
        Self { tags, classes: &[] }
    }

    pub const fn classes(classes: &'static [&'static str]) -> Self {
        Self { tags: &[], classes }
    }

    pub fn matches(&self, element: &Element) -> bool {
        self.tags.iter().any(|tag| element.tag == *tag)
            || self.classes.iter().any(|class| element.has_class(class))
    }
}

pub struct Scene {
    elements: Vec<Element>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Creates a scene holding only the root `body` element.
    pub fn new() -> Self {
        Self { elements: vec![Element::new("body")] }
    }

    pub fn root(&self) -> ElementId {
        ElementId(0)
    }

    pub fn append(&mut self, parent: ElementId, element: Element) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(element);
        self.elements[parent.0].children.push(id);
        id
    }

    pub fn get(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    pub fn style(&self, id: ElementId) -> Style {
        self.elements[id.0].style
    }

    pub fn set_property(&mut self, id: ElementId, property: Property, value: f32) {
        self.elements[id.0].style.set(property, value);
    }

    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) {
        self.elements[id.0].text = Some(text.into());
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        self.elements[id.0].classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        self.elements[id.0].classes.remove(class);
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.elements[id.0].has_class(class)
    }

    /// All descendants of `within` matching `selector`, in document order.
    pub fn query_all(&self, within: ElementId, selector: &Selector) -> Vec<ElementId> {
        let mut found = Vec::new();
        self.collect(within, selector, &mut found);
        found
    }

    /// First descendant of `within` matching `selector`, in document order.
    pub fn query_first(&self, within: ElementId, selector: &Selector) -> Option<ElementId> {
        self.query_all(within, selector).into_iter().next()
    }

    pub fn ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        (0..self.elements.len()).map(ElementId)
    }

    pub fn find_by_id(&self, id: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|element| element.id.as_deref() == Some(id))
            .map(ElementId)
    }

    fn collect(&self, parent: ElementId, selector: &Selector, found: &mut Vec<ElementId>) {
        for &child in &self.elements[parent.0].children {
            if selector.matches(&self.elements[child.0]) {
                found.push(child);
            }
            self.collect(child, selector, found);
        }
    }
}
