use std::collections::HashMap;
use raylib::prelude::*;

use crate::constants::*;
use crate::engine::Engine;
use crate::navigation::Presentation;
use crate::scene::{Element, ElementId, Scene};
use crate::texture_loader::load_media_textures;

const BACKGROUND: Color = Color { r: 16, g: 18, b: 27, a: 255 };
const TEXT: Color = Color { r: 232, g: 234, b: 242, a: 255 };
const MUTED: Color = Color { r: 140, g: 146, b: 166, a: 255 };
const ACCENT: Color = Color { r: 96, g: 132, b: 246, a: 255 };
const PANEL: Color = Color { r: 36, g: 40, b: 57, a: 255 };
const TRACK: Color = Color { r: 56, g: 61, b: 82, a: 255 };

const BOX_PADDING: f32 = 20.0;

// Containers whose children sit side by side
const ROW_CONTAINERS: &[&str] = &["comparison", "media-text-container", "card-grid", "stats", "tags", "team", "process", "row"];

// Elements drawn on a panel
const BOXED: &[&str] = &[
    "card", "stat-card", "team-member", "timeline-item", "timeline-item-card",
    "process-step", "comparison-side", "quote-highlight", "tag-item",
];

fn is_row(element: &Element) -> bool {
    ROW_CONTAINERS.iter().any(|class| element.has_class(class))
}

fn is_boxed(element: &Element) -> bool {
    BOXED.iter().any(|class| element.has_class(class))
}

fn is_fill_bar(element: &Element) -> bool {
    element.has_class("progress-bar-fill")
}

fn font_size(element: &Element) -> i32 {
    match element.tag.as_str() {
        "h1" => FONT_H1,
        "h2" => FONT_H2,
        "h3" => FONT_H3,
        _ => FONT_BODY,
    }
}

fn line_height(font_size: i32) -> f32 {
    font_size as f32 * 1.25
}

fn display_text(element: &Element) -> Option<String> {
    let text = element.text.as_deref()?;
    Some(if element.tag == "li" { format!("- {}", text) } else { text.to_string() })
}

/// Greedy word wrap using an average glyph width of half the font size.
pub fn wrap_text(text: &str, font_size: i32, width: f32) -> Vec<String> {
    let max_chars = ((width / (font_size as f32 * 0.5)) as usize).max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

fn own_height(element: &Element, width: f32) -> f32 {
    if is_fill_bar(element) {
        return FILL_BAR_HEIGHT;
    }
    if element.src.is_some() {
        return MEDIA_HEIGHT;
    }
    match display_text(element) {
        Some(text) => {
            let font = font_size(element);
            wrap_text(&text, font, width).len() as f32 * line_height(font)
        }
        None => 0.0,
    }
}

/// Places every element of every slide; animation offsets are applied at draw time.
pub fn layout_slides(scene: &Scene, slides: &[ElementId]) -> HashMap<ElementId, Rectangle> {
    let mut rects = HashMap::new();
    let bounds = Rectangle::new(
        SLIDE_PADDING,
        SLIDE_PADDING,
        RENDER_WIDTH as f32 - 2.0 * SLIDE_PADDING,
        RENDER_HEIGHT as f32 - 2.0 * SLIDE_PADDING,
    );
    for &slide in slides {
        rects.insert(slide, bounds);
        layout_children(scene, slide, bounds.x, bounds.y, bounds.width, &mut rects);
    }
    rects
}

fn layout_children(scene: &Scene, parent: ElementId, x: f32, y: f32, width: f32, rects: &mut HashMap<ElementId, Rectangle>) -> f32 {
    let parent_element = scene.get(parent);
    let children = parent_element.children();
    if children.is_empty() {
        return 0.0;
    }

    if is_row(parent_element) {
        let n = children.len() as f32;
        let child_width = (width - ROW_SPACING * (n - 1.0)) / n;
        let mut height: f32 = 0.0;
        for (i, &child) in children.iter().enumerate() {
            let child_x = x + i as f32 * (child_width + ROW_SPACING);
            height = height.max(layout_element(scene, child, child_x, y, child_width, rects));
        }
        height
    } else {
        let mut cursor = y;
        for (i, &child) in children.iter().enumerate() {
            if i > 0 {
                cursor += BLOCK_SPACING;
            }
            cursor += layout_element(scene, child, x, cursor, width, rects);
        }
        cursor - y
    }
}

fn layout_element(scene: &Scene, id: ElementId, x: f32, y: f32, width: f32, rects: &mut HashMap<ElementId, Rectangle>) -> f32 {
    let element = scene.get(id);
    let pad = if is_boxed(element) { BOX_PADDING } else { 0.0 };
    let inner_width = width - 2.0 * pad;

    let own = own_height(element, inner_width);
    let gap = if own > 0.0 && !element.children().is_empty() { BLOCK_SPACING } else { 0.0 };
    let nested = layout_children(scene, id, x + pad, y + pad + own + gap, inner_width, rects);

    let height = pad + own + gap + nested + pad;
    rects.insert(id, Rectangle::new(x, y, width, height));
    height
}

fn faded(color: Color, opacity: f32) -> Color {
    Color::new(color.r, color.g, color.b, (color.a as f32 * opacity.clamp(0.0, 1.0)) as u8)
}

/// Offset and opacity inherited from ancestors.
#[derive(Clone, Copy)]
struct Inherited {
    dx: f32,
    dy: f32,
    opacity: f32,
}

pub struct SceneRenderer {
    layout: HashMap<ElementId, Rectangle>,
    textures: HashMap<ElementId, Texture2D>,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self { layout: HashMap::new(), textures: HashMap::new() }
    }

    fn draw_element(&self, d: &mut RaylibDrawHandle, scene: &Scene, id: ElementId, inherited: Inherited) {
        let Some(base) = self.layout.get(&id) else {
            return;
        };
        let element = scene.get(id);
        let style = element.style;

        let opacity = inherited.opacity * style.opacity.clamp(0.0, 1.0);
        if opacity <= 0.0 {
            return;
        }
        let dx = inherited.dx + style.x;
        let dy = inherited.dy + style.y;

        // Scale around the element's center
        let width = base.width * style.scale;
        let height = base.height * style.scale;
        let rect = Rectangle::new(
            base.x + dx + (base.width - width) * 0.5,
            base.y + dy + (base.height - height) * 0.5,
            width,
            height,
        );

        let base_pad = if is_boxed(element) { BOX_PADDING } else { 0.0 };
        let pad = base_pad * style.scale;
        if is_boxed(element) {
            d.draw_rectangle_rounded(rect, 0.08, 8, faded(PANEL, opacity));
        }

        if is_fill_bar(element) {
            d.draw_rectangle_rec(rect, faded(TRACK, opacity));
            let fill = Rectangle::new(rect.x, rect.y, rect.width * style.width.clamp(0.0, 100.0) / 100.0, rect.height);
            d.draw_rectangle_rec(fill, faded(ACCENT, opacity));
        } else if let Some(texture) = self.textures.get(&id) {
            // Fit the texture inside the block, keeping its aspect ratio
            let tex_width = texture.width() as f32;
            let tex_height = texture.height() as f32;
            let fit = (rect.width / tex_width).min(rect.height / tex_height);
            let dest = Rectangle::new(rect.x, rect.y, tex_width * fit, tex_height * fit);
            d.draw_texture_pro(
                texture,
                Rectangle::new(0.0, 0.0, tex_width, tex_height),
                dest,
                Vector2::new(0.0, 0.0),
                0.0,
                faded(Color::WHITE, opacity),
            );
        } else if let Some(text) = display_text(element) {
            let font = font_size(element);
            let scaled_font = (font as f32 * style.scale).round() as i32;
            for (i, line) in wrap_text(&text, font, base.width - 2.0 * base_pad).iter().enumerate() {
                let line_y = rect.y + pad + i as f32 * line_height(scaled_font);
                d.draw_text(line, (rect.x + pad) as i32, line_y as i32, scaled_font, faded(TEXT, opacity));
            }
        }

        for &child in element.children() {
            self.draw_element(d, scene, child, Inherited { dx, dy, opacity });
        }
    }

    fn draw_indicators(&self, d: &mut RaylibDrawHandle, presentation: &Presentation) {
        let scene = presentation.scene();

        let bar = scene.style(presentation.progress_bar());
        let bar_width = RENDER_WIDTH as f32 * bar.width.clamp(0.0, 100.0) / 100.0;
        d.draw_rectangle(0, RENDER_HEIGHT - PROGRESS_BAR_HEIGHT, bar_width as i32, PROGRESS_BAR_HEIGHT, ACCENT);

        let pulse = scene.style(presentation.counter()).scale;
        let size = (FONT_COUNTER as f32 * pulse).round() as i32;
        let x = RENDER_WIDTH - 200;
        let y = RENDER_HEIGHT - 64;
        d.draw_text(presentation.counter_text(), x, y - (size - FONT_COUNTER) / 2, size, TEXT);
        d.draw_text(&format!("/ {}", presentation.total_text()), x + 64, y, FONT_COUNTER, MUTED);
    }
}

impl Default for SceneRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for SceneRenderer {
    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, presentation: &Presentation) -> bool {
        let scene = presentation.scene();
        self.layout = layout_slides(scene, presentation.slides());
        self.textures = load_media_textures(rl, thread, scene, scene.ids());
        log::info!("Prepared {} slides, {} images", presentation.total(), self.textures.len());
        presentation.total() > 0
    }

    fn render_frame(&mut self, presentation: &Presentation, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D) {
        let scene = presentation.scene();

        rl.draw_texture_mode(thread, framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(thread);
            d.clear_background(BACKGROUND);

            // Only slides on stage: the current one and any still leaving
            for &slide in presentation.slides() {
                if scene.has_class(slide, CLASS_ACTIVE) || scene.has_class(slide, CLASS_PREV) {
                    self.draw_element(&mut d, scene, slide, Inherited { dx: 0.0, dy: 0.0, opacity: 1.0 });
                }
            }

            self.draw_indicators(&mut d, presentation);
        });
    }
}
