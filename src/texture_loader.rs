use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};

use crate::error::{DeckError, Result};
use crate::scene::{ElementId, Scene};

// --- Load every image referenced by the deck, keyed by element ---
pub fn load_media_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    scene: &Scene,
    elements: impl IntoIterator<Item = ElementId>,
) -> HashMap<ElementId, Texture2D> {
    let mut textures = HashMap::new();
    for id in elements {
        let Some(path) = scene.get(id).src.as_deref() else {
            continue;
        };
        match load_texture_with_exif_rotation(rl, thread, path) {
            Ok(texture) => {
                textures.insert(id, texture);
            }
            Err(e) => {
                // Element falls back to its text
                log::warn!("{}", e);
            }
        }
    }
    textures
}

/// EXIF orientation tag of a JPEG, 1 (upright) when absent or unreadable.
fn exif_orientation(bytes: &[u8], image_path: &Path) -> u16 {
    let exif = match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif,
        Err(e) => {
            log::warn!("Could not read EXIF data for {:?}: {}", image_path, e);
            return 1;
        }
    };
    match exif.get_field(Tag::Orientation, In::PRIMARY).map(|field| &field.value) {
        Some(Value::Short(values)) => values.first().copied().unwrap_or(1),
        _ => 1,
    }
}

/// Turns the image upright. Mirrored orientations (2, 4, 5, 7) are left as is.
fn apply_orientation(image: &mut Image, orientation: u16) {
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
}

pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path).map_err(|e| DeckError::image(image_path, e))?;

    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    let orientation = match extension.as_str() {
        "jpg" | "jpeg" => exif_orientation(&file_bytes, image_path),
        _ => 1,
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| DeckError::image(image_path, e))?;
    apply_orientation(&mut image, orientation);
    log::debug!("Loaded {:?} (orientation {})", image_path, orientation);

    // The CPU copy is released when `image` drops
    rl.load_texture_from_image(thread, &image)
        .map_err(|e| DeckError::image(image_path, e))
}
