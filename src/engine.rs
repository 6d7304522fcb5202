use raylib::prelude::*;

use crate::navigation::Presentation;

pub trait Engine {
    /// Prepares GPU resources for the presentation; false when there is nothing to show.
    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, presentation: &Presentation) -> bool;
    fn render_frame(&mut self, presentation: &Presentation, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D);
}
