use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;

use slidedeck::constants::*;
use slidedeck::engine::Engine;
use slidedeck::input::{command_for_key, Command, SwipeTracker};
use slidedeck::outline::format_outline;
use slidedeck::render::SceneRenderer;
use slidedeck::{Deck, Presentation};

#[derive(Parser)]
#[command(name = "slidedeck")]
#[command(about = "Present a slide deck with animated transitions")]
#[command(version)]
struct Cli {
    /// Deck file (JSON)
    deck: PathBuf,

    /// Initial window width
    #[arg(long, default_value_t = RENDER_WIDTH / 2)]
    width: i32,

    /// Initial window height
    #[arg(long, default_value_t = RENDER_HEIGHT / 2)]
    height: i32,

    /// Target frames per second
    #[arg(long, default_value_t = FPS)]
    fps: u32,

    /// Slide to open on (1-based)
    #[arg(long)]
    start: Option<usize>,

    /// Minimum horizontal swipe distance in pixels (overrides the deck)
    #[arg(long)]
    swipe_threshold: Option<f32>,

    /// Print the deck outline and exit
    #[arg(long)]
    outline: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    // --- Load Deck ---
    let deck = Deck::load(&cli.deck).with_context(|| format!("Cannot open deck {}", cli.deck.display()))?;

    if cli.outline {
        print!("{}", format_outline(&deck));
        return Ok(());
    }

    let title = deck.title.clone().unwrap_or_else(|| "Slides".to_string());
    let mut presentation = Presentation::from_deck(deck).context("Deck is missing presentation elements")?;
    if let Some(threshold) = cli.swipe_threshold {
        presentation.set_swipe_threshold(threshold);
    }

    let (mut rl, thread) = raylib::init()
        .size(cli.width, cli.height)
        .title(&title)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(cli.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut renderer = SceneRenderer::new();
    if !renderer.initialize(&mut rl, &thread, &presentation) {
        log::warn!("Deck {} has no slides", cli.deck.display());
    }

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as _, RENDER_HEIGHT as _)
        .map_err(|e| anyhow::anyhow!("Failed to create render texture: {}", e))?;

    presentation.start();
    if let Some(start) = cli.start {
        presentation.apply(Command::GoTo(start.saturating_sub(1)));
    }

    let mut swipe = SwipeTracker::new(presentation.swipe_threshold());

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        // 1. Input: keys and pointer swipes become navigation commands
        while let Some(key) = rl.get_key_pressed() {
            if let Some(command) = command_for_key(key) {
                presentation.apply(command);
            }
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            swipe.touch_start(rl.get_mouse_x() as f32);
        }
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(command) = swipe.touch_end(rl.get_mouse_x() as f32) {
                presentation.apply(command);
            }
        }

        // 2. Advance transitions and entrances
        presentation.update(dt);

        // --- Render into the fixed size framebuffer ---
        renderer.render_frame(&presentation, &mut rl, &thread, &mut framebuffer);

        // Draw framebuffer (stored upside down) scaled to the window
        let mut d = rl.begin_drawing(&thread);

        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;

        d.clear_background(Color::BLACK);
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE
        );
    }

    Ok(())
}
