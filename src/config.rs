use raylib::prelude::*;
use serde::Deserialize;

use crate::constants::SWIPE_THRESHOLD;

/// Signature shared by raylib's easing functions: `(t, begin, change, duration)`.
pub type EaseFn = fn(f32, f32, f32, f32) -> f32;

/// Named easing curves, backed by raylib's `ease` module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    Linear,
    QuadOut,
    QuadInOut,
    CubicOut,
    CubicInOut,
    ExpoOut,
    BackOut,
    SineInOut,
}

impl Ease {
    pub fn function(self) -> EaseFn {
        match self {
            Ease::Linear => ease::linear_none,
            Ease::QuadOut => ease::quad_out,
            Ease::QuadInOut => ease::quad_in_out,
            Ease::CubicOut => ease::cubic_out,
            Ease::CubicInOut => ease::cubic_in_out,
            Ease::ExpoOut => ease::expo_out,
            Ease::BackOut => ease::back_out,
            Ease::SineInOut => ease::sine_in_out,
        }
    }
}

/// Duration, delay, stagger and easing of one group animation (seconds).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Motion {
    pub duration: f32,
    pub stagger: f32,
    pub delay: f32,
    pub ease: Ease,
}

impl Default for Motion {
    fn default() -> Self {
        Motion::new(0.5, 0.0, 0.0, Ease::CubicOut)
    }
}

impl Motion {
    pub const fn new(duration: f32, stagger: f32, delay: f32, ease: Ease) -> Self {
        Self { duration, stagger, delay, ease }
    }
}

/// Slide-to-slide transition choreography.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransitionTiming {
    pub duration: f32,
    /// How long before the outgoing step ends the incoming step starts.
    pub overlap: f32,
    /// Horizontal travel of both slides (pixels).
    pub offset: f32,
    pub ease: Ease,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self { duration: 0.5, overlap: 0.3, offset: 100.0, ease: Ease::CubicInOut }
    }
}

/// Counter pulse and deck progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct IndicatorTiming {
    pub pulse_scale: f32,
    pub pulse: Motion,
    pub progress: Motion,
}

impl Default for IndicatorTiming {
    fn default() -> Self {
        Self {
            pulse_scale: 1.3,
            pulse: Motion::new(0.3, 0.0, 0.0, Ease::BackOut),
            progress: Motion::new(0.5, 0.0, 0.0, Ease::CubicOut),
        }
    }
}

/// Entrance motion per content role.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContentTiming {
    pub list_items: Motion,
    pub cards: Motion,
    pub timeline_items: Motion,
    pub headings: Motion,
    pub process_steps: Motion,
    pub comparison_sides: Motion,
    pub media_image: Motion,
    pub media_content: Motion,
    pub tags: Motion,
    pub team_members: Motion,
    pub quote: Motion,
    pub progress_items: Motion,
    pub progress_fills: Motion,
}

impl Default for ContentTiming {
    fn default() -> Self {
        Self {
            list_items: Motion::new(0.4, 0.15, 0.3, Ease::CubicOut),
            cards: Motion::new(0.5, 0.1, 0.2, Ease::BackOut),
            timeline_items: Motion::new(0.5, 0.2, 0.3, Ease::CubicOut),
            headings: Motion::new(0.6, 0.1, 0.1, Ease::CubicOut),
            process_steps: Motion::new(0.5, 0.15, 0.3, Ease::CubicOut),
            comparison_sides: Motion::new(0.6, 0.0, 0.3, Ease::ExpoOut),
            media_image: Motion::new(0.6, 0.0, 0.3, Ease::ExpoOut),
            media_content: Motion::new(0.6, 0.0, 0.4, Ease::ExpoOut),
            tags: Motion::new(0.4, 0.05, 0.3, Ease::BackOut),
            team_members: Motion::new(0.5, 0.1, 0.3, Ease::ExpoOut),
            quote: Motion::new(0.8, 0.0, 0.3, Ease::ExpoOut),
            progress_items: Motion::new(0.5, 0.15, 0.3, Ease::CubicOut),
            progress_fills: Motion::new(1.0, 0.2, 0.5, Ease::CubicOut),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Fade-in of the first slide at start.
    pub intro: Motion,
    pub transition: TransitionTiming,
    pub indicators: IndicatorTiming,
    pub content: ContentTiming,
    /// Minimum horizontal swipe travel (pixels).
    pub swipe_threshold: f32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            intro: Motion::new(0.6, 0.0, 0.0, Ease::CubicOut),
            transition: TransitionTiming::default(),
            indicators: IndicatorTiming::default(),
            content: ContentTiming::default(),
            swipe_threshold: SWIPE_THRESHOLD,
        }
    }
}
