//! Property tweening and timelines.
//!
//! Values are interpolated with raylib's easing functions and advanced by the
//! frame delta from the main loop. A timeline groups steps on one clock and
//! reports a completion [`Cue`] once all of them have finished; the navigation
//! controller reacts to cues instead of registering callbacks.

use crate::config::{Ease, Motion};
use crate::scene::{ElementId, Property, Scene};

/// Something a timeline asks its owner to do at a given moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Tag the outgoing slide as previous when it starts leaving.
    MarkPrevious(ElementId),
    /// The transition timeline ran to completion.
    TransitionFinished { outgoing: ElementId },
}

struct Channel {
    property: Property,
    from: Option<f32>,
    start: f32,
    to: f32,
}

pub struct Animation {
    target: ElementId,
    channels: Vec<Channel>,
    delay: f32,
    duration: f32,
    ease: Ease,
    on_start: Option<Cue>,
    clock: f32,
    started: bool,
    finished: bool,
}

impl Animation {
    /// Animates from the current values of `target` to `to`.
    pub fn to(target: ElementId, to: &[(Property, f32)], duration: f32, ease: Ease) -> Self {
        let channels = to
            .iter()
            .map(|&(property, to)| Channel { property, from: None, start: 0.0, to })
            .collect();
        Self {
            target,
            channels,
            delay: 0.0,
            duration,
            ease,
            on_start: None,
            clock: 0.0,
            started: false,
            finished: false,
        }
    }

    /// Animates each property from an explicit start value to an end value.
    pub fn from_to(target: ElementId, props: &[(Property, f32, f32)], duration: f32, ease: Ease) -> Self {
        let mut animation = Self::to(target, &[], duration, ease);
        animation.channels = props
            .iter()
            .map(|&(property, from, to)| Channel { property, from: Some(from), start: from, to })
            .collect();
        animation
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub fn on_start(mut self, cue: Cue) -> Self {
        self.on_start = Some(cue);
        self
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn end_time(&self) -> f32 {
        self.delay + self.duration
    }

    fn drives(&self, target: ElementId, property: Property) -> bool {
        self.target == target && self.channels.iter().any(|c| c.property == property)
    }

    fn drop_property(&mut self, property: Property) {
        self.channels.retain(|c| c.property != property);
        if self.channels.is_empty() {
            self.finished = true;
        }
    }

    /// Writes the explicit start values, used before the delay elapses.
    fn render_start(&self, scene: &mut Scene) {
        for channel in &self.channels {
            if let Some(from) = channel.from {
                scene.set_property(self.target, channel.property, from);
            }
        }
    }

    fn advance(&mut self, dt: f32, scene: &mut Scene, cues: &mut Vec<Cue>) {
        if self.finished {
            return;
        }

        self.clock += dt;
        if self.clock < self.delay {
            return;
        }

        if !self.started {
            self.started = true;
            if let Some(cue) = self.on_start.take() {
                cues.push(cue);
            }
            let style = scene.style(self.target);
            for channel in self.channels.iter_mut() {
                channel.start = channel.from.unwrap_or_else(|| style.get(channel.property));
            }
        }

        let done = self.clock >= self.end_time();
        let elapsed = self.clock - self.delay;
        let easer = self.ease.function();
        for channel in &self.channels {
            let value = if done {
                channel.to
            } else {
                easer(elapsed, channel.start, channel.to - channel.start, self.duration)
            };
            scene.set_property(self.target, channel.property, value);
        }
        self.finished = done;
    }
}

/// Steps sharing one clock; see [`Timeline::then`] for positioning.
pub struct Timeline {
    steps: Vec<Animation>,
    end: f32,
    on_complete: Option<Cue>,
}

impl Timeline {
    pub fn new() -> Self {
        Self { steps: Vec::new(), end: 0.0, on_complete: None }
    }

    pub fn on_complete(mut self, cue: Cue) -> Self {
        self.on_complete = Some(cue);
        self
    }

    /// Appends `animation` so it starts `overlap` seconds before the current
    /// end of the timeline. Any delay already on the animation is added on top.
    pub fn then(mut self, animation: Animation, overlap: f32) -> Self {
        let start = (self.end - overlap).max(0.0);
        let animation = Animation { delay: start + animation.delay, ..animation };
        self.end = self.end.max(animation.end_time());
        self.steps.push(animation);
        self
    }

    pub fn duration(&self) -> f32 {
        self.end
    }

    fn is_finished(&self) -> bool {
        self.steps.iter().all(Animation::is_finished)
    }

    fn advance(&mut self, dt: f32, scene: &mut Scene, cues: &mut Vec<Cue>) {
        for step in self.steps.iter_mut() {
            step.advance(dt, scene, cues);
        }
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default)]
pub struct Animator {
    tweens: Vec<Animation>,
    timelines: Vec<Timeline>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes values immediately, stopping any tween on the same properties.
    pub fn set(&mut self, scene: &mut Scene, target: ElementId, props: &[(Property, f32)]) {
        for &(property, value) in props {
            self.kill(target, property);
            scene.set_property(target, property, value);
        }
    }

    /// Stops standalone tweens on these properties, leaving current values as they are.
    pub fn stop(&mut self, target: ElementId, properties: &[Property]) {
        for &property in properties {
            self.kill(target, property);
        }
    }

    pub fn to(&mut self, animation: Animation) {
        self.add(animation);
    }

    /// Renders the start values right away, then queues the tween.
    pub fn from_to(&mut self, scene: &mut Scene, animation: Animation) {
        for channel in &animation.channels {
            self.kill(animation.target, channel.property);
        }
        animation.render_start(scene);
        self.tweens.push(animation);
    }

    /// Queues one tween per target, each starting `motion.stagger` after the
    /// previous one, all from the same start values.
    pub fn stagger_from_to(
        &mut self,
        scene: &mut Scene,
        targets: &[ElementId],
        props: &[(Property, f32, f32)],
        motion: &Motion,
    ) {
        for (i, &target) in targets.iter().enumerate() {
            let animation = Animation::from_to(target, props, motion.duration, motion.ease)
                .with_delay(motion.delay + motion.stagger * i as f32);
            self.from_to(scene, animation);
        }
    }

    pub fn play(&mut self, timeline: Timeline) {
        self.timelines.push(timeline);
    }

    pub fn is_idle(&self) -> bool {
        self.tweens.is_empty() && self.timelines.is_empty()
    }

    pub fn timeline_count(&self) -> usize {
        self.timelines.len()
    }

    /// Whether a standalone tween currently drives `property` of `target`.
    pub fn is_tweening(&self, target: ElementId, property: Property) -> bool {
        self.tweens.iter().any(|t| !t.finished && t.drives(target, property))
    }

    /// Advances everything by `dt` seconds and returns the cues raised.
    pub fn update(&mut self, dt: f32, scene: &mut Scene) -> Vec<Cue> {
        let mut cues = Vec::new();

        for tween in self.tweens.iter_mut() {
            tween.advance(dt, scene, &mut cues);
        }
        self.tweens.retain(|t| !t.is_finished());

        for timeline in self.timelines.iter_mut() {
            timeline.advance(dt, scene, &mut cues);
            if timeline.is_finished() {
                if let Some(cue) = timeline.on_complete.take() {
                    cues.push(cue);
                }
            }
        }
        self.timelines.retain(|t| !t.is_finished());

        cues
    }

    fn add(&mut self, animation: Animation) {
        for channel in &animation.channels {
            self.kill(animation.target, channel.property);
        }
        self.tweens.push(animation);
    }

    fn kill(&mut self, target: ElementId, property: Property) {
        for tween in self.tweens.iter_mut().filter(|t| t.drives(target, property)) {
            tween.drop_property(property);
        }
        self.tweens.retain(|t| !t.is_finished());
    }
}
