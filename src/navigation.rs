//! Slide navigation: which slide is current and how we get to another one.
//!
//! Navigation state changes synchronously; the visuals (slide transition,
//! counter pulse, progress bar, content entrances) catch up over the next
//! frames through the [`Animator`]. While a transition is in flight every
//! further request is dropped, never queued.

use crate::animation::{Animation, Animator, Cue, Timeline};
use crate::config::Timing;
use crate::constants::*;
use crate::content::{animate_slide_content, ContentRole};
use crate::deck::{slides_of, Deck};
use crate::error::{DeckError, Result};
use crate::input::Command;
use crate::scene::{ElementId, Property, Scene, Selector};
use crate::state::{Direction, NavigationState};

const LIST_ITEMS: Selector = Selector::tags(&["li"]);

/// Counter, total and progress bar elements.
struct Indicators {
    counter: ElementId,
    total: ElementId,
    progress_bar: ElementId,
}

impl Indicators {
    fn find(scene: &Scene) -> Result<Self> {
        let counter = scene.find_by_id(ID_CURRENT_PAGE).ok_or_else(|| DeckError::missing(format!("#{ID_CURRENT_PAGE}")))?;
        let total = scene.find_by_id(ID_TOTAL_PAGES).ok_or_else(|| DeckError::missing(format!("#{ID_TOTAL_PAGES}")))?;
        let progress_bar = scene
            .query_first(scene.root(), &Selector::classes(&[CLASS_PROGRESS_BAR]))
            .ok_or_else(|| DeckError::missing(format!(".{CLASS_PROGRESS_BAR}")))?;
        Ok(Self { counter, total, progress_bar })
    }
}

pub struct Presentation {
    scene: Scene,
    slides: Vec<ElementId>,
    indicators: Indicators,
    state: NavigationState,
    animator: Animator,
    timing: Timing,
    last_roles: Vec<ContentRole>,
}

impl Presentation {
    /// Discovers the slides and indicators of `scene`.
    pub fn new(scene: Scene, timing: Timing) -> Result<Self> {
        let slides = slides_of(&scene);
        let indicators = Indicators::find(&scene)?;
        Ok(Self {
            scene,
            slides,
            indicators,
            state: NavigationState::default(),
            animator: Animator::new(),
            timing,
            last_roles: Vec::new(),
        })
    }

    pub fn from_deck(deck: Deck) -> Result<Self> {
        Presentation::new(deck.scene, deck.timing)
    }

    /// Shows the first slide. With no slides only the total is written.
    pub fn start(&mut self) {
        let total = self.total();
        self.scene.set_text(self.indicators.total, total.to_string());

        let Some(&first) = self.slides.first() else {
            log::warn!("Presentation has no slides");
            return;
        };

        self.scene.add_class(first, CLASS_ACTIVE);
        let intro = self.timing.intro;
        let entering = Animation::from_to(
            first,
            &[(Property::Opacity, 0.0, 1.0), (Property::X, self.timing.transition.offset, 0.0)],
            intro.duration,
            intro.ease,
        );
        self.animator.from_to(&mut self.scene, entering);

        self.update_indicators();
        self.animate_content(0);
    }

    /// Starts the transition to `index`. Returns `false`, changing nothing,
    /// when `index` is out of range, already current, or a transition runs.
    pub fn go_to_slide(&mut self, index: usize, direction: Direction) -> bool {
        if index >= self.total() || index == self.state.current || self.state.animating {
            return false;
        }

        log::debug!("Slide {} -> {} ({:?})", self.state.current, index, direction);
        self.state.animating = true;

        let outgoing = self.slides[self.state.current];
        let incoming = self.slides[index];

        // Hide the outgoing list items so their entrance replays next time.
        for item in self.scene.query_all(outgoing, &LIST_ITEMS) {
            self.animator.set(&mut self.scene, item, &[(Property::Opacity, 0.0)]);
        }

        // The timeline alone drives the exit, even if the intro fade still runs.
        self.animator.stop(outgoing, &[Property::Opacity, Property::X]);

        let transition = self.timing.transition;
        let travel = transition.offset * direction.exit_sign();

        let mut leaving = Animation::to(
            outgoing,
            &[(Property::Opacity, 0.0), (Property::X, travel)],
            transition.duration,
            transition.ease,
        );
        if direction == Direction::Next {
            leaving = leaving.on_start(Cue::MarkPrevious(outgoing));
        }

        self.scene.remove_class(incoming, CLASS_PREV);
        self.scene.add_class(incoming, CLASS_ACTIVE);
        self.animator.set(&mut self.scene, incoming, &[(Property::Opacity, 0.0), (Property::X, -travel)]);

        let entering = Animation::to(
            incoming,
            &[(Property::Opacity, 1.0), (Property::X, 0.0)],
            transition.duration,
            transition.ease,
        );

        let timeline = Timeline::new()
            .on_complete(Cue::TransitionFinished { outgoing })
            .then(leaving, 0.0)
            .then(entering, transition.overlap);
        self.animator.play(timeline);

        self.state.current = index;
        self.update_indicators();
        self.animate_content(index);
        true
    }

    pub fn next_slide(&mut self) -> bool {
        if self.state.current + 1 < self.total() {
            self.go_to_slide(self.state.current + 1, Direction::Next)
        } else {
            false
        }
    }

    pub fn prev_slide(&mut self) -> bool {
        if self.state.current > 0 {
            self.go_to_slide(self.state.current - 1, Direction::Prev)
        } else {
            false
        }
    }

    pub fn first_slide(&mut self) -> bool {
        self.go_to_slide(0, Direction::Next)
    }

    pub fn last_slide(&mut self) -> bool {
        match self.total().checked_sub(1) {
            Some(last) => self.go_to_slide(last, Direction::Next),
            None => false,
        }
    }

    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Next => self.next_slide(),
            Command::Prev => self.prev_slide(),
            Command::First => self.first_slide(),
            Command::Last => self.last_slide(),
            Command::GoTo(index) => {
                let direction = if index < self.state.current { Direction::Prev } else { Direction::Next };
                self.go_to_slide(index, direction)
            }
        }
    }

    /// Advances all animations by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        for cue in self.animator.update(dt, &mut self.scene) {
            match cue {
                Cue::MarkPrevious(slide) => self.scene.add_class(slide, CLASS_PREV),
                Cue::TransitionFinished { outgoing } => {
                    self.scene.remove_class(outgoing, CLASS_ACTIVE);
                    self.scene.remove_class(outgoing, CLASS_PREV);
                    self.state.animating = false;
                }
            }
        }
    }

    pub fn current(&self) -> usize {
        self.state.current
    }

    pub fn total(&self) -> usize {
        self.slides.len()
    }

    pub fn is_animating(&self) -> bool {
        self.state.animating
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn slides(&self) -> &[ElementId] {
        &self.slides
    }

    pub fn swipe_threshold(&self) -> f32 {
        self.timing.swipe_threshold
    }

    pub fn set_swipe_threshold(&mut self, threshold: f32) {
        self.timing.swipe_threshold = threshold;
    }

    /// Roles animated on the most recently shown slide.
    pub fn last_roles(&self) -> &[ContentRole] {
        &self.last_roles
    }

    pub fn counter_text(&self) -> &str {
        self.scene.get(self.indicators.counter).text.as_deref().unwrap_or_default()
    }

    pub fn total_text(&self) -> &str {
        self.scene.get(self.indicators.total).text.as_deref().unwrap_or_default()
    }

    pub fn counter(&self) -> ElementId {
        self.indicators.counter
    }

    pub fn progress_bar(&self) -> ElementId {
        self.indicators.progress_bar
    }

    /// Width the progress bar is heading to, in percent.
    pub fn progress_target(&self) -> f32 {
        if self.total() == 0 {
            return 0.0;
        }
        (self.state.current + 1) as f32 / self.total() as f32 * 100.0
    }

    fn update_indicators(&mut self) {
        let indicators = self.timing.indicators;
        let counter = self.indicators.counter;

        let pulse = Animation::from_to(
            counter,
            &[(Property::Scale, indicators.pulse_scale, 1.0)],
            indicators.pulse.duration,
            indicators.pulse.ease,
        );
        self.animator.from_to(&mut self.scene, pulse);
        self.scene.set_text(counter, (self.state.current + 1).to_string());

        let progress = Animation::to(
            self.indicators.progress_bar,
            &[(Property::Width, self.progress_target())],
            indicators.progress.duration,
            indicators.progress.ease,
        );
        self.animator.to(progress);
    }

    fn animate_content(&mut self, index: usize) {
        let slide = self.slides[index];
        self.last_roles = animate_slide_content(&mut self.scene, &mut self.animator, slide, &self.timing.content);
        if !self.last_roles.is_empty() {
            log::debug!("Slide {} content: {:?}", index, self.last_roles);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presentation(slides: usize) -> Presentation {
        let body: Vec<String> = (0..slides)
            .map(|i| format!(r#"{{ "children": [ {{ "tag": "h2", "text": "Slide {i}" }}, {{ "tag": "ul", "children": [ {{ "tag": "li", "text": "point" }} ] }} ] }}"#))
            .collect();
        let text = format!(r#"{{ "slides": [ {} ] }}"#, body.join(","));
        let deck = Deck::parse(&text, ".").unwrap();
        let mut presentation = Presentation::from_deck(deck).unwrap();
        presentation.start();
        presentation.update(5.0);
        presentation
    }

    fn active_slides(p: &Presentation) -> Vec<usize> {
        (0..p.total()).filter(|&i| p.scene().has_class(p.slides()[i], CLASS_ACTIVE)).collect()
    }

    #[test]
    fn start_shows_first_slide() {
        let p = presentation(3);
        assert_eq!(p.current(), 0);
        assert_eq!(active_slides(&p), vec![0]);
        assert_eq!(p.counter_text(), "1");
        assert_eq!(p.total_text(), "3");
        assert_eq!(p.scene().style(p.slides()[0]).opacity, 1.0);
        assert_eq!(p.last_roles(), &[ContentRole::ListItems, ContentRole::Headings]);
    }

    #[test]
    fn every_valid_target_becomes_the_only_active_slide() {
        for target in 1..4 {
            let mut p = presentation(4);
            assert!(p.go_to_slide(target, Direction::Next));
            assert_eq!(p.current(), target);
            assert_eq!(p.counter_text(), (target + 1).to_string());
            p.update(5.0);
            assert_eq!(active_slides(&p), vec![target]);
            assert!(!p.is_animating());
        }
    }

    #[test]
    fn index_updates_before_visuals_settle() {
        let mut p = presentation(3);
        assert!(p.next_slide());
        assert_eq!(p.current(), 1);
        assert!(p.is_animating());
        // Both slides are on stage until the timeline completes.
        assert_eq!(active_slides(&p), vec![0, 1]);
    }

    #[test]
    fn forward_transition_marks_outgoing_as_previous() {
        let mut p = presentation(3);
        let first = p.slides()[0];
        p.next_slide();
        p.update(0.01);
        assert!(p.scene().has_class(first, CLASS_PREV));
        p.update(5.0);
        assert!(!p.scene().has_class(first, CLASS_PREV));
        assert!(!p.scene().has_class(first, CLASS_ACTIVE));
    }

    #[test]
    fn forward_transition_enters_from_the_right_and_leaves_left() {
        let mut p = presentation(3);
        let offset = Timing::default().transition.offset;
        let (first, second) = (p.slides()[0], p.slides()[1]);

        p.next_slide();
        assert_eq!(p.scene().style(second).x, offset);
        assert_eq!(p.scene().style(second).opacity, 0.0);

        p.update(0.2);
        assert!(p.scene().style(first).x < 0.0);

        p.update(5.0);
        assert_eq!(p.scene().style(first).x, -offset);
        assert_eq!(p.scene().style(second).x, 0.0);
    }

    #[test]
    fn leaving_during_the_intro_fade_stays_hidden() {
        let deck = Deck::parse(r#"{ "slides": [ {}, {} ] }"#, ".").unwrap();
        let mut p = Presentation::from_deck(deck).unwrap();
        p.start();
        p.update(0.016);
        let first = p.slides()[0];

        assert!(p.next_slide());
        // Past the leaving step's end but before the 0.6s intro would have finished.
        p.update(0.55);
        p.update(0.03);
        assert_eq!(p.scene().style(first).opacity, 0.0);
        assert!(p.scene().has_class(first, CLASS_PREV));

        p.update(5.0);
        assert_eq!(p.scene().style(first).opacity, 0.0);
        assert!(!p.scene().has_class(first, CLASS_ACTIVE));
    }

    #[test]
    fn backward_transition_does_not_mark_previous() {
        let mut p = presentation(3);
        p.next_slide();
        p.update(5.0);
        let second = p.slides()[1];
        p.prev_slide();
        p.update(0.01);
        assert!(!p.scene().has_class(second, CLASS_PREV));
        // Incoming slide starts on the left for a backward move.
        assert!(p.scene().style(p.slides()[0]).x < 0.0);
    }

    #[test]
    fn invalid_requests_change_nothing() {
        let mut p = presentation(3);
        let before = p.state();

        assert!(!p.go_to_slide(3, Direction::Next));
        assert!(!p.go_to_slide(usize::MAX, Direction::Prev));
        assert!(!p.go_to_slide(0, Direction::Next));
        assert_eq!(p.state(), before);
        assert!(p.animator.is_idle());
    }

    #[test]
    fn requests_during_a_transition_are_dropped() {
        let mut p = presentation(4);
        assert!(p.go_to_slide(1, Direction::Next));
        let during = p.state();
        assert!(!p.go_to_slide(2, Direction::Next));
        assert!(!p.next_slide());
        assert!(!p.prev_slide());
        assert_eq!(p.state(), during);
        assert_eq!(p.animator.timeline_count(), 1);

        p.update(5.0);
        assert!(p.next_slide());
        assert_eq!(p.current(), 2);
    }

    #[test]
    fn edges_are_no_ops() {
        let mut p = presentation(2);
        assert!(!p.prev_slide());
        assert!(p.next_slide());
        p.update(5.0);
        assert!(!p.next_slide());
        assert_eq!(p.current(), 1);
    }

    #[test]
    fn outgoing_list_items_are_hidden() {
        let mut p = presentation(2);
        let item = p.scene().query_first(p.slides()[0], &LIST_ITEMS).unwrap();
        assert_eq!(p.scene().style(item).opacity, 1.0);
        p.next_slide();
        assert_eq!(p.scene().style(item).opacity, 0.0);
    }

    #[test]
    fn progress_tracks_position() {
        let mut p = presentation(4);
        for k in 1..4 {
            p.go_to_slide(k, Direction::Next);
            p.update(5.0);
            let expected = (k + 1) as f32 / 4.0 * 100.0;
            assert_eq!(p.progress_target(), expected);
            assert_eq!(p.scene().style(p.progress_bar()).width, expected);
        }
    }

    #[test]
    fn counter_pulses_then_settles() {
        let mut p = presentation(2);
        p.next_slide();
        assert_eq!(p.scene().style(p.counter()).scale, 1.3);
        p.update(5.0);
        assert_eq!(p.scene().style(p.counter()).scale, 1.0);
    }

    #[test]
    fn empty_deck_tolerates_everything() {
        let mut p = presentation(0);
        assert_eq!(p.total_text(), "0");
        assert!(!p.next_slide());
        assert!(!p.prev_slide());
        assert!(!p.first_slide());
        assert!(!p.last_slide());
        assert_eq!(p.progress_target(), 0.0);
    }

    #[test]
    fn missing_indicators_are_reported() {
        let scene = Scene::new();
        match Presentation::new(scene, Timing::default()) {
            Err(DeckError::MissingElement { selector }) => assert_eq!(selector, "#currentPage"),
            Err(other) => panic!("unexpected error {other}"),
            Ok(_) => panic!("scene without indicators was accepted"),
        }
    }
}
