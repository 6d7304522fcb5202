use std::fs;

use raylib::consts::KeyboardKey;
use slidedeck::constants::{CLASS_ACTIVE, CLASS_PROGRESS_BAR};
use slidedeck::input::{command_for_key, SwipeTracker};
use slidedeck::scene::Selector;
use slidedeck::{Deck, DeckError, Presentation};

const SETTLE: f32 = 10.0;

const FIVE_SLIDES: &str = r#"{
    "title": "Five",
    "slides": [
        { "class": "title-slide", "children": [ { "tag": "h1", "text": "Intro" } ] },
        { "children": [ { "tag": "h2", "text": "Agenda" },
                        { "tag": "ul", "children": [ { "tag": "li", "text": "a" }, { "tag": "li", "text": "b" } ] } ] },
        { "children": [ { "class": "progress-item", "children": [
                            { "text": "Rust" },
                            { "class": "progress-bar-fill", "style": { "width": 85 } } ] },
                        { "class": "progress-item", "children": [
                            { "text": "Go" },
                            { "class": "progress-bar-fill", "style": { "width": 40 } } ] } ] },
        { "children": [ { "class": "comparison", "children": [
                            { "class": "comparison-side", "text": "Before" },
                            { "class": "comparison-side", "text": "After" } ] } ] },
        { "children": [ { "class": "quote-highlight", "text": "Ship it" } ] }
    ]
}"#;

fn started(text: &str) -> Presentation {
    let deck = Deck::parse(text, ".").unwrap();
    let mut presentation = Presentation::from_deck(deck).unwrap();
    presentation.start();
    presentation.update(SETTLE);
    presentation
}

fn press(presentation: &mut Presentation, key: KeyboardKey) -> bool {
    let command = command_for_key(key).expect("navigation key");
    let moved = presentation.apply(command);
    presentation.update(SETTLE);
    moved
}

fn active_count(presentation: &Presentation) -> usize {
    presentation
        .slides()
        .iter()
        .filter(|&&slide| presentation.scene().has_class(slide, CLASS_ACTIVE))
        .count()
}

fn progress_width(presentation: &Presentation) -> f32 {
    let scene = presentation.scene();
    let bar = scene.query_first(scene.root(), &Selector::classes(&[CLASS_PROGRESS_BAR])).unwrap();
    scene.style(bar).width
}

#[test]
fn arrow_keys_walk_to_the_end_and_home_returns() {
    let mut p = started(FIVE_SLIDES);
    assert_eq!(p.current(), 0);
    assert_eq!(p.counter_text(), "1");
    assert!((progress_width(&p) - 20.0).abs() < 1e-3);

    for _ in 0..4 {
        assert!(press(&mut p, KeyboardKey::KEY_RIGHT));
    }
    assert_eq!(p.current(), 4);
    assert_eq!(p.counter_text(), "5");
    assert_eq!(progress_width(&p), 100.0);
    assert_eq!(active_count(&p), 1);

    assert!(!press(&mut p, KeyboardKey::KEY_END));
    assert!(!press(&mut p, KeyboardKey::KEY_RIGHT));
    assert_eq!(p.current(), 4);

    assert!(press(&mut p, KeyboardKey::KEY_HOME));
    assert_eq!(p.current(), 0);
    assert_eq!(p.counter_text(), "1");
    assert_eq!(active_count(&p), 1);
}

#[test]
fn keys_pressed_mid_transition_are_dropped() {
    let mut p = started(FIVE_SLIDES);
    assert!(p.apply(command_for_key(KeyboardKey::KEY_SPACE).unwrap()));
    assert!(!p.apply(command_for_key(KeyboardKey::KEY_PAGE_DOWN).unwrap()));
    assert!(!p.apply(command_for_key(KeyboardKey::KEY_END).unwrap()));
    p.update(SETTLE);
    assert_eq!(p.current(), 1);
}

#[test]
fn swipes_navigate_past_the_threshold_only() {
    let mut p = started(FIVE_SLIDES);
    let mut swipe = SwipeTracker::new(p.swipe_threshold());

    swipe.touch_start(500.0);
    assert_eq!(swipe.touch_end(460.0), None);

    swipe.touch_start(500.0);
    let command = swipe.touch_end(300.0).unwrap();
    assert!(p.apply(command));
    p.update(SETTLE);
    assert_eq!(p.current(), 1);

    swipe.touch_start(300.0);
    let command = swipe.touch_end(500.0).unwrap();
    assert!(p.apply(command));
    p.update(SETTLE);
    assert_eq!(p.current(), 0);
}

#[test]
fn fill_bars_restore_declared_width_on_every_visit() {
    let mut p = started(FIVE_SLIDES);
    let slide = p.slides()[2];
    let fills = p.scene().query_all(slide, &Selector::classes(&["progress-bar-fill"]));
    let widths = |p: &Presentation| fills.iter().map(|&f| p.scene().style(f).width).collect::<Vec<_>>();

    p.go_to_slide(2, slidedeck::state::Direction::Next);
    assert_eq!(widths(&p), vec![0.0, 0.0]);
    p.update(SETTLE);
    assert_eq!(widths(&p), vec![85.0, 40.0]);

    // Leave and come back before the bars have finished growing.
    p.go_to_slide(3, slidedeck::state::Direction::Next);
    p.update(SETTLE);
    p.go_to_slide(2, slidedeck::state::Direction::Prev);
    p.update(0.4);
    p.update(0.3);
    let partial = widths(&p);
    assert!(partial[0] < 85.0);
    p.go_to_slide(1, slidedeck::state::Direction::Prev);
    p.update(SETTLE);
    p.go_to_slide(2, slidedeck::state::Direction::Next);
    p.update(SETTLE);

    assert_eq!(widths(&p), vec![85.0, 40.0]);
}

#[test]
fn deck_loads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("talk.json");
    fs::write(&path, FIVE_SLIDES).unwrap();

    let deck = Deck::load(&path).unwrap();
    assert_eq!(deck.slide_count(), 5);
    assert_eq!(deck.base_dir, dir.path());
}

#[test]
fn missing_deck_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Deck::load(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(DeckError::Read { .. })));
}
