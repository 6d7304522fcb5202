//! Entrance animations for the content of a slide.
//!
//! Each recognized role is one row of [`PROFILES`]: which elements it covers,
//! the pose they enter from and how the group is revealed. Timing comes from
//! [`ContentTiming`] so decks can retune it.

use crate::animation::{Animation, Animator};
use crate::config::{ContentTiming, Motion};
use crate::scene::{ElementId, Property, Scene, Selector, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentRole {
    ListItems,
    Cards,
    TimelineItems,
    Headings,
    ProcessSteps,
    ComparisonSides,
    MediaImage,
    MediaContent,
    Tags,
    TeamMembers,
    Quote,
    ProgressItems,
    ProgressFills,
}

impl ContentRole {
    pub fn name(self) -> &'static str {
        match self {
            ContentRole::ListItems => "list items",
            ContentRole::Cards => "cards",
            ContentRole::TimelineItems => "timeline",
            ContentRole::Headings => "headings",
            ContentRole::ProcessSteps => "process steps",
            ContentRole::ComparisonSides => "comparison",
            ContentRole::MediaImage => "media image",
            ContentRole::MediaContent => "media text",
            ContentRole::Tags => "tags",
            ContentRole::TeamMembers => "team",
            ContentRole::Quote => "quote",
            ContentRole::ProgressItems => "progress items",
            ContentRole::ProgressFills => "progress fills",
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Reveal {
    /// Every match, staggered.
    Group,
    /// The first two matches, entering from opposite sides.
    Mirrored,
    /// Only the first match.
    First,
    /// The first match inside the first element matching the container.
    FirstWithin(Selector),
    /// Fill bars grow from zero to their declared width.
    Fill,
}

struct Profile {
    role: ContentRole,
    selector: Selector,
    /// Only fire when the slide also contains a match for this selector.
    requires: Option<Selector>,
    from: &'static [(Property, f32)],
    reveal: Reveal,
    motion: fn(&ContentTiming) -> &Motion,
}

const MEDIA_CONTAINER: Selector = Selector::classes(&["media-text-container"]);
const PROGRESS_ITEMS: Selector = Selector::classes(&["progress-item"]);

const PROFILES: &[Profile] = &[
    Profile {
        role: ContentRole::ListItems,
        selector: Selector::tags(&["li"]),
        requires: None,
        from: &[(Property::Opacity, 0.0), (Property::X, -20.0)],
        reveal: Reveal::Group,
        motion: |t| &t.list_items,
    },
    Profile {
        role: ContentRole::Cards,
        selector: Selector::classes(&["card", "stat-card"]),
        requires: None,
        from: &[(Property::Opacity, 0.0), (Property::Y, 30.0), (Property::Scale, 0.95)],
        reveal: Reveal::Group,
        motion: |t| &t.cards,
    },
    Profile {
        role: ContentRole::TimelineItems,
        selector: Selector::classes(&["timeline-item", "timeline-item-card"]),
        requires: None,
        from: &[(Property::Opacity, 0.0), (Property::X, -30.0)],
        reveal: Reveal::Group,
        motion: |t| &t.timeline_items,
    },
    Profile {
        role: ContentRole::Headings,
        selector: Selector::tags(&["h1", "h2", "h3"]),
        requires: None,
        from: &[(Property::Opacity, 0.0), (Property::Y, -20.0)],
        reveal: Reveal::Group,
        motion: |t| &t.headings,
    },
    Profile {
        role: ContentRole::ProcessSteps,
        selector: Selector::classes(&["process-step"]),
        requires: None,
        from: &[(Property::Opacity, 0.0), (Property::Y, 30.0)],
        reveal: Reveal::Group,
        motion: |t| &t.process_steps,
    },
    Profile {
        role: ContentRole::ComparisonSides,
        selector: Selector::classes(&["comparison-side"]),
        requires: None,
        from: &[(Property::Opacity, 0.0), (Property::X, -50.0)],
        reveal: Reveal::Mirrored,
        motion: |t| &t.comparison_sides,
    },
    Profile {
        role: ContentRole::MediaImage,
        selector: Selector::classes(&["media-image"]),
        requires: None,
        from: &[(Property::Opacity, 0.0), (Property::X, -40.0)],
        reveal: Reveal::FirstWithin(MEDIA_CONTAINER),
        motion: |t| &t.media_image,
    },
    Profile {
        role: ContentRole::MediaContent,
        selector: Selector::classes(&["media-content"]),
        requires: None,
        from: &[(Property::Opacity, 0.0), (Property::X, 40.0)],
        reveal: Reveal::FirstWithin(MEDIA_CONTAINER),
        motion: |t| &t.media_content,
    },
    Profile {
        role: ContentRole::Tags,
        selector: Selector::classes(&["tag-item"]),
        requires: None,
        from: &[(Property::Opacity, 0.0), (Property::Scale, 0.8)],
        reveal: Reveal::Group,
        motion: |t| &t.tags,
    },
    Profile {
        role: ContentRole::TeamMembers,
        selector: Selector::classes(&["team-member"]),
        requires: None,
        from: &[(Property::Opacity, 0.0), (Property::Y, 40.0)],
        reveal: Reveal::Group,
        motion: |t| &t.team_members,
    },
    Profile {
        role: ContentRole::Quote,
        selector: Selector::classes(&["quote-highlight"]),
        requires: None,
        from: &[(Property::Opacity, 0.0), (Property::Scale, 0.95)],
        reveal: Reveal::First,
        motion: |t| &t.quote,
    },
    Profile {
        role: ContentRole::ProgressItems,
        selector: PROGRESS_ITEMS,
        requires: None,
        from: &[(Property::Opacity, 0.0), (Property::X, -30.0)],
        reveal: Reveal::Group,
        motion: |t| &t.progress_items,
    },
    Profile {
        role: ContentRole::ProgressFills,
        selector: Selector::classes(&["progress-bar-fill"]),
        requires: Some(PROGRESS_ITEMS),
        from: &[(Property::Width, 0.0)],
        reveal: Reveal::Fill,
        motion: |t| &t.progress_fills,
    },
];

/// Resting value of a property once an entrance has played.
fn rest(property: Property) -> f32 {
    Style::default().get(property)
}

fn entrance(from: &[(Property, f32)]) -> Vec<(Property, f32, f32)> {
    from.iter().map(|&(property, value)| (property, value, rest(property))).collect()
}

impl Profile {
    fn targets(&self, scene: &Scene, slide: ElementId) -> Vec<ElementId> {
        if let Some(required) = &self.requires {
            if scene.query_first(slide, required).is_none() {
                return Vec::new();
            }
        }
        match self.reveal {
            Reveal::Group | Reveal::Fill => scene.query_all(slide, &self.selector),
            Reveal::Mirrored => scene.query_all(slide, &self.selector).into_iter().take(2).collect(),
            Reveal::First => scene.query_first(slide, &self.selector).into_iter().collect(),
            Reveal::FirstWithin(container) => scene
                .query_first(slide, &container)
                .and_then(|container| scene.query_first(container, &self.selector))
                .into_iter()
                .collect(),
        }
    }

    fn play(&self, targets: &[ElementId], scene: &mut Scene, animator: &mut Animator, motion: &Motion) {
        match self.reveal {
            Reveal::Group => {
                animator.stagger_from_to(scene, targets, &entrance(self.from), motion);
            }
            Reveal::Mirrored => {
                for (i, &target) in targets.iter().enumerate() {
                    let sign = if i == 0 { 1.0 } else { -1.0 };
                    let props: Vec<_> = self
                        .from
                        .iter()
                        .map(|&(property, value)| match property {
                            Property::X => (property, value * sign, rest(property)),
                            _ => (property, value, rest(property)),
                        })
                        .collect();
                    let animation =
                        Animation::from_to(target, &props, motion.duration, motion.ease).with_delay(motion.delay);
                    animator.from_to(scene, animation);
                }
            }
            Reveal::First | Reveal::FirstWithin(_) => {
                for &target in targets {
                    let animation = Animation::from_to(target, &entrance(self.from), motion.duration, motion.ease)
                        .with_delay(motion.delay);
                    animator.from_to(scene, animation);
                }
            }
            Reveal::Fill => {
                for (i, &target) in targets.iter().enumerate() {
                    // The declared width is the target; the live width may be mid-tween.
                    let width = scene.get(target).declared_width.unwrap_or_else(|| rest(Property::Width));
                    let animation = Animation::from_to(target, &[(Property::Width, 0.0, width)], motion.duration, motion.ease)
                        .with_delay(motion.delay + motion.stagger * i as f32);
                    animator.from_to(scene, animation);
                }
            }
        }
    }
}

/// Fires the entrance of every role present on `slide`.
/// Returns the roles that fired, in table order.
pub fn animate_slide_content(
    scene: &mut Scene,
    animator: &mut Animator,
    slide: ElementId,
    timing: &ContentTiming,
) -> Vec<ContentRole> {
    let mut fired = Vec::new();
    for profile in PROFILES {
        let targets = profile.targets(scene, slide);
        if targets.is_empty() {
            continue;
        }
        profile.play(&targets, scene, animator, (profile.motion)(timing));
        fired.push(profile.role);
    }
    fired
}

/// Number of elements each role would animate on `slide`.
pub fn role_counts(scene: &Scene, slide: ElementId) -> Vec<(ContentRole, usize)> {
    PROFILES
        .iter()
        .map(|profile| (profile.role, profile.targets(scene, slide).len()))
        .filter(|(_, count)| *count > 0)
        .collect()
}
