//! Rotating emphasis over the hero headline keywords.
//!
//! The rotation is a tiny state machine: the state is the emphasized index and
//! each transition yields the next index plus the delay before it applies.
//! Interior steps use [`HighlightTiming::step_ms`]; once the last target is
//! emphasized the wrap back to the first waits [`HighlightTiming::pause_ms`].

use super::config::HighlightTiming;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationStep {
    pub next_index: usize,
    pub delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightRotation {
    len: usize,
    index: usize,
    timing: HighlightTiming,
}

impl HighlightRotation {
    pub fn new(len: usize, timing: HighlightTiming) -> Self {
        Self {
            len,
            index: 0,
            timing,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Step scheduled when the rotation starts; `None` with no targets.
    pub fn first_step(&self) -> Option<RotationStep> {
        if self.len == 0 {
            return None;
        }
        Some(RotationStep {
            next_index: 1 % self.len,
            delay_ms: self.timing.step_ms,
        })
    }

    /// Apply a due step and return the one that follows it.
    pub fn apply(&mut self, step: RotationStep) -> Option<RotationStep> {
        if self.len == 0 {
            return None;
        }
        self.index = step.next_index % self.len;
        let reached_last = self.index == self.len - 1;
        Some(RotationStep {
            next_index: (self.index + 1) % self.len,
            delay_ms: if reached_last {
                self.timing.pause_ms
            } else {
                self.timing.step_ms
            },
        })
    }
}

/// A run of headline text; `target` is the keyword index when the run is one
/// of the rotation targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleSegment {
    pub text: String,
    pub target: Option<usize>,
}

/// Split `text` around the targets, matching ASCII case-insensitively and
/// preferring the leftmost match (earlier targets win at the same position).
pub fn segment_title(text: &str, targets: &[&str]) -> Vec<TitleSegment> {
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while cursor < text.len() {
        let hit = targets.iter().enumerate().find_map(|(idx, target)| {
            if target.is_empty() {
                return None;
            }
            text.get(cursor..cursor + target.len())
                .filter(|candidate| candidate.eq_ignore_ascii_case(target))
                .map(|_| (idx, target.len()))
        });

        match hit {
            Some((idx, len)) => {
                if plain_start < cursor {
                    segments.push(TitleSegment {
                        text: text[plain_start..cursor].to_string(),
                        target: None,
                    });
                }
                segments.push(TitleSegment {
                    text: text[cursor..cursor + len].to_string(),
                    target: Some(idx),
                });
                cursor += len;
                plain_start = cursor;
            }
            None => {
                cursor += text[cursor..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    if plain_start < text.len() {
        segments.push(TitleSegment {
            text: text[plain_start..].to_string(),
            target: None,
        });
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGETS: [&str; 3] = ["front-end", "typescript", "flutter/dart"];

    #[test]
    fn rotation_walks_targets_then_pauses_before_wrapping() {
        let mut rotation = HighlightRotation::new(TARGETS.len(), HighlightTiming::default());
        assert_eq!(rotation.index(), 0);

        let first = rotation.first_step().unwrap();
        assert_eq!(first, RotationStep { next_index: 1, delay_ms: 1_700 });

        let second = rotation.apply(first).unwrap();
        assert_eq!(rotation.index(), 1);
        assert_eq!(second, RotationStep { next_index: 2, delay_ms: 1_700 });

        let wrap = rotation.apply(second).unwrap();
        assert_eq!(rotation.index(), 2);
        assert_eq!(wrap, RotationStep { next_index: 0, delay_ms: 10_000 });

        let after_wrap = rotation.apply(wrap).unwrap();
        assert_eq!(rotation.index(), 0);
        assert_eq!(after_wrap.delay_ms, 1_700);
    }

    #[test]
    fn empty_rotation_never_schedules() {
        let mut rotation = HighlightRotation::new(0, HighlightTiming::default());
        assert!(rotation.first_step().is_none());
        assert!(rotation
            .apply(RotationStep { next_index: 3, delay_ms: 1 })
            .is_none());
        assert_eq!(rotation.index(), 0);
    }

    #[test]
    fn single_target_always_pauses() {
        let mut rotation = HighlightRotation::new(1, HighlightTiming::default());
        let first = rotation.first_step().unwrap();
        assert_eq!(first.next_index, 0);
        let next = rotation.apply(first).unwrap();
        assert_eq!(next, RotationStep { next_index: 0, delay_ms: 10_000 });
    }

    #[test]
    fn segments_headline_case_insensitively() {
        let segments = segment_title(
            "Dev Front-end | React | TypeScript | Flutter/Dart",
            &TARGETS,
        );
        let rendered: Vec<(&str, Option<usize>)> = segments
            .iter()
            .map(|s| (s.text.as_str(), s.target))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("Dev ", None),
                ("Front-end", Some(0)),
                (" | React | ", None),
                ("TypeScript", Some(1)),
                (" | ", None),
                ("Flutter/Dart", Some(2)),
            ]
        );
    }

    #[test]
    fn segments_survive_multibyte_text() {
        let segments = segment_title("Développeur Front-end é", &TARGETS);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].text, "Développeur ");
        assert_eq!(segments[1].target, Some(0));
        assert_eq!(segments[2].text, " é");
    }

    #[test]
    fn text_without_targets_is_one_plain_segment() {
        let segments = segment_title("Rust | Dioxus", &TARGETS);
        assert_eq!(
            segments,
            vec![TitleSegment { text: "Rust | Dioxus".into(), target: None }]
        );
    }
}
