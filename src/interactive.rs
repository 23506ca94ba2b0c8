//! Interactive example sentences: segmentation into plain and replaceable
//! spans, and the per-instance word-replacement toggle.
//!
//! Replacements are located by a sequential first-occurrence scan: each
//! replacement is searched from the end of the previous match, so multiple
//! replacements in one sentence never overlap. A replacement whose
//! `original` text is not found is skipped silently; catalog content may
//! legitimately reference phrasing variants.

use serde::Serialize;

use crate::content::WordReplacement;

/// One display span of a segmented sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment<'a> {
    /// Plain text between interactive spans.
    Plain { text: &'a str },
    /// An interactive span backed by a word replacement.
    Replaceable {
        text: &'a str,
        replacement: &'a WordReplacement,
    },
}

impl Segment<'_> {
    /// The raw sentence text this span covers, ignoring interactivity.
    pub fn raw_text(&self) -> &str {
        match self {
            Segment::Plain { text } => text,
            Segment::Replaceable { text, .. } => text,
        }
    }
}

/// Lazy iterator over the display segments of a sentence.
///
/// Restartable by calling [`segment_sentence`] again; concatenating every
/// segment's raw text reproduces the sentence exactly.
#[derive(Debug, Clone)]
pub struct SentenceSegments<'a> {
    sentence: &'a str,
    replacements: std::slice::Iter<'a, WordReplacement>,
    /// Byte offset of the next unemitted sentence text.
    cursor: usize,
    /// Queued interactive span (emitted after its preceding plain span).
    pending: Option<(usize, &'a WordReplacement)>,
    done: bool,
}

impl<'a> Iterator for SentenceSegments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((start, replacement)) = self.pending.take() {
            let end = start + replacement.original.len();
            self.cursor = end;
            return Some(Segment::Replaceable {
                text: &self.sentence[start..end],
                replacement,
            });
        }

        for replacement in self.replacements.by_ref() {
            let Some(found) = self.sentence[self.cursor..].find(&replacement.original) else {
                // Silent skip: this replacement renders nothing
                continue;
            };
            let start = self.cursor + found;
            if start > self.cursor {
                self.pending = Some((start, replacement));
                return Some(Segment::Plain {
                    text: &self.sentence[self.cursor..start],
                });
            }
            let end = start + replacement.original.len();
            self.cursor = end;
            return Some(Segment::Replaceable {
                text: &self.sentence[start..end],
                replacement,
            });
        }

        if !self.done {
            self.done = true;
            if self.cursor < self.sentence.len() {
                return Some(Segment::Plain {
                    text: &self.sentence[self.cursor..],
                });
            }
        }
        None
    }
}

/// Segment a sentence against an ordered replacement list.
pub fn segment_sentence<'a>(
    sentence: &'a str,
    replacements: &'a [WordReplacement],
) -> SentenceSegments<'a> {
    SentenceSegments {
        sentence,
        replacements: replacements.iter(),
        cursor: 0,
        pending: None,
        done: false,
    }
}

/// Toggle state of one rendered replacement instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleState {
    #[default]
    Original,
    Swapped,
}

/// Which element should hold input focus after a transition. While swapped,
/// the hint popover takes focus (screen-reader and keyboard users); on
/// restore, focus returns to the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Trigger,
    Popover,
}

/// Per-instance state machine for one replacement span. Instances are
/// independent: toggling one never affects another, even within the same
/// sentence, and nothing here is ever persisted.
#[derive(Debug, Clone)]
pub struct ReplacementToggle<'a> {
    replacement: &'a WordReplacement,
    state: ToggleState,
}

impl<'a> ReplacementToggle<'a> {
    pub fn new(replacement: &'a WordReplacement) -> Self {
        Self {
            replacement,
            state: ToggleState::Original,
        }
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    pub fn is_swapped(&self) -> bool {
        self.state == ToggleState::Swapped
    }

    /// The user activation action (click, tap, Enter/Space): toggles
    /// between the two states. Returns the new focus target.
    pub fn activate(&mut self) -> FocusTarget {
        self.state = match self.state {
            ToggleState::Original => ToggleState::Swapped,
            ToggleState::Swapped => ToggleState::Original,
        };
        self.focus_target()
    }

    /// Explicit dismissal (restore control or Escape): forces Original.
    /// A no-op when already showing the original text.
    pub fn dismiss(&mut self) -> FocusTarget {
        self.state = ToggleState::Original;
        FocusTarget::Trigger
    }

    fn focus_target(&self) -> FocusTarget {
        match self.state {
            ToggleState::Original => FocusTarget::Trigger,
            ToggleState::Swapped => FocusTarget::Popover,
        }
    }

    /// The text currently displayed for this span.
    pub fn displayed_text(&self) -> &str {
        match self.state {
            ToggleState::Original => &self.replacement.original,
            ToggleState::Swapped => &self.replacement.replacement,
        }
    }

    /// Hint text and grammar label, shown only while swapped.
    pub fn hint(&self) -> Option<(&str, &'static str)> {
        match self.state {
            ToggleState::Original => None,
            ToggleState::Swapped => Some((
                self.replacement.hint.as_str(),
                self.replacement.grammar_type.label(),
            )),
        }
    }
}
