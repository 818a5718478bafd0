//! Section entrance tracking
//!
//! Each framed section plays its entrance transition once: the first time
//! its visible fraction exceeds the configured threshold. The host's
//! layout/scroll pipeline feeds visibility into a [`Viewport`]; a section
//! subscribes with [`Viewport::observe`] and receives at most one event.

use crate::content::SectionId;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, PoisonError};
use tokio::sync::oneshot;

/// Fraction of a section that must be visible before it counts as entered
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    pub const DEFAULT: Threshold = Threshold(0.1);

    /// Returns `None` outside `0.0..=1.0` (and for NaN)
    pub fn new(fraction: f64) -> Option<Self> {
        (0.0..=1.0).contains(&fraction).then_some(Threshold(fraction))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    fn is_exceeded_by(&self, visible_fraction: f64) -> bool {
        visible_fraction > self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Visual state of a section frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionPhase {
    /// Offset and transparent, waiting to enter
    Pre,
    /// Entered; final position
    Resting,
}

impl SectionPhase {
    /// CSS class applied to the section element
    pub fn class(&self) -> &'static str {
        match self {
            SectionPhase::Pre => "section-pre-entrance",
            SectionPhase::Resting => "section-resting",
        }
    }
}

/// Proof that a watched section crossed its threshold
#[derive(Debug, PartialEq, Eq)]
pub struct Entered {
    section: SectionId,
}

impl Entered {
    pub fn section(&self) -> SectionId {
        self.section
    }
}

/// One-shot `has_entered_view` flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionVisibility {
    entered: bool,
}

impl SectionVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_entered_view(&self) -> bool {
        self.entered
    }

    /// Apply an entrance event. Returns `true` only for the flip itself.
    pub fn enter(&mut self, _event: Entered) -> bool {
        let flipped = !self.entered;
        self.entered = true;
        flipped
    }

    pub fn phase(&self) -> SectionPhase {
        if self.entered {
            SectionPhase::Resting
        } else {
            SectionPhase::Pre
        }
    }
}

struct Watch {
    threshold: Threshold,
    notify: oneshot::Sender<Entered>,
}

/// Registry of pending intersection watches
#[derive(Default)]
pub struct Viewport {
    watches: Mutex<HashMap<SectionId, Watch>>,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Watch `section` until it first becomes more than `threshold` visible.
    ///
    /// Observing a section again replaces the earlier watch, whose
    /// [`EntranceWatch`] then resolves without an event.
    pub fn observe(&self, section: SectionId, threshold: Threshold) -> EntranceWatch {
        let (notify, events) = oneshot::channel();
        self.watches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(section, Watch { threshold, notify });

        tracing::debug!(%section, threshold = threshold.value(), "Watching section entrance");
        EntranceWatch { section, events }
    }

    /// Feed a visibility measurement from the layout/scroll pipeline.
    ///
    /// Returns `true` when this report fired the section's watch. The watch
    /// is removed as it fires, so later reports never fire again.
    pub fn report(&self, section: SectionId, visible_fraction: f64) -> bool {
        let mut watches = self.watches.lock().unwrap_or_else(PoisonError::into_inner);

        let crossed = watches
            .get(&section)
            .is_some_and(|watch| watch.threshold.is_exceeded_by(visible_fraction));
        if !crossed {
            return false;
        }

        let Some(watch) = watches.remove(&section) else {
            return false;
        };
        drop(watches);

        tracing::debug!(%section, visible_fraction, "Section entered view");
        // The subscriber may already be gone; the watch is retired either way.
        let _ = watch.notify.send(Entered { section });
        true
    }

    pub fn is_watching(&self, section: SectionId) -> bool {
        self.watches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&section)
    }
}

/// Single-event subscription returned by [`Viewport::observe`]
#[derive(Debug)]
pub struct EntranceWatch {
    section: SectionId,
    events: oneshot::Receiver<Entered>,
}

impl EntranceWatch {
    pub fn section(&self) -> SectionId {
        self.section
    }

    /// Take the event if it has already fired
    pub fn try_take(&mut self) -> Option<Entered> {
        self.events.try_recv().ok()
    }

    /// Wait for the event. `None` if the watch was retired without firing.
    pub async fn entered(self) -> Option<Entered> {
        self.events.await.ok()
    }
}

/// A mounted section: its flag plus the watch that can flip it
#[derive(Debug)]
pub struct SectionFrame {
    id: SectionId,
    visibility: SectionVisibility,
    watch: Option<EntranceWatch>,
}

impl SectionFrame {
    pub fn mount(id: SectionId, viewport: &Viewport, threshold: Threshold) -> Self {
        Self {
            id,
            visibility: SectionVisibility::new(),
            watch: Some(viewport.observe(id, threshold)),
        }
    }

    pub fn id(&self) -> SectionId {
        self.id
    }

    pub fn has_entered_view(&self) -> bool {
        self.visibility.has_entered_view()
    }

    pub fn phase(&self) -> SectionPhase {
        self.visibility.phase()
    }

    /// Apply a pending entrance event without waiting.
    /// Returns `true` if the section flipped during this call.
    pub fn poll(&mut self) -> bool {
        let Some(event) = self.watch.as_mut().and_then(EntranceWatch::try_take) else {
            return false;
        };
        self.watch = None;
        self.visibility.enter(event)
    }

    /// Wait for the entrance event and apply it
    pub async fn wait_for_entrance(&mut self) -> bool {
        let Some(watch) = self.watch.take() else {
            return false;
        };
        match watch.entered().await {
            Some(event) => self.visibility.enter(event),
            None => false,
        }
    }
}

/// Entrance phase of every framed section, as seen by the composer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityMap {
    entered: BTreeMap<SectionId, bool>,
}

impl VisibilityMap {
    /// Every section waiting to enter
    pub fn initial() -> Self {
        Self::default()
    }

    pub fn from_frames<'a>(frames: impl IntoIterator<Item = &'a SectionFrame>) -> Self {
        let mut map = Self::initial();
        for frame in frames {
            if frame.has_entered_view() {
                map.mark_entered(frame.id());
            }
        }
        map
    }

    /// Monotonic: there is no way to mark a section as not entered
    pub fn mark_entered(&mut self, section: SectionId) {
        self.entered.insert(section, true);
    }

    pub fn phase(&self, section: SectionId) -> SectionPhase {
        if self.entered.get(&section).copied().unwrap_or(false) {
            SectionPhase::Resting
        } else {
            SectionPhase::Pre
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_bounds() {
        assert_eq!(Threshold::default().value(), 0.1);
        assert!(Threshold::new(0.0).is_some());
        assert!(Threshold::new(1.0).is_some());
        assert!(Threshold::new(-0.1).is_none());
        assert!(Threshold::new(1.5).is_none());
        assert!(Threshold::new(f64::NAN).is_none());
    }

    #[test]
    fn test_flag_starts_false() {
        let viewport = Viewport::new();
        let frame = SectionFrame::mount(SectionId::About, &viewport, Threshold::DEFAULT);
        assert!(!frame.has_entered_view());
        assert_eq!(frame.phase(), SectionPhase::Pre);
        assert!(viewport.is_watching(SectionId::About));
    }

    #[test]
    fn test_threshold_must_be_exceeded() {
        let viewport = Viewport::new();
        let mut frame = SectionFrame::mount(SectionId::Team, &viewport, Threshold::DEFAULT);

        assert!(!viewport.report(SectionId::Team, 0.05));
        assert!(!viewport.report(SectionId::Team, 0.1));
        assert!(!frame.poll());
        assert!(!frame.has_entered_view());

        assert!(viewport.report(SectionId::Team, 0.11));
        assert!(frame.poll());
        assert!(frame.has_entered_view());
        assert_eq!(frame.phase(), SectionPhase::Resting);
    }

    #[test]
    fn test_flips_at_most_once() {
        let viewport = Viewport::new();
        let mut frame = SectionFrame::mount(SectionId::Gallery, &viewport, Threshold::DEFAULT);
        let mut flips = 0;

        for fraction in [0.0, 0.5, 0.0, 0.9, 0.0, 1.0, 0.2] {
            viewport.report(SectionId::Gallery, fraction);
            if frame.poll() {
                flips += 1;
            }
            if fraction == 0.0 && flips > 0 {
                assert!(frame.has_entered_view(), "flag reverted on scroll away");
            }
        }

        assert_eq!(flips, 1);
        assert!(frame.has_entered_view());
        assert!(!viewport.is_watching(SectionId::Gallery));
    }

    #[test]
    fn test_sections_are_independent() {
        let viewport = Viewport::new();
        let mut about = SectionFrame::mount(SectionId::About, &viewport, Threshold::DEFAULT);
        let mut team = SectionFrame::mount(SectionId::Team, &viewport, Threshold::DEFAULT);

        viewport.report(SectionId::About, 0.4);
        about.poll();
        team.poll();

        assert!(about.has_entered_view());
        assert!(!team.has_entered_view());
        assert!(viewport.is_watching(SectionId::Team));
    }

    #[test]
    fn test_report_without_watch_is_ignored() {
        let viewport = Viewport::new();
        assert!(!viewport.report(SectionId::Problem, 1.0));
    }

    #[test]
    fn test_visibility_enter_returns_flip_only_once() {
        let mut visibility = SectionVisibility::new();
        assert!(visibility.enter(Entered { section: SectionId::About }));
        assert!(!visibility.enter(Entered { section: SectionId::About }));
        assert!(visibility.has_entered_view());
    }

    #[tokio::test]
    async fn test_wait_for_entrance() {
        let viewport = std::sync::Arc::new(Viewport::new());
        let mut frame = SectionFrame::mount(SectionId::Solution, &viewport, Threshold::DEFAULT);

        let pipeline = {
            let viewport = viewport.clone();
            tokio::spawn(async move {
                viewport.report(SectionId::Solution, 0.02);
                viewport.report(SectionId::Solution, 0.3)
            })
        };

        assert!(frame.wait_for_entrance().await);
        assert!(pipeline.await.unwrap());
        assert!(frame.has_entered_view());
        assert!(!frame.wait_for_entrance().await);
    }

    #[tokio::test]
    async fn test_replaced_watch_resolves_empty() {
        let viewport = Viewport::new();
        let first = viewport.observe(SectionId::Contact, Threshold::DEFAULT);
        let _second = viewport.observe(SectionId::Contact, Threshold::DEFAULT);
        assert!(first.entered().await.is_none());
    }

    #[test]
    fn test_visibility_map_from_frames() {
        let viewport = Viewport::new();
        let mut about = SectionFrame::mount(SectionId::About, &viewport, Threshold::DEFAULT);
        let problem = SectionFrame::mount(SectionId::Problem, &viewport, Threshold::DEFAULT);
        viewport.report(SectionId::About, 0.5);
        about.poll();

        let map = VisibilityMap::from_frames([&about, &problem]);
        assert_eq!(map.phase(SectionId::About), SectionPhase::Resting);
        assert_eq!(map.phase(SectionId::Problem), SectionPhase::Pre);
        assert_eq!(VisibilityMap::initial().phase(SectionId::About), SectionPhase::Pre);
    }
}
