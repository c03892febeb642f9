//! Infinitely looping scroll gallery.
//!
//! The gallery renders its items three times in a row and keeps the user
//! inside the middle copy: when the scroll offset drifts far enough into the
//! first or third copy it is moved by exactly one copy's extent, which leaves
//! the rendered content unchanged. The active item is the one whose slot
//! center is closest to the center of the visible region.
//!
//! Everything here is toolkit-agnostic. The caller reports scroll positions,
//! viewport sizes and animation frames, and applies the returned
//! [`GalleryEffect`]s (scroll commands, active-item notifications and open
//! requests) to its own widgets.

mod layout;
mod sequence;
mod state;
mod tween;

pub use layout::SlotLayout;
pub use sequence::ExtendedSequence;
pub use state::{ScrollPhase, ScrollState};
use tween::ScrollTween;

use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Share of one copy kept between the high wrap threshold and the end of
/// the scrollable content.
const END_MARGIN: f32 = 0.25;

/// One entry of the gallery, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    /// Opaque image reference; resolved to a URL by the caller.
    pub image_ref: String,
    pub order: i64,
}

/// Presentation constants for a gallery instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryTuning {
    /// Jump forward when the offset falls below this fraction of one copy.
    pub wrap_low: f32,
    /// Jump backward when the offset rises above this fraction of one copy.
    pub wrap_high: f32,
    pub parallax_strength_px: f32,
    pub jump_settle: Duration,
    pub select_duration: Duration,
    pub slot_height_ratio: f32,
    pub slot_gap_ratio: f32,
    /// Above this many rendered slots, scroll reports are processed on the
    /// next animation frame instead of synchronously.
    pub coalesce_above_slots: usize,
}

impl GalleryTuning {
    /// Thresholds must sit inside the first and second copy and be at least
    /// one copy apart, otherwise a jump could land beyond the opposite
    /// threshold and bounce back.
    pub fn is_valid_wrap(low: f32, high: f32) -> bool {
        low.is_finite()
            && high.is_finite()
            && low > 0.0
            && low < 1.0
            && high > 1.0
            && high < 2.0
            && high - low >= 1.0
    }

    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !Self::is_valid_wrap(self.wrap_low, self.wrap_high) {
            warn!(
                low = self.wrap_low,
                high = self.wrap_high,
                "Invalid loop thresholds; using defaults"
            );
            self.wrap_low = defaults.wrap_low;
            self.wrap_high = defaults.wrap_high;
        }
        if !(self.slot_height_ratio.is_finite() && self.slot_height_ratio > 0.0) {
            self.slot_height_ratio = defaults.slot_height_ratio;
        }
        if !(self.slot_gap_ratio.is_finite() && self.slot_gap_ratio >= 0.0) {
            self.slot_gap_ratio = defaults.slot_gap_ratio;
        }
        if !self.parallax_strength_px.is_finite() {
            self.parallax_strength_px = 0.0;
        }
        self
    }
}

impl Default for GalleryTuning {
    fn default() -> Self {
        Self {
            wrap_low: 0.4,
            wrap_high: 1.6,
            parallax_strength_px: 40.0,
            jump_settle: Duration::from_millis(50),
            select_duration: Duration::from_millis(600),
            slot_height_ratio: 0.4,
            slot_gap_ratio: 0.04,
            coalesce_above_slots: 96,
        }
    }
}

/// Work the caller must perform after a gallery operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GalleryEffect {
    /// Move the scroll container to this absolute offset without animation.
    ScrollTo(f32),
    /// The active item changed.
    ActiveChanged(usize),
    /// The user confirmed an item that was already active.
    Open(usize),
}

#[derive(Debug)]
pub struct LoopingGallery {
    items: Vec<GalleryItem>,
    tuning: GalleryTuning,
    layout: Option<SlotLayout>,
    state: ScrollState,
    parallax: Vec<f32>,
    tween: Option<ScrollTween>,
    pending_offset: Option<f32>,
}

impl LoopingGallery {
    pub fn new(items: Vec<GalleryItem>, tuning: GalleryTuning) -> Self {
        Self {
            items,
            tuning: tuning.sanitized(),
            layout: None,
            state: ScrollState::new(),
            parallax: Vec::new(),
            tween: None,
            pending_offset: None,
        }
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn sequence(&self) -> ExtendedSequence<'_> {
        ExtendedSequence::new(&self.items)
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn phase(&self) -> ScrollPhase {
        self.state.phase
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    pub fn active_item(&self) -> Option<&GalleryItem> {
        self.items.get(self.state.active_index)
    }

    pub fn layout(&self) -> Option<&SlotLayout> {
        self.layout.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.state.is_mounted()
    }

    /// Vertical image shift for the slot at `extended`, in pixels.
    pub fn parallax_offset(&self, extended: usize) -> f32 {
        self.parallax.get(extended).copied().unwrap_or(0.0)
    }

    /// Whether animation frames must be delivered to [`Self::tick`].
    pub fn needs_frames(&self) -> bool {
        self.state.is_programmatic_jump() || self.tween.is_some() || self.pending_offset.is_some()
    }

    /// Seed the scroll position at the start of the middle copy once the
    /// viewport height is known.
    pub fn mount(&mut self, viewport_height: f32) -> Vec<GalleryEffect> {
        let mut effects = Vec::new();
        if self.items.is_empty() || self.state.phase != ScrollPhase::Uninitialized {
            return effects;
        }

        let layout = self.build_layout(viewport_height);
        let offset = layout.clamp_offset(layout.one_set_extent());
        info!(
            items = self.items.len(),
            viewport_height = layout.viewport_height(),
            one_set_extent = layout.one_set_extent(),
            offset,
            "Mounted looping gallery"
        );
        self.layout = Some(layout);
        self.state.phase = ScrollPhase::Settled;
        self.state.raw_offset = offset;
        effects.push(GalleryEffect::ScrollTo(offset));
        self.update_parallax(offset);
        self.update_active(&mut effects);
        effects
    }

    /// Continuous update for a scroll report from the container.
    pub fn on_scroll(
        &mut self,
        offset: f32,
        viewport_height: f32,
        now: Instant,
    ) -> Vec<GalleryEffect> {
        let mut effects = Vec::new();
        if !self.state.is_mounted() || !offset.is_finite() {
            return effects;
        }

        if self.viewport_changed(viewport_height) {
            if !self.state.is_programmatic_jump() {
                if let Some(layout) = self.layout.as_ref() {
                    self.state.raw_offset = layout.clamp_offset(offset);
                }
            }
            self.apply_resize(viewport_height, &mut effects);
            return effects;
        }

        if self.coalescing() && !self.state.is_programmatic_jump() && self.tween.is_none() {
            self.pending_offset = Some(offset);
            return effects;
        }

        self.apply_report(offset, now, &mut effects);
        effects
    }

    /// Animation frame: settles pending jumps, advances the selection
    /// tween and flushes coalesced scroll reports.
    pub fn tick(&mut self, now: Instant) -> Vec<GalleryEffect> {
        let mut effects = Vec::new();
        if !self.state.is_mounted() {
            return effects;
        }

        if let ScrollPhase::Jumping { target, issued_at } = self.state.phase {
            if now.saturating_duration_since(issued_at) >= self.tuning.jump_settle {
                self.state.phase = ScrollPhase::Settled;
                debug!(offset = target, "Loop jump settled");
                if self.tween.is_none() {
                    self.state.raw_offset = target;
                    self.update_parallax(target);
                    self.update_active(&mut effects);
                }
            }
        }

        if let Some(tween) = self.tween {
            let offset = match self.layout.as_ref() {
                Some(layout) => layout.clamp_offset(tween.sample(now)),
                None => tween.sample(now),
            };
            self.state.raw_offset = offset;
            effects.push(GalleryEffect::ScrollTo(offset));
            self.update_parallax(offset);
            if tween.is_done(now) {
                // The selected item stays active even if clamping kept it
                // off the visible center.
                self.tween = None;
                debug!(offset, active = self.state.active_index, "Selection animation finished");
            }
        } else if !self.state.is_programmatic_jump() {
            if let Some(offset) = self.pending_offset.take() {
                self.apply_report(offset, now, &mut effects);
            }
        }

        effects
    }

    /// Animate the middle-copy slot of `target` to the visible center and
    /// mark it active right away.
    pub fn select_item(&mut self, target: usize, now: Instant) -> Vec<GalleryEffect> {
        let mut effects = Vec::new();
        if !self.state.is_mounted() {
            return effects;
        }
        let Some(extended) = self.sequence().middle_index(target) else {
            return effects;
        };
        let Some(goal) = self
            .layout
            .as_ref()
            .and_then(|layout| layout.centering_offset(extended))
        else {
            return effects;
        };

        debug!(
            target,
            extended,
            from = self.state.raw_offset,
            to = goal,
            "Animating to gallery item"
        );
        self.tween = Some(ScrollTween::new(
            self.state.raw_offset,
            goal,
            now,
            self.tuning.select_duration,
        ));
        self.pending_offset = None;
        self.set_active(target, &mut effects);
        effects
    }

    /// Caption press: open the item when it is already active, otherwise
    /// scroll to it.
    pub fn press_caption(&mut self, index: usize, now: Instant) -> Vec<GalleryEffect> {
        if !self.state.is_mounted() || index >= self.items.len() {
            return Vec::new();
        }
        if index == self.state.active_index {
            return vec![GalleryEffect::Open(index)];
        }
        self.select_item(index, now)
    }

    /// Image press on any rendered copy.
    pub fn press_slot(&mut self, extended: usize, now: Instant) -> Vec<GalleryEffect> {
        match self.sequence().original_index(extended) {
            Some(index) => self.press_caption(index, now),
            None => Vec::new(),
        }
    }

    /// Snap (no animation) so the middle-copy slot of `index` is centered.
    pub fn center_on(&mut self, index: usize) -> Vec<GalleryEffect> {
        let mut effects = Vec::new();
        if !self.state.is_mounted() {
            return effects;
        }
        let Some(extended) = self.sequence().middle_index(index) else {
            return effects;
        };
        let Some(offset) = self
            .layout
            .as_ref()
            .and_then(|layout| layout.centering_offset(extended))
        else {
            return effects;
        };
        self.tween = None;
        self.pending_offset = None;
        self.state.raw_offset = offset;
        effects.push(GalleryEffect::ScrollTo(offset));
        self.update_parallax(offset);
        self.update_active(&mut effects);
        effects
    }

    pub fn resize(&mut self, viewport_height: f32) -> Vec<GalleryEffect> {
        let mut effects = Vec::new();
        if !self.state.is_mounted() {
            return effects;
        }
        self.apply_resize(viewport_height, &mut effects);
        effects
    }

    /// Tear down: no operation emits anything afterwards.
    pub fn unmount(&mut self) {
        if self.state.phase == ScrollPhase::Unmounted {
            return;
        }
        info!(
            active = self.state.active_index,
            had_animation = self.tween.is_some(),
            was_jumping = self.state.is_programmatic_jump(),
            "Unmounted looping gallery"
        );
        self.state.phase = ScrollPhase::Unmounted;
        self.tween = None;
        self.pending_offset = None;
        self.layout = None;
        self.parallax.clear();
    }

    /// Slots are at least tall enough that the high threshold sits
    /// [`END_MARGIN`] of a copy before the end of the content, so a
    /// downward wrap always fires before the user can see the last slot.
    fn build_layout(&self, viewport_height: f32) -> SlotLayout {
        let copies = sequence::COPIES as f32;
        let min_pitch = if self.items.is_empty() || !viewport_height.is_finite() {
            0.0
        } else {
            let span = (copies - self.tuning.wrap_high - END_MARGIN) * self.items.len() as f32;
            viewport_height / span
        };
        SlotLayout::build(
            self.sequence().len(),
            viewport_height,
            self.tuning.slot_height_ratio,
            self.tuning.slot_gap_ratio,
            min_pitch,
        )
    }

    fn coalescing(&self) -> bool {
        self.sequence().len() > self.tuning.coalesce_above_slots
    }

    fn viewport_changed(&self, viewport_height: f32) -> bool {
        if !viewport_height.is_finite() || viewport_height <= 0.0 {
            return false;
        }
        self.layout
            .as_ref()
            .map(|layout| (layout.viewport_height() - viewport_height).abs() >= 0.5)
            .unwrap_or(false)
    }

    fn apply_report(&mut self, offset: f32, now: Instant, effects: &mut Vec<GalleryEffect>) {
        let Some(layout) = self.layout.as_ref() else {
            return;
        };
        let offset = layout.clamp_offset(offset);
        self.update_parallax(offset);
        // Until the jump settles, the container may still report positions
        // from before it; the jump target stays authoritative.
        if self.state.is_programmatic_jump() {
            return;
        }
        self.state.raw_offset = offset;
        if self.tween.is_some() {
            return;
        }
        self.update_active(effects);
        self.check_wrap(now, effects);
    }

    fn apply_resize(&mut self, viewport_height: f32, effects: &mut Vec<GalleryEffect>) {
        let Some(old) = self.layout.as_ref() else {
            return;
        };
        let position = match self.tween.take() {
            Some(tween) => old.slot_position(tween.target()),
            None => old.slot_position(self.state.raw_offset),
        };
        let old_height = old.viewport_height();

        let layout = self.build_layout(viewport_height);
        let offset = layout.offset_for_slot_position(position);
        debug!(
            old_height,
            new_height = layout.viewport_height(),
            one_set_extent = layout.one_set_extent(),
            offset,
            "Rebuilt gallery layout after resize"
        );
        self.layout = Some(layout);
        self.pending_offset = None;
        self.state.raw_offset = offset;
        if let ScrollPhase::Jumping { issued_at, .. } = self.state.phase {
            self.state.phase = ScrollPhase::Jumping {
                target: offset,
                issued_at,
            };
        }
        effects.push(GalleryEffect::ScrollTo(offset));
        self.update_parallax(offset);
        if !self.state.is_programmatic_jump() {
            self.update_active(effects);
        }
    }

    fn update_active(&mut self, effects: &mut Vec<GalleryEffect>) {
        let Some(layout) = self.layout.as_ref() else {
            return;
        };
        let center = self.state.raw_offset + layout.viewport_height() * 0.5;
        let Some(nearest) = layout.nearest_to(center) else {
            return;
        };
        let candidate = nearest % self.items.len();
        self.set_active(candidate, effects);
    }

    fn set_active(&mut self, index: usize, effects: &mut Vec<GalleryEffect>) {
        if index != self.state.active_index {
            debug!(
                from = self.state.active_index,
                to = index,
                "Active gallery item changed"
            );
            self.state.active_index = index;
            effects.push(GalleryEffect::ActiveChanged(index));
        }
    }

    fn update_parallax(&mut self, offset: f32) {
        let Some(layout) = self.layout.as_ref() else {
            return;
        };
        let viewport = layout.viewport_height();
        let center = offset + viewport * 0.5;
        let strength = self.tuning.parallax_strength_px;
        self.parallax.clear();
        self.parallax.extend(
            layout
                .slots()
                .iter()
                .map(|slot| -((slot.center() - center) / viewport) * strength),
        );
    }

    fn check_wrap(&mut self, now: Instant, effects: &mut Vec<GalleryEffect>) {
        if self.state.phase != ScrollPhase::Settled {
            return;
        }
        let Some(layout) = self.layout.as_ref() else {
            return;
        };
        let one_set = layout.one_set_extent();
        if one_set <= 0.0 {
            return;
        }

        let offset = self.state.raw_offset;
        let destination = if offset < self.tuning.wrap_low * one_set {
            offset + one_set
        } else if offset > self.tuning.wrap_high * one_set {
            offset - one_set
        } else {
            return;
        };

        if destination < 0.0 || destination > layout.max_offset() {
            debug!(
                offset,
                destination,
                max_offset = layout.max_offset(),
                "Loop jump destination unreachable; skipping"
            );
            return;
        }

        debug!(from = offset, to = destination, one_set, "Loop jump");
        self.state.phase = ScrollPhase::Jumping {
            target: destination,
            issued_at: now,
        };
        self.state.raw_offset = destination;
        effects.push(GalleryEffect::ScrollTo(destination));
        self.update_parallax(destination);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f32 = 1000.0;

    fn items(ids: &[&str]) -> Vec<GalleryItem> {
        ids.iter()
            .enumerate()
            .map(|(order, id)| GalleryItem {
                id: id.to_string(),
                title: format!("Project {id}"),
                image_ref: format!("https://example.test/{id}.jpg"),
                order: order as i64,
            })
            .collect()
    }

    fn tuning() -> GalleryTuning {
        GalleryTuning {
            wrap_low: 0.5,
            wrap_high: 1.5,
            ..GalleryTuning::default()
        }
    }

    fn mounted(ids: &[&str]) -> LoopingGallery {
        let mut gallery = LoopingGallery::new(items(ids), tuning());
        gallery.mount(VIEWPORT);
        gallery
    }

    fn scroll_targets(effects: &[GalleryEffect]) -> Vec<f32> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                GalleryEffect::ScrollTo(y) => Some(*y),
                _ => None,
            })
            .collect()
    }

    fn centered_slot(gallery: &LoopingGallery) -> usize {
        let layout = gallery.layout().expect("mounted layout");
        let center = gallery.state().raw_offset + layout.viewport_height() * 0.5;
        layout.nearest_to(center).expect("nearest slot")
    }

    #[test]
    fn mount_starts_in_middle_copy() {
        let mut gallery = LoopingGallery::new(items(&["a", "b", "c"]), tuning());
        assert_eq!(gallery.phase(), ScrollPhase::Uninitialized);

        let effects = gallery.mount(VIEWPORT);

        assert_eq!(
            effects,
            vec![GalleryEffect::ScrollTo(1320.0), GalleryEffect::ActiveChanged(1)]
        );
        assert_eq!(gallery.phase(), ScrollPhase::Settled);
        assert_eq!(centered_slot(&gallery), 4);
        assert_eq!(gallery.active_index(), 1);
        assert_eq!(gallery.active_item().map(|it| it.id.as_str()), Some("b"));
    }

    #[test]
    fn mount_twice_is_ignored() {
        let mut gallery = mounted(&["a", "b", "c"]);
        assert!(gallery.mount(VIEWPORT).is_empty());
    }

    #[test]
    fn active_index_is_always_in_range_after_mount() {
        for count in 1..12 {
            let ids: Vec<String> = (0..count).map(|i| format!("p{i}")).collect();
            let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
            for viewport in [240.0, 600.0, 1000.0, 2400.0] {
                let mut gallery = LoopingGallery::new(items(&refs), tuning());
                gallery.mount(viewport);
                assert!(gallery.active_index() < count);
                assert!(gallery.active_item().is_some());
            }
        }
    }

    #[test]
    fn aligning_middle_copy_element_activates_it() {
        let mut gallery = mounted(&["a", "b", "c"]);
        let now = Instant::now();
        for k in 0..3 {
            let offset = gallery
                .layout()
                .and_then(|layout| layout.centering_offset(3 + k))
                .expect("centering offset");
            gallery.on_scroll(offset, VIEWPORT, now);
            assert_eq!(gallery.active_index(), k);
            assert_eq!(gallery.phase(), ScrollPhase::Settled);
        }
    }

    #[test]
    fn continuous_update_is_idempotent() {
        let mut gallery = mounted(&["a", "b", "c"]);
        let now = Instant::now();

        let first = gallery.on_scroll(1900.0, VIEWPORT, now);
        let state = *gallery.state();
        let second = gallery.on_scroll(1900.0, VIEWPORT, now);

        assert_eq!(first, vec![GalleryEffect::ActiveChanged(2)]);
        assert!(second.is_empty());
        assert_eq!(*gallery.state(), state);
    }

    #[test]
    fn caption_click_scenario() {
        let mut gallery = mounted(&["a", "b", "c"]);
        let start = Instant::now();

        let effects = gallery.press_caption(2, start);
        assert_eq!(effects, vec![GalleryEffect::ActiveChanged(2)]);
        assert_eq!(gallery.active_index(), 2);
        assert!(gallery.needs_frames());

        // Reports while the animation runs keep the optimistic index.
        let mid = gallery.on_scroll(1400.0, VIEWPORT, start + Duration::from_millis(100));
        assert!(mid.is_empty());
        assert_eq!(gallery.active_index(), 2);

        let done = gallery.tick(start + Duration::from_millis(600));
        assert_eq!(scroll_targets(&done), vec![1920.0]);
        assert!(!gallery.needs_frames());
        assert_eq!(gallery.active_index(), 2);
        assert_eq!(centered_slot(&gallery), 5);
        assert_eq!(gallery.phase(), ScrollPhase::Settled);
    }

    #[test]
    fn selection_frames_move_toward_target() {
        let mut gallery = mounted(&["a", "b", "c", "d", "e"]);
        let start = Instant::now();
        gallery.select_item(4, start);

        let mut previous = gallery.state().raw_offset;
        for ms in (16..600).step_by(16) {
            let effects = gallery.tick(start + Duration::from_millis(ms));
            let targets = scroll_targets(&effects);
            assert_eq!(targets.len(), 1);
            assert!(targets[0] >= previous);
            previous = targets[0];
        }
        gallery.tick(start + Duration::from_millis(700));
        assert_eq!(gallery.active_index(), 4);
        assert_eq!(centered_slot(&gallery), 9);
    }

    #[test]
    fn pressing_active_item_opens_it() {
        let mut gallery = mounted(&["a", "b", "c"]);
        let now = Instant::now();
        assert_eq!(gallery.press_caption(1, now), vec![GalleryEffect::Open(1)]);
        // Any copy of the active item opens it as well.
        assert_eq!(gallery.press_slot(7, now), vec![GalleryEffect::Open(1)]);
        assert!(!gallery.needs_frames());
    }

    #[test]
    fn pressing_inactive_slot_selects_its_item() {
        let mut gallery = mounted(&["a", "b", "c"]);
        let now = Instant::now();
        assert_eq!(
            gallery.press_slot(0, now),
            vec![GalleryEffect::ActiveChanged(0)]
        );
        gallery.tick(now + Duration::from_secs(1));
        assert_eq!(centered_slot(&gallery), 3);
    }

    #[test]
    fn downward_wrap_jumps_back_one_copy() {
        let mut gallery = mounted(&["a", "b", "c"]);
        let now = Instant::now();
        gallery.on_scroll(1920.0, VIEWPORT, now);
        assert_eq!(gallery.active_index(), 2);

        let effects = gallery.on_scroll(2000.0, VIEWPORT, now);

        assert_eq!(effects, vec![GalleryEffect::ScrollTo(680.0)]);
        assert!(gallery.state().is_programmatic_jump());
        assert_eq!(gallery.active_index(), 2);
        assert_eq!(centered_slot(&gallery) % 3, 2);
    }

    #[test]
    fn upward_wrap_jumps_forward_one_copy() {
        let mut gallery = mounted(&["a", "b", "c"]);
        let now = Instant::now();

        let effects = gallery.on_scroll(600.0, VIEWPORT, now);

        assert_eq!(
            effects,
            vec![GalleryEffect::ActiveChanged(2), GalleryEffect::ScrollTo(1920.0)]
        );
        gallery.tick(now + Duration::from_millis(50));
        assert_eq!(gallery.phase(), ScrollPhase::Settled);
        assert_eq!(gallery.active_index(), 2);
    }

    #[test]
    fn reports_during_jump_never_double_jump() {
        let mut gallery = mounted(&["a", "b", "c"]);
        let start = Instant::now();
        gallery.on_scroll(2000.0, VIEWPORT, start);

        // A stale report past the threshold arrives before the jump settles.
        let stale = gallery.on_scroll(2100.0, VIEWPORT, start + Duration::from_millis(5));
        assert!(stale.is_empty());
        let confirm = gallery.on_scroll(680.0, VIEWPORT, start + Duration::from_millis(16));
        assert!(confirm.is_empty());

        let early = gallery.tick(start + Duration::from_millis(30));
        assert!(early.is_empty());
        assert!(gallery.state().is_programmatic_jump());

        let settled = gallery.tick(start + Duration::from_millis(50));
        assert!(settled.is_empty());
        assert_eq!(gallery.phase(), ScrollPhase::Settled);
        assert_eq!(gallery.active_index(), 2);
    }

    #[test]
    fn late_report_during_jump_keeps_active_item() {
        let mut gallery = mounted(&["a", "b", "c"]);
        let start = Instant::now();
        gallery.on_scroll(1920.0, VIEWPORT, start);
        assert_eq!(
            gallery.on_scroll(2000.0, VIEWPORT, start),
            vec![GalleryEffect::ScrollTo(680.0)]
        );

        // The container has not applied the jump yet.
        let late = gallery.on_scroll(2200.0, VIEWPORT, start + Duration::from_millis(5));
        assert!(late.is_empty());
        assert_eq!(gallery.state().raw_offset, 680.0);

        let settled = gallery.tick(start + Duration::from_millis(50));
        assert!(settled.is_empty());
        assert_eq!(gallery.phase(), ScrollPhase::Settled);
        assert_eq!(gallery.state().raw_offset, 680.0);
        assert_eq!(gallery.active_index(), 2);
    }

    #[test]
    fn short_slots_still_wrap_before_the_end() {
        let mut gallery = LoopingGallery::new(
            items(&["a", "b", "c", "d"]),
            GalleryTuning {
                slot_height_ratio: 0.1,
                ..tuning()
            },
        );
        gallery.mount(VIEWPORT);
        let layout = gallery.layout().cloned().expect("layout");
        let one_set = layout.one_set_extent();
        assert_eq!(one_set, 800.0);
        assert!(1.5 * one_set < layout.max_offset());

        let now = Instant::now();
        let mut position = gallery.state().raw_offset;
        let mut jump = None;
        while jump.is_none() && position < layout.max_offset() {
            position += 20.0;
            jump = scroll_targets(&gallery.on_scroll(position, VIEWPORT, now))
                .first()
                .copied();
        }
        assert_eq!(position, 1220.0);
        assert_eq!(jump, Some(420.0));
    }

    #[test]
    fn selected_caption_stays_active_and_opens() {
        let mut gallery = LoopingGallery::new(
            items(&["a", "b"]),
            GalleryTuning {
                slot_height_ratio: 0.1,
                ..tuning()
            },
        );
        gallery.mount(VIEWPORT);
        assert_eq!(gallery.active_index(), 1);
        let start = Instant::now();

        assert_eq!(
            gallery.select_item(0, start),
            vec![GalleryEffect::ActiveChanged(0)]
        );
        let done = gallery.tick(start + Duration::from_secs(1));
        assert_eq!(done, vec![GalleryEffect::ScrollTo(500.0)]);
        assert_eq!(gallery.active_index(), 0);
        assert_eq!(
            gallery.press_caption(0, start + Duration::from_secs(1)),
            vec![GalleryEffect::Open(0)]
        );
    }

    #[test]
    fn endless_downward_scroll_never_reaches_the_end() {
        let mut gallery = mounted(&["a", "b", "c", "d"]);
        let layout = gallery.layout().cloned().expect("layout");
        let one_set = layout.one_set_extent();
        let mut now = Instant::now();
        let mut position = gallery.state().raw_offset;
        let mut jumps = 0;

        for _ in 0..600 {
            position += 37.0;
            now += Duration::from_millis(16);
            let effects = gallery.on_scroll(position, VIEWPORT, now);
            let targets = scroll_targets(&effects);
            assert!(targets.len() <= 1, "at most one jump per report");
            if let Some(target) = targets.first() {
                jumps += 1;
                assert!((position - target - one_set).abs() < 0.01);
                let seq = gallery.sequence();
                let before = layout
                    .nearest_to(position + VIEWPORT * 0.5)
                    .expect("slot before jump");
                let after = centered_slot(&gallery);
                assert_eq!(
                    seq.original_index(before),
                    seq.original_index(after),
                    "jump must not change the rendered content"
                );
                position = *target;
            }
            now += Duration::from_millis(60);
            gallery.tick(now);
            assert!(position < layout.max_offset(), "exposed the end of the list");
        }

        assert!(jumps >= 10, "expected repeated wraps, got {jumps}");
    }

    #[test]
    fn empty_gallery_is_inert() {
        let mut gallery = LoopingGallery::new(Vec::new(), tuning());
        let now = Instant::now();
        assert!(gallery.mount(VIEWPORT).is_empty());
        assert!(gallery.on_scroll(100.0, VIEWPORT, now).is_empty());
        assert!(gallery.tick(now).is_empty());
        assert!(gallery.press_caption(0, now).is_empty());
        assert!(gallery.select_item(0, now).is_empty());
        assert!(!gallery.is_mounted());
        assert!(!gallery.needs_frames());
        assert_eq!(gallery.phase(), ScrollPhase::Uninitialized);
    }

    #[test]
    fn single_item_degenerates_harmlessly() {
        let mut gallery = LoopingGallery::new(items(&["solo"]), tuning());
        let effects = gallery.mount(VIEWPORT);
        // The lone slot grows to 800px so one copy can still wrap.
        assert_eq!(effects, vec![GalleryEffect::ScrollTo(800.0)]);

        let now = Instant::now();
        assert_eq!(
            gallery.on_scroll(1300.0, VIEWPORT, now),
            vec![GalleryEffect::ScrollTo(500.0)]
        );
        assert!(gallery.tick(now + Duration::from_millis(50)).is_empty());
        assert_eq!(
            gallery.on_scroll(100.0, VIEWPORT, now + Duration::from_millis(100)),
            vec![GalleryEffect::ScrollTo(900.0)]
        );
        assert_eq!(gallery.active_index(), 0);
    }

    #[test]
    fn unmount_cancels_animation_and_pending_jump() {
        let mut gallery = mounted(&["a", "b", "c"]);
        let start = Instant::now();
        gallery.on_scroll(2000.0, VIEWPORT, start);
        gallery.select_item(0, start);
        assert!(gallery.needs_frames());

        gallery.unmount();
        let state = *gallery.state();

        assert!(!gallery.needs_frames());
        assert!(gallery.tick(start + Duration::from_secs(2)).is_empty());
        assert!(gallery.on_scroll(100.0, VIEWPORT, start).is_empty());
        assert!(gallery.resize(500.0).is_empty());
        assert!(gallery.press_caption(1, start).is_empty());
        assert!(gallery.center_on(1).is_empty());
        assert!(gallery.mount(VIEWPORT).is_empty());
        assert_eq!(*gallery.state(), state);
        assert_eq!(gallery.phase(), ScrollPhase::Unmounted);
    }

    #[test]
    fn resize_rebuilds_layout_before_next_wrap() {
        let mut gallery = mounted(&["a", "b", "c"]);
        let now = Instant::now();

        let effects = gallery.resize(800.0);

        let layout = gallery.layout().expect("layout");
        assert_eq!(layout.one_set_extent(), 1056.0);
        assert_eq!(scroll_targets(&effects).len(), 1);
        assert_eq!(centered_slot(&gallery), 4);
        assert_eq!(gallery.active_index(), 1);

        // 1600 sits above 1.5 * 1056 but below the stale 1.5 * 1320.
        let effects = gallery.on_scroll(1600.0, 800.0, now);
        assert_eq!(scroll_targets(&effects), vec![544.0]);
    }

    #[test]
    fn scroll_report_with_new_viewport_triggers_resize() {
        let mut gallery = mounted(&["a", "b", "c"]);
        let effects = gallery.on_scroll(1320.0, 800.0, Instant::now());
        assert_eq!(scroll_targets(&effects).len(), 1);
        assert_eq!(gallery.layout().map(|l| l.viewport_height()), Some(800.0));
        assert_eq!(gallery.phase(), ScrollPhase::Settled);
    }

    #[test]
    fn resize_during_selection_snaps_to_its_target() {
        let mut gallery = mounted(&["a", "b", "c"]);
        gallery.select_item(2, Instant::now());
        gallery.resize(700.0);
        assert!(!gallery.needs_frames());
        assert_eq!(centered_slot(&gallery), 5);
        assert_eq!(gallery.active_index(), 2);
    }

    #[test]
    fn large_lists_coalesce_reports_until_next_frame() {
        let mut gallery = LoopingGallery::new(
            items(&["a", "b", "c"]),
            GalleryTuning {
                coalesce_above_slots: 4,
                ..tuning()
            },
        );
        gallery.mount(VIEWPORT);
        let now = Instant::now();

        assert!(gallery.on_scroll(1700.0, VIEWPORT, now).is_empty());
        assert!(gallery.on_scroll(1920.0, VIEWPORT, now).is_empty());
        assert!(gallery.needs_frames());
        assert_eq!(gallery.active_index(), 1);

        let effects = gallery.tick(now + Duration::from_millis(16));
        assert_eq!(effects, vec![GalleryEffect::ActiveChanged(2)]);
        assert!(!gallery.needs_frames());
    }

    #[test]
    fn center_on_snaps_without_animation() {
        let mut gallery = mounted(&["a", "b", "c", "d"]);
        let effects = gallery.center_on(3);
        assert_eq!(scroll_targets(&effects).len(), 1);
        assert!(effects.contains(&GalleryEffect::ActiveChanged(3)));
        assert!(!gallery.needs_frames());
        assert_eq!(centered_slot(&gallery), 7);
    }

    #[test]
    fn parallax_follows_distance_from_center() {
        let gallery = mounted(&["a", "b", "c"]);
        // Visible center 1820; slot 4 centered at 1980 sits 0.16 viewports below.
        assert!((gallery.parallax_offset(4) - (-6.4)).abs() < 1e-3);
        assert!(gallery.parallax_offset(3) > 0.0);
        assert_eq!(gallery.parallax_offset(99), 0.0);
    }

    #[test]
    fn invalid_thresholds_fall_back_to_defaults() {
        assert!(GalleryTuning::is_valid_wrap(0.4, 1.6));
        assert!(GalleryTuning::is_valid_wrap(0.5, 1.5));
        assert!(!GalleryTuning::is_valid_wrap(0.6, 1.4));
        assert!(!GalleryTuning::is_valid_wrap(0.0, 1.5));
        assert!(!GalleryTuning::is_valid_wrap(0.5, 2.0));

        let gallery = LoopingGallery::new(
            items(&["a"]),
            GalleryTuning {
                wrap_low: 0.9,
                wrap_high: 1.1,
                ..GalleryTuning::default()
            },
        );
        assert_eq!(gallery.tuning.wrap_low, GalleryTuning::default().wrap_low);
        assert_eq!(gallery.tuning.wrap_high, GalleryTuning::default().wrap_high);
    }
}
