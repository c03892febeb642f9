//! Geometry of the rendered slots, keyed by extended-sequence position.
//!
//! The GUI renders every slot with the same pitch (image height plus the
//! vertical gap), so positions are derived rather than measured. The
//! collection is rebuilt whenever the viewport height or the item list
//! changes; it is never patched in place.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotBounds {
    pub top: f32,
    pub height: f32,
}

impl SlotBounds {
    pub fn center(&self) -> f32 {
        self.top + self.height * 0.5
    }
}

#[derive(Debug, Clone)]
pub struct SlotLayout {
    viewport_height: f32,
    image_height: f32,
    gap: f32,
    slots: Vec<SlotBounds>,
}

impl SlotLayout {
    pub fn build(
        slot_count: usize,
        viewport_height: f32,
        slot_height_ratio: f32,
        slot_gap_ratio: f32,
        min_pitch: f32,
    ) -> Self {
        let viewport_height = if viewport_height.is_finite() {
            viewport_height.max(1.0)
        } else {
            1.0
        };
        let gap = (viewport_height * slot_gap_ratio).max(0.0);
        // Short slots grow until the list is long enough to loop.
        let image_height = (viewport_height * slot_height_ratio)
            .max(min_pitch - gap)
            .max(1.0);
        let pitch = image_height + gap;
        let slots = (0..slot_count)
            .map(|idx| SlotBounds {
                top: idx as f32 * pitch,
                height: pitch,
            })
            .collect();
        Self {
            viewport_height,
            image_height,
            gap,
            slots,
        }
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Height of the image inside a slot.
    pub fn image_height(&self) -> f32 {
        self.image_height
    }

    pub fn gap(&self) -> f32 {
        self.gap
    }

    pub fn pitch(&self) -> f32 {
        self.image_height + self.gap
    }

    pub fn slot(&self, extended: usize) -> Option<SlotBounds> {
        self.slots.get(extended).copied()
    }

    pub fn slots(&self) -> &[SlotBounds] {
        &self.slots
    }

    pub fn total_extent(&self) -> f32 {
        self.slots
            .last()
            .map(|slot| slot.top + slot.height)
            .unwrap_or(0.0)
    }

    /// Extent of a single copy of the item list.
    pub fn one_set_extent(&self) -> f32 {
        self.total_extent() / super::sequence::COPIES as f32
    }

    pub fn max_offset(&self) -> f32 {
        (self.total_extent() - self.viewport_height).max(0.0)
    }

    pub fn clamp_offset(&self, offset: f32) -> f32 {
        if !offset.is_finite() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_offset())
    }

    /// Offset that puts the center of `extended` on the visible center.
    pub fn centering_offset(&self, extended: usize) -> Option<f32> {
        let slot = self.slot(extended)?;
        Some(self.clamp_offset(slot.center() - self.viewport_height * 0.5))
    }

    /// Slot whose center is closest to `center`; ties keep the lowest index.
    pub fn nearest_to(&self, center: f32) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (idx, slot) in self.slots.iter().enumerate() {
            let distance = (slot.center() - center).abs();
            match best {
                Some((_, best_distance)) if best_distance <= distance => {}
                _ => best = Some((idx, distance)),
            }
        }
        best.map(|(idx, _)| idx)
    }

    /// Fractional slot position of the visible center, used to carry the
    /// view across a resize.
    pub fn slot_position(&self, offset: f32) -> f32 {
        let pitch = self.pitch().max(f32::EPSILON);
        (offset + self.viewport_height * 0.5) / pitch
    }

    pub fn offset_for_slot_position(&self, position: f32) -> f32 {
        self.clamp_offset(position * self.pitch() - self.viewport_height * 0.5)
    }
}
