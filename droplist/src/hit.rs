use crate::geometry::Rect;

/// Clickable regions recorded while rendering.
///
/// Regions are kept in paint order, so a region recorded later sits on top of
/// the ones before it and wins the hit test.
#[derive(Debug, Clone)]
pub struct HitMap<T> {
    regions: Vec<(Rect, T)>,
}

impl<T> Default for HitMap<T> {
    fn default() -> Self {
        Self {
            regions: Vec::new(),
        }
    }
}

impl<T: Copy> HitMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, rect: Rect, target: T) {
        if !rect.is_empty() {
            self.regions.push((rect, target));
        }
    }

    /// Topmost target containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<T> {
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, target)| *target)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
