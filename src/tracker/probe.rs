use super::region::{Region, ScrollState, Section};

/// Read-only view of the scroll position and section geometry.
pub trait ViewportProbe {
    fn scroll_state(&self) -> ScrollState;

    /// Geometry of the section's element, or `None` when it isn't mounted.
    fn region(&self, section: Section) -> Option<Region>;

    /// Regions for `sections` in the given order, skipping unmounted ones.
    fn regions(&self, sections: &[Section]) -> Vec<Region> {
        sections
            .iter()
            .filter_map(|section| self.region(*section))
            .collect()
    }
}

#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct FixedViewport {
    pub scroll_y: f64,
    pub mounted: Vec<Region>,
}

#[cfg(test)]
impl ViewportProbe for FixedViewport {
    fn scroll_state(&self) -> ScrollState {
        ScrollState::new(self.scroll_y)
    }

    fn region(&self, section: Section) -> Option<Region> {
        self.mounted.iter().find(|r| r.id == section).copied()
    }
}
