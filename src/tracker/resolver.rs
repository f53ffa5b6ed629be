use super::region::{Region, ScrollState, Section};

pub const DEFAULT_ACTIVATION_OFFSET: f64 = 100.0;

/// Picks the section sitting under the activation line
/// (`scroll_y + offset`, roughly the bottom of the nav bar).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionResolver {
    offset: f64,
}

impl Default for SectionResolver {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVATION_OFFSET)
    }
}

impl SectionResolver {
    pub fn new(offset: f64) -> Self {
        Self { offset }
    }

    pub fn activation_line(&self, scroll: ScrollState) -> f64 {
        scroll.scroll_y + self.offset
    }

    /// `regions` must be in document order. The first region containing the
    /// activation line wins. With no match the previous section is kept, except
    /// at the very top (first region) and past the end of every region (last
    /// region).
    pub fn resolve(
        &self,
        scroll: ScrollState,
        regions: &[Region],
        previous: Option<Section>,
    ) -> Option<Section> {
        let line = self.activation_line(scroll);
        if let Some(region) = regions.iter().find(|r| r.contains(line)) {
            return Some(region.id);
        }

        let (Some(first), Some(last)) = (regions.first(), regions.last()) else {
            return previous;
        };
        if scroll.scroll_y <= 0.0 {
            return Some(first.id);
        }
        let page_end = regions.iter().map(Region::end).fold(f64::MIN, f64::max);
        if line >= page_end {
            return Some(last.id);
        }
        previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<Region> {
        vec![
            Region::new(Section::Home, 0.0, 800.0),
            Region::new(Section::About, 800.0, 600.0),
            Region::new(Section::Experience, 1400.0, 600.0),
        ]
    }

    fn at(y: f64) -> ScrollState {
        ScrollState::new(y)
    }

    #[test]
    fn test_scroll_walkthrough() {
        let resolver = SectionResolver::default();
        let regions = page();

        let active = resolver.resolve(at(0.0), &regions, None);
        assert_eq!(active, Some(Section::Home));

        // activation line 850 is inside about
        let active = resolver.resolve(at(750.0), &regions, active);
        assert_eq!(active, Some(Section::About));

        let active = resolver.resolve(at(2000.0), &regions, active);
        assert_eq!(active, Some(Section::Experience));
    }

    #[test]
    fn test_top_of_page_selects_first_region() {
        let resolver = SectionResolver::default();
        // hero pushed below the activation line by padding
        let regions = vec![
            Region::new(Section::Home, 180.0, 700.0),
            Region::new(Section::About, 880.0, 600.0),
        ];
        assert_eq!(
            resolver.resolve(at(0.0), &regions, Some(Section::About)),
            Some(Section::Home)
        );
    }

    #[test]
    fn test_bottom_of_page_without_history() {
        let resolver = SectionResolver::default();
        assert_eq!(
            resolver.resolve(at(5000.0), &page(), None),
            Some(Section::Experience)
        );
    }

    #[test]
    fn test_no_match_keeps_previous() {
        let resolver = SectionResolver::default();
        // a collapsed about section and a gap before experience
        let regions = vec![
            Region::new(Section::About, 800.0, 0.0),
            Region::new(Section::Experience, 800.0, 600.0),
        ];
        assert_eq!(
            resolver.resolve(at(50.0), &regions, Some(Section::Home)),
            Some(Section::Home)
        );
        assert_eq!(resolver.resolve(at(50.0), &regions, None), None);
    }

    #[test]
    fn test_zero_height_region_never_wins() {
        let resolver = SectionResolver::default();
        let regions = vec![
            Region::new(Section::Home, 0.0, 800.0),
            Region::new(Section::About, 800.0, 0.0),
            Region::new(Section::Experience, 800.0, 600.0),
        ];
        assert_eq!(
            resolver.resolve(at(700.0), &regions, Some(Section::Home)),
            Some(Section::Experience)
        );
    }

    #[test]
    fn test_overlap_prefers_document_order() {
        let resolver = SectionResolver::default();
        let regions = vec![
            Region::new(Section::Projects, 1000.0, 400.0),
            Region::new(Section::Contact, 1100.0, 2000.0),
        ];
        assert_eq!(
            resolver.resolve(at(1100.0), &regions, Some(Section::Contact)),
            Some(Section::Projects)
        );
    }

    #[test]
    fn test_stable_within_region() {
        let resolver = SectionResolver::default();
        let regions = page();
        // about spans activation lines 800..1400, i.e. scroll 700..1300
        let mut y = 700.0;
        while y < 1300.0 {
            assert_eq!(
                resolver.resolve(at(y), &regions, Some(Section::Home)),
                Some(Section::About),
                "scroll_y = {y}"
            );
            y += 25.0;
        }
    }

    #[test]
    fn test_monotonic_scroll_never_jumps_back() {
        let resolver = SectionResolver::default();
        let regions = vec![
            Region::new(Section::Home, 0.0, 900.0),
            Region::new(Section::About, 950.0, 500.0),
            Region::new(Section::Experience, 1450.0, 1200.0),
            Region::new(Section::Projects, 2700.0, 900.0),
            Region::new(Section::Contact, 3600.0, 700.0),
        ];
        let mut active = None;
        let mut y = 0.0;
        while y <= 5000.0 {
            let next = resolver.resolve(at(y), &regions, active);
            assert!(next >= active, "jumped back at scroll_y = {y}");
            active = next;
            y += 10.0;
        }
        assert_eq!(active, Some(Section::Contact));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let resolver = SectionResolver::new(50.0);
        let regions = page();
        let first = resolver.resolve(at(780.0), &regions, Some(Section::Home));
        let second = resolver.resolve(at(780.0), &regions, first);
        assert_eq!(first, Some(Section::About));
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_page_keeps_previous() {
        let resolver = SectionResolver::default();
        assert_eq!(
            resolver.resolve(at(0.0), &[], Some(Section::Projects)),
            Some(Section::Projects)
        );
    }
}
