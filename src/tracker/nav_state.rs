use crate::config::TrackerConfig;

use super::region::{Region, ScrollState, Section};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

/// Page-wide navigation state. Every mutation goes through a method; the
/// setters report whether anything actually changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    active: Option<Section>,
    menu: MenuState,
    scrolled: bool,
}

impl NavigationState {
    pub fn active_section(&self) -> Option<Section> {
        self.active
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == Some(section)
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    /// Past the "scrolled" threshold; the nav bar switches to its solid style.
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn set_active_section(&mut self, section: Section) -> bool {
        if self.active == Some(section) {
            return false;
        }
        log::debug!("active section {:?} -> {section}", self.active);
        self.active = Some(section);
        true
    }

    pub fn set_menu_open(&mut self, open: bool) -> bool {
        let menu = if open { MenuState::Open } else { MenuState::Closed };
        if self.menu == menu {
            return false;
        }
        self.menu = menu;
        true
    }

    pub fn toggle_menu(&mut self) {
        self.menu = self.menu.toggled();
    }

    pub fn set_scrolled(&mut self, scrolled: bool) -> bool {
        if self.scrolled == scrolled {
            return false;
        }
        self.scrolled = scrolled;
        true
    }

    /// Run the resolver for a fresh probe and store the result.
    pub fn apply_scroll(
        &mut self,
        config: &TrackerConfig,
        scroll: ScrollState,
        regions: &[Region],
    ) -> bool {
        let resolver = config.resolver();
        let mut changed = self.set_scrolled(scroll.scroll_y > config.scrolled_threshold);
        if let Some(section) = resolver.resolve(scroll, regions, self.active) {
            changed |= self.set_active_section(section);
        }
        changed
    }

    /// Closes the menu and returns the scroll position that puts `target` just
    /// below the nav bar, or `None` if the section isn't mounted.
    pub fn scroll_to_section(
        &mut self,
        target: Section,
        regions: &[Region],
        nav_bar_height: f64,
    ) -> Option<f64> {
        self.set_menu_open(false);
        regions
            .iter()
            .find(|r| r.id == target)
            .map(|r| (r.top_offset - nav_bar_height).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::{FixedViewport, ViewportProbe};

    fn page() -> Vec<Region> {
        vec![
            Region::new(Section::Home, 0.0, 800.0),
            Region::new(Section::About, 800.0, 600.0),
            Region::new(Section::Experience, 1400.0, 600.0),
        ]
    }

    #[test]
    fn test_menu_toggle() {
        let mut nav = NavigationState::default();
        assert_eq!(nav.menu(), MenuState::Closed);
        nav.toggle_menu();
        assert!(nav.is_menu_open());
        nav.toggle_menu();
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_set_menu_open_reports_changes() {
        let mut nav = NavigationState::default();
        assert!(nav.set_menu_open(true));
        assert!(!nav.set_menu_open(true));
        assert!(nav.set_menu_open(false));
    }

    #[test]
    fn test_scroll_to_section_closes_menu() {
        let regions = page();
        for open in [false, true] {
            let mut nav = NavigationState::default();
            nav.set_menu_open(open);
            let top = nav.scroll_to_section(Section::About, &regions, 80.0);
            assert_eq!(top, Some(720.0));
            assert_eq!(nav.menu(), MenuState::Closed);
        }
    }

    #[test]
    fn test_scroll_to_missing_section_still_closes_menu() {
        let mut nav = NavigationState::default();
        nav.toggle_menu();
        assert_eq!(nav.scroll_to_section(Section::Contact, &page(), 80.0), None);
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_scroll_to_first_section_clamps_at_zero() {
        let mut nav = NavigationState::default();
        assert_eq!(nav.scroll_to_section(Section::Home, &page(), 80.0), Some(0.0));
    }

    #[test]
    fn test_apply_scroll_from_probe() {
        let config = TrackerConfig::default();
        let mut viewport = FixedViewport {
            scroll_y: 0.0,
            mounted: page(),
        };
        let mut nav = NavigationState::default();

        let regions = viewport.regions(&Section::ALL);
        assert!(nav.apply_scroll(&config, viewport.scroll_state(), &regions));
        assert!(nav.is_active(Section::Home));
        assert!(!nav.is_scrolled());

        viewport.scroll_y = 750.0;
        assert!(nav.apply_scroll(&config, viewport.scroll_state(), &regions));
        assert_eq!(nav.active_section(), Some(Section::About));
        assert!(nav.is_scrolled());

        // the same event delivered twice changes nothing
        let before = nav.clone();
        assert!(!nav.apply_scroll(&config, viewport.scroll_state(), &regions));
        assert_eq!(nav, before);
    }

    #[test]
    fn test_scrolled_threshold_is_exclusive() {
        let config = TrackerConfig::default();
        let mut nav = NavigationState::default();

        nav.apply_scroll(&config, ScrollState::new(50.0), &page());
        assert!(!nav.is_scrolled());

        nav.apply_scroll(&config, ScrollState::new(50.5), &page());
        assert!(nav.is_scrolled());

        nav.apply_scroll(&config, ScrollState::new(0.0), &page());
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn test_scroll_events_leave_menu_alone() {
        let config = TrackerConfig::default();
        let mut nav = NavigationState::default();
        nav.toggle_menu();
        nav.apply_scroll(&config, ScrollState::new(1500.0), &page());
        assert!(nav.is_menu_open());
        assert!(nav.is_active(Section::Experience));
    }
}
