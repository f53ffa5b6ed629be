use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::{
    config::TrackerConfig,
    tracker::{NavigationState, Region, ScrollState, Section, ViewportProbe},
};

/// Reads scroll position and section geometry straight from the DOM.
pub struct DomProbe;

impl ViewportProbe for DomProbe {
    fn scroll_state(&self) -> ScrollState {
        ScrollState::new(window().scroll_y().unwrap_or_default())
    }

    fn region(&self, section: Section) -> Option<Region> {
        let el = document()
            .get_element_by_id(section.id())?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(Region::new(
            section,
            f64::from(el.offset_top()),
            f64::from(el.offset_height()),
        ))
    }
}

/// Keeps the navigation state in sync with the viewport for as long as the
/// calling component is mounted.
pub fn use_scroll_tracking(nav: RwSignal<NavigationState>, config: TrackerConfig) {
    let update = move || {
        let probe = DomProbe;
        let scroll = probe.scroll_state();
        let regions = probe.regions(&Section::ALL);
        nav.maybe_update(|n| n.apply_scroll(&config, scroll, &regions));
    };

    // effects only run in the browser, after the sections are mounted
    Effect::new(move |_| update());

    let on_scroll = window_event_listener(ev::scroll, move |_| update());
    let on_resize = window_event_listener(ev::resize, move |_| update());
    on_cleanup(move || {
        on_scroll.remove();
        on_resize.remove();
    });
}

/// Smooth-scroll so `section` starts just below the nav bar. Always closes the
/// mobile menu.
pub fn scroll_to_section(nav: RwSignal<NavigationState>, section: Section, nav_bar_height: f64) {
    let regions = DomProbe.regions(&[section]);
    let mut target = None;
    nav.update(|n| target = n.scroll_to_section(section, &regions, nav_bar_height));

    match target {
        Some(top) => {
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window().scroll_to_with_scroll_to_options(&options);
        }
        None => log::debug!("section {section} isn't mounted"),
    }
}
