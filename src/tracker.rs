//! Active-section tracking and one-shot reveal bookkeeping.
//!
//! Everything in here is plain data and arithmetic; the browser glue that
//! feeds it lives in `app::scroll` and `app::reveal`.

mod latch;
mod nav_state;
mod probe;
mod region;
mod resolver;

pub use latch::{RevealKey, RevealRegistry, VisibilityLatch};
pub use nav_state::{MenuState, NavigationState};
pub use probe::ViewportProbe;
pub use region::{Region, ScrollState, Section, UnknownSection};
pub use resolver::SectionResolver;

#[cfg(test)]
pub(crate) use probe::FixedViewport;
