use std::sync::{Arc, Mutex};

use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::tracker::RevealRegistry;

pub type SharedRevealRegistry = StoredValue<Arc<Mutex<RevealRegistry>>>;

/// Fades its children in the first time enough of them scrolls into view.
/// The observer is stopped once revealed, or when the wrapper unmounts.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional, into)] class: String,
    #[prop(optional)] delay_ms: u32,
) -> impl IntoView {
    let registry = expect_context::<SharedRevealRegistry>();
    let (key, threshold) = registry.with_value(|r| {
        let mut r = r.lock().expect("should be able to lock reveal registry");
        (r.register(), r.threshold())
    });
    let (revealed, set_revealed) = signal(false);
    let target = NodeRef::<html::Div>::new();

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let ratio = entries
                .iter()
                .map(|e| e.intersection_ratio())
                .fold(0.0, f64::max);
            let flipped = registry
                .try_with_value(|r| {
                    r.lock()
                        .expect("should be able to lock reveal registry")
                        .observe(key, ratio)
                })
                .unwrap_or(false);
            if flipped {
                set_revealed.set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    let stop_when_revealed = stop.clone();
    Effect::new(move |_| {
        if revealed.get() {
            stop_when_revealed();
        }
    });
    on_cleanup(move || {
        stop();
        registry.try_with_value(|r| {
            r.lock()
                .expect("should be able to lock reveal registry")
                .unregister(key)
        });
    });

    let classes = move || {
        let state = if revealed.get() { "revealed" } else { "" };
        format!("reveal {state} {class}")
    };
    let style = (delay_ms > 0).then(|| format!("transition-delay: {delay_ms}ms"));

    view! {
        <div node_ref=target class=classes style=style>
            {children()}
        </div>
    }
}
