use std::time::Duration;

use leptos::prelude::*;

use super::preferences::Preferences;
use crate::{
    config::SITE_CONFIG,
    content,
    splash::{SplashPhase, SplashTimeline},
};

#[component]
pub fn SplashScreen(on_complete: Callback<()>) -> impl IntoView {
    let timeline = SplashTimeline::new(SITE_CONFIG.splash);
    let (elapsed, set_elapsed) = signal(0u32);
    let frame = Memo::new(move |_| timeline.frame_at(elapsed.get()));

    Effect::new(move |_| {
        let tick = timeline.tick_ms();
        match set_interval_with_handle(
            move || set_elapsed.update(|ms| *ms += tick),
            Duration::from_millis(tick.into()),
        ) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => {
                log::warn!("couldn't start splash timer: {e:?}");
                on_complete.run(());
            }
        }
    });
    Effect::new(move |_| {
        if frame.get().phase == SplashPhase::Done {
            on_complete.run(());
        }
    });

    let language = expect_context::<Preferences>().language;
    let text = move || content::translations(language.get()).ok();

    view! {
        <div class=move || {
            let fade = if frame.get().phase == SplashPhase::Loading {
                ""
            } else {
                "opacity-0 pointer-events-none"
            };
            format!(
                "fixed inset-0 z-[9999] flex items-center justify-center bg-gradient-to-br from-blue-600 via-purple-600 to-pink-600 transition-opacity duration-300 {fade}",
            )
        }>
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute top-1/4 left-1/4 w-64 h-64 bg-white/10 rounded-full blur-3xl animate-float"></div>
                <div
                    class="absolute bottom-1/4 right-1/4 w-80 h-80 bg-white/5 rounded-full blur-3xl animate-float"
                    style="animation-delay: 1s"
                ></div>
            </div>
            <div class="relative z-10 text-center">
                <div class="w-32 h-32 mx-auto mb-8 rounded-full bg-white/20 p-1 animate-scaleIn">
                    <div class="w-full h-full rounded-full bg-white/90 flex items-center justify-center text-4xl font-bold text-blue-600">
                        {move || text().and_then(|t| t.name.chars().next()).map(String::from)}
                    </div>
                </div>
                <h1 class="text-4xl md:text-5xl font-bold text-white mb-8 animate-fadeInUp">
                    {move || text().map(|t| t.splash.title.clone())}
                </h1>
                <div class="w-64 mx-auto">
                    <div class="h-1 bg-white/20 rounded-full overflow-hidden">
                        <div
                            class="h-full bg-gradient-to-r from-white to-yellow-300 rounded-full transition-all duration-100 ease-out"
                            style=move || format!("width: {}%", frame.get().progress)
                        ></div>
                    </div>
                    <p class="text-white/80 text-sm mt-3 font-medium">
                        {move || text().map(|t| t.splash.loading.clone())} " "
                        {move || frame.get().progress} "%"
                    </p>
                </div>
            </div>
        </div>
    }
}
