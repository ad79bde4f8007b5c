use std::rc::Rc;

use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::core::{config::StatsSource, storage};
use ui::views::Stats;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code; AppNavbar updates it on locale selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    // The browser has no filesystem or environment, so this is the bundled sample.
    let stats = use_hook(|| {
        let source = StatsSource::resolve(None);
        tracing::info!(%source, "loading statistics");
        storage::load_or_log(&source).map(Rc::new)
    });

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        // Keyed by language so memoized children pick up new strings.
        div {
            key: "{lang_code()}",
            AppNavbar {}
            Stats { stats: stats.clone() }
        }
    }
}
