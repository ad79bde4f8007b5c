use std::rc::Rc;

use dioxus::prelude::*;

use crate::stats::{DetailModel, Selection, StatsDetail, StatsMap, StatsTree, TreeModel};

/// Stats page: navigation tree on the left, detail panel on the right.
/// Without a map only the "no data" notice is shown.
#[component]
pub fn Stats(stats: Option<Rc<StatsMap>>) -> Element {
    // Subscribe to global language code (if provided) so this view re-renders
    // when the locale changes in the navbar.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-stats",
            match stats {
                Some(stats) => rsx! { StatsBrowser { stats } },
                None => rsx! {
                    p { class: "text-center text-muted", {crate::t!("stats-no-data")} }
                },
            }
        }
    }
}

#[component]
fn StatsBrowser(stats: Rc<StatsMap>) -> Element {
    let mut selection = use_signal(|| Selection::new(stats.clone()));

    // A different map instance restarts on the overview.
    use_effect(use_reactive!(|stats| {
        if !selection.peek().shares_stats(&stats) {
            selection.set(Selection::new(stats));
        }
    }));

    let (tree, detail) = {
        let current = selection.read();
        (
            TreeModel::build(&current),
            DetailModel::from_selection(&current),
        )
    };

    rsx! {
        section { class: "stats-viewer",
            StatsTree {
                model: tree,
                on_select: move |id: String| selection.write().handle_node_click(&id),
            }
            StatsDetail { model: detail }
        }
    }
}
