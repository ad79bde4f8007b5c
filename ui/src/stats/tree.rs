use dioxus::prelude::*;

use crate::t;

use super::model::TOTALS_KEY;
use super::node::NodeId;
use super::selection::Selection;

/// Render-ready navigation tree: overview entry, then one group per date in
/// map order, each holding its device leaves in record order.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeModel {
    pub overview_active: bool,
    pub groups: Vec<TreeGroup>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeGroup {
    pub date: String,
    pub active: bool,
    pub leaves: Vec<TreeLeaf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeLeaf {
    pub id: NodeId,
    pub device: String,
    pub active: bool,
}

impl TreeModel {
    pub fn build(selection: &Selection) -> Self {
        let groups = selection
            .stats()
            .days()
            .iter()
            .filter(|day| day.date != TOTALS_KEY)
            .map(|day| {
                let leaves = day
                    .records
                    .iter()
                    .filter_map(|record| record.name())
                    .map(|device| {
                        let id = NodeId::leaf(day.date.as_str(), device);
                        TreeLeaf {
                            active: selection.is_leaf_active(&id),
                            device: device.to_string(),
                            id,
                        }
                    })
                    .collect();

                TreeGroup {
                    date: day.date.clone(),
                    active: selection.is_group_active(&day.date),
                    leaves,
                }
            })
            .collect();

        Self {
            overview_active: selection.is_overview_active(),
            groups,
        }
    }
}

#[component]
pub fn StatsTree(model: TreeModel, on_select: EventHandler<String>) -> Element {
    let overview_class = if model.overview_active {
        "main-node active-node"
    } else {
        "main-node"
    };

    rsx! {
        nav { class: "stats-tree", aria_label: t!("stats-tree-label"),
            ul {
                li { class: "{overview_class}",
                    button {
                        r#type: "button",
                        id: NodeId::Overview.dom_id(),
                        class: "overview-btn",
                        onclick: move |_| on_select.call(NodeId::Overview.dom_id()),
                        {t!("stats-overview")}
                    }
                }
                for group in model.groups.into_iter() {
                    {render_group(group, on_select)}
                }
            }
        }
    }
}

fn render_group(group: TreeGroup, on_select: EventHandler<String>) -> Element {
    let TreeGroup {
        date,
        active,
        leaves,
    } = group;
    let group_class = if active {
        "main-node active-node"
    } else {
        "main-node"
    };

    rsx! {
        li { key: "{date}", class: "{group_class}",
            span { class: "main-node__date", "{date}" }
            ul {
                for leaf in leaves.into_iter() {
                    {render_leaf(leaf, on_select)}
                }
            }
        }
    }
}

fn render_leaf(leaf: TreeLeaf, on_select: EventHandler<String>) -> Element {
    let wire = leaf.id.to_wire();
    let button_id = wire.clone();
    let leaf_class = if leaf.active {
        "detail-node active"
    } else {
        "detail-node"
    };

    rsx! {
        li { key: "{button_id}", class: "{leaf_class}",
            button {
                r#type: "button",
                id: "{button_id}",
                onclick: move |_| on_select.call(wire.clone()),
                "{leaf.device}"
            }
        }
    }
}
