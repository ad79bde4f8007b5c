//! The stats browser: data model, node identifiers, selection state and the
//! components rendering them.

mod averages;
pub use averages::{compute_averages, AVERAGED_METRICS, DAYS};

mod detail;
pub use detail::{DetailModel, StatsDetail};

pub mod model;
pub use model::{DayEntry, DeviceRecord, StatsMap, TOTALS_KEY};

mod node;
pub use node::{NodeId, OVERVIEW_DOM_ID, OVERVIEW_SENTINEL, SEPARATOR};

mod selection;
pub use selection::{DisplayState, Selection};

mod tiles;
pub use tiles::{project_tiles, StatsTiles, Tile, TileDescriptor, Transform, TILES};

mod tree;
pub use tree::{StatsTree, TreeGroup, TreeLeaf, TreeModel};
