// Calendar Grid Library
// Week-view event layout: overlap clustering and column assignment

pub mod models;
pub mod services;
pub mod utils;

pub use models::event::{Event, EventOperation, TimeRange};
pub use models::layout::{ClusterNode, ColumnGrid, DaySlot, GridCell, SlotColumn};
pub use models::settings::{LayoutConfigError, LayoutSettings};
pub use services::layout::LayoutEngine;
