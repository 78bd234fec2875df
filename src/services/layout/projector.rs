//! Slot projection: which events are shown in a given slot and in which
//! column.
//!
//! An event belongs to the slot it starts in; its duration is expressed by
//! the renderer as tile height, so a slot only shows events beginning in it.

use std::cell::OnceCell;

use crate::models::event::{Event, TimeRange};
use crate::models::layout::{ClusterNode, ColumnGrid, SlotColumn};

use super::column_grid::ColumnGridBuilder;

/// Columns for one slot plus the events starting there that got no column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlotProjection<'a> {
    pub columns: Vec<SlotColumn<'a>>,
    pub overflow: Vec<&'a Event>,
}

/// Index of the node that owns `slot`: its `[start, end)` span fully contains
/// the slot and one of its events starts inside the slot.
pub fn find_slot_node(slot: &TimeRange, nodes: &[ClusterNode<'_>]) -> Option<usize> {
    nodes.iter().position(|node| {
        node.span().contains(slot) && node.events.iter().any(|event| slot.contains_instant(event.start))
    })
}

/// One column per grid column; occupied when that column holds an event
/// starting in `slot`.
pub fn reduce_grid_to_slot_columns<'a>(slot: &TimeRange, grid: &ColumnGrid<'a>) -> Vec<SlotColumn<'a>> {
    (0..grid.width)
        .map(|column| {
            grid.cells
                .iter()
                .find(|cell| cell.column == column && slot.contains_instant(cell.event.start))
                .map_or_else(SlotColumn::placeholder, |cell| SlotColumn::occupied(cell.event))
        })
        .collect()
}

/// Project `slot` against `nodes`, building the owning node's grid on demand.
pub fn project_slot<'a>(
    slot: &TimeRange,
    nodes: &[ClusterNode<'a>],
    builder: &ColumnGridBuilder,
) -> Vec<SlotColumn<'a>> {
    GridCache::new(nodes, builder).project(slot).columns
}

/// Column grids for a fixed set of nodes, each built at most once.
///
/// Nodes are borrowed immutably for the cache's lifetime, so a grid can never
/// go stale against its node's event set.
pub struct GridCache<'n, 'a> {
    nodes: &'n [ClusterNode<'a>],
    builder: &'n ColumnGridBuilder,
    grids: Vec<OnceCell<ColumnGrid<'a>>>,
}

impl<'n, 'a> GridCache<'n, 'a> {
    pub fn new(nodes: &'n [ClusterNode<'a>], builder: &'n ColumnGridBuilder) -> Self {
        Self {
            nodes,
            builder,
            grids: nodes.iter().map(|_| OnceCell::new()).collect(),
        }
    }

    pub fn nodes(&self) -> &'n [ClusterNode<'a>] {
        self.nodes
    }

    /// Grid of the node at `index`, built on first access.
    pub fn grid(&self, index: usize) -> &ColumnGrid<'a> {
        self.grids[index].get_or_init(|| self.builder.build(&self.nodes[index]))
    }

    #[cfg(test)]
    pub(crate) fn built_count(&self) -> usize {
        self.grids.iter().filter(|cell| cell.get().is_some()).count()
    }

    /// Columns of the owning node's grid for `slot`.
    ///
    /// Events starting in `slot` that get no column land in `overflow`: the
    /// owner's grid overflow, or every starting event when no node owns the
    /// slot (a node shorter than the slot, or not aligned to it).
    pub fn project(&self, slot: &TimeRange) -> SlotProjection<'a> {
        let owner = find_slot_node(slot, self.nodes);

        let (columns, mut overflow) = match owner {
            Some(index) => {
                let grid = self.grid(index);
                let overflow: Vec<&'a Event> = grid
                    .overflow
                    .iter()
                    .copied()
                    .filter(|event| slot.contains_instant(event.start))
                    .collect();
                (reduce_grid_to_slot_columns(slot, grid), overflow)
            }
            None => (Vec::new(), Vec::new()),
        };

        for (index, node) in self.nodes.iter().enumerate() {
            if Some(index) == owner {
                continue;
            }
            overflow.extend(
                node.events
                    .iter()
                    .copied()
                    .filter(|event| slot.contains_instant(event.start)),
            );
        }

        if !overflow.is_empty() {
            log::debug!(
                "Slot starting {} has {} event(s) without a column",
                slot.start,
                overflow.len()
            );
        }

        SlotProjection { columns, overflow }
    }
}
