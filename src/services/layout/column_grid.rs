//! Column assignment inside a single cluster.

use crate::models::event::Event;
use crate::models::layout::{ClusterNode, ColumnGrid, GridCell};

use super::time_grid::TimeGrid;

/// Assigns grid columns to the events of a cluster.
///
/// Overlap between events is judged on grid-snapped ranges (start rounded
/// down, end rounded up), so events closer than one slot collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnGridBuilder {
    grid: TimeGrid,
    column_limit: usize,
}

impl ColumnGridBuilder {
    pub fn new(grid: TimeGrid, column_limit: usize) -> Self {
        Self { grid, column_limit }
    }

    pub fn time_grid(&self) -> &TimeGrid {
        &self.grid
    }

    pub fn column_limit(&self) -> usize {
        self.column_limit
    }

    /// Lay out `node.events` in node order.
    ///
    /// Column choice for each event, given the already placed cells it
    /// collides with (in placement order):
    /// - no collision: column 0
    /// - first colliding column is not 0: that column minus one
    /// - otherwise: last colliding column plus one
    ///
    /// When that choice is held by a colliding cell, the lowest column free
    /// of collisions is used instead. A column at or past the limit sends the
    /// event to `overflow`.
    pub fn build<'a>(&self, node: &ClusterNode<'a>) -> ColumnGrid<'a> {
        let mut grid = ColumnGrid::default();

        for &event in &node.events {
            let column = self.choose_column(event, &grid.cells);

            if column >= self.column_limit {
                log::warn!(
                    "Event '{}' needs column {} but the limit is {}; moved to overflow",
                    event.id,
                    column,
                    self.column_limit
                );
                grid.overflow.push(event);
                continue;
            }

            log::trace!("Event '{}' placed in column {}", event.id, column);
            grid.width = grid.width.max(column + 1);
            grid.cells.push(GridCell { event, column });
        }

        grid
    }

    /// Grid-snapped half-open overlap.
    pub fn collides(&self, a: &Event, b: &Event) -> bool {
        self.grid
            .snap_range(a.range())
            .overlaps(&self.grid.snap_range(b.range()))
    }

    fn choose_column(&self, event: &Event, cells: &[GridCell<'_>]) -> usize {
        let colliding: Vec<usize> = cells
            .iter()
            .filter(|cell| self.collides(cell.event, event))
            .map(|cell| cell.column)
            .collect();

        let (Some(&first), Some(&last)) = (colliding.first(), colliding.last()) else {
            return 0;
        };

        let preferred = if first != 0 { first - 1 } else { last + 1 };
        if colliding.contains(&preferred) {
            lowest_free_column(&colliding)
        } else {
            preferred
        }
    }
}

fn lowest_free_column(taken: &[usize]) -> usize {
    let mut column = 0;
    while taken.contains(&column) {
        column += 1;
    }
    column
}
