//! Slot balancing: greedy forward-overflow assignment against shared capacity
//!
//! Every row of a run balances against the same `SlotCapacityPool`, so later
//! rows see the capacity earlier rows already consumed. Row order is
//! meaningful: the same rows in a different order can balance differently,
//! and callers must preserve the order of the input table.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{
    BalancedRow, ConvertedRow, OverflowReport, SlotCapacityPool, UnassignedOverflow,
};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum BalanceError {
    #[error("Part {part_number} ({drive_unit}): expected {expected} slots, row has {found}")]
    SlotCountMismatch {
        part_number: String,
        drive_unit: String,
        expected: usize,
        found: usize,
    },
}

/// Result of balancing one batch of rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceOutcome {
    pub rows: Vec<BalancedRow>,
    pub overflow: OverflowReport,
}

/// Balance a batch of rows, in order, against one shared pool
///
/// Slot counts are validated against the pool before any capacity is
/// consumed: a ragged batch aborts with no partial output. Unassigned
/// overflow is not an error; it accumulates in the returned report while
/// the run continues.
pub fn balance_rows(
    rows: &[ConvertedRow],
    pool: &mut SlotCapacityPool,
) -> Result<BalanceOutcome, BalanceError> {
    for row in rows {
        if row.container_quantities.len() != pool.num_slots() {
            return Err(BalanceError::SlotCountMismatch {
                part_number: row.part_number.clone(),
                drive_unit: row.drive_unit.clone(),
                expected: pool.num_slots(),
                found: row.container_quantities.len(),
            });
        }
    }

    let mut balanced = Vec::with_capacity(rows.len());
    let mut overflow = OverflowReport::default();
    for row in rows {
        balanced.push(balance_row(row, pool, &mut overflow));
    }

    Ok(BalanceOutcome {
        rows: balanced,
        overflow,
    })
}

/// Balance a single row against the pool
///
/// Per slot `i`: assign `min(planned, headroom)`, then push the remainder
/// forward through slots `i+1..`, never backward. Whatever is still left
/// after the last slot goes into the report tagged with the originating
/// slot. Assignments accumulate, so overflow cascaded into a later slot is
/// kept when that slot's own planned quantity is processed.
pub fn balance_row(
    row: &ConvertedRow,
    pool: &mut SlotCapacityPool,
    report: &mut OverflowReport,
) -> BalancedRow {
    let num_slots = pool.num_slots();
    let mut balanced = vec![0u32; num_slots];

    for (i, &planned) in row.container_quantities.iter().enumerate() {
        let assigned = planned.min(pool.headroom(i));
        balanced[i] += assigned;
        pool.consume(i, assigned);

        let mut overflow = planned - assigned;
        let mut j = i + 1;
        while overflow > 0 && j < num_slots {
            let take = overflow.min(pool.headroom(j));
            balanced[j] += take;
            pool.consume(j, take);
            overflow -= take;
            j += 1;
        }

        if overflow > 0 {
            report.push(UnassignedOverflow {
                part_number: row.part_number.clone(),
                drive_unit: row.drive_unit.clone(),
                origin_slot: i,
                amount: overflow,
            });
        }
    }

    BalancedRow {
        part_number: row.part_number.clone(),
        drive_unit: row.drive_unit.clone(),
        description: row.description.clone(),
        package_type: row.package_type.clone(),
        pack_size: row.pack_size,
        balanced_quantities: balanced,
    }
}
