// Range tick ledger: liquidity bookkeeping and fee growth outside

use crate::store::TickStore;
use crate::tickmap;
use crate::types::TickMapKind;

/// Apply a liquidity change to a range boundary.
///
/// Returns `true` when the tick flipped between empty and populated; the
/// range tick map is kept in sync here. Callers bound `liquidity_gross` by
/// `MAX_LIQUIDITY` before adding.
pub fn update_range_tick<S: TickStore>(
    store: &mut S,
    tick: i32,
    current_tick: i32,
    liquidity_delta: i128,
    fee_growth_global_0: u128,
    fee_growth_global_1: u128,
    upper: bool,
) -> bool {
    let mut info = store.range_tick(tick);

    let liquidity_gross_before = info.liquidity_gross;
    let liquidity_gross_after = if liquidity_delta >= 0 {
        liquidity_gross_before.saturating_add(liquidity_delta as u128)
    } else {
        liquidity_gross_before.saturating_sub(liquidity_delta.unsigned_abs())
    };

    let flipped = (liquidity_gross_after == 0) != (liquidity_gross_before == 0);

    if liquidity_gross_before == 0 && liquidity_gross_after > 0 {
        // growth below the current tick is assumed to have happened outside
        if current_tick >= tick {
            info.fee_growth_outside_0 = fee_growth_global_0;
            info.fee_growth_outside_1 = fee_growth_global_1;
        } else {
            info.fee_growth_outside_0 = 0;
            info.fee_growth_outside_1 = 0;
        }
    }

    info.liquidity_gross = liquidity_gross_after;
    info.liquidity_net = if upper {
        info.liquidity_net.saturating_sub(liquidity_delta)
    } else {
        info.liquidity_net.saturating_add(liquidity_delta)
    };

    if liquidity_gross_after == 0 {
        info = Default::default();
    }
    store.set_range_tick(tick, &info);

    if flipped {
        if liquidity_gross_after > 0 {
            tickmap::set(store, TickMapKind::Range, tick);
        } else {
            tickmap::unset(store, TickMapKind::Range, tick);
        }
    }

    flipped
}

/// Flip fee growth outside for a crossed boundary and return its net liquidity.
pub fn cross_range_tick<S: TickStore>(
    store: &mut S,
    tick: i32,
    fee_growth_global_0: u128,
    fee_growth_global_1: u128,
) -> i128 {
    let mut info = store.range_tick(tick);

    info.fee_growth_outside_0 = fee_growth_global_0.wrapping_sub(info.fee_growth_outside_0);
    info.fee_growth_outside_1 = fee_growth_global_1.wrapping_sub(info.fee_growth_outside_1);

    store.set_range_tick(tick, &info);

    info.liquidity_net
}

pub fn fee_growth_inside<S: TickStore>(
    store: &S,
    lower_tick: i32,
    upper_tick: i32,
    current_tick: i32,
    fee_growth_global_0: u128,
    fee_growth_global_1: u128,
) -> (u128, u128) {
    let lower = store.range_tick(lower_tick);
    let upper = store.range_tick(upper_tick);

    let (below_0, below_1) = if current_tick >= lower_tick {
        (lower.fee_growth_outside_0, lower.fee_growth_outside_1)
    } else {
        (
            fee_growth_global_0.wrapping_sub(lower.fee_growth_outside_0),
            fee_growth_global_1.wrapping_sub(lower.fee_growth_outside_1),
        )
    };

    let (above_0, above_1) = if current_tick < upper_tick {
        (upper.fee_growth_outside_0, upper.fee_growth_outside_1)
    } else {
        (
            fee_growth_global_0.wrapping_sub(upper.fee_growth_outside_0),
            fee_growth_global_1.wrapping_sub(upper.fee_growth_outside_1),
        )
    };

    (
        fee_growth_global_0.wrapping_sub(below_0).wrapping_sub(above_0),
        fee_growth_global_1.wrapping_sub(below_1).wrapping_sub(above_1),
    )
}
