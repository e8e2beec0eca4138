// Limit tick ledger: position anchoring and crossing

use crate::store::TickStore;
use crate::tickmap;
use crate::types::TickMapKind;

#[inline]
fn signed(liquidity: u128, entry: bool) -> i128 {
    if entry { liquidity as i128 } else { -(liquidity as i128) }
}

/// Anchor `liquidity` at a position boundary: `+L` on the entry tick,
/// `-L` on the exit tick.
pub fn anchor_limit_tick<S: TickStore>(store: &mut S, zero_for_one: bool, tick: i32, liquidity: u128, entry: bool) {
    let mut info = store.limit_tick(zero_for_one, tick);
    info.liquidity_delta += signed(liquidity, entry);
    info.liquidity_gross += liquidity;
    store.set_limit_tick(zero_for_one, tick, &info);
    tickmap::set(store, TickMapKind::limit(zero_for_one), tick);
}

/// Undo part of an earlier anchor. The tick leaves the map once nothing
/// references it.
pub fn release_limit_tick<S: TickStore>(store: &mut S, zero_for_one: bool, tick: i32, liquidity: u128, entry: bool) {
    let mut info = store.limit_tick(zero_for_one, tick);
    info.liquidity_gross = info.liquidity_gross.saturating_sub(liquidity);
    if info.liquidity_gross == 0 {
        info.liquidity_delta = 0;
        tickmap::unset(store, TickMapKind::limit(zero_for_one), tick);
    } else {
        info.liquidity_delta -= signed(liquidity, entry);
    }
    store.set_limit_tick(zero_for_one, tick, &info);
}

/// Consume a tick's delta as the side crosses it. The tick is stamped with
/// `epoch` and `sqrt_price_x64` and removed from the map.
pub fn consume_limit_tick<S: TickStore>(
    store: &mut S,
    zero_for_one: bool,
    tick: i32,
    epoch: u32,
    sqrt_price_x64: u128,
) -> i128 {
    let mut info = store.limit_tick(zero_for_one, tick);
    let delta = info.liquidity_delta;
    info.liquidity_delta = 0;
    info.liquidity_gross = 0;
    info.epoch_last = epoch;
    info.price_at = sqrt_price_x64;
    store.set_limit_tick(zero_for_one, tick, &info);
    tickmap::unset(store, TickMapKind::limit(zero_for_one), tick);
    delta
}
