// Sync engine: moves each limit side towards the time-weighted tick
//
// A side only travels in its fill direction. Every populated tick on the way
// is crossed: its liquidity delta is consumed, the live auction is closed and
// a new one opened if liquidity remains. Price movement inside an auction
// that no taker paid for is expired into the auction's stash until it closes.

use limitswap_math::{get_sqrt_ratio_at_tick, MAX_SWAP_ITERATIONS};
use limitswap_tick::{consume_limit_tick, tickmap, LimitSide, PoolState, TickDeltas, TickMapKind, TickStore};
use soroban_sdk::{log, Env};

/// Ticks crossed by one sync.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub crossed_0: u32,
    pub crossed_1: u32,
}

impl SyncReport {
    pub fn total(&self) -> u32 {
        self.crossed_0 + self.crossed_1
    }
}

/// `a` is at or behind `b` when walking upward (`up`) or downward.
#[inline]
pub(crate) fn not_beyond(a: u128, b: u128, up: bool) -> bool {
    if up { a <= b } else { a >= b }
}

/// Closer of two prices for a walk in the given direction.
#[inline]
pub(crate) fn nearest(a: u128, b: u128, up: bool) -> u128 {
    if up { a.min(b) } else { a.max(b) }
}

/// Next populated tick a side will cross. Side 0 walks upward, side 1
/// downward; a populated tick under the side's own price is still pending.
pub fn next_limit_tick<S: TickStore>(store: &S, side: &LimitSide, zero_for_one: bool) -> Option<i32> {
    let kind = TickMapKind::limit(zero_for_one);
    if tickmap::is_set(store, kind, side.tick) {
        let pending = !zero_for_one || get_sqrt_ratio_at_tick(side.tick) == side.sqrt_price_x64;
        if pending {
            return Some(side.tick);
        }
    }
    tickmap::next(store, kind, side.tick, zero_for_one)
}

/// Extend the side's live auction to `sqrt_price_to`. `filled` carries what
/// a taker actually traded on the way, if anything.
///
/// The auction's maxima are re-measured from its anchor in one rounding and
/// only the growth is recorded, so many small fills cost the makers no more
/// than a single one would.
pub(crate) fn record_segment<S: TickStore>(
    env: &Env,
    store: &mut S,
    side: &LimitSide,
    zero_for_one: bool,
    sqrt_price_to: u128,
    filled: Option<(u128, u128)>,
) {
    let Some(tick) = side.auction_tick else {
        return;
    };
    let Some(mut deltas) = store.tick_deltas(zero_for_one, tick, side.round) else {
        return;
    };

    let (max_in, max_out) = deltas.max_at(env, zero_for_one, sqrt_price_to);
    let grown_in = max_in.saturating_sub(deltas.amount_in_max());
    let grown_out = max_out.saturating_sub(deltas.amount_out_max());
    match filled {
        Some((paid, out)) => {
            deltas.amount_in_delta += paid;
            deltas.amount_out_delta += out;
            deltas.amount_in_delta_max_minus += grown_in.max(paid);
            deltas.amount_out_delta_max_minus += grown_out.max(out);
        }
        None => {
            deltas.amount_in_delta_max_stashed += grown_in;
            deltas.amount_out_delta_max_stashed += grown_out;
        }
    }
    store.set_tick_deltas(zero_for_one, tick, side.round, &deltas);
}

/// Cross populated tick `tick` on one side.
pub fn cross_limit_tick<S: TickStore>(env: &Env, store: &mut S, state: &mut PoolState, zero_for_one: bool, tick: i32) {
    let sqrt_price = get_sqrt_ratio_at_tick(tick);
    let epoch = state.epoch + 1;
    state.epoch = epoch;

    let side = state.side_mut(zero_for_one);
    if side.is_active() {
        record_segment(env, store, side, zero_for_one, sqrt_price, None);
    }
    let closing = side.auction_tick.take().map(|at| (at, side.round));

    let delta = consume_limit_tick(store, zero_for_one, tick, epoch, sqrt_price);
    side.liquidity = (side.liquidity as i128).saturating_add(delta).max(0) as u128;
    side.sqrt_price_x64 = sqrt_price;
    side.tick = tick;

    if side.liquidity > 0 {
        // an unclaimed auction from an earlier pass keeps its key
        while store.tick_deltas(zero_for_one, tick, side.round).is_some() {
            side.round += 1;
        }
        store.set_tick_deltas(zero_for_one, tick, side.round, &TickDeltas::open(side.liquidity, epoch, sqrt_price));
        side.auction_tick = Some(tick);
    }

    if let Some((at, round)) = closing {
        if let Some(mut deltas) = store.tick_deltas(zero_for_one, at, round) {
            deltas.close(tick, side.round);
            store.set_tick_deltas(zero_for_one, at, round, &deltas);
        }
    }

    log!(env, "limit tick crossed", zero_for_one, tick, epoch, side.liquidity);
}

/// Move one side to `target_tick`. Returns the number of ticks crossed.
pub fn sync_side<S: TickStore>(env: &Env, store: &mut S, state: &mut PoolState, zero_for_one: bool, target_tick: i32) -> u32 {
    let up = zero_for_one;
    let mut crossed = 0;

    while crossed < MAX_SWAP_ITERATIONS {
        let side = state.side(zero_for_one);
        match next_limit_tick(store, side, zero_for_one) {
            Some(tick) if (up && tick <= target_tick) || (!up && tick >= target_tick) => {
                cross_limit_tick(env, store, state, zero_for_one, tick);
                crossed += 1;
                continue;
            }
            _ => {}
        }

        let target = get_sqrt_ratio_at_tick(target_tick);
        let side = state.side_mut(zero_for_one);
        if side.sqrt_price_x64 == target {
            break;
        }
        if not_beyond(side.sqrt_price_x64, target, up) {
            if side.is_active() {
                record_segment(env, store, side, zero_for_one, target, None);
            }
            side.sqrt_price_x64 = target;
            side.tick = target_tick;
        } else if !side.is_active() {
            log!(env, "limit side rewound", zero_for_one, side.tick, target_tick);
            side.sqrt_price_x64 = target;
            side.tick = target_tick;
        }
        break;
    }

    crossed
}

/// Sync both sides to `target_tick`.
pub fn sync_pool<S: TickStore>(env: &Env, store: &mut S, state: &mut PoolState, target_tick: i32) -> SyncReport {
    SyncReport {
        crossed_0: sync_side(env, store, state, true, target_tick),
        crossed_1: sync_side(env, store, state, false, target_tick),
    }
}
