// Swap engine
//
// Each iteration trades against whichever source is cheaper for the taker:
// the range curve or the limit side being consumed (side 0 by upward swaps,
// side 1 by downward swaps). Limit fills carry no fee; range steps pay
// `fee_bps` to range liquidity. The same code runs for swaps and quotes.

use limitswap_math::{
    compute_swap_step, get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio, max_sqrt_price, min_sqrt_price, mul_div,
    MAX_SWAP_ITERATIONS, Q64,
};
use limitswap_tick::{cross_range_tick, tickmap, PoolState, TickMapKind, TickStore};
use soroban_sdk::{contracttype, log, Env};

use crate::sync::{cross_limit_tick, nearest, next_limit_tick, not_beyond, record_segment};

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwapParams {
    /// Sell token0 for token1 (price moves down)
    pub zero_for_one: bool,
    /// Input when `exact_in`, desired output otherwise
    pub amount: i128,
    pub exact_in: bool,
    /// Zero for no limit
    pub sqrt_price_limit_x64: u128,
    /// Minimum output for exact-input swaps, maximum input otherwise. Zero disables it.
    pub amount_limit: i128,
}

#[contracttype]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SwapResult {
    pub amount_in: i128,
    pub amount_out: i128,
    /// Price of the last source traded against
    pub sqrt_price_x64: u128,
    pub tick: i32,
    /// Fee charged by range steps, in the input token
    pub fee_amount: i128,
    pub ticks_crossed: u32,
}

/// Resolve a user price limit; `0` means the bound of the swap direction.
/// Returns `None` for a limit on the wrong side of the current price or
/// outside the supported range.
pub fn resolve_price_limit(sqrt_price_current: u128, sqrt_price_limit_x64: u128, zero_for_one: bool) -> Option<u128> {
    if sqrt_price_limit_x64 == 0 {
        return Some(if zero_for_one { min_sqrt_price() } else { max_sqrt_price() });
    }
    if sqrt_price_limit_x64 < min_sqrt_price() || sqrt_price_limit_x64 > max_sqrt_price() {
        return None;
    }
    let ahead = if zero_for_one {
        sqrt_price_limit_x64 < sqrt_price_current
    } else {
        sqrt_price_limit_x64 > sqrt_price_current
    };
    ahead.then_some(sqrt_price_limit_x64)
}

/// Price a swap starts trading at: the cheaper of the curve and the active
/// side it consumes.
pub fn swap_start_price(state: &PoolState, zero_for_one: bool) -> u128 {
    let up = !zero_for_one;
    let side = state.side(up);
    if side.is_active() {
        nearest(side.sqrt_price_x64, state.range.sqrt_price_x64, up)
    } else {
        state.range.sqrt_price_x64
    }
}

/// Next range boundary in the swap direction. Moving down, a populated tick
/// at or under the current price is still pending.
fn next_range_tick<S: TickStore>(store: &S, tick: i32, up: bool) -> Option<i32> {
    if !up && tickmap::is_set(store, TickMapKind::Range, tick) {
        return Some(tick);
    }
    tickmap::next(store, TickMapKind::Range, tick, up)
}

#[derive(Default)]
struct Totals {
    remaining: u128,
    amount_in: u128,
    amount_out: u128,
    fee: u128,
    last_price: u128,
    last_tick: i32,
    crossed: u32,
}

impl Totals {
    fn settle(&mut self, paid: u128, out: u128, exact_in: bool) {
        self.amount_in += paid;
        self.amount_out += out;
        let used = if exact_in { paid } else { out };
        self.remaining = self.remaining.saturating_sub(used);
    }
}

/// Execute a swap against `state`. `sqrt_price_limit` must come from
/// `resolve_price_limit`.
pub fn execute_swap<S: TickStore>(
    env: &Env,
    store: &mut S,
    state: &mut PoolState,
    fee_bps: u32,
    zero_for_one: bool,
    amount: u128,
    exact_in: bool,
    sqrt_price_limit: u128,
) -> SwapResult {
    let up = !zero_for_one;
    let consumer = up;
    let bound = if up { max_sqrt_price() } else { min_sqrt_price() };

    let mut totals = Totals {
        remaining: amount,
        last_price: state.range.sqrt_price_x64,
        last_tick: state.range.tick,
        ..Default::default()
    };

    for _ in 0..MAX_SWAP_ITERATIONS {
        if totals.remaining == 0 {
            break;
        }

        let range_price = state.range.sqrt_price_x64;
        let range_next = next_range_tick(store, state.range.tick, up);
        let range_next_price = range_next.map(get_sqrt_ratio_at_tick);
        let range_pending = range_next_price == Some(range_price);

        let side = state.side(consumer).clone();
        let side_next = next_limit_tick(store, &side, consumer);
        let side_next_price = side_next.map(get_sqrt_ratio_at_tick);

        // limit step: the side is no more expensive than the curve
        if side.is_active() && !range_pending && not_beyond(side.sqrt_price_x64, range_price, up) {
            if !not_beyond(side.sqrt_price_x64, sqrt_price_limit, up) || side.sqrt_price_x64 == sqrt_price_limit {
                break;
            }
            let mut target = nearest(side_next_price.unwrap_or(bound), sqrt_price_limit, up);
            target = if side.sqrt_price_x64 != range_price {
                nearest(target, range_price, up)
            } else {
                nearest(target, range_next_price.unwrap_or(bound), up)
            };

            let step = compute_swap_step(
                env,
                side.sqrt_price_x64,
                target,
                side.liquidity,
                totals.remaining,
                exact_in,
                zero_for_one,
                0,
            );
            let paid = step.amount_paid();
            record_segment(env, store, &side, consumer, step.sqrt_price_next, Some((paid, step.amount_out)));

            let side_mut = state.side_mut(consumer);
            side_mut.sqrt_price_x64 = step.sqrt_price_next;
            side_mut.tick = get_tick_at_sqrt_ratio(step.sqrt_price_next);
            totals.settle(paid, step.amount_out, exact_in);
            totals.last_price = step.sqrt_price_next;
            totals.last_tick = side_mut.tick;

            if let (Some(tick), Some(price)) = (side_next, side_next_price) {
                if step.sqrt_price_next == price {
                    cross_limit_tick(env, store, state, consumer, tick);
                    totals.crossed += 1;
                    totals.last_tick = tick;
                }
            }
            continue;
        }

        // an idle side whose next order the curve has already reached opens now
        if !side.is_active() && !range_pending {
            if let (Some(tick), Some(price)) = (side_next, side_next_price) {
                if not_beyond(price, range_price, up) && not_beyond(price, sqrt_price_limit, up) {
                    cross_limit_tick(env, store, state, consumer, tick);
                    totals.crossed += 1;
                    continue;
                }
            }
        }

        // range step
        if !not_beyond(range_price, sqrt_price_limit, up) || (range_price == sqrt_price_limit && !range_pending) {
            break;
        }
        let side_boundary = (if side.is_active() { Some(side.sqrt_price_x64) } else { side_next_price })
            .filter(|price| !not_beyond(*price, range_price, up));

        let mut target = nearest(range_next_price.unwrap_or(bound), sqrt_price_limit, up);
        if let Some(price) = side_boundary {
            target = nearest(target, price, up);
        }
        let at_boundary = Some(target) == range_next_price || Some(target) == side_boundary;
        if state.range.liquidity == 0 && !at_boundary {
            break;
        }

        let step = compute_swap_step(
            env,
            range_price,
            target,
            state.range.liquidity,
            totals.remaining,
            exact_in,
            zero_for_one,
            fee_bps,
        );

        if state.range.liquidity > 0 && step.fee_amount > 0 {
            let growth = mul_div(env, step.fee_amount, Q64, state.range.liquidity);
            if zero_for_one {
                state.range.fee_growth_global_0 = state.range.fee_growth_global_0.wrapping_add(growth);
            } else {
                state.range.fee_growth_global_1 = state.range.fee_growth_global_1.wrapping_add(growth);
            }
        }
        totals.settle(step.amount_paid(), step.amount_out, exact_in);
        totals.fee += step.fee_amount;
        state.range.sqrt_price_x64 = step.sqrt_price_next;

        match (range_next, range_next_price) {
            (Some(tick), Some(price)) if step.sqrt_price_next == price => {
                let net = cross_range_tick(
                    store,
                    tick,
                    state.range.fee_growth_global_0,
                    state.range.fee_growth_global_1,
                );
                if up {
                    state.range.liquidity = (state.range.liquidity as i128).saturating_add(net).max(0) as u128;
                    state.range.tick = tick;
                } else {
                    state.range.liquidity = (state.range.liquidity as i128).saturating_sub(net).max(0) as u128;
                    state.range.tick = tick - 1;
                }
                totals.crossed += 1;
                log!(env, "range tick crossed", tick, state.range.liquidity);
            }
            _ => {
                state.range.tick = get_tick_at_sqrt_ratio(step.sqrt_price_next);
            }
        }
        totals.last_price = state.range.sqrt_price_x64;
        totals.last_tick = state.range.tick;
    }

    SwapResult {
        amount_in: totals.amount_in as i128,
        amount_out: totals.amount_out as i128,
        sqrt_price_x64: totals.last_price,
        tick: totals.last_tick,
        fee_amount: totals.fee as i128,
        ticks_crossed: totals.crossed,
    }
}
