// Claiming and burning limit positions
//
// A position's fills live in the auction records it took part in. Claiming
// walks those records from the entry tick along `next_tick`, takes the
// position's pro-rata share out of each and shrinks the record so the
// remaining participants keep exact denominators.

use limitswap_math::{get_sqrt_ratio_at_tick, mul_div, BPS_DENOMINATOR};
use limitswap_tick::{release_limit_tick, PoolState, TickDeltas, TickStore};
use soroban_sdk::Env;

use crate::error::PositionError;
use crate::limit::{order_amount, LimitPosition};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LimitStage {
    /// Entry tick not crossed yet; the deposit is untouched.
    NotEntered,
    /// Taking part in the live auction.
    Active,
    /// Exit tick crossed; everything left is claimable.
    Exited,
}

/// Tokens released by a claim. `amount_in` is paid by takers in the other
/// token, `amount_out` is returned in the order's own token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClaimOutcome {
    pub amount_in: u128,
    pub amount_out: u128,
    pub liquidity_burned: u128,
    /// Position has no liquidity left and should be deleted.
    pub closed: bool,
}

impl ClaimOutcome {
    fn add(&mut self, (amount_in, amount_out): (u128, u128)) {
        self.amount_in += amount_in;
        self.amount_out += amount_out;
    }
}

pub fn stage<S: TickStore>(store: &S, pos: &LimitPosition) -> LimitStage {
    if store.limit_tick(pos.zero_for_one, pos.exit_tick()).epoch_last > pos.epoch_last {
        LimitStage::Exited
    } else if store.limit_tick(pos.zero_for_one, pos.entry_tick()).epoch_last > pos.epoch_last {
        LimitStage::Active
    } else {
        LimitStage::NotEntered
    }
}

/// The only tick a claim on `pos` is accepted at.
pub fn claim_tick<S: TickStore>(store: &S, state: &PoolState, pos: &LimitPosition) -> Option<i32> {
    match stage(store, pos) {
        LimitStage::NotEntered => Some(pos.entry_tick()),
        LimitStage::Exited => Some(pos.exit_tick()),
        LimitStage::Active => state.side(pos.zero_for_one).auction_tick,
    }
}

/// Shrink one family of maxima by a claimant's share. The filled part comes
/// off `minus` with the delta; the unfilled part drains the stash first.
fn reduce_max(minus: &mut u128, stashed: &mut u128, filled: u128, unfilled: u128) {
    let from_stash = unfilled.min(*stashed);
    *stashed -= from_stash;
    *minus = minus.saturating_sub(filled + unfilled - from_stash);
}

/// Remove the share of `liquidity` from an auction record. Returns the
/// tokens owed to the claimant and whether the record is now empty.
///
/// The claimed fill comes off the deltas as well as the maxima: the next
/// claimant's share is taken against the reduced `liquidity_max_minus`, so
/// it must see only what is left.
pub fn take_share(env: &Env, deltas: &mut TickDeltas, liquidity: u128) -> ((u128, u128), bool) {
    let in_unfilled_total = deltas.amount_in_max().saturating_sub(deltas.amount_in_delta);
    let out_unfilled_total = deltas.amount_out_max().saturating_sub(deltas.amount_out_delta);

    if liquidity >= deltas.liquidity_max_minus {
        return ((deltas.amount_in_delta, out_unfilled_total), true);
    }

    let total = deltas.liquidity_max_minus;
    let amount_in = mul_div(env, deltas.amount_in_delta, liquidity, total);
    let in_unfilled = mul_div(env, in_unfilled_total, liquidity, total);
    let out_filled = mul_div(env, deltas.amount_out_delta, liquidity, total);
    let out_unfilled = mul_div(env, out_unfilled_total, liquidity, total);

    deltas.amount_in_delta -= amount_in;
    deltas.amount_out_delta -= out_filled;
    reduce_max(
        &mut deltas.amount_in_delta_max_minus,
        &mut deltas.amount_in_delta_max_stashed,
        amount_in,
        in_unfilled,
    );
    reduce_max(
        &mut deltas.amount_out_delta_max_minus,
        &mut deltas.amount_out_delta_max_stashed,
        out_filled,
        out_unfilled,
    );
    deltas.liquidity_max_minus -= liquidity;

    ((amount_in, out_unfilled), false)
}

fn claim_record<S: TickStore>(
    env: &Env,
    store: &mut S,
    zero_for_one: bool,
    tick: i32,
    round: u32,
    deltas: &mut TickDeltas,
    liquidity: u128,
) -> (u128, u128) {
    let (owed, empty) = take_share(env, deltas, liquidity);
    if empty {
        store.remove_tick_deltas(zero_for_one, tick, round);
    } else {
        store.set_tick_deltas(zero_for_one, tick, round, deltas);
    }
    owed
}

/// First auction at the position's entry tick opened after it was anchored.
fn entry_record<S: TickStore>(store: &S, state: &PoolState, pos: &LimitPosition) -> Option<(u32, TickDeltas)> {
    let side_round = state.side(pos.zero_for_one).round;
    (pos.round..=side_round).find_map(|round| {
        store
            .tick_deltas(pos.zero_for_one, pos.entry_tick(), round)
            .filter(|deltas| deltas.epoch_opened > pos.epoch_last)
            .map(|deltas| (round, deltas))
    })
}

/// Claim every closed auction of `pos` with its full liquidity. Stops at the
/// exit tick or at the live auction, which is returned untouched.
fn claim_closed<S: TickStore>(
    env: &Env,
    store: &mut S,
    state: &PoolState,
    pos: &LimitPosition,
    outcome: &mut ClaimOutcome,
) -> Option<(i32, u32, TickDeltas)> {
    let zero_for_one = pos.zero_for_one;
    let exit = pos.exit_tick();
    let (mut round, mut deltas) = entry_record(store, state, pos)?;
    let mut tick = pos.entry_tick();

    loop {
        let Some(next_tick) = deltas.next_tick else {
            return Some((tick, round, deltas));
        };
        let next_round = deltas.next_round;
        outcome.add(claim_record(env, store, zero_for_one, tick, round, &mut deltas, pos.liquidity));
        if next_tick == exit {
            return None;
        }
        tick = next_tick;
        round = next_round;
        deltas = store.tick_deltas(zero_for_one, tick, round)?;
    }
}

/// Claim fills of `pos` at `claim_tick` and burn `burn_percent` basis points
/// of its liquidity.
///
/// Exited positions are always burnt completely. A zero percentage on an
/// active position only collects closed auctions and re-anchors the position
/// at the live one, so repeating it pays nothing.
pub fn burn_limit_position<S: TickStore>(
    env: &Env,
    store: &mut S,
    state: &mut PoolState,
    pos: &mut LimitPosition,
    claim_tick_at: i32,
    burn_percent: u32,
) -> Result<ClaimOutcome, PositionError> {
    if burn_percent > BPS_DENOMINATOR {
        return Err(PositionError::NotEnoughPositionLiquidity);
    }
    if claim_tick_at < pos.lower || claim_tick_at > pos.upper {
        return Err(PositionError::WrongTickClaimedAt);
    }
    if claim_tick(store, state, pos) != Some(claim_tick_at) {
        return Err(PositionError::WrongTickClaimedAt);
    }

    let zero_for_one = pos.zero_for_one;
    let mut outcome = ClaimOutcome::default();

    match stage(store, pos) {
        LimitStage::NotEntered => {
            let burn = pos.liquidity * burn_percent as u128 / BPS_DENOMINATOR as u128;
            if burn > 0 {
                outcome.amount_out = order_amount(
                    env,
                    get_sqrt_ratio_at_tick(pos.lower),
                    get_sqrt_ratio_at_tick(pos.upper),
                    burn,
                    zero_for_one,
                    false,
                );
                release_limit_tick(store, zero_for_one, pos.entry_tick(), burn, true);
                release_limit_tick(store, zero_for_one, pos.exit_tick(), burn, false);
            }
            outcome.liquidity_burned = burn;
        }
        LimitStage::Exited => {
            claim_closed(env, store, state, pos, &mut outcome);
            outcome.liquidity_burned = pos.liquidity;
        }
        LimitStage::Active => {
            let burn = pos.liquidity * burn_percent as u128 / BPS_DENOMINATOR as u128;
            let Some((tick, round, mut live)) = claim_closed(env, store, state, pos, &mut outcome) else {
                return Err(PositionError::WrongTickClaimedAt);
            };

            let epoch_opened = live.epoch_opened;
            if burn > 0 {
                let (owed, empty) = take_share(env, &mut live, burn);
                outcome.add(owed);
                let side = state.side_mut(zero_for_one);
                if empty {
                    store.remove_tick_deltas(zero_for_one, tick, round);
                } else {
                    live.reanchor(side.sqrt_price_x64);
                    store.set_tick_deltas(zero_for_one, tick, round, &live);
                }

                let sqrt_exit = get_sqrt_ratio_at_tick(pos.exit_tick());
                outcome.amount_out += order_amount(env, side.sqrt_price_x64, sqrt_exit, burn, zero_for_one, false);

                side.liquidity = side.liquidity.saturating_sub(burn);
                if side.liquidity == 0 {
                    side.auction_tick = None;
                }
                release_limit_tick(store, zero_for_one, pos.exit_tick(), burn, false);
            }

            pos.set_entry_tick(tick);
            pos.round = round;
            pos.epoch_last = epoch_opened.saturating_sub(1);
            outcome.liquidity_burned = burn;
        }
    }

    pos.liquidity -= outcome.liquidity_burned;
    outcome.closed = pos.liquidity == 0;
    Ok(outcome)
}
