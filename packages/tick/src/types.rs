// Tick Types

use limitswap_math::{get_amount_0_delta, get_amount_1_delta};
use soroban_sdk::{contracttype, Env};

/// Range-liquidity boundary.
#[contracttype]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RangeTick {
    /// Total liquidity referencing this tick
    pub liquidity_gross: u128,
    /// Net liquidity change when crossing left-to-right
    pub liquidity_net: i128,
    /// Fee growth outside this tick for token0
    pub fee_growth_outside_0: u128,
    /// Fee growth outside this tick for token1
    pub fee_growth_outside_1: u128,
}

/// Limit-order boundary for one side.
///
/// `liquidity_delta` is applied once, when the side crosses the tick in its
/// fill direction, and is consumed by that crossing.
#[contracttype]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LimitTick {
    pub liquidity_delta: i128,
    /// Liquidity of every position anchored here; the tick stays in the map
    /// while this is non-zero even if the deltas cancel out.
    pub liquidity_gross: u128,
    /// Sqrt price recorded the last time the side crossed this tick.
    pub price_at: u128,
    /// Epoch stamped by the last crossing; zero if never crossed.
    pub epoch_last: u32,
}

/// Fill ledger of one auction, keyed by `(side, tick, round)`.
///
/// While the auction is open its maxima are measured in one rounding from
/// the anchor price (the opening tick, or the side price after a partial
/// burn) with `liquidity_max_minus`. Growth a taker paid for lands in the
/// `max_minus` fields together with the fill, so
/// `amount_*_delta <= amount_*_delta_max_minus` holds after every operation.
/// Growth that sync expires untraded is held in the stashed fields until
/// the auction closes, which folds the stash into `max_minus` and links
/// `next_tick`.
#[contracttype]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickDeltas {
    pub amount_in_delta: u128,
    pub amount_out_delta: u128,
    pub amount_in_delta_max_minus: u128,
    pub amount_out_delta_max_minus: u128,
    pub amount_in_delta_max_stashed: u128,
    pub amount_out_delta_max_stashed: u128,
    /// Liquidity still entitled to a share of this auction.
    pub liquidity_max_minus: u128,
    pub epoch_opened: u32,
    /// Tick at which the auction closed, `None` while it is live.
    pub next_tick: Option<i32>,
    /// Round of the auction opened at `next_tick`.
    pub next_round: u32,
    pub anchor_sqrt_price_x64: u128,
    /// Maxima already accounted for at the anchor price.
    pub anchor_amount_in_max: u128,
    pub anchor_amount_out_max: u128,
}

impl TickDeltas {
    pub fn open(liquidity: u128, epoch: u32, sqrt_price_x64: u128) -> Self {
        Self {
            liquidity_max_minus: liquidity,
            epoch_opened: epoch,
            anchor_sqrt_price_x64: sqrt_price_x64,
            ..Default::default()
        }
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        self.next_tick.is_none()
    }

    #[inline]
    pub fn amount_in_max(&self) -> u128 {
        self.amount_in_delta_max_minus + self.amount_in_delta_max_stashed
    }

    #[inline]
    pub fn amount_out_max(&self) -> u128 {
        self.amount_out_delta_max_minus + self.amount_out_delta_max_stashed
    }

    /// Maxima of the whole auction if its side moved from the anchor to
    /// `sqrt_price_to`, as `(amount_in, amount_out)`. Side 0 takes token1
    /// in and pays token0 out; side 1 the reverse.
    pub fn max_at(&self, env: &Env, zero_for_one: bool, sqrt_price_to: u128) -> (u128, u128) {
        let (from, liquidity) = (self.anchor_sqrt_price_x64, self.liquidity_max_minus);
        let (amount_in, amount_out) = if zero_for_one {
            (
                get_amount_1_delta(env, from, sqrt_price_to, liquidity, true),
                get_amount_0_delta(env, from, sqrt_price_to, liquidity, false),
            )
        } else {
            (
                get_amount_0_delta(env, from, sqrt_price_to, liquidity, true),
                get_amount_1_delta(env, from, sqrt_price_to, liquidity, false),
            )
        };
        (self.anchor_amount_in_max + amount_in, self.anchor_amount_out_max + amount_out)
    }

    /// Restart the one-rounding measurement at `sqrt_price_x64`, keeping
    /// the maxima recorded so far. Needed whenever `liquidity_max_minus`
    /// changes on a live auction.
    pub fn reanchor(&mut self, sqrt_price_x64: u128) {
        self.anchor_sqrt_price_x64 = sqrt_price_x64;
        self.anchor_amount_in_max = self.amount_in_max();
        self.anchor_amount_out_max = self.amount_out_max();
    }

    /// Fold the stash into the closed maxima and link the next auction.
    pub fn close(&mut self, next_tick: i32, next_round: u32) {
        self.amount_in_delta_max_minus += self.amount_in_delta_max_stashed;
        self.amount_out_delta_max_minus += self.amount_out_delta_max_stashed;
        self.amount_in_delta_max_stashed = 0;
        self.amount_out_delta_max_stashed = 0;
        self.next_tick = Some(next_tick);
        self.next_round = next_round;
    }

    /// Fill bound every auction must satisfy, live or closed.
    pub fn within_bounds(&self) -> bool {
        self.amount_in_delta <= self.amount_in_delta_max_minus
            && self.amount_out_delta <= self.amount_out_delta_max_minus
    }
}

/// Which bitmap a tick map operation addresses.
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickMapKind {
    Range,
    /// Limit side holding token0, filled as price rises.
    Limit0,
    /// Limit side holding token1, filled as price falls.
    Limit1,
}

impl TickMapKind {
    #[inline]
    pub fn limit(zero_for_one: bool) -> Self {
        if zero_for_one { TickMapKind::Limit0 } else { TickMapKind::Limit1 }
    }
}
