// Limit positions

use limitswap_math::{
    get_amount_0_delta, get_amount_1_delta, get_liquidity_for_amount0, get_liquidity_for_amount1,
    get_sqrt_ratio_at_tick,
};
use limitswap_tick::{anchor_limit_tick, TickStore};
use soroban_sdk::{contracttype, Address, Env};

/// A one-sided order spread over `[lower, upper]`.
///
/// `zero_for_one` orders hold token0 and are filled as price rises from
/// `lower` to `upper`; the others hold token1 and are filled falling from
/// `upper` to `lower`. `epoch_last` and `round` anchor the position in the
/// auction history: only auctions opened after `epoch_last`, in `round` or
/// later, belong to it.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LimitPosition {
    pub owner: Address,
    pub lower: i32,
    pub upper: i32,
    pub zero_for_one: bool,
    pub liquidity: u128,
    pub epoch_last: u32,
    pub round: u32,
}

impl LimitPosition {
    #[inline]
    pub fn entry_tick(&self) -> i32 {
        if self.zero_for_one { self.lower } else { self.upper }
    }

    #[inline]
    pub fn exit_tick(&self) -> i32 {
        if self.zero_for_one { self.upper } else { self.lower }
    }

    pub(crate) fn set_entry_tick(&mut self, tick: i32) {
        if self.zero_for_one {
            self.lower = tick;
        } else {
            self.upper = tick;
        }
    }
}

/// Liquidity bought by depositing `amount` of the order's token.
pub fn liquidity_for_deposit(env: &Env, lower: i32, upper: i32, amount: u128, zero_for_one: bool) -> u128 {
    let sqrt_lower = get_sqrt_ratio_at_tick(lower);
    let sqrt_upper = get_sqrt_ratio_at_tick(upper);
    if zero_for_one {
        get_liquidity_for_amount0(env, sqrt_lower, sqrt_upper, amount)
    } else {
        get_liquidity_for_amount1(env, sqrt_lower, sqrt_upper, amount)
    }
}

/// Token amount `liquidity` represents between two sqrt prices on the
/// order's side.
pub fn order_amount(env: &Env, sqrt_price_a: u128, sqrt_price_b: u128, liquidity: u128, zero_for_one: bool, round_up: bool) -> u128 {
    if zero_for_one {
        get_amount_0_delta(env, sqrt_price_a, sqrt_price_b, liquidity, round_up)
    } else {
        get_amount_1_delta(env, sqrt_price_a, sqrt_price_b, liquidity, round_up)
    }
}

/// Deposit owed for `liquidity` over the whole position, rounded up.
pub fn deposit_for_liquidity(env: &Env, lower: i32, upper: i32, liquidity: u128, zero_for_one: bool) -> u128 {
    order_amount(
        env,
        get_sqrt_ratio_at_tick(lower),
        get_sqrt_ratio_at_tick(upper),
        liquidity,
        zero_for_one,
        true,
    )
}

/// Anchor freshly minted liquidity on both boundaries of `pos`.
pub fn add_limit_liquidity<S: TickStore>(store: &mut S, pos: &mut LimitPosition, liquidity: u128) {
    anchor_limit_tick(store, pos.zero_for_one, pos.entry_tick(), liquidity, true);
    anchor_limit_tick(store, pos.zero_for_one, pos.exit_tick(), liquidity, false);
    pos.liquidity += liquidity;
}
