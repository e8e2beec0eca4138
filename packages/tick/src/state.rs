// Pool state shared by the sync, swap and claim engines

use limitswap_math::constants::MAX_LIQUIDITY;
use soroban_sdk::contracttype;

/// Concentrated-liquidity curve.
#[contracttype]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RangeState {
    pub sqrt_price_x64: u128,
    pub tick: i32,
    /// Liquidity active at the current tick
    pub liquidity: u128,
    pub fee_growth_global_0: u128,
    pub fee_growth_global_1: u128,
}

/// One direction of the limit book.
///
/// `sqrt_price_x64`/`tick` only move in the side's fill direction, except for
/// a rewind while the side holds no liquidity.
#[contracttype]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LimitSide {
    pub sqrt_price_x64: u128,
    pub tick: i32,
    pub liquidity: u128,
    /// Bumped whenever a tick reopens while an older auction there is unclaimed.
    pub round: u32,
    /// Tick of the live auction, `None` while idle.
    pub auction_tick: Option<i32>,
}

impl LimitSide {
    pub fn at(sqrt_price_x64: u128, tick: i32) -> Self {
        Self { sqrt_price_x64, tick, ..Default::default() }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.liquidity > 0
    }
}

#[contracttype]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PoolState {
    pub range: RangeState,
    /// Side holding token0, filled as price rises
    pub limit0: LimitSide,
    /// Side holding token1, filled as price falls
    pub limit1: LimitSide,
    /// Incremented on every limit tick crossing
    pub epoch: u32,
    pub position_id_next: u32,
    /// Range plus limit liquidity, capped by `MAX_LIQUIDITY`
    pub liquidity_global: u128,
}

impl PoolState {
    pub fn new(sqrt_price_x64: u128, tick: i32) -> Self {
        Self {
            range: RangeState { sqrt_price_x64, tick, ..Default::default() },
            limit0: LimitSide::at(sqrt_price_x64, tick),
            limit1: LimitSide::at(sqrt_price_x64, tick),
            epoch: 0,
            position_id_next: 1,
            liquidity_global: 0,
        }
    }

    #[inline]
    pub fn side(&self, zero_for_one: bool) -> &LimitSide {
        if zero_for_one { &self.limit0 } else { &self.limit1 }
    }

    #[inline]
    pub fn side_mut(&mut self, zero_for_one: bool) -> &mut LimitSide {
        if zero_for_one { &mut self.limit0 } else { &mut self.limit1 }
    }

    /// Account `amount` of new liquidity. Returns `false` past the global cap.
    pub fn add_global_liquidity(&mut self, amount: u128) -> bool {
        match self.liquidity_global.checked_add(amount) {
            Some(total) if total <= MAX_LIQUIDITY => {
                self.liquidity_global = total;
                true
            }
            _ => false,
        }
    }

    pub fn remove_global_liquidity(&mut self, amount: u128) {
        self.liquidity_global = self.liquidity_global.saturating_sub(amount);
    }

    pub fn next_position_id(&mut self) -> u32 {
        let id = self.position_id_next;
        self.position_id_next += 1;
        id
    }
}
