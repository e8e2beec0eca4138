// Pool configuration and call receipts

use soroban_sdk::{contracttype, Address};

pub use limitswap_position::{LimitPosition, RangePosition};
pub use limitswap_swap::{SwapParams, SwapResult};
pub use limitswap_tick::{LimitSide, LimitTick, PoolState, RangeState, RangeTick, TickDeltas};

// ============================================================
// POOL CONFIGURATION
// ============================================================

/// Parameters accepted by `initialize`.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolParams {
    /// Initial sqrt price of token0 in token1, Q64.64
    pub sqrt_price_x64: u128,
    pub tick_spacing: i32,
    /// Fee charged on range swap steps, in basis points
    pub fee_bps: u32,
    /// Averaging window of the TWAP tick in seconds; zero uses the newest observation
    pub twap_length: u64,
    /// Observations required before the TWAP is trusted
    pub sample_count: u32,
    /// Ticks around the live auction where limit orders cannot be placed
    pub auction_window: i32,
}

/// Immutable after `initialize`.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    pub admin: Address,
    /// Token0 address (sorted: token0 < token1)
    pub token0: Address,
    pub token1: Address,
    pub tick_spacing: i32,
    pub fee_bps: u32,
    pub twap_length: u64,
    pub sample_count: u32,
    pub auction_window: i32,
}

// ============================================================
// RECEIPTS
// ============================================================

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeReceipt {
    pub position_id: u32,
    pub liquidity: u128,
    pub amount0: i128,
    pub amount1: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LimitReceipt {
    pub position_id: u32,
    pub liquidity: u128,
    /// Tokens actually pulled from the owner
    pub deposit: i128,
}
