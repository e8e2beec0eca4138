// Constants shared by every LimitSwap package.

// ============================================================
// TICK CONSTANTS
// ============================================================

/// Minimum valid tick.
///
/// The range is narrower than the usual ±887272 so that every sqrt price
/// stays within roughly [2^48, 2^80] and all 256-bit intermediates used by
/// the amount math fit without overflow.
pub const MIN_TICK: i32 = -221818;

/// Maximum valid tick (≈ price 4.29e9).
pub const MAX_TICK: i32 = 221818;

/// Base of the compressed tick index used by the tick map.
pub const TICK_INDEX_OFFSET: i32 = -MIN_TICK;

// ============================================================
// FIXED POINT
// ============================================================

/// 2^64, the Q64.64 scaling factor.
pub const Q64: u128 = 1u128 << 64;

/// Sqrt price for a 1:1 ratio.
pub const SQRT_PRICE_1_1: u128 = Q64;

// ============================================================
// LIQUIDITY CONSTANTS
// ============================================================

/// Minimum liquidity for a range position.
pub const MIN_LIQUIDITY: u128 = 1000;

/// Cap for liquidity per tick, per side and for the global counter.
/// Keeps `L << 64` times a sqrt price below 2^256.
pub const MAX_LIQUIDITY: u128 = 1u128 << 110;

// ============================================================
// SWAP / FEE CONSTANTS
// ============================================================

/// Basis point denominator (100%).
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Highest fee a pool may charge on range steps (10%).
pub const MAX_FEE_BPS: u32 = 1_000;

/// Maximum iterations in the swap loop.
pub const MAX_SWAP_ITERATIONS: u32 = 1024;
