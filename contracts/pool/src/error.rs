// Pool error codes
//
// One contracterror enum for every entry point, grouped by kind so that
// callers can tell a bad argument from a pool that is not ready yet.

use limitswap_position::PositionError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    // Initialization errors (100-199)
    /// Pool has already been initialized
    AlreadyInitialized = 100,
    /// Pool has not been initialized
    NotInitialized = 101,

    // Configuration errors (200-299)
    /// Fee above `MAX_FEE_BPS`
    InvalidFee = 200,
    /// Tick spacing must be positive
    InvalidTickSpacing = 201,
    /// Initial price outside the supported range
    InvalidPrice = 202,
    /// Both sides of the pair are the same token
    SameToken = 203,
    /// Sample count must be between 1 and the observation buffer size
    InvalidTwapConfig = 204,
    /// Auction window must not be negative
    InvalidAuctionWindow = 205,

    // Bounds errors (300-399)
    InvalidTickRange = 300,
    LowerTickOutsideTickSpacing = 301,
    UpperTickOutsideTickSpacing = 302,
    TickOutOfRange = 303,
    /// Claim tick is not where the position's auction currently stands
    WrongTickClaimedAt = 304,

    // Insufficiency errors (400-499)
    /// Burn larger than the position, including a percentage above 10_000
    NotEnoughPositionLiquidity = 400,
    /// Liquidity would exceed `MAX_LIQUIDITY`
    LiquidityOverflow = 401,
    /// Amount buys no liquidity
    LiquidityTooLow = 402,
    /// Amount must be positive
    InvalidAmount = 403,

    // Ordering errors (500-599)
    /// Liquidity can only be added before the entry tick is crossed
    PositionAlreadyEntered = 500,
    /// Entry tick too close to the live auction
    PositionInsideSafetyWindow = 501,

    // Authorization errors (600-699)
    PositionOwnerMismatch = 600,
    PositionNotFound = 601,

    // Readiness errors (700-799)
    /// Not enough TWAP history yet
    WaitUntilEnoughObservations = 700,

    // Concurrency errors (800-899)
    /// Pool is already executing an operation
    Locked = 800,

    // Swap errors (900-999)
    /// Output below the minimum or input above the maximum
    SlippageExceeded = 900,
    /// Price limit on the wrong side of the current price or out of range
    InvalidPriceLimit = 901,
}

impl From<PositionError> for PoolError {
    fn from(err: PositionError) -> Self {
        match err {
            PositionError::InvalidTickRange => PoolError::InvalidTickRange,
            PositionError::LowerTickOutsideTickSpacing => PoolError::LowerTickOutsideTickSpacing,
            PositionError::UpperTickOutsideTickSpacing => PoolError::UpperTickOutsideTickSpacing,
            PositionError::TickOutOfRange => PoolError::TickOutOfRange,
            PositionError::WrongTickClaimedAt => PoolError::WrongTickClaimedAt,
            PositionError::NotEnoughPositionLiquidity => PoolError::NotEnoughPositionLiquidity,
        }
    }
}
