#![no_std]

use soroban_sdk::{contract, contractimpl, token, Address, Env};

// External packages
use limitswap_math::{
    get_amounts_for_liquidity, get_liquidity_for_amounts, get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio,
    max_sqrt_price, min_sqrt_price, MAX_FEE_BPS, MAX_LIQUIDITY, MIN_LIQUIDITY,
};
use limitswap_position::{
    add_limit_liquidity, burn_limit_position, claim_tick, deposit_for_liquidity, liquidity_for_deposit,
    modify_position, stage, update_position, validate_ticks, LimitStage,
};
use limitswap_swap::{execute_swap, resolve_price_limit, swap_start_price, sync_pool, SyncReport};
use limitswap_tick::{fee_growth_inside, update_range_tick, Overlay, TickStore};

// Local modules
mod error;
mod events;
pub mod storage;
pub mod twap;
pub mod types;

pub use error::PoolError;
use events::*;
use storage::*;
use twap::{record_observation, twap_tick, TWAP_BUFFER_SIZE};
use types::{
    LimitPosition, LimitReceipt, LimitTick, PoolConfig, PoolParams, PoolState, RangePosition, RangeReceipt,
    RangeTick, SwapParams, SwapResult, TickDeltas,
};

#[contract]
pub struct LimitSwapPool;

#[contractimpl]
impl LimitSwapPool {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize pool
    ///
    /// # Arguments
    /// * `admin` - Address that deployed and configured the pool
    /// * `token_a` - First token
    /// * `token_b` - Second token
    /// * `params` - Initial price, spacing, fee, TWAP and auction window settings
    pub fn initialize(
        env: Env,
        admin: Address,
        token_a: Address,
        token_b: Address,
        params: PoolParams,
    ) -> Result<(), PoolError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(PoolError::AlreadyInitialized);
        }
        if token_a == token_b {
            return Err(PoolError::SameToken);
        }
        if params.fee_bps > MAX_FEE_BPS {
            return Err(PoolError::InvalidFee);
        }
        if params.tick_spacing <= 0 {
            return Err(PoolError::InvalidTickSpacing);
        }
        if !(min_sqrt_price()..=max_sqrt_price()).contains(&params.sqrt_price_x64) {
            return Err(PoolError::InvalidPrice);
        }
        if params.sample_count == 0 || params.sample_count > TWAP_BUFFER_SIZE {
            return Err(PoolError::InvalidTwapConfig);
        }
        if params.auction_window < 0 {
            return Err(PoolError::InvalidAuctionWindow);
        }

        let (token0, token1) = if token_a < token_b { (token_a, token_b) } else { (token_b, token_a) };
        let tick = get_tick_at_sqrt_ratio(params.sqrt_price_x64);

        let config = PoolConfig {
            admin,
            token0,
            token1,
            tick_spacing: params.tick_spacing,
            fee_bps: params.fee_bps,
            twap_length: params.twap_length,
            sample_count: params.sample_count,
            auction_window: params.auction_window,
        };

        write_config(&env, &config);
        write_state(&env, &PoolState::new(params.sqrt_price_x64, tick));
        write_unlocked(&env, true);
        record_observation(&env, tick);

        emit_initialize(
            &env,
            &config.token0,
            &config.token1,
            params.sqrt_price_x64,
            tick,
            params.fee_bps,
            params.tick_spacing,
        );
        Ok(())
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    pub fn is_initialized(env: Env) -> bool {
        is_initialized(&env)
    }

    pub fn get_pool_state(env: Env) -> Result<PoolState, PoolError> {
        read_state(&env)
    }

    pub fn get_pool_config(env: Env) -> Result<PoolConfig, PoolError> {
        read_config(&env)
    }

    pub fn get_limit_tick(env: Env, zero_for_one: bool, tick: i32) -> LimitTick {
        ContractStore::new(&env).limit_tick(zero_for_one, tick)
    }

    /// Auction record at `tick` for the given round, if one is open or unclaimed
    pub fn get_tick_deltas(env: Env, zero_for_one: bool, tick: i32, round: u32) -> Option<TickDeltas> {
        ContractStore::new(&env).tick_deltas(zero_for_one, tick, round)
    }

    pub fn get_range_tick(env: Env, tick: i32) -> RangeTick {
        ContractStore::new(&env).range_tick(tick)
    }

    pub fn get_limit_position(env: Env, position_id: u32) -> Result<LimitPosition, PoolError> {
        read_limit_position(&env, position_id).ok_or(PoolError::PositionNotFound)
    }

    pub fn get_range_position(env: Env, position_id: u32) -> Result<RangePosition, PoolError> {
        read_range_position(&env, position_id).ok_or(PoolError::PositionNotFound)
    }

    /// Tick a `burn_limit` on this position must name
    pub fn get_claim_tick(env: Env, position_id: u32) -> Result<i32, PoolError> {
        let state = read_state(&env)?;
        let pos = read_limit_position(&env, position_id).ok_or(PoolError::PositionNotFound)?;
        claim_tick(&ContractStore::new(&env), &state, &pos).ok_or(PoolError::WrongTickClaimedAt)
    }

    pub fn get_twap_tick(env: Env) -> Result<i32, PoolError> {
        let config = read_config(&env)?;
        twap_tick(&env, config.twap_length, config.sample_count)
    }

    /// Simulate `swap` against the current state without writing anything.
    ///
    /// Runs the same sync and swap code as `swap` over a scratch copy of the
    /// tick ledgers, so its result matches a `swap` sent in the same ledger.
    pub fn quote(env: Env, params: SwapParams) -> Result<SwapResult, PoolError> {
        let config = read_config(&env)?;
        let mut state = read_state(&env)?;
        let mut store = Overlay::new(&env, ContractStore::new(&env));

        let (_, result) = Self::run_swap(&env, &mut store, &mut state, &config, &params)?;
        Ok(result)
    }

    // ========================================================
    // SWAP
    // ========================================================

    /// Execute a swap
    ///
    /// # Arguments
    /// * `sender` - Pays the input and receives the output
    /// * `params` - Direction, amount, exact in/out, price limit and amount limit
    pub fn swap(env: Env, sender: Address, params: SwapParams) -> Result<SwapResult, PoolError> {
        sender.require_auth();
        lock(&env)?;

        let config = read_config(&env)?;
        let mut state = read_state(&env)?;
        let mut store = ContractStore::new(&env);

        let (report, result) = Self::run_swap(&env, &mut store, &mut state, &config, &params)?;
        write_state(&env, &state);

        let (token_in, token_out) = if params.zero_for_one {
            (&config.token0, &config.token1)
        } else {
            (&config.token1, &config.token0)
        };
        receive(&env, token_in, &sender, result.amount_in);
        pay(&env, token_out, &sender, result.amount_out);

        record_observation(&env, state.range.tick);
        if report.total() > 0 {
            emit_sync(&env, report.crossed_0, report.crossed_1, state.epoch);
        }
        emit_swap(
            &env,
            &sender,
            params.zero_for_one,
            result.amount_in,
            result.amount_out,
            result.sqrt_price_x64,
            result.tick,
            result.fee_amount,
        );

        unlock(&env);
        Ok(result)
    }

    /// Move both limit sides to the TWAP tick without trading. A pool
    /// without enough observations crosses nothing.
    ///
    /// # Returns
    /// Number of limit ticks crossed
    pub fn sync(env: Env) -> Result<u32, PoolError> {
        lock(&env)?;

        let config = read_config(&env)?;
        let mut state = read_state(&env)?;
        let mut store = ContractStore::new(&env);

        let report = Self::sync_if_ready(&env, &mut store, &mut state, &config);
        write_state(&env, &state);

        record_observation(&env, state.range.tick);
        emit_sync(&env, report.crossed_0, report.crossed_1, state.epoch);

        unlock(&env);
        Ok(report.total())
    }

    // ========================================================
    // LIMIT ORDERS
    // ========================================================

    /// Place a limit order, or add to one that has not been entered yet
    ///
    /// # Arguments
    /// * `owner` - Order owner, pays the deposit
    /// * `lower` - Lower tick, multiple of the tick spacing
    /// * `upper` - Upper tick, multiple of the tick spacing
    /// * `amount` - Deposit in token0 (`zero_for_one`) or token1
    /// * `zero_for_one` - Sell token0 as price rises, otherwise sell token1 as it falls
    /// * `position_id` - Existing position to add to, or 0 for a new one
    pub fn mint_limit(
        env: Env,
        owner: Address,
        lower: i32,
        upper: i32,
        amount: i128,
        zero_for_one: bool,
        position_id: u32,
    ) -> Result<LimitReceipt, PoolError> {
        owner.require_auth();
        lock(&env)?;

        let config = read_config(&env)?;
        let mut state = read_state(&env)?;
        let mut store = ContractStore::new(&env);

        validate_ticks(lower, upper, config.tick_spacing)?;
        if amount <= 0 {
            return Err(PoolError::InvalidAmount);
        }

        let twap = twap_tick(&env, config.twap_length, config.sample_count)?;
        let report = sync_pool(&env, &mut store, &mut state, twap);

        let mut pos = if position_id == 0 {
            LimitPosition {
                owner: owner.clone(),
                lower,
                upper,
                zero_for_one,
                liquidity: 0,
                epoch_last: state.epoch,
                round: state.side(zero_for_one).round,
            }
        } else {
            let pos = read_limit_position(&env, position_id).ok_or(PoolError::PositionNotFound)?;
            if pos.owner != owner {
                return Err(PoolError::PositionOwnerMismatch);
            }
            if pos.lower != lower || pos.upper != upper || pos.zero_for_one != zero_for_one {
                return Err(PoolError::InvalidTickRange);
            }
            if stage(&store, &pos) != LimitStage::NotEntered {
                return Err(PoolError::PositionAlreadyEntered);
            }
            pos
        };

        check_safety_window(&config, &state, twap, pos.entry_tick(), zero_for_one)?;

        let liquidity = liquidity_for_deposit(&env, lower, upper, amount as u128, zero_for_one);
        if liquidity == 0 {
            return Err(PoolError::LiquidityTooLow);
        }
        for tick in [lower, upper] {
            let gross = store.limit_tick(zero_for_one, tick).liquidity_gross;
            if gross.saturating_add(liquidity) > MAX_LIQUIDITY {
                return Err(PoolError::LiquidityOverflow);
            }
        }
        if !state.add_global_liquidity(liquidity) {
            return Err(PoolError::LiquidityOverflow);
        }

        let deposit = to_amount(deposit_for_liquidity(&env, lower, upper, liquidity, zero_for_one))?;
        add_limit_liquidity(&mut store, &mut pos, liquidity);

        let id = if position_id == 0 { state.next_position_id() } else { position_id };
        write_limit_position(&env, id, &pos);
        write_state(&env, &state);

        let token = if zero_for_one { &config.token0 } else { &config.token1 };
        receive(&env, token, &owner, deposit);

        record_observation(&env, state.range.tick);
        if report.total() > 0 {
            emit_sync(&env, report.crossed_0, report.crossed_1, state.epoch);
        }
        emit_mint_limit(&env, &owner, id, lower, upper, zero_for_one, liquidity, deposit);

        unlock(&env);
        Ok(LimitReceipt { position_id: id, liquidity, deposit })
    }

    /// Claim fills and burn part of a limit position
    ///
    /// # Arguments
    /// * `owner` - Position owner
    /// * `position_id` - Position to claim from
    /// * `claim_at` - Tick returned by `get_claim_tick`
    /// * `burn_percent` - Share of the liquidity to burn, in basis points
    ///
    /// # Returns
    /// `(amount_in, amount_out)`: tokens takers paid, then unfilled tokens of
    /// the order's own side
    pub fn burn_limit(
        env: Env,
        owner: Address,
        position_id: u32,
        claim_at: i32,
        burn_percent: u32,
    ) -> Result<(i128, i128), PoolError> {
        owner.require_auth();
        lock(&env)?;

        let config = read_config(&env)?;
        let mut state = read_state(&env)?;
        let mut store = ContractStore::new(&env);

        let mut pos = read_limit_position(&env, position_id).ok_or(PoolError::PositionNotFound)?;
        if pos.owner != owner {
            return Err(PoolError::PositionOwnerMismatch);
        }

        let report = Self::sync_if_ready(&env, &mut store, &mut state, &config);
        let outcome = burn_limit_position(&env, &mut store, &mut state, &mut pos, claim_at, burn_percent)?;
        state.remove_global_liquidity(outcome.liquidity_burned);

        if outcome.closed {
            remove_limit_position(&env, position_id);
        } else {
            write_limit_position(&env, position_id, &pos);
        }
        write_state(&env, &state);

        let amount_in = to_amount(outcome.amount_in)?;
        let amount_out = to_amount(outcome.amount_out)?;
        let (token_in, token_out) = if pos.zero_for_one {
            (&config.token1, &config.token0)
        } else {
            (&config.token0, &config.token1)
        };
        pay(&env, token_in, &owner, amount_in);
        pay(&env, token_out, &owner, amount_out);

        record_observation(&env, state.range.tick);
        if report.total() > 0 {
            emit_sync(&env, report.crossed_0, report.crossed_1, state.epoch);
        }
        emit_burn_limit(&env, &owner, position_id, claim_at, outcome.liquidity_burned, amount_in, amount_out);

        unlock(&env);
        Ok((amount_in, amount_out))
    }

    // ========================================================
    // RANGE LIQUIDITY
    // ========================================================

    /// Add range liquidity
    ///
    /// # Arguments
    /// * `owner` - Position owner, pays both tokens
    /// * `lower` / `upper` - Range bounds, multiples of the tick spacing
    /// * `amount0_desired` / `amount1_desired` - Maximum amounts to deposit
    /// * `amount0_min` / `amount1_min` - Minimum amounts actually deposited
    /// * `position_id` - Existing position to add to, or 0 for a new one
    pub fn mint_range(
        env: Env,
        owner: Address,
        lower: i32,
        upper: i32,
        amount0_desired: i128,
        amount1_desired: i128,
        amount0_min: i128,
        amount1_min: i128,
        position_id: u32,
    ) -> Result<RangeReceipt, PoolError> {
        owner.require_auth();
        lock(&env)?;

        let config = read_config(&env)?;
        let mut state = read_state(&env)?;
        let mut store = ContractStore::new(&env);

        validate_ticks(lower, upper, config.tick_spacing)?;
        if amount0_desired < 0 || amount1_desired < 0 || (amount0_desired == 0 && amount1_desired == 0) {
            return Err(PoolError::InvalidAmount);
        }

        let mut pos = if position_id == 0 {
            RangePosition::new(owner.clone(), lower, upper)
        } else {
            let pos = read_range_position(&env, position_id).ok_or(PoolError::PositionNotFound)?;
            if pos.owner != owner {
                return Err(PoolError::PositionOwnerMismatch);
            }
            if pos.lower != lower || pos.upper != upper {
                return Err(PoolError::InvalidTickRange);
            }
            pos
        };

        let sqrt_lower = get_sqrt_ratio_at_tick(lower);
        let sqrt_upper = get_sqrt_ratio_at_tick(upper);
        let price = state.range.sqrt_price_x64;

        let liquidity = get_liquidity_for_amounts(
            &env,
            amount0_desired as u128,
            amount1_desired as u128,
            sqrt_lower,
            sqrt_upper,
            price,
        );
        if liquidity < MIN_LIQUIDITY {
            return Err(PoolError::LiquidityTooLow);
        }

        let (amount0, amount1) = get_amounts_for_liquidity(&env, liquidity, sqrt_lower, sqrt_upper, price, true);
        let amount0 = to_amount(amount0)?;
        let amount1 = to_amount(amount1)?;
        if amount0 < amount0_min || amount1 < amount1_min {
            return Err(PoolError::SlippageExceeded);
        }

        for tick in [lower, upper] {
            if store.range_tick(tick).liquidity_gross.saturating_add(liquidity) > MAX_LIQUIDITY {
                return Err(PoolError::LiquidityOverflow);
            }
        }
        if !state.add_global_liquidity(liquidity) {
            return Err(PoolError::LiquidityOverflow);
        }

        let range = &state.range;
        update_range_tick(&mut store, lower, range.tick, liquidity as i128, range.fee_growth_global_0, range.fee_growth_global_1, false);
        update_range_tick(&mut store, upper, range.tick, liquidity as i128, range.fee_growth_global_0, range.fee_growth_global_1, true);

        let (inside_0, inside_1) = fee_growth_inside(
            &store,
            lower,
            upper,
            range.tick,
            range.fee_growth_global_0,
            range.fee_growth_global_1,
        );
        modify_position(&env, &mut pos, liquidity as i128, inside_0, inside_1)?;

        if lower <= state.range.tick && state.range.tick < upper {
            state.range.liquidity += liquidity;
        }

        let id = if position_id == 0 { state.next_position_id() } else { position_id };
        write_range_position(&env, id, &pos);
        write_state(&env, &state);

        receive(&env, &config.token0, &owner, amount0);
        receive(&env, &config.token1, &owner, amount1);

        record_observation(&env, state.range.tick);
        emit_mint_range(&env, &owner, id, liquidity, amount0, amount1);

        unlock(&env);
        Ok(RangeReceipt { position_id: id, liquidity, amount0, amount1 })
    }

    /// Remove range liquidity. Principal is paid out now; fees stay owed
    /// until `collect_range`.
    pub fn burn_range(env: Env, owner: Address, position_id: u32, liquidity: u128) -> Result<(i128, i128), PoolError> {
        owner.require_auth();
        lock(&env)?;

        let config = read_config(&env)?;
        let mut state = read_state(&env)?;
        let mut store = ContractStore::new(&env);

        let mut pos = read_range_position(&env, position_id).ok_or(PoolError::PositionNotFound)?;
        if pos.owner != owner {
            return Err(PoolError::PositionOwnerMismatch);
        }
        if liquidity > pos.liquidity {
            return Err(PoolError::NotEnoughPositionLiquidity);
        }

        // fee growth inside must be read before the boundaries can be cleared
        let range = &state.range;
        let (inside_0, inside_1) = fee_growth_inside(
            &store,
            pos.lower,
            pos.upper,
            range.tick,
            range.fee_growth_global_0,
            range.fee_growth_global_1,
        );
        modify_position(&env, &mut pos, -(liquidity as i128), inside_0, inside_1)?;

        let (mut amount0, mut amount1) = (0, 0);
        if liquidity > 0 {
            update_range_tick(&mut store, pos.lower, range.tick, -(liquidity as i128), range.fee_growth_global_0, range.fee_growth_global_1, false);
            update_range_tick(&mut store, pos.upper, range.tick, -(liquidity as i128), range.fee_growth_global_0, range.fee_growth_global_1, true);

            let (out0, out1) = get_amounts_for_liquidity(
                &env,
                liquidity,
                get_sqrt_ratio_at_tick(pos.lower),
                get_sqrt_ratio_at_tick(pos.upper),
                range.sqrt_price_x64,
                false,
            );
            amount0 = to_amount(out0)?;
            amount1 = to_amount(out1)?;

            if pos.lower <= state.range.tick && state.range.tick < pos.upper {
                state.range.liquidity = state.range.liquidity.saturating_sub(liquidity);
            }
            state.remove_global_liquidity(liquidity);
        }

        if pos.is_empty() {
            remove_range_position(&env, position_id);
        } else {
            write_range_position(&env, position_id, &pos);
        }
        write_state(&env, &state);

        pay(&env, &config.token0, &owner, amount0);
        pay(&env, &config.token1, &owner, amount1);

        record_observation(&env, state.range.tick);
        emit_burn_range(&env, &owner, position_id, liquidity, amount0, amount1);

        unlock(&env);
        Ok((amount0, amount1))
    }

    /// Pay out fees owed to a range position
    pub fn collect_range(env: Env, owner: Address, position_id: u32) -> Result<(u128, u128), PoolError> {
        owner.require_auth();
        lock(&env)?;

        let config = read_config(&env)?;
        let state = read_state(&env)?;
        let store = ContractStore::new(&env);

        let mut pos = read_range_position(&env, position_id).ok_or(PoolError::PositionNotFound)?;
        if pos.owner != owner {
            return Err(PoolError::PositionOwnerMismatch);
        }

        if pos.liquidity > 0 {
            let range = &state.range;
            let (inside_0, inside_1) = fee_growth_inside(
                &store,
                pos.lower,
                pos.upper,
                range.tick,
                range.fee_growth_global_0,
                range.fee_growth_global_1,
            );
            update_position(&env, &mut pos, inside_0, inside_1);
        }

        let (amount0, amount1) = (pos.tokens_owed_0, pos.tokens_owed_1);
        pos.tokens_owed_0 = 0;
        pos.tokens_owed_1 = 0;

        if pos.is_empty() {
            remove_range_position(&env, position_id);
        } else {
            write_range_position(&env, position_id, &pos);
        }

        pay(&env, &config.token0, &owner, to_amount(amount0)?);
        pay(&env, &config.token1, &owner, to_amount(amount1)?);

        emit_collect(&env, &owner, position_id, amount0, amount1);

        unlock(&env);
        Ok((amount0, amount1))
    }

    // ========================================================
    // POSITION OWNERSHIP
    // ========================================================

    /// Hand a range or limit position over to `to`
    pub fn transfer_position(env: Env, from: Address, to: Address, position_id: u32) -> Result<(), PoolError> {
        from.require_auth();
        lock(&env)?;

        if let Some(mut pos) = read_limit_position(&env, position_id) {
            if pos.owner != from {
                return Err(PoolError::PositionOwnerMismatch);
            }
            pos.owner = to.clone();
            write_limit_position(&env, position_id, &pos);
        } else if let Some(mut pos) = read_range_position(&env, position_id) {
            if pos.owner != from {
                return Err(PoolError::PositionOwnerMismatch);
            }
            pos.owner = to.clone();
            write_range_position(&env, position_id, &pos);
        } else {
            return Err(PoolError::PositionNotFound);
        }

        emit_transfer(&env, &from, &to, position_id);

        unlock(&env);
        Ok(())
    }
}

// ============================================================
// INTERNAL HELPERS
// ============================================================

impl LimitSwapPool {
    /// Sync, resolve the price limit and run the swap engine. Shared by
    /// `swap` and `quote`.
    fn run_swap<S: TickStore>(
        env: &Env,
        store: &mut S,
        state: &mut PoolState,
        config: &PoolConfig,
        params: &SwapParams,
    ) -> Result<(SyncReport, SwapResult), PoolError> {
        if params.amount <= 0 || params.amount_limit < 0 {
            return Err(PoolError::InvalidAmount);
        }

        let report = Self::sync_if_ready(env, store, state, config);

        let start = swap_start_price(state, params.zero_for_one);
        let limit = resolve_price_limit(start, params.sqrt_price_limit_x64, params.zero_for_one)
            .ok_or(PoolError::InvalidPriceLimit)?;

        let result = execute_swap(
            env,
            store,
            state,
            config.fee_bps,
            params.zero_for_one,
            params.amount as u128,
            params.exact_in,
            limit,
        );

        if params.amount_limit > 0 {
            let within = if params.exact_in {
                result.amount_out >= params.amount_limit
            } else {
                result.amount_in <= params.amount_limit
            };
            if !within {
                return Err(PoolError::SlippageExceeded);
            }
        }

        Ok((report, result))
    }

    /// Sync to the TWAP tick when enough history exists; a young pool
    /// trades on its current state.
    fn sync_if_ready<S: TickStore>(env: &Env, store: &mut S, state: &mut PoolState, config: &PoolConfig) -> SyncReport {
        match twap_tick(env, config.twap_length, config.sample_count) {
            Ok(twap) => sync_pool(env, store, state, twap),
            Err(_) => SyncReport::default(),
        }
    }
}

/// Entry ticks must lie strictly beyond the live tick plus the auction
/// window in the side's fill direction. The live tick is the furthest of the
/// side's own tick and the TWAP tick.
fn check_safety_window(
    config: &PoolConfig,
    state: &PoolState,
    twap: i32,
    entry_tick: i32,
    zero_for_one: bool,
) -> Result<(), PoolError> {
    let side = state.side(zero_for_one);
    let clear = if zero_for_one {
        entry_tick > side.tick.max(twap).saturating_add(config.auction_window)
    } else {
        entry_tick < side.tick.min(twap).saturating_sub(config.auction_window)
    };
    if clear {
        Ok(())
    } else {
        Err(PoolError::PositionInsideSafetyWindow)
    }
}

fn lock(env: &Env) -> Result<(), PoolError> {
    if !is_initialized(env) {
        return Err(PoolError::NotInitialized);
    }
    if !is_unlocked(env) {
        return Err(PoolError::Locked);
    }
    write_unlocked(env, false);
    Ok(())
}

#[inline]
fn unlock(env: &Env) {
    write_unlocked(env, true);
}

#[inline]
fn to_amount(amount: u128) -> Result<i128, PoolError> {
    i128::try_from(amount).map_err(|_| PoolError::LiquidityOverflow)
}

/// Pull `amount` of `token` from `from` into the pool
fn receive(env: &Env, token: &Address, from: &Address, amount: i128) {
    if amount > 0 {
        token::Client::new(env, token).transfer(from, &env.current_contract_address(), &amount);
    }
}

/// Send `amount` of `token` from the pool to `to`
fn pay(env: &Env, token: &Address, to: &Address, amount: i128) {
    if amount > 0 {
        token::Client::new(env, token).transfer(&env.current_contract_address(), to, &amount);
    }
}
