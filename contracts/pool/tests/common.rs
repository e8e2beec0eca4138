#![allow(dead_code)]

use limitswap_math::Q64;
use limitswap_pool::types::{PoolParams, SwapParams};
use limitswap_pool::{LimitSwapPool, LimitSwapPoolClient};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{token, Address, Env};

// Test constants
pub const E18: i128 = 1_000_000_000_000_000_000;
pub const DEFAULT_FEE_BPS: u32 = 30; // 0.30%
pub const DEFAULT_TICK_SPACING: i32 = 10;
pub const START_TIME: u64 = 1_000;

pub fn setup_env() -> Env {
    let env = Env::default();
    env.mock_all_auths();
    env.cost_estimate().budget().reset_unlimited();
    set_time(&env, START_TIME);
    env
}

/// Price 1.0, no TWAP lag, no auction window
pub fn default_params() -> PoolParams {
    params_at(Q64)
}

pub fn params_at(sqrt_price_x64: u128) -> PoolParams {
    PoolParams {
        sqrt_price_x64,
        tick_spacing: DEFAULT_TICK_SPACING,
        fee_bps: DEFAULT_FEE_BPS,
        twap_length: 0,
        sample_count: 1,
        auction_window: 0,
    }
}

/// Setup pool with the given parameters. Returns the client and the sorted
/// token pair.
pub fn setup_pool<'a>(env: &'a Env, params: &PoolParams) -> (LimitSwapPoolClient<'a>, Address, Address) {
    let admin = Address::generate(env);
    let token_a = create_token(env, &admin);
    let token_b = create_token(env, &admin);

    let pool_id = env.register(LimitSwapPool, ());
    let client = LimitSwapPoolClient::new(env, &pool_id);
    client.initialize(&admin, &token_a, &token_b, params);

    let config = client.get_pool_config();
    (client, config.token0, config.token1)
}

/// Create a test token
pub fn create_token(env: &Env, admin: &Address) -> Address {
    let token_id = env.register_stellar_asset_contract_v2(admin.clone());
    token_id.address()
}

/// Mint tokens to an address
pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    use soroban_sdk::token::StellarAssetClient;
    let client = StellarAssetClient::new(env, token);
    client.mint(to, &amount);
}

pub fn balance(env: &Env, token: &Address, who: &Address) -> i128 {
    token::Client::new(env, token).balance(who)
}

/// Fresh account holding `amount` of both tokens
pub fn funded_user(env: &Env, token0: &Address, token1: &Address, amount: i128) -> Address {
    let user = Address::generate(env);
    mint_tokens(env, token0, &user, amount);
    mint_tokens(env, token1, &user, amount);
    user
}

pub fn set_time(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|li| li.timestamp = timestamp);
}

/// Swap without price or amount limits
pub fn swap_params(zero_for_one: bool, amount: i128, exact_in: bool) -> SwapParams {
    SwapParams {
        zero_for_one,
        amount,
        exact_in,
        sqrt_price_limit_x64: 0,
        amount_limit: 0,
    }
}
