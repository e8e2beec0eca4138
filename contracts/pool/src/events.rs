use soroban_sdk::{Address, Env, Symbol};

// ============================================================
// EVENT NAMES
// ============================================================

pub struct EventName;

impl EventName {
    pub fn initialize(env: &Env) -> Symbol {
        Symbol::new(env, "initialize")
    }

    pub fn mint_limit(env: &Env) -> Symbol {
        Symbol::new(env, "mint_limit")
    }

    pub fn burn_limit(env: &Env) -> Symbol {
        Symbol::new(env, "burn_limit")
    }

    pub fn mint_range(env: &Env) -> Symbol {
        Symbol::new(env, "mint_range")
    }

    pub fn burn_range(env: &Env) -> Symbol {
        Symbol::new(env, "burn_range")
    }

    pub fn collect(env: &Env) -> Symbol {
        Symbol::new(env, "collect")
    }

    pub fn swap(env: &Env) -> Symbol {
        Symbol::new(env, "swap")
    }

    pub fn sync(env: &Env) -> Symbol {
        Symbol::new(env, "sync")
    }

    pub fn transfer(env: &Env) -> Symbol {
        Symbol::new(env, "transfer")
    }
}

// ============================================================
// EVENT EMITTERS
// ============================================================

pub fn emit_initialize(env: &Env, token0: &Address, token1: &Address, sqrt_price_x64: u128, tick: i32, fee_bps: u32, tick_spacing: i32) {
    env.events().publish(
        (EventName::initialize(env), token0.clone(), token1.clone()),
        (sqrt_price_x64, tick, fee_bps, tick_spacing),
    );
}

pub fn emit_mint_limit(
    env: &Env,
    owner: &Address,
    position_id: u32,
    lower: i32,
    upper: i32,
    zero_for_one: bool,
    liquidity: u128,
    deposit: i128,
) {
    env.events().publish(
        (EventName::mint_limit(env), owner.clone()),
        (position_id, lower, upper, zero_for_one, liquidity, deposit),
    );
}

/// `amount_in` is in the token takers paid, `amount_out` in the order's token
pub fn emit_burn_limit(
    env: &Env,
    owner: &Address,
    position_id: u32,
    claim_tick: i32,
    liquidity_burned: u128,
    amount_in: i128,
    amount_out: i128,
) {
    env.events().publish(
        (EventName::burn_limit(env), owner.clone()),
        (position_id, claim_tick, liquidity_burned, amount_in, amount_out),
    );
}

pub fn emit_mint_range(env: &Env, owner: &Address, position_id: u32, liquidity: u128, amount0: i128, amount1: i128) {
    env.events().publish(
        (EventName::mint_range(env), owner.clone()),
        (position_id, liquidity, amount0, amount1),
    );
}

pub fn emit_burn_range(env: &Env, owner: &Address, position_id: u32, liquidity: u128, amount0: i128, amount1: i128) {
    env.events().publish(
        (EventName::burn_range(env), owner.clone()),
        (position_id, liquidity, amount0, amount1),
    );
}

pub fn emit_collect(env: &Env, owner: &Address, position_id: u32, amount0: u128, amount1: u128) {
    env.events().publish(
        (EventName::collect(env), owner.clone()),
        (position_id, amount0, amount1),
    );
}

pub fn emit_swap(
    env: &Env,
    sender: &Address,
    zero_for_one: bool,
    amount_in: i128,
    amount_out: i128,
    sqrt_price_x64: u128,
    tick: i32,
    fee_amount: i128,
) {
    env.events().publish(
        (EventName::swap(env), sender.clone()),
        (zero_for_one, amount_in, amount_out, sqrt_price_x64, tick, fee_amount),
    );
}

/// Emitted when a sync crossed at least one limit tick
pub fn emit_sync(env: &Env, crossed_0: u32, crossed_1: u32, epoch: u32) {
    env.events().publish(
        (EventName::sync(env),),
        (crossed_0, crossed_1, epoch),
    );
}

pub fn emit_transfer(env: &Env, from: &Address, to: &Address, position_id: u32) {
    env.events().publish(
        (EventName::transfer(env), from.clone(), to.clone()),
        position_id,
    );
}
