// Pool storage
//
// Configuration, pool state and the reentrancy flag live in instance
// storage; ticks, auction records, tick map words, positions and TWAP
// observations are persistent entries keyed by `DataKey`.

use limitswap_tick::{LimitTick, PoolState, RangeTick, TickDeltas, TickMapKind, TickStore};
use soroban_sdk::{contracttype, Env, IntoVal, Val};

use crate::error::PoolError;
use crate::types::{LimitPosition, PoolConfig, RangePosition};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataKey {
    /// Pool configuration (instance)
    Config,
    /// Pool state (instance)
    State,
    /// Reentrancy flag (instance)
    Unlocked,
    /// Range tick by index
    RangeTick(i32),
    /// Limit tick by (zero_for_one, tick)
    LimitTick(bool, i32),
    /// Auction record by (zero_for_one, tick, round)
    TickDeltas(bool, i32, u32),
    /// Tick map word by (map, level, word index)
    Bitmap(TickMapKind, u32, u32),
    LimitPosition(u32),
    RangePosition(u32),
    /// TWAP observation by ring index
    TwapObservation(u32),
    TwapNewestIndex,
    TwapCount,
}

// ============================================================
// STORAGE CONFIGURATION
// ============================================================

/// Storage TTL constants (in ledgers)
pub mod storage_ttl {
    /// About one year at 5s per ledger
    pub const LIFETIME_THRESHOLD: u32 = 6_307_200;
    pub const BUMP_AMOUNT: u32 = 6_307_200;
}

#[inline]
pub(crate) fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, storage_ttl::LIFETIME_THRESHOLD, storage_ttl::BUMP_AMOUNT);
}

#[inline]
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(storage_ttl::LIFETIME_THRESHOLD, storage_ttl::BUMP_AMOUNT);
}

fn write_persistent<V: IntoVal<Env, Val>>(env: &Env, key: &DataKey, value: &V) {
    env.storage().persistent().set(key, value);
    extend_persistent_ttl(env, key);
}

// ============================================================
// CONFIG AND STATE
// ============================================================

#[inline]
pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn write_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

/// Read pool configuration
///
/// # Errors
/// `NotInitialized` before `initialize`
pub fn read_config(env: &Env) -> Result<PoolConfig, PoolError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(PoolError::NotInitialized)
}

pub fn write_state(env: &Env, state: &PoolState) {
    env.storage().instance().set(&DataKey::State, state);
    extend_instance_ttl(env);
}

/// Read pool state
///
/// # Errors
/// `NotInitialized` before `initialize`
pub fn read_state(env: &Env) -> Result<PoolState, PoolError> {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(PoolError::NotInitialized)
}

// ============================================================
// REENTRANCY FLAG
// ============================================================

#[inline]
pub fn is_unlocked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Unlocked)
        .unwrap_or(false)
}

pub fn write_unlocked(env: &Env, unlocked: bool) {
    env.storage().instance().set(&DataKey::Unlocked, &unlocked);
}

// ============================================================
// POSITIONS
// ============================================================

pub fn read_limit_position(env: &Env, id: u32) -> Option<LimitPosition> {
    env.storage().persistent().get(&DataKey::LimitPosition(id))
}

pub fn write_limit_position(env: &Env, id: u32, pos: &LimitPosition) {
    write_persistent(env, &DataKey::LimitPosition(id), pos);
}

pub fn remove_limit_position(env: &Env, id: u32) {
    env.storage().persistent().remove(&DataKey::LimitPosition(id));
}

pub fn read_range_position(env: &Env, id: u32) -> Option<RangePosition> {
    env.storage().persistent().get(&DataKey::RangePosition(id))
}

pub fn write_range_position(env: &Env, id: u32, pos: &RangePosition) {
    write_persistent(env, &DataKey::RangePosition(id), pos);
}

pub fn remove_range_position(env: &Env, id: u32) {
    env.storage().persistent().remove(&DataKey::RangePosition(id));
}

// ============================================================
// TICK STORE
// ============================================================

/// Tick ledgers over persistent storage. Empty records are removed rather
/// than written back.
pub struct ContractStore {
    env: Env,
}

impl ContractStore {
    pub fn new(env: &Env) -> Self {
        Self { env: env.clone() }
    }

    fn write_or_remove<V>(&self, key: DataKey, value: &V, empty: bool)
    where
        V: IntoVal<Env, Val>,
    {
        if empty {
            self.env.storage().persistent().remove(&key);
        } else {
            write_persistent(&self.env, &key, value);
        }
    }
}

impl TickStore for ContractStore {
    fn range_tick(&self, tick: i32) -> RangeTick {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::RangeTick(tick))
            .unwrap_or_default()
    }

    fn set_range_tick(&mut self, tick: i32, info: &RangeTick) {
        self.write_or_remove(DataKey::RangeTick(tick), info, *info == RangeTick::default());
    }

    fn limit_tick(&self, zero_for_one: bool, tick: i32) -> LimitTick {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::LimitTick(zero_for_one, tick))
            .unwrap_or_default()
    }

    fn set_limit_tick(&mut self, zero_for_one: bool, tick: i32, info: &LimitTick) {
        self.write_or_remove(DataKey::LimitTick(zero_for_one, tick), info, *info == LimitTick::default());
    }

    fn tick_deltas(&self, zero_for_one: bool, tick: i32, round: u32) -> Option<TickDeltas> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::TickDeltas(zero_for_one, tick, round))
    }

    fn set_tick_deltas(&mut self, zero_for_one: bool, tick: i32, round: u32, deltas: &TickDeltas) {
        write_persistent(&self.env, &DataKey::TickDeltas(zero_for_one, tick, round), deltas);
    }

    fn remove_tick_deltas(&mut self, zero_for_one: bool, tick: i32, round: u32) {
        self.env
            .storage()
            .persistent()
            .remove(&DataKey::TickDeltas(zero_for_one, tick, round));
    }

    fn bitmap_word(&self, kind: TickMapKind, level: u32, index: u32) -> u128 {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Bitmap(kind, level, index))
            .unwrap_or(0)
    }

    fn set_bitmap_word(&mut self, kind: TickMapKind, level: u32, index: u32, word: u128) {
        self.write_or_remove(DataKey::Bitmap(kind, level, index), &word, word == 0);
    }
}
