use limitswap_math::{get_amount_0_delta, get_sqrt_ratio_at_tick};
use limitswap_position::{add_limit_liquidity, LimitPosition};
use limitswap_swap::{next_limit_tick, sync_pool, sync_side};
use limitswap_tick::{tickmap, MemoryStore, PoolState, TickMapKind, TickStore};
use soroban_sdk::{testutils::Address as _, Address, Env};

const L: u128 = 1_000_000_000_000_000_000;

fn setup(start_tick: i32) -> (Env, MemoryStore, PoolState) {
    let env = Env::default();
    env.cost_estimate().budget().reset_unlimited();
    let store = MemoryStore::memory(&env);
    let state = PoolState::new(get_sqrt_ratio_at_tick(start_tick), start_tick);
    (env, store, state)
}

fn order(env: &Env, store: &mut MemoryStore, state: &PoolState, lower: i32, upper: i32, zero_for_one: bool) -> LimitPosition {
    let mut pos = LimitPosition {
        owner: Address::generate(env),
        lower,
        upper,
        zero_for_one,
        liquidity: 0,
        epoch_last: state.epoch,
        round: state.side(zero_for_one).round,
    };
    add_limit_liquidity(store, &mut pos, L);
    pos
}

fn amount0(env: &Env, a: i32, b: i32) -> u128 {
    get_amount_0_delta(env, get_sqrt_ratio_at_tick(a), get_sqrt_ratio_at_tick(b), L, false)
}

#[test]
fn test_sync_opens_auction_and_expires_segment() {
    let (env, mut store, mut state) = setup(-60);
    order(&env, &mut store, &state, 0, 100, true);
    assert_eq!(next_limit_tick(&store, &state.limit0, true), Some(0));

    let crossed = sync_side(&env, &mut store, &mut state, true, 60);
    assert_eq!(crossed, 1);
    assert_eq!(state.epoch, 1);
    assert_eq!(state.limit0.liquidity, L);
    assert_eq!(state.limit0.auction_tick, Some(0));
    assert_eq!(state.limit0.tick, 60);
    assert_eq!(state.limit0.sqrt_price_x64, get_sqrt_ratio_at_tick(60));

    let live = store.tick_deltas(true, 0, 0).unwrap();
    assert!(live.is_live());
    assert_eq!(live.epoch_opened, 1);
    assert_eq!(live.amount_out_delta, 0);
    assert_eq!(live.amount_out_delta_max_stashed, amount0(&env, 0, 60));
    assert_eq!(store.limit_tick(true, 0).epoch_last, 1);
    assert!(!tickmap::is_set(&store, TickMapKind::Limit0, 0));
}

#[test]
fn test_sync_through_exit_closes_auction() {
    let (env, mut store, mut state) = setup(-60);
    order(&env, &mut store, &state, 0, 100, true);
    sync_side(&env, &mut store, &mut state, true, 60);
    let crossed = sync_side(&env, &mut store, &mut state, true, 200);

    assert_eq!(crossed, 1);
    assert_eq!(state.epoch, 2);
    assert_eq!(state.limit0.liquidity, 0);
    assert_eq!(state.limit0.auction_tick, None);
    assert_eq!(state.limit0.tick, 200);

    let closed = store.tick_deltas(true, 0, 0).unwrap();
    assert_eq!(closed.next_tick, Some(100));
    assert_eq!(closed.amount_out_delta_max_stashed, 0);
    // measured once from the opening price, never floored per segment
    assert_eq!(closed.amount_out_delta_max_minus, amount0(&env, 0, 100));
    assert!(closed.amount_out_delta_max_minus >= amount0(&env, 0, 60) + amount0(&env, 60, 100));
    assert!(closed.within_bounds());
    assert!(store.tick_deltas(true, 100, 0).is_none());
}

#[test]
fn test_backward_sync_of_active_side_is_noop() {
    let (env, mut store, mut state) = setup(-60);
    order(&env, &mut store, &state, 0, 100, true);
    sync_side(&env, &mut store, &mut state, true, 60);

    let side_before = state.limit0.clone();
    let record_before = store.tick_deltas(true, 0, 0);
    let tick_before = store.limit_tick(true, 100);

    assert_eq!(sync_side(&env, &mut store, &mut state, true, -100), 0);
    assert_eq!(sync_side(&env, &mut store, &mut state, true, 60), 0);

    assert_eq!(state.limit0, side_before);
    assert_eq!(store.tick_deltas(true, 0, 0), record_before);
    assert_eq!(store.limit_tick(true, 100), tick_before);
    assert_eq!(state.epoch, 1);
}

#[test]
fn test_idle_side_rewinds() {
    let (env, mut store, mut state) = setup(0);
    assert_eq!(sync_side(&env, &mut store, &mut state, true, 500), 0);
    assert_eq!(state.limit0.tick, 500);

    assert_eq!(sync_side(&env, &mut store, &mut state, true, -50), 0);
    assert_eq!(state.limit0.tick, -50);
    assert_eq!(state.limit0.sqrt_price_x64, get_sqrt_ratio_at_tick(-50));
}

#[test]
fn test_reopened_tick_bumps_round() {
    let (env, mut store, mut state) = setup(-60);
    order(&env, &mut store, &state, 0, 100, true);
    sync_side(&env, &mut store, &mut state, true, 200);
    let first = store.tick_deltas(true, 0, 0).unwrap();

    // side is idle again; rewind and place a second order on the same ticks
    sync_side(&env, &mut store, &mut state, true, -60);
    order(&env, &mut store, &state, 0, 100, true);
    sync_side(&env, &mut store, &mut state, true, 60);

    assert_eq!(state.limit0.round, 1);
    assert_eq!(store.tick_deltas(true, 0, 0), Some(first));
    let second = store.tick_deltas(true, 0, 1).unwrap();
    assert!(second.is_live());
    assert_eq!(second.epoch_opened, state.epoch);
}

#[test]
fn test_side_one_walks_down() {
    let (env, mut store, mut state) = setup(60);
    order(&env, &mut store, &state, -100, 0, false);
    assert_eq!(next_limit_tick(&store, &state.limit1, false), Some(0));

    let report = sync_pool(&env, &mut store, &mut state, -40);
    assert_eq!(report.crossed_1, 1);
    assert_eq!(report.crossed_0, 0);
    assert_eq!(report.total(), 1);
    assert_eq!(state.limit1.auction_tick, Some(0));
    assert_eq!(state.limit1.tick, -40);
    // side 0 holds nothing and simply follows
    assert_eq!(state.limit0.tick, -40);

    sync_side(&env, &mut store, &mut state, false, -100);
    assert_eq!(state.limit1.liquidity, 0);
    assert_eq!(store.tick_deltas(false, 0, 0).unwrap().next_tick, Some(-100));
}
