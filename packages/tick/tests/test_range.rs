use limitswap_tick::{
    cross_range_tick, fee_growth_inside, tickmap, update_range_tick, MemoryStore, TickMapKind, TickStore,
};
use soroban_sdk::Env;

fn setup() -> (Env, MemoryStore) {
    let env = Env::default();
    env.cost_estimate().budget().reset_unlimited();
    let store = MemoryStore::memory(&env);
    (env, store)
}

#[test]
fn test_update_flips_and_marks_map() {
    let (_env, mut store) = setup();

    assert!(update_range_tick(&mut store, -60, 0, 1_000, 0, 0, false));
    assert!(update_range_tick(&mut store, 60, 0, 1_000, 0, 0, true));
    assert!(tickmap::is_set(&store, TickMapKind::Range, -60));
    assert!(tickmap::is_set(&store, TickMapKind::Range, 60));

    let lower = store.range_tick(-60);
    let upper = store.range_tick(60);
    assert_eq!(lower.liquidity_gross, 1_000);
    assert_eq!(lower.liquidity_net, 1_000);
    assert_eq!(upper.liquidity_net, -1_000);

    // second position on the same tick does not flip
    assert!(!update_range_tick(&mut store, 60, 0, 500, 0, 0, true));
    assert_eq!(store.range_tick(60).liquidity_net, -1_500);
}

#[test]
fn test_removing_all_liquidity_clears_tick() {
    let (_env, mut store) = setup();
    update_range_tick(&mut store, 120, 0, 700, 5, 5, true);
    assert!(update_range_tick(&mut store, 120, 0, -700, 5, 5, true));
    assert_eq!(store.range_tick(120), Default::default());
    assert!(!tickmap::is_set(&store, TickMapKind::Range, 120));
}

#[test]
fn test_fee_growth_outside_initialised_below_current() {
    let (_env, mut store) = setup();
    update_range_tick(&mut store, -60, 0, 1, 111, 222, false);
    update_range_tick(&mut store, 60, 0, 1, 111, 222, true);
    assert_eq!(store.range_tick(-60).fee_growth_outside_0, 111);
    assert_eq!(store.range_tick(-60).fee_growth_outside_1, 222);
    assert_eq!(store.range_tick(60).fee_growth_outside_0, 0);
}

#[test]
fn test_fee_growth_inside_tracks_crossings() {
    let (_env, mut store) = setup();
    update_range_tick(&mut store, -60, 0, 1_000, 0, 0, false);
    update_range_tick(&mut store, 60, 0, 1_000, 0, 0, true);

    // 100 units of growth while inside
    assert_eq!(fee_growth_inside(&store, -60, 60, 0, 100, 0), (100, 0));

    // cross upward, 50 more accrue outside
    let net = cross_range_tick(&mut store, 60, 100, 0);
    assert_eq!(net, -1_000);
    assert_eq!(fee_growth_inside(&store, -60, 60, 60, 150, 0), (100, 0));

    // cross back down, 30 more accrue inside
    cross_range_tick(&mut store, 60, 150, 0);
    assert_eq!(fee_growth_inside(&store, -60, 60, 59, 180, 0), (130, 0));
}

#[test]
fn test_fee_growth_inside_below_range() {
    let (_env, mut store) = setup();
    update_range_tick(&mut store, 60, -100, 1, 40, 40, false);
    update_range_tick(&mut store, 120, -100, 1, 40, 40, true);
    assert_eq!(fee_growth_inside(&store, 60, 120, -100, 90, 90), (0, 0));
}
