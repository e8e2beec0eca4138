use limitswap_math::{get_amount_0_delta, get_amount_1_delta, get_sqrt_ratio_at_tick};
use limitswap_position::{
    add_limit_liquidity, burn_limit_position, claim_tick, stage, take_share, LimitPosition, LimitStage,
    PositionError,
};
use limitswap_tick::{consume_limit_tick, tickmap, MemoryStore, PoolState, TickDeltas, TickMapKind, TickStore};
use soroban_sdk::{testutils::Address as _, Address, Env};

const L: u128 = 1_000_000_000_000;

struct Book {
    env: Env,
    store: MemoryStore,
    state: PoolState,
    pos: LimitPosition,
}

/// Token0 order over [60, 180], side still at tick 0.
fn book() -> Book {
    let env = Env::default();
    env.cost_estimate().budget().reset_unlimited();
    let mut store = MemoryStore::memory(&env);
    let state = PoolState::new(get_sqrt_ratio_at_tick(0), 0);
    let mut pos = LimitPosition {
        owner: Address::generate(&env),
        lower: 60,
        upper: 180,
        zero_for_one: true,
        liquidity: 0,
        epoch_last: state.epoch,
        round: state.limit0.round,
    };
    add_limit_liquidity(&mut store, &mut pos, L);
    Book { env, store, state, pos }
}

/// What the side does when it crosses `tick` upward holding `liquidity`.
fn cross(book: &mut Book, tick: i32, previous: Option<i32>) {
    book.state.epoch += 1;
    let epoch = book.state.epoch;
    let price = get_sqrt_ratio_at_tick(tick);
    if let Some(prev) = previous {
        let mut live = book.store.tick_deltas(true, prev, 0).unwrap();
        live.close(tick, 0);
        book.store.set_tick_deltas(true, prev, 0, &live);
    }
    let delta = consume_limit_tick(&mut book.store, true, tick, epoch, price);
    let side = book.state.side_mut(true);
    side.liquidity = (side.liquidity as i128 + delta) as u128;
    side.sqrt_price_x64 = price;
    side.tick = tick;
    if side.liquidity > 0 {
        side.auction_tick = Some(tick);
        let liquidity = side.liquidity;
        book.store.set_tick_deltas(true, tick, 0, &TickDeltas::open(liquidity, epoch, price));
    } else {
        side.auction_tick = None;
    }
}

#[test]
fn test_take_share_is_exact_across_claimants() {
    let env = Env::default();
    let mut deltas = TickDeltas::open(300, 1, get_sqrt_ratio_at_tick(0));
    deltas.amount_in_delta = 100;
    deltas.amount_out_delta = 90;
    deltas.amount_in_delta_max_minus = 100;
    deltas.amount_out_delta_max_minus = 200;

    let (first, empty) = take_share(&env, &mut deltas, 100);
    assert!(!empty);
    assert_eq!(first, (33, 36));
    assert_eq!(deltas.amount_in_delta, 67);
    assert_eq!(deltas.amount_out_delta, 60);
    assert_eq!(deltas.amount_out_max(), 134);
    assert_eq!(deltas.liquidity_max_minus, 200);
    assert!(deltas.within_bounds());

    let (last, empty) = take_share(&env, &mut deltas, 200);
    assert!(empty);
    assert_eq!(last, (67, 74));
    assert_eq!(first.0 + last.0, 100);
    assert_eq!(first.1 + last.1, 110);
}

#[test]
fn test_take_share_drains_stash_first() {
    let env = Env::default();
    let mut deltas = TickDeltas::open(2, 1, get_sqrt_ratio_at_tick(0));
    deltas.amount_out_delta_max_minus = 10;
    deltas.amount_out_delta_max_stashed = 10;

    let ((_, out), _) = take_share(&env, &mut deltas, 1);
    assert_eq!(out, 10);
    assert_eq!(deltas.amount_out_delta_max_stashed, 0);
    assert_eq!(deltas.amount_out_delta_max_minus, 10);
}

#[test]
fn test_claimed_fill_leaves_the_deltas() {
    // shrinking only the maxima would leave 100 filled against a bound of 67
    // and pay the next claimant half of the fill instead of a third
    let env = Env::default();
    let mut deltas = TickDeltas::open(300, 1, get_sqrt_ratio_at_tick(0));
    deltas.amount_in_delta = 100;
    deltas.amount_in_delta_max_minus = 100;

    let ((first, _), _) = take_share(&env, &mut deltas, 100);
    assert_eq!(first, 33);
    assert_eq!((deltas.amount_in_delta, deltas.amount_in_delta_max_minus), (67, 67));

    let ((second, _), _) = take_share(&env, &mut deltas, 100);
    assert_eq!(second, 33);
    assert!(deltas.within_bounds());
}

#[test]
fn test_unfilled_share_never_cuts_into_fill_bound() {
    let env = Env::default();
    let mut deltas = TickDeltas::open(3, 1, get_sqrt_ratio_at_tick(0));
    deltas.amount_out_delta = 50;
    deltas.amount_out_delta_max_minus = 60;
    deltas.amount_out_delta_max_stashed = 40;

    let ((_, out), empty) = take_share(&env, &mut deltas, 1);
    assert!(!empty);
    assert_eq!(out, 16);
    assert_eq!(deltas.amount_out_delta, 34);
    assert_eq!(deltas.amount_out_delta_max_stashed, 24);
    assert_eq!(deltas.amount_out_delta_max_minus, 44);
    assert!(deltas.within_bounds());
}

#[test]
fn test_not_entered_partial_burn_refunds_deposit() {
    let mut b = book();
    assert_eq!(stage(&b.store, &b.pos), LimitStage::NotEntered);
    assert_eq!(claim_tick(&b.store, &b.state, &b.pos), Some(60));

    let outcome = burn_limit_position(&b.env, &mut b.store, &mut b.state, &mut b.pos, 60, 5_000).unwrap();
    let expected = get_amount_0_delta(&b.env, get_sqrt_ratio_at_tick(60), get_sqrt_ratio_at_tick(180), L / 2, false);
    assert_eq!(outcome.amount_out, expected);
    assert_eq!(outcome.amount_in, 0);
    assert_eq!(outcome.liquidity_burned, L / 2);
    assert!(!outcome.closed);
    assert_eq!(b.store.limit_tick(true, 60).liquidity_delta, (L / 2) as i128);
    assert_eq!(b.store.limit_tick(true, 180).liquidity_delta, -((L / 2) as i128));

    let outcome = burn_limit_position(&b.env, &mut b.store, &mut b.state, &mut b.pos, 60, 10_000).unwrap();
    assert!(outcome.closed);
    assert!(!tickmap::is_set(&b.store, TickMapKind::Limit0, 60));
    assert!(!tickmap::is_set(&b.store, TickMapKind::Limit0, 180));
}

#[test]
fn test_claim_validation() {
    let mut b = book();
    assert_eq!(
        burn_limit_position(&b.env, &mut b.store, &mut b.state, &mut b.pos, 120, 0),
        Err(PositionError::WrongTickClaimedAt)
    );
    assert_eq!(
        burn_limit_position(&b.env, &mut b.store, &mut b.state, &mut b.pos, 240, 0),
        Err(PositionError::WrongTickClaimedAt)
    );
    assert_eq!(
        burn_limit_position(&b.env, &mut b.store, &mut b.state, &mut b.pos, 60, 10_001),
        Err(PositionError::NotEnoughPositionLiquidity)
    );
}

#[test]
fn test_active_claim_collects_closed_auctions_once() {
    let mut b = book();
    cross(&mut b, 60, None);
    assert_eq!(stage(&b.store, &b.pos), LimitStage::Active);
    assert_eq!(claim_tick(&b.store, &b.state, &b.pos), Some(60));

    // a taker filled part of the first auction
    let mut live = b.store.tick_deltas(true, 60, 0).unwrap();
    live.amount_in_delta = 1_000;
    live.amount_out_delta = 900;
    live.amount_in_delta_max_minus = 1_000;
    live.amount_out_delta_max_minus = 2_000;
    b.store.set_tick_deltas(true, 60, 0, &live);

    // nothing closed yet
    let outcome = burn_limit_position(&b.env, &mut b.store, &mut b.state, &mut b.pos, 60, 0).unwrap();
    assert_eq!((outcome.amount_in, outcome.amount_out), (0, 0));

    cross(&mut b, 120, Some(60));
    assert_eq!(claim_tick(&b.store, &b.state, &b.pos), Some(120));
    assert_eq!(
        burn_limit_position(&b.env, &mut b.store, &mut b.state, &mut b.pos, 60, 0),
        Err(PositionError::WrongTickClaimedAt)
    );

    let outcome = burn_limit_position(&b.env, &mut b.store, &mut b.state, &mut b.pos, 120, 0).unwrap();
    assert_eq!((outcome.amount_in, outcome.amount_out), (1_000, 1_100));
    assert!(b.store.tick_deltas(true, 60, 0).is_none());
    assert_eq!(b.pos.lower, 120);

    let again = burn_limit_position(&b.env, &mut b.store, &mut b.state, &mut b.pos, 120, 0).unwrap();
    assert_eq!((again.amount_in, again.amount_out), (0, 0));
    assert_eq!(b.pos.liquidity, L);
}

#[test]
fn test_active_full_burn_returns_remainder() {
    let mut b = book();
    cross(&mut b, 60, None);
    cross(&mut b, 120, Some(60));

    let outcome = burn_limit_position(&b.env, &mut b.store, &mut b.state, &mut b.pos, 120, 10_000).unwrap();
    let remainder = get_amount_0_delta(&b.env, get_sqrt_ratio_at_tick(120), get_sqrt_ratio_at_tick(180), L, false);
    assert_eq!(outcome.amount_out, remainder);
    assert_eq!(outcome.amount_in, 0);
    assert!(outcome.closed);
    assert_eq!(b.state.limit0.liquidity, 0);
    assert_eq!(b.state.limit0.auction_tick, None);
    assert!(!tickmap::is_set(&b.store, TickMapKind::Limit0, 180));
    assert!(b.store.tick_deltas(true, 120, 0).is_none());
}

#[test]
fn test_active_partial_burn_moves_exit_delta() {
    let mut b = book();
    cross(&mut b, 60, None);

    let outcome = burn_limit_position(&b.env, &mut b.store, &mut b.state, &mut b.pos, 60, 2_500).unwrap();
    assert_eq!(outcome.liquidity_burned, L / 4);
    assert_eq!(b.pos.liquidity, L - L / 4);
    assert_eq!(b.state.limit0.liquidity, L - L / 4);
    assert_eq!(b.store.limit_tick(true, 180).liquidity_delta, -((L - L / 4) as i128));
    assert_eq!(b.store.tick_deltas(true, 60, 0).unwrap().liquidity_max_minus, L - L / 4);
}

#[test]
fn test_partial_burn_reanchors_live_auction() {
    let mut b = book();
    cross(&mut b, 60, None);
    let (p60, p90, p120) = (get_sqrt_ratio_at_tick(60), get_sqrt_ratio_at_tick(90), get_sqrt_ratio_at_tick(120));

    // a taker filled everything between 60 and 90
    let mut live = b.store.tick_deltas(true, 60, 0).unwrap();
    let (max_in, max_out) = live.max_at(&b.env, true, p90);
    assert_eq!(max_in, get_amount_1_delta(&b.env, p60, p90, L, true));
    live.amount_in_delta = max_in;
    live.amount_out_delta = max_out;
    live.amount_in_delta_max_minus = max_in;
    live.amount_out_delta_max_minus = max_out;
    b.store.set_tick_deltas(true, 60, 0, &live);
    b.state.limit0.sqrt_price_x64 = p90;
    b.state.limit0.tick = 90;

    let outcome = burn_limit_position(&b.env, &mut b.store, &mut b.state, &mut b.pos, 60, 5_000).unwrap();
    assert_eq!(outcome.amount_in, max_in / 2);

    let live = b.store.tick_deltas(true, 60, 0).unwrap();
    assert!(live.within_bounds());
    assert_eq!(live.anchor_sqrt_price_x64, p90);
    assert_eq!(live.max_at(&b.env, true, p90), (live.amount_in_max(), live.amount_out_max()));
    assert_eq!(
        live.max_at(&b.env, true, p120).1,
        live.amount_out_max() + get_amount_0_delta(&b.env, p90, p120, L - L / 2, false)
    );
}

#[test]
fn test_exited_position_closes_on_any_percent() {
    let mut b = book();
    cross(&mut b, 60, None);
    cross(&mut b, 120, Some(60));

    let mut live = b.store.tick_deltas(true, 120, 0).unwrap();
    live.amount_in_delta = 500;
    live.amount_out_delta = 480;
    live.amount_in_delta_max_minus = 500;
    live.amount_out_delta_max_minus = 700;
    b.store.set_tick_deltas(true, 120, 0, &live);

    cross(&mut b, 180, Some(120));
    assert_eq!(b.state.limit0.liquidity, 0);
    assert_eq!(stage(&b.store, &b.pos), LimitStage::Exited);
    assert_eq!(claim_tick(&b.store, &b.state, &b.pos), Some(180));

    let outcome = burn_limit_position(&b.env, &mut b.store, &mut b.state, &mut b.pos, 180, 0).unwrap();
    assert_eq!((outcome.amount_in, outcome.amount_out), (500, 220));
    assert_eq!(outcome.liquidity_burned, L);
    assert!(outcome.closed);
    assert!(b.store.tick_deltas(true, 60, 0).is_none());
    assert!(b.store.tick_deltas(true, 120, 0).is_none());
}
