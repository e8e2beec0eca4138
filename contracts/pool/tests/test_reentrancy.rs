mod common;

use common::*;
use limitswap_pool::storage::{is_unlocked, write_unlocked};
use limitswap_pool::PoolError;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;

#[test]
fn test_locked_pool_rejects_state_changes() {
    let env = setup_env();
    let (client, token0, token1) = setup_pool(&env, &default_params());
    let user = funded_user(&env, &token0, &token1, 1_000 * E18);
    client.mint_range(&user, &-600, &600, &(100 * E18), &(100 * E18), &0, &0, &0);
    let order = client.mint_limit(&user, &20, &120, &E18, &true, &0);

    env.as_contract(&client.address, || write_unlocked(&env, false));

    assert_eq!(client.try_swap(&user, &swap_params(true, E18, true)), Err(Ok(PoolError::Locked)));
    assert_eq!(client.try_sync(), Err(Ok(PoolError::Locked)));
    assert_eq!(client.try_mint_limit(&user, &20, &120, &E18, &true, &0), Err(Ok(PoolError::Locked)));
    assert_eq!(
        client.try_burn_limit(&user, &order.position_id, &20, &10_000),
        Err(Ok(PoolError::Locked))
    );
    assert_eq!(
        client.try_mint_range(&user, &-600, &600, &E18, &E18, &0, &0, &0),
        Err(Ok(PoolError::Locked))
    );
    assert_eq!(client.try_burn_range(&user, &1, &1_000), Err(Ok(PoolError::Locked)));
    assert_eq!(client.try_collect_range(&user, &1), Err(Ok(PoolError::Locked)));
    assert_eq!(
        client.try_transfer_position(&user, &Address::generate(&env), &1),
        Err(Ok(PoolError::Locked))
    );

    // read-only calls do not take the lock
    assert!(client.quote(&swap_params(true, E18, true)).amount_out > 0);
    assert_eq!(client.get_pool_state().position_id_next, 3);
}

#[test]
fn test_lock_released_after_success_and_failure() {
    let env = setup_env();
    let (client, token0, token1) = setup_pool(&env, &default_params());
    let user = funded_user(&env, &token0, &token1, 1_000 * E18);

    client.mint_range(&user, &-600, &600, &(100 * E18), &(100 * E18), &0, &0, &0);
    assert!(env.as_contract(&client.address, || is_unlocked(&env)));

    // a failed call rolls back, leaving the flag as it was
    assert_eq!(
        client.try_burn_range(&user, &9, &1),
        Err(Ok(PoolError::PositionNotFound))
    );
    assert!(env.as_contract(&client.address, || is_unlocked(&env)));

    client.swap(&user, &swap_params(false, E18, true));
    assert!(env.as_contract(&client.address, || is_unlocked(&env)));
}
