//! Property-based tests for the pool and ledger invariants.
//!
//! - Disbursement ids are 0, 1, 2, … with no gaps, however many attempts fail
//! - The pool balance never goes negative and always matches the accounting
//! - A worker cannot be paid before its cadence elapses, and can be paid at it
//! - Non-admin callers never change configuration

use payroll_disbursement::{
    PayrollDisbursementContract, PayrollDisbursementContractClient, PayrollError,
};
use proptest::prelude::*;
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn setup() -> (
    Env,
    PayrollDisbursementContractClient<'static>,
    Address,
    Address,
    Address,
) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(PayrollDisbursementContract, ());
    let client = PayrollDisbursementContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let funding = Address::generate(&env);
    let token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    client.initialize(&admin, &token);
    client.set_payroll_funding(&admin, &funding);

    (env, client, admin, funding, token)
}

fn fund_pool(
    env: &Env,
    client: &PayrollDisbursementContractClient,
    funding: &Address,
    token: &Address,
    amount: i128,
) {
    if amount > 0 {
        token::StellarAssetClient::new(env, token).mint(&client.address, &amount);
    }
    client.update_pool_balance(funding, &amount);
}

fn set_time(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp = timestamp;
    });
}

/// One step of a randomised disbursement run.
#[derive(Clone, Debug)]
enum Step {
    /// Pay the scheduled worker after its cadence has elapsed
    PayDue,
    /// Retry the scheduled worker without advancing time
    PayEarly,
    /// Try to pay a worker with no schedule
    PayUnknown,
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::PayDue),
        Just(Step::PayEarly),
        Just(Step::PayUnknown),
    ]
}

// ── proptest! blocks ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Successful disbursements receive ids 0..N in order, regardless of
    /// interleaved failures.
    #[test]
    fn prop_ids_are_gapless(
        steps in proptest::collection::vec(step_strategy(), 1..16),
        cadence in 1u64..1_000,
    ) {
        let (env, client, admin, funding, token) = setup();
        let worker = Address::generate(&env);
        let stranger = Address::generate(&env);

        client.set_worker_schedule(&admin, &worker, &cadence, &10);
        fund_pool(&env, &client, &funding, &token, 10 * steps.len() as i128);

        let mut now = 0u64;
        let mut paid = 0u64;
        let mut ids = std::vec::Vec::new();

        for step in steps.iter() {
            match step {
                Step::PayDue => {
                    now += cadence;
                    set_time(&env, now);
                    ids.push(client.disburse_salary(&worker));
                    paid += 1;
                }
                Step::PayEarly => {
                    // Before the first payment the clock starts at zero, so
                    // `now` may already be past the cadence.
                    if paid > 0 {
                        prop_assert_eq!(
                            client.try_disburse_salary(&worker),
                            Err(Ok(PayrollError::AlreadyDisbursed))
                        );
                    }
                }
                Step::PayUnknown => {
                    prop_assert_eq!(
                        client.try_disburse_salary(&stranger),
                        Err(Ok(PayrollError::InvalidWorker))
                    );
                }
            }
        }

        let expected: std::vec::Vec<u64> = (0..paid).collect();
        prop_assert_eq!(ids, expected);
        prop_assert_eq!(client.get_next_disbursement_id(), paid);
    }

    /// Interleaved withdrawals and disbursements never overdraw the pool.
    #[test]
    fn prop_balance_never_negative(
        initial in 0i128..5_000,
        salary in 1i128..2_000,
        withdrawals in proptest::collection::vec(0i128..3_000, 1..8),
    ) {
        let (env, client, admin, funding, token) = setup();
        let worker = Address::generate(&env);

        client.set_worker_schedule(&admin, &worker, &1, &salary);
        fund_pool(&env, &client, &funding, &token, initial);

        let mut expected = initial;
        let mut now = 0u64;

        for amount in withdrawals.iter() {
            now += 1;
            set_time(&env, now);

            let paid = client.try_disburse_salary(&worker);
            if expected >= salary {
                prop_assert!(paid.is_ok());
                expected -= salary;
            } else {
                prop_assert_eq!(paid, Err(Ok(PayrollError::InsufficientFunds)));
            }

            let withdrawn = client.try_withdraw_funds(&admin, amount);
            if *amount <= expected {
                prop_assert!(withdrawn.is_ok());
                expected -= amount;
            } else {
                prop_assert_eq!(withdrawn, Err(Ok(PayrollError::InsufficientFunds)));
            }

            let balance = client.get_payroll_pool_balance();
            prop_assert!(balance >= 0);
            prop_assert_eq!(balance, expected);
        }
    }

    /// Any time strictly inside the cadence is rejected; the boundary is paid.
    #[test]
    fn prop_cooldown_enforced(
        cadence in 1u64..100_000,
        offset in 0u64..100_000,
        start in 0u64..1_000_000,
    ) {
        let offset = offset % cadence;
        let (env, client, admin, funding, token) = setup();
        let worker = Address::generate(&env);

        client.set_worker_schedule(&admin, &worker, &cadence, &100);
        fund_pool(&env, &client, &funding, &token, 200);

        let first_paid_at = cadence + start;
        set_time(&env, first_paid_at);
        prop_assert_eq!(client.disburse_salary(&worker), 0);

        set_time(&env, first_paid_at + offset);
        prop_assert_eq!(
            client.try_disburse_salary(&worker),
            Err(Ok(PayrollError::AlreadyDisbursed))
        );
        prop_assert_eq!(client.get_payroll_pool_balance(), 100);

        set_time(&env, first_paid_at + cadence);
        prop_assert_eq!(client.disburse_salary(&worker), 1);
    }

    /// Admin-gated writes from any other principal fail without side effects.
    #[test]
    fn prop_non_admin_is_rejected(
        period in 0u32..64,
        rate in 0u32..256,
        threshold in 0u32..256,
        cap in 0u64..10_000,
    ) {
        let (env, client, _admin, _funding, _token) = setup();
        let intruder = Address::generate(&env);
        let worker = Address::generate(&env);

        prop_assert_eq!(
            client.try_set_grace_period(&intruder, &worker, &period),
            Err(Ok(PayrollError::NotAuthorized))
        );
        prop_assert_eq!(
            client.try_set_penalty_rate(&intruder, &worker, &rate),
            Err(Ok(PayrollError::NotAuthorized))
        );
        prop_assert_eq!(
            client.try_set_voting_threshold(&intruder, &7, &threshold),
            Err(Ok(PayrollError::NotAuthorized))
        );
        prop_assert_eq!(
            client.try_set_max_disbursements(&intruder, &cap),
            Err(Ok(PayrollError::NotAuthorized))
        );
        prop_assert_eq!(
            client.try_withdraw_funds(&intruder, &0),
            Err(Ok(PayrollError::NotAuthorized))
        );

        prop_assert_eq!(client.get_grace_period(&worker), None);
        prop_assert_eq!(client.get_penalty_rate(&worker), None);
        prop_assert_eq!(client.get_voting_threshold(&7), None);
        prop_assert_eq!(client.get_max_disbursements(), 1_000);
    }
}
