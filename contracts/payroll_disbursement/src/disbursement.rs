use soroban_sdk::{log, token, Address, Env};

use crate::config::load_config;
use crate::errors::PayrollError;
use crate::events::SalaryDisbursed;
use crate::ledger;
use crate::pool::{get_payroll_pool_balance, write_balance};
use crate::schedule::{get_worker_schedule, next_eligible_at, write_schedule};

/// Pays `worker` one scheduled salary out of the pool.
///
/// Anyone may trigger a disbursement; the schedule alone decides whether
/// the worker is due. Guards run in this order and the first failure wins:
///
/// 1. contract paused - `Paused`
/// 2. ledger counter at the cap - `MaxDisbursementsExceeded`
/// 3. no schedule for `worker` - `InvalidWorker`
/// 4. cadence not yet elapsed since the last payment - `AlreadyDisbursed`
/// 5. pool cannot cover the amount - `InsufficientFunds`
///
/// Nothing is written until all guards pass. The pool debit, ledger entry,
/// schedule clock, history index and token transfer then happen in the same
/// invocation, so the host commits or reverts them together.
///
/// # Returns
/// The ledger id of the new disbursement.
pub fn disburse_salary(env: &Env, worker: Address) -> Result<u64, PayrollError> {
    let config = load_config(env)?;
    if config.paused {
        log!(env, "disbursement rejected: paused", worker);
        return Err(PayrollError::Paused);
    }

    let next_id = ledger::get_next_disbursement_id(env);
    if next_id >= config.max_disbursements {
        log!(env, "disbursement rejected: cap reached", next_id);
        return Err(PayrollError::MaxDisbursementsExceeded);
    }

    let Some(mut schedule) = get_worker_schedule(env, &worker) else {
        log!(env, "disbursement rejected: no schedule", worker);
        return Err(PayrollError::InvalidWorker);
    };

    let now = env.ledger().timestamp();
    if now < next_eligible_at(&schedule) {
        log!(env, "disbursement rejected: cadence not elapsed", worker, now);
        return Err(PayrollError::AlreadyDisbursed);
    }

    let balance = get_payroll_pool_balance(env);
    if balance < schedule.amount {
        log!(env, "disbursement rejected: pool too low", balance);
        return Err(PayrollError::InsufficientFunds);
    }

    let amount = schedule.amount;
    write_balance(env, balance - amount);
    let id = ledger::append(env, &worker, amount, now);
    schedule.last_disbursed = now;
    write_schedule(env, &worker, &schedule);

    token::Client::new(env, &config.token).transfer(
        &env.current_contract_address(),
        &worker,
        &amount,
    );

    SalaryDisbursed {
        disbursement_id: id,
        worker,
        amount,
        timestamp: now,
    }
    .publish(env);

    Ok(id)
}
