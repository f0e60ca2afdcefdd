use soroban_sdk::{token, Address, Env};

use crate::config::{get_collaborator, require_admin};
use crate::errors::PayrollError;
use crate::events::{FundsWithdrawn, PoolBalanceUpdated};
use crate::storage::{bump_instance, Collaborator, DataKey};

pub fn get_payroll_pool_balance(env: &Env) -> i128 {
    // Seeded by `initialize`; only missing on an uninitialised contract.
    env.storage()
        .instance()
        .get(&DataKey::PoolBalance)
        .unwrap_or(0)
}

pub(crate) fn write_balance(env: &Env, balance: i128) {
    env.storage().instance().set(&DataKey::PoolBalance, &balance);
    bump_instance(env);
}

/// Adjusts the pool by `delta` on behalf of the payroll funding collaborator.
///
/// The funding contract moves the tokens itself; this only keeps the
/// accounting in step with them.
///
/// # Errors
/// * `NotAuthorized` - no funding collaborator is registered, or `caller`
///   is not it (the admin included)
/// * `InsufficientFunds` - a negative `delta` larger than the balance
/// * `InvalidAmount` - the new balance overflows
pub fn update_pool_balance(env: &Env, caller: Address, delta: i128) -> Result<(), PayrollError> {
    caller.require_auth();

    match get_collaborator(env, Collaborator::PayrollFunding) {
        Some(funding) if funding == caller => {}
        _ => return Err(PayrollError::NotAuthorized),
    }

    let balance = get_payroll_pool_balance(env)
        .checked_add(delta)
        .ok_or(PayrollError::InvalidAmount)?;
    if balance < 0 {
        return Err(PayrollError::InsufficientFunds);
    }
    write_balance(env, balance);

    PoolBalanceUpdated {
        funder: caller,
        delta,
        balance,
    }
    .publish(env);
    Ok(())
}

/// Pays `amount` out of the pool to the admin.
pub fn withdraw_funds(env: &Env, caller: Address, amount: i128) -> Result<(), PayrollError> {
    let config = require_admin(env, &caller)?;
    if amount < 0 {
        return Err(PayrollError::InvalidAmount);
    }

    let balance = get_payroll_pool_balance(env);
    if amount > balance {
        return Err(PayrollError::InsufficientFunds);
    }
    let balance = balance - amount;
    write_balance(env, balance);

    token::Client::new(env, &config.token).transfer(
        &env.current_contract_address(),
        &config.admin,
        &amount,
    );

    FundsWithdrawn {
        admin: config.admin,
        amount,
        balance,
    }
    .publish(env);
    Ok(())
}
