use soroban_sdk::{Address, Env, String, Symbol};

use crate::errors::PayrollError;
use crate::events::{
    CollaboratorSet, ContractPaused, ContractUnpaused, CurrencyAdded, GracePeriodSet, LocationSet,
    MaxDisbursementsSet, PenaltyRateSet, VotingThresholdSet, WorkerRoleSet,
};
use crate::storage::{
    bump_instance, read_persistent, write_persistent, Collaborator, Config, DataKey,
};

pub const DEFAULT_MAX_DISBURSEMENTS: u64 = 1_000;
pub const MAX_GRACE_PERIOD: u32 = 30;
pub const MAX_PENALTY_RATE: u32 = 100;
pub const MAX_VOTING_THRESHOLD: u32 = 100;
pub const MAX_LOCATION_LEN: u32 = 100;

// A UTF-8 character is at most 4 bytes.
const MAX_LOCATION_BYTES: usize = 4 * MAX_LOCATION_LEN as usize;

/// Stores the admin and payroll token and zeroes the pool and ledger counter.
///
/// # Errors
/// `AlreadyInitialized` on any call after the first.
pub fn initialize(env: &Env, admin: Address, token: Address) -> Result<(), PayrollError> {
    if env.storage().instance().has(&DataKey::Config) {
        return Err(PayrollError::AlreadyInitialized);
    }
    admin.require_auth();

    let config = Config {
        admin,
        token,
        paused: false,
        max_disbursements: DEFAULT_MAX_DISBURSEMENTS,
    };
    env.storage().instance().set(&DataKey::Config, &config);
    env.storage().instance().set(&DataKey::PoolBalance, &0i128);
    env.storage()
        .instance()
        .set(&DataKey::NextDisbursementId, &0u64);
    bump_instance(env);
    Ok(())
}

pub fn load_config(env: &Env) -> Result<Config, PayrollError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(PayrollError::NotInitialized)
}

fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

/// Authenticates `caller` and checks it is the contract admin.
pub(crate) fn require_admin(env: &Env, caller: &Address) -> Result<Config, PayrollError> {
    caller.require_auth();
    let config = load_config(env)?;
    if *caller != config.admin {
        return Err(PayrollError::NotAuthorized);
    }
    Ok(config)
}

//-----------------------------------------------------------------------------
// Admin setters
//-----------------------------------------------------------------------------

pub fn set_collaborator(
    env: &Env,
    caller: Address,
    kind: Collaborator,
    address: Address,
) -> Result<(), PayrollError> {
    require_admin(env, &caller)?;

    env.storage()
        .instance()
        .set(&DataKey::Collaborator(kind), &address);
    bump_instance(env);

    CollaboratorSet { kind, address }.publish(env);
    Ok(())
}

/// Pausing an already paused contract succeeds and changes nothing.
pub fn pause_contract(env: &Env, caller: Address) -> Result<(), PayrollError> {
    let mut config = require_admin(env, &caller)?;
    config.paused = true;
    save_config(env, &config);

    ContractPaused { admin: caller }.publish(env);
    Ok(())
}

pub fn unpause_contract(env: &Env, caller: Address) -> Result<(), PayrollError> {
    let mut config = require_admin(env, &caller)?;
    config.paused = false;
    save_config(env, &config);

    ContractUnpaused { admin: caller }.publish(env);
    Ok(())
}

/// A cap of zero blocks every further disbursement.
pub fn set_max_disbursements(
    env: &Env,
    caller: Address,
    max_disbursements: u64,
) -> Result<(), PayrollError> {
    let mut config = require_admin(env, &caller)?;
    config.max_disbursements = max_disbursements;
    save_config(env, &config);

    MaxDisbursementsSet { max_disbursements }.publish(env);
    Ok(())
}

pub fn add_currency(env: &Env, caller: Address, currency: Symbol) -> Result<(), PayrollError> {
    require_admin(env, &caller)?;
    write_persistent(env, &DataKey::Currency(currency.clone()), &true);

    CurrencyAdded { currency }.publish(env);
    Ok(())
}

pub fn set_worker_role(
    env: &Env,
    caller: Address,
    worker: Address,
    role: String,
) -> Result<(), PayrollError> {
    require_admin(env, &caller)?;
    write_persistent(env, &DataKey::WorkerRole(worker.clone()), &role);

    WorkerRoleSet { worker, role }.publish(env);
    Ok(())
}

pub fn set_grace_period(
    env: &Env,
    caller: Address,
    worker: Address,
    period: u32,
) -> Result<(), PayrollError> {
    require_admin(env, &caller)?;
    if period > MAX_GRACE_PERIOD {
        return Err(PayrollError::InvalidGracePeriod);
    }
    write_persistent(env, &DataKey::GracePeriod(worker.clone()), &period);

    GracePeriodSet { worker, period }.publish(env);
    Ok(())
}

/// `rate` is a percentage.
pub fn set_penalty_rate(
    env: &Env,
    caller: Address,
    worker: Address,
    rate: u32,
) -> Result<(), PayrollError> {
    require_admin(env, &caller)?;
    if rate > MAX_PENALTY_RATE {
        return Err(PayrollError::InvalidPenaltyRate);
    }
    write_persistent(env, &DataKey::PenaltyRate(worker.clone()), &rate);

    PenaltyRateSet { worker, rate }.publish(env);
    Ok(())
}

pub fn set_voting_threshold(
    env: &Env,
    caller: Address,
    group_id: u64,
    threshold: u32,
) -> Result<(), PayrollError> {
    require_admin(env, &caller)?;
    if threshold == 0 || threshold > MAX_VOTING_THRESHOLD {
        return Err(PayrollError::InvalidVotingThreshold);
    }
    write_persistent(env, &DataKey::VotingThreshold(group_id), &threshold);

    VotingThresholdSet {
        group_id,
        threshold,
    }
    .publish(env);
    Ok(())
}

pub fn set_location(
    env: &Env,
    caller: Address,
    worker: Address,
    location: String,
) -> Result<(), PayrollError> {
    require_admin(env, &caller)?;
    match location_chars(&location) {
        Some(chars) if chars > 0 && chars <= MAX_LOCATION_LEN => {}
        _ => return Err(PayrollError::InvalidLocation),
    }
    write_persistent(env, &DataKey::Location(worker.clone()), &location);

    LocationSet { worker, location }.publish(env);
    Ok(())
}

/// Character count of `location`, or `None` when it cannot fit in
/// `MAX_LOCATION_LEN` characters or is not valid UTF-8.
fn location_chars(location: &String) -> Option<u32> {
    let len = location.len() as usize;
    if len > MAX_LOCATION_BYTES {
        return None;
    }
    let mut buf = [0u8; MAX_LOCATION_BYTES];
    location.copy_into_slice(&mut buf[..len]);
    let text = core::str::from_utf8(&buf[..len]).ok()?;
    Some(text.chars().count() as u32)
}

//-----------------------------------------------------------------------------
// Queries
//-----------------------------------------------------------------------------

pub fn get_collaborator(env: &Env, kind: Collaborator) -> Option<Address> {
    env.storage().instance().get(&DataKey::Collaborator(kind))
}

pub fn is_currency_supported(env: &Env, currency: Symbol) -> bool {
    read_persistent::<bool>(env, &DataKey::Currency(currency)).is_some()
}

pub fn get_worker_role(env: &Env, worker: Address) -> Option<String> {
    read_persistent(env, &DataKey::WorkerRole(worker))
}

pub fn get_grace_period(env: &Env, worker: Address) -> Option<u32> {
    read_persistent(env, &DataKey::GracePeriod(worker))
}

pub fn get_penalty_rate(env: &Env, worker: Address) -> Option<u32> {
    read_persistent(env, &DataKey::PenaltyRate(worker))
}

pub fn get_voting_threshold(env: &Env, group_id: u64) -> Option<u32> {
    read_persistent(env, &DataKey::VotingThreshold(group_id))
}

pub fn get_location(env: &Env, worker: Address) -> Option<String> {
    read_persistent(env, &DataKey::Location(worker))
}
