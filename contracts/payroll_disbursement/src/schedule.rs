use soroban_sdk::{Address, Env};

use crate::config::require_admin;
use crate::errors::PayrollError;
use crate::events::WorkerScheduleSet;
use crate::storage::{read_persistent, write_persistent, DataKey, WorkerSchedule};

/// Sets (or replaces) a worker's pay cadence and amount.
///
/// Replacing an existing schedule resets `last_disbursed` to 0, so the
/// cooldown clock restarts from the ledger epoch.
///
/// # Errors
/// * `NotAuthorized` - caller is not the admin
/// * `InvalidSchedule` - `cadence` is zero
/// * `InvalidAmount` - `amount` is not positive
pub fn set_worker_schedule(
    env: &Env,
    caller: Address,
    worker: Address,
    cadence: u64,
    amount: i128,
) -> Result<(), PayrollError> {
    require_admin(env, &caller)?;
    if cadence == 0 {
        return Err(PayrollError::InvalidSchedule);
    }
    if amount <= 0 {
        return Err(PayrollError::InvalidAmount);
    }

    let schedule = WorkerSchedule {
        cadence,
        last_disbursed: 0,
        amount,
    };
    write_schedule(env, &worker, &schedule);

    WorkerScheduleSet {
        worker,
        cadence,
        amount,
    }
    .publish(env);
    Ok(())
}

pub fn get_worker_schedule(env: &Env, worker: &Address) -> Option<WorkerSchedule> {
    read_persistent(env, &DataKey::WorkerSchedule(worker.clone()))
}

pub(crate) fn write_schedule(env: &Env, worker: &Address, schedule: &WorkerSchedule) {
    write_persistent(env, &DataKey::WorkerSchedule(worker.clone()), schedule);
}

/// Earliest timestamp at which the worker may be paid again.
pub(crate) fn next_eligible_at(schedule: &WorkerSchedule) -> u64 {
    schedule.last_disbursed.saturating_add(schedule.cadence)
}
