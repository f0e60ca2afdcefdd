use soroban_sdk::{Address, Env, Vec};

use crate::storage::{bump_instance, read_persistent, write_persistent, DataKey, Disbursement};

/// Id the next successful disbursement will receive. Starts at 0.
pub fn get_next_disbursement_id(env: &Env) -> u64 {
    // Seeded by `initialize`; only missing on an uninitialised contract.
    env.storage()
        .instance()
        .get(&DataKey::NextDisbursementId)
        .unwrap_or(0)
}

/// Appends a disbursement under the current counter value and advances the
/// counter. Only the disbursement engine calls this, after every guard has
/// passed, so ids never skip.
pub(crate) fn append(env: &Env, worker: &Address, amount: i128, timestamp: u64) -> u64 {
    let id = get_next_disbursement_id(env);

    let entry = Disbursement {
        id,
        worker: worker.clone(),
        amount,
        timestamp,
        status: true,
    };
    write_persistent(env, &DataKey::Disbursement(id), &entry);

    env.storage()
        .instance()
        .set(&DataKey::NextDisbursementId, &(id + 1));
    bump_instance(env);

    // Worker history index
    let key = DataKey::DisbursementHistory(worker.clone());
    let mut history: Vec<u64> = read_persistent(env, &key).unwrap_or(Vec::new(env));
    history.push_back(id);
    write_persistent(env, &key, &history);

    id
}

pub fn get_disbursement(env: &Env, id: u64) -> Option<Disbursement> {
    read_persistent(env, &DataKey::Disbursement(id))
}

/// Ids paid to `worker`, oldest first. `None` if the worker was never paid.
pub fn get_disbursement_history(env: &Env, worker: Address) -> Option<Vec<u64>> {
    read_persistent(env, &DataKey::DisbursementHistory(worker))
}
