use soroban_sdk::{Address, Env, String, Vec};

use crate::config::require_admin;
use crate::errors::PayrollError;
use crate::events::PayrollGroupCreated;
use crate::storage::{read_persistent, write_persistent, DataKey, PayrollGroup};

/// Creates a payroll group, overwriting any group with the same id.
///
/// The creating admin is recorded as the group admin. Members are taken
/// as given; identity checks belong to the worker registry.
pub fn create_payroll_group(
    env: &Env,
    caller: Address,
    group_id: u64,
    name: String,
    members: Vec<Address>,
) -> Result<(), PayrollError> {
    require_admin(env, &caller)?;

    let group = PayrollGroup {
        id: group_id,
        name,
        members: members.clone(),
        admin: caller.clone(),
    };
    write_persistent(env, &DataKey::PayrollGroup(group_id), &group);

    PayrollGroupCreated {
        group_id,
        admin: caller,
        members,
    }
    .publish(env);
    Ok(())
}

pub fn get_payroll_group(env: &Env, group_id: u64) -> Option<PayrollGroup> {
    read_persistent(env, &DataKey::PayrollGroup(group_id))
}

pub fn get_group_admin(env: &Env, group_id: u64) -> Option<Address> {
    get_payroll_group(env, group_id).map(|group| group.admin)
}
