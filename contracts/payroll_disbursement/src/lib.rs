#![no_std]

mod config;
mod disbursement;
pub mod errors;
mod events;
mod groups;
mod ledger;
mod pool;
mod schedule;
pub mod storage;

#[cfg(test)]
mod tests;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol, Vec};

pub use errors::PayrollError;
pub use storage::{Collaborator, Config, Disbursement, PayrollGroup, WorkerSchedule};

/// Recurring salary disbursement from a shared payroll pool.
///
/// # Access Control
///
/// - Configuration, schedules, groups and withdrawals: contract admin only
/// - `update_pool_balance`: registered payroll funding contract only
/// - `disburse_salary` and all queries: anyone
#[contract]
pub struct PayrollDisbursementContract;

#[contractimpl]
impl PayrollDisbursementContract {
    /// Initializes the contract.
    ///
    /// # Arguments
    /// * `admin` - Contract admin (must authenticate)
    /// * `token` - Token the pool pays out in
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), PayrollError> {
        config::initialize(&env, admin, token)
    }

    // ── Collaborators ─────────────────────────────────────────────────────────

    pub fn set_worker_registry(
        env: Env,
        caller: Address,
        collaborator: Address,
    ) -> Result<(), PayrollError> {
        config::set_collaborator(&env, caller, Collaborator::WorkerRegistry, collaborator)
    }

    /// Registers the only address allowed to call `update_pool_balance`.
    pub fn set_payroll_funding(
        env: Env,
        caller: Address,
        collaborator: Address,
    ) -> Result<(), PayrollError> {
        config::set_collaborator(&env, caller, Collaborator::PayrollFunding, collaborator)
    }

    pub fn set_dispute_resolution(
        env: Env,
        caller: Address,
        collaborator: Address,
    ) -> Result<(), PayrollError> {
        config::set_collaborator(&env, caller, Collaborator::DisputeResolution, collaborator)
    }

    pub fn set_audit_log(env: Env, caller: Address, collaborator: Address) -> Result<(), PayrollError> {
        config::set_collaborator(&env, caller, Collaborator::AuditLog, collaborator)
    }

    pub fn set_transparency_report(
        env: Env,
        caller: Address,
        collaborator: Address,
    ) -> Result<(), PayrollError> {
        config::set_collaborator(&env, caller, Collaborator::TransparencyReport, collaborator)
    }

    pub fn get_worker_registry(env: Env) -> Option<Address> {
        config::get_collaborator(&env, Collaborator::WorkerRegistry)
    }

    pub fn get_payroll_funding(env: Env) -> Option<Address> {
        config::get_collaborator(&env, Collaborator::PayrollFunding)
    }

    pub fn get_dispute_resolution(env: Env) -> Option<Address> {
        config::get_collaborator(&env, Collaborator::DisputeResolution)
    }

    pub fn get_audit_log(env: Env) -> Option<Address> {
        config::get_collaborator(&env, Collaborator::AuditLog)
    }

    pub fn get_transparency_report(env: Env) -> Option<Address> {
        config::get_collaborator(&env, Collaborator::TransparencyReport)
    }

    // ── Contract settings ─────────────────────────────────────────────────────

    pub fn pause_contract(env: Env, caller: Address) -> Result<(), PayrollError> {
        config::pause_contract(&env, caller)
    }

    pub fn unpause_contract(env: Env, caller: Address) -> Result<(), PayrollError> {
        config::unpause_contract(&env, caller)
    }

    pub fn set_max_disbursements(
        env: Env,
        caller: Address,
        max_disbursements: u64,
    ) -> Result<(), PayrollError> {
        config::set_max_disbursements(&env, caller, max_disbursements)
    }

    pub fn add_currency(env: Env, caller: Address, currency: Symbol) -> Result<(), PayrollError> {
        config::add_currency(&env, caller, currency)
    }

    pub fn get_admin(env: Env) -> Result<Address, PayrollError> {
        Ok(config::load_config(&env)?.admin)
    }

    pub fn get_token(env: Env) -> Result<Address, PayrollError> {
        Ok(config::load_config(&env)?.token)
    }

    pub fn is_paused(env: Env) -> Result<bool, PayrollError> {
        Ok(config::load_config(&env)?.paused)
    }

    pub fn get_max_disbursements(env: Env) -> Result<u64, PayrollError> {
        Ok(config::load_config(&env)?.max_disbursements)
    }

    pub fn is_currency_supported(env: Env, currency: Symbol) -> bool {
        config::is_currency_supported(&env, currency)
    }

    // ── Worker attributes ─────────────────────────────────────────────────────

    pub fn set_worker_role(
        env: Env,
        caller: Address,
        worker: Address,
        role: String,
    ) -> Result<(), PayrollError> {
        config::set_worker_role(&env, caller, worker, role)
    }

    /// # Errors
    /// `InvalidGracePeriod` if `period` is above 30.
    pub fn set_grace_period(
        env: Env,
        caller: Address,
        worker: Address,
        period: u32,
    ) -> Result<(), PayrollError> {
        config::set_grace_period(&env, caller, worker, period)
    }

    /// # Errors
    /// `InvalidPenaltyRate` if `rate` is above 100.
    pub fn set_penalty_rate(
        env: Env,
        caller: Address,
        worker: Address,
        rate: u32,
    ) -> Result<(), PayrollError> {
        config::set_penalty_rate(&env, caller, worker, rate)
    }

    /// # Errors
    /// `InvalidLocation` if `location` is empty or longer than 100 bytes.
    pub fn set_location(
        env: Env,
        caller: Address,
        worker: Address,
        location: String,
    ) -> Result<(), PayrollError> {
        config::set_location(&env, caller, worker, location)
    }

    pub fn get_worker_role(env: Env, worker: Address) -> Option<String> {
        config::get_worker_role(&env, worker)
    }

    pub fn get_grace_period(env: Env, worker: Address) -> Option<u32> {
        config::get_grace_period(&env, worker)
    }

    pub fn get_penalty_rate(env: Env, worker: Address) -> Option<u32> {
        config::get_penalty_rate(&env, worker)
    }

    pub fn get_location(env: Env, worker: Address) -> Option<String> {
        config::get_location(&env, worker)
    }

    // ── Schedules ─────────────────────────────────────────────────────────────

    pub fn set_worker_schedule(
        env: Env,
        caller: Address,
        worker: Address,
        cadence: u64,
        amount: i128,
    ) -> Result<(), PayrollError> {
        schedule::set_worker_schedule(&env, caller, worker, cadence, amount)
    }

    pub fn get_worker_schedule(env: Env, worker: Address) -> Option<WorkerSchedule> {
        schedule::get_worker_schedule(&env, &worker)
    }

    // ── Groups ────────────────────────────────────────────────────────────────

    pub fn create_payroll_group(
        env: Env,
        caller: Address,
        group_id: u64,
        name: String,
        members: Vec<Address>,
    ) -> Result<(), PayrollError> {
        groups::create_payroll_group(&env, caller, group_id, name, members)
    }

    /// # Errors
    /// `InvalidVotingThreshold` unless `threshold` is within 1..=100.
    pub fn set_voting_threshold(
        env: Env,
        caller: Address,
        group_id: u64,
        threshold: u32,
    ) -> Result<(), PayrollError> {
        config::set_voting_threshold(&env, caller, group_id, threshold)
    }

    pub fn get_payroll_group(env: Env, group_id: u64) -> Option<PayrollGroup> {
        groups::get_payroll_group(&env, group_id)
    }

    pub fn get_group_admin(env: Env, group_id: u64) -> Option<Address> {
        groups::get_group_admin(&env, group_id)
    }

    pub fn get_voting_threshold(env: Env, group_id: u64) -> Option<u32> {
        config::get_voting_threshold(&env, group_id)
    }

    // ── Pool ──────────────────────────────────────────────────────────────────

    pub fn update_pool_balance(env: Env, caller: Address, delta: i128) -> Result<(), PayrollError> {
        pool::update_pool_balance(&env, caller, delta)
    }

    pub fn withdraw_funds(env: Env, caller: Address, amount: i128) -> Result<(), PayrollError> {
        pool::withdraw_funds(&env, caller, amount)
    }

    pub fn get_payroll_pool_balance(env: Env) -> i128 {
        pool::get_payroll_pool_balance(&env)
    }

    // ── Disbursement ──────────────────────────────────────────────────────────

    pub fn disburse_salary(env: Env, worker: Address) -> Result<u64, PayrollError> {
        disbursement::disburse_salary(&env, worker)
    }

    pub fn get_next_disbursement_id(env: Env) -> u64 {
        ledger::get_next_disbursement_id(&env)
    }

    pub fn get_disbursement(env: Env, id: u64) -> Option<Disbursement> {
        ledger::get_disbursement(&env, id)
    }

    pub fn get_disbursement_history(env: Env, worker: Address) -> Option<Vec<u64>> {
        ledger::get_disbursement_history(&env, worker)
    }
}
