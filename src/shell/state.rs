use crate::modules::leave_balances::core::policy::LeavePolicy;
use crate::modules::leave_balances::use_cases::calculate_leave_balance::handler::CalculateLeaveBalanceHandler;
use crate::modules::leave_balances::use_cases::cancel_leave::handler::CancelLeaveHandler;
use crate::modules::leave_balances::use_cases::request_leave::handler::RequestLeaveHandler;
use crate::modules::leave_balances::use_cases::set_leave_allocation::handler::SetLeaveAllocationHandler;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use anyhow::Context;
use std::path::Path;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub balances: Arc<CalculateLeaveBalanceHandler<InMemoryRecordStore>>,
    pub request_leave_handler: Arc<RequestLeaveHandler<InMemoryRecordStore>>,
    pub cancel_leave_handler: Arc<CancelLeaveHandler<InMemoryRecordStore>>,
    pub set_leave_allocation_handler: Arc<SetLeaveAllocationHandler<InMemoryRecordStore>>,
}

impl AppState {
    pub fn new(store: Arc<InMemoryRecordStore>, policy: LeavePolicy) -> Self {
        let balances = Arc::new(CalculateLeaveBalanceHandler::new(store.clone(), policy));
        Self {
            request_leave_handler: Arc::new(RequestLeaveHandler::new(
                store.clone(),
                balances.clone(),
            )),
            cancel_leave_handler: Arc::new(CancelLeaveHandler::new(
                store.clone(),
                balances.clone(),
            )),
            set_leave_allocation_handler: Arc::new(SetLeaveAllocationHandler::new(
                store,
                balances.clone(),
            )),
            balances,
        }
    }
}

/// Empty store, or one preloaded from a `{ "<table>": [rows] }` JSON file.
pub async fn load_record_store(seed_file: Option<&Path>) -> anyhow::Result<InMemoryRecordStore> {
    let Some(path) = seed_file else {
        return Ok(InMemoryRecordStore::new());
    };
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading seed file {}", path.display()))?;
    let seed: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("parsing seed file {}", path.display()))?;
    let store = InMemoryRecordStore::from_json(seed)?;
    tracing::info!(path = %path.display(), "record store seeded");
    Ok(store)
}
