//! Transactional Executor.
//!
//! Runs exactly one [`WritePlan`] inside its own transaction. A statement that
//! touches no rows is resolved inside the same transaction: either the module
//! is gone (`NotFound`) or it exists and the write was a no-op (`Conflict`).

use crate::error::AppError;
use crate::planner::WritePlan;
use db::ModuleRepository;
use sea_orm::{DatabaseTransaction, TransactionTrait};

/// What a committed plan did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created(i64),
    Updated(i64),
    Deleted(i64),
}

impl WriteOutcome {
    pub fn id(&self) -> i64 {
        match *self {
            WriteOutcome::Created(id) | WriteOutcome::Updated(id) | WriteOutcome::Deleted(id) => id,
        }
    }
}

pub async fn execute<C>(db: &C, plan: WritePlan) -> Result<WriteOutcome, AppError>
where
    C: TransactionTrait,
{
    let description = plan.to_string();
    let txn = db.begin().await?;
    tracing::debug!(plan = %description, "transaction started");

    match apply(&txn, plan).await {
        Ok(outcome) => {
            txn.commit().await?;
            tracing::debug!(plan = %description, id = outcome.id(), "transaction committed");
            Ok(outcome)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!(plan = %description, error = %rollback_err, "rollback failed");
            } else {
                tracing::debug!(plan = %description, error = %err, "transaction rolled back");
            }
            Err(err)
        }
    }
}

async fn apply(txn: &DatabaseTransaction, plan: WritePlan) -> Result<WriteOutcome, AppError> {
    match plan {
        WritePlan::Insert { changes } => {
            let id = ModuleRepository::insert(txn, changes).await?;
            Ok(WriteOutcome::Created(id))
        }
        WritePlan::Update { id, changes } => {
            let affected = ModuleRepository::update(txn, id, changes).await?;
            if affected == 0 {
                return Err(explain_no_op(txn, id, "No changes were applied to the module.").await);
            }
            Ok(WriteOutcome::Updated(id))
        }
        WritePlan::Delete { id } => {
            let affected = ModuleRepository::delete(txn, id).await?;
            if affected == 0 {
                return Err(explain_no_op(
                    txn,
                    id,
                    "No module was deleted. It may have already been removed.",
                )
                .await);
            }
            Ok(WriteOutcome::Deleted(id))
        }
    }
}

async fn explain_no_op(txn: &DatabaseTransaction, id: i64, conflict: &str) -> AppError {
    match ModuleRepository::exists(txn, id).await {
        Ok(false) => AppError::NotFound("Module not found".to_string()),
        Ok(true) => AppError::Conflict(conflict.to_string()),
        Err(err) => AppError::Storage(err),
    }
}
