use crate::error::AppError;
use crate::executor::{self, WriteOutcome};
use crate::planner::ToWritePlan;
use crate::validation::{self, ModuleForm};
use db::{ModuleFilter, ModuleListing, ModuleRepository};
use sea_orm::DatabaseConnection;

/// Entry point for every module command.
///
/// Writes flow through validation, planning and a single transaction; reads
/// go straight to the record store.
#[derive(Debug, Clone)]
pub struct ModuleService {
    db: DatabaseConnection,
}

impl ModuleService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a module. Once the transaction commits the result is `Ok`;
    /// nothing is read back afterwards.
    pub async fn create(&self, form: ModuleForm) -> Result<WriteOutcome, AppError> {
        let command = validation::validate_create(form)?;
        let outcome = executor::execute(&self.db, command.into_write_plan()).await?;
        tracing::info!(id = outcome.id(), "Module created");
        Ok(outcome)
    }

    /// Sets the quantity of a module and optionally replaces its preview.
    pub async fn update(&self, form: ModuleForm) -> Result<WriteOutcome, AppError> {
        let command = validation::validate_update(form)?;
        let outcome = executor::execute(&self.db, command.into_write_plan()).await?;
        tracing::info!(id = outcome.id(), "Module updated");
        Ok(outcome)
    }

    pub async fn delete(&self, form: ModuleForm) -> Result<WriteOutcome, AppError> {
        let command = validation::validate_delete(form)?;
        let outcome = executor::execute(&self.db, command.into_write_plan()).await?;
        tracing::info!(id = outcome.id(), "Module deleted");
        Ok(outcome)
    }

    pub async fn get(&self, id: i64) -> Result<ModuleListing, AppError> {
        let filter = ModuleFilter::new().with_id(id);
        ModuleRepository::list(&self.db, &filter)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound("Module not found".to_string()))
    }

    pub async fn list(&self, filter: &ModuleFilter) -> Result<Vec<ModuleListing>, AppError> {
        Ok(ModuleRepository::list(&self.db, filter).await?)
    }
}
