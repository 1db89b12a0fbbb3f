//! Upsert Planner.
//!
//! Maps a validated command onto the single statement that carries it out.
//! Planning is pure: the plan says which columns are written, the executor
//! decides when.

use crate::validation::{CreateModule, DeleteModule, UpdateModule};
use db::ModuleChanges;
use std::fmt;

/// One write against the modules table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WritePlan {
    Insert { changes: ModuleChanges },
    Update { id: i64, changes: ModuleChanges },
    Delete { id: i64 },
}

impl WritePlan {
    pub fn kind(&self) -> &'static str {
        match self {
            WritePlan::Insert { .. } => "insert",
            WritePlan::Update { .. } => "update",
            WritePlan::Delete { .. } => "delete",
        }
    }

    /// The module a plan targets. Inserts have no id until executed.
    pub fn target(&self) -> Option<i64> {
        match self {
            WritePlan::Insert { .. } => None,
            WritePlan::Update { id, .. } | WritePlan::Delete { id } => Some(*id),
        }
    }

    /// Columns the statement writes; empty for a delete.
    pub fn columns(&self) -> Vec<&'static str> {
        match self {
            WritePlan::Insert { changes } | WritePlan::Update { changes, .. } => changes.columns(),
            WritePlan::Delete { .. } => Vec::new(),
        }
    }
}

impl fmt::Display for WritePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target() {
            Some(id) => write!(f, "{} module {id} [{}]", self.kind(), self.columns().join(", ")),
            None => write!(f, "{} module [{}]", self.kind(), self.columns().join(", ")),
        }
    }
}

pub trait ToWritePlan {
    fn into_write_plan(self) -> WritePlan;
}

impl ToWritePlan for CreateModule {
    fn into_write_plan(self) -> WritePlan {
        // An empty blob is stored as NULL.
        let preview = Some(self.preview).filter(|bytes| !bytes.is_empty());

        WritePlan::Insert {
            changes: ModuleChanges {
                title: Some(self.title),
                preview: Some(preview),
                semester: Some(self.semester),
                quantity: Some(self.quantity),
                department_id: Some(self.department_id),
                course_id: Some(self.course_id),
            },
        }
    }
}

impl ToWritePlan for UpdateModule {
    fn into_write_plan(self) -> WritePlan {
        WritePlan::Update {
            id: self.id,
            changes: ModuleChanges {
                quantity: Some(self.quantity),
                preview: self.preview.map(Some),
                ..Default::default()
            },
        }
    }
}

impl ToWritePlan for DeleteModule {
    fn into_write_plan(self) -> WritePlan {
        WritePlan::Delete { id: self.id }
    }
}
