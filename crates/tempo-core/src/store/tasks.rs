// ── Task store ──
//
// Tasks for one project. The list is not paginated; the tabbed view
// partitions it by status instead.

use std::sync::Arc;

use tempo_api::types::{TaskDraft, TaskPatch};
use tempo_api::ApiClient;

use crate::error::CoreError;
use crate::model::{partition_by_status, EntityId, Task, TaskStatus};
use crate::notice::NoticeSender;

pub struct TaskStore {
    api: Arc<ApiClient>,
    org_id: String,
    project_id: EntityId,
    notices: NoticeSender,
    tasks: Vec<Task>,
    loading: bool,
    mutating: bool,
}

impl TaskStore {
    pub fn new(
        api: Arc<ApiClient>,
        org_id: impl Into<String>,
        project_id: EntityId,
        notices: NoticeSender,
    ) -> Self {
        Self {
            api,
            org_id: org_id.into(),
            project_id,
            notices,
            tasks: Vec::new(),
            loading: false,
            mutating: false,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The (active, done) tab partitions.
    pub fn partitions(&self) -> (Vec<&Task>, Vec<&Task>) {
        partition_by_status(&self.tasks)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_mutating(&self) -> bool {
        self.mutating
    }

    // ── Actions ──────────────────────────────────────────────────────

    pub async fn load(&mut self) -> Result<(), CoreError> {
        self.loading = true;
        let result = self
            .api
            .list_tasks(&self.org_id, &self.project_id.to_string())
            .await;
        self.loading = false;

        let dtos = result.map_err(|e| self.fail(e, "Failed to load tasks"))?;
        self.tasks = dtos.into_iter().map(Task::from).collect();
        Ok(())
    }

    pub async fn create(&mut self, draft: &TaskDraft) -> Result<Task, CoreError> {
        self.mutating = true;
        let result = self
            .api
            .create_task(&self.org_id, &self.project_id.to_string(), draft)
            .await;
        self.mutating = false;

        let task: Task = result
            .map_err(|e| self.fail(e, "Failed to create task"))?
            .into();
        self.tasks.push(task.clone());
        self.notices.success(format!("Task \"{}\" created", task.name));
        Ok(task)
    }

    pub async fn update(&mut self, id: &EntityId, patch: &TaskPatch) -> Result<Task, CoreError> {
        self.mutating = true;
        let result = self
            .api
            .update_task(
                &self.org_id,
                &self.project_id.to_string(),
                &id.to_string(),
                patch,
            )
            .await;
        self.mutating = false;

        let task: Task = result
            .map_err(|e| self.fail(e, "Failed to update task"))?
            .into();
        self.apply_saved(task.clone());
        self.notices.success(format!("Task \"{}\" updated", task.name));
        Ok(task)
    }

    /// Flip a task's status; the confirmed copy moves it between the
    /// Active and Done partitions.
    pub async fn set_status(&mut self, id: &EntityId, status: TaskStatus) -> Result<Task, CoreError> {
        self.mutating = true;
        let result = self
            .api
            .update_task_status(
                &self.org_id,
                &self.project_id.to_string(),
                &id.to_string(),
                &status.to_string(),
            )
            .await;
        self.mutating = false;

        let task: Task = result
            .map_err(|e| self.fail(e, "Failed to update task status"))?
            .into();
        self.apply_saved(task.clone());
        let verb = match task.status {
            TaskStatus::Done => "completed",
            TaskStatus::Active => "reopened",
        };
        self.notices.success(format!("Task \"{}\" {verb}", task.name));
        Ok(task)
    }

    pub async fn delete(&mut self, id: &EntityId) -> Result<(), CoreError> {
        self.mutating = true;
        let result = self
            .api
            .delete_task(&self.org_id, &self.project_id.to_string(), &id.to_string())
            .await;
        self.mutating = false;

        result.map_err(|e| self.fail(e, "Failed to delete task"))?;
        self.tasks.retain(|task| &task.id != id);
        self.notices.success("Task deleted");
        Ok(())
    }

    // ── Folding ──────────────────────────────────────────────────────

    fn apply_saved(&mut self, task: Task) {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => *slot = task,
            None => self.tasks.push(task),
        }
    }

    fn fail(&self, err: tempo_api::Error, fallback: &str) -> CoreError {
        let err = CoreError::from(err);
        self.notices.error(err.user_message(fallback));
        err
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempo_api::TransportConfig;

    fn store() -> TaskStore {
        let api = ApiClient::from_reqwest(
            "http://localhost",
            TransportConfig::default().build_client().unwrap(),
        )
        .unwrap();
        let (notices, _rx) = NoticeSender::channel();
        TaskStore::new(Arc::new(api), "org1", EntityId::from("p1"), notices)
    }

    fn task(id: &str, status: TaskStatus) -> Task {
        Task {
            id: EntityId::from(id),
            name: id.to_owned(),
            status,
            spent_time: None,
            estimated_time: None,
            project_id: EntityId::from("p1"),
        }
    }

    #[test]
    fn status_change_moves_exactly_one_task_between_partitions() {
        let mut store = store();
        store.tasks = vec![
            task("a", TaskStatus::Active),
            task("b", TaskStatus::Active),
            task("c", TaskStatus::Done),
        ];

        store.apply_saved(task("b", TaskStatus::Done));

        let (active, done) = store.partitions();
        assert_eq!(
            active.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
            ["a"]
        );
        assert_eq!(
            done.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
            ["b", "c"]
        );
    }

    #[test]
    fn saved_task_replaces_in_place() {
        let mut store = store();
        store.tasks = vec![task("a", TaskStatus::Active)];

        let mut renamed = task("a", TaskStatus::Active);
        renamed.name = "renamed".into();
        store.apply_saved(renamed);

        assert_eq!(store.tasks.len(), 1);
        assert_eq!(store.tasks[0].name, "renamed");
    }
}
