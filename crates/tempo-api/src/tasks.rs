// ── Task endpoints ──
//
// Tasks are scoped to a project; the backend routes them under the
// `project/tasks/` prefix.

use serde::Serialize;

use crate::Error;
use crate::client::ApiClient;
use crate::types::{TaskDraft, TaskDto, TaskEnvelope, TaskListEnvelope, TaskPatch};

impl ApiClient {
    pub async fn list_tasks(&self, org_id: &str, project_id: &str) -> Result<Vec<TaskDto>, Error> {
        let env: TaskListEnvelope = self
            .get(&format!("project/tasks/{project_id}/{org_id}"))
            .await?;
        Ok(env.tasks)
    }

    pub async fn create_task(
        &self,
        org_id: &str,
        project_id: &str,
        draft: &TaskDraft,
    ) -> Result<TaskDto, Error> {
        let env: TaskEnvelope = self
            .post(&format!("project/tasks/{project_id}/{org_id}"), draft)
            .await?;
        Ok(env.task)
    }

    pub async fn update_task(
        &self,
        org_id: &str,
        project_id: &str,
        task_id: &str,
        patch: &TaskPatch,
    ) -> Result<TaskDto, Error> {
        let env: TaskEnvelope = self
            .put(
                &format!("project/tasks/{task_id}/{project_id}/{org_id}"),
                patch,
            )
            .await?;
        Ok(env.task)
    }

    /// Flip a task between `ACTIVE` and `DONE`.
    pub async fn update_task_status(
        &self,
        org_id: &str,
        project_id: &str,
        task_id: &str,
        status: &str,
    ) -> Result<TaskDto, Error> {
        #[derive(Serialize)]
        struct Body<'a> {
            status: &'a str,
        }

        let env: TaskEnvelope = self
            .put(
                &format!("project/tasks/status/{task_id}/{project_id}/{org_id}"),
                &Body { status },
            )
            .await?;
        Ok(env.task)
    }

    pub async fn delete_task(
        &self,
        org_id: &str,
        project_id: &str,
        task_id: &str,
    ) -> Result<(), Error> {
        self.delete(&format!("project/tasks/{task_id}/{project_id}/{org_id}"))
            .await
    }
}
