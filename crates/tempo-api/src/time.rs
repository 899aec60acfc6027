// ── Time entry & timer endpoints ──
//
// These endpoints use the generic `{"data": ...}` envelope, except the
// running-timer probe which wraps its (nullable) payload in `{"timer": ...}`.
// The list endpoint takes `limit` instead of `pageSize`.

use serde::Serialize;

use crate::Error;
use crate::client::ApiClient;
use crate::types::{
    DataEnvelope, DateFilter, Page, PageQuery, PagedDataEnvelope, ProjectWithTasksDto,
    TimeEntryDraft, TimeEntryDto, TimeEntryUpdates, TimerEnvelope, TimerStart,
};

impl ApiClient {
    /// The organization's currently running timer, if any.
    pub async fn get_running_timer(&self, org_id: &str) -> Result<Option<TimeEntryDto>, Error> {
        let env: TimerEnvelope = self.get(&format!("time/{org_id}/timer/running")).await?;
        Ok(env.timer)
    }

    pub async fn start_timer(
        &self,
        org_id: &str,
        start: &TimerStart,
    ) -> Result<TimeEntryDto, Error> {
        let env: DataEnvelope<TimeEntryDto> = self
            .post(&format!("time/{org_id}/timer/start"), start)
            .await?;
        Ok(env.data)
    }

    /// Stop a running timer; returns the completed entry.
    pub async fn stop_timer(&self, org_id: &str, entry_id: &str) -> Result<TimeEntryDto, Error> {
        let env: DataEnvelope<TimeEntryDto> = self
            .patch_empty(&format!("time/{org_id}/timer/{entry_id}/stop"))
            .await?;
        Ok(env.data)
    }

    pub async fn list_time_entries(
        &self,
        org_id: &str,
        page: PageQuery,
        date: Option<DateFilter>,
    ) -> Result<Page<TimeEntryDto>, Error> {
        let mut params = page.to_limit_params();
        if let Some(date) = date {
            params.push(date.as_param());
        }

        let env: PagedDataEnvelope<TimeEntryDto> = self
            .get_with_params(&format!("time/{org_id}"), &params)
            .await?;
        Ok(Page {
            items: env.data,
            pagination: env.pagination,
        })
    }

    pub async fn create_time_entry(
        &self,
        org_id: &str,
        draft: &TimeEntryDraft,
    ) -> Result<TimeEntryDto, Error> {
        let env: DataEnvelope<TimeEntryDto> = self.post(&format!("time/{org_id}"), draft).await?;
        Ok(env.data)
    }

    pub async fn update_time_entry(
        &self,
        org_id: &str,
        entry_id: &str,
        draft: &TimeEntryDraft,
    ) -> Result<TimeEntryDto, Error> {
        let env: DataEnvelope<TimeEntryDto> =
            self.put(&format!("time/{org_id}/{entry_id}"), draft).await?;
        Ok(env.data)
    }

    pub async fn delete_time_entry(&self, org_id: &str, entry_id: &str) -> Result<(), Error> {
        self.delete(&format!("time/{org_id}/{entry_id}")).await
    }

    /// Apply the same field updates to a set of entries in one request.
    pub async fn bulk_update_time_entries(
        &self,
        org_id: &str,
        entry_ids: &[String],
        updates: &TimeEntryUpdates,
    ) -> Result<(), Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'a> {
            time_entry_ids: &'a [String],
            updates: &'a TimeEntryUpdates,
        }

        let _: serde_json::Value = self
            .put(
                &format!("time/{org_id}/bulk/update"),
                &Body {
                    time_entry_ids: entry_ids,
                    updates,
                },
            )
            .await?;
        Ok(())
    }

    pub async fn bulk_delete_time_entries(
        &self,
        org_id: &str,
        entry_ids: &[String],
    ) -> Result<(), Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'a> {
            time_entry_ids: &'a [String],
        }

        self.delete_with_body(
            &format!("time/{org_id}/bulk/delete"),
            &Body {
                time_entry_ids: entry_ids,
            },
        )
        .await
    }

    /// Projects with their tasks inlined, for the entry/timer pickers.
    pub async fn list_projects_with_tasks(
        &self,
        org_id: &str,
    ) -> Result<Vec<ProjectWithTasksDto>, Error> {
        let env: DataEnvelope<Vec<ProjectWithTasksDto>> = self
            .get(&format!("time/{org_id}/projects-with-tasks"))
            .await?;
        Ok(env.data)
    }
}
