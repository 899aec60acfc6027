// ── Client (customer) endpoints ──

use serde::Serialize;

use crate::Error;
use crate::client::ApiClient;
use crate::types::{ClientDto, ClientEnvelope, ClientListEnvelope, ListScope, Page, PageQuery};

impl ApiClient {
    pub async fn list_clients(
        &self,
        org_id: &str,
        scope: ListScope,
        page: PageQuery,
    ) -> Result<Page<ClientDto>, Error> {
        let mut params = page.to_params();
        params.push(("type", scope.as_param().to_owned()));

        let env: ClientListEnvelope = self
            .get_with_params(&format!("client/{org_id}"), &params)
            .await?;
        Ok(Page {
            items: env.clients,
            pagination: env.pagination,
        })
    }

    pub async fn create_client(&self, org_id: &str, name: &str) -> Result<ClientDto, Error> {
        #[derive(Serialize)]
        struct Body<'a> {
            name: &'a str,
        }

        let env: ClientEnvelope = self
            .post(&format!("client/create/{org_id}"), &Body { name })
            .await?;
        Ok(env.client)
    }

    pub async fn edit_client(
        &self,
        org_id: &str,
        client_id: &str,
        name: &str,
    ) -> Result<ClientDto, Error> {
        #[derive(Serialize)]
        struct Body<'a> {
            name: &'a str,
        }

        let env: ClientEnvelope = self
            .put(
                &format!("client/{client_id}/organization/{org_id}"),
                &Body { name },
            )
            .await?;
        Ok(env.client)
    }

    pub async fn archive_client(&self, org_id: &str, client_id: &str) -> Result<ClientDto, Error> {
        let env: ClientEnvelope = self
            .put(
                &format!("client/{client_id}/archive"),
                &OrgBody {
                    organization_id: org_id,
                },
            )
            .await?;
        Ok(env.client)
    }

    pub async fn unarchive_client(
        &self,
        org_id: &str,
        client_id: &str,
    ) -> Result<ClientDto, Error> {
        let env: ClientEnvelope = self
            .put(
                &format!("client/{client_id}/unarchive"),
                &OrgBody {
                    organization_id: org_id,
                },
            )
            .await?;
        Ok(env.client)
    }

    pub async fn delete_client(&self, org_id: &str, client_id: &str) -> Result<(), Error> {
        self.delete(&format!("client/{client_id}/organization/{org_id}"))
            .await
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OrgBody<'a> {
    organization_id: &'a str,
}
