// ── Tag endpoints ──

use crate::Error;
use crate::client::ApiClient;
use crate::types::{TagDto, TagListEnvelope};

impl ApiClient {
    pub async fn list_tags(&self, org_id: &str) -> Result<Vec<TagDto>, Error> {
        let env: TagListEnvelope = self.get(&format!("tag/{org_id}")).await?;
        Ok(env.tags)
    }
}
