//! Supabase table adapter
//!
//! Implements the NpcDataPort trait against the PostgREST endpoint of a
//! Supabase project. Rows travel as JSON with the table's own column
//! names; `rollcall_domain::Npc` carries the serde renames.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;
use std::time::Duration;

use rollcall_domain::{CampaignId, Npc, NpcDraft, NpcId, UserId};

use crate::config::SupabaseConfig;
use crate::ports::outbound::{DataError, NpcDataPort};

/// The fixed projection fetched for list views. Matches what the roster
/// UI renders; columns not listed here (e.g. `user_id`) stay server-side.
const SELECT_COLUMNS: &str = "id,name,archetype,concept,Poder,Habilidade,Resistencia,Pontos_Acao,Pontos_Mana,Pontos_Vida,image,campaign_id";

const TABLE: &str = "npcs";

/// Client for the Supabase table API
#[derive(Clone)]
pub struct SupabaseRest {
    client: Client,
    config: SupabaseConfig,
}

impl SupabaseRest {
    pub fn new(config: SupabaseConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    fn table_request(&self, method: Method) -> RequestBuilder {
        self.client
            .request(
                method,
                format!("{}/rest/v1/{}", self.config.base_url, TABLE),
            )
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
    }

    /// Serialize a draft and stamp the owning user onto the row.
    fn stamped_row(draft: &NpcDraft, user: UserId) -> Result<Value, DataError> {
        let mut row = serde_json::to_value(draft).map_err(|e| DataError::Decode(e.to_string()))?;
        row["user_id"] = Value::String(user.to_string());
        Ok(row)
    }

    async fn read_rows(response: reqwest::Response) -> Result<Vec<Npc>, DataError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DataError::Status {
                status: status.as_u16(),
                body,
            });
        }
        response
            .json()
            .await
            .map_err(|e| DataError::Decode(e.to_string()))
    }

    async fn read_single_row(response: reqwest::Response) -> Result<Npc, DataError> {
        // PostgREST returns the representation as a one-element array
        Self::read_rows(response)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DataError::Decode("expected one returned row, got none".into()))
    }
}

#[async_trait]
impl NpcDataPort for SupabaseRest {
    async fn list(&self, campaign: Option<CampaignId>) -> Result<Vec<Npc>, DataError> {
        let mut request = self
            .table_request(Method::GET)
            .query(&[("select", SELECT_COLUMNS)]);
        if let Some(campaign) = campaign {
            request = request.query(&[("campaign_id", format!("eq.{campaign}"))]);
        }

        tracing::debug!(?campaign, "listing npcs");
        let response = request
            .send()
            .await
            .map_err(|e| DataError::Request(e.to_string()))?;
        Self::read_rows(response).await
    }

    async fn insert(&self, draft: &NpcDraft, user: UserId) -> Result<Npc, DataError> {
        let row = Self::stamped_row(draft, user)?;

        tracing::debug!(name = %draft.name, "inserting npc");
        let response = self
            .table_request(Method::POST)
            .header("Prefer", "return=representation")
            .json(&Value::Array(vec![row]))
            .send()
            .await
            .map_err(|e| DataError::Request(e.to_string()))?;
        Self::read_single_row(response).await
    }

    async fn update(&self, id: NpcId, draft: &NpcDraft, user: UserId) -> Result<Npc, DataError> {
        let row = Self::stamped_row(draft, user)?;

        tracing::debug!(%id, "updating npc");
        let response = self
            .table_request(Method::PATCH)
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await
            .map_err(|e| DataError::Request(e.to_string()))?;
        Self::read_single_row(response).await
    }

    async fn delete(&self, id: NpcId) -> Result<(), DataError> {
        tracing::debug!(%id, "deleting npc");
        let response = self
            .table_request(Method::DELETE)
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await
            .map_err(|e| DataError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DataError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
