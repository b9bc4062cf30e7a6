//! NPC entity - non-player characters belonging to a campaign
//!
//! Wire names mirror the backing table's columns, which predate this crate
//! (the stat columns are Portuguese). Serde renames keep the Rust field
//! names idiomatic without a migration.

use serde::{Deserialize, Serialize};

use crate::ids::{CampaignId, NpcId, UserId};

/// A non-player character as stored in the remote `npcs` table.
///
/// The identifier is server-assigned; rows obtained from anywhere other
/// than the remote service are test fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Npc {
    pub id: NpcId,
    pub name: String,
    /// Archetype/category tag, e.g. "Mentor" or "Trickster"
    pub archetype: String,
    /// Free-text concept describing the character
    pub concept: String,

    // Stat block. Non-negative by convention; the remote service is the
    // only validator.
    #[serde(rename = "Poder")]
    pub power: u32,
    #[serde(rename = "Habilidade")]
    pub skill: u32,
    #[serde(rename = "Resistencia")]
    pub resistance: u32,
    #[serde(rename = "Pontos_Acao")]
    pub action_points: u32,
    #[serde(rename = "Pontos_Mana")]
    pub mana_points: u32,
    #[serde(rename = "Pontos_Vida")]
    pub life_points: u32,

    /// Public URL of the portrait image, if one was uploaded
    pub image: Option<String>,
    pub campaign_id: CampaignId,
    /// Owning user, stamped on writes from the authenticated session.
    /// Absent on rows fetched with a projection that omits it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

/// Payload for creating or updating an NPC.
///
/// Carries everything except the server-assigned id and the owning user,
/// which the store stamps from the authenticated session at write time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcDraft {
    pub name: String,
    pub archetype: String,
    pub concept: String,
    #[serde(rename = "Poder")]
    pub power: u32,
    #[serde(rename = "Habilidade")]
    pub skill: u32,
    #[serde(rename = "Resistencia")]
    pub resistance: u32,
    #[serde(rename = "Pontos_Acao")]
    pub action_points: u32,
    #[serde(rename = "Pontos_Mana")]
    pub mana_points: u32,
    #[serde(rename = "Pontos_Vida")]
    pub life_points: u32,
    pub image: Option<String>,
    pub campaign_id: CampaignId,
}

impl NpcDraft {
    pub fn new(
        campaign_id: CampaignId,
        name: impl Into<String>,
        archetype: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            archetype: archetype.into(),
            concept: String::new(),
            power: 0,
            skill: 0,
            resistance: 0,
            action_points: 0,
            mana_points: 0,
            life_points: 0,
            image: None,
            campaign_id,
        }
    }

    pub fn with_concept(mut self, concept: impl Into<String>) -> Self {
        self.concept = concept.into();
        self
    }

    pub fn with_stats(mut self, power: u32, skill: u32, resistance: u32) -> Self {
        self.power = power;
        self.skill = skill;
        self.resistance = resistance;
        self
    }

    pub fn with_pools(mut self, action: u32, mana: u32, life: u32) -> Self {
        self.action_points = action;
        self.mana_points = mana;
        self.life_points = life;
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }
}
