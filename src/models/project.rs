use serde::{Deserialize, Serialize};
use super::{configuration::RagAgentConfiguration, forms::ProjectRequirements};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub owner_id: u64,
    pub requirements: ProjectRequirements,
    pub configuration: RagAgentConfiguration,
}

impl Project {
    pub fn is_owned_by(&self, user_id: u64) -> bool {
        self.owner_id == user_id
    }
}
