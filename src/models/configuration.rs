use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// How the agents of a configuration hand work to each other.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InteractionPattern {
    #[default]
    Single,
    Sequential,
    Hierarchical,
    Orchestrated,
}

impl InteractionPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionPattern::Single => "single",
            InteractionPattern::Sequential => "sequential",
            InteractionPattern::Hierarchical => "hierarchical",
            InteractionPattern::Orchestrated => "orchestrated",
        }
    }
}

impl fmt::Display for InteractionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBase {
    pub sources: Vec<String>,
    pub indexing_strategy: String,
    pub retrieval_method: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    #[serde(rename = "type")]
    pub kind: String,
    pub role: String,
    pub responsibilities: Vec<String>,
    pub knowledge_base: KnowledgeBase,
    pub prompt_template: String,
    pub tooling: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDistribution {
    pub strategy: String,
    pub routing: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ErrorHandling {
    pub strategy: String,
    pub fallback_behavior: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct InteractionFlow {
    pub pattern: InteractionPattern,
    pub task_distribution: TaskDistribution,
    pub error_handling: ErrorHandling,
}

/// The JSON blob stored on a project. `Default` is the empty configuration
/// a project starts with.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RagAgentConfiguration {
    pub agents: Vec<Agent>,
    pub interaction_flow: InteractionFlow,
}

impl RagAgentConfiguration {
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Checks what serde cannot: agent types and roles are filled in and
    /// every type is unique, since the type doubles as the diagram node id.
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for agent in &self.agents {
            if agent.kind.trim().is_empty() {
                return Err("agent type must not be empty".into());
            }
            if agent.role.trim().is_empty() {
                return Err(format!("agent {} has no role", agent.kind));
            }
            if !seen.insert(agent.kind.as_str()) {
                return Err(format!("duplicate agent type {}", agent.kind));
            }
        }
        Ok(())
    }
}
