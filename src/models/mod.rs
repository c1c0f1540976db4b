mod user;
mod forms;
mod project;
mod configuration;

pub use user::{User, PublicUser};
pub use forms::{LoginForm, RegisterForm, ProjectRequirements};
pub use project::Project;
pub use configuration::{
    Agent, ErrorHandling, InteractionFlow, InteractionPattern, KnowledgeBase,
    RagAgentConfiguration, TaskDistribution,
};
