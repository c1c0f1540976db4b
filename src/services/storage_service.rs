use std::collections::BTreeMap;
use std::sync::Arc;
use chrono::Utc;
use tokio::sync::RwLock;
use crate::errors::{StoreError, StoreResult};
use crate::models::{Project, ProjectRequirements, RagAgentConfiguration, User};

#[derive(Default)]
struct Tables {
    users: BTreeMap<u64, User>,
    projects: BTreeMap<u64, Project>,
    next_user_id: u64,
    next_project_id: u64,
}

impl Tables {
    // Ids start at 1 and are never reused.
    fn allocate_user_id(&mut self) -> u64 {
        self.next_user_id += 1;
        self.next_user_id
    }

    fn allocate_project_id(&mut self) -> u64 {
        self.next_project_id += 1;
        self.next_project_id
    }
}

/// In-process record store for users and projects. Clones share the same
/// tables.
#[derive(Clone, Default)]
pub struct StorageService {
    tables: Arc<RwLock<Tables>>,
}

impl StorageService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create_user(
        &self,
        username: &str,
        password_hash: String,
        guest: bool,
    ) -> StoreResult<User> {
        let mut tables = self.tables.write().await;

        if tables.users.values().any(|u| u.username == username) {
            return Err(StoreError::UsernameTaken(username.to_string()));
        }

        let user = User {
            id: tables.allocate_user_id(),
            username: username.to_string(),
            password_hash,
            guest,
            created_at: Utc::now(),
        };
        tables.users.insert(user.id, user.clone());

        tracing::debug!("Stored user {} with id {}", user.username, user.id);
        Ok(user)
    }

    pub async fn get_user(&self, id: u64) -> Option<User> {
        self.tables.read().await.users.get(&id).cloned()
    }

    pub async fn get_user_by_name(&self, username: &str) -> Option<User> {
        self.tables
            .read()
            .await
            .users
            .values()
            .find(|u| u.username == username)
            .cloned()
    }

    pub async fn create_project(
        &self,
        owner_id: u64,
        requirements: ProjectRequirements,
    ) -> Project {
        let mut tables = self.tables.write().await;

        let project = Project {
            id: tables.allocate_project_id(),
            name: requirements.project_name.clone(),
            owner_id,
            requirements,
            configuration: RagAgentConfiguration::default(),
        };
        tables.projects.insert(project.id, project.clone());

        tracing::debug!("Stored project {} with id {}", project.name, project.id);
        project
    }

    pub async fn get_project(&self, id: u64) -> Option<Project> {
        self.tables.read().await.projects.get(&id).cloned()
    }

    /// Lists projects in ascending id order, optionally only those of one owner.
    pub async fn list_projects(&self, owner_id: Option<u64>) -> Vec<Project> {
        self.tables
            .read()
            .await
            .projects
            .values()
            .filter(|p| owner_id.map_or(true, |owner| p.owner_id == owner))
            .cloned()
            .collect()
    }

    pub async fn update_configuration(
        &self,
        id: u64,
        configuration: RagAgentConfiguration,
    ) -> StoreResult<Project> {
        let mut tables = self.tables.write().await;

        let project = tables
            .projects
            .get_mut(&id)
            .ok_or(StoreError::ProjectNotFound(id))?;
        project.configuration = configuration;

        tracing::debug!("Replaced configuration of project {}", id);
        Ok(project.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InteractionPattern;

    fn requirements(name: &str) -> ProjectRequirements {
        ProjectRequirements {
            project_name: name.to_string(),
            project_description: "A knowledge base assistant for our internal wiki pages".to_string(),
        }
    }

    #[tokio::test]
    async fn user_ids_increase_and_names_are_unique() {
        let store = StorageService::new();
        let ann = store.create_user("ann", "hash".into(), false).await.unwrap();
        let bob = store.create_user("bob", "hash".into(), false).await.unwrap();
        assert_eq!(ann.id, 1);
        assert_eq!(bob.id, 2);

        let err = store.create_user("ann", "other".into(), false).await.unwrap_err();
        assert_eq!(err, StoreError::UsernameTaken("ann".into()));

        assert_eq!(store.get_user_by_name("bob").await.unwrap().id, 2);
        assert!(store.get_user(3).await.is_none());
    }

    #[tokio::test]
    async fn projects_start_with_empty_configuration() {
        let store = StorageService::new();
        let project = store.create_project(1, requirements("Wiki bot")).await;
        assert_eq!(project.id, 1);
        assert_eq!(project.name, "Wiki bot");
        assert!(project.configuration.is_empty());
        assert_eq!(store.get_project(1).await.unwrap().owner_id, 1);
    }

    #[tokio::test]
    async fn list_filters_by_owner_in_id_order() {
        let store = StorageService::new();
        store.create_project(1, requirements("first")).await;
        store.create_project(2, requirements("second")).await;
        store.create_project(1, requirements("third")).await;

        let all: Vec<u64> = store.list_projects(None).await.iter().map(|p| p.id).collect();
        assert_eq!(all, vec![1, 2, 3]);

        let mine: Vec<String> = store
            .list_projects(Some(1))
            .await
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(mine, vec!["first", "third"]);
    }

    #[tokio::test]
    async fn update_configuration_replaces_blob() {
        let store = StorageService::new();
        store.create_project(1, requirements("Wiki bot")).await;

        let mut configuration = RagAgentConfiguration::default();
        configuration.interaction_flow.pattern = InteractionPattern::Sequential;
        let updated = store.update_configuration(1, configuration.clone()).await.unwrap();
        assert_eq!(updated.configuration, configuration);

        let err = store.update_configuration(9, configuration).await.unwrap_err();
        assert_eq!(err, StoreError::ProjectNotFound(9));
    }
}
