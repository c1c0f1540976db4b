use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use tower_sessions::Session;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::generator;
use crate::layout::{layout, FlowGraph};
use crate::models::{Project, ProjectRequirements, RagAgentConfiguration, User};
use crate::services::StorageService;
use super::{current_user, json_body, AppState};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptTemplateView {
    #[serde(rename = "type")]
    pub kind: String,
    pub role: String,
    pub prompt_template: String,
}

#[derive(Serialize)]
pub struct ConfigurationPreview {
    pub configuration: RagAgentConfiguration,
    pub rationale: String,
    pub flow: FlowGraph,
}

// Helper function to fetch a project and apply the ownership check
async fn load_project(
    storage: &StorageService,
    config: &Config,
    user: &User,
    project_id: u64,
) -> AppResult<Project> {
    let project = storage.get_project(project_id).await.ok_or_else(|| {
        tracing::warn!("Project not found: {}", project_id);
        AppError::NotFound("Project not found".into())
    })?;

    if config.projects.enforce_ownership && !project.is_owned_by(user.id) {
        tracing::warn!(
            "User {} tried to access project {} owned by {}",
            user.id,
            project_id,
            project.owner_id
        );
        return Err(AppError::Forbidden("Project belongs to another user".into()));
    }

    Ok(project)
}

fn validated_requirements(
    payload: Result<Json<ProjectRequirements>, JsonRejection>,
    config: &Config,
) -> AppResult<ProjectRequirements> {
    let requirements = json_body(payload, "Invalid project requirements")?;
    requirements
        .validate(config.projects.min_description_length)
        .map_err(|e| AppError::Validation(format!("Invalid project requirements: {}", e)))?;
    Ok(requirements)
}

pub async fn create_project(
    State((storage, config)): State<AppState>,
    session: Session,
    payload: Result<Json<ProjectRequirements>, JsonRejection>,
) -> AppResult<Response> {
    let user = current_user(&session, &storage).await?;
    let requirements = validated_requirements(payload, &config)?;

    let project = storage.create_project(user.id, requirements).await;
    tracing::info!("User {} created project {} ({})", user.id, project.id, project.name);

    Ok((StatusCode::CREATED, Json(project)).into_response())
}

pub async fn list_projects(
    State((storage, config)): State<AppState>,
    session: Session,
) -> AppResult<Json<Vec<Project>>> {
    let user = current_user(&session, &storage).await?;

    let owner = config.projects.enforce_ownership.then_some(user.id);
    let projects = storage.list_projects(owner).await;

    tracing::debug!("Listing {} projects for user {}", projects.len(), user.id);
    Ok(Json(projects))
}

pub async fn get_project(
    State((storage, config)): State<AppState>,
    session: Session,
    Path(project_id): Path<u64>,
) -> AppResult<Json<Project>> {
    let user = current_user(&session, &storage).await?;
    let project = load_project(&storage, &config, &user, project_id).await?;
    Ok(Json(project))
}

/// Replaces the stored configuration with one supplied by the client.
pub async fn update_configuration(
    State((storage, config)): State<AppState>,
    session: Session,
    Path(project_id): Path<u64>,
    payload: Result<Json<RagAgentConfiguration>, JsonRejection>,
) -> AppResult<Json<Project>> {
    let user = current_user(&session, &storage).await?;
    load_project(&storage, &config, &user, project_id).await?;

    let configuration = json_body(payload, "Invalid configuration")?;
    configuration
        .validate()
        .map_err(|e| AppError::Validation(format!("Invalid configuration: {}", e)))?;

    let project = storage.update_configuration(project_id, configuration).await?;
    tracing::info!("Updated configuration of project {}", project_id);
    Ok(Json(project))
}

/// Runs the generator over the stored requirements and stores the result.
pub async fn generate_configuration(
    State((storage, config)): State<AppState>,
    session: Session,
    Path(project_id): Path<u64>,
) -> AppResult<Json<Project>> {
    let user = current_user(&session, &storage).await?;
    let project = load_project(&storage, &config, &user, project_id).await?;

    let configuration = generator::generate_configuration(&project.requirements);
    tracing::info!(
        "Generated {} agents ({}) for project {}",
        configuration.agents.len(),
        configuration.interaction_flow.pattern,
        project_id
    );

    let project = storage.update_configuration(project_id, configuration).await?;
    Ok(Json(project))
}

pub async fn get_flow(
    State((storage, config)): State<AppState>,
    session: Session,
    Path(project_id): Path<u64>,
) -> AppResult<Json<FlowGraph>> {
    let user = current_user(&session, &storage).await?;
    let project = load_project(&storage, &config, &user, project_id).await?;
    Ok(Json(layout(&project.configuration)))
}

pub async fn get_rationale(
    State((storage, config)): State<AppState>,
    session: Session,
    Path(project_id): Path<u64>,
) -> AppResult<Json<Value>> {
    let user = current_user(&session, &storage).await?;
    let project = load_project(&storage, &config, &user, project_id).await?;
    Ok(Json(json!({ "rationale": generator::rationale(&project.requirements) })))
}

pub async fn get_templates(
    State((storage, config)): State<AppState>,
    session: Session,
    Path(project_id): Path<u64>,
) -> AppResult<Json<Vec<PromptTemplateView>>> {
    let user = current_user(&session, &storage).await?;
    let project = load_project(&storage, &config, &user, project_id).await?;

    let templates = project
        .configuration
        .agents
        .into_iter()
        .map(|agent| PromptTemplateView {
            kind: agent.kind,
            role: agent.role,
            prompt_template: agent.prompt_template,
        })
        .collect();
    Ok(Json(templates))
}

/// Generates a configuration without storing anything.
pub async fn preview_configuration(
    State((_, config)): State<AppState>,
    payload: Result<Json<ProjectRequirements>, JsonRejection>,
) -> AppResult<Json<ConfigurationPreview>> {
    let requirements = validated_requirements(payload, &config)?;

    let configuration = generator::generate_configuration(&requirements);
    let flow = layout(&configuration);
    let rationale = generator::rationale(&requirements);

    Ok(Json(ConfigurationPreview {
        configuration,
        rationale,
        flow,
    }))
}
