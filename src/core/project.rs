use crate::domain::model::Project;
use crate::domain::ports::ControlPlane;
use crate::utils::error::{CliError, Result};

/// Picks the project app listings are scoped to.
///
/// A configured id wins. Otherwise the user's memberships decide: none is an error,
/// several fall back to the first one with a warning.
pub async fn resolve_project<P>(api: &P, configured: Option<&str>) -> Result<Project>
where
    P: ControlPlane + ?Sized,
{
    if let Some(project_id) = configured {
        tracing::debug!("Using configured project {}", project_id);
        return Ok(Project {
            project_id: project_id.to_string(),
            name: String::new(),
        });
    }

    let mut memberships = api.list_memberships().await?;
    if memberships.is_empty() {
        return Err(CliError::NoProject);
    }

    let project = Project::from(memberships.remove(0));
    if !memberships.is_empty() {
        tracing::warn!(
            "You are a member of {} projects, defaulting to '{}' ({}). Set LIGHTNING_CLOUD_PROJECT_ID to pick another",
            memberships.len() + 1,
            project.name,
            project.project_id
        );
    }

    Ok(project)
}
