use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub confirm_password: Option<String>,
}

impl RegisterForm {
    pub fn validate(&self, min_password_length: usize) -> Result<(), String> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err("Username is required".into());
        }
        if username.chars().count() > 64 {
            return Err("Username must be at most 64 characters".into());
        }
        if self.password.chars().count() < min_password_length {
            return Err(format!(
                "Password must be at least {} characters",
                min_password_length
            ));
        }
        if let Some(confirm) = &self.confirm_password {
            if confirm != &self.password {
                return Err("Passwords don't match".into());
            }
        }
        Ok(())
    }
}

/// Free-text project description submitted by the user.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequirements {
    pub project_name: String,
    pub project_description: String,
}

impl ProjectRequirements {
    pub fn validate(&self, min_description_length: usize) -> Result<(), String> {
        if self.project_name.trim().is_empty() {
            return Err("Project name is required".into());
        }
        if self.project_description.chars().count() < min_description_length {
            return Err("Please provide a detailed project description".into());
        }
        Ok(())
    }
}
