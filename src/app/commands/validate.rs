//! YAML syntax validation with error context.

use std::fs;
use std::path::Path;

use crate::domain::{ErrorLocation, context_lines};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YamlValidation {
    Valid,
    Invalid { message: String, location: Option<ErrorLocation>, context: Vec<String> },
    Unreadable(String),
}

impl YamlValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, YamlValidation::Valid)
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_valid() { 0 } else { 1 }
    }
}

pub fn validate_yaml(path: &Path) -> YamlValidation {
    match fs::read_to_string(path) {
        Ok(content) => validate_yaml_str(&content),
        Err(err) => YamlValidation::Unreadable(err.to_string()),
    }
}

pub fn validate_yaml_str(content: &str) -> YamlValidation {
    match serde_yaml::from_str::<serde_yaml::Value>(content) {
        Ok(_) => YamlValidation::Valid,
        Err(err) => {
            let location = err
                .location()
                .map(|mark| ErrorLocation { line: mark.line(), column: mark.column() });
            let context = location.map(|loc| context_lines(content, loc.line)).unwrap_or_default();
            YamlValidation::Invalid { message: err.to_string(), location, context }
        }
    }
}

pub fn render_validation(path: &Path, validation: &YamlValidation) -> Vec<String> {
    match validation {
        YamlValidation::Valid => vec![format!("✅ YAML is valid: {}", path.display())],
        YamlValidation::Unreadable(message) => {
            vec![format!("❌ Could not read {}: {}", path.display(), message)]
        }
        YamlValidation::Invalid { message, location, context } => {
            let mut lines = vec![
                format!("❌ YAML syntax error: {}", path.display()),
                format!("Error: {}", message),
            ];
            if let Some(location) = location {
                lines.push(format!("Error at {}", location));
            }
            if !context.is_empty() {
                lines.push(String::new());
                lines.push("Context:".to_string());
                lines.extend(context.iter().cloned());
            }
            lines
        }
    }
}
