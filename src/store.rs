//! Template storage with CRUD operations

use std::sync::Arc;

use dashmap::DashMap;

use crate::processor::TemplateProcessor;
use crate::types::{Template, TemplateError, TemplateResult};

/// In-memory template storage
pub struct TemplateStore {
    templates: DashMap<String, Template>,
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore {
    /// Create a new template store
    pub fn new() -> Self {
        Self {
            templates: DashMap::new(),
        }
    }

    /// Register a new template
    #[tracing::instrument(
        name = "template.create",
        skip(self, template),
        fields(template_id = %template.id)
    )]
    pub fn create(&self, template: Template) -> TemplateResult<Template> {
        template.validate()?;

        if self.templates.contains_key(&template.id) {
            return Err(TemplateError::AlreadyExists(template.id));
        }

        self.templates
            .insert(template.id.clone(), template.clone());

        Ok(template)
    }

    /// Get a template by ID
    pub fn get(&self, id: &str) -> TemplateResult<Template> {
        self.templates
            .get(id)
            .map(|t| t.clone())
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }

    /// List all templates
    pub fn list(&self) -> Vec<Template> {
        self.templates
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Delete a template by ID
    #[tracing::instrument(name = "template.delete", skip(self))]
    pub fn delete(&self, id: &str) -> TemplateResult<()> {
        self.templates
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }

    /// Check if a template exists
    pub fn exists(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    /// Get the number of templates
    pub fn count(&self) -> usize {
        self.templates.len()
    }

    /// Render a stored template body against a JSON object of variables
    #[tracing::instrument(name = "template.render", skip(self, variables))]
    pub fn render(&self, id: &str, variables: &serde_json::Value) -> TemplateResult<String> {
        let template = self.get(id)?;

        let processor = TemplateProcessor::from_json(variables)?;
        processor.process_template(&template.body)
    }
}

/// Create an Arc-wrapped template store
pub fn create_template_store() -> Arc<TemplateStore> {
    Arc::new(TemplateStore::new())
}
