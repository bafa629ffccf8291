//! Reusable, named sets of prompt fields.

mod builtin;
mod category;

pub use builtin::builtin_templates;
pub use category::TemplateCategory;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{AppError, Mode, PromptFields};

/// A saved set of prompt fields plus display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: TemplateCategory,
    #[serde(default)]
    pub is_built_in: bool,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub data: PromptFields,
    /// RFC 3339 timestamp.
    pub created_at: String,
    /// RFC 3339 timestamp.
    pub updated_at: String,
}

impl Template {
    /// Case-insensitive match against name and description.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }

    /// Timestamp used for "recent" ordering.
    fn recency(&self) -> &str {
        if self.updated_at.is_empty() { &self.created_at } else { &self.updated_at }
    }
}

/// Input for creating a user template. Identity and timestamps are assigned on save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewTemplate {
    pub name: String,
    pub description: String,
    pub category: TemplateCategory,
    pub mode: Mode,
    pub data: PromptFields,
}

impl NewTemplate {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidTemplate("name must not be empty".to_string()));
        }
        Ok(())
    }
}

impl From<&Template> for NewTemplate {
    fn from(template: &Template) -> Self {
        Self {
            name: template.name.clone(),
            description: template.description.clone(),
            category: template.category,
            mode: template.mode,
            data: template.data.clone(),
        }
    }
}

/// Partial update of a user template. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplatePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<TemplateCategory>,
    pub mode: Option<Mode>,
    /// Non-empty fields overlay the stored data.
    pub data: Option<PromptFields>,
}

impl TemplatePatch {
    /// Apply the patch. Identity, built-in status and creation time never change.
    pub fn apply(self, template: &mut Template) -> Result<(), AppError> {
        if let Some(name) = self.name {
            if name.trim().is_empty() {
                return Err(AppError::InvalidTemplate("name must not be empty".to_string()));
            }
            template.name = name;
        }
        if let Some(description) = self.description {
            template.description = description;
        }
        if let Some(category) = self.category {
            template.category = category;
        }
        if let Some(mode) = self.mode {
            template.mode = mode;
        }
        if let Some(data) = self.data {
            template.data.merge(data);
        }
        Ok(())
    }
}

/// Ordering for template listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateSort {
    #[default]
    Alphabetical,
    Recent,
}

impl TemplateSort {
    pub fn sort(&self, templates: &mut [Template]) {
        match self {
            TemplateSort::Alphabetical => {
                templates.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            }
            TemplateSort::Recent => templates.sort_by(|a, b| b.recency().cmp(a.recency())),
        }
    }
}

impl FromStr for TemplateSort {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alphabetical" | "name" | "popular" => Ok(TemplateSort::Alphabetical),
            "recent" => Ok(TemplateSort::Recent),
            _ => Err(AppError::InvalidSortOrder(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(name: &str, created: &str, updated: &str) -> Template {
        Template {
            id: name.to_lowercase(),
            name: name.to_string(),
            description: format!("{} description", name),
            category: TemplateCategory::Custom,
            is_built_in: false,
            mode: Mode::General,
            data: PromptFields::default(),
            created_at: created.to_string(),
            updated_at: updated.to_string(),
        }
    }

    #[test]
    fn patch_preserves_identity() {
        let mut t = template("Draft", "2024-01-01T00:00:00Z", "2024-01-01T00:00:00Z");
        TemplatePatch {
            name: Some("Final".into()),
            data: Some(PromptFields { topic: Some("essay".into()), ..Default::default() }),
            ..Default::default()
        }
        .apply(&mut t)
        .unwrap();
        assert_eq!(t.id, "draft");
        assert_eq!(t.name, "Final");
        assert_eq!(t.created_at, "2024-01-01T00:00:00Z");
        assert_eq!(t.data.topic(), Some("essay"));
    }

    #[test]
    fn patch_rejects_blank_name() {
        let mut t = template("Draft", "", "");
        let result = TemplatePatch { name: Some("  ".into()), ..Default::default() }.apply(&mut t);
        assert!(matches!(result, Err(AppError::InvalidTemplate(_))));
        assert_eq!(t.name, "Draft");
    }

    #[test]
    fn sorts_alphabetically_ignoring_case() {
        let mut list = vec![template("beta", "", ""), template("Alpha", "", "")];
        TemplateSort::Alphabetical.sort(&mut list);
        assert_eq!(list[0].name, "Alpha");
    }

    #[test]
    fn sorts_recent_with_created_fallback() {
        let mut list = vec![
            template("old", "2024-01-01T00:00:00Z", "2024-01-02T00:00:00Z"),
            template("new", "2024-03-01T00:00:00Z", ""),
        ];
        TemplateSort::Recent.sort(&mut list);
        assert_eq!(list[0].name, "new");
    }

    #[test]
    fn popular_sorts_alphabetically() {
        assert_eq!("popular".parse::<TemplateSort>().unwrap(), TemplateSort::Alphabetical);
        assert_eq!("Recent".parse::<TemplateSort>().unwrap(), TemplateSort::Recent);
        assert!(matches!("newest".parse::<TemplateSort>(), Err(AppError::InvalidSortOrder(_))));
    }

    #[test]
    fn new_template_requires_name() {
        assert!(NewTemplate::default().validate().is_err());
        let named = NewTemplate { name: "Mine".into(), ..Default::default() };
        assert!(named.validate().is_ok());
    }

    #[test]
    fn template_deserializes_with_defaults() {
        let json = r#"{"id":"x","name":"X","createdAt":"a","updatedAt":"b"}"#;
        let t: Template = serde_json::from_str(json).unwrap();
        assert_eq!(t.category, TemplateCategory::Custom);
        assert_eq!(t.mode, Mode::General);
        assert!(!t.is_built_in);
    }
}
