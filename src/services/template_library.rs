use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::identifiers::template_id;
use crate::domain::{
    AppError, NewTemplate, Template, TemplateCategory, TemplatePatch, TemplateSort,
    builtin_templates,
};
use crate::ports::KeyValueStore;

use super::collection;

/// Storage key holding the serialized user templates.
pub const USER_TEMPLATES_KEY: &str = "promptforge_user_templates";

/// Built-in templates plus the user's saved ones.
#[derive(Debug, Clone)]
pub struct TemplateLibrary<S> {
    store: S,
}

fn stamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn is_built_in_id(id: &str) -> bool {
    builtin_templates().iter().any(|t| t.id == id)
}

impl<S: KeyValueStore> TemplateLibrary<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// User templates in stored order.
    pub fn user(&self) -> Result<Vec<Template>, AppError> {
        collection::load(&self.store, USER_TEMPLATES_KEY)
    }

    /// Built-ins first, then user templates.
    pub fn all(&self) -> Result<Vec<Template>, AppError> {
        let mut templates = builtin_templates().to_vec();
        templates.extend(self.user()?);
        Ok(templates)
    }

    pub fn get(&self, id: &str) -> Result<Template, AppError> {
        self.all()?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::TemplateNotFound(id.to_string()))
    }

    pub fn by_category(&self, category: TemplateCategory) -> Result<Vec<Template>, AppError> {
        Ok(self.all()?.into_iter().filter(|t| t.category == category).collect())
    }

    /// Templates whose name or description contains `query`; blank returns all.
    pub fn search(&self, query: &str) -> Result<Vec<Template>, AppError> {
        let templates = self.all()?;
        if query.trim().is_empty() {
            return Ok(templates);
        }
        Ok(templates.into_iter().filter(|t| t.matches(query)).collect())
    }

    pub fn sorted(&self, order: TemplateSort) -> Result<Vec<Template>, AppError> {
        let mut templates = self.all()?;
        order.sort(&mut templates);
        Ok(templates)
    }

    pub fn save(&self, template: NewTemplate) -> Result<Template, AppError> {
        self.save_at(template, Utc::now())
    }

    /// Save a new user template, assigning its id and timestamps.
    pub fn save_at(&self, template: NewTemplate, now: DateTime<Utc>) -> Result<Template, AppError> {
        template.validate()?;
        let stamp = stamp(now);
        let saved = Template {
            id: template_id(now),
            name: template.name,
            description: template.description,
            category: template.category,
            is_built_in: false,
            mode: template.mode,
            data: template.data,
            created_at: stamp.clone(),
            updated_at: stamp,
        };

        let mut templates = self.user()?;
        templates.push(saved.clone());
        collection::save(&self.store, USER_TEMPLATES_KEY, &templates)?;

        tracing::debug!(id = %saved.id, name = %saved.name, "saved template");
        Ok(saved)
    }

    pub fn update(&self, id: &str, patch: TemplatePatch) -> Result<Template, AppError> {
        self.update_at(id, patch, Utc::now())
    }

    pub fn update_at(
        &self,
        id: &str,
        patch: TemplatePatch,
        now: DateTime<Utc>,
    ) -> Result<Template, AppError> {
        if is_built_in_id(id) {
            return Err(AppError::BuiltInTemplateReadOnly(id.to_string()));
        }
        let mut templates = self.user()?;
        let template = templates
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::TemplateNotFound(id.to_string()))?;

        patch.apply(template)?;
        template.updated_at = stamp(now);
        let updated = template.clone();

        collection::save(&self.store, USER_TEMPLATES_KEY, &templates)?;
        Ok(updated)
    }

    pub fn delete(&self, id: &str) -> Result<(), AppError> {
        if is_built_in_id(id) {
            return Err(AppError::BuiltInTemplateReadOnly(id.to_string()));
        }
        let mut templates = self.user()?;
        let before = templates.len();
        templates.retain(|t| t.id != id);
        if templates.len() == before {
            return Err(AppError::TemplateNotFound(id.to_string()));
        }
        collection::save(&self.store, USER_TEMPLATES_KEY, &templates)
    }

    /// Copy any template, built-in or not, into a new user template named "<name> (Copy)".
    pub fn duplicate(&self, id: &str) -> Result<Template, AppError> {
        let source = self.get(id)?;
        let mut copy = NewTemplate::from(&source);
        copy.name = format!("{} (Copy)", source.name);
        self.save(copy)
    }

    /// Pretty-printed JSON of one template.
    pub fn export(&self, id: &str) -> Result<String, AppError> {
        let template = self.get(id)?;
        Ok(serde_json::to_string_pretty(&template)?)
    }

    /// Import a template exported by [`export`](Self::export) as a new user template.
    ///
    /// The incoming id, built-in flag and timestamps are discarded.
    pub fn import(&self, json: &str) -> Result<Template, AppError> {
        let incoming: NewTemplate = serde_json::from_str(json)
            .map_err(|err| AppError::InvalidTemplate(format!("invalid template JSON: {}", err)))?;
        self.save(incoming)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Mode, PromptFields};
    use crate::services::MemoryKeyValueStore;

    fn at(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    fn named(name: &str) -> NewTemplate {
        NewTemplate {
            name: name.to_string(),
            description: format!("{} notes", name),
            data: PromptFields { topic: Some("tides".into()), ..Default::default() },
            ..Default::default()
        }
    }

    fn library() -> TemplateLibrary<MemoryKeyValueStore> {
        TemplateLibrary::new(MemoryKeyValueStore::new())
    }

    #[test]
    fn starts_with_built_ins_only() {
        let lib = library();
        assert_eq!(lib.all().unwrap().len(), 11);
        assert!(lib.user().unwrap().is_empty());
    }

    #[test]
    fn save_assigns_identity() {
        let lib = library();
        let saved = lib.save_at(named("Mine"), at(1_700_000_000_000)).unwrap();
        assert!(saved.id.starts_with("custom-1700000000000-"));
        assert!(!saved.is_built_in);
        assert_eq!(saved.created_at, "2023-11-14T22:13:20.000Z");
        assert_eq!(lib.get(&saved.id).unwrap(), saved);
        assert_eq!(lib.all().unwrap().len(), 12);
    }

    #[test]
    fn save_rejects_blank_name() {
        let result = library().save(named(" "));
        assert!(matches!(result, Err(AppError::InvalidTemplate(_))));
    }

    #[test]
    fn update_keeps_identity_and_bumps_updated_at() {
        let lib = library();
        let saved = lib.save_at(named("Draft"), at(1_000)).unwrap();
        let patch = TemplatePatch { name: Some("Final".into()), ..Default::default() };
        let updated = lib.update_at(&saved.id, patch, at(2_000)).unwrap();

        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.created_at, saved.created_at);
        assert_ne!(updated.updated_at, saved.updated_at);
        assert_eq!(lib.get(&saved.id).unwrap().name, "Final");
    }

    #[test]
    fn built_ins_are_read_only() {
        let lib = library();
        let patch = TemplatePatch { name: Some("Hacked".into()), ..Default::default() };
        assert!(matches!(
            lib.update("coding-bug-fix", patch),
            Err(AppError::BuiltInTemplateReadOnly(_))
        ));
        assert!(matches!(lib.delete("coding-bug-fix"), Err(AppError::BuiltInTemplateReadOnly(_))));
        assert_eq!(lib.get("coding-bug-fix").unwrap().name, "Bug Fixing Assistant");
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let lib = library();
        assert!(matches!(lib.get("nope"), Err(AppError::TemplateNotFound(_))));
        assert!(matches!(lib.delete("nope"), Err(AppError::TemplateNotFound(_))));
        assert!(matches!(
            lib.update("nope", TemplatePatch::default()),
            Err(AppError::TemplateNotFound(_))
        ));
    }

    #[test]
    fn delete_removes_user_template() {
        let lib = library();
        let saved = lib.save(named("Temp")).unwrap();
        lib.delete(&saved.id).unwrap();
        assert!(lib.user().unwrap().is_empty());
    }

    #[test]
    fn duplicate_built_in_creates_user_copy() {
        let lib = library();
        let copy = lib.duplicate("coding-code-review").unwrap();
        assert_eq!(copy.name, "Code Review (Copy)");
        assert_eq!(copy.category, TemplateCategory::Coding);
        assert_eq!(copy.mode, Mode::Coding);
        assert!(!copy.is_built_in);
        assert_ne!(copy.id, "coding-code-review");
    }

    #[test]
    fn export_then_import_creates_new_template() {
        let lib = library();
        let json = lib.export("writing-blog-post").unwrap();
        let imported = lib.import(&json).unwrap();
        assert_eq!(imported.name, "Blog Post Creator");
        assert!(!imported.is_built_in);
        assert!(imported.id.starts_with("custom-"));
        assert_eq!(imported.data.tone(), Some("friendly"));
    }

    #[test]
    fn import_rejects_garbage() {
        assert!(matches!(library().import("{oops"), Err(AppError::InvalidTemplate(_))));
        assert!(matches!(library().import("{}"), Err(AppError::InvalidTemplate(_))));
    }

    #[test]
    fn category_search_and_sort() {
        let lib = library();
        lib.save(named("aardvark")).unwrap();

        assert_eq!(lib.by_category(TemplateCategory::Coding).unwrap().len(), 3);
        assert_eq!(lib.by_category(TemplateCategory::Custom).unwrap().len(), 1);
        assert_eq!(lib.search("THESIS").unwrap().len(), 1);
        assert_eq!(lib.sorted(TemplateSort::Alphabetical).unwrap()[0].name, "aardvark");
    }
}
