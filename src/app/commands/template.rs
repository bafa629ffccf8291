use crate::app::AppContext;
use crate::domain::{
    AppError, NewTemplate, Template, TemplateCategory, TemplatePatch, TemplateSort,
};
use crate::ports::{ClipboardWriter, KeyValueStore};

/// Listing options for the template library.
#[derive(Debug, Clone, Default)]
pub struct TemplateQuery {
    pub category: Option<TemplateCategory>,
    pub search: Option<String>,
    /// `None` keeps library order: built-ins first, then user templates.
    pub sort: Option<TemplateSort>,
}

pub fn list<S, C>(ctx: &AppContext<S, C>, query: &TemplateQuery) -> Result<Vec<Template>, AppError>
where
    S: KeyValueStore,
    C: ClipboardWriter,
{
    let library = ctx.templates();
    let mut templates = match (query.search.as_deref(), query.category, query.sort) {
        (Some(text), _, _) => library.search(text)?,
        (None, Some(category), _) => library.by_category(category)?,
        (None, None, Some(order)) => return library.sorted(order),
        (None, None, None) => return library.all(),
    };
    if let Some(category) = query.category {
        templates.retain(|t| t.category == category);
    }
    if let Some(order) = query.sort {
        order.sort(&mut templates);
    }
    Ok(templates)
}

pub fn show<S, C>(ctx: &AppContext<S, C>, id: &str) -> Result<Template, AppError>
where
    S: KeyValueStore,
    C: ClipboardWriter,
{
    ctx.templates().get(id)
}

pub fn save<S, C>(ctx: &AppContext<S, C>, template: NewTemplate) -> Result<Template, AppError>
where
    S: KeyValueStore,
    C: ClipboardWriter,
{
    ctx.templates().save(template)
}

pub fn update<S, C>(
    ctx: &AppContext<S, C>,
    id: &str,
    patch: TemplatePatch,
) -> Result<Template, AppError>
where
    S: KeyValueStore,
    C: ClipboardWriter,
{
    ctx.templates().update(id, patch)
}

pub fn delete<S, C>(ctx: &AppContext<S, C>, id: &str) -> Result<(), AppError>
where
    S: KeyValueStore,
    C: ClipboardWriter,
{
    ctx.templates().delete(id)
}

pub fn duplicate<S, C>(ctx: &AppContext<S, C>, id: &str) -> Result<Template, AppError>
where
    S: KeyValueStore,
    C: ClipboardWriter,
{
    ctx.templates().duplicate(id)
}

pub fn export<S, C>(ctx: &AppContext<S, C>, id: &str) -> Result<String, AppError>
where
    S: KeyValueStore,
    C: ClipboardWriter,
{
    ctx.templates().export(id)
}

pub fn import<S, C>(ctx: &AppContext<S, C>, json: &str) -> Result<Template, AppError>
where
    S: KeyValueStore,
    C: ClipboardWriter,
{
    ctx.templates().import(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::AppConfig;
    use crate::ports::NoopClipboard;
    use crate::services::MemoryKeyValueStore;

    fn context() -> AppContext<MemoryKeyValueStore, NoopClipboard> {
        AppContext::new(MemoryKeyValueStore::new(), NoopClipboard, AppConfig::default())
    }

    #[test]
    fn list_filters_by_category_and_search() {
        let ctx = context();
        let query = TemplateQuery {
            category: Some(TemplateCategory::Study),
            search: Some("documentation".into()),
            sort: None,
        };
        assert!(list(&ctx, &query).unwrap().is_empty());

        let query = TemplateQuery {
            category: Some(TemplateCategory::Writing),
            search: Some("documentation".into()),
            sort: None,
        };
        let found = list(&ctx, &query).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "writing-technical-docs");
    }

    #[test]
    fn list_sorts_when_asked() {
        let ctx = context();
        let query = TemplateQuery { sort: Some(TemplateSort::Alphabetical), ..Default::default() };
        let names: Vec<_> = list(&ctx, &query).unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names.first().map(String::as_str), Some("Blog Post Creator"));
        assert_eq!(names.last().map(String::as_str), Some("Thesis Defense Preparation"));
    }

    #[test]
    fn list_by_category_keeps_library_order_unless_sorted() {
        let ctx = context();
        save(
            &ctx,
            NewTemplate {
                name: "Algorithms drill".into(),
                description: "practice".into(),
                category: TemplateCategory::Coding,
                ..Default::default()
            },
        )
        .unwrap();

        let query = TemplateQuery { category: Some(TemplateCategory::Coding), ..Default::default() };
        let names: Vec<_> = list(&ctx, &query).unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names.len(), 4);
        assert_eq!(names.last().map(String::as_str), Some("Algorithms drill"));

        let query = TemplateQuery {
            category: Some(TemplateCategory::Coding),
            sort: Some(TemplateSort::Alphabetical),
            ..Default::default()
        };
        let sorted = list(&ctx, &query).unwrap();
        assert_eq!(sorted[0].name, "Algorithms drill");
        assert!(sorted.iter().all(|t| t.category == TemplateCategory::Coding));
    }

    #[test]
    fn saved_templates_round_trip_through_export_and_import() {
        let ctx = context();
        let saved = save(
            &ctx,
            NewTemplate { name: "Mine".into(), description: "notes".into(), ..Default::default() },
        )
        .unwrap();
        let json = export(&ctx, &saved.id).unwrap();
        delete(&ctx, &saved.id).unwrap();

        let imported = import(&ctx, &json).unwrap();
        assert_eq!(imported.name, "Mine");
        assert_ne!(imported.id, saved.id);
        assert_eq!(show(&ctx, &imported.id).unwrap().description, "notes");
    }
}
