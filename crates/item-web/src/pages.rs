//! # Page Rendering
//!
//! Handlebars rendering for the catalog pages. Templates are compiled into
//! the binary and registered once at startup; handlers render against
//! plain JSON models. Handlebars escapes interpolated values, so item
//! names are safe to echo back.

use handlebars::Handlebars;
use item_store::{Item, ItemId};
use serde_json::json;

/// The registered template set.
pub struct Pages {
    registry: Handlebars<'static>,
}

impl Pages {
    /// Registers every page template. Fails only on a malformed template,
    /// which is a build defect, so callers treat this as fatal at startup.
    pub fn new() -> Result<Self, handlebars::TemplateError> {
        let mut registry = Handlebars::new();
        registry.register_template_string("items", include_str!("../templates/items.hbs"))?;
        registry.register_template_string("item", include_str!("../templates/item.hbs"))?;
        registry.register_template_string("add_form", include_str!("../templates/add_form.hbs"))?;
        registry
            .register_template_string("edit_form", include_str!("../templates/edit_form.hbs"))?;
        registry
            .register_template_string("not_found", include_str!("../templates/not_found.hbs"))?;
        Ok(Self { registry })
    }

    /// The item list page.
    pub fn items_list(&self, items: &[Item]) -> Result<String, handlebars::RenderError> {
        self.registry.render("items", &json!({ "items": items }))
    }

    /// The item detail page. `just_saved` drives the "saved" banner shown
    /// after the create redirect.
    pub fn item_detail(
        &self,
        item: &Item,
        just_saved: bool,
    ) -> Result<String, handlebars::RenderError> {
        self.registry
            .render("item", &json!({ "item": item, "status": just_saved }))
    }

    /// The empty create form.
    pub fn add_form(&self) -> Result<String, handlebars::RenderError> {
        self.registry.render("add_form", &json!({}))
    }

    /// The edit form, pre-filled with the current field values.
    pub fn edit_form(&self, item: &Item) -> Result<String, handlebars::RenderError> {
        self.registry.render("edit_form", &json!({ "item": item }))
    }

    /// The 404 page for unknown item ids.
    pub fn not_found(&self, id: ItemId) -> Result<String, handlebars::RenderError> {
        self.registry
            .render("not_found", &json!({ "id": id.to_string() }))
    }
}
