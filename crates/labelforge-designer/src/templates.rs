//! Template management: reusable element lists plus page geometry,
//! applicable to any page.
//!
//! Templates are serialized standalone as JSON; re-importing a shared
//! template assigns a fresh id and marks it `imported`. The library
//! ships with one stock template per document category.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use labelforge_core::{generate_id, Error, Result, Size};

use crate::data::Category;
use crate::document::Page;
use crate::model::{
    Element, ElementContent, ElementKind, QrCodeElement, RectangleElement, TableColumn,
    TableElement, TextAlign, TextElement,
};

/// A reusable design: named element list plus page geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    pub elements: Vec<Element>,
    pub page_size: Size,
    #[serde(default = "default_background")]
    pub background: String,
    /// Base64 thumbnail, if one has been generated.
    #[serde(default)]
    pub preview: Option<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub author: String,
    /// Set when the template came in through the sharing format.
    #[serde(default)]
    pub imported: bool,
}

fn default_background() -> String {
    "#ffffff".to_string()
}

impl Template {
    /// Creates a user template from the given elements.
    pub fn new(
        name: impl Into<String>,
        category: Category,
        elements: Vec<Element>,
        page_size: Size,
    ) -> Self {
        Self {
            id: generate_id("tpl"),
            name: name.into(),
            description: String::new(),
            category,
            tags: Vec::new(),
            elements,
            page_size,
            background: default_background(),
            preview: None,
            created: Some(Utc::now()),
            author: String::new(),
            imported: false,
        }
    }

    /// Case-insensitive match against name, description, tags, and
    /// author.
    pub fn matches_search(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q)
            || self.description.to_lowercase().contains(&q)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&q))
            || self.author.to_lowercase().contains(&q)
    }
}

/// Applies a template to a page: the page keeps its identity and grid
/// settings, takes the template's size and background, and receives
/// fresh copies of the template's elements (new ids, recursively through
/// groups).
pub fn apply_template(template: &Template, target: &Page) -> Page {
    Page {
        id: target.id.clone(),
        elements: template
            .elements
            .iter()
            .map(|el| el.with_fresh_ids())
            .collect(),
        background: template.background.clone(),
        size: template.page_size,
        grid: target.grid,
    }
}

/// Import guard: a template JSON value must carry `id`, `name`,
/// `elements`, and `pageSize`.
pub fn validate_template(value: &Value) -> bool {
    ["id", "name", "elements", "pageSize"]
        .iter()
        .all(|field| value.get(field).is_some())
}

/// Parses a shared template, assigning a fresh id and marking it
/// imported.
pub fn import_template(json: &str) -> Result<Template> {
    let value: Value = serde_json::from_str(json).map_err(|e| Error::InvalidTemplate {
        reason: format!("not valid JSON: {e}"),
    })?;
    if !validate_template(&value) {
        return Err(Error::InvalidTemplate {
            reason: "missing one of: id, name, elements, pageSize".to_string(),
        });
    }
    let mut template: Template =
        serde_json::from_value(value).map_err(|e| Error::InvalidTemplate {
            reason: e.to_string(),
        })?;
    template.id = generate_id("tpl");
    template.imported = true;
    Ok(template)
}

/// Serializes a template for sharing.
pub fn export_template(template: &Template) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(template)?)
}

/// An ordered collection of templates keyed by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateLibrary {
    templates: Vec<Template>,
}

impl TemplateLibrary {
    /// An empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock library: one template per document category.
    pub fn builtin() -> Self {
        Self {
            templates: vec![
                basic_invoice(),
                product_label(),
                pos_receipt(),
                name_badge(),
                completion_certificate(),
            ],
        }
    }

    /// Adds a template; duplicate ids are rejected.
    pub fn add(&mut self, template: Template) -> Result<()> {
        if self.get(&template.id).is_some() {
            return Err(Error::DuplicateTemplate { id: template.id });
        }
        self.templates.push(template);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Removes and returns a template.
    pub fn remove(&mut self, id: &str) -> Option<Template> {
        let index = self.templates.iter().position(|t| t.id == id)?;
        Some(self.templates.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    pub fn search(&self, query: &str) -> Vec<&Template> {
        self.templates
            .iter()
            .filter(|t| t.matches_search(query))
            .collect()
    }

    pub fn by_category(&self, category: Category) -> Vec<&Template> {
        self.templates
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }

    /// All tags in use, sorted, deduplicated.
    pub fn all_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .templates
            .iter()
            .flat_map(|t| t.tags.iter().cloned())
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn text_at(x: f64, y: f64, text: &str, font_size: f64, fill: &str, align: TextAlign) -> Element {
    let mut el = Element::new(ElementKind::Text, x, y);
    el.content = ElementContent::Text(TextElement {
        text: text.to_string(),
        font_size,
        font_family: "Arial".to_string(),
        fill: fill.to_string(),
        align,
    });
    el
}

fn basic_invoice() -> Template {
    let table = {
        let mut el = Element::new(ElementKind::Table, 50.0, 250.0);
        el.width = 450.0;
        el.content = ElementContent::Table(TableElement {
            columns: vec![
                TableColumn::new("Description", 250.0),
                TableColumn::new("Quantity", 100.0),
                TableColumn::new("Rate", 100.0),
                TableColumn::new("Amount", 100.0),
            ],
            rows: vec![vec![
                "{{product.name}}".to_string(),
                "{{product.quantity}}".to_string(),
                "{{product.price}}".to_string(),
                "{{product.total}}".to_string(),
            ]],
            ..TableElement::default()
        });
        el
    };

    Template {
        id: "invoice-basic".to_string(),
        name: "Basic Invoice".to_string(),
        description: "Simple invoice with header, items table, and totals".to_string(),
        category: Category::Invoice,
        tags: vec!["business".into(), "formal".into(), "simple".into()],
        elements: vec![
            text_at(50.0, 50.0, "{{company.name}}", 24.0, "#000000", TextAlign::Left),
            text_at(50.0, 80.0, "{{company.address}}", 12.0, "#666666", TextAlign::Left),
            text_at(450.0, 50.0, "INVOICE", 32.0, "#0066cc", TextAlign::Right),
            text_at(450.0, 90.0, "{{invoice.number}}", 16.0, "#000000", TextAlign::Right),
            text_at(50.0, 150.0, "Bill To:", 14.0, "#000000", TextAlign::Left),
            text_at(50.0, 170.0, "{{customer.name}}", 16.0, "#000000", TextAlign::Left),
            text_at(50.0, 190.0, "{{customer.address}}", 12.0, "#666666", TextAlign::Left),
            table,
            text_at(350.0, 500.0, "Total: {{invoice.total}}", 18.0, "#000000", TextAlign::Right),
        ],
        page_size: Size::new(794.0, 1123.0),
        background: default_background(),
        preview: None,
        created: None,
        author: "System".to_string(),
        imported: false,
    }
}

fn product_label() -> Template {
    let barcode = {
        let mut el = Element::new(ElementKind::Barcode, 20.0, 90.0);
        if let ElementContent::Barcode(b) = &mut el.content {
            b.value = "{{product.barcode}}".to_string();
        }
        el
    };
    let qrcode = {
        let mut el = Element::new(ElementKind::Qrcode, 240.0, 20.0);
        el.content = ElementContent::Qrcode(QrCodeElement {
            value: "{{product.url}}".to_string(),
            size: 80.0,
        });
        el.width = 80.0;
        el.height = 80.0;
        el
    };

    Template {
        id: "label-product".to_string(),
        name: "Product Label".to_string(),
        description: "Standard product label with barcode and QR code".to_string(),
        category: Category::Label,
        tags: vec!["product".into(), "barcode".into(), "retail".into()],
        elements: vec![
            text_at(20.0, 20.0, "{{product.name}}", 16.0, "#000000", TextAlign::Left),
            text_at(20.0, 45.0, "SKU: {{product.sku}}", 12.0, "#666666", TextAlign::Left),
            text_at(20.0, 65.0, "{{product.price}}", 20.0, "#0066cc", TextAlign::Left),
            barcode,
            qrcode,
        ],
        page_size: Size::new(288.0, 432.0),
        background: default_background(),
        preview: None,
        created: None,
        author: "System".to_string(),
        imported: false,
    }
}

fn pos_receipt() -> Template {
    let table = {
        let mut el = Element::new(ElementKind::Table, 20.0, 130.0);
        el.width = 240.0;
        el.height = 150.0;
        el.content = ElementContent::Table(TableElement {
            columns: vec![
                TableColumn::new("Item", 120.0),
                TableColumn::new("Qty", 40.0),
                TableColumn::new("Price", 80.0),
            ],
            rows: vec![vec![
                "{{product.name}}".to_string(),
                "{{product.quantity}}".to_string(),
                "{{product.price}}".to_string(),
            ]],
            ..TableElement::default()
        });
        el
    };

    Template {
        id: "receipt-pos".to_string(),
        name: "POS Receipt".to_string(),
        description: "Point of sale receipt".to_string(),
        category: Category::Receipt,
        tags: vec!["pos".into(), "receipt".into(), "retail".into()],
        elements: vec![
            text_at(140.0, 20.0, "{{company.name}}", 18.0, "#000000", TextAlign::Center),
            text_at(140.0, 45.0, "{{company.address}}", 12.0, "#666666", TextAlign::Center),
            text_at(20.0, 100.0, "Receipt: {{receipt.number}}", 12.0, "#000000", TextAlign::Left),
            text_at(260.0, 100.0, "{{receipt.date}}", 12.0, "#000000", TextAlign::Right),
            table,
            text_at(260.0, 320.0, "Total: {{receipt.total}}", 16.0, "#000000", TextAlign::Right),
            text_at(
                140.0,
                360.0,
                "Thank you for your business!",
                14.0,
                "#000000",
                TextAlign::Center,
            ),
        ],
        page_size: Size::new(280.0, 400.0),
        background: default_background(),
        preview: None,
        created: None,
        author: "System".to_string(),
        imported: false,
    }
}

fn name_badge() -> Template {
    let frame = {
        let mut el = Element::new(ElementKind::Rectangle, 0.0, 0.0);
        el.width = 300.0;
        el.height = 200.0;
        el.content = ElementContent::Rectangle(RectangleElement {
            fill: "#ffffff".to_string(),
            stroke: "#0066cc".to_string(),
            stroke_width: 2.0,
            corner_radius: 0.0,
        });
        el
    };
    let banner = {
        let mut el = Element::new(ElementKind::Rectangle, 0.0, 0.0);
        el.width = 300.0;
        el.height = 40.0;
        el.content = ElementContent::Rectangle(RectangleElement {
            fill: "#0066cc".to_string(),
            stroke: "none".to_string(),
            stroke_width: 0.0,
            corner_radius: 0.0,
        });
        el
    };
    let qrcode = {
        let mut el = Element::new(ElementKind::Qrcode, 220.0, 150.0);
        el.content = ElementContent::Qrcode(QrCodeElement {
            value: "{{attendee.id}}".to_string(),
            size: 40.0,
        });
        el.width = 40.0;
        el.height = 40.0;
        el
    };

    Template {
        id: "badge-name".to_string(),
        name: "Name Badge".to_string(),
        description: "Event name badge".to_string(),
        category: Category::Badge,
        tags: vec!["event".into(), "conference".into(), "name".into()],
        elements: vec![
            frame,
            banner,
            text_at(150.0, 25.0, "{{event.name}}", 16.0, "#ffffff", TextAlign::Center),
            text_at(150.0, 80.0, "{{attendee.name}}", 24.0, "#000000", TextAlign::Center),
            text_at(150.0, 110.0, "{{attendee.title}}", 14.0, "#666666", TextAlign::Center),
            text_at(150.0, 130.0, "{{attendee.company}}", 16.0, "#0066cc", TextAlign::Center),
            qrcode,
        ],
        page_size: Size::new(300.0, 200.0),
        background: default_background(),
        preview: None,
        created: None,
        author: "System".to_string(),
        imported: false,
    }
}

fn completion_certificate() -> Template {
    Template {
        id: "certificate-completion".to_string(),
        name: "Certificate of Completion".to_string(),
        description: "Landscape course certificate with signature line".to_string(),
        category: Category::Certificate,
        tags: vec!["course".into(), "award".into(), "formal".into()],
        elements: vec![
            text_at(561.0, 120.0, "{{certificate.title}}", 36.0, "#1a1a1a", TextAlign::Center),
            text_at(561.0, 200.0, "This certifies that", 16.0, "#666666", TextAlign::Center),
            text_at(561.0, 240.0, "{{recipient.name}}", 28.0, "#0066cc", TextAlign::Center),
            text_at(
                561.0,
                300.0,
                "has completed {{certificate.course}}",
                16.0,
                "#1a1a1a",
                TextAlign::Center,
            ),
            text_at(561.0, 340.0, "{{certificate.date}}", 14.0, "#666666", TextAlign::Center),
            text_at(200.0, 600.0, "{{instructor.signature}}", 18.0, "#1a1a1a", TextAlign::Center),
            text_at(200.0, 630.0, "{{instructor.name}}, {{instructor.title}}", 12.0, "#666666", TextAlign::Center),
            text_at(900.0, 630.0, "{{organization.name}}", 12.0, "#666666", TextAlign::Center),
        ],
        page_size: Size::new(1123.0, 794.0),
        background: default_background(),
        preview: None,
        created: None,
        author: "System".to_string(),
        imported: false,
    }
}
