//! Sample-data dictionaries keyed by document category.
//!
//! Sample data feeds the placeholder resolver so designs preview with
//! realistic values. Dictionaries are keyed by dotted names
//! (`invoice.number`) and stored nested, so dotted construction and
//! nested lookup agree. Resolution never mutates element definitions,
//! only their rendered/exported appearance.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A node in the sample-data tree: a string leaf or a nested section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Text(String),
    Section(BTreeMap<String, DataValue>),
}

/// A nested dictionary of sample values addressed by dotted paths.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleData {
    root: BTreeMap<String, DataValue>,
}

impl SampleData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value at a dotted path, creating sections along the
    /// way. A leaf in the middle of the path is replaced by a section.
    pub fn insert(&mut self, dotted_key: &str, value: impl Into<String>) {
        let mut segments = dotted_key.split('.').peekable();
        let mut node = &mut self.root;
        while let Some(segment) = segments.next() {
            if segments.peek().is_none() {
                node.insert(segment.to_string(), DataValue::Text(value.into()));
                return;
            }
            let entry = node
                .entry(segment.to_string())
                .or_insert_with(|| DataValue::Section(BTreeMap::new()));
            if !matches!(entry, DataValue::Section(_)) {
                *entry = DataValue::Section(BTreeMap::new());
            }
            let DataValue::Section(section) = entry else {
                unreachable!()
            };
            node = section;
        }
    }

    /// Resolves a dotted path to a string leaf. Sections and missing
    /// paths yield `None`.
    pub fn get(&self, dotted_path: &str) -> Option<&str> {
        let mut segments = dotted_path.split('.').peekable();
        let mut node = &self.root;
        while let Some(segment) = segments.next() {
            match node.get(segment)? {
                DataValue::Text(text) => {
                    return segments.peek().is_none().then_some(text.as_str());
                }
                DataValue::Section(section) => {
                    if segments.peek().is_none() {
                        return None;
                    }
                    node = section;
                }
            }
        }
        None
    }

    /// The top-level entries, for recursive walks.
    pub fn entries(&self) -> &BTreeMap<String, DataValue> {
        &self.root
    }

    /// Merges `other` into `self`, overwriting on conflicts.
    pub fn merge(&mut self, other: &SampleData) {
        for (key, value) in other.flatten() {
            self.insert(&key, value);
        }
    }

    /// All `(dotted key, value)` leaves in lexicographic order.
    pub fn flatten(&self) -> Vec<(String, String)> {
        fn walk(node: &BTreeMap<String, DataValue>, prefix: &str, out: &mut Vec<(String, String)>) {
            for (key, value) in node {
                let full = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                match value {
                    DataValue::Text(text) => out.push((full, text.clone())),
                    DataValue::Section(section) => walk(section, &full, out),
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.root, "", &mut out);
        out
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Builds a dictionary from arbitrary JSON, stringifying scalar
    /// leaves and descending into objects. Arrays and nulls are skipped.
    pub fn from_json(value: &Value) -> Self {
        fn walk(value: &Value, prefix: &str, data: &mut SampleData) {
            match value {
                Value::Object(map) => {
                    for (key, child) in map {
                        let full = if prefix.is_empty() {
                            key.clone()
                        } else {
                            format!("{prefix}.{key}")
                        };
                        walk(child, &full, data);
                    }
                }
                Value::String(s) => data.insert(prefix, s.clone()),
                Value::Number(n) => data.insert(prefix, n.to_string()),
                Value::Bool(b) => data.insert(prefix, b.to_string()),
                Value::Null | Value::Array(_) => {}
            }
        }
        let mut data = SampleData::new();
        walk(value, "", &mut data);
        data
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for SampleData {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut data = SampleData::new();
        for (key, value) in iter {
            data.insert(key.as_ref(), value);
        }
        data
    }
}

/// Document categories with dedicated sample dictionaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Invoice,
    Label,
    Receipt,
    Badge,
    Certificate,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Invoice => "invoice",
            Category::Label => "label",
            Category::Receipt => "receipt",
            Category::Badge => "badge",
            Category::Certificate => "certificate",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "invoice" => Some(Category::Invoice),
            "label" => Some(Category::Label),
            "receipt" => Some(Category::Receipt),
            "badge" => Some(Category::Badge),
            "certificate" => Some(Category::Certificate),
            _ => None,
        }
    }

    pub const ALL: [Category; 5] = [
        Category::Invoice,
        Category::Label,
        Category::Receipt,
        Category::Badge,
        Category::Certificate,
    ];
}

impl SampleData {
    /// The dictionary for one category, or every dictionary merged when
    /// no category is given.
    pub fn for_category(category: Option<Category>) -> Self {
        match category {
            Some(Category::Invoice) => Self::invoice(),
            Some(Category::Label) => Self::label(),
            Some(Category::Receipt) => Self::receipt(),
            Some(Category::Badge) => Self::badge(),
            Some(Category::Certificate) => Self::certificate(),
            None => Self::merged(),
        }
    }

    /// Every category dictionary merged.
    pub fn merged() -> Self {
        let mut data = Self::invoice();
        data.merge(&Self::label());
        data.merge(&Self::receipt());
        data.merge(&Self::badge());
        data.merge(&Self::certificate());
        data
    }

    /// Leaf keys grouped by namespace, for variable-picker UIs.
    pub fn variable_groups(&self) -> Vec<(String, Vec<String>)> {
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (key, _) in self.flatten() {
            let namespace = key.split('.').next().unwrap_or(&key).to_string();
            groups.entry(namespace).or_default().push(key);
        }
        groups.into_iter().collect()
    }

    pub fn invoice() -> Self {
        [
            ("invoice.number", "INV-2025-001"),
            ("invoice.date", "2025-01-15"),
            ("invoice.dueDate", "2025-02-14"),
            ("invoice.total", "$1,250.00"),
            ("invoice.subtotal", "$1,000.00"),
            ("invoice.tax", "$250.00"),
            ("invoice.taxRate", "25%"),
            ("invoice.currency", "USD"),
            ("invoice.status", "Paid"),
            ("invoice.terms", "Net 30"),
            ("invoice.notes", "Thank you for your business!"),
            ("customer.name", "John Doe"),
            ("customer.email", "john.doe@example.com"),
            ("customer.phone", "+1 (555) 123-4567"),
            ("customer.address", "123 Main Street"),
            ("customer.city", "New York"),
            ("customer.state", "NY"),
            ("customer.zip", "10001"),
            ("customer.country", "United States"),
            ("customer.company", "ABC Corporation"),
            ("customer.taxId", "12-3456789"),
            ("company.name", "Your Company Inc."),
            ("company.address", "456 Business Avenue"),
            ("company.city", "Los Angeles"),
            ("company.state", "CA"),
            ("company.zip", "90210"),
            ("company.country", "United States"),
            ("company.phone", "+1 (555) 987-6543"),
            ("company.email", "info@yourcompany.com"),
            ("company.website", "www.yourcompany.com"),
            ("company.taxId", "98-7654321"),
            ("product.name", "Premium Widget"),
            ("product.sku", "PWD-001"),
            ("product.price", "$25.00"),
            ("product.quantity", "2"),
            ("product.total", "$50.00"),
            ("product.description", "High-quality premium widget"),
            ("product.category", "Electronics"),
            ("product.brand", "TechCorp"),
        ]
        .into_iter()
        .collect()
    }

    pub fn label() -> Self {
        [
            ("product.name", "Premium Widget"),
            ("product.sku", "PWD-001"),
            ("product.price", "$25.00"),
            ("product.barcode", "1234567890123"),
            ("product.url", "https://example.com/product/PWD-001"),
            ("product.category", "Electronics"),
            ("product.brand", "TechCorp"),
            ("product.weight", "1.5 lbs"),
            ("product.dimensions", "5\" x 3\" x 2\""),
            ("product.color", "Black"),
            ("product.model", "TC-PWD-001"),
            ("product.madeIn", "USA"),
            ("product.material", "Plastic"),
            ("shipping.from", "Your Company Inc."),
            ("shipping.to", "John Doe"),
            ("shipping.address", "123 Main Street, New York, NY 10001"),
            ("shipping.tracking", "TC1234567890"),
            ("shipping.service", "Express"),
            ("shipping.weight", "2.5 lbs"),
            ("shipping.date", "2025-01-15"),
            ("shipping.carrier", "UPS"),
            ("store.name", "TechCorp Store"),
            ("store.address", "789 Retail Street"),
            ("store.phone", "+1 (555) 456-7890"),
            ("store.hours", "Mon-Fri 9AM-6PM"),
            ("store.manager", "Jane Smith"),
            ("store.id", "TC-001"),
        ]
        .into_iter()
        .collect()
    }

    pub fn receipt() -> Self {
        [
            ("receipt.number", "RCP-2025-001"),
            ("receipt.date", "2025-01-15"),
            ("receipt.time", "14:30:25"),
            ("receipt.total", "$27.50"),
            ("receipt.subtotal", "$25.00"),
            ("receipt.tax", "$2.50"),
            ("receipt.taxRate", "10%"),
            ("receipt.payment", "Credit Card"),
            ("receipt.change", "$0.00"),
            ("receipt.cashier", "Employee #123"),
            ("receipt.register", "POS-001"),
            ("receipt.transaction", "TXN-789123"),
            ("customer.name", "John Doe"),
            ("customer.phone", "+1 (555) 123-4567"),
            ("customer.loyalty", "GOLD-456789"),
            ("customer.points", "1,250"),
            ("store.name", "TechCorp Store"),
            ("store.address", "789 Retail Street, Los Angeles, CA 90210"),
            ("store.phone", "+1 (555) 456-7890"),
            ("store.return", "Returns accepted within 30 days"),
            ("store.website", "www.techcorp.com"),
            ("product.name", "Premium Widget"),
            ("product.sku", "PWD-001"),
            ("product.price", "$25.00"),
            ("product.quantity", "1"),
            ("product.total", "$25.00"),
        ]
        .into_iter()
        .collect()
    }

    pub fn badge() -> Self {
        [
            ("event.name", "Tech Conference 2025"),
            ("event.date", "January 15-17, 2025"),
            ("event.location", "Convention Center"),
            ("event.code", "TC2025"),
            ("event.website", "www.techconf2025.com"),
            ("event.hashtag", "#TechConf2025"),
            ("attendee.name", "John Doe"),
            ("attendee.title", "Senior Developer"),
            ("attendee.company", "ABC Corporation"),
            ("attendee.email", "john.doe@abc.com"),
            ("attendee.id", "ATT-001234"),
            ("attendee.type", "VIP"),
            ("attendee.access", "All Areas"),
            ("session.title", "Future of Web Development"),
            ("session.time", "2:00 PM - 3:30 PM"),
            ("session.room", "Main Hall"),
            ("session.speaker", "Jane Smith"),
        ]
        .into_iter()
        .collect()
    }

    pub fn certificate() -> Self {
        [
            ("certificate.title", "Certificate of Achievement"),
            ("certificate.number", "CERT-2025-001"),
            ("certificate.date", "January 15, 2025"),
            ("certificate.issuer", "TechCorp Training Institute"),
            ("certificate.course", "Advanced Web Development"),
            ("certificate.hours", "40 hours"),
            ("certificate.grade", "A+"),
            ("certificate.expiry", "January 15, 2027"),
            ("recipient.name", "John Doe"),
            ("recipient.id", "STU-001234"),
            ("recipient.email", "john.doe@example.com"),
            ("recipient.completion", "98%"),
            ("instructor.name", "Jane Smith"),
            ("instructor.title", "Senior Instructor"),
            ("instructor.signature", "J. Smith"),
            ("organization.name", "TechCorp Training Institute"),
            ("organization.address", "123 Education Street"),
            ("organization.phone", "+1 (555) 987-6543"),
            ("organization.website", "www.techcorp-training.com"),
            ("organization.director", "Dr. Robert Johnson"),
        ]
        .into_iter()
        .collect()
    }
}
