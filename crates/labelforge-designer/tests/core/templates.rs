use std::collections::HashSet;

use labelforge_designer::templates::{
    apply_template, export_template, import_template, validate_template, TemplateLibrary,
};
use labelforge_designer::{Category, Page};

#[test]
fn builtin_library_covers_every_category() {
    let library = TemplateLibrary::builtin();
    for category in Category::ALL {
        assert!(
            !library.by_category(category).is_empty(),
            "no stock template for {}",
            category.as_str()
        );
    }
}

#[test]
fn apply_template_copies_elements_with_fresh_ids() {
    let library = TemplateLibrary::builtin();
    let template = library.get("invoice-basic").unwrap();
    let target = Page::new();

    let page = apply_template(template, &target);

    assert_eq!(page.elements.len(), template.elements.len());
    assert_eq!(page.size, template.page_size);
    assert_eq!(page.background, template.background);
    assert_eq!(page.id, target.id);

    let template_ids: HashSet<&str> = template.elements.iter().map(|el| el.id.as_str()).collect();
    let applied_ids: HashSet<&str> = page.elements.iter().map(|el| el.id.as_str()).collect();
    assert_eq!(applied_ids.len(), page.elements.len(), "ids must be distinct");
    assert!(applied_ids.is_disjoint(&template_ids));
}

#[test]
fn applying_twice_yields_distinct_ids() {
    let library = TemplateLibrary::builtin();
    let template = library.get("badge-name").unwrap();
    let target = Page::new();

    let first = apply_template(template, &target);
    let second = apply_template(template, &target);

    let first_ids: HashSet<&str> = first.elements.iter().map(|el| el.id.as_str()).collect();
    let second_ids: HashSet<&str> = second.elements.iter().map(|el| el.id.as_str()).collect();
    assert!(first_ids.is_disjoint(&second_ids));
}

#[test]
fn validate_template_requires_core_fields() {
    let valid = serde_json::json!({
        "id": "t", "name": "T", "elements": [], "pageSize": {"width": 100.0, "height": 100.0}
    });
    assert!(validate_template(&valid));

    let missing = serde_json::json!({ "id": "t", "name": "T", "elements": [] });
    assert!(!validate_template(&missing));
}

#[test]
fn import_assigns_fresh_id_and_marks_imported() {
    let library = TemplateLibrary::builtin();
    let template = library.get("receipt-pos").unwrap();
    let json = export_template(template).unwrap();

    let imported = import_template(&json).unwrap();

    assert_ne!(imported.id, template.id);
    assert!(imported.imported);
    assert_eq!(imported.name, template.name);
    assert_eq!(imported.elements.len(), template.elements.len());
}

#[test]
fn import_rejects_incomplete_templates() {
    assert!(import_template("{\"id\": \"x\", \"name\": \"X\"}").is_err());
    assert!(import_template("not json").is_err());
}

#[test]
fn duplicate_template_ids_are_rejected() {
    let mut library = TemplateLibrary::builtin();
    let existing = library.get("invoice-basic").unwrap().clone();
    assert!(library.add(existing).is_err());
    assert_eq!(library.len(), 5);
}

#[test]
fn search_matches_tags_and_names() {
    let library = TemplateLibrary::builtin();
    let by_tag = library.search("barcode");
    assert!(by_tag.iter().any(|t| t.id == "label-product"));

    let by_name = library.search("invoice");
    assert!(by_name.iter().any(|t| t.id == "invoice-basic"));

    assert!(library.search("zzz-no-such-template").is_empty());
}

#[test]
fn remove_returns_the_template() {
    let mut library = TemplateLibrary::builtin();
    let removed = library.remove("badge-name");
    assert!(removed.is_some());
    assert!(library.get("badge-name").is_none());
    assert!(library.remove("badge-name").is_none());
}
