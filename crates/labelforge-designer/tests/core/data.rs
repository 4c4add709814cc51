use labelforge_designer::{Category, SampleData};

#[test]
fn dotted_insert_and_lookup_agree() {
    let mut data = SampleData::new();
    data.insert("invoice.number", "INV-1");
    data.insert("invoice.customer.name", "Ada");

    assert_eq!(data.get("invoice.number"), Some("INV-1"));
    assert_eq!(data.get("invoice.customer.name"), Some("Ada"));
    assert_eq!(data.get("invoice.customer"), None);
    assert_eq!(data.get("invoice.missing"), None);
    assert_eq!(data.get("nope"), None);
}

#[test]
fn merge_overwrites_on_conflict() {
    let mut base = SampleData::new();
    base.insert("a.b", "old");
    base.insert("a.c", "kept");

    let mut other = SampleData::new();
    other.insert("a.b", "new");
    base.merge(&other);

    assert_eq!(base.get("a.b"), Some("new"));
    assert_eq!(base.get("a.c"), Some("kept"));
}

#[test]
fn flatten_lists_leaves_in_order() {
    let mut data = SampleData::new();
    data.insert("b.y", "2");
    data.insert("a.x", "1");
    let flat = data.flatten();
    assert_eq!(
        flat,
        vec![
            ("a.x".to_string(), "1".to_string()),
            ("b.y".to_string(), "2".to_string())
        ]
    );
}

#[test]
fn category_dictionaries_carry_their_namespace() {
    assert!(SampleData::for_category(Some(Category::Invoice))
        .get("invoice.number")
        .is_some());
    assert!(SampleData::for_category(Some(Category::Receipt))
        .get("receipt.total")
        .is_some());
    assert!(SampleData::for_category(Some(Category::Badge))
        .get("attendee.name")
        .is_some());
    assert!(SampleData::for_category(Some(Category::Certificate))
        .get("recipient.name")
        .is_some());
    assert!(SampleData::for_category(Some(Category::Label))
        .get("shipping.tracking")
        .is_some());
}

#[test]
fn no_category_merges_everything() {
    let merged = SampleData::for_category(None);
    assert!(merged.get("invoice.number").is_some());
    assert!(merged.get("receipt.total").is_some());
    assert!(merged.get("certificate.title").is_some());
    assert!(merged.get("event.name").is_some());
    assert!(merged.get("shipping.carrier").is_some());
}

#[test]
fn variable_groups_split_by_namespace() {
    let groups = SampleData::merged().variable_groups();
    let names: Vec<&str> = groups.iter().map(|(ns, _)| ns.as_str()).collect();
    for expected in [
        "attendee",
        "certificate",
        "company",
        "customer",
        "event",
        "instructor",
        "invoice",
        "organization",
        "product",
        "receipt",
        "recipient",
        "shipping",
        "store",
    ] {
        assert!(names.contains(&expected), "missing namespace {expected}");
    }
    let invoice = groups
        .iter()
        .find(|(ns, _)| ns == "invoice")
        .map(|(_, keys)| keys)
        .unwrap();
    assert!(invoice.iter().all(|key| key.starts_with("invoice.")));
}

#[test]
fn from_json_stringifies_scalars() {
    let value = serde_json::json!({
        "order": { "count": 3, "rush": true, "note": "asap" },
        "skipped": [1, 2, 3]
    });
    let data = SampleData::from_json(&value);
    assert_eq!(data.get("order.count"), Some("3"));
    assert_eq!(data.get("order.rush"), Some("true"));
    assert_eq!(data.get("order.note"), Some("asap"));
    assert_eq!(data.get("skipped"), None);
}

#[test]
fn category_names_round_trip() {
    for category in Category::ALL {
        assert_eq!(Category::parse(category.as_str()), Some(category));
    }
    assert_eq!(Category::parse("poster"), None);
}
