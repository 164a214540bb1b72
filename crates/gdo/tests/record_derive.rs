use gdo::{FieldMap, NullInt64, NullString, Record, insert_fragment, placeholders, update_fragment};

#[derive(Debug, Default, Record)]
struct User {
    name: String,
    #[gdo(column = "user_age")]
    age: i64,
    city: String,
    #[gdo(skip)]
    #[allow(dead_code)]
    session_hits: u32,
}

#[derive(Debug, Default, Record)]
struct Settings {
    theme: Option<String>,
    beta: bool,
    quota: NullInt64,
    motto: NullString,
    ratio: f64,
}

#[test]
fn derived_field_map_uses_overrides() {
    let map = User::field_map();
    assert_eq!(map.column("name"), Some("name"));
    assert_eq!(map.column("age"), Some("user_age"));
    assert_eq!(map.column("session_hits"), None);
    assert_eq!(map.len(), 3);
}

#[test]
fn derived_fields_follow_declaration_order() {
    let user = User::default();
    let names: Vec<_> = user.fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["name", "age", "city"]);
}

#[test]
fn insert_fragment_worked_example() {
    let user = User {
        name: "Alice".into(),
        age: 0,
        city: "NYC".into(),
        session_hits: 12,
    };
    let frag = insert_fragment(&user, &User::field_map());
    assert_eq!(frag.columns, "name,city");
    assert_eq!(frag.placeholders, "?,?");
    assert_eq!(format!("{:?}", frag.args), r#"["Alice", "NYC"]"#);
}

#[test]
fn update_fragment_counts_non_zero_fields() {
    let user = User {
        name: String::new(),
        age: 30,
        city: "Lyon".into(),
        session_hits: 0,
    };
    let frag = update_fragment(&user, &User::field_map());
    assert_eq!(frag.assignments, "user_age = ?,city = ?");
    assert_eq!(frag.args.len(), 2);
}

#[test]
fn all_zero_record_is_empty() {
    let settings = Settings::default();
    let map = Settings::field_map();
    assert!(insert_fragment(&settings, &map).is_empty());
    assert!(update_fragment(&settings, &map).is_empty());
}

#[test]
fn caller_mapping_overrides_default() {
    let settings = Settings {
        theme: Some("dark".into()),
        quota: NullInt64::valid(0),
        ..Settings::default()
    };
    let map = FieldMap::from([
        ("theme", "ui_theme"),
        ("beta", "beta"),
        ("quota", "quota_mb"),
        ("motto", "motto"),
        ("ratio", "ratio"),
    ]);
    let frag = insert_fragment(&settings, &map);
    assert_eq!(frag.columns, "ui_theme,quota_mb");
    assert_eq!(frag.placeholders, placeholders(2));
    assert_eq!(format!("{:?}", frag.args), r#"[Some("dark"), Null { value: 0, valid: true }]"#);
}

#[test]
fn insert_and_update_arity_agree() {
    let settings = Settings {
        theme: None,
        beta: true,
        quota: NullInt64::null(),
        motto: NullString::valid("carpe diem".into()),
        ratio: 0.25,
    };
    let map = Settings::field_map();

    let ins = insert_fragment(&settings, &map);
    let n = ins.args.len();
    assert_eq!(ins.columns.split(',').count(), n);
    assert_eq!(ins.placeholders.split(',').count(), n);

    let upd = update_fragment(&settings, &map);
    assert_eq!(upd.args.len(), n);
    assert_eq!(upd.assignments.matches(" = ?").count(), n);
}

#[derive(Debug, Default, Record)]
struct Item {
    r#type: String,
    #[gdo(column = "ref_no")]
    r#ref: i64,
}

#[test]
fn raw_identifiers_map_to_plain_columns() {
    let map = Item::field_map();
    assert_eq!(map.column("type"), Some("type"));
    assert_eq!(map.column("ref"), Some("ref_no"));

    let item = Item {
        r#type: "widget".into(),
        r#ref: 0,
    };
    let names: Vec<_> = item.fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["type", "ref"]);

    let frag = insert_fragment(&item, &map);
    assert_eq!(frag.columns, "type");
    assert_eq!(format!("{:?}", frag.args), r#"["widget"]"#);
}
