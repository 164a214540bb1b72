use super::*;
use crate::null::{Null, NullInt64, NullString};
use crate::record::Field;

struct Person {
    name: String,
    age: i64,
    city: String,
}

impl Record for Person {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("Name", &self.name),
            Field::new("Age", &self.age),
            Field::new("City", &self.city),
        ]
    }

    fn field_map() -> FieldMap {
        FieldMap::from([("Name", "name"), ("Age", "age"), ("City", "city")])
    }
}

struct Account {
    active: bool,
    balance: f64,
    nickname: Option<String>,
    score: NullInt64,
    note: NullString,
}

impl Record for Account {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("active", &self.active),
            Field::new("balance", &self.balance),
            Field::new("nickname", &self.nickname),
            Field::new("score", &self.score),
            Field::new("note", &self.note),
        ]
    }

    fn field_map() -> FieldMap {
        FieldMap::from([
            ("active", "is_active"),
            ("balance", "balance"),
            ("nickname", "nick"),
            ("score", "score"),
            ("note", "note"),
        ])
    }
}

fn alice() -> Person {
    Person {
        name: "Alice".to_string(),
        age: 0,
        city: "NYC".to_string(),
    }
}

fn empty_account() -> Account {
    Account {
        active: false,
        balance: 0.0,
        nickname: None,
        score: Null::default(),
        note: Null::default(),
    }
}

#[test]
fn test_insert_skips_zero_fields() {
    let person = alice();
    let frag = insert_fragment(&person, &Person::field_map());
    assert_eq!(frag.columns, "name,city");
    assert_eq!(frag.placeholders, "?,?");
    assert_eq!(format!("{:?}", frag.args), r#"["Alice", "NYC"]"#);
}

#[test]
fn test_update_skips_zero_fields() {
    let person = alice();
    let frag = update_fragment(&person, &Person::field_map());
    assert_eq!(frag.assignments, "name = ?,city = ?");
    assert_eq!(frag.args.len(), 2);
    assert_eq!(format!("{:?}", frag.args), r#"["Alice", "NYC"]"#);
}

#[test]
fn test_all_fields_populated() {
    let person = Person {
        name: "Bob".into(),
        age: 41,
        city: "Oslo".into(),
    };
    let frag = insert_fragment(&person, &Person::field_map());
    assert_eq!(frag.columns, "name,age,city");
    assert_eq!(frag.placeholders, "?,?,?");
    assert_eq!(format!("{:?}", frag.args), r#"["Bob", 41, "Oslo"]"#);
}

#[test]
fn test_all_zero_record_yields_empty_fragments() {
    let account = empty_account();
    let map = Account::field_map();

    let ins = insert_fragment(&account, &map);
    assert!(ins.is_empty());
    assert_eq!(ins.columns, "");
    assert_eq!(ins.placeholders, "");
    assert!(ins.args.is_empty());

    let upd = update_fragment(&account, &map);
    assert!(upd.is_empty());
    assert_eq!(upd.assignments, "");
    assert!(upd.args.is_empty());
}

#[test]
fn test_order_follows_declaration_not_mapping() {
    let account = Account {
        active: true,
        balance: 2.5,
        nickname: Some("z".into()),
        score: Null::valid(3),
        note: Null::valid("n".into()),
    };
    // HashMap iteration order is irrelevant; fields come out in declaration order.
    let frag = insert_fragment(&account, &Account::field_map());
    assert_eq!(frag.columns, "is_active,balance,nick,score,note");
    assert_eq!(frag.args.len(), 5);
}

#[test]
fn test_insert_arity_matches() {
    let account = Account {
        active: true,
        balance: 0.0,
        nickname: Some(String::new()),
        score: Null::default(),
        note: Null::valid(String::new()),
    };
    let frag = insert_fragment(&account, &Account::field_map());
    let cols = frag.columns.split(',').count();
    let marks = frag.placeholders.split(',').count();
    assert_eq!(cols, marks);
    assert_eq!(cols, frag.args.len());
    assert_eq!(frag.columns, "is_active,nick,note");
}

#[test]
fn test_zero_update_is_dropped_unless_wrapped() {
    // Setting a column back to zero through a plain field is silently lost.
    let patch = Person {
        name: String::new(),
        age: 0,
        city: "Paris".into(),
    };
    let frag = update_fragment(&patch, &Person::field_map());
    assert_eq!(frag.assignments, "city = ?");

    // A valid Null carrying a zero payload is not a zero value.
    let account = Account {
        score: Null::valid(0),
        ..empty_account()
    };
    let frag = update_fragment(&account, &Account::field_map());
    assert_eq!(frag.assignments, "score = ?");
    assert_eq!(frag.args.len(), 1);
}

#[test]
fn test_unmapped_field_emits_empty_column() {
    let person = alice();
    let map = FieldMap::from([("Name", "name")]);

    let upd = update_fragment(&person, &map);
    assert_eq!(upd.assignments, "name = ?, = ?");
    assert_eq!(upd.args.len(), 2);

    let ins = insert_fragment(&person, &map);
    assert_eq!(ins.columns, "name,");
    assert_eq!(ins.placeholders, "?,?");
}

#[test]
fn test_update_push_arg_and_sql() {
    let person = alice();
    let id = 7_i64;
    let mut frag = update_fragment(&person, &Person::field_map());
    frag.push_arg(&id);
    assert_eq!(frag.args.len(), 3);
    assert_eq!(
        frag.update_sql("people", "id = ?"),
        "UPDATE people SET name = ?,city = ? WHERE id = ?"
    );
}

#[test]
fn test_insert_sql() {
    let person = alice();
    let frag = insert_fragment(&person, &Person::field_map());
    assert_eq!(
        frag.insert_sql("people"),
        "INSERT INTO people (name,city) VALUES (?,?)"
    );
}

#[test]
fn test_dyn_record() {
    let person = alice();
    let record: &dyn Record = &person;
    let frag = insert_fragment(record, &Person::field_map());
    assert_eq!(frag.columns, "name,city");
}

#[test]
fn test_placeholders() {
    assert_eq!(placeholders(0), "");
    assert_eq!(placeholders(1), "?");
    assert_eq!(placeholders(3), "?,?,?");

    let marks = placeholders(10);
    assert_eq!(marks.matches('?').count(), 10);
    assert_eq!(marks.matches(',').count(), 9);
}

/// Decides zero-ness itself: a `"pending"` status counts as unset, and the
/// counter is always written.
struct Ticket {
    status: String,
    retries: i32,
}

impl Record for Ticket {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::with_zero("status", &self.status, self.status == "pending"),
            Field::with_zero("retries", &self.retries, false),
        ]
    }

    fn field_map() -> FieldMap {
        FieldMap::from([("status", "status"), ("retries", "retries")])
    }
}

#[test]
fn test_record_supplied_zero_flag_wins() {
    let map = Ticket::field_map();

    let pending = Ticket {
        status: "pending".to_string(),
        retries: 0,
    };
    let upd = update_fragment(&pending, &map);
    assert_eq!(upd.assignments, "retries = ?");
    assert_eq!(format!("{:?}", upd.args), "[0]");

    let closed = Ticket {
        status: "closed".to_string(),
        retries: 2,
    };
    let ins = insert_fragment(&closed, &map);
    assert_eq!(ins.columns, "status,retries");
    assert_eq!(ins.placeholders, "?,?");
    assert_eq!(format!("{:?}", ins.args), r#"["closed", 2]"#);

    // Empty string is not zero here: the record said so.
    let blank = Ticket {
        status: String::new(),
        retries: 0,
    };
    assert_eq!(update_fragment(&blank, &map).assignments, "status = ?,retries = ?");
}
