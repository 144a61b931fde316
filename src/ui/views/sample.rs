//! Sample rows shown by the stories.

use std::rc::Rc;

use serde_json::json;

use crate::ui::components::{CellValue, Column, Record, Row, RowId};

/// A sample user row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// User id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Age in years.
    pub age: u32,
}

impl User {
    /// Create a user.
    pub fn new(id: i64, name: &str, email: &str, age: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            age,
        }
    }
}

impl Row for User {
    fn id(&self) -> RowId {
        RowId::Int(self.id)
    }
}

/// The three users every table story starts with.
pub fn sample_users() -> Vec<Rc<User>> {
    vec![
        Rc::new(User::new(1, "Alice", "alice@example.com", 25)),
        Rc::new(User::new(2, "Bob", "bob@example.com", 30)),
        Rc::new(User::new(3, "Charlie", "charlie@example.com", 28)),
    ]
}

/// Name, email and age columns, all sortable.
pub fn user_columns() -> Vec<Column<User>> {
    vec![
        Column::new("name", "Name", |u: &User| CellValue::from(&u.name)).sortable(true),
        Column::new("email", "Email", |u: &User| CellValue::from(&u.email)).sortable(true),
        Column::new("age", "Age", |u: &User| CellValue::from(u.age)).sortable(true),
    ]
}

/// The sample users as JSON-backed records.
pub fn sample_records() -> Vec<Record> {
    let users = json!([
        { "id": 1, "name": "Alice", "email": "alice@example.com", "age": 25 },
        { "id": 2, "name": "Bob", "email": "bob@example.com", "age": 30 },
        { "id": 3, "name": "Charlie", "email": "charlie@example.com", "age": 28 },
    ]);

    users
        .as_array()
        .into_iter()
        .flatten()
        .enumerate()
        .filter_map(|(position, user)| {
            user.as_object()
                .map(|fields| Record::new(position, fields.clone()))
        })
        .collect()
}
