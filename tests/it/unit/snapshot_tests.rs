//! Snapshot tests using the insta crate.
//!
//! These pin the serialized forms other sessions depend on: the column list
//! kept in the preference store and the JSON shape of rows.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use tabledesk::types::{CellValue, Column, Row, default_columns};

#[test]
fn snapshot_default_columns() {
    insta::assert_json_snapshot!(default_columns(), @r#"
    [
      {
        "key": "name",
        "label": "Name",
        "visible": true
      },
      {
        "key": "email",
        "label": "Email",
        "visible": true
      },
      {
        "key": "age",
        "label": "Age",
        "visible": true
      },
      {
        "key": "role",
        "label": "Role",
        "visible": true
      }
    ]
    "#);
}

#[test]
fn snapshot_hidden_column() {
    let column = Column::new("notes", "Notes").hidden();
    insta::assert_json_snapshot!(column, @r#"
    {
      "key": "notes",
      "label": "Notes",
      "visible": false
    }
    "#);
}

#[test]
fn snapshot_row() {
    let row = Row::new("3")
        .with("name", "Rohan Mehta")
        .with("nickname", CellValue::empty());
    insta::assert_json_snapshot!(row, @r#"
    {
      "id": "3",
      "name": "Rohan Mehta",
      "nickname": ""
    }
    "#);
}
