use thinktimer::db::update::UpdateBuilder;
use thinktimer::models::CreateProjectRequest;

mod common;
use common::{memory_app, utc};

#[test]
fn test_sql_follows_insertion_order() {
    let mut update = UpdateBuilder::new("projects");
    update
        .set_opt("name", Some("x".to_string()))
        .set_opt::<String>("description", None)
        .set_opt("url", Some("https://x".to_string()))
        .set_timestamp("updated_at", &utc(2025, 1, 1, 0, 0, 0));

    assert_eq!(update.columns(), vec!["name", "url", "updated_at"]);
    assert_eq!(
        update.sql(),
        "UPDATE projects SET name = ?1, url = ?2, updated_at = ?3 WHERE id = ?4"
    );
}

#[test]
fn test_empty_builder_does_nothing() {
    let app = memory_app();
    let mut update = UpdateBuilder::new("settings");
    update
        .set_opt::<String>("language", None)
        .set_opt_timestamp("ignored", None);

    assert!(update.is_empty());
    assert_eq!(update.execute(app.conn(), 1).expect("no-op"), 0);
}

#[test]
fn test_execute_touches_only_target_row() {
    let mut app = memory_app();
    let a = app
        .create_project(&CreateProjectRequest::named("A"))
        .expect("a");
    let b = app
        .create_project(&CreateProjectRequest::named("B"))
        .expect("b");

    let mut update = UpdateBuilder::new("projects");
    update
        .set("name", "A2".to_string())
        .set("status", "paused".to_string());
    assert_eq!(update.execute(app.conn(), a.id).expect("execute"), 1);

    let a = app.get_project(a.id).expect("a");
    let b = app.get_project(b.id).expect("b");
    assert_eq!(a.name, "A2");
    assert_eq!(b.name, "B");

    assert_eq!(update.execute(app.conn(), 9999).expect("missing row"), 0);
}
