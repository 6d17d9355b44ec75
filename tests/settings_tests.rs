use thinktimer::db::db_utils::count_rows;
use thinktimer::models::{Settings, Theme, TimeFormat, UpdateSettingsRequest};

mod common;
use common::memory_app;

#[test]
fn test_partial_settings_update() {
    let mut app = memory_app();

    let updated = app
        .update_settings(&UpdateSettingsRequest {
            theme: Some(Theme::Dark),
            ..UpdateSettingsRequest::default()
        })
        .expect("update theme");

    assert_eq!(updated.id, 1);
    assert_eq!(updated.theme, Theme::Dark);
    assert_eq!(updated.language, "en");
    assert_eq!(updated.time_format, TimeFormat::H24);
    assert_eq!(updated.custom_url, "");

    let updated = app
        .update_settings(&UpdateSettingsRequest {
            language: Some("it".into()),
            time_format: Some(TimeFormat::H12),
            custom_url: Some("vscode://file/{path}".into()),
            ..UpdateSettingsRequest::default()
        })
        .expect("update the rest");

    assert_eq!(updated.theme, Theme::Dark);
    assert_eq!(updated.language, "it");
    assert_eq!(updated.time_format, TimeFormat::H12);
    assert_eq!(updated.custom_url, "vscode://file/{path}");
    assert_eq!(app.get_settings().expect("reload"), updated);
}

#[test]
fn test_settings_row_stays_single() {
    let mut app = memory_app();

    for lang in ["de", "fr", "es", "en"] {
        app.update_settings(&UpdateSettingsRequest {
            language: Some(lang.into()),
            ..UpdateSettingsRequest::default()
        })
        .expect("update");
    }

    assert_eq!(count_rows(app.conn(), "settings").expect("count"), 1);
    assert_eq!(app.get_settings().expect("read").language, "en");
}

#[test]
fn test_empty_settings_update_changes_nothing() {
    let mut app = memory_app();
    let before = app.get_settings().expect("read");

    let request = UpdateSettingsRequest::default();
    assert!(request.is_empty());
    let after = app.update_settings(&request).expect("empty update");

    assert_eq!(before, after);
}

#[test]
fn test_settings_json_uses_camel_case() {
    let app = memory_app();
    let json = serde_json::to_value(app.get_settings().expect("read")).expect("json");

    assert_eq!(json["id"], 1);
    assert_eq!(json["theme"], "light");
    assert_eq!(json["language"], "en");
    assert_eq!(json["timeFormat"], "24");
    assert_eq!(json["customUrl"], "");

    let req: UpdateSettingsRequest =
        serde_json::from_str(r#"{"timeFormat":"12","customUrl":"https://x.y"}"#).expect("parse");
    assert_eq!(req.time_format, Some(TimeFormat::H12));
    assert_eq!(req.custom_url.as_deref(), Some("https://x.y"));
    assert!(req.theme.is_none());

    let back: Settings = serde_json::from_value(json).expect("round trip");
    assert_eq!(back.time_format, TimeFormat::H24);
}
