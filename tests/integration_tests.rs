use biz_directory::core::Alert;
use biz_directory::utils::error::DirectoryError;
use biz_directory::{app, CliConfig, HtmlPage, LoadState, LocalStorage, LOAD_FAILURE_ALERT};
use httpmock::prelude::*;
use scraper::{Html, Selector};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

const PAGE: &str = r#"<!DOCTYPE html>
<html lang="zh">
<head><meta charset="utf-8"><title>社区商家名录</title></head>
<body>
  <h2>行业分类</h2>
  <ul id="food-list"></ul>
  <ul id="hardware-list"></ul>
  <h2>紧急必须单位</h2>
  <ul id="emergency-list"></ul>
  <ul id="police-list"></ul>
  <ul id="fire-list"></ul>
  <h2>政府机构</h2>
  <ul id="government-list"></ul>
  <script src="script.js"></script>
</body>
</html>"#;

const ALL_CONTAINERS: [&str; 6] = [
    "food-list",
    "hardware-list",
    "emergency-list",
    "police-list",
    "fire-list",
    "government-list",
];

#[derive(Clone, Default)]
struct RecordingAlert {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingAlert {
    fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Alert for RecordingAlert {
    fn alert(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

struct Site {
    dir: TempDir,
    storage: LocalStorage,
    config: CliConfig,
}

fn site(origin: String, page: &str) -> Site {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("index.html"), page).unwrap();
    let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());
    let config = CliConfig {
        origin,
        page: "index.html".to_string(),
        output: "public/index.html".to_string(),
        ..CliConfig::default()
    };
    Site {
        dir,
        storage,
        config,
    }
}

impl Site {
    fn output(&self) -> Option<HtmlPage> {
        let path = self.dir.path().join("public/index.html");
        std::fs::read_to_string(path).ok().map(HtmlPage::new)
    }
}

#[tokio::test]
async fn test_single_food_record_renders_and_others_stay_empty() {
    let server = MockServer::start();
    let data_mock = server.mock(|when, then| {
        when.method(GET).path("/data.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "foodBusinesses": [
                    {"name": "A", "address": "1 Main St", "mapsLink": "https://maps/x", "phone": "123456789"}
                ],
                "hardwareBusinesses": [],
                "emergencyBusinesses": [],
                "policeBusinesses": [],
                "fireBusinesses": [],
                "governmentBusinesses": []
            }));
    });

    let site = site(server.base_url(), PAGE);
    let alert = RecordingAlert::default();
    let state = app::init(&site.config, &site.storage, alert.clone())
        .await
        .unwrap();

    data_mock.assert();
    assert!(matches!(state, LoadState::Rendered(_)));
    assert!(alert.messages().is_empty());

    let page = site.output().expect("rendered page written");
    let food = page.content_of("food-list").unwrap();
    assert_eq!(food.matches("<li>").count(), 1);
    assert!(food.contains(r#"<a href="https://maps/x">1 Main St</a>"#));
    assert!(food.contains(r#"<a href="tel:+60123456789">123456789</a>"#));

    for id in &ALL_CONTAINERS[1..] {
        assert_eq!(page.content_of(id).as_deref(), Some(""), "#{} should be empty", id);
    }
    assert!(page.to_html().contains("<title>社区商家名录</title>"));
}

#[tokio::test]
async fn test_every_category_keeps_record_order() {
    let server = MockServer::start();
    let mut data = serde_json::Map::new();
    for (index, key) in [
        "foodBusinesses",
        "hardwareBusinesses",
        "emergencyBusinesses",
        "policeBusinesses",
        "fireBusinesses",
        "governmentBusinesses",
    ]
    .iter()
    .enumerate()
    {
        let records: Vec<serde_json::Value> = (0..=index)
            .map(|n| {
                serde_json::json!({
                    "name": format!("{}-{}", key, n),
                    "address": format!("Jalan {}", n),
                    "mapsLink": format!("https://maps.example/{}/{}", key, n),
                    "phone": format!("3{:08}", n),
                })
            })
            .collect();
        data.insert(key.to_string(), serde_json::Value::Array(records));
    }

    let body = serde_json::Value::Object(data);
    server.mock(|when, then| {
        when.method(GET).path("/data.json");
        then.status(200).json_body(body.clone());
    });

    let site = site(server.base_url(), PAGE);
    let state = app::init(&site.config, &site.storage, RecordingAlert::default())
        .await
        .unwrap();

    let LoadState::Rendered(report) = state else {
        panic!("expected rendered state");
    };
    assert_eq!(report.rendered_items(), 21);
    assert!(report.missing_containers().is_empty());

    let page = site.output().unwrap();
    for (index, id) in ALL_CONTAINERS.iter().enumerate() {
        let content = page.content_of(id).unwrap();
        assert_eq!(content.matches("<li>").count(), index + 1);

        let positions: Vec<usize> = (0..=index)
            .map(|n| content.find(&format!("Businesses-{}，", n)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

#[tokio::test]
async fn test_not_found_status_alerts_once_and_writes_nothing() {
    let server = MockServer::start();
    let data_mock = server.mock(|when, then| {
        when.method(GET).path("/data.json");
        then.status(404);
    });

    let site = site(server.base_url(), PAGE);
    let alert = RecordingAlert::default();
    let state = app::init(&site.config, &site.storage, alert.clone())
        .await
        .unwrap();

    data_mock.assert();
    assert!(matches!(
        state,
        LoadState::Failed(DirectoryError::FetchStatus { status: 404 })
    ));
    assert_eq!(alert.messages(), vec![LOAD_FAILURE_ALERT.to_string()]);
    assert!(site.output().is_none());
}

#[tokio::test]
async fn test_truncated_json_is_reported_as_parse_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/data.json");
        then.status(200)
            .body(r#"{"foodBusinesses": [{"name": "A", "address": "1 Ma"#);
    });

    let site = site(server.base_url(), PAGE);
    let alert = RecordingAlert::default();
    let state = app::init(&site.config, &site.storage, alert.clone())
        .await
        .unwrap();

    match state {
        LoadState::Failed(e) => {
            assert!(matches!(e, DirectoryError::Parse { .. }));
            assert!(!matches!(e, DirectoryError::FetchStatus { .. }));
        }
        LoadState::Rendered(_) => panic!("truncated body must not render"),
    }
    assert_eq!(alert.messages().len(), 1);
    assert!(site.output().is_none());
}

#[tokio::test]
async fn test_missing_keys_render_as_empty_lists() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/data.json");
        then.status(200).json_body(serde_json::json!({
            "fireBusinesses": [
                {"name": "Balai Bomba", "address": "Jalan Api", "mapsLink": "https://maps/bomba", "phone": "994"}
            ]
        }));
    });

    let page_with_stale = PAGE.replace(
        r#"<ul id="food-list"></ul>"#,
        r#"<ul id="food-list"><li>loading...</li></ul>"#,
    );
    let site = site(server.base_url(), &page_with_stale);
    let state = app::init(&site.config, &site.storage, RecordingAlert::default())
        .await
        .unwrap();

    assert!(matches!(state, LoadState::Rendered(_)));
    let page = site.output().unwrap();
    assert_eq!(page.content_of("food-list").as_deref(), Some(""));
    assert!(page
        .content_of("fire-list")
        .unwrap()
        .contains("tel:+60994"));
}

#[tokio::test]
async fn test_missing_container_degrades_only_that_category() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/data.json");
        then.status(200).json_body(serde_json::json!({
            "policeBusinesses": [{"name": "IPD", "address": "x", "mapsLink": "y", "phone": "1"}],
            "governmentBusinesses": [{"name": "JPN", "address": "x", "mapsLink": "y", "phone": "2"}]
        }));
    });

    let without_police = PAGE.replace(r#"<ul id="police-list"></ul>"#, "");
    let site = site(server.base_url(), &without_police);
    let state = app::init(&site.config, &site.storage, RecordingAlert::default())
        .await
        .unwrap();

    let LoadState::Rendered(report) = state else {
        panic!("expected rendered state");
    };
    assert_eq!(report.missing_containers(), vec!["police-list"]);

    let page = site.output().unwrap();
    assert!(page.content_of("government-list").unwrap().contains("JPN"));
    assert!(!page.to_html().contains("IPD"));
}

#[tokio::test]
async fn test_record_markup_is_escaped_in_output() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/data.json");
        then.status(200).json_body(serde_json::json!({
            "foodBusinesses": [{
                "name": "<script>alert('x')</script>",
                "address": "1 Main St",
                "mapsLink": "javascript:\"><img src=x>",
                "phone": "1"
            }]
        }));
    });

    let site = site(server.base_url(), PAGE);
    app::init(&site.config, &site.storage, RecordingAlert::default())
        .await
        .unwrap();

    let page = site.output().unwrap();
    let food = page.content_of("food-list").unwrap();
    assert!(food.contains("&lt;script&gt;"));

    // 記錄內容只能成為文字或屬性值，不會產生新元素
    let rendered = Html::parse_document(&page.to_html());
    let count = |css: &str| rendered.select(&Selector::parse(css).unwrap()).count();
    assert_eq!(count("#food-list script"), 0);
    assert_eq!(count("#food-list img"), 0);
    assert_eq!(count("#food-list li"), 1);
    assert_eq!(count("#food-list a"), 2);

    let link = rendered
        .select(&Selector::parse("#food-list a").unwrap())
        .next()
        .unwrap();
    assert_eq!(link.value().attr("href"), Some("javascript:\"><img src=x>"));
}

#[tokio::test]
async fn test_local_file_origin_takes_failure_path() {
    let site = site("file:///tmp/biz-directory/".to_string(), PAGE);
    let alert = RecordingAlert::default();
    let state = app::init(&site.config, &site.storage, alert.clone())
        .await
        .unwrap();

    assert!(matches!(
        state,
        LoadState::Failed(DirectoryError::Network { .. })
    ));
    assert_eq!(alert.messages(), vec![LOAD_FAILURE_ALERT.to_string()]);
}

#[tokio::test]
async fn test_missing_template_is_an_error_not_an_alert() {
    let dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());
    let config = CliConfig {
        page: "nope.html".to_string(),
        ..CliConfig::default()
    };
    let alert = RecordingAlert::default();

    let result = app::init(&config, &storage, alert.clone()).await;

    assert!(matches!(result, Err(DirectoryError::Io(_))));
    assert!(alert.messages().is_empty());
}
