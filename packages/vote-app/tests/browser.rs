#![cfg(all(target_arch = "wasm32", feature = "csr"))]

use std::rc::Rc;
use std::time::Duration;

use gloo::history::{BrowserHistory, History};
use page_analytics::MemorySink;
use vote_app::{AppConfig, AppHost, MountError};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_point(id: &str) -> web_sys::Element {
    let document = gloo::utils::document();
    let div = document.create_element("div").unwrap();
    div.set_id(id);
    gloo::utils::body().append_child(&div).unwrap();
    div
}

fn reporting() -> AppConfig {
    AppConfig {
        analytics: true,
        ..AppConfig::default()
    }
}

fn page_views(sink: &MemorySink) -> Vec<(String, String)> {
    sink.events()
        .into_iter()
        .map(|e| {
            assert_eq!(e.name, "page_view");
            (
                e.param("page_path").unwrap().to_owned(),
                e.param("page_title").unwrap().to_owned(),
            )
        })
        .collect()
}

fn rendered_route(root: &web_sys::Element) -> Option<String> {
    let view = root.query_selector("[data-route]").unwrap()?;
    view.get_attribute("data-route")
}

async fn settle() {
    sleep(Duration::from_millis(20)).await;
}

#[wasm_bindgen_test]
async fn mount_point_is_empty_until_mounted() {
    let root = mount_point("app-empty");
    assert_eq!(root.inner_html(), "");

    let handle = AppHost::new(AppConfig::default())
        .mount("#app-empty")
        .unwrap();
    settle().await;

    assert!(root.inner_html().contains("<nav>"));
    handle.destroy();
}

#[wasm_bindgen_test]
fn missing_mount_point_is_reported() {
    let err = AppHost::new(AppConfig::default())
        .mount("#not-on-this-page")
        .unwrap_err();
    assert_eq!(err, MountError::MissingMountPoint("#not-on-this-page".into()));
}

#[wasm_bindgen_test]
async fn navigations_are_reported_as_page_views() {
    mount_point("app-analytics");
    let history = BrowserHistory::new();
    history.replace("/");

    let sink = Rc::new(MemorySink::new());
    let handle = AppHost::new(reporting())
        .with_analytics(sink.clone())
        .mount("#app-analytics")
        .unwrap();
    settle().await;

    history.push("/vote");
    settle().await;
    history.push("/about");
    settle().await;
    history.push("/about");
    settle().await;

    assert_eq!(
        page_views(&sink),
        [
            ("/".to_owned(), "home".to_owned()),
            ("/vote".to_owned(), "vote".to_owned()),
            ("/about".to_owned(), "about".to_owned()),
            ("/about".to_owned(), "about".to_owned()),
        ]
    );

    handle.destroy();
    history.replace("/");
}

#[wasm_bindgen_test]
async fn routes_render_without_a_reporter() {
    let root = mount_point("app-quiet");
    let history = BrowserHistory::new();
    history.replace("/");

    let handle = AppHost::new(AppConfig::default())
        .mount("#app-quiet")
        .unwrap();
    settle().await;
    assert!(root.inner_html().contains(r#"data-route="home""#));

    history.push("/vote");
    settle().await;
    assert!(root.inner_html().contains(r#"data-route="vote""#));
    assert!(!root.inner_html().contains(r#"data-route="home""#));

    handle.destroy();
    history.replace("/");
}

#[wasm_bindgen_test]
async fn page_views_follow_the_rendered_route_under_a_base_url() {
    let root = mount_point("app-based");
    let history = BrowserHistory::new();
    history.replace("/polls/");

    let sink = Rc::new(MemorySink::new());
    let config = AppConfig {
        base_url: "/polls/".into(),
        ..reporting()
    };
    let handle = AppHost::new(config)
        .with_analytics(sink.clone())
        .mount("#app-based")
        .unwrap();
    settle().await;

    let mut rendered = vec![rendered_route(&root)];
    for url in ["/polls/vote", "/polls/nowhere", "/polls"] {
        history.push(url);
        settle().await;
        rendered.push(rendered_route(&root));
    }

    let views = page_views(&sink);
    assert_eq!(
        views,
        [
            ("/".to_owned(), "home".to_owned()),
            ("/vote".to_owned(), "vote".to_owned()),
            ("/nowhere".to_owned(), "not-found".to_owned()),
            ("/polls".to_owned(), "not-found".to_owned()),
        ]
    );
    let reported: Vec<_> = views.into_iter().map(|(_, name)| Some(name)).collect();
    assert_eq!(reported, rendered);

    handle.destroy();
    history.replace("/");
}
