// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::*;
use wikigroup::config::settings::Settings;
use wikigroup::domain::models::entity::GroupedEntity;
use wiremock::MockServer;

#[tokio::test]
async fn test_end_to_end_grouping() {
    let server = MockServer::start().await;
    mount_page(&server, "/wiki/List_of_animals", ANIMALS_PAGE).await;
    mount_page(&server, "/wiki/Lion", LION_PAGE).await;
    mount_page(&server, "/wiki/Tiger", TIGER_PAGE).await;

    let mapping = grouping_service(&server)
        .group_by_column("List_of_animals", "Habitat")
        .await;

    assert_eq!(
        mapping.keys().collect::<Vec<_>>(),
        vec!["Savanna", "Grassland", "Forest"]
    );
    let lion = GroupedEntity::new("Lion", "https://upload.wikimedia.org/lion.jpg");
    assert_eq!(mapping.get("Savanna").unwrap(), &[lion.clone()]);
    assert_eq!(mapping.get("Grassland").unwrap(), &[lion]);
    assert_eq!(
        mapping.get("Forest").unwrap(),
        &[GroupedEntity::new("Tiger", "https://upload.wikimedia.org/tiger.jpg")]
    );
}

#[tokio::test]
async fn test_failed_image_fetch_keeps_row_with_empty_image() {
    let server = MockServer::start().await;
    mount_page(&server, "/wiki/List_of_animals", ANIMALS_PAGE).await;
    mount_page(&server, "/wiki/Lion", LION_PAGE).await;
    mount_error(&server, "/wiki/Tiger", 500).await;

    let mapping = grouping_service(&server)
        .group_by_column("List_of_animals", "Habitat")
        .await;

    assert_eq!(mapping.len(), 3);
    assert_eq!(
        mapping.get("Forest").unwrap(),
        &[GroupedEntity::new("Tiger", "")]
    );
}

#[tokio::test]
async fn test_primary_fetch_failure_yields_empty_mapping() {
    let server = MockServer::start().await;
    mount_error(&server, "/wiki/List_of_animals", 404).await;

    let mapping = grouping_service(&server)
        .group_by_column("List_of_animals", "Habitat")
        .await;

    assert!(mapping.is_empty());
}

#[tokio::test]
async fn test_unreachable_host_yields_empty_mapping() {
    let mapping = grouping_service_with(Settings::with_base_url("http://127.0.0.1:1"))
        .group_by_column("List_of_animals", "Habitat")
        .await;

    assert!(mapping.is_empty());
}

#[tokio::test]
async fn test_unknown_column_yields_empty_mapping() {
    let server = MockServer::start().await;
    mount_page(&server, "/wiki/List_of_animals", ANIMALS_PAGE).await;

    let mapping = grouping_service(&server)
        .group_by_column("List_of_animals", "Diet")
        .await;

    assert!(mapping.is_empty());
}

#[tokio::test]
async fn test_fan_out_fetches_detail_page_once() {
    let server = MockServer::start().await;
    let page = r#"
        <table class="wikitable">
            <tr><th>Name</th><th>Habitat</th></tr>
            <tr><td><a href="/wiki/Lion" title="Lion">Lion</a></td><td>A, B,  ,C</td></tr>
        </table>
    "#;
    mount_page(&server, "/wiki/Cats", page).await;
    mount_page_once(&server, "/wiki/Lion", LION_PAGE).await;

    let mapping = grouping_service(&server)
        .group_by_column("Cats", "habitat")
        .await;

    assert_eq!(mapping.keys().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    assert_eq!(mapping.entry_count(), 3);
    server.verify().await;
}

#[tokio::test]
async fn test_repeated_runs_are_identical() {
    let server = MockServer::start().await;
    mount_page(&server, "/wiki/List_of_animals", ANIMALS_PAGE).await;
    mount_page(&server, "/wiki/Lion", LION_PAGE).await;
    mount_page(&server, "/wiki/Tiger", TIGER_PAGE).await;

    let mut settings = Settings::with_base_url(server.uri());
    settings.grouping.image_concurrency = 4;
    let service = grouping_service_with(settings);

    let first = service.group_by_column("List_of_animals", "Habitat").await;
    let second = service.group_by_column("List_of_animals", "Habitat").await;

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[tokio::test]
async fn test_empty_href_skips_detail_fetch() {
    let server = MockServer::start().await;
    let page = r#"
        <table class="wikitable">
            <tr><th>Name</th><th>Habitat</th></tr>
            <tr><td><a href="" title="Lion">Lion</a></td><td>Savanna</td></tr>
        </table>
    "#;
    mount_page_once(&server, "/wiki/Cats", page).await;
    mount_page(&server, "/", LION_PAGE).await;

    let mapping = grouping_service(&server)
        .group_by_column("Cats", "Habitat")
        .await;

    assert_eq!(
        mapping.get("Savanna").unwrap(),
        &[GroupedEntity::new("Lion", "")]
    );
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/wiki/Cats");
}

#[tokio::test]
async fn test_detail_link_to_other_host_is_not_fetched() {
    let server = MockServer::start().await;
    let other = MockServer::start().await;
    let page = format!(
        r#"
        <table class="wikitable">
            <tr><th>Name</th><th>Habitat</th></tr>
            <tr><td><a href="{}/wiki/Lion" title="Lion">Lion</a></td><td>Savanna</td></tr>
        </table>
        "#,
        other.uri()
    );
    mount_page(&server, "/wiki/Cats", &page).await;
    mount_page(&other, "/wiki/Lion", LION_PAGE).await;

    let mapping = grouping_service(&server)
        .group_by_column("Cats", "Habitat")
        .await;

    assert_eq!(
        mapping.get("Savanna").unwrap(),
        &[GroupedEntity::new("Lion", "")]
    );
    assert!(other.received_requests().await.unwrap().is_empty());
}
