// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use artlens::application::GalleryStore;
use artlens::domain::models::selection::{Century, Selection, SelectionUpdate, WorkType};
use artlens::domain::services::artist_discovery::ArtistDiscovery;
use artlens::domain::services::century_aggregator::CenturyAggregator;
use artlens::domain::services::ranking;
use artlens::domain::source::ArtworkSource;

use super::helpers::{fast_aggregation, listing, maker_count, MockMuseum, MuseumData};

fn seventeenth_century_museum() -> MuseumData {
    MuseumData {
        listings: [
            listing(
                "17",
                &[
                    "Rembrandt van Rijn",
                    "Frans Hals",
                    "Rembrandt van Rijn",
                    "Jan Steen",
                    "Johannes Vermeer",
                ],
            ),
            listing("18", &["Cornelis Troost", "Jacob de Wit"]),
        ]
        .into_iter()
        .collect(),
        maker_counts: [
            maker_count("Rembrandt van Rijn", "17", 60),
            maker_count("Frans Hals", "17", 20),
            maker_count("Jan Steen", "17", 15),
            maker_count("Johannes Vermeer", "17", 5),
            maker_count("Cornelis Troost", "18", 3),
            maker_count("Jacob de Wit", "18", 1),
        ]
        .into_iter()
        .collect(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_analyze_flow_counts_and_ranks_selection() {
    let museum = MockMuseum::start(seventeenth_century_museum()).await;
    let source: Arc<dyn ArtworkSource> = Arc::new(museum.client());
    let mut store = GalleryStore::new(source, &fast_aggregation(), Selection::default());

    let counts = store.fetch_data().await.clone();

    assert_eq!(
        counts.makers().collect::<Vec<_>>(),
        vec!["Rembrandt van Rijn", "Frans Hals", "Jan Steen", "Johannes Vermeer"]
    );
    assert_eq!(counts.total(), 100);

    let top = ranking::rank(&counts, 3);
    let names: Vec<_> = top.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Rembrandt van Rijn", "Frans Hals", "Jan Steen"]);
    assert_eq!(top[0].percentage, 60.0);
    assert_eq!(top[2].percentage, 15.0);

    // One discovery request plus one count request per unique maker
    assert_eq!(museum.requests().len(), 5);
    for params in museum.requests_with("involvedMaker") {
        assert_eq!(params.get("type").map(String::as_str), Some("painting"));
        assert_eq!(params.get("f.dating.period").map(String::as_str), Some("17"));
        assert!(!params.contains_key("ps"));
    }
}

#[tokio::test]
async fn test_failing_maker_is_omitted_not_zeroed() {
    let mut data = seventeenth_century_museum();
    data.failing_makers.push("Frans Hals".to_string());
    let museum = MockMuseum::start(data).await;
    let mut store = GalleryStore::new(
        Arc::new(museum.client()),
        &fast_aggregation(),
        Selection::default(),
    );

    let counts = store.fetch_data().await.clone();

    assert!(!counts.contains("Frans Hals"));
    assert_eq!(counts.len(), 3);
    assert_eq!(counts.get("Jan Steen"), Some(15));
}

#[tokio::test]
async fn test_selection_change_targets_new_period() {
    let museum = MockMuseum::start(seventeenth_century_museum()).await;
    let mut store = GalleryStore::new(
        Arc::new(museum.client()),
        &fast_aggregation(),
        Selection::default(),
    );

    store.update_selection(SelectionUpdate {
        work_type: None,
        period: Some(Century::EIGHTEENTH),
    });
    let counts = store.fetch_data().await.clone();

    assert_eq!(counts.get("Cornelis Troost"), Some(3));
    assert_eq!(counts.get("Jacob de Wit"), Some(1));
    assert_eq!(store.selection().work_type, WorkType::Painting);
}

#[tokio::test]
async fn test_century_aggregation_end_to_end() {
    let museum = MockMuseum::start(seventeenth_century_museum()).await;
    let source = Arc::new(museum.client());
    let aggregator = CenturyAggregator::new(source.clone(), ArtistDiscovery::new(source));

    let data = aggregator.aggregate_by_century(WorkType::Painting).await;

    assert_eq!(
        data.labels().collect::<Vec<_>>(),
        vec!["17th Century", "18th Century", "19th Century"]
    );

    let seventeenth = data.get("17th Century").unwrap();
    assert_eq!(seventeenth.len(), 3);
    assert_eq!(seventeenth[0].name, "Rembrandt van Rijn");
    assert_eq!(seventeenth[0].percentage, 60.0);

    let eighteenth = data.get("18th Century").unwrap();
    assert_eq!(eighteenth[0].name, "Cornelis Troost");
    assert_eq!(eighteenth[0].percentage, 75.0);
    assert_eq!(eighteenth[1].percentage, 25.0);

    // No makers listed for the 19th century
    assert!(data.get("19th Century").unwrap().is_empty());

    for params in museum.requests_with("involvedMaker") {
        assert_eq!(params.get("ps").map(String::as_str), Some("1"));
    }
}

#[tokio::test]
async fn test_invalid_key_degrades_to_empty_results() {
    let museum = MockMuseum::start(seventeenth_century_museum()).await;
    let client = artlens::infrastructure::rijksmuseum::RijksmuseumClient::with_endpoint(
        &museum.base_url,
        "wrong-key",
        std::time::Duration::from_secs(5),
        "artlens-test",
    )
    .unwrap();
    let mut store = GalleryStore::new(Arc::new(client), &fast_aggregation(), Selection::default());

    assert!(store.fetch_data().await.is_empty());
    assert!(store.state().last_error.is_some());

    let data = store.fetch_century_data(WorkType::Painting).await;
    assert_eq!(data.len(), 3);
    assert!(data.iter().all(|(_, entries)| entries.is_empty()));
}
