// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use artlens::domain::models::selection::Century;
use artlens::domain::services::collection_service::CollectionService;
use artlens::domain::services::material_comparison::{
    default_comparison_centuries, MaterialComparisonService, DEFAULT_MATERIALS,
};
use artlens::domain::source::SourceError;

use super::helpers::{MockMuseum, MuseumData};

#[tokio::test]
async fn test_fetch_artwork_by_object_number() {
    let museum = MockMuseum::start(MuseumData::default()).await;
    let service = CollectionService::new(Arc::new(museum.client()));

    let artwork = service.fetch_artwork("SK-C-5").await.unwrap();

    assert_eq!(artwork.title, "The Night Watch");
    assert_eq!(artwork.maker_name(), Some("Rembrandt van Rijn"));
    assert_eq!(
        artwork.descriptive_text(),
        Some("Rembrandt's largest and most famous painting.")
    );
    assert_eq!(artwork.dating.and_then(|d| d.period), Some(17));
}

#[tokio::test]
async fn test_fetch_unknown_artwork_propagates_error() {
    let museum = MockMuseum::start(MuseumData::default()).await;
    let service = CollectionService::new(Arc::new(museum.client()));

    let result = service.fetch_artwork("SK-NOPE").await;
    assert!(matches!(result, Err(SourceError::UpstreamError(_))));
}

#[tokio::test]
async fn test_maker_distribution_tallies_top_pieces() {
    let data = MuseumData {
        top_pieces: vec![
            "Rembrandt van Rijn".to_string(),
            "Johannes Vermeer".to_string(),
            "Rembrandt van Rijn".to_string(),
        ],
        ..Default::default()
    };
    let museum = MockMuseum::start(data).await;
    let service = CollectionService::new(Arc::new(museum.client()));

    let distribution = service.maker_distribution().await.unwrap();

    assert_eq!(distribution.get("Rembrandt van Rijn"), Some(2));
    assert_eq!(distribution.get("Johannes Vermeer"), Some(1));
}

#[tokio::test]
async fn test_fetch_collections_returns_carousel_records() {
    let data = MuseumData {
        top_pieces: vec!["Johannes Vermeer".to_string(), "Jan Steen".to_string()],
        ..Default::default()
    };
    let museum = MockMuseum::start(data).await;
    let service = CollectionService::new(Arc::new(museum.client()));

    let records = service.fetch_collections().await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].object_number, "SK-T-0");
    assert_eq!(records[0].title, "Work by Johannes Vermeer");
    assert_eq!(
        records[1].image.url(),
        Some("https://images.example/SK-T-1.jpg")
    );

    let request = museum.requests_with("toppieces").pop().unwrap();
    assert_eq!(request.get("toppieces").map(String::as_str), Some("true"));
    assert_eq!(request.get("ps").map(String::as_str), Some("100"));
}

#[tokio::test]
async fn test_fetch_collections_with_bad_key_is_error() {
    let museum = MockMuseum::start(MuseumData::default()).await;
    let client = artlens::infrastructure::rijksmuseum::RijksmuseumClient::with_endpoint(
        &museum.base_url,
        "wrong-key",
        std::time::Duration::from_secs(5),
        "artlens-test",
    )
    .unwrap();
    let service = CollectionService::new(Arc::new(client));

    let result = service.fetch_collections().await;
    assert!(matches!(result, Err(SourceError::UpstreamError(_))));
}

#[tokio::test]
async fn test_artworks_by_maker_uses_text_query() {
    let museum = MockMuseum::start(MuseumData::default()).await;
    let service = CollectionService::new(Arc::new(museum.client()));

    let works = service.fetch_artworks_by_maker("Vermeer").await.unwrap();

    assert_eq!(works.len(), 2);
    let request = museum.requests_with("q").pop().unwrap();
    assert_eq!(request.get("q").map(String::as_str), Some("Vermeer"));
    assert_eq!(request.get("ps").map(String::as_str), Some("100"));
}

#[tokio::test]
async fn test_material_comparison_reads_counts_per_century() {
    let data = MuseumData {
        material_counts: [
            (("chalk".to_string(), "18".to_string()), 120),
            (("ink".to_string(), "21".to_string()), 7),
        ]
        .into_iter()
        .collect(),
        ..Default::default()
    };
    let museum = MockMuseum::start(data).await;
    let service = MaterialComparisonService::new(Arc::new(museum.client()));

    let rows = service
        .compare(&DEFAULT_MATERIALS, &default_comparison_centuries())
        .await;

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].material, "chalk");
    assert_eq!(rows[0].counts.get("18th Century"), Some(&120));
    assert_eq!(rows[0].counts.get("19th Century"), Some(&0));
    assert_eq!(rows[1].counts.get("21st Century"), Some(&7));
    assert_eq!(museum.requests_with("material").len(), 12);
}

#[tokio::test]
async fn test_gallery_skips_makers_without_pieces() {
    let data = MuseumData {
        maker_counts: [(("Jan Steen".to_string(), "17".to_string()), 4)]
            .into_iter()
            .collect(),
        ..Default::default()
    };
    let museum = MockMuseum::start(data).await;
    let service = CollectionService::new(Arc::new(museum.client()));

    let gallery = service
        .fetch_gallery(
            &["Jan Steen".to_string(), "Nobody".to_string()],
            Century::SEVENTEENTH,
        )
        .await;

    assert_eq!(gallery.len(), 1);
    assert_eq!(gallery[0].maker, "Jan Steen");
    assert!(gallery[0].artwork.image.is_available());
}
