// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use artlens::domain::models::selection::{Century, Selection, SelectionUpdate, WorkType};
use artlens::domain::models::statistics::CenturyData;
use artlens::domain::source::CollectionQuery;

#[test]
fn test_century_labels() {
    let labels: Vec<String> = [1, 2, 3, 11, 17, 21]
        .into_iter()
        .map(|n| Century::new(n).unwrap().label())
        .collect();

    assert_eq!(
        labels,
        vec![
            "1st Century",
            "2nd Century",
            "3rd Century",
            "11th Century",
            "17th Century",
            "21st Century"
        ]
    );
}

#[test]
fn test_selection_update_from_json() {
    let update: SelectionUpdate = serde_json::from_str(r#"{ "type": "sculpture" }"#).unwrap();
    let selection = Selection::default().merge(update);

    assert_eq!(selection.work_type, WorkType::Sculpture);
    assert_eq!(selection.period, Century::SEVENTEENTH);
}

#[test]
fn test_century_data_starts_with_every_period() {
    let data = CenturyData::with_periods(&[Century::SEVENTEENTH, Century::NINETEENTH]);

    assert_eq!(data.len(), 2);
    assert!(data.get("17th Century").unwrap().is_empty());
    assert!(data.get("18th Century").is_none());
    assert_eq!(
        serde_json::to_value(&data).unwrap(),
        serde_json::json!({ "17th Century": [], "19th Century": [] })
    );
}

#[test]
fn test_count_query_has_no_page_size() {
    let params = CollectionQuery::new()
        .involved_maker("Frans Hals")
        .work_type(WorkType::Painting)
        .dating_period(Century::SEVENTEENTH)
        .to_params();

    assert!(params.iter().all(|(key, _)| *key != "ps"));
    assert!(params.contains(&("involvedMaker", "Frans Hals".to_string())));
}
