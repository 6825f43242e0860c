// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use mockall::mock;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::time::Instant;

use crate::domain::models::artwork::{ArtworkRecord, CollectionPage, ImageRef};
use crate::domain::source::{ArtworkSource, CollectionQuery, SourceError};

mock! {
    pub Source {}
    #[async_trait]
    impl ArtworkSource for Source {
        async fn search(&self, query: &CollectionQuery) -> Result<CollectionPage, SourceError>;
        async fn fetch_artwork(&self, object_number: &str) -> Result<ArtworkRecord, SourceError>;
    }
}

pub fn artwork(id: &str, maker: Option<&str>) -> ArtworkRecord {
    ArtworkRecord {
        id: id.to_string(),
        object_number: id.trim_start_matches("en-").to_string(),
        title: format!("Work {}", id),
        maker: maker.map(str::to_string),
        image: ImageRef::from_url(Some(format!("https://images.example/{}", id))),
        long_title: None,
        description: None,
        dating: None,
    }
}

pub fn page_of_makers(makers: &[&str]) -> CollectionPage {
    CollectionPage {
        art_objects: makers
            .iter()
            .enumerate()
            .map(|(i, maker)| artwork(&format!("en-SK-{}", i), Some(maker)))
            .collect(),
        count: makers.len() as u64,
    }
}

/// 按查询条件回放预设结果的数据源
///
/// 带 `involvedMaker` 的查询按作者名查表，其它查询返回 `listing`。
/// 所有调用连同（tokio 虚拟）时间一起记录下来。
pub struct ScriptedSource {
    pub listing: Result<CollectionPage, SourceError>,
    pub maker_counts: HashMap<String, Result<u64, SourceError>>,
    pub calls: Mutex<Vec<(CollectionQuery, Instant)>>,
}

impl ScriptedSource {
    pub fn new(listing: Result<CollectionPage, SourceError>) -> Self {
        Self {
            listing,
            maker_counts: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_count(mut self, maker: &str, count: u64) -> Self {
        self.maker_counts.insert(maker.to_string(), Ok(count));
        self
    }

    pub fn with_failure(mut self, maker: &str) -> Self {
        self.maker_counts.insert(
            maker.to_string(),
            Err(SourceError::UpstreamError("status 500".to_string())),
        );
        self
    }

    pub fn recorded(&self) -> Vec<(CollectionQuery, Instant)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArtworkSource for ScriptedSource {
    async fn search(&self, query: &CollectionQuery) -> Result<CollectionPage, SourceError> {
        self.calls
            .lock()
            .unwrap()
            .push((query.clone(), Instant::now()));

        match &query.involved_maker {
            Some(maker) => match self.maker_counts.get(maker) {
                Some(Ok(count)) => Ok(CollectionPage {
                    art_objects: vec![artwork("en-SK-X", Some(maker))],
                    count: *count,
                }),
                Some(Err(e)) => Err(e.clone()),
                None => Ok(CollectionPage::default()),
            },
            None => self.listing.clone(),
        }
    }

    async fn fetch_artwork(&self, object_number: &str) -> Result<ArtworkRecord, SourceError> {
        Ok(artwork(&format!("en-{}", object_number), None))
    }
}
