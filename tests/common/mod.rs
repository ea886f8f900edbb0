#![allow(dead_code)]

use rand::Rng;
use shardscroll::{PerShardEntry, SearchContextId, SearchShardTarget, ShardId, Version, WriteOnceSlots};

/// The three-shard result set used across the codec tests.
pub fn reference_results() -> WriteOnceSlots<PerShardEntry> {
    let slots = WriteOnceSlots::new(3);
    slots
        .set(
            0,
            PerShardEntry::new(
                SearchShardTarget::new(
                    "node_1",
                    ShardId::new("idx", "uuid1", 2),
                    Some("cluster_x".to_string()),
                ),
                SearchContextId::new("a", 1),
            ),
        )
        .unwrap();
    slots
        .set(
            1,
            PerShardEntry::new(
                SearchShardTarget::new(
                    "node_2",
                    ShardId::new("idy", "uuid2", 42),
                    Some("cluster_y".to_string()),
                ),
                SearchContextId::new("b", 12),
            ),
        )
        .unwrap();
    slots
        .set(
            2,
            PerShardEntry::new(
                SearchShardTarget::new("node_3", ShardId::new("idy", "uuid2", 43), None),
                SearchContextId::new("c", 42),
            ),
        )
        .unwrap();
    slots
}

pub fn random_version() -> Version {
    let known = Version::KNOWN;
    known[rand::rng().random_range(0..known.len())]
}

/// `count` entries on distinct shards with random index uuids.
pub fn random_results(count: usize) -> Vec<PerShardEntry> {
    let mut rng = rand::rng();
    (0..count)
        .map(|i| {
            let alias = if rng.random_bool(0.5) {
                Some(format!("cluster_{}", rng.random_range(0..4)))
            } else {
                None
            };
            PerShardEntry::new(
                SearchShardTarget::new(
                    format!("node_{}", rng.random_range(0..8)),
                    ShardId::new(
                        format!("index_{}", i % 3),
                        uuid::Uuid::new_v4().to_string(),
                        i as i32,
                    ),
                    alias,
                ),
                SearchContextId::new(uuid::Uuid::new_v4().to_string(), rng.random::<i64>()),
            )
        })
        .collect()
}
