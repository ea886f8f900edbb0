mod common;

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rayon::prelude::*;
use shardscroll::{
    PerShardEntry, Result, ScrollCodec, ScrollError, Version, WriteOnceSlots, parse_scroll_id,
};

use common::random_results;

#[test]
fn test_parallel_fill_then_encode() -> Result<()> {
    let results = random_results(256);
    let slots = WriteOnceSlots::new(results.len());

    results
        .par_iter()
        .enumerate()
        .try_for_each(|(i, entry)| slots.set(i, entry.clone()))?;

    assert!(slots.is_complete());
    let parsed = parse_scroll_id(&ScrollCodec::default().encode_slots(&slots, Version::CURRENT)?)?;
    for (decoded, original) in parsed.context().iter().zip(&results) {
        assert_eq!(decoded.shard_id(), original.target.shard_id());
        assert_eq!(decoded.search_context_id(), &original.context_id);
    }
    Ok(())
}

#[test]
fn test_concurrent_second_write_is_rejected() {
    let slots: WriteOnceSlots<usize> = WriteOnceSlots::new(1);

    let outcomes: Vec<_> = (0..16).into_par_iter().map(|i| slots.set(0, i)).collect();
    let accepted = outcomes.iter().filter(|r| r.is_ok()).count();
    let rejected = outcomes
        .iter()
        .filter(|r| matches!(r, Err(ScrollError::SlotAlreadySet { index: 0 })))
        .count();

    assert_eq!(accepted, 1);
    assert_eq!(rejected, 15);
    assert_eq!(slots.settled(), 1);
}

#[test]
fn test_encoder_waits_for_failed_shards() -> Result<()> {
    let results = random_results(4);
    let slots: Arc<WriteOnceSlots<PerShardEntry>> = Arc::new(WriteOnceSlots::new(4));

    let writers: Vec<_> = results
        .iter()
        .cloned()
        .enumerate()
        .map(|(i, entry)| {
            let slots = Arc::clone(&slots);
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(5 * i as u64));
                if i == 1 {
                    slots.set_empty(i)
                } else {
                    slots.set(i, entry)
                }
            })
        })
        .collect();

    assert!(slots.wait_complete_for(Duration::from_secs(10)));
    for writer in writers {
        writer.join().expect("writer thread panicked")?;
    }

    let parsed = parse_scroll_id(&ScrollCodec::default().encode_slots(&slots, Version::CURRENT)?)?;
    let shards: Vec<_> = parsed.context().iter().map(|c| c.shard_id().clone()).collect();
    let expected: Vec<_> = [0, 2, 3]
        .iter()
        .map(|&i| results[i].target.shard_id().clone())
        .collect();
    assert_eq!(shards, expected);
    Ok(())
}
