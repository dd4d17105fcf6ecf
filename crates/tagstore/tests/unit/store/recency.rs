//! # Recency Order Tests
//!
//! Verifies recency bookkeeping as observed through the public store API:
//! fills and hits promote, invalidation demotes, and misses leave the order
//! alone.

use crate::common::{insert_line, line_addr, small_config, small_store};
use nvtags_core::BlockId;
use nvtags_core::common::SetIndex;

#[test]
fn fresh_store_orders_ways_zero_through_last() {
    let store = small_store(1, 4, 8);
    let set = store.set(SetIndex(0));
    assert_eq!(set.recency_order(), vec![0, 1, 2, 3]);
    assert_eq!(set.head_way(), 0);
    assert_eq!(set.tail_way(), 3);
}

#[test]
fn sequential_inserts_fill_ways_in_order_and_promote() {
    let config = small_config(1, 4, 8);
    let mut store = small_store(1, 4, 8);

    let ways: Vec<usize> = (0..4)
        .map(|tag| insert_line(&mut store, &config, 0, tag, 0))
        .collect();
    // Free ways are claimed in way order, each fill promoting its way.
    assert_eq!(ways, vec![0, 1, 2, 3]);
    assert_eq!(store.set(SetIndex(0)).recency_order(), vec![3, 2, 1, 0]);
    assert_eq!(store.set(SetIndex(0)).tail_way(), 0);
}

#[test]
fn hit_promotes_the_block_to_the_head() {
    let config = small_config(1, 4, 8);
    let mut store = small_store(1, 4, 8);
    for tag in 0..4 {
        let _ = insert_line(&mut store, &config, 0, tag, 0);
    }

    let hit = store.access(line_addr(&config, 0, 1), false).unwrap();
    assert_eq!(hit.way, 1);
    assert_eq!(store.set(SetIndex(0)).recency_order(), vec![1, 3, 2, 0]);
}

#[test]
fn misses_leave_the_order_alone() {
    let config = small_config(1, 4, 8);
    let mut store = small_store(1, 4, 8);
    for tag in 0..4 {
        let _ = insert_line(&mut store, &config, 0, tag, 0);
    }
    let before = store.set(SetIndex(0)).recency_order();

    // Unknown tag, and a known tag in the wrong security domain.
    assert!(store.access(line_addr(&config, 0, 9), false).is_none());
    assert!(store.access(line_addr(&config, 0, 1), true).is_none());
    assert_eq!(store.set(SetIndex(0)).recency_order(), before);
}

#[test]
fn invalidation_demotes_the_block_and_makes_it_the_next_victim() {
    let config = small_config(1, 2, 8);
    let mut store = small_store(1, 2, 8);
    let _ = insert_line(&mut store, &config, 0, 0, 0);
    let way1 = insert_line(&mut store, &config, 0, 1, 0);
    assert_eq!(store.set(SetIndex(0)).recency_order(), vec![1, 0]);

    let id = BlockId {
        set: SetIndex(0),
        way: way1,
    };
    store.invalidate(id);
    assert!(!store.block(id).valid);
    assert_eq!(store.set(SetIndex(0)).tail_way(), way1);

    // The invalidated way is now the only block in the tail's validity
    // class, so it is reclaimed first.
    let data = [0u8; 8];
    let request =
        nvtags_core::WriteRequest::new(line_addr(&config, 0, 2), &data, false).unwrap();
    let victim = store.find_victim(&request, false);
    assert_eq!(victim.way, way1);
}

#[test]
fn top_level_selection_takes_the_lru_way_without_touching_wear_state() {
    let config = small_config(1, 4, 8);
    let mut store = small_store(1, 4, 8);
    for tag in 0..4 {
        let _ = insert_line(&mut store, &config, 0, tag, 0);
    }
    let _ = store.access(line_addr(&config, 0, 1), false).unwrap();
    // Order is now [1, 3, 2, 0]: the line with tag 0 is least recent.
    let lru_way = store.set(SetIndex(0)).tail_way();
    assert_eq!(lru_way, 0);

    let wear_before = store.block(BlockId { set: SetIndex(0), way: lru_way }).wear_counter;
    let histogram_before = store.histogram().total();

    let data = [0u8; 8];
    let request =
        nvtags_core::WriteRequest::new(line_addr(&config, 0, 7), &data, false).unwrap();
    let victim = store.find_victim(&request, true);

    assert_eq!(victim.way, lru_way);
    assert_eq!(store.block(victim).wear_counter, wear_before);
    assert_eq!(store.histogram().total(), histogram_before);
    assert_eq!(store.stats().victims_recency, 1);
}

#[test]
fn the_most_recently_accessed_block_is_always_the_head() {
    let config = small_config(1, 4, 8);
    let mut store = small_store(1, 4, 8);
    for tag in 0..4 {
        let _ = insert_line(&mut store, &config, 0, tag, 0);
    }

    for tag in [2, 0, 3, 1, 1, 2] {
        let hit = store.access(line_addr(&config, 0, tag), false).unwrap();
        assert_eq!(store.set(SetIndex(0)).head_way(), hit.way);
    }
}
