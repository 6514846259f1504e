// tests/compare_reducer_tests.rs
mod common;

use common::*;
use trolley::compare::{reduce, CompareAction, DEFAULT_COMPARE_CAPACITY};

#[test]
fn test_add_appends_until_capacity() {
  setup_tracing();
  let mut state = Vec::new();
  for i in 0..DEFAULT_COMPARE_CAPACITY {
    state = reduce(
      state,
      CompareAction::AddItem(sample_product(&format!("p{}", i), 100)),
      DEFAULT_COMPARE_CAPACITY,
    );
  }

  assert_eq!(state.len(), DEFAULT_COMPARE_CAPACITY);
}

#[test]
fn test_add_beyond_capacity_leaves_state_unchanged() {
  setup_tracing();
  let mut state = Vec::new();
  for i in 0..DEFAULT_COMPARE_CAPACITY {
    state = reduce(
      state,
      CompareAction::AddItem(sample_product(&format!("p{}", i), 100)),
      DEFAULT_COMPARE_CAPACITY,
    );
  }
  let before = state.clone();
  let after = reduce(
    state,
    CompareAction::AddItem(sample_product("p-overflow", 100)),
    DEFAULT_COMPARE_CAPACITY,
  );

  // Rejected add: same entries, same order.
  assert_eq!(after, before);
}

#[test]
fn test_add_duplicate_id_leaves_state_unchanged() {
  setup_tracing();
  let state = reduce(
    Vec::new(),
    CompareAction::AddItem(sample_product("p1", 100)),
    DEFAULT_COMPARE_CAPACITY,
  );
  let before = state.clone();
  let after = reduce(
    state,
    CompareAction::AddItem(sample_product("p1", 999)),
    DEFAULT_COMPARE_CAPACITY,
  );

  assert_eq!(after, before);
}

#[test]
fn test_remove_filters_matching_entry() {
  setup_tracing();
  let state = reduce(
    Vec::new(),
    CompareAction::AddItem(sample_product("p1", 100)),
    DEFAULT_COMPARE_CAPACITY,
  );
  let state = reduce(
    state,
    CompareAction::AddItem(sample_product("p2", 200)),
    DEFAULT_COMPARE_CAPACITY,
  );
  let state = reduce(
    state,
    CompareAction::RemoveItem { id: "p1".to_string() },
    DEFAULT_COMPARE_CAPACITY,
  );

  assert_eq!(state.len(), 1);
  assert_eq!(state[0].id, "p2");
}

#[test]
fn test_remove_unknown_id_is_noop() {
  setup_tracing();
  let before = reduce(
    Vec::new(),
    CompareAction::AddItem(sample_product("p1", 100)),
    DEFAULT_COMPARE_CAPACITY,
  );
  let after = reduce(
    before.clone(),
    CompareAction::RemoveItem {
      id: "nonexistent".to_string(),
    },
    DEFAULT_COMPARE_CAPACITY,
  );

  assert_eq!(after, before);
}

#[test]
fn test_clear_all_empties_set() {
  setup_tracing();
  let state = reduce(
    Vec::new(),
    CompareAction::AddItem(sample_product("p1", 100)),
    DEFAULT_COMPARE_CAPACITY,
  );
  let state = reduce(state, CompareAction::ClearAll, DEFAULT_COMPARE_CAPACITY);

  assert!(state.is_empty());
}

#[test]
fn test_set_items_clamps_oversized_snapshot() {
  setup_tracing();
  let oversized: Vec<_> = (0..10).map(|i| sample_product(&format!("p{}", i), 100)).collect();
  let state = reduce(
    Vec::new(),
    CompareAction::SetItems(oversized),
    DEFAULT_COMPARE_CAPACITY,
  );

  // Defensive clamp against corrupted persisted state: first four win.
  assert_eq!(state.len(), DEFAULT_COMPARE_CAPACITY);
  assert_eq!(state[0].id, "p0");
  assert_eq!(state[3].id, "p3");
}

#[test]
fn test_set_items_deduplicates_by_id() {
  setup_tracing();
  let snapshot = vec![
    sample_product("p1", 100),
    sample_product("p1", 999),
    sample_product("p2", 200),
  ];
  let state = reduce(
    Vec::new(),
    CompareAction::SetItems(snapshot),
    DEFAULT_COMPARE_CAPACITY,
  );

  assert_eq!(state.len(), 2);
  assert_eq!(state[0].id, "p1");
  assert_eq!(state[0].price_cents, 100); // first occurrence wins
  assert_eq!(state[1].id, "p2");
}

#[test]
fn test_custom_capacity_is_respected() {
  setup_tracing();
  let mut state = Vec::new();
  for i in 0..5 {
    state = reduce(state, CompareAction::AddItem(sample_product(&format!("p{}", i), 100)), 2);
  }

  assert_eq!(state.len(), 2);
}
