//! Tests for the health tracker
//!
//! Baseline seeding, healing rebases, pruning and duplicate handling.

use super::tracker::{HealthTracker, ObservedEntity};

fn snap(entries: &[(u64, i64)]) -> Vec<ObservedEntity> {
    entries
        .iter()
        .map(|&(id, health)| ObservedEntity::new(id, health))
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Baselines
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_first_observation_seeds_baseline_without_damage() {
    let mut tracker = HealthTracker::new();
    assert_eq!(tracker.observe(&snap(&[(1, 1000)])), 0);
    assert_eq!(tracker.get(1).map(|t| t.last_health), Some(1000));
}

#[test]
fn test_health_decrease_is_damage() {
    let mut tracker = HealthTracker::new();
    tracker.observe(&snap(&[(1, 1000)]));
    assert_eq!(tracker.observe(&snap(&[(1, 700)])), 300);
    assert_eq!(tracker.get(1).map(|t| t.last_health), Some(700));
}

#[test]
fn test_damage_sums_across_entities() {
    let mut tracker = HealthTracker::new();
    tracker.observe(&snap(&[(1, 1000), (2, 500), (3, 200)]));
    let raw = tracker.observe(&snap(&[(1, 900), (2, 450), (3, 200)]));
    assert_eq!(raw, 150);
}

#[test]
fn test_healing_rebases_without_damage() {
    let mut tracker = HealthTracker::new();
    tracker.observe(&snap(&[(1, 500)]));
    assert_eq!(tracker.observe(&snap(&[(1, 800)])), 0);
    // Damage is measured from the healed value, not the old low point
    assert_eq!(tracker.observe(&snap(&[(1, 750)])), 50);
}

#[test]
fn test_negative_health_clamped_to_zero() {
    let mut tracker = HealthTracker::new();
    tracker.observe(&snap(&[(1, 100)]));
    assert_eq!(tracker.observe(&snap(&[(1, -40)])), 100);
    assert_eq!(tracker.get(1).map(|t| t.last_health), Some(0));
}

// ─────────────────────────────────────────────────────────────────────────────
// Pruning
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_missing_entity_pruned_immediately() {
    let mut tracker = HealthTracker::new();
    tracker.observe(&snap(&[(1, 1000), (2, 1000)]));
    tracker.observe(&snap(&[(1, 1000)]));
    assert!(tracker.contains(1));
    assert!(!tracker.contains(2));
    assert_eq!(tracker.len(), 1);
}

#[test]
fn test_reappearing_entity_gets_fresh_baseline() {
    let mut tracker = HealthTracker::new();
    tracker.observe(&snap(&[(7, 1000)]));
    tracker.observe(&snap(&[]));
    // Came back much lower: no damage attributed to the gap
    assert_eq!(tracker.observe(&snap(&[(7, 200)])), 0);
    assert_eq!(tracker.observe(&snap(&[(7, 150)])), 50);
}

#[test]
fn test_invalid_entity_treated_as_absent() {
    let mut tracker = HealthTracker::new();
    tracker.observe(&snap(&[(1, 1000)]));
    let raw = tracker.observe(&[ObservedEntity::invalid(1, 10)]);
    assert_eq!(raw, 0);
    assert!(tracker.is_empty());
}

#[test]
fn test_damage_in_vanishing_tick_is_lost() {
    let mut tracker = HealthTracker::new();
    tracker.observe(&snap(&[(1, 1000)]));
    // Entity took a lethal hit and left the snapshot in the same tick:
    // nothing carries its last value, so nothing is counted.
    assert_eq!(tracker.observe(&snap(&[])), 0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Duplicates
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_duplicate_ids_last_write_wins() {
    let mut tracker = HealthTracker::new();
    tracker.observe(&snap(&[(1, 1000)]));
    let raw = tracker.observe(&snap(&[(1, 800), (1, 900)]));
    assert_eq!(raw, 100);
    assert_eq!(tracker.get(1).map(|t| t.last_health), Some(900));
    assert_eq!(tracker.len(), 1);
}

#[test]
fn test_duplicate_ids_on_first_sighting() {
    let mut tracker = HealthTracker::new();
    assert_eq!(tracker.observe(&snap(&[(1, 1000), (1, 400)])), 0);
    assert_eq!(tracker.get(1).map(|t| t.last_health), Some(400));
}

#[test]
fn test_clear_drops_all_baselines() {
    let mut tracker = HealthTracker::new();
    tracker.observe(&snap(&[(1, 1000), (2, 1000)]));
    tracker.clear();
    assert!(tracker.is_empty());
    assert_eq!(tracker.observe(&snap(&[(1, 10)])), 0);
}
