use crate::fake_catalog::{track, tracks};
use rand::SeedableRng;
use rand::rngs::StdRng;
use vibecurate_core::assembly::CandidatePool;

#[test]
fn test_push_rejects_duplicate_ids() {
    let mut pool = CandidatePool::new();

    assert!(pool.push(track("a")));
    assert!(!pool.push(track("a")));
    assert!(pool.push(track("b")));
    assert_eq!(pool.len(), 2);
}

#[test]
fn test_extend_counts_new_tracks_only() {
    let mut pool = CandidatePool::new();
    pool.extend(tracks("t", 3));

    let added = pool.extend(tracks("t", 5));

    assert_eq!(added, 2);
    assert_eq!(pool.len(), 5);
    assert_eq!(pool.tracks()[0].external_id, "t0");
}

#[test]
fn test_into_playlist_truncates() {
    let mut pool = CandidatePool::new();
    pool.extend(tracks("t", 30));

    let playlist = pool.into_playlist(10, &mut StdRng::seed_from_u64(1));
    assert_eq!(playlist.len(), 10);
}

#[test]
fn test_into_playlist_is_a_permutation_when_pool_is_small() {
    let mut pool = CandidatePool::new();
    pool.extend(tracks("t", 8));

    let playlist = pool.into_playlist(20, &mut StdRng::seed_from_u64(1));

    let mut ids: Vec<String> = playlist.into_iter().map(|t| t.external_id).collect();
    ids.sort();
    let mut expected: Vec<String> = (0..8).map(|i| format!("t{}", i)).collect();
    expected.sort();
    assert_eq!(ids, expected);
}

#[test]
fn test_empty_pool() {
    let pool = CandidatePool::new();
    assert!(pool.is_empty());
    assert!(pool.into_playlist(5, &mut StdRng::seed_from_u64(1)).is_empty());
}
