use range_bucket_sort::{bucket_sort, Phase, SortConfig, SortError, SortSession};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_values(n: usize, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen()).collect()
}

#[test]
fn single_and_four_threads_agree() {
    let values = random_values(100, 42);
    let mut expected = values.clone();
    expected.sort_unstable();

    let mut serial = values.clone();
    bucket_sort(
        &mut serial,
        &SortConfig::default().with_buckets(4).multithreaded(false),
    )
    .unwrap();

    let mut parallel = values;
    bucket_sort(
        &mut parallel,
        &SortConfig::default().with_buckets(4).threads(4),
    )
    .unwrap();

    assert_eq!(serial, expected);
    assert_eq!(parallel, expected);
}

#[test]
fn oversubscribed_thread_counts_agree() {
    const BUCKETS: usize = 8;
    let values = random_values(5_000, 7);
    let mut expected = values.clone();
    expected.sort_unstable();

    // T sweeps from 1 to well past the bucket count; surplus workers must
    // find the queue exhausted and exit without affecting the result.
    for t in 1..=BUCKETS + 4 {
        let mut sorted = values.clone();
        bucket_sort(
            &mut sorted,
            &SortConfig::default().with_buckets(BUCKETS).threads(t),
        )
        .unwrap();
        assert_eq!(sorted, expected, "t={t}");
    }
}

#[test]
fn empty_array_completes() {
    for b in [1usize, 2, 16] {
        let mut values: Vec<u32> = vec![];
        bucket_sort(&mut values, &SortConfig::default().with_buckets(b)).unwrap();
        assert!(values.is_empty());
    }
}

#[test]
fn single_bucket_takes_all_values() {
    let cfg = SortConfig::default().with_buckets(1);
    let mut session =
        SortSession::new(vec![0, u32::MAX, 1, u32::MAX - 1, 0x8000_0000], &cfg).unwrap();
    session.partition().unwrap();
    assert_eq!(session.bucket(0).len(), 5);

    session.sort_buckets().unwrap();
    session.recombine().unwrap();
    assert_eq!(
        session.values(),
        [0, 1, 0x8000_0000, u32::MAX - 1, u32::MAX]
    );
}

#[test]
fn adjacent_buckets_hold_disjoint_ranges() {
    let cfg = SortConfig::default().with_buckets(8);
    let mut session = SortSession::new(random_values(2_000, 99), &cfg).unwrap();
    session.partition().unwrap();
    session.sort_buckets().unwrap();

    for b in 0..session.bucket_count() - 1 {
        let (lo, hi) = (session.bucket(b), session.bucket(b + 1));
        if let (Some(max_lo), Some(min_hi)) = (lo.last(), hi.first()) {
            assert!(max_lo <= min_hi, "bucket {b} overlaps bucket {}", b + 1);
        }
    }
}

#[test]
fn two_bucket_scenario_splits_on_high_bit() {
    // Digits 5,3,8,1,9,2 scaled into the u32 range; with B=2 the 8 and 9
    // land in the upper half, everything else in the lower.
    let digits = [5u32, 3, 8, 1, 9, 2];
    let values: Vec<u32> = digits.iter().map(|d| d << 28).collect();

    let cfg = SortConfig::default().with_buckets(2);
    let mut session = SortSession::new(values, &cfg).unwrap();
    session.partition().unwrap();
    assert_eq!(session.bucket(0).len(), 4);
    assert_eq!(session.bucket(1).len(), 2);

    session.sort_buckets().unwrap();
    assert_eq!(session.bucket(0), [1 << 28, 2 << 28, 3 << 28, 5 << 28]);
    assert_eq!(session.bucket(1), [8u32 << 28, 9 << 28]);

    session.recombine().unwrap();
    let expected: Vec<u32> = [1u32, 2, 3, 5, 8, 9].iter().map(|d| d << 28).collect();
    assert_eq!(session.values(), expected);
    assert_eq!(session.phase(), Phase::Recombined);
}

#[test]
fn zero_buckets_rejected_before_mutation() {
    let values = vec![3u32, 1, 2];
    let mut copy = values.clone();
    let err = bucket_sort(&mut copy, &SortConfig::default().with_buckets(0));
    assert!(matches!(err, Err(SortError::ZeroBuckets)));
    // Caller data untouched.
    assert_eq!(copy, values);

    let err = bucket_sort(&mut copy, &SortConfig::default().threads(0));
    assert!(matches!(err, Err(SortError::ZeroThreads)));
    assert_eq!(copy, values);
}

#[test]
fn phases_must_advance_in_order() {
    let cfg = SortConfig::default().with_buckets(2);
    let mut session = SortSession::new(vec![1u32, 2], &cfg).unwrap();

    assert!(matches!(
        session.sort_buckets(),
        Err(SortError::PhaseOrder { .. })
    ));
    assert!(matches!(
        session.recombine(),
        Err(SortError::PhaseOrder { .. })
    ));

    session.partition().unwrap();
    assert!(matches!(
        session.partition(),
        Err(SortError::PhaseOrder { .. })
    ));
    session.sort_buckets().unwrap();
    session.recombine().unwrap();
    assert!(matches!(
        session.recombine(),
        Err(SortError::PhaseOrder { .. })
    ));
}

#[test]
fn large_random_pass_is_sorted() {
    let mut values = random_values(200_000, 1234);
    let mut expected = values.clone();
    expected.sort_unstable();

    bucket_sort(&mut values, &SortConfig::default().with_buckets(64)).unwrap();
    assert_eq!(values, expected);
}
