//! In-place recursive quicksort for one bucket.
//! Lomuto partition, first element as pivot. Average O(n log n); an
//! already-sorted bucket degrades to O(n²), which is fine for the uniform
//! random keys this crate targets.

/// Sort `bucket` in place in non-decreasing order.
pub fn sort_bucket(bucket: &mut [u32]) {
    if bucket.len() <= 1 {
        return;
    }
    let pivot = lomuto_partition(bucket);
    let (low, high) = bucket.split_at_mut(pivot);
    sort_bucket(low);
    sort_bucket(&mut high[1..]);
}

/// Partition around `arr[0]` and return the pivot's final index.
///
/// Elements smaller than the pivot are swapped into a growing prefix; the
/// pivot is then swapped onto the boundary.
fn lomuto_partition(arr: &mut [u32]) -> usize {
    let pivot = arr[0];
    let mut small = 0;
    for index in 1..arr.len() {
        if arr[index] < pivot {
            small += 1;
            arr.swap(small, index);
        }
    }
    arr.swap(0, small);
    small
}
