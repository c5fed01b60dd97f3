use range_collection::{RangeCollection, RangeError};

fn with(ranges: &[(i64, i64)]) -> RangeCollection {
    let mut collection = RangeCollection::new();
    for &(from, to) in ranges {
        collection.add(from as _, to as _).unwrap();
    }
    collection
}

fn add(ranges: &[(i64, i64)], from: i64, to: i64) -> String {
    let mut collection = with(ranges);
    collection.add(from as _, to as _).unwrap();
    collection.to_string()
}

fn remove(ranges: &[(i64, i64)], from: i64, to: i64) -> String {
    let mut collection = with(ranges);
    collection.remove(from as _, to as _).unwrap();
    collection.to_string()
}

#[test]
fn add_ranges() {
    assert_eq!(add(&[], 1, 5), "[1, 5)");
    assert_eq!(add(&[(1, 5)], 10, 20), "[1, 5) [10, 20)");
    assert_eq!(add(&[(10, 20)], 1, 5), "[1, 5) [10, 20)");
    // empty range
    assert_eq!(add(&[(1, 5)], 20, 20), "[1, 5)");
    assert_eq!(add(&[], 3, 3), "");
    // touching on the upper bound
    assert_eq!(add(&[(1, 5)], 5, 6), "[1, 6)");
    // touching on the lower bound
    assert_eq!(add(&[(1, 5)], 0, 1), "[0, 5)");
    // inside
    assert_eq!(add(&[(1, 5)], 2, 4), "[1, 5)");
    // overlapping the end
    assert_eq!(add(&[(1, 5)], 3, 8), "[1, 8)");
    // bridging two ranges
    assert_eq!(add(&[(1, 5), (10, 20)], 2, 12), "[1, 20)");
    // closing a gap exactly
    assert_eq!(add(&[(1, 5), (10, 20)], 5, 10), "[1, 20)");
    // covering everything
    assert_eq!(add(&[(1, 5), (10, 20), (30, 40)], 0, 50), "[0, 50)");
}

#[test]
fn remove_ranges() {
    assert_eq!(remove(&[(1, 5)], 1, 1), "[1, 5)");
    assert_eq!(remove(&[(1, 5)], 1, 2), "[2, 5)");
    assert_eq!(remove(&[(1, 5)], 4, 5), "[1, 4)");
    assert_eq!(remove(&[(1, 5)], 2, 3), "[1, 2) [3, 5)");
    assert_eq!(remove(&[(1, 5), (7, 10)], 4, 8), "[1, 4) [8, 10)");
    assert_eq!(remove(&[(1, 5), (7, 10)], 0, 11), "");
    assert_eq!(remove(&[(1, 5), (7, 10)], 5, 7), "[1, 5) [7, 10)");
    assert_eq!(remove(&[], 0, 11), "");
}

#[test]
fn add_is_idempotent() {
    let mut once = with(&[(1, 5), (10, 20)]);
    once.add(3, 12).unwrap();
    let mut twice = once.clone();
    twice.add(3, 12).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn add_then_remove_is_empty() {
    let mut collection = RangeCollection::new();
    collection.add(-7, 42).unwrap();
    collection.remove(-7, 42).unwrap();
    assert!(collection.is_empty());
    assert_eq!(collection.to_string(), "");
}

#[test]
fn errors_leave_collection_untouched() {
    let mut collection = with(&[(1, 5), (7, 10)]);
    let before = collection.clone();

    assert_eq!(
        collection.add(8, 2),
        Err(RangeError::InvertedBounds { from: 8, to: 2 })
    );
    assert_eq!(
        collection.remove(9, 0),
        Err(RangeError::InvertedBounds { from: 9, to: 0 })
    );
    assert!(matches!(
        collection.add_f64(f64::NAN, 2.0),
        Err(RangeError::InvalidBounds { .. })
    ));
    assert!(matches!(
        collection.remove_f64(0.0, 2.5),
        Err(RangeError::InvalidBounds { .. })
    ));
    assert!(matches!(
        "[1, five)".parse::<RangeCollection>(),
        Err(range_collection::ParseError::Range(RangeError::InvalidBounds { .. }))
    ));
    assert_eq!(collection, before);

    // an invalid removal on an empty collection is still reported
    assert!(RangeCollection::new().remove(3, 1).is_err());
}

#[test]
fn display_round_trip() {
    let collection = with(&[(1, 5), (10, 20), (-8, -3)]);
    let text = collection.to_string();
    assert_eq!(text, "[-8, -3) [1, 5) [10, 20)");
    assert_eq!(text.parse::<RangeCollection>().unwrap(), collection);
    assert_eq!(
        collection.iter().map(|r| (r.from(), r.to())).collect::<Vec<_>>(),
        vec![(-8, -3), (1, 5), (10, 20)]
    );
}
