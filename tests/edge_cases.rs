use geocell::{
    Coordinate, Direction, GeohashError, adjacent, adjacent_named, decode, decode_bbox, encode,
    encode_slice, neighbors, neighbors_fit,
};

/// Test 1: Empty geohash is rejected by every string entry point
#[test]
fn test_empty_geohash() {
    assert!(matches!(decode(""), Err(GeohashError::InvalidInput(_))));
    assert!(matches!(decode_bbox(""), Err(GeohashError::InvalidInput(_))));
    assert!(matches!(
        adjacent("", Direction::East),
        Err(GeohashError::InvalidInput(_))
    ));
    assert!(matches!(neighbors(""), Err(GeohashError::InvalidInput(_))));
}

/// Test 2: Symbols outside the alphabet are reported as such
#[test]
fn test_invalid_symbols() {
    for bad in ['a', 'i', 'l', 'o', 'A', '!'] {
        let geohash = format!("9q{}", bad);
        assert_eq!(decode(&geohash), Err(GeohashError::InvalidSymbol(bad)));
        assert_eq!(
            adjacent(&geohash, Direction::North),
            Err(GeohashError::InvalidSymbol(bad))
        );
    }
}

/// Test 3: Upper case is not part of the alphabet
#[test]
fn test_upper_case_geohash() {
    assert_eq!(decode("9Q8YY"), Err(GeohashError::InvalidSymbol('Q')));
}

/// Test 4: Unknown direction names
#[test]
fn test_unknown_direction() {
    for name in ["", "up", "northeast", "ne", "northsouth"] {
        assert!(
            matches!(
                adjacent_named("u000", name),
                Err(GeohashError::InvalidInput(_))
            ),
            "{:?}",
            name
        );
    }
    assert_eq!(adjacent_named("u000", "SOUTH").unwrap(), "spbp");
}

/// Test 5: Malformed coordinate pairs
#[test]
fn test_malformed_coordinate_pair() {
    assert!(matches!(
        encode_slice(&[], 12),
        Err(GeohashError::InvalidInput(_))
    ));
    assert!(matches!(
        encode_slice(&[1.0, 2.0, 3.0], 12),
        Err(GeohashError::InvalidInput(_))
    ));
    assert!(matches!(
        encode((f64::INFINITY, 0.0), 12),
        Err(GeohashError::InvalidInput(_))
    ));
}

/// Test 6: Extreme coordinates encode to the corner cells
#[test]
fn test_extreme_coordinates() {
    assert_eq!(encode((180.0, 90.0), 12).unwrap(), "zzzzzzzzzzzz");
    assert_eq!(encode((-180.0, -90.0), 12).unwrap(), "000000000000");
    assert_eq!(encode((0.0, 0.0), 12).unwrap(), "s00000000000");

    // out of range saturates into the edge cell
    assert_eq!(encode((540.0, 120.0), 4).unwrap(), "zzzz");
}

/// Test 7: Top-level cells map straight through the tables
#[test]
fn test_single_symbol_adjacency() {
    assert_eq!(adjacent("z", Direction::North).unwrap(), "p");
    assert_eq!(adjacent("0", Direction::South).unwrap(), "b");
    assert_eq!(adjacent("0", Direction::West).unwrap(), "p");

    let block = neighbors("u").unwrap();
    assert_eq!(block.c, "u");
    assert_eq!(block.len(), 9);
}

/// Test 8: Cell bounds of a single symbol
#[test]
fn test_single_symbol_bounds() {
    let cell = decode_bbox("s").unwrap();
    assert_eq!(cell.min_lon(), 0.0);
    assert_eq!(cell.max_lon(), 45.0);
    assert_eq!(cell.min_lat(), 0.0);
    assert_eq!(cell.max_lat(), 45.0);
    assert_eq!(decode("s").unwrap(), Coordinate::new(22.5, 22.5));
}

/// Test 9: Neighbor fit with points on the other side of the world
#[test]
fn test_neighbors_fit_far_points() {
    let sf = Coordinate::new(-122.419, 37.774);
    let tokyo = Coordinate::new(139.69, 35.68);
    assert_eq!(neighbors_fit(sf, [tokyo]).unwrap(), "");
}

/// Test 10: Neighbor fit without points falls through to the longest answer
#[test]
fn test_neighbors_fit_no_points() {
    let sf = Coordinate::new(-122.419, 37.774);
    let fitted = neighbors_fit(sf, Vec::<Coordinate>::new()).unwrap();
    assert_eq!(fitted.len(), 10);
    assert!(encode(sf, 12).unwrap().starts_with(&fitted));
}
