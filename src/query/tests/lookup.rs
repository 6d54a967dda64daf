use crate::query::query::find_by_key;
use crate::query::tests::utils::{add_flight, airport, id};

#[test]
fn test_find_by_key() {
    let jfk = airport("JFK", "New York");
    let lax = airport("LAX", "Los Angeles");
    let mut flights = Vec::new();

    add_flight(&mut flights, "AA", "100", &jfk, &lax, (8, 0), (11, 15));
    add_flight(&mut flights, "AA", "200", &lax, &jfk, (13, 0), (21, 10));
    add_flight(&mut flights, "UA", "100", &jfk, &lax, (9, 30), (12, 45));

    let found = find_by_key(&flights, "AA", "200").unwrap();
    assert_eq!(found.airline_code, id("AA"));
    assert_eq!(found.flight_num, id("200"));
    assert_eq!(found.origin.name, id("LAX"));
}

#[test]
fn test_find_matches_both_key_fields() {
    let jfk = airport("JFK", "New York");
    let lax = airport("LAX", "Los Angeles");
    let mut flights = Vec::new();

    add_flight(&mut flights, "AA", "100", &jfk, &lax, (8, 0), (11, 15));
    add_flight(&mut flights, "UA", "100", &jfk, &lax, (9, 30), (12, 45));

    let found = find_by_key(&flights, "UA", "100").unwrap();
    assert_eq!(found.airline_code, id("UA"));
}

#[test]
fn test_find_absent_key_is_none() {
    let jfk = airport("JFK", "New York");
    let lax = airport("LAX", "Los Angeles");
    let mut flights = Vec::new();

    add_flight(&mut flights, "AA", "100", &jfk, &lax, (8, 0), (11, 15));

    assert!(find_by_key(&flights, "AA", "101").is_none());
    assert!(find_by_key(&flights, "ZZ", "100").is_none());
    assert!(find_by_key(&[], "AA", "100").is_none());
}
