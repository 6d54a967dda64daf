use crate::error::QueryError;
use crate::flight::Flight;
use crate::time::TimeOfDay;
use std::collections::HashMap;
use std::io;
use std::sync::Arc;
use serde::Deserialize;

/// An already-materialized flight collection, as handed over by whatever
/// stores the records. Queries borrow the flights for the duration of a
/// single call and never mutate or retain them.
pub struct Dataset {
    pub flights: Vec<Flight>,
}

impl Dataset {
    pub fn load_from_file(path: &str) -> io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        #[derive(Deserialize)]
        struct RawData {
            flights: Vec<Flight>,
        }
        let raw: RawData = serde_json::from_str(&data)?;

        Ok(Dataset { flights: raw.flights })
    }
}

/// Looks up the unique flight with the given key. Absence is an ordinary
/// outcome, not an error.
pub fn find_by_key<'a>(
    flights: &'a [Flight],
    airline_code: &str,
    flight_num: &str,
) -> Option<&'a Flight> {
    flights
        .iter()
        .find(|f| f.key() == (airline_code, flight_num))
}

fn sorted_by_key(mut matches: Vec<&Flight>) -> Vec<&Flight> {
    matches.sort_by(|a, b| a.cmp_by_key(b));
    matches
}

/// All direct flights from airport `origin` to airport `dest`.
pub fn routes_between_airports<'a>(
    flights: &'a [Flight],
    origin: &str,
    dest: &str,
) -> Vec<&'a Flight> {
    sorted_by_key(
        flights
            .iter()
            .filter(|f| *f.origin.name == *origin && *f.destination.name == *dest)
            .collect(),
    )
}

/// All direct flights between any airport close to `origin_city` and any
/// airport close to `dest_city`.
pub fn routes_between_cities<'a>(
    flights: &'a [Flight],
    origin_city: &str,
    dest_city: &str,
) -> Vec<&'a Flight> {
    sorted_by_key(
        flights
            .iter()
            .filter(|f| {
                *f.origin.close_to_city == *origin_city
                    && *f.destination.close_to_city == *dest_city
            })
            .collect(),
    )
}

/// Direct flights from `origin` to `dest` departing on the closed arc from
/// `from` to `to`; the arc may cross midnight.
pub fn routes_in_window<'a>(
    flights: &'a [Flight],
    origin: &str,
    dest: &str,
    from: TimeOfDay,
    to: TimeOfDay,
) -> Vec<&'a Flight> {
    sorted_by_key(
        flights
            .iter()
            .filter(|f| *f.origin.name == *origin && *f.destination.name == *dest)
            .filter(|f| f.depart_time.is_in_interval(from, to))
            .collect(),
    )
}

/// Two-leg itineraries from `origin` to `dest`: an outbound flight departing
/// within the window to some connecting airport (never `dest` itself), and an
/// onward flight from there to `dest` whose departure falls `min_layover` to
/// `max_layover` minutes after the outbound arrival. The layover is the
/// forward gap on the clock ring, so connections across midnight work out.
pub fn connecting_pairs<'a>(
    flights: &'a [Flight],
    origin: &str,
    dest: &str,
    from: TimeOfDay,
    to: TimeOfDay,
    min_layover: u32,
    max_layover: u32,
) -> Result<Vec<(&'a Flight, &'a Flight)>, QueryError> {
    if min_layover > max_layover {
        return Err(QueryError::LayoverBoundsReversed {
            min: min_layover,
            max: max_layover,
        });
    }

    // index the candidate onward legs by their departure airport
    let mut onward_by_origin = HashMap::<&str, Vec<&Flight>>::new();
    flights
        .iter()
        .filter(|f| *f.destination.name == *dest)
        .for_each(|f| {
            onward_by_origin
                .entry(&f.origin.name)
                .or_default()
                .push(f)
        });

    let mut pairs = flights
        .iter()
        .filter(|f| *f.origin.name == *origin)
        .filter(|f| *f.destination.name != *dest)
        .filter(|f| f.depart_time.is_in_interval(from, to))
        .flat_map(|f| {
            onward_by_origin
                .get(&*f.destination.name)
                .into_iter()
                .flatten()
                .filter(move |f1| {
                    let layover = u32::from(f1.depart_time.minutes_since(f.arrive_time));
                    min_layover <= layover && layover <= max_layover
                })
                .map(move |f1| (f, *f1))
        })
        .collect::<Vec<_>>();

    pairs.sort_by(|(a, a1), (b, b1)| a.cmp_by_key(b).then_with(|| a1.cmp_by_key(b1)));
    Ok(pairs)
}

/// Flight counts per airline, ascending by airline code. Airlines with no
/// flights in the collection do not appear.
pub fn count_by_airline(flights: &[Flight]) -> Vec<(Arc<str>, usize)> {
    let mut counts = HashMap::<Arc<str>, usize>::new();
    flights
        .iter()
        .for_each(|f| *counts.entry(f.airline_code.clone()).or_default() += 1);

    let mut result = counts.into_iter().collect::<Vec<_>>();
    result.sort_by(|(a, _), (b, _)| a.cmp(b));
    result
}
