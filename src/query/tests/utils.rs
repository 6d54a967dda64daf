use crate::airport::Airport;
use crate::flight::Flight;
use crate::time::TimeOfDay;
use proptest::prelude::Strategy;
use std::sync::Arc;

pub fn id(s: &str) -> Arc<str> {
    Arc::from(s)
}

pub fn t(hour: u8, minute: u8) -> TimeOfDay {
    TimeOfDay::new(hour, minute).unwrap()
}

pub fn airport(name: &str, city: &str) -> Airport {
    Airport {
        name: id(name),
        close_to_city: id(city),
    }
}

pub fn add_flight(
    flights: &mut Vec<Flight>,
    airline_code: &str,
    flight_num: &str,
    origin: &Airport,
    destination: &Airport,
    depart: (u8, u8),
    arrive: (u8, u8),
) {
    flights.push(Flight {
        airline_code: id(airline_code),
        flight_num: id(flight_num),
        origin: origin.clone(),
        destination: destination.clone(),
        depart_time: t(depart.0, depart.1),
        arrive_time: t(arrive.0, arrive.1),
    });
}

pub fn arb_time() -> impl Strategy<Value = TimeOfDay> {
    (0u8..24, 0u8..60).prop_map(|(h, m)| t(h, m))
}

pub fn arb_airport() -> impl Strategy<Value = Airport> {
    proptest::prop_oneof![
        proptest::strategy::Just(airport("AAA", "Alba")),
        proptest::strategy::Just(airport("BBB", "Alba")),
        proptest::strategy::Just(airport("CCC", "Corte")),
        proptest::strategy::Just(airport("DDD", "Dorno")),
    ]
}

pub fn arb_flights(max: usize) -> impl Strategy<Value = Vec<Flight>> {
    proptest::collection::vec(
        (arb_airport(), arb_airport(), arb_time(), arb_time()),
        1..max,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (origin, destination, depart_time, arrive_time))| Flight {
                // index-derived flight numbers keep the (airline, num) key unique
                airline_code: id(["AA", "BB", "CC"][i % 3]),
                flight_num: id(&format!("{}", 100 + i)),
                origin,
                destination,
                depart_time,
                arrive_time,
            })
            .collect::<Vec<Flight>>()
    })
}
