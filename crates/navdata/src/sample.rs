//! Built-in airport list used when no airport file can be loaded.

use geodesy::GeoPoint;

use crate::types::Airport;

/// Twelve major airports, keyed by IATA code, with city names filled in.
pub fn sample_airports() -> Vec<Airport> {
    [
        ("JFK", "John F. Kennedy International Airport", "New York", "USA", 40.6413, -73.7781),
        ("LAX", "Los Angeles International Airport", "Los Angeles", "USA", 33.9416, -118.4085),
        ("LHR", "London Heathrow Airport", "London", "UK", 51.4700, -0.4543),
        ("CDG", "Charles de Gaulle Airport", "Paris", "France", 49.0097, 2.5479),
        ("SYD", "Sydney Airport", "Sydney", "Australia", -33.9399, 151.1753),
        ("DXB", "Dubai International Airport", "Dubai", "UAE", 25.2532, 55.3657),
        ("HND", "Tokyo Haneda Airport", "Tokyo", "Japan", 35.5494, 139.7798),
        ("SIN", "Singapore Changi Airport", "Singapore", "Singapore", 1.3644, 103.9915),
        ("AMS", "Amsterdam Airport Schiphol", "Amsterdam", "Netherlands", 52.3105, 4.7683),
        ("FRA", "Frankfurt Airport", "Frankfurt", "Germany", 50.0379, 8.5622),
        ("IST", "Istanbul Airport", "Istanbul", "Turkey", 41.2606, 28.7425),
        ("DEL", "Indira Gandhi International Airport", "Delhi", "India", 28.5561, 77.1000),
    ]
    .into_iter()
    .map(|(code, name, city, country, lat, lon)| {
        Airport::new(code, name, city, country, GeoPoint::new(lat, lon))
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_airports() {
        let airports = sample_airports();
        assert_eq!(airports.len(), 12);
        assert!(airports
            .iter()
            .all(|a| GeoPoint::checked(a.position.latitude_deg, a.position.longitude_deg).is_ok()));
        let lhr = airports.iter().find(|a| a.code == "LHR").unwrap();
        assert_eq!(lhr.city, "London");
    }
}
