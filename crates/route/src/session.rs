//! Route session: endpoint pair, multi-point route and their markers.

use geodesy::{distance_km, initial_bearing_deg, midpoint, DisplayDistance, GeoPoint};
use navdata::{Airport, NavPoint};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Result, RouteError};
use crate::geometry::{FeatureCollection, PathStyle};
use crate::markers::{Marker, MarkerKey, MarkerRegistry};

/// Computed facts for the selected departure/destination pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightDetails {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
    pub display: DisplayDistance,
    /// Initial true bearing at departure, in [0, 360).
    pub bearing_deg: f64,
    pub midpoint: GeoPoint,
    /// e.g. `JFK → LHR: 2991 nm (5540 km)`.
    pub summary: String,
    /// Nautical miles as copied to the clipboard.
    pub clipboard_nm: i64,
}

/// One row of the route table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteTableRow {
    /// 1-based position in the route.
    pub index: usize,
    pub id: String,
    pub name: String,
    /// Leg length from the previous point; absent on the first row.
    pub leg_nm: Option<i64>,
    /// Distance flown so far; absent on the first row.
    pub accumulated_nm: Option<i64>,
}

/// Planning state for one map session.
#[derive(Debug, Clone, Default)]
pub struct RouteSession {
    departure: Option<Airport>,
    destination: Option<Airport>,
    route: Vec<NavPoint>,
    markers: MarkerRegistry<Marker>,
}

impl RouteSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn departure(&self) -> Option<&Airport> {
        self.departure.as_ref()
    }

    pub fn destination(&self) -> Option<&Airport> {
        self.destination.as_ref()
    }

    pub fn route(&self) -> &[NavPoint] {
        &self.route
    }

    pub fn markers(&self) -> &MarkerRegistry<Marker> {
        &self.markers
    }

    /// Set the departure airport, replacing any previous one.
    ///
    /// Fails without changing anything if it is the current destination.
    pub fn select_departure(&mut self, airport: Airport) -> Result<()> {
        if let Some(dest) = &self.destination {
            if dest.code.eq_ignore_ascii_case(&airport.code) {
                return Err(RouteError::SameAirport(airport.code));
            }
        }
        self.place_marker(MarkerKey::Departure, &airport.code, airport.position);
        debug!(code = %airport.code, "departure selected");
        self.departure = Some(airport);
        Ok(())
    }

    /// Set the destination airport, replacing any previous one.
    ///
    /// Fails without changing anything if it is the current departure.
    pub fn select_destination(&mut self, airport: Airport) -> Result<()> {
        if let Some(dep) = &self.departure {
            if dep.code.eq_ignore_ascii_case(&airport.code) {
                return Err(RouteError::SameAirport(airport.code));
            }
        }
        self.place_marker(MarkerKey::Destination, &airport.code, airport.position);
        debug!(code = %airport.code, "destination selected");
        self.destination = Some(airport);
        Ok(())
    }

    /// Drop both endpoints and their markers. The route is left alone.
    pub fn clear_pair(&mut self) {
        let departure = self.departure.take();
        let destination = self.destination.take();
        self.markers.remove(&MarkerKey::Departure);
        self.markers.remove(&MarkerKey::Destination);
        info!(
            departure = departure.as_ref().map(|a| a.code.as_str()),
            destination = destination.as_ref().map(|a| a.code.as_str()),
            "pair cleared"
        );
    }

    /// Distance, bearing and midpoint for the pair, once both are set.
    pub fn flight_details(&self) -> Option<FlightDetails> {
        let (from, to) = self.departure.as_ref().zip(self.destination.as_ref())?;
        let km = distance_km(&from.position, &to.position);
        let display = DisplayDistance::from_km(km);
        Some(FlightDetails {
            from: from.code.clone(),
            to: to.code.clone(),
            distance_km: km,
            display,
            bearing_deg: initial_bearing_deg(&from.position, &to.position),
            midpoint: midpoint(&from.position, &to.position),
            summary: format!("{} → {}: {}", from.code, to.code, display),
            clipboard_nm: display.nm,
        })
    }

    /// Geometry for the departure/destination leg.
    pub fn pair_geometry(&self, style: PathStyle, segments: usize) -> Result<FeatureCollection> {
        let (from, to) = self
            .departure
            .as_ref()
            .zip(self.destination.as_ref())
            .ok_or(RouteError::IncompleteSelection)?;
        Ok(FeatureCollection::from_stops(
            &[
                (from.code.as_str(), from.position),
                (to.code.as_str(), to.position),
            ],
            style,
            segments,
        ))
    }

    /// Append a point to the route and mark it.
    pub fn add_point(&mut self, point: NavPoint) {
        let key = MarkerKey::Route(point.kind(), point.id().to_string());
        self.place_marker(key, point.id(), point.position());
        debug!(kind = %point.kind(), id = point.id(), "route point added");
        self.route.push(point);
    }

    /// Empty the route and remove its markers. The endpoint pair stays.
    pub fn clear_route(&mut self) {
        let removed = self.markers.remove_route_markers();
        info!(points = self.route.len(), markers = removed.len(), "route cleared");
        self.route.clear();
    }

    /// Sum of great-circle leg lengths along the route.
    pub fn total_distance_km(&self) -> f64 {
        self.route
            .windows(2)
            .map(|w| distance_km(&w[0].position(), &w[1].position()))
            .sum()
    }

    /// Route as table rows.
    ///
    /// Leg and accumulated values are rounded separately from kilometre
    /// totals, so the rounded legs need not add up to the rounded total.
    pub fn route_table(&self) -> Vec<RouteTableRow> {
        let mut accumulated_km = 0.0;
        let mut previous: Option<GeoPoint> = None;

        self.route
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let position = point.position();
                let (leg_nm, accumulated_nm) = match previous {
                    Some(prev) => {
                        let leg_km = distance_km(&prev, &position);
                        accumulated_km += leg_km;
                        (
                            Some(round_nm(leg_km)),
                            Some(round_nm(accumulated_km)),
                        )
                    }
                    None => (None, None),
                };
                previous = Some(position);
                RouteTableRow {
                    index: i + 1,
                    id: point.id().to_string(),
                    name: point.route_label(),
                    leg_nm,
                    accumulated_nm,
                }
            })
            .collect()
    }

    /// Geometry for every leg of the route. Fewer than two points yield an
    /// empty collection.
    pub fn route_geometry(&self, style: PathStyle, segments: usize) -> FeatureCollection {
        let stops: Vec<(&str, GeoPoint)> = self
            .route
            .iter()
            .map(|p| (p.id(), p.position()))
            .collect();
        FeatureCollection::from_stops(&stops, style, segments)
    }

    fn place_marker(&mut self, key: MarkerKey, label: &str, position: GeoPoint) {
        let marker = Marker {
            label: label.to_string(),
            position,
        };
        if let Some(old) = self.markers.insert(key, position, marker) {
            debug!(label = %old.label, "replaced marker");
        }
    }
}

fn round_nm(km: f64) -> i64 {
    DisplayDistance::from_km(km).nm
}

#[cfg(test)]
mod tests {
    use super::*;
    use navdata::NavKind;

    fn airport(code: &str, lat: f64, lon: f64) -> Airport {
        Airport::new(code, format!("{} Airport", code), "", "", GeoPoint::new(lat, lon))
    }

    #[test]
    fn test_same_airport_rejected_and_state_kept() {
        let mut session = RouteSession::new();
        session.select_departure(airport("JFK", 40.6413, -73.7781)).unwrap();
        let err = session
            .select_destination(airport("jfk", 40.6413, -73.7781))
            .unwrap_err();
        assert_eq!(err, RouteError::SameAirport("jfk".to_string()));
        assert!(session.destination().is_none());
        assert_eq!(session.markers().len(), 1);
    }

    #[test]
    fn test_reselect_replaces_marker() {
        let mut session = RouteSession::new();
        session.select_departure(airport("JFK", 40.6413, -73.7781)).unwrap();
        session.select_departure(airport("LAX", 33.9416, -118.4085)).unwrap();
        assert_eq!(session.markers().len(), 1);
        assert_eq!(
            session.markers().get(&MarkerKey::Departure).unwrap().label,
            "LAX"
        );
    }

    #[test]
    fn test_flight_details_needs_both() {
        let mut session = RouteSession::new();
        assert!(session.flight_details().is_none());
        session.select_departure(airport("JFK", 40.6413, -73.7781)).unwrap();
        assert!(session.flight_details().is_none());
        assert_eq!(
            session.pair_geometry(PathStyle::GreatCircle, 10),
            Err(RouteError::IncompleteSelection)
        );
    }

    #[test]
    fn test_clear_pair_allows_reselecting_same_code() {
        let mut session = RouteSession::new();
        session.select_departure(airport("JFK", 40.6413, -73.7781)).unwrap();
        session.clear_pair();
        session.select_destination(airport("JFK", 40.6413, -73.7781)).unwrap();
        assert!(session.departure().is_none());
        assert_eq!(session.markers().len(), 1);
        assert!(session.markers().get(&MarkerKey::Departure).is_none());
    }

    #[test]
    fn test_round_nm() {
        assert_eq!(round_nm(1.852 * 3.4), 3);
        assert_eq!(round_nm(1.852 * 3.6), 4);
        assert_eq!(round_nm(0.0), 0);
    }

    #[test]
    fn test_route_marker_key_uses_kind_and_id() {
        let mut session = RouteSession::new();
        session.add_point(NavPoint::from(airport("NZWN", -41.3272, 174.805)));
        assert!(session
            .markers()
            .get(&MarkerKey::Route(NavKind::Airport, "NZWN".to_string()))
            .is_some());
    }
}
