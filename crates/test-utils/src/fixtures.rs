//! Common test fixtures for route planner tests.
//!
//! This module provides pre-defined reference data that represents common
//! scenarios: well-known airport coordinates and small CSV extracts in the
//! same layouts as the public datasets the loaders read.

use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

/// Airport reference coordinates as `(latitude, longitude)`.
pub mod airports {
    /// New York JFK
    pub const JFK: (f64, f64) = (40.6413, -73.7781);

    /// London Heathrow
    pub const LHR: (f64, f64) = (51.4700, -0.4543);

    /// Los Angeles
    pub const LAX: (f64, f64) = (33.9416, -118.4085);

    /// Sydney Kingsford Smith
    pub const SYD: (f64, f64) = (-33.9399, 151.1753);

    /// Tokyo Haneda
    pub const HND: (f64, f64) = (35.5494, 139.7798);

    /// Singapore Changi
    pub const SIN: (f64, f64) = (1.3644, 103.9915);

    /// Wellington, the default map centre
    pub const WLG: (f64, f64) = (-41.3272, 174.8053);

    /// Nadi, Fiji (east of the antimeridian from Wellington's point of view)
    pub const NAN: (f64, f64) = (-17.7554, 177.4431);

    /// Honolulu
    pub const HNL: (f64, f64) = (21.3187, -157.9225);
}

/// Expected haversine results on the 6371.0 km sphere.
pub mod distances {
    /// JFK to LHR in kilometres.
    pub const JFK_LHR_KM: f64 = 5540.011;

    /// JFK to LHR rounded for display.
    pub const JFK_LHR_NM_ROUNDED: i64 = 2991;

    /// JFK to LHR rounded for display.
    pub const JFK_LHR_KM_ROUNDED: i64 = 5540;
}

/// CSV extracts in the layouts the loaders accept.
pub mod csv {
    /// OurAirports `airports.csv` extract.
    ///
    /// Contains three usable airports (KJFK, EGLL, NZWN), a heliport that
    /// must be filtered, a small airport without an ICAO code that must be
    /// filtered, and one row with a broken latitude.
    pub const AIRPORTS: &str = r#""id","ident","type","name","latitude_deg","longitude_deg","elevation_ft","continent","iso_country","iso_region","municipality","scheduled_service","icao_code","iata_code","gps_code","local_code","home_link","wikipedia_link","keywords"
3622,"KJFK","large_airport","John F Kennedy International Airport",40.639447,-73.779317,13,"NA","US","US-NY","New York","yes","KJFK","JFK","KJFK","JFK","https://www.jfkairport.com/","https://en.wikipedia.org/wiki/John_F._Kennedy_International_Airport","Manhattan, New York City, NYC, Idlewild, IDL, KIDL"
2434,"EGLL","large_airport","London Heathrow Airport",51.4706,-0.461941,83,"EU","GB","GB-ENG","London","yes","EGLL","LHR","EGLL",,"http://www.heathrowairport.com/","https://en.wikipedia.org/wiki/Heathrow_Airport","LON, Londres"
4991,"NZWN","large_airport","Wellington International Airport",-41.3272,174.805,41,"OC","NZ","NZ-WGN","Wellington","yes","NZWN","WLG","NZWN",,,"https://en.wikipedia.org/wiki/Wellington_International_Airport",
6523,"00A","heliport","Total RF Heliport",40.070985,-74.933689,11,"NA","US","US-PA","Bensalem","no","","","K00A","00A",,,
6524,"00AA","small_airport","Aero B Ranch Airport",38.704022,-101.473911,3435,"NA","US","US-KS","Leoti","no","","","00AA","00AA",,,
9999,"XXXX","medium_airport","Broken Latitude Field",not-a-number,10.0,0,"EU","DE","DE-BY","Nowhere","no","XXXX","","XXXX",,,,
"#;

    /// OurAirports `navaids.csv` extract.
    ///
    /// Two usable navaids, one row without an ident, and one with a
    /// longitude outside -180..=180.
    pub const NAVAIDS: &str = r#""id","filename","ident","name","type","frequency_khz","latitude_deg","longitude_deg","elevation_ft","iso_country","dme_frequency_khz","dme_channel","dme_latitude_deg","dme_longitude_deg","dme_elevation_ft","slaved_variation_deg","magnetic_variation_deg","usageType","power","associated_airport"
85155,"Wellington_VOR-DME_NZ","WN","Wellington","VOR-DME",112300,-41.3336,174.8192,100,"NZ",1123000,"70X",,,,,22.0,"BOTH","HIGH","NZWN"
85201,"Ohakea_NDB_NZ","OH","Ohakea","NDB",348,-40.2069,175.3880,,"NZ",,,,,,,21.0,"BOTH","MEDIUM","NZOH"
85300,"Blank_NDB_NZ","","Nameless","NDB",300,-40.0,175.0,,"NZ",,,,,,,,,,
85301,"Bad_VOR_NZ","BAD","Bad Longitude","VOR",113000,-40.0,190.5,,"NZ",,,,,,,,,,
"#;

    /// Waypoint list with hemisphere-prefixed and decimal coordinates.
    ///
    /// Starts with a UTF-8 byte order mark. Contains three usable waypoints,
    /// one row without a name (skipped silently), and one row whose
    /// coordinates cannot be parsed.
    pub const WAYPOINTS: &str = "\u{feff}Name,Code,Type,Latitude  (WGS84),Longitude  (WGS84)\n\
KAPTI,KAP,Reporting Point,S41.3319°,E174.8056°\n\
TAWHA,TAW,Enroute,-40.8812,175.0021\n\
ABLAR,ABL,Reporting Point,N12.5000°,W170.2500°\n\
,NON,Enroute,S40.0000°,E175.0000°\n\
GARBL,GAR,Enroute,somewhere,E175.0000°\n";
}

/// A directory of fixture files that is removed when dropped.
pub struct FixtureDir {
    dir: TempDir,
}

impl FixtureDir {
    /// Create an empty fixture directory.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Write `contents` to `name` inside the directory and return its path.
    pub fn write(&self, name: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.dir.path().join(name);
        let mut file = std::fs::File::create(&path)?;
        file.write_all(contents.as_bytes())?;
        Ok(path)
    }

    /// Path of a file inside the directory (it need not exist).
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write the standard airports, navaids and waypoints extracts.
    pub fn with_reference_data(self) -> std::io::Result<Self> {
        self.write("airports.csv", csv::AIRPORTS)?;
        self.write("navaids.csv", csv::NAVAIDS)?;
        self.write("waypoints.csv", csv::WAYPOINTS)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_airport_coords_in_range() {
        for (lat, lon) in [
            airports::JFK,
            airports::LHR,
            airports::LAX,
            airports::SYD,
            airports::HND,
            airports::SIN,
            airports::WLG,
            airports::NAN,
            airports::HNL,
        ] {
            assert!((-90.0..=90.0).contains(&lat));
            assert!((-180.0..=180.0).contains(&lon));
        }
    }

    #[test]
    fn test_fixture_dir_writes_files() {
        let dir = FixtureDir::new().unwrap().with_reference_data().unwrap();
        let airports = std::fs::read_to_string(dir.path("airports.csv")).unwrap();
        assert!(airports.starts_with("\"id\""));
        let waypoints = std::fs::read(dir.path("waypoints.csv")).unwrap();
        assert_eq!(&waypoints[..3], &[0xEF, 0xBB, 0xBF]);
    }
}
