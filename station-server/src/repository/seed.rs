//! Synthetic demo data.
//!
//! Generates plausible Australian radio stations: a state or territory, a
//! call sign carrying that state's licensing digit, and one of its cities.

use rand::Rng;

use crate::domain::StationDraft;

/// Number of stations a fresh server starts with.
pub const DEFAULT_SEED_COUNT: usize = 50;

/// (state, call sign digit, cities)
const REGIONS: &[(&str, char, &[&str])] = &[
    ("ACT", '1', &["Canberra", "Queanbeyan"]),
    ("NSW", '2', &["Sydney", "Newcastle", "Wollongong", "Orange", "Wagga Wagga"]),
    ("VIC", '3', &["Melbourne", "Geelong", "Ballarat", "Bendigo"]),
    ("QLD", '4', &["Brisbane", "Gold Coast", "Townsville", "Cairns", "Toowoomba"]),
    ("SA", '5', &["Adelaide", "Mount Gambier", "Whyalla"]),
    ("WA", '6', &["Perth", "Bunbury", "Geraldton", "Kalgoorlie"]),
    ("TAS", '7', &["Hobart", "Launceston", "Devonport"]),
    ("NT", '8', &["Darwin", "Alice Springs", "Katherine"]),
];

const BANDS: &[&str] = &["AM", "FM", "DAB"];

/// Generate `count` valid station drafts.
///
/// The output depends only on the generator, so a seeded generator yields the
/// same data set every time.
pub fn synthetic_stations<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<StationDraft> {
    (0..count).filter_map(|_| synthetic_station(rng)).collect()
}

fn synthetic_station<R: Rng + ?Sized>(rng: &mut R) -> Option<StationDraft> {
    let (state, digit, cities) = REGIONS[rng.random_range(0..REGIONS.len())];
    let city = cities[rng.random_range(0..cities.len())];
    let band = BANDS[rng.random_range(0..BANDS.len())];

    let letters: String = (0..2)
        .map(|_| char::from(rng.random_range(b'A'..=b'Z')))
        .collect();
    let call_sign = format!("{digit}{letters}");
    let code = format!("{call_sign}-{band}");

    // Every generated field is non-blank, so validation cannot fail here.
    StationDraft::validate(
        Some(call_sign),
        Some(code),
        Some(state.to_string()),
        Some(city.to_string()),
    )
    .ok()
}
