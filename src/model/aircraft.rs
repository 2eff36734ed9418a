//! Static catalog of supported aircraft and add-on brands.
//!
//! Shared by the upload form and the server side validation. Aircraft names
//! outside the catalog are accepted as free text; only the brand restriction
//! of the families listed in [`RESTRICTED_FAMILIES`] is enforced.

use super::livery::Manufacturer;

pub const AIRBUS_AIRCRAFT: &[&str] = &[
    "A318", "A319", "A320", "A320neo", "A321", "A321neo", "A330", "A340", "A350", "A380",
];

pub const BOEING_AIRCRAFT: &[&str] = &[
    "B717",
    "B737 Classic",
    "B737 NG",
    "B737 MAX",
    "B747-400",
    "B747-8",
    "B757",
    "B767",
    "B777",
    "B787",
];

pub const COMMON_BRANDS: &[&str] = &[
    "FBW",
    "Fenix",
    "Headwind",
    "LatinVFR",
    "FlyByWire",
    "Bredok3D",
    "PMDG",
    "iFly",
    "Horizon",
    "Captain Sim",
    "iniBuilds",
    "Asobo",
];

/// Label of the free-text brand entry in the upload form.
pub const OTHER_BRAND: &str = "Other";

/// Aircraft families that only accept liveries for specific brands.
pub const RESTRICTED_FAMILIES: &[(&str, &[&str])] =
    &[("A340", &["iniBuilds"]), ("A350", &["iniBuilds"])];

pub fn aircraft_for(manufacturer: Manufacturer) -> &'static [&'static str] {
    match manufacturer {
        Manufacturer::Airbus => AIRBUS_AIRCRAFT,
        Manufacturer::Boeing => BOEING_AIRCRAFT,
    }
}

fn restriction(aircraft: &str) -> Option<&'static [&'static str]> {
    let aircraft = aircraft.trim();

    RESTRICTED_FAMILIES
        .iter()
        .find(|(family, _)| {
            aircraft
                .get(..family.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(family))
        })
        .map(|(_, brands)| *brands)
}

/// Whether the aircraft belongs to a family with a brand allow-list.
///
/// Matches by family prefix, so `A340-300` is restricted like `A340`.
pub fn is_restricted(aircraft: &str) -> bool {
    restriction(aircraft).is_some()
}

/// Brands offered for the given aircraft.
pub fn allowed_brands(aircraft: &str) -> &'static [&'static str] {
    restriction(aircraft).unwrap_or(COMMON_BRANDS)
}

pub fn is_brand_allowed(aircraft: &str, brand: &str) -> bool {
    match restriction(aircraft) {
        Some(brands) => {
            let brand = brand.trim();
            brands.iter().any(|b| b.eq_ignore_ascii_case(brand))
        }
        None => true,
    }
}
