use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use space_travel_simulator::navigation::{
    Catalog, NavigationError, calculate_distance, calculate_transmission_delay, convert_to_au,
    present_planet, travel_time,
};
use space_travel_simulator::numeric::decimal::divide;
use space_travel_simulator::numeric::notation::{format_exponential, to_eng_string, to_sci_string};

const PLANETS: [&str; 9] = [
    "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune", "Pluto",
];

/// Planet, `Convert AU` output, `Calculate Delay` output.
const REFERENCE_OUTPUTS: [(&str, &str, &str); 9] = [
    ("Mercury", "0.2333333333333333333333333333", "-383.5987094778748570119132216"),
    ("Venus", "0.4266666666666666666666666667", "-286.8651218704107626349959744"),
    ("Earth", "1", "0"),
    ("Mars", "1.52", "260.1799942545585986689498373"),
    ("Jupiter", "5.186666666666666666666666667", "2094.782517844394871334621767"),
    ("Saturn", "9.513333333333333333333333333", "4259.613495680401673080114644"),
    ("Uranus", "19.14", "9076.279030341717268951442401"),
    ("Neptune", "29.98666666666666666666666667", "14503.36685921565111554607555"),
    ("Pluto", "39.37333333333333333333333333", "19199.94931960563197357019569"),
];

fn builtin() -> &'static Catalog {
    Catalog::builtin().expect("built-in catalog")
}

#[test]
fn builtin_catalog_lists_nine_planets_in_order() {
    let catalog = builtin();
    let names: Vec<&str> = catalog.planets().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, PLANETS);
    assert!(catalog.planets().iter().all(|p| p.distance_km >= Decimal::ZERO));
    assert_eq!(catalog.planet_distance("Earth"), Some(dec!(150000000)));
    assert_eq!(catalog.planet_distance("Saturn"), Some(dec!(1427000000)));
}

#[test]
fn builtin_ships_have_expected_speeds() {
    let catalog = builtin();
    let shuttle = catalog.ship("Shuttle").expect("shuttle");
    assert_eq!(shuttle.cruise_speed_km_s(), Some(dec!(11.19)));
    assert_eq!(shuttle.maximum_warp_factor(), None);

    let enterprise = catalog.ship("Enterprise").expect("enterprise");
    assert_eq!(enterprise.cruise_speed_km_s(), Some(dec!(63855793.554)));
    assert_eq!(enterprise.maximum_warp_factor(), Some(5));

    let names: Vec<&str> = catalog.ship_names().collect();
    assert_eq!(names, ["Shuttle", "Enterprise"]);
}

#[test]
fn earth_is_exactly_one_au() {
    let earth = convert_to_au(builtin(), "Earth").expect("in range");
    assert_eq!(earth, Decimal::ONE);
    assert_eq!(earth.scale(), 0);
    assert_eq!(to_eng_string(earth), "1");
}

#[test]
fn au_ratios_stay_decimal() {
    let catalog = builtin();
    let au = |planet: &str| convert_to_au(catalog, planet).expect("in range");
    assert_eq!(au("Mercury"), dec!(35000000) / dec!(150000000));
    assert_eq!(au("Mars"), dec!(1.52));
    assert_eq!(au("Mars").scale(), 2);
    assert_eq!(au("Uranus").scale(), 2);
}

#[test]
fn every_planet_matches_reference_au_and_delay() {
    let catalog = builtin();
    for (planet, au, delay) in REFERENCE_OUTPUTS {
        let converted = convert_to_au(catalog, planet).expect("in range");
        assert_eq!(to_eng_string(converted), au, "{planet} AU");
        let seconds = calculate_transmission_delay(catalog, planet).expect("in range");
        assert_eq!(to_sci_string(seconds), delay, "{planet} delay");
    }
}

#[test]
fn unknown_planet_converts_to_zero_au() {
    assert_eq!(convert_to_au(builtin(), "Vulcan"), Ok(Decimal::ZERO));
}

#[test]
fn distance_is_antisymmetric() {
    let catalog = builtin();
    for a in catalog.planets() {
        for b in catalog.planets() {
            assert_eq!(
                calculate_distance(a.distance_km, b.distance_km),
                -calculate_distance(b.distance_km, a.distance_km),
                "{} <-> {}",
                a.name,
                b.name
            );
        }
    }
    assert_eq!(
        format_exponential(calculate_distance(dec!(35000000), dec!(228000000)), 5),
        "1.93000e+8"
    );
}

#[test]
fn shuttle_travel_earth_to_mars() {
    let catalog = builtin();
    let seconds = travel_time(catalog, "Shuttle", "Earth", "Mars").expect("known ship");
    assert_eq!(divide(dec!(78000000), dec!(11.19)), Some(seconds));
    assert_eq!(to_sci_string(seconds), "6970509.383378016085790884718");
    assert_eq!(format_exponential(seconds, 5), "6.97051e+6");
}

#[test]
fn enterprise_travel_uses_warp_speed() {
    let seconds =
        travel_time(builtin(), "Enterprise", "Earth", "Mars").expect("known ship");
    assert_eq!(format_exponential(seconds, 5), "1.22150e+0");
}

#[test]
fn unknown_ship_is_an_error() {
    let err = travel_time(builtin(), "Falcon9", "Earth", "Mars").unwrap_err();
    assert_eq!(err, NavigationError::UnknownShip("Falcon9".to_string()));
    assert_eq!(err.to_string(), "ship 'Falcon9' not found");
}

#[test]
fn unknown_planets_fall_back_to_defaults_during_travel() {
    let catalog = builtin();
    // start resolves to 1 km, destination to 0 km
    let seconds = travel_time(catalog, "Shuttle", "Vulcan", "Krypton").expect("known ship");
    assert_eq!(to_sci_string(seconds), "-0.0893655049151027703306523682");
    let seconds = travel_time(catalog, "Shuttle", "Earth", "Krypton").expect("known ship");
    assert_eq!(format_exponential(seconds, 5), "-1.34048e+7");
}

#[test]
fn mars_transmission_delay() {
    let delay = calculate_transmission_delay(builtin(), "Mars").expect("in range");
    assert_eq!(divide(dec!(78000000), dec!(299792.458)), Some(delay));
    assert_eq!(to_sci_string(delay), "260.1799942545585986689498373");
}

#[test]
fn earth_and_unknown_planet_delays() {
    let catalog = builtin();
    assert_eq!(calculate_transmission_delay(catalog, "Earth"), Ok(Decimal::ZERO));
    let vulcan = calculate_transmission_delay(catalog, "Vulcan").expect("in range");
    assert_eq!(to_sci_string(vulcan), "-500.3461427972280743633650717");
}

#[test]
fn present_planet_uses_engineering_notation() {
    let catalog = builtin();
    let earth = present_planet(catalog, "Earth");
    assert!(earth.contains("Earth"));
    assert!(earth.contains("150E+6"));
    assert_eq!(earth, "Earth - 150E+6");
    assert_eq!(present_planet(catalog, "Mercury"), "Mercury - 35E+6");
    assert_eq!(present_planet(catalog, "Saturn"), "Saturn - 1.427E+9");
    assert_eq!(present_planet(catalog, "Vulcan"), "Vulcan - 0");
}
