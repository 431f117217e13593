//! china-range: sample caller for the georange engine.
//!
//! Classifies the world's major cities against an 8 000 km radius measured
//! from China's key cities, with both distance models, and prints the
//! report plus the display extent a renderer would frame.  City tables are
//! embedded constants; a real caller would source anchors and targets from
//! whatever dataset it likes.

use anyhow::Result;

use gr_core::{GeoPoint, Haversine, Vincenty};
use gr_range::{classify, compute_extent, AnchorSet, ClassificationResult, NamedTarget};

// ── Constants ─────────────────────────────────────────────────────────────────

const RADIUS_KM: f64 = 8_000.0;

/// China's key cities, the reference region's anchor points.
const CHINA_KEY_CITIES: &[(f64, f64)] = &[
    (39.9, 116.4),  // Beijing
    (31.2, 121.4),  // Shanghai
    (22.5, 114.1),  // Shenzhen
    (30.6, 104.0),  // Chengdu
    (23.1, 113.2),  // Guangzhou
    (34.3, 108.9),  // Xi'an
    (43.8, 87.6),   // Urumqi
    (25.0, 102.7),  // Kunming
    (45.8, 126.7),  // Harbin
    (22.1, 113.5),  // Zhuhai
];

/// World major cities used as classification targets.
const WORLD_MAJOR_CITIES: &[(&str, f64, f64)] = &[
    ("Beijing", 39.9, 116.4),
    ("New York", 40.7, -74.0),
    ("London", 51.5, -0.1),
    ("Tokyo", 35.6, 139.8),
    ("Paris", 48.8, 2.3),
    ("Moscow", 55.7, 37.6),
    ("Singapore", 1.3, 103.8),
    ("Sydney", -33.8, 151.2),
];

fn main() -> Result<()> {
    let anchors: AnchorSet = CHINA_KEY_CITIES
        .iter()
        .map(|&(lat, lon)| GeoPoint::new(lat, lon))
        .collect();
    let targets: Vec<NamedTarget> = WORLD_MAJOR_CITIES
        .iter()
        .map(|&(name, lat, lon)| NamedTarget::new(name, GeoPoint::new(lat, lon)))
        .collect();

    println!("range report: {RADIUS_KM} km from China's key cities\n");

    let spherical = classify(&anchors, &targets, RADIUS_KM, &Haversine::default())?;
    let ellipsoidal = classify(&anchors, &targets, RADIUS_KM, &Vincenty::default())?;
    print_report(&spherical, &ellipsoidal);

    let extent = compute_extent(&anchors, RADIUS_KM)?;
    println!(
        "\ndisplay extent: lon [{:.1}, {:.1}], lat [{:.1}, {:.1}]",
        extent.min_lon, extent.max_lon, extent.min_lat, extent.max_lat
    );

    let within = spherical.iter().filter(|r| r.within).count();
    println!(
        "{within} of {} cities within {RADIUS_KM} km",
        spherical.len()
    );
    Ok(())
}

fn print_report(spherical: &[ClassificationResult], ellipsoidal: &[ClassificationResult]) {
    println!(
        "{:<12} {:>14} {:>14} {:>9}",
        "city", "haversine (km)", "vincenty (km)", "verdict"
    );
    for (s, v) in spherical.iter().zip(ellipsoidal) {
        let verdict = if s.within { "within" } else { "beyond" };
        let tag = if v.degraded { " (degraded)" } else { "" };
        println!(
            "{:<12} {:>14.1} {:>14.1} {:>9}{tag}",
            s.name, s.distance_km, v.distance_km, verdict
        );
    }
}
