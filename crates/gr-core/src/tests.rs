//! Unit tests for gr-core coordinate and distance primitives.

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn display() {
        assert_eq!(GeoPoint::new(39.9, 116.4).to_string(), "(39.900000, 116.400000)");
    }

    #[test]
    fn domain_bounds_inclusive() {
        assert!(GeoPoint::new(90.0, 180.0).in_domain());
        assert!(GeoPoint::new(-90.0, -180.0).in_domain());
        assert!(!GeoPoint::new(90.1, 0.0).in_domain());
        assert!(!GeoPoint::new(0.0, -180.5).in_domain());
    }
}

#[cfg(test)]
mod haversine {
    use crate::{haversine_km, DistanceModel, GeoPoint, Haversine, EARTH_RADIUS_KM};

    #[test]
    fn identity() {
        let p = GeoPoint::new(30.694, -88.043);
        assert_eq!(haversine_km(p, p, EARTH_RADIUS_KM), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~111.19 km per degree on the mean-radius sphere
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = haversine_km(a, b, EARTH_RADIUS_KM);
        assert!((d - 111.195).abs() < 0.5, "got {d}");
    }

    #[test]
    fn beijing_shanghai_known_value() {
        let beijing = GeoPoint::new(39.9, 116.4);
        let shanghai = GeoPoint::new(31.2, 121.4);
        let d = haversine_km(beijing, shanghai, EARTH_RADIUS_KM);
        assert!((d - 1067.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn scales_linearly_with_radius() {
        let a = GeoPoint::new(10.0, 20.0);
        let b = GeoPoint::new(-5.0, 140.0);
        let d1 = haversine_km(a, b, EARTH_RADIUS_KM);
        let d2 = haversine_km(a, b, 2.0 * EARTH_RADIUS_KM);
        assert!((d2 - 2.0 * d1).abs() < 1e-9);
    }

    #[test]
    fn monotonic_with_separation() {
        let origin = GeoPoint::new(0.0, 0.0);
        let mut prev = 0.0;
        for deg in 1..=179 {
            let d = haversine_km(origin, GeoPoint::new(0.0, deg as f64), EARTH_RADIUS_KM);
            assert!(d > prev, "distance shrank at {deg}°");
            prev = d;
        }
    }

    #[test]
    fn antipodal_is_half_circumference() {
        let d = haversine_km(
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 180.0),
            EARTH_RADIUS_KM,
        );
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn model_uses_its_radius() {
        let a = GeoPoint::new(48.8, 2.3);
        let b = GeoPoint::new(52.5, 13.4);
        let m = Haversine::default();
        let d = m.distance(a, b);
        assert!(!d.is_degraded());
        assert_eq!(d.km, haversine_km(a, b, EARTH_RADIUS_KM));
    }
}

#[cfg(test)]
mod vincenty {
    use crate::{haversine_km, DistanceModel, GeoPoint, Vincenty, EARTH_RADIUS_KM, WGS84_A_KM};

    #[test]
    fn identity_short_circuits() {
        let p = GeoPoint::new(45.8, 126.7);
        let d = Vincenty::default().distance_km(p, p);
        assert_eq!(d.km, 0.0);
        assert!(!d.is_degraded());
    }

    #[test]
    fn equatorial_line_closed_form() {
        // Along the equator the geodesic reduces to s = a·Δλ; this also
        // exercises the cos²α = 0 degenerate branch.
        let d = Vincenty::default()
            .distance_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 90.0));
        let expected = WGS84_A_KM * std::f64::consts::FRAC_PI_2;
        assert!(!d.is_degraded());
        assert!((d.km - expected).abs() < 0.01, "got {}, want {expected}", d.km);
    }

    #[test]
    fn agrees_with_haversine_at_short_range() {
        // < 1000 km pairs: the two formulas agree within 1%.
        let pairs = [
            (GeoPoint::new(39.9, 116.4), GeoPoint::new(31.2, 121.4)), // Beijing–Shanghai
            (GeoPoint::new(52.5, 13.4), GeoPoint::new(48.8, 2.3)),    // Berlin–Paris
            (GeoPoint::new(51.5, -0.1), GeoPoint::new(48.8, 2.3)),    // London–Paris
        ];
        let solver = Vincenty::default();
        for (a, b) in pairs {
            let v = solver.distance_km(a, b);
            let h = haversine_km(a, b, EARTH_RADIUS_KM);
            assert!(!v.is_degraded());
            assert!((v.km - h).abs() / h < 0.01, "{a} → {b}: vincenty {} vs haversine {h}", v.km);
        }
    }

    #[test]
    fn zero_iterations_fall_back_to_haversine() {
        let a = GeoPoint::new(39.9, 116.4);
        let b = GeoPoint::new(40.7, -74.0);
        let d = Vincenty::new(0, 1e-12).distance_km(a, b);
        assert!(d.is_degraded());
        assert_eq!(d.km, haversine_km(a, b, EARTH_RADIUS_KM));
    }

    #[test]
    fn near_antipodal_stays_bounded() {
        // Convergence is not guaranteed this close to the antipode; either
        // outcome must still be a sane geodesic length.
        let d = Vincenty::default()
            .distance_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.5, 179.7));
        assert!(d.km.is_finite());
        assert!(d.km > 19_000.0 && d.km < 20_100.0, "got {}", d.km);
    }

    #[test]
    fn trait_and_inherent_agree() {
        let solver = Vincenty::default();
        let a = GeoPoint::new(25.0, 102.7);
        let b = GeoPoint::new(43.8, 87.6);
        assert_eq!(solver.distance(a, b), solver.distance_km(a, b));
    }
}

#[cfg(test)]
mod symmetry {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::{DistanceModel, GeoPoint, Haversine, Vincenty};

    fn random_point(rng: &mut SmallRng) -> GeoPoint {
        GeoPoint::new(rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0))
    }

    fn assert_symmetric(model: &dyn DistanceModel, seed: u64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        for _ in 0..200 {
            let a = random_point(&mut rng);
            let b = random_point(&mut rng);
            let ab = model.distance(a, b).km;
            let ba = model.distance(b, a).km;
            // 1e-9 relative, floored at 0.1 mm: the iterative solver's
            // stopping residual bounds absolute agreement for short pairs.
            let tol = (1e-9 * ab).max(1e-7);
            assert!((ab - ba).abs() <= tol, "{a} ↔ {b}: {ab} vs {ba}");
            assert!(ab >= 0.0);
        }
    }

    #[test]
    fn haversine_symmetric() {
        assert_symmetric(&Haversine::default(), 42);
    }

    #[test]
    fn vincenty_symmetric() {
        assert_symmetric(&Vincenty::default(), 42);
    }
}
