//! Iterative inverse-Vincenty distance on the WGS-84 ellipsoid.
//!
//! More accurate than the spherical haversine, particularly over long and
//! near-antipodal separations, at the cost of an iteration per call.  When
//! the λ refinement fails to settle within the iteration cap the solver
//! substitutes the spherical value and tags it
//! [`Precision::Degraded`](crate::distance::Precision) so callers can
//! detect the reduced accuracy.

use crate::distance::{haversine_km, Distance, DistanceModel, EARTH_RADIUS_KM};
use crate::geo::GeoPoint;

/// WGS-84 equatorial radius in kilometres.
pub const WGS84_A_KM: f64 = 6378.137;

/// WGS-84 polar radius in kilometres.
pub const WGS84_B_KM: f64 = 6356.7523142;

/// Ellipsoidal distance solver.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vincenty {
    /// Cap on λ refinement passes.  0 forces the spherical fallback.
    pub max_iterations: u32,
    /// Convergence threshold on |λ − λ_prev|, in radians.
    pub tolerance: f64,
}

impl Default for Vincenty {
    fn default() -> Self {
        Self { max_iterations: 20, tolerance: 1e-12 }
    }
}

impl Vincenty {
    pub fn new(max_iterations: u32, tolerance: f64) -> Self {
        Self { max_iterations, tolerance }
    }

    /// Geodesic distance between `p1` and `p2` in kilometres.
    ///
    /// Coincident points short-circuit to a nominal 0.  Non-convergence
    /// (near-antipodal pairs, or a zero iteration cap) yields the haversine
    /// value on the mean-radius sphere, tagged degraded.
    pub fn distance_km(&self, p1: GeoPoint, p2: GeoPoint) -> Distance {
        let a = WGS84_A_KM;
        let b = WGS84_B_KM;
        let f = (a - b) / a;

        let lat1 = p1.lat.to_radians();
        let lat2 = p2.lat.to_radians();
        let l = (p2.lon - p1.lon).to_radians();

        // Reduced latitudes on the auxiliary sphere.
        let u1 = ((1.0 - f) * lat1.tan()).atan();
        let u2 = ((1.0 - f) * lat2.tan()).atan();
        let (sin_u1, cos_u1) = u1.sin_cos();
        let (sin_u2, cos_u2) = u2.sin_cos();

        let mut lambda = l;

        for _ in 0..self.max_iterations {
            let (sin_lambda, cos_lambda) = lambda.sin_cos();

            let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
                + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
            .sqrt();
            if sin_sigma == 0.0 {
                // Coincident points.
                return Distance::nominal(0.0);
            }

            let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
            let sigma = sin_sigma.atan2(cos_sigma);

            let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
            let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;

            // cos²α = 0 on an equatorial line; the division below would
            // blow up, and the correct limit is 0.
            let cos_2sigma_m = if cos_sq_alpha != 0.0 {
                cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
            } else {
                0.0
            };

            let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
            let lambda_prev = lambda;
            lambda = l
                + (1.0 - c)
                    * f
                    * sin_alpha
                    * (sigma
                        + c * sin_sigma
                            * (cos_2sigma_m
                                + c * cos_sigma
                                    * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

            if (lambda - lambda_prev).abs() < self.tolerance {
                return Distance::nominal(Self::closing_series(
                    a, b, sigma, sin_sigma, cos_sigma, cos_sq_alpha, cos_2sigma_m,
                ));
            }
        }

        // λ never settled; substitute the spherical value on the original
        // degree inputs and mark it.
        Distance::degraded(haversine_km(p1, p2, EARTH_RADIUS_KM))
    }

    /// Vincenty closing series: u², A, B, Δσ, then s = b·A·(σ − Δσ).
    #[allow(clippy::too_many_arguments)]
    fn closing_series(
        a: f64,
        b: f64,
        sigma: f64,
        sin_sigma: f64,
        cos_sigma: f64,
        cos_sq_alpha: f64,
        cos_2sigma_m: f64,
    ) -> f64 {
        let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
        let big_a =
            1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
        let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));

        let delta_sigma = big_b
            * sin_sigma
            * (cos_2sigma_m
                + big_b / 4.0
                    * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                        - big_b / 6.0
                            * cos_2sigma_m
                            * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                            * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));

        b * big_a * (sigma - delta_sigma)
    }
}

impl DistanceModel for Vincenty {
    #[inline]
    fn distance(&self, a: GeoPoint, b: GeoPoint) -> Distance {
        self.distance_km(a, b)
    }
}
