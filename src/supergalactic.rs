//! Supergalactic coordinates: supergalactic latitude `sgb` and longitude `sgl`.

use crate::named::spherical_frame;

spherical_frame! {
    /// A position (and optional motion) in the supergalactic frame.
    Supergalactic {
        lat: (sgb, set_sgb),
        lon: (sgl, set_sgl),
        pm_lat: (pm_sgb, set_pm_sgb),
        pm_lon_coslat: (pm_sgl_cossgb, set_pm_sgl_cossgb),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Degree;

    #[test]
    fn test_index_mapping() {
        let s = Supergalactic::<Degree, Degree>::from_components(&[6.3, 137.4, 16.5, 0.0, 0.0, 1100.0])
            .unwrap();
        assert_eq!(s.sgb(), 6.3);
        assert_eq!(s.sgl(), 137.4);
        assert_eq!(s.distance(), 16.5);
        assert_eq!(s.radial_velocity(), 1100.0);
    }

    #[test]
    fn test_setters() {
        let mut s = Supergalactic::<Degree, Degree>::new(1.0, 2.0, 3.0);
        s.set_sgb(-1.0);
        s.set_sgl(-2.0);
        s.set_pm_sgb(0.5);
        s.set_pm_sgl_cossgb(0.25);
        assert_eq!(s.components(), [-1.0, -2.0, 3.0, 0.5, 0.25, 0.0]);
    }
}
