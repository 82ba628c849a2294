use approx::assert_relative_eq;
use skyframe::{
    ComponentError, Degree, Ecliptic, Frame, Galactic, Icrs, IndexedPoint, Radian, Representation,
    SphericalCoslatDifferential, SphericalRepresentation, Supergalactic,
};

#[test]
fn test_galactic_end_to_end() {
    let g = Galactic::<Degree, Degree>::with_motion(10.0, 20.0, 100.0, 0.5, 0.3, 15.0);
    assert_eq!(g.b(), 10.0);
    assert_eq!(g.l(), 20.0);
    assert_eq!(g.distance(), 100.0);
    assert_eq!(g.pm_b(), 0.5);
    assert_eq!(g.pm_l_cosb(), 0.3);
    assert_eq!(g.radial_velocity(), 15.0);
}

#[test]
fn test_every_setter_round_trips() {
    let values = [-12.5, 0.0, 1e-9, 359.999, 1.0e12];
    for x in values {
        let mut g = Galactic::<Degree, Degree>::with_motion(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        g.set_b(x);
        assert_eq!(g.b(), x);
        g.set_l(x);
        assert_eq!(g.l(), x);
        g.set_distance(x);
        assert_eq!(g.distance(), x);
        g.set_pm_b(x);
        assert_eq!(g.pm_b(), x);
        g.set_pm_l_cosb(x);
        assert_eq!(g.pm_l_cosb(), x);
        g.set_radial_velocity(x);
        assert_eq!(g.radial_velocity(), x);
    }
}

#[test]
fn test_setting_b_leaves_other_components() {
    let mut g = Galactic::<Radian, Radian>::with_motion(0.1, 0.2, 0.3, 0.4, 0.5, 0.6);
    g.set_b(1.5);
    assert_eq!(g.components(), [1.5, 0.2, 0.3, 0.4, 0.5, 0.6]);
}

#[test]
fn test_degree_position_radian_motion() {
    let g = Galactic::<Degree, Radian>::with_motion(45.0, 90.0, 2.0, 0.01, 0.02, 3.0);
    // Stored as given: degrees stay degrees, radians stay radians.
    assert_eq!(g.b(), 45.0);
    assert_eq!(g.pm_b(), 0.01);

    let motion: SphericalCoslatDifferential<Radian> = *g.differential();
    let position: SphericalRepresentation<Degree> = *g.data();
    assert_eq!(motion.d_lat(), 0.01);
    assert_eq!(position.lat(), 45.0);
}

#[test]
fn test_frames_exchange_state_through_generic_frame() {
    // A transform layer reads one frame's parts and builds another from them.
    let icrs = Icrs::<Degree, Degree>::with_motion(-29.0, 266.4, 8.1, 0.1, -0.2, 0.0);
    let frame: Frame<SphericalRepresentation<Degree>, SphericalCoslatDifferential<Degree>> =
        icrs.into();
    let (data, motion) = frame.into_parts();
    let galactic = Galactic::<Degree, Degree>::from_parts(data, motion);
    assert_eq!(galactic.components(), icrs.components());
}

#[test]
fn test_named_frames_share_index_layout() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let g = Galactic::<Degree, Degree>::from_components(&values).unwrap();
    let i = Icrs::<Degree, Degree>::from_components(&values).unwrap();
    let e = Ecliptic::<Degree, Degree>::from_components(&values).unwrap();
    let s = Supergalactic::<Degree, Degree>::from_components(&values).unwrap();

    assert_eq!(g.components(), values);
    assert_eq!(i.components(), values);
    assert_eq!(e.components(), values);
    assert_eq!(s.components(), values);
    assert_eq!(g.data().point().component(0), Some(i.dec()));
}

#[test]
fn test_wrong_component_count() {
    let err = Icrs::<Degree, Degree>::from_components(&[]).unwrap_err();
    assert_eq!(err, ComponentError::FrameCount { got: 0 });
    assert_eq!(
        err.to_string(),
        "expected 3 (position) or 6 (position and motion) components, got 0"
    );
}

#[test]
fn test_arithmetic_on_read_values() {
    // Accessors return plain f64s; callers do their own math.
    let g = Galactic::<Degree, Degree>::with_motion(30.0, 0.0, 10.0, 0.0, 0.5, 0.0);
    let pm_l = g.pm_l_cosb() / g.b().to_radians().cos();
    assert_relative_eq!(pm_l, 0.5 / (3.0_f64.sqrt() / 2.0), epsilon = 1e-12);
}

#[test]
fn test_frames_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Galactic<Degree, Radian>>();
    assert_send_sync::<Frame<SphericalRepresentation<Radian>, SphericalCoslatDifferential<Degree>>>();
}
