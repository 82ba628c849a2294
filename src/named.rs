//! Named spherical frames.
//!
//! Every named sky frame in this crate is the same generic
//! [`Frame`](crate::frame::Frame) over a [`SphericalRepresentation`] and a
//! [`SphericalCoslatDifferential`], with the components renamed to the
//! frame's conventions. `spherical_frame!` generates that wrapper so the
//! index mapping is written once:
//!
//! | index | position           | motion                 |
//! |-------|--------------------|------------------------|
//! | 0     | latitude-like      | d(lat)/dt              |
//! | 1     | longitude-like     | d(lon)/dt · cos(lat)   |
//! | 2     | distance           | radial velocity        |
//!
//! [`SphericalRepresentation`]: crate::representation::SphericalRepresentation
//! [`SphericalCoslatDifferential`]: crate::differential::SphericalCoslatDifferential

macro_rules! spherical_frame {
    (
        $(#[$meta:meta])*
        $name:ident {
            lat: ($lat:ident, $set_lat:ident),
            lon: ($lon:ident, $set_lon:ident),
            pm_lat: ($pm_lat:ident, $set_pm_lat:ident),
            pm_lon_coslat: ($pm_lon:ident, $set_pm_lon:ident) $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name<
            RU: $crate::units::AngleUnit = $crate::units::Degree,
            DU: $crate::units::AngleUnit = $crate::units::Degree,
        > {
            frame: $crate::frame::Frame<
                $crate::representation::SphericalRepresentation<RU>,
                $crate::differential::SphericalCoslatDifferential<DU>,
            >,
        }

        impl<RU: $crate::units::AngleUnit, DU: $crate::units::AngleUnit> $name<RU, DU> {
            #[doc = concat!(
                "Position from (", stringify!($lat), ", ", stringify!($lon),
                ", distance). Motion is all-zero."
            )]
            pub fn new($lat: f64, $lon: f64, distance: f64) -> Self {
                Self {
                    frame: $crate::frame::Frame::from_representation(
                        $crate::representation::SphericalRepresentation::new($lat, $lon, distance),
                    ),
                }
            }

            /// Position and motion from six values. Position and motion are not
            /// checked against each other.
            pub fn with_motion(
                $lat: f64,
                $lon: f64,
                distance: f64,
                $pm_lat: f64,
                $pm_lon: f64,
                radial_velocity: f64,
            ) -> Self {
                Self {
                    frame: $crate::frame::Frame::new(
                        $crate::representation::SphericalRepresentation::new($lat, $lon, distance),
                        $crate::differential::SphericalCoslatDifferential::new(
                            $pm_lat,
                            $pm_lon,
                            radial_velocity,
                        ),
                    ),
                }
            }

            /// Wrap a position representation. Motion is all-zero.
            pub fn from_representation<T>(representation: T) -> Self
            where
                T: $crate::representation::Representation
                    + Into<$crate::representation::SphericalRepresentation<RU>>,
            {
                Self {
                    frame: $crate::frame::Frame::from_representation(representation.into()),
                }
            }

            /// Wrap a position representation and a motion differential.
            pub fn from_parts<T, V>(representation: T, differential: V) -> Self
            where
                T: $crate::representation::Representation
                    + Into<$crate::representation::SphericalRepresentation<RU>>,
                V: $crate::differential::Differential
                    + Into<$crate::differential::SphericalCoslatDifferential<DU>>,
            {
                Self {
                    frame: $crate::frame::Frame::new(representation.into(), differential.into()),
                }
            }

            /// Build from 3 (position only) or 6 (position and motion) values.
            pub fn from_components(values: &[f64]) -> Result<Self, $crate::point::ComponentError> {
                match values.len() {
                    3 => Ok(Self::from_representation(
                        $crate::representation::SphericalRepresentation::<RU>::try_from(values)?,
                    )),
                    6 => Ok(Self::from_parts(
                        $crate::representation::SphericalRepresentation::<RU>::try_from(&values[..3])?,
                        $crate::differential::SphericalCoslatDifferential::<DU>::try_from(&values[3..])?,
                    )),
                    got => {
                        ::tracing::debug!(frame = stringify!($name), got, "rejected component slice");
                        Err($crate::point::ComponentError::FrameCount { got })
                    }
                }
            }

            /// All six values in constructor order.
            pub fn components(&self) -> [f64; 6] {
                [
                    self.$lat(),
                    self.$lon(),
                    self.distance(),
                    self.$pm_lat(),
                    self.$pm_lon(),
                    self.radial_velocity(),
                ]
            }

            pub fn frame(
                &self,
            ) -> &$crate::frame::Frame<
                $crate::representation::SphericalRepresentation<RU>,
                $crate::differential::SphericalCoslatDifferential<DU>,
            > {
                &self.frame
            }

            pub fn data(&self) -> &$crate::representation::SphericalRepresentation<RU> {
                self.frame.data()
            }

            pub fn differential(&self) -> &$crate::differential::SphericalCoslatDifferential<DU> {
                self.frame.differential()
            }

            #[doc = concat!("`", stringify!($lat), "` component of the position.")]
            pub fn $lat(&self) -> f64 {
                self.frame.data().lat()
            }

            #[doc = concat!("`", stringify!($lon), "` component of the position.")]
            pub fn $lon(&self) -> f64 {
                self.frame.data().lon()
            }

            pub fn distance(&self) -> f64 {
                self.frame.data().distance()
            }

            #[doc = concat!("Proper motion in `", stringify!($lat), "`.")]
            pub fn $pm_lat(&self) -> f64 {
                self.frame.differential().d_lat()
            }

            #[doc = concat!("Proper motion in `", stringify!($lon), "`, including the cos(latitude) factor.")]
            pub fn $pm_lon(&self) -> f64 {
                self.frame.differential().d_lon_coslat()
            }

            pub fn radial_velocity(&self) -> f64 {
                self.frame.differential().d_distance()
            }

            pub fn $set_lat(&mut self, $lat: f64) {
                self.frame.data_mut().set_lat($lat);
            }

            pub fn $set_lon(&mut self, $lon: f64) {
                self.frame.data_mut().set_lon($lon);
            }

            pub fn set_distance(&mut self, distance: f64) {
                self.frame.data_mut().set_distance(distance);
            }

            pub fn $set_pm_lat(&mut self, $pm_lat: f64) {
                self.frame.differential_mut().set_d_lat($pm_lat);
            }

            pub fn $set_pm_lon(&mut self, $pm_lon: f64) {
                self.frame.differential_mut().set_d_lon_coslat($pm_lon);
            }

            pub fn set_radial_velocity(&mut self, radial_velocity: f64) {
                self.frame.differential_mut().set_d_distance(radial_velocity);
            }
        }

        impl<RU: $crate::units::AngleUnit, DU: $crate::units::AngleUnit>
            From<
                $crate::frame::Frame<
                    $crate::representation::SphericalRepresentation<RU>,
                    $crate::differential::SphericalCoslatDifferential<DU>,
                >,
            > for $name<RU, DU>
        {
            fn from(
                frame: $crate::frame::Frame<
                    $crate::representation::SphericalRepresentation<RU>,
                    $crate::differential::SphericalCoslatDifferential<DU>,
                >,
            ) -> Self {
                Self { frame }
            }
        }

        impl<RU: $crate::units::AngleUnit, DU: $crate::units::AngleUnit> From<$name<RU, DU>>
            for $crate::frame::Frame<
                $crate::representation::SphericalRepresentation<RU>,
                $crate::differential::SphericalCoslatDifferential<DU>,
            >
        {
            fn from(named: $name<RU, DU>) -> Self {
                named.frame
            }
        }

        impl<RU: $crate::units::AngleUnit, DU: $crate::units::AngleUnit> ::std::fmt::Display
            for $name<RU, DU>
        {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(
                    f,
                    concat!(
                        stringify!($name), "(",
                        stringify!($lat), "={}{ru}, ",
                        stringify!($lon), "={}{ru}, ",
                        "distance={}, ",
                        stringify!($pm_lat), "={}{du}, ",
                        stringify!($pm_lon), "={}{du}, ",
                        "radial_velocity={})"
                    ),
                    self.$lat(),
                    self.$lon(),
                    self.distance(),
                    self.$pm_lat(),
                    self.$pm_lon(),
                    self.radial_velocity(),
                    ru = RU::SYMBOL,
                    du = DU::SYMBOL,
                )
            }
        }
    };
}

pub(crate) use spherical_frame;
