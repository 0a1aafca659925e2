//! Cartesian (x, y, z) coordinates.

use crate::coordinate_systems::CoordinateSystem;
use crate::scalar::{InvalidDimension, Scalar};
use crate::util::BoundedAngle;
use crate::Point3;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::Neg;
use uom::si::f64::{Angle, Length};
use uom::si::length::meter;
use uom::ConstZero;

#[cfg(any(test, feature = "approx"))]
use approx::{AbsDiffEq, RelativeEq};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point given by its offsets (x, y, z) along three perpendicular axes.
///
/// Every triple of lengths is a valid, and canonical, Cartesian coordinate.
///
/// # Examples
///
/// ```rust
/// use approx::assert_relative_eq;
/// use unitful_coordinate_systems::{Cartesian, CoordinateSystem};
/// use uom::si::f64::Length;
/// use uom::si::{angle::degree, length::meter};
///
/// let p = Cartesian::new(
///     Length::new::<meter>(3.),
///     Length::new::<meter>(4.),
///     Length::new::<meter>(0.),
/// );
/// assert_relative_eq!(p.r().get::<meter>(), 5.);
/// assert_relative_eq!(p.theta().get::<degree>(), 90.);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cartesian {
    x: Length,
    y: Length,
    z: Length,
}

impl Cartesian {
    /// Constructs a coordinate at the given (x, y, z).
    pub fn new(x: impl Into<Length>, y: impl Into<Length>, z: impl Into<Length>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }

    /// Constructs a coordinate from named components.
    pub fn build(Components { x, y, z }: Components) -> Self {
        Self { x, y, z }
    }

    /// Constructs a coordinate from values whose dimension is only known at runtime.
    ///
    /// All three components must be lengths. If one is not, returns [`InvalidDimension`] for
    /// the first one (in x, y, z order) that has the wrong dimension.
    ///
    /// ```rust
    /// use unitful_coordinate_systems::{Cartesian, Dimension};
    /// use uom::si::f64::{Angle, Length};
    /// use uom::si::{angle::degree, length::meter};
    ///
    /// let err = Cartesian::try_from_scalars(
    ///     Angle::new::<degree>(90.),
    ///     Length::new::<meter>(1.),
    ///     Length::new::<meter>(1.),
    /// )
    /// .unwrap_err();
    /// assert_eq!(err.component, "x");
    /// assert_eq!(err.found, Dimension::Angle);
    /// ```
    pub fn try_from_scalars(
        x: impl Into<Scalar>,
        y: impl Into<Scalar>,
        z: impl Into<Scalar>,
    ) -> Result<Self, InvalidDimension> {
        Ok(Self {
            x: InvalidDimension::check_length("Cartesian", "x", x)?,
            y: InvalidDimension::check_length("Cartesian", "y", y)?,
            z: InvalidDimension::check_length("Cartesian", "z", z)?,
        })
    }

    /// Constructs a coordinate at the origin.
    #[must_use]
    pub fn origin() -> Self {
        Self {
            x: Length::ZERO,
            y: Length::ZERO,
            z: Length::ZERO,
        }
    }

    /// Constructs a coordinate from a point whose components are in meters.
    #[must_use]
    pub fn from_nalgebra_point(p: nalgebra::Point3<f64>) -> Self {
        Self::new(
            Length::new::<meter>(p.x),
            Length::new::<meter>(p.y),
            Length::new::<meter>(p.z),
        )
    }

    /// Returns this coordinate as a point whose components are in meters.
    #[must_use]
    pub fn to_nalgebra_point(&self) -> nalgebra::Point3<f64> {
        Point3::new(
            self.x.get::<meter>(),
            self.y.get::<meter>(),
            self.z.get::<meter>(),
        )
    }

    /// Returns the stored components.
    #[must_use]
    pub fn components(&self) -> Components {
        Components {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }

    /// Returns true unless a component is NaN.
    ///
    /// Cartesian coordinates have no constrained components, so any real triple is canonical.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        !(self.x.is_nan() || self.y.is_nan() || self.z.is_nan())
    }

    /// Returns the canonical form of this coordinate, which is the coordinate itself.
    #[must_use]
    pub fn canonicalize(&self) -> Self {
        *self
    }

    /// Computes the distance between this point and the given point.
    #[must_use]
    pub fn distance_from(&self, other: &Cartesian) -> Length {
        (self.x - other.x)
            .hypot(self.y - other.y)
            .hypot(self.z - other.z)
    }

    /// Linearly interpolate between this coordinate and another coordinate.
    ///
    /// Specifically, returns `self * (1.0 - t) + rhs * t`, i.e., the linear blend of the
    /// two coordinates using the scalar value `t`.
    ///
    /// The value for `t` is not restricted to the range [0, 1].
    #[must_use]
    pub fn lerp(&self, rhs: &Self, t: f64) -> Self {
        Self::from_nalgebra_point(self.to_nalgebra_point().lerp(&rhs.to_nalgebra_point(), t))
    }
}

impl Default for Cartesian {
    fn default() -> Self {
        Self::origin()
    }
}

impl CoordinateSystem for Cartesian {
    fn x(&self) -> Length {
        self.x
    }

    fn y(&self) -> Length {
        self.y
    }

    fn z(&self) -> Length {
        self.z
    }

    // sqrt(a² + b²) over- and underflows outside ~1e±154 m; hypot does not
    fn r(&self) -> Length {
        self.rho().hypot(self.z)
    }

    fn rho(&self) -> Length {
        self.x.hypot(self.y)
    }

    fn phi(&self) -> Angle {
        if self.x == Length::ZERO && self.y == Length::ZERO {
            log::trace!("azimuth of {} is on the z axis; using 0", self);
            return Angle::ZERO;
        }
        BoundedAngle::new(self.y.atan2(self.x)).to_angle()
    }

    fn theta(&self) -> Angle {
        let rho = self.rho();
        if rho == Length::ZERO && self.z == Length::ZERO {
            log::trace!("polar angle of the origin is undefined; using 0");
            return Angle::ZERO;
        }
        rho.atan2(self.z)
    }
}

/// Argument type for [`Cartesian::build`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[must_use]
pub struct Components {
    pub x: Length,
    pub y: Length,
    pub z: Length,
}

impl From<Components> for [Length; 3] {
    fn from(c: Components) -> [Length; 3] {
        [c.x, c.y, c.z]
    }
}

impl TryFrom<[Scalar; 3]> for Cartesian {
    type Error = InvalidDimension;

    fn try_from([x, y, z]: [Scalar; 3]) -> Result<Self, Self::Error> {
        Self::try_from_scalars(x, y, z)
    }
}

impl Display for Cartesian {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x = {} m, y = {} m, z = {} m",
            self.x.get::<meter>(),
            self.y.get::<meter>(),
            self.z.get::<meter>()
        )
    }
}

impl Neg for Cartesian {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

#[cfg(any(test, feature = "approx"))]
impl AbsDiffEq<Self> for Cartesian {
    type Epsilon = Length;

    fn default_epsilon() -> Self::Epsilon {
        Length::new::<meter>(f64::default_epsilon())
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        // NOTE: this measures whether the absolute difference in any _one_ component is off by
        // more than epsilon, not whether the distance between the points is below epsilon.
        self.to_nalgebra_point()
            .abs_diff_eq(&other.to_nalgebra_point(), epsilon.get::<meter>())
    }
}

#[cfg(any(test, feature = "approx"))]
impl RelativeEq for Cartesian {
    fn default_max_relative() -> Self::Epsilon {
        Length::new::<meter>(Point3::default_max_relative())
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.to_nalgebra_point().relative_eq(
            &other.to_nalgebra_point(),
            epsilon.get::<meter>(),
            max_relative.get::<meter>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Cartesian, Components};
    use crate::coordinate_systems::CoordinateSystem;
    use crate::scalar::{Dimension, InvalidDimension, Scalar};
    use crate::Point3;
    use approx::assert_relative_eq;
    use rstest::rstest;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
    use uom::si::angle::radian;
    use uom::si::f64::{Angle, Length};
    use uom::si::length::{kilometer, meter};

    fn m(meters: f64) -> Length {
        Length::new::<meter>(meters)
    }
    fn rad(radians: f64) -> Angle {
        Angle::new::<radian>(radians)
    }

    #[rstest]
    #[case(Point3::new(500., 0., 0.), m(500.))]
    #[case(Point3::new(0., 300., 0.), m(300.))]
    #[case(Point3::new(0., 0., 200.), m(200.))]
    #[case(Point3::new(-500., 0., 0.), m(500.))]
    #[case(Point3::new(0., -300., 0.), m(300.))]
    #[case(Point3::new(0., 0., -200.), m(200.))]
    #[case(Point3::new(3., 4., 12.), m(13.))]
    fn distance_to_origin(#[case] point: Point3, #[case] expected: Length) {
        let coordinate = Cartesian::from_nalgebra_point(point);
        assert_relative_eq!(coordinate.r().get::<meter>(), expected.get::<meter>());
        assert_relative_eq!(
            coordinate.distance_from(&Cartesian::origin()).get::<meter>(),
            expected.get::<meter>()
        );
    }

    // (x, z) => (r, rho, theta), at magnitudes where squaring over- or underflows
    #[rstest]
    #[case(1e200, 1e200, [2f64.sqrt() * 1e200, 1e200, FRAC_PI_4])]
    #[case(1e-200, 0., [1e-200, 1e-200, FRAC_PI_2])]
    #[case(-1e-200, 1e-200, [2f64.sqrt() * 1e-200, 1e-200, FRAC_PI_4])]
    #[case(1e300, -1e300, [2f64.sqrt() * 1e300, 1e300, 3. * FRAC_PI_4])]
    fn extreme_magnitudes(#[case] x: f64, #[case] z: f64, #[case] expected: [f64; 3]) {
        let [r, rho, theta] = expected;
        let c = Cartesian::new(m(x), m(0.), m(z));
        assert_relative_eq!(c.r().get::<meter>(), r, max_relative = 1e-12);
        assert_relative_eq!(c.rho().get::<meter>(), rho, max_relative = 1e-12);
        assert_relative_eq!(c.theta().get::<radian>(), theta, max_relative = 1e-12);
        assert!(c.r().is_finite());
    }

    #[test]
    fn distance_between_far_points() {
        let a = Cartesian::new(m(1e200), m(1e200), m(0.));
        let b = Cartesian::new(m(-1e200), m(1e200), m(0.));
        assert_relative_eq!(a.distance_from(&b).get::<meter>(), 2e200, max_relative = 1e-12);
        let a = Cartesian::new(m(1e-200), m(0.), m(0.));
        assert_relative_eq!(
            a.distance_from(&Cartesian::origin()).get::<meter>(),
            1e-200,
            max_relative = 1e-12
        );
    }

    // (x, y, z) => (rho, phi, theta)
    #[rstest]
    #[case([1., 0., 0.], [1., 0., FRAC_PI_2])]
    #[case([0., 1., 0.], [1., FRAC_PI_2, FRAC_PI_2])]
    #[case([-1., 0., 0.], [1., PI, FRAC_PI_2])]
    #[case([0., -1., 0.], [1., 3. * FRAC_PI_2, FRAC_PI_2])]
    #[case([1., 1., 0.], [2f64.sqrt(), FRAC_PI_4, FRAC_PI_2])]
    #[case([1., 0., 1.], [1., 0., FRAC_PI_4])]
    #[case([0., 0., 1.], [0., 0., 0.])]
    #[case([0., 0., -1.], [0., 0., PI])]
    #[case([0., 0., 0.], [0., 0., 0.])]
    fn projections(#[case] xyz: [f64; 3], #[case] expected: [f64; 3]) {
        let [x, y, z] = xyz;
        let [rho, phi, theta] = expected;
        let c = Cartesian::new(m(x), m(y), m(z));
        assert_relative_eq!(c.rho().get::<meter>(), rho);
        assert_relative_eq!(c.phi().get::<radian>(), phi);
        assert_relative_eq!(c.theta().get::<radian>(), theta);
    }

    #[test]
    fn azimuth_is_never_negative() {
        let c = Cartesian::new(m(1.), m(-1e-12), m(0.));
        let phi = c.phi().get::<radian>();
        assert!((0.0..std::f64::consts::TAU).contains(&phi));
        assert_relative_eq!(phi, std::f64::consts::TAU, epsilon = 1e-9);
    }

    #[test]
    fn negative_zero_is_still_on_the_axis() {
        let c = Cartesian::new(m(-0.), m(0.), m(-0.));
        assert_eq!(c.phi(), rad(0.));
        assert_eq!(c.theta(), rad(0.));
    }

    #[test]
    fn units_are_preserved() {
        let c = Cartesian::new(
            Length::new::<kilometer>(1.),
            Length::new::<meter>(0.),
            Length::new::<meter>(0.),
        );
        assert_eq!(c.x(), m(1000.));
        assert_eq!(c.r(), m(1000.));
    }

    #[test]
    fn build_matches_new() {
        let built = Cartesian::build(Components {
            x: m(1.),
            y: m(2.),
            z: m(3.),
        });
        assert_eq!(built, Cartesian::new(m(1.), m(2.), m(3.)));
        assert_eq!(<[Length; 3]>::from(built.components()), [m(1.), m(2.), m(3.)]);
    }

    #[rstest]
    #[case([rad(1.).into(), m(1.).into(), m(1.).into()], "x", Dimension::Angle)]
    #[case([m(1.).into(), rad(1.).into(), m(1.).into()], "y", Dimension::Angle)]
    #[case([m(1.).into(), m(1.).into(), rad(1.).into()], "z", Dimension::Angle)]
    #[case([rad(1.).into(), rad(1.).into(), rad(1.).into()], "x", Dimension::Angle)]
    fn try_from_rejects_non_lengths(
        #[case] scalars: [Scalar; 3],
        #[case] component: &'static str,
        #[case] found: Dimension,
    ) {
        assert_eq!(
            Cartesian::try_from(scalars),
            Err(InvalidDimension {
                system: "Cartesian",
                component,
                expected: Dimension::Length,
                found,
            })
        );
    }

    #[test]
    fn try_from_accepts_lengths() {
        assert_eq!(
            Cartesian::try_from_scalars(m(1.), m(2.), m(3.)),
            Ok(Cartesian::new(m(1.), m(2.), m(3.)))
        );
    }

    #[test]
    fn nalgebra_roundtrip() {
        let p = Point3::new(1.5, -2., 1e6);
        assert_eq!(Cartesian::from_nalgebra_point(p).to_nalgebra_point(), p);
    }

    #[test]
    fn canonical_unless_nan() {
        assert!(Cartesian::new(m(-1.), m(2.), m(-3.)).is_canonical());
        assert!(!Cartesian::new(m(f64::NAN), m(2.), m(-3.)).is_canonical());
    }

    #[test]
    fn neg_and_distance() {
        let c = Cartesian::new(m(10.), m(-5.), m(3.5));
        assert_relative_eq!(-c, Cartesian::new(m(-10.), m(5.), m(-3.5)));
        assert_relative_eq!(
            c.distance_from(&-c).get::<meter>(),
            2. * c.r().get::<meter>()
        );
        assert_eq!(c.distance_from(&c), m(0.));
    }

    #[test]
    fn lerp_can_extrapolate() {
        let a = Cartesian::origin();
        let b = Cartesian::new(m(2.), m(4.), m(-6.));
        assert_relative_eq!(a.lerp(&b, 0.5), Cartesian::new(m(1.), m(2.), m(-3.)));
        assert_relative_eq!(a.lerp(&b, -1.), -b);
    }

    #[test]
    fn display() {
        insta::assert_snapshot!(Cartesian::new(m(1.), m(-2.5), m(0.)), @"x = 1 m, y = -2.5 m, z = 0 m");
    }
}
