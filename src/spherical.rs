//! Spherical (r, θ, φ) coordinates.

use crate::coordinate_systems::CoordinateSystem;
use crate::scalar::{InvalidDimension, Scalar};
use crate::util::BoundedAngle;
use std::f64::consts::{PI, TAU};
use std::fmt;
use std::fmt::{Display, Formatter};
use uom::si::angle::radian;
use uom::si::f64::{Angle, Length};
use uom::si::length::meter;
use uom::ConstZero;

#[cfg(any(test, feature = "approx"))]
use approx::{AbsDiffEq, RelativeEq};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point given by its distance r from the origin, its polar angle θ (theta) from the positive
/// Z axis, and its azimuthal angle φ (phi) from the positive X axis towards the positive Y axis.
///
/// This follows the physics convention for [spherical coordinates][sph]. Note the argument
/// order: θ comes _before_ φ. Prefer [`Spherical::build`] if that is easy to get wrong at your
/// call site.
///
/// The canonical form has r ≥ 0, θ in [0°, 180°], and φ in [0°, 360°). Construction does not
/// enforce this; see [`Spherical::canonicalize`]. The [`CoordinateSystem`] projections always
/// operate on the canonical form.
///
/// # Examples
///
/// ```rust
/// use approx::assert_relative_eq;
/// use unitful_coordinate_systems::{spherical::Components, Cartesian, Spherical};
/// use uom::si::f64::{Angle, Length};
/// use uom::si::{angle::degree, length::meter};
///
/// let zero = Length::new::<meter>(0.);
/// let unit = Length::new::<meter>(1.);
/// let s = Spherical::build(Components {
///     r: unit,
///     theta: Angle::new::<degree>(90.),
///     phi: Angle::new::<degree>(90.),
/// });
/// assert_relative_eq!(
///     Cartesian::from(s),
///     Cartesian::new(zero, unit, zero),
///     epsilon = Length::new::<meter>(1e-12),
/// );
/// ```
///
/// [sph]: https://en.wikipedia.org/wiki/Spherical_coordinate_system
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Spherical {
    r: Length,
    theta: Angle,
    phi: Angle,
}

impl Spherical {
    /// Constructs a coordinate at the given (r, θ, φ).
    pub fn new(r: impl Into<Length>, theta: impl Into<Angle>, phi: impl Into<Angle>) -> Self {
        Self {
            r: r.into(),
            theta: theta.into(),
            phi: phi.into(),
        }
    }

    /// Constructs a coordinate from named components.
    pub fn build(Components { r, theta, phi }: Components) -> Self {
        Self { r, theta, phi }
    }

    /// Constructs a coordinate from values whose dimension is only known at runtime.
    ///
    /// `r` must be a length and `theta` and `phi` must be angles. If not, returns
    /// [`InvalidDimension`] for the first mismatched component in (r, θ, φ) order.
    pub fn try_from_scalars(
        r: impl Into<Scalar>,
        theta: impl Into<Scalar>,
        phi: impl Into<Scalar>,
    ) -> Result<Self, InvalidDimension> {
        Ok(Self {
            r: InvalidDimension::check_length("Spherical", "r", r)?,
            theta: InvalidDimension::check_angle("Spherical", "theta", theta)?,
            phi: InvalidDimension::check_angle("Spherical", "phi", phi)?,
        })
    }

    /// Constructs a coordinate at the origin.
    #[must_use]
    pub fn origin() -> Self {
        Self {
            r: Length::ZERO,
            theta: Angle::ZERO,
            phi: Angle::ZERO,
        }
    }

    /// Returns the stored components, which are not necessarily canonical.
    #[must_use]
    pub fn components(&self) -> Components {
        Components {
            r: self.r,
            theta: self.theta,
            phi: self.phi,
        }
    }

    /// Returns true if r ≥ 0, θ is in [0°, 180°], and φ is in [0°, 360°).
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        let theta = self.theta.get::<radian>();
        self.r >= Length::ZERO && (0.0..=PI).contains(&theta) && BoundedAngle::is_bounded(self.phi)
    }

    /// Returns the canonical representation of the same point.
    ///
    /// - A negative r is flipped through the origin (θ becomes 180° - θ and φ turns by 180°).
    /// - θ is wrapped into [0°, 360°), and values past 180° are reflected back over the Z axis,
    ///   turning φ by 180°.
    /// - φ is wrapped into [0°, 360°).
    /// - At the origin, θ and φ are both 0. Elsewhere on the Z axis, φ is 0.
    ///
    /// Canonicalizing a canonical coordinate off the Z axis returns it unchanged.
    ///
    /// ```rust
    /// use approx::assert_relative_eq;
    /// use unitful_coordinate_systems::Spherical;
    /// use uom::si::f64::{Angle, Length};
    /// use uom::si::{angle::degree, length::meter};
    ///
    /// let s = Spherical::new(
    ///     Length::new::<meter>(2.),
    ///     Angle::new::<degree>(270.),
    ///     Angle::new::<degree>(0.),
    /// );
    /// assert_relative_eq!(
    ///     s.canonicalize(),
    ///     Spherical::new(
    ///         Length::new::<meter>(2.),
    ///         Angle::new::<degree>(90.),
    ///         Angle::new::<degree>(180.),
    ///     ),
    ///     epsilon = 1e-12,
    /// );
    /// ```
    #[must_use]
    pub fn canonicalize(&self) -> Self {
        let Self {
            mut r,
            mut theta,
            mut phi,
        } = *self;

        let half_turn = Angle::new::<radian>(PI);
        if r < Length::ZERO {
            r = -r;
            theta = half_turn - theta;
            phi += half_turn;
        }

        let mut polar = BoundedAngle::new(theta).get_bounded();
        if polar > PI {
            polar = TAU - polar;
            phi += half_turn;
        }

        let canonical = if r == Length::ZERO {
            Self {
                r,
                theta: Angle::ZERO,
                phi: Angle::ZERO,
            }
        } else if polar == 0. || polar == PI {
            Self {
                r,
                theta: Angle::new::<radian>(polar),
                phi: Angle::ZERO,
            }
        } else {
            Self {
                r,
                theta: Angle::new::<radian>(polar),
                phi: BoundedAngle::new(phi).to_angle(),
            }
        };

        if canonical != *self {
            log::trace!("canonicalized spherical coordinate {} to {}", self, canonical);
        }
        canonical
    }

    /// Linearly interpolate between the components of this coordinate and another coordinate.
    ///
    /// Each of r, θ, and φ is blended independently as `self * (1.0 - t) + rhs * t`. Angles are
    /// interpolated as given, without taking the shorter way around.
    ///
    /// The value for `t` is not restricted to the range [0, 1], and the result is not
    /// canonicalized.
    #[must_use]
    pub fn lerp(&self, rhs: &Self, t: f64) -> Self {
        Self {
            r: self.r * (1. - t) + rhs.r * t,
            theta: self.theta * (1. - t) + rhs.theta * t,
            phi: self.phi * (1. - t) + rhs.phi * t,
        }
    }
}

impl Default for Spherical {
    fn default() -> Self {
        Self::origin()
    }
}

impl CoordinateSystem for Spherical {
    fn x(&self) -> Length {
        let c = self.canonicalize();
        c.r * c.theta.sin().value * c.phi.cos().value
    }

    fn y(&self) -> Length {
        let c = self.canonicalize();
        c.r * c.theta.sin().value * c.phi.sin().value
    }

    fn z(&self) -> Length {
        let c = self.canonicalize();
        c.r * c.theta.cos().value
    }

    fn r(&self) -> Length {
        self.r.abs()
    }

    fn rho(&self) -> Length {
        let c = self.canonicalize();
        c.r * c.theta.sin().value
    }

    fn phi(&self) -> Angle {
        self.canonicalize().phi
    }

    fn theta(&self) -> Angle {
        self.canonicalize().theta
    }
}

/// Argument type for [`Spherical::build`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[must_use]
pub struct Components {
    /// The distance from the origin.
    pub r: Length,
    /// The polar angle from the positive Z axis.
    pub theta: Angle,
    /// The azimuthal angle from the positive X axis towards the positive Y axis.
    pub phi: Angle,
}

impl TryFrom<[Scalar; 3]> for Spherical {
    type Error = InvalidDimension;

    fn try_from([r, theta, phi]: [Scalar; 3]) -> Result<Self, Self::Error> {
        Self::try_from_scalars(r, theta, phi)
    }
}

impl Display for Spherical {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "r = {} m, θ = {} rad, φ = {} rad",
            self.r.get::<meter>(),
            self.theta.get::<radian>(),
            self.phi.get::<radian>()
        )
    }
}

#[cfg(any(test, feature = "approx"))]
impl AbsDiffEq<Self> for Spherical {
    /// Tolerance in meters for lengths and radians for angles.
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.r
            .get::<meter>()
            .abs_diff_eq(&other.r.get::<meter>(), epsilon)
            && BoundedAngle::new(self.theta).abs_diff_eq(&BoundedAngle::new(other.theta), epsilon)
            && BoundedAngle::new(self.phi).abs_diff_eq(&BoundedAngle::new(other.phi), epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl RelativeEq for Spherical {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.r
            .get::<meter>()
            .relative_eq(&other.r.get::<meter>(), epsilon, max_relative)
            && BoundedAngle::new(self.theta).relative_eq(
                &BoundedAngle::new(other.theta),
                epsilon,
                max_relative,
            )
            && BoundedAngle::new(self.phi).relative_eq(
                &BoundedAngle::new(other.phi),
                epsilon,
                max_relative,
            )
    }
}

#[cfg(test)]
mod tests {
    use super::{Components, Spherical};
    use crate::coordinate_systems::CoordinateSystem;
    use crate::scalar::{Dimension, InvalidDimension};
    use approx::assert_relative_eq;
    use quickcheck::quickcheck;
    use rstest::rstest;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};
    use uom::si::f64::{Angle, Length};
    use uom::si::{
        angle::{degree, radian},
        length::meter,
    };

    fn m(meters: f64) -> Length {
        Length::new::<meter>(meters)
    }
    fn d(degrees: f64) -> Angle {
        Angle::new::<degree>(degrees)
    }
    fn rad(radians: f64) -> Angle {
        Angle::new::<radian>(radians)
    }

    impl quickcheck::Arbitrary for Spherical {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            // quickcheck will give us awkward f64 values -- we ignore those
            let mut finite = || loop {
                match f64::arbitrary(g) {
                    0. => break 0.,
                    f if f.is_normal() => break f,
                    _ => {}
                }
            };
            // deliberately not canonical; every component may be out of range
            Self::new(
                m(finite() % 1e6),
                rad(finite() % 100.),
                rad(finite() % 100.),
            )
        }
    }

    // (r, θ°, φ°) => (x, y, z, rho)
    #[rstest]
    #[case(1., 90., 0., [1., 0., 0., 1.])]
    #[case(1., 90., 90., [0., 1., 0., 1.])]
    #[case(1., 0., 0., [0., 0., 1., 0.])]
    #[case(1., 180., 0., [0., 0., -1., 0.])]
    #[case(2., 45., 180., [-(2f64.sqrt()), 0., 2f64.sqrt(), 2f64.sqrt()])]
    #[case(0., 0., 0., [0., 0., 0., 0.])]
    fn projections(
        #[case] r: f64,
        #[case] theta: f64,
        #[case] phi: f64,
        #[case] expected: [f64; 4],
    ) {
        let [x, y, z, rho] = expected;
        let s = Spherical::new(m(r), d(theta), d(phi));
        assert_relative_eq!(s.x().get::<meter>(), x, epsilon = 1e-12);
        assert_relative_eq!(s.y().get::<meter>(), y, epsilon = 1e-12);
        assert_relative_eq!(s.z().get::<meter>(), z, epsilon = 1e-12);
        assert_relative_eq!(s.rho().get::<meter>(), rho, epsilon = 1e-12);
        assert_eq!(s.r(), m(r));
    }

    #[test]
    fn components_roundtrip() {
        let components = Components {
            r: m(1.),
            theta: d(30.),
            phi: d(60.),
        };
        assert_eq!(Spherical::build(components).components(), components);
        assert_eq!(
            Spherical::build(components),
            Spherical::new(m(1.), d(30.), d(60.))
        );
    }

    #[rstest]
    #[case(Spherical::new(m(1.), rad(0.), rad(0.)), true)]
    #[case(Spherical::new(m(1.), rad(PI), rad(6.)), true)]
    #[case(Spherical::new(m(0.), rad(1.), rad(1.)), true)]
    #[case(Spherical::new(m(-1.), rad(1.), rad(1.)), false)]
    #[case(Spherical::new(m(1.), rad(-0.1), rad(1.)), false)]
    #[case(Spherical::new(m(1.), rad(3.2), rad(1.)), false)]
    #[case(Spherical::new(m(1.), rad(1.), Angle::FULL_TURN), false)]
    #[case(Spherical::new(m(1.), rad(f64::NAN), rad(1.)), false)]
    fn canonical_form_check(#[case] s: Spherical, #[case] expected: bool) {
        assert_eq!(s.is_canonical(), expected);
    }

    #[rstest]
    #[case(Spherical::new(m(-1.), d(30.), d(10.)), Spherical::new(m(1.), d(150.), d(190.)))]
    #[case(Spherical::new(m(1.), d(-30.), d(10.)), Spherical::new(m(1.), d(30.), d(190.)))]
    #[case(Spherical::new(m(1.), d(200.), d(270.)), Spherical::new(m(1.), d(160.), d(90.)))]
    #[case(Spherical::new(m(1.), d(400.), d(-10.)), Spherical::new(m(1.), d(40.), d(350.)))]
    #[case(Spherical::new(m(0.), d(12.), d(34.)), Spherical::new(m(0.), d(0.), d(0.)))]
    #[case(Spherical::new(m(3.), d(0.), d(34.)), Spherical::new(m(3.), d(0.), d(0.)))]
    #[case(Spherical::new(m(-3.), d(0.), d(34.)), Spherical::new(m(3.), d(180.), d(0.)))]
    fn canonicalize(#[case] input: Spherical, #[case] expected: Spherical) {
        let canonical = input.canonicalize();
        assert!(canonical.is_canonical());
        assert_relative_eq!(canonical, expected, epsilon = 1e-12);
    }

    #[test]
    fn canonicalize_is_identity_on_canonical() {
        let s = Spherical::new(m(2.5), rad(1.234), rad(5.678));
        assert_eq!(s.canonicalize(), s);
    }

    fn same_point(a: Spherical, b: Spherical) {
        let [ax, ay, az] = [a.x(), a.y(), a.z()].map(|l| l.get::<meter>());
        let [bx, by, bz] = [b.x(), b.y(), b.z()].map(|l| l.get::<meter>());
        // the raw formulas, evaluated on the non-canonical components
        let Components { r, theta, phi } = b.components();
        let (r, theta, phi) = (r.get::<meter>(), theta.get::<radian>(), phi.get::<radian>());
        let tolerance = 1e-9 * r.abs();
        assert_relative_eq!(ax, bx, epsilon = tolerance);
        assert_relative_eq!(ay, by, epsilon = tolerance);
        assert_relative_eq!(az, bz, epsilon = tolerance);
        assert_relative_eq!(ax, r * theta.sin() * phi.cos(), epsilon = tolerance);
        assert_relative_eq!(ay, r * theta.sin() * phi.sin(), epsilon = tolerance);
        assert_relative_eq!(az, r * theta.cos(), epsilon = tolerance);
    }

    quickcheck! {
        fn canonicalize_preserves_the_point(s: Spherical) -> () {
            let canonical = s.canonicalize();
            assert!(canonical.is_canonical(), "{s} canonicalized to {canonical}");
            same_point(canonical, s);
        }

        fn projections_are_in_range(s: Spherical) -> () {
            assert!(s.r() >= m(0.));
            assert!(s.rho() >= m(0.));
            assert!((0.0..=PI).contains(&s.theta().get::<radian>()));
            assert!((0.0..TAU).contains(&s.phi().get::<radian>()));
        }
    }

    #[test]
    fn try_from_scalars_checks_every_slot() {
        assert_eq!(
            Spherical::try_from_scalars(m(1.), d(1.), d(1.)),
            Ok(Spherical::new(m(1.), d(1.), d(1.)))
        );
        assert_eq!(
            Spherical::try_from_scalars(d(1.), d(1.), d(1.)),
            Err(InvalidDimension {
                system: "Spherical",
                component: "r",
                expected: Dimension::Length,
                found: Dimension::Angle,
            })
        );
        assert_eq!(
            Spherical::try_from_scalars(m(1.), m(1.), d(1.)),
            Err(InvalidDimension {
                system: "Spherical",
                component: "theta",
                expected: Dimension::Angle,
                found: Dimension::Length,
            })
        );
        assert_eq!(
            Spherical::try_from([m(1.).into(), d(1.).into(), m(1.).into()]),
            Err(InvalidDimension {
                system: "Spherical",
                component: "phi",
                expected: Dimension::Angle,
                found: Dimension::Length,
            })
        );
    }

    #[test]
    fn lerp_blends_components() {
        let a = Spherical::new(m(1.), d(0.), d(0.));
        let b = Spherical::new(m(3.), d(90.), d(180.));
        assert_relative_eq!(
            a.lerp(&b, 0.5),
            Spherical::new(m(2.), d(45.), d(90.)),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            a.lerp(&b, 2.).theta().get::<radian>(),
            PI,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            a.lerp(&b, 1.).theta().get::<radian>(),
            FRAC_PI_2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn display() {
        insta::assert_snapshot!(Spherical::new(m(2.), rad(0.5), rad(1.25)), @"r = 2 m, θ = 0.5 rad, φ = 1.25 rad");
    }
}
