use crate::coordinate_systems::CoordinateSystem;
use crate::{Cartesian, Cylindrical, Spherical};
use std::fmt;
use std::fmt::{Display, Formatter};
use uom::si::f64::{Angle, Length};

#[cfg(any(test, feature = "approx"))]
use approx::{AbsDiffEq, RelativeEq};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in any of the supported coordinate systems.
///
/// Use this when the representation is only known at runtime, or when coordinates in different
/// representations need to live side by side. Each variant keeps the components it was built
/// from; nothing is converted until a projection or conversion is asked for.
///
/// # Examples
///
/// ```rust
/// use approx::assert_relative_eq;
/// use unitful_coordinate_systems::{components::r, Cartesian, Coordinate, Spherical};
/// use uom::si::f64::{Angle, Length};
/// use uom::si::{angle::degree, length::meter};
///
/// let points = [
///     Coordinate::from(Cartesian::new(
///         Length::new::<meter>(3.),
///         Length::new::<meter>(4.),
///         Length::new::<meter>(0.),
///     )),
///     Coordinate::from(Spherical::new(
///         Length::new::<meter>(5.),
///         Angle::new::<degree>(10.),
///         Angle::new::<degree>(20.),
///     )),
/// ];
/// for p in &points {
///     assert_relative_eq!(r(p).get::<meter>(), 5.);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Coordinate {
    Cartesian(Cartesian),
    Cylindrical(Cylindrical),
    Spherical(Spherical),
}

impl Coordinate {
    /// Returns true if the contained coordinate is in canonical form.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        match self {
            Coordinate::Cartesian(c) => c.is_canonical(),
            Coordinate::Cylindrical(c) => c.is_canonical(),
            Coordinate::Spherical(c) => c.is_canonical(),
        }
    }

    /// Canonicalizes the contained coordinate, keeping its representation.
    #[must_use]
    pub fn canonicalize(&self) -> Self {
        match self {
            Coordinate::Cartesian(c) => Coordinate::Cartesian(c.canonicalize()),
            Coordinate::Cylindrical(c) => Coordinate::Cylindrical(c.canonicalize()),
            Coordinate::Spherical(c) => Coordinate::Spherical(c.canonicalize()),
        }
    }

    /// Converts this coordinate into [`Cartesian`] form. See [`to_cartesian`].
    #[must_use]
    pub fn to_cartesian(&self) -> Cartesian {
        to_cartesian(self)
    }

    /// Converts this coordinate into [`Cylindrical`] form. See [`to_cylindrical`].
    #[must_use]
    pub fn to_cylindrical(&self) -> Cylindrical {
        to_cylindrical(self)
    }

    /// Converts this coordinate into [`Spherical`] form. See [`to_spherical`].
    #[must_use]
    pub fn to_spherical(&self) -> Spherical {
        to_spherical(self)
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Coordinate::Cartesian(Cartesian::origin())
    }
}

impl CoordinateSystem for Coordinate {
    fn x(&self) -> Length {
        match self {
            Coordinate::Cartesian(c) => c.x(),
            Coordinate::Cylindrical(c) => c.x(),
            Coordinate::Spherical(c) => c.x(),
        }
    }

    fn y(&self) -> Length {
        match self {
            Coordinate::Cartesian(c) => c.y(),
            Coordinate::Cylindrical(c) => c.y(),
            Coordinate::Spherical(c) => c.y(),
        }
    }

    fn z(&self) -> Length {
        match self {
            Coordinate::Cartesian(c) => c.z(),
            Coordinate::Cylindrical(c) => c.z(),
            Coordinate::Spherical(c) => c.z(),
        }
    }

    fn r(&self) -> Length {
        match self {
            Coordinate::Cartesian(c) => c.r(),
            Coordinate::Cylindrical(c) => c.r(),
            Coordinate::Spherical(c) => c.r(),
        }
    }

    fn rho(&self) -> Length {
        match self {
            Coordinate::Cartesian(c) => c.rho(),
            Coordinate::Cylindrical(c) => c.rho(),
            Coordinate::Spherical(c) => c.rho(),
        }
    }

    fn phi(&self) -> Angle {
        match self {
            Coordinate::Cartesian(c) => c.phi(),
            Coordinate::Cylindrical(c) => c.phi(),
            Coordinate::Spherical(c) => c.phi(),
        }
    }

    fn theta(&self) -> Angle {
        match self {
            Coordinate::Cartesian(c) => c.theta(),
            Coordinate::Cylindrical(c) => c.theta(),
            Coordinate::Spherical(c) => c.theta(),
        }
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Cartesian(c) => write!(f, "cartesian ({c})"),
            Coordinate::Cylindrical(c) => write!(f, "cylindrical ({c})"),
            Coordinate::Spherical(c) => write!(f, "spherical ({c})"),
        }
    }
}

/// Approximate equality of two `Coordinate`s compares the points they describe, regardless of
/// representation.
#[cfg(any(test, feature = "approx"))]
impl AbsDiffEq<Self> for Coordinate {
    type Epsilon = Length;

    fn default_epsilon() -> Self::Epsilon {
        Cartesian::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.to_cartesian()
            .abs_diff_eq(&other.to_cartesian(), epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl RelativeEq for Coordinate {
    fn default_max_relative() -> Self::Epsilon {
        Cartesian::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.to_cartesian()
            .relative_eq(&other.to_cartesian(), epsilon, max_relative)
    }
}

/// Converts any coordinate into [`Cartesian`] form.
///
/// ```rust
/// use approx::assert_relative_eq;
/// use unitful_coordinate_systems::{to_cartesian, Cartesian, Spherical};
/// use uom::si::f64::{Angle, Length};
/// use uom::si::{angle::degree, length::meter};
///
/// let zero = Length::new::<meter>(0.);
/// let unit = Length::new::<meter>(1.);
/// let s = Spherical::new(unit, Angle::new::<degree>(90.), Angle::new::<degree>(90.));
/// assert_relative_eq!(
///     to_cartesian(&s),
///     Cartesian::new(zero, unit, zero),
///     epsilon = Length::new::<meter>(1e-12),
/// );
/// ```
#[must_use]
pub fn to_cartesian<C>(coordinate: &C) -> Cartesian
where
    C: CoordinateSystem + ?Sized,
{
    Cartesian::new(coordinate.x(), coordinate.y(), coordinate.z())
}

/// Converts any coordinate into canonical [`Cylindrical`] form.
#[must_use]
pub fn to_cylindrical<C>(coordinate: &C) -> Cylindrical
where
    C: CoordinateSystem + ?Sized,
{
    Cylindrical::new(coordinate.rho(), coordinate.phi(), coordinate.z())
}

/// Converts any coordinate into canonical [`Spherical`] form.
#[must_use]
pub fn to_spherical<C>(coordinate: &C) -> Spherical
where
    C: CoordinateSystem + ?Sized,
{
    Spherical::new(coordinate.r(), coordinate.theta(), coordinate.phi())
}

macro_rules! conversions {
    ($($from:ident => $to:ident via $convert:ident;)+) => {
        $(
            impl From<$from> for $to {
                fn from(coordinate: $from) -> Self {
                    $convert(&coordinate)
                }
            }
        )+
    };
}

conversions! {
    Cylindrical => Cartesian via to_cartesian;
    Spherical => Cartesian via to_cartesian;
    Coordinate => Cartesian via to_cartesian;
    Cartesian => Cylindrical via to_cylindrical;
    Spherical => Cylindrical via to_cylindrical;
    Coordinate => Cylindrical via to_cylindrical;
    Cartesian => Spherical via to_spherical;
    Cylindrical => Spherical via to_spherical;
    Coordinate => Spherical via to_spherical;
}

macro_rules! variants {
    ($($variant:ident),+) => {
        $(
            impl From<$variant> for Coordinate {
                fn from(coordinate: $variant) -> Self {
                    Coordinate::$variant(coordinate)
                }
            }
        )+
    };
}

variants!(Cartesian, Cylindrical, Spherical);

/// Constructs a coordinate from named components, picking the representation from the names.
///
/// ```rust
/// use unitful_coordinate_systems::{coordinate, Cartesian, Cylindrical, Spherical};
/// use uom::si::f64::{Angle, Length};
/// use uom::si::{angle::degree, length::meter};
///
/// let m = Length::new::<meter>(1.);
/// let deg = Angle::new::<degree>(30.);
///
/// let c: Cartesian = coordinate!(x = m, y = m, z = -m);
/// let cyl: Cylindrical = coordinate!(rho = m, phi = deg, z = m);
/// let s: Spherical = coordinate!(r = m, theta = deg, phi = deg);
/// ```
#[macro_export]
macro_rules! coordinate {
    (x = $x:expr, y = $y:expr, z = $z:expr $(,)?) => {
        $crate::Cartesian::build($crate::cartesian::Components {
            x: $x.into(),
            y: $y.into(),
            z: $z.into(),
        })
    };
    (rho = $rho:expr, phi = $phi:expr, z = $z:expr $(,)?) => {
        $crate::Cylindrical::build($crate::cylindrical::Components {
            rho: $rho.into(),
            phi: $phi.into(),
            z: $z.into(),
        })
    };
    (r = $r:expr, theta = $theta:expr, phi = $phi:expr $(,)?) => {
        $crate::Spherical::build($crate::spherical::Components {
            r: $r.into(),
            theta: $theta.into(),
            phi: $phi.into(),
        })
    };
}
