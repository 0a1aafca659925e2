use uom::si::f64::{Angle, Length};

#[cfg(doc)]
use crate::{components, Coordinate};

/// A point expressed in one of the supported coordinate systems.
///
/// Every representation can produce every projection of the point, regardless of which
/// components it stores natively. For example, a [`Spherical`](crate::Spherical) coordinate
/// computes `x` as `r sin θ cos φ`, while a [`Cartesian`](crate::Cartesian) one just returns its
/// stored `x`.
///
/// The conventions are right-handed and follow the physics convention for spherical
/// coordinates:
///
/// - θ (theta) is the polar angle, measured from the positive Z axis, in [0°, 180°];
/// - φ (phi) is the azimuthal angle, measured in the XY plane from the positive X axis towards
///   the positive Y axis, in [0°, 360°).
///
/// Projections are always computed on the [canonical form](crate::Spherical::canonicalize) of
/// a coordinate, so `r` and `rho` are never negative and the angles are always in the ranges
/// above, even for non-canonical inputs.
///
/// Where an angle is ill-defined, the following conventions apply:
///
/// - at the origin, `theta` is 0;
/// - on the Z axis (including the origin), `phi` is 0.
///
/// This trait is sealed; the set of coordinate systems is closed. Use [`Coordinate`] when you
/// need to hold a coordinate in any of them, and the free functions in [`components`] if you
/// prefer `x(&c)` over `c.x()`.
pub trait CoordinateSystem: private::Sealed {
    /// The component along the X axis.
    fn x(&self) -> Length;

    /// The component along the Y axis.
    fn y(&self) -> Length;

    /// The component along the Z axis.
    fn z(&self) -> Length;

    /// The distance from the origin.
    #[doc(alias = "magnitude")]
    #[doc(alias = "norm")]
    fn r(&self) -> Length;

    /// The distance from the Z axis, ie, the magnitude of the projection onto the XY plane.
    fn rho(&self) -> Length;

    /// The angle between the positive X axis and the projection onto the XY plane.
    #[doc(alias = "azimuth")]
    fn phi(&self) -> Angle;

    /// The angle between the positive Z axis and the point.
    #[doc(alias = "polar")]
    #[doc(alias = "inclination")]
    fn theta(&self) -> Angle;
}

pub(crate) mod private {
    pub trait Sealed {}

    impl Sealed for crate::Cartesian {}
    impl Sealed for crate::Cylindrical {}
    impl Sealed for crate::Spherical {}
    impl Sealed for crate::Coordinate {}
    impl<C> Sealed for &C where C: Sealed + ?Sized {}
}

impl<C> CoordinateSystem for &C
where
    C: CoordinateSystem + ?Sized,
{
    fn x(&self) -> Length {
        (**self).x()
    }

    fn y(&self) -> Length {
        (**self).y()
    }

    fn z(&self) -> Length {
        (**self).z()
    }

    fn r(&self) -> Length {
        (**self).r()
    }

    fn rho(&self) -> Length {
        (**self).rho()
    }

    fn phi(&self) -> Angle {
        (**self).phi()
    }

    fn theta(&self) -> Angle {
        (**self).theta()
    }
}
