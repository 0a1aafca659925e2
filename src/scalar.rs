use std::fmt;
use std::fmt::{Display, Formatter};
use thiserror::Error;
use uom::si::angle::radian;
use uom::si::f64::{Angle, Length, Ratio};
use uom::si::length::meter;
use uom::si::ratio::ratio;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(doc)]
use crate::{Cartesian, Cylindrical, Spherical};

/// The physical dimension of a [`Scalar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Dimension {
    Length,
    Angle,
    Dimensionless,
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Length => write!(f, "a length"),
            Dimension::Angle => write!(f, "an angle"),
            Dimension::Dimensionless => write!(f, "a dimensionless ratio"),
        }
    }
}

/// A dimensioned value whose dimension is only known at runtime.
///
/// The typed constructors ([`Cartesian::new`] and friends) take [`Length`] and [`Angle`]
/// directly, so the compiler rejects a value of the wrong dimension. `Scalar` exists for the
/// cases where that isn't possible, such as values read from a config file, where the dimension
/// is data rather than type. Constructors like [`Cartesian::try_from_scalars`] then check the
/// dimension of each component at runtime and return [`InvalidDimension`] on mismatch.
///
/// # Examples
///
/// ```rust
/// use unitful_coordinate_systems::{Dimension, Scalar};
/// use uom::si::f64::{Angle, Length};
/// use uom::si::{angle::degree, length::meter};
///
/// let length = Scalar::from(Length::new::<meter>(2.));
/// let angle = Scalar::from(Angle::new::<degree>(90.));
/// assert_eq!(length.dimension(), Dimension::Length);
/// assert_eq!(angle.dimension(), Dimension::Angle);
/// assert_eq!(angle.into_length(), Err(Dimension::Angle));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Scalar {
    Length(Length),
    Angle(Angle),
    Dimensionless(Ratio),
}

impl Scalar {
    /// Returns the physical dimension of this value.
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        match self {
            Scalar::Length(_) => Dimension::Length,
            Scalar::Angle(_) => Dimension::Angle,
            Scalar::Dimensionless(_) => Dimension::Dimensionless,
        }
    }

    /// Returns the contained [`Length`], or the dimension actually held if it isn't one.
    pub fn into_length(self) -> Result<Length, Dimension> {
        match self {
            Scalar::Length(length) => Ok(length),
            other => Err(other.dimension()),
        }
    }

    /// Returns the contained [`Angle`], or the dimension actually held if it isn't one.
    pub fn into_angle(self) -> Result<Angle, Dimension> {
        match self {
            Scalar::Angle(angle) => Ok(angle),
            other => Err(other.dimension()),
        }
    }
}

impl From<Length> for Scalar {
    fn from(length: Length) -> Self {
        Scalar::Length(length)
    }
}

impl From<Angle> for Scalar {
    fn from(angle: Angle) -> Self {
        Scalar::Angle(angle)
    }
}

impl From<Ratio> for Scalar {
    fn from(value: Ratio) -> Self {
        Scalar::Dimensionless(value)
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Length(length) => write!(f, "{} m", length.get::<meter>()),
            Scalar::Angle(angle) => write!(f, "{} rad", angle.get::<radian>()),
            Scalar::Dimensionless(value) => write!(f, "{}", value.get::<ratio>()),
        }
    }
}

/// Returned when a coordinate component is given a [`Scalar`] of the wrong physical dimension.
///
/// For example, passing an [`Angle`] as the `x` of a [`Cartesian`] coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{component} of a {system} coordinate must be {expected}, found {found}")]
pub struct InvalidDimension {
    /// The coordinate representation being constructed (eg, `"Cartesian"`).
    pub system: &'static str,
    /// The name of the offending component (eg, `"x"` or `"phi"`).
    pub component: &'static str,
    /// The dimension that component requires.
    pub expected: Dimension,
    /// The dimension that was supplied.
    pub found: Dimension,
}

impl InvalidDimension {
    pub(crate) fn check_length(
        system: &'static str,
        component: &'static str,
        value: impl Into<Scalar>,
    ) -> Result<Length, Self> {
        value.into().into_length().map_err(|found| {
            let err = Self {
                system,
                component,
                expected: Dimension::Length,
                found,
            };
            log::debug!("rejected coordinate component: {err}");
            err
        })
    }

    pub(crate) fn check_angle(
        system: &'static str,
        component: &'static str,
        value: impl Into<Scalar>,
    ) -> Result<Angle, Self> {
        value.into().into_angle().map_err(|found| {
            let err = Self {
                system,
                component,
                expected: Dimension::Angle,
                found,
            };
            log::debug!("rejected coordinate component: {err}");
            err
        })
    }
}
