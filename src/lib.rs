//! This library provides unit-safe 3D coordinates in Cartesian, cylindrical, and spherical form,
//! and lossless conversions between them.
//!
//! Every component is a [`uom`] quantity, so a length can never be passed where an angle is
//! expected (and vice versa), and angles can be given in whatever unit is most natural at the
//! call site. The three representations are [`Cartesian`] (x, y, z), [`Cylindrical`] (ρ, φ, z),
//! and [`Spherical`] (r, θ, φ). All of them implement [`CoordinateSystem`], which gives access to
//! every projection of a point no matter how it is stored. [`Coordinate`] holds any one of them
//! when the representation is only known at runtime.
//!
//! Angles follow the physics convention: θ is the polar angle measured from the positive Z axis,
//! and φ is the azimuthal angle measured in the XY plane from the positive X axis. Values handed
//! out by accessors and conversions are always canonical (see [`Spherical::canonicalize`]).
//!
//! # Examples
//!
//! ```
//! use approx::assert_relative_eq;
//! use unitful_coordinate_systems::{Cartesian, CoordinateSystem, Cylindrical, Spherical};
//! use uom::si::f64::{Angle, Length};
//! use uom::si::{angle::degree, length::meter};
//!
//! // a point one meter along X and one meter up
//! let c = Cartesian::new(
//!     Length::new::<meter>(1.),
//!     Length::new::<meter>(0.),
//!     Length::new::<meter>(1.),
//! );
//!
//! let s = Spherical::from(c);
//! assert_relative_eq!(s.r().get::<meter>(), 2f64.sqrt());
//! assert_relative_eq!(s.theta().get::<degree>(), 45.);
//! assert_relative_eq!(s.phi().get::<degree>(), 0.);
//!
//! // and back again, through cylindrical
//! let cyl = Cylindrical::from(s);
//! assert_relative_eq!(
//!     Cartesian::from(cyl),
//!     c,
//!     epsilon = Length::new::<meter>(1e-12),
//! );
//! ```
//!
//! Components that only arrive at runtime go through [`Scalar`], which checks dimensions instead
//! of the type system:
//!
//! ```
//! use unitful_coordinate_systems::{Cylindrical, Scalar};
//! use uom::si::f64::{Angle, Length};
//! use uom::si::{angle::degree, length::meter};
//!
//! let length = Scalar::from(Length::new::<meter>(1.));
//! let angle = Scalar::from(Angle::new::<degree>(90.));
//!
//! assert!(Cylindrical::try_from([length, angle, length]).is_ok());
//! assert!(Cylindrical::try_from([angle, angle, length]).is_err());
//! ```

// the Greek aliases in `components`
#![allow(uncommon_codepoints, confusable_idents, mixed_script_confusables)]

mod coordinate_systems;
mod coordinates;
mod scalar;
mod util;

pub mod cartesian;
pub mod components;
pub mod cylindrical;
pub mod spherical;

pub(crate) type Point3 = nalgebra::Point3<f64>;

pub use cartesian::Cartesian;
pub use coordinate_systems::CoordinateSystem;
pub use coordinates::{to_cartesian, to_cylindrical, to_spherical, Coordinate};
pub use cylindrical::Cylindrical;
pub use scalar::{Dimension, InvalidDimension, Scalar};
pub use spherical::Spherical;
