//! Free-function accessors for the components of any coordinate.
//!
//! These mirror the methods of [`CoordinateSystem`], for call sites that read better as
//! `r(&c)` than `c.r()`. The Greek-letter names are aliases of the Latin ones and return
//! bit-identical results.
//!
//! The functions are not re-exported at the crate root since short names like `x` and `r`
//! collide easily with local bindings. Import them explicitly:
//!
//! ```rust
//! use unitful_coordinate_systems::components::{θ, φ, ρ};
//! use unitful_coordinate_systems::Cylindrical;
//! use uom::si::f64::{Angle, Length};
//! use uom::si::{angle::degree, length::meter};
//!
//! let c = Cylindrical::new(
//!     Length::new::<meter>(1.),
//!     Angle::new::<degree>(-90.),
//!     Length::new::<meter>(0.),
//! );
//! assert_eq!(ρ(&c), Length::new::<meter>(1.));
//! assert!(φ(&c) > Angle::new::<degree>(180.));
//! assert!(θ(&c) > Angle::new::<degree>(0.));
//! ```

use crate::coordinate_systems::CoordinateSystem;
use uom::si::f64::{Angle, Length};

/// The component along the X axis. See [`CoordinateSystem::x`].
#[must_use]
pub fn x<C: CoordinateSystem + ?Sized>(coordinate: &C) -> Length {
    coordinate.x()
}

/// The component along the Y axis. See [`CoordinateSystem::y`].
#[must_use]
pub fn y<C: CoordinateSystem + ?Sized>(coordinate: &C) -> Length {
    coordinate.y()
}

/// The component along the Z axis. See [`CoordinateSystem::z`].
#[must_use]
pub fn z<C: CoordinateSystem + ?Sized>(coordinate: &C) -> Length {
    coordinate.z()
}

/// The distance from the origin. See [`CoordinateSystem::r`].
#[must_use]
pub fn r<C: CoordinateSystem + ?Sized>(coordinate: &C) -> Length {
    coordinate.r()
}

/// The distance from the Z axis. See [`CoordinateSystem::rho`].
#[must_use]
pub fn rho<C: CoordinateSystem + ?Sized>(coordinate: &C) -> Length {
    coordinate.rho()
}

/// The azimuthal angle. See [`CoordinateSystem::phi`].
#[must_use]
pub fn phi<C: CoordinateSystem + ?Sized>(coordinate: &C) -> Angle {
    coordinate.phi()
}

/// The polar angle. See [`CoordinateSystem::theta`].
#[must_use]
pub fn theta<C: CoordinateSystem + ?Sized>(coordinate: &C) -> Angle {
    coordinate.theta()
}

pub use self::phi as φ;
pub use self::phi as ϕ;
pub use self::rho as ρ;
pub use self::theta as θ;
pub use self::theta as ϑ;
