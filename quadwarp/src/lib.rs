//! Quadwarp - least-squares quadratic point-set transforms.
//!
//! Fits a second-order polynomial mapping between two corresponding 2-D point
//! sets and applies it to new points:
//!
//! ```text
//! x' = a0 + a1*x + a2*y + a3*x² + a4*xy + a5*y²
//! y' = b0 + b1*x + b2*y + b3*x² + b4*xy + b5*y²
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use glam::DVec2;
//! use quadwarp::QuadraticTransform;
//!
//! let transform = QuadraticTransform::fit(&reference_points, &measured_points)?;
//! let mapped: Vec<DVec2> = transform.apply(&new_points);
//! ```
//!
//! Raw coefficient vectors are available through [`fit_quadratic`] and
//! [`apply_quadratic`].

mod basis;
mod config;
mod solver;
mod transform;

pub use basis::{quadratic_basis, NUM_TERMS};
pub use config::FitConfig;
pub use transform::{
    apply_quadratic, fit_quadratic, FitReport, QuadraticTransform, MIN_FIT_POINTS,
};

pub use common::{InvalidInput, Result};
