//! Seeded random sources for trial and observation-time generation.
//!
//! Every generator in this crate takes `&mut R` with `R: rand::Rng`.
//! Pass [`create_rng`] with a fixed seed for a reproducible sequence, or
//! any other `rand` generator in production. Both helpers come from
//! `u_numflow::random`.
//!
//! # Examples
//!
//! ```
//! use u_workstudy::psychophysics::FittsPlan;
//! use u_workstudy::random::create_rng;
//!
//! let plan = FittsPlan::new(&[128.0, 256.0], &[16.0, 32.0]).unwrap();
//! let a = plan.generate(&mut create_rng(7));
//! let b = plan.generate(&mut create_rng(7));
//! assert_eq!(a, b);
//! ```

pub use u_numflow::random::{create_rng, shuffle};
