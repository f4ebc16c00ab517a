//! # Exact-Form Rendering Module
//!
//! Recognizes two families of "nice" values hiding behind decimal noise
//! and renders them symbolically:
//!
//! - angles that are rational multiples of pi (`2/3 pi` instead of
//!   `2.0943951023931953`), via bounded-denominator rational
//!   approximation ([`pi`]);
//! - radii whose squares are integers (`3 sqrt(2)` instead of
//!   `4.242640687119285`), via prime factorization ([`radical`]).
//!
//! Both are purely presentational: they never alter a stored value, only
//! its displayed form. The coordinate-conversion routines build their
//! output strings exclusively from these functions.

pub mod pi;
pub mod radical;

pub use pi::{reduce_angle, render_pi_multiple, render_pi_multiple_with};
pub use radical::{factorize, simplify_radical};
