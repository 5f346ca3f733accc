//! API Routes
//!
//! Route handlers organized by functionality.

pub mod bookings;
pub mod health;
pub mod stats;
