pub mod admin;
pub mod bookings;
pub mod gallery;
pub mod memberships;
pub mod products;
pub mod schedule;
pub mod services;
pub mod stylists;
