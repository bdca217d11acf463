//! Database entities.
//!
//! We use SeaORM and target PostgreSQL (production) and SQLite (development).
//!
//! Entities with a natural key carry a `natural_key` column holding the
//! comparison key computed by [`skylog::normalize`]. Case is folded
//! before the value reaches the database, so lookups and unique indexes
//! behave the same on every backend and for non-ASCII text. Parent
//! existence is checked by the managers before anything is staged.

pub mod address;
pub mod drone;
pub mod drone_model;
pub mod flight;
pub mod flight_property;
pub mod flight_property_value;
pub mod location;
pub mod maintainer;
pub mod maintenance_record;
pub mod manufacturer;
pub mod operator;
pub mod user;
