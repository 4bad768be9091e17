pub mod class;
pub mod health;
pub mod reservation;
pub mod session;
pub mod v1;
