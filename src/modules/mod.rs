pub mod auth;
pub mod menu;
pub mod order;
pub mod user;

mod router;
pub use router::get_router;
