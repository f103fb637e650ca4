pub mod deckfile;
pub mod errors;
pub mod models;
pub mod store;

pub use errors::*;
pub use models::*;
pub use store::*;
