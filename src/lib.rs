pub mod model;
pub mod remote;
pub mod session;
pub mod store;
pub mod token;
