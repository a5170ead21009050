//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_ALLOWED_ORIGINS, DEFAULT_DEBUG, DEFAULT_HOST, DEFAULT_PORT, SERVICE_DESCRIPTION,
  SERVICE_NAME,
};
pub use env::Config;
