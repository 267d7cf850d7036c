pub mod config;
pub mod logging;

pub mod agent;
pub mod declaration;
pub mod digest;
pub mod error;
pub mod loader;
pub mod manifest;
pub mod verify;

pub use agent::{Action, ChecksumAgent, Location};
pub use declaration::{Declaration, ValueFormat};
pub use error::{ChecksumError, Result};
pub use verify::{verify, verify_parameters, Outcome};
