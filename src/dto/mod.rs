//! Data transfer objects for the engine boundary.
//!
//! The UI/persistence layer speaks JSON; these types bridge it to the domain
//! model via `serde`. Degradation happens here, once: invalid pars fall back,
//! missing strokes become `None`, omitted rules take their documented
//! defaults. Nothing downstream re-checks any of it.

mod request;
mod response;

pub use request::*;
pub use response::*;
