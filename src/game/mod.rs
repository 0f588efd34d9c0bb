pub mod hole;
pub use hole::*;

pub mod ledger;
pub use ledger::*;

pub mod roster;
pub use roster::*;

pub mod rules;
pub use rules::*;

pub mod showdown;
pub use showdown::*;

pub mod side;
pub use side::*;

pub mod split;
pub use split::*;

pub mod stake;
pub use stake::*;
