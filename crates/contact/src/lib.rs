//! Contact form controller: the visitor's text, the outcome of the last
//! submission, and the guard against overlapping submissions.

mod command;
mod form;
mod in_flight;
mod transport;
mod types;

pub use command::*;
pub use form::*;
pub use in_flight::*;
pub use transport::*;
pub use types::*;
