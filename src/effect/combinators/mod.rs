//! Concrete types returned by the effect constructors and combinators.
//!
//! Most code never names these; it returns `impl Effect<...>` instead.

mod and_then;
mod instrument;
mod lift;
mod map;
mod provide;
mod ready;

pub use and_then::AndThen;
pub use instrument::Instrument;
pub use lift::{FromAsync, FromFn};
pub use map::{Map, MapErr, TapErr};
pub use provide::Provide;
pub use ready::Ready;
