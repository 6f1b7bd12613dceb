//! Deferred computations that report failure as a value.
//!
//! An [`Effect`] is inert until it is run. Running it yields exactly one
//! `Result`, and dropping it (or its future) before that point cancels the
//! work. The [`adapter`] module turns an arbitrary fallible, possibly
//! panicking capability into such an effect.
//!
//! ```rust
//! use sluice::effect::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let effect = pure::<_, String, ()>(5)
//!     .map(|x| x * 2)
//!     .and_then(|x| pure(x + 10));
//!
//! assert_eq!(effect.execute(&()).await, Ok(20));
//! # });
//! ```

pub mod adapter;
pub mod combinators;
pub mod constructors;
pub mod ext;
pub mod prelude;
mod trait_def;

pub use trait_def::Effect;

pub use ext::EffectExt;

pub use adapter::{wrap, Adapter, Capability, TryCall};

pub use combinators::{
    AndThen, FromAsync, FromFn, Instrument, Map, MapErr, Provide, Ready, TapErr,
};

pub use constructors::{fail, from_async, from_fn, from_result, from_validation, pure};
