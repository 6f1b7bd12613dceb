//! Prelude module for convenient imports.
//!
//! ```rust
//! use sluice::effect::prelude::*;
//! ```

pub use crate::effect::adapter::{wrap, Adapter, Capability, TryCall};
pub use crate::effect::combinators::{
    AndThen, FromAsync, FromFn, Instrument, Map, MapErr, Provide, Ready, TapErr,
};
pub use crate::effect::constructors::{
    fail, from_async, from_fn, from_result, from_validation, pure,
};
pub use crate::effect::ext::EffectExt;
pub use crate::effect::trait_def::Effect;
