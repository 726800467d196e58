//! Pure data structures. [`Product`] and [`Cart`] implement the
//! [`ActorEntity`](crate::framework::ActorEntity) trait; everything else here is
//! plain values and side-effect-free derivations.

pub mod cart;
pub mod category;
pub mod form;
pub mod product;
pub mod summary;

pub use cart::*;
pub use category::*;
pub use form::*;
pub use product::*;
pub use summary::*;
