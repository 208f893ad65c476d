//! Pure data structures: the user entity, the snapshot the store publishes and the intents
//! the view may dispatch.

pub mod intent;
pub mod snapshot;
pub mod user;

pub use intent::*;
pub use snapshot::*;
pub use user::*;
