//! Index structures backing the guildstate registry.
//!
//! Two policies live here:
//! - [`BoundedIndex`] owns its values and never holds more than a fixed
//!   number of them, evicting the least recently used entry.
//! - [`WeakIndex`] owns nothing. It maps ids to entities whose strong
//!   handle lives in some other collection, and stops resolving them as
//!   soon as that collection lets go.

#![warn(missing_docs)]

mod bounded;
mod weak;

pub use bounded::BoundedIndex;
pub use weak::WeakIndex;
