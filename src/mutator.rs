//! Mutator capability.
//!
//! An injectable hook that may rewrite protocol fields before a segment is
//! packed for transmission (or after it was unpacked). Attachment is modeled
//! as an `Option` at the call site; a capability that does not override a
//! hook gets the no-op default, so "no callback" is always a valid state.

use crate::error::Error;
use crate::tcp::TcpSegment;

/// Hook set applied to protocol structures.
///
/// Implementations override only the hooks they care about; every default
/// succeeds without touching anything.
pub trait Mutator {
    /// Rewrite a TCP segment in place.
    fn mutate_tcp(&self, _tcp: &mut TcpSegment) -> Result<(), Error> {
        Ok(())
    }
}
