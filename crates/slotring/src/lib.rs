/*! A fixed-capacity cyclic FIFO buffer over contiguous heap storage.

The buffer allocates one slot more than the requested capacity so that
the full and empty states can be told apart from the read and write
cursors alone, without an extra flag. Cursor arithmetic is factored out
into [`CyclicIndex`], a plain value type that wraps every operation
around the storage modulus.

The crate is `no_std` (plus `alloc`) and performs no internal
synchronization: a buffer is a single-threaded structure, and sharing
one across threads is the caller's concern.
*/

#![no_std]

extern crate alloc;

mod buffer;
mod cursor;
mod devlog;
mod iter;

pub use buffer::*;
pub use cursor::*;
pub use iter::*;

#[cfg(feature = "dev-log")]
pub use log as __log;
