//! Drive Audacity's `mod-script-pipe` from Rust.
//!
//! # Crate Structure
//!
//! - [`transport`]: Script pipe discovery and the owned channel pair
//! - [`frame`]: Command terminators, response delimiting, status markers
//! - [`client`]: Scripting client: raw calls, `GetInfo`, labels (behind `client` feature)

/// Re-export transport types.
pub mod transport {
    pub use audpipe_transport::*;
}

/// Re-export frame types.
pub mod frame {
    pub use audpipe_frame::*;
}

/// Re-export client types (requires `client` feature).
#[cfg(feature = "client")]
pub mod client {
    pub use audpipe_client::*;
}
