//! Embedded word list
//!
//! Built-in words compiled into the binary at build time.

// Include the generated blob from the build script
include!(concat!(env!("OUT_DIR"), "/builtin.rs"));
