//! Embedded word lists
//!
//! Word lists compiled into the binary at build time. Entries are the raw
//! list spellings (lower case, accents intact); the bank normalizes them.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/targets.rs"));
include!(concat!(env!("OUT_DIR"), "/valid_guesses.rs"));
include!(concat!(env!("OUT_DIR"), "/tutorial.rs"));
