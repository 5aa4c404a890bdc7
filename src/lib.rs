//! Caesar shift cipher over the printable ASCII range `' '..='~'`.
//!
//! ```
//! use printable_caesar::{decode, encode};
//!
//! let secret = encode("Hello, world!", 42).unwrap();
//! assert_eq!(decode(&secret, 42).unwrap(), "Hello, world!");
//! assert_eq!(encode("~", 1).unwrap(), " ");
//! ```
pub mod alphabet;
pub mod caesar;
pub mod error;
pub mod logger;
pub mod result;
pub mod service;

pub use caesar::{CaesarCodec, decode, encode};
pub use error::CipherError;
