//! JWT token encoding, decoding, and claims management.

pub mod claims;
pub mod decoder;
pub mod encoder;
pub mod service;

pub use claims::Claims;
pub use decoder::JwtDecoder;
pub use encoder::JwtEncoder;
pub use service::TokenService;

/// The single message every rejected token produces.
pub const INVALID_TOKEN: &str = "Invalid or missing token";
