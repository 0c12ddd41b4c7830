pub mod claims;
pub mod codec;
pub mod errors;

pub use claims::Claims;
pub use claims::SubjectClaims;
pub use claims::VerifiedClaims;
pub use codec::extract_from_header;
pub use codec::TokenCodec;
pub use codec::ValidityWindow;
pub use errors::TokenError;
