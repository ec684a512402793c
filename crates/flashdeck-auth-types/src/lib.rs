//! Authentication types for the Flashdeck HTTP surface.
//!
//! Provides the [`credentials::BasicCredentials`] extractor that parses the
//! `Authorization: Basic` header. Credential *resolution* (matching the pair
//! against the user store or the administrative override) is the service's
//! job; this crate only gets the pair off the wire.

pub mod credentials;
