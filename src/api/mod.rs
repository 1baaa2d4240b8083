//! JioSaavn API client.
//!
//! - [`SaavnApi`]: the public client, one method per catalog operation
//! - [`Transport`]: the HTTP boundary, with [`ReqwestTransport`] as default

pub mod client;
pub mod endpoints;
pub mod transport;

pub use client::{ArtistPageOptions, SaavnApi, SortBy, SortOrder};
pub use transport::{RawResponse, ReqwestTransport, Transport};
