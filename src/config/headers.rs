//! HTTP header name constants.
//!
//! Response headers recorded on every hop of a redirect chain.

/// Location header (redirect target)
pub const HEADER_LOCATION: &str = "Location";
/// Server header (identifies server software)
pub const HEADER_SERVER: &str = "Server";
/// Cache-Control header
pub const HEADER_CACHE_CONTROL: &str = "Cache-Control";

/// Response headers captured for each step.
/// Headers missing from a response are omitted from the step, never stored empty.
/// To add/remove headers, modify this array.
pub const TRACKED_HEADERS: &[&str] = &[HEADER_LOCATION, HEADER_SERVER, HEADER_CACHE_CONTROL];
