//! Wire models for the NetworkCloud control API.
//!
//! Pure data exchanged with the background service, plus the locally persisted
//! adapter group map. No I/O and no business logic live here; `control-core`
//! moves these values across the loopback channel and the groups file.
//!
//! Field names follow the service's camelCase JSON. Response types decode
//! leniently (missing fields take their zero value) because the service omits
//! empty optional fields.

mod de;
pub mod groups;
pub mod link;
pub mod logs;
pub mod network;
pub mod status;

pub use groups::AdapterGroupMap;
pub use link::{LinkPhase, LinkStartResponse, LinkStatusResponse};
pub use logs::LogsResponse;
pub use network::{AdapterInfo, NetworkResponse};
pub use status::StatusSnapshot;

#[cfg(test)]
mod tests;
