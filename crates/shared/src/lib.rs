//! MythWeaver wire contract
//!
//! Types exchanged with the myth generation service over HTTP:
//! - Request and response bodies for `POST /generate-myth` and `GET /health`
//! - The error body shape the service uses for non-2xx responses
//! - Path constants
//!
//! # Design Principles
//!
//! 1. **No business logic** - pure data types and serialization
//! 2. **WASM compatible** - must compile for both native and wasm32 targets
//! 3. **Tolerant readers** - unknown fields are ignored, optional fields default

pub mod requests;
pub mod responses;
pub mod routes;

pub use requests::GenerateMythRequest;
pub use responses::{ErrorBody, GenerateMythResponse, HealthResponse};
pub use routes::{DEFAULT_API_BASE_PATH, GENERATE_MYTH_PATH, HEALTH_PATH};
