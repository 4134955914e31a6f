pub mod path;
pub mod tracing;

pub use self::path::{LenientRouting, lenient_routing};
pub use self::tracing::{REQUEST_ID_HEADER, request_id_middleware};
