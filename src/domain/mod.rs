//! Domain layer types: what is sent to the renderer and what comes back.

pub mod request;
pub mod response;

pub use request::{ProblemSource, RenderRequest};
pub use response::RenderResponse;
