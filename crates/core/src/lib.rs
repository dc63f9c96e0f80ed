pub mod models;
pub mod render;
pub mod resources;
pub mod responses;
pub mod triage;
pub mod urgency;
pub mod zip;

pub use models::*;
pub use render::{format_emergency, format_resources};
pub use resources::{locate, resources_for_state, resources_for_zip, LookupError};
pub use responses::generate;
pub use triage::{detect_emergency, get_local_resources};
pub use urgency::{classify, classify_detailed, UrgencyMatch};
pub use zip::{extract_zip5, is_valid_zip, state_for};
