use crate::models::EmergencyCheck;
use crate::render::{format_emergency, format_resources};
use crate::resources::{locate, LookupError};
use crate::responses::generate;
use crate::urgency::classify;

pub const INVALID_ZIP_MESSAGE: &str = "I need a valid 5-digit ZIP code to find your local resources. \
                                       Please provide your ZIP code (for example: 10001 or 90210).";

pub const UNKNOWN_REGION_MESSAGE: &str = "I couldn't find resources for that ZIP code. \
                                          Please make sure you entered a valid US ZIP code.";

pub fn detect_emergency(message: &str) -> EmergencyCheck {
    let (tier, scenario) = classify(message);

    let guidance = if tier.is_escalated() {
        generate(tier, scenario).map(format_emergency)
    } else {
        None
    };

    EmergencyCheck {
        is_emergency: guidance.is_some(),
        tier,
        scenario,
        guidance,
    }
}

pub fn get_local_resources(zip: &str) -> String {
    match locate(zip) {
        Ok(jurisdiction) => {
            format_resources(&jurisdiction.resources, jurisdiction.state.as_str(), zip.trim())
        }
        Err(error) => lookup_error_message(error).to_string(),
    }
}

pub fn lookup_error_message(error: LookupError) -> &'static str {
    match error {
        LookupError::InvalidZip => INVALID_ZIP_MESSAGE,
        LookupError::UnknownRegion(_) => UNKNOWN_REGION_MESSAGE,
    }
}
