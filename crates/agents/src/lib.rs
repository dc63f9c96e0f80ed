use std::sync::Arc;
use std::time::Instant;

use once_cell::sync::Lazy;
use regex::Regex;
use seniorsafe_core::triage::lookup_error_message;
use seniorsafe_core::{
    detect_emergency, format_resources, locate, EmergencyCheck, Jurisdiction, LookupError,
    ScenarioTag, StateCode, UrgencyTier,
};
use seniorsafe_observability::AppMetrics;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

static ZIP_IN_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[0-9]{5}(?:-[0-9]{4})?\b").expect("valid zip mention regex"));

pub const WELCOME_MESSAGE: &str = "Hello! I'm SeniorSafe AI, your personal cybersecurity assistant. \
     I'm here to help you if you've been affected by online scams or cybercrime. \
     You can ask me anything, or choose one of the quick start options above. \
     Don't worry - we'll work through this together, step by step.";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Starter {
    pub label: &'static str,
    pub message: &'static str,
}

pub const STARTERS: &[Starter] = &[
    Starter {
        label: "Identity Stolen",
        message: "What should I do if my identity has been stolen in an online scam?",
    },
    Starter {
        label: "Financial Loss",
        message: "How can I recover money lost to a scammer?",
    },
    Starter {
        label: "Protecting Accounts",
        message: "How can I protect my bank accounts after being scammed?",
    },
    Starter {
        label: "Reporting a Scam",
        message: "Who should I report a cyber scam to?",
    },
    Starter {
        label: "Tech Support Scam",
        message: "I received a call claiming to be from tech support. What should I do?",
    },
    Starter {
        label: "Phishing Email",
        message: "I clicked on a suspicious link in an email. What are my next steps?",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    Emergency,
    LocalResources,
    LookupMiss,
    Standard,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuggestedAction {
    pub action_type: String,
    pub label: String,
    pub payload: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeskReply {
    pub reply_text: String,
    pub kind: ReplyKind,
    pub tier: UrgencyTier,
    pub scenario: Option<ScenarioTag>,
    pub zip: Option<String>,
    pub state: Option<StateCode>,
    pub suggested_actions: Vec<SuggestedAction>,
}

#[derive(Clone)]
pub struct SafetyDesk {
    metrics: Arc<AppMetrics>,
}

impl SafetyDesk {
    pub fn new(metrics: Arc<AppMetrics>) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> &AppMetrics {
        &self.metrics
    }

    #[instrument(skip(self, text))]
    pub fn handle_message(&self, text: &str) -> DeskReply {
        let started = Instant::now();
        self.metrics.inc_request();

        let check = detect_emergency(text);
        let reply = if check.is_emergency {
            self.metrics.inc_emergency();
            emergency_reply(check)
        } else if let Some(zip) = zip_mention(text) {
            self.resource_reply(zip, &check)
        } else {
            standard_reply(&check)
        };

        self.metrics.observe_latency(started.elapsed());
        info!(
            tier = %reply.tier,
            scenario = reply.scenario.map(ScenarioTag::as_str),
            kind = ?reply.kind,
            "message handled"
        );

        reply
    }

    pub fn check_emergency(&self, text: &str) -> EmergencyCheck {
        self.metrics.inc_request();
        let check = detect_emergency(text);
        if check.is_emergency {
            self.metrics.inc_emergency();
        }
        check
    }

    pub fn local_resources(&self, zip: &str) -> Result<Jurisdiction, LookupError> {
        self.metrics.inc_request();
        self.lookup(zip)
    }

    fn lookup(&self, zip: &str) -> Result<Jurisdiction, LookupError> {
        self.metrics.inc_resource_lookup();

        let result = locate(zip);
        if let Err(error) = &result {
            self.metrics.inc_lookup_miss();
            warn!(error = %error, "resource lookup missed");
        }
        result
    }

    fn resource_reply(&self, zip: &str, check: &EmergencyCheck) -> DeskReply {
        match self.lookup(zip) {
            Ok(jurisdiction) => DeskReply {
                reply_text: format_resources(
                    &jurisdiction.resources,
                    jurisdiction.state.as_str(),
                    zip,
                ),
                kind: ReplyKind::LocalResources,
                tier: check.tier,
                scenario: check.scenario,
                zip: Some(jurisdiction.zip5),
                state: Some(jurisdiction.state),
                suggested_actions: vec![action(
                    "report_fraud",
                    "File a report with the FTC",
                    json!({ "url": "https://reportfraud.ftc.gov" }),
                )],
            },
            Err(error) => DeskReply {
                reply_text: lookup_error_message(error).to_string(),
                kind: ReplyKind::LookupMiss,
                tier: check.tier,
                scenario: check.scenario,
                zip: Some(zip.to_string()),
                state: None,
                suggested_actions: vec![retry_zip_action()],
            },
        }
    }
}

pub fn zip_mention(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if seniorsafe_core::is_valid_zip(trimmed) {
        return Some(trimmed);
    }
    ZIP_IN_TEXT.find(trimmed).map(|found| found.as_str())
}

fn emergency_reply(check: EmergencyCheck) -> DeskReply {
    DeskReply {
        reply_text: check.guidance.unwrap_or_default(),
        kind: ReplyKind::Emergency,
        tier: check.tier,
        scenario: check.scenario,
        zip: None,
        state: None,
        suggested_actions: vec![
            action(
                "confirm_actions_done",
                "I've done the immediate steps",
                json!({ "scenario": check.scenario }),
            ),
            retry_zip_action(),
        ],
    }
}

fn standard_reply(check: &EmergencyCheck) -> DeskReply {
    let reply_text = match check.tier {
        UrgencyTier::Medium => "It sounds like something has you concerned, and checking first is the right move. \
             Don't reply to the message, click its links, or call any number it gives you. \
             If you share your 5-digit ZIP code, I can list the agencies near you that take scam reports.",
        _ => "I'm here to help you stay safe online. Tell me what happened in your own words, \
             or share your 5-digit ZIP code and I'll find the agencies near you that take fraud reports.",
    };

    DeskReply {
        reply_text: reply_text.to_string(),
        kind: ReplyKind::Standard,
        tier: check.tier,
        scenario: check.scenario,
        zip: None,
        state: None,
        suggested_actions: vec![retry_zip_action()],
    }
}

fn retry_zip_action() -> SuggestedAction {
    action(
        "find_local_resources",
        "Find local reporting agencies",
        json!({ "needs": "zip" }),
    )
}

fn action(action_type: &str, label: &str, payload: Value) -> SuggestedAction {
    SuggestedAction {
        action_type: action_type.to_string(),
        label: label.to_string(),
        payload,
    }
}
