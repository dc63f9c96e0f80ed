use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyTier {
    Low,
    Medium,
    High,
    Critical,
}

impl UrgencyTier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    pub fn is_escalated(self) -> bool {
        self >= Self::High
    }
}

impl fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioTag {
    ActiveBankFraud,
    DeviceCompromised,
    PersonalThreat,
    ActiveScamCall,
    PaymentInProgress,
    RecentIncident,
    GeneralCritical,
    GeneralConcern,
}

impl ScenarioTag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ActiveBankFraud => "active_bank_fraud",
            Self::DeviceCompromised => "device_compromised",
            Self::PersonalThreat => "personal_threat",
            Self::ActiveScamCall => "active_scam_call",
            Self::PaymentInProgress => "payment_in_progress",
            Self::RecentIncident => "recent_incident",
            Self::GeneralCritical => "general_critical",
            Self::GeneralConcern => "general_concern",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "active_bank_fraud" => Some(Self::ActiveBankFraud),
            "device_compromised" => Some(Self::DeviceCompromised),
            "personal_threat" => Some(Self::PersonalThreat),
            "active_scam_call" => Some(Self::ActiveScamCall),
            "payment_in_progress" => Some(Self::PaymentInProgress),
            "recent_incident" => Some(Self::RecentIncident),
            "general_critical" => Some(Self::GeneralCritical),
            "general_concern" => Some(Self::GeneralConcern),
            _ => None,
        }
    }
}

impl fmt::Display for ScenarioTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmergencyContact {
    pub name: &'static str,
    pub phone: Option<&'static str>,
    pub action: &'static str,
    pub priority: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmergencyResponse {
    pub tier: UrgencyTier,
    pub title: &'static str,
    pub immediate_actions: &'static [&'static str],
    pub explanation: &'static str,
    pub emergency_contacts: &'static [EmergencyContact],
    pub follow_up_actions: Option<&'static [&'static str]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    StateConsumerProtection,
    FederalAgency,
    LocalLawEnforcement,
}

impl ResourceCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::StateConsumerProtection => "State Consumer Protection",
            Self::FederalAgency => "Federal Agency",
            Self::LocalLawEnforcement => "Local Law Enforcement",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    pub name: &'static str,
    pub category: ResourceCategory,
    pub phone: &'static str,
    pub website: &'static str,
    pub address: Option<&'static str>,
    pub hours: Option<&'static str>,
    pub description: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StateCode(&'static str);

impl StateCode {
    pub(crate) const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl PartialEq<&str> for StateCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmergencyCheck {
    pub is_emergency: bool,
    pub tier: UrgencyTier,
    pub scenario: Option<ScenarioTag>,
    pub guidance: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Jurisdiction {
    pub zip5: String,
    pub state: StateCode,
    pub resources: Vec<ContactRecord>,
}
