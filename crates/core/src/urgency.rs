use crate::models::{ScenarioTag, UrgencyTier};

// First scenario with a hit wins; order matters for overlapping messages.
pub const CRITICAL_SCENARIOS: &[(ScenarioTag, &[&str])] = &[
    (
        ScenarioTag::ActiveBankFraud,
        &[
            "unauthorized transfer",
            "money leaving",
            "funds transferred",
            "someone withdrew",
            "suspicious withdrawal",
            "account drained",
        ],
    ),
    (
        ScenarioTag::DeviceCompromised,
        &[
            "remote access",
            "controlling my computer",
            "screen sharing",
            "teamviewer",
            "anydesk",
            "remote desktop",
            "cant control",
            "can't control",
        ],
    ),
    (
        ScenarioTag::PersonalThreat,
        &[
            "threatening",
            "blackmail",
            "extortion",
            "will hurt",
            "sending police",
            "arrest warrant",
            "immediate legal action",
        ],
    ),
    (
        ScenarioTag::ActiveScamCall,
        &[
            "on the phone",
            "caller is",
            "they are saying",
            "asking me to",
            "telling me to",
            "wants me to go",
        ],
    ),
    (
        ScenarioTag::PaymentInProgress,
        &[
            "about to send",
            "about to pay",
            "ready to transfer",
            "gift cards",
            "wire transfer",
            "cryptocurrency",
            "bitcoin",
        ],
    ),
];

pub const CRITICAL_KEYWORDS: &[&str] = &[
    "right now",
    "happening now",
    "currently",
    "at this moment",
    "they are",
    "he is",
    "she is",
    "someone is",
    "locked out",
    "cant access",
    "can't access",
    "frozen account",
    "threatening",
    "demanding",
    "on the phone with",
    "remote access",
    "on my computer",
    "controlling my",
    "just gave",
    "just sent",
    "just transferred",
    "wire transfer",
    "sending money now",
    "about to send",
];

pub const HIGH_URGENCY_KEYWORDS: &[&str] = &[
    "just happened",
    "just received",
    "just got",
    "today",
    "this morning",
    "this afternoon",
    "tonight",
    "few minutes ago",
    "hour ago",
    "hours ago",
    "unauthorized",
    "suspicious transaction",
    "strange charge",
    "dont recognize",
    "don't recognize",
    "didnt authorize",
    "didn't authorize",
    "compromised",
    "hacked",
    "breached",
    "stolen",
    "gave them",
    "shared my",
    "told them my",
    "clicked",
    "downloaded",
    "installed",
    "social security number",
    "ssn",
    "credit card",
    "bank account",
];

pub const MEDIUM_URGENCY_KEYWORDS: &[&str] = &[
    "yesterday",
    "last night",
    "few days ago",
    "suspicious",
    "worried",
    "concerned",
    "afraid",
    "might have",
    "may have",
    "think i",
    "not sure if",
    "received email",
    "got call",
    "voicemail",
    "asking for",
    "requesting",
    "wants me to",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrgencyMatch {
    pub tier: UrgencyTier,
    pub scenario: Option<ScenarioTag>,
    pub matched_phrase: Option<&'static str>,
}

pub fn classify(message: &str) -> (UrgencyTier, Option<ScenarioTag>) {
    let hit = classify_detailed(message);
    (hit.tier, hit.scenario)
}

pub fn classify_detailed(message: &str) -> UrgencyMatch {
    let lower = message.to_lowercase();

    for (scenario, phrases) in CRITICAL_SCENARIOS {
        if let Some(phrase) = first_hit(&lower, phrases) {
            return UrgencyMatch {
                tier: UrgencyTier::Critical,
                scenario: Some(*scenario),
                matched_phrase: Some(phrase),
            };
        }
    }

    let tiers = [
        (
            UrgencyTier::Critical,
            ScenarioTag::GeneralCritical,
            CRITICAL_KEYWORDS,
        ),
        (
            UrgencyTier::High,
            ScenarioTag::RecentIncident,
            HIGH_URGENCY_KEYWORDS,
        ),
        (
            UrgencyTier::Medium,
            ScenarioTag::GeneralConcern,
            MEDIUM_URGENCY_KEYWORDS,
        ),
    ];

    for (tier, scenario, phrases) in tiers {
        if let Some(phrase) = first_hit(&lower, phrases) {
            return UrgencyMatch {
                tier,
                scenario: Some(scenario),
                matched_phrase: Some(phrase),
            };
        }
    }

    UrgencyMatch {
        tier: UrgencyTier::Low,
        scenario: None,
        matched_phrase: None,
    }
}

fn first_hit(input: &str, needles: &[&'static str]) -> Option<&'static str> {
    needles.iter().copied().find(|needle| input.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scenario_phrase_is_critical_with_its_own_tag() {
        for (scenario, phrases) in CRITICAL_SCENARIOS {
            for phrase in *phrases {
                let message = format!("Hello, {phrase} and more text after it");
                assert_eq!(
                    classify(&message),
                    (UrgencyTier::Critical, Some(*scenario)),
                    "phrase {phrase:?}"
                );
            }
        }
    }

    #[test]
    fn bank_fraud_wins_over_device_compromise() {
        let (tier, tag) =
            classify("There was an unauthorized transfer while they had remote access");
        assert_eq!(tier, UrgencyTier::Critical);
        assert_eq!(tag, Some(ScenarioTag::ActiveBankFraud));
    }

    #[test]
    fn device_compromise_wins_over_payment() {
        let (_, tag) = classify("He has remote access and I'm about to send bitcoin");
        assert_eq!(tag, Some(ScenarioTag::DeviceCompromised));
    }

    #[test]
    fn device_compromise_wins_over_personal_threat() {
        let (_, tag) = classify("They used teamviewer and now they are threatening me");
        assert_eq!(tag, Some(ScenarioTag::DeviceCompromised));
    }

    #[test]
    fn personal_threat_wins_over_scam_call() {
        let (_, tag) = classify("they are threatening me, I'm on the phone");
        assert_eq!(tag, Some(ScenarioTag::PersonalThreat));
    }

    #[test]
    fn scam_call_wins_over_payment() {
        let (_, tag) = classify("caller is asking for gift cards");
        assert_eq!(tag, Some(ScenarioTag::ActiveScamCall));
    }

    #[test]
    fn scenarios_are_checked_in_severity_order() {
        let order: Vec<ScenarioTag> = CRITICAL_SCENARIOS.iter().map(|(tag, _)| *tag).collect();
        assert_eq!(
            order,
            vec![
                ScenarioTag::ActiveBankFraud,
                ScenarioTag::DeviceCompromised,
                ScenarioTag::PersonalThreat,
                ScenarioTag::ActiveScamCall,
                ScenarioTag::PaymentInProgress,
            ]
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let (tier, tag) = classify("I'm buying GIFT CARDS for the IRS");
        assert_eq!(tier, UrgencyTier::Critical);
        assert_eq!(tag, Some(ScenarioTag::PaymentInProgress));
    }

    #[test]
    fn general_critical_keyword() {
        let (tier, tag) = classify("I'm locked out of my email");
        assert_eq!(tier, UrgencyTier::Critical);
        assert_eq!(tag, Some(ScenarioTag::GeneralCritical));

        let (tier, tag) = classify("I just transferred $5000 to someone who called about my taxes");
        assert_eq!(tier, UrgencyTier::Critical);
        assert_eq!(tag, Some(ScenarioTag::GeneralCritical));
    }

    #[test]
    fn high_tier_is_recent_incident() {
        let (tier, tag) = classify("I clicked a link in a text");
        assert_eq!(tier, UrgencyTier::High);
        assert_eq!(tag, Some(ScenarioTag::RecentIncident));
    }

    #[test]
    fn suspicious_email_yesterday_is_medium() {
        assert_eq!(
            classify("I received a suspicious email yesterday"),
            (UrgencyTier::Medium, Some(ScenarioTag::GeneralConcern))
        );
    }

    #[test]
    fn empty_and_blank_messages_are_low() {
        assert_eq!(classify(""), (UrgencyTier::Low, None));
        assert_eq!(classify("   \n\t "), (UrgencyTier::Low, None));
        assert_eq!(classify("How do I bake bread?"), (UrgencyTier::Low, None));
    }

    #[test]
    fn substring_matching_has_no_word_boundaries() {
        assert_eq!(
            classify("We flew to the island for vacation"),
            (UrgencyTier::Critical, Some(ScenarioTag::GeneralCritical))
        );
        assert_eq!(
            classify("check the classnotes"),
            (UrgencyTier::High, Some(ScenarioTag::RecentIncident))
        );
    }

    #[test]
    fn detailed_match_reports_phrase() {
        let hit = classify_detailed("They want BITCOIN");
        assert_eq!(hit.matched_phrase, Some("bitcoin"));
        assert_eq!(classify_detailed("hi").matched_phrase, None);
    }
}
