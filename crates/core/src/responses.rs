use crate::models::{EmergencyContact, EmergencyResponse, ScenarioTag, UrgencyTier};

const YOUR_BANK: &str = "Your Bank";
const POLICE_NON_EMERGENCY: &str = "Local Police (Non-Emergency)";

pub static ACTIVE_BANK_FRAUD: EmergencyResponse = EmergencyResponse {
    tier: UrgencyTier::Critical,
    title: "🚨 URGENT: Active Bank Fraud Detected",
    immediate_actions: &[
        "**CALL YOUR BANK IMMEDIATELY** - Use the number on the back of your card or bank statement",
        "**Report unauthorized transactions** - Tell them you're experiencing fraud RIGHT NOW",
        "**Ask them to FREEZE your account** - Prevent further unauthorized transactions",
        "**Do NOT hang up** until your account is secured",
        "**Do NOT make any transfers or payments** that anyone is asking you to make",
        "**If someone is with you or on the phone**, hang up on them immediately",
    ],
    explanation: "Active bank fraud requires IMMEDIATE action. Every minute counts. \
                  Your bank has 24/7 fraud departments specifically for this situation.",
    emergency_contacts: &[
        EmergencyContact {
            name: YOUR_BANK,
            phone: None,
            action: "Call the number on your card NOW",
            priority: "HIGHEST",
        },
        EmergencyContact {
            name: "Local Police (Emergency)",
            phone: Some("911"),
            action: "If you feel threatened or in danger",
            priority: "CRITICAL",
        },
    ],
    follow_up_actions: Some(&[
        "File a police report",
        "Contact credit bureaus to place fraud alert",
        "Change all banking passwords",
        "Request new cards/account numbers",
        "Monitor accounts daily",
    ]),
};

pub static DEVICE_COMPROMISED: EmergencyResponse = EmergencyResponse {
    tier: UrgencyTier::Critical,
    title: "🚨 URGENT: Device Compromised - Immediate Action Required",
    immediate_actions: &[
        "**DISCONNECT FROM INTERNET IMMEDIATELY** - Unplug ethernet cable or turn off Wi-Fi",
        "**SHUT DOWN your computer** - Hold power button until it turns off",
        "**DO NOT turn it back on yet**",
        "**If someone is remotely controlling it**, they can see everything you do",
        "**Change passwords from a DIFFERENT device** - Phone or tablet",
        "**Call your bank from a different device** - Report possible compromise",
    ],
    explanation: "If someone has remote access to your computer, they can see your passwords, \
                  banking information, and personal files RIGHT NOW. Disconnecting immediately \
                  stops them from causing more damage.",
    emergency_contacts: &[
        EmergencyContact {
            name: YOUR_BANK,
            phone: None,
            action: "Call from a different device to secure accounts",
            priority: "HIGHEST",
        },
        EmergencyContact {
            name: "Local Computer Repair",
            phone: None,
            action: "Find a trusted technician to clean your computer",
            priority: "HIGH",
        },
    ],
    follow_up_actions: Some(&[
        "Have computer professionally cleaned/reimaged",
        "Install legitimate antivirus software",
        "Change ALL passwords from a clean device",
        "Monitor bank and credit card statements",
        "Enable two-factor authentication everywhere",
    ]),
};

pub static ACTIVE_SCAM_CALL: EmergencyResponse = EmergencyResponse {
    tier: UrgencyTier::Critical,
    title: "🚨 URGENT: You May Be on the Phone with a Scammer RIGHT NOW",
    immediate_actions: &[
        "**HANG UP THE PHONE IMMEDIATELY** - Do not continue the conversation",
        "**DO NOT call them back** - The number is fake",
        "**DO NOT do what they asked** - No payments, no downloads, no information",
        "**Block the number** on your phone",
        "**If they call back, DO NOT ANSWER**",
        "**Take a deep breath** - You did the right thing by hanging up",
    ],
    explanation: "Scammers use pressure tactics to keep you on the phone. The longer you stay \
                  on the call, the more likely they are to succeed. Hanging up is ALWAYS the \
                  right choice, even if they claim to be from the government, police, or your bank.",
    emergency_contacts: &[
        EmergencyContact {
            name: "Real Organization",
            phone: None,
            action: "Look up the official number yourself and call to verify",
            priority: "HIGH",
        },
        EmergencyContact {
            name: POLICE_NON_EMERGENCY,
            phone: None,
            action: "Report the scam call",
            priority: "MEDIUM",
        },
    ],
    follow_up_actions: Some(&[
        "Report to Federal Trade Commission (FTC) at reportfraud.ftc.gov",
        "Tell family/friends about the scam",
        "Consider call-blocking apps",
        "Register on Do Not Call Registry",
    ]),
};

pub static PAYMENT_IN_PROGRESS: EmergencyResponse = EmergencyResponse {
    tier: UrgencyTier::Critical,
    title: "🚨 STOP: Do NOT Make This Payment",
    immediate_actions: &[
        "**STOP IMMEDIATELY** - Do not complete the payment",
        "**Gift cards are for SCAMS** - Legitimate businesses never ask for gift cards",
        "**Wire transfers cannot be reversed** - Once sent, money is gone forever",
        "**Cryptocurrency is untraceable** - You will never get it back",
        "**Hang up** if someone is pressuring you",
        "**Call the organization directly** - Use a number you look up yourself",
    ],
    explanation: "Scammers create urgency and pressure to make you send money quickly. \
                  NO legitimate government agency, tech company, or business will EVER ask you to: \
                  pay with gift cards, wire transfer money, or send cryptocurrency. These are ALWAYS scams.",
    emergency_contacts: &[
        EmergencyContact {
            name: "Trusted Family/Friend",
            phone: None,
            action: "Talk to someone you trust before sending any money",
            priority: "HIGHEST",
        },
        EmergencyContact {
            name: "Organization You Are Supposedly Paying",
            phone: None,
            action: "Call their REAL number from their official website",
            priority: "HIGH",
        },
    ],
    follow_up_actions: Some(&[
        "Report to FTC at reportfraud.ftc.gov",
        "Report to IC3.gov if internet-related",
        "Tell family members about this scam attempt",
        "Learn warning signs of payment scams",
    ]),
};

pub static PERSONAL_THREAT: EmergencyResponse = EmergencyResponse {
    tier: UrgencyTier::Critical,
    title: "🚨 URGENT: Threats Require Immediate Police Contact",
    immediate_actions: &[
        "**CALL 911 if you feel in immediate danger**",
        "**Document everything** - Save messages, emails, voicemails, caller IDs",
        "**DO NOT engage with the threatener** - Do not respond to threats",
        "**Tell someone you trust** - Family member, friend, or neighbor",
        "**File a police report** - Even if you don't feel in immediate danger",
        "**These threats are likely fake** - Scammers use fear to control you",
    ],
    explanation: "Scammers often use threats of arrest, lawsuits, or harm to create panic. \
                  Real law enforcement will NEVER call to threaten you over the phone. \
                  Real courts send official letters, not phone calls. But threats should still \
                  be reported to actual police.",
    emergency_contacts: &[
        EmergencyContact {
            name: "Emergency Services",
            phone: Some("911"),
            action: "Call immediately if you feel threatened or in danger",
            priority: "CRITICAL",
        },
        EmergencyContact {
            name: POLICE_NON_EMERGENCY,
            phone: None,
            action: "File a report about the threatening calls/messages",
            priority: "HIGH",
        },
    ],
    follow_up_actions: Some(&[
        "Keep detailed log of all threats",
        "Consider restraining order if threats continue",
        "Block threatening numbers/emails",
        "Report to FBI at ic3.gov",
        "Notify family members",
    ]),
};

pub static RECENT_INCIDENT: EmergencyResponse = EmergencyResponse {
    tier: UrgencyTier::High,
    title: "⚠️ IMPORTANT: Take Action Within 24 Hours",
    immediate_actions: &[
        "**Act quickly** - The sooner you act, the better your chances of minimizing damage",
        "**Call your bank** - Report any financial information you shared",
        "**Change passwords** - For any accounts that may be compromised",
        "**Run antivirus scan** - If you downloaded anything or visited suspicious sites",
        "**Document everything** - Save emails, messages, caller IDs, screenshots",
        "**Don't panic** - You're taking the right steps by seeking help",
    ],
    explanation: "Recent incidents require prompt action but you have time to be thorough. \
                  Taking these steps within 24 hours significantly reduces potential damage.",
    emergency_contacts: &[
        EmergencyContact {
            name: "Your Bank/Credit Card",
            phone: None,
            action: "Report if you shared financial information",
            priority: "HIGH",
        },
        EmergencyContact {
            name: "FTC at reportfraud.ftc.gov",
            phone: None,
            action: "File an official report",
            priority: "MEDIUM",
        },
    ],
    follow_up_actions: Some(&[
        "Monitor bank and credit card statements",
        "Consider credit monitoring service",
        "Place fraud alert on credit reports",
        "Report to appropriate authorities",
        "Learn about this type of scam",
    ]),
};

pub static GENERAL_CRITICAL: EmergencyResponse = EmergencyResponse {
    tier: UrgencyTier::Critical,
    title: "🚨 URGENT: Immediate Action Required",
    immediate_actions: &[
        "**STOP what you are doing** - Do not proceed with any payments or downloads",
        "**Hang up** if someone is on the phone pressuring you",
        "**Disconnect** if someone has remote access to your computer",
        "**Call your bank** if you shared financial information",
        "**Contact local police** if you feel threatened",
        "**Take a breath** - You're doing the right thing by seeking help",
    ],
    explanation: "This situation requires immediate action to prevent or minimize damage. \
                  Follow the steps above right now, then we can help with next steps.",
    emergency_contacts: &[
        EmergencyContact {
            name: "Emergency Services",
            phone: Some("911"),
            action: "If you are in immediate danger",
            priority: "CRITICAL",
        },
        EmergencyContact {
            name: YOUR_BANK,
            phone: None,
            action: "If financial accounts are at risk",
            priority: "HIGH",
        },
    ],
    follow_up_actions: None,
};

pub fn template_for(scenario: ScenarioTag) -> Option<&'static EmergencyResponse> {
    match scenario {
        ScenarioTag::ActiveBankFraud => Some(&ACTIVE_BANK_FRAUD),
        ScenarioTag::DeviceCompromised => Some(&DEVICE_COMPROMISED),
        ScenarioTag::ActiveScamCall => Some(&ACTIVE_SCAM_CALL),
        ScenarioTag::PaymentInProgress => Some(&PAYMENT_IN_PROGRESS),
        ScenarioTag::PersonalThreat => Some(&PERSONAL_THREAT),
        ScenarioTag::RecentIncident => Some(&RECENT_INCIDENT),
        ScenarioTag::GeneralCritical | ScenarioTag::GeneralConcern => None,
    }
}

// A scenario template wins over the tier passed in.
pub fn generate(
    tier: UrgencyTier,
    scenario: Option<ScenarioTag>,
) -> Option<&'static EmergencyResponse> {
    if let Some(template) = scenario.and_then(template_for) {
        return Some(template);
    }

    match tier {
        UrgencyTier::Critical => Some(&GENERAL_CRITICAL),
        UrgencyTier::High => Some(&RECENT_INCIDENT),
        UrgencyTier::Medium | UrgencyTier::Low => None,
    }
}
