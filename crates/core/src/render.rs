use std::fmt::Write as _;

use crate::models::{ContactRecord, EmergencyResponse, ResourceCategory};

pub const RESOURCES_NOT_FOUND: &str = "Sorry, I couldn't find local resources for that ZIP code.";

const RESOURCE_SECTIONS: [(&str, ResourceCategory); 3] = [
    ("State Resources", ResourceCategory::StateConsumerProtection),
    ("Federal Resources", ResourceCategory::FederalAgency),
    ("Local Law Enforcement", ResourceCategory::LocalLawEnforcement),
];

pub fn format_emergency(response: &EmergencyResponse) -> String {
    let mut out = String::new();

    let _ = write!(out, "# {}\n\n", response.title);
    out.push_str("---\n\n");
    let _ = write!(out, "**{}**\n\n", response.explanation);
    out.push_str("---\n\n");

    out.push_str("## 🔴 DO THIS RIGHT NOW:\n\n");
    for (index, action) in response.immediate_actions.iter().enumerate() {
        let _ = write!(out, "{}. {}\n\n", index + 1, action);
    }

    if !response.emergency_contacts.is_empty() {
        out.push_str("---\n\n");
        out.push_str("## 📞 Emergency Contacts:\n\n");
        for contact in response.emergency_contacts {
            let _ = write!(out, "**{}**", contact.name);
            if let Some(phone) = contact.phone {
                let _ = write!(out, " - {phone}");
            }
            out.push('\n');
            let _ = writeln!(out, "- Priority: {}", contact.priority);
            let _ = write!(out, "- Action: {}\n\n", contact.action);
        }
    }

    if let Some(follow_ups) = response.follow_up_actions.filter(|items| !items.is_empty()) {
        out.push_str("---\n\n");
        out.push_str("## ✅ After Immediate Actions, Do These:\n\n");
        for (index, action) in follow_ups.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", index + 1, action);
        }
        out.push('\n');
    }

    out.push_str("---\n\n");
    out.push_str("**Once you've taken these immediate steps, I can help you with:**\n");
    out.push_str("- Finding local resources to report this crime\n");
    out.push_str("- Understanding what happened\n");
    out.push_str("- Protecting yourself from future scams\n");
    out.push_str("- Step-by-step recovery process\n\n");
    out.push_str("*Please let me know once you've completed the immediate actions above.*");

    out
}

pub fn format_resources(resources: &[ContactRecord], state: &str, zip: &str) -> String {
    if resources.is_empty() {
        return RESOURCES_NOT_FOUND.to_string();
    }

    let mut out = String::new();
    let _ = write!(out, "## Local Resources for ZIP Code {zip} ({state})\n\n");
    out.push_str(
        "Here are the agencies and organizations you can contact to report cybercrimes and get help:\n\n",
    );

    for (heading, category) in RESOURCE_SECTIONS {
        let mut section = resources
            .iter()
            .filter(|record| record.category == category)
            .peekable();
        if section.peek().is_none() {
            continue;
        }

        let _ = write!(out, "### {heading}\n\n");
        for record in section {
            let _ = writeln!(out, "**{}**", record.name);
            let _ = writeln!(out, "- **Phone:** {}", record.phone);
            let _ = writeln!(out, "- **Website:** {}", record.website);
            if let Some(address) = record.address {
                let _ = writeln!(out, "- **Address:** {address}");
            }
            if let Some(hours) = record.hours {
                let _ = writeln!(out, "- **Hours:** {hours}");
            }
            let _ = write!(
                out,
                "- **Description:** {}\n\n",
                record.description.unwrap_or("")
            );
        }
    }

    out.push_str("\n### What to Do Next:\n\n");
    out.push_str(
        "1. **Start with your state consumer protection office** - They handle most scam reports\n",
    );
    out.push_str("2. **File a report with the FTC** at reportfraud.ftc.gov\n");
    out.push_str("3. **Report to IC3** if it involves internet crime\n");
    out.push_str("4. **Contact local police** for serious crimes or threats\n");
    out.push_str("5. **Keep records** of all reports and case numbers\n\n");
    out.push_str(
        "Would you like help with anything else, such as steps to protect your accounts or identity?",
    );

    out
}
