use thiserror::Error;

use crate::models::{ContactRecord, Jurisdiction, ResourceCategory, StateCode};
use crate::zip::{extract_zip5, is_valid_zip, state_for};

const STATE_DESCRIPTION: &str = "State consumer protection and fraud reporting";
const DISTRICT_DESCRIPTION: &str = "District consumer protection and fraud reporting";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("not a valid 5-digit ZIP code")]
    InvalidZip,
    #[error("ZIP code {0} does not map to a known state")]
    UnknownRegion(u32),
}

struct StateOffice {
    code: &'static str,
    record: ContactRecord,
}

const fn state_office(
    code: &'static str,
    name: &'static str,
    phone: &'static str,
    website: &'static str,
) -> StateOffice {
    office(code, name, phone, website, STATE_DESCRIPTION)
}

const fn district_office(
    code: &'static str,
    name: &'static str,
    phone: &'static str,
    website: &'static str,
) -> StateOffice {
    office(code, name, phone, website, DISTRICT_DESCRIPTION)
}

const fn office(
    code: &'static str,
    name: &'static str,
    phone: &'static str,
    website: &'static str,
    description: &'static str,
) -> StateOffice {
    StateOffice {
        code,
        record: ContactRecord {
            name,
            category: ResourceCategory::StateConsumerProtection,
            phone,
            website,
            address: None,
            hours: None,
            description: Some(description),
        },
    }
}

const fn federal(
    name: &'static str,
    phone: &'static str,
    website: &'static str,
    description: &'static str,
) -> ContactRecord {
    ContactRecord {
        name,
        category: ResourceCategory::FederalAgency,
        phone,
        website,
        address: None,
        hours: None,
        description: Some(description),
    }
}

static STATE_CONSUMER_OFFICES: &[StateOffice] = &[
    state_office(
        "AL",
        "Alabama Attorney General Consumer Protection Division",
        "1-800-392-5658",
        "https://www.alabamaag.gov/consumers",
    ),
    state_office(
        "AK",
        "Alaska Attorney General Consumer Protection Unit",
        "907-269-5200",
        "https://law.alaska.gov/department/civil/consumer.html",
    ),
    state_office(
        "AZ",
        "Arizona Attorney General Consumer Protection Division",
        "602-542-5763",
        "https://www.azag.gov/consumer",
    ),
    state_office(
        "AR",
        "Arkansas Attorney General Consumer Protection Division",
        "1-800-482-8982",
        "https://arkansasag.gov/consumer-protection",
    ),
    state_office(
        "CA",
        "California Attorney General Public Inquiry Unit",
        "1-800-952-5225",
        "https://oag.ca.gov/contact/consumer-complaint-against-business-or-company",
    ),
    state_office(
        "CO",
        "Colorado Attorney General Consumer Protection Section",
        "1-800-222-4444",
        "https://coag.gov/office-sections/consumer-protection",
    ),
    state_office(
        "CT",
        "Connecticut Attorney General Consumer Protection",
        "860-808-5318",
        "https://portal.ct.gov/AG/Consumer-Protection",
    ),
    state_office(
        "DE",
        "Delaware Attorney General Fraud & Consumer Protection Division",
        "1-800-220-5424",
        "https://attorney.general.delaware.gov/fraud/",
    ),
    state_office(
        "FL",
        "Florida Attorney General Consumer Protection Division",
        "1-866-966-7226",
        "https://www.myfloridalegal.com/consumer-protection",
    ),
    state_office(
        "GA",
        "Georgia Governor's Office of Consumer Protection",
        "404-651-8600",
        "https://consumer.georgia.gov",
    ),
    state_office(
        "HI",
        "Hawaii Office of Consumer Protection",
        "808-586-2636",
        "https://cca.hawaii.gov/ocp/",
    ),
    state_office(
        "ID",
        "Idaho Attorney General Consumer Protection",
        "208-334-2424",
        "https://www.ag.idaho.gov/consumer-protection",
    ),
    state_office(
        "IL",
        "Illinois Attorney General Consumer Fraud Bureau",
        "1-800-386-5438",
        "https://illinoisattorneygeneral.gov/consumers",
    ),
    state_office(
        "IN",
        "Indiana Attorney General Consumer Protection Division",
        "1-800-382-5516",
        "https://www.in.gov/attorneygeneral/consumer-protection",
    ),
    state_office(
        "IA",
        "Iowa Attorney General Consumer Protection Division",
        "515-281-5926",
        "https://www.iowaattorneygeneral.gov/for-consumers",
    ),
    state_office(
        "KS",
        "Kansas Attorney General Consumer Protection",
        "1-800-432-2310",
        "https://www.ag.ks.gov/consumer-protection",
    ),
    state_office(
        "KY",
        "Kentucky Attorney General Consumer Protection",
        "1-888-432-9257",
        "https://ag.ky.gov/consumer-protection",
    ),
    state_office(
        "LA",
        "Louisiana Attorney General Consumer Protection Section",
        "1-800-351-4889",
        "https://www.ag.state.la.us/ConsumerProtection",
    ),
    state_office(
        "ME",
        "Maine Attorney General Consumer Protection Division",
        "1-800-436-2131",
        "https://www.maine.gov/ag/consumer",
    ),
    state_office(
        "MD",
        "Maryland Attorney General Consumer Protection Division",
        "410-528-8662",
        "https://www.marylandattorneygeneral.gov/Pages/CPD/default.aspx",
    ),
    state_office(
        "MA",
        "Massachusetts Attorney General Consumer Advocacy & Response Division",
        "617-727-8400",
        "https://www.mass.gov/consumer-protection",
    ),
    state_office(
        "MI",
        "Michigan Attorney General Consumer Protection",
        "517-335-7599",
        "https://www.michigan.gov/ag/consumer-protection",
    ),
    state_office(
        "MN",
        "Minnesota Attorney General Consumer Protection",
        "651-296-3353",
        "https://www.ag.state.mn.us/consumer",
    ),
    state_office(
        "MS",
        "Mississippi Attorney General Consumer Protection",
        "1-800-281-4418",
        "https://www.ago.state.ms.us/divisions/consumer-protection",
    ),
    state_office(
        "MO",
        "Missouri Attorney General Consumer Protection",
        "1-800-392-8222",
        "https://ago.mo.gov/home/consumer",
    ),
    state_office(
        "MT",
        "Montana Department of Justice Office of Consumer Protection",
        "1-800-481-6896",
        "https://dojmt.gov/consumer",
    ),
    state_office(
        "NE",
        "Nebraska Attorney General Consumer Protection",
        "402-471-2682",
        "https://ago.nebraska.gov/consumer-protection",
    ),
    state_office(
        "NV",
        "Nevada Attorney General Bureau of Consumer Protection",
        "702-486-3132",
        "https://ag.nv.gov/Hot_Topics/Consumer_Protection",
    ),
    state_office(
        "NH",
        "New Hampshire Attorney General Consumer Protection Bureau",
        "603-271-3641",
        "https://www.doj.nh.gov/consumer",
    ),
    state_office(
        "NJ",
        "New Jersey Division of Consumer Affairs",
        "1-800-242-5846",
        "https://www.njconsumeraffairs.gov",
    ),
    state_office(
        "NM",
        "New Mexico Attorney General Consumer Protection",
        "1-844-255-9210",
        "https://www.nmag.gov/consumer-environmental-protection",
    ),
    state_office(
        "NY",
        "New York Attorney General Bureau of Consumer Frauds",
        "1-800-771-7755",
        "https://ag.ny.gov/bureau/consumer-frauds-bureau",
    ),
    state_office(
        "NC",
        "North Carolina Attorney General Consumer Protection Division",
        "1-877-566-7226",
        "https://ncdoj.gov/protecting-consumers",
    ),
    state_office(
        "ND",
        "North Dakota Attorney General Consumer Protection",
        "1-800-472-2600",
        "https://attorneygeneral.nd.gov/consumer-protection",
    ),
    state_office(
        "OH",
        "Ohio Attorney General Consumer Protection Section",
        "1-800-282-0515",
        "https://www.ohioattorneygeneral.gov/Individuals-and-Families/Consumers",
    ),
    state_office(
        "OK",
        "Oklahoma Attorney General Consumer Protection Unit",
        "405-521-2029",
        "https://www.oag.ok.gov/consumer-protection",
    ),
    state_office(
        "OR",
        "Oregon Department of Justice Consumer Protection",
        "1-877-877-9392",
        "https://www.doj.state.or.us/consumer-protection",
    ),
    state_office(
        "PA",
        "Pennsylvania Attorney General Bureau of Consumer Protection",
        "1-800-441-2555",
        "https://www.attorneygeneral.gov/protect-yourself/consumer-protection",
    ),
    state_office(
        "RI",
        "Rhode Island Attorney General Consumer Protection Unit",
        "401-274-4400",
        "https://riag.ri.gov/divisions/consumer-protection",
    ),
    state_office(
        "SC",
        "South Carolina Department of Consumer Affairs",
        "1-800-922-1594",
        "https://consumer.sc.gov",
    ),
    state_office(
        "SD",
        "South Dakota Attorney General Consumer Protection",
        "1-800-300-1986",
        "https://atg.sd.gov/Consumers/default.aspx",
    ),
    state_office(
        "TN",
        "Tennessee Division of Consumer Affairs",
        "1-800-342-8385",
        "https://www.tn.gov/consumer",
    ),
    state_office(
        "TX",
        "Texas Attorney General Consumer Protection Division",
        "1-800-621-0508",
        "https://www.texasattorneygeneral.gov/consumer-protection",
    ),
    state_office(
        "UT",
        "Utah Division of Consumer Protection",
        "801-530-6601",
        "https://consumerprotection.utah.gov",
    ),
    state_office(
        "VT",
        "Vermont Attorney General Consumer Assistance Program",
        "1-800-649-2424",
        "https://ago.vermont.gov/cap",
    ),
    state_office(
        "VA",
        "Virginia Attorney General Consumer Protection Section",
        "1-800-552-9963",
        "https://www.oag.state.va.us/consumer-protection",
    ),
    state_office(
        "WA",
        "Washington Attorney General Consumer Protection Division",
        "1-800-551-4636",
        "https://www.atg.wa.gov/consumer-protection",
    ),
    state_office(
        "WV",
        "West Virginia Attorney General Consumer Protection Division",
        "1-800-368-8808",
        "https://ago.wv.gov/consumerprotection",
    ),
    state_office(
        "WI",
        "Wisconsin Department of Agriculture Trade & Consumer Protection",
        "1-800-422-7128",
        "https://datcp.wi.gov/Pages/Programs_Services/ConsumerProtection.aspx",
    ),
    state_office(
        "WY",
        "Wyoming Attorney General Consumer Protection Unit",
        "307-777-7841",
        "https://ag.wyo.gov/divisions/consumer-protection",
    ),
    district_office(
        "DC",
        "DC Office of the Attorney General Consumer Protection",
        "202-442-9828",
        "https://oag.dc.gov/consumer-protection",
    ),
];

pub static FEDERAL_RESOURCES: &[ContactRecord] = &[
    federal(
        "Federal Trade Commission (FTC)",
        "1-877-382-4357",
        "https://reportfraud.ftc.gov",
        "Report identity theft and fraud to the FTC",
    ),
    federal(
        "FBI Internet Crime Complaint Center (IC3)",
        "N/A - Online reporting only",
        "https://www.ic3.gov/Home/FileComplaint",
        "Report internet crimes to the FBI",
    ),
    federal(
        "IdentityTheft.gov",
        "1-877-438-4338",
        "https://identitytheft.gov",
        "Report and recover from identity theft",
    ),
    federal(
        "U.S. Postal Inspection Service",
        "1-877-876-2455",
        "https://www.uspis.gov/report",
        "Report mail fraud and scams",
    ),
    federal(
        "IRS Identity Protection Specialized Unit",
        "1-800-908-4490",
        "https://www.irs.gov/identity-theft-fraud-scams",
        "Report tax-related identity theft",
    ),
    federal(
        "Social Security Administration Fraud Hotline",
        "1-800-269-0271",
        "https://oig.ssa.gov/report",
        "Report Social Security fraud",
    ),
];

pub static LOCAL_POLICE: ContactRecord = ContactRecord {
    name: "Local Police Department (Non-Emergency)",
    category: ResourceCategory::LocalLawEnforcement,
    phone: "Find your local number at https://www.usa.gov/local-governments",
    website: "https://www.usa.gov/local-governments",
    address: None,
    hours: None,
    description: Some("Your local police can take reports of cybercrimes"),
};

pub fn state_office_for(state: StateCode) -> Option<&'static ContactRecord> {
    STATE_CONSUMER_OFFICES
        .iter()
        .find(|office| office.code == state.as_str())
        .map(|office| &office.record)
}

pub fn resources_for_state(state: StateCode) -> Vec<ContactRecord> {
    let mut resources = Vec::with_capacity(FEDERAL_RESOURCES.len() + 2);
    resources.extend(state_office_for(state).copied());
    resources.extend_from_slice(FEDERAL_RESOURCES);
    resources.push(LOCAL_POLICE);
    resources
}

pub fn locate(zip: &str) -> Result<Jurisdiction, LookupError> {
    if !is_valid_zip(zip) {
        return Err(LookupError::InvalidZip);
    }

    let zip5 = extract_zip5(zip);
    let state = state_for(zip5).ok_or_else(|| {
        LookupError::UnknownRegion(zip5.parse().unwrap_or_default())
    })?;

    Ok(Jurisdiction {
        zip5: zip5.to_string(),
        state,
        resources: resources_for_state(state),
    })
}

pub fn resources_for_zip(zip: &str) -> Option<Vec<ContactRecord>> {
    locate(zip).ok().map(|jurisdiction| jurisdiction.resources)
}
