//! Municipal contact directory
//!
//! Compiled-in directory of the 24 Mumbai ward offices and the four central
//! authorities above them. The data is constant; lookups are linear scans
//! over small static slices.

use serde::Serialize;

use crate::chain::EscalationLevel;

/// A contact point in the escalation hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Tier this contact belongs to
    pub level: EscalationLevel,
    /// Ward code (ward offices only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ward_code: Option<&'static str>,
    /// Office name
    pub name: &'static str,
    /// Designation of the officer in charge
    pub designation: &'static str,
    /// Area covered (ward offices only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<&'static str>,
    /// Contact email
    pub email: &'static str,
    /// Contact phone
    pub phone: &'static str,
    /// WhatsApp number, where available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<&'static str>,
    /// Toll-free grievance number, where available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toll_number: Option<&'static str>,
    /// Office address
    pub address: &'static str,
    /// Working hours
    pub working_hours: &'static str,
    /// Working days
    pub working_days: &'static str,
}

/// Ward office entry; every ward shares the Assistant Commissioner
/// designation and the 1916 grievance line
const fn ward(
    code: &'static str,
    name: &'static str,
    area: &'static str,
    email: &'static str,
    address: &'static str,
) -> Contact {
    Contact {
        level: EscalationLevel::Ward,
        ward_code: Some(code),
        name,
        designation: "Assistant Commissioner",
        area: Some(area),
        email,
        phone: "1916",
        whatsapp: None,
        toll_number: Some("1916"),
        address,
        working_hours: "10:00 AM - 6:00 PM",
        working_days: "Monday - Saturday",
    }
}

/// Ward offices (level 1)
pub const WARD_CONTACTS: &[Contact] = &[
    // City wards (South Mumbai)
    ward("A", "Ward A Office", "Colaba/Fort", "ac.a@mcgm.gov.in", "134 E, SBS Road, Fort, Mumbai 400001"),
    ward("B", "Ward B Office", "Sandhurst Rd", "ac.b@mcgm.gov.in", "121, Ramchandra Bhatt Marg, Mumbai 400009"),
    ward("C", "Ward C Office", "Marine Lines", "ac.c@mcgm.gov.in", "76, Shrikant Palekar Marg, Mumbai 400002"),
    ward("D", "Ward D Office", "Grant Rd", "ac.d@mcgm.gov.in", "Jobanputra Compound, Grant Road W, Mumbai 400007"),
    ward("E", "Ward E Office", "Byculla", "ac.e@mcgm.gov.in", "10, Shaikh Hafizuddin Marg, Mumbai 400008"),
    ward("F/S", "Ward F/South Office", "Parel", "ac.fs@mcgm.gov.in", "Dr. Ambedkar Road, Parel, Mumbai 400012"),
    ward("F/N", "Ward F/North Office", "Matunga", "ac.fn@mcgm.gov.in", "96, Bhau Daji Road, Matunga E, Mumbai 400019"),
    ward("G/S", "Ward G/South Office", "Worli", "ac.gs@mcgm.gov.in", "Dhanmill Naka, Elphinstone Rd W, Mumbai 400013"),
    ward("G/N", "Ward G/North Office", "Dadar", "ac.gn@mcgm.gov.in", "Harishchandra Yelve Marg, Dadar W, Mumbai 400028"),
    // Western suburbs
    ward("H/E", "Ward H/East Office", "Santacruz", "ac.he@mcgm.gov.in", "Plot 137, Prabhat Colony, Santacruz E, Mumbai 400055"),
    ward("H/W", "Ward H/West Office", "Bandra", "ac.hw@mcgm.gov.in", "St. Martin Road, Bandra W, Mumbai 400050"),
    ward("K/E", "Ward K/East Office", "Andheri E", "ac.ke@mcgm.gov.in", "Azad Road, Gundavali, Andheri E, Mumbai 400069"),
    ward("K/W", "Ward K/West Office", "Andheri W", "ac.kw@mcgm.gov.in", "Paliram Road, Andheri W, Mumbai 400058"),
    ward("P/S", "Ward P/South Office", "Goregaon", "ac.ps@mcgm.gov.in", "CTS 746, Goregaon W, Mumbai 400104"),
    ward("P/N", "Ward P/North Office", "Malad", "ac.pn@mcgm.gov.in", "Liberty Garden, Malad W, Mumbai 400064"),
    ward("R/S", "Ward R/South Office", "Kandivali", "ac.rs@mcgm.gov.in", "M.G. Cross Road No. 2, Kandivali W, Mumbai 400067"),
    ward("R/N", "Ward R/North Office", "Dahisar", "ac.rn@mcgm.gov.in", "Sudhir Phadke Bridge, Dahisar W, Mumbai 400068"),
    ward("R/C", "Ward R/Central Office", "Borivali", "ac.rc@mcgm.gov.in", "Chandavarkar Road, Borivali W, Mumbai 400092"),
    // Eastern suburbs
    ward("L", "Ward L Office", "Kurla", "ac.l@mcgm.gov.in", "L.Y. Market Bldg, Kurla W, Mumbai 400070"),
    ward("M/E", "Ward M/East Office", "Govandi", "ac.me@mcgm.gov.in", "M.T. Kadam Marg, Govandi, Mumbai 400043"),
    ward("M/W", "Ward M/West Office", "Chembur", "ac.mw@mcgm.gov.in", "Sharadbhau Acharya Marg, Chembur, Mumbai 400071"),
    ward("N", "Ward N Office", "Ghatkopar", "ac.n@mcgm.gov.in", "Jawahar Road, Ghatkopar E, Mumbai 400077"),
    ward("S", "Ward S Office", "Bhandup", "ac.s@mcgm.gov.in", "LBS Marg, Bhandup W, Mumbai 400078"),
    ward("T", "Ward T Office", "Mulund", "ac.t@mcgm.gov.in", "Lala Devidayal Road, Mulund W, Mumbai 400080"),
];

/// Central authorities (levels 2-5)
pub const CENTRAL_CONTACTS: &[Contact] = &[
    Contact {
        level: EscalationLevel::Bmc,
        ward_code: None,
        name: "BMC Central Grievance",
        designation: "Municipal Commissioner Office",
        area: None,
        email: "mc@mcgm.gov.in",
        phone: "022-22620251",
        whatsapp: Some("+918999228999"),
        toll_number: Some("1916"),
        address: "Municipal Corporation Head Office, Fort, Mumbai 400001",
        working_hours: "10:00 AM - 6:00 PM",
        working_days: "Monday - Saturday",
    },
    Contact {
        level: EscalationLevel::ChiefEngineer,
        ward_code: None,
        name: "Chief Engineer - SWM",
        designation: "Solid Waste Management",
        area: None,
        email: "che.swm@mcgm.gov.in",
        phone: "022-24945186",
        whatsapp: None,
        toll_number: None,
        address: "Love Grove Complex, Worli, Mumbai 400018",
        working_hours: "10:00 AM - 6:00 PM",
        working_days: "Monday - Friday",
    },
    Contact {
        level: EscalationLevel::Mpcb,
        ward_code: None,
        name: "MPCB Mumbai",
        designation: "Regional Officer",
        area: None,
        email: "romumbai@mpcb.gov.in",
        phone: "022-24010437",
        whatsapp: None,
        toll_number: None,
        address: "Kalpataru Point, Sion E, Mumbai 400022",
        working_hours: "10:00 AM - 5:30 PM",
        working_days: "Monday - Friday",
    },
    Contact {
        level: EscalationLevel::Ngt,
        ward_code: None,
        name: "National Green Tribunal",
        designation: "Western Zone Bench",
        area: None,
        email: "ngt-pune@gov.in",
        phone: "020-26140446",
        whatsapp: None,
        toll_number: None,
        address: "NGT Western Zone, Pune 411001",
        working_hours: "10:00 AM - 5:00 PM",
        working_days: "Monday - Friday",
    },
];

/// Find a ward office by its ward code
pub fn ward_contact(ward_code: &str) -> Option<&'static Contact> {
    WARD_CONTACTS
        .iter()
        .find(|c| c.ward_code == Some(ward_code))
}

/// Find the central authority for a tier
pub fn central_contact(level: EscalationLevel) -> Option<&'static Contact> {
    CENTRAL_CONTACTS.iter().find(|c| c.level == level)
}

/// All contacts at a tier
///
/// The ward tier returns every ward office; other tiers filter the central
/// list (the field-worker tier has no directory entry).
pub fn contacts_by_level(level: EscalationLevel) -> Vec<&'static Contact> {
    if level == EscalationLevel::Ward {
        return WARD_CONTACTS.iter().collect();
    }
    CENTRAL_CONTACTS
        .iter()
        .filter(|c| c.level == level)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_sizes() {
        assert_eq!(WARD_CONTACTS.len(), 24);
        assert_eq!(CENTRAL_CONTACTS.len(), 4);
    }

    #[test]
    fn test_ward_lookup() {
        let bandra = ward_contact("H/W").unwrap();
        assert_eq!(bandra.name, "Ward H/West Office");
        assert_eq!(bandra.area, Some("Bandra"));
        assert_eq!(bandra.level, EscalationLevel::Ward);

        assert!(ward_contact("Z/Z").is_none());
        assert!(ward_contact("").is_none());
    }

    #[test]
    fn test_central_lookup() {
        let ngt = central_contact(EscalationLevel::Ngt).unwrap();
        assert_eq!(ngt.designation, "Western Zone Bench");

        // the ward and field tiers have no central entry
        assert!(central_contact(EscalationLevel::Ward).is_none());
        assert!(central_contact(EscalationLevel::FieldUnit).is_none());
    }

    #[test]
    fn test_contacts_by_level() {
        assert_eq!(contacts_by_level(EscalationLevel::Ward).len(), 24);
        assert_eq!(contacts_by_level(EscalationLevel::Bmc).len(), 1);
        assert_eq!(contacts_by_level(EscalationLevel::FieldUnit).len(), 0);
    }

    #[test]
    fn test_every_ward_has_code_and_area() {
        for contact in WARD_CONTACTS {
            assert!(contact.ward_code.is_some());
            assert!(contact.area.is_some());
            assert_eq!(contact.level, EscalationLevel::Ward);
        }
    }

    #[test]
    fn test_ward_codes_are_unique() {
        let mut codes: Vec<_> = WARD_CONTACTS.iter().map(|c| c.ward_code).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), WARD_CONTACTS.len());
    }

    #[test]
    fn test_contact_serialization_skips_absent_fields() {
        let json = serde_json::to_value(central_contact(EscalationLevel::Mpcb).unwrap()).unwrap();
        assert_eq!(json["level"], "MPCB");
        assert_eq!(json["email"], "romumbai@mpcb.gov.in");
        assert!(json.get("wardCode").is_none());
        assert!(json.get("whatsapp").is_none());
    }
}
