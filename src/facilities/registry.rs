//! Hand-curated Kochi facility registry and the keyword → tag map.

use crate::models::Facility;

/// Disease-identifier substring → facility tags it implies.
pub const KEYWORD_TAGS: &[(&str, &[&str])] = &[
    ("fever", &["emergency", "critical-care", "multispecialty"]),
    ("dengue", &["emergency", "multispecialty"]),
    ("malaria", &["emergency", "multispecialty"]),
    ("covid", &["emergency", "critical-care"]),
    ("cardiac", &["cardiac", "multispecialty"]),
    ("heart", &["cardiac"]),
    ("kidney", &["nephrology", "multispecialty", "transplant"]),
    ("cancer", &["oncology", "multispecialty"]),
    ("pregnancy", &["maternity", "multispecialty"]),
];

/// Hospitals in Kochi, in display priority order for equal scores.
pub fn kochi_facilities() -> Vec<Facility> {
    vec![
        Facility::new(
            "Aster Medcity",
            "Kuttisahib Road, Cheranelloor, Kochi, Kerala 682027",
            "+91-484-6699999",
            "https://www.asterhospitals.in/hospitals/aster-medcity-kochi",
            &["multispecialty", "tertiary", "critical-care", "surgery"],
        ),
        Facility::new(
            "Amrita Institute of Medical Sciences (AIMS) - Kochi",
            "Amrita Lane, Elamakkara P.O., Kochi 682026",
            "+91-484-2802020",
            "https://www.amritahospitals.org/kochi",
            &["multispecialty", "teaching-hospital", "critical-care", "organ-transplant"],
        ),
        Facility::new(
            "VPS Lakeshore Hospital",
            "Nettoor/Maradu, Ernakulam, Kochi 682040",
            "+91-484-2701032",
            "https://www.vpslakeshorehospital.com",
            &["multispecialty", "cardiac", "critical-care", "emergency"],
        ),
        Facility::new(
            "Rajagiri Hospital (Aluva)",
            "Chunangamvely Road, GTN Junction, Aluva, Kochi",
            "+91-484-2905100",
            "https://www.rajagirihospital.com",
            &["multispecialty", "nephrology", "transplant", "critical-care"],
        ),
        Facility::new(
            "Apollo Adlux Hospital",
            "NH 66, Kochi",
            "+91-484-2399000",
            "https://www.apollohospitals.com",
            &["multispecialty", "critical-care", "emergency"],
        ),
        Facility::new(
            "Lisie Hospital",
            "Nadama, Kochi",
            "+91-484-2604626",
            "https://www.lisiehospital.org",
            &["multispecialty", "cardiology", "surgery"],
        ),
    ]
}
