use crate::models::Facility;

/// Reply text for every routing branch. Friendly, short, and never a
/// confident diagnosis.
pub struct ReplyTemplates;

impl ReplyTemplates {
    /// Also used for blank messages.
    pub fn greeting() -> &'static str {
        "👋 Hey — I'm *WellnessHelp*, your friendly WhatsApp health assistant!\n\n\
         Tell me your symptoms (e.g., \"fever and body ache\") or ask about a disease like \"dengue\".\n\
         I can give: symptoms, prevention, remedies, vaccination info, and local hospital suggestions in Kochi."
    }

    pub fn thanks() -> &'static str {
        "😊 You're welcome! Glad I could help. Anything else I can do?"
    }

    pub fn vaccination() -> &'static str {
        "💉 Here is the vaccination schedule (infant, child, adult)."
    }

    pub fn fallback() -> &'static str {
        "😕 I couldn't find an exact answer for that.\n\n\
         Try asking about:\n\
         • Dengue symptoms\n\
         • Malaria prevention\n\
         • Vaccination schedule\n\n\
         If this is an emergency, please contact local emergency services or visit the nearest hospital right away."
    }

    /// Hedged note for a disease inferred from symptom overlap.
    pub fn guessed_disease(title: &str) -> String {
        format!(
            "🤖 It looks like your symptoms match *{title}*.\n\
             ⚠️ This is only an initial guess — please consult a doctor if you feel unwell.\n\
             I can also suggest nearby hospitals in Kochi if you'd like."
        )
    }

    pub fn legacy_disease(info: &str) -> String {
        format!("🤝 {info}")
    }

    /// Bulleted facility block appended below an answer.
    pub fn facility_block(facilities: &[Facility]) -> String {
        let lines: Vec<String> = facilities
            .iter()
            .map(|f| format!("• {} — {} (☎ {})", f.name, f.address, f.phone))
            .collect();
        format!(
            "\n\n🏥 *Nearby hospitals in Kochi you can consider:*\n{}",
            lines.join("\n")
        )
    }
}
