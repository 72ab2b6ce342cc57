//! Role-tailored report interpretation and the PDF export stub.
//!
//! Like the chat responses, the interpretation is canned: one body for
//! patients, one for clinicians, selected by the signed-in role. Export
//! produces only the confirmation line shown by the download dialog; no
//! PDF is rendered.

use serde::{Deserialize, Serialize};

use crate::models::enums::UserRole;

// ═══════════════════════════════════════════
// Canned bodies
// ═══════════════════════════════════════════

/// Plain-language reading shown to patients and anonymous readers.
const PATIENT_INTERPRETATION: &str = "Your Complete Blood Count (CBC) results look good overall! Here's what your numbers mean:

**Good News:** All your main blood counts are within the healthy range, which suggests your blood is functioning well.

**What this means for you:**
• Your red blood cells are carrying oxygen properly throughout your body
• Your immune system (white blood cells) appears to be at normal levels
• Your blood clotting ability (platelets) is functioning normally
• No signs of anemia or blood disorders

**Recommendations:**
• Continue maintaining a healthy lifestyle
• Keep up with regular check-ups
• Stay hydrated and eat a balanced diet rich in iron and vitamins

If you have any concerns or symptoms, don't hesitate to discuss them with your healthcare provider.";

/// Clinical reading shown to doctors.
const DOCTOR_INTERPRETATION: &str = "**Clinical Summary:** Complete Blood Count within normal limits

**Laboratory Findings:**
• Hemoglobin: 12.5 g/dL (WNL) - Adequate oxygen-carrying capacity
• RBC: 4.2 million/μL (WNL) - Normal erythropoiesis
• WBC: 8.5 thousand/μL (WNL) - No evidence of infection or immunosuppression
• Platelets: 350 thousand/μL (WNL) - Adequate hemostatic function
• Hematocrit: 38.5% (WNL) - Normal blood volume composition

**Clinical Interpretation:**
No evidence of anemia, polycythemia, leukocytosis, leukopenia, or thrombocytopenia.
Results suggest normal hematopoietic function.

**Recommendations:**
• Continue routine monitoring as clinically indicated
• No immediate intervention required
• Consider trending if patient has ongoing symptoms
• Follow standard guidelines for age-appropriate screening

**Differential Considerations:**
Normal CBC does not exclude iron deficiency without stores evaluation or B12/folate deficiency without specific testing.";

/// Select the interpretation body for the reader's role. Anonymous
/// sessions read the patient version.
pub fn interpretation_for(role: Option<&UserRole>) -> &'static str {
    match role {
        Some(UserRole::Doctor) => DOCTOR_INTERPRETATION,
        _ => PATIENT_INTERPRETATION,
    }
}

// ═══════════════════════════════════════════
// PDF export
// ═══════════════════════════════════════════

/// Choices offered by the download dialog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Include the chat transcript in the exported report.
    pub include_chat: bool,
}

/// The confirmation line for the chosen export variant.
pub fn export_summary(options: ExportOptions) -> String {
    let chat_text = if options.include_chat {
        " with chat conversation"
    } else {
        ""
    };
    format!("PDF report{} downloaded successfully!", chat_text)
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
