// src/services/triage.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

/// A nearby care location attached to high-severity replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    pub name: String,
    pub distance: String,
    pub contact: String,
}

/// Which trigger set matched, for metrics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriageRule {
    Head,
    Heart,
    Fever,
    Default,
}

impl TriageRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriageRule::Head => "Head",
            TriageRule::Heart => "Heart",
            TriageRule::Fever => "Fever",
            TriageRule::Default => "Default",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageReply {
    pub advice: String,
    pub severity: Severity,
    pub facilities: Vec<Facility>,
    pub rule: TriageRule,
}

const HEADACHE_ADVICE: &str = "I understand you're experiencing headaches. This could be due to \
tension or stress, dehydration, eye strain from screens, or lack of sleep. Stay hydrated, take \
regular breaks from screens, practice relaxation techniques, and ensure adequate sleep (7-9 \
hours). Consider over-the-counter pain relief if needed. If headaches persist for more than a \
few days or are severe, consult a healthcare professional.";

const CHEST_PAIN_ADVICE: &str = "IMPORTANT: Chest pain can be a serious symptom that requires \
immediate medical attention. If you're experiencing severe chest pain, shortness of breath, or \
other concerning symptoms, please seek emergency medical care immediately. I've found hospitals \
near your registered address for immediate care if needed.";

const FEVER_ADVICE: &str = "I see you're experiencing fever. For mild fever (99-101\u{b0}F), \
rest, stay hydrated, monitor your temperature regularly, and use acetaminophen or ibuprofen as \
directed. Seek medical care if the fever rises above 103\u{b0}F (39.4\u{b0}C), lasts more than \
3 days, or is accompanied by severe symptoms or difficulty breathing.";

const DEFAULT_ADVICE: &str = "Thank you for sharing your symptoms. Monitor them closely, stay \
hydrated, and get adequate rest. Consider consulting a healthcare professional if symptoms \
persist or worsen, if you develop new concerning symptoms, or if you have underlying health \
conditions. This is general guidance and not a substitute for professional medical advice.";

fn emergency_facilities() -> Vec<Facility> {
    vec![
        Facility {
            name: "City General Hospital".to_string(),
            distance: "2.3 km".to_string(),
            contact: "(555) 123-4567".to_string(),
        },
        Facility {
            name: "Emergency Medical Center".to_string(),
            distance: "3.1 km".to_string(),
            contact: "(555) 987-6543".to_string(),
        },
        Facility {
            name: "Regional Health System".to_string(),
            distance: "4.5 km".to_string(),
            contact: "(555) 456-7890".to_string(),
        },
    ]
}

/// Map free-text symptoms to a canned advisory reply.
///
/// Rules are checked in priority order: head, then chest/heart, then fever,
/// then a generic fallback. The sets overlap on purpose, so the order is part
/// of the contract. Always returns a reply, even for empty input.
pub fn triage(message: &str) -> TriageReply {
    let msg_lower = message.to_lowercase();

    if msg_lower.contains("headache") || msg_lower.contains("head") {
        return TriageReply {
            advice: HEADACHE_ADVICE.to_string(),
            severity: Severity::Low,
            facilities: Vec::new(),
            rule: TriageRule::Head,
        };
    }

    if msg_lower.contains("chest pain") || msg_lower.contains("heart") {
        return TriageReply {
            advice: CHEST_PAIN_ADVICE.to_string(),
            severity: Severity::High,
            facilities: emergency_facilities(),
            rule: TriageRule::Heart,
        };
    }

    if msg_lower.contains("fever") || msg_lower.contains("temperature") {
        return TriageReply {
            advice: FEVER_ADVICE.to_string(),
            severity: Severity::Medium,
            facilities: Vec::new(),
            rule: TriageRule::Fever,
        };
    }

    TriageReply {
        advice: DEFAULT_ADVICE.to_string(),
        severity: Severity::Low,
        facilities: Vec::new(),
        rule: TriageRule::Default,
    }
}
