//! # Weather Safety Checklist
//!
//! File: cli/src/checklist.rs
//! Author: Christi Mahu
//!
//! The static flood-safety checklist shown in the disclosure panel, plus the
//! page taglines.
//!
use serde::Serialize;

pub const TITLE: &str = "🛡️ Weather Safety Tips & Flood Checklist";
pub const CHAT_FOOTER: &str = "📘 Stay Informed. Stay Safe. - Suraksha Bot";
pub const CHECKLIST_FOOTER: &str = "📘 Stay Safe. Stay Alert. - Suraksha Bot";

/// One checklist entry: an icon, the emphasised action and its detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub icon: &'static str,
    pub action: &'static str,
    pub detail: &'static str,
}

impl ChecklistItem {
    /// Plain-text rendering for the terminal.
    pub fn to_line(&self) -> String {
        if self.detail.is_empty() {
            format!("{} {}", self.icon, self.action)
        } else {
            format!("{} {} {}", self.icon, self.action, self.detail)
        }
    }
}

pub const ITEMS: [ChecklistItem; 10] = [
    ChecklistItem {
        icon: "📻",
        action: "Listen to weather updates",
        detail: "from official sources like IMD or NDMA.",
    },
    ChecklistItem {
        icon: "📦",
        action: "Prepare an emergency kit",
        detail: "– flashlight, medicines, dry food, water, important documents.",
    },
    ChecklistItem {
        icon: "🔋",
        action: "Keep phone and power bank charged",
        detail: "before heavy rainfall starts.",
    },
    ChecklistItem {
        icon: "🚪",
        action: "Move valuables to higher places",
        detail: "if water enters your area.",
    },
    ChecklistItem {
        icon: "💡",
        action: "Avoid walking or driving through floodwaters",
        detail: "– even 6 inches can knock you down!",
    },
    ChecklistItem {
        icon: "⛰️",
        action: "Move to higher ground immediately",
        detail: "if you hear sirens or alerts.",
    },
    ChecklistItem {
        icon: "🤝",
        action: "Help elderly and children",
        detail: "reach safety first.",
    },
    ChecklistItem {
        icon: "📲",
        action: "Use social media responsibly",
        detail: "to share verified information only.",
    },
    ChecklistItem {
        icon: "🚫",
        action: "Do not touch electrical lines",
        detail: "or fallen poles during rain.",
    },
    ChecklistItem {
        icon: "🚧",
        action: "Obey local authorities and evacuation orders",
        detail: "without delay.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checklist_has_ten_distinct_items() {
        for (i, item) in ITEMS.iter().enumerate() {
            assert!(!item.action.is_empty());
            assert!(ITEMS[i + 1..].iter().all(|other| other.action != item.action));
        }
    }

    #[test]
    fn test_to_line() {
        assert_eq!(
            ITEMS[0].to_line(),
            "📻 Listen to weather updates from official sources like IMD or NDMA."
        );
        let bare = ChecklistItem {
            icon: "✅",
            action: "Stay calm",
            detail: "",
        };
        assert_eq!(bare.to_line(), "✅ Stay calm");
    }
}
