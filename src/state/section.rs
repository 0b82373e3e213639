//! Section Navigation Model
//!
//! The app shell renders exactly one section at a time. Sections are a
//! closed set, so the active one is a plain enum resolved through a
//! lookup table rather than any dynamic dispatch.

/// Identifier for each top-level section of the app
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    Dashboard,
    Singapore,
    Problem,
    Tutor,
    Gamification,
    Mathematics,
    Science,
}

/// Static metadata for one section
pub struct SectionMeta {
    pub section: Section,
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Lookup table driving the sidebar and header
pub const SECTIONS: &[SectionMeta] = &[
    SectionMeta {
        section: Section::Hero,
        id: "hero",
        label: "Início",
        icon: "🏠",
    },
    SectionMeta {
        section: Section::Dashboard,
        id: "dashboard",
        label: "Dashboard",
        icon: "🏆",
    },
    SectionMeta {
        section: Section::Mathematics,
        id: "mathematics",
        label: "Matemática",
        icon: "📐",
    },
    SectionMeta {
        section: Section::Science,
        id: "science",
        label: "Ciências",
        icon: "🔬",
    },
    SectionMeta {
        section: Section::Singapore,
        id: "singapore",
        label: "Método Singapura",
        icon: "🧠",
    },
    SectionMeta {
        section: Section::Problem,
        id: "problem",
        label: "Problema do Dia",
        icon: "🎯",
    },
    SectionMeta {
        section: Section::Tutor,
        id: "tutor",
        label: "Tutor de IA",
        icon: "💬",
    },
    SectionMeta {
        section: Section::Gamification,
        id: "gamification",
        label: "Conquistas",
        icon: "⭐",
    },
];

impl Section {
    /// Metadata for this section from the lookup table
    pub fn meta(&self) -> &'static SectionMeta {
        SECTIONS
            .iter()
            .find(|m| m.section == *self)
            .unwrap_or(&SECTIONS[1])
    }

    /// Resolve a section from its string id
    pub fn from_id(id: &str) -> Option<Section> {
        SECTIONS.iter().find(|m| m.id == id).map(|m| m.section)
    }

    pub fn label(&self) -> &'static str {
        self.meta().label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_section_has_meta() {
        for meta in SECTIONS {
            assert_eq!(meta.section.meta().id, meta.id);
        }
    }

    #[test]
    fn test_from_id() {
        assert_eq!(Section::from_id("singapore"), Some(Section::Singapore));
        assert_eq!(Section::from_id("dashboard"), Some(Section::Dashboard));
        assert_eq!(Section::from_id("nope"), None);
    }
}
