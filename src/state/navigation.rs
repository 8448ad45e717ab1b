//! Navigation-related state types.
//!
//! This module contains the page sections and input focus.

/// Specifying the different foci.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Navigation,
    Form,
}

/// Specifying the page sections in scroll order.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Section {
    Hero,
    About,
    Projects,
    Education,
    Competencies,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Education,
        Section::Competencies,
        Section::Skills,
        Section::Contact,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Education => "Education",
            Section::Competencies => "Competencies",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    pub fn index(&self) -> usize {
        Section::ALL
            .iter()
            .position(|section| section == self)
            .unwrap_or(0)
    }

    /// Return the following section, stopping at the last one.
    ///
    pub fn next(&self) -> Section {
        let index = (self.index() + 1).min(Section::ALL.len() - 1);
        Section::ALL[index]
    }

    /// Return the preceding section, stopping at the first one.
    ///
    pub fn previous(&self) -> Section {
        Section::ALL[self.index().saturating_sub(1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus() {
        assert_eq!(Focus::Navigation, Focus::Navigation);
        assert_ne!(Focus::Navigation, Focus::Form);
    }

    #[test]
    fn test_section_order() {
        assert_eq!(Section::Hero.next(), Section::About);
        assert_eq!(Section::Skills.next(), Section::Contact);
        assert_eq!(Section::About.previous(), Section::Hero);
    }

    #[test]
    fn test_section_bounds() {
        assert_eq!(Section::Contact.next(), Section::Contact);
        assert_eq!(Section::Hero.previous(), Section::Hero);
    }

    #[test]
    fn test_section_index() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }
}
