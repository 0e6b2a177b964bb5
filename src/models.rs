//! Frontend Models
//!
//! Section anchors and the shapes of the static portfolio content.

use web_scrollspy::Anchor;

/// Page sections, in scan order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    /// Fixed priority order used for navigation and scroll tracking
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    /// Navigation link label
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Contact => "Contact",
        }
    }
}

impl Anchor for SectionId {
    fn anchor_id(self) -> &'static str {
        self.as_str()
    }
}

/// Outbound link (profile, email, certificate, ...)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

impl Link {
    /// `mailto:` links open in place, everything else in a new tab
    pub fn target(&self) -> &'static str {
        if self.href.starts_with("mailto:") { "_self" } else { "_blank" }
    }
}

/// Row in the contact information list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactEntry {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

impl ContactEntry {
    pub fn link(&self) -> Option<Link> {
        self.href.map(|href| Link { label: self.value, href })
    }
}

/// Entry on the About timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineEntry {
    pub years: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub description: &'static str,
}

/// Named list of skills shown on the About panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillSummary {
    pub heading: &'static str,
    pub items: &'static [&'static str],
}

/// Number of responsibilities shown while an experience card is collapsed
pub const COLLAPSED_RESPONSIBILITIES: usize = 2;

/// Work experience card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub company_url: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub employment: &'static str,
    pub logo: Option<&'static str>,
    pub certificate_url: Option<&'static str>,
    pub responsibilities: &'static [&'static str],
    pub skills: &'static [&'static str],
}

impl Experience {
    /// Responsibilities to render for the given expand state
    pub fn visible_responsibilities(&self, expanded: bool) -> &'static [&'static str] {
        if expanded {
            self.responsibilities
        } else {
            let end = self.responsibilities.len().min(COLLAPSED_RESPONSIBILITIES);
            &self.responsibilities[..end]
        }
    }

    /// Whether the card needs a show more / show less toggle
    pub fn is_expandable(&self) -> bool {
        self.responsibilities.len() > COLLAPSED_RESPONSIBILITIES
    }
}

/// Project card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub live_url: &'static str,
    pub source_url: &'static str,
    pub features: &'static [&'static str],
}

/// Skill category tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillFilter {
    #[default]
    All,
    Languages,
    Frontend,
    Backend,
    Tools,
}

impl SkillFilter {
    pub const ALL: [SkillFilter; 5] = [
        SkillFilter::All,
        SkillFilter::Languages,
        SkillFilter::Frontend,
        SkillFilter::Backend,
        SkillFilter::Tools,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillFilter::All => "All Skills",
            SkillFilter::Languages => "Languages",
            SkillFilter::Frontend => "Frontend",
            SkillFilter::Backend => "Backend",
            SkillFilter::Tools => "Tools & Others",
        }
    }

    pub fn matches(self, category: SkillFilter) -> bool {
        self == SkillFilter::All || self == category
    }
}

/// A rated skill (level is 0..=100)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

/// One star of a five-star rating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
    Empty,
}

impl Skill {
    /// Five-star rendering of the level: a full star per 20 points, a half
    /// star for a remainder of 10 or more
    pub fn stars(&self) -> [Star; 5] {
        let full = usize::from(self.level / 20);
        let half = self.level % 20 >= 10;
        let mut stars = [Star::Empty; 5];
        for (i, star) in stars.iter_mut().enumerate() {
            if i < full {
                *star = Star::Full;
            } else if i == full && half {
                *star = Star::Half;
            }
        }
        stars
    }
}

/// Group of skills under one category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillGroup {
    pub category: SkillFilter,
    pub title: &'static str,
    pub skills: &'static [Skill],
}

/// Groups visible under the selected filter, in their original order
pub fn filter_skill_groups(groups: &[SkillGroup], filter: SkillFilter) -> Vec<SkillGroup> {
    groups
        .iter()
        .filter(|group| filter.matches(group.category))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_experience(responsibilities: &'static [&'static str]) -> Experience {
        Experience {
            role: "Role",
            company: "Company",
            company_url: "https://example.com",
            period: "2024",
            location: "Remote",
            employment: "Internship",
            logo: None,
            certificate_url: None,
            responsibilities,
            skills: &[],
        }
    }

    #[test]
    fn test_experience_expand_collapse() {
        let exp = make_experience(&["one", "two", "three", "four"]);
        assert!(exp.is_expandable());
        assert_eq!(exp.visible_responsibilities(false), &["one", "two"]);
        assert_eq!(exp.visible_responsibilities(true).len(), 4);
        // Collapsing again restores exactly the first two
        assert_eq!(exp.visible_responsibilities(false), &["one", "two"]);
    }

    #[test]
    fn test_short_experience_not_expandable() {
        let exp = make_experience(&["only"]);
        assert!(!exp.is_expandable());
        assert_eq!(exp.visible_responsibilities(false), &["only"]);
        assert_eq!(exp.visible_responsibilities(true), &["only"]);
    }

    const GROUPS: &[SkillGroup] = &[
        SkillGroup { category: SkillFilter::Languages, title: "Languages", skills: &[] },
        SkillGroup { category: SkillFilter::Backend, title: "Backend", skills: &[] },
        SkillGroup { category: SkillFilter::Tools, title: "Tools", skills: &[] },
        SkillGroup { category: SkillFilter::Backend, title: "Databases", skills: &[] },
    ];

    #[test]
    fn test_filter_backend_only() {
        let shown = filter_skill_groups(GROUPS, SkillFilter::Backend);
        let titles: Vec<_> = shown.iter().map(|g| g.title).collect();
        assert_eq!(titles, vec!["Backend", "Databases"]);
    }

    #[test]
    fn test_filter_all_shows_everything() {
        assert_eq!(filter_skill_groups(GROUPS, SkillFilter::All).len(), GROUPS.len());
        assert!(filter_skill_groups(GROUPS, SkillFilter::Frontend).is_empty());
    }

    #[test]
    fn test_star_rating() {
        use Star::*;
        let stars = |level| Skill { name: "x", level }.stars();
        assert_eq!(stars(95), [Full, Full, Full, Full, Half]);
        assert_eq!(stars(90), [Full, Full, Full, Full, Half]);
        assert_eq!(stars(85), [Full, Full, Full, Full, Empty]);
        assert_eq!(stars(60), [Full, Full, Full, Empty, Empty]);
        assert_eq!(stars(100), [Full; 5]);
        assert_eq!(stars(0), [Empty; 5]);
    }

    #[test]
    fn test_link_target() {
        assert_eq!(Link { label: "Email", href: "mailto:a@b.c" }.target(), "_self");
        assert_eq!(Link { label: "GitHub", href: "https://github.com" }.target(), "_blank");
    }

    #[test]
    fn test_section_order() {
        let ids: Vec<_> = SectionId::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(ids, vec!["home", "about", "experience", "projects", "skills", "contact"]);
    }
}
