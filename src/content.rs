//! Page content as data.
//!
//! Everything the sections display - names, paragraphs, stat values, skill
//! lists, project descriptions, links - lives in a profile document rather
//! than in the render code, so the reveal/counter machinery stays free of
//! content coupling. A default profile is compiled in; an on-disk copy at
//! `assets/profile.json` overrides it when present, so content edits don't
//! need a rebuild.

use serde::Deserialize;

/// The compiled-in profile document
pub const DEFAULT_PROFILE_JSON: &str = include_str!("../assets/profile.json");

/// On-disk override path, relative to the working directory
const PROFILE_PATH: &str = "assets/profile.json";

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub hero: Hero,
    pub about: About,
    pub skills: Skills,
    pub projects: Projects,
    pub education: Education,
    pub contact: Contact,
    pub footer: Footer,
}

impl Profile {
    /// Load the profile, preferring the on-disk copy. A missing file is
    /// normal (installed binaries run without assets); an unparsable file
    /// is logged and ignored rather than taking the page down.
    pub fn load() -> Self {
        match std::fs::read_to_string(PROFILE_PATH) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(profile) => {
                    log::info!("loaded profile from {}", PROFILE_PATH);
                    return profile;
                }
                Err(e) => {
                    log::warn!("ignoring invalid {}: {}", PROFILE_PATH, e);
                }
            },
            Err(_) => {
                log::info!("no {} on disk, using embedded profile", PROFILE_PATH);
            }
        }
        Self::embedded()
    }

    pub fn embedded() -> Self {
        serde_json::from_str(DEFAULT_PROFILE_JSON).expect("embedded profile.json is valid")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Social {
    pub name: String,
    pub icon: String,
    pub url: String,
}

/// Kicker line, two-tone title, and subtitle shared by section headers
#[derive(Debug, Clone, Deserialize)]
pub struct SectionHeader {
    pub kicker: String,
    pub title: String,
    pub title_accent: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IconText {
    pub icon: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hero {
    pub location: String,
    pub name: String,
    pub accent_name: String,
    pub title: String,
    pub description: String,
    pub value_props: Vec<IconText>,
    pub primary_cta: Link,
    pub secondary_cta: String,
    pub socials: Vec<Social>,
    /// Optional background artwork under `assets/`
    pub background: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct About {
    pub kicker: String,
    pub title: String,
    pub title_accent: String,
    pub title_rest: String,
    pub expertise: Vec<ExpertiseArea>,
    pub paragraphs: Vec<String>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpertiseArea {
    pub icon: String,
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stat {
    pub icon: String,
    pub label: String,
    pub value: StatValue,
}

/// Whether a stat counts up or renders as-is. Fractional stats (the 7.5
/// CGPA) deliberately bypass the counter: it only ramps whole numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Animated {
        end: u32,
        #[serde(default)]
        suffix: String,
    },
    Literal {
        text: String,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Skills {
    pub header: SectionHeader,
    pub categories: Vec<SkillCategory>,
    pub quick_facts: Vec<QuickFact>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillCategory {
    pub icon: String,
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuickFact {
    pub icon: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Projects {
    pub header: SectionHeader,
    pub entries: Vec<Project>,
    pub view_all: Link,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub description: String,
    /// Optional card artwork under `assets/`
    #[serde(default)]
    pub image: Option<String>,
    pub tech: Vec<String>,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub badge: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    pub header: SectionHeader,
    pub entries: Vec<EducationEntry>,
    pub achievement: Achievement,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EducationEntry {
    pub icon: String,
    pub degree: String,
    pub institution: String,
    pub duration: String,
    pub details: String,
    #[serde(default)]
    pub highlight: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Achievement {
    pub icon: String,
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    pub header: SectionHeader,
    pub info_heading: String,
    pub info_blurb: String,
    pub details: Vec<ContactDetail>,
    pub socials_heading: String,
    pub socials_blurb: String,
    pub socials: Vec<Social>,
    pub availability_lead: String,
    pub availability_rest: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactDetail {
    pub icon: String,
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Footer {
    pub brand: String,
    pub blurb: String,
    pub quick_links: Vec<QuickLink>,
    pub project_links: Vec<Link>,
    pub socials: Vec<Social>,
    pub copyright: String,
    pub tagline: String,
}

/// An in-page anchor link; `section` names the target section
#[derive(Debug, Clone, Deserialize)]
pub struct QuickLink {
    pub label: String,
    pub section: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_profile_parses() {
        let profile = Profile::embedded();
        assert_eq!(profile.skills.categories.len(), 4);
        assert_eq!(profile.projects.entries.len(), 4);
        assert_eq!(profile.education.entries.len(), 3);
        assert_eq!(profile.footer.quick_links.len(), 6);
    }

    #[test]
    fn test_fractional_stat_is_literal() {
        let profile = Profile::embedded();
        let literals: Vec<_> = profile
            .about
            .stats
            .iter()
            .filter(|s| matches!(s.value, StatValue::Literal { .. }))
            .collect();
        assert_eq!(literals.len(), 1);
        assert_eq!(literals[0].label, "CGPA");
    }

    #[test]
    fn test_animated_stats_carry_suffixes() {
        let profile = Profile::embedded();
        let suffixes: Vec<String> = profile
            .about
            .stats
            .iter()
            .filter_map(|s| match &s.value {
                StatValue::Animated { suffix, .. } => Some(suffix.clone()),
                StatValue::Literal { .. } => None,
            })
            .collect();
        assert_eq!(suffixes, vec!["+", "+", "%"]);
    }

    #[test]
    fn test_stat_value_untagged_forms() {
        let animated: StatValue = serde_json::from_str(r#"{ "end": 15, "suffix": "+" }"#).unwrap();
        assert!(matches!(animated, StatValue::Animated { end: 15, .. }));

        let literal: StatValue = serde_json::from_str(r#"{ "text": "7.5" }"#).unwrap();
        assert!(matches!(literal, StatValue::Literal { .. }));
    }

    #[test]
    fn test_featured_project_has_badge() {
        let profile = Profile::embedded();
        let featured: Vec<_> = profile
            .projects
            .entries
            .iter()
            .filter(|p| p.featured)
            .collect();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].badge.as_deref(), Some("Live Project"));
    }
}
