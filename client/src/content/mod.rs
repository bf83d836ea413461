//! Hand-authored content tables rendered by the section components.
//!
//! Records are `Copy` and `'static` so views can iterate them without
//! cloning or signals.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

mod data;

pub use data::{ACHIEVEMENTS, CERTIFICATES, EDUCATION, PROFILE, PROJECTS, SKILL_CATEGORIES, TRAINING};

/// Certificates shown before "View More".
pub const CERTIFICATES_INITIAL: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Hero banner and contact details.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub traits: &'static [&'static str],
    pub headline_skills: &'static [&'static str],
    pub tagline: &'static str,
    pub email: &'static str,
    pub social: &'static [SocialLink],
    pub resume_href: &'static str,
    pub resume_preview: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrainingTool {
    pub name: &'static str,
    pub category: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Training {
    pub title: &'static str,
    pub organization: &'static str,
    pub duration: &'static str,
    pub location: &'static str,
    pub highlights: &'static [&'static str],
    pub tools: &'static [TrainingTool],
}

impl Training {
    /// Tool categories in first-seen order.
    pub fn categories(&self) -> Vec<&'static str> {
        let mut seen: Vec<&'static str> = Vec::new();
        for tool in self.tools {
            if !seen.contains(&tool.category) {
                seen.push(tool.category);
            }
        }
        seen
    }

    pub fn tools_in(&self, category: &str) -> Vec<&'static str> {
        self.tools.iter().filter(|t| t.category == category).map(|t| t.name).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    pub technologies: &'static [&'static str],
    pub image: &'static str,
    pub repository: &'static str,
    pub live: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Education {
    pub institution: &'static str,
    pub degree: &'static str,
    pub location: &'static str,
    pub duration: &'static str,
    pub details: &'static [&'static str],
    pub image: &'static str,
    pub website: &'static str,
}

/// Side of the timeline an entry sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineSide {
    Left,
    Right,
}

impl TimelineSide {
    /// Entries alternate sides, starting on the left.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 { Self::Left } else { Self::Right }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Left => "timeline-entry timeline-entry--left",
            Self::Right => "timeline-entry timeline-entry--right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certificate {
    pub title: &'static str,
    pub organization: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub preview: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}
