//! Skill categories for the Skills section.

use super::{Accent, Icon};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub icon: Icon,
    pub title: &'static str,
    pub skills: &'static [&'static str],
    pub accent: Accent,
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        icon: Icon::Monitor,
        title: "Frontend Development",
        skills: &["HTML5", "CSS3", "JavaScript", "Bootstrap", "Responsive Design", "UI/UX Design"],
        accent: Accent::Primary,
    },
    SkillCategory {
        icon: Icon::Server,
        title: "Backend Development",
        skills: &["Python", "Java", "C", "C++", "REST APIs", "Server Architecture"],
        accent: Accent::Accent,
    },
    SkillCategory {
        icon: Icon::Database,
        title: "Database & Tools",
        skills: &["SQL", "Git", "Version Control", "Database Design", "Query Optimization"],
        accent: Accent::Primary,
    },
    SkillCategory {
        icon: Icon::Wrench,
        title: "AI & Machine Learning",
        skills: &["OpenCV", "Computer Vision", "AI Algorithms", "Data Analysis", "Python ML Libraries"],
        accent: Accent::Accent,
    },
];

pub const LEARNING_NOTE: &str = "Currently exploring advanced AI/ML concepts, cloud technologies, \
    and modern frameworks to stay at the forefront of technology.";
