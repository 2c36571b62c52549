//! Education and career milestones for the Timeline section.

use super::Icon;

/// Category of a timeline entry; drives the badge colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineKind {
    Education,
    Experience,
    Milestone,
}

impl TimelineKind {
    /// Lowercase badge label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Education => "education",
            Self::Experience => "experience",
            Self::Milestone => "milestone",
        }
    }

    /// Badge colour classes.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Education => "text-blue-400 border-blue-400/30 bg-blue-400/10",
            Self::Experience => "text-green-400 border-green-400/30 bg-green-400/10",
            Self::Milestone => "text-purple-400 border-purple-400/30 bg-purple-400/10",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineEvent {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    /// Free-form date label (`"2024"`, `"Sep 2024"`, `"2023-2024"`).
    pub date: &'static str,
    pub kind: TimelineKind,
    pub tags: &'static [&'static str],
}

pub const TIMELINE: &[TimelineEvent] = &[
    TimelineEvent {
        icon: Icon::Award,
        title: "AIML Certificate - IIT Bhubaneswar",
        description: "Completed comprehensive course in Artificial Intelligence and Machine Learning from \
            prestigious IIT Bhubaneswar, gaining deep insights into modern AI techniques and applications.",
        date: "2024",
        kind: TimelineKind::Education,
        tags: &["AI/ML", "IIT", "Certification"],
    },
    TimelineEvent {
        icon: Icon::Briefcase,
        title: "Software Development Intern - Prodigy InfoTech",
        description: "Gained hands-on experience in software development, working on real-world projects \
            and collaborating with experienced developers to build scalable solutions.",
        date: "Sep 2024",
        kind: TimelineKind::Experience,
        tags: &["Internship", "Software Development", "Team Collaboration"],
    },
    TimelineEvent {
        icon: Icon::Code,
        title: "AI & ML Intern - Coratia Technologies",
        description: "Specialized in AI and Machine Learning applications, working with computer vision \
            projects using OpenCV and developing intelligent systems for real-world problems.",
        date: "2024",
        kind: TimelineKind::Experience,
        tags: &["AI/ML", "OpenCV", "Computer Vision"],
    },
    TimelineEvent {
        icon: Icon::GraduationCap,
        title: "Academic Journey & Personal Growth",
        description: "Overcame academic challenges including supplementary exams, demonstrating resilience \
            and determination. This period shaped my character and strengthened my resolve to succeed \
            in technology.",
        date: "2023-2024",
        kind: TimelineKind::Milestone,
        tags: &["Personal Growth", "Resilience", "Academic Success"],
    },
];

pub const PHILOSOPHY_QUOTE: &str = "Every challenge is an opportunity to grow, every setback a setup for a \
    comeback. The journey matters as much as the destination.";
pub const PHILOSOPHY_ATTRIBUTION: &str = "My personal philosophy through the ups and downs of learning";
