//! Biography, strengths, and hobbies for the About section.

use super::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Strength {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STRENGTHS: &[Strength] = &[
    Strength {
        icon: Icon::Code,
        title: "Quick Learner",
        description: "Rapidly adapts to new technologies and frameworks",
    },
    Strength {
        icon: Icon::Brain,
        title: "Problem Solver",
        description: "Analytical thinking with innovative solutions",
    },
    Strength {
        icon: Icon::Lightbulb,
        title: "Innovation-Driven",
        description: "Inspired by tech visionaries like Elon Musk and Tony Stark",
    },
    Strength {
        icon: Icon::Users,
        title: "Strong Communicator",
        description: "Effective collaboration and team leadership",
    },
];

pub const HOBBIES: &[&str] = &["Reading", "Music", "Workouts", "Editing", "Painting"];

pub const CERTIFICATIONS: &[&str] = &["AIML Certificate - IIT Bhubaneswar"];

pub const EXPERIENCE: &[&str] = &[
    "Coratia Technologies - AI & ML Intern",
    "Prodigy InfoTech - Software Development Intern (Sep 2024)",
];

pub const JOURNEY: &[&str] = &[
    "I'm a passionate Full Stack Developer with expertise in modern web technologies and a deep \
     fascination with AI and Machine Learning. My journey has been shaped by curiosity, determination, \
     and the inspiration drawn from tech visionaries like Tony Stark and Elon Musk.",
    "Through my internships at Coratia Technologies and Prodigy InfoTech, I've gained hands-on \
     experience in both AI/ML applications and software development. I believe in the power of \
     technology to solve real-world problems and create meaningful impact.",
    "My academic journey, including earning an AIML certificate from IIT Bhubaneswar, has equipped \
     me with both theoretical knowledge and practical skills. I'm always eager to learn new \
     technologies and contribute to innovative projects that push the boundaries of what's possible.",
];
