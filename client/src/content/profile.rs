//! Owner identity, social links, and contact details.

use super::{Icon, Link};

/// Who the site is about.
#[derive(Clone, Copy, Debug)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub greeting: &'static str,
    pub subtitle: &'static str,
    pub email: &'static str,
    pub avatar: &'static str,
    pub hero_background: &'static str,
    pub resume_path: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Sai Vara Prasad Muvvala",
    role: "Full Stack Developer",
    tagline: "A passionate Full Stack Developer with a vision to innovate through technology",
    greeting: "Hi, I'm Sai Vara Prasad \u{2014} a Full Stack Developer who builds with code and dreams with tech.",
    subtitle: "Passionate about AI, ML, and building innovative solutions that make a difference",
    email: "saivaraprasadmuvvala@gmail.com",
    avatar: "/developer-avatar.jpg",
    hero_background: "/hero-bg.jpg",
    resume_path: "/Sai_Vara_Prasad_Muvvala_Resume.pdf",
};

pub const GITHUB_URL: &str = "https://github.com/saivaraprasadmuvvala";
pub const LINKEDIN_URL: &str = "http://www.linkedin.com/in/saivaraprasad-muvvala";

/// Icon buttons under the hero call-to-action.
pub const SOCIAL_LINKS: &[Link] = &[
    Link { icon: Icon::Github, label: "GitHub Profile", value: "GitHub", href: GITHUB_URL },
    Link { icon: Icon::Linkedin, label: "LinkedIn Profile", value: "LinkedIn", href: LINKEDIN_URL },
    Link {
        icon: Icon::Mail,
        label: "Send Email",
        value: "Email",
        href: "mailto:saivaraprasadmuvvala@gmail.com",
    },
];

/// "Get in Touch" rows in the contact section.
pub const CONTACT_INFO: &[Link] = &[
    Link {
        icon: Icon::Mail,
        label: "Email",
        value: "saivaraprasadmuvvala@gmail.com",
        href: "mailto:saivaraprasadmuvvala@gmail.com",
    },
    Link {
        icon: Icon::Linkedin,
        label: "LinkedIn",
        value: "linkedin.com/in/saivaraprasad-muvvala",
        href: LINKEDIN_URL,
    },
    Link { icon: Icon::Github, label: "GitHub", value: "github.com/saivaraprasadmuvvala", href: GITHUB_URL },
    Link {
        icon: Icon::MapPin,
        label: "Location",
        value: "India",
        href: "https://maps.app.goo.gl/72RqkC1JmgGZUiEz8",
    },
];

/// What a quick-action button does when pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuickActionKind {
    /// Open an external page in a new tab.
    External,
    /// Download a file served from the site root.
    Download,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickAction {
    pub icon: Icon,
    pub label: &'static str,
    pub href: &'static str,
    pub kind: QuickActionKind,
}

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        icon: Icon::Calendar,
        label: "Schedule a Meeting",
        href: LINKEDIN_URL,
        kind: QuickActionKind::External,
    },
    QuickAction {
        icon: Icon::Mail,
        label: "Download Resume",
        href: PROFILE.resume_path,
        kind: QuickActionKind::Download,
    },
    QuickAction {
        icon: Icon::Github,
        label: "View GitHub Profile",
        href: GITHUB_URL,
        kind: QuickActionKind::External,
    },
];

/// In-page anchors listed in the navigation bar, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", anchor: "#home" },
    NavItem { label: "About", anchor: "#about" },
    NavItem { label: "Skills", anchor: "#skills" },
    NavItem { label: "Projects", anchor: "#projects" },
    NavItem { label: "Blog", anchor: "#blog" },
    NavItem { label: "Contact", anchor: "#contact" },
];
