//! Static portfolio content rendered by the section components.
//!
//! DESIGN
//! ======
//! Every record is a compile-time literal in a `&'static [..]` table. The
//! components own presentation; these modules own the words, links, and
//! dates, so content edits never touch view code.

pub mod about;
pub mod blog;
pub mod profile;
pub mod projects;
pub mod skills;
pub mod timeline;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

/// Named glyphs from the site's icon font. Rendered as
/// `<i class="icon icon-{name}">` and styled in the stylesheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    Award,
    BookOpen,
    Brain,
    Briefcase,
    Calendar,
    ChevronDown,
    ChevronUp,
    Clock,
    Code,
    Database,
    ExternalLink,
    Eye,
    Gamepad,
    Github,
    GraduationCap,
    Heart,
    Lightbulb,
    Linkedin,
    Mail,
    MapPin,
    Menu,
    Monitor,
    Send,
    Server,
    Shield,
    ShoppingCart,
    Trophy,
    Users,
    Wrench,
    X,
}

impl Icon {
    /// Icon font glyph name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ArrowRight => "arrow-right",
            Self::Award => "award",
            Self::BookOpen => "book-open",
            Self::Brain => "brain",
            Self::Briefcase => "briefcase",
            Self::Calendar => "calendar",
            Self::ChevronDown => "chevron-down",
            Self::ChevronUp => "chevron-up",
            Self::Clock => "clock",
            Self::Code => "code",
            Self::Database => "database",
            Self::ExternalLink => "external-link",
            Self::Eye => "eye",
            Self::Gamepad => "gamepad-2",
            Self::Github => "github",
            Self::GraduationCap => "graduation-cap",
            Self::Heart => "heart",
            Self::Lightbulb => "lightbulb",
            Self::Linkedin => "linkedin",
            Self::Mail => "mail",
            Self::MapPin => "map-pin",
            Self::Menu => "menu",
            Self::Monitor => "monitor",
            Self::Send => "send",
            Self::Server => "server",
            Self::Shield => "shield",
            Self::ShoppingCart => "shopping-cart",
            Self::Trophy => "trophy",
            Self::Users => "users",
            Self::Wrench => "wrench",
            Self::X => "x",
        }
    }

    /// Full class list for the `<i>` element, with an optional size suffix.
    #[must_use]
    pub fn class(self, size: &str) -> String {
        if size.is_empty() {
            format!("icon icon-{}", self.name())
        } else {
            format!("icon icon-{} {size}", self.name())
        }
    }
}

/// Accent colour applied to a card's icon and badges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Accent {
    #[default]
    Primary,
    Accent,
}

impl Accent {
    /// Icon text colour class.
    #[must_use]
    pub const fn text_class(self) -> &'static str {
        match self {
            Self::Primary => "text-primary",
            Self::Accent => "text-accent",
        }
    }

    /// Badge colour classes.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Primary => "bg-primary/10 text-primary border-primary/30 hover:bg-primary/20",
            Self::Accent => "bg-accent/10 text-accent border-accent/30 hover:bg-accent/20",
        }
    }
}

/// An outbound link shown as a labelled row or icon button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

impl Link {
    /// Links that leave the site open in a new tab; `mailto:` and in-site
    /// paths do not.
    #[must_use]
    pub fn opens_new_tab(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}
