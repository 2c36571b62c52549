//! Blog post summaries for the Blog section.

use time::Date;
use time::macros::{date, format_description};

use super::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlogPost {
    pub icon: Icon,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub read_time: &'static str,
    pub published: Date,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

impl BlogPost {
    /// Publication date as shown on the card, e.g. `"Jan 15, 2024"`.
    #[must_use]
    pub fn display_date(&self) -> String {
        format_display_date(self.published)
    }
}

/// Format a date as `"Mon D, YYYY"`. Falls back to ISO form if formatting
/// fails, which only happens for out-of-range years.
#[must_use]
pub fn format_display_date(date: Date) -> String {
    let format = format_description!("[month repr:short] [day padding:none], [year]");
    date.format(&format).unwrap_or_else(|_| date.to_string())
}

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        icon: Icon::BookOpen,
        title: "The Developer's Journey: Learning Never Stops",
        excerpt: "Insights from my experience in full-stack development, the importance of continuous \
            learning, and how staying curious drives innovation in tech.",
        category: "Development",
        read_time: "5 min read",
        published: date!(2024 - 01 - 15),
        tags: &["Learning", "Career", "Technology"],
        link: "/blog",
    },
    BlogPost {
        icon: Icon::Brain,
        title: "AI & ML: The Future is Now",
        excerpt: "Exploring the current trends in artificial intelligence and machine learning, from \
            computer vision applications to the ethical implications of AI in society.",
        category: "AI/ML",
        read_time: "7 min read",
        published: date!(2024 - 01 - 10),
        tags: &["AI", "Machine Learning", "Future Tech"],
        link: "/blog",
    },
    BlogPost {
        icon: Icon::Trophy,
        title: "From Struggles to Success: My Placement Journey",
        excerpt: "A candid look at overcoming academic challenges, dealing with supplementary exams, and \
            how perseverance led to meaningful internship opportunities.",
        category: "Personal",
        read_time: "6 min read",
        published: date!(2024 - 01 - 05),
        tags: &["Career", "Growth", "Inspiration"],
        link: "/blog",
    },
    BlogPost {
        icon: Icon::Heart,
        title: "Finding Balance: Code, Life, and Everything Between",
        excerpt: "Reflections on maintaining mental health, pursuing hobbies like music and painting, and \
            building meaningful relationships while growing as a developer.",
        category: "Lifestyle",
        read_time: "4 min read",
        published: date!(2023 - 12 - 28),
        tags: &["Work-Life Balance", "Mental Health", "Hobbies"],
        link: "/blog",
    },
];

pub const BLOG_QUOTE: &str = "The future belongs to those who learn more skills and combine them in creative ways.";
pub const BLOG_QUOTE_ATTRIBUTION: &str = "A principle that guides my journey through technology and innovation";
