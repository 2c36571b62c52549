//! Featured projects for the Projects section.

use super::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub tech_stack: &'static [&'static str],
    pub features: &'static [&'static str],
    /// Tailwind gradient stops for the hover overlay.
    pub gradient: &'static str,
    pub code_url: &'static str,
    /// Live demo, when one is hosted. `None` renders a disabled Demo button.
    pub demo_url: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        icon: Icon::ShoppingCart,
        title: "Online Organic Farm Store",
        description: "An e-commerce platform connecting farmers with customers to sell organic fruits and \
            vegetables directly. Features include shopping cart, payment gateway integration, user \
            authentication, and a clean, intuitive user interface.",
        category: "E-commerce",
        tech_stack: &["HTML", "CSS", "JavaScript", "SQL"],
        features: &["Shopping Cart", "Payment Gateway", "User Authentication", "Clean UI"],
        gradient: "from-green-500 to-emerald-600",
        code_url: "https://github.com/saivaraprasadmuvvala/online-organic-farm-store",
        demo_url: None,
    },
    Project {
        icon: Icon::Eye,
        title: "AI-Based Online Proctoring System",
        description: "An intelligent exam monitoring system using computer vision and AI. Features face \
            detection with OpenCV, gaze tracking, browser activity monitoring, and real-time alert \
            systems for secure online examinations.",
        category: "AI/ML",
        tech_stack: &["Python", "OpenCV", "JavaScript", "Computer Vision"],
        features: &["Face Detection", "Gaze Tracking", "Activity Monitoring", "Real-time Alerts"],
        gradient: "from-blue-500 to-purple-600",
        code_url: "https://github.com/saivaraprasadmuvvala/online-proctoring-system",
        demo_url: None,
    },
    Project {
        icon: Icon::Shield,
        title: "Image Encryption & Decryption System",
        description: "A robust security application that encrypts and decrypts images using custom-built \
            algorithms. Ensures secure transmission and storage of sensitive visual data.",
        category: "Security",
        tech_stack: &["Python", "Cryptography", "Image Processing"],
        features: &["Custom Algorithm", "Secure Transmission", "File Protection", "Fast Processing"],
        gradient: "from-red-500 to-pink-600",
        code_url: "https://github.com/saivaraprasadmuvvala/image-encryption-decryption",
        demo_url: None,
    },
    Project {
        icon: Icon::Gamepad,
        title: "Rock Paper Scissors Game",
        description: "A classic logic-based game implemented with modern web technologies. Features \
            interactive gameplay, score tracking, and responsive design.",
        category: "Game",
        tech_stack: &["JavaScript", "HTML", "CSS"],
        features: &["Interactive UI", "Score Tracking", "Responsive Design", "Smooth Animations"],
        gradient: "from-yellow-500 to-orange-600",
        code_url: "https://github.com/saivaraprasadmuvvala/rock-paper-scissors",
        demo_url: Some("https://saivaraprasadmuvvala.github.io/rock-paper-scissors"),
    },
];
