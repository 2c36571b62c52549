//! The portfolio page.

use leptos::prelude::*;

use crate::components::about_section::AboutSection;
use crate::components::back_to_top::BackToTop;
use crate::components::binary_cursor::BinaryCursor;
use crate::components::blog_section::BlogSection;
use crate::components::contact_section::ContactSection;
use crate::components::hero_section::HeroSection;
use crate::components::nav_bar::NavBar;
use crate::components::projects_section::ProjectsSection;
use crate::components::skills_section::SkillsSection;
use crate::components::timeline_section::TimelineSection;
use crate::components::toaster::Toaster;

/// Every section in fixed vertical order, followed by the floating chrome.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen custom-scrollbar">
            <NavBar/>
            <HeroSection/>
            <AboutSection/>
            <SkillsSection/>
            <ProjectsSection/>
            <TimelineSection/>
            <BlogSection/>
            <ContactSection/>
            <BackToTop/>
        </div>
        <BinaryCursor/>
        <Toaster/>
    }
}
