//! Static portfolio content.
//!
//! DESIGN
//! ======
//! All page copy lives here, separate from the components that render it.
//! Every list is rendered in stored order; nothing is sorted or filtered.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::components::icon::Icon;

/// One row of the work-history list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkEntry {
    pub year: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
}

/// One card of the project gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    pub tech: &'static [&'static str],
    pub link: &'static str,
    pub image: &'static str,
}

/// One card of the "elsewhere" list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub platform: &'static str,
    pub handle: &'static str,
    pub url: &'static str,
    pub icon: Icon,
}

/// Identity and copy that appears once on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub kicker: &'static str,
    pub headline: &'static str,
    pub focus_terms: &'static [&'static str],
    pub availability: &'static str,
    pub location: &'static str,
    pub current_title: &'static str,
    pub current_org: &'static str,
    pub current_years: &'static str,
    pub work_span: &'static str,
    pub connect_blurb: &'static str,
    pub email: &'static str,
    pub copyright: &'static str,
    pub credit: &'static str,
}

impl Profile {
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Document metadata for the `<head>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub favicon: &'static str,
}

impl SiteMeta {
    #[must_use]
    pub fn keywords_content(&self) -> String {
        self.keywords.join(", ")
    }
}

/// Preview image size requested for project cards.
pub const PROJECT_IMAGE_WIDTH: u32 = 400;
pub const PROJECT_IMAGE_HEIGHT: u32 = 200;

pub const PROFILE: Profile = Profile {
    first_name: "Syamsu",
    last_name: "Hidayat",
    kicker: "PORTFOLIO / 2025",
    headline: "IoT, Robotic, and Fullstack Developer crafting innovative solutions at the intersection of",
    focus_terms: &["hardware", "software", "intelligent systems"],
    availability: "Available for work",
    location: "Indonesia",
    current_title: "IT Fresh Graduate",
    current_org: "State Polytechnic of Samarinda (POLNES)",
    current_years: "2021 — 2025",
    work_span: "2021 — Current",
    connect_blurb: "Always interested in new opportunities, collaborations, and conversations about technology and design.",
    email: "syamsunurhidayat047@gmail.com",
    copyright: "© 2025 SamTheLightBender. All rights reserved.",
    credit: "Built with v0.dev by Felix Macaspac, Modified by SamTheLightBender",
};

pub const SITE: SiteMeta = SiteMeta {
    title: "Syamsu Hidayat - IoT, Robotic, and Fullstack Developer",
    description: "Portfolio of Syamsu Hidayat, an IoT, Robotic, and Fullstack Developer crafting innovative solutions at the intersection of hardware, software, and intelligent systems.",
    keywords: &[
        "Syamsu Nur Hidayat",
        "Syamsu Hidayat",
        "SamTheLightBender",
        "Sam The Light Bender",
        "IoT Developer",
        "Robotic Developer",
        "Fullstack Developer",
        "Web Developer",
        "Portfolio",
        "NextJS",
        "React",
        "TypeScript",
        "Laravel",
        "PHP",
        "Arduino",
        "ESP32",
    ],
    favicon: "/favicon.png",
};

pub const SKILLS: &[&str] = &["PHP", "Laravel", "React", "TypeScript", "NextJS", "IoT", "Robotic", "Arduino", "ESP32"];

pub const WORK_EXPERIENCE: &[WorkEntry] = &[
    WorkEntry {
        year: "2025",
        role: "IT Support Intern",
        company: "PT United Tractors Tbk Site Loa Janan Sanga",
        description: "Developed an integrated digitalization system for administration tasks.",
        tech: &["PHP", "CodeIgniter", "MySQL"],
    },
    WorkEntry {
        year: "2021-2024",
        role: "Research Team",
        company: "POLNES Robotic Student Association Team (RAINSTEN)",
        description: "Developed projects such as hexapod robot, transporter robot, and robotic arm.",
        tech: &["Robotics", "IoT"],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Code Showcase Studio",
        description: "An open-source platform designed to showcase student projects from POLNES, featuring a leaderboard, voting system, and comment functionality.",
        date: "On Progress",
        tech: &["TypeScript", "React", "NextJS", "ShadcnUI", "PostgreSQL", "TailwindCSS"],
        link: "https://github.com/pemrogrammer/code-showcase-studio",
        image: "https://placehold.co/400x200/151515/909090?text=Code+Showcase",
    },
    Project {
        title: "DigiSmart (Digital Innovation And Smart Technology)",
        description: "Digitalization platform for managing administrative tasks at PT United Tractors Tbk Site Loa Janan Sanga.",
        date: "June 2025",
        tech: &["PHP", "CodeIgniter", "Bootstrap", "MySQL"],
        link: "#",
        image: "https://placehold.co/400x200/151515/909090?text=DigiSmart",
    },
    Project {
        title: "Search and Rescue Robot",
        description: "A hexapod robot purposed to rescue earthquake disaster victims through various obstacles automatically using path planning algorithm",
        date: "July 2024",
        tech: &["Arduino", "Servo", "Ultrasonic", "Infrared", "Camera", "Gripper"],
        link: "#",
        image: "https://placehold.co/400x200/151515/909090?text=Hexapod+Robot",
    },
    Project {
        title: "Transporter Robot",
        description: "A transporter robot to carry objects to a desired location, controlled using a Dualshock Controller.",
        date: "January 2023",
        tech: &["Arduino", "Servo", "Controller", "Motor DC", "Gripper"],
        link: "#",
        image: "https://placehold.co/400x200/151515/909090?text=Transporter+Robot",
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        platform: "GitHub",
        handle: "@samthelightbender",
        url: "https://github.com/samthelightbender/",
        icon: Icon::Github,
    },
    SocialLink {
        platform: "Instagram",
        handle: "@syamsuhidayat",
        url: "https://www.instagram.com/_syamsuhidayat",
        icon: Icon::Instagram,
    },
    SocialLink {
        platform: "Linkedin",
        handle: "@syamsu-nur-hidayat",
        url: "https://www.linkedin.com/in/syamsu-nur-hidayat/",
        icon: Icon::Linkedin,
    },
    SocialLink {
        platform: "Facebook",
        handle: "@syamsuhidayat",
        url: "https://www.facebook.com/M.Syamsu.Nur.Hidayat/",
        icon: Icon::Facebook,
    },
];
