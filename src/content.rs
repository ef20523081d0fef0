//! Static panel content for both cubes.
//!
//! The main cube's six faces carry fixed portfolio sections.  The project
//! cube's faces are templates filled from a [`Project`] at render time.

use crate::catalog::Project;
use crate::face::Face;

/// One face of the main cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacePanel {
    /// Short label shown under the cube next to the navigation dots.
    pub label: &'static str,
    /// Label of the corresponding menu entry.
    pub menu_label: &'static str,
    pub heading: &'static str,
    pub lines: &'static [&'static str],
}

const FRONT: FacePanel = FacePanel {
    label: "About",
    menu_label: "Intro",
    heading: "Hi, I'm Sandy, a Software Developer",
    lines: &[
        "Software Developer and UI/UX Designer building user focused web applications",
        "and automation systems that drive real business value.",
        "Frontend: React, Next.js, TypeScript, Tailwind CSS. Automation: n8n.",
    ],
};

const RIGHT: FacePanel = FacePanel {
    label: "Work",
    menu_label: "Work",
    heading: "Work",
    lines: &[
        "2025-2026  Freelancing",
        "           Responsive web applications with React, Next.js and Tailwind CSS.",
        "           Workflow automations with n8n.",
        "2024-2025  Frontend Developer, MVP Application & Game Design L.L.C.",
        "           Interactive UI with React, TypeScript and Tailwind CSS.",
    ],
};

const BACK: FacePanel = FacePanel {
    label: "Education",
    menu_label: "Education",
    heading: "Education",
    lines: &[
        "2021-2023  42 Abu Dhabi: Computer Software Engineering",
        "2018-2022  University of Calabar: BSc, Computer Science",
    ],
};

const LEFT: FacePanel = FacePanel {
    label: "Certification",
    menu_label: "Certificates",
    heading: "Certificates",
    lines: &[
        "2024  UI/UX Designer (Dev and Design)",
        "2023  UI Developer (Dev and Design)",
        "2023  Webflow developer",
    ],
};

const TOP: FacePanel = FacePanel {
    label: "Projects",
    menu_label: "Projects",
    heading: "Projects",
    lines: &[
        "#1 App  #2 App  #3 App",
        "#4 App  #5 App  #6 App",
        "Open a project to view its details.",
    ],
};

const BOTTOM: FacePanel = FacePanel {
    label: "Contact",
    menu_label: "Contacts",
    heading: "Contacts",
    lines: &[
        "Kranj, Slovenia",
        "abasifrekesandy@gmail.com",
        "+386 41 945 266",
        "medium.com/@abasifrekesandy | linkedin.com/in/abasifrekesandy | github.com/SandyAbasman",
    ],
};

/// Content of `face` on the main cube.
pub fn panel(face: Face) -> &'static FacePanel {
    match face {
        Face::Front => &FRONT,
        Face::Right => &RIGHT,
        Face::Back => &BACK,
        Face::Left => &LEFT,
        Face::Top => &TOP,
        Face::Bottom => &BOTTOM,
    }
}

/// Section title of `face` on the project cube.
pub fn project_face_title(face: Face) -> &'static str {
    match face {
        Face::Front => "Overview",
        Face::Back => "Description",
        Face::Right => "Technologies",
        Face::Left => "Project Details",
        Face::Top => "Visit Project",
        Face::Bottom => "Navigate",
    }
}

/// Lines shown on `face` of the project cube for `project`.
pub fn project_face_lines(project: &Project, face: Face) -> Vec<String> {
    match face {
        Face::Front => vec![
            project.title.to_string(),
            project.short_description.to_string(),
            format!("image: {}", project.image),
            format!("demo:  {}", project.demo_link),
        ],
        Face::Back => vec![project.description.to_string()],
        Face::Right => vec![project.technologies.join(" | ")],
        Face::Left => vec![
            format!("Title: {}", project.title),
            format!("Technologies: {}", project.technologies.join(", ")),
        ],
        Face::Top => vec![format!("Open project: {}", project.link)],
        Face::Bottom => vec![
            // The navigate face lists the other five faces.
            [Face::Front, Face::Back, Face::Right, Face::Left, Face::Top]
                .iter()
                .map(|f| format!("[{}]", project_face_title(*f)))
                .collect::<Vec<_>>()
                .join(" "),
        ],
    }
}
