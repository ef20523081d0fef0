//! Project catalog.
//!
//! The catalog is a read-only table of project metadata keyed by a small
//! integer [`ProjectId`].  The [`NavigationController`](crate::navigation::NavigationController)
//! only ever looks entries up; it never mutates the catalog.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier of a catalog entry.
///
/// Any integer can be represented; whether it names a project is decided
/// by [`ProjectCatalog::get`].  On the wire it accepts a number or a
/// numeric string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ProjectId(pub u32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl<'de> Deserialize<'de> for ProjectId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Visitor;
        struct V;
        impl<'de> Visitor<'de> for V {
            type Value = ProjectId;
            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "non-negative integer or string")
            }
            fn visit_u64<E>(self, n: u64) -> Result<ProjectId, E>
            where
                E: DeError,
            {
                u32::try_from(n)
                    .map(ProjectId)
                    .map_err(|_| DeError::custom("project id out of range"))
            }
            fn visit_str<E>(self, s: &str) -> Result<ProjectId, E>
            where
                E: DeError,
            {
                let n: u32 = s
                    .trim()
                    .trim_start_matches('#')
                    .parse()
                    .map_err(|_| DeError::custom("project id: expected non-negative integer"))?;
                Ok(ProjectId(n))
            }
        }
        deserializer.deserialize_any(V)
    }
}

/// Metadata for one portfolio project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub title: &'static str,
    /// One-line teaser shown on the project cube's front face.
    pub short_description: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    /// Image reference (URL) for the front face.
    pub image: &'static str,
    /// External project link.
    pub link: &'static str,
    /// Live demo link.
    pub demo_link: &'static str,
}

/// Read-only lookup of projects by id.
pub trait ProjectCatalog {
    /// Return the project for `id`, or `None` if the id is not a catalog
    /// key.
    fn get(&self, id: ProjectId) -> Option<&Project>;

    /// Whether `id` names a project in this catalog.
    fn contains(&self, id: ProjectId) -> bool {
        self.get(id).is_some()
    }
}

/// The compiled-in six-entry catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

static PROJECTS: [Project; 6] = [
    Project {
        id: ProjectId(1),
        title: "Project #1",
        short_description: "A modern social media platform with real-time messaging and interactive features.",
        description: "A modern web application built with React and Next.js. This project showcases advanced UI/UX design principles and responsive layouts.",
        technologies: &["React", "Next.js", "TypeScript", "Tailwind CSS"],
        image: "https://cdn.pixabay.com/photo/2022/12/10/21/41/social-media-7647812_1280.jpg",
        link: "#",
        demo_link: "#",
    },
    Project {
        id: ProjectId(2),
        title: "Project #2",
        short_description: "Cinema booking system with real-time seat selection and secure payment processing.",
        description: "An innovative cinema booking system with real-time seat selection and payment integration.",
        technologies: &["React", "Node.js", "MongoDB", "Stripe"],
        image: "https://cdn.pixabay.com/photo/2019/11/07/20/48/cinema-4609877_1280.jpg",
        link: "#",
        demo_link: "#",
    },
    Project {
        id: ProjectId(3),
        title: "Project #3",
        short_description: "E-commerce platform for flower delivery with intuitive shopping experience.",
        description: "A beautiful e-commerce platform for flower delivery with advanced filtering and search capabilities.",
        technologies: &["Next.js", "TypeScript", "Prisma", "PostgreSQL"],
        image: "https://cdn.pixabay.com/photo/2017/02/15/13/40/tulips-2068692_1280.jpg",
        link: "#",
        demo_link: "#",
    },
    Project {
        id: ProjectId(4),
        title: "Project #4",
        short_description: "Creative portfolio website with stunning animations and interactive 3D elements.",
        description: "A creative portfolio website with unique animations and interactive elements.",
        technologies: &["React", "Three.js", "Framer Motion", "CSS3"],
        image: "https://cdn.pixabay.com/photo/2015/09/03/17/50/cobweb-921039_1280.jpg",
        link: "#",
        demo_link: "#",
    },
    Project {
        id: ProjectId(5),
        title: "Project #5",
        short_description: "3D visualization tool for architectural designs with immersive real-time rendering.",
        description: "A 3D visualization tool for architectural designs with real-time rendering.",
        technologies: &["React", "Three.js", "WebGL", "Blender"],
        image: "https://cdn.pixabay.com/photo/2016/02/27/12/40/sculpture-1225487_1280.jpg",
        link: "#",
        demo_link: "#",
    },
    Project {
        id: ProjectId(6),
        title: "Project #6",
        short_description: "Interactive puzzle game with complex maze navigation and engaging mechanics.",
        description: "An interactive game with complex maze navigation and puzzle-solving mechanics.",
        technologies: &["JavaScript", "Canvas API", "WebGL", "Phaser"],
        image: "https://cdn.pixabay.com/photo/2016/10/13/15/23/labyrinth-1738039_1280.jpg",
        link: "#",
        demo_link: "#",
    },
];

impl StaticCatalog {
    /// All entries, in id order.
    pub fn projects(&self) -> &'static [Project] {
        &PROJECTS
    }
}

impl ProjectCatalog for StaticCatalog {
    fn get(&self, id: ProjectId) -> Option<&Project> {
        PROJECTS.iter().find(|p| p.id == id)
    }
}
