//! Cube faces and relative steps.
//!
//! A cube has six [`Face`]s arranged in a fixed cycle.  The order of
//! [`Face::ORDER`] is significant: it defines what "next" and "previous"
//! mean for wheel and swipe navigation.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One of the six faces of a navigation cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Face {
    Front,
    Right,
    Back,
    Left,
    Top,
    Bottom,
}

/// A relative navigation request along the face cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Step {
    Next,
    Previous,
}

impl Face {
    /// Number of faces in the cycle.
    pub const COUNT: usize = 6;

    /// The cyclic order used by [`Face::step`].
    pub const ORDER: [Face; Face::COUNT] = [
        Face::Front,
        Face::Right,
        Face::Back,
        Face::Left,
        Face::Top,
        Face::Bottom,
    ];

    /// Position of this face in [`Face::ORDER`].
    pub fn index(self) -> usize {
        match self {
            Face::Front => 0,
            Face::Right => 1,
            Face::Back => 2,
            Face::Left => 3,
            Face::Top => 4,
            Face::Bottom => 5,
        }
    }

    /// The face reached by taking one `step` from `self`, wrapping around
    /// at both ends of the cycle.
    pub fn step(self, step: Step) -> Face {
        let n = Face::COUNT;
        let offset = match step {
            Step::Next => 1,
            Step::Previous => n - 1,
        };
        Face::ORDER[(self.index() + offset) % n]
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Face::Front => write!(f, "front"),
            Face::Right => write!(f, "right"),
            Face::Back => write!(f, "back"),
            Face::Left => write!(f, "left"),
            Face::Top => write!(f, "top"),
            Face::Bottom => write!(f, "bottom"),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Next => write!(f, "next"),
            Step::Previous => write!(f, "previous"),
        }
    }
}

/// Parse a face name (case-insensitive).
///
/// Besides the geometric names this accepts the section labels the menu
/// shows for each face, so `"projects"` selects [`Face::Top`].
pub fn parse_face(s: &str) -> Option<Face> {
    let normalized = s.trim().to_lowercase();
    match normalized.as_str() {
        "front" | "about" | "intro" => Some(Face::Front),
        "right" | "work" => Some(Face::Right),
        "back" | "education" => Some(Face::Back),
        "left" | "certificates" | "certification" => Some(Face::Left),
        "top" | "projects" => Some(Face::Top),
        "bottom" | "contact" | "contacts" => Some(Face::Bottom),
        _ => None,
    }
}

/// Parse a step name (case-insensitive; accepts "next", "prev", "previous").
pub fn parse_step(s: &str) -> Option<Step> {
    let normalized = s.trim().to_lowercase();
    match normalized.as_str() {
        "next" => Some(Step::Next),
        "prev" | "previous" => Some(Step::Previous),
        _ => None,
    }
}

impl<'de> Deserialize<'de> for Face {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_face(&s).ok_or_else(|| DeError::custom(format!("invalid face: {:?}", s)))
    }
}

impl<'de> Deserialize<'de> for Step {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_step(&s).ok_or_else(|| DeError::custom(format!("invalid step: {:?}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_order() {
        for (i, face) in Face::ORDER.iter().enumerate() {
            assert_eq!(face.index(), i);
        }
    }

    #[test]
    fn next_walks_the_cycle() {
        assert_eq!(Face::Front.step(Step::Next), Face::Right);
        assert_eq!(Face::Right.step(Step::Next), Face::Back);
        assert_eq!(Face::Back.step(Step::Next), Face::Left);
        assert_eq!(Face::Left.step(Step::Next), Face::Top);
        assert_eq!(Face::Top.step(Step::Next), Face::Bottom);
        assert_eq!(Face::Bottom.step(Step::Next), Face::Front);
    }

    #[test]
    fn previous_wraps_from_front_to_bottom() {
        assert_eq!(Face::Front.step(Step::Previous), Face::Bottom);
    }

    #[test]
    fn next_and_previous_are_inverse() {
        for face in Face::ORDER {
            assert_eq!(face.step(Step::Next).step(Step::Previous), face);
            assert_eq!(face.step(Step::Previous).step(Step::Next), face);
        }
    }

    #[test]
    fn six_steps_close_the_cycle() {
        for face in Face::ORDER {
            let mut f = face;
            for _ in 0..Face::COUNT {
                f = f.step(Step::Next);
            }
            assert_eq!(f, face);
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for face in Face::ORDER {
            assert_eq!(parse_face(&face.to_string()), Some(face));
        }
        assert_eq!(parse_step(&Step::Next.to_string()), Some(Step::Next));
        assert_eq!(parse_step(&Step::Previous.to_string()), Some(Step::Previous));
    }

    #[test]
    fn parse_accepts_section_labels() {
        assert_eq!(parse_face("About"), Some(Face::Front));
        assert_eq!(parse_face("intro"), Some(Face::Front));
        assert_eq!(parse_face("WORK"), Some(Face::Right));
        assert_eq!(parse_face("education"), Some(Face::Back));
        assert_eq!(parse_face("Certificates"), Some(Face::Left));
        assert_eq!(parse_face(" projects "), Some(Face::Top));
        assert_eq!(parse_face("contact"), Some(Face::Bottom));
        assert_eq!(parse_face("sideways"), None);
        assert_eq!(parse_step("prev"), Some(Step::Previous));
        assert_eq!(parse_step("forward"), None);
    }

    #[test]
    fn deserialize_rejects_unknown_face() {
        let ok: Face = serde_json::from_str(r#""Top""#).unwrap();
        assert_eq!(ok, Face::Top);
        assert!(serde_json::from_str::<Face>(r#""diagonal""#).is_err());
    }
}
