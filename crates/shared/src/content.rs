//! Static educational content keyed by region id.
//!
//! Plain lookup data: display names and descriptions for every region,
//! the radiographic techniques taught for a region, and the lessons
//! (projections/methods) grouped under each technique.

use crate::{RegionInfo, UNKNOWN_REGION};

const REGION_INFO: &[(&str, RegionInfo)] = &[
    ("Head", RegionInfo { name: "Skull", description: "Controls head and facial orientation." }),
    ("Backhead", RegionInfo { name: "Back of Head", description: "Back side of the head, extending toward lower skull." }),
    ("Torso", RegionInfo { name: "Torso", description: "Controls upper body movements." }),
    ("Left Arm", RegionInfo { name: "Left Arm", description: "Controls movements of the left arm." }),
    ("Right Arm", RegionInfo { name: "Right Arm", description: "Controls movements of the right arm." }),
    ("Left Hand", RegionInfo { name: "Left Hand", description: "Controls movements of the left hand." }),
    ("Right Hand", RegionInfo { name: "Right Hand", description: "Controls movements of the right hand." }),
    ("Left Shoulder", RegionInfo { name: "Left Shoulder", description: "Left shoulder area of the torso." }),
    ("Right Shoulder", RegionInfo { name: "Right Shoulder", description: "Right shoulder area of the torso." }),
    ("Left Rib", RegionInfo { name: "Left Rib", description: "Left rib cage area of the torso." }),
    ("Right Rib", RegionInfo { name: "Right Rib", description: "Right rib cage area of the torso." }),
    ("Abdomen", RegionInfo { name: "Abdomen", description: "Lower front torso region." }),
    ("Back", RegionInfo { name: "Back", description: "Back part of the body." }),
    ("Groin", RegionInfo { name: "Groin", description: "Area between the abdomen and thighs." }),
    ("Left Thigh", RegionInfo { name: "Left Thigh", description: "Upper part of the left leg." }),
    ("Right Thigh", RegionInfo { name: "Right Thigh", description: "Upper part of the right leg." }),
    ("Left Leg", RegionInfo { name: "Left Leg", description: "Lower part of the left leg." }),
    ("Right Leg", RegionInfo { name: "Right Leg", description: "Lower part of the right leg." }),
    ("Left Feet", RegionInfo { name: "Left Foot", description: "Controls movements of the left foot." }),
    ("Right Feet", RegionInfo { name: "Right Foot", description: "Controls movements of the right foot." }),
];

static UNKNOWN_INFO: RegionInfo = RegionInfo {
    name: "Unknown Part",
    description: "No specific information available for this part.",
};

const HEAD_TECHNIQUES: &[&str] = &[
    "Skull Projection",
    "Sella Turcica",
    "Optic Canal",
    "Sphenoid Strut",
    "Superior Orbital",
    "Inferior Orbital",
    "Eye-Foreign Body",
    "Facial Bone",
    "Nasal Bone",
    "Zygomatic Arches",
    "Mandible",
    "Temporomandibular",
    "Sinuses",
    "Mastoid",
    "Petrous Portion",
    "Temporal Bone",
    "Jugular Foramina",
    "Hypoglossal Canal",
];

const TECHNIQUES: &[(&str, &[&str])] = &[("Head", HEAD_TECHNIQUES)];

const LESSONS: &[(&str, &[&str])] = &[
    ("Skull Projection", &[
        "PA Projection",
        "AP Projection",
        "Modified Caldwell Method",
        "AP Axial Projection",
        "Original Caldwell",
        "Lateral Projection",
        "Crosstable Lateral",
        "Towne/Altschul/Grashey/Chamberlaine Method (AP Axial Projection)",
        "Haas Method",
        "Schuller/Pfeiffer Method",
        "Shuller Method",
        "Lysholm Method",
        "Valdini Method",
    ]),
    ("Sella Turcica", &["Lateral Projection", "Towne Method", "Haas Method", "PA Projection"]),
    ("Optic Canal", &[
        "Rhese Method (Parieto-Orbital Oblique Projection)",
        "Rhese Method (Orbito-Parietal Oblique Projection)",
        "Alexander Method",
        "Modified Lysholm Method",
    ]),
    ("Sphenoid Strut", &["Hough Method"]),
    ("Superior Orbital", &["Caldwell Method"]),
    ("Inferior Orbital", &["Bertel Method "]),
    ("Eye-Foreign Body", &["Lateral Projection", "PA Axial Projection", "Modified Waters Method"]),
    ("Facial Bone", &[
        "Lateral Projection",
        "Waters Method",
        "Modified Waters",
        "Reverse Waters Method ",
        "Caldwell Method",
        "Law Method",
    ]),
    ("Nasal Bone", &["Lateral Projection", "Tangential Projection", "Waters Method"]),
    ("Zygomatic Arches", &[
        "Schuller/Pfeiffer Method",
        "Modified Titterington Method",
        "May Method ",
        "Modified Towne Method",
    ]),
    ("Mandible", &[
        "PA Projection",
        "PA Axial Projection",
        "PA Projection",
        "PA Axial Projection",
        "Axiolateral Oblique Projection",
        "Schuller/Pfeiffer Method",
        "Schuller Method",
    ]),
    ("Temporomandibular", &[
        "Towne Method ",
        "Axiolateral Projection",
        "Schuller Method",
        "Inferosuperior Transfacial Position",
        "Albers-Schonberg Method",
        "Zanelli Method",
    ]),
    ("Sinuses", &[
        "Lateral Projection",
        "PA Projection",
        "Caldwell Method",
        "Waters Method",
        "Open-Mouth Waters Method",
        "Submentovertical Projetion",
        "Verticosubmetal Projection",
        "Pirie Method",
        "Rhese Method",
        "Law Method",
    ]),
    ("Mastoid", &[
        "Law Method",
        "Single Angulation Method",
        "Part Angulation Method",
        "Part Angulation Method",
        "PA Tangential Position",
        "Towne Method",
        "Henschen, Schuller, & Lysholm Method",
    ]),
    ("Petrous Portion", &[
        "Towne Method",
        "Haas Method",
        "Valdini Method",
        "Schuller/Pfeiffer Method",
        "Mayer Method",
        "Stenvers Method",
        "Arcelin Method",
        "Modified Law Method",
    ]),
    ("Temporal Bone", &["Cahoon Method "]),
    ("Jugular Foramina", &["Kemp Harper Method"]),
    ("Hypoglossal Canal", &["Miller Method "]),
];

/// Display info for a region, falling back to the `Unknown` entry
pub fn region_info(id: &str) -> &'static RegionInfo {
    lookup(REGION_INFO, id).unwrap_or(&UNKNOWN_INFO)
}

/// Whether the content tables know this region id
pub fn has_region_info(id: &str) -> bool {
    id == UNKNOWN_REGION || lookup(REGION_INFO, id).is_some()
}

/// Techniques taught for a region (empty when none are authored yet)
pub fn techniques_for(region: &str) -> &'static [&'static str] {
    lookup(TECHNIQUES, region).copied().unwrap_or(&[])
}

/// Lessons grouped under a technique (empty for unknown techniques)
pub fn lessons_for(technique: &str) -> &'static [&'static str] {
    lookup(LESSONS, technique).copied().unwrap_or(&[])
}

/// Title of the technique dialog opened from the info overlay
pub fn dialog_title(region: Option<&str>) -> String {
    let name = match region {
        Some(id) if has_region_info(id) => region_info(id).name,
        _ => "Body Part",
    };
    format!("Techniques about positioning of {name}")
}

fn lookup<'a, T>(table: &'a [(&str, T)], key: &str) -> Option<&'a T> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
}
