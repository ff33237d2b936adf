//! Identity cards, rendered only behind the access gate.

use super::{annotated, link, record, text};
use crate::model::card::{CardRecord, Category};
use crate::model::content::ContentBlock;

pub(super) fn cards() -> Vec<CardRecord> {
    vec![
        record(
            Category::Identity,
            "identity1",
            "Identité",
            "bodyIdentity1",
            &[],
            vec![
                annotated("Lucas KUNTZ", "Voir la carte d'identité"),
                ContentBlock::Image {
                    src: "./assets/pics/identity.jpg".to_string(),
                },
                text("Développeur Fullstack"),
                annotated("Véhiculé", "Voir le Permis de Conduire"),
            ],
        ),
        record(
            Category::Identity,
            "identity2",
            "Coordonnées",
            "bodyIdentity2",
            &[],
            vec![text("67b rue de la Cheneau, 57070, Metz, France")],
        ),
        record(
            Category::Identity,
            "identity3",
            "Contact",
            "bodyIdentity3",
            &[],
            vec![
                link(None, "(+33) 7 78 81 04 69", "tel:+33778810469", false),
                link(
                    None,
                    "kuntz.lucas@gmail.com",
                    "mailto:kuntz.lucas@gmail.com",
                    false,
                ),
            ],
        ),
        // Historical numbering: identity4 was retired with its document.
        record(
            Category::Identity,
            "identity5",
            "Diplômes / Attestation / Certificat",
            "bodyIdentity5",
            &[],
            vec![
                link(
                    None,
                    "Diplôme Universitaire De Technologie",
                    "./assets/docs/DiplomeUniversitaireDeTechnologie.pdf",
                    true,
                ),
                link(
                    None,
                    "Diplôme de Licence Professsionnelle",
                    "./assets/docs/DiplomeLicenceProfesssionnelle.pdf",
                    true,
                ),
                link(
                    None,
                    "Attestation Sécurité Numérique ANSSI",
                    "./assets/docs/LKU - SecNum attestation.jpg",
                    true,
                ),
                link(
                    None,
                    "Certification TOSA Javascript",
                    "./assets/docs/lucas_kuntz_dd3bbd64035fdfb94d07155358084e40.pdf",
                    true,
                ),
            ],
        ),
    ]
}
