//! Formation cards, oldest first.

use super::{labeled, level, logo_image, period, record};
use crate::model::card::{CardRecord, Category};
use crate::model::content::ContentBlock;

pub(super) fn cards() -> Vec<CardRecord> {
    vec![
        record(
            Category::Formation,
            "formation1",
            "1ère formation : DUT",
            "bodyFormation1",
            &["ul"],
            vec![
                logo_image("./assets/pics/ul.svg"),
                labeled("label", "Diplôme Universitaire en Technologie"),
                level("Bac +2"),
                ContentBlock::Rule,
                period(
                    "Septembre 2011 (Début formation) Juillet 2014 (Fin formation)",
                    None,
                ),
                labeled("location", "Institut Universitaire en Technologie (57000)"),
                ContentBlock::Rule,
                labeled(
                    "internship",
                    "Stage d'Avril 2013 à Juin 2013 chez Sira Multiservices (57050)",
                ),
            ],
        ),
        record(
            Category::Formation,
            "formation2",
            "2ème formation : LP WCE",
            "bodyFormation2",
            &["ul"],
            vec![
                logo_image("./assets/pics/ul.svg"),
                labeled("label", "Licence Professionelle en Web & E-Commerce"),
                level("Bac +3"),
                ContentBlock::Rule,
                period(
                    "Septembre 2014 (Début formation) Septembre 2015 (Fin formation)",
                    None,
                ),
                labeled(
                    "location",
                    "Institut Universitaire en Technologie de Metz (57000)",
                ),
                ContentBlock::Rule,
                labeled(
                    "internship",
                    "Stage de Mai 2015 à Septembre 2015 chez OGMI (54000)",
                ),
            ],
        ),
        record(
            Category::Formation,
            "formation3",
            "3ème formation : TP CDA",
            "bodyFormation3",
            &["afpa"],
            vec![
                logo_image("./assets/pics/afpa.png"),
                labeled(
                    "label",
                    "Titre Professionel Concepteur Développeur d'Applications",
                ),
                level("RNCP 6"),
                ContentBlock::Rule,
                period(
                    "Septembre 2024 (Début formation) Juillet 2025 (Fin formation)",
                    None,
                ),
                labeled("location", "Centre AFPA de Pompey (54390)"),
                ContentBlock::Rule,
                labeled(
                    "internship",
                    "Stage de Mai 2025 à Juillet 2025 chez Profluens SAS",
                ),
            ],
        ),
    ]
}
