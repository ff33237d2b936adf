//! Professional experience cards, oldest first.

use super::{labeled, list, logo_caption, logo_image, period, record};
use crate::model::card::{CardRecord, Category};
use crate::model::content::ContentBlock;

pub(super) fn cards() -> Vec<CardRecord> {
    vec![
        record(
            Category::Professional,
            "professional1",
            "1ère expérience : Sira Multiservices",
            "bodyPro1",
            &["ul"],
            vec![
                logo_caption("Sira Multiservices"),
                labeled("titre", "Développeur PHP"),
                ContentBlock::Rule,
                period(
                    "Avril 2013 (Début stage DUT) Juin 2013 (Fin stage DUT)",
                    Some(2),
                ),
                ContentBlock::Rule,
                list(
                    "missions",
                    &[
                        "Nettoyage du code de l'application DevisLux en Pear PHP.",
                        "Amélioration de l'application pour un meilleur référencement.",
                    ],
                ),
            ],
        ),
        record(
            Category::Professional,
            "professional2",
            "2ème expérience : OGMI",
            "bodyPro2",
            &["ul"],
            vec![
                logo_image("./assets/pics/ogmi_cyrus.jpg"),
                labeled("titre", "Développeur VB .Net"),
                ContentBlock::Rule,
                period(
                    "Mai 2015 (Début stage Licence Pro) Septembre 2015 (Fin stage Licence Pro)",
                    Some(4),
                ),
                ContentBlock::Rule,
                list(
                    "missions",
                    &[
                        "Développement d'un applicatif web de consultation des données d'une base de données PostgreSQL.",
                        "Collaboration avec les développeurs de l'application VB Cyrus pour une synchronisation entre les deux applicatifs.",
                    ],
                ),
            ],
        ),
        record(
            Category::Professional,
            "professional3",
            "3ème expérience : Efluid",
            "bodyPro3",
            &[],
            vec![
                logo_image("./assets/pics/efluid_logo.png"),
                labeled("titre", "Développeur JAVA"),
                ContentBlock::Rule,
                period(
                    "Janvier 2017 (Début intérim) Juin 2018 (Fin intérim)",
                    Some(18),
                ),
                ContentBlock::Rule,
                list(
                    "missions",
                    &["Développement & mise en place du système d'intégration métier en Java."],
                ),
            ],
        ),
        record(
            Category::Professional,
            "professional4",
            "4ème expérience : CAC",
            "bodyPro4",
            &[],
            vec![
                logo_image("./assets/pics/cac_histo.png"),
                labeled("titre", "Technicien informatique"),
                ContentBlock::Rule,
                period("Août 2018 (Début CDI) Novembre 2019 (Fin CDI)", Some(15)),
                ContentBlock::Rule,
                list(
                    "missions",
                    &["Développement et maintien de la solution de gestion commerciale en Pascal Delphi."],
                ),
            ],
        ),
        record(
            Category::Professional,
            "professional5",
            "5ème expérience : Happiso",
            "bodyPro5",
            &[],
            vec![
                logo_image("./assets/pics/happiso_logo.jpg"),
                labeled("titre", "Développeur Php"),
                ContentBlock::Rule,
                period(
                    "Janvier 2020 (Début intérim) Mai 2020 (Fin intérim/Début CDI) Janvier 2023 (Fin CDI)",
                    Some(36),
                ),
                ContentBlock::Rule,
                list(
                    "missions",
                    &[
                        "Développement & maintien d'une solution de gestion RH en Cakephp, Javascript & Less.",
                        "Transformation de la solution Cakephp en solution Typescript React.",
                        "Support téléphonique aux utilisateurs.",
                    ],
                ),
            ],
        ),
        record(
            Category::Professional,
            "professional6",
            "6ème expérience : Profluens",
            "bodyPro6",
            &["afpa"],
            vec![
                logo_image("./assets/pics/proflu.jpg"),
                labeled("titre", "Développeur Web"),
                ContentBlock::Rule,
                period("Mai 2025 (Début stage) - Juillet 2025 (Fin stage)", Some(2)),
                ContentBlock::Rule,
                list(
                    "missions",
                    &[
                        "Développement d'une représentation graphique sous forme d'onde sonore pour le réseau social Needle.",
                        "Développement de marqueurs sur cette représentation pour indiquer des modulations importantes.",
                    ],
                ),
            ],
        ),
    ]
}
