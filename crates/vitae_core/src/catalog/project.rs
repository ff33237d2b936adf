//! Project cards: training projects, association work, personal repos.

use super::{labeled, link, list, record};
use crate::model::card::{CardRecord, Category};
use crate::model::content::{ContentBlock, LinkTarget};

fn link_group(role: &str, links: &[(&str, &str)]) -> ContentBlock {
    ContentBlock::LinkGroup {
        role: role.to_string(),
        links: links
            .iter()
            .map(|(label, href)| LinkTarget::new(*label, *href))
            .collect(),
    }
}

pub(super) fn cards() -> Vec<CardRecord> {
    vec![
        record(
            Category::Project,
            "project1",
            "Gestion clients AFPA",
            "bodyProject1",
            &["afpa"],
            vec![
                link(
                    Some("repository"),
                    "Repository",
                    "https://github.com/Fhurai/AFPA_CDA_gestionClients",
                    true,
                ),
                ContentBlock::Rule,
                labeled(
                    "description",
                    "Projet pour simuler la gestion de clients et de prospects dans un projet desktop Java",
                ),
                ContentBlock::Rule,
                list(
                    "technologies",
                    &[
                        "Java",
                        "Junit - Tests Unitaires",
                        "Swing - Interface graphique",
                        "MySQL - SGBDR",
                        "MongoDB - NoSQL",
                        "FileSystem - Fake SQL",
                    ],
                ),
            ],
        ),
        record(
            Category::Project,
            "project2",
            "Exercices web AFPA",
            "bodyProject2",
            &["afpa"],
            vec![
                link(
                    Some("repository"),
                    "Repository",
                    "https://github.com/Fhurai/AFPA_CDA_web",
                    true,
                ),
                ContentBlock::Rule,
                link(
                    Some("access"),
                    "Access",
                    "https://fhurai.github.io/AFPA_CDA_web/",
                    true,
                ),
                ContentBlock::Rule,
                labeled(
                    "description",
                    "Divers exercices web pour se maintenir à jour et s'améliorer.",
                ),
                ContentBlock::Rule,
                list(
                    "technologies",
                    &[
                        "HTML/CSS - Balises web",
                        "Javascript - Comportement client web",
                    ],
                ),
            ],
        ),
        record(
            Category::Project,
            "project3",
            "Front web AFPA",
            "bodyProject3",
            &["afpa"],
            vec![
                link(
                    Some("repository"),
                    "Repository",
                    "https://github.com/Fhurai/AFPA_CDA_Front",
                    true,
                ),
                ContentBlock::Rule,
                labeled(
                    "description",
                    "Juste la partie front du projet JakartaEE, totalement généré en javascript et utilisant des API.",
                ),
                ContentBlock::Rule,
                list(
                    "technologies",
                    &[
                        "HTML/CSS - Balises web",
                        "Javascript - Comportement client web",
                        "Less Preprocessor",
                    ],
                ),
            ],
        ),
        record(
            Category::Project,
            "project4",
            "JakartaEE AFPA",
            "bodyProject4",
            &["afpa"],
            vec![
                link(
                    Some("repository"),
                    "Repository",
                    "https://github.com/Fhurai/AFPA_CDA_JakartaEE",
                    true,
                ),
                ContentBlock::Rule,
                labeled(
                    "description",
                    "Projet Gestion Clients sous forme d'un projet JakartaEE",
                ),
                ContentBlock::Rule,
                list(
                    "technologies",
                    &[
                        "Java",
                        "Maven - Gestion de dépendances",
                        "CSS",
                        "Javascript - Comportement client web",
                        "Less Preprocessor",
                    ],
                ),
            ],
        ),
        record(
            Category::Project,
            "project5",
            "Parc Info AFPA + API",
            "bodyProject5",
            &["afpa"],
            vec![
                link_group(
                    "repository",
                    &[
                        ("Repository Web", "https://github.com/Fhurai/ParcInfo"),
                        ("Repository API", "https://github.com/Fhurai/ParcInfoAPI"),
                    ],
                ),
                ContentBlock::Rule,
                labeled(
                    "description",
                    "Projet de gestion d'un parc informatique pour apprendre l'utilisation de Springboot Framework",
                ),
                ContentBlock::Rule,
                list(
                    "technologies",
                    &[
                        "Java",
                        "Springboot",
                        "Thymeleaf template",
                        "HTML/CSS - Balises web",
                        "Less Preprocessor",
                        "MySQL - SGBDR",
                        "Docker",
                    ],
                ),
            ],
        ),
        record(
            Category::Project,
            "project6",
            "Commission Xplorer",
            "bodyProject6",
            &["asxiv"],
            vec![
                link_group(
                    "repository",
                    &[
                        (
                            "Repository Web",
                            "https://github.com/AzureSistersXIV/commissionXplorer",
                        ),
                        (
                            "Repository API",
                            "https://github.com/AzureSistersXIV/commissionXplorerAPI",
                        ),
                    ],
                ),
                ContentBlock::Rule,
                link(
                    Some("access"),
                    "Access",
                    "https://azuresistersxiv.github.io/commissionXplorer/",
                    true,
                ),
                ContentBlock::Rule,
                labeled(
                    "description",
                    "Applicatif de gallerie de commissions, permettant de visionner l'ensemble des commissions obtenues",
                ),
                ContentBlock::Rule,
                list(
                    "technologies",
                    &[
                        "PHP : Hypertext Preprocessor",
                        "HTML/CSS - Balises web",
                        "Javascript - Comportement client web",
                    ],
                ),
            ],
        ),
        record(
            Category::Project,
            "project7",
            "Gposes Xplorer",
            "bodyProject7",
            &["asxiv"],
            vec![
                link_group(
                    "repository",
                    &[
                        (
                            "Repository Web",
                            "https://github.com/AzureSistersXIV/gposesXplorer",
                        ),
                        (
                            "Repository API",
                            "https://github.com/AzureSistersXIV/gposesXplorerAPI",
                        ),
                    ],
                ),
                ContentBlock::Rule,
                link(
                    Some("access"),
                    "Access",
                    "https://azuresistersxiv.github.io/gposesXplorer/",
                    true,
                ),
                ContentBlock::Rule,
                labeled(
                    "description",
                    "Applicatif de gallerie de screenshots moddés, permettant de visionner l'ensemble des screenshots créés.",
                ),
                ContentBlock::Rule,
                list(
                    "technologies",
                    &[
                        "PHP : Hypertext Preprocessor",
                        "HTML/CSS - Balises web",
                        "Javascript - Comportement client web",
                    ],
                ),
            ],
        ),
        // Historical numbering: project8 never shipped.
        record(
            Category::Project,
            "project9",
            "FanBk",
            "bodyProject9",
            &[],
            vec![
                link(
                    Some("repository"),
                    "Repository",
                    "https://github.com/Fhurai/_FanBk",
                    true,
                ),
                ContentBlock::Rule,
                labeled(
                    "description",
                    "Projet Cakephp pour garder en mémoire ce qui a été durant plusieurs années en milieu professionnel",
                ),
                ContentBlock::Rule,
                list(
                    "technologies",
                    &[
                        "PHP : Hypertext Preprocessor",
                        "Javascript - Comportement client web",
                        "HTML/CSS - Balises web",
                        "CakePHP - Framework PHP",
                    ],
                ),
            ],
        ),
        record(
            Category::Project,
            "project10",
            "ffb_webservices",
            "bodyProject10",
            &[],
            vec![
                link(
                    Some("repository"),
                    "Repository",
                    "https://github.com/Fhurai/_ffb_webservices",
                    true,
                ),
                ContentBlock::Rule,
                labeled(
                    "description",
                    "API de gestion des marques pages de fanfictions lues/à lire sur Internet.",
                ),
                ContentBlock::Rule,
                list(
                    "technologies",
                    &["PHP : Hypertext Preprocessor", "MySQL - SGBDR"],
                ),
            ],
        ),
        record(
            Category::Project,
            "project11",
            "cv",
            "bodyProject11",
            &[],
            vec![
                link(
                    Some("repository"),
                    "Repository",
                    "https://github.com/Fhurai/_cv",
                    true,
                ),
                ContentBlock::Rule,
                link(
                    Some("access"),
                    "Access",
                    "https://fhurai.github.io/_cv/",
                    true,
                ),
                ContentBlock::Rule,
                labeled("description", "CV en ligne."),
                ContentBlock::Rule,
                list(
                    "technologies",
                    &[
                        "HTML/CSS - Balises web",
                        "Javascript - Comportement client web",
                    ],
                ),
            ],
        ),
        record(
            Category::Project,
            "project12",
            "exercices (personnel)",
            "bodyProject12",
            &[],
            vec![
                link(
                    Some("repository"),
                    "Repository",
                    "https://github.com/Fhurai/_exercices",
                    true,
                ),
                ContentBlock::Rule,
                link(
                    Some("access"),
                    "Access",
                    "https://fhurai.github.io/_exercices/",
                    true,
                ),
                ContentBlock::Rule,
                labeled(
                    "description",
                    "Différents exercices sur des composants et des jeux en ligne.",
                ),
                ContentBlock::Rule,
                list(
                    "technologies",
                    &[
                        "HTML/CSS - Balises web",
                        "Javascript - Comportement client web",
                    ],
                ),
            ],
        ),
    ]
}
