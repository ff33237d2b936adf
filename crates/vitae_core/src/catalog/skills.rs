//! Skills cards, grouped by stack area.

use super::{list, record, text};
use crate::model::card::{CardRecord, Category};
use crate::model::content::ContentBlock;

pub(super) fn cards() -> Vec<CardRecord> {
    vec![
        record(
            Category::Skills,
            "skills1",
            "Langages",
            "bodySkills1",
            &[],
            vec![
                text("Français : Niveau C1"),
                ContentBlock::Rule,
                text("English : Niveau C1"),
            ],
        ),
        record(
            Category::Skills,
            "skills2",
            "Java",
            "bodySkills2",
            &[],
            vec![
                list(
                    "desktop items",
                    &[
                        "Swing - Interface graphique",
                        "Junit - Tests Unitaires",
                    ],
                ),
                ContentBlock::Rule,
                list(
                    "desktop support items",
                    &[
                        "Maven - Gestion de dépendances",
                        "Hibernate - ORM (Object-Relational Mapping)",
                    ],
                ),
                ContentBlock::Rule,
                list(
                    "web items",
                    &[
                        "Tomcat - Serveur Applicatifs Web",
                        "Sélenium - Tests d'interface graphiques",
                        "JakartaEE - Applicatif Web",
                        "SpringBoot - Framework Web pour API (Application Programming Interface)",
                    ],
                ),
            ],
        ),
        record(
            Category::Skills,
            "skills3",
            "Front",
            "bodySkills3",
            &[],
            vec![
                list(
                    "display items",
                    &[
                        "HTML/CSS - Balises web",
                        "Less Preprocessor - Génération de CSS",
                    ],
                ),
                ContentBlock::Rule,
                list(
                    "javascript items",
                    &[
                        "Javascript - Comportement client web",
                        "JQuery - Framework JS",
                        "VueJS - Framework JS",
                        "MeteorJS - Framework JS",
                        "Typescript - Framework JS",
                        "React - Framework JS",
                    ],
                ),
                ContentBlock::Rule,
                list(
                    "css items",
                    &[
                        "Bootstrap CSS - Toolkit CSS",
                        "Tailwind CSS - Toolkit CSS",
                    ],
                ),
                ContentBlock::Rule,
                text("NPM - Gestionnaire de dépendances NodeJS"),
            ],
        ),
        record(
            Category::Skills,
            "skills4",
            "Back",
            "bodySkills4",
            &[],
            vec![
                list(
                    "languages items",
                    &["PHP : Hypertext Preprocessor", "Visual Basic .NET"],
                ),
                ContentBlock::Rule,
                list(
                    "php framework items",
                    &[
                        "CakePHP - Framework PHP",
                        "Pear PHP - Framework PHP",
                        "Smarty - Framework PHP",
                    ],
                ),
                ContentBlock::Rule,
                text("Composer - Gestionnaire de dépendances PHP"),
            ],
        ),
        record(
            Category::Skills,
            "skills5",
            "Base de données",
            "bodySkills5",
            &[],
            vec![
                list(
                    "SGBDR items",
                    &[
                        "MySQL - SGBDR",
                        "SQLServer - SGBDR",
                        "PostgreSQL - SGBDR",
                    ],
                ),
                ContentBlock::Rule,
                text("MongoDB - NoSQL"),
                ContentBlock::Rule,
                text("FileSystem - Fake SQL"),
            ],
        ),
        record(
            Category::Skills,
            "skills6",
            "Gestion de projet",
            "bodySkills6",
            &[],
            vec![
                list(
                    "methods items",
                    &[
                        "UML - Conception basée sur les classes",
                        "Merise - Conception basée sur les tables de la BDD",
                    ],
                ),
                ContentBlock::Rule,
                list(
                    "agile items",
                    &[
                        "Agile - Multiple méthodes de gestion de projets",
                        "Scrum - Méthode de gestion de projets",
                    ],
                ),
                ContentBlock::Rule,
                list(
                    "git items",
                    &[
                        "Git - Versioning de projet",
                        "Gerrit - Revue de code collaboratif",
                        "Github - Hébergement et gestion de répertoire de projets",
                    ],
                ),
            ],
        ),
        record(
            Category::Skills,
            "skills7",
            "DevOps - CI/CD",
            "bodySkills7",
            &[],
            vec![
                text("Docker - Conteneurisation pour intégration continue"),
                ContentBlock::Rule,
                list(
                    "CD items",
                    &[
                        "Github-Actions - Développement continu",
                        "Jenkins - Développement continu",
                    ],
                ),
            ],
        ),
    ]
}
