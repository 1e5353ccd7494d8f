//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Document;

/// Create a document with just an id and a title.
pub fn make_doc(id: &str, title: &str) -> Document {
    Document {
        id: id.to_string(),
        title: Some(title.to_string()),
        ..Document::default()
    }
}

/// Create an exercise with category and tags. An empty category is left unset.
pub fn make_exercise(id: &str, title: &str, category: &str, tags: &[&str]) -> Document {
    Document {
        id: id.to_string(),
        title: Some(title.to_string()),
        category: (!category.is_empty()).then(|| category.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..Document::default()
    }
}

/// Same as [`make_exercise`] with a difficulty level.
pub fn make_graded(
    id: &str,
    title: &str,
    category: &str,
    difficulty: &str,
    tags: &[&str],
) -> Document {
    Document {
        difficulty: Some(difficulty.to_string()),
        ..make_exercise(id, title, category, tags)
    }
}

/// Two-document corpus most tests start from.
///
/// | id  | title                | category | tags       |
/// |-----|----------------------|----------|------------|
/// | `1` | "Pythagoras Theorem" | geometry | triangle   |
/// | `2` | "Derivative Rules"   | analysis | calculus   |
pub fn scenario_docs() -> Vec<Document> {
    vec![
        make_exercise("1", "Pythagoras Theorem", "geometry", &["triangle"]),
        make_exercise("2", "Derivative Rules", "analysis", &["calculus"]),
    ]
}

/// A small French catalog with difficulties, descriptions and content.
pub fn sample_catalog() -> Vec<Document> {
    let mut docs = vec![
        make_graded("geo-1", "Théorème de Pythagore", "géométrie", "facile", &["triangle", "démonstration"]),
        make_graded("geo-2", "Cercles et angles", "géométrie", "moyen", &["cercle", "angles"]),
        make_graded("ana-1", "Dérivées usuelles", "analyse", "facile", &["dérivée", "calcul"]),
        make_graded("ana-2", "Intégrales par parties", "analyse", "difficile", &["intégrale", "calcul"]),
        make_graded("alg-1", "Équations du second degré", "algèbre", "moyen", &["équation", "calcul"]),
    ];
    docs[0].description = Some("Calculer une hypoténuse dans un triangle rectangle".into());
    docs[2].content = Some("La dérivée de x^n est n x^(n-1).".into());
    docs[3].description = Some("Intégration par parties sur des exemples classiques".into());
    docs
}
