//! crates/repetiteur_core/src/catalog.rs
//!
//! The fixed option lists offered to parents and tutors. Kept in French:
//! they are user-facing labels, not identifiers.

/// Matières disponibles.
pub const SUBJECTS: &[&str] = &[
    "Mathématiques",
    "Français",
    "Anglais",
    "Physique-Chimie",
    "SVT",
    "Histoire-Géographie",
    "Philosophie",
    "Économie",
    "Espagnol",
    "Allemand",
    "Informatique",
    "Dessin",
    "Musique",
    "Éducation physique",
];

/// Niveaux scolaires.
pub const LEVELS: &[&str] = &[
    "CP",
    "CE1",
    "CE2",
    "CM1",
    "CM2",
    "6ème",
    "5ème",
    "4ème",
    "3ème",
    "2nde",
    "1ère",
    "Terminale",
    "Université",
    "Formation professionnelle",
];

/// Fréquences de cours.
pub const FREQUENCIES: &[&str] = &[
    "1 fois par semaine",
    "2 fois par semaine",
    "3 fois par semaine",
    "Tous les jours",
    "Week-end uniquement",
    "À la demande",
];

/// Disponibilités.
pub const AVAILABILITIES: &[&str] = &[
    "Lundi matin",
    "Lundi après-midi",
    "Lundi soir",
    "Mardi matin",
    "Mardi après-midi",
    "Mardi soir",
    "Mercredi matin",
    "Mercredi après-midi",
    "Mercredi soir",
    "Jeudi matin",
    "Jeudi après-midi",
    "Jeudi soir",
    "Vendredi matin",
    "Vendredi après-midi",
    "Vendredi soir",
    "Samedi matin",
    "Samedi après-midi",
    "Dimanche matin",
    "Dimanche après-midi",
];
