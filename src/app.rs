// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + reglages.rs)
// - Ré-exporter ce dont l’appelant a besoin (main.rs: use crate::app::...)
//
// Important:
// - Aucun rendu ici : l’état rend un `Affichage`, l’appelant le montre.

pub mod etat;
pub mod reglages;

pub use etat::{Action, Affichage, Calculatrice, Jeton, Phase};
pub use reglages::{lire_drapeau, Reglages};
