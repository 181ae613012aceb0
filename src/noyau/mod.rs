//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - erreur.rs   : raisons d’échec (Invalid expression, division par zéro, non fini)
//! - jetons.rs   : tokenisation (décimaux exacts + 4 opérateurs)
//! - rpn.rs      : shunting-yard + calcul exact
//! - eval.rs     : pipeline complet (garde, lecteur, f64)
//! - format.rs   : texte d’affichage (fixe / exponentiel)
//! - pourcent.rs : % contextuel

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod pourcent;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::Raison;
pub use eval::evaluer;
pub use format::{formater, texte_tampon};
pub use jetons::Op;
pub use pourcent::pourcent;
