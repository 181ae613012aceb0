// src/noyau/pourcent.rs
//
// Pourcentage contextuel :
// - A + B% / A - B%  => B% de A, soit A * (B / 100)
// - sinon            => B / 100

use super::erreur::{Raison, Resultat};
use super::jetons::Op;

pub fn pourcent(courant: f64, op: Option<Op>, precedent: Option<f64>) -> Resultat {
    if !courant.is_finite() {
        return Err(Raison::NonFini);
    }

    let v = match (precedent, op) {
        (Some(a), Some(op)) if op.est_additif() => a * (courant / 100.0),
        _ => courant / 100.0,
    };

    if v.is_finite() {
        Ok(v)
    } else {
        Err(Raison::NonFini)
    }
}
