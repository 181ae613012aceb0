// src/noyau/erreur.rs
//
// Taxonomie des échecs du noyau.
// Chaque variante s’affiche "Error" à l’écran ; le texte ci-dessous
// sert de ligne d’historique (raison visible par l’appelant).

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Raison {
    /// Syntaxe refusée par le lecteur (opérateur en fin, `..`, opérande vide…).
    #[error("Invalid expression")]
    ExpressionInvalide,

    /// Expression bien formée, mais `a / 0`.
    #[error("Cannot divide by zero")]
    DivisionParZero,

    /// Calcul valide dont le résultat n’est pas représentable (NaN, ±∞).
    #[error("Result out of range")]
    NonFini,
}

/// Résultat d’une évaluation : `Number(valeur)` ou `Error(raison)`.
pub type Resultat = Result<f64, Raison>;
