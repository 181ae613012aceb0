// src/main.rs
//
// Calculatrice simple — point d’entrée (pilote ligne à ligne)
// -----------------------------------------------------------
// But:
// - Lire stdin, une touche par caractère, et la passer au moteur
// - Afficher l’écran (et l’historique) après chaque ligne
// - Réglages via l’environnement : CALC_POURCENT, CALC_SYMBOLES
// - Journal sur stderr, filtré par RUST_LOG (défaut: warn)
//
// Touches:
//   0-9 . + - * /   jetons
//   =               évaluer (une fin de ligne aussi)
//   %               pourcentage
//   <               retour arrière
//   c C             tout effacer
//   espace          ignoré

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod app;
mod noyau;

use app::{lire_drapeau, Action, Affichage, Calculatrice, Jeton, Phase, Reglages};

enum Touche {
    Jeton(Jeton),
    Action(Action),
}

fn touche(c: char) -> Option<Touche> {
    match c {
        '=' => Some(Touche::Action(Action::Evaluer)),
        '%' => Some(Touche::Action(Action::Pourcent)),
        '<' => Some(Touche::Action(Action::Retour)),
        'c' | 'C' => Some(Touche::Action(Action::Effacer)),
        _ => Jeton::depuis_char(c).map(Touche::Jeton),
    }
}

fn init_journal() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn reglages_depuis_env() -> Reglages {
    let mut r = Reglages::default();

    let lire = |nom: &str| -> Option<bool> {
        let valeur = std::env::var(nom).ok()?;
        let drapeau = lire_drapeau(&valeur);
        if drapeau.is_none() {
            warn!(variable = nom, valeur = %valeur, "drapeau non reconnu, défaut conservé");
        }
        drapeau
    };

    if let Some(v) = lire("CALC_POURCENT") {
        r.pourcent_actif = v;
    }
    if let Some(v) = lire("CALC_SYMBOLES") {
        r.symboles = v;
    }
    r
}

fn ecrire(out: &mut impl Write, aff: &Affichage, historique: &str) -> io::Result<()> {
    if historique.is_empty() {
        writeln!(out, "{}", aff.texte)
    } else {
        writeln!(out, "{}    [{}]", aff.texte, historique)
    }
}

fn main() -> io::Result<()> {
    init_journal();

    let reglages = reglages_depuis_env();
    debug!(?reglages, "démarrage");

    let mut calc = Calculatrice::avec_reglages(reglages);
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    for ligne in stdin.lock().lines() {
        let ligne = ligne?;
        let mut aff = None;

        for c in ligne.chars() {
            aff = match touche(c) {
                Some(Touche::Jeton(j)) => Some(calc.soumettre_jeton(j)),
                Some(Touche::Action(a)) => Some(calc.soumettre_action(a)),
                None if c.is_whitespace() => continue,
                None => {
                    warn!(touche = %c, "touche ignorée");
                    continue;
                }
            };
        }

        // fin de ligne = "=" si la ligne n’a pas déjà évalué / échoué
        let aff = match aff {
            None => continue,
            Some(_) if calc.phase() == Phase::Saisie => calc.soumettre_action(Action::Evaluer),
            Some(a) => a,
        };

        debug!(tampon = %calc.tampon(), phase = ?calc.phase(), "ligne traitée");
        ecrire(&mut out, &aff, calc.historique())?;
    }

    Ok(())
}
