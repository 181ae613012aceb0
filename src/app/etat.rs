//! src/app/etat.rs
//!
//! État de la calculatrice (accumulateur + machine à états), sans vue.
//!
//! Rôle : posséder le tampon d’expression et le drapeau “vient d’évaluer”,
//! accepter les jetons, normaliser les suites invalides, et rendre à
//! l’appelant le texte à afficher. Rien n’est dessiné ici.
//!
//! Contrats :
//! - Le tampon reste toujours un préfixe d’expression complétable
//!   (pas deux opérateurs de suite, pas d’opérateur en tête sauf '-').
//! - Après un résultat : un chiffre repart de zéro, un opérateur enchaîne.
//! - Après une erreur : tampon vidé, même chemin quelle que soit la raison.

use tracing::debug;

use super::reglages::{Reglages, LONGUEUR_MAX};
use crate::noyau::{evaluer, formater, pourcent, texte_tampon, Op, Raison};

/// Libellé d’historique quand le % est désactivé par les réglages.
const POURCENT_REFUSE: &str = "Percent not supported";

/// Texte affiché en cas d’échec, quelle que soit la raison.
const TEXTE_ERREUR: &str = "Error";

/// Jeton de saisie.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Jeton {
    /// 0..=9 (au-delà : ignoré)
    Chiffre(u8),
    Point,
    Operateur(Op),
}

impl Jeton {
    pub fn depuis_char(c: char) -> Option<Jeton> {
        match c {
            '0'..='9' => Some(Jeton::Chiffre(c as u8 - b'0')),
            '.' => Some(Jeton::Point),
            _ => Op::depuis_char(c).map(Jeton::Operateur),
        }
    }
}

/// Actions “boutons”.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Effacer,
    Retour,
    Evaluer,
    Pourcent,
}

/// Ce que l’appelant doit afficher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Affichage {
    pub texte: String,
    pub erreur: bool,
}

impl Affichage {
    fn normal(texte: impl Into<String>) -> Self {
        Self {
            texte: texte.into(),
            erreur: false,
        }
    }

    fn echec() -> Self {
        Self {
            texte: TEXTE_ERREUR.to_string(),
            erreur: true,
        }
    }
}

/// Phase de la machine à états (dérivée de l’état, jamais stockée).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Vide,
    Saisie,
    Evalue,
    Erreur,
}

#[derive(Clone, Debug)]
pub struct Calculatrice {
    // --- entrée ---
    tampon: String,
    vient_d_evaluer: bool,

    // --- sorties ---
    affichage: Affichage,
    historique: String,
    echec: bool,

    // --- paramètres ---
    reglages: Reglages,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::avec_reglages(Reglages::default())
    }
}

impl Calculatrice {
    pub fn avec_reglages(reglages: Reglages) -> Self {
        Self {
            tampon: String::new(),
            vient_d_evaluer: false,
            affichage: Affichage::normal("0"),
            historique: String::new(),
            echec: false,
            reglages,
        }
    }

    /* ------------------------ API appelant ------------------------ */

    pub fn soumettre_jeton(&mut self, jeton: Jeton) -> Affichage {
        match jeton {
            Jeton::Chiffre(d) if d <= 9 => self.ajouter_chiffre_ou_point(char::from(b'0' + d)),
            Jeton::Chiffre(_) => {}
            Jeton::Point => self.ajouter_chiffre_ou_point('.'),
            Jeton::Operateur(op) => self.ajouter_operateur(op),
        }
        self.affichage.clone()
    }

    pub fn soumettre_action(&mut self, action: Action) -> Affichage {
        match action {
            Action::Effacer => self.effacer(),
            Action::Retour => self.retour(),
            Action::Evaluer => self.evaluer(),
            Action::Pourcent => self.pourcent(),
        }
        self.affichage.clone()
    }

    /// Dernière expression évaluée, ou libellé d’erreur, ou vide.
    pub fn historique(&self) -> &str {
        &self.historique
    }

    pub fn tampon(&self) -> &str {
        &self.tampon
    }

    pub fn phase(&self) -> Phase {
        match (self.vient_d_evaluer, self.echec) {
            (true, true) => Phase::Erreur,
            (true, false) => Phase::Evalue,
            _ if self.tampon.is_empty() => Phase::Vide,
            _ => Phase::Saisie,
        }
    }

    /* ------------------------ Accumulateur ------------------------ */

    /// Un chiffre (ou '.') après un résultat repart d’un tampon vide.
    /// Pas de contrôle des points ici : c’est l’évaluation qui tranche.
    fn ajouter_chiffre_ou_point(&mut self, c: char) {
        if self.vient_d_evaluer {
            self.tampon.clear();
            self.repartir();
        }
        if self.tampon.len() >= LONGUEUR_MAX {
            self.rafraichir();
            return;
        }
        self.tampon.push(c);
        self.rafraichir();
    }

    /// Un opérateur après un résultat s’enchaîne sur ce résultat.
    fn ajouter_operateur(&mut self, op: Op) {
        if self.vient_d_evaluer {
            self.repartir();
        }
        if self.tampon.len() >= LONGUEUR_MAX {
            self.rafraichir();
            return;
        }

        match self.tampon.chars().last() {
            // en tête : seul le moins unaire passe
            None => {
                if op == Op::Moins {
                    self.tampon.push('-');
                }
            }
            // opérateur déjà en fin : on le remplace
            Some(c) if Op::depuis_char(c).is_some() => {
                if self.tampon == "-" {
                    if op != Op::Moins {
                        self.tampon.clear();
                    }
                } else {
                    self.tampon.pop();
                    self.tampon.push(op.symbole());
                }
            }
            Some(_) => self.tampon.push(op.symbole()),
        }

        self.rafraichir();
    }

    /// Après un résultat : efface le résultat (comme “C” sur l’entrée).
    /// Sinon : retire le dernier caractère ; "" ou "-" => état zéro.
    fn retour(&mut self) {
        if self.vient_d_evaluer {
            self.tampon.clear();
            self.repartir();
        } else {
            self.tampon.pop();
            if self.tampon == "-" {
                self.tampon.clear();
            }
        }
        self.rafraichir();
    }

    /// AC : remise à zéro totale (réglages conservés).
    fn effacer(&mut self) {
        *self = Self::avec_reglages(self.reglages);
    }

    /* ------------------------ Évaluation ------------------------ */

    fn evaluer(&mut self) {
        if self.tampon.is_empty() {
            self.repartir();
            self.rafraichir();
            return;
        }

        match evaluer(&self.tampon) {
            Ok(v) => {
                debug!(tampon = %self.tampon, valeur = v, "évaluation");
                self.historique = self.rendu_historique();
                self.affichage = Affichage::normal(formater(v));
                self.tampon = texte_tampon(v);
                self.vient_d_evaluer = true;
                self.echec = false;
            }
            Err(raison) => self.echouer(raison.to_string()),
        }
    }

    /// % sur l’opérande courant (la suite numérique en fin de tampon).
    fn pourcent(&mut self) {
        if !self.reglages.pourcent_actif {
            self.echouer(POURCENT_REFUSE.to_string());
            return;
        }
        if self.tampon.is_empty() {
            self.repartir();
            self.rafraichir();
            return;
        }

        match self.calcule_pourcent() {
            Ok(nouveau) => {
                debug!(avant = %self.tampon, apres = %nouveau, "pourcent");
                self.tampon = nouveau;
                self.rafraichir();
            }
            Err(raison) => self.echouer(raison.to_string()),
        }
    }

    /// Renvoie le nouveau tampon, opérande courant remplacé par son %.
    fn calcule_pourcent(&self) -> Result<String, Raison> {
        let debut = self
            .tampon
            .rfind(|c: char| !(c.is_ascii_digit() || c == '.'))
            .map(|i| i + 1)
            .unwrap_or(0);

        let (prefixe, suite) = self.tampon.split_at(debut);
        if suite.is_empty() {
            return Err(Raison::ExpressionInvalide);
        }
        let courant = evaluer(suite)?;

        // pas d’opérateur en attente : "12%" ou "-12%"
        if prefixe.is_empty() || prefixe == "-" {
            let signe = if prefixe.is_empty() { 1.0 } else { -1.0 };
            let v = pourcent(signe * courant, None, None)?;
            return Ok(texte_tampon(v));
        }

        let (avant, op) = match prefixe.chars().last().and_then(Op::depuis_char) {
            Some(op) => (&prefixe[..prefixe.len() - 1], op),
            None => return Err(Raison::ExpressionInvalide),
        };
        let precedent = if op.est_additif() {
            Some(evaluer(avant)?)
        } else {
            None
        };

        let v = pourcent(courant, Some(op), precedent)?;

        // A + (-x) s’écrit A - x : le tampon n’accepte pas deux opérateurs
        let (op, v) = match op {
            Op::Plus if v < 0.0 => (Op::Moins, -v),
            Op::Moins if v < 0.0 => (Op::Plus, -v),
            _ => (op, v),
        };

        Ok(format!("{avant}{}{}", op.symbole(), texte_tampon(v)))
    }

    /* ------------------------ Utilitaires ------------------------ */

    /// Chemin de reprise unique : "Error" à l’écran, raison dans l’historique.
    fn echouer(&mut self, libelle: String) {
        debug!(tampon = %self.tampon, raison = %libelle, "échec");
        self.affichage = Affichage::echec();
        self.historique = libelle;
        self.tampon.clear();
        self.vient_d_evaluer = true;
        self.echec = true;
    }

    fn repartir(&mut self) {
        self.vient_d_evaluer = false;
        self.echec = false;
    }

    fn rafraichir(&mut self) {
        let texte = if self.tampon.is_empty() {
            "0".to_string()
        } else {
            self.tampon.clone()
        };
        self.affichage = Affichage::normal(texte);
    }

    fn rendu_historique(&self) -> String {
        if !self.reglages.symboles {
            return self.tampon.clone();
        }
        self.tampon
            .chars()
            .map(|c| Op::depuis_char(c).map_or(c, Op::symbole_joli))
            .collect()
    }
}
