//! Registres de la calculatrice : mode d’angle, mémoire, dernière réponse.
//!
//! Contrat :
//! - mémoire et dernière réponse sont TOUJOURS finies (jamais NaN/inf)
//! - aucune mutation ne déclenche de recalcul (l’UI relance l’aperçu elle-même)

use tracing::debug;

use super::trig::ModeAngle;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Registres {
    mode_angle: ModeAngle,
    memoire: f64,
    derniere_reponse: f64,
}

impl Registres {
    pub fn mode_angle(&self) -> ModeAngle {
        self.mode_angle
    }

    pub fn memoire(&self) -> f64 {
        self.memoire
    }

    pub fn derniere_reponse(&self) -> f64 {
        self.derniere_reponse
    }

    /// DEG/RAD : simple transition d’état.
    pub fn set_mode_angle(&mut self, mode: ModeAngle) {
        if self.mode_angle != mode {
            debug!(%mode, "mode d’angle");
        }
        self.mode_angle = mode;
    }

    /// M+ : ignoré si la valeur n’est pas finie.
    pub fn memoire_ajouter(&mut self, delta: f64) {
        self.memoire_appliquer(delta);
    }

    /// M- : ignoré si la valeur n’est pas finie.
    pub fn memoire_soustraire(&mut self, delta: f64) {
        self.memoire_appliquer(-delta);
    }

    fn memoire_appliquer(&mut self, delta: f64) {
        let nouvelle = self.memoire + delta;
        // delta fini mais somme qui déborde : on garde l’invariant
        if delta.is_finite() && nouvelle.is_finite() {
            self.memoire = nouvelle;
            debug!(memoire = self.memoire, "mémoire");
        }
    }

    /// MC
    pub fn memoire_effacer(&mut self) {
        self.memoire = 0.0;
    }

    /// ANS : écrasé seulement par une valeur finie.
    pub fn enregistrer_reponse(&mut self, valeur: f64) {
        if valeur.is_finite() {
            self.derniere_reponse = valeur;
        }
    }
}
