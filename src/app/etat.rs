//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, affichage, registres, notes)
//! et appliquer les touches du clavier. Le noyau est appelé ici (aperçu, "=", M+/M-),
//! la vue ne fait que dessiner et transmettre des `Touche`.
//!
//! Contrats :
//! - Une touche = un cycle complet (édition, puis aperçu éventuel).
//! - Un échec d’évaluation affiche "Error" et ne touche à aucun registre.

use tracing::{debug, info};

use calculatrice_sci::noyau::{eval_expression, format_resultat, valider, ModeAngle, Registres};

/// Clé de persistance des notes (stockage eframe : fichier natif / localStorage web).
pub const CLE_NOTES: &str = "notes_eleve";

/// Clé de persistance du mode d’angle.
pub const CLE_MODE: &str = "mode_angle";

/// Affichage au repos.
const AFFICHAGE_VIDE: &str = "0";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// Texte inséré tel quel puis aperçu (chiffres, π, e, (, ), %, ., ^, x², EXP, ANS, MR, !).
    Inserer(&'static str),
    /// + − × ÷ ('-' devient '−')
    Operateur(char),
    /// sin, cos, … ln : insère "nom("
    Fonction(&'static str),
    /// √ : insère "√("
    Racine,
    /// ± : '-' en position d’opérande, sinon "-(…)"
    PlusMoins,
    /// AC
    EffacerTout,
    /// DEL
    Retour,
    /// =
    Egal,
    /// MC
    MemoireEffacer,
    /// M+
    MemoireAjouter,
    /// M-
    MemoireSoustraire,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sortie ---
    pub affichage: String, // valeur ou "Error"

    // --- registres (mode, mémoire, ANS) ---
    pub registres: Registres,

    // --- bloc-notes libre (persisté) ---
    pub notes: String,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            affichage: AFFICHAGE_VIDE.to_string(),
            registres: Registres::default(),
            notes: String::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /// Reconstruit l’état à partir des valeurs persistées (absentes au premier lancement).
    pub fn restaurer(notes: Option<String>, mode: Option<&str>) -> Self {
        let mut app = Self::default();
        if let Some(n) = notes {
            info!(octets = n.len(), "notes restaurées");
            app.notes = n;
        }
        if let Some(m) = mode.and_then(ModeAngle::depuis_code) {
            app.registres.set_mode_angle(m);
        }
        app.apercu();
        app
    }

    /* ------------------------ Touches ------------------------ */

    pub fn appuyer(&mut self, touche: Touche) {
        match touche {
            Touche::EffacerTout => {
                self.entree.clear();
                self.affichage = AFFICHAGE_VIDE.to_string();
            }
            Touche::Retour => {
                self.entree.pop();
                self.apercu();
            }
            Touche::Egal => self.egal(),
            Touche::PlusMoins => {
                if self.entree.is_empty() || self.entree.ends_with(|c: char| "+-*/(−×÷".contains(c)) {
                    self.entree.push('-');
                } else {
                    self.entree = format!("-({})", self.entree);
                }
                self.apercu();
            }
            Touche::Racine => {
                self.entree.push_str("√(");
                self.apercu();
            }
            Touche::Fonction(nom) => {
                self.entree.push_str(nom);
                self.entree.push('(');
                self.apercu();
            }
            Touche::Operateur(op) => {
                self.entree.push(if op == '-' { '−' } else { op });
                self.apercu();
            }
            Touche::Inserer(txt) => {
                self.entree.push_str(txt);
                self.apercu();
            }
            Touche::MemoireEffacer => {
                self.registres.memoire_effacer();
                debug!("mémoire effacée");
            }
            Touche::MemoireAjouter => {
                if let Ok(v) = eval_expression(self.texte_ou_zero(), &self.registres) {
                    self.registres.memoire_ajouter(v);
                }
            }
            Touche::MemoireSoustraire => {
                if let Ok(v) = eval_expression(self.texte_ou_zero(), &self.registres) {
                    self.registres.memoire_soustraire(v);
                }
            }
        }
        self.focus_entree = true;
    }

    /// DEG/RAD : change le mode puis relance l’aperçu.
    pub fn set_mode_angle(&mut self, mode: ModeAngle) {
        self.registres.set_mode_angle(mode);
        self.apercu();
    }

    /// Aperçu en direct : valeur ou "Error", sans écrire ANS.
    pub fn apercu(&mut self) {
        self.affichage = match eval_expression(self.texte_ou_zero(), &self.registres) {
            Ok(v) => format_resultat(v),
            Err(e) => e.to_string(),
        };
    }

    /// "=" : évalue, et seulement en cas de succès, ANS reçoit la valeur.
    fn egal(&mut self) {
        let texte = self.texte_ou_zero().to_string();
        match valider(&texte, &mut self.registres) {
            Ok(v) => {
                self.affichage = format_resultat(v);
                info!(entree = %texte, resultat = v, "calcul");
            }
            Err(e) => {
                self.affichage = e.to_string();
                debug!(entree = %texte, "calcul refusé");
            }
        }
    }

    fn texte_ou_zero(&self) -> &str {
        if self.entree.is_empty() {
            "0"
        } else {
            &self.entree
        }
    }
}
