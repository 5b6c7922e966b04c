// src/app.rs
//
// Calculatrice scientifique - module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Persistance : notes + mode d’angle (stockage eframe)
//
// Important:
// - La gestion Enter est faite dans vue.rs (quand le champ a le focus).

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use std::time::Duration;

use eframe::egui;

use etat::{Touche, CLE_MODE, CLE_NOTES};

/// Les notes sont sauvegardées souvent (équivalent “à chaque frappe” sans écrire à chaque frame).
const INTERVALLE_SAUVEGARDE: Duration = Duration::from_secs(2);

impl AppCalc {
    /// Construit l’app à partir du stockage eframe (None au premier lancement / sans persistance).
    pub fn depuis_stockage(storage: Option<&dyn eframe::Storage>) -> Self {
        let notes = storage.and_then(|s| s.get_string(CLE_NOTES));
        let mode = storage.and_then(|s| s.get_string(CLE_MODE));
        Self::restaurer(notes, mode.as_deref())
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Raccourci clavier global minimal (safe natif + web) :
        // ESC = AC (entrée + affichage).
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.appuyer(Touche::EffacerTout);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        storage.set_string(CLE_NOTES, self.notes.clone());
        storage.set_string(CLE_MODE, self.registres.mode_angle().code().to_string());
    }

    fn auto_save_interval(&self) -> Duration {
        INTERVALLE_SAUVEGARDE
    }
}
