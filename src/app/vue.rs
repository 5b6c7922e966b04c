// src/app/vue.rs
//
// Vue (UI egui) - natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter = "=", saisie libre dans le champ (aperçu à chaque modification)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Bloc-notes libre sous la calculatrice (persisté par app.rs)

use eframe::egui;

use super::etat::{AppCalc, Touche};
use calculatrice_sci::noyau::ModeAngle;

/// Pavé de touches : (étiquette, touche). Ligne par ligne, 6 colonnes.
const CLAVIER: &[&[(&str, Touche)]] = &[
    &[
        ("sin", Touche::Fonction("sin")),
        ("cos", Touche::Fonction("cos")),
        ("tan", Touche::Fonction("tan")),
        ("asin", Touche::Fonction("asin")),
        ("acos", Touche::Fonction("acos")),
        ("atan", Touche::Fonction("atan")),
    ],
    &[
        ("log", Touche::Fonction("log")),
        ("ln", Touche::Fonction("ln")),
        ("√", Touche::Racine),
        ("x²", Touche::Inserer("x²")),
        ("x^-1", Touche::Inserer("x^-1")),
        ("^", Touche::Inserer("^")),
    ],
    &[
        ("π", Touche::Inserer("π")),
        ("e", Touche::Inserer("e")),
        ("n!", Touche::Inserer("!")),
        ("%", Touche::Inserer("%")),
        ("EXP", Touche::Inserer("EXP")),
        ("ANS", Touche::Inserer("ANS")),
    ],
    &[
        ("MC", Touche::MemoireEffacer),
        ("MR", Touche::Inserer("MR")),
        ("M+", Touche::MemoireAjouter),
        ("M-", Touche::MemoireSoustraire),
        ("(", Touche::Inserer("(")),
        (")", Touche::Inserer(")")),
    ],
    &[
        ("7", Touche::Inserer("7")),
        ("8", Touche::Inserer("8")),
        ("9", Touche::Inserer("9")),
        ("÷", Touche::Operateur('÷')),
        ("DEL", Touche::Retour),
        ("AC", Touche::EffacerTout),
    ],
    &[
        ("4", Touche::Inserer("4")),
        ("5", Touche::Inserer("5")),
        ("6", Touche::Inserer("6")),
        ("×", Touche::Operateur('×')),
        ("±", Touche::PlusMoins),
    ],
    &[
        ("1", Touche::Inserer("1")),
        ("2", Touche::Inserer("2")),
        ("3", Touche::Inserer("3")),
        ("−", Touche::Operateur('-')),
    ],
    &[
        ("0", Touche::Inserer("0")),
        (".", Touche::Inserer(".")),
        ("=", Touche::Egal),
        ("+", Touche::Operateur('+')),
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice scientifique");
                ui.add_space(6.0);

                self.ui_mode(ui);
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_clavier(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_notes(ui);
            });
    }

    fn ui_mode(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for mode in [ModeAngle::Degres, ModeAngle::Radians] {
                let actif = self.registres.mode_angle() == mode;
                if ui.selectable_label(actif, mode.code()).clicked() && !actif {
                    self.set_mode_angle(mode);
                }
            }

            ui.separator();
            ui.monospace(format!("M = {}", self.registres.memoire()));
        });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Expression :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2×sin(30)+√(16), 5!, 50%, 5EXP3")
                .id_salt("entree_edit")
                .code_editor(),
        );

        // Si on a cliqué un bouton, on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Saisie clavier directe : aperçu à chaque modification
        if resp.changed() {
            self.apercu();
        }

        // --- Clavier : Enter = "=" (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.appuyer(Touche::Egal);
        }

        ui.add_space(6.0);
        Self::champ_monospace(ui, "resultat_out", &self.affichage, 1);
    }

    fn ui_clavier(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("clavier_calc")
            .num_columns(6)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in CLAVIER {
                    for (label, touche) in ligne.iter() {
                        self.bouton(ui, label, *touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_notes(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Notes")
            .default_open(true)
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.notes)
                        .desired_width(ui.available_width())
                        .desired_rows(6)
                        .hint_text("Brouillon, démarche, résultats intermédiaires…")
                        .id_salt("notes_edit"),
                );
            });
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized([52.0, 32.0], egui::Button::new(label));
        if resp.clicked() {
            self.appuyer(touche);
        }
    }
}
