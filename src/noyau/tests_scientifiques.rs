//! Tests scientifiques (campagne) : propriétés attendues + invariants + limites contrôlées.
//!
//! But : vérifier le contrat traduire -> evaluer de bout en bout.
//! - propriétés de base (symboles, %, !, x², EXP)
//! - trig selon le mode d’angle (tolérance flottante)
//! - registres : mémoire et ANS, jamais écrits par un échec
//! - robustesse : entrée malformée => "Error", jamais de panique

use std::f64::consts::{E, FRAC_PI_2, PI};
use std::time::{Duration, Instant};

use super::{evaluer, factorielle, traduire, valider, ErreurEvaluation, ModeAngle, Registres};

const TOL: f64 = 1e-9;

fn registres(mode: ModeAngle) -> Registres {
    let mut r = Registres::default();
    r.set_mode_angle(mode);
    r
}

fn eval_avec(texte: &str, r: &Registres) -> Result<f64, ErreurEvaluation> {
    evaluer(&traduire(texte, r), r.mode_angle())
}

fn eval_ok(texte: &str) -> f64 {
    eval_avec(texte, &Registres::default())
        .unwrap_or_else(|e| panic!("texte={texte:?} canon={:?} err={e}", traduire(texte, &Registres::default())))
}

fn assert_vaut(texte: &str, attendu: f64) {
    let v = eval_ok(texte);
    assert!((v - attendu).abs() <= TOL, "texte={texte:?} attendu={attendu} obtenu={v}");
}

fn assert_erreur(texte: &str) {
    let r = Registres::default();
    assert_eq!(eval_avec(texte, &r), Err(ErreurEvaluation), "texte={texte:?}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Arithmétique + symboles ------------------------ */

#[test]
fn sci_addition() {
    assert_vaut("2+2", 4.0);
}

#[test]
fn sci_symboles_calculatrice() {
    assert_vaut("5×3", 15.0);
    assert_vaut("15÷3", 5.0);
    assert_vaut("5−3", 2.0);
    // même résultat qu’avec l’ASCII
    assert_eq!(eval_ok("7×8÷2−1"), eval_ok("7*8/2-1"));
}

#[test]
fn sci_constantes() {
    assert_vaut("π", PI);
    assert_vaut("e", E);
    assert_vaut("2×π", 2.0 * PI);
}

#[test]
fn sci_puissances() {
    assert_vaut("4x²", 16.0);
    assert_vaut("(1+1)x²", 4.0);
    assert_vaut("8x^-1", 0.125);
    assert_vaut("2^8", 256.0);
    assert_vaut("5EXP3", 5000.0);
}

#[test]
fn sci_racine() {
    assert_vaut("√(81)", 9.0);
    assert_vaut("√2.25", 1.5);
    assert_erreur("√(-4)");
}

#[test]
fn sci_pourcentage() {
    assert_vaut("50%", 0.5);
    // substitution brute : 200+10% = 200 + 10/100
    assert_vaut("200+10%", 200.1);
}

/* ------------------------ Trig selon le mode ------------------------ */

#[test]
fn sci_sin_90_degres() {
    let r = registres(ModeAngle::Degres);
    let v = eval_avec("sin(90)", &r).unwrap();
    assert!((v - 1.0).abs() <= TOL);
}

#[test]
fn sci_sin_pi_2_radians() {
    let r = registres(ModeAngle::Radians);
    let texte = format!("sin({})", FRAC_PI_2);
    let v = eval_avec(&texte, &r).unwrap();
    assert!((v - 1.0).abs() <= TOL);

    let v2 = eval_avec("sin(π÷2)", &r).unwrap();
    assert!((v2 - 1.0).abs() <= TOL);
}

#[test]
fn sci_inverse_trig_selon_mode() {
    let deg = registres(ModeAngle::Degres);
    let rad = registres(ModeAngle::Radians);

    assert!((eval_avec("acos(0)", &deg).unwrap() - 90.0).abs() <= TOL);
    assert!((eval_avec("acos(0)", &rad).unwrap() - FRAC_PI_2).abs() <= TOL);
    assert!((eval_avec("atan(1)", &deg).unwrap() - 45.0).abs() <= TOL);
    assert_eq!(eval_avec("asin(2)", &deg), Err(ErreurEvaluation));
}

#[test]
fn sci_aller_retour_trig() {
    // asin(sin(x)) = x sur [-90, 90] en degrés
    let deg = registres(ModeAngle::Degres);
    for x in [-90, -45, -30, 0, 15, 60, 89] {
        let v = eval_avec(&format!("asin(sin({x}))"), &deg).unwrap();
        assert!((v - x as f64).abs() <= 1e-7, "x={x} v={v}");
    }
}

#[test]
fn sci_changement_de_mode_sans_retraduction() {
    // le mode n’influence que l’évaluation : même canon, deux réponses
    let r = Registres::default();
    let canon = traduire("cos(180)", &r);
    assert!((evaluer(&canon, ModeAngle::Degres).unwrap() + 1.0).abs() <= TOL);
    assert!((evaluer(&canon, ModeAngle::Radians).unwrap() - 180f64.cos()).abs() <= TOL);
}

/* ------------------------ Factorielle ------------------------ */

#[test]
fn sci_factorielle() {
    assert_vaut("5!", 120.0);
    assert_vaut("0!", 1.0);
    assert_vaut("3!+1", 7.0);
    assert_vaut("2×3!", 12.0);
    assert_erreur("-1!");
    assert_erreur("- 1!");
    assert_erreur("3.5!");
}

#[test]
fn sci_factorielle_parenthesee() {
    assert_vaut("(3+2)!", 120.0);
    assert_vaut("(2)!!", 2.0);
    assert_erreur("(1−2)!");
}

#[test]
fn sci_factorielle_seule() {
    assert_eq!(factorielle(6.0), Ok(720.0));
    assert_eq!(factorielle(-2.0), Err(ErreurEvaluation));
}

#[test]
fn sci_factorielle_geante_infinie() {
    // entier trop grand : infini, donc 1/n! = 0 comme pour 1000!
    assert_vaut("1÷(1000!)", 0.0);
    assert_vaut("1÷(100000000000000000000!)", 0.0);
    assert_erreur("100000000000000000000!");
}

/* ------------------------ Registres ------------------------ */

#[test]
fn sci_memoire() {
    let mut r = Registres::default();
    r.memoire_ajouter(5.0);
    r.memoire_ajouter(3.0);
    assert_eq!(eval_avec("MR", &r), Ok(8.0));

    r.memoire_effacer();
    assert_eq!(eval_avec("MR", &r), Ok(0.0));
}

#[test]
fn sci_memoire_negative_dans_expression() {
    let mut r = Registres::default();
    r.memoire_soustraire(3.0);
    assert_eq!(eval_avec("MRx²", &r), Ok(9.0));
    assert_eq!(eval_avec("2×MR", &r), Ok(-6.0));
}

#[test]
fn sci_ans() {
    let mut r = Registres::default();
    assert_eq!(valider("40+2", &mut r), Ok(42.0));
    assert_eq!(eval_avec("ANS+1", &r), Ok(43.0));

    // échec : ANS intact
    assert_eq!(valider("2+", &mut r), Err(ErreurEvaluation));
    assert_eq!(r.derniere_reponse(), 42.0);
    assert_eq!(eval_avec("ANS+1", &r), Ok(43.0));
}

#[test]
fn sci_ans_fige_dans_le_texte() {
    let mut r = Registres::default();
    r.enregistrer_reponse(10.0);
    let canon = traduire("ANS×2", &r);

    // ANS change après la traduction : le canon garde l’ancienne valeur
    r.enregistrer_reponse(99.0);
    assert_eq!(evaluer(&canon, r.mode_angle()), Ok(20.0));
}

/* ------------------------ Idempotence + robustesse ------------------------ */

#[test]
fn sci_idempotence_canonique() {
    let r = Registres::default();
    for s in ["1+2", "(3-4)*5/6", "2**3**2", "-(1.5+.5)", "10/4-2.5"] {
        assert_eq!(traduire(s, &r), s, "texte={s:?}");
        let canon = traduire(s, &r);
        assert_eq!(traduire(&canon, &r), canon);
    }
}

#[test]
fn sci_malforme_erreur() {
    for s in ["2+", "", "(", ")", "×3", "2π", "sin(", "5!!!(", "√", "..", "ANSANS", "1÷0", "log(0)"] {
        assert_erreur(s);
    }
}

#[test]
fn sci_stress_profondeur_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // 200 parenthèses imbriquées autour de sin(…) : reste borné, sans gel
    let mut texte = "1".to_string();
    for _ in 0..200 {
        texte = format!("sin({texte})");
        budget(t0, max);
    }
    let r = registres(ModeAngle::Radians);
    let v = eval_avec(&texte, &r).unwrap();
    assert!(v.is_finite() && v > 0.0 && v < 1.0);
}

#[test]
fn sci_stress_taille_somme_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut texte = String::new();
    for k in 0..500 {
        if k > 0 {
            texte.push('+');
        }
        texte.push_str("0.5");
        budget(t0, max);
    }
    assert_vaut(&texte, 250.0);
}
