// src/noyau/format.rs

/// Texte d’un registre injecté dans l’expression canonique.
/// Toujours relisible par le tokenizer : décimal sans exposant, parenthésé
/// (ANS = -3 => "(-3)", donc "ANS**2" reste 9).
pub fn format_registre(v: f64) -> String {
    // -0 => 0 (le signe du zéro n’a pas de sens à l’écran)
    let v = if v == 0.0 { 0.0 } else { v };
    format!("({v})")
}

/// Affichage du résultat (ligne “=”).
/// - entiers et décimaux “normaux” : forme décimale la plus courte
/// - |v| ≥ 1e21 ou |v| < 1e-6 : notation exponentielle
pub fn format_resultat(v: f64) -> String {
    if !v.is_finite() {
        return "Error".to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }

    let a = v.abs();
    if !(1e-6..1e21).contains(&a) {
        format!("{v:e}")
    } else {
        format!("{v}")
    }
}
