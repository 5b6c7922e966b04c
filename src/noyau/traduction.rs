// src/noyau/traduction.rs
//
// Traducteur : notation calculatrice -> expression canonique (ASCII)
// -----------------------------------------------------------------
// Un seul passage gauche -> droite. À chaque position, les motifs sont essayés
// dans cet ordre (le premier qui colle gagne) :
//
//   π -> PI        e (non suivi d’une lettre) -> E
//   ÷ -> /         × -> *        − -> -
//   √( -> SQRT(    √12.5 -> SQRT(12.5)
//   x² -> **2      x^-1 -> **-1  ^ -> **
//   % -> /100
//   ANS / MR -> valeur du registre, figée dans le texte : "(42)"
//   EXP -> *10**
//   asin( acos( atan( sin( cos( tan( -> ASIN( … TAN(   (formes longues d’abord)
//   log( -> LOG(   ln( -> LN(
//   12! -> FACT(12)   -3! en position unaire -> FACT(-3)
//
// N’échoue jamais : ce qui n’est pas reconnu est recopié tel quel,
// l’évaluateur le refusera.

use tracing::trace;

use super::environnement::{NOM_E, NOM_FACT, NOM_LN, NOM_LOG10, NOM_PI, NOM_SQRT};
use super::format::format_registre;
use super::registres::Registres;
use super::trig::TrigFn;

/// Traduit le texte saisi en expression canonique.
pub fn traduire(texte: &str, registres: &Registres) -> String {
    let chars: Vec<char> = texte.chars().collect();
    let mut out = String::with_capacity(texte.len() + 16);
    let mut i: usize = 0;

    let fonctions = table_fonctions();

    while i < chars.len() {
        let c = chars[i];

        // Symboles simples
        match c {
            'π' => {
                out.push_str(NOM_PI);
                i += 1;
                continue;
            }
            'e' if !chars.get(i + 1).is_some_and(char::is_ascii_alphabetic) => {
                out.push_str(NOM_E);
                i += 1;
                continue;
            }
            '÷' => {
                out.push('/');
                i += 1;
                continue;
            }
            '×' => {
                out.push('*');
                i += 1;
                continue;
            }
            '%' => {
                out.push_str("/100");
                i += 1;
                continue;
            }
            _ => {}
        }

        // Racine carrée
        if c == '√' {
            i = traduire_racine(&chars, i, &mut out);
            continue;
        }

        // Puissances (x² / x^-1 avant ^ seul)
        if commence(&chars, i, "x²") {
            out.push_str("**2");
            i += 2;
            continue;
        }
        if commence(&chars, i, "x^-1") {
            out.push_str("**-1");
            i += 4;
            continue;
        }
        if c == '^' {
            out.push_str("**");
            i += 1;
            continue;
        }

        // Registres + EXP
        if commence(&chars, i, "ANS") {
            out.push_str(&format_registre(registres.derniere_reponse()));
            i += 3;
            continue;
        }
        if commence(&chars, i, "MR") {
            out.push_str(&format_registre(registres.memoire()));
            i += 2;
            continue;
        }
        if commence(&chars, i, "EXP") {
            out.push_str("*10**");
            i += 3;
            continue;
        }

        // Fonctions nommées "nom(" -> "NOM("
        if let Some((saisie, canon)) = fonctions
            .iter()
            .find(|(saisie, _)| commence(&chars, i, saisie) && chars.get(i + saisie.chars().count()) == Some(&'('))
        {
            out.push_str(canon);
            out.push('(');
            i += saisie.chars().count() + 1;
            continue;
        }

        // Littéral numérique (éventuellement précédé d’un moins unaire) suivi de '!'
        if let Some(fin) = traduire_factorielle(&chars, i, &mut out) {
            i = fin;
            continue;
        }

        if c == '−' {
            out.push('-');
        } else {
            out.push(c);
        }
        i += 1;
    }

    trace!(entree = texte, canon = %out, "traduction");
    out
}

/// Noms saisis -> noms canoniques. Formes longues (asin…) avant les courtes (sin…).
fn table_fonctions() -> Vec<(&'static str, &'static str)> {
    let mut t: Vec<(&'static str, &'static str)> = Vec::with_capacity(8);
    for f in [TrigFn::Asin, TrigFn::Acos, TrigFn::Atan, TrigFn::Sin, TrigFn::Cos, TrigFn::Tan] {
        t.push((f.nom_saisie(), f.nom_canon()));
    }
    t.push(("log", NOM_LOG10));
    t.push(("ln", NOM_LN));
    t
}

fn commence(chars: &[char], i: usize, motif: &str) -> bool {
    let mut k = i;
    for m in motif.chars() {
        if chars.get(k) != Some(&m) {
            return false;
        }
        k += 1;
    }
    true
}

/// √ : "√ (" -> "SQRT(" ; "√12.5" -> "SQRT(12.5)" ; sinon recopié.
/// Retourne la position suivante.
fn traduire_racine(chars: &[char], i: usize, out: &mut String) -> usize {
    let mut k = i + 1;
    while k < chars.len() && chars[k].is_whitespace() {
        k += 1;
    }

    if chars.get(k) == Some(&'(') {
        out.push_str(NOM_SQRT);
        out.push('(');
        return k + 1;
    }

    let debut = k;
    while k < chars.len() && (chars[k].is_ascii_digit() || chars[k] == '.') {
        k += 1;
    }
    if k > debut {
        out.push_str(NOM_SQRT);
        out.push('(');
        out.extend(&chars[debut..k]);
        out.push(')');
        return k;
    }

    out.push('√');
    i + 1
}

/// "12!" -> "FACT(12)", "3.5!" -> "FACT(3.5)", et en position unaire "-1!" (ou "- 1!") -> "FACT(-1)".
/// Retourne None si le motif ne colle pas (rien n’est écrit).
fn traduire_factorielle(chars: &[char], i: usize, out: &mut String) -> Option<usize> {
    let negatif = matches!(chars.get(i), Some('-' | '−')) && position_unaire(out);
    let mut debut = i;
    if negatif {
        // blancs tolérés entre le moins et le nombre : "- 1!" == "-1!"
        debut += 1;
        while chars.get(debut).is_some_and(|c| c.is_whitespace()) {
            debut += 1;
        }
    }

    let mut k = debut;
    let mut point = false;
    while k < chars.len() && (chars[k].is_ascii_digit() || (chars[k] == '.' && !point)) {
        point |= chars[k] == '.';
        k += 1;
    }

    let litteral = &chars[debut..k];
    if !litteral.iter().any(char::is_ascii_digit) || chars.get(k) != Some(&'!') {
        return None;
    }

    out.push_str(NOM_FACT);
    out.push('(');
    if negatif {
        out.push('-');
    }
    out.extend(litteral);
    out.push(')');
    Some(k + 1)
}

/// Un '-' est unaire en début d’expression ou après un opérateur / une '('.
fn position_unaire(out: &str) -> bool {
    match out.trim_end().chars().last() {
        None => true,
        Some(c) => matches!(c, '(' | '+' | '-' | '*' | '/'),
    }
}
