// src/noyau/jetons.rs
//
// Jetons de l’expression CANONIQUE (sortie du traducteur).
// Plus de symboles calculatrice ici : seulement ASCII.

use super::erreur::Defaut;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Constantes + fonctions (PI, E, SIN, FACT, …)
    // NOTE: le parse (RPN) décidera : suivi de '(' => fonction, sinon constante.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    StarStar, // **
    Bang,     // ! (postfixe)

    LPar,
    RPar,
}

/// Tokenize une expression canonique.
/// Supporte:
/// - nombres décimaux sans exposant (ex: 12, 3.5, 5., .5)
/// - opérateurs + - * / ** et ! postfixe
/// - parenthèses ( )
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]* (sensibles à la casse)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, Defaut> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        match c {
            '(' => {
                out.push(Tok::LPar);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Tok::RPar);
                i += 1;
                continue;
            }
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                // ** (puissance) avant * (produit)
                if i + 1 < chars.len() && chars[i + 1] == '*' {
                    out.push(Tok::StarStar);
                    i += 2;
                } else {
                    out.push(Tok::Star);
                    i += 1;
                }
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            '!' => {
                out.push(Tok::Bang);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]*
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            out.push(Tok::Ident(chars[start..i].iter().collect()));
            continue;
        }

        // Nombre : chiffres, au plus un point
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut point = false;
            while i < chars.len() && (chars[i].is_ascii_digit() || (chars[i] == '.' && !point)) {
                point |= chars[i] == '.';
                i += 1;
            }
            let txt: String = chars[start..i].iter().collect();
            if txt == "." {
                return Err(Defaut::syntaxe("point isolé"));
            }
            let v: f64 = txt
                .parse()
                .map_err(|_| Defaut::syntaxe(format!("nombre invalide: {txt}")))?;
            out.push(Tok::Num(v));
            continue;
        }

        return Err(Defaut::syntaxe(format!("caractère inattendu: '{c}'")));
    }

    Ok(out)
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Ident(name) => name.clone(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::StarStar => "**".to_string(),
            Tok::Bang => "!".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
