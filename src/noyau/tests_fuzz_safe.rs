//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : résultat fini OU "Error", jamais de panique,
//!   et les registres ne bougent pas sur un échec

use std::time::{Duration, Instant};

use super::{eval_expression, traduire, valider, ErreurEvaluation, ModeAngle, Registres};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn check_invariant_fini(texte: &str, res: &Result<f64, ErreurEvaluation>) {
    if let Ok(v) = res {
        assert!(v.is_finite(), "succès non fini: texte={texte:?} v={v}");
    }
}

/// Touches du clavier, telles que l’UI les insère.
const TOUCHES: [&str; 36] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "−", "×", "÷", "(", ")", "%",
    "π", "e", "^", "x²", "x^-1", "√(", "!", "EXP", "ANS", "MR", "sin(", "cos(", "tan(", "asin(",
    "acos(", "atan(", "log(", "ln(",
];

/// Suite de touches au hasard (majoritairement malformée).
fn gen_touches(rng: &mut Rng, n: usize) -> String {
    let mut s = String::new();
    for _ in 0..n {
        s.push_str(TOUCHES[rng.pick(TOUCHES.len() as u32) as usize]);
    }
    s
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let a = rng.pick(10);
    if rng.coin() {
        format!("{a}.{}", rng.pick(100))
    } else {
        format!("{a}")
    }
}

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(7) {
        0 | 1 | 2 => gen_nombre(rng),
        3 => "π".to_string(),
        4 => "e".to_string(),
        5 => "ANS".to_string(),
        _ => format!("{}!", rng.pick(8)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    match rng.pick(12) {
        0 => gen_atom(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({}−{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({}×{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("({}÷{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("({})^{}", gen_expr(rng, depth - 1), rng.pick(4)),
        6 => format!("sin({})", gen_expr(rng, depth - 1)),
        7 => format!("acos({})", gen_expr(rng, depth - 1)),
        8 => format!("√({})", gen_expr(rng, depth - 1)),
        9 => format!("ln({})", gen_expr(rng, depth - 1)),
        10 => format!("({})x²", gen_expr(rng, depth - 1)),
        _ => format!("({})%", gen_expr(rng, depth - 1)),
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_touches_au_hasard_jamais_de_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut r = Registres::default();
    r.enregistrer_reponse(2.5);
    r.memoire_ajouter(-4.0);

    for _ in 0..400 {
        budget(t0, max);

        let n = 1 + rng.pick(12) as usize;
        let texte = gen_touches(&mut rng, n);
        let res = eval_expression(&texte, &r);
        check_invariant_fini(&texte, &res);
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes expressions => mêmes sorties
    let mut a = Rng::new(0xBADC0DE_u64);
    let mut b = Rng::new(0xBADC0DE_u64);
    let r = Registres::default();

    for _ in 0..100 {
        budget(t0, max);

        let ea = gen_expr(&mut a, 4);
        let eb = gen_expr(&mut b, 4);
        assert_eq!(ea, eb);
        assert_eq!(traduire(&ea, &r), traduire(&eb, &r));
        assert_eq!(eval_expression(&ea, &r), eval_expression(&eb, &r));
    }
}

#[test]
fn fuzz_safe_expressions_mix_succes_erreurs() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0x5EED_u64);
    let mut r = Registres::default();
    r.set_mode_angle(ModeAngle::Radians);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let texte = gen_expr(&mut rng, 4);
        let avant = r;

        match valider(&texte, &mut r) {
            Ok(v) => {
                assert!(v.is_finite());
                assert_eq!(r.derniere_reponse(), v, "ANS doit recevoir le résultat");
                seen_ok += 1;
            }
            Err(_) => {
                assert_eq!(r, avant, "échec => registres intacts: texte={texte:?}");
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_memoire_reste_finie() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xFEED_u64);
    let mut r = Registres::default();

    for _ in 0..150 {
        budget(t0, max);

        let texte = gen_expr(&mut rng, 3);
        // M+ / M- : l’UI passe le résultat brut (NaN si erreur)
        let v = eval_expression(&texte, &r).unwrap_or(f64::NAN);
        if rng.coin() {
            r.memoire_ajouter(v);
        } else {
            r.memoire_soustraire(v);
        }
        assert!(r.memoire().is_finite());
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let texte = somme_balancee("1÷2", 800);
    budget(t0, max);

    let v = eval_expression(&texte, &Registres::default()).unwrap_or_else(|e| panic!("err: {e}"));

    // 800*(1/2) = 400
    assert_eq!(v, 400.0);
}

#[test]
fn fuzz_safe_somme_plate_geante_refusee() {
    // 100 000 termes collés : arbre trop profond => Error, pas de débordement de pile
    let texte = vec!["1"; 100_000].join("+");
    assert_eq!(
        eval_expression(&texte, &Registres::default()),
        Err(ErreurEvaluation)
    );

    let negations = format!("{}1", "−".repeat(100_000));
    assert_eq!(
        eval_expression(&negations, &Registres::default()),
        Err(ErreurEvaluation)
    );
}
