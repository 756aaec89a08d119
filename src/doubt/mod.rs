//! Motor de respuestas de dudas: cadena de reglas ordenada, gana la primera
//! que produce respuesta. Si una extracción falla, se cae a la siguiente
//! regla en vez de devolver un error al llamador.

pub mod arith;

use std::sync::OnceLock;

use regex::Regex;

use self::arith::eval_expr;

pub const FALLBACK_ANSWER: &str =
    "Thanks — your question was recorded. A detailed answer will be added soon.";

const SCIENCE_DB: [(&str, &str); 6] = [
    (
        "photosynthesis",
        "Plants make food using sunlight, CO₂ and water (chlorophyll involved).",
    ),
    (
        "gravity",
        "A force that pulls objects toward the Earth (gives objects weight).",
    ),
    (
        "atom",
        "Smallest unit of an element containing protons, neutrons and electrons.",
    ),
    ("evaporation", "Liquid turning into vapor due to heat."),
    ("acid", "Substance that donates H⁺ ions (pH < 7)."),
    ("base", "Substance that releases OH⁻ ions (pH > 7)."),
];

const SMALL_DICT: [(&str, &str); 3] = [
    ("timorous", "showing fear or lacking confidence"),
    ("benevolent", "kind and generous"),
    ("prudent", "acting with care for the future"),
];

fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+\.?\d*").expect("regex de números válida"))
}

fn lead_phrase_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(what is |meaning of |define )").expect("regex de frase válida"))
}

/// Responde una duda en texto libre. Puro: el registro en el log de dudas
/// es responsabilidad del llamador.
pub fn answer(question: &str) -> String {
    let ql = question.trim().to_lowercase();

    if ql.contains("square root") || ql.contains("sqrt") {
        if let Some(ans) = try_sqrt(&ql) {
            return ans;
        }
    }

    if ql.contains("percent") || ql.contains('%') {
        if let Some(ans) = try_percent(&ql) {
            return ans;
        }
    }

    if ql.contains(['+', '-', '*', '/']) || ql.contains('%') || ql.contains("calculate") {
        if let Some(ans) = try_arithmetic(&ql) {
            return ans;
        }
    }

    if let Some(ans) = try_science(&ql) {
        return ans;
    }

    if ql.contains("meaning") || ql.starts_with("define") {
        if let Some(ans) = try_vocabulary(&ql) {
            return ans;
        }
    }

    FALLBACK_ANSWER.to_string()
}

fn extract_numbers(ql: &str) -> Vec<f64> {
    number_re()
        .find_iter(ql)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect()
}

fn try_sqrt(ql: &str) -> Option<String> {
    let n = *extract_numbers(ql).first()?;
    if n < 0.0 {
        return None;
    }
    Some(format!("√{} = {}", n.trunc() as i64, fmt_num(n.sqrt())))
}

fn try_percent(ql: &str) -> Option<String> {
    let nums = extract_numbers(ql);
    if nums.len() < 2 {
        return None;
    }
    let (percent, value) = (nums[0], nums[1]);
    Some(format!(
        "{}% of {} = {}",
        fmt_num(percent),
        fmt_num(value),
        fmt_num((percent / 100.0) * value)
    ))
}

fn try_arithmetic(ql: &str) -> Option<String> {
    // Solo dígitos, operadores, paréntesis, punto y espacios; el resto fuera
    let expr: String = ql
        .chars()
        .filter(|c| c.is_ascii_digit() || "+-*/(). ".contains(*c))
        .collect();
    if expr.trim().is_empty() {
        return None;
    }
    eval_expr(&expr)
        .ok()
        .map(|v| format!("Answer: {}", fmt_num(v)))
}

fn try_science(ql: &str) -> Option<String> {
    for (term, definition) in SCIENCE_DB {
        if ql.contains(term) {
            return Some(format!("{}: {definition}", capitalize(term)));
        }
    }
    None
}

fn try_vocabulary(ql: &str) -> Option<String> {
    let word = lead_phrase_re().replace(ql, "");
    let word = word.trim().trim_end_matches('?').trim();
    SMALL_DICT
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(w, meaning)| format!("Meaning of {w}: {meaning}"))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Formato numérico estilo `%g`: sin `.0` final en los enteros.
fn fmt_num(x: f64) -> String {
    if x.fract() == 0.0 && x.abs() < 1e15 {
        format!("{}", x as i64)
    } else {
        format!("{x}")
    }
}
