//! Unicode math symbol → LaTeX command mappings
//!
//! The leaf-level substitution table is deliberately closed: only the
//! symbols below are rewritten, everything else passes through verbatim.

use lazy_static::lazy_static;
use phf::phf_map;
use regex::Regex;

/// Symbols rewritten inside math text, padded with spaces on both sides
pub static MATH_SYMBOLS: phf::Map<char, &'static str> = phf_map! {
    // Operators and relations
    '×' => "\\times",
    '⋅' => "\\cdot",
    '÷' => "\\div",
    '±' => "\\pm",
    '∓' => "\\mp",
    '≤' => "\\leq",
    '≥' => "\\geq",
    '≠' => "\\neq",
    '≈' => "\\approx",
    '∞' => "\\infty",
    '∑' => "\\sum",
    '∏' => "\\prod",
    '∫' => "\\int",
    '√' => "\\sqrt",

    // Lowercase Greek
    'α' => "\\alpha",
    'β' => "\\beta",
    'γ' => "\\gamma",
    'δ' => "\\delta",
    'π' => "\\pi",
    'θ' => "\\theta",
    'λ' => "\\lambda",
    'μ' => "\\mu",
    'σ' => "\\sigma",
    'φ' => "\\phi",
    'ω' => "\\omega",
};

/// Big operators recognised on n-ary constructs
pub static NARY_OPERATORS: phf::Map<char, &'static str> = phf_map! {
    '∑' => "\\sum",
    '∫' => "\\int",
    'Π' => "\\prod",
    '∏' => "\\prod",
    '∐' => "\\coprod",
    '∮' => "\\oint",
    '∬' => "\\iint",
    '∭' => "\\iiint",
    '⋃' => "\\bigcup",
    '⋂' => "\\bigcap",
    '⋁' => "\\bigvee",
    '⋀' => "\\bigwedge",
};

/// Accent characters rendered as `\overline`
pub const OVERLINE_ACCENTS: &[char] = &['¯', '\u{0304}', '\u{0305}', '‾'];

/// Accent characters rendered as `\hat`
pub const HAT_ACCENTS: &[char] = &['^', 'ˆ', '\u{0302}'];

lazy_static! {
    /// `÷` directly followed by a digit
    static ref DIV_DIGIT: Regex = Regex::new(r"÷(\d)").unwrap();
}

/// Rewrite math symbols in a leaf text to their LaTeX commands
///
/// ```
/// use wordlax::data::symbols::substitute_math_symbols;
///
/// assert_eq!(substitute_math_symbols("2π"), r"2 \pi ");
/// assert_eq!(substitute_math_symbols("6÷3"), r"6 \div 3");
/// ```
pub fn substitute_math_symbols(text: &str) -> String {
    let text = DIV_DIGIT.replace_all(text, r" \div $1");
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match MATH_SYMBOLS.get(&ch) {
            Some(cmd) => {
                out.push(' ');
                out.push_str(cmd);
                out.push(' ');
            }
            None => out.push(ch),
        }
    }
    out
}

/// Map an n-ary operator character to its LaTeX command, or keep it literally
pub fn nary_operator(op: &str) -> String {
    let op = op.trim();
    let mut chars = op.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => NARY_OPERATORS
            .get(&ch)
            .map(|cmd| cmd.to_string())
            .unwrap_or_else(|| op.to_string()),
        _ => op.to_string(),
    }
}

/// Accent classes recognised by the math transpiler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccentClass {
    Overline,
    Hat,
    Other,
}

/// Classify an accent character (or a spelled-out accent name)
pub fn classify_accent(accent: &str) -> AccentClass {
    let lower = accent.to_lowercase();
    if lower.contains("bar") || accent.chars().any(|c| OVERLINE_ACCENTS.contains(&c)) {
        AccentClass::Overline
    } else if lower.contains("hat") || accent.chars().any(|c| HAT_ACCENTS.contains(&c)) {
        AccentClass::Hat
    } else {
        AccentClass::Other
    }
}
