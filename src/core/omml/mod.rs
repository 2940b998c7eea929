//! Office Math (OMML) to LaTeX conversion
//!
//! Converts a math subtree rooted at `m:oMath` / `m:oMathPara` into LaTeX
//! source. Conversion is a pure function of the subtree: every construct is
//! classified into a [`MathConstruct`] and dispatched with an exhaustive
//! match. Constructs that are not understood contribute the LaTeX of their
//! children, and missing slots (a fraction without denominator, an n-ary
//! without operator) become empty strings.

use std::fmt::Write;

use crate::core::tree::{ElementKind, Node};
use crate::data::constants::{NS_M, NS_W};
use crate::data::symbols::{classify_accent, nary_operator, substitute_math_symbols, AccentClass};

/// Math constructs recognised by the transpiler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathConstruct {
    /// `oMath` / `oMathPara` container
    Group,
    /// Math run (`m:r`, or a word run nested in math)
    Run,
    /// Text leaf (`m:t` / `w:t`)
    Text,
    Fraction,
    Superscript,
    Subscript,
    SubSuperscript,
    Radical,
    Nary,
    Accent,
    /// Anything else: children are converted and concatenated
    Passthrough,
}

impl MathConstruct {
    pub fn of(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Math | ElementKind::MathPara => MathConstruct::Group,
            ElementKind::MathRun | ElementKind::Run => MathConstruct::Run,
            ElementKind::MathText | ElementKind::Text => MathConstruct::Text,
            ElementKind::Fraction => MathConstruct::Fraction,
            ElementKind::SupObject => MathConstruct::Superscript,
            ElementKind::SubObject => MathConstruct::Subscript,
            ElementKind::SubSupObject => MathConstruct::SubSuperscript,
            ElementKind::Radical => MathConstruct::Radical,
            ElementKind::Nary => MathConstruct::Nary,
            ElementKind::Accent => MathConstruct::Accent,
            _ => MathConstruct::Passthrough,
        }
    }
}

/// Convert a math subtree to LaTeX
///
/// ```
/// use wordlax::core::omml::omml_to_latex;
/// use wordlax::core::tree::XmlTree;
///
/// let tree = XmlTree::parse_fragment(
///     "<m:oMath><m:f><m:num><m:r><m:t>a</m:t></m:r></m:num>\
///      <m:den><m:r><m:t>b</m:t></m:r></m:den></m:f></m:oMath>",
/// )
/// .unwrap();
/// let math = tree.root().children().next().unwrap();
/// assert_eq!(omml_to_latex(math), r"\frac{a}{b}");
/// ```
pub fn omml_to_latex(node: Node) -> String {
    let mut output = String::new();
    convert_node(node, &mut output);
    output
}

/// Convert one node, appending its LaTeX to `output`
pub fn convert_node(node: Node, output: &mut String) {
    match MathConstruct::of(node.kind()) {
        MathConstruct::Group | MathConstruct::Passthrough => convert_children(node, output),
        MathConstruct::Run => convert_run(node, output),
        MathConstruct::Text => {
            output.push_str(&substitute_math_symbols(node.text().unwrap_or_default()))
        }
        MathConstruct::Fraction => convert_fraction(node, output),
        MathConstruct::Superscript => {
            let base = slot(arg(node, ElementKind::MathArg, "base"));
            let sup = slot(arg(node, ElementKind::SupArg, "sup"));
            let _ = write!(output, "{}^{{{}}}", base, sup);
        }
        MathConstruct::Subscript => {
            let base = slot(arg(node, ElementKind::MathArg, "base"));
            let sub = slot(arg(node, ElementKind::SubArg, "sub"));
            let _ = write!(output, "{}_{{{}}}", base, sub);
        }
        MathConstruct::SubSuperscript => {
            let base = slot(arg(node, ElementKind::MathArg, "base"));
            let sub = slot(arg(node, ElementKind::SubArg, "sub"));
            let sup = slot(arg(node, ElementKind::SupArg, "sup"));
            let _ = write!(output, "{}_{{{}}}^{{{}}}", base, sub, sup);
        }
        MathConstruct::Radical => convert_radical(node, output),
        MathConstruct::Nary => convert_nary(node, output),
        MathConstruct::Accent => convert_accent(node, output),
    }
}

fn convert_children(node: Node, output: &mut String) {
    for child in node.children() {
        convert_node(child, output);
    }
}

/// LaTeX of an argument group's children, or empty when the group is absent
fn slot(group: Option<Node>) -> String {
    let mut out = String::new();
    if let Some(group) = group {
        convert_children(group, &mut out);
    }
    out
}

/// Locate an argument child by kind, then by bare local name
fn arg<'a>(node: Node<'a>, kind: ElementKind, fallback: &str) -> Option<Node<'a>> {
    node.child(kind).or_else(|| node.child_by_local(fallback))
}

/// Concatenated math text of a subtree, falling back to word text
fn math_text(node: Node) -> String {
    let collect = |kind| -> String {
        node.find_all(kind)
            .filter_map(|t| t.text())
            .collect::<Vec<_>>()
            .concat()
    };
    let text = collect(ElementKind::MathText);
    if text.is_empty() {
        collect(ElementKind::Text)
    } else {
        text
    }
}

/// `w:rPr/w:vertAlign@w:val` of a run
pub fn vertical_align<'a>(run: Node<'a>) -> Option<&'a str> {
    run.child(ElementKind::RunProps)
        .and_then(|props| props.child(ElementKind::VertAlign))
        .and_then(|align| align.attr(NS_W, "val"))
}

fn convert_run(node: Node, output: &mut String) {
    let text = math_text(node);
    match vertical_align(node) {
        Some("superscript") => {
            let _ = write!(output, "^{{{}}}", substitute_math_symbols(&text));
        }
        Some("subscript") => {
            let _ = write!(output, "_{{{}}}", substitute_math_symbols(&text));
        }
        _ if !text.is_empty() => output.push_str(&substitute_math_symbols(&text)),
        _ => convert_children(node, output),
    }
}

fn convert_fraction(node: Node, output: &mut String) {
    let num = slot(arg(node, ElementKind::Numerator, "num"));
    let den = slot(arg(node, ElementKind::Denominator, "den"));
    let _ = write!(output, "\\frac{{{}}}{{{}}}", num, den);
}

fn convert_radical(node: Node, output: &mut String) {
    let degree = slot(arg(node, ElementKind::Degree, "deg"));
    let radicand = slot(arg(node, ElementKind::MathArg, "radicand"));
    if degree.is_empty() {
        let _ = write!(output, "\\sqrt{{{}}}", radicand);
    } else {
        let _ = write!(output, "\\sqrt[{}]{{{}}}", degree, radicand);
    }
}

/// Character value of an `m:chr`-like node: its `val` attribute, else its text
fn char_value(chr: Node) -> String {
    chr.attr(NS_M, "val")
        .or_else(|| chr.attr_local("val"))
        .or_else(|| chr.text())
        .map(str::to_string)
        .unwrap_or_else(|| math_text(chr))
}

/// Operator or accent character declared in a property block
fn property_char(node: Node, props: ElementKind) -> Option<String> {
    node.child(props)
        .and_then(|p| p.child(ElementKind::MathChar))
        .or_else(|| node.child(ElementKind::MathChar))
        .map(char_value)
}

fn convert_nary(node: Node, output: &mut String) {
    let op = property_char(node, ElementKind::NaryProps)
        .or_else(|| node.child_by_local("op").map(char_value))
        .unwrap_or_default();
    let op_tex = nary_operator(&op);
    let lower = slot(arg(node, ElementKind::SubArg, "low"));
    let upper = slot(arg(node, ElementKind::SupArg, "up"));

    output.push_str(&op_tex);
    match (lower.is_empty(), upper.is_empty()) {
        (false, false) => {
            let _ = write!(output, "_{{{}}}^{{{}}}", lower, upper);
        }
        (false, true) => {
            let _ = write!(output, "_{{{}}}", lower);
        }
        (true, false) => {
            let _ = write!(output, "^{{{}}}", upper);
        }
        (true, true) => {}
    }

    let body = slot(node.child(ElementKind::MathArg));
    if !body.trim().is_empty() {
        output.push(' ');
        output.push_str(&body);
    }
}

fn convert_accent(node: Node, output: &mut String) {
    let accent = property_char(node, ElementKind::AccentProps).unwrap_or_default();
    let base = slot(node.child(ElementKind::MathArg));
    match classify_accent(&accent) {
        AccentClass::Overline => {
            let _ = write!(output, "\\overline{{{}}}", base);
        }
        AccentClass::Hat => {
            let _ = write!(output, "\\hat{{{}}}", base);
        }
        AccentClass::Other => {
            let _ = write!(output, "\\overset{{{}}}{{{}}}", accent, base);
        }
    }
}
