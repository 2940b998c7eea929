//! Qualified names and element classification

use std::fmt;

use crate::data::constants::{NS_A, NS_M, NS_W, NS_WP};

/// Namespace-qualified element or attribute name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QName {
    pub namespace: Option<String>,
    pub local: String,
}

impl QName {
    /// Create a name in the given namespace
    pub fn new(namespace: &str, local: &str) -> Self {
        QName {
            namespace: Some(namespace.to_string()),
            local: local.to_string(),
        }
    }

    /// Create a name without namespace
    pub fn unqualified(local: &str) -> Self {
        QName {
            namespace: None,
            local: local.to_string(),
        }
    }

    /// WordprocessingML name (`w:local`)
    pub fn w(local: &str) -> Self {
        Self::new(NS_W, local)
    }

    /// Office Math name (`m:local`)
    pub fn m(local: &str) -> Self {
        Self::new(NS_M, local)
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn is(&self, namespace: &str, local: &str) -> bool {
        self.namespace() == Some(namespace) && self.local == local
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{{{}}}{}", ns, self.local),
            None => write!(f, "{}", self.local),
        }
    }
}

/// Kind of an element, decided once from its qualified name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    // WordprocessingML
    Document,
    Body,
    Paragraph,
    ParagraphProps,
    ParagraphStyle,
    Numbering,
    Run,
    RunProps,
    Text,
    Break,
    CarriageReturn,
    Underline,
    VertAlign,
    Table,
    TableRow,
    TableCell,
    Drawing,

    // DrawingML
    Inline,
    Anchor,
    DocProps,
    Blip,

    // Legacy VML, any namespace
    ImageData,

    // Office Math
    MathPara,
    Math,
    MathRun,
    MathText,
    Fraction,
    Numerator,
    Denominator,
    SupObject,
    SubObject,
    SubSupObject,
    MathArg,
    SupArg,
    SubArg,
    Radical,
    Degree,
    Nary,
    NaryProps,
    AccentProps,
    MathChar,
    Accent,

    Other,
}

impl ElementKind {
    /// Classify a qualified element name
    pub fn classify(namespace: Option<&str>, local: &str) -> Self {
        if local == "imagedata" {
            return ElementKind::ImageData;
        }
        match namespace {
            Some(NS_W) => Self::classify_word(local),
            Some(NS_M) | None => Self::classify_math(local),
            Some(NS_WP) => match local {
                "inline" => ElementKind::Inline,
                "anchor" => ElementKind::Anchor,
                "docPr" => ElementKind::DocProps,
                _ => ElementKind::Other,
            },
            Some(NS_A) if local == "blip" => ElementKind::Blip,
            _ => ElementKind::Other,
        }
    }

    fn classify_word(local: &str) -> Self {
        match local {
            "document" => ElementKind::Document,
            "body" => ElementKind::Body,
            "p" => ElementKind::Paragraph,
            "pPr" => ElementKind::ParagraphProps,
            "pStyle" => ElementKind::ParagraphStyle,
            "numPr" => ElementKind::Numbering,
            "r" => ElementKind::Run,
            "rPr" => ElementKind::RunProps,
            "t" => ElementKind::Text,
            "br" => ElementKind::Break,
            "cr" => ElementKind::CarriageReturn,
            "u" => ElementKind::Underline,
            "vertAlign" => ElementKind::VertAlign,
            "tbl" => ElementKind::Table,
            "tr" => ElementKind::TableRow,
            "tc" => ElementKind::TableCell,
            "drawing" => ElementKind::Drawing,
            _ => ElementKind::Other,
        }
    }

    /// Math names; unqualified names are accepted to tolerate schema variation
    fn classify_math(local: &str) -> Self {
        match local {
            "oMathPara" => ElementKind::MathPara,
            "oMath" => ElementKind::Math,
            "r" => ElementKind::MathRun,
            "t" => ElementKind::MathText,
            "f" | "frac" => ElementKind::Fraction,
            "num" => ElementKind::Numerator,
            "den" => ElementKind::Denominator,
            "sSup" => ElementKind::SupObject,
            "sSub" => ElementKind::SubObject,
            "sSubSup" | "sSupSub" => ElementKind::SubSupObject,
            "e" => ElementKind::MathArg,
            "sup" => ElementKind::SupArg,
            "sub" => ElementKind::SubArg,
            "rad" => ElementKind::Radical,
            "deg" => ElementKind::Degree,
            "nary" => ElementKind::Nary,
            "naryPr" => ElementKind::NaryProps,
            "accPr" => ElementKind::AccentProps,
            "chr" => ElementKind::MathChar,
            "acc" => ElementKind::Accent,
            _ => ElementKind::Other,
        }
    }

    /// `oMath` or `oMathPara`
    pub fn is_math_group(self) -> bool {
        matches!(self, ElementKind::Math | ElementKind::MathPara)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::constants::{NS_O, NS_V};

    #[test]
    fn test_word_names() {
        assert_eq!(ElementKind::classify(Some(NS_W), "p"), ElementKind::Paragraph);
        assert_eq!(ElementKind::classify(Some(NS_W), "r"), ElementKind::Run);
        assert_eq!(ElementKind::classify(Some(NS_W), "tbl"), ElementKind::Table);
        assert_eq!(ElementKind::classify(Some(NS_W), "sectPr"), ElementKind::Other);
    }

    #[test]
    fn test_same_local_name_in_different_namespaces() {
        assert_eq!(ElementKind::classify(Some(NS_M), "r"), ElementKind::MathRun);
        assert_eq!(ElementKind::classify(Some(NS_M), "t"), ElementKind::MathText);
        assert_eq!(ElementKind::classify(Some(NS_W), "t"), ElementKind::Text);
    }

    #[test]
    fn test_imagedata_in_any_namespace() {
        assert_eq!(ElementKind::classify(Some(NS_V), "imagedata"), ElementKind::ImageData);
        assert_eq!(ElementKind::classify(Some(NS_O), "imagedata"), ElementKind::ImageData);
        assert_eq!(ElementKind::classify(None, "imagedata"), ElementKind::ImageData);
    }

    #[test]
    fn test_unqualified_math_aliases() {
        assert_eq!(ElementKind::classify(None, "frac"), ElementKind::Fraction);
        assert_eq!(ElementKind::classify(Some(NS_M), "sSupSub"), ElementKind::SubSupObject);
        assert_eq!(ElementKind::classify(Some(NS_V), "f"), ElementKind::Other);
    }

    #[test]
    fn test_qname_display() {
        assert_eq!(QName::unqualified("title").to_string(), "title");
        assert_eq!(
            QName::w("p").to_string(),
            format!("{{{}}}p", NS_W)
        );
    }
}
