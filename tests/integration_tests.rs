//! Integration tests for Wordlax full document conversion

use wordlax::{
    convert_document, docx_xml_to_markdown, omml_fragment_to_latex, paragraph_items,
    ContentItem, DocumentConverter, ElementKind, ImageCounters, QName, TreeBuilder, W2MOptions,
    WarningKind, XmlTree,
};

const NAMESPACES: &str = concat!(
    r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" "#,
    r#"xmlns:m="http://schemas.openxmlformats.org/officeDocument/2006/math" "#,
    r#"xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing" "#,
    r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:pic="http://schemas.openxmlformats.org/drawingml/2006/picture" "#,
    r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
    r#"xmlns:v="urn:schemas-microsoft-com:vml" "#,
    r#"xmlns:o="urn:schemas-microsoft-com:office:office""#,
);

fn document_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document {}><w:body>{}<w:sectPr/></w:body></w:document>"#,
        NAMESPACES, body
    )
}

fn to_markdown(body: &str) -> String {
    docx_xml_to_markdown(&document_xml(body), &W2MOptions::for_document("sample"))
        .unwrap()
        .content
}

fn text_run(text: &str) -> String {
    format!(r#"<w:r><w:t xml:space="preserve">{}</w:t></w:r>"#, text)
}

fn script_run(text: &str, align: &str) -> String {
    format!(
        r#"<w:r><w:rPr><w:vertAlign w:val="{}"/></w:rPr><w:t>{}</w:t></w:r>"#,
        align, text
    )
}

fn first_paragraph(tree: &XmlTree) -> wordlax::Node<'_> {
    tree.root().find(ElementKind::Paragraph).unwrap()
}

// ============================================================================
// Math Transpiler
// ============================================================================

mod math {
    use super::*;
    use pretty_assertions::assert_eq;

    fn latex(fragment: &str) -> String {
        omml_fragment_to_latex(fragment).unwrap()
    }

    fn r(text: &str) -> String {
        format!("<m:r><m:t>{}</m:t></m:r>", text)
    }

    #[test]
    fn test_fraction() {
        let frac = format!(
            "<m:oMath><m:f><m:num>{}</m:num><m:den>{}</m:den></m:f></m:oMath>",
            r("a"),
            r("b")
        );
        assert_eq!(latex(&frac), r"\frac{a}{b}");
    }

    #[test]
    fn test_scripts() {
        let sub_sup = format!(
            "<m:oMath><m:sSubSup><m:e>{}</m:e><m:sub>{}</m:sub><m:sup>{}</m:sup></m:sSubSup></m:oMath>",
            r("x"),
            r("i"),
            r("2")
        );
        assert_eq!(latex(&sub_sup), "x_{i}^{2}");
    }

    #[test]
    fn test_radical_with_degree() {
        let rad = format!(
            "<m:oMath><m:rad><m:deg>{}</m:deg><m:e>{}</m:e></m:rad></m:oMath>",
            r("3"),
            r("x")
        );
        assert_eq!(latex(&rad), r"\sqrt[3]{x}");

        let plain = format!("<m:oMath><m:rad><m:deg/><m:e>{}</m:e></m:rad></m:oMath>", r("x"));
        assert_eq!(latex(&plain), r"\sqrt{x}");
    }

    #[test]
    fn test_nary_sum() {
        let nary = format!(
            r#"<m:oMath><m:nary><m:naryPr><m:chr m:val="∑"/></m:naryPr>
               <m:sub>{}</m:sub><m:sup>{}</m:sup><m:e>{}</m:e></m:nary></m:oMath>"#,
            r("i=1"),
            r("n"),
            r("i")
        );
        assert_eq!(latex(&nary), r"\sum_{i=1}^{n} i");
    }

    #[test]
    fn test_accent_bar() {
        let acc = format!(
            r#"<m:oMath><m:acc><m:accPr><m:chr m:val="¯"/></m:accPr><m:e>{}</m:e></m:acc></m:oMath>"#,
            r("x")
        );
        assert_eq!(latex(&acc), r"\overline{x}");
    }

    #[test]
    fn test_symbols_padded() {
        assert_eq!(latex(&format!("<m:oMath>{}</m:oMath>", r("a≤b"))), r"a \leq b");
    }

    #[test]
    fn test_unknown_constructs_pass_through() {
        let boxed = format!(
            "<m:oMath><m:box><m:e>{}</m:e></m:box><m:d><m:e>{}</m:e></m:d></m:oMath>",
            r("y"),
            r("z")
        );
        assert_eq!(latex(&boxed), "yz");
    }
}

// ============================================================================
// Paragraph Content
// ============================================================================

mod paragraphs {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_items_follow_document_order() {
        let body = format!(
            "<w:p>{}<m:oMath><m:r><m:t>y</m:t></m:r></m:oMath>{}</w:p>",
            text_run("a"),
            text_run("b")
        );
        let tree = XmlTree::parse(&document_xml(&body)).unwrap();
        let items = paragraph_items(first_paragraph(&tree));
        assert_eq!(
            items,
            vec![
                ContentItem::Text("a".to_string()),
                ContentItem::Math("y".to_string()),
                ContentItem::Text("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_script_merge() {
        let body = format!(
            "<w:p>{}{}{}</w:p>",
            text_run("x"),
            script_run("i", "subscript"),
            script_run("2", "superscript")
        );
        let tree = XmlTree::parse(&document_xml(&body)).unwrap();
        assert_eq!(
            paragraph_items(first_paragraph(&tree)),
            vec![ContentItem::Math("x_{i}^{2}".to_string())]
        );
    }

    #[test]
    fn test_underline_spaces() {
        let body = r#"<w:p><w:r><w:rPr><w:u w:val="single"/></w:rPr><w:t xml:space="preserve">  </w:t></w:r></w:p>"#;
        let tree = XmlTree::parse(&document_xml(body)).unwrap();
        assert_eq!(
            paragraph_items(first_paragraph(&tree)),
            vec![ContentItem::Text("__".to_string())]
        );
    }

    #[test]
    fn test_paragraph_conversion_is_deterministic() {
        let body = format!(
            "<w:p>{}{}<m:oMath><m:r><m:t>π</m:t></m:r></m:oMath></w:p>",
            text_run("E=mc"),
            script_run("2", "superscript")
        );
        let tree = XmlTree::parse(&document_xml(&body)).unwrap();
        let p = first_paragraph(&tree);

        let mut converter = DocumentConverter::new(W2MOptions::default());
        let first = converter.paragraph_to_markdown(p);
        let second = converter.paragraph_to_markdown(p);
        assert_eq!(first, second);
        // Folded scripts count as math, so this paragraph is display-only
        assert_eq!(first.as_deref(), Some("\n\n$$\nE=mc^{2} \\pi \n$$\n\n"));
    }

    #[test]
    fn test_programmatic_tree() {
        let mut builder = TreeBuilder::new(QName::w("document"));
        let body = builder.child(builder.root(), QName::w("body"));
        let p = builder.child(body, QName::w("p"));
        let run = builder.child(p, QName::w("r"));
        let t = builder.child(run, QName::w("t"));
        builder.push_text(t, "built");
        let tree = builder.finish();

        let output = convert_document(&tree, &W2MOptions::default());
        assert_eq!(output.content, "built");
    }
}

// ============================================================================
// Document Assembly
// ============================================================================

mod document {
    use super::*;
    use pretty_assertions::assert_eq;

    const PI: &str = "<m:oMath><m:r><m:t>π</m:t></m:r></m:oMath>";

    #[test]
    fn test_display_math_paragraph() {
        let md = to_markdown(&format!("<w:p>{}</w:p>", PI));
        assert_eq!(md, "\n\n$$\n \\pi \n$$\n\n");
    }

    #[test]
    fn test_inline_math_paragraph() {
        let md = to_markdown(&format!("<w:p>{}{}</w:p>", text_run("Value: "), PI));
        assert_eq!(md, "Value:  $  \\pi  $");
    }

    #[test]
    fn test_mixed_document() {
        let body = format!(
            r#"<w:p><w:pPr><w:pStyle w:val="Heading2"/></w:pPr>{title}</w:p>
               <w:p><w:pPr><w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr></w:pPr>{item}</w:p>
               <w:p/>
               <w:tbl><w:tr><w:tc><w:p>{h1}</w:p></w:tc><w:tc><w:p>{h2}</w:p></w:tc></w:tr>
                      <w:tr><w:tc><w:p>{c1}</w:p></w:tc></w:tr></w:tbl>"#,
            title = text_run("Results"),
            item = text_run("first point"),
            h1 = text_run("k"),
            h2 = text_run("v"),
            c1 = text_run("1"),
        );
        let expected = "## Results\n\n- first point\n\n\n\n<table border=\"1\">\n  <thead>\n    <tr>\n      <th>k</th>\n      <th>v</th>\n    </tr>\n  </thead>\n  <tbody>\n    <tr>\n      <td>1</td>\n      <td></td>\n    </tr>\n  </tbody>\n</table>\n\n";
        assert_eq!(to_markdown(&body), expected);
    }

    #[test]
    fn test_image_links() {
        let drawing = r#"<w:r><w:drawing><wp:anchor><wp:docPr id="3" name="Chart 3"/>
            <a:graphic><a:graphicData><pic:pic><pic:blipFill><a:blip r:embed="rId7"/></pic:blipFill>
            </pic:pic></a:graphicData></a:graphic></wp:anchor></w:drawing></w:r>"#;
        let ole = r#"<w:r><w:object><v:shape><v:imagedata r:id="rId8" o:title=""/></v:shape></w:object></w:r>"#;
        let md = to_markdown(&format!(
            "<w:p>{}{}</w:p><w:p>{}</w:p>",
            text_run("See "),
            drawing,
            ole
        ));
        assert_eq!(
            md,
            "See ![Chart 3](../Images/sample_images/PNG/image1.png)\n\n\
             ![Image](../Images/sample_images/WMF/image1.wmf)"
        );
    }

    #[test]
    fn test_warnings_and_stats() {
        let body = format!(
            "<w:p>{}<w:r><w:pict><v:imagedata/></w:pict></w:r></w:p><w:tbl/><w:p>{}</w:p>",
            text_run("kept"),
            PI
        );
        let output =
            docx_xml_to_markdown(&document_xml(&body), &W2MOptions::default()).unwrap();
        let kinds: Vec<_> = output.warnings.iter().map(|w| w.kind).collect();
        assert_eq!(kinds, vec![WarningKind::DroppedImage, WarningKind::EmptyTable]);
        assert_eq!(output.stats.paragraphs, 2);
        assert_eq!(output.stats.tables, 0);
        assert_eq!(output.stats.math, 1);
        // sectPr
        assert_eq!(output.stats.other, 1);
    }
}

// ============================================================================
// Tables
// ============================================================================

mod tables {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(rows: &[&[&str]]) -> String {
        let mut xml = String::from("<w:tbl>");
        for row in rows {
            xml.push_str("<w:tr>");
            for cell in row.iter() {
                if cell.is_empty() {
                    xml.push_str("<w:tc><w:p/></w:tc>");
                } else {
                    xml.push_str(&format!("<w:tc><w:p>{}</w:p></w:tc>", text_run(cell)));
                }
            }
            xml.push_str("</w:tr>");
        }
        xml.push_str("</w:tbl>");
        xml
    }

    #[test]
    fn test_ragged_rows_padded_to_three() {
        let md = to_markdown(&table(&[&["a", "b", "c"], &["d"], &["e", "f"]]));
        assert_eq!(md.matches("<tr>").count(), 3);
        assert_eq!(md.matches("<th>").count(), 3);
        assert_eq!(md.matches("<td>").count(), 6);
        assert_eq!(md.matches("<td></td>").count(), 3);
    }

    #[test]
    fn test_header_only_when_first_row_full() {
        let without = to_markdown(&table(&[&["", "b"], &["1", "2"]]));
        assert!(!without.contains("<thead>"));

        let with = to_markdown(&table(&[&["a", "b"], &["1", "2"]]));
        assert!(with.contains("  <thead>\n    <tr>\n      <th>a</th>\n      <th>b</th>"));
    }
}

// ============================================================================
// Idempotence
// ============================================================================

mod idempotence {
    use super::*;
    use pretty_assertions::assert_eq;

    fn image_heavy_body() -> String {
        let vector = r#"<w:r><w:pict><v:imagedata r:id="rId1"/></w:pict></w:r>"#;
        format!(
            "<w:p>{v}</w:p><w:tbl><w:tr><w:tc><w:p>{v}</w:p></w:tc></w:tr></w:tbl><w:p>{v}</w:p>",
            v = vector
        )
    }

    #[test]
    fn test_same_tree_twice_same_output() {
        let tree = XmlTree::parse(&document_xml(&image_heavy_body())).unwrap();
        let options = W2MOptions::for_document("idem");
        let first = convert_document(&tree, &options);
        let second = convert_document(&tree, &options);
        assert_eq!(first.content, second.content);
        assert_eq!(first.counters, second.counters);
        assert_eq!(first.counters, ImageCounters { raster: 1, vector: 4 });
    }

    #[test]
    fn test_identical_seed_counters() {
        let tree = XmlTree::parse(&document_xml(&image_heavy_body())).unwrap();
        let seed = ImageCounters {
            raster: 1,
            vector: 10,
        };
        let run = || {
            DocumentConverter::with_counters(W2MOptions::for_document("idem"), seed)
                .convert(&tree)
                .content
        };
        let first = run();
        assert_eq!(first, run());
        assert!(first.contains("image10.wmf"));
        assert!(first.contains("image12.wmf"));
    }

    #[test]
    fn test_trees_convert_in_parallel() {
        let tree = XmlTree::parse(&document_xml(&image_heavy_body())).unwrap();
        let options = W2MOptions::for_document("idem");
        let expected = convert_document(&tree, &options).content;

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| convert_document(&tree, &options).content))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
