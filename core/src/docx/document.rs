use super::package::write_docx_package;
use crate::error::CoreResult;
use crate::report::model::VulnerabilityRecord;
use std::path::Path;

pub const TABLE_HEADERS: [&str; 4] = [
    "Vulnerable Component",
    "Severity",
    "Vulnerability Type",
    "Advisory URL",
];

const CONTENT_TYPES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#,
    r#"</Types>"#,
);

const PACKAGE_RELS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>"#,
    r#"</Relationships>"#,
);

/// One report rendered as a WordprocessingML document: a heading with the
/// upper-cased title, a page break, then the findings table. The document
/// carries no external style part; the heading and header row use direct
/// run properties so the package stays self-contained.
pub struct VulnerabilityDocument {
    title: String,
    records: Vec<VulnerabilityRecord>,
}

impl VulnerabilityDocument {
    pub fn new(title: &str, records: Vec<VulnerabilityRecord>) -> Self {
        Self {
            title: title.to_uppercase(),
            records,
        }
    }

    /// Write the document to `out_path`, replacing any existing file, and
    /// return the SHA-256 of the written package.
    pub fn save(&self, out_path: &Path) -> CoreResult<String> {
        let parts = vec![
            ("[Content_Types].xml".to_string(), CONTENT_TYPES_XML.to_string()),
            ("_rels/.rels".to_string(), PACKAGE_RELS_XML.to_string()),
            ("word/document.xml".to_string(), self.document_xml()),
        ];
        write_docx_package(out_path, &parts)
    }

    fn document_xml(&self) -> String {
        let mut body = String::new();
        body.push_str(&heading_paragraph(&self.title));
        body.push_str(page_break_paragraph());
        body.push_str(&findings_table(&self.records));

        format!(
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
                r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
                r#"<w:body>{}<w:sectPr/></w:body>"#,
                r#"</w:document>"#,
            ),
            body
        )
    }
}

fn heading_paragraph(title: &str) -> String {
    format!(
        concat!(
            r#"<w:p><w:pPr><w:spacing w:after="240"/></w:pPr>"#,
            r#"<w:r><w:rPr><w:b/><w:sz w:val="32"/></w:rPr>"#,
            r#"<w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
        ),
        xml_escape(title)
    )
}

fn page_break_paragraph() -> &'static str {
    r#"<w:p><w:r><w:br w:type="page"/></w:r></w:p>"#
}

/// Header row plus one row per record: component, severity label,
/// vulnerability type, advisory URL. The severity rank exists only for
/// ordering and is never rendered.
fn findings_table(records: &[VulnerabilityRecord]) -> String {
    let mut table = String::new();
    table.push_str(concat!(
        r#"<w:tbl><w:tblPr><w:tblW w:w="0" w:type="auto"/>"#,
        r#"<w:tblBorders>"#,
        r#"<w:top w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        r#"<w:left w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        r#"<w:bottom w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        r#"<w:right w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        r#"<w:insideH w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        r#"<w:insideV w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        r#"</w:tblBorders></w:tblPr>"#,
        r#"<w:tblGrid><w:gridCol w:w="2340"/><w:gridCol w:w="2340"/><w:gridCol w:w="2340"/><w:gridCol w:w="2340"/></w:tblGrid>"#,
    ));

    table.push_str(&table_row(TABLE_HEADERS, true));
    for record in records {
        table.push_str(&table_row(
            [
                record.component.as_str(),
                record.severity_label.as_str(),
                record.vulnerability_type.as_str(),
                record.advisory_url.as_str(),
            ],
            false,
        ));
    }

    table.push_str("</w:tbl>");
    table
}

fn table_row(cells: [&str; 4], header: bool) -> String {
    let mut row = String::from("<w:tr>");
    for cell in cells {
        row.push_str(&table_cell(cell, header));
    }
    row.push_str("</w:tr>");
    row
}

fn table_cell(text: &str, bold: bool) -> String {
    let run_props = if bold { "<w:rPr><w:b/></w:rPr>" } else { "" };
    format!(
        concat!(
            r#"<w:tc><w:tcPr><w:tcW w:w="0" w:type="auto"/></w:tcPr>"#,
            r#"<w:p><w:r>{}<w:t xml:space="preserve">{}</w:t></w:r></w:p></w:tc>"#,
        ),
        run_props,
        xml_escape(text)
    )
}

fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::severity::SeverityRank;

    fn record(component: &str, label: &str) -> VulnerabilityRecord {
        VulnerabilityRecord {
            component: component.to_string(),
            severity_label: label.to_string(),
            severity_rank: SeverityRank::from_label(label),
            vulnerability_type: "Prototype Pollution".to_string(),
            advisory_url: format!("https://example.com/advisory?pkg={}&v=1", component),
        }
    }

    #[test]
    fn test_title_is_upper_cased() {
        let document = VulnerabilityDocument::new("npm/a.txt", Vec::new());
        assert!(document.document_xml().contains("NPM/A.TXT"));
    }

    #[test]
    fn test_body_has_heading_break_and_table() {
        let xml = VulnerabilityDocument::new("a.txt", vec![record("lodash", "High")]).document_xml();
        let heading = xml.find("<w:sz w:val=\"32\"/>").expect("heading run");
        let page_break = xml.find("<w:br w:type=\"page\"/>").expect("page break");
        let table = xml.find("<w:tbl>").expect("table");
        assert!(heading < page_break && page_break < table);
    }

    #[test]
    fn test_header_row_labels() {
        let xml = VulnerabilityDocument::new("a.txt", Vec::new()).document_xml();
        for label in TABLE_HEADERS {
            assert!(xml.contains(label), "missing header label: {}", label);
        }
        // Header row only: exactly one table row.
        assert_eq!(xml.matches("<w:tr>").count(), 1);
    }

    #[test]
    fn test_one_row_per_record_in_given_order() {
        let xml = VulnerabilityDocument::new(
            "a.txt",
            vec![record("left-pad", "Critical"), record("lodash", "High")],
        )
        .document_xml();
        assert_eq!(xml.matches("<w:tr>").count(), 3);
        let left_pad = xml.find("left-pad").expect("left-pad row");
        let lodash = xml.find("lodash").expect("lodash row");
        assert!(left_pad < lodash);
    }

    #[test]
    fn test_cell_text_is_xml_escaped() {
        let xml =
            VulnerabilityDocument::new("a.txt", vec![record("a<b>&c", "High")]).document_xml();
        assert!(xml.contains("a&lt;b&gt;&amp;c"));
        assert!(xml.contains("pkg=a&lt;b&gt;&amp;c&amp;v=1"));
    }

    #[test]
    fn test_escape_covers_quotes() {
        assert_eq!(
            xml_escape(r#"a "quoted" 'value' <&>"#),
            "a &quot;quoted&quot; &apos;value&apos; &lt;&amp;&gt;"
        );
    }
}
