// ABOUTME: Extracts a structured nutrient record from a ThaiFCD detail page.
// ABOUTME: Reads the page name, free-text group/basis labels, and the section-structured table.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::dom::{element_text, visible_text};
use crate::extractors::nutrients::canonical_key;
use crate::record::{
    BasisUnit, DetailRecord, MeasurementBasis, NutrientEntry, NutrientSections, Section,
};

/// Placeholder name when the page has no usable heading.
const NAME_FALLBACK: &str = "(ไม่พบชื่อ)";

static HEADING: Lazy<Selector> = Lazy::new(|| Selector::parse("h1, h2").unwrap());
static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").unwrap());
static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("th, td").unwrap());

// "กลุ่มอาหาร : <value>" up to a line break or parenthetical remark
static FOOD_GROUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"กลุ่มอาหาร\s*:\s*([^\n(]+)").unwrap());

// "ปริมาณอาหาร ต่อ <amount> <unit>" with Thai or Latin unit tokens.
// The amount class stays ASCII: \d would also accept Thai digits
// (๐-๙), which f64 parsing rejects.
static BASIS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)ปริมาณอาหาร\s*ต่อ\s*([0-9.]+)\s*(กรัม|ก|g|มล|ml)").unwrap());

/// Parse a detail page into a [`DetailRecord`].
///
/// Never fails: each part of the page that does not look as expected falls
/// back to its documented default (placeholder name, no group, 100 g basis,
/// empty sections). `source_url` is echoed into the record unchanged.
pub fn parse_detail_html(html: &str, source_url: &str) -> DetailRecord {
    let doc = Html::parse_document(html);

    let name = doc
        .select(&HEADING)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NAME_FALLBACK.to_string());

    let body_text = visible_text(&doc);

    DetailRecord {
        name,
        group: food_group(&body_text),
        basis: measurement_basis(&body_text),
        sections: nutrient_sections(&doc),
        source_url: source_url.to_string(),
    }
}

/// Food group from the "กลุ่มอาหาร:" label in the page text.
///
/// The captured value runs to the end of the rendered line, minus any
/// trailing parenthetical remark.
fn food_group(text: &str) -> Option<String> {
    FOOD_GROUP_RE
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|group| !group.is_empty())
}

/// Measurement basis from the "ปริมาณอาหาร ต่อ ..." label in the page text.
///
/// มล/ml selects millilitres, every other accepted token grams. When the
/// label is missing, or its amount is not a parseable number, the 100 g
/// default applies.
fn measurement_basis(text: &str) -> MeasurementBasis {
    if let Some(caps) = BASIS_RE.captures(text) {
        if let Ok(amount) = caps[1].parse::<f64>() {
            let token = &caps[2];
            let unit = if token == "มล" || token.eq_ignore_ascii_case("ml") {
                BasisUnit::Millilitres
            } else {
                BasisUnit::Grams
            };
            return MeasurementBasis { amount, unit };
        }
    }
    MeasurementBasis::default()
}

/// A row is a section heading when it has a single cell, or when its first
/// cell is a `<th>` spanning the table width.
fn is_section_header(cells: &[ElementRef]) -> bool {
    if cells.len() == 1 {
        return true;
    }
    cells
        .first()
        .is_some_and(|cell| cell.value().name() == "th" && cell.value().attr("colspan").is_some())
}

/// Walk the first table, tracking which section heading was seen last and
/// keying recognized rows under it.
fn nutrient_sections(doc: &Html) -> NutrientSections {
    let mut sections = NutrientSections::default();

    let Some(table) = doc.select(&TABLE).next() else {
        return sections;
    };

    let mut current: Option<Section> = None;
    for row in table.select(&ROW) {
        let cells: Vec<ElementRef> = row.select(&CELL).collect();
        if cells.is_empty() {
            continue;
        }

        if is_section_header(&cells) {
            if let Some(section) = Section::from_label(&element_text(cells[0])) {
                current = Some(section);
            }
            continue;
        }
        if cells.len() < 3 {
            continue;
        }

        let label = element_text(cells[0]);
        let amount = element_text(cells[1]);
        let unit = element_text(cells[2]);

        let key = canonical_key(&label, current);
        if let (Some(key), Some(section)) = (key, current) {
            sections.get_mut(section).insert(
                key.to_string(),
                NutrientEntry {
                    amount,
                    unit: (!unit.is_empty()).then_some(unit),
                },
            );
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SOURCE: &str = "https://thaifcd.anamai.moph.go.th/food-detail?id=42";

    fn detail_page() -> &'static str {
        r#"<html><head><title>ThaiFCD</title></head><body>
<h2>กล้วยน้ำว้า สุก</h2>
<p>กลุ่มอาหาร : Fruits (ผลไม้)</p>
<p>ปริมาณอาหาร ต่อ 100 กรัม</p>
<table>
  <tr><th colspan="3">Main nutrients</th></tr>
  <tr><td>Energy</td><td>122</td><td>kcal</td></tr>
  <tr><td>Water</td><td>68.6</td><td>g</td></tr>
  <tr><td>Carbohydrate, total</td><td>31.2</td><td>g</td></tr>
  <tr><th colspan="3">Minerals</th></tr>
  <tr><td>Sodium</td><td>4</td><td>mg</td></tr>
  <tr><td>Selenium</td><td>1.1</td><td>ug</td></tr>
  <tr><th colspan="3">Vitamins</th></tr>
  <tr><td>Thiamine</td><td>0.03</td><td>mg</td></tr>
</table>
</body></html>"#
    }

    #[test]
    fn extracts_the_full_record() {
        let record = parse_detail_html(detail_page(), SOURCE);

        assert_eq!(record.name, "กล้วยน้ำว้า สุก");
        assert_eq!(record.group.as_deref(), Some("Fruits"));
        assert_eq!(record.basis.amount, 100.0);
        assert_eq!(record.basis.unit, BasisUnit::Grams);
        assert_eq!(record.source_url, SOURCE);

        let main = &record.sections.main_nutrients;
        assert_eq!(main["Energy"].amount, "122");
        assert_eq!(main["Energy"].unit.as_deref(), Some("kcal"));
        assert_eq!(main["Carbohydrate"].amount, "31.2");

        assert_eq!(record.sections.minerals["Sodium"].amount, "4");
        assert_eq!(record.sections.vitamins["Thiamin"].amount, "0.03");
    }

    #[test]
    fn unmapped_labels_are_dropped() {
        let record = parse_detail_html(detail_page(), SOURCE);
        assert!(!record.sections.minerals.contains_key("Selenium"));
        assert_eq!(record.sections.minerals.len(), 1);
    }

    #[test]
    fn parse_is_idempotent() {
        let first = parse_detail_html(detail_page(), SOURCE);
        let second = parse_detail_html(detail_page(), SOURCE);
        assert_eq!(first, second);
    }

    #[test]
    fn name_falls_back_when_no_heading() {
        let record = parse_detail_html("<html><body><p>text only</p></body></html>", SOURCE);
        assert_eq!(record.name, "(ไม่พบชื่อ)");
    }

    #[test]
    fn first_heading_wins_whether_h1_or_h2() {
        let record = parse_detail_html(
            "<html><body><h2>second level</h2><h1>first level</h1></body></html>",
            SOURCE,
        );
        assert_eq!(record.name, "second level");
    }

    #[test]
    fn group_stops_at_parenthesis_and_line_end() {
        let record = parse_detail_html(
            "<html><body><h1>x</h1><p>กลุ่มอาหาร : Grains (misc)</p></body></html>",
            SOURCE,
        );
        assert_eq!(record.group.as_deref(), Some("Grains"));

        let record = parse_detail_html(
            "<html><body><h1>x</h1><p>กลุ่มอาหาร : Cereals</p><p>อื่น ๆ</p></body></html>",
            SOURCE,
        );
        assert_eq!(record.group.as_deref(), Some("Cereals"));
    }

    #[test]
    fn group_is_none_without_the_label() {
        let record = parse_detail_html("<html><body><h1>x</h1></body></html>", SOURCE);
        assert_eq!(record.group, None);
    }

    #[test]
    fn basis_reads_millilitre_pages() {
        let record = parse_detail_html(
            "<html><body><h1>นมสด</h1><p>ปริมาณอาหาร ต่อ 100 มล</p></body></html>",
            SOURCE,
        );
        assert_eq!(record.basis.amount, 100.0);
        assert_eq!(record.basis.unit, BasisUnit::Millilitres);
    }

    #[test]
    fn basis_accepts_latin_unit_tokens() {
        let record = parse_detail_html(
            "<html><body><h1>x</h1><p>ปริมาณอาหาร ต่อ 250 ML</p></body></html>",
            SOURCE,
        );
        assert_eq!(record.basis.amount, 250.0);
        assert_eq!(record.basis.unit, BasisUnit::Millilitres);

        let record = parse_detail_html(
            "<html><body><h1>x</h1><p>ปริมาณอาหาร ต่อ 50 g</p></body></html>",
            SOURCE,
        );
        assert_eq!(record.basis.amount, 50.0);
        assert_eq!(record.basis.unit, BasisUnit::Grams);
    }

    #[test]
    fn basis_reads_short_thai_gram_token() {
        let record = parse_detail_html(
            "<html><body><h1>x</h1><p>ปริมาณอาหาร ต่อ 30 ก</p></body></html>",
            SOURCE,
        );
        assert_eq!(record.basis.amount, 30.0);
        assert_eq!(record.basis.unit, BasisUnit::Grams);
    }

    #[test]
    fn basis_defaults_when_label_absent() {
        let record = parse_detail_html("<html><body><h1>x</h1></body></html>", SOURCE);
        assert_eq!(record.basis, MeasurementBasis::default());
    }

    #[test]
    fn basis_defaults_when_amount_does_not_parse() {
        // The label matches but "1.2.3" is not a number.
        let record = parse_detail_html(
            "<html><body><h1>x</h1><p>ปริมาณอาหาร ต่อ 1.2.3 กรัม</p></body></html>",
            SOURCE,
        );
        assert_eq!(record.basis, MeasurementBasis::default());
    }

    #[test]
    fn single_cell_rows_act_as_section_headers() {
        let html = r#"<html><body><h1>x</h1><table>
<tr><td>Minerals</td></tr>
<tr><td>Iron</td><td>0.4</td><td>mg</td></tr>
</table></body></html>"#;

        let record = parse_detail_html(html, SOURCE);
        assert_eq!(record.sections.minerals["Iron"].amount, "0.4");
    }

    #[test]
    fn unknown_headers_keep_the_previous_section() {
        let html = r#"<html><body><h1>x</h1><table>
<tr><th colspan="3">Minerals</th></tr>
<tr><th colspan="3">Trace elements</th></tr>
<tr><td>Calcium</td><td>12</td><td>mg</td></tr>
</table></body></html>"#;

        let record = parse_detail_html(html, SOURCE);
        assert_eq!(record.sections.minerals["Calcium"].amount, "12");
    }

    #[test]
    fn rows_before_any_section_are_dropped() {
        let html = r#"<html><body><h1>x</h1><table>
<tr><td>Energy</td><td>90</td><td>kcal</td></tr>
<tr><th colspan="3">Main nutrients</th></tr>
<tr><td>Water</td><td>70</td><td>g</td></tr>
</table></body></html>"#;

        let record = parse_detail_html(html, SOURCE);
        assert!(!record.sections.main_nutrients.contains_key("Energy"));
        assert_eq!(record.sections.main_nutrients["Water"].amount, "70");
    }

    #[test]
    fn empty_unit_cell_becomes_none() {
        let html = r#"<html><body><h1>x</h1><table>
<tr><th colspan="3">Main nutrients</th></tr>
<tr><td>Energy</td><td>90</td><td></td></tr>
</table></body></html>"#;

        let record = parse_detail_html(html, SOURCE);
        assert_eq!(record.sections.main_nutrients["Energy"].unit, None);
    }

    #[test]
    fn th_label_cells_still_count_as_data_rows() {
        let html = r#"<html><body><h1>x</h1><table>
<tr><th colspan="3">Main nutrients</th></tr>
<tr><th>Protein</th><td>1.1</td><td>g</td></tr>
</table></body></html>"#;

        let record = parse_detail_html(html, SOURCE);
        assert_eq!(record.sections.main_nutrients["Protein"].amount, "1.1");
    }

    #[test]
    fn no_table_yields_empty_sections() {
        let record = parse_detail_html("<html><body><h1>x</h1></body></html>", SOURCE);
        assert!(record.sections.is_empty());
    }

    #[test]
    fn later_rows_overwrite_same_key_in_section() {
        let html = r#"<html><body><h1>x</h1><table>
<tr><th colspan="3">Main nutrients</th></tr>
<tr><td>Energy</td><td>90</td><td>kcal</td></tr>
<tr><td>Energy</td><td>95</td><td>kcal</td></tr>
</table></body></html>"#;

        let record = parse_detail_html(html, SOURCE);
        assert_eq!(record.sections.main_nutrients["Energy"].amount, "95");
        assert_eq!(record.sections.main_nutrients.len(), 1);
    }

    #[test]
    fn source_url_is_echoed_verbatim() {
        let record = parse_detail_html("<html></html>", "food-detail?id=9");
        assert_eq!(record.source_url, "food-detail?id=9");
    }
}
