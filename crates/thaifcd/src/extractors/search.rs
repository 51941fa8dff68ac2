// ABOUTME: Extracts search-result rows from the ThaiFCD results page markup.
// ABOUTME: Walks the first table, skipping the header row and rows without three data cells.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::dom::element_text;
use crate::record::SearchResultItem;

/// Origin the site serves detail links relative to.
pub const UPSTREAM_ORIGIN: &str = "https://thaifcd.anamai.moph.go.th";

static UPSTREAM_BASE: Lazy<Url> =
    Lazy::new(|| Url::parse(UPSTREAM_ORIGIN).expect("upstream origin must parse"));

static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").unwrap());
static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static DATA_CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td").unwrap());
static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());

/// Parse a search-results page into its item rows.
///
/// Only the first `<table>` is read. The first row is the column header and
/// is skipped; remaining rows need at least three `<td>` cells (name, group,
/// type) to count. The row's first anchor, if any, becomes `detail_url`,
/// resolved against the site origin. Pages without a table yield an empty
/// list.
pub fn parse_search_html(html: &str) -> Vec<SearchResultItem> {
    let doc = Html::parse_document(html);
    let mut items = Vec::new();

    let Some(table) = doc.select(&TABLE).next() else {
        return items;
    };

    for row in table.select(&ROW).skip(1) {
        let cells: Vec<ElementRef> = row.select(&DATA_CELL).collect();
        if cells.len() < 3 {
            continue;
        }

        let detail_url = row
            .select(&ANCHOR)
            .next()
            .and_then(|a| a.value().attr("href"))
            .and_then(|href| UPSTREAM_BASE.join(href).ok())
            .map(|u| u.to_string());

        items.push(SearchResultItem {
            name: element_text(cells[0]),
            group: element_text(cells[1]),
            food_type: element_text(cells[2]),
            detail_url,
        });
    }

    items
}
