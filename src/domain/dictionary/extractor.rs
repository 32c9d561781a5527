//! 单词表提取器
//!
//! 从 HTML 文档的第一个表格中按固定列位置提取单词和释义

use scraper::{ElementRef, Html, Selector};

use super::{ExtractError, WordEntry};

/// 单词所在列
pub const WORD_CELL_INDEX: usize = 1;
/// 释义所在列
pub const DEFINITION_CELL_INDEX: usize = 3;
/// 少于该单元格数的行直接跳过
pub const MIN_CELLS_PER_ROW: usize = 2;

fn selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::Parse(format!("invalid selector {css:?}: {e:?}")))
}

fn cell_text(cell: Option<&ElementRef<'_>>) -> String {
    cell.map(|c| c.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// 提取单词表
///
/// 规则：
/// 1. 只看第一个 `table` 的 `tbody tr`，按文档顺序
/// 2. `td` 少于 2 个的行静默跳过
/// 3. 第 1 列为单词，第 3 列为释义，去除首尾空白
/// 4. 第 3 列不存在时释义为空串
pub fn extract_words(html: &str) -> Result<Vec<WordEntry>, ExtractError> {
    let document = Html::parse_document(html);

    let table_sel = selector("table")?;
    let row_sel = selector("tbody tr")?;
    let cell_sel = selector("td")?;

    let Some(table) = document.select(&table_sel).next() else {
        return Ok(Vec::new());
    };

    let words = table
        .select(&row_sel)
        .filter_map(|row| {
            let cells: Vec<ElementRef<'_>> = row.select(&cell_sel).collect();
            if cells.len() < MIN_CELLS_PER_ROW {
                return None;
            }
            Some(WordEntry {
                word: cell_text(cells.get(WORD_CELL_INDEX)),
                definition: cell_text(cells.get(DEFINITION_CELL_INDEX)),
            })
        })
        .collect();

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &str) -> String {
        format!("<html><body><table><tbody>{rows}</tbody></table></body></html>")
    }

    #[test]
    fn test_extracts_header_and_two_rows() {
        let html = r#"
            <html><body>
            <table>
              <thead><tr><th>#</th><th>Word</th><th>Transcription</th><th>Translation</th></tr></thead>
              <tbody>
                <tr><td></td><td>hello</td><td></td><td>a greeting</td></tr>
                <tr><td></td><td>world</td><td></td><td>the planet</td></tr>
              </tbody>
            </table>
            </body></html>
        "#;

        let words = extract_words(html).unwrap();
        assert_eq!(
            words,
            vec![
                WordEntry::new("hello", "a greeting"),
                WordEntry::new("world", "the planet"),
            ]
        );
    }

    #[test]
    fn test_header_row_inside_tbody_is_skipped() {
        // 没有 thead 时解析器把所有行放进隐式 tbody，表头只有 th
        let html = "<table>\
            <tr><th>#</th><th>Word</th><th></th><th>Meaning</th></tr>\
            <tr><td>1</td><td>the</td><td>[ðə]</td><td>article</td></tr>\
            </table>";

        let words = extract_words(html).unwrap();
        assert_eq!(words, vec![WordEntry::new("the", "article")]);
    }

    #[test]
    fn test_cells_are_trimmed_and_ordered() {
        let html = table(
            "<tr><td>1</td><td>\n  be \n</td><td>x</td><td>  быть\t</td></tr>\
             <tr><td>2</td><td>and</td><td>x</td><td>и</td></tr>\
             <tr><td>3</td><td>of</td><td>x</td><td>из</td></tr>",
        );

        let words = extract_words(&html).unwrap();
        assert_eq!(words.len(), 3);
        assert_eq!(words[0], WordEntry::new("be", "быть"));
        assert_eq!(words[1].word, "and");
        assert_eq!(words[2].word, "of");
    }

    #[test]
    fn test_row_with_fewer_than_two_cells_is_excluded() {
        let html = table(
            "<tr><td>only</td></tr>\
             <tr></tr>\
             <tr><td>1</td><td>a</td><td>x</td><td>one</td></tr>",
        );

        let words = extract_words(&html).unwrap();
        assert_eq!(words, vec![WordEntry::new("a", "one")]);
    }

    #[test]
    fn test_short_rows_yield_empty_definition() {
        let html = table(
            "<tr><td>1</td><td>two</td></tr>\
             <tr><td>2</td><td>three</td><td>x</td></tr>",
        );

        let words = extract_words(&html).unwrap();
        assert_eq!(
            words,
            vec![WordEntry::new("two", ""), WordEntry::new("three", "")]
        );
    }

    #[test]
    fn test_only_first_table_is_read() {
        let html = "<table><tbody><tr><td>1</td><td>first</td><td></td><td>one</td></tr></tbody></table>\
                    <table><tbody><tr><td>1</td><td>second</td><td></td><td>two</td></tr></tbody></table>";

        let words = extract_words(html).unwrap();
        assert_eq!(words, vec![WordEntry::new("first", "one")]);
    }

    #[test]
    fn test_no_table_yields_empty() {
        let words = extract_words("<html><body><p>nothing here</p></body></html>").unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn test_garbage_input_does_not_fail() {
        let words = extract_words("<<<not really html").unwrap();
        assert!(words.is_empty());
    }
}
