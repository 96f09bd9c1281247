use std::borrow::Cow;

use super::entities::{DictKind, Dictionary, Template, ANY, QUAD_NONE};
use super::error::StrokeError;

const fn row(
    symbol: &'static str,
    quad_first: i8,
    quad_second: i8,
    quad_penultimate: i8,
    quad_last: i8,
    kx_min: f32,
    kx_max: f32,
    ky_min: f32,
    ky_max: f32,
    start_x: i8,
    start_y: i8,
    stop_x: i8,
    stop_y: i8,
) -> Template {
    Template {
        symbol: Cow::Borrowed(symbol),
        quad_first: quad_first,
        quad_second: quad_second,
        quad_penultimate: quad_penultimate,
        quad_last: quad_last,
        kx_min: kx_min,
        kx_max: kx_max,
        ky_min: ky_min,
        ky_max: ky_max,
        start_x: start_x,
        start_y: start_y,
        stop_x: stop_x,
        stop_y: stop_y,
    }
}

// Lowercase script alphabet. One row per glyph shape; letters that are
// commonly entered two ways carry a second row further down ("b", "o"),
// with the preferred reading declared first. "i" has no row: a plain
// downward stroke is reported as "i" before the table is ever consulted.
// Columns: symbol, quadrants first/second/penultimate/last, kx range,
// ky range, start x/y, stop x/y.
static LETTER_ROWS: [Template; 27] = [
    row("a", 2, 3, 0, 1, 0.9, 1.2, 1.5, 2.0, 1, 1, 1, 0),
    row("b", 3, 2, 1, 2, 1.0, 2.2, 1.2, 2.2, ANY, 0, 0, ANY),
    row("b", 2, 3, ANY, 2, 1.8, 3.0, 1.4, 2.4, ANY, 1, 0, ANY),
    row("c", 0, 3, 2, 1, 1.6, 2.4, 0.6, 1.4, 0, ANY, 1, 0),
    row("d", 0, 1, 2, 1, 1.0, 2.2, 1.2, 2.2, ANY, 0, 1, ANY),
    row("e", 0, 3, 2, 1, 2.6, 3.6, 0.8, 1.6, 0, ANY, 1, 0),
    row("f", 0, 3, ANY, 2, 0.4, 1.2, 0.9, 1.6, 0, ANY, ANY, 0),
    row("g", 0, 3, 1, 1, 1.6, 2.8, 1.4, 2.6, 0, ANY, ANY, 0),
    row("h", 3, 2, 0, 1, 0.6, 1.15, 1.6, 2.6, ANY, 0, ANY, 0),
    row("j", 0, 1, ANY, 2, 0.3, 1.0, 0.8, 1.6, ANY, 0, 0, ANY),
    row("k", 0, 2, 2, 1, 1.4, 2.2, 1.2, 2.0, 0, 0, 1, 0),
    row("l", 3, 2, 2, 1, 0.8, 1.3, 0.8, 1.3, ANY, 0, 1, ANY),
    row("m", 2, 3, ANY, 1, 0.8, 1.3, 2.8, 4.4, 1, 1, 1, 0),
    row("n", 2, 3, 1, 0, 0.8, 1.3, 2.2, 3.4, 1, 1, 1, 1),
    row("o", 0, 3, 1, 0, 1.6, 2.6, 1.6, 2.6, 0, ANY, ANY, 1),
    row("o", 3, 0, 2, 3, 1.6, 2.6, 1.6, 2.6, 1, ANY, ANY, 1),
    row("p", 3, 2, 0, 3, 1.0, 2.0, 1.6, 2.8, ANY, 0, 0, ANY),
    row("q", 3, 2, 1, 1, 1.6, 2.8, 1.4, 2.4, ANY, ANY, 1, 0),
    row("r", 3, 2, 0, 1, 1.2, 2.2, 1.8, 3.0, ANY, 0, 1, 0),
    row("s", 0, 3, 1, 2, 1.8, 3.0, 0.8, 1.6, 0, ANY, 0, 0),
    row("t", 3, 0, 0, 1, 0.8, 1.4, 0.8, 1.4, 1, ANY, ANY, 0),
    row("u", 3, 2, 1, 0, 0.8, 1.4, 1.6, 2.6, ANY, 0, ANY, 1),
    row("v", 0, 1, 2, 3, 0.8, 1.4, 1.6, 2.4, 0, 0, 0, 1),
    row("w", 3, 2, ANY, 0, 0.8, 1.3, 2.8, 4.4, ANY, 0, 1, 1),
    row("x", 3, ANY, ANY, 2, 1.4, 2.6, 1.4, 2.6, 1, 0, 0, 0),
    row("y", 3, 2, 0, 2, 1.4, 2.6, 1.8, 3.2, ANY, 0, 0, 0),
    row("z", 3, 0, 2, 1, 1.8, 3.2, 0.8, 1.6, 1, ANY, 1, 0),
];

// Block-print alternates for the same alphabet. Looser quadrant
// constraints than the script table: print shapes vary more in where the
// pen changes region, so several rows lean on wildcards.
static ALT_LETTER_ROWS: [Template; 25] = [
    row("a", 2, ANY, ANY, 1, 0.9, 1.4, 1.5, 2.2, 1, 1, 1, 0),
    row("b", 3, 2, ANY, 2, 1.6, 3.0, 1.4, 2.4, ANY, 0, 0, ANY),
    row("c", 0, 3, 2, 1, 1.4, 2.4, 0.6, 1.4, 0, ANY, 1, ANY),
    row("d", 3, 2, ANY, 3, 1.4, 2.6, 1.4, 2.4, ANY, 0, 0, 1),
    row("e", 1, 2, 3, 0, 1.6, 3.0, 1.2, 2.2, 0, ANY, 1, ANY),
    row("f", 1, ANY, 0, 3, 0.8, 1.6, 1.2, 2.2, ANY, 1, 0, ANY),
    row("g", 0, 3, 1, 1, 1.8, 3.0, 1.4, 2.6, 0, ANY, 1, ANY),
    row("h", 3, 2, ANY, 1, 0.8, 1.4, 1.8, 3.0, ANY, 0, 1, 0),
    row("j", 0, 1, 2, 2, 0.4, 1.1, 0.8, 1.6, ANY, 0, 0, 1),
    row("k", 0, 2, ANY, 1, 1.4, 2.4, 1.2, 2.2, 0, 0, 1, 0),
    row("l", 3, 2, 2, 1, 0.8, 1.3, 0.8, 1.3, ANY, 0, 1, ANY),
    row("m", 2, 3, ANY, 1, 0.9, 1.4, 2.8, 4.6, 1, 1, 1, 0),
    row("n", 2, 3, ANY, 0, 0.9, 1.4, 2.2, 3.4, 1, 1, 1, 1),
    row("o", ANY, ANY, ANY, ANY, 1.6, 2.8, 1.6, 2.8, ANY, ANY, ANY, ANY),
    row("p", 3, 2, 0, 3, 1.2, 2.2, 1.6, 2.8, ANY, 0, 0, ANY),
    row("q", 3, ANY, 1, 1, 1.6, 2.8, 1.4, 2.6, ANY, ANY, 1, 0),
    row("r", 3, 2, 0, 1, 1.2, 2.4, 1.8, 3.2, ANY, 0, 1, 0),
    row("s", 0, 3, 1, 2, 1.8, 3.2, 0.8, 1.6, 0, ANY, 0, ANY),
    row("t", 3, 0, ANY, 1, 0.8, 1.5, 0.8, 1.5, 1, ANY, ANY, 0),
    row("u", 3, 2, 1, 0, 0.8, 1.4, 1.6, 2.6, ANY, 0, ANY, 1),
    row("v", 3, 2, ANY, 0, 0.8, 1.4, 1.5, 2.2, 1, 0, 1, 1),
    row("w", 3, 2, ANY, 0, 0.8, 1.4, 2.8, 4.6, ANY, 0, 1, 1),
    row("x", 3, ANY, ANY, 2, 1.4, 2.6, 1.4, 2.6, 1, 0, 0, 0),
    row("y", 3, ANY, 0, 2, 1.4, 2.6, 1.8, 3.2, ANY, 0, 0, 0),
    row("z", 3, 0, 2, 1, 1.8, 3.2, 0.8, 1.6, 1, ANY, 1, 0),
];

// Digits. "1" has no row for the same reason "i" has none in the letter
// tables.
static DIGIT_ROWS: [Template; 9] = [
    row("0", 0, 3, 1, 0, 1.6, 2.6, 1.6, 2.6, 0, ANY, ANY, 1),
    row("2", 3, 0, 2, 1, 1.8, 3.2, 1.0, 2.0, 1, ANY, 1, 0),
    row("3", 3, 0, ANY, 2, 1.8, 3.4, 1.2, 2.2, 1, ANY, 0, ANY),
    row("4", 3, 2, ANY, 1, 0.8, 1.6, 0.8, 1.6, ANY, 0, 1, ANY),
    row("5", 0, 3, 1, 2, 1.6, 3.0, 1.0, 2.0, 0, ANY, 0, ANY),
    row("6", 0, 3, ANY, 1, 1.2, 2.4, 1.2, 2.2, 0, 0, 0, 1),
    row("7", 3, 0, ANY, 2, 1.4, 2.6, 0.8, 1.15, 1, ANY, 0, 0),
    row("8", ANY, ANY, ANY, ANY, 2.4, 4.0, 2.0, 3.4, ANY, ANY, ANY, ANY),
    row("9", 0, 3, ANY, 1, 1.4, 2.6, 1.4, 2.6, 0, ANY, ANY, 0),
];

pub static LETTERS: Dictionary = Dictionary::from_static("letters", "i", &LETTER_ROWS);
pub static ALT_LETTERS: Dictionary = Dictionary::from_static("alt_letters", "=S", &ALT_LETTER_ROWS);
pub static DIGITS: Dictionary = Dictionary::from_static("digits", "1", &DIGIT_ROWS);

pub fn builtin(kind: DictKind) -> &'static Dictionary {
    match kind {
        DictKind::Letters => &LETTERS,
        DictKind::AltLetters => &ALT_LETTERS,
        DictKind::Digits => &DIGITS,
    }
}

impl Dictionary {
    // Parses the text dictionary format: one template per line, 13 fields
    // separated by commas and/or whitespace, "*" (or -1) as the wildcard,
    // "#" starts a comment, blank lines are skipped. Field order matches
    // the columns of the built-in tables.
    pub fn parse(name: &str, text: &str) -> Result<Dictionary, StrokeError> {
        let mut templates: Vec<Template> = Vec::new();
        for (ix, raw_line) in text.lines().enumerate() {
            let line_no = ix + 1;
            let line = match raw_line.find('#') {
                Some(pos) => &raw_line[..pos],
                None => raw_line,
            };
            let fields: Vec<&str> = line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|f| !f.is_empty())
                .collect();
            if fields.is_empty() {
                continue;
            }
            if fields.len() != 13 {
                return Err(StrokeError::BadTemplateRow {
                    line: line_no,
                    reason: format!("expected 13 fields, got {}", fields.len()),
                });
            }
            templates.push(Template {
                symbol: Cow::Owned(fields[0].to_string()),
                quad_first: parse_quad(fields[1], line_no)?,
                quad_second: parse_quad(fields[2], line_no)?,
                quad_penultimate: parse_quad(fields[3], line_no)?,
                quad_last: parse_quad(fields[4], line_no)?,
                kx_min: parse_bound(fields[5], line_no)?,
                kx_max: parse_bound(fields[6], line_no)?,
                ky_min: parse_bound(fields[7], line_no)?,
                ky_max: parse_bound(fields[8], line_no)?,
                start_x: parse_dir(fields[9], line_no)?,
                start_y: parse_dir(fields[10], line_no)?,
                stop_x: parse_dir(fields[11], line_no)?,
                stop_y: parse_dir(fields[12], line_no)?,
            });
        }
        Ok(Dictionary::new(name.to_string(), templates))
    }
}

fn parse_constraint(field: &str, line: usize) -> Result<i8, StrokeError> {
    if field == "*" {
        return Ok(ANY);
    }
    field.parse::<i8>().map_err(|_| StrokeError::BadTemplateRow {
        line: line,
        reason: format!("not a constraint value: {:?}", field),
    })
}

fn parse_quad(field: &str, line: usize) -> Result<i8, StrokeError> {
    let value = parse_constraint(field, line)?;
    if value != ANY && !(0..=QUAD_NONE).contains(&value) {
        return Err(StrokeError::BadTemplateRow {
            line: line,
            reason: format!("quadrant out of range: {}", value),
        });
    }
    Ok(value)
}

fn parse_dir(field: &str, line: usize) -> Result<i8, StrokeError> {
    let value = parse_constraint(field, line)?;
    if value != ANY && value != 0 && value != 1 {
        return Err(StrokeError::BadTemplateRow {
            line: line,
            reason: format!("direction out of range: {}", value),
        });
    }
    Ok(value)
}

fn parse_bound(field: &str, line: usize) -> Result<f32, StrokeError> {
    field.parse::<f32>().map_err(|_| StrokeError::BadTemplateRow {
        line: line,
        reason: format!("not a numeric bound: {:?}", field),
    })
}
