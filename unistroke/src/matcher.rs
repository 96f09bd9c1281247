use super::analyzed_stroke::AnalyzedStroke;
use super::dictionaries;
use super::entities::*;
use super::error::StrokeError;
use super::match_collector::MatchCollector;
use super::Stroke;

// Extent ratio under which a stroke counts as a straight line.
pub const DEFAULT_ASPECT_RATIO: f32 = 0.2;

// Widening applied to the straight-line ratio when testing the two
// diagonals, to make up for the longer reach of a diagonal in the unit box.
const DIAGONAL_SLACK: f32 = 1.4;

// Maps one completed stroke to one output symbol. The only state is the
// active dictionary, set explicitly by the caller; recognition itself is a
// pure function of the stroke and that selection. Not safe for concurrent
// mutation: callers recognizing from several threads must serialize the
// set/recognize pair or keep one instance per input surface.
pub struct Recognizer {
    dict: Dictionary,
    aspect_ratio: f32,
}

impl Recognizer {
    pub fn new() -> Recognizer {
        Recognizer {
            dict: dictionaries::builtin(DictKind::Letters).clone(),
            aspect_ratio: DEFAULT_ASPECT_RATIO,
        }
    }

    pub fn with_aspect_ratio(aspect_ratio: f32) -> Recognizer {
        let mut recognizer = Recognizer::new();
        recognizer.aspect_ratio = aspect_ratio;
        recognizer
    }

    pub fn set_active_dictionary(&mut self, kind: DictKind) {
        self.dict = dictionaries::builtin(kind).clone();
    }

    // Replaces the built-in selection with a caller-supplied dictionary.
    pub fn set_custom_dictionary(&mut self, dict: Dictionary) {
        self.dict = dict;
    }

    pub fn active_dictionary(&self) -> &Dictionary {
        &self.dict
    }

    // Classifies one stroke: straight lines resolve to a direction tag (or
    // the dictionary's south literal) without consulting the templates;
    // everything else goes through the feature scan. Always produces a
    // symbol; a stroke nothing matches comes back as UNRECOGNIZED.
    pub fn recognize(&self, stroke: &Stroke) -> Result<String, StrokeError> {
        let candidates = self.candidates(stroke)?;
        match candidates.into_iter().next() {
            Some(symbol) => Ok(symbol),
            None => Ok(UNRECOGNIZED.to_string()),
        }
    }

    // Every reading of the stroke in dictionary order; the first entry is
    // what recognize() returns. Useful for disambiguation displays.
    pub fn candidates(&self, stroke: &Stroke) -> Result<Vec<String>, StrokeError> {
        let an = AnalyzedStroke::from_stroke(stroke)?;
        if let Some(tag) = self.straight_line(&an) {
            return Ok(vec![tag]);
        }
        let mut symbols: Vec<String> = Vec::new();
        let mut collector = MatchCollector::new(&mut symbols);
        for template in self.dict.templates() {
            if template_matches(template, &an) {
                collector.file_match(&template.symbol);
            }
        }
        Ok(symbols)
    }

    fn straight_line(&self, an: &AnalyzedStroke) -> Option<String> {
        self.compass(an).or_else(|| self.diagonal(an))
    }

    // Axis-aligned lines: one raw extent dwarfs the other. The travel
    // direction comes from the rescaled endpoints. A South stroke is the
    // one dictionary-dependent case (see Dictionary::south).
    fn compass(&self, an: &AnalyzedStroke) -> Option<String> {
        let first = an.points[0];
        let last = an.points[an.points.len() - 1];
        if an.x_spread < self.aspect_ratio * an.y_spread {
            if last.y < first.y {
                return Some(TAG_NORTH.to_string());
            }
            if last.y > first.y {
                return Some(self.dict.south.to_string());
            }
        }
        if an.y_spread < self.aspect_ratio * an.x_spread {
            if last.x > first.x {
                return Some(TAG_EAST.to_string());
            }
            if last.x < first.x {
                return Some(TAG_WEST.to_string());
            }
        }
        None
    }

    // Diagonal lines: every rescaled point must sit inside one of the two
    // diagonal bands. Zero horizontal travel (a stroke that comes back to
    // its starting column) is not a diagonal and falls through to the scan.
    fn diagonal(&self, an: &AnalyzedStroke) -> Option<String> {
        let tolerance = self.aspect_ratio * DIAGONAL_SLACK;
        let mut on_equal = true;
        let mut on_opposite = true;
        for pt in &an.points {
            if (pt.x - pt.y).abs() > tolerance {
                on_equal = false;
            }
            if (pt.x - (1f32 - pt.y)).abs() > tolerance {
                on_opposite = false;
            }
        }
        if !on_equal && !on_opposite {
            return None;
        }
        let first = an.points[0];
        let last = an.points[an.points.len() - 1];
        if last.x > first.x {
            let tag = if on_equal { TAG_SOUTH_EAST } else { TAG_NORTH_EAST };
            return Some(tag.to_string());
        }
        if last.x < first.x {
            let tag = if on_equal { TAG_NORTH_WEST } else { TAG_SOUTH_WEST };
            return Some(tag.to_string());
        }
        None
    }
}

impl Default for Recognizer {
    fn default() -> Recognizer {
        Recognizer::new()
    }
}

fn field_matches(want: i8, got: i8) -> bool {
    want == ANY || want == got
}

fn template_matches(template: &Template, an: &AnalyzedStroke) -> bool {
    field_matches(template.quad_first, an.quad_first)
        && field_matches(template.quad_second, an.quad_second)
        && field_matches(template.quad_penultimate, an.quad_penultimate)
        && field_matches(template.quad_last, an.quad_last)
        && an.kx >= template.kx_min
        && an.kx <= template.kx_max
        && an.ky >= template.ky_min
        && an.ky <= template.ky_max
        && field_matches(template.start_x, an.start_x)
        && field_matches(template.start_y, an.start_y)
        && field_matches(template.stop_x, an.stop_x)
        && field_matches(template.stop_y, an.stop_y)
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::super::{recognize_typed, Point};
    use super::*;

    fn stroke_of(raw: &[[f32; 2]]) -> Stroke {
        let mut points: Vec<Point> = Vec::with_capacity(raw.len());
        for pt in raw {
            points.push(Point { x: pt[0], y: pt[1] });
        }
        Stroke { points: points }
    }

    // Same caret-shaped letter stroke the analyzer tests use.
    fn caret_stroke() -> Stroke {
        stroke_of(&[
            [60.0, 128.0],
            [68.0, 113.0],
            [77.0, 98.0],
            [85.0, 84.0],
            [93.0, 69.0],
            [102.0, 55.0],
            [110.0, 40.0],
            [118.0, 65.0],
            [127.0, 90.0],
            [135.0, 115.0],
            [143.0, 130.0],
            [152.0, 136.0],
            [160.0, 140.0],
        ])
    }

    fn vertical_stroke(downward: bool) -> Stroke {
        let mut raw: Vec<[f32; 2]> = Vec::new();
        for i in 0..11 {
            let y = if downward { i as f32 * 10.0 } else { 100.0 - i as f32 * 10.0 };
            raw.push([55.0, y]);
        }
        stroke_of(&raw)
    }

    fn wildcard_template(symbol: &str, kx_max: f32) -> Template {
        Template {
            symbol: Cow::Owned(symbol.to_string()),
            quad_first: ANY,
            quad_second: ANY,
            quad_penultimate: ANY,
            quad_last: ANY,
            kx_min: 0.0,
            kx_max: kx_max,
            ky_min: 0.0,
            ky_max: 10.0,
            start_x: ANY,
            start_y: ANY,
            stop_x: ANY,
            stop_y: ANY,
        }
    }

    #[test]
    fn test_north_stroke() {
        let recognizer = Recognizer::new();
        let result = recognizer.recognize(&vertical_stroke(false)).unwrap();
        assert_eq!(result, "=N");
    }

    #[test]
    fn test_south_stroke_tracks_dictionary() {
        let mut recognizer = Recognizer::new();
        let down = vertical_stroke(true);
        assert_eq!(recognizer.recognize(&down).unwrap(), "i");
        recognizer.set_active_dictionary(DictKind::Digits);
        assert_eq!(recognizer.recognize(&down).unwrap(), "1");
        recognizer.set_active_dictionary(DictKind::AltLetters);
        assert_eq!(recognizer.recognize(&down).unwrap(), "=S");
    }

    #[test]
    fn test_east_west_strokes() {
        let recognizer = Recognizer::new();
        let east = stroke_of(&[[0.0, 50.0], [40.0, 51.0], [80.0, 50.0], [120.0, 49.0]]);
        let west = stroke_of(&[[120.0, 49.0], [80.0, 50.0], [40.0, 51.0], [0.0, 50.0]]);
        assert_eq!(recognizer.recognize(&east).unwrap(), "=E");
        assert_eq!(recognizer.recognize(&west).unwrap(), "=W");
    }

    #[test]
    fn test_diagonal_strokes() {
        let recognizer = Recognizer::new();
        let down_right = stroke_of(&[[0.0, 0.0], [25.0, 25.0], [50.0, 50.0], [75.0, 75.0], [100.0, 100.0]]);
        let up_left = stroke_of(&[[100.0, 100.0], [75.0, 75.0], [50.0, 50.0], [25.0, 25.0], [0.0, 0.0]]);
        let up_right = stroke_of(&[[0.0, 100.0], [25.0, 75.0], [50.0, 50.0], [75.0, 25.0], [100.0, 0.0]]);
        let down_left = stroke_of(&[[100.0, 0.0], [75.0, 25.0], [50.0, 50.0], [25.0, 75.0], [0.0, 100.0]]);
        assert_eq!(recognizer.recognize(&down_right).unwrap(), "=SE");
        assert_eq!(recognizer.recognize(&up_left).unwrap(), "=NW");
        assert_eq!(recognizer.recognize(&up_right).unwrap(), "=NE");
        assert_eq!(recognizer.recognize(&down_left).unwrap(), "=SW");
    }

    #[test]
    fn test_caret_reads_as_a() {
        let recognizer = Recognizer::new();
        assert_eq!(recognizer.recognize(&caret_stroke()).unwrap(), "a");
    }

    #[test]
    fn test_scaling_does_not_change_result() {
        let recognizer = Recognizer::new();
        let mut scaled = caret_stroke();
        for pt in scaled.points.iter_mut() {
            pt.x *= 3.5;
            pt.y *= 3.5;
        }
        assert_eq!(
            recognizer.recognize(&scaled).unwrap(),
            recognizer.recognize(&caret_stroke()).unwrap()
        );
    }

    #[test]
    fn test_translation_does_not_change_result() {
        let recognizer = Recognizer::new();
        let mut moved = caret_stroke();
        for pt in moved.points.iter_mut() {
            pt.x += 500.0;
            pt.y -= 35.0;
        }
        assert_eq!(
            recognizer.recognize(&moved).unwrap(),
            recognizer.recognize(&caret_stroke()).unwrap()
        );
    }

    #[test]
    fn test_single_point_is_unrecognized() {
        let recognizer = Recognizer::new();
        let dot = stroke_of(&[[40.0, 40.0]]);
        assert_eq!(recognizer.recognize(&dot).unwrap(), UNRECOGNIZED);
    }

    #[test]
    fn test_pathological_zigzag_is_unrecognized() {
        // Four full horizontal reversals: kx lands near 4, beyond every row
        // in the letter table, while the extents rule out the line stages.
        let recognizer = Recognizer::new();
        let zigzag = stroke_of(&[
            [0.0, 0.0],
            [100.0, 30.0],
            [0.0, 60.0],
            [100.0, 90.0],
            [0.0, 120.0],
        ]);
        assert_eq!(recognizer.recognize(&zigzag).unwrap(), UNRECOGNIZED);
    }

    #[test]
    fn test_empty_stroke_is_an_error() {
        let recognizer = Recognizer::new();
        let empty = Stroke { points: Vec::new() };
        assert_eq!(recognizer.recognize(&empty).unwrap_err(), StrokeError::EmptyStroke);
    }

    #[test]
    fn test_first_declared_template_wins() {
        let caret = caret_stroke();
        let wide = wildcard_template("wide", 9.0);
        let narrow = wildcard_template("narrow", 2.0);

        let mut recognizer = Recognizer::new();
        recognizer.set_custom_dictionary(Dictionary::new(
            "ordered".to_string(),
            vec![wide.clone(), narrow.clone()],
        ));
        assert_eq!(recognizer.recognize(&caret).unwrap(), "wide");

        // Same rows, reversed declaration order: the result follows the
        // order, not anything about the rows themselves.
        recognizer.set_custom_dictionary(Dictionary::new(
            "reversed".to_string(),
            vec![narrow, wide],
        ));
        assert_eq!(recognizer.recognize(&caret).unwrap(), "narrow");
    }

    #[test]
    fn test_candidates_keep_scan_order() {
        let caret = caret_stroke();
        let mut recognizer = Recognizer::new();
        recognizer.set_custom_dictionary(Dictionary::new(
            "pair".to_string(),
            vec![wildcard_template("first", 9.0), wildcard_template("second", 8.0)],
        ));
        let candidates = recognizer.candidates(&caret).unwrap();
        assert_eq!(candidates, ["first", "second"]);
    }

    #[test]
    fn test_custom_dictionary_south_defaults_to_tag() {
        let mut recognizer = Recognizer::new();
        recognizer.set_custom_dictionary(Dictionary::new("custom".to_string(), Vec::new()));
        assert_eq!(recognizer.recognize(&vertical_stroke(true)).unwrap(), "=S");
    }

    #[test]
    fn test_wider_aspect_ratio_admits_sloppier_lines() {
        let strict = Recognizer::new();
        let loose = Recognizer::with_aspect_ratio(0.5);
        assert_eq!(loose.active_dictionary().name, "letters");
        // Drifts 30px sideways over a 100px climb: reads as a diagonal under
        // the default ratio, a plain North stroke under the wider one.
        let slanted = stroke_of(&[
            [0.0, 100.0],
            [10.0, 75.0],
            [20.0, 50.0],
            [25.0, 25.0],
            [30.0, 0.0],
        ]);
        assert_eq!(strict.recognize(&slanted).unwrap(), "=NE");
        assert_eq!(loose.recognize(&slanted).unwrap(), "=N");
    }

    #[test]
    fn test_recognize_typed_swaps_dictionaries() {
        let down = vertical_stroke(true);
        assert_eq!(recognize_typed(&down, DictKind::Letters).unwrap(), "i");
        assert_eq!(recognize_typed(&down, DictKind::Digits).unwrap(), "1");
    }
}
