use std::borrow::Cow;

use super::error::StrokeError;

// Wildcard in template constraint fields: any computed value satisfies it.
pub const ANY: i8 = -1;

// Quadrant sentinel reported when a stroke never leaves its first (or last)
// quadrant. Outside 0..=3, so it only satisfies a wildcard constraint.
pub const QUAD_NONE: i8 = 4;

// Result for a stroke no dictionary template matches.
pub const UNRECOGNIZED: &str = "#";

// Straight-line direction tags. A plain South stroke is remapped to the
// active dictionary's `south` literal instead of TAG_SOUTH.
pub const TAG_NORTH: &str = "=N";
pub const TAG_NORTH_EAST: &str = "=NE";
pub const TAG_EAST: &str = "=E";
pub const TAG_SOUTH_EAST: &str = "=SE";
pub const TAG_SOUTH: &str = "=S";
pub const TAG_SOUTH_WEST: &str = "=SW";
pub const TAG_WEST: &str = "=W";
pub const TAG_NORTH_WEST: &str = "=NW";

// One dictionary row: the symbol to emit and the constraints a stroke's
// features must satisfy. Quadrants are 0 upper-right, 1 lower-right,
// 2 lower-left, 3 upper-left. Direction fields are 0 for leftward/downward,
// 1 for rightward/upward (screen y grows downward, so "up" is negative y).
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub symbol: Cow<'static, str>,
    pub quad_first: i8,
    pub quad_second: i8,
    pub quad_penultimate: i8,
    pub quad_last: i8,
    pub kx_min: f32,
    pub kx_max: f32,
    pub ky_min: f32,
    pub ky_max: f32,
    pub start_x: i8,
    pub start_y: i8,
    pub stop_x: i8,
    pub stop_y: i8,
}

// An ordered collection of templates. Order is part of the contract:
// matching scans rows in declared order and the first satisfying row wins,
// so preferred readings of ambiguous shapes must come earlier.
#[derive(Debug, Clone)]
pub struct Dictionary {
    pub name: Cow<'static, str>,
    // Literal emitted for a plain downward stroke while this dictionary
    // is active ("i" for letters, "1" for digits, TAG_SOUTH otherwise).
    pub south: Cow<'static, str>,
    templates: Cow<'static, [Template]>,
}

impl Dictionary {
    pub const fn from_static(
        name: &'static str,
        south: &'static str,
        templates: &'static [Template],
    ) -> Dictionary {
        Dictionary {
            name: Cow::Borrowed(name),
            south: Cow::Borrowed(south),
            templates: Cow::Borrowed(templates),
        }
    }

    pub fn new(name: String, templates: Vec<Template>) -> Dictionary {
        Dictionary {
            name: Cow::Owned(name),
            south: Cow::Borrowed(TAG_SOUTH),
            templates: Cow::Owned(templates),
        }
    }

    pub fn with_south(mut self, south: String) -> Dictionary {
        self.south = Cow::Owned(south);
        self
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

// Selector for the built-in dictionaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictKind {
    Letters,
    AltLetters,
    Digits,
}

impl DictKind {
    pub fn from_name(name: &str) -> Result<DictKind, StrokeError> {
        match name {
            "letters" => Ok(DictKind::Letters),
            "alt_letters" => Ok(DictKind::AltLetters),
            "digits" => Ok(DictKind::Digits),
            _ => Err(StrokeError::UnknownDictionary(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DictKind::Letters => "letters",
            DictKind::AltLetters => "alt_letters",
            DictKind::Digits => "digits",
        }
    }
}
