#![allow(dead_code)]
#![allow(unused_imports)]

extern crate serde;
extern crate thiserror;
extern crate wasm_bindgen;

mod analyzed_stroke;
mod dictionaries;
mod entities;
mod error;
mod match_collector;
mod matcher;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

pub use analyzed_stroke::AnalyzedStroke;
pub use dictionaries::{builtin, ALT_LETTERS, DIGITS, LETTERS};
pub use entities::{
    DictKind, Dictionary, Template, ANY, QUAD_NONE, TAG_EAST, TAG_NORTH, TAG_NORTH_EAST,
    TAG_NORTH_WEST, TAG_SOUTH, TAG_SOUTH_EAST, TAG_SOUTH_WEST, TAG_WEST, UNRECOGNIZED,
};
pub use error::StrokeError;
pub use matcher::{Recognizer, DEFAULT_ASPECT_RATIO};

// One 2D sample in device pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

// The points of one pointer gesture, in temporal order from press to
// release. Callers pass a snapshot; nothing here mutates it.
#[derive(Debug, Clone)]
pub struct Stroke {
    pub points: Vec<Point>,
}

thread_local!(static RECOGNIZER: RefCell<Recognizer> = RefCell::new(Recognizer::new()));

pub fn recognize_typed(stroke: &Stroke, dict: DictKind) -> Result<String, StrokeError> {
    RECOGNIZER.with(|recognizer| {
        let mut recognizer = recognizer.borrow_mut();
        recognizer.set_active_dictionary(dict);
        recognizer.recognize(stroke)
    })
}

#[wasm_bindgen]
pub fn recognize(input: &JsValue, dict_name: &str) -> String {
    // Input is a vector of [x, y] pairs - how stroke points are represented in JS
    let input: Vec<Vec<f32>> = input.into_serde().unwrap();
    let mut stroke = Stroke {
        points: Vec::with_capacity(input.len()),
    };
    for i in 0..input.len() {
        stroke.points.push(Point {
            x: input[i][0],
            y: input[i][1],
        });
    }
    let dict = DictKind::from_name(dict_name).unwrap();
    recognize_typed(&stroke, dict).unwrap()
}
