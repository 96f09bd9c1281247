extern crate serde_derive;
extern crate unistroke;

use serde_derive::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::time::Instant;
use unistroke::{DictKind, Point, Recognizer, Stroke};

const ITERS: usize = 10_000;

#[derive(Serialize, Deserialize)]
struct Input {
    symbol: String,
    dict: String,
    points: Vec<Vec<f32>>,
}

fn read_inputs(fname: &str) -> Vec<Input> {
    let mut res: Vec<Input> = Vec::new();
    let file = File::open(fname).expect("Failed to open file.");
    for line in BufReader::new(file).lines() {
        let line = line.expect("Line huh?");
        if line.is_empty() {
            continue;
        }
        let input: Input = serde_json::from_str(&line).unwrap();
        res.push(input);
    }
    return res;
}

fn get_stroke(points: &Vec<Vec<f32>>) -> Stroke {
    let mut stroke = Stroke {
        points: Vec::with_capacity(points.len()),
    };
    for pt in points {
        stroke.points.push(Point { x: pt[0], y: pt[1] });
    }
    return stroke;
}

fn main() {
    println!("Loading evaluation data.");
    let inputs = read_inputs("debug/inputs.txt");
    println!(
        "Loaded {} inputs; starting {} cycles of evaluation.",
        inputs.len(),
        ITERS
    );
    let start = Instant::now();
    let mut recognizer = Recognizer::new();
    let mut guessed = 0;
    for _ in 0..ITERS {
        for input in &inputs {
            let dict = DictKind::from_name(&input.dict).expect("Unknown dictionary in input file.");
            recognizer.set_active_dictionary(dict);
            let stroke = get_stroke(&input.points);
            if let Ok(symbol) = recognizer.recognize(&stroke) {
                if symbol == input.symbol {
                    guessed += 1;
                }
            }
        }
    }
    let duration = start.elapsed();
    println!("Finished in {:?}. Correct guesses: {}.", duration, guessed);
}
