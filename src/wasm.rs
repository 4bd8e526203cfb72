//! JavaScript bindings.
//!
//! Cities are passed as an array of `{ x, y }` objects. Results come back as
//! `{ best: number[], best_length: number, iterations, cancelled, cost_history }`.
//! Invalid input is thrown as a JS error carrying the message.

use crate::ga::{Crossover, Selection};
use crate::geometry::Point;
use crate::result::SolverResult;
use crate::{solve, ConfigError};
use wasm_bindgen::prelude::*;

fn parse_cities(cities: JsValue) -> Result<Vec<Point>, JsValue> {
    serde_wasm_bindgen::from_value(cities)
        .map_err(|e| JsValue::from_str(&format!("invalid cities: {e}")))
}

fn to_js(result: Result<SolverResult, ConfigError>) -> Result<JsValue, JsValue> {
    let result = result.map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_selection(name: &str) -> Result<Selection, JsValue> {
    match name {
        "tournament" => Ok(Selection::Tournament(3)),
        "roulette" => Ok(Selection::Roulette),
        "rank" => Ok(Selection::Rank),
        other => Err(JsValue::from_str(&format!("unknown selection mode: {other}"))),
    }
}

fn parse_crossover(name: &str) -> Result<Crossover, JsValue> {
    match name {
        "1point" | "one_point" => Ok(Crossover::OnePoint),
        "2points" | "two_point" => Ok(Crossover::TwoPoint),
        "uniform" => Ok(Crossover::Uniform),
        "ox" | "ordered" => Ok(Crossover::Ordered),
        other => Err(JsValue::from_str(&format!("unknown crossover mode: {other}"))),
    }
}

#[wasm_bindgen(js_name = runSimulatedAnnealing)]
pub fn run_simulated_annealing(
    cities: JsValue,
    seed: u32,
    t0: f64,
    alpha: f64,
    t_min: f64,
) -> Result<JsValue, JsValue> {
    let cities = parse_cities(cities)?;
    to_js(solve::run_simulated_annealing(
        &cities,
        u64::from(seed),
        t0,
        alpha,
        t_min,
    ))
}

#[wasm_bindgen(js_name = runTabuSearch)]
pub fn run_tabu_search(
    cities: JsValue,
    seed: u32,
    iterations: usize,
    tabu_size: usize,
) -> Result<JsValue, JsValue> {
    let cities = parse_cities(cities)?;
    to_js(solve::run_tabu_search(
        &cities,
        u64::from(seed),
        iterations,
        tabu_size,
    ))
}

/// `selection` is `"tournament"`, `"roulette"` or `"rank"`; `crossover` is
/// `"1point"`, `"2points"`, `"uniform"` or `"ox"`.
#[allow(clippy::too_many_arguments)]
#[wasm_bindgen(js_name = runGeneticAlgorithm)]
pub fn run_genetic_algorithm(
    cities: JsValue,
    seed: u32,
    population_size: usize,
    generations: usize,
    mutation_rate: f64,
    elite_count: usize,
    selection: &str,
    crossover: &str,
) -> Result<JsValue, JsValue> {
    let cities = parse_cities(cities)?;
    let selection = parse_selection(selection)?;
    let crossover = parse_crossover(crossover)?;
    to_js(solve::run_genetic_algorithm(
        &cities,
        u64::from(seed),
        population_size,
        generations,
        mutation_rate,
        elite_count,
        selection,
        crossover,
    ))
}
