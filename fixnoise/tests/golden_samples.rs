//! Golden sample regression tests.
//!
//! Verifies that the evaluators reproduce the established fixed-point simplex
//! noise field bit for bit, both on individual coordinates and on MD5 digests
//! of larger sweeps, so existing consumers see identical animations.
//!
//! Expected values are loaded from `golden_samples.json`.

use std::fmt::Write;

use fixnoise::{SAFE_COORD_LIMIT, noise1, noise2, noise3};
use serde::Deserialize;

/// Top-level JSON structure for golden values.
#[derive(Deserialize)]
struct Golden {
    grid: Vec<i32>,
    noise1: Vec<(i32, i16)>,
    noise2: Vec<(i32, i32, i16)>,
    noise3: Vec<(i32, i32, i32, i16)>,
    scattered: Samples,
    extremes: Samples,
    sweeps: Sweeps,
}

/// Point samples for each dimension.
#[derive(Deserialize)]
struct Samples {
    noise1: Vec<(i32, i16)>,
    noise2: Vec<(i32, i32, i16)>,
    noise3: Vec<(i32, i32, i32, i16)>,
}

#[derive(Deserialize)]
struct Sweeps {
    noise1: Sweep,
    noise2: Sweep,
    noise3: Sweep,
}

/// A regular sweep along every axis: `start + index * step` for `index < count`.
#[derive(Deserialize)]
struct Sweep {
    start: i32,
    step: i32,
    count: i32,
    md5: String,
}

impl Sweep {
    fn coords(&self) -> Vec<i32> {
        (0..self.count).map(|index| self.start + index * self.step).collect()
    }
}

fn load_golden() -> Golden {
    let json_str = include_str!("../test_assets/golden_samples.json");
    serde_json::from_str(json_str).expect("Failed to parse golden_samples.json")
}

/// MD5 of samples serialized as little-endian `i16`.
fn digest(samples: impl IntoIterator<Item = i16>) -> String {
    let mut ctx = md5::Context::new();
    for sample in samples {
        ctx.consume(sample.to_le_bytes());
    }
    format!("{:x}", ctx.finalize())
}

/// Panic with every mismatch listed, so one run shows the whole picture.
fn report(name: &str, total: usize, mismatches: &[(String, i16, i16)]) {
    if mismatches.is_empty() {
        return;
    }
    let failed = mismatches.len();
    let mut msg = format!("{name}: {failed}/{total} samples MISMATCHED:\n");
    for (input, expected, actual) in mismatches {
        let _ = writeln!(msg, "  {input}: expected {expected} got {actual}");
    }
    panic!("{msg}");
}

fn verify1(name: &str, cases: &[(i32, i16)]) {
    let mismatches: Vec<_> = cases
        .iter()
        .filter_map(|&(x, expected)| {
            let actual = noise1(x);
            (actual != expected).then(|| (format!("({x})"), expected, actual))
        })
        .collect();
    report(name, cases.len(), &mismatches);
}

fn verify2(name: &str, cases: &[(i32, i32, i16)]) {
    let mismatches: Vec<_> = cases
        .iter()
        .filter_map(|&(x, y, expected)| {
            let actual = noise2(x, y);
            (actual != expected).then(|| (format!("({x}, {y})"), expected, actual))
        })
        .collect();
    report(name, cases.len(), &mismatches);
}

fn verify3(name: &str, cases: &[(i32, i32, i32, i16)]) {
    let mismatches: Vec<_> = cases
        .iter()
        .filter_map(|&(x, y, z, expected)| {
            let actual = noise3(x, y, z);
            (actual != expected).then(|| (format!("({x}, {y}, {z})"), expected, actual))
        })
        .collect();
    report(name, cases.len(), &mismatches);
}

#[test]
fn golden_grid_is_the_full_product() {
    let golden = load_golden();
    assert_eq!(golden.grid, [-8192, -4096, 0, 4096, 8192]);

    let g = &golden.grid;
    let inputs1: Vec<i32> = golden.noise1.iter().map(|c| c.0).collect();
    assert_eq!(&inputs1, g);

    let inputs2: Vec<(i32, i32)> = golden.noise2.iter().map(|c| (c.0, c.1)).collect();
    let product2: Vec<(i32, i32)> = g
        .iter()
        .flat_map(move |&x| g.iter().map(move |&y| (x, y)))
        .collect();
    assert_eq!(inputs2, product2);

    let inputs3: Vec<(i32, i32, i32)> = golden.noise3.iter().map(|c| (c.0, c.1, c.2)).collect();
    let product3: Vec<(i32, i32, i32)> = g
        .iter()
        .flat_map(move |&x| g.iter().flat_map(move |&y| g.iter().map(move |&z| (x, y, z))))
        .collect();
    assert_eq!(inputs3, product3);
}

#[test]
fn lattice_grid_matches_golden() {
    let golden = load_golden();
    verify1("noise1 grid", &golden.noise1);
    verify2("noise2 grid", &golden.noise2);
    verify3("noise3 grid", &golden.noise3);
}

#[test]
fn scattered_points_match_golden() {
    let golden = load_golden();
    verify1("noise1 scattered", &golden.scattered.noise1);
    verify2("noise2 scattered", &golden.scattered.noise2);
    verify3("noise3 scattered", &golden.scattered.noise3);
}

/// Inputs far outside the safe domain wrap through the fixed-point
/// intermediates; they must neither saturate nor panic.
#[test]
fn wrapping_inputs_match_golden() {
    let golden = load_golden();
    verify1("noise1 extremes", &golden.extremes.noise1);
    verify2("noise2 extremes", &golden.extremes.noise2);
    verify3("noise3 extremes", &golden.extremes.noise3);
}

#[test]
fn noise1_sweep_digest_matches_golden() {
    let sweep = load_golden().sweeps.noise1;
    let actual = digest(sweep.coords().into_iter().map(noise1));
    assert_eq!(actual, sweep.md5, "noise1 sweep digest");
}

#[test]
fn noise2_sweep_digest_matches_golden() {
    let sweep = load_golden().sweeps.noise2;
    let coords = &sweep.coords();
    let samples = coords
        .iter()
        .flat_map(move |&y| coords.iter().map(move |&x| noise2(x, y)));
    assert_eq!(digest(samples), sweep.md5, "noise2 sweep digest");
}

#[test]
fn noise3_sweep_digest_matches_golden() {
    let sweep = load_golden().sweeps.noise3;
    let coords = &sweep.coords();
    let samples = coords.iter().flat_map(move |&z| {
        coords
            .iter()
            .flat_map(move |&y| coords.iter().map(move |&x| noise3(x, y, z)))
    });
    assert_eq!(digest(samples), sweep.md5, "noise3 sweep digest");
}

#[test]
fn safe_domain_boundary_evaluates() {
    let edges = [-SAFE_COORD_LIMIT, -1, 0, 1, SAFE_COORD_LIMIT];
    for &x in &edges {
        let _ = noise1(x);
        for &y in &edges {
            let _ = noise2(x, y);
            for &z in &edges {
                let _ = noise3(x, y, z);
            }
        }
    }
}
