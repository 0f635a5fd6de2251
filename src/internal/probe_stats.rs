#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::pedantic)]
#![allow(clippy::unwrap_used)]

//! Measures how the linear probing map behaves as it fills up.
//!
//! For a range of load factors below the growth trigger it reports the average and worst
//! probe length of successful lookups, the average probe length of unsuccessful lookups,
//! and how many keys become unreachable after a tenth of the entries are removed.

use plotters::prelude::*;
use probing_map::ProbingMap;
use rand::{Rng, distr::Alphanumeric};
use std::{collections::HashSet, num::NonZeroUsize};

// Fixed slot count; every measured load stays below the 0.6 growth trigger
const TABLE_SIZE: usize = 1 << 14;
// Load factors from 0.05 to 0.55
const NUM_LOAD_FACTORS: usize = 11;
const KEY_LEN: usize = 12;
// Share of inserted keys removed before counting unreachable keys
const DELETE_RATIO: f64 = 0.1;

#[derive(Debug, Default, Clone, Copy)]
struct Measurement {
    load_factor: f64,
    avg_hit_probes: f64,
    worst_hit_probes: usize,
    avg_miss_probes: f64,
    lost_percent: f64,
}

fn random_key(rng: &mut impl Rng) -> String {
    rng.sample_iter(Alphanumeric).take(KEY_LEN).map(char::from).collect()
}

fn unique_keys(rng: &mut impl Rng, count: usize) -> Vec<String> {
    let mut seen = HashSet::with_capacity(count);
    let mut keys = Vec::with_capacity(count);
    while keys.len() < count {
        let key = random_key(rng);
        if seen.insert(key.clone()) {
            keys.push(key);
        }
    }
    keys
}

fn measure(
    rng: &mut impl Rng,
    keys: &[String],
    absent: &[String],
    n_keys: usize,
) -> Measurement {
    let capacity = NonZeroUsize::new(TABLE_SIZE).unwrap();
    let mut map = ProbingMap::with_capacity(capacity);
    let inserted = &keys[..n_keys];
    for (i, key) in inserted.iter().enumerate() {
        map.insert(key, i);
    }

    let hit_probes: Vec<usize> = inserted.iter().map(|key| map.probe_len(key)).collect();
    let miss_total: usize = absent.iter().map(|key| map.probe_len(key)).sum();

    let mut survivors = Vec::with_capacity(n_keys);
    for key in inserted {
        if rng.random_bool(DELETE_RATIO) {
            map.remove(key);
        } else {
            survivors.push(key);
        }
    }
    let lost = survivors.iter().filter(|key| !map.contains_key(key.as_str())).count();

    Measurement {
        load_factor: n_keys as f64 / TABLE_SIZE as f64,
        avg_hit_probes: hit_probes.iter().sum::<usize>() as f64 / hit_probes.len().max(1) as f64,
        worst_hit_probes: hit_probes.iter().copied().max().unwrap_or(0),
        avg_miss_probes: miss_total as f64 / absent.len().max(1) as f64,
        lost_percent: 100.0 * lost as f64 / survivors.len().max(1) as f64,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let load_factors: Vec<f64> = (0..NUM_LOAD_FACTORS)
        .map(|i| 0.05 + (0.55 - 0.05) * (i as f64) / ((NUM_LOAD_FACTORS - 1) as f64))
        .collect();

    let num_keys: Vec<usize> =
        load_factors.iter().map(|&load| (TABLE_SIZE as f64 * load) as usize).collect();

    println!("Load factors: {:?}", load_factors);
    println!("Number of keys: {:?}", num_keys);

    // Generate keys once so every load factor sees the same prefix
    let mut rng = rand::rng();
    let max_keys_needed = num_keys.iter().copied().max().unwrap_or(0);
    let mut keys = unique_keys(&mut rng, max_keys_needed + 1000);
    let absent = keys.split_off(max_keys_needed);

    let mut results = Vec::with_capacity(num_keys.len());
    for &n_keys in &num_keys {
        let result = measure(&mut rng, &keys, &absent, n_keys);
        println!(
            "  load {:.2}: avg hit = {:.2}, worst hit = {}, avg miss = {:.2}, lost after delete = {:.2}%",
            result.load_factor,
            result.avg_hit_probes,
            result.worst_hit_probes,
            result.avg_miss_probes,
            result.lost_percent
        );
        results.push(result);
    }

    let font_family = "sans-serif";
    let line_width = 2;
    let marker_size = 4;
    let text_size = 16;
    let title_size = 35;

    // Plot 1: probe lengths
    let root = BitMapBackend::new("probe_lengths.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_probes = results
        .iter()
        .map(|r| r.worst_hit_probes as f64)
        .chain(results.iter().map(|r| r.avg_miss_probes))
        .fold(1.0, f64::max) *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption("Linear Probing Lookup Cost", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..0.6, 0.0..max_probes)?;

    chart
        .configure_mesh()
        .x_desc("Load Factor")
        .y_desc("Slots Examined")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    let series: [(&str, RGBColor, Vec<(f64, f64)>); 3] = [
        (
            "Average hit",
            RGBColor(50, 90, 220),
            results.iter().map(|r| (r.load_factor, r.avg_hit_probes)).collect(),
        ),
        (
            "Worst hit",
            RGBColor(220, 50, 50),
            results.iter().map(|r| (r.load_factor, r.worst_hit_probes as f64)).collect(),
        ),
        (
            "Average miss",
            RGBColor(50, 180, 50),
            results.iter().map(|r| (r.load_factor, r.avg_miss_probes)).collect(),
        ),
    ];

    for (label, color, points) in series {
        let line_style = ShapeStyle::from(&color).stroke_width(line_width);

        chart
            .draw_series(LineSeries::new(points.iter().copied(), line_style))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(
            points.iter().map(|&point| Circle::new(point, marker_size, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;

    // Plot 2: keys lost to removals without tombstones
    let root = BitMapBackend::new("lost_after_delete.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_lost = results.iter().map(|r| r.lost_percent).fold(1.0, f64::max) * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Keys Unreachable After Removing 10%", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..0.6, 0.0..max_lost)?;

    chart
        .configure_mesh()
        .x_desc("Load Factor")
        .y_desc("Unreachable Keys (%)")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    let color = RGBColor(180, 50, 180);
    let line_style = ShapeStyle::from(&color).stroke_width(line_width);
    let points: Vec<(f64, f64)> = results.iter().map(|r| (r.load_factor, r.lost_percent)).collect();

    chart.draw_series(LineSeries::new(points.iter().copied(), line_style))?;
    chart.draw_series(points.iter().map(|&point| Circle::new(point, marker_size, color.filled())))?;

    root.present()?;

    println!("Generated plot images: probe_lengths.png, lost_after_delete.png");

    Ok(())
}
