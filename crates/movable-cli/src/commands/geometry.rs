use anyhow::{bail, Result};
use serde_json::{json, Value};

use movable_core::{slot_to_raw, zone_height};

pub fn locate(boundaries: &[f64], target: f64, as_json: bool) -> Result<()> {
    if boundaries.windows(2).any(|w| w[0] > w[1]) {
        bail!("boundaries must be in ascending order");
    }

    let slot = movable_core::locate(boundaries, target);
    if as_json {
        println!("{}", locate_json(target, slot));
    } else {
        match slot {
            Some(index) => println!("{}", index),
            None => println!("{} (before the first boundary)", slot_to_raw(slot)),
        }
    }
    Ok(())
}

/// Same `-1` sentinel as the text output when there is no slot
fn locate_json(target: f64, slot: Option<usize>) -> Value {
    json!({ "target": target, "slot": slot_to_raw(slot) })
}

pub fn speed(distance: f64, max_distance: f64, max_speed: f64, as_json: bool) -> Result<()> {
    if max_distance <= 0.0 {
        bail!("max distance must be positive");
    }
    if max_speed < 0.0 {
        bail!("max speed must not be negative");
    }

    let speed = movable_core::speed(distance, max_distance, max_speed);
    if as_json {
        println!(
            "{}",
            json!({
                "distance": distance,
                "max_distance": max_distance,
                "max_speed": max_speed,
                "speed": speed,
            })
        );
    } else {
        println!("{}", speed);
    }
    Ok(())
}

pub fn zone(viewport: f64, max_size: f64, as_json: bool) -> Result<()> {
    let height = zone_height(viewport, max_size);
    if as_json {
        println!(
            "{}",
            json!({ "viewport": viewport, "max_size": max_size, "zone": height })
        );
    } else {
        println!("{}", height);
    }
    Ok(())
}
