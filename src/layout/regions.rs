//! Elliptical placement regions.
//!
//! Regions bias random placement into a brain-like silhouette: two lobes, a
//! front and a back zone, and two upper quadrants. A single larger ellipse
//! bounds the whole figure.

use std::f64::consts::TAU;

use rand::Rng;

/// An axis-aligned ellipse in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipse {
	pub cx: f64,
	pub cy: f64,
	pub rx: f64,
	pub ry: f64,
}

impl Ellipse {
	/// Distance from the centre in units of the radii. `<= 1.0` is inside.
	pub fn normalized_distance(&self, x: f64, y: f64) -> f64 {
		let (dx, dy) = ((x - self.cx) / self.rx, (y - self.cy) / self.ry);
		(dx * dx + dy * dy).sqrt()
	}

	/// Random point inside the ellipse, scaled down by `max_fraction`.
	///
	/// The radius is drawn as `sqrt(u)` so points spread evenly over the area
	/// instead of crowding the centre.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, max_fraction: f64) -> (f64, f64) {
		let angle = rng.gen_range(0.0..TAU);
		let r = rng.r#gen::<f64>().sqrt() * max_fraction;
		(
			self.cx + angle.cos() * self.rx * r,
			self.cy + angle.sin() * self.ry * r,
		)
	}

	/// Reflect a point lying outside back inside along its radial direction.
	///
	/// A point at normalized distance `d > 1` lands at `2 - d`, so overshoot
	/// turns into inset. Points at `d >= 2` collapse onto the centre.
	pub fn reflect_inside(&self, x: f64, y: f64) -> (f64, f64) {
		let d = self.normalized_distance(x, y);
		if d <= 1.0 {
			return (x, y);
		}
		let scale = (2.0 - d).max(0.0) / d;
		(
			self.cx + (x - self.cx) * scale,
			self.cy + (y - self.cy) * scale,
		)
	}
}

/// A named placement zone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
	pub name: &'static str,
	pub ellipse: Ellipse,
}

/// (name, cx, cy, rx, ry) as fractions of the canvas size.
const REGION_SHAPES: [(&str, f64, f64, f64, f64); 6] = [
	("left-lobe", 0.34, 0.52, 0.15, 0.20),
	("right-lobe", 0.66, 0.52, 0.15, 0.20),
	("front", 0.50, 0.30, 0.14, 0.11),
	("back", 0.50, 0.72, 0.14, 0.11),
	("upper-left", 0.40, 0.36, 0.10, 0.10),
	("upper-right", 0.60, 0.36, 0.10, 0.10),
];

const SILHOUETTE_RX: f64 = 0.42;
const SILHOUETTE_RY: f64 = 0.40;

/// The placement regions for a canvas of the given size.
pub fn regions(width: f64, height: f64) -> Vec<Region> {
	REGION_SHAPES
		.iter()
		.map(|&(name, cx, cy, rx, ry)| Region {
			name,
			ellipse: Ellipse {
				cx: cx * width,
				cy: cy * height,
				rx: rx * width,
				ry: ry * height,
			},
		})
		.collect()
}

/// The overall boundary every node is clamped into.
pub fn silhouette(width: f64, height: f64) -> Ellipse {
	Ellipse {
		cx: width / 2.0,
		cy: height / 2.0,
		rx: width * SILHOUETTE_RX,
		ry: height * SILHOUETTE_RY,
	}
}
