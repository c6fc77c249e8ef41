//! Visual theming shared by the network backdrop and the concept map.

use crate::layout::NodeCategory;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		self.lerp(Color::rgba(255, 255, 255, self.a), factor)
	}

	/// Linear interpolation between two colors
	pub fn lerp(self, other: Color, t: f64) -> Self {
		let t = t.clamp(0.0, 1.0);
		let mix = |a: u8, b: u8| (a as f64 * (1.0 - t) + b as f64 * t).round() as u8;
		Self {
			r: mix(self.r, other.r),
			g: mix(self.g, other.g),
			b: mix(self.b, other.b),
			a: self.a * (1.0 - t) + other.a * t,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Background gradient and vignette.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	pub color: Color,
	pub color_secondary: Color,
	/// Vignette intensity (0.0 = none, 1.0 = strong)
	pub vignette: f64,
}

/// Colors of the decorative network.
#[derive(Clone, Debug)]
pub struct NetworkStyle {
	pub hub: Color,
	pub minor_hub: Color,
	pub leaf: Color,
	pub edge: Color,
	pub label: Color,
	/// Halo drawn behind hubs.
	pub hub_glow: Color,
}

impl NetworkStyle {
	pub fn node_color(&self, category: NodeCategory) -> Color {
		match category {
			NodeCategory::Hub => self.hub,
			NodeCategory::MinorHub => self.minor_hub,
			NodeCategory::Leaf => self.leaf,
		}
	}
}

/// Colors of the concept map.
#[derive(Clone, Debug)]
pub struct ConceptStyle {
	pub query: Color,
	pub main: Color,
	pub secondary: Color,
	pub link: Color,
	pub label: Color,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub background: BackgroundStyle,
	pub network: NetworkStyle,
	pub concepts: ConceptStyle,
}

impl Theme {
	/// Deep navy with cyan hubs.
	pub fn midnight() -> Self {
		Self {
			background: BackgroundStyle {
				color: Color::rgb(8, 12, 24),
				color_secondary: Color::rgb(18, 26, 48),
				vignette: 0.25,
			},
			network: NetworkStyle {
				hub: Color::rgb(94, 234, 212),
				minor_hub: Color::rgb(129, 161, 230),
				leaf: Color::rgb(120, 140, 180),
				edge: Color::rgba(110, 170, 230, 0.45),
				label: Color::rgb(226, 240, 255),
				hub_glow: Color::rgba(94, 234, 212, 0.35),
			},
			concepts: ConceptStyle {
				query: Color::rgb(94, 234, 212),
				main: Color::rgb(129, 161, 230),
				secondary: Color::rgb(143, 163, 180),
				link: Color::rgba(140, 160, 200, 0.5),
				label: Color::rgb(230, 236, 245),
			},
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::midnight()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(Color::rgb(94, 234, 212).to_css(), "#5eead4");
	}

	#[test]
	fn translucent_colors_render_as_rgba() {
		assert_eq!(
			Color::rgb(10, 20, 30).with_alpha(0.5).to_css(),
			"rgba(10, 20, 30, 0.500)"
		);
	}

	#[test]
	fn lerp_hits_both_ends() {
		let (a, b) = (Color::rgb(0, 0, 0), Color::rgb(200, 100, 50));
		assert_eq!(a.lerp(b, 0.0), a);
		assert_eq!(a.lerp(b, 1.0), b);
		assert_eq!(a.lerp(b, 0.5), Color::rgb(100, 50, 25));
		assert_eq!(Color::rgb(0, 0, 0).lighten(1.0), Color::rgb(255, 255, 255));
	}

	#[test]
	fn categories_map_to_distinct_colors() {
		let style = Theme::default().network;
		assert_ne!(
			style.node_color(NodeCategory::Hub),
			style.node_color(NodeCategory::Leaf)
		);
	}
}
