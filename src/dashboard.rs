//! Mock data behind the dashboard page.

use crate::api::Startup;

/// A headline number on the dashboard.
#[derive(Clone, Debug, PartialEq)]
pub struct Metric {
	pub label: &'static str,
	pub value: String,
	/// Change over the previous period, in percent.
	pub trend: f64,
}

impl Metric {
	/// Trend rendered with an explicit sign, e.g. `+12.5%`.
	pub fn trend_label(&self) -> String {
		format!("{:+.1}%", self.trend)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct FundingRound {
	pub stage: &'static str,
	pub year: u32,
	pub amount: f64,
	pub lead_investor: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardData {
	pub startup: Startup,
	pub founders: Vec<&'static str>,
	pub metrics: Vec<Metric>,
	pub rounds: Vec<FundingRound>,
	pub tags: Vec<&'static str>,
}

impl DashboardData {
	pub fn total_raised(&self) -> f64 {
		self.rounds.iter().map(|r| r.amount).sum()
	}
}

/// Format a euro amount the way the service does: `€1.2B`, `€3.4M`, `€250K`, `€900`.
pub fn format_funding(amount: f64) -> String {
	if amount >= 1_000_000_000.0 {
		format!("€{:.1}B", amount / 1_000_000_000.0)
	} else if amount >= 1_000_000.0 {
		format!("€{:.1}M", amount / 1_000_000.0)
	} else if amount >= 1_000.0 {
		format!("€{:.0}K", amount / 1_000.0)
	} else {
		format!("€{:.0}", amount.max(0.0))
	}
}

/// The single hard-coded startup the dashboard shows.
pub fn mock_dashboard() -> DashboardData {
	let rounds = vec![
		FundingRound {
			stage: "Pre-seed",
			year: 2021,
			amount: 350_000.0,
			lead_investor: "Lombardy Angels",
		},
		FundingRound {
			stage: "Seed",
			year: 2022,
			amount: 1_750_000.0,
			lead_investor: "Alpine Ventures",
		},
		FundingRound {
			stage: "Series A",
			year: 2024,
			amount: 7_500_000.0,
			lead_investor: "Nordic Climate Fund",
		},
	];
	let funding: f64 = rounds.iter().map(|r| r.amount).sum();
	let description = "Modular battery swap stations for urban e-scooter and \
		e-cargo fleets, with a predictive dispatch layer that keeps vehicles charged \
		without depot downtime.";

	DashboardData {
		startup: Startup {
			id: "startup_0".into(),
			name: "VoltLane".into(),
			sector: "Mobility".into(),
			location: "Milan, Italy".into(),
			funding,
			funding_formatted: format_funding(funding),
			description: description.into(),
			description_short: description.into(),
			year: 2021,
			employees: 42,
			status: "Active".into(),
		},
		founders: vec!["Giulia Ferri", "Marco Bianchi"],
		metrics: vec![
			Metric {
				label: "Monthly revenue",
				value: format_funding(185_000.0),
				trend: 12.4,
			},
			Metric {
				label: "Stations deployed",
				value: "128".into(),
				trend: 8.0,
			},
			Metric {
				label: "Fleet partners",
				value: "17".into(),
				trend: 21.4,
			},
			Metric {
				label: "Swap time",
				value: "38s".into(),
				trend: -5.0,
			},
		],
		rounds,
		tags: vec!["E-mobility", "Energy storage", "B2B", "Smart city"],
	}
}
