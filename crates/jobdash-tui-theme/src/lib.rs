// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use jobdash_core::BadgeColor;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
	pub background: Color,
	pub surface: Color,
	pub text: Color,
	pub text_muted: Color,
	pub text_placeholder: Color,
	pub accent: Color,
	pub error: Color,
	pub warning: Color,
	pub success: Color,
	pub selection_bg: Color,
	pub selection_fg: Color,
}

/// Background colors for the scope, source and stretch badges.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgePalette {
	pub blue: Color,
	pub green: Color,
	pub purple: Color,
	pub indigo: Color,
	pub pink: Color,
	pub orange: Color,
	pub yellow: Color,
	pub neutral: Color,
	pub foreground: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BorderStyles {
	pub normal: Style,
	pub focused: Style,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyles {
	pub normal: Style,
	pub bold: Style,
	pub dim: Style,
	pub title: Style,
	pub link: Style,
	pub placeholder: Style,
	pub disabled: Style,
	pub error: Style,
	pub success: Style,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
	pub name: String,
	pub colors: ColorPalette,
	pub badges: BadgePalette,
	pub borders: BorderStyles,
	pub text: TextStyles,
}

impl Default for Theme {
	fn default() -> Self {
		Self::dark()
	}
}

impl Theme {
	pub fn dark() -> Self {
		let colors = ColorPalette {
			background: Color::Black,
			surface: Color::Rgb(30, 30, 30),
			text: Color::White,
			text_muted: Color::DarkGray,
			text_placeholder: Color::Rgb(100, 100, 100),
			accent: Color::Cyan,
			error: Color::Red,
			warning: Color::Yellow,
			success: Color::Green,
			selection_bg: Color::Rgb(40, 60, 90),
			selection_fg: Color::White,
		};

		let badges = BadgePalette {
			blue: Color::Rgb(30, 64, 175),
			green: Color::Rgb(22, 101, 52),
			purple: Color::Rgb(107, 33, 168),
			indigo: Color::Rgb(55, 48, 163),
			pink: Color::Rgb(157, 23, 77),
			orange: Color::Rgb(154, 52, 18),
			yellow: Color::Rgb(133, 77, 14),
			neutral: Color::Rgb(55, 65, 81),
			foreground: Color::White,
		};

		Self::build("dark", colors, badges)
	}

	pub fn light() -> Self {
		let colors = ColorPalette {
			background: Color::White,
			surface: Color::Rgb(245, 245, 245),
			text: Color::Black,
			text_muted: Color::Gray,
			text_placeholder: Color::Rgb(160, 160, 160),
			accent: Color::Blue,
			error: Color::Red,
			warning: Color::Rgb(180, 120, 0),
			success: Color::Green,
			selection_bg: Color::Rgb(219, 234, 254),
			selection_fg: Color::Black,
		};

		// Tailwind *-100 backgrounds with dark text, as on the web dashboard.
		let badges = BadgePalette {
			blue: Color::Rgb(219, 234, 254),
			green: Color::Rgb(220, 252, 231),
			purple: Color::Rgb(243, 232, 255),
			indigo: Color::Rgb(224, 231, 255),
			pink: Color::Rgb(252, 231, 243),
			orange: Color::Rgb(255, 237, 213),
			yellow: Color::Rgb(254, 249, 195),
			neutral: Color::Rgb(243, 244, 246),
			foreground: Color::Rgb(31, 41, 55),
		};

		Self::build("light", colors, badges)
	}

	fn build(name: &str, colors: ColorPalette, badges: BadgePalette) -> Self {
		let borders = BorderStyles {
			normal: Style::default().fg(colors.text_muted),
			focused: Style::default().fg(colors.accent),
		};

		let text = TextStyles {
			normal: Style::default().fg(colors.text),
			bold: Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
			dim: Style::default().fg(colors.text_muted),
			title: Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
			link: Style::default().fg(colors.accent).add_modifier(Modifier::UNDERLINED),
			placeholder: Style::default().fg(colors.text_placeholder),
			disabled: Style::default().fg(colors.text_muted),
			error: Style::default().fg(colors.error),
			success: Style::default().fg(colors.success),
		};

		Self {
			name: name.to_string(),
			colors,
			badges,
			borders,
			text,
		}
	}

	/// Look a theme up by name, falling back to dark.
	pub fn named(name: &str) -> Self {
		match name {
			"light" => Self::light(),
			_ => Self::dark(),
		}
	}

	pub fn border_style_for(&self, focused: bool) -> Style {
		if focused {
			self.borders.focused
		} else {
			self.borders.normal
		}
	}

	pub fn selection_style(&self) -> Style {
		Style::default()
			.bg(self.colors.selection_bg)
			.fg(self.colors.selection_fg)
	}

	pub fn badge_style(&self, color: BadgeColor) -> Style {
		let bg = match color {
			BadgeColor::Blue => self.badges.blue,
			BadgeColor::Green => self.badges.green,
			BadgeColor::Purple => self.badges.purple,
			BadgeColor::Indigo => self.badges.indigo,
			BadgeColor::Pink => self.badges.pink,
			BadgeColor::Orange => self.badges.orange,
			BadgeColor::Yellow => self.badges.yellow,
			BadgeColor::Neutral => self.badges.neutral,
		};
		Style::default().bg(bg).fg(self.badges.foreground)
	}
}
