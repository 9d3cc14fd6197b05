// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Display formatting for timestamps and counts.

use chrono::{DateTime, Local, Locale, NaiveDateTime, TimeZone};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Localized date followed by a short `HH:MM` time.
const DISPLAY_FORMAT: &str = "%x %H:%M";

/// Map a POSIX / BCP-47 style tag (`en_US.UTF-8`, `de-DE`) to a chrono locale.
///
/// Unknown or missing tags fall back to POSIX.
pub fn resolve_locale(tag: Option<&str>) -> Locale {
	let Some(tag) = tag else {
		return Locale::POSIX;
	};
	let tag = tag.split(['.', '@']).next().unwrap_or_default().replace('-', "_");
	Locale::try_from(tag.as_str()).unwrap_or(Locale::POSIX)
}

/// Render a backend timestamp in the local timezone.
pub fn format_timestamp(raw: &str, locale: Locale) -> String {
	format_timestamp_in(raw, &Local, locale)
}

/// Render a backend timestamp in `tz`.
///
/// Timestamps without an offset are taken as wall-clock time in `tz`.
/// Anything unparseable is returned verbatim.
pub fn format_timestamp_in<Tz>(raw: &str, tz: &Tz, locale: Locale) -> String
where
	Tz: TimeZone,
	Tz::Offset: std::fmt::Display,
{
	let raw = raw.trim();

	if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
		return dt
			.with_timezone(tz)
			.format_localized(DISPLAY_FORMAT, locale)
			.to_string();
	}

	for fmt in NAIVE_FORMATS {
		if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
			if let Some(dt) = tz.from_local_datetime(&naive).earliest() {
				return dt.format_localized(DISPLAY_FORMAT, locale).to_string();
			}
		}
	}

	raw.to_string()
}

/// Group digits in thousands: `1234567` -> `1,234,567`.
pub fn format_count(n: u64) -> String {
	let digits = n.to_string();
	let mut out = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, c) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			out.push(',');
		}
		out.push(c);
	}
	out
}
