//! svg.rs
//!
//! Shareable card export: headline stats in dotted key/value rows, a life
//! progress bar and the 52 × 80 life-in-weeks grid.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::format::{format_compact, format_grouped, to_fixed};
use crate::i18n::Catalog;
use crate::stats::{LIFE_EXPECTANCY_YEARS, LifeStats, WEEKS_PER_YEAR};

const START_Y: i32 = 30;
const LINE_HEIGHT: i32 = 20;
const LEFT_PADDING: f32 = 15.0;
const RIGHT_PADDING: f32 = 30.0;
const CHAR_WIDTH: f32 = 9.6;
const MIN_ROW_CHARS: usize = 40;

const BAR_HEIGHT: f32 = 12.0;
const CELL_SIZE: f32 = 5.0;
const CELL_GAP: f32 = 1.0;
const DECADE_GAP: f32 = 4.0;
const YEARS_PER_DECADE: i64 = 10;

const LIVED_START: [u8; 3] = [139, 92, 246]; // #8b5cf6
const LIVED_END: [u8; 3] = [236, 72, 153]; // #ec4899

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

pub struct ThemeColors {
    pub bg: &'static str,
    pub text: &'static str,
    pub key: &'static str,
    pub value: &'static str,
    pub cc: &'static str,
    pub remaining: &'static str,
    pub here: &'static str,
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors {
                bg: "#161b22",
                text: "#c9d1d9",
                key: "#ffa657",
                value: "#a5d6ff",
                cc: "#616e7f",
                remaining: "#21262d",
                here: "#22d3ee",
            },
            Theme::Light => ThemeColors {
                bg: "#ffffff",
                text: "#24292f",
                key: "#d73a49",
                value: "#0366d6",
                cc: "#6a737d",
                remaining: "#eaeef2",
                here: "#0891b2",
            },
        }
    }

    /// Output file name for this theme.
    pub fn file_name(self) -> &'static str {
        match self {
            Theme::Dark => "dark_mode.svg",
            Theme::Light => "light_mode.svg",
        }
    }
}

/// How one week of the grid is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Lived,
    Here,
    Remaining,
}

pub fn cell_state(week: i64, weeks_lived: i64) -> CellState {
    use std::cmp::Ordering;
    match week.cmp(&weeks_lived) {
        Ordering::Less => CellState::Lived,
        Ordering::Equal => CellState::Here,
        Ordering::Greater => CellState::Remaining,
    }
}

// Utilities for building SVG content

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn lerp_color(from: [u8; 3], to: [u8; 3], t: f64) -> String {
    let channel = |i: usize| {
        let (a, b) = (f64::from(from[i]), f64::from(to[i]));
        (a + (b - a) * t).round() as u8
    };
    format!("rgb({},{},{})", channel(0), channel(1), channel(2))
}

/// Splits a row into (key, dot leader, value) so that every row spans `align_width` chars.
pub fn build_stat_row(key: &str, value: &str, align_width: usize) -> (String, String, String) {
    let key_part = format!("{key}: ");
    let base_len = key_part.chars().count() + value.chars().count();
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => ".".repeat(n),
    };

    (key_part, dots, value.to_string())
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(base.chars().count()) + 2;
    format!("{base}{}", "-".repeat(dash_count))
}

enum Line {
    Header(String),
    Text(String),
    Blank,
    Stat { k: String, d: String, v: String },
}

fn build_text_tspans(lines: &[Line]) -> String {
    let mut out = String::new();

    for (i, line) in lines.iter().enumerate() {
        let y = START_Y + (i as i32) * LINE_HEIGHT;

        match line {
            Line::Blank => {}
            Line::Header(text) | Line::Text(text) => {
                let _ = writeln!(
                    out,
                    r#"<tspan x="{LEFT_PADDING}" y="{y}">{}</tspan>"#,
                    escape_xml(text)
                );
            }
            Line::Stat { k, d, v } => {
                let _ = writeln!(
                    out,
                    r#"<tspan x="{LEFT_PADDING}" y="{y}" class="cc">. </tspan><tspan class="key">{}</tspan><tspan class="cc">{}</tspan><tspan class="value">{}</tspan>"#,
                    escape_xml(k),
                    escape_xml(d),
                    escape_xml(v)
                );
            }
        }
    }

    out
}

/// (width, height) of the life-in-weeks grid in px.
pub fn grid_size() -> (f32, f32) {
    let pitch = CELL_SIZE + CELL_GAP;
    let decades = (LIFE_EXPECTANCY_YEARS / YEARS_PER_DECADE) as f32;
    let width = WEEKS_PER_YEAR as f32 * pitch - CELL_GAP;
    let height = LIFE_EXPECTANCY_YEARS as f32 * pitch - CELL_GAP + (decades - 1.0) * DECADE_GAP;
    (width, height)
}

/// Draws the life-in-weeks grid with its top-left corner at (x, y).
pub fn build_life_grid(weeks_lived: i64, colors: &ThemeColors, x: f32, y: f32) -> String {
    let total_weeks = LIFE_EXPECTANCY_YEARS * WEEKS_PER_YEAR;
    let pitch = CELL_SIZE + CELL_GAP;
    let mut out = String::new();

    for year in 0..LIFE_EXPECTANCY_YEARS {
        let decade = (year / YEARS_PER_DECADE) as f32;
        let row_y = y + year as f32 * pitch + decade * DECADE_GAP;

        for w in 0..WEEKS_PER_YEAR {
            let week = year * WEEKS_PER_YEAR + w;
            let cx = x + w as f32 * pitch;

            let _ = match cell_state(week, weeks_lived) {
                CellState::Lived => {
                    let fill = lerp_color(LIVED_START, LIVED_END, week as f64 / total_weeks as f64);
                    writeln!(
                        out,
                        r#"<rect class="lived" x="{cx}" y="{row_y}" width="{CELL_SIZE}" height="{CELL_SIZE}" fill="{fill}"/>"#
                    )
                }
                CellState::Here => writeln!(
                    out,
                    r#"<rect class="here" x="{cx}" y="{row_y}" width="{CELL_SIZE}" height="{CELL_SIZE}" rx="{}" fill="{}"/>"#,
                    CELL_SIZE / 2.0,
                    colors.here
                ),
                CellState::Remaining => writeln!(
                    out,
                    r#"<rect class="rem" x="{cx}" y="{row_y}" width="{CELL_SIZE}" height="{CELL_SIZE}"/>"#
                ),
            };
        }
    }

    out
}

/// Main SVG generation function
pub fn generate_svg(stats: &LifeStats, birth: NaiveDate, t: &Catalog, theme: Theme) -> String {
    let colors = theme.colors();
    let card = &t.card;

    let rows: Vec<(&str, String)> = vec![
        (card.born, birth.to_string()),
        (card.heartbeats, format_compact(stats.heartbeats as f64)),
        (card.breaths, format_compact(stats.breaths as f64)),
        (card.space_km, format_compact(stats.distance_traveled_km)),
        (card.days_lived, format_grouped(stats.days_lived as f64)),
        (card.sleep_years, to_fixed(stats.sleep_years, 1)),
        (card.full_moons, format_grouped(stats.full_moons as f64)),
    ];

    let align_width = rows
        .iter()
        .map(|(k, v)| k.chars().count() + 2 + v.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_ROW_CHARS);

    let percentage = stats.life_percentage.clamp(0.0, 100.0);

    let mut lines = vec![
        Line::Header(build_header_line(card.title, align_width)),
        Line::Text((card.age_text)(stats.years, stats.months, stats.days)),
        Line::Blank,
    ];
    for (k, v) in &rows {
        let (k, d, v) = build_stat_row(k, v, align_width);
        lines.push(Line::Stat { k, d, v });
    }
    lines.push(Line::Blank);
    lines.push(Line::Header(build_header_line(
        &format!("{} {}%", card.life_progress, to_fixed(percentage, 1)),
        align_width,
    )));

    let text_tspans = build_text_tspans(&lines);

    let (grid_w, grid_h) = grid_size();
    let width = (LEFT_PADDING + align_width as f32 * CHAR_WIDTH + RIGHT_PADDING)
        .max(LEFT_PADDING + grid_w + RIGHT_PADDING);

    // Progress bar sits on the line after the text block
    let bar_y = (START_Y + lines.len() as i32 * LINE_HEIGHT) as f32 - BAR_HEIGHT;
    let bar_w = width - LEFT_PADDING - RIGHT_PADDING;
    let bar_fill_w = bar_w * (percentage / 100.0) as f32;

    let grid_title_y = bar_y + BAR_HEIGHT + 2.0 * LINE_HEIGHT as f32;
    let grid_caption = (t.life_grid.description)(
        &format_grouped(stats.weeks_lived as f64),
        &format_grouped(stats.weeks_total as f64),
    );
    let grid_caption_y = grid_title_y + LINE_HEIGHT as f32;
    let grid_y = grid_caption_y + LINE_HEIGHT as f32 / 2.0;
    let grid_rects = build_life_grid(stats.weeks_lived, &colors, LEFT_PADDING, grid_y);

    let watermark_y = grid_y + grid_h + 1.5 * LINE_HEIGHT as f32;
    let height = watermark_y + LINE_HEIGHT as f32;

    format!(
        r##"<?xml version='1.0' encoding='UTF-8'?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{w}px" height="{h}px"
     font-family="ConsolasFallback,Consolas,monospace"
     font-size="16px">

<style>
.key      {{ fill: {key}; }}
.value    {{ fill: {value}; }}
.cc       {{ fill: {cc}; }}
.rem      {{ fill: {remaining}; }}
.small    {{ font-size: 12px; fill: {cc}; }}
</style>

<defs>
<linearGradient id="progress" x1="0" x2="1" y1="0" y2="0">
<stop offset="0%" stop-color="#8b5cf6"/>
<stop offset="50%" stop-color="#ec4899"/>
<stop offset="100%" stop-color="#06b6d4"/>
</linearGradient>
</defs>

<rect width="{w}px" height="{h}px" fill="{bg}" rx="15"/>

<!-- STATS -->
<text fill="{text}" xml:space="preserve">
{text_tspans}</text>

<!-- LIFE PROGRESS -->
<rect x="{LEFT_PADDING}" y="{bar_y}" width="{bar_w}" height="{BAR_HEIGHT}" rx="{bar_r}" fill="{remaining}"/>
<rect x="{LEFT_PADDING}" y="{bar_y}" width="{bar_fill_w}" height="{BAR_HEIGHT}" rx="{bar_r}" fill="url(#progress)"/>

<!-- LIFE IN WEEKS -->
<text fill="{text}" x="{LEFT_PADDING}" y="{grid_title_y}">{grid_title}</text>
<text class="small" x="{LEFT_PADDING}" y="{grid_caption_y}">{grid_caption}</text>
<g>
{grid_rects}</g>

<text class="small" x="{LEFT_PADDING}" y="{watermark_y}">{watermark}</text>

</svg>
"##,
        w = width,
        h = height,
        bg = colors.bg,
        text = colors.text,
        key = colors.key,
        value = colors.value,
        cc = colors.cc,
        remaining = colors.remaining,
        bar_r = BAR_HEIGHT / 2.0,
        grid_title = escape_xml(t.life_grid.title),
        grid_caption = escape_xml(&grid_caption),
        watermark = escape_xml(card.watermark),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculate_life_stats_at;
    use crate::i18n::{Locale, catalog};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn stats_for(birth: NaiveDate) -> LifeStats {
        let now = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
            .and_utc();
        calculate_life_stats_at(birth, &now, &mut StdRng::seed_from_u64(5))
    }

    #[test]
    fn stat_rows_align_to_width() {
        let (k, d, v) = build_stat_row("Heartbeats", "1.2B", 30);
        assert_eq!(k.chars().count() + d.chars().count() + v.chars().count(), 30);
        assert_eq!(build_stat_row("Key", "Value", 11).1, " ");
        assert_eq!(build_stat_row("Key", "Value", 12).1, ". ");
        assert_eq!(build_stat_row("Key", "Value", 5).1, "");
    }

    #[test]
    fn rows_count_chars_not_bytes() {
        let (k, d, v) = build_stat_row("धड़कनें", "1.2B", 30);
        assert_eq!(k.chars().count() + d.chars().count() + v.chars().count(), 30);
    }

    #[test]
    fn cell_states() {
        assert_eq!(cell_state(0, 10), CellState::Lived);
        assert_eq!(cell_state(10, 10), CellState::Here);
        assert_eq!(cell_state(11, 10), CellState::Remaining);
    }

    #[test]
    fn grid_has_one_marker_while_inside_lifespan() {
        let colors = Theme::Dark.colors();
        let rects = build_life_grid(1304, &colors, 0.0, 0.0);
        assert_eq!(rects.matches(r#"class="here""#).count(), 1);
        assert_eq!(rects.matches(r#"class="lived""#).count(), 1304);
        assert_eq!(rects.matches(r#"class="rem""#).count(), 4160 - 1305);
    }

    #[test]
    fn grid_is_full_past_expectancy() {
        let colors = Theme::Light.colors();
        let rects = build_life_grid(4500, &colors, 0.0, 0.0);
        assert_eq!(rects.matches(r#"class="here""#).count(), 0);
        assert_eq!(rects.matches(r#"class="lived""#).count(), 4160);
    }

    #[test]
    fn gradient_endpoints() {
        assert_eq!(lerp_color(LIVED_START, LIVED_END, 0.0), "rgb(139,92,246)");
        assert_eq!(lerp_color(LIVED_START, LIVED_END, 1.0), "rgb(236,72,153)");
    }

    #[test]
    fn card_contains_localized_labels() {
        let birth = NaiveDate::from_ymd_opt(1992, 6, 14).unwrap();
        let stats = stats_for(birth);
        let t = catalog(Locale::Pt);
        let svg = generate_svg(&stats, birth, t, Theme::Dark);

        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Batimentos"));
        assert!(svg.contains("1992-06-14"));
        assert!(svg.contains("34 anos, 4 meses, 5 dias"));
        assert!(svg.contains(&format_compact(stats.heartbeats as f64)));
        assert!(svg.contains("#161b22"));
    }

    #[test]
    fn themes_differ_only_in_palette() {
        let birth = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let stats = stats_for(birth);
        let t = catalog(Locale::En);
        let dark = generate_svg(&stats, birth, t, Theme::Dark);
        let light = generate_svg(&stats, birth, t, Theme::Light);
        assert!(light.contains("#ffffff") && !light.contains("#161b22"));
        assert_eq!(dark.lines().count(), light.lines().count());
    }
}
