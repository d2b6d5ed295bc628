//! Command implementations for the `dpsmeter` binary.

use std::io::Write;
use std::path::{Path, PathBuf};

use dpsmeter_core::panel::{headline, panel_rows, progress_fraction, sparkline};
use dpsmeter_core::{DpsMeter, MeterReadout, MeterSignal, SignalHandler};
use dpsmeter_types::formatting::{format_compact, format_elapsed, format_pct};
use dpsmeter_types::{DisplaySettings, MeterSettings};
use serde::Serialize;

use crate::settings_store::{
    SettingsError, default_settings_path, load_settings_or_default, save_settings,
};
use crate::trace::TraceRecord;

/// Result of replaying a trace through a fresh meter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplaySummary {
    pub ticks: usize,
    pub boundaries: usize,
    pub resets: usize,
    pub readout: MeterReadout,
}

/// Drive a new meter with every record in order.
///
/// With `every = Some(n)`, the panel is printed after every `n`th tick.
pub fn replay(
    records: &[TraceRecord],
    settings: &MeterSettings,
    every: Option<usize>,
    out: &mut impl Write,
) -> std::io::Result<ReplaySummary> {
    let mut meter = DpsMeter::new(settings.meter);
    let mut ticks = 0;
    let mut boundaries = 0;
    let mut resets = 0;

    for record in records {
        match record {
            TraceRecord::Tick { dt, entities } => {
                meter.sample(*dt, entities);
                ticks += 1;
                if every.is_some_and(|n| n > 0 && ticks % n == 0) {
                    print_panel(out, &meter, &settings.display)?;
                }
            }
            TraceRecord::AreaChanged { area_name } => {
                meter.handle_signal(&MeterSignal::AreaChanged {
                    area_name: area_name.clone(),
                });
                boundaries += 1;
            }
            TraceRecord::ResetSession => {
                meter.handle_signal(&MeterSignal::SessionReset);
                resets += 1;
            }
        }
    }

    tracing::info!(ticks, boundaries, resets, "Replay finished");

    Ok(ReplaySummary {
        ticks,
        boundaries,
        resets,
        readout: meter.readout(),
    })
}

/// Print the panel as the overlay would show it.
pub fn print_panel(
    out: &mut impl Write,
    meter: &DpsMeter,
    display: &DisplaySettings,
) -> std::io::Result<()> {
    let readout = meter.readout();
    write!(out, "[{}] {}", format_elapsed(readout.now), headline(&readout, display))?;
    if let Some(fraction) = progress_fraction(&readout, display) {
        let pct = format_pct(f64::from(fraction) * 100.0, display.european_numbers);
        write!(out, "  ({pct} of max)")?;
    }
    writeln!(out)?;

    for row in panel_rows(&readout, display) {
        writeln!(out, "  {:<12} {:>10}", row.label, row.text)?;
    }

    let points = sparkline(meter.window_samples(), meter.now(), meter.config(), display);
    if !points.is_empty() {
        writeln!(out, "  {}", render_sparkline(&points))?;
    }
    Ok(())
}

/// Text sparkline, one block glyph per sample.
fn render_sparkline(points: &[dpsmeter_core::panel::SparkPoint]) -> String {
    const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    points
        .iter()
        .map(|p| {
            let idx = (p.y.clamp(0.0, 1.0) * (BLOCKS.len() - 1) as f32).round() as usize;
            BLOCKS[idx.min(BLOCKS.len() - 1)]
        })
        .collect()
}

pub fn print_summary(
    out: &mut impl Write,
    summary: &ReplaySummary,
    display: &DisplaySettings,
) -> std::io::Result<()> {
    let r = &summary.readout;
    let eu = display.european_numbers;
    writeln!(out, "=== Replay Summary ===")?;
    writeln!(
        out,
        "  Ticks: {}  Area changes: {}  Session resets: {}",
        summary.ticks, summary.boundaries, summary.resets
    )?;
    writeln!(out, "  Logical time: {}", format_elapsed(r.now))?;
    writeln!(
        out,
        "  Session: {} damage over {}",
        format_compact(r.session_damage, eu),
        format_elapsed(r.session_elapsed)
    )?;
    writeln!(
        out,
        "  Area:    {} damage over {}",
        format_compact(r.area_damage, eu),
        format_elapsed(r.area_elapsed)
    )?;

    let all = DisplaySettings {
        show_rolling: true,
        show_max: true,
        show_session: true,
        show_area: true,
        ..*display
    };
    for row in panel_rows(r, &all) {
        writeln!(out, "  {:<12} {:>10}", row.label, row.text)?;
    }
    Ok(())
}

/// Resolve an explicit settings path or the default location.
pub fn resolve_settings_path(path: Option<&Path>) -> Result<PathBuf, String> {
    match path {
        Some(p) => Ok(p.to_path_buf()),
        None => default_settings_path().ok_or_else(|| "No config directory available".to_string()),
    }
}

/// Print the effective settings as TOML.
pub fn show_settings(path: &Path, out: &mut impl Write) -> Result<(), String> {
    let settings = load_settings_or_default(path);
    let rendered = toml::to_string_pretty(&settings).map_err(|e| e.to_string())?;
    writeln!(out, "# {}", path.display()).map_err(|e| e.to_string())?;
    write!(out, "{rendered}").map_err(|e| e.to_string())
}

/// Write a default settings file. Refuses to overwrite unless `force`.
pub fn write_default_settings(path: &Path, force: bool) -> Result<(), String> {
    if path.exists() && !force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ));
    }
    save_settings(path, &MeterSettings::default()).map_err(|e: SettingsError| e.to_string())
}
