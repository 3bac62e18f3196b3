//! # Beamcheck CLI
//!
//! Reads one beam request as JSON (engineering units), runs the full beam
//! calculation and writes the result as JSON to stdout. Errors are written
//! as JSON to stderr with a non-zero exit code.
//!
//! ```text
//! beam_cli [REQUEST.json | -] [--settings SETTINGS.json] [--summary]
//! ```
//!
//! With no request path (or `-`) the request is read from stdin. `--summary`
//! also prints a human-readable report to stderr. Set `RUST_LOG=debug` for
//! analysis tracing.
//!
//! ## Request
//!
//! ```json
//! {
//!   "label": "B-1",
//!   "span_m": 6.0,
//!   "load_type": "point_anywhere",
//!   "load": { "P": 20.0, "a": 1.5 },
//!   "b_mm": 300.0,
//!   "d_mm": 500.0,
//!   "material": "M25"
//! }
//! ```
//!
//! Loads are in kN, kN/m or kN·m; `a` is in m.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use log::{debug, info};
use serde::Deserialize;

use beam_core::calculations::beam::{calculate, BeamInput, BeamResult};
use beam_core::errors::{CalcError, CalcResult};
use beam_core::loads::{LimitState, LoadCase, LoadParams};
use beam_core::materials::lookup_or_default;
use beam_core::settings::AnalysisSettings;
use beam_core::units::{
    KilonewtonMeters, Kilonewtons, KilonewtonsPerMeter, Meters, Millimeters, NewtonMeters, Newtons,
    NewtonsPerMeter,
};

/// Beam request in engineering units
#[derive(Debug, Clone, Deserialize)]
struct BeamRequest {
    #[serde(default)]
    label: String,
    span_m: f64,
    load_type: String,
    /// P (kN), a (m), w and w_max (kN/m), M_applied (kN·m)
    #[serde(default)]
    load: LoadParams,
    b_mm: f64,
    d_mm: f64,
    #[serde(default)]
    material: Option<String>,
    #[serde(default)]
    sample_count: Option<usize>,
    #[serde(default)]
    limit_state: Option<LimitState>,
}

impl BeamRequest {
    /// Convert once to SI and fill gaps from the settings.
    fn into_beam_input(self, settings: &AnalysisSettings) -> CalcResult<BeamInput> {
        let load = self.load;
        let params = LoadParams {
            p: load.p.map(|p| Newtons::from(Kilonewtons(p)).value()),
            a: load.a,
            w: load.w.map(|w| NewtonsPerMeter::from(KilonewtonsPerMeter(w)).value()),
            w_max: load.w_max.map(|w| NewtonsPerMeter::from(KilonewtonsPerMeter(w)).value()),
            m_applied: load.m_applied.map(|m| NewtonMeters::from(KilonewtonMeters(m)).value()),
        };
        let load_case = LoadCase::from_tag(&self.load_type, &params)?;

        let requested = self
            .material
            .unwrap_or_else(|| settings.fallback_material_grade.clone());
        let material = lookup_or_default(&requested, &settings.fallback_material_grade)?;

        Ok(BeamInput {
            label: self.label,
            span_m: self.span_m,
            load_case,
            width_m: Meters::from(Millimeters(self.b_mm)).value(),
            depth_m: Meters::from(Millimeters(self.d_mm)).value(),
            material_grade: material.grade,
            sample_count: self.sample_count.unwrap_or(settings.default_sample_count),
            limit_state: self.limit_state.unwrap_or(settings.default_limit_state),
            moment_decimals: settings.moment_decimals,
        })
    }
}

#[derive(Debug, Default)]
struct Args {
    request: Option<PathBuf>,
    settings: Option<PathBuf>,
    summary: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> CalcResult<Args> {
    let mut parsed = Args::default();
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--settings" => {
                let path = iter.next().ok_or_else(|| {
                    CalcError::invalid_input("--settings", "missing", "Expected a settings file path")
                })?;
                parsed.settings = Some(PathBuf::from(path));
            }
            "--summary" => parsed.summary = true,
            "-" => parsed.request = None,
            other if other.starts_with("--") => {
                return Err(CalcError::invalid_input("argument", other, "Unknown option"));
            }
            other => parsed.request = Some(PathBuf::from(other)),
        }
    }
    Ok(parsed)
}

fn read_request(path: Option<&Path>) -> CalcResult<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string())),
        None => {
            let mut contents = String::new();
            io::stdin()
                .read_to_string(&mut contents)
                .map_err(|e| CalcError::file_error("read", "<stdin>", e.to_string()))?;
            Ok(contents)
        }
    }
}

fn run(args: &Args) -> CalcResult<BeamResult> {
    let settings = match &args.settings {
        Some(path) => {
            info!("loading settings from {}", path.display());
            AnalysisSettings::load(path)?
        }
        None => AnalysisSettings::default(),
    };

    let contents = read_request(args.request.as_deref())?;
    let request: BeamRequest = serde_json::from_str(&contents)?;
    let input = request.into_beam_input(&settings)?;
    debug!("request converted to SI: {:?}", input);

    calculate(&input)
}

fn print_summary(result: &BeamResult) {
    eprintln!("═══════════════════════════════════════");
    eprintln!("  BEAM CALCULATION RESULTS {}", result.label);
    eprintln!("═══════════════════════════════════════");
    eprintln!();
    eprintln!("Input:");
    eprintln!("  Load:     {}", result.load_case.kind().display_name());
    eprintln!(
        "  Section:  {:.0} x {:.0} mm",
        result.section.width_m * 1000.0,
        result.section.depth_m * 1000.0
    );
    eprintln!("  Material: {}", result.material.grade);
    eprintln!();
    eprintln!("Demand:");
    eprintln!("  R1    = {:.2} kN", result.reaction_left_n / 1000.0);
    eprintln!("  R2    = {:.2} kN", result.reaction_right_n / 1000.0);
    eprintln!("  M_max = {:.2} kN·m", result.max_moment_nm / 1000.0);
    eprintln!("  δ_max = {:.3} mm", result.max_deflection_mm);
    eprintln!();
    eprintln!("Checks:");
    eprintln!(
        "  Bending:    {:.2} ({:.2}/{:.0} MPa) {}",
        result.stress_check.utilisation,
        result.stress_check.actual_mpa,
        result.stress_check.allowable_mpa,
        status_icon(result.stress_ok)
    );
    eprintln!(
        "  Deflection: {:.2} ({:.3}/{:.3} mm) {}",
        result.deflection_check.utilisation,
        result.deflection_check.actual_mm,
        result.deflection_check.limit_mm,
        status_icon(result.deflection_ok)
    );
    eprintln!();
    let unit = combination_unit(&result.load_case);
    eprintln!("Combinations ({}):", result.limit_state.display_name());
    for combo in &result.combinations {
        eprintln!("  {:<24} {:.2} {}", combo.name, combo.load / 1000.0, unit);
    }
    eprintln!("  Governing: {}", result.governing_combination.name);
    eprintln!();
    eprintln!("═══════════════════════════════════════");
    eprintln!(
        "  RESULT: {} (governs: {}, utilisation {:.2})",
        if result.passes() { "PASS" } else { "FAIL" },
        result.governing_condition(),
        result.governing_utilisation()
    );
    eprintln!("═══════════════════════════════════════");
}

/// Unit of a factored load once scaled to kilo-units
fn combination_unit(load_case: &LoadCase) -> &'static str {
    match load_case {
        LoadCase::PointCenter { .. } | LoadCase::PointAnywhere { .. } => "kN",
        LoadCase::UniformDistributed { .. } | LoadCase::LinearlyVaryingDistributed { .. } => "kN/m",
        LoadCase::AppliedMoment { .. } => "kN·m",
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass {
        "[OK]"
    } else {
        "[FAIL]"
    }
}

fn report_error(err: &CalcError) {
    eprintln!("Error: {}", err);
    if let Ok(json) = serde_json::to_string_pretty(err) {
        eprintln!("{}", json);
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            report_error(&err);
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(result) => {
            if args.summary {
                print_summary(&result);
            }
            match serde_json::to_string_pretty(&result) {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    report_error(&CalcError::from(e));
                    ExitCode::FAILURE
                }
            }
        }
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}
