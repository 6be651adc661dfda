//! `nextstep_cli`: command-line front end over the engine.

pub mod output;

use std::{env, path::PathBuf};

use crate::config::{ConfigManager, EngineConfig};
use crate::core::advice::{career_advice_or_fallback, reality_check_or_fallback};
use crate::core::services::{KeywordMatch, ResumeService};
use crate::core::{Engine, OfflineAdvisor};
use crate::currency::{format_currency, format_percent};
use crate::dataset::Dataset;
use crate::domain::{CityOutlook, Displayable, LifestyleTier, UserProfile};
use crate::errors::{NextStepError, NextStepResult};
use crate::resume::PlainTextExtractor;
use crate::utils::paths;

const USAGE: &str = "Usage: nextstep_cli <command> [options]\n\
Commands:\n  \
categories\n  \
cities <category> [--top N]\n  \
budget <category> <city>\n  \
match <category> <resume.txt>\n  \
advice <category> <city> [--resume <resume.txt>]\n  \
config\n\
Options:\n  \
--debt <amount>        student loan balance (default 0)\n  \
--lifestyle <tier>     Frugal | Balanced | Boujee (default Balanced)\n  \
--data <salaries.csv>  salary table replacing the built-in data\n  \
--json                 print results as JSON\n  \
--plain                disable colours";

#[derive(Debug, Default)]
struct Options {
    debt: f64,
    lifestyle: LifestyleTier,
    top: Option<usize>,
    data: Option<PathBuf>,
    resume: Option<PathBuf>,
    json: bool,
    plain: bool,
}

fn parse_args(args: Vec<String>) -> NextStepResult<(Vec<String>, Options)> {
    let mut positionals = Vec::new();
    let mut options = Options::default();
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .ok_or_else(|| NextStepError::InvalidInput(format!("{flag} needs a value")))
        };
        match arg.as_str() {
            "--debt" => {
                let raw = value("--debt")?;
                options.debt = parse_amount(&raw)?;
            }
            "--lifestyle" => {
                options.lifestyle = LifestyleTier::parse_lenient(&value("--lifestyle")?);
            }
            "--top" => {
                let raw = value("--top")?;
                let top = raw.parse::<usize>().map_err(|_| {
                    NextStepError::InvalidInput(format!("--top expects a count, got `{raw}`"))
                })?;
                options.top = Some(top);
            }
            "--data" => options.data = Some(PathBuf::from(value("--data")?)),
            "--resume" => options.resume = Some(PathBuf::from(value("--resume")?)),
            "--json" => options.json = true,
            "--plain" => options.plain = true,
            flag if flag.starts_with("--") => {
                return Err(NextStepError::InvalidInput(format!("unknown option `{flag}`")));
            }
            other => positionals.push(other.to_string()),
        }
    }
    Ok((positionals, options))
}

fn parse_amount(raw: &str) -> NextStepResult<f64> {
    let cleaned = raw.replace([',', '$', '_'], "");
    match cleaned.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(amount),
        _ => Err(NextStepError::InvalidInput(format!(
            "`{raw}` is not a non-negative amount"
        ))),
    }
}

/// Entry point used by the binary.
pub fn run_cli() -> NextStepResult<()> {
    run(env::args().skip(1).collect())
}

pub fn run(args: Vec<String>) -> NextStepResult<()> {
    let (positionals, options) = parse_args(args)?;
    output::set_preferences(output::OutputPreferences {
        plain: options.plain || env::var_os("NO_COLOR").is_some(),
    });

    let Some((command, rest)) = positionals.split_first() else {
        println!("{USAGE}");
        return Ok(());
    };

    let config = ConfigManager::new().load_or_default();
    let dataset_path = options
        .data
        .clone()
        .or_else(|| config.dataset_path.clone())
        .or_else(|| Some(paths::default_salaries_csv()).filter(|path| path.exists()));
    let dataset = Dataset::load_or_builtin(dataset_path.as_deref());
    let engine = Engine::new(config, &dataset);

    match (command.as_str(), rest) {
        ("categories", []) => categories(&engine, &options),
        ("cities", [category]) => cities(&engine, category, &options),
        ("budget", [category, city]) => budget(&engine, category, city, &options),
        ("match", [category, resume]) => {
            let gap = engine.resume_gap(
                &resolve_category(&engine, category)?,
                &PlainTextExtractor,
                &PathBuf::from(resume),
            );
            print_gap(category, &gap, &options)
        }
        ("advice", [category, city]) => advice(&engine, category, city, &options),
        ("config", []) => print_config(engine.config()),
        ("help", _) => {
            println!("{USAGE}");
            Ok(())
        }
        _ => Err(NextStepError::InvalidInput(format!(
            "unrecognised command `{}`\n{USAGE}",
            positionals.join(" ")
        ))),
    }
}

/// Canonical category name, or an error suggesting the closest known one.
fn resolve_category(engine: &Engine<'_>, requested: &str) -> NextStepResult<String> {
    let categories = engine.dataset().categories();
    if let Some(found) = categories
        .iter()
        .find(|name| name.eq_ignore_ascii_case(requested.trim()))
    {
        return Ok(found.to_string());
    }
    let suggestion = categories
        .iter()
        .map(|name| {
            (
                strsim::normalized_levenshtein(&name.to_lowercase(), &requested.to_lowercase()),
                name,
            )
        })
        .filter(|(similarity, _)| *similarity > 0.5)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, name)| format!(" (did you mean `{name}`?)"))
        .unwrap_or_default();
    Err(NextStepError::InvalidInput(format!(
        "unknown category `{requested}`{suggestion}"
    )))
}

fn categories(engine: &Engine<'_>, options: &Options) -> NextStepResult<()> {
    let categories = engine.dataset().categories();
    if options.json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
        return Ok(());
    }
    output::section("Career categories");
    for category in categories {
        output::info(format!("  {category}"));
    }
    Ok(())
}

fn cities(engine: &Engine<'_>, category: &str, options: &Options) -> NextStepResult<()> {
    let category = resolve_category(engine, category)?;
    let mut ranked = engine.rank_cities(&category, options.debt, options.lifestyle);
    if let Some(top) = options.top {
        ranked.truncate(top);
    }
    if options.json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    output::section(format!("Where can a {category} thrive?"));
    if let Some(best) = ranked.first() {
        output::success(format!("Top city match: {}, {}", best.city, best.state));
    }
    for (rank, outlook) in ranked.iter().enumerate() {
        output::info(format!(
            "{:>3}. {:<18} {:<3} {:>10}/mo  save {:>9}/mo  5y {:>10}  {}",
            rank + 1,
            outlook.city,
            outlook.state,
            format_currency(outlook.net_monthly),
            format_currency(outlook.breakdown.savings),
            format_currency(outlook.five_year_wealth),
            output::score_text(outlook.thriving_score),
        ));
    }
    Ok(())
}

fn evaluate(
    engine: &Engine<'_>,
    category: &str,
    city: &str,
    options: &Options,
) -> NextStepResult<(UserProfile, CityOutlook)> {
    let category = resolve_category(engine, category)?;
    let profile = UserProfile::new(category, city, options.debt, options.lifestyle);
    let outlook = engine.evaluate(&profile).ok_or_else(|| {
        NextStepError::InvalidInput(format!(
            "no salary data for {} in {}",
            profile.category, profile.city
        ))
    })?;
    Ok((profile, outlook))
}

fn budget(
    engine: &Engine<'_>,
    category: &str,
    city: &str,
    options: &Options,
) -> NextStepResult<()> {
    let (profile, outlook) = evaluate(engine, category, city, options)?;
    if options.json {
        println!("{}", serde_json::to_string_pretty(&outlook)?);
        return Ok(());
    }

    output::section(outlook_title(&outlook));
    output::detail("Lifestyle", profile.lifestyle);
    output::detail("Gross salary", format_currency(outlook.gross_salary));
    output::detail("Take-home", monthly(outlook.net_monthly));
    output::detail("Taxes", monthly(outlook.breakdown.taxes));
    match outlook.breakdown.rent {
        rent if rent > 0.0 => output::detail(
            "Rent",
            format!(
                "{}/mo ({} of take-home)",
                format_currency(rent),
                format_percent(outlook.rent_burden())
            ),
        ),
        _ => output::detail("Rent", "unknown"),
    }
    output::detail("Loan payment", monthly(outlook.breakdown.loan_payment));
    output::detail("Lifestyle cost", monthly(outlook.breakdown.lifestyle_cost));
    if outlook.breakdown.is_deficit() {
        output::warning(format!(
            "Monthly deficit of {}",
            format_currency(-outlook.breakdown.savings)
        ));
    } else {
        output::detail("Savings", monthly(outlook.breakdown.savings));
    }
    output::detail("Thriving score", output::score_text(outlook.thriving_score));
    output::detail("5-year wealth", format_currency(outlook.five_year_wealth));
    match outlook.coordinates {
        Some(point) => output::detail("Map", format!("{:.2}, {:.2}", point.lat, point.lon)),
        None => output::detail("Map", "coordinates unavailable"),
    }
    Ok(())
}

fn monthly(amount: f64) -> String {
    format!("{}/mo", format_currency(amount))
}

fn outlook_title(outlook: &CityOutlook) -> String {
    if outlook.state.is_empty() {
        format!("{} in {}", outlook.category, outlook.city)
    } else {
        format!("{} in {}, {}", outlook.category, outlook.city, outlook.state)
    }
}

fn print_gap(category: &str, gap: &KeywordMatch, options: &Options) -> NextStepResult<()> {
    if options.json {
        println!("{}", serde_json::to_string_pretty(gap)?);
        return Ok(());
    }
    output::section(format!("Resume match for {category}"));
    output::detail("Match", format!("{:.0}%", gap.match_percentage));
    output::detail("Found", gap.found.join(", "));
    output::detail("Missing", gap.missing.join(", "));
    Ok(())
}

fn advice(
    engine: &Engine<'_>,
    category: &str,
    city: &str,
    options: &Options,
) -> NextStepResult<()> {
    let (profile, outlook) = evaluate(engine, category, city, options)?;
    let advisor = OfflineAdvisor;
    let reality = reality_check_or_fallback(&advisor, &outlook, &profile);
    let gap = match &options.resume {
        Some(path) => engine.resume_gap(&profile.category, &PlainTextExtractor, path),
        None => ResumeService::match_category("", &profile.category),
    };
    let career = career_advice_or_fallback(&advisor, &profile.category, &outlook.city, &gap);

    if options.json {
        let body = serde_json::json!({
            "reality_check": reality,
            "career_advice": career,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }
    output::section(format!("Reality check: {}", profile.display_label()));
    output::info(reality);
    output::section("Career coach");
    output::info(career);
    Ok(())
}

fn print_config(config: &EngineConfig) -> NextStepResult<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn options_are_separated_from_positionals() {
        let (positionals, options) = parse_args(args(&[
            "budget",
            "--debt",
            "30,000",
            "Software Engineer",
            "--lifestyle",
            "frugal",
            "Austin",
        ]))
        .unwrap();
        assert_eq!(positionals, vec!["budget", "Software Engineer", "Austin"]);
        assert_eq!(options.debt, 30_000.0);
        assert_eq!(options.lifestyle, LifestyleTier::Frugal);
    }

    #[test]
    fn bad_options_are_rejected() {
        assert!(parse_args(args(&["--debt"])).is_err());
        assert!(parse_args(args(&["--debt", "-5"])).is_err());
        assert!(parse_args(args(&["--top", "many"])).is_err());
        assert!(parse_args(args(&["--verbose"])).is_err());
    }

    #[test]
    fn close_category_names_get_a_suggestion() {
        let engine = Engine::builtin();
        let err = resolve_category(&engine, "Data Scientst").unwrap_err();
        assert!(err.to_string().contains("did you mean `Data Scientist`"), "{err}");
        assert_eq!(resolve_category(&engine, "ux designer").unwrap(), "UX Designer");
    }
}
