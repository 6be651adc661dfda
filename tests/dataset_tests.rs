mod common;

use common::write_file;
use nextstep_core::{
    config::EngineConfig,
    dataset::{Dataset, SalaryEstimator, FALLBACK_SALARY},
    domain::LifestyleTier,
    resume::PlainTextExtractor,
    Engine,
};

#[test]
fn csv_table_replaces_builtin_rows() {
    let path = write_file(
        "salaries.csv",
        "Category,City,Salary\n\
         Data Scientist,San Francisco,145000\n\
         Cybersecurity Analyst,Austin,95000\n\
         Software Engineer,Seattle,130000\n\
         Machine Learning Engineer,Boston,155000\n\
         Cloud Architect,Denver,125000\n",
    );
    let dataset = Dataset::load_or_builtin(Some(path.as_path()));
    assert_eq!(dataset.rows().len(), 5);
    assert!(dataset.categories().contains(&"Cloud Architect"));

    let engine = Engine::new(EngineConfig::default(), &dataset);
    let ranked = engine.rank_cities("Machine Learning Engineer", 0.0, LifestyleTier::Balanced);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].state, "MA");
    assert_eq!(ranked[0].breakdown.rent, 2700.0);
}

#[test]
fn repeated_city_rows_collapse_to_mean_salary() {
    let path = write_file(
        "variations.csv",
        "Category,City,Salary\n\
         Data Scientist,Austin,90000\n\
         Data Scientist,Austin,150000\n\
         Data Scientist,Denver,100000\n",
    );
    let dataset = Dataset::load_or_builtin(Some(path.as_path()));
    let engine = Engine::new(EngineConfig::default(), &dataset);

    let ranked = engine.rank_cities("Data Scientist", 0.0, LifestyleTier::Balanced);
    assert_eq!(ranked.len(), 2);
    let austin = ranked.iter().find(|outlook| outlook.city == "Austin").unwrap();
    assert_eq!(austin.gross_salary, 120_000.0);

    let row = dataset.row("Data Scientist", "Austin").unwrap();
    assert_eq!(row.salary, austin.gross_salary);
}

#[test]
fn header_only_table_falls_back_to_builtin() {
    let path = write_file("empty.csv", "Category,City,Salary\n");
    let dataset = Dataset::load_or_builtin(Some(path.as_path()));
    assert_eq!(dataset.rows().len(), Dataset::builtin().rows().len());
}

#[test]
fn malformed_table_is_an_error_but_loader_degrades() {
    let path = write_file("broken.csv", "Town,Pay\nAustin,1\n");
    assert!(Dataset::from_csv_path(&path).is_err());
    assert!(!Dataset::load_or_builtin(Some(path.as_path())).is_empty());
}

#[test]
fn estimator_uses_dataset_then_fallback() {
    let estimator = SalaryEstimator::new(Dataset::builtin());
    assert!(estimator.estimate("Product Manager", "CA") > FALLBACK_SALARY);
    assert_eq!(estimator.estimate("Marine Biologist", "CA"), FALLBACK_SALARY);
}

#[test]
fn resume_gap_reads_text_files() {
    let resume = write_file("resume.txt", "Built dashboards in Tableau with Python and SQL.");
    let engine = Engine::builtin();
    let gap = engine.resume_gap("Data Scientist", &PlainTextExtractor, &resume);
    assert_eq!(gap.found, vec!["Python", "SQL", "Tableau"]);
    assert_eq!(gap.total(), 10);
    assert!((gap.match_percentage - 30.0).abs() < 1e-9);
}

#[test]
fn resume_gap_survives_missing_file() {
    let engine = Engine::builtin();
    let gap = engine.resume_gap(
        "Data Scientist",
        &PlainTextExtractor,
        std::path::Path::new("/no/such/resume.pdf"),
    );
    assert!(gap.found.is_empty());
    assert_eq!(gap.missing.len(), 10);
    assert_eq!(gap.match_percentage, 0.0);
}
