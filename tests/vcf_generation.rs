//! End-to-end tests: YAML schema → parts → VCF file.

use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use vcf_factory::{
    build_vcf_data, run_generate, run_parts, run_remove, VcfData, VcfPopulator, VcfRenderer,
    VcfSchema,
};
use vcf_populate::{VcfPopulateArgs, VcfRemoveArgs};

const PART_LINES: usize = 100;
const PARTS: usize = 5;
const INFO_FIELDS: usize = 16;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/vcf_schema.yaml")
}

fn load_fixture() -> VcfSchema {
    VcfSchema::from_file(fixture_path()).unwrap()
}

fn generate_fixture(seed: u64) -> VcfData {
    let schema = load_fixture();
    let mut data = build_vcf_data(&schema, Some(seed), None).unwrap();
    run_parts(&mut data, &schema).unwrap();
    data
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
}

/// Data lines split into cells.
fn data_cells(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .filter(|line| !line.starts_with('#'))
        .map(|line| line.split('\t').map(str::to_string).collect())
        .collect()
}

fn info_value<'a>(info: &'a str, key: &str) -> &'a str {
    info.split(';')
        .find_map(|pair| pair.strip_prefix(key).and_then(|rest| rest.strip_prefix('=')))
        .unwrap_or_else(|| panic!("INFO key {key} missing in {info}"))
}

#[test]
fn test_fixture_loads() {
    let schema = load_fixture();
    assert_eq!(schema.mandatory.len(), 7);
    assert_eq!(schema.info.len(), INFO_FIELDS);
    assert_eq!(schema.effective_parts().len(), PARTS);
}

#[test]
fn test_five_part_scenario_layout() {
    let data = generate_fixture(42);
    assert_eq!(data.len(), PART_LINES * PARTS);

    let text = VcfRenderer::new(&data).with_file_date(date()).render();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2 + INFO_FIELDS + 1 + PART_LINES * PARTS);
    assert_eq!(lines[0], "##fileformat=VCFv4.1");
    assert_eq!(lines[1], "##fileDate=20240131");
    assert_eq!(lines[2 + INFO_FIELDS], "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO");

    let declared: Vec<&str> = lines[2..2 + INFO_FIELDS]
        .iter()
        .map(|line| {
            line.strip_prefix("##INFO=<ID=")
                .and_then(|rest| rest.split(',').next())
                .unwrap()
        })
        .collect();
    let mut sorted = declared.clone();
    sorted.sort();
    assert_eq!(declared, sorted);

    assert!(lines.contains(
        &"##INFO=<ID=OID,Number=.,Type=String,Description=\"List of original Hotspot IDs\">"
    ));
    assert!(lines.contains(
        &"##INFO=<ID=AO,Number=A,Type=Integer,Description=\"Alternate allele observations\">"
    ));
    assert!(lines.contains(
        &"##INFO=<ID=HS,Number=0,Type=Flag,Description=\"Indicate it is at a hot spot\">"
    ));
}

#[test]
fn test_five_part_scenario_rules() {
    let data = generate_fixture(42);
    let text = VcfRenderer::new(&data).with_file_date(date()).render();
    let rows = data_cells(&text);
    assert_eq!(rows.len(), PART_LINES * PARTS);

    for (i, row) in rows.iter().enumerate() {
        let part = i / PART_LINES;
        assert_eq!(row.len(), 8);
        assert_eq!(row[0], "1");
        assert_eq!(row[1], (100000 + i).to_string());
        assert_eq!(row[2], ".");
        assert_ne!(row[3], row[4]);
        assert_eq!(row[6], "PASS");

        let qual: f64 = row[5].parse().unwrap();
        if part < 2 {
            assert!((200.0..=599.9).contains(&qual), "row {i}: QUAL {qual}");
        } else {
            assert!((600.0..=900.0).contains(&qual), "row {i}: QUAL {qual}");
        }

        let info = &row[7];
        let hrun: i64 = info_value(info, "HRUN").parse().unwrap();
        if part < 1 {
            assert!([1, 2, 4].contains(&hrun));
        } else {
            assert!([3, 5, 7].contains(&hrun));
        }

        let fxx = info_value(info, "FXX");
        if part < 3 {
            let v: f64 = fxx.parse().unwrap();
            assert!((0.0..=0.1).contains(&v));
        } else {
            let items: Vec<f64> = fxx.split(',').map(|s| s.parse().unwrap()).collect();
            assert_eq!(items.len(), 3);
            assert!(items.iter().all(|v| (0.11..=0.5).contains(v)));
        }

        let fr = info_value(info, "FR");
        if part < 4 {
            assert_eq!(fr, "LITTLE_REASON#1");
        } else {
            assert_eq!(fr, "SMALL_REASON#2");
        }

        assert_eq!(info_value(info, "HS"), "");
        assert_eq!(info_value(info, "LEN"), "1");
        let dp: i64 = info_value(info, "DP").parse().unwrap();
        assert!((10..=200).contains(&dp));
    }
}

#[test]
fn test_same_seed_same_output() {
    let a = generate_fixture(7);
    let b = generate_fixture(7);
    let render = |data: &VcfData| VcfRenderer::new(data).with_file_date(date()).render();
    assert_eq!(render(&a), render(&b));
}

#[test]
fn test_populator_writes_rendered_text() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("test.vcf");
    let data = generate_fixture(42);

    let metrics = VcfPopulator::new()
        .with_file_date(date())
        .write(&data, &path)
        .unwrap();

    assert_eq!(metrics.rows_written, (PART_LINES * PARTS) as u64);
    assert_eq!(metrics.info_fields, INFO_FIELDS);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        VcfRenderer::new(&data).with_file_date(date()).render()
    );
}

fn generate_args(dir: &TempDir) -> VcfPopulateArgs {
    VcfPopulateArgs {
        schema: fixture_path(),
        output: dir.path().join("out.vcf"),
        seed: Some(42),
        lines: Some(10),
        rows_json: Some(dir.path().join("rows.json")),
        dry_run: false,
    }
}

#[test]
fn test_generate_and_remove_commands() {
    let dir = TempDir::new().unwrap();
    let args = generate_args(&dir);

    let metrics = run_generate(&args).unwrap().unwrap();
    assert_eq!(metrics.rows_written, 10 * PARTS as u64);

    let text = fs::read_to_string(&args.output).unwrap();
    assert_eq!(data_cells(&text).len(), 10 * PARTS);

    let rows: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("rows.json")).unwrap()).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 10 * PARTS);
    assert_eq!(rows[0]["POS"], 100000);
    assert_eq!(rows[0]["INFO"]["FR"], "LITTLE_REASON#1");
    assert_eq!(rows[10 * PARTS - 1]["INFO"]["FR"], "SMALL_REASON#2");

    let remove = VcfRemoveArgs {
        output: args.output.clone(),
    };
    run_remove(&remove).unwrap();
    assert!(!args.output.exists());
    // removing again is a no-op
    run_remove(&remove).unwrap();
}

#[test]
fn test_generate_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let args = VcfPopulateArgs {
        dry_run: true,
        ..generate_args(&dir)
    };

    assert!(run_generate(&args).unwrap().is_none());
    assert!(!args.output.exists());
    assert!(!dir.path().join("rows.json").exists());
}

#[test]
fn test_generate_missing_schema() {
    let dir = TempDir::new().unwrap();
    let args = VcfPopulateArgs {
        schema: dir.path().join("missing.yaml"),
        ..generate_args(&dir)
    };

    let err = run_generate(&args).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to load schema"));
}
