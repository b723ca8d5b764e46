#![cfg(feature = "cli")]
//! Integration tests for the `unfrm` subcommands.

mod common;

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use common::{orders_table, ColumnDef, FrmBuilder, KeyDef, ORDERS_DDL};
use frm::cli::app::DumpSection;
use frm::cli::{ddl, dump, info, scan};
use frm::FrmError;

fn write_frm(dir: &Path, name: &str, data: &[u8]) -> String {
    let path = dir.join(name);
    fs::write(&path, data).unwrap();
    path.display().to_string()
}

fn run_ddl(file: &str, table: Option<&str>, options: bool, json: bool, mmap: bool) -> Result<String, FrmError> {
    let mut out = Vec::new();
    ddl::execute(
        &ddl::DdlOptions {
            file: file.to_string(),
            table: table.map(str::to_string),
            options,
            json,
            mmap,
        },
        &mut out,
    )?;
    Ok(String::from_utf8(out).unwrap())
}

fn run_scan(datadir: &Path, json: bool, tablespace_script: bool) -> String {
    let mut out = Vec::new();
    scan::execute(
        &scan::ScanOptions {
            datadir: datadir.display().to_string(),
            json,
            tablespace_script,
            depth: None,
            mmap: false,
        },
        &mut out,
    )
    .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn ddl_uses_file_stem_as_table_name() {
    let dir = TempDir::new().unwrap();
    let file = write_frm(dir.path(), "orders.frm", &orders_table().build());
    let output = run_ddl(&file, None, false, false, false).unwrap();
    assert_eq!(output, format!("{};\n", ORDERS_DDL));
}

#[test]
fn ddl_table_override_and_mmap() {
    let dir = TempDir::new().unwrap();
    let file = write_frm(dir.path(), "orders.frm", &orders_table().build());
    let output = run_ddl(&file, Some("orders_restored"), false, false, true).unwrap();
    assert!(output.starts_with("CREATE TABLE `orders_restored`(\n"));
    assert!(output.ends_with(");\n"));
}

#[test]
fn ddl_with_table_options() {
    let dir = TempDir::new().unwrap();
    let file = write_frm(dir.path(), "orders.frm", &orders_table().build());
    let output = run_ddl(&file, None, true, false, false).unwrap();
    assert!(output.ends_with(
        "USING BTREE) ENGINE=InnoDB DEFAULT CHARSET=utf8 COLLATE=utf8_general_ci;\n"
    ));
}

#[test]
fn ddl_json_output() {
    let dir = TempDir::new().unwrap();
    let file = write_frm(dir.path(), "orders.frm", &orders_table().build());
    let output = run_ddl(&file, None, false, true, false).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["table"], "orders");
    assert_eq!(json["ddl"], ORDERS_DDL);
    assert_eq!(json["schema"]["columns"].as_array().unwrap().len(), 4);
}

#[test]
fn ddl_rejects_non_frm_file() {
    let dir = TempDir::new().unwrap();
    let file = write_frm(dir.path(), "junk.frm", b"not a table definition at all, just some text");
    assert!(matches!(
        run_ddl(&file, None, false, false, false),
        Err(FrmError::TooShort { .. })
    ));
    assert!(matches!(
        run_ddl("/nonexistent/t.frm", None, false, false, false),
        Err(FrmError::Io(_))
    ));
}

#[test]
fn info_text_and_json() {
    let dir = TempDir::new().unwrap();
    let file = write_frm(dir.path(), "orders.frm", &orders_table().build());

    let mut out = Vec::new();
    info::execute(
        &info::InfoOptions {
            file: file.clone(),
            json: false,
            mmap: false,
        },
        &mut out,
    )
    .unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("MySQL version:   5.7.26"));
    assert!(text.contains("Engine:          InnoDB"));
    assert!(text.contains("`email` VARCHAR(64)"));
    assert!(text.contains("uk_email"));

    let mut out = Vec::new();
    info::execute(
        &info::InfoOptions {
            file,
            json: true,
            mmap: false,
        },
        &mut out,
    )
    .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["engine"], "InnoDB");
    assert_eq!(json["row_format"], "DEFAULT");
    assert_eq!(json["table_charset"], "utf8");
    assert_eq!(json["columns"][0]["auto_increment"], true);
    assert_eq!(json["keys"][0]["kind"], "PRIMARY KEY");
    assert_eq!(json["keys"][2]["algorithm"], "BTREE");
}

#[test]
fn info_lists_bad_key_reference() {
    let dir = TempDir::new().unwrap();
    let data = FrmBuilder::new()
        .column(ColumnDef::new("a", 3, 11, 63))
        .key(KeyDef::index("broken", vec![(7, 4)]))
        .build();
    let file = write_frm(dir.path(), "broken.frm", &data);

    let mut out = Vec::new();
    info::execute(
        &info::InfoOptions {
            file,
            json: true,
            mmap: false,
        },
        &mut out,
    )
    .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["keys"][0]["columns"][0], "#7");
}

#[test]
fn dump_sections() {
    let dir = TempDir::new().unwrap();
    let file = write_frm(dir.path(), "orders.frm", &orders_table().build());

    let dump_section = |section: DumpSection, length: Option<usize>| {
        let mut out = Vec::new();
        dump::execute(
            &dump::DumpOptions {
                file: file.clone(),
                section,
                length,
                mmap: false,
            },
            &mut out,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    };

    let header = dump_section(DumpSection::Header, None);
    assert!(header.contains("(64 bytes)"));
    assert!(header.contains("00000000  fe 01 0a 0c"));

    let keys = dump_section(DumpSection::Keys, Some(16));
    assert!(keys.contains("4096 (0x1000)"));
    assert!(keys.contains("00001000  03 03"));

    let columns = dump_section(DumpSection::Columns, Some(32));
    assert!(columns.contains("(32 bytes)"));
}

#[test]
fn scan_datadir_skips_bad_files() {
    let dir = TempDir::new().unwrap();
    let shop = dir.path().join("shop");
    fs::create_dir(&shop).unwrap();
    write_frm(&shop, "orders.frm", &orders_table().build());
    write_frm(&shop, "broken.frm", b"garbage");
    write_frm(&shop, "orders.ibd", b"not scanned");

    let output = run_scan(dir.path(), false, false);
    assert!(output.contains("-- shop/orders.frm\n"));
    assert!(output.contains(&format!("{};\n", ORDERS_DDL)));
    assert!(!output.contains("broken"));

    let json: serde_json::Value = serde_json::from_str(&run_scan(dir.path(), true, false)).unwrap();
    assert_eq!(json["files_scanned"], 2);
    assert_eq!(json["tables_decoded"], 1);
    assert_eq!(json["files_failed"], 1);
    assert_eq!(json["tables"][0]["database"], "shop");
    assert_eq!(json["failures"][0]["file"], "shop/broken.frm");
}

#[test]
fn scan_tablespace_script() {
    let dir = TempDir::new().unwrap();
    let shop = dir.path().join("shop");
    fs::create_dir(&shop).unwrap();
    write_frm(&shop, "orders.frm", &orders_table().build());
    let items = FrmBuilder::new()
        .column(ColumnDef::new("sku", 15, 96, 33).not_null())
        .key(KeyDef::primary(vec![(1, 96)]))
        .build();
    write_frm(&shop, "items.frm", &items);

    let output = run_scan(dir.path(), false, true);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "USE `shop`;");

    let discard_items = output.find("ALTER TABLE `items` DISCARD TABLESPACE;").unwrap();
    let discard_orders = output.find("ALTER TABLE `orders` DISCARD TABLESPACE;").unwrap();
    let import_items = output.find("ALTER TABLE `items` IMPORT TABLESPACE;").unwrap();
    let import_orders = output.find("ALTER TABLE `orders` IMPORT TABLESPACE;").unwrap();
    assert!(discard_items < discard_orders);
    assert!(discard_orders < import_items);
    assert!(import_items < import_orders);
    assert!(output.contains("CREATE TABLE `items`(\n`sku` VARCHAR(32) CHARSET utf8 COLLATE utf8_general_ci NOT NULL,\nPRIMARY KEY(`sku`(32)));"));
}

#[test]
fn scan_empty_and_missing_dir() {
    let dir = TempDir::new().unwrap();
    let output = run_scan(dir.path(), false, false);
    assert!(output.contains("No .frm files found"));

    let mut out = Vec::new();
    let result = scan::execute(
        &scan::ScanOptions {
            datadir: "/nonexistent/datadir".to_string(),
            json: false,
            tablespace_script: false,
            depth: None,
            mmap: false,
        },
        &mut out,
    );
    assert!(matches!(result, Err(FrmError::Argument(_))));
}
