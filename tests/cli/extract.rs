use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const CATALOG: &str = "en.lproj/C3PRO.strings";

#[test]
fn test_known_and_new_strings() -> Result<()> {
    let test = CliTest::with_file(
        "Sources/Consent/ConsentController.swift",
        r#"
let title = "1 Hello".c3_localized
let detail = "2 Hello (World)".c3_localized
"#,
    )?;
    test.write_file(CATALOG, "\"1 Hello\" = \"1 Bonjour\";\n")?;

    let output = test.output(&[])?;
    assert!(output.status.success());
    assert_snapshot!(stdout(&output), @r#"
    "1 Hello" = "1 Bonjour";
    "2 Hello (World)" = "2 Hello (World)";
    "#);
    assert_eq!(stderr(&output), "");

    Ok(())
}

#[test]
fn test_duplicates_across_files_collapse() -> Result<()> {
    let test = CliTest::with_file(
        "Sources/Consent/A.swift",
        r#"let a = "Hello".c3_localized"#,
    )?;
    test.write_file("Sources/Identity/B.swift", r#"let b = "Hello".c3_localized"#)?;
    test.write_file(CATALOG, "")?;

    let output = test.output(&[])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "\"Hello\" = \"Hello\";\n");

    Ok(())
}

#[test]
fn test_case_insensitive_order() -> Result<()> {
    let test = CliTest::with_file(
        "Sources/Fruit/Fruit.swift",
        r#"
let c = "cherry".c3_localized
let a = "banana".c3_localized
let b = "Apple".c3_localized
"#,
    )?;
    test.write_file(CATALOG, "\"banana\" = \"Banane\";\n")?;

    let output = test.output(&[])?;
    assert_snapshot!(stdout(&output), @r#"
    "Apple" = "Apple";
    "banana" = "Banane";
    "cherry" = "cherry";
    "#);

    Ok(())
}

#[test]
fn test_only_two_level_swift_files_are_scanned() -> Result<()> {
    let test = CliTest::with_file("Sources/Top.swift", r#""Top".c3_localized"#)?;
    test.write_file("Sources/A/Deep/Deep.swift", r#""Deep".c3_localized"#)?;
    test.write_file("Sources/A/Notes.txt", r#""Notes".c3_localized"#)?;
    test.write_file("Classes/A/Other.swift", r#""Other".c3_localized"#)?;
    test.write_file("Sources/A/Scanned.swift", r#""Scanned".c3_localized"#)?;
    test.write_file(CATALOG, "")?;

    let output = test.output(&[])?;
    assert_eq!(stdout(&output), "\"Scanned\" = \"Scanned\";\n");

    Ok(())
}

#[test]
fn test_reference_language_argument() -> Result<()> {
    let test = CliTest::with_file("Sources/A/A.swift", r#""Hello".c3_localized"#)?;
    test.write_file(CATALOG, "\"Hello\" = \"Hello\";\n")?;
    test.write_file("fr.lproj/C3PRO.strings", "\"Hello\" = \"Bonjour\";\n")?;

    let output = test.output(&["fr"])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "\"Hello\" = \"Bonjour\";\n");

    Ok(())
}

#[test]
fn test_malformed_catalog_lines_are_ignored() -> Result<()> {
    let test = CliTest::with_file(
        "Sources/A/A.swift",
        r#"f("Hello".c3_localized, "Bye".c3_localized)"#,
    )?;
    test.write_file(
        CATALOG,
        r#"/* Greetings */
"Hello"="Bonjour";

   "Bye" = "Au revoir";
"#,
    )?;

    let output = test.output(&[])?;
    assert!(output.status.success());
    assert_snapshot!(stdout(&output), @r#"
    "Bye" = "Au revoir";
    "Hello" = "Hello";
    "#);
    assert_eq!(stderr(&output), "");

    Ok(())
}

#[test]
fn test_missing_catalog_fails() -> Result<()> {
    let test = CliTest::with_file("Sources/A/A.swift", r#""Hello".c3_localized"#)?;

    let output = test.output(&["de"])?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "");

    let stderr = stderr(&output);
    assert!(stderr.starts_with("Error: Failed to read catalog file"));
    assert!(stderr.contains("de.lproj/C3PRO.strings"));

    Ok(())
}

#[test]
fn test_unreadable_source_fails() -> Result<()> {
    let test = CliTest::new()?;
    std::fs::create_dir_all(test.root().join("Sources/A"))?;
    std::fs::write(test.root().join("Sources/A/Bad.swift"), [0xff_u8, 0xfe, 0x00])?;
    test.write_file(CATALOG, "")?;

    let output = test.output(&[])?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("Failed to read source file"));

    Ok(())
}

#[test]
fn test_verbose_summary() -> Result<()> {
    let test = CliTest::with_file(
        "Sources/A/A.swift",
        r#"f("Hello".c3_localized, "Bye".c3_localized)"#,
    )?;
    test.write_file(CATALOG, "/* Greetings */\n\"Hello\" = \"Bonjour\";\n")?;

    let output = test.output(&["-v"])?;
    assert!(output.status.success());
    assert_snapshot!(stdout(&output), @r#"
    "Bye" = "Bye";
    "Hello" = "Bonjour";
    "#);

    let stderr = stderr(&output);
    assert!(stderr.contains("warning: skipped line that is not a catalog entry"));
    assert!(stderr.contains("en.lproj/C3PRO.strings:1"));
    assert!(stderr.contains("Scanned 1 source file, found 2 strings (1 new)"));
    assert!(stderr.contains("has 1 entry"));

    Ok(())
}

#[test]
fn test_verbose_warns_without_sources() -> Result<()> {
    let test = CliTest::with_file(CATALOG, "\"Hello\" = \"Bonjour\";\n")?;

    let output = test.output(&["--verbose"])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("warning: no source files matched \"Sources/*/*.swift\""));

    Ok(())
}

#[test]
fn test_too_many_arguments() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.output(&["en", "fr"])?;
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");

    Ok(())
}

#[test]
fn test_directory_matching_source_glob_fails() -> Result<()> {
    let test = CliTest::with_file("Sources/A/A.swift", r#""Hello".c3_localized"#)?;
    std::fs::create_dir_all(test.root().join("Sources/A/Generated.swift"))?;
    test.write_file(CATALOG, "")?;

    let output = test.output(&[])?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("Failed to read source file"));
    assert!(stderr(&output).contains("Generated.swift"));

    Ok(())
}

#[test]
fn test_carriage_return_catalog() -> Result<()> {
    let test = CliTest::with_file(
        "Sources/A/A.swift",
        r#"f("Hello".c3_localized, "Bye".c3_localized)"#,
    )?;
    test.write_file(CATALOG, "\"Hello\" = \"Bonjour\";\r\"Bye\" = \"Salut\";\r")?;

    let output = test.output(&[])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "\"Bye\" = \"Salut\";\n\"Hello\" = \"Bonjour\";\n");

    Ok(())
}
