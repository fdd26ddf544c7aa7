//! Integration tests for project renaming

mod common;

use common::{context_for, create_empty_project, create_test_project, read, write};
use staco::commands::{rename_project, RenameReport, StepOutcome};
use staco::error::UsageError;
use staco::StacoError;

#[test]
fn test_rename_stock_project() {
    let project = create_test_project();
    let ctx = context_for(project.path());

    let report = rename_project(&ctx, Some("Blog")).unwrap();

    assert_eq!(
        report,
        RenameReport {
            index_html: StepOutcome::Updated,
            base_path: StepOutcome::Updated,
            readme: StepOutcome::Updated,
        }
    );
    assert!(read(project.path(), "index.html").contains("<title>Blog</title>"));
    let base_path = read(project.path(), "config/base-path.js");
    assert!(base_path.contains("return '/Blog/';"));
    assert!(base_path.contains("pathname.startsWith('/Blog')"));
    assert!(read(project.path(), "README.md").starts_with("# Blog\n"));
}

#[test]
fn test_rename_title_with_whitespace() {
    let project = create_empty_project();
    write(
        project.path(),
        "index.html",
        "<head><title>  Old  </title></head>\n<title>Second</title>\n",
    );
    let ctx = context_for(project.path());

    rename_project(&ctx, Some("NewName")).unwrap();

    assert_eq!(
        read(project.path(), "index.html"),
        "<head><title>NewName</title></head>\n<title>Second</title>\n"
    );
}

#[test]
fn test_rename_customized_base_path_is_untouched() {
    let project = create_test_project();
    let custom = "export const BASE = '/my-site/';\n";
    write(project.path(), "config/base-path.js", custom);
    let ctx = context_for(project.path());

    let report = rename_project(&ctx, Some("Blog")).unwrap();

    assert_eq!(report.base_path, StepOutcome::Skipped);
    assert_eq!(report.index_html, StepOutcome::Updated);
    assert_eq!(report.readme, StepOutcome::Updated);
    assert_eq!(read(project.path(), "config/base-path.js"), custom);
}

#[test]
fn test_rename_with_missing_files() {
    let project = create_empty_project();
    write(project.path(), "README.md", "# Staco\n");
    let ctx = context_for(project.path());

    let report = rename_project(&ctx, Some("Blog")).unwrap();

    assert_eq!(report.index_html, StepOutcome::Missing);
    assert_eq!(report.base_path, StepOutcome::Missing);
    assert_eq!(report.readme, StepOutcome::Updated);
    assert!(!project.path().join("index.html").exists());
    assert!(!project.path().join("config").exists());
}

#[test]
fn test_rename_readme_with_other_heading() {
    let project = create_test_project();
    write(project.path(), "README.md", "# Something Else\n");
    let ctx = context_for(project.path());

    let report = rename_project(&ctx, Some("Blog")).unwrap();

    assert_eq!(report.readme, StepOutcome::Skipped);
    assert_eq!(read(project.path(), "README.md"), "# Something Else\n");
}

#[test]
fn test_rename_twice() {
    let project = create_test_project();
    let ctx = context_for(project.path());

    rename_project(&ctx, Some("First")).unwrap();
    let report = rename_project(&ctx, Some("Second")).unwrap();

    // the title is always rewritten; the stock literals are gone after the first run
    assert_eq!(report.index_html, StepOutcome::Updated);
    assert_eq!(report.base_path, StepOutcome::Skipped);
    assert_eq!(report.readme, StepOutcome::Skipped);
    assert!(read(project.path(), "index.html").contains("<title>Second</title>"));
    assert!(read(project.path(), "config/base-path.js").contains("return '/First/';"));
}

#[test]
fn test_rename_without_name_writes_nothing() {
    let project = create_test_project();
    let ctx = context_for(project.path());

    for name in [None, Some("")] {
        let err = rename_project(&ctx, name).unwrap_err();
        assert!(matches!(err, StacoError::Usage(UsageError::MissingProjectName)));
    }

    assert_eq!(read(project.path(), "index.html"), common::INDEX_HTML);
    assert_eq!(read(project.path(), "config/base-path.js"), common::BASE_PATH_JS);
    assert_eq!(read(project.path(), "README.md"), common::README_MD);
}

#[test]
fn test_rename_non_utf8_index_does_not_block_other_files() {
    let project = create_test_project();
    let index = project.path().join("index.html");
    std::fs::write(&index, b"<title>\xc3\x28</title>").unwrap();
    let ctx = context_for(project.path());

    let report = rename_project(&ctx, Some("Blog")).unwrap();

    assert_eq!(report.index_html, StepOutcome::Unreadable);
    assert_eq!(report.base_path, StepOutcome::Updated);
    assert_eq!(report.readme, StepOutcome::Updated);
    assert_eq!(std::fs::read(&index).unwrap(), b"<title>\xc3\x28</title>");
}
