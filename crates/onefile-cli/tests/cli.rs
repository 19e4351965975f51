//! Integration tests driving the CLI code path against a real dist dir.

use std::fs;
use std::path::Path;

use clap::Parser;
use onefile_cli::{cli::Cli, run::run};

fn seed_dist(dir: &Path) {
    fs::write(
        dir.join("index.html"),
        "<!DOCTYPE html>\n<html>\n<head>\n<link rel=\"stylesheet\" href=\"main.css\">\n</head>\n<body>\n<script type=\"module\" crossorigin src=\"./main.js\"></script>\n</body>\n</html>\n",
    )
    .unwrap();
    fs::write(dir.join("main.js"), "console.log(1)").unwrap();
    fs::write(dir.join("main.css"), "body{color:red}").unwrap();
    fs::write(dir.join("favicon.ico"), [0u8, 159, 146, 150]).unwrap();
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn default_run_rewrites_page_and_deletes_assets() {
    let dir = tempfile::tempdir().unwrap();
    seed_dist(dir.path());

    let dist = dir.path().to_string_lossy().into_owned();
    let report = run(&parse(&["onefile", &dist])).unwrap();

    let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(html.contains("<script>(()=>{console.log(1)})()</script>"));
    assert!(html.contains("<style>\nbody{color:red}</style>"));
    assert!(!dir.path().join("main.js").exists());
    assert!(!dir.path().join("main.css").exists());
    // Binary assets are never touched.
    assert!(dir.path().join("favicon.ico").exists());

    assert_eq!(report.inlined, vec!["main.js", "main.css"]);
}

#[test]
fn keep_inlined_files_leaves_dist_complete() {
    let dir = tempfile::tempdir().unwrap();
    seed_dist(dir.path());

    let dist = dir.path().to_string_lossy().into_owned();
    run(&parse(&["onefile", &dist, "--keep-inlined-files"])).unwrap();

    assert!(dir.path().join("main.js").exists());
    assert!(dir.path().join("main.css").exists());
}

#[test]
fn web_component_run_writes_artifact() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("app.js"), "var app=1;").unwrap();
    fs::write(dir.path().join("app.css"), ":host{}\n").unwrap();
    let template = dir.path().join("shell.html");
    fs::write(
        &template,
        "<style>/* MINCSS */</style><script>/* MINJS */</script>",
    )
    .unwrap();

    let dist = dir.path().to_string_lossy().into_owned();
    let tpl = template.to_string_lossy().into_owned();
    run(&parse(&[
        "onefile",
        &dist,
        "--target",
        "web-component",
        "--template",
        &tpl,
    ]))
    .unwrap();

    let artifact = fs::read_to_string(dir.path().join("index.embed.html")).unwrap();
    assert!(artifact.contains("let app=1;"));
    assert!(artifact.contains("<style>:host{}</style>"));
    assert!(!dir.path().join("app.js").exists());
}

#[test]
fn missing_dist_is_an_error() {
    let err = run(&parse(&["onefile", "/definitely/not/here"])).unwrap_err();
    assert!(err.to_string().contains("dist directory not found"));
}
