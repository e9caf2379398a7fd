use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sketchpad_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sketchpad").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn sketchpad_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    sketchpad_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Sticker sketchpad: replay drawing events onto a canvas and export PNGs",
        ));
}

#[test]
fn no_script_prints_command_summary() {
    let temp = TempDir::new().unwrap();
    sketchpad_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("undo | redo | clear | export"));
}

#[test]
fn script_export_writes_png_into_output_dir() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("exports");
    let script = temp.path().join("events.txt");
    std::fs::write(
        &script,
        "tool thick\ncolor 255 0 0\ndown 10 10\nmove 100 100\nup\nexport\n",
    )
    .unwrap();

    sketchpad_cmd(&temp)
        .arg("--script")
        .arg(&script)
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported"))
        .stdout(predicate::str::contains("1 strokes committed, 0 redoable"));

    let entries: Vec<_> = std::fs::read_dir(&out).unwrap().collect();
    assert_eq!(entries.len(), 1);
    let path = entries[0].as_ref().unwrap().path();
    assert_eq!(path.extension().and_then(|ext| ext.to_str()), Some("png"));
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"\x89PNG"));
}

#[test]
fn script_is_read_from_stdin() {
    let temp = TempDir::new().unwrap();
    sketchpad_cmd(&temp)
        .args(["--script", "-"])
        .write_stdin("down 5 5\nup\ndown 6 6\nup\nundo\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 strokes committed, 1 redoable"));
}

#[test]
fn snapshot_writes_the_live_canvas() {
    let temp = TempDir::new().unwrap();
    let snapshot = temp.path().join("live.png");

    sketchpad_cmd(&temp)
        .args(["--script", "-"])
        .arg("--snapshot")
        .arg(&snapshot)
        .write_stdin("move 20 20\n")
        .assert()
        .success();

    assert!(std::fs::read(&snapshot).unwrap().starts_with(b"\x89PNG"));
}

#[test]
fn invalid_script_reports_line_number() {
    let temp = TempDir::new().unwrap();
    sketchpad_cmd(&temp)
        .args(["--script", "-"])
        .write_stdin("down 1 1\nup\nwiggle\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 3: unknown command 'wiggle'"));
}

#[test]
fn custom_config_controls_canvas() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    std::fs::write(
        &config,
        "[canvas]\nwidth = 32\nheight = 32\n\n[[tools.markers]]\nname = \"pen\"\nwidth = 3.0\n",
    )
    .unwrap();

    sketchpad_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .args(["--script", "-"])
        .write_stdin("tool pen\ndown 1 1\nmove 30 30\nup\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 strokes committed"));
}
