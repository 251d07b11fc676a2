use std::fs;
use std::process::{Command, Stdio};

use assert_cmd::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::TempDir;

/// A root with a few hundred small files and a matching config file.
fn prepare_root() -> TempDir {
    let temp = TempDir::new().expect("failed to create temp dir");
    let root = temp.path().join("data");

    for i in 0..300 {
        let dir = root.join(format!("dir{:02}", i % 10));
        fs::create_dir_all(&dir).expect("failed to create bench dir");
        fs::write(dir.join(format!("file{i:04}.txt")), b"bench").expect("failed to write file");
    }

    fs::write(
        temp.path().join("config.yaml"),
        format!("root: {}\nusername: bench\npassword: bench\n", root.display()),
    )
    .expect("failed to write config");

    temp
}

fn fileweb(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fileweb").expect("failed to locate fileweb binary");
    cmd.current_dir(temp.path())
        .arg("--config")
        .arg(temp.path().join("config.yaml"))
        .args(["--user", "bench", "--password", "bench", "--quiet"]);
    cmd
}

fn bench_cli_startup(c: &mut Criterion) {
    c.bench_function("cli_startup_version", |b| {
        b.iter(|| {
            let mut cmd = Command::cargo_bin("fileweb").expect("failed to locate fileweb binary");
            let output = cmd.arg("--version").output().expect("failed to run fileweb");
            black_box(output);
        });
    });
}

fn bench_cli_list(c: &mut Criterion) {
    let temp = prepare_root();

    c.bench_function("cli_list_json", |b| {
        b.iter(|| {
            let output = fileweb(&temp)
                .args(["list", "dir00", "--format", "json"])
                .output()
                .expect("failed to execute fileweb list");
            black_box(output);
        });
    });
}

fn bench_cli_archive(c: &mut Criterion) {
    let temp = prepare_root();

    c.bench_function("cli_archive_root", |b| {
        b.iter(|| {
            let status = fileweb(&temp)
                .args(["archive", "", "-o", "-"])
                .stdout(Stdio::null())
                .status()
                .expect("failed to execute fileweb archive");
            black_box(status.success());
        });
    });
}

criterion_group!(cli_benches, bench_cli_startup, bench_cli_list, bench_cli_archive);
criterion_main!(cli_benches);
