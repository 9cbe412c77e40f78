//! Integration tests for command handlers.
//!
//! Handlers run against a real temporary filesystem and a recording runner,
//! so every external program a command would start is checked without
//! needing git or go installed.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use gov::cli::args::Command;
use gov::cli::commands::{self, CommandError};
use gov::core::env::Environment;
use gov::engine::Context;
use gov::toolchain::mock::RecordingRunner;
use gov::toolchain::ToolError;

// =============================================================================
// Test Fixtures
// =============================================================================

/// A temporary home directory plus a project working directory.
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        fs::create_dir_all(dir.path().join("home")).unwrap();
        fs::create_dir_all(dir.path().join("work")).unwrap();
        Self { dir }
    }

    fn home(&self) -> PathBuf {
        self.dir.path().join("home")
    }

    fn work(&self) -> PathBuf {
        self.dir.path().join("work")
    }

    fn gov_dir(&self) -> PathBuf {
        self.home().join(".gov")
    }

    /// Context rooted in `work/`, with HOME pointing at `home/`.
    fn context(&self) -> Context {
        let env: Environment = [
            ("HOME", self.home().to_string_lossy().into_owned()),
            ("PATH", "/usr/bin:/bin".to_string()),
        ]
        .into_iter()
        .collect();
        let mut ctx = Context::new(self.work(), env);
        ctx.quiet = true;
        ctx
    }

    fn write_config(&self, contents: &str) {
        fs::create_dir_all(self.gov_dir()).unwrap();
        fs::write(self.gov_dir().join("config.toml"), contents).unwrap();
    }
}

fn cwds(runner: &RecordingRunner) -> Vec<PathBuf> {
    runner.invocations().into_iter().map(|i| i.cwd).collect()
}

// =============================================================================
// init
// =============================================================================

#[test]
fn init_runs_git_then_go_mod_init() {
    let ws = Workspace::new();
    let ctx = ws.context();
    let runner = RecordingRunner::new();

    commands::init(&ctx, &runner).unwrap();

    assert_eq!(
        runner.command_lines(),
        vec!["git init", "go mod init project"]
    );
    assert_eq!(cwds(&runner), vec![ws.work(), ws.work()]);
}

#[test]
fn init_skips_go_mod_when_manifest_exists() {
    let ws = Workspace::new();
    fs::write(ws.work().join("go.mod"), "module existing\n").unwrap();
    let ctx = ws.context();
    let runner = RecordingRunner::new();

    commands::init(&ctx, &runner).unwrap();

    assert_eq!(runner.command_lines(), vec!["git init"]);
}

#[test]
fn init_uses_configured_module_name() {
    let ws = Workspace::new();
    ws.write_config("module_name = \"example.com/hello\"\n");
    let ctx = ws.context();
    let runner = RecordingRunner::new();

    commands::init(&ctx, &runner).unwrap();

    assert_eq!(
        runner.command_lines(),
        vec!["git init", "go mod init example.com/hello"]
    );
}

#[test]
fn init_stops_when_git_fails() {
    let ws = Workspace::new();
    let ctx = ws.context();
    let runner = RecordingRunner::new().fail_on("git init");

    let err = commands::init(&ctx, &runner).unwrap_err();

    assert!(matches!(err, CommandError::GitInit(ToolError::Failed { .. })));
    assert!(err.to_string().starts_with("Failed to init git:"));
    assert_eq!(runner.command_lines(), vec!["git init"]);
}

#[test]
fn init_reports_go_mod_failure() {
    let ws = Workspace::new();
    let ctx = ws.context();
    let runner = RecordingRunner::new().missing("go");

    let err = commands::init(&ctx, &runner).unwrap_err();

    assert!(matches!(err, CommandError::ModInit(ToolError::Spawn { .. })));
    assert!(err.to_string().starts_with("Failed to init go mod:"));
}

#[test]
fn init_rejects_broken_config() {
    let ws = Workspace::new();
    ws.write_config("not valid toml = = =");
    let ctx = ws.context();
    let runner = RecordingRunner::new();

    let err = commands::init(&ctx, &runner).unwrap_err();

    assert!(matches!(err, CommandError::Config(_)));
    assert_eq!(runner.command_lines(), vec!["git init"]);
}

// =============================================================================
// build / deps
// =============================================================================

#[test]
fn build_runs_go_build_in_cwd() {
    let ws = Workspace::new();
    let ctx = ws.context();
    let runner = RecordingRunner::new();

    commands::build(&ctx, &runner).unwrap();

    assert_eq!(runner.command_lines(), vec!["go build"]);
    assert_eq!(cwds(&runner), vec![ws.work()]);
}

#[test]
fn build_failure_is_reported() {
    let ws = Workspace::new();
    let ctx = ws.context();
    let runner = RecordingRunner::new().fail_on("go build");

    let err = commands::build(&ctx, &runner).unwrap_err();
    assert!(err.to_string().starts_with("Failed to build:"));
}

#[test]
fn deps_runs_go_mod_tidy() {
    let ws = Workspace::new();
    let ctx = ws.context();
    let runner = RecordingRunner::new();

    commands::deps(&ctx, &runner).unwrap();

    assert_eq!(runner.command_lines(), vec!["go mod tidy"]);
}

#[test]
fn deps_failure_is_reported() {
    let ws = Workspace::new();
    let ctx = ws.context();
    let runner = RecordingRunner::new().fail_on("go mod tidy");

    let err = commands::deps(&ctx, &runner).unwrap_err();
    assert!(matches!(err, CommandError::Tidy(_)));
    assert!(err.to_string().starts_with("Failed to tidy deps:"));
}

// =============================================================================
// create
// =============================================================================

#[test]
fn create_makes_directory_and_moves_into_it() {
    let ws = Workspace::new();
    let mut ctx = ws.context();
    let runner = RecordingRunner::new();

    commands::create(&mut ctx, &runner, Path::new("demo")).unwrap();

    let target = ws.work().join("demo");
    assert!(target.is_dir());
    assert_eq!(ctx.cwd, target);
    assert_eq!(
        runner.command_lines(),
        vec!["git init", "go mod init project"]
    );
    assert_eq!(cwds(&runner), vec![target.clone(), target]);
}

#[test]
fn create_nested_directory() {
    let ws = Workspace::new();
    let mut ctx = ws.context();
    let runner = RecordingRunner::new();

    commands::create(&mut ctx, &runner, Path::new("services/api")).unwrap();

    assert!(ws.work().join("services/api").is_dir());
    assert_eq!(ctx.cwd, ws.work().join("services/api"));
}

#[test]
fn create_existing_directory_reuses_it() {
    let ws = Workspace::new();
    let existing = ws.work().join("demo");
    fs::create_dir_all(&existing).unwrap();
    fs::write(existing.join("go.mod"), "module demo\n").unwrap();
    let mut ctx = ws.context();
    let runner = RecordingRunner::new();

    commands::create(&mut ctx, &runner, Path::new("demo")).unwrap();

    assert_eq!(runner.command_lines(), vec!["git init"]);
}

#[test]
fn create_fails_when_path_is_a_file() {
    let ws = Workspace::new();
    fs::write(ws.work().join("blocker"), "").unwrap();
    let mut ctx = ws.context();
    let runner = RecordingRunner::new();

    let err = commands::create(&mut ctx, &runner, Path::new("blocker/sub")).unwrap_err();

    assert!(matches!(err, CommandError::CreateDir(_)));
    assert!(runner.invocations().is_empty());
    assert_eq!(ctx.cwd, ws.work());
}

#[test]
fn create_rejects_empty_name() {
    let ws = Workspace::new();
    let mut ctx = ws.context();
    let runner = RecordingRunner::new();

    let err = commands::create(&mut ctx, &runner, Path::new("")).unwrap_err();

    assert!(matches!(err, CommandError::CreateDir(_)));
    assert!(runner.invocations().is_empty());
}

#[test]
fn create_reports_init_failure_and_still_succeeds() {
    let ws = Workspace::new();
    let mut ctx = ws.context();
    let runner = RecordingRunner::new().fail_on("git");

    commands::create(&mut ctx, &runner, Path::new("demo")).unwrap();

    assert!(ws.work().join("demo").is_dir());
    assert_eq!(ctx.cwd, ws.work().join("demo"));
    assert_eq!(runner.command_lines(), vec!["git init".to_string()]);
}

// =============================================================================
// activate / deactivate
// =============================================================================

#[test]
fn activate_sets_goroot_and_prepends_path() {
    let ws = Workspace::new();
    let mut ctx = ws.context();

    commands::activate(&mut ctx, false).unwrap();

    let goroot = ws.gov_dir().join("go");
    assert_eq!(ctx.env.get("GOROOT"), Some(goroot.to_str().unwrap()));
    assert_eq!(
        ctx.env.get("PATH"),
        Some(format!("{}:/usr/bin:/bin", goroot.join("bin").display()).as_str())
    );
}

#[test]
fn activate_moves_existing_entry_to_front() {
    let ws = Workspace::new();
    let mut ctx = ws.context();
    let bin = ws.gov_dir().join("go").join("bin");
    ctx.env
        .set("PATH", format!("/usr/bin:{}:/bin", bin.display()));

    commands::activate(&mut ctx, false).unwrap();
    commands::activate(&mut ctx, false).unwrap();

    assert_eq!(
        ctx.env.get("PATH"),
        Some(format!("{}:/usr/bin:/bin", bin.display()).as_str())
    );
}

#[test]
fn deactivate_undoes_activate() {
    let ws = Workspace::new();
    let mut ctx = ws.context();

    commands::activate(&mut ctx, false).unwrap();
    commands::deactivate(&mut ctx, false).unwrap();

    assert_eq!(ctx.env.get("GOROOT"), None);
    assert_eq!(ctx.env.get("PATH"), Some("/usr/bin:/bin"));
}

#[test]
fn deactivate_without_activate_only_unsets_goroot() {
    let ws = Workspace::new();
    let mut ctx = ws.context();
    ctx.env.set("GOROOT", "/usr/local/go");

    commands::deactivate(&mut ctx, false).unwrap();

    assert_eq!(ctx.env.get("GOROOT"), None);
    assert_eq!(ctx.env.get("PATH"), Some("/usr/bin:/bin"));
}

#[test]
fn activated_environment_reaches_later_tools() {
    let ws = Workspace::new();
    let mut ctx = ws.context();
    let runner = RecordingRunner::new();

    commands::activate(&mut ctx, false).unwrap();
    commands::build(&ctx, &runner).unwrap();

    let invocation = &runner.invocations()[0];
    let goroot = ws.gov_dir().join("go");
    assert_eq!(invocation.env.get("GOROOT"), Some(goroot.to_str().unwrap()));
}

// =============================================================================
// use / save-bin
// =============================================================================

#[test]
fn use_accepts_release_versions() {
    let ws = Workspace::new();
    let ctx = ws.context();

    assert!(commands::use_version(&ctx, "1.22.3").is_ok());
    assert!(commands::use_version(&ctx, "go1.21rc2").is_ok());
}

#[test]
fn use_accepts_any_version_string() {
    let ws = Workspace::new();
    let ctx = ws.context();

    assert!(commands::use_version(&ctx, "latest").is_ok());
    assert!(commands::use_version(&ctx, "1.22.x").is_ok());
}

#[test]
fn save_bin_copies_default_binary_into_gov_dir() {
    let ws = Workspace::new();
    let ctx = ws.context();
    let runner = RecordingRunner::new();

    commands::save_bin(&ctx, &runner).unwrap();

    assert!(ws.gov_dir().is_dir());
    let invocation = &runner.invocations()[0];
    assert_eq!(invocation.program, "cp");
    assert_eq!(
        invocation.args_lossy(),
        vec![
            "/usr/local/go/bin/go".to_string(),
            ws.gov_dir().join("go").to_string_lossy().into_owned(),
        ]
    );
}

#[test]
fn save_bin_uses_configured_binary() {
    let ws = Workspace::new();
    ws.write_config("go_binary = \"/opt/go/bin/go\"\n");
    let ctx = ws.context();
    let runner = RecordingRunner::new();

    commands::save_bin(&ctx, &runner).unwrap();

    assert_eq!(runner.invocations()[0].args_lossy()[0], "/opt/go/bin/go");
}

#[test]
fn save_bin_reports_copy_failure() {
    let ws = Workspace::new();
    let ctx = ws.context();
    let runner = RecordingRunner::new().fail_on("cp");

    let err = commands::save_bin(&ctx, &runner).unwrap_err();

    assert!(matches!(err, CommandError::CopyBinary(_)));
    assert!(err.to_string().starts_with("Failed to copy go binary:"));
}

// =============================================================================
// dispatch
// =============================================================================

#[test]
fn dispatch_reports_failures_without_erroring() {
    let ws = Workspace::new();
    let mut ctx = ws.context();
    let runner = RecordingRunner::new().fail_on("go build");

    let result = commands::dispatch(Command::Build, &mut ctx, &runner);

    assert!(result.is_ok());
    assert_eq!(runner.command_lines(), vec!["go build"]);
}

#[test]
fn dispatch_create_updates_context() {
    let ws = Workspace::new();
    let mut ctx = ws.context();
    let runner = RecordingRunner::new();

    commands::dispatch(
        Command::Create {
            name: PathBuf::from("app"),
        },
        &mut ctx,
        &runner,
    )
    .unwrap();

    assert_eq!(ctx.cwd, ws.work().join("app"));
}

#[test]
fn dispatch_config_errors_propagate() {
    let ws = Workspace::new();
    let mut ctx = ws.context();
    let runner = RecordingRunner::new();

    let result = commands::dispatch(
        Command::Config {
            action: gov::cli::args::ConfigAction::Get {
                key: "nope".to_string(),
            },
        },
        &mut ctx,
        &runner,
    );

    assert!(result.is_err());
}
