use crtsh_builtins::Interpreter;
use crtsh_core::{
    LineKind, SeedData, ShellContext, SideEffect, TerminalLine, PLACEHOLDER_CONTENT,
};
use proptest::prelude::*;

fn session() -> ShellContext {
    ShellContext::from_seed(SeedData::builtin().unwrap(), "guest").unwrap()
}

/// Run `line` and return everything after the echo.
fn run(ctx: &mut ShellContext, line: &str) -> Vec<TerminalLine> {
    let mut lines = Interpreter::new().execute(ctx, line).lines;
    assert_eq!(lines[0].kind, LineKind::Input);
    lines.remove(0);
    lines
}

fn texts(lines: &[TerminalLine]) -> Vec<&str> {
    lines.iter().map(|l| l.content.as_str()).collect()
}

#[test]
fn ls_at_root_lists_seed() {
    let mut ctx = session();
    assert_eq!(
        texts(&run(&mut ctx, "ls")),
        vec!["documents/", "logs/", "readme.txt", "theories/"]
    );
}

#[test]
fn navigate_down_and_back_up() {
    let mut ctx = session();
    assert!(run(&mut ctx, "cd documents").is_empty());
    assert_eq!(
        texts(&run(&mut ctx, "ls")),
        vec!["omega_protocol.txt", "shift_log.txt"]
    );
    run(&mut ctx, "cd ..");
    assert_eq!(texts(&run(&mut ctx, "pwd")), vec![""]);
}

#[test]
fn cd_dot_dot_at_root_is_silent() {
    let mut ctx = session();
    assert!(run(&mut ctx, "cd ..").is_empty());
    assert!(run(&mut ctx, "cd ..").is_empty());
    assert!(ctx.cursor().is_root());
}

#[test]
fn missing_file_reports_one_error() {
    let mut ctx = session();
    let out = run(&mut ctx, "cat missing.txt");
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].kind, LineKind::Error);
    assert_eq!(out[0].content, "cat: no such file: missing.txt");
}

#[test]
fn touch_then_cat_round_trip() {
    let mut ctx = session();
    run(&mut ctx, "cd logs");
    assert_eq!(texts(&run(&mut ctx, "ls")), vec!["(empty)"]);
    let created = run(&mut ctx, "touch entry.log");
    assert_eq!(created[0].kind, LineKind::Success);
    assert_eq!(texts(&run(&mut ctx, "cat entry.log")), vec![PLACEHOLDER_CONTENT]);
    assert_eq!(texts(&run(&mut ctx, "ls")), vec!["entry.log"]);
}

#[test]
fn touching_twice_keeps_one_entry() {
    let mut ctx = session();
    run(&mut ctx, "touch a.txt");
    run(&mut ctx, "touch a.txt");
    let listing = run(&mut ctx, "ls");
    assert_eq!(texts(&listing).iter().filter(|n| **n == "a.txt").count(), 1);
}

#[test]
fn tree_draws_seed_with_directory_suffixes() {
    let mut ctx = session();
    assert_eq!(
        texts(&run(&mut ctx, "tree")),
        vec![
            ".",
            "├── documents/",
            "│   ├── omega_protocol.txt",
            "│   └── shift_log.txt",
            "├── logs/",
            "├── readme.txt",
            "└── theories/",
            "    ├── creatimatter.txt",
            "    ├── mysterial.txt",
            "    └── origins.txt",
        ]
    );
}

#[test]
fn touch_over_directory_replaces_it() {
    let mut ctx = session();
    let out = run(&mut ctx, "touch logs");
    assert_eq!(out[0].kind, LineKind::Success);
    assert_eq!(texts(&run(&mut ctx, "cat logs")), vec![PLACEHOLDER_CONTENT]);
    let listing = run(&mut ctx, "ls");
    assert!(texts(&listing).contains(&"logs"));
    assert!(!texts(&listing).contains(&"logs/"));
}

#[test]
fn echo_path_reflects_cursor_before_command() {
    let mut ctx = session();
    let first = Interpreter::new().execute(&mut ctx, "cd documents");
    assert_eq!(first.lines[0].path.as_deref(), Some("~"));
    let second = Interpreter::new().execute(&mut ctx, "cd ..");
    assert_eq!(second.lines[0].path.as_deref(), Some("~/documents"));
}

#[test]
fn errors_leave_state_alone() {
    let mut ctx = session();
    let before = ctx.filesystem().clone();
    run(&mut ctx, "cd readme.txt");
    run(&mut ctx, "touch readme.txt");
    run(&mut ctx, "cd nowhere");
    assert!(ctx.filesystem().ptr_eq(&before));
    assert!(ctx.cursor().is_root());
}

#[test]
fn launchers_return_effects() {
    let mut ctx = session();
    let out = Interpreter::new().execute(&mut ctx, "ai -flash");
    match out.effect {
        Some(SideEffect::Launch(req)) => {
            assert_eq!(req.app, crtsh_core::AppKind::Ai);
            assert_eq!(req.model, Some(crtsh_core::ModelHint::Flash));
        }
        other => panic!("unexpected effect {other:?}"),
    }
    assert_eq!(
        Interpreter::new().execute(&mut ctx, "logout").effect,
        Some(SideEffect::Logout)
    );
}

#[test]
fn comms_lists_seed_contacts() {
    let mut ctx = session();
    let out = run(&mut ctx, "comms");
    assert!(out.iter().any(|l| l.content.starts_with("[AG-117] Agent Mercer")));
}

proptest! {
    #[test]
    fn history_grows_by_one_per_non_blank_line(
        lines in prop::collection::vec(
            prop_oneof![
                Just("ls".to_string()),
                Just("   ".to_string()),
                Just("".to_string()),
                Just("cd documents".to_string()),
                Just("cd ..".to_string()),
                Just("nonsense".to_string()),
                Just("cat nope".to_string()),
            ],
            0..24,
        )
    ) {
        let mut ctx = session();
        let interpreter = Interpreter::new();
        for line in &lines {
            let before = ctx.history().len();
            interpreter.execute(&mut ctx, line);
            let expected = if line.trim().is_empty() { before } else { before + 1 };
            prop_assert_eq!(ctx.history().len(), expected);
            if !line.trim().is_empty() {
                prop_assert_eq!(ctx.history().recent(0), Some(line.trim()));
            }
        }
    }
}
