use super::*;
use crate::cfg::ArgForwarding;
use std::ffi::OsString;
use std::io::Write;

fn launcher(body: &str) -> Launcher {
    Launcher::new(Script::from_text(body), LaunchCfg::default())
}

fn with_cfg(body: &str, cfg: LaunchCfg) -> Launcher {
    Launcher::new(Script::from_text(body), cfg)
}

fn env_value(cmd: &Command, key: &str) -> Option<OsString> {
    cmd.get_envs()
        .find(|(k, _)| *k == OsStr::new(key))
        .and_then(|(_, v)| v.map(|v| v.to_os_string()))
}

#[test]
fn command_runs_payload_under_bash() {
    let cmd = launcher("main() { :; }").command(&["x"]);
    assert_eq!(cmd.get_program(), "bash");
    let args: Vec<&OsStr> = cmd.get_args().collect();
    assert_eq!(args, [OsStr::new("-c"), OsStr::new("main() { :; }\nmain")]);
    assert_eq!(cmd.get_current_dir(), None);
}

#[test]
fn command_forwards_joined_arguments() {
    let l = launcher("main() { :; }");
    assert_eq!(
        env_value(&l.command(&["status", "--verbose"]), "NADM_ARGS"),
        Some(OsString::from("status --verbose"))
    );
    assert_eq!(
        env_value(&l.command::<&str>(&[]), "NADM_ARGS"),
        Some(OsString::new())
    );
    // Joined mode adds exactly one variable.
    assert_eq!(l.command(&["a", "b"]).get_envs().count(), 1);
}

#[test]
fn exit_codes_propagate() {
    for code in [0, 1, 42, 255] {
        let body = format!("main() {{ exit {code}; }}");
        let l = launcher(&body);
        assert_eq!(l.run::<&str>(&[]).unwrap(), Outcome::Exited(code));
        assert_eq!(l.run_to_exit_code::<&str>(&[]), code);
    }
}

#[test]
fn return_value_of_main_is_exit_code() {
    let outcome = launcher("main() { return 7; }").run::<&str>(&[]).unwrap();
    assert_eq!(outcome, Outcome::Exited(7));
}

#[test]
fn missing_main_is_a_command_not_found_exit() {
    let outcome = launcher("greet() { echo hi; }").run::<&str>(&[]).unwrap();
    // bash reports `main: command not found` and exits 127.
    assert_eq!(outcome, Outcome::Exited(127));
}

#[cfg(unix)]
#[test]
fn signal_termination_falls_back_to_one() {
    let l = launcher("main() { kill -KILL $$; }");
    let result = l.run::<&str>(&[]);
    assert_eq!(result.unwrap(), Outcome::Signaled(9));
    assert_eq!(l.run_to_exit_code::<&str>(&[]), 1);
}

#[test]
fn missing_interpreter_is_launch_failure() {
    let cfg = LaunchCfg {
        interpreter: OsString::from("nadm-no-such-interpreter"),
        ..LaunchCfg::default()
    };
    let l = Launcher::new(Script::from_text("main() { :; }"), cfg);
    let result = l.run::<&str>(&[]);
    assert!(matches!(result, Err(LaunchError::Spawn { .. })));
    assert_eq!(l.run_to_exit_code::<&str>(&[]), 1);
}

#[cfg(unix)]
#[test]
fn signal_termination_uses_configured_fallback() {
    let cfg = LaunchCfg {
        fallback_exit_code: 5,
        ..LaunchCfg::default()
    };
    let l = with_cfg("main() { kill -KILL $$; }", cfg);
    assert_eq!(l.run_to_exit_code::<&str>(&[]), 5);
}

#[test]
fn launch_failure_uses_configured_fallback() {
    let cfg = LaunchCfg {
        interpreter: OsString::from("nadm-no-such-interpreter"),
        fallback_exit_code: 5,
        ..LaunchCfg::default()
    };
    let l = with_cfg("main() { :; }", cfg);
    assert_eq!(l.run_to_exit_code::<&str>(&[]), 5);
}

#[test]
fn configured_fallback_does_not_mask_child_codes() {
    let cfg = LaunchCfg {
        fallback_exit_code: 5,
        ..LaunchCfg::default()
    };
    assert_eq!(with_cfg("main() { exit 0; }", cfg.clone()).run_to_exit_code::<&str>(&[]), 0);
    assert_eq!(with_cfg("main() { exit 9; }", cfg).run_to_exit_code::<&str>(&[]), 9);
}

#[test]
fn indexed_mode_drops_inherited_argument_slots() {
    // Only this test touches NADM_ARG_97 in the test process.
    std::env::set_var("NADM_ARG_97", "stale");
    let cfg = LaunchCfg {
        forwarding: ArgForwarding::Indexed,
        ..LaunchCfg::default()
    };
    let l = with_cfg(r#"main() { printf '%s|%s' "$NADM_ARG_1" "${NADM_ARG_97-unset}"; }"#, cfg);
    let cmd = l.command(&["only"]);
    assert!(cmd
        .get_envs()
        .any(|(k, v)| k == OsStr::new("NADM_ARG_97") && v.is_none()));
    let out = l.command(&["only"]).stdout(Stdio::piped()).output().unwrap();
    std::env::remove_var("NADM_ARG_97");
    assert_eq!(out.stdout, b"only|unset");
}

#[test]
fn script_sees_forwarded_arguments() {
    let out = launcher(r#"main() { printf '%s' "$NADM_ARGS"; }"#)
        .command(&["status", "--verbose"])
        .stdout(Stdio::piped())
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(out.stdout, b"status --verbose");
}

#[test]
fn indexed_forwarding_preserves_spaces() {
    let cfg = LaunchCfg {
        forwarding: ArgForwarding::Indexed,
        ..LaunchCfg::default()
    };
    let l = Launcher::new(
        Script::from_text(r#"main() { printf '%s|%s|%s' "$NADM_ARGC" "$NADM_ARG_1" "$NADM_ARG_2"; }"#),
        cfg,
    );
    let out = l
        .command(&["a b", "c"])
        .stdout(Stdio::piped())
        .output()
        .unwrap();
    assert_eq!(out.stdout, b"2|a b|c");
}

#[test]
fn parent_environment_is_inherited() {
    let out = launcher(r#"main() { printf '%s' "$NADM_TEST_MARKER"; }"#)
        .command::<&str>(&[])
        .env("NADM_TEST_MARKER", "kept")
        .stdout(Stdio::piped())
        .output()
        .unwrap();
    assert_eq!(out.stdout, b"kept");
}

#[test]
fn streams_pass_through_byte_for_byte() {
    let input: Vec<u8> = (0u8..=255).chain(b"\nend\n".iter().copied()).collect();
    let mut child = launcher("main() { cat; printf 'to-stderr' >&2; }")
        .command::<&str>(&[])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(&input).unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());
    assert_eq!(out.stdout, input);
    assert_eq!(out.stderr, b"to-stderr");
}

#[test]
fn embedded_placeholder_runs_main() {
    let out = Launcher::embedded()
        .command(&["hello"])
        .stderr(Stdio::piped())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("hello"));
}
