//! Subsystem launchers: `sys`, `map`, `scan`, `ai` and `cam`.
//!
//! None of them print anything; they hand a [`LaunchRequest`] back to the
//! caller. `ai` accepts `-flash` and `cam` accepts `-pro` to pick a model.

use crtsh_core::{
    AppKind, Builtin, ExecutionResult, LaunchRequest, ModelHint, ShellContext, ShellResult,
    SideEffect,
};
use crtsh_parser::BuiltinKind;

/// A launcher for one subsystem.
pub struct LaunchCommand {
    kind: BuiltinKind,
    app: AppKind,
    /// `(flag, model)` recognised by this launcher.
    model_flag: Option<(&'static str, ModelHint)>,
    synopsis: &'static str,
    usage: &'static str,
}

pub static SYS: LaunchCommand = LaunchCommand {
    kind: BuiltinKind::Sys,
    app: AppKind::Sys,
    model_flag: None,
    synopsis: "Open the system monitor",
    usage: "sys",
};

pub static MAP: LaunchCommand = LaunchCommand {
    kind: BuiltinKind::Map,
    app: AppKind::Map,
    model_flag: None,
    synopsis: "Open the global site map",
    usage: "map",
};

pub static SCAN: LaunchCommand = LaunchCommand {
    kind: BuiltinKind::Scan,
    app: AppKind::Scan,
    model_flag: None,
    synopsis: "Open the bio-scanner",
    usage: "scan",
};

pub static AI: LaunchCommand = LaunchCommand {
    kind: BuiltinKind::Ai,
    app: AppKind::Ai,
    model_flag: Some(("-flash", ModelHint::Flash)),
    synopsis: "Open the AI core",
    usage: "ai [-flash]",
};

pub static CAM: LaunchCommand = LaunchCommand {
    kind: BuiltinKind::Cam,
    app: AppKind::Cam,
    model_flag: Some(("-pro", ModelHint::Pro)),
    synopsis: "Open surveillance cameras",
    usage: "cam [-pro]",
};

/// The subsystem a command opens, if it is a launcher.
pub fn app_for(kind: BuiltinKind) -> Option<AppKind> {
    match kind {
        BuiltinKind::Sys => Some(AppKind::Sys),
        BuiltinKind::Map => Some(AppKind::Map),
        BuiltinKind::Scan => Some(AppKind::Scan),
        BuiltinKind::Ai => Some(AppKind::Ai),
        BuiltinKind::Cam => Some(AppKind::Cam),
        _ => None,
    }
}

/// Flags a launcher understands, for argument completion.
pub fn flags_for(kind: BuiltinKind) -> &'static [&'static str] {
    match kind {
        BuiltinKind::Ai => &["-flash"],
        BuiltinKind::Cam => &["-pro"],
        _ => &[],
    }
}

impl LaunchCommand {
    fn model(&self, args: &[String]) -> Option<ModelHint> {
        let (flag, model) = self.model_flag?;
        let long = format!("-{flag}");
        args.iter()
            .any(|a| a == flag || *a == long)
            .then_some(model)
    }
}

impl Builtin for LaunchCommand {
    fn kind(&self) -> BuiltinKind {
        self.kind
    }

    fn synopsis(&self) -> &'static str {
        self.synopsis
    }

    fn usage(&self) -> &'static str {
        self.usage
    }

    fn execute(&self, _ctx: &mut ShellContext, args: &[String]) -> ShellResult<ExecutionResult> {
        Ok(ExecutionResult::with_effect(SideEffect::Launch(LaunchRequest {
            app: self.app,
            model: self.model(args),
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::{args, sample_context};

    fn launched(cmd: &LaunchCommand, argv: &[&str]) -> LaunchRequest {
        let mut ctx = sample_context("guest");
        match cmd.execute(&mut ctx, &args(argv)).unwrap().effect {
            Some(SideEffect::Launch(req)) => req,
            other => panic!("expected launch, got {other:?}"),
        }
    }

    #[test]
    fn model_flags() {
        assert_eq!(launched(&AI, &["-flash"]).model, Some(ModelHint::Flash));
        assert_eq!(launched(&AI, &["--flash"]).model, Some(ModelHint::Flash));
        assert_eq!(launched(&AI, &[]).model, None);
        assert_eq!(launched(&CAM, &["-pro"]).model, Some(ModelHint::Pro));
        assert_eq!(launched(&SYS, &["-pro"]).model, None);
    }

    #[test]
    fn launchers_agree_with_table() {
        for cmd in [&SYS, &MAP, &SCAN, &AI, &CAM] {
            assert_eq!(app_for(cmd.kind), Some(cmd.app));
            assert_eq!(launched(cmd, &[]).app, cmd.app);
        }
        assert_eq!(app_for(BuiltinKind::Ls), None);
    }
}
