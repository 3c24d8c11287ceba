//! Interactive front end.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{anyhow, Context, Result};
use chrono::Local;
use rustyline::{
    error::ReadlineError, history::DefaultHistory, CompletionType, Config, EditMode, Editor,
    EventHandler, KeyCode, KeyEvent, Modifiers,
};

use crtsh_builtins::Interpreter;
use crtsh_core::{
    crtsh_log_debug, crtsh_log_error, crtsh_log_info, LaunchRequest, LineKind, ModelHint,
    ShellContext, SideEffect, TerminalLine,
};

use crate::config::TerminalConfig;
use crate::readline::{CrtshHelper, Direction, HistoryBrowse, SharedSession};
use crate::render::Renderer;
use crate::scroll_buffer::ScrollBuffer;

const IMPORT_PROMPT: &str = "import path> ";

/// Run a single line against `ctx` and render its output. Input echoes are
/// skipped; the caller already knows what it typed.
pub fn run_once(ctx: &mut ShellContext, line: &str, renderer: &Renderer) -> Vec<String> {
    let result = Interpreter::new().execute(ctx, line);
    let mut out: Vec<String> = result
        .lines
        .iter()
        .filter(|l| l.kind != LineKind::Input)
        .map(|l| renderer.line(ctx.user(), l))
        .collect();
    if let Some(SideEffect::Launch(request)) = &result.effect {
        out.push(renderer.line(ctx.user(), &launch_line(request)));
    }
    out
}

fn launch_line(request: &LaunchRequest) -> TerminalLine {
    let model = match request.model {
        Some(ModelHint::Flash) => " (model: flash)",
        Some(ModelHint::Pro) => " (model: pro)",
        None => "",
    };
    TerminalLine::system(format!("launching {}{model}...", request.app.title()))
}

/// Name under which a host file is imported: its final path component.
fn import_name(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| anyhow!("not a file path: {}", path.display()))
}

/// Interactive read-eval-print loop over one session.
pub struct Repl {
    session: SharedSession,
    editor: Editor<CrtshHelper, DefaultHistory>,
    renderer: Renderer,
    scrollback: ScrollBuffer,
    interpreter: Interpreter,
    show_banner: bool,
}

impl Repl {
    pub fn new(ctx: ShellContext, config: &TerminalConfig) -> Result<Self> {
        let renderer = Renderer::new(config.ui.color);
        let session: SharedSession = Arc::new(Mutex::new(ctx));

        let editor_config = Config::builder()
            .completion_type(CompletionType::List)
            .edit_mode(EditMode::Emacs)
            .auto_add_history(false)
            .build();
        let mut editor: Editor<CrtshHelper, DefaultHistory> =
            Editor::with_config(editor_config).context("Failed to initialize line editor")?;
        editor.set_helper(Some(CrtshHelper::new(Arc::clone(&session), renderer)));
        editor.bind_sequence(
            KeyEvent(KeyCode::Up, Modifiers::NONE),
            EventHandler::Conditional(Box::new(HistoryBrowse::new(
                Arc::clone(&session),
                Direction::Older,
            ))),
        );
        editor.bind_sequence(
            KeyEvent(KeyCode::Down, Modifiers::NONE),
            EventHandler::Conditional(Box::new(HistoryBrowse::new(
                Arc::clone(&session),
                Direction::Newer,
            ))),
        );

        Ok(Self {
            session,
            editor,
            renderer,
            scrollback: ScrollBuffer::with_capacity(config.ui.scrollback),
            interpreter: Interpreter::new(),
            show_banner: config.ui.banner,
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, ShellContext>> {
        self.session
            .lock()
            .map_err(|_| anyhow!("session state is poisoned"))
    }

    fn user(&self) -> Result<String> {
        Ok(self.lock()?.user().to_string())
    }

    fn print(&mut self, user: &str, line: TerminalLine) {
        println!("{}", self.renderer.line(user, &line));
        self.scrollback.push(line);
    }

    fn banner(&mut self, user: &str) {
        let opened = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let session_line = format!("session opened {opened}");
        for line in self
            .renderer
            .banner(&["CRT TERMINAL", "secure virtual shell", &session_line])
        {
            println!("{line}");
        }
        self.print(user, TerminalLine::system(format!("welcome, {user}. type 'help' for commands")));
    }

    /// Run until `logout` or end of input.
    pub fn run(&mut self) -> Result<()> {
        let user = self.user()?;
        if self.show_banner {
            self.banner(&user);
        }

        loop {
            let prompt = {
                let ctx = self.lock()?;
                self.renderer.prompt(ctx.user(), &ctx.cursor().prompt_path())
            };
            let line = match self.editor.readline(&prompt) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => {
                    self.lock()?.history_mut().reset_browse();
                    continue;
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    crtsh_log_error!(error = %err, "readline failed");
                    return Err(err).context("Failed to read input");
                }
            };

            let result = {
                let mut ctx = self.lock()?;
                ctx.history_mut().reset_browse();
                self.interpreter.execute(&mut ctx, &line)
            };
            let (shown, effect) = self.scrollback.apply(result);
            for line in shown.iter().filter(|l| l.kind != LineKind::Input) {
                println!("{}", self.renderer.line(&user, line));
            }

            match effect {
                None => {}
                Some(SideEffect::ClearScrollback) => {
                    self.editor.clear_screen().context("Failed to clear screen")?;
                }
                Some(SideEffect::Launch(request)) => {
                    crtsh_log_info!(app = request.app.title(), "launch requested");
                    self.print(&user, launch_line(&request));
                }
                Some(SideEffect::RequestImport) => self.import(&user)?,
                Some(SideEffect::Logout) => break,
            }
        }
        crtsh_log_debug!("repl finished");
        Ok(())
    }

    /// Ask for a host path and import its text into the current directory.
    /// Failures are reported as error lines; only editor failures abort.
    fn import(&mut self, user: &str) -> Result<()> {
        let raw = match self.editor.readline(IMPORT_PROMPT) {
            Ok(raw) => raw,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                self.print(user, TerminalLine::system("import cancelled"));
                return Ok(());
            }
            Err(err) => return Err(err).context("Failed to read import path"),
        };
        let path = Path::new(raw.trim());
        let outcome = import_name(path).and_then(|name| {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            self.lock()?.import_file(&name, content)?;
            Ok(name)
        });
        let line = match outcome {
            Ok(name) => TerminalLine::success(format!("imported {name}")),
            Err(err) => TerminalLine::error(format!("import: {err:#}")),
        };
        self.print(user, line);
        Ok(())
    }
}

/// Build the REPL for `ctx` and run it to completion.
pub fn run_repl(ctx: ShellContext, config: &TerminalConfig) -> Result<()> {
    Repl::new(ctx, config)?.run()
}
