//! Built-in commands
//!
//! The command registry is a closed, enumerable set: every command is a
//! variant of [`Command`], so name lookup is an explicit match and the
//! completion resolver enumerates candidates in declaration order by
//! construction rather than by the iteration order of a dynamic map.
//!
//! Handlers own their trailing prompt: each one must re-prompt through the
//! context before returning, except `exit` and `reboot`, which defer
//! prompting indefinitely by scheduling a session restart.

use crate::ansi;
use crate::content::Content;
use crate::history::HistoryBuffer;
use crate::render::Renderer;

/// OS identification printed by `uname`
pub const UNAME: &str = "Fedora Linux 41 (Workstation Edition)";

/// Extended identification printed by `uname -a`
pub const UNAME_ALL: &str = "Fedora Linux 41 (Workstation Edition) x86_64 GNU/Linux";

/// Which flavor of session restart a handler scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartKind {
    /// `exit`: after the delay, prompt for a key; the next key restarts
    Exit,
    /// `reboot`: after the delay, restart immediately
    Reboot,
}

/// What a handler asked the session to do after it returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerOutcome {
    /// Handler finished and re-prompted; keep editing
    Done,
    /// Handler deferred prompting and wants a delayed restart
    ScheduleRestart(RestartKind),
}

/// Session context a handler runs against
pub struct HandlerContext<'a> {
    pub user: &'a str,
    pub host: &'a str,
    /// Fully styled prompt text, without a leading newline
    pub prompt: &'a str,
    pub content: &'a Content,
    pub history: &'a HistoryBuffer,
    pub renderer: &'a mut dyn Renderer,
}

impl HandlerContext<'_> {
    /// Emit a fresh prompt on its own line
    fn reprompt(&mut self) {
        self.renderer.write("\r\n");
        self.renderer.write(self.prompt);
    }
}

/// The closed set of registered commands
///
/// Declaration order is the registry's stable enumeration order; the
/// ambiguous-completion listing and `help` follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Clear,
    Echo,
    Whoami,
    Date,
    Uname,
    Banner,
    Exit,
    Reboot,
    Neofetch,
    Projects,
    Skills,
    About,
    Contact,
    Resume,
    History,
}

impl Command {
    /// Every command, in registry enumeration order
    pub const ALL: [Command; 16] = [
        Command::Help,
        Command::Clear,
        Command::Echo,
        Command::Whoami,
        Command::Date,
        Command::Uname,
        Command::Banner,
        Command::Exit,
        Command::Reboot,
        Command::Neofetch,
        Command::Projects,
        Command::Skills,
        Command::About,
        Command::Contact,
        Command::Resume,
        Command::History,
    ];

    /// Registered name of this command
    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Clear => "clear",
            Command::Echo => "echo",
            Command::Whoami => "whoami",
            Command::Date => "date",
            Command::Uname => "uname",
            Command::Banner => "banner",
            Command::Exit => "exit",
            Command::Reboot => "reboot",
            Command::Neofetch => "neofetch",
            Command::Projects => "projects",
            Command::Skills => "skills",
            Command::About => "about",
            Command::Contact => "contact",
            Command::Resume => "resume",
            Command::History => "history",
        }
    }

    /// Run this command's handler
    pub fn execute(self, args: &[&str], ctx: &mut HandlerContext<'_>) -> HandlerOutcome {
        match self {
            Command::Help => help(ctx),
            Command::Clear => clear(ctx),
            Command::Echo => echo(args, ctx),
            Command::Whoami => whoami(ctx),
            Command::Date => date(ctx),
            Command::Uname => uname(args, ctx),
            Command::Banner => banner(ctx),
            Command::Exit => exit(ctx),
            Command::Reboot => reboot(ctx),
            Command::Neofetch => neofetch(ctx),
            Command::Projects => projects(ctx),
            Command::Skills => skills(ctx),
            Command::About => about(ctx),
            Command::Contact => contact(ctx),
            Command::Resume => resume(ctx),
            Command::History => history(ctx),
        }
    }
}

/// The registry surface: name lookup and stable enumeration
///
/// The mapping is immutable and case-sensitive; dispatch lowercases the
/// first token before lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandRegistry;

impl CommandRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Find a command by its exact registered name
    pub fn lookup(&self, name: &str) -> Option<Command> {
        Command::ALL.iter().copied().find(|cmd| cmd.name() == name)
    }

    /// All registered names, in enumeration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        Command::ALL.iter().map(|cmd| cmd.name())
    }
}

// === Handlers ===

fn help(ctx: &mut HandlerContext<'_>) -> HandlerOutcome {
    let lines = [
        "Available Commands",
        "",
        "SYSTEM:",
        "  clear                  - Clear the terminal",
        "  echo [text]            - Display text",
        "  date                   - Display the current date and time",
        "  whoami                 - Display the current user",
        "  uname [-a]             - Display system information",
        "  reboot                 - Restart the terminal",
        "",
        "PORTFOLIO:",
        "  projects               - List all projects",
        "  skills                 - Display technical skills",
        "  about                  - Display the about text",
        "  contact                - Display contact information",
        "  resume                 - View resume",
        "",
        "OTHER:",
        "  help                   - Show this help message",
        "  banner                 - Display the welcome banner",
        "  neofetch               - Display system information",
        "  history                - Show command history",
        "  exit                   - Exit the terminal",
        "",
        "TIP: Use arrow up/down keys for command history.",
    ];
    for line in lines {
        ctx.renderer.write_line(line);
    }
    ctx.reprompt();
    HandlerOutcome::Done
}

fn clear(ctx: &mut HandlerContext<'_>) -> HandlerOutcome {
    ctx.renderer.clear_all();
    ctx.reprompt();
    HandlerOutcome::Done
}

fn echo(args: &[&str], ctx: &mut HandlerContext<'_>) -> HandlerOutcome {
    ctx.renderer.write_line(&args.join(" "));
    ctx.reprompt();
    HandlerOutcome::Done
}

fn whoami(ctx: &mut HandlerContext<'_>) -> HandlerOutcome {
    let user = ctx.user.to_string();
    ctx.renderer.write_line(&user);
    ctx.reprompt();
    HandlerOutcome::Done
}

fn date(ctx: &mut HandlerContext<'_>) -> HandlerOutcome {
    let now = chrono::Local::now().format("%a %b %e %H:%M:%S %Y %z").to_string();
    ctx.renderer.write_line(&now);
    ctx.reprompt();
    HandlerOutcome::Done
}

fn uname(args: &[&str], ctx: &mut HandlerContext<'_>) -> HandlerOutcome {
    let text = if args.contains(&"-a") { UNAME_ALL } else { UNAME };
    ctx.renderer.write_line(text);
    ctx.reprompt();
    HandlerOutcome::Done
}

/// Write the banner block without a trailing prompt; shared with session start
pub fn write_banner(content: &Content, renderer: &mut dyn Renderer) {
    for line in &content.banner_art {
        renderer.write_line(&ansi::styled(ansi::CYAN, line));
    }
    renderer.write_line("");
    renderer.write_line(&ansi::styled(ansi::BOLD_GREEN, &content.welcome));
    renderer.write_line(&format!(
        "Type {} to see available commands.",
        ansi::styled(ansi::BOLD_BLUE, "help")
    ));
}

fn banner(ctx: &mut HandlerContext<'_>) -> HandlerOutcome {
    write_banner(ctx.content, ctx.renderer);
    ctx.reprompt();
    HandlerOutcome::Done
}

fn exit(ctx: &mut HandlerContext<'_>) -> HandlerOutcome {
    ctx.renderer.write_line("Goodbye! Thanks for visiting.");
    ctx.renderer.write_line("Session ended.");
    HandlerOutcome::ScheduleRestart(RestartKind::Exit)
}

fn reboot(ctx: &mut HandlerContext<'_>) -> HandlerOutcome {
    ctx.renderer.write_line("Rebooting system...");
    HandlerOutcome::ScheduleRestart(RestartKind::Reboot)
}

/// One row of eight colored blocks; `bright` selects the high-intensity set
fn color_block_row(bright: bool) -> String {
    let mut row = String::new();
    for code in 30..=37 {
        if bright {
            row.push_str(&format!("\x1b[1;{}m\u{2588}\u{2588}\u{2588}", code));
        } else {
            row.push_str(&format!("\x1b[{}m\u{2588}\u{2588}\u{2588}", code));
        }
    }
    row.push_str(ansi::RESET);
    row
}

fn neofetch(ctx: &mut HandlerContext<'_>) -> HandlerOutcome {
    for line in &ctx.content.banner_art {
        ctx.renderer.write_line(&ansi::styled(ansi::CYAN, line));
    }
    ctx.renderer.write_line("");
    ctx.renderer.write_line(&color_block_row(false));
    ctx.renderer.write_line(&color_block_row(true));
    ctx.renderer.write_line("");

    let header = format!("{}@{}", ctx.user, ctx.host);
    let rule = "-".repeat(header.chars().count());
    ctx.renderer
        .write_line(&ansi::styled(ansi::BOLD_CYAN, &header));
    ctx.renderer.write_line(&ansi::styled(ansi::BOLD_CYAN, &rule));
    let rows: Vec<String> = ctx
        .content
        .system_info
        .iter()
        .map(|entry| {
            format!(
                "{} {}",
                ansi::styled(ansi::BOLD_YELLOW, &format!("{}:", entry.label)),
                entry.value
            )
        })
        .collect();
    for row in rows {
        ctx.renderer.write_line(&row);
    }
    let user_row = format!("{} {}", ansi::styled(ansi::BOLD_YELLOW, "User:"), ctx.user);
    ctx.renderer.write_line(&user_row);
    ctx.reprompt();
    HandlerOutcome::Done
}

fn projects(ctx: &mut HandlerContext<'_>) -> HandlerOutcome {
    ctx.renderer.write_line("Projects");
    ctx.renderer.write_line("");
    let body = ctx.content.projects.clone();
    ctx.renderer.write_line(&body);
    ctx.reprompt();
    HandlerOutcome::Done
}

fn skills(ctx: &mut HandlerContext<'_>) -> HandlerOutcome {
    ctx.renderer.write_line("Technical Skills");
    ctx.renderer.write_line("");
    let categories = ctx.content.skills.clone();
    for category in &categories {
        ctx.renderer.write_line(&format!("{}:", category.name));
        for item in &category.items {
            ctx.renderer.write_line(&format!("  * {}", item));
        }
        ctx.renderer.write_line("");
    }
    ctx.reprompt();
    HandlerOutcome::Done
}

fn about(ctx: &mut HandlerContext<'_>) -> HandlerOutcome {
    ctx.renderer.write_line("About");
    ctx.renderer.write_line("");
    let body = ctx.content.about.clone();
    ctx.renderer.write_line(&body);
    ctx.reprompt();
    HandlerOutcome::Done
}

fn contact(ctx: &mut HandlerContext<'_>) -> HandlerOutcome {
    ctx.renderer.write_line("Contact Information");
    ctx.renderer.write_line("");
    let entries = ctx.content.contact.clone();
    for entry in &entries {
        ctx.renderer
            .write_line(&format!("{:<10} {}", format!("{}:", entry.label), entry.value));
    }
    ctx.reprompt();
    HandlerOutcome::Done
}

fn resume(ctx: &mut HandlerContext<'_>) -> HandlerOutcome {
    ctx.renderer.write_line("Resume");
    ctx.renderer.write_line("");
    let body = ctx.content.resume.clone();
    ctx.renderer.write_line(&body);
    ctx.reprompt();
    HandlerOutcome::Done
}

fn history(ctx: &mut HandlerContext<'_>) -> HandlerOutcome {
    let rows: Vec<String> = ctx
        .history
        .entries()
        .enumerate()
        .map(|(i, entry)| format!("{}  {}", i + 1, entry))
        .collect();
    for row in rows {
        ctx.renderer.write_line(&row);
    }
    ctx.reprompt();
    HandlerOutcome::Done
}
