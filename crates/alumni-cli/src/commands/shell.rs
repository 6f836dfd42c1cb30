use std::io::{self, BufRead, Write};

use alumni_core::entities::ProfileFields;
use alumni_core::enums::NavTarget;
use clap::Parser;

use crate::cli::GlobalFlags;
use crate::cli::shell_commands::{ShellCommand, ShellLine};
use crate::context::{AppContext, AppError};
use crate::messages;
use crate::output::{render, render_alumni};
use crate::views::{AlumniListView, EventsView, ProfileView};

const PROMPT: &str = "alumni> ";
const CLEAR_FIELD: &str = "-";
const NOT_SIGNED_IN: &str = "You are not signed in.";

/// Handle `alumni shell` on the process's stdin/stdout.
pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(ctx, flags, &mut stdin.lock(), &mut stdout.lock())
}

/// Read one event per line until `quit` or end of input.
///
/// Recoverable failures are printed as banners and the loop continues;
/// storage failures end the session.
pub fn run<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    flags: &GlobalFlags,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    if !flags.quiet {
        writeln!(out, "Alumni directory. Type `help` for commands, `quit` to leave.")?;
    }

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            break;
        };
        let words = line.split_whitespace().collect::<Vec<_>>();
        if words.is_empty() {
            continue;
        }

        let command = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(error) => {
                write!(out, "{}", error.render())?;
                continue;
            }
        };
        if matches!(command, ShellCommand::Quit) {
            break;
        }
        handle_event(command, ctx, flags, input, out)?;
    }

    writeln!(out)?;
    Ok(())
}

fn handle_event<R: BufRead, W: Write>(
    command: ShellCommand,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        ShellCommand::Register { email, password } => {
            let email = arg_or_prompt(email, "Email", input, out)?;
            let password = arg_or_prompt(password, "Password", input, out)?;
            match ctx.register(&email, &password).map(|_| ()) {
                Ok(()) => {
                    writeln!(out, "{}", messages::REGISTERED)?;
                    render_current(ctx, flags, out)
                }
                Err(error) => banner(error, out),
            }
        }
        ShellCommand::Login { email, password } => {
            let email = arg_or_prompt(email, "Email", input, out)?;
            let password = arg_or_prompt(password, "Password", input, out)?;
            match ctx.login(&email, &password).map(|_| ()) {
                Ok(()) => {
                    writeln!(out, "{}", messages::LOGGED_IN)?;
                    render_current(ctx, flags, out)?;
                    ctx.navigate(NavTarget::Alumni);
                    render_current(ctx, flags, out)
                }
                Err(error) => banner(error, out),
            }
        }
        ShellCommand::Logout => {
            let message = if ctx.logout() {
                messages::LOGGED_OUT
            } else {
                NOT_SIGNED_IN
            };
            writeln!(out, "{message}")?;
            Ok(())
        }
        ShellCommand::Profile => {
            ctx.navigate(NavTarget::Profile);
            render_current(ctx, flags, out)
        }
        ShellCommand::Alumni => {
            ctx.navigate(NavTarget::Alumni);
            render_current(ctx, flags, out)
        }
        ShellCommand::Events => {
            ctx.navigate(NavTarget::Events);
            render_current(ctx, flags, out)
        }
        ShellCommand::Edit => edit_profile(ctx, flags, input, out),
        ShellCommand::Quit => Ok(()),
    }
}

/// Prompt for every editable field, pre-filled with the saved value.
///
/// Enter keeps the shown value; `-` clears it. Input ending before the
/// last field saves nothing.
fn edit_profile<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    flags: &GlobalFlags,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    let Some(session) = ctx.session() else {
        return banner(AppError::NotSignedIn, out);
    };
    let current = session
        .profile
        .as_ref()
        .map(alumni_core::entities::Profile::fields)
        .unwrap_or_default();

    let Some(fields) = read_fields(&current, input, out)? else {
        writeln!(out)?;
        writeln!(out, "{}", messages::EDIT_CANCELLED)?;
        return Ok(());
    };

    match ctx.update_profile(fields).map(|_| ()) {
        Ok(()) => {
            writeln!(out, "{}", messages::PROFILE_UPDATED)?;
            ctx.navigate(NavTarget::Profile);
            render_current(ctx, flags, out)
        }
        Err(error) => banner(error, out),
    }
}

/// Project and print whichever view is selected.
fn render_current<W: Write>(ctx: &AppContext, flags: &GlobalFlags, out: &mut W) -> anyhow::Result<()> {
    let rendered = match ctx.view() {
        NavTarget::Profile => render(
            &ProfileView::project(ctx.session(), ctx.avatar_style()),
            flags.format,
        )?,
        NavTarget::Alumni => render_alumni(
            &AlumniListView::project(
                &ctx.alumni(),
                ctx.avatar_style(),
                ctx.list_limit(flags.limit),
            ),
            flags.format,
        )?,
        NavTarget::Events => render(&EventsView::project(), flags.format)?,
    };
    writeln!(out, "{rendered}")?;
    Ok(())
}

fn banner<W: Write>(error: AppError, out: &mut W) -> anyhow::Result<()> {
    match error.user_message() {
        Some(message) => {
            writeln!(out, "{message}")?;
            Ok(())
        }
        None => Err(anyhow::Error::new(error)),
    }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn arg_or_prompt<R: BufRead, W: Write>(
    value: Option<String>,
    label: &str,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    write!(out, "{label}: ")?;
    out.flush()?;
    Ok(read_line(input)?.unwrap_or_default())
}

/// `None` when input ends before the last field.
fn read_fields<R: BufRead, W: Write>(
    current: &ProfileFields,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<Option<ProfileFields>> {
    let mut ask = |label: &str, value: &str| prefilled(label, value, input, out);
    let Some(name) = ask("Name", &current.name)? else {
        return Ok(None);
    };
    let Some(institution) = ask("Institution", &current.institution)? else {
        return Ok(None);
    };
    let Some(graduation_year) = ask("Graduation year", &current.graduation_year)? else {
        return Ok(None);
    };
    let Some(current_role) = ask("Current role", &current.current_role)? else {
        return Ok(None);
    };
    let Some(linkedin_url) = ask("LinkedIn URL", &current.linkedin_url)? else {
        return Ok(None);
    };
    let Some(github_url) = ask("GitHub URL", &current.github_url)? else {
        return Ok(None);
    };
    Ok(Some(ProfileFields {
        name,
        institution,
        graduation_year,
        current_role,
        linkedin_url,
        github_url,
    }))
}

fn prefilled<R: BufRead, W: Write>(
    label: &str,
    current: &str,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<Option<String>> {
    write!(out, "{label} [{current}]: ")?;
    out.flush()?;
    let Some(entered) = read_line(input)? else {
        return Ok(None);
    };
    Ok(Some(match entered.trim() {
        "" => current.to_string(),
        CLEAR_FIELD => String::new(),
        value => value.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::rc::Rc;

    use alumni_config::AlumniConfig;
    use alumni_store::{FileBackend, MemoryBackend, StorageBackend};

    use super::*;
    use crate::cli::OutputFormat;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            limit: None,
            quiet: true,
            data_dir: None,
        }
    }

    fn context_on(backend: Rc<dyn StorageBackend>) -> AppContext {
        AppContext::with_backend(AlumniConfig::default(), &backend).expect("context")
    }

    fn script(ctx: &mut AppContext, lines: &str) -> String {
        let mut input = Cursor::new(lines.as_bytes().to_vec());
        let mut out = Vec::new();
        run(ctx, &flags(), &mut input, &mut out).expect("shell run");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn register_edit_and_browse() {
        let mut ctx = context_on(Rc::new(MemoryBackend::new()));
        let out = script(
            &mut ctx,
            "register jane.doe@x.com pw\n\
             edit\nAda Lovelace\nUniversity of London\n1833\n\n\nhttps://github.com/ada\n\
             alumni\n\
             events\n\
             quit\n\
             logout\n",
        );

        assert!(out.contains("Account created and profile initialized!"));
        assert!(out.contains("Welcome, jane.doe!"));
        assert!(out.contains("Name [jane.doe]: "));
        assert!(out.contains("Profile updated successfully!"));
        assert!(out.contains("Welcome, Ada Lovelace!"));
        assert!(out.contains("text=AL"));
        assert!(out.contains("\"githubUrl\":\"https://github.com/ada\""));
        assert!(out.contains("No upcoming events yet."));
        assert!(!out.contains("Logged out successfully."), "quit stops reading");

        let profile = ctx
            .session()
            .and_then(|s| s.profile.clone())
            .expect("profile");
        assert_eq!(profile.institution, "University of London");
        assert_eq!(profile.current_role, "");
        assert_eq!(ctx.view(), NavTarget::Events);
    }

    #[test]
    fn edit_keeps_and_clears_prefilled_values() {
        let mut ctx = context_on(Rc::new(MemoryBackend::new()));
        ctx.register("ada@x.com", "pw").expect("register");
        ctx.update_profile(ProfileFields {
            name: "Ada Lovelace".into(),
            institution: "University of London".into(),
            current_role: "Analyst".into(),
            ..ProfileFields::default()
        })
        .expect("update");

        script(&mut ctx, "edit\n\n\n\n-\n\n\n");

        let profile = ctx
            .session()
            .and_then(|s| s.profile.clone())
            .expect("profile");
        assert_eq!(profile.name, "Ada Lovelace");
        assert_eq!(profile.institution, "University of London");
        assert_eq!(profile.current_role, "");
    }

    #[test]
    fn input_ending_mid_edit_saves_nothing() {
        let mut ctx = context_on(Rc::new(MemoryBackend::new()));
        ctx.register("ada@x.com", "pw").expect("register");
        let out = script(&mut ctx, "edit\nNew Name");

        assert!(out.contains("Institution []: "));
        assert!(out.contains("Edit cancelled; profile not saved."));
        assert!(!out.contains("Profile updated successfully!"));
        let profile = ctx
            .session()
            .and_then(|s| s.profile.clone())
            .expect("profile");
        assert_eq!(profile.name, "ada");
        assert_eq!(profile.institution, "");
    }

    #[test]
    fn failures_are_banners_and_the_loop_continues() {
        let mut ctx = context_on(Rc::new(MemoryBackend::new()));
        let out = script(
            &mut ctx,
            "edit\n\
             login\njane@x.com\n \n\
             register jane@x.com pw\n\
             register jane@x.com other\n\
             logout\n\
             logout\n\
             login jane@x.com wrong\n\
             frobnicate\n\
             login jane@x.com pw\n",
        );

        assert!(out.contains("Please log in to update your profile."));
        assert!(out.contains("Please enter both email and password."));
        assert!(out.contains("Email is already in use."));
        assert!(out.contains("Logged out successfully."));
        assert!(out.contains("You are not signed in."));
        assert!(out.contains("Invalid email or password."));
        assert!(out.contains("Logged in successfully!"));
        assert!(ctx.session().is_some());
    }

    #[test]
    fn session_survives_only_in_memory() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let backend: Rc<dyn StorageBackend> =
            Rc::new(FileBackend::new(tmp.path()).expect("file backend"));

        let mut first = context_on(Rc::clone(&backend));
        script(&mut first, "register grace@x.com pw\n");
        assert!(first.session().is_some());

        let mut second = context_on(Rc::clone(&backend));
        assert!(second.session().is_none());
        let out = script(&mut second, "profile\nlogin grace@x.com pw\n");
        assert!(out.contains("User ID: Not signed in"));
        assert!(out.contains("Welcome, grace!"));
        assert!(out.contains("\"total\":1"));
    }
}
