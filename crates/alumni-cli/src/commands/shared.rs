use serde::Serialize;

use crate::cli::root_commands::CredentialArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::{AppContext, AppError};
use crate::output::{output, render, render_alumni};
use crate::views::{AlumniListView, ProfileView};

/// Banner plus the views the user lands on after a successful event.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: &'static str,
    pub profile: ProfileView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alumni: Option<AlumniListView>,
}

impl StatusResponse {
    pub fn project(ctx: &AppContext, message: &'static str) -> Self {
        Self {
            message,
            profile: ProfileView::project(ctx.session(), ctx.avatar_style()),
            alumni: None,
        }
    }

    #[must_use]
    pub fn with_alumni(mut self, ctx: &AppContext, limit: usize) -> Self {
        self.alumni = Some(AlumniListView::project(
            &ctx.alumni(),
            ctx.avatar_style(),
            limit,
        ));
        self
    }
}

/// Print a status response; tables get one section per view.
pub fn emit_status(response: &StatusResponse, flags: &GlobalFlags) -> anyhow::Result<()> {
    if flags.format != OutputFormat::Table {
        return output(response, flags.format);
    }
    if !flags.quiet {
        println!("{}\n", response.message);
    }
    println!("{}", render(&response.profile, flags.format)?);
    if let Some(alumni) = &response.alumni {
        println!("\n{}", render_alumni(alumni, flags.format)?);
    }
    Ok(())
}

/// Sign in with one-shot credentials.
pub fn sign_in(ctx: &mut AppContext, credentials: &CredentialArgs) -> anyhow::Result<()> {
    ctx.login(&credentials.email, &credentials.password)
        .map(|_| ())
        .map_err(AppError::into_report)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use alumni_config::AlumniConfig;
    use alumni_store::{MemoryBackend, StorageBackend};

    use super::*;
    use crate::messages;

    fn context() -> AppContext {
        let backend: Rc<dyn StorageBackend> = Rc::new(MemoryBackend::new());
        AppContext::with_backend(AlumniConfig::default(), &backend).expect("context")
    }

    #[test]
    fn status_includes_alumni_only_when_asked() {
        let mut ctx = context();
        ctx.register("jane.doe@x.com", "pw").expect("register");

        let status = StatusResponse::project(&ctx, messages::REGISTERED);
        let json = serde_json::to_value(&status).expect("json");
        assert_eq!(json["message"], "Account created and profile initialized!");
        assert_eq!(json["profile"]["welcome"], "Welcome, jane.doe!");
        assert!(json.get("alumni").is_none());

        let status = status.with_alumni(&ctx, 10);
        let json = serde_json::to_value(&status).expect("json");
        assert_eq!(json["alumni"]["total"], 1);
        assert_eq!(json["alumni"]["cards"][0]["name"], "jane.doe");
    }

    #[test]
    fn sign_in_failure_is_the_banner_text() {
        let mut ctx = context();
        let credentials = CredentialArgs {
            email: "nobody@x.com".into(),
            password: "pw".into(),
        };
        let err = sign_in(&mut ctx, &credentials).expect_err("unknown account");
        assert_eq!(err.to_string(), "Invalid email or password.");
    }
}
