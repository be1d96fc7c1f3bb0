//! Login handling.

use anyhow::{Result, bail};
use evd_core::app::App;
use evd_core::auth::AuthResult;
use evd_core::command::Reply;

use super::print_reply;

/// Logs in with `--email/--password` when both are given.
pub fn login_from_args(app: &mut App, email: Option<&str>, password: Option<&str>) -> Result<()> {
    match (email, password) {
        (None, None) => Ok(()),
        (Some(email), Some(password)) => {
            app.auth.login(email, password)?;
            Ok(())
        }
        (Some(_), None) => bail!("--email requires --password"),
        (None, Some(_)) => bail!("--password requires --email"),
    }
}

pub fn login(app: &mut App, email: &str, password: &str, json: bool) -> Result<()> {
    let result = app.auth.login(email, password).map(|_| ());
    if json {
        print_reply(&Reply::Auth(AuthResult::from(&result)), true)?;
    }
    result?;
    if !json {
        print_reply(&Reply::Session(app.auth.session()), false)?;
    }
    Ok(())
}
