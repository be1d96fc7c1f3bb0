//! Route table and navigation handlers.

use anyhow::Result;
use evd_core::app::App;
use evd_core::command::Reply;
use evd_core::router::ROUTES;

use super::print_reply;

pub fn list(json: bool) -> Result<()> {
    print_reply(&Reply::Routes(ROUTES.to_vec()), json)
}

pub fn navigate(app: &mut App, path: &str, json: bool) -> Result<()> {
    let navigation = app.navigate(path)?;
    tracing::debug!(
        to = %navigation.to.path,
        href = %app.router.href(&navigation.to.path),
        "navigation finished"
    );
    print_reply(&Reply::Navigation(navigation), json)
}
