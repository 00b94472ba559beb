//! Login, logout and whoami.

use super::Console;
use crate::errors::ConsoleError;
use crate::render;

pub async fn login(console: &mut Console, email: &str, password: &str) -> Result<(), ConsoleError> {
    let session = console.session.login(&console.client, email, password).await?;
    let token = session.token.clone();

    if console.json {
        println!("{}", render::json(session)?);
    } else {
        println!("Logged in as {} <{}>", session.admin.name, session.admin.email);
    }

    console.client.set_token(Some(token));
    Ok(())
}

pub async fn logout(console: &mut Console) -> Result<(), ConsoleError> {
    let was_logged_in = console.session.is_authenticated();
    console.client.set_token(None);
    console.session.logout().await?;

    if was_logged_in {
        println!("Logged out");
    } else {
        println!("No active session");
    }
    Ok(())
}

pub fn whoami(console: &Console) -> Result<(), ConsoleError> {
    let Some(session) = console.session.current() else {
        return Err(ConsoleError::Unauthorized("Not logged in".to_string()));
    };

    if console.json {
        println!("{}", render::json(session)?);
    } else {
        println!(
            "{} <{}> (id {}), logged in {} against {}",
            session.admin.name,
            session.admin.email,
            session.admin.id,
            session.created_at.format("%Y-%m-%d %H:%M UTC"),
            console.client.base_url()
        );
    }
    Ok(())
}
