//! Command handlers

use std::io::Write;

use anyhow::{anyhow, bail, Result};
use sysmedic_auth::try_decode;
use sysmedic_suggestions::{MedicalSuggestionRequest, MedicalSuggestions};

use crate::cli::Command;
use crate::App;

/// Run one command, writing its output to `out`
pub async fn execute<W: Write>(app: &App, command: Command, out: &mut W) -> Result<()> {
    match command {
        Command::Login { token } => login(app, token.trim()),
        Command::Logout => {
            app.tokens.clear();
            app.notifier.success("Logged out");
            Ok(())
        }
        Command::Status => status(app, out),
        Command::Whoami => whoami(app, out),
        Command::Suggest {
            symptoms,
            specialty,
            age,
            gender,
            findings,
            vitals,
        } => {
            let mut request = MedicalSuggestionRequest::new(symptoms, specialty);
            request.patient_age = age;
            request.patient_gender = gender;
            request.current_findings = findings;
            request.vital_signs = vitals;

            let suggestions = app.suggestions.medical_suggestions(request).await?;
            out.write_all(format_suggestions(&suggestions).as_bytes())?;
            app.notifier.success("Suggestions received");
            Ok(())
        }
    }
}

fn login(app: &App, token: &str) -> Result<()> {
    if token.is_empty() {
        bail!("Token must not be empty");
    }

    // The backend is the authority on validity; these are hints only
    match try_decode(token) {
        Ok(_) if app.tokens.is_expired(token) => {
            app.notifier.warning("Token is already expired or has no expiry")
        }
        Ok(_) => {}
        Err(e) => app
            .notifier
            .warning(&format!("Token payload could not be decoded: {}", e)),
    }

    app.tokens.store(token);
    if app.tokens.retrieve().as_deref() != Some(token) {
        bail!("Token could not be persisted");
    }

    app.notifier.success("Logged in");
    Ok(())
}

fn status<W: Write>(app: &App, out: &mut W) -> Result<()> {
    let Some(token) = app.tokens.retrieve() else {
        writeln!(out, "authenticated: no")?;
        return Ok(());
    };

    writeln!(out, "authenticated: yes")?;
    writeln!(
        out,
        "expired: {}",
        if app.tokens.is_expired(&token) { "yes" } else { "no" }
    )?;

    if let Some(expires_at) = app.tokens.decode(&token).and_then(|c| c.expires_at()) {
        writeln!(out, "expires at: {}", expires_at.to_rfc3339())?;
    }

    Ok(())
}

fn whoami<W: Write>(app: &App, out: &mut W) -> Result<()> {
    let had_token = app.tokens.is_authenticated();

    let claims = app.tokens.current_user().ok_or_else(|| {
        if had_token {
            anyhow!("Session expired, please log in again")
        } else {
            anyhow!("Not logged in")
        }
    })?;

    writeln!(out, "{}", serde_json::to_string_pretty(&claims)?)?;
    Ok(())
}

/// Plain-text rendering of suggestions, one section per block
pub fn format_suggestions(suggestions: &MedicalSuggestions) -> String {
    let mut text = String::new();

    for (title, items) in suggestions.sections() {
        text.push_str(title);
        text.push_str(":\n");
        if items.is_empty() {
            text.push_str("  (none)\n");
        }
        for item in items {
            text.push_str("  - ");
            text.push_str(item);
            text.push('\n');
        }
    }

    text
}
