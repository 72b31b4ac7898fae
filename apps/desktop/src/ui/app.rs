//! Line-oriented rendering of the sign-in and home screens, plus the input loop.

use anyhow::{Context, Result};
use client_core::{CredentialVerifier, ProductApp};
use shared::domain::{Product, Screen};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};

use crate::{
    controller::{
        events::{
            AddProductForm, SignInForm, UiAction, UiCommand, UiError, UiErrorContext, UiEvent,
        },
        orchestration::dispatch,
    },
    ui::password::{PasswordEntry, PasswordInput},
};

const PROMPT: &str = "> ";

pub fn render_screen<V: CredentialVerifier>(app: &ProductApp<V>) -> String {
    match app.screen() {
        Screen::SignIn => "Sign In\n  controls: sign-in, help, quit\n".to_string(),
        Screen::Home => {
            let mut out = format!("{}    [log-out]\n", app.session().greeting());
            out.push_str("Product List\n");
            render_products(&mut out, app.products());
            out.push_str("Add Product    [add]\n");
            out
        }
    }
}

fn render_products(out: &mut String, products: &[Product]) {
    if products.is_empty() {
        out.push_str("  (no products)\n");
        return;
    }
    for product in products {
        out.push_str(&format!("  [{}] {}\n", product.id, product.name));
        for line in product.description.lines() {
            out.push_str(&format!("      {line}\n"));
        }
    }
}

pub fn render_event(event: &UiEvent) -> String {
    match event {
        UiEvent::SignedIn(user) => format!("signed in as {user}\n"),
        UiEvent::SignedOut => "signed out\n".to_string(),
        UiEvent::ProductAdded(product) => {
            format!("added [{}] {}\n", product.id, product.name)
        }
        UiEvent::ProductDeleted(id) => format!("deleted [{id}]\n"),
        UiEvent::NothingDeleted(_) => String::new(),
        UiEvent::Error(err) => format!("error: {}\n", err.message()),
    }
}

pub fn help_text(screen: Screen) -> &'static str {
    match screen {
        Screen::SignIn => {
            "sign-in      submit the sign-in form\n\
             show         print the current state as JSON\n\
             quit         exit\n"
        }
        Screen::Home => {
            "add          submit the add-product form\n\
             delete <id>  delete a product\n\
             log-out      return to sign-in\n\
             show         print the current state as JSON\n\
             quit         exit\n"
        }
    }
}

fn is_available(command: &UiCommand, screen: Screen) -> bool {
    match command {
        UiCommand::SignIn => screen == Screen::SignIn,
        UiCommand::AddProduct | UiCommand::DeleteProduct { .. } | UiCommand::LogOut => {
            screen == Screen::Home
        }
        UiCommand::Show | UiCommand::Help | UiCommand::Quit | UiCommand::Unknown(_) => true,
    }
}

enum SignInRead {
    Submitted(SignInForm),
    Cancelled,
    EndOfInput,
}

struct Terminal<R, W, P> {
    lines: Lines<R>,
    output: W,
    password: P,
}

impl<R, W, P> Terminal<R, W, P>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    P: PasswordInput,
{
    async fn write(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .await
            .context("failed to write to terminal")?;
        self.output.flush().await.context("failed to flush terminal")
    }

    async fn read_line(&mut self) -> Result<Option<String>> {
        self.lines
            .next_line()
            .await
            .context("failed to read terminal input")
    }

    async fn ask(&mut self, label: &str) -> Result<Option<String>> {
        self.write(label).await?;
        self.read_line().await
    }

    async fn read_sign_in_form(&mut self) -> Result<SignInRead> {
        let Some(username) = self.ask("Username: ").await? else {
            return Ok(SignInRead::EndOfInput);
        };
        self.write("Password: ").await?;
        let password = match self.password.read_password()? {
            PasswordEntry::Entered(password) => {
                self.write("\n").await?;
                password
            }
            PasswordEntry::Cancelled => {
                self.write("\n").await?;
                return Ok(SignInRead::Cancelled);
            }
            PasswordEntry::Unavailable => match self.read_line().await? {
                Some(password) => password,
                None => return Ok(SignInRead::EndOfInput),
            },
        };
        Ok(SignInRead::Submitted(SignInForm { username, password }))
    }

    /// Description lines run until a blank line or end of input.
    async fn read_add_product_form(&mut self) -> Result<Option<AddProductForm>> {
        let Some(name) = self.ask("Name: ").await? else {
            return Ok(None);
        };
        self.write("Description (end with an empty line):\n").await?;
        let mut description_lines = Vec::new();
        while let Some(line) = self.read_line().await? {
            if line.is_empty() {
                break;
            }
            description_lines.push(line);
        }
        Ok(Some(AddProductForm {
            name,
            description: description_lines.join("\n"),
        }))
    }
}

/// Runs until `quit` or end of input. Every event is handled before the next
/// line is read.
pub async fn run<V, R, W, P>(
    app: &mut ProductApp<V>,
    input: R,
    output: W,
    password: P,
) -> Result<()>
where
    V: CredentialVerifier,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    P: PasswordInput,
{
    let mut term = Terminal {
        lines: input.lines(),
        output,
        password,
    };
    term.write(&render_screen(app)).await?;

    loop {
        let Some(line) = term.ask(PROMPT).await? else {
            break;
        };
        let Some(command) = UiCommand::parse(&line) else {
            continue;
        };

        if !is_available(&command, app.screen()) {
            let err = UiError::invalid_input(
                UiErrorContext::General,
                format!("'{}' is not available on this screen", command.word()),
            );
            term.write(&render_event(&UiEvent::Error(err))).await?;
            continue;
        }

        let action = match command {
            UiCommand::Quit => break,
            UiCommand::Help => {
                term.write(help_text(app.screen())).await?;
                continue;
            }
            UiCommand::Show => {
                let json = serde_json::to_string_pretty(&app.snapshot())
                    .context("failed to serialize app snapshot")?;
                term.write(&format!("{json}\n")).await?;
                continue;
            }
            UiCommand::Unknown(word) => {
                term.write(&format!("unknown command '{word}'; type 'help'\n"))
                    .await?;
                continue;
            }
            UiCommand::SignIn => match term.read_sign_in_form().await? {
                SignInRead::Submitted(form) => UiAction::SubmitSignIn(form),
                SignInRead::Cancelled => {
                    term.write("sign-in cancelled\n").await?;
                    continue;
                }
                SignInRead::EndOfInput => break,
            },
            UiCommand::AddProduct => match term.read_add_product_form().await? {
                Some(form) => UiAction::SubmitAddProduct(form),
                None => break,
            },
            UiCommand::DeleteProduct { raw_id } => UiAction::DeleteProduct { raw_id },
            UiCommand::LogOut => UiAction::LogOut,
        };

        let event = dispatch(app, action);
        if let UiEvent::Error(err) = &event {
            tracing::debug!(
                context = ?err.context(),
                category = ?err.category(),
                "ui action failed"
            );
        }
        term.write(&render_event(&event)).await?;
        let rerender = match &event {
            UiEvent::Error(err) => err.requires_reauth(),
            UiEvent::NothingDeleted(_) => false,
            _ => true,
        };
        if rerender {
            term.write(&render_screen(app)).await?;
        }
    }

    tracing::debug!("terminal input closed");
    Ok(())
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
