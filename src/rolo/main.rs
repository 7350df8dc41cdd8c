use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use rolo::api::{Action, DirectoryApi};
use rolo::config::RoloConfig;
use rolo::directory::Filter;
use rolo::error::{Result, RoloError};
use rolo::index::ContactSelector;
use rolo::model::ContactForm;
use rolo::seed;
use rolo::store::memory::InMemoryStore;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

mod args;
mod cli;

use args::{Cli, SessionCommand, SessionLine};
use cli::render;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct Session {
    api: DirectoryApi<InMemoryStore>,
    config: RoloConfig,
    use_color: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = load_config()?;
    let contacts = if cli.empty {
        Vec::new()
    } else if let Some(path) = &cli.contacts {
        seed::load_contacts(path)?
    } else if config.demo_seed {
        seed::demo_contacts()
    } else {
        Vec::new()
    };

    let use_color = !cli.no_color && console::Term::stdout().features().colors_supported();
    let api = DirectoryApi::new(InMemoryStore::seeded(contacts));
    let mut session = Session {
        api,
        config,
        use_color,
    };

    // Initial render, the page-load equivalent.
    handle_list(&mut session)?;
    repl(&mut session)
}

fn load_config() -> Result<RoloConfig> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    if cwd.join("rolo.json").exists() {
        return RoloConfig::load(&cwd);
    }
    match ProjectDirs::from("com", "rolo", "rolo") {
        Some(dirs) => RoloConfig::load(dirs.config_dir()),
        None => Ok(RoloConfig::default()),
    }
}

fn repl(session: &mut Session) -> Result<()> {
    let interactive = console::user_attended();
    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        if interactive {
            print!("rolo> ");
            std::io::stdout().flush()?;
        }
        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let words = match shell_words::split(trimmed) {
            Ok(words) => words,
            Err(e) => {
                println!("{}", e.to_string().red());
                continue;
            }
        };
        let parsed = match SessionLine::try_parse_from(&words) {
            Ok(parsed) => parsed,
            Err(e) => {
                // clap's own output covers help and usage errors.
                let _ = e.print();
                continue;
            }
        };
        if matches!(parsed.command, SessionCommand::Quit) {
            break;
        }
        // User-level errors end the command, never the session.
        if let Err(e) = dispatch(session, parsed.command) {
            println!("{}", e.to_string().red());
        }
    }
    Ok(())
}

fn dispatch(session: &mut Session, command: SessionCommand) -> Result<()> {
    match command {
        SessionCommand::List => handle_list(session),
        SessionCommand::Show { selector, edit } => handle_show(session, &selector, edit),
        SessionCommand::Add { fields } => handle_add(session, &fields),
        SessionCommand::Edit { selector, fields } => handle_edit(session, &selector, &fields),
        SessionCommand::Delete { selector } => handle_delete(session, &selector),
        SessionCommand::Filter { value } => handle_filter(session, &value),
        SessionCommand::Kinds => handle_kinds(session),
        SessionCommand::Goto { fragment } => handle_goto(session, &fragment),
        SessionCommand::Quit => Ok(()),
    }
}

fn handle_list(session: &mut Session) -> Result<()> {
    let result = session.api.update(Action::List)?;
    print_list(session, &result);
    Ok(())
}

fn handle_show(session: &mut Session, selector: &str, edit: bool) -> Result<()> {
    let parsed = parse_selector(selector)?;
    let action = if edit {
        Action::ShowEditForm(parsed)
    } else {
        Action::Show(parsed)
    };
    let result = session.api.update(action)?;
    for contact in &result.affected {
        let rendered = if edit {
            render::render_edit_form(contact, selector, session.use_color)
        } else {
            render::render_card(contact, session.use_color)
        };
        println!("{}", rendered);
    }
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_add(session: &mut Session, fields: &[String]) -> Result<()> {
    let form = parse_form(fields)?;
    let result = session.api.update(Action::Add(form))?;
    render::print_messages(&result.messages);
    print_list(session, &result);
    Ok(())
}

fn handle_edit(session: &mut Session, selector: &str, fields: &[String]) -> Result<()> {
    let parsed = parse_selector(selector)?;
    let form = parse_form(fields)?;
    let result = session.api.update(Action::Edit(parsed, form))?;
    render::print_messages(&result.messages);
    for contact in &result.affected {
        println!("{}", render::render_card(contact, session.use_color));
    }
    Ok(())
}

fn handle_delete(session: &mut Session, selector: &str) -> Result<()> {
    let parsed = parse_selector(selector)?;
    let result = session.api.update(Action::Delete(parsed))?;
    render::print_messages(&result.messages);
    print_list(session, &result);
    Ok(())
}

fn handle_filter(session: &mut Session, value: &str) -> Result<()> {
    let result = session.api.update(Action::SetFilter(Filter::parse(value)))?;
    print_list(session, &result);
    Ok(())
}

fn handle_kinds(session: &mut Session) -> Result<()> {
    let result = session.api.update(Action::Kinds)?;
    let filter = session.api.filter().clone();
    println!(
        "{}",
        render::render_kinds(&result.kinds, &filter, session.use_color)
    );
    Ok(())
}

fn handle_goto(session: &mut Session, fragment: &str) -> Result<()> {
    let result = session.api.update(Action::Goto(fragment.to_string()))?;
    render::print_messages(&result.messages);
    print_list(session, &result);
    Ok(())
}

fn print_list(session: &Session, result: &rolo::api::CmdResult) {
    let filter = result
        .filter
        .clone()
        .unwrap_or_else(|| session.api.filter().clone());
    println!(
        "{}",
        render::render_list(
            &result.listed,
            &result.kinds,
            &filter,
            session.config.line_width,
            session.use_color,
        )
    );
}

fn parse_selector(input: &str) -> Result<ContactSelector> {
    ContactSelector::from_str(input).map_err(RoloError::Api)
}

/// Scrapes `field=value` tokens into a form. A key present with an empty
/// value means "blank field", which edit treats as clearing.
fn parse_form(fields: &[String]) -> Result<ContactForm> {
    let mut form = ContactForm::default();
    for field in fields {
        let (key, value) = field
            .split_once('=')
            .ok_or_else(|| RoloError::Api(format!("Expected field=value, got '{}'", field)))?;
        let value = Some(value.to_string());
        match key {
            "name" => form.name = value,
            "address" => form.address = value,
            "tel" | "phone" => form.tel = value,
            "email" => form.email = value,
            "type" | "kind" => form.kind = value,
            "photo" => form.photo = value,
            _ => {
                return Err(RoloError::Api(format!("Unknown field '{}'", key)));
            }
        }
    }
    Ok(form)
}
